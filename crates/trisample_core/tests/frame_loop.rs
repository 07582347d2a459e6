//! Integration tests for setup ordering and the frame loop
//!
//! A recording backend logs every collaborator call so the tests can check:
//! 1. One-time setup runs exactly once, before the first frame
//! 2. Per-frame calls happen in the documented order
//! 3. The loop stops as soon as the event pump reports termination
//! 4. Uploaded matrices follow the tick sequence

use trisample_core::{
    compose_world, Bindings, EventPump, FrameLoop, Graphics, LoopState, Mat4, RootSignatureDesc,
    CONSTANT_BUFFER_SLOTS, WORLD_CONSTANT_BUFFER_SLOT,
};

// ==================== Recording backend ====================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreateRootSignature,
    CreatePolygon,
    CreateConstantBuffer(u64),
    CreateDescriptorHeap,
    RegisterConstantBuffer(u32),
    Commit,
    BeginFrame,
    SetRootSignature,
    CopyToDevice(Mat4),
    SetDescriptorHeap,
    Draw,
    EndFrame,
}

#[derive(Debug)]
struct MockError(&'static str);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mock failure: {}", self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Default)]
struct RecordingGraphics {
    calls: Vec<Call>,
    fail_commit: bool,
    fail_begin_frame_at: Option<usize>,
    in_frame: bool,
    frames_begun: usize,
}

/// One entry per root signature slot; commit fails while any is empty
struct MockHeap {
    slots: Vec<bool>,
    committed: bool,
}

impl RecordingGraphics {
    fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    fn uploads(&self) -> Vec<Mat4> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::CopyToDevice(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    fn assert_in_frame(&self, what: &str) {
        assert!(self.in_frame, "{} recorded outside begin_frame/end_frame", what);
    }
}

impl Graphics for RecordingGraphics {
    type RootSignature = ();
    type ConstantBuffer = ();
    type DescriptorHeap = MockHeap;
    type Polygon = ();
    type Error = MockError;

    fn create_root_signature(&mut self, _desc: &RootSignatureDesc) -> Result<(), MockError> {
        self.calls.push(Call::CreateRootSignature);
        Ok(())
    }

    fn create_polygon(&mut self, _root_signature: &()) -> Result<(), MockError> {
        self.calls.push(Call::CreatePolygon);
        Ok(())
    }

    fn create_constant_buffer(&mut self, size: u64) -> Result<(), MockError> {
        self.calls.push(Call::CreateConstantBuffer(size));
        Ok(())
    }

    fn create_descriptor_heap(&mut self, _root_signature: &()) -> MockHeap {
        self.calls.push(Call::CreateDescriptorHeap);
        MockHeap {
            slots: vec![false; CONSTANT_BUFFER_SLOTS as usize],
            committed: false,
        }
    }

    fn register_constant_buffer(&mut self, heap: &mut MockHeap, slot: u32, _buffer: &()) {
        self.calls.push(Call::RegisterConstantBuffer(slot));
        let capacity = heap.slots.len();
        let entry = heap
            .slots
            .get_mut(slot as usize)
            .unwrap_or_else(|| panic!("slot b{} out of range (capacity {})", slot, capacity));
        *entry = true;
    }

    fn commit(&mut self, heap: &mut MockHeap) -> Result<(), MockError> {
        self.calls.push(Call::Commit);
        if self.fail_commit {
            return Err(MockError("commit"));
        }
        if heap.slots.contains(&false) {
            return Err(MockError("unregistered slot"));
        }
        heap.committed = true;
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), MockError> {
        assert!(!self.in_frame, "begin_frame called twice without end_frame");
        if self.fail_begin_frame_at == Some(self.frames_begun) {
            return Err(MockError("begin_frame"));
        }
        self.calls.push(Call::BeginFrame);
        self.in_frame = true;
        self.frames_begun += 1;
        Ok(())
    }

    fn set_root_signature(&mut self, _root_signature: &()) {
        self.assert_in_frame("set_root_signature");
        self.calls.push(Call::SetRootSignature);
    }

    fn copy_to_device(&mut self, _buffer: &(), world: &Mat4) {
        self.assert_in_frame("copy_to_device");
        self.calls.push(Call::CopyToDevice(*world));
    }

    fn set_descriptor_heap(&mut self, heap: &MockHeap) {
        self.assert_in_frame("set_descriptor_heap");
        assert!(heap.committed, "descriptor heap bound before commit");
        self.calls.push(Call::SetDescriptorHeap);
    }

    fn draw(&mut self, _polygon: &()) {
        self.assert_in_frame("draw");
        self.calls.push(Call::Draw);
    }

    fn end_frame(&mut self) -> Result<(), MockError> {
        self.assert_in_frame("end_frame");
        self.calls.push(Call::EndFrame);
        self.in_frame = false;
        Ok(())
    }
}

/// Pump that allows a fixed number of frames, then reports termination
struct CountdownPump {
    remaining: u32,
    polls: u32,
}

impl CountdownPump {
    fn new(frames: u32) -> Self {
        Self { remaining: frames, polls: 0 }
    }
}

impl EventPump for CountdownPump {
    fn poll_events(&mut self) -> bool {
        self.polls += 1;
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

fn bound_loop(gfx: &mut RecordingGraphics) -> FrameLoop<RecordingGraphics> {
    let bindings = Bindings::setup(gfx, &RootSignatureDesc::default())
        .expect("Setup should succeed");
    FrameLoop::new(bindings)
}

// ==================== Setup Tests ====================

/// One-time calls happen exactly once, in order, before any frame
/// Every slot the root signature declares gets a buffer before commit
#[test]
fn test_setup_fills_every_constant_buffer_slot() {
    let mut gfx = RecordingGraphics::default();
    let bindings =
        Bindings::setup(&mut gfx, &RootSignatureDesc::default()).expect("Setup should succeed");
    assert!(bindings.descriptor_heap().committed);
    assert!(bindings.descriptor_heap().slots.iter().all(|&filled| filled));

    let registrations = gfx
        .calls
        .iter()
        .filter(|c| matches!(c, Call::RegisterConstantBuffer(_)))
        .count();
    assert_eq!(registrations, CONSTANT_BUFFER_SLOTS as usize);
}

#[test]
fn test_setup_runs_once_before_first_frame() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);
    frame_loop.run(&mut gfx, &mut CountdownPump::new(5)).unwrap();

    let setup = [
        Call::CreateRootSignature,
        Call::CreatePolygon,
        Call::CreateConstantBuffer(64),
        Call::CreateDescriptorHeap,
        Call::RegisterConstantBuffer(WORLD_CONSTANT_BUFFER_SLOT),
        Call::Commit,
    ];
    assert_eq!(&gfx.calls[..setup.len()], &setup[..]);

    for call in &setup {
        assert_eq!(gfx.count(call), 1, "{:?} should run exactly once", call);
    }

    let first_begin = gfx.position(&Call::BeginFrame).expect("At least one frame");
    assert_eq!(first_begin, setup.len());
}

/// A failing setup step propagates and no loop can be built
#[test]
fn test_setup_error_propagates() {
    let mut gfx = RecordingGraphics {
        fail_commit: true,
        ..Default::default()
    };
    let result = Bindings::setup(&mut gfx, &RootSignatureDesc::default());
    let err = result.err().expect("Commit failure should abort setup");
    assert_eq!(err.to_string(), "mock failure: commit");
    assert_eq!(gfx.count(&Call::BeginFrame), 0);
}

// ==================== Frame Tests ====================

/// Each frame issues its calls in the documented order
#[test]
fn test_frame_call_order() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);
    gfx.calls.clear();

    frame_loop.frame(&mut gfx).unwrap();
    frame_loop.frame(&mut gfx).unwrap();

    let expected_frame = |world: Mat4| {
        vec![
            Call::BeginFrame,
            Call::SetRootSignature,
            Call::CopyToDevice(world),
            Call::SetDescriptorHeap,
            Call::Draw,
            Call::EndFrame,
        ]
    };
    let mut expected = expected_frame(compose_world(0, 1));
    expected.extend(expected_frame(compose_world(2, 3)));
    assert_eq!(gfx.calls, expected);
}

/// Two ticks per frame, translation tick first
#[test]
fn test_ticks_advance_twice_per_frame() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);

    let drawn = frame_loop.run(&mut gfx, &mut CountdownPump::new(4)).unwrap();
    assert_eq!(drawn, 4);
    assert_eq!(frame_loop.counter().current(), 8);

    let expected: Vec<Mat4> = (0..4u64).map(|i| compose_world(2 * i, 2 * i + 1)).collect();
    assert_eq!(gfx.uploads(), expected);
}

/// The first frame returns the matrix it uploaded
#[test]
fn test_frame_returns_uploaded_matrix() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);

    let world = frame_loop.frame(&mut gfx).unwrap();
    assert_eq!(gfx.uploads(), vec![world]);
    assert_eq!(frame_loop.state(), LoopState::Running);
    assert_eq!(frame_loop.frames(), 1);
}

/// A begin_frame failure propagates without consuming ticks
#[test]
fn test_begin_frame_error_propagates() {
    let mut gfx = RecordingGraphics {
        fail_begin_frame_at: Some(1),
        ..Default::default()
    };
    let mut frame_loop = bound_loop(&mut gfx);

    let result = frame_loop.run(&mut gfx, &mut CountdownPump::new(10));
    assert!(result.is_err());
    assert_eq!(frame_loop.frames(), 1);
    assert_eq!(frame_loop.counter().current(), 2);
    assert_eq!(gfx.count(&Call::Draw), 1);
}

// ==================== Termination Tests ====================

/// No frame is begun once the pump reports termination
#[test]
fn test_termination_stops_before_begin_frame() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);
    let mut pump = CountdownPump::new(3);

    let drawn = frame_loop.run(&mut gfx, &mut pump).unwrap();

    assert_eq!(drawn, 3);
    assert_eq!(pump.polls, 4, "Loop should poll once more and then stop");
    assert_eq!(gfx.count(&Call::BeginFrame), 3);
    assert_eq!(gfx.count(&Call::EndFrame), 3);
    assert_eq!(gfx.calls.last(), Some(&Call::EndFrame));
    assert_eq!(frame_loop.state(), LoopState::Terminated);
}

/// Immediate termination draws nothing
#[test]
fn test_immediate_termination() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);
    assert_eq!(frame_loop.state(), LoopState::Bound);

    let drawn = frame_loop.run(&mut gfx, &mut CountdownPump::new(0)).unwrap();

    assert_eq!(drawn, 0);
    assert_eq!(gfx.count(&Call::BeginFrame), 0);
    assert_eq!(frame_loop.state(), LoopState::Terminated);
}

/// Drawing after termination is a programming error
#[test]
#[should_panic(expected = "after the frame loop terminated")]
fn test_frame_after_terminate_panics() {
    let mut gfx = RecordingGraphics::default();
    let mut frame_loop = bound_loop(&mut gfx);
    frame_loop.terminate();
    let _ = frame_loop.frame(&mut gfx);
}
