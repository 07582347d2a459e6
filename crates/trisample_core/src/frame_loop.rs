//! Per-frame sequencing
//!
//! Every iteration runs, in order:
//! 1. `begin_frame`
//! 2. bind the root signature
//! 3. take two ticks and compose the world matrix
//! 4. upload it to the constant buffer
//! 5. bind the descriptor heap
//! 6. draw the polygon
//! 7. `end_frame`

use trisample_math::Mat4;

use crate::animation::compose_world;
use crate::bindings::Bindings;
use crate::frame_counter::FrameCounter;
use crate::graphics::{EventPump, Graphics};

/// Lifecycle of a frame loop. `Uninitialized` is not represented: a loop only
/// exists once its [`Bindings`] do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Bindings created, no frame drawn yet
    Bound,
    /// At least one frame drawn
    Running,
    /// Termination observed; no further frames
    Terminated,
}

/// Drives the per-frame work over a set of fixed bindings
pub struct FrameLoop<G: Graphics> {
    bindings: Bindings<G>,
    counter: FrameCounter,
    state: LoopState,
    frames: u64,
}

impl<G: Graphics> FrameLoop<G> {
    /// Create a loop over bound resources, ticking from 0
    pub fn new(bindings: Bindings<G>) -> Self {
        Self {
            bindings,
            counter: FrameCounter::new(),
            state: LoopState::Bound,
            frames: 0,
        }
    }

    /// Run one frame and return the uploaded world matrix.
    ///
    /// # Panics
    /// If called after [`FrameLoop::terminate`].
    pub fn frame(&mut self, gfx: &mut G) -> Result<Mat4, G::Error> {
        assert!(
            self.state != LoopState::Terminated,
            "frame() called after the frame loop terminated"
        );

        gfx.begin_frame()?;

        gfx.set_root_signature(self.bindings.root_signature());

        let (translation_tick, rotation_tick) = self.counter.next_pair();
        let world = compose_world(translation_tick, rotation_tick);
        log::trace!(
            "Frame {}: ticks ({}, {}) world {:?}",
            self.frames,
            translation_tick,
            rotation_tick,
            world
        );

        gfx.copy_to_device(self.bindings.constant_buffer(), &world);

        gfx.set_descriptor_heap(self.bindings.descriptor_heap());

        gfx.draw(self.bindings.polygon());

        gfx.end_frame()?;

        self.state = LoopState::Running;
        self.frames += 1;
        Ok(world)
    }

    /// Run frames until the event pump reports termination.
    ///
    /// Returns the number of frames drawn by this call.
    pub fn run<E: EventPump>(&mut self, gfx: &mut G, events: &mut E) -> Result<u64, G::Error> {
        let start = self.frames;
        while events.poll_events() {
            self.frame(gfx)?;
        }
        self.terminate();
        Ok(self.frames - start)
    }

    /// Mark the loop terminated (window closed, exit requested)
    pub fn terminate(&mut self) {
        if self.state != LoopState::Terminated {
            log::info!("Frame loop terminated after {} frames", self.frames);
            self.state = LoopState::Terminated;
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames completed so far
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn counter(&self) -> &FrameCounter {
        &self.counter
    }
}
