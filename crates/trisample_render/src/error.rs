/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// The next surface texture was not ready in time
    Timeout,
    /// GPU out of memory
    OutOfMemory,
    /// No adapter can present to the window surface
    NoAdapter,
    /// The adapter refused to create a device
    DeviceRequest(String),
    /// Surface creation failed
    SurfaceCreation(String),
    /// The surface reports no usable format for this adapter
    UnsupportedSurface,
    /// A descriptor heap slot was committed without a constant buffer
    UnregisteredSlot(u32),
    /// Any other failure
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::Timeout => write!(f, "Surface texture acquisition timed out"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::NoAdapter => write!(f, "No compatible graphics adapter"),
            RenderError::DeviceRequest(msg) => write!(f, "Device request failed: {}", msg),
            RenderError::SurfaceCreation(msg) => write!(f, "Surface creation failed: {}", msg),
            RenderError::UnsupportedSurface => write!(f, "Surface is not supported by the adapter"),
            RenderError::UnregisteredSlot(slot) => {
                write!(f, "Descriptor heap slot b{} has no constant buffer", slot)
            }
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Whether the frame can be skipped and retried on the next redraw
    pub fn is_transient(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Timeout)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::Timeout => RenderError::Timeout,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}
