use crate::host::Host;
use crate::viewport::Viewport;

/// A page component driven by the frame loop.
pub trait Widget {
    /// Called once per animation frame with the page clock in milliseconds.
    fn on_frame(&mut self, now: f64, host: &dyn Host);
}

/// A component whose layout depends on the viewport width.
pub trait Reflow {
    /// Adopt the new width at once; navigation bounds follow it immediately.
    fn resize(&mut self, viewport: Viewport);

    /// Re-measure and re-apply the current position.
    fn reflow(&mut self, host: &dyn Host);
}
