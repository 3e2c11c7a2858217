use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Turns raw resize notifications into reflow requests.
///
/// With a zero debounce every resize reflows immediately. Otherwise only the
/// last size seen is applied once resizes have been quiet for the delay.
#[derive(Debug, Clone)]
pub struct ReflowHandler {
    debounce_ms: f64,
    pending: Option<(Viewport, f64)>,
    current: Viewport,
}

impl ReflowHandler {
    pub fn new(initial: Viewport, debounce: Duration) -> Self {
        Self {
            debounce_ms: debounce.as_secs_f64() * 1000.0,
            pending: None,
            current: initial,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Record a resize. Returns the viewport to reflow with right away, if any.
    pub fn on_resize(&mut self, viewport: Viewport, now: f64) -> Option<Viewport> {
        if self.debounce_ms <= 0.0 {
            self.current = viewport;
            return Some(viewport);
        }
        self.pending = Some((viewport, now + self.debounce_ms));
        None
    }

    /// Poll for a debounced reflow that has come due.
    pub fn poll(&mut self, now: f64) -> Option<Viewport> {
        match self.pending {
            Some((viewport, due)) if now >= due => {
                self.pending = None;
                self.current = viewport;
                debug!(width = viewport.width, height = viewport.height, "debounced reflow");
                Some(viewport)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_without_debounce() {
        let mut reflow = ReflowHandler::new(Viewport::new(500.0, 800.0), Duration::ZERO);
        let wide = Viewport::new(1300.0, 800.0);
        assert_eq!(reflow.on_resize(wide, 10.0), Some(wide));
        assert_eq!(reflow.current(), wide);
        assert_eq!(reflow.poll(1000.0), None);
    }

    #[test]
    fn debounce_keeps_only_the_last_size() {
        let mut reflow =
            ReflowHandler::new(Viewport::new(500.0, 800.0), Duration::from_millis(120));
        assert_eq!(reflow.on_resize(Viewport::new(600.0, 800.0), 0.0), None);
        assert_eq!(reflow.on_resize(Viewport::new(900.0, 800.0), 50.0), None);
        assert_eq!(reflow.poll(169.0), None);
        assert_eq!(reflow.poll(170.0), Some(Viewport::new(900.0, 800.0)));
        assert_eq!(reflow.poll(400.0), None);
    }
}
