//! Scroll-triggered reveal of tagged page elements.
//!
//! The host reports, each frame, whether every observed element currently
//! intersects the viewport. Elements whose state changed since the last
//! report form a batch, like an intersection observer callback. An element
//! entering the viewport is revealed after its own delay, or after its
//! position in the batch times the stagger. Each element is revealed once.

use tracing::trace;

use crate::constants::{REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};
use crate::engine::Widget;
use crate::host::Host;
use crate::timing::OneShot;

/// Fraction of an element of `height` at viewport-relative `top` that lies
/// inside the viewport once its bottom edge is pulled in by `bottom_margin`.
pub fn intersection_ratio(top: f32, height: f32, viewport_height: f32, bottom_margin: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let root_bottom = viewport_height - bottom_margin;
    let visible = (top + height).min(root_bottom) - top.max(0.0);
    (visible.max(0.0) / height).clamp(0.0, 1.0)
}

pub fn is_intersecting(top: f32, height: f32, viewport_height: f32) -> bool {
    intersection_ratio(top, height, viewport_height, REVEAL_BOTTOM_MARGIN) >= REVEAL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealSpec {
    /// Explicit delay in milliseconds; falls back to the batch stagger.
    pub delay_ms: Option<f64>,
}

#[derive(Debug, Clone)]
struct Entry {
    delay_ms: Option<f64>,
    last_intersecting: Option<bool>,
    timer: Option<OneShot>,
    visible: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    entries: Vec<Entry>,
    stagger_ms: f64,
}

impl ScrollReveal {
    pub fn observe(specs: &[RevealSpec], stagger_ms: f64) -> Self {
        let entries = specs
            .iter()
            .map(|spec| Entry {
                delay_ms: spec.delay_ms,
                last_intersecting: None,
                timer: None,
                visible: false,
            })
            .collect();
        Self { entries, stagger_ms }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feed the intersection state of every observed element, in order.
    /// Extra or missing states are ignored.
    pub fn on_intersections(&mut self, states: &[bool], now: f64) {
        let mut batch_position = 0usize;
        for (index, (entry, &intersecting)) in self.entries.iter_mut().zip(states).enumerate() {
            if entry.last_intersecting == Some(intersecting) {
                continue;
            }
            entry.last_intersecting = Some(intersecting);
            let position = batch_position;
            batch_position += 1;

            if !intersecting || entry.visible || entry.timer.is_some() {
                continue;
            }
            let delay = entry
                .delay_ms
                .unwrap_or(position as f64 * self.stagger_ms);
            trace!(index, delay, "reveal scheduled");
            entry.timer = Some(OneShot::after(delay, now));
        }
    }

    /// Mark elements whose delay has passed. Returns the newly revealed
    /// indices.
    pub fn poll(&mut self, now: f64) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if let Some(timer) = entry.timer.as_mut() {
                if timer.poll(now) {
                    entry.visible = true;
                    revealed.push(index);
                }
            }
        }
        revealed
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|entry| entry.visible)
    }
}

impl Widget for ScrollReveal {
    fn on_frame(&mut self, now: f64, _host: &dyn Host) {
        self.poll(now);
    }
}
