//! In-page anchor links that glide to their section.

use tracing::debug;

use crate::constants::SMOOTH_SCROLL_DURATION;

/// Section id an in-page `href` points at. `"#"` alone and external links
/// are not handled.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Document offset to scroll to so the target sits below the sticky header.
pub fn target_position(target_top: f32, page_y_offset: f32, header_height: f32, margin: f32) -> f32 {
    target_top + page_y_offset - header_height - margin
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    from: f32,
    to: f32,
    elapsed: f32,
}

/// Time-driven interpolation of the page scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    margin: f32,
    duration: f32,
    glide: Option<Glide>,
}

impl SmoothScroll {
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            duration: SMOOTH_SCROLL_DURATION,
            glide: None,
        }
    }

    /// Handle a click on `href`. `target_top` is the viewport-relative top of
    /// the element the anchor names, if it exists. Returns `true` when the
    /// default jump is replaced by a glide.
    pub fn on_anchor_click(
        &mut self,
        href: &str,
        target_top: Option<f32>,
        page_y_offset: f32,
        header_height: f32,
        max_offset: f32,
    ) -> bool {
        let Some(id) = anchor_target(href) else {
            return false;
        };
        let Some(target_top) = target_top else {
            debug!(id, "anchor target not on page");
            return false;
        };
        let to = target_position(target_top, page_y_offset, header_height, self.margin)
            .clamp(0.0, max_offset.max(0.0));
        debug!(id, from = page_y_offset, to, "smooth scroll");
        self.glide = Some(Glide {
            from: page_y_offset,
            to,
            elapsed: 0.0,
        });
        true
    }

    /// Advance by `dt` seconds. Returns the new scroll offset while gliding.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let glide = self.glide.as_mut()?;
        glide.elapsed += dt;
        let t = (glide.elapsed / self.duration).min(1.0);
        let offset = glide.from + (glide.to - glide.from) * ease_in_out(t);
        if t >= 1.0 {
            let to = glide.to;
            self.glide = None;
            return Some(to);
        }
        Some(offset)
    }

    /// User scrolling takes over from a running glide.
    pub fn interrupt(&mut self) {
        self.glide = None;
    }

    pub fn is_active(&self) -> bool {
        self.glide.is_some()
    }
}
