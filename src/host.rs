//! The seam between the widget core and whatever draws the page.
//!
//! Widgets never look elements up on their own. The page asks the host to
//! resolve the identifiers a widget needs into a typed bundle, and a widget
//! whose required containers are absent is simply not constructed.

use std::fmt;

use crate::error::MissingElement;

/// Stable identifiers the surrounding markup must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    SliderRoot,
    SlideDots,
    SliderPrev,
    SliderNext,
    SlideProgress,
    GalleryTrack,
    GalleryDots,
    GalleryPrev,
    GalleryNext,
    TestimonialTrack,
    TestimonialDots,
    TestimonialPrev,
    TestimonialNext,
    Nav,
    Header,
    NavToggle,
    MobileMenu,
    MobileClose,
    MobileBackdrop,
}

impl ElementId {
    pub const ALL: [ElementId; 19] = [
        Self::SliderRoot,
        Self::SlideDots,
        Self::SliderPrev,
        Self::SliderNext,
        Self::SlideProgress,
        Self::GalleryTrack,
        Self::GalleryDots,
        Self::GalleryPrev,
        Self::GalleryNext,
        Self::TestimonialTrack,
        Self::TestimonialDots,
        Self::TestimonialPrev,
        Self::TestimonialNext,
        Self::Nav,
        Self::Header,
        Self::NavToggle,
        Self::MobileMenu,
        Self::MobileClose,
        Self::MobileBackdrop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SliderRoot => "slider-root",
            Self::SlideDots => "slide-dots",
            Self::SliderPrev => "slider-prev",
            Self::SliderNext => "slider-next",
            Self::SlideProgress => "slide-progress",
            Self::GalleryTrack => "gallery-track",
            Self::GalleryDots => "gallery-dots",
            Self::GalleryPrev => "gallery-prev",
            Self::GalleryNext => "gallery-next",
            Self::TestimonialTrack => "testimonial-track",
            Self::TestimonialDots => "testimonial-dots",
            Self::TestimonialPrev => "testimonial-prev",
            Self::TestimonialNext => "testimonial-next",
            Self::Nav => "nav",
            Self::Header => "header",
            Self::NavToggle => "nav-toggle",
            Self::MobileMenu => "mobile-menu",
            Self::MobileClose => "mobile-close",
            Self::MobileBackdrop => "mobile-backdrop",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the widget core needs from the display surface.
pub trait Host {
    /// Whether an element with this identifier exists in the markup.
    fn has_element(&self, id: ElementId) -> bool;

    /// Current rendered width of the first child of `track`, or `None` while
    /// the track has no children laid out.
    fn first_child_width(&self, track: ElementId) -> Option<f32>;

    /// Current rendered height of the element, 0 when it has no box.
    fn element_height(&self, id: ElementId) -> f32;

    fn require(&self, id: ElementId) -> Result<ElementId, MissingElement> {
        if self.has_element(id) {
            Ok(id)
        } else {
            Err(MissingElement(id))
        }
    }

    fn optional(&self, id: ElementId) -> Option<ElementId> {
        self.has_element(id).then_some(id)
    }
}

/// Handles a carousel-like widget is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackElements {
    pub track: ElementId,
    pub dots: ElementId,
    pub prev: Option<ElementId>,
    pub next: Option<ElementId>,
}

impl TrackElements {
    pub fn resolve(
        host: &dyn Host,
        track: ElementId,
        dots: ElementId,
        prev: ElementId,
        next: ElementId,
    ) -> Result<Self, MissingElement> {
        Ok(Self {
            track: host.require(track)?,
            dots: host.require(dots)?,
            prev: host.optional(prev),
            next: host.optional(next),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};

    use super::*;

    /// In-memory host for unit tests.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub present: HashSet<ElementId>,
        pub widths: HashMap<ElementId, f32>,
        pub heights: HashMap<ElementId, f32>,
    }

    impl FakeHost {
        pub fn full() -> Self {
            Self {
                present: ElementId::ALL.into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn with_width(mut self, track: ElementId, width: f32) -> Self {
            self.widths.insert(track, width);
            self
        }

        pub fn without(mut self, id: ElementId) -> Self {
            self.present.remove(&id);
            self
        }
    }

    impl Host for FakeHost {
        fn has_element(&self, id: ElementId) -> bool {
            self.present.contains(&id)
        }

        fn first_child_width(&self, track: ElementId) -> Option<f32> {
            self.widths.get(&track).copied()
        }

        fn element_height(&self, id: ElementId) -> f32 {
            self.heights.get(&id).copied().unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;

    #[test]
    fn resolve_requires_track_and_dots_only() {
        let host = FakeHost::full()
            .without(ElementId::GalleryPrev)
            .without(ElementId::GalleryNext);
        let elements = TrackElements::resolve(
            &host,
            ElementId::GalleryTrack,
            ElementId::GalleryDots,
            ElementId::GalleryPrev,
            ElementId::GalleryNext,
        )
        .unwrap();
        assert_eq!(elements.prev, None);
        assert_eq!(elements.next, None);

        let host = FakeHost::full().without(ElementId::GalleryDots);
        let err = TrackElements::resolve(
            &host,
            ElementId::GalleryTrack,
            ElementId::GalleryDots,
            ElementId::GalleryPrev,
            ElementId::GalleryNext,
        )
        .unwrap_err();
        assert_eq!(err, MissingElement(ElementId::GalleryDots));
        assert_eq!(err.to_string(), "required element `gallery-dots` is missing");
    }
}
