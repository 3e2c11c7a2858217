//! Horizontally scrolling card tracks: the gallery and the testimonials.
//!
//! Both show several cards at once depending on the viewport, snap one card
//! per step and position themselves on the first card shortly after they
//! are attached. The testimonials additionally scroll forward on a fixed
//! period that is never paused.

use tracing::{debug, trace};

use crate::carousel::{Aria, Breakpoints, Carousel, CarouselView, Direction, NavigationPolicy};
use crate::config::PageConfig;
use crate::content::{GalleryImage, Testimonial};
use crate::engine::{Reflow, Widget};
use crate::error::WidgetError;
use crate::host::{ElementId, Host, TrackElements};
use crate::timing::{IntervalTimer, OneShot};
use crate::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct TrackCarousel<T> {
    carousel: Carousel<T>,
    elements: TrackElements,
    initial_position: OneShot,
    auto_scroll: Option<IntervalTimer>,
}

pub type Gallery = TrackCarousel<GalleryImage>;
pub type Testimonials = TrackCarousel<Testimonial>;

impl Gallery {
    pub fn attach(
        host: &dyn Host,
        images: Vec<GalleryImage>,
        config: &PageConfig,
        viewport: Viewport,
        now: f64,
    ) -> Result<Self, WidgetError> {
        let elements = TrackElements::resolve(
            host,
            ElementId::GalleryTrack,
            ElementId::GalleryDots,
            ElementId::GalleryPrev,
            ElementId::GalleryNext,
        )?;
        let carousel = Carousel::new(
            images,
            NavigationPolicy::MultiVisible(Breakpoints::GALLERY),
            Aria::GALLERY,
            elements.track,
            config.card_gap,
            viewport.width,
        )?;
        Ok(TrackCarousel::new(carousel, elements, config, now, None))
    }
}

impl Testimonials {
    pub fn attach(
        host: &dyn Host,
        testimonials: Vec<Testimonial>,
        config: &PageConfig,
        viewport: Viewport,
        now: f64,
    ) -> Result<Self, WidgetError> {
        let elements = TrackElements::resolve(
            host,
            ElementId::TestimonialTrack,
            ElementId::TestimonialDots,
            ElementId::TestimonialPrev,
            ElementId::TestimonialNext,
        )?;
        let carousel = Carousel::new(
            testimonials,
            NavigationPolicy::MultiVisible(Breakpoints::TESTIMONIALS),
            Aria::TESTIMONIALS,
            elements.track,
            config.card_gap,
            viewport.width,
        )?;
        let auto_scroll = IntervalTimer::new(config.testimonial_interval, now);
        Ok(TrackCarousel::new(carousel, elements, config, now, Some(auto_scroll)))
    }
}

impl<T> TrackCarousel<T> {
    fn new(
        carousel: Carousel<T>,
        elements: TrackElements,
        config: &PageConfig,
        now: f64,
        auto_scroll: Option<IntervalTimer>,
    ) -> Self {
        debug!(
            track = %elements.track,
            items = carousel.items().len(),
            visible = carousel.state().visible_count,
            auto = auto_scroll.is_some(),
            "track carousel ready"
        );
        Self {
            carousel,
            elements,
            initial_position: OneShot::after(config.initial_position_delay_ms, now),
            auto_scroll,
        }
    }

    pub fn elements(&self) -> &TrackElements {
        &self.elements
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn visible_count(&self) -> usize {
        self.carousel.state().visible_count
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn view(&self) -> CarouselView<'_, T> {
        self.carousel.view()
    }

    /// Prev/next button handler.
    pub fn scroll(&mut self, direction: Direction, host: &dyn Host) {
        trace!(track = %self.elements.track, ?direction, "track scroll");
        self.carousel.navigate(direction, host);
    }

    /// Dot click handler.
    pub fn scroll_to(&mut self, index: usize, host: &dyn Host) {
        self.carousel.navigate_to(index, host);
    }

    /// Release the auto-scroll timer early; it is otherwise dropped with the
    /// widget.
    pub fn stop_auto_scroll(&mut self) {
        if let Some(timer) = self.auto_scroll.as_mut() {
            timer.cancel();
        }
    }

    pub fn auto_scroll(&self) -> Option<&IntervalTimer> {
        self.auto_scroll.as_ref()
    }
}

impl<T> Widget for TrackCarousel<T> {
    fn on_frame(&mut self, now: f64, host: &dyn Host) {
        if self.initial_position.poll(now) {
            self.carousel.navigate_to(0, host);
        }
        let fire = self
            .auto_scroll
            .as_mut()
            .is_some_and(|timer| timer.poll(now));
        if fire {
            self.scroll(Direction::Next, host);
        }
    }
}

impl<T> Reflow for TrackCarousel<T> {
    fn resize(&mut self, viewport: Viewport) {
        self.carousel.set_viewport_width(viewport.width);
    }

    fn reflow(&mut self, host: &dyn Host) {
        let current = self.carousel.current_index();
        self.carousel.navigate_to(current, host);
    }
}
