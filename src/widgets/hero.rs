//! Full-width hero slider with a timed progress bar.
//!
//! Every navigation, manual or automatic, cancels the pending progress
//! frame, moves the carousel and starts a fresh progress cycle. Hovering
//! the slider pauses the cycle; leaving restarts it from zero.

use tracing::{debug, trace};

use crate::carousel::{Aria, Carousel, CarouselView, Direction, NavigationPolicy};
use crate::config::PageConfig;
use crate::content::HeroSlide;
use crate::engine::Widget;
use crate::error::{MissingElement, WidgetError};
use crate::host::{ElementId, Host};
use crate::timing::ProgressAnimation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroElements {
    pub root: ElementId,
    pub dots: ElementId,
    pub prev: Option<ElementId>,
    pub next: Option<ElementId>,
    pub progress: Option<ElementId>,
}

impl HeroElements {
    pub fn resolve(host: &dyn Host) -> Result<Self, MissingElement> {
        Ok(Self {
            root: host.require(ElementId::SliderRoot)?,
            dots: host.require(ElementId::SlideDots)?,
            prev: host.optional(ElementId::SliderPrev),
            next: host.optional(ElementId::SliderNext),
            progress: host.optional(ElementId::SlideProgress),
        })
    }
}

#[derive(Debug, Clone)]
pub struct HeroSlider {
    carousel: Carousel<HeroSlide>,
    elements: HeroElements,
    /// Absent when the page has no progress bar; the slider then never
    /// advances on its own.
    progress: Option<ProgressAnimation>,
}

impl HeroSlider {
    pub fn attach(
        host: &dyn Host,
        slides: Vec<HeroSlide>,
        config: &PageConfig,
        viewport_width: f32,
    ) -> Result<Self, WidgetError> {
        let elements = HeroElements::resolve(host)?;
        let carousel = Carousel::new(
            slides,
            NavigationPolicy::SingleWrap,
            Aria::HERO,
            elements.root,
            0.0,
            viewport_width,
        )?;
        let progress = elements.progress.map(|_| {
            let mut progress = ProgressAnimation::new(config.slider_interval);
            progress.start();
            progress
        });
        if progress.is_none() {
            debug!("no progress bar on the page, hero auto-advance disabled");
        }
        debug!(slides = carousel.items().len(), "hero slider ready");
        Ok(Self {
            carousel,
            elements,
            progress,
        })
    }

    pub fn elements(&self) -> &HeroElements {
        &self.elements
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn view(&self) -> CarouselView<'_, HeroSlide> {
        self.carousel.view()
    }

    /// Fill ratio of the progress bar in `[0, 1]`.
    pub fn progress_fill(&self) -> f32 {
        self.progress.as_ref().map_or(0.0, ProgressAnimation::fill)
    }

    pub fn progress(&self) -> Option<&ProgressAnimation> {
        self.progress.as_ref()
    }

    pub fn go_to(&mut self, index: usize, host: &dyn Host) {
        if let Some(progress) = self.progress.as_mut() {
            progress.cancel();
        }
        self.carousel.navigate_to(index, host);
        self.restart_progress();
    }

    pub fn navigate(&mut self, direction: Direction, host: &dyn Host) {
        let target = self
            .carousel
            .state()
            .step_target(self.carousel.policy(), direction);
        trace!(?direction, target, "hero navigate");
        self.go_to(target, host);
    }

    pub fn pointer_enter(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.cancel();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.restart_progress();
    }

    fn restart_progress(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.start();
        }
    }
}

impl Widget for HeroSlider {
    fn on_frame(&mut self, now: f64, host: &dyn Host) {
        let elapsed = self
            .progress
            .as_mut()
            .is_some_and(|progress| progress.on_frame(now));
        if elapsed {
            self.navigate(Direction::Next, host);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HERO_SLIDES;
    use crate::host::testing::FakeHost;
    use crate::state::ProgressState;

    fn host() -> FakeHost {
        FakeHost::full().with_width(ElementId::SliderRoot, 1280.0)
    }

    fn slider(host: &FakeHost) -> HeroSlider {
        HeroSlider::attach(host, HERO_SLIDES.to_vec(), &PageConfig::default(), 1280.0).unwrap()
    }

    #[test]
    fn missing_root_skips_the_widget() {
        let host = host().without(ElementId::SliderRoot);
        let err = HeroSlider::attach(&host, HERO_SLIDES.to_vec(), &PageConfig::default(), 1280.0)
            .unwrap_err();
        assert_eq!(err, WidgetError::Missing(MissingElement(ElementId::SliderRoot)));
    }

    #[test]
    fn auto_advances_once_per_interval() {
        let host = host();
        let mut hero = slider(&host);

        hero.on_frame(0.0, &host);
        hero.on_frame(6999.0, &host);
        assert_eq!(hero.current_index(), 0);
        hero.on_frame(7000.0, &host);
        assert_eq!(hero.current_index(), 1);
        assert_eq!(hero.progress_fill(), 0.0);

        // The next cycle starts on the following frame.
        hero.on_frame(7016.0, &host);
        hero.on_frame(14000.0, &host);
        assert_eq!(hero.current_index(), 1);
        hero.on_frame(14016.0, &host);
        assert_eq!(hero.current_index(), 2);
    }

    #[test]
    fn hover_pauses_and_leave_restarts_from_zero() {
        let host = host();
        let mut hero = slider(&host);
        hero.on_frame(0.0, &host);
        hero.on_frame(3500.0, &host);
        hero.pointer_enter();
        assert_eq!(hero.progress().unwrap().state(), ProgressState::Paused);

        hero.on_frame(20000.0, &host);
        assert_eq!(hero.current_index(), 0);
        assert!((hero.progress_fill() - 0.5).abs() < 1e-6);

        hero.pointer_leave();
        hero.on_frame(21000.0, &host);
        hero.on_frame(27999.0, &host);
        assert_eq!(hero.current_index(), 0);
        hero.on_frame(28000.0, &host);
        assert_eq!(hero.current_index(), 1);
    }

    #[test]
    fn manual_navigation_restarts_progress() {
        let host = host();
        let mut hero = slider(&host);
        hero.on_frame(0.0, &host);
        hero.on_frame(6000.0, &host);

        hero.navigate(Direction::Previous, &host);
        assert_eq!(hero.current_index(), 2);
        assert_eq!(hero.progress_fill(), 0.0);

        hero.on_frame(6500.0, &host);
        hero.on_frame(13000.0, &host);
        assert_eq!(hero.current_index(), 2);
        hero.on_frame(13500.0, &host);
        assert_eq!(hero.current_index(), 0);
    }

    #[test]
    fn no_progress_bar_means_no_auto_advance() {
        let host = host().without(ElementId::SlideProgress);
        let mut hero = slider(&host);
        hero.on_frame(0.0, &host);
        hero.on_frame(100_000.0, &host);
        assert_eq!(hero.current_index(), 0);

        hero.go_to(2, &host);
        assert_eq!(hero.current_index(), 2);
    }
}
