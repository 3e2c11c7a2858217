use tracing::trace;

use crate::carousel::state::{CarouselState, Direction, NavigationPolicy};
use crate::carousel::view::{self, Aria, CarouselView};
use crate::error::WidgetError;
use crate::host::{ElementId, Host};

/// One carousel instance: a fixed item list, a cursor and a track offset.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    policy: NavigationPolicy,
    aria: Aria,
    track: ElementId,
    gap: f32,
    state: CarouselState,
}

impl<T> Carousel<T> {
    pub fn new(
        items: Vec<T>,
        policy: NavigationPolicy,
        aria: Aria,
        track: ElementId,
        gap: f32,
        viewport_width: f32,
    ) -> Result<Self, WidgetError> {
        if items.is_empty() {
            return Err(WidgetError::NoItems);
        }
        let state = CarouselState::new(items.len(), policy.visible_count(viewport_width));
        Ok(Self {
            items,
            policy,
            aria,
            track,
            gap,
            state,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    pub fn track(&self) -> ElementId {
        self.track
    }

    /// Position the track on `index`, re-measuring the first item.
    ///
    /// Returns `false` without touching state while the track has no
    /// rendered children.
    pub fn navigate_to(&mut self, index: usize, host: &dyn Host) -> bool {
        let Some(item_width) = host.first_child_width(self.track) else {
            trace!(track = %self.track, "track not laid out yet, ignoring navigation");
            return false;
        };
        let index = self.state.normalize(&self.policy, index);
        self.state.item_width = item_width;
        self.state.offset = index as f32 * (item_width + self.gap);
        self.state.current_index = index;
        trace!(track = %self.track, index, offset = self.state.offset, "carousel positioned");
        true
    }

    pub fn navigate(&mut self, direction: Direction, host: &dyn Host) -> bool {
        let target = self.state.step_target(&self.policy, direction);
        self.navigate_to(target, host)
    }

    /// Recompute how many items fit for a new viewport width. The cursor is
    /// left alone; the next directional step re-clamps it.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.state.visible_count = self.policy.visible_count(viewport_width);
    }

    pub fn view(&self) -> CarouselView<'_, T> {
        view::build(
            &self.items,
            self.state.current_index,
            self.state.offset,
            self.aria,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::Breakpoints;
    use crate::host::testing::FakeHost;

    fn gallery(viewport_width: f32) -> Carousel<u32> {
        Carousel::new(
            (1..=7).collect(),
            NavigationPolicy::MultiVisible(Breakpoints::GALLERY),
            Aria::GALLERY,
            ElementId::GalleryTrack,
            24.0,
            viewport_width,
        )
        .unwrap()
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let err = Carousel::<u32>::new(
            Vec::new(),
            NavigationPolicy::SingleWrap,
            Aria::HERO,
            ElementId::SliderRoot,
            0.0,
            1024.0,
        )
        .unwrap_err();
        assert_eq!(err, WidgetError::NoItems);
    }

    #[test]
    fn navigate_to_applies_offset_and_single_active_dot() {
        let host = FakeHost::full().with_width(ElementId::GalleryTrack, 400.0);
        let mut carousel = gallery(1024.0);

        for i in 0..7 {
            assert!(carousel.navigate_to(i, &host));
            let view = carousel.view();
            let active: Vec<usize> = view.active_dots().map(|d| d.index).collect();
            assert_eq!(active, vec![i]);
            assert_eq!(view.offset, i as f32 * 424.0);
            assert_eq!(carousel.current_index(), i);
        }
    }

    #[test]
    fn navigation_is_noop_before_layout() {
        let host = FakeHost::full();
        let mut carousel = gallery(1024.0);
        assert!(!carousel.navigate(Direction::Next, &host));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state().offset, 0.0);
    }

    #[test]
    fn offset_follows_measured_width() {
        let mut host = FakeHost::full().with_width(ElementId::GalleryTrack, 400.0);
        let mut carousel = gallery(1024.0);
        carousel.navigate_to(2, &host);
        assert_eq!(carousel.state().offset, 848.0);

        host.widths.insert(ElementId::GalleryTrack, 300.0);
        carousel.navigate_to(2, &host);
        assert_eq!(carousel.state().item_width, 300.0);
        assert_eq!(carousel.state().offset, 648.0);
    }

    #[test]
    fn viewport_change_keeps_cursor() {
        let host = FakeHost::full().with_width(ElementId::GalleryTrack, 400.0);
        let mut carousel = gallery(500.0);
        assert_eq!(carousel.state().visible_count, 1);
        carousel.navigate_to(6, &host);

        carousel.set_viewport_width(1024.0);
        assert_eq!(carousel.state().visible_count, 2);
        assert_eq!(carousel.current_index(), 6);

        carousel.navigate(Direction::Next, &host);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn hero_view_uses_tab_semantics() {
        let host = FakeHost::full().with_width(ElementId::SliderRoot, 1280.0);
        let mut hero = Carousel::new(
            vec!["a", "b", "c"],
            NavigationPolicy::SingleWrap,
            Aria::HERO,
            ElementId::SliderRoot,
            0.0,
            1280.0,
        )
        .unwrap();
        hero.navigate(Direction::Previous, &host);
        let view = hero.view();
        assert_eq!(view.current_index, 2);
        assert_eq!(view.items[2].label.as_deref(), Some("Slide 3 of 3"));
        assert!(view.items[2].active);
        assert_eq!(view.dots[0].label, "Go to slide 1");
        assert_eq!(view.dots[0].selected, Some(false));
        assert_eq!(view.dots[2].selected, Some(true));
    }
}
