//! Turns raylib input polling into page events.

use raylib::consts::{KeyboardKey, MouseButton};
use raylib::prelude::*;

use crate::host::ElementId;
use crate::page::{Key, Page, PageEvent};
use crate::render::layout::PageLayout;

const WHEEL_STEP: f32 = 60.0; // Pixels scrolled per wheel notch

#[derive(Debug, Default)]
pub struct InputState {
    over_slider: bool,
}

// Enter/leave only on edges
fn hover_change(was: bool, is: bool, id: ElementId) -> Option<PageEvent> {
    match (was, is) {
        (false, true) => Some(PageEvent::PointerEnter(id)),
        (true, false) => Some(PageEvent::PointerLeave(id)),
        _ => None,
    }
}

fn wheel_target(scroll_y: f32, wheel: f32) -> Option<f32> {
    (wheel != 0.0).then(|| scroll_y - wheel * WHEEL_STEP)
}

impl InputState {
    /// Events produced by this frame's input, in dispatch order.
    pub fn poll(&mut self, rl: &RaylibHandle, layout: &PageLayout, page: &Page) -> Vec<PageEvent> {
        let mut events = Vec::new();
        let mouse = rl.get_mouse_position();
        let menu_open = page.menu().is_some_and(|menu| menu.is_open());

        let over_slider = layout.over_slider(mouse, page.scroll_y(), menu_open);
        events.extend(hover_change(self.over_slider, over_slider, ElementId::SliderRoot));
        self.over_slider = over_slider;

        if let Some(offset) = wheel_target(page.scroll_y(), rl.get_mouse_wheel_move()) {
            events.push(PageEvent::Scroll(offset));
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(target) = layout.hit_test(mouse, page.scroll_y(), menu_open) {
                events.push(PageEvent::Click(target));
            }
        }

        for (key, mapped) in [
            (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
            (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
            (KeyboardKey::KEY_ESCAPE, Key::Escape),
        ] {
            if rl.is_key_pressed(key) {
                events.push(PageEvent::Key(mapped));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_reports_edges_only() {
        let id = ElementId::SliderRoot;
        assert_eq!(hover_change(false, true, id), Some(PageEvent::PointerEnter(id)));
        assert_eq!(hover_change(true, false, id), Some(PageEvent::PointerLeave(id)));
        assert_eq!(hover_change(true, true, id), None);
        assert_eq!(hover_change(false, false, id), None);
    }

    #[test]
    fn wheel_scrolls_down_on_negative_move() {
        assert_eq!(wheel_target(100.0, -1.0), Some(160.0));
        assert_eq!(wheel_target(100.0, 0.0), None);
    }
}
