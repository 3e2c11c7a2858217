//! Sticky navigation bar and the mobile menu overlay.

use tracing::debug;

use crate::error::MissingElement;
use crate::host::{ElementId, Host};

#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    threshold: f32,
    scrolled: bool,
}

impl NavBar {
    pub fn attach(host: &dyn Host, threshold: f32) -> Result<Self, MissingElement> {
        host.require(ElementId::Nav)?;
        Ok(Self {
            threshold,
            scrolled: false,
        })
    }

    /// Returns whether the bar is in its scrolled state afterwards.
    pub fn on_scroll(&mut self, page_y_offset: f32) -> bool {
        self.scrolled = page_y_offset > self.threshold;
        self.scrolled
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenuElements {
    pub menu: ElementId,
    pub toggle: ElementId,
    pub close: Option<ElementId>,
    pub backdrop: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenu {
    elements: MobileMenuElements,
    open: bool,
}

impl MobileMenu {
    pub fn attach(host: &dyn Host) -> Result<Self, MissingElement> {
        let elements = MobileMenuElements {
            menu: host.require(ElementId::MobileMenu)?,
            toggle: host.require(ElementId::NavToggle)?,
            close: host.optional(ElementId::MobileClose),
            backdrop: host.optional(ElementId::MobileBackdrop),
        };
        Ok(Self {
            elements,
            open: false,
        })
    }

    pub fn elements(&self) -> &MobileMenuElements {
        &self.elements
    }

    pub fn open(&mut self) {
        if !self.open {
            debug!("mobile menu opened");
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            debug!("mobile menu closed");
        }
        self.open = false;
    }

    pub fn on_escape(&mut self) {
        if self.open {
            self.close();
        }
    }

    /// Click on one of the menu's own controls. Returns `true` if handled.
    pub fn on_click(&mut self, target: ElementId) -> bool {
        if target == self.elements.toggle {
            self.open();
            true
        } else if Some(target) == self.elements.close || Some(target) == self.elements.backdrop {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button `active` class.
    pub fn toggle_active(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Page scrolling is locked while the menu covers it.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::FakeHost;

    #[test]
    fn scrolled_state_past_threshold() {
        let host = FakeHost::full();
        let mut nav = NavBar::attach(&host, 50.0).unwrap();
        assert!(!nav.on_scroll(50.0));
        assert!(nav.on_scroll(50.5));
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn menu_open_close_paths() {
        let host = FakeHost::full();
        let mut menu = MobileMenu::attach(&host).unwrap();
        assert_eq!(menu.aria_expanded(), "false");

        assert!(menu.on_click(ElementId::NavToggle));
        assert!(menu.is_open());
        assert!(menu.body_scroll_locked());
        assert_eq!(menu.aria_expanded(), "true");

        menu.on_escape();
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.on_click(ElementId::MobileBackdrop));
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.on_click(ElementId::MobileClose));
        assert!(!menu.toggle_active());
        assert!(!menu.on_click(ElementId::GalleryNext));
    }

    #[test]
    fn optional_controls_may_be_absent() {
        let host = FakeHost::full()
            .without(ElementId::MobileClose)
            .without(ElementId::MobileBackdrop);
        let mut menu = MobileMenu::attach(&host).unwrap();
        menu.open();
        assert!(!menu.on_click(ElementId::MobileBackdrop));
        assert!(menu.is_open());

        let host = FakeHost::full().without(ElementId::NavToggle);
        assert_eq!(
            MobileMenu::attach(&host).unwrap_err(),
            MissingElement(ElementId::NavToggle)
        );
    }
}
