//! Page composition root.
//!
//! [`Page::load`] plays the part of the DOM-ready handler: every widget is
//! attached against the host, and a widget whose containers are missing is
//! logged and left out. After that the frame loop feeds [`PageEvent`]s in
//! through [`Page::handle`], one at a time.

use std::fmt::Display;

use tracing::{debug, info, trace};

use crate::carousel::Direction;
use crate::config::PageConfig;
use crate::content::{GALLERY_IMAGES, HERO_SLIDES, TESTIMONIALS};
use crate::engine::{Reflow, Widget};
use crate::host::{ElementId, Host};
use crate::viewport::{ReflowHandler, Viewport};
use crate::widgets::{
    Gallery, HeroSlider, IconSet, MobileMenu, NavBar, RevealSpec, ScrollReveal, SmoothScroll,
    Testimonials,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    Hero,
    Gallery,
    Testimonials,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickTarget {
    Element(ElementId),
    Dot { carousel: CarouselKind, index: usize },
    /// In-page link. `target_top` is the viewport-relative top of the
    /// section it names, `None` when there is no such section.
    Anchor { href: String, target_top: Option<f32> },
    /// Link inside the mobile menu: closes the menu, then behaves as an
    /// anchor.
    MobileLink { href: String, target_top: Option<f32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Animation frame: page clock in milliseconds and seconds since the
    /// previous frame.
    Frame { now: f64, dt: f32 },
    Resize(Viewport),
    /// User scroll to a new document offset.
    Scroll(f32),
    Click(ClickTarget),
    Key(Key),
    PointerEnter(ElementId),
    PointerLeave(ElementId),
    /// Current intersection state of every reveal target, in order.
    Intersections(Vec<bool>),
}

fn attached<T, E: Display>(widget: &str, result: Result<T, E>) -> Option<T> {
    result
        .inspect_err(|e| debug!(widget, "not initialised: {e}"))
        .ok()
}

#[derive(Debug)]
pub struct Page {
    now: f64,
    scroll_y: f32,
    max_scroll: f32,
    viewport: Viewport,
    hero: Option<HeroSlider>,
    gallery: Option<Gallery>,
    testimonials: Option<Testimonials>,
    nav: Option<NavBar>,
    menu: Option<MobileMenu>,
    reveal: ScrollReveal,
    smooth_scroll: SmoothScroll,
    reflow: ReflowHandler,
    icons: IconSet,
}

impl Page {
    pub fn load(
        host: &dyn Host,
        config: &PageConfig,
        viewport: Viewport,
        reveal_targets: &[RevealSpec],
        now: f64,
    ) -> Self {
        let hero = attached(
            "hero",
            HeroSlider::attach(host, HERO_SLIDES.to_vec(), config, viewport.width),
        );
        let gallery = attached(
            "gallery",
            Gallery::attach(host, GALLERY_IMAGES.to_vec(), config, viewport, now),
        );
        let testimonials = attached(
            "testimonials",
            Testimonials::attach(host, TESTIMONIALS.to_vec(), config, viewport, now),
        );
        let nav = attached("nav", NavBar::attach(host, config.nav_scroll_threshold));
        let menu = attached("mobile-menu", MobileMenu::attach(host));

        info!(
            hero = hero.is_some(),
            gallery = gallery.is_some(),
            testimonials = testimonials.is_some(),
            nav = nav.is_some(),
            reveal_targets = reveal_targets.len(),
            "page loaded"
        );

        Self {
            now,
            scroll_y: 0.0,
            max_scroll: 0.0,
            viewport,
            hero,
            gallery,
            testimonials,
            nav,
            menu,
            reveal: ScrollReveal::observe(reveal_targets, config.reveal_stagger_ms),
            smooth_scroll: SmoothScroll::new(config.scroll_margin),
            reflow: ReflowHandler::new(viewport, config.resize_debounce),
            icons: IconSet::default(),
        }
    }

    pub fn handle(&mut self, event: PageEvent, host: &dyn Host) {
        match event {
            PageEvent::Frame { now, dt } => self.on_frame(now, dt, host),
            PageEvent::Resize(viewport) => {
                self.apply_resize(viewport);
                if let Some(viewport) = self.reflow.on_resize(viewport, self.now) {
                    self.apply_reflow(viewport, host);
                }
            }
            PageEvent::Scroll(offset) => {
                if self.scroll_locked() {
                    return;
                }
                self.smooth_scroll.interrupt();
                self.set_scroll(offset);
            }
            PageEvent::Click(target) => self.on_click(target, host),
            PageEvent::Key(key) => self.on_key(key, host),
            PageEvent::PointerEnter(ElementId::SliderRoot) => {
                if let Some(hero) = self.hero.as_mut() {
                    hero.pointer_enter();
                }
            }
            PageEvent::PointerLeave(ElementId::SliderRoot) => {
                if let Some(hero) = self.hero.as_mut() {
                    hero.pointer_leave();
                }
            }
            PageEvent::PointerEnter(_) | PageEvent::PointerLeave(_) => {}
            PageEvent::Intersections(states) => self.reveal.on_intersections(&states, self.now),
        }
    }

    fn on_frame(&mut self, now: f64, dt: f32, host: &dyn Host) {
        self.now = now;
        if let Some(hero) = self.hero.as_mut() {
            hero.on_frame(now, host);
        }
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.on_frame(now, host);
        }
        if let Some(testimonials) = self.testimonials.as_mut() {
            testimonials.on_frame(now, host);
        }
        self.reveal.on_frame(now, host);
        if let Some(viewport) = self.reflow.poll(now) {
            self.apply_reflow(viewport, host);
        }
        if let Some(offset) = self.smooth_scroll.update(dt) {
            self.set_scroll(offset);
        }
    }

    // Visible counts follow the window right away so prev/next wrap
    // against the new width even while the re-measure is debounced.
    fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(testimonials) = self.testimonials.as_mut() {
            testimonials.resize(viewport);
        }
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.resize(viewport);
        }
    }

    fn apply_reflow(&mut self, viewport: Viewport, host: &dyn Host) {
        trace!(width = viewport.width, "reflow");
        if let Some(testimonials) = self.testimonials.as_mut() {
            testimonials.reflow(host);
        }
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.reflow(host);
        }
    }

    fn on_click(&mut self, target: ClickTarget, host: &dyn Host) {
        match target {
            ClickTarget::Element(id) => self.on_element_click(id, host),
            ClickTarget::Dot { carousel, index } => match carousel {
                CarouselKind::Hero => {
                    if let Some(hero) = self.hero.as_mut() {
                        hero.go_to(index, host);
                    }
                }
                CarouselKind::Gallery => {
                    if let Some(gallery) = self.gallery.as_mut() {
                        gallery.scroll_to(index, host);
                    }
                }
                CarouselKind::Testimonials => {
                    if let Some(testimonials) = self.testimonials.as_mut() {
                        testimonials.scroll_to(index, host);
                    }
                }
            },
            ClickTarget::Anchor { href, target_top } => self.on_anchor(&href, target_top, host),
            ClickTarget::MobileLink { href, target_top } => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.close();
                }
                self.on_anchor(&href, target_top, host);
            }
        }
    }

    fn on_element_click(&mut self, id: ElementId, host: &dyn Host) {
        match id {
            ElementId::SliderPrev | ElementId::SliderNext => {
                if let Some(hero) = self.hero.as_mut() {
                    hero.navigate(direction_of(id), host);
                }
            }
            ElementId::GalleryPrev | ElementId::GalleryNext => {
                if let Some(gallery) = self.gallery.as_mut() {
                    gallery.scroll(direction_of(id), host);
                }
            }
            ElementId::TestimonialPrev | ElementId::TestimonialNext => {
                if let Some(testimonials) = self.testimonials.as_mut() {
                    testimonials.scroll(direction_of(id), host);
                }
            }
            other => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.on_click(other);
                }
            }
        }
    }

    fn on_anchor(&mut self, href: &str, target_top: Option<f32>, host: &dyn Host) {
        let header_height = host.element_height(ElementId::Header);
        self.smooth_scroll.on_anchor_click(
            href,
            target_top,
            self.scroll_y,
            header_height,
            self.max_scroll,
        );
    }

    fn on_key(&mut self, key: Key, host: &dyn Host) {
        match key {
            Key::ArrowLeft | Key::ArrowRight => {
                let direction = if key == Key::ArrowLeft {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                if let Some(hero) = self.hero.as_mut() {
                    hero.navigate(direction, host);
                }
            }
            Key::Escape => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.on_escape();
                }
            }
        }
    }

    fn set_scroll(&mut self, offset: f32) {
        self.scroll_y = offset.clamp(0.0, self.max_scroll.max(0.0));
        if let Some(nav) = self.nav.as_mut() {
            nav.on_scroll(self.scroll_y);
        }
    }

    /// Document height minus viewport height, as laid out by the host.
    pub fn set_max_scroll(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        if self.scroll_y > self.max_scroll {
            self.set_scroll(self.max_scroll);
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu.as_ref().is_some_and(MobileMenu::body_scroll_locked)
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn hero(&self) -> Option<&HeroSlider> {
        self.hero.as_ref()
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    pub fn testimonials(&self) -> Option<&Testimonials> {
        self.testimonials.as_ref()
    }

    pub fn nav(&self) -> Option<&NavBar> {
        self.nav.as_ref()
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }
}

fn direction_of(id: ElementId) -> Direction {
    match id {
        ElementId::SliderPrev | ElementId::GalleryPrev | ElementId::TestimonialPrev => {
            Direction::Previous
        }
        _ => Direction::Next,
    }
}
