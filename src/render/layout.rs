//! Box layout of the page for the current window size. Also the [`Host`]
//! the widget core measures against.

// Scrolling content is in document coordinates. Header and mobile menu
// rectangles are in screen coordinates since they stay fixed.

use raylib::prelude::*;

use crate::carousel::Breakpoints;
use crate::constants::{CARD_GAP, TABLET_MIN_WIDTH};
use crate::content::{GALLERY_IMAGES, HERO_SLIDES, TESTIMONIALS};
use crate::host::{ElementId, Host};
use crate::page::{CarouselKind, ClickTarget};
use crate::viewport::Viewport;
use crate::widgets::reveal::is_intersecting;
use crate::widgets::RevealSpec;

// --- Metrics ---

pub const HEADER_HEIGHT: f32 = 72.0;
const SECTION_PADDING: f32 = 72.0;
const TITLE_HEIGHT: f32 = 56.0;
const GALLERY_CARD_HEIGHT: f32 = 300.0;
const TESTIMONIAL_CARD_HEIGHT: f32 = 250.0;
const FEATURE_HEIGHT: f32 = 150.0;
const ARROW_SIZE: f32 = 44.0;
const DOT_SIZE: f32 = 12.0;
const DOT_SPACING: f32 = 22.0;
const MENU_WIDTH: f32 = 280.0; // Slide-in panel, right edge
const MENU_LINK_HEIGHT: f32 = 52.0;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Gallery", "#gallery"),
    ("Reviews", "#testimonials"),
    ("Contact", "#contact"),
];

pub const FEATURES: [(&str, &str); 3] = [
    ("Day Care Procedures", "Walk in, walk out the same day."),
    ("Ayurvedic Expertise", "Ksharakarma and Kshara Sutra specialists."),
    ("Modern Laser Care", "Minimal pain, faster recovery."),
];

/// A horizontally scrolling card section.
#[derive(Debug, Clone)]
pub struct TrackLayout {
    pub section: Rectangle,
    pub title: Rectangle,
    pub track: Rectangle,
    pub card_width: f32,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Rectangle>,
}

impl TrackLayout {
    fn new(top: f32, viewport: Viewport, padding: f32, card_height: f32, breakpoints: Breakpoints, count: usize) -> Self {
        let title = Rectangle::new(padding, top + SECTION_PADDING, viewport.width - 2.0 * padding, TITLE_HEIGHT);
        let track_top = title.y + title.height + 24.0;
        let track = Rectangle::new(padding, track_top, viewport.width - 2.0 * padding, card_height);
        let visible = breakpoints.visible_count(viewport.width) as f32;
        let card_width = ((track.width - CARD_GAP * (visible - 1.0)) / visible).max(1.0);

        let arrows_y = title.y + (TITLE_HEIGHT - ARROW_SIZE) * 0.5;
        let next = Rectangle::new(track.x + track.width - ARROW_SIZE, arrows_y, ARROW_SIZE, ARROW_SIZE);
        let prev = Rectangle::new(next.x - ARROW_SIZE - 12.0, arrows_y, ARROW_SIZE, ARROW_SIZE);

        let dots = dot_row(viewport.width * 0.5, track.y + track.height + 28.0, count);
        let bottom = track.y + track.height + 56.0 + SECTION_PADDING;
        Self {
            section: Rectangle::new(0.0, top, viewport.width, bottom - top),
            title,
            track,
            card_width,
            prev,
            next,
            dots,
        }
    }

    fn hit(&self, point: Vector2, prev: ElementId, next: ElementId, kind: CarouselKind) -> Option<ClickTarget> {
        if self.prev.check_collision_point_rec(point) {
            return Some(ClickTarget::Element(prev));
        }
        if self.next.check_collision_point_rec(point) {
            return Some(ClickTarget::Element(next));
        }
        hit_dot(&self.dots, point, kind)
    }
}

fn dot_row(center_x: f32, center_y: f32, count: usize) -> Vec<Rectangle> {
    let width = DOT_SPACING * count.saturating_sub(1) as f32;
    (0..count)
        .map(|i| {
            let x = center_x - width * 0.5 + i as f32 * DOT_SPACING;
            Rectangle::new(x - DOT_SIZE * 0.5, center_y - DOT_SIZE * 0.5, DOT_SIZE, DOT_SIZE)
        })
        .collect()
}

fn hit_dot(dots: &[Rectangle], point: Vector2, carousel: CarouselKind) -> Option<ClickTarget> {
    dots.iter()
        .position(|dot| grow(*dot, 4.0).check_collision_point_rec(point))
        .map(|index| ClickTarget::Dot { carousel, index })
}

fn grow(rect: Rectangle, by: f32) -> Rectangle {
    Rectangle::new(rect.x - by, rect.y - by, rect.width + 2.0 * by, rect.height + 2.0 * by)
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    viewport: Viewport,
    pub mobile: bool,
    pub padding: f32,

    pub hero: Rectangle,
    pub hero_prev: Rectangle,
    pub hero_next: Rectangle,
    pub hero_cta: Rectangle,
    pub hero_dots: Vec<Rectangle>,
    pub progress: Rectangle,

    pub about: Rectangle,
    pub about_title: Rectangle,
    pub features: Vec<Rectangle>,

    pub gallery: TrackLayout,
    pub testimonials: TrackLayout,

    pub contact: Rectangle,
    pub contact_card: Rectangle,

    pub nav_links: Vec<Rectangle>,
    pub toggle: Rectangle,
    pub menu_panel: Rectangle,
    pub menu_close: Rectangle,
    pub menu_links: Vec<Rectangle>,

    pub document_height: f32,
}

impl PageLayout {
    pub fn new(viewport: Viewport) -> Self {
        let mobile = viewport.width < TABLET_MIN_WIDTH;
        let padding = if mobile { 20.0 } else { 48.0 };
        let width = viewport.width;

        let hero = Rectangle::new(0.0, 0.0, width, (viewport.height * 0.85).clamp(420.0, 640.0));
        let arrows_y = hero.height * 0.5 - ARROW_SIZE * 0.5;
        let hero_prev = Rectangle::new(16.0, arrows_y, ARROW_SIZE, ARROW_SIZE);
        let hero_next = Rectangle::new(width - 16.0 - ARROW_SIZE, arrows_y, ARROW_SIZE, ARROW_SIZE);
        let hero_cta = Rectangle::new(padding + 40.0, hero.height * 0.5 + 90.0, 220.0, 48.0);
        let hero_dots = dot_row(width * 0.5, hero.height - 36.0, HERO_SLIDES.len());
        let progress = Rectangle::new(0.0, hero.height - 4.0, width, 4.0);

        let about_top = hero.height;
        let about_title = Rectangle::new(padding, about_top + SECTION_PADDING, width - 2.0 * padding, TITLE_HEIGHT);
        let columns = if mobile { 1 } else { FEATURES.len() };
        let feature_width = (about_title.width - CARD_GAP * (columns as f32 - 1.0)) / columns as f32;
        let features_top = about_title.y + TITLE_HEIGHT + 24.0;
        let features: Vec<Rectangle> = (0..FEATURES.len())
            .map(|i| {
                let column = i % columns;
                let row = i / columns;
                Rectangle::new(
                    padding + column as f32 * (feature_width + CARD_GAP),
                    features_top + row as f32 * (FEATURE_HEIGHT + CARD_GAP),
                    feature_width,
                    FEATURE_HEIGHT,
                )
            })
            .collect();
        let rows = FEATURES.len().div_ceil(columns) as f32;
        let about_bottom = features_top + rows * (FEATURE_HEIGHT + CARD_GAP) + SECTION_PADDING;
        let about = Rectangle::new(0.0, about_top, width, about_bottom - about_top);

        let gallery = TrackLayout::new(
            about_bottom,
            viewport,
            padding,
            GALLERY_CARD_HEIGHT,
            Breakpoints::GALLERY,
            GALLERY_IMAGES.len(),
        );
        let gallery_bottom = gallery.section.y + gallery.section.height;
        let testimonials = TrackLayout::new(
            gallery_bottom,
            viewport,
            padding,
            TESTIMONIAL_CARD_HEIGHT,
            Breakpoints::TESTIMONIALS,
            TESTIMONIALS.len(),
        );
        let contact_top = testimonials.section.y + testimonials.section.height;
        let contact_card = Rectangle::new(padding, contact_top + SECTION_PADDING, width - 2.0 * padding, 160.0);
        let contact = Rectangle::new(0.0, contact_top, width, 160.0 + 2.0 * SECTION_PADDING);
        let document_height = contact.y + contact.height;

        let nav_links = if mobile {
            Vec::new()
        } else {
            let link_width = 110.0;
            let start = width - padding - link_width * NAV_LINKS.len() as f32;
            (0..NAV_LINKS.len())
                .map(|i| Rectangle::new(start + i as f32 * link_width, 0.0, link_width, HEADER_HEIGHT))
                .collect()
        };
        let toggle = Rectangle::new(width - padding - ARROW_SIZE, (HEADER_HEIGHT - ARROW_SIZE) * 0.5, ARROW_SIZE, ARROW_SIZE);
        let menu_width = MENU_WIDTH.min(width);
        let menu_panel = Rectangle::new(width - menu_width, 0.0, menu_width, viewport.height);
        let menu_close = Rectangle::new(width - 16.0 - ARROW_SIZE, 16.0, ARROW_SIZE, ARROW_SIZE);
        let menu_links = (0..NAV_LINKS.len())
            .map(|i| {
                Rectangle::new(
                    menu_panel.x + 24.0,
                    96.0 + i as f32 * MENU_LINK_HEIGHT,
                    menu_width - 48.0,
                    MENU_LINK_HEIGHT,
                )
            })
            .collect();

        Self {
            viewport,
            mobile,
            padding,
            hero,
            hero_prev,
            hero_next,
            hero_cta,
            hero_dots,
            progress,
            about,
            about_title,
            features,
            gallery,
            testimonials,
            contact,
            contact_card,
            nav_links,
            toggle,
            menu_panel,
            menu_close,
            menu_links,
            document_height,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    // --- Queries ---

    /// Document top of the section an anchor id names.
    pub fn section_top(&self, id: &str) -> Option<f32> {
        match id {
            "about" => Some(self.about.y),
            "gallery" => Some(self.gallery.section.y),
            "testimonials" => Some(self.testimonials.section.y),
            "contact" => Some(self.contact.y),
            _ => None,
        }
    }

    fn anchor(&self, href: &str, scroll_y: f32) -> (String, Option<f32>) {
        let target_top = href
            .strip_prefix('#')
            .and_then(|id| self.section_top(id))
            .map(|top| top - scroll_y);
        (href.to_string(), target_top)
    }

    /// Elements that fade in when scrolled into view, in observation order.
    pub fn reveal_targets(&self) -> Vec<Rectangle> {
        let mut targets = vec![self.about_title];
        targets.extend(self.features.iter().copied());
        targets.push(self.gallery.title);
        targets.push(self.testimonials.title);
        targets.push(self.contact_card);
        targets
    }

    pub fn reveal_specs(&self) -> Vec<RevealSpec> {
        let mut specs = vec![RevealSpec::default()];
        specs.extend((0..self.features.len()).map(|i| RevealSpec {
            delay_ms: Some(i as f64 * 150.0),
        }));
        specs.extend([RevealSpec::default(); 3]);
        specs
    }

    pub fn intersections(&self, scroll_y: f32) -> Vec<bool> {
        self.reveal_targets()
            .iter()
            .map(|rect| is_intersecting(rect.y - scroll_y, rect.height, self.viewport.height))
            .collect()
    }

    /// Whether a screen point lies over the hero slider.
    pub fn over_slider(&self, point: Vector2, scroll_y: f32, menu_open: bool) -> bool {
        if menu_open || point.y < HEADER_HEIGHT {
            return false;
        }
        self.hero
            .check_collision_point_rec(Vector2::new(point.x, point.y + scroll_y))
    }

    /// What a click at a screen point lands on.
    pub fn hit_test(&self, point: Vector2, scroll_y: f32, menu_open: bool) -> Option<ClickTarget> {
        if menu_open {
            if self.menu_close.check_collision_point_rec(point) {
                return Some(ClickTarget::Element(ElementId::MobileClose));
            }
            if let Some(i) = self.menu_links.iter().position(|r| r.check_collision_point_rec(point)) {
                let (href, target_top) = self.anchor(NAV_LINKS[i].1, scroll_y);
                return Some(ClickTarget::MobileLink { href, target_top });
            }
            if self.menu_panel.check_collision_point_rec(point) {
                return None;
            }
            return Some(ClickTarget::Element(ElementId::MobileBackdrop));
        }

        if point.y < HEADER_HEIGHT {
            if self.mobile && self.toggle.check_collision_point_rec(point) {
                return Some(ClickTarget::Element(ElementId::NavToggle));
            }
            let i = self.nav_links.iter().position(|r| r.check_collision_point_rec(point))?;
            let (href, target_top) = self.anchor(NAV_LINKS[i].1, scroll_y);
            return Some(ClickTarget::Anchor { href, target_top });
        }

        let doc = Vector2::new(point.x, point.y + scroll_y);
        if self.hero_prev.check_collision_point_rec(doc) {
            return Some(ClickTarget::Element(ElementId::SliderPrev));
        }
        if self.hero_next.check_collision_point_rec(doc) {
            return Some(ClickTarget::Element(ElementId::SliderNext));
        }
        if let Some(target) = hit_dot(&self.hero_dots, doc, CarouselKind::Hero) {
            return Some(target);
        }
        if self.hero_cta.check_collision_point_rec(doc) {
            let (href, target_top) = self.anchor("#contact", scroll_y);
            return Some(ClickTarget::Anchor { href, target_top });
        }
        self.gallery
            .hit(doc, ElementId::GalleryPrev, ElementId::GalleryNext, CarouselKind::Gallery)
            .or_else(|| {
                self.testimonials.hit(
                    doc,
                    ElementId::TestimonialPrev,
                    ElementId::TestimonialNext,
                    CarouselKind::Testimonials,
                )
            })
    }
}

// --- Measurements for the widget core ---

impl Host for PageLayout {
    fn has_element(&self, _id: ElementId) -> bool {
        true
    }

    fn first_child_width(&self, track: ElementId) -> Option<f32> {
        match track {
            ElementId::SliderRoot => Some(self.hero.width),
            ElementId::GalleryTrack => Some(self.gallery.card_width),
            ElementId::TestimonialTrack => Some(self.testimonials.card_width),
            _ => None,
        }
    }

    fn element_height(&self, id: ElementId) -> f32 {
        match id {
            ElementId::Header | ElementId::Nav => HEADER_HEIGHT,
            ElementId::SliderRoot => self.hero.height,
            ElementId::GalleryTrack => self.gallery.track.height,
            ElementId::TestimonialTrack => self.testimonials.track.height,
            _ => 0.0,
        }
    }
}
