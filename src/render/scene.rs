//! Draws the page with raylib from the widget core's view models.

// The core only says where things should be. Textures and in-between
// motion (track slides, cross-fades, reveal fades) live here.

use std::path::Path;

use raylib::prelude::*;
use tracing::info;

use crate::constants::{SLIDE_FADE, TRACK_TRANSITION};
use crate::content::{
    AvatarColor, Testimonial, CLINIC_PHONE, GALLERY_IMAGES, HERO_BADGE, HERO_CALL_TO_ACTION,
    HERO_SLIDES,
};
use crate::page::Page;
use crate::render::layout::{PageLayout, TrackLayout, FEATURES, HEADER_HEIGHT, NAV_LINKS};
use crate::render::texture_loader::load_or_placeholder;
use crate::widgets::{Icon, IconSet};

const BRAND: Color = Color::new(13, 148, 136, 255);
const INK: Color = Color::new(15, 23, 42, 255);
const MUTED: Color = Color::new(100, 116, 139, 255);
const SURFACE: Color = Color::new(248, 250, 252, 255);
const CARD: Color = Color::WHITE;
const STAR: Color = Color::new(250, 204, 21, 255);

const REVEAL_FADE: f32 = 0.6;  // Seconds for a revealed element to fade in
const REVEAL_RISE: f32 = 30.0; // Pixels a revealed element rises while fading

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

fn shifted(rect: Rectangle, dy: f32) -> Rectangle {
    Rectangle::new(rect.x, rect.y + dy, rect.width, rect.height)
}

// Move `value` toward `target` by at most `step`
fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}

fn text_width(text: &str, size: i32) -> f32 {
    text.chars().count() as f32 * size as f32 * 0.55 // Average glyph of the default font
}

/// Greedy word wrap against an estimated glyph width.
pub fn wrap_text(text: &str, max_width: f32, size: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && text_width(&candidate, size) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Eased horizontal position of a card track.
struct TrackMotion {
    target: f32,
    current: f32,
    elapsed: f32,
    tween: Option<ease::Tween>,
}

impl TrackMotion {
    fn new() -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
            tween: None,
        }
    }

    fn update(&mut self, target: f32, dt: f32) {
        if target != self.target {
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.current, target, TRACK_TRANSITION));
            self.target = target;
            self.elapsed = 0.0;
        }
        if let Some(tween) = self.tween.as_mut() {
            self.current = tween.apply(dt);
            self.elapsed += dt;
            if self.elapsed >= TRACK_TRANSITION {
                self.current = self.target;
                self.tween = None;
            }
        }
    }
}

pub struct Scene {
    hero_textures: Vec<Option<Texture2D>>,
    gallery_textures: Vec<Option<Texture2D>>,
    slide_alpha: Vec<f32>,
    gallery_motion: TrackMotion,
    testimonial_motion: TrackMotion,
    reveal_alpha: Vec<f32>,
}

impl Scene {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, assets: &Path, reveal_targets: usize) -> Self {
        let hero_textures: Vec<_> = HERO_SLIDES
            .iter()
            .map(|slide| load_or_placeholder(rl, thread, &assets.join(slide.image), INK))
            .collect();
        let gallery_textures: Vec<_> = GALLERY_IMAGES
            .iter()
            .map(|image| load_or_placeholder(rl, thread, &assets.join(image.src), MUTED))
            .collect();
        info!(
            hero = hero_textures.iter().flatten().count(),
            gallery = gallery_textures.iter().flatten().count(),
            "textures loaded"
        );

        let mut slide_alpha = vec![0.0; HERO_SLIDES.len()];
        if let Some(first) = slide_alpha.first_mut() {
            *first = 1.0;
        }
        Self {
            hero_textures,
            gallery_textures,
            slide_alpha,
            gallery_motion: TrackMotion::new(),
            testimonial_motion: TrackMotion::new(),
            reveal_alpha: vec![0.0; reveal_targets],
        }
    }

    pub fn update(&mut self, page: &Page, dt: f32) {
        if let Some(hero) = page.hero() {
            let current = hero.current_index();
            for (i, alpha) in self.slide_alpha.iter_mut().enumerate() {
                let target = if i == current { 1.0 } else { 0.0 };
                *alpha = approach(*alpha, target, dt / SLIDE_FADE);
            }
        }
        if let Some(gallery) = page.gallery() {
            self.gallery_motion.update(gallery.view().offset, dt);
        }
        if let Some(testimonials) = page.testimonials() {
            self.testimonial_motion.update(testimonials.view().offset, dt);
        }
        for (i, alpha) in self.reveal_alpha.iter_mut().enumerate() {
            let target = if page.reveal().is_visible(i) { 1.0 } else { 0.0 };
            *alpha = approach(*alpha, target, dt / REVEAL_FADE);
        }
    }

    fn reveal(&self, index: usize, rect: Rectangle, scroll_y: f32) -> (Rectangle, f32) {
        let alpha = self.reveal_alpha.get(index).copied().unwrap_or(1.0);
        (shifted(rect, (1.0 - alpha) * REVEAL_RISE - scroll_y), alpha)
    }

    // --- Drawing ---

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page) {
        let scroll_y = page.scroll_y();
        let icons = page.icons();
        d.clear_background(SURFACE);

        self.draw_hero(d, layout, page, icons, scroll_y);
        self.draw_about(d, layout, scroll_y);
        self.draw_gallery(d, layout, page, icons, scroll_y);
        self.draw_testimonials(d, layout, page, icons, scroll_y);
        self.draw_contact(d, layout, icons, scroll_y);
        draw_header(d, layout, page, icons); // Fixed chrome goes on top of scrolled content
        draw_mobile_menu(d, layout, page, icons);
    }

    fn draw_hero(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page, icons: &IconSet, scroll_y: f32) {
        let hero = shifted(layout.hero, -scroll_y);
        if hero.y + hero.height < 0.0 {
            return;
        }
        d.draw_rectangle_rec(hero, INK);
        let Some(slider) = page.hero() else {
            return;
        };
        let view = slider.view();

        for item in &view.items {
            let alpha = self.slide_alpha.get(item.index).copied().unwrap_or(0.0);
            if alpha <= 0.0 {
                continue;
            }
            if let Some(Some(texture)) = self.hero_textures.get(item.index) {
                draw_cover(d, texture, hero, with_alpha(Color::WHITE, alpha));
            }
            d.draw_rectangle_rec(hero, with_alpha(Color::new(0, 0, 0, 140), alpha));

            let x = layout.padding + 40.0;
            let mid = hero.y + hero.height * 0.5;
            let text = with_alpha(Color::WHITE, alpha);
            let badge = Rectangle::new(x, mid - 130.0, text_width(HERO_BADGE, 16) + 24.0, 30.0);
            d.draw_rectangle_rounded(badge, 1.0, 8, with_alpha(BRAND, alpha));
            d.draw_text(HERO_BADGE, (badge.x + 12.0) as i32, (badge.y + 7.0) as i32, 16, text);

            let title_size = if layout.mobile { 30 } else { 44 };
            let max_width = hero.width - 2.0 * x;
            let mut y = mid - 84.0;
            for line in wrap_text(item.item.title, max_width, title_size) {
                d.draw_text(&line, x as i32, y as i32, title_size, text);
                y += title_size as f32 + 6.0;
            }
            for line in wrap_text(item.item.desc, max_width.min(640.0), 20).into_iter().take(3) {
                d.draw_text(&line, x as i32, y as i32 + 8, 20, with_alpha(Color::new(226, 232, 240, 255), alpha));
                y += 26.0;
            }
        }

        let cta = shifted(layout.hero_cta, -scroll_y);
        d.draw_rectangle_rounded(cta, 0.5, 8, BRAND);
        draw_icon(d, icons, Icon::PhoneCall, cta.x + 18.0, cta.y + 14.0, 20.0, Color::WHITE);
        d.draw_text(HERO_CALL_TO_ACTION, (cta.x + 48.0) as i32, (cta.y + 15.0) as i32, 18, Color::WHITE);

        for (rect, icon) in [(layout.hero_prev, Icon::ChevronLeft), (layout.hero_next, Icon::ChevronRight)] {
            draw_round_button(d, icons, shifted(rect, -scroll_y), icon, with_alpha(Color::WHITE, 0.2), Color::WHITE);
        }
        for (dot, rect) in view.dots.iter().zip(&layout.hero_dots) {
            let rect = shifted(*rect, -scroll_y);
            let color = if dot.active { Color::WHITE } else { with_alpha(Color::WHITE, 0.45) };
            d.draw_circle_v(center(rect), rect.width * 0.5, color);
        }

        if slider.progress().is_some() {
            let bar = shifted(layout.progress, -scroll_y);
            d.draw_rectangle_rec(bar, with_alpha(Color::WHITE, 0.2));
            d.draw_rectangle_rec(
                Rectangle::new(bar.x, bar.y, bar.width * slider.progress_fill(), bar.height),
                BRAND,
            );
        }
    }

    fn draw_about(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, scroll_y: f32) {
        let (title, alpha) = self.reveal(0, layout.about_title, scroll_y);
        draw_section_title(d, title, "Why Patients Choose Us", alpha);

        for (i, (rect, (heading, body))) in layout.features.iter().zip(FEATURES).enumerate() {
            let (rect, alpha) = self.reveal(1 + i, *rect, scroll_y);
            if alpha <= 0.0 {
                continue;
            }
            d.draw_rectangle_rounded(rect, 0.12, 8, with_alpha(CARD, alpha));
            d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y, 6.0, rect.height), with_alpha(BRAND, alpha));
            d.draw_text(heading, (rect.x + 24.0) as i32, (rect.y + 28.0) as i32, 22, with_alpha(INK, alpha));
            let mut y = rect.y + 66.0;
            for line in wrap_text(body, rect.width - 48.0, 18) {
                d.draw_text(&line, (rect.x + 24.0) as i32, y as i32, 18, with_alpha(MUTED, alpha));
                y += 24.0;
            }
        }
    }

    fn draw_gallery(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page, icons: &IconSet, scroll_y: f32) {
        let section = &layout.gallery;
        let reveal_index = 1 + layout.features.len();
        let (title, alpha) = self.reveal(reveal_index, section.title, scroll_y);
        draw_section_title(d, title, "Treatment Gallery", alpha);
        let Some(gallery) = page.gallery() else {
            return;
        };
        let view = gallery.view();
        let track = shifted(section.track, -scroll_y);

        for item in &view.items {
            let card = card_rect(section, track, item.index, self.gallery_motion.current);
            if card.x > track.x + track.width || card.x + card.width < track.x {
                continue;
            }
            match self.gallery_textures.get(item.index) {
                Some(Some(texture)) => draw_cover(d, texture, card, Color::WHITE),
                _ => d.draw_rectangle_rec(card, MUTED),
            }
            let caption = Rectangle::new(card.x, card.y + card.height - 44.0, card.width, 44.0);
            d.draw_rectangle_rec(caption, Color::new(0, 0, 0, 150));
            d.draw_text(item.item.caption, (caption.x + 14.0) as i32, (caption.y + 13.0) as i32, 18, Color::WHITE);
        }
        mask_outside_track(d, layout, track);
        draw_track_controls(d, icons, section, &view.dots, scroll_y);
    }

    fn draw_testimonials(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page, icons: &IconSet, scroll_y: f32) {
        let section = &layout.testimonials;
        let reveal_index = 2 + layout.features.len();
        let (title, alpha) = self.reveal(reveal_index, section.title, scroll_y);
        draw_section_title(d, title, "What Our Patients Say", alpha);
        let Some(testimonials) = page.testimonials() else {
            return;
        };
        let view = testimonials.view();
        let track = shifted(section.track, -scroll_y);

        for item in &view.items {
            let card = card_rect(section, track, item.index, self.testimonial_motion.current);
            if card.x > track.x + track.width || card.x + card.width < track.x {
                continue;
            }
            draw_testimonial(d, icons, card, item.item);
        }
        mask_outside_track(d, layout, track);
        draw_track_controls(d, icons, section, &view.dots, scroll_y);
    }

    fn draw_contact(&self, d: &mut RaylibDrawHandle, layout: &PageLayout, icons: &IconSet, scroll_y: f32) {
        let reveal_index = 3 + layout.features.len();
        let (card, alpha) = self.reveal(reveal_index, layout.contact_card, scroll_y);
        if alpha <= 0.0 {
            return;
        }
        d.draw_rectangle_rounded(card, 0.15, 8, with_alpha(BRAND, alpha));
        d.draw_text("Book a consultation", (card.x + 32.0) as i32, (card.y + 32.0) as i32, 28, with_alpha(Color::WHITE, alpha));
        draw_icon(d, icons, Icon::PhoneCall, card.x + 32.0, card.y + 88.0, 32.0, with_alpha(Color::WHITE, alpha));
        d.draw_text(CLINIC_PHONE, (card.x + 80.0) as i32, (card.y + 92.0) as i32, 28, with_alpha(Color::WHITE, alpha));
    }
}

// --- Drawing Helpers ---

fn center(rect: Rectangle) -> Vector2 {
    Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
}

fn card_rect(section: &TrackLayout, track: Rectangle, index: usize, offset: f32) -> Rectangle {
    let x = track.x + index as f32 * (section.card_width + crate::constants::CARD_GAP) - offset;
    Rectangle::new(x, track.y, section.card_width, track.height)
}

// Cover the margins beside a track so overflowing cards stay hidden
fn mask_outside_track(d: &mut RaylibDrawHandle, layout: &PageLayout, track: Rectangle) {
    let width = layout.viewport().width;
    d.draw_rectangle_rec(Rectangle::new(0.0, track.y, track.x, track.height), SURFACE);
    let right = track.x + track.width;
    d.draw_rectangle_rec(Rectangle::new(right, track.y, width - right, track.height), SURFACE);
}

fn draw_track_controls(
    d: &mut RaylibDrawHandle,
    icons: &IconSet,
    section: &TrackLayout,
    dots: &[crate::carousel::DotView],
    scroll_y: f32,
) {
    for (rect, icon) in [(section.prev, Icon::ChevronLeft), (section.next, Icon::ChevronRight)] {
        draw_round_button(d, icons, shifted(rect, -scroll_y), icon, CARD, INK);
    }
    for (dot, rect) in dots.iter().zip(&section.dots) {
        let rect = shifted(*rect, -scroll_y);
        let color = if dot.active { BRAND } else { Color::new(203, 213, 225, 255) };
        d.draw_circle_v(center(rect), rect.width * 0.5, color);
    }
}

fn draw_testimonial(d: &mut RaylibDrawHandle, icons: &IconSet, card: Rectangle, testimonial: &Testimonial) {
    d.draw_rectangle_rounded(card, 0.08, 8, CARD);
    let avatar = Vector2::new(card.x + 44.0, card.y + 44.0);
    d.draw_circle_v(avatar, 24.0, avatar_color(testimonial.color));
    let initials_x = avatar.x - text_width(testimonial.initials, 18) * 0.5;
    d.draw_text(testimonial.initials, initials_x as i32, (avatar.y - 9.0) as i32, 18, Color::WHITE);
    d.draw_text(testimonial.name, (card.x + 80.0) as i32, (card.y + 26.0) as i32, 20, INK);
    for star in 0..5 {
        draw_icon(d, icons, Icon::Star, card.x + 80.0 + star as f32 * 18.0, card.y + 52.0, 16.0, STAR);
    }
    let mut y = card.y + 92.0;
    for line in wrap_text(testimonial.text, card.width - 48.0, 17).into_iter().take(5) {
        d.draw_text(&line, (card.x + 24.0) as i32, y as i32, 17, MUTED);
        y += 23.0;
    }
    d.draw_text(testimonial.meta, (card.x + 24.0) as i32, (card.y + card.height - 34.0) as i32, 15, BRAND);
}

fn avatar_color(color: AvatarColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::new(r, g, b, 255)
}

fn draw_section_title(d: &mut RaylibDrawHandle, rect: Rectangle, title: &str, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    d.draw_text(title, rect.x as i32, (rect.y + 10.0) as i32, 34, with_alpha(INK, alpha));
    d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y + 52.0, 64.0, 4.0), with_alpha(BRAND, alpha));
}

fn draw_round_button(d: &mut RaylibDrawHandle, icons: &IconSet, rect: Rectangle, icon: Icon, fill: Color, stroke: Color) {
    d.draw_circle_v(center(rect), rect.width * 0.5, fill);
    let size = rect.width * 0.55;
    draw_icon(d, icons, icon, center(rect).x - size * 0.5, center(rect).y - size * 0.5, size, stroke);
}

fn draw_icon(d: &mut RaylibDrawHandle, icons: &IconSet, icon: Icon, x: f32, y: f32, size: f32, color: Color) {
    let thick = icons.stroke(size);
    for ((x0, y0), (x1, y1)) in icons.layout(icon, x, y, size) {
        d.draw_line_ex(Vector2::new(x0, y0), Vector2::new(x1, y1), thick, color);
    }
}

/// Scale `texture` to fill `dest`, cropping the overflow symmetrically.
fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, dest: Rectangle, tint: Color) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 || dest.width <= 0.0 || dest.height <= 0.0 {
        return;
    }
    let scale = (dest.width / tex_width).max(dest.height / tex_height);
    let src_width = dest.width / scale;
    let src_height = dest.height / scale;
    let source = Rectangle::new(
        (tex_width - src_width) * 0.5,
        (tex_height - src_height) * 0.5,
        src_width,
        src_height,
    );
    d.draw_texture_pro(texture, source, dest, Vector2::new(0.0, 0.0), 0.0, tint);
}

// --- Header & Mobile Menu ---

fn draw_header(d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page, icons: &IconSet) {
    let width = layout.viewport().width;
    let scrolled = page.nav().is_some_and(|nav| nav.is_scrolled());
    let (background, text) = if scrolled {
        (CARD, INK)
    } else {
        (Color::new(0, 0, 0, 60), Color::WHITE)
    };
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT), background);
    if scrolled {
        d.draw_rectangle_rec(Rectangle::new(0.0, HEADER_HEIGHT - 1.0, width, 1.0), Color::new(226, 232, 240, 255));
    }
    d.draw_text("Shree Clinic", layout.padding as i32, 24, 26, if scrolled { BRAND } else { text });

    if layout.mobile {
        let toggle = layout.toggle;
        let size = toggle.width * 0.6;
        let icon = if page.menu().is_some_and(|menu| menu.toggle_active()) {
            Icon::Close
        } else {
            Icon::Menu
        };
        draw_icon(d, icons, icon, toggle.x + (toggle.width - size) * 0.5, toggle.y + (toggle.height - size) * 0.5, size, text);
        return;
    }
    for (rect, (label, _)) in layout.nav_links.iter().zip(NAV_LINKS) {
        let x = rect.x + (rect.width - text_width(label, 18)) * 0.5;
        d.draw_text(label, x as i32, 27, 18, text);
    }
}

fn draw_mobile_menu(d: &mut RaylibDrawHandle, layout: &PageLayout, page: &Page, icons: &IconSet) {
    if !page.menu().is_some_and(|menu| menu.is_open()) {
        return;
    }
    let viewport = layout.viewport();
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, viewport.width, viewport.height), Color::new(0, 0, 0, 120));
    d.draw_rectangle_rec(layout.menu_panel, CARD);
    let close = layout.menu_close;
    let size = close.width * 0.6;
    draw_icon(d, icons, Icon::Close, close.x + (close.width - size) * 0.5, close.y + (close.height - size) * 0.5, size, INK);
    for (rect, (label, _)) in layout.menu_links.iter().zip(NAV_LINKS) {
        d.draw_text(label, rect.x as i32, (rect.y + 14.0) as i32, 22, INK);
        d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y + rect.height - 1.0, rect.width, 1.0), Color::new(226, 232, 240, 255));
    }
}
