#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use showcase::config::PageConfig;
use showcase::host::{ElementId, Host};
use showcase::viewport::Viewport;
use showcase::widgets::RevealSpec;
use showcase::Page;

pub const DESKTOP: Viewport = Viewport { width: 1440.0, height: 900.0 };
pub const PHONE: Viewport = Viewport { width: 390.0, height: 844.0 };

/// Markup stand-in with fixed element boxes.
#[derive(Debug, Default, Clone)]
pub struct StubPage {
    present: HashSet<ElementId>,
    widths: HashMap<ElementId, f32>,
    heights: HashMap<ElementId, f32>,
}

impl StubPage {
    /// Every element present, card widths of a wide layout.
    pub fn desktop() -> Self {
        Self {
            present: ElementId::ALL.into_iter().collect(),
            widths: HashMap::from([
                (ElementId::SliderRoot, 1440.0),
                (ElementId::GalleryTrack, 660.0),
                (ElementId::TestimonialTrack, 432.0),
            ]),
            heights: HashMap::from([(ElementId::Header, 72.0)]),
        }
    }

    pub fn without(mut self, id: ElementId) -> Self {
        self.present.remove(&id);
        self
    }

    pub fn with_width(mut self, id: ElementId, width: f32) -> Self {
        self.widths.insert(id, width);
        self
    }
}

impl Host for StubPage {
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

pub fn load(host: &StubPage, viewport: Viewport) -> Page {
    load_with(host, viewport, &PageConfig::default())
}

pub fn load_with(host: &StubPage, viewport: Viewport, config: &PageConfig) -> Page {
    let reveal = [RevealSpec::default(); 4];
    let mut page = Page::load(host, config, viewport, &reveal, 0.0);
    page.set_max_scroll(4000.0);
    page
}

/// Feed frames every 16 ms from `from` up to and including `to`.
pub fn run_frames(page: &mut Page, host: &StubPage, from: f64, to: f64) {
    let mut now = from;
    while now <= to {
        page.handle(showcase::PageEvent::Frame { now, dt: 0.016 }, host);
        now += 16.0;
    }
}
