use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Clinic landing page with hero slider, gallery and testimonials")]
pub struct Args {
    /// Directory holding slide and gallery images
    #[arg(long, env = "SHOWCASE_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Time each hero slide stays before auto-advancing
    #[arg(long, env = "SHOWCASE_SLIDER_INTERVAL_MS", default_value_t = SLIDER_INTERVAL_MS)]
    pub slider_interval_ms: u64,

    /// Period of the testimonial auto-scroll
    #[arg(long, env = "SHOWCASE_TESTIMONIAL_INTERVAL_MS", default_value_t = TESTIMONIAL_INTERVAL_MS)]
    pub testimonial_interval_ms: u64,

    /// Quiet time before a window resize reflows the carousels (0 = immediate)
    #[arg(long, env = "SHOWCASE_RESIZE_DEBOUNCE_MS", default_value_t = 0)]
    pub resize_debounce_ms: u64,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn page_config(&self) -> Result<PageConfig, ConfigError> {
        if self.slider_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "slider interval" });
        }
        if self.testimonial_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "testimonial interval" });
        }
        Ok(PageConfig {
            slider_interval: Duration::from_millis(self.slider_interval_ms),
            testimonial_interval: Duration::from_millis(self.testimonial_interval_ms),
            resize_debounce: Duration::from_millis(self.resize_debounce_ms),
            ..PageConfig::default()
        })
    }
}

/// Tunables of the widget core.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub slider_interval: Duration,
    pub testimonial_interval: Duration,
    pub resize_debounce: Duration,
    pub card_gap: f32,
    pub nav_scroll_threshold: f32,
    pub scroll_margin: f32,
    pub reveal_stagger_ms: f64,
    pub initial_position_delay_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slider_interval: Duration::from_millis(SLIDER_INTERVAL_MS),
            testimonial_interval: Duration::from_millis(TESTIMONIAL_INTERVAL_MS),
            resize_debounce: Duration::ZERO,
            card_gap: CARD_GAP,
            nav_scroll_threshold: NAV_SCROLL_THRESHOLD,
            scroll_margin: SMOOTH_SCROLL_MARGIN,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            initial_position_delay_ms: INITIAL_POSITION_DELAY_MS,
        }
    }
}
