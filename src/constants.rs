pub const WINDOW_WIDTH: i32 = 1280;            // Default window width
pub const WINDOW_HEIGHT: i32 = 800;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SLIDER_INTERVAL_MS: u64 = 7000;      // Hero slide display time before auto-advance
pub const TESTIMONIAL_INTERVAL_MS: u64 = 6000; // Period of the testimonial auto-scroll
pub const INITIAL_POSITION_DELAY_MS: f64 = 100.0; // Delay before gallery/testimonials snap to index 0

pub const CARD_GAP: f32 = 24.0;                // Horizontal gap between carousel cards (px)
pub const TABLET_MIN_WIDTH: f32 = 768.0;       // Two cards visible from here
pub const DESKTOP_MIN_WIDTH: f32 = 1280.0;     // Three testimonials visible from here

pub const NAV_SCROLL_THRESHOLD: f32 = 50.0;    // Scroll offset past which the nav bar turns solid
pub const SMOOTH_SCROLL_MARGIN: f32 = 20.0;    // Space left above an anchor target
pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;   // Seconds for an anchor scroll

pub const REVEAL_STAGGER_MS: f64 = 100.0;      // Per-entry delay when an element has none
pub const REVEAL_THRESHOLD: f32 = 0.1;         // Fraction of an element that must be on screen
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;    // Viewport bottom shrink for reveal checks

pub const TRACK_TRANSITION: f32 = 0.5;         // Seconds for a carousel track to slide
pub const SLIDE_FADE: f32 = 0.6;               // Seconds for a hero slide cross-fade

pub const ICON_STROKE_WIDTH: f32 = 2.5;        // Line width for the icon set
