//! Interactive widgets of the clinic landing page: hero slider, image
//! gallery, testimonial carousel, sticky navigation, scroll reveal and
//! smooth anchor scrolling.
//!
//! The widget core (`carousel`, `timing`, `viewport`, `widgets`, `page`) is
//! independent of any display surface and talks to it through
//! [`host::Host`]. The `render` module is the raylib adapter the binary uses.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod engine;
pub mod error;
pub mod host;
pub mod logging;
pub mod page;
pub mod render;
pub mod state;
pub mod timing;
pub mod viewport;
pub mod widgets;

pub use page::{CarouselKind, ClickTarget, Key, Page, PageEvent};
