//! Generic carousel: one cursor, one track offset, one dot per item.
//!
//! The hero slider, the gallery and the testimonials are all instances of
//! [`Carousel`], differing only in their [`NavigationPolicy`] and labels.

pub mod engine;
pub mod state;
pub mod view;

pub use engine::Carousel;
pub use state::{Breakpoints, CarouselState, Direction, NavigationPolicy};
pub use view::{Aria, CarouselView, DotView, ItemView, Role};
