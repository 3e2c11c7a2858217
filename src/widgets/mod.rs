pub mod hero;
pub mod icons;
pub mod nav;
pub mod reveal;
pub mod smooth_scroll;
pub mod track;

pub use hero::HeroSlider;
pub use icons::{Icon, IconSet};
pub use nav::{MobileMenu, NavBar};
pub use reveal::{RevealSpec, ScrollReveal};
pub use smooth_scroll::SmoothScroll;
pub use track::{Gallery, Testimonials, TrackCarousel};
