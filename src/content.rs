//! Static page content. Defined once, never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub title: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarColor {
    Teal,
    Orange,
    Blue,
    Rose,
}

impl AvatarColor {
    /// RGB triple used for the avatar disc.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Teal => (13, 148, 136),
            Self::Orange => (234, 88, 12),
            Self::Blue => (37, 99, 235),
            Self::Rose => (225, 29, 72),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub initials: &'static str,
    pub color: AvatarColor,
    pub text: &'static str,
    pub meta: &'static str,
}

pub const HERO_BADGE: &str = "Day Care Procedure";
pub const HERO_CALL_TO_ACTION: &str = "Call Clinic Now";
pub const CLINIC_PHONE: &str = "8123198711";

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Advanced Cure for PILES",
        desc: "Ayurvedic formulations & signature Ksharakarma treatment for permanent relief.",
        image: "slider-1.png",
    },
    HeroSlide {
        title: "IFTak Technique for FISTULA",
        desc: "Complementing Kshara Sutra for high success rates without sphincter damage.",
        image: "slider-2.png",
    },
    HeroSlide {
        title: "Laser-Assisted SINUS Care",
        desc: "Kshara Karma with modern laser assistance for pilonidal sinus treatment.",
        image: "slider-3.png",
    },
];

pub const GALLERY_IMAGES: [GalleryImage; 7] = [
    GalleryImage { src: "p1.jpeg", caption: "Successful Piles Treatment" },
    GalleryImage { src: "p2.jpeg", caption: "Complex Fistula Case Recovery" },
    GalleryImage { src: "p3.jpeg", caption: "Laser assisted results" },
    GalleryImage { src: "p4.jpeg", caption: "Patient Post-Op Result" },
    GalleryImage { src: "p5.jpeg", caption: "Clinical Documentation" },
    GalleryImage { src: "p6.jpeg", caption: "Treatment Progress Case" },
    GalleryImage { src: "p7.jpeg", caption: "Advanced Pilonidal Care" },
];

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Lingesh Biradar",
        initials: "LB",
        color: AvatarColor::Teal,
        text: "One of the best kinds of hospitals specialised in piles treatment nearby, Best hands on experience Doctor available.",
        meta: "Verified Review - 11 months ago",
    },
    Testimonial {
        name: "Mirgaji Sudarshan",
        initials: "MS",
        color: AvatarColor::Orange,
        text: "Nature and behaviour of doctor is very good. Correct explanation regarding the disease and suitable treatment will be given.",
        meta: "Verified Review - 11 months ago",
    },
    Testimonial {
        name: "Viswadeep Morambe",
        initials: "VM",
        color: AvatarColor::Blue,
        text: "Well equiped hospital with cost effective procedures for piles operation. Highly recommended.",
        meta: "Eagle Watch - 11 months ago",
    },
    Testimonial {
        name: "Sudhakar Tugave",
        initials: "ST",
        color: AvatarColor::Rose,
        text: "Calm, patient and responsive listens and responds professionally. A truly comforting experience.",
        meta: "4 reviews - 1 year ago",
    },
    Testimonial {
        name: "Amarja Mirasdar",
        initials: "AM",
        color: AvatarColor::Teal,
        text: "Best service by the experienced doctor, most recommended for piles pain relief.",
        meta: "Verified Patient",
    },
];
