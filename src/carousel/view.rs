//! Pure view model of a carousel: what to draw for the current state.

/// ARIA vocabulary a carousel labels its items and dots with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aria {
    /// Noun used in dot labels: "Go to {noun} {n}".
    pub noun: &'static str,
    /// Tab semantics (tabpanel items, tab dots with `aria-selected`).
    pub tabs: bool,
}

impl Aria {
    pub const HERO: Self = Self { noun: "slide", tabs: true };
    pub const GALLERY: Self = Self { noun: "image", tabs: false };
    pub const TESTIMONIALS: Self = Self { noun: "testimonial", tabs: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TabPanel,
    ListItem,
    Tab,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub active: bool,
    pub role: Role,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotView {
    pub index: usize,
    pub active: bool,
    pub role: Option<Role>,
    pub label: String,
    pub selected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    pub items: Vec<ItemView<'a, T>>,
    pub dots: Vec<DotView>,
    pub current_index: usize,
    pub offset: f32,
}

impl<T> CarouselView<'_, T> {
    pub fn active_dots(&self) -> impl Iterator<Item = &DotView> {
        self.dots.iter().filter(|dot| dot.active)
    }
}

pub(crate) fn build<'a, T>(
    items: &'a [T],
    current_index: usize,
    offset: f32,
    aria: Aria,
) -> CarouselView<'a, T> {
    let count = items.len();
    let items_view = items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemView {
            index,
            item,
            active: index == current_index,
            role: if aria.tabs { Role::TabPanel } else { Role::ListItem },
            label: aria
                .tabs
                .then(|| format!("Slide {} of {}", index + 1, count)),
        })
        .collect();

    let dots = (0..count)
        .map(|index| {
            let active = index == current_index;
            DotView {
                index,
                active,
                role: aria.tabs.then_some(Role::Tab),
                label: format!("Go to {} {}", aria.noun, index + 1),
                selected: aria.tabs.then_some(active),
            }
        })
        .collect();

    CarouselView {
        items: items_view,
        dots,
        current_index,
        offset,
    }
}
