use crate::constants::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Viewport widths at which more items fit side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Items visible below the smallest step.
    pub base: usize,
    /// `(min_width, visible)` pairs, widest first.
    pub steps: &'static [(f32, usize)],
}

impl Breakpoints {
    pub const GALLERY: Self = Self {
        base: 1,
        steps: &[(TABLET_MIN_WIDTH, 2)],
    };

    pub const TESTIMONIALS: Self = Self {
        base: 1,
        steps: &[(DESKTOP_MIN_WIDTH, 3), (TABLET_MIN_WIDTH, 2)],
    };

    pub fn visible_count(&self, viewport_width: f32) -> usize {
        self.steps
            .iter()
            .find(|(min_width, _)| viewport_width >= *min_width)
            .map_or(self.base, |(_, visible)| *visible)
    }
}

/// How directional navigation moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationPolicy {
    /// One item on screen, full modulo wraparound.
    SingleWrap,
    /// Several items on screen, steps one item and wraps between 0 and the
    /// last start index.
    MultiVisible(Breakpoints),
}

impl NavigationPolicy {
    pub fn visible_count(&self, viewport_width: f32) -> usize {
        match self {
            Self::SingleWrap => 1,
            Self::MultiVisible(breakpoints) => breakpoints.visible_count(viewport_width),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub item_count: usize,
    pub visible_count: usize,
    /// Width of the first rendered item at the last positioning, 0 before.
    pub item_width: f32,
    /// Horizontal translation applied to the track, in pixels.
    pub offset: f32,
}

impl CarouselState {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            current_index: 0,
            item_count,
            visible_count,
            item_width: 0.0,
            offset: 0.0,
        }
    }

    /// Last index a multi-visible carousel may start at. Zero when every
    /// item already fits.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Index one step away from the cursor under `policy`.
    pub fn step_target(&self, policy: &NavigationPolicy, direction: Direction) -> usize {
        let current = self.current_index;
        match policy {
            NavigationPolicy::SingleWrap => {
                let n = self.item_count.max(1);
                match direction {
                    Direction::Next => (current + 1) % n,
                    Direction::Previous => (current + n - 1) % n,
                }
            }
            NavigationPolicy::MultiVisible(_) => {
                let max = self.max_index();
                match direction {
                    Direction::Next if current >= max => 0,
                    Direction::Next => current + 1,
                    Direction::Previous if current == 0 => max,
                    Direction::Previous => current - 1,
                }
            }
        }
    }

    /// Bring an externally supplied index into the item range.
    pub fn normalize(&self, policy: &NavigationPolicy, index: usize) -> usize {
        let last = self.item_count.saturating_sub(1);
        match policy {
            NavigationPolicy::SingleWrap => index % self.item_count.max(1),
            NavigationPolicy::MultiVisible(_) => index.min(last),
        }
    }
}
