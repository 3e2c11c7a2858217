//! Named line icons used by the page.

use crate::constants::ICON_STROKE_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    PhoneCall,
    Star,
    ChevronLeft,
    ChevronRight,
    Menu,
    Close,
}

/// Polyline segments of an icon in a 24x24 box.
pub type Segment = ((f32, f32), (f32, f32));

impl Icon {
    pub fn segments(&self) -> &'static [Segment] {
        match self {
            Self::ChevronLeft => &[((15.0, 6.0), (9.0, 12.0)), ((9.0, 12.0), (15.0, 18.0))],
            Self::ChevronRight => &[((9.0, 6.0), (15.0, 12.0)), ((15.0, 12.0), (9.0, 18.0))],
            Self::Menu => &[
                ((4.0, 6.0), (20.0, 6.0)),
                ((4.0, 12.0), (20.0, 12.0)),
                ((4.0, 18.0), (20.0, 18.0)),
            ],
            Self::Close => &[((6.0, 6.0), (18.0, 18.0)), ((18.0, 6.0), (6.0, 18.0))],
            Self::Star => &[
                ((12.0, 2.0), (15.1, 8.3)),
                ((15.1, 8.3), (22.0, 9.3)),
                ((22.0, 9.3), (17.0, 14.1)),
                ((17.0, 14.1), (18.2, 21.0)),
                ((18.2, 21.0), (12.0, 17.8)),
                ((12.0, 17.8), (5.8, 21.0)),
                ((5.8, 21.0), (7.0, 14.1)),
                ((7.0, 14.1), (2.0, 9.3)),
                ((2.0, 9.3), (8.9, 8.3)),
                ((8.9, 8.3), (12.0, 2.0)),
            ],
            Self::PhoneCall => &[
                ((5.0, 3.0), (9.0, 3.0)),
                ((9.0, 3.0), (10.5, 7.5)),
                ((10.5, 7.5), (8.0, 9.5)),
                ((8.0, 9.5), (14.5, 16.0)),
                ((14.5, 16.0), (16.5, 13.5)),
                ((16.5, 13.5), (21.0, 15.0)),
                ((21.0, 15.0), (21.0, 19.0)),
                ((21.0, 19.0), (19.0, 21.0)),
                ((19.0, 21.0), (3.0, 5.0)),
                ((3.0, 5.0), (5.0, 3.0)),
                ((15.0, 3.0), (21.0, 9.0)),
                ((15.0, 7.0), (17.0, 9.0)),
            ],
        }
    }
}

/// Icons resolved once at start-up with a shared stroke width.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSet {
    pub stroke_width: f32,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            stroke_width: ICON_STROKE_WIDTH,
        }
    }
}

impl IconSet {
    /// Segments for `icon` scaled to `size` and placed at `(x, y)`.
    pub fn layout(&self, icon: Icon, x: f32, y: f32, size: f32) -> Vec<Segment> {
        let scale = size / 24.0;
        icon.segments()
            .iter()
            .map(|&((x0, y0), (x1, y1))| {
                (
                    (x + x0 * scale, y + y0 * scale),
                    (x + x1 * scale, y + y1 * scale),
                )
            })
            .collect()
    }

    /// Stroke width at a given icon size.
    pub fn stroke(&self, size: f32) -> f32 {
        self.stroke_width * size / 24.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_stays_on_its_grid() {
        let all = [
            Icon::PhoneCall,
            Icon::Star,
            Icon::ChevronLeft,
            Icon::ChevronRight,
            Icon::Menu,
            Icon::Close,
        ];
        for icon in all {
            let segments = icon.segments();
            assert!(!segments.is_empty(), "{icon:?} has no strokes");
            for &((x0, y0), (x1, y1)) in segments {
                for v in [x0, y0, x1, y1] {
                    assert!((0.0..=24.0).contains(&v), "{icon:?} leaves the grid");
                }
            }
        }
    }

    #[test]
    fn layout_scales_into_place() {
        let icons = IconSet::default();
        let segments = icons.layout(Icon::ChevronLeft, 100.0, 50.0, 48.0);
        assert_eq!(segments[0], ((130.0, 62.0), (118.0, 74.0)));
        assert_eq!(icons.stroke(48.0), 5.0);
    }
}
