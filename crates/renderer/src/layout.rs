use batnotify_config::WindowConfig;

/// Subtracted from the text height before vertical centring.
pub const TEXT_BASELINE_FUDGE: i32 = 10;

/// Popup window size and border thickness, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width:            u32,
    pub height:           u32,
    pub border_thickness: u32,
}

impl Geometry {
    pub fn from_config(cfg: &WindowConfig) -> Self {
        Self {
            width:            cfg.width,
            height:           cfg.height,
            border_thickness: cfg.border_thickness,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

/// Rectangle outline as passed to `XDrawRectangle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x:      i32,
    pub y:      i32,
    pub width:  u32,
    pub height: u32,
}

/// Measured ink size of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtents {
    pub width:  i32,
    pub height: i32,
}

/// Everything a single repaint draws, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Concentric 1px outlines, outermost first.
    pub border: Vec<Rect>,
    pub text_x: i32,
    pub text_y: i32,
}

impl Frame {
    pub fn plan(geometry: &Geometry, text: TextExtents) -> Self {
        let border = (0..geometry.border_thickness)
            .map(|i| Rect {
                x:      i as i32,
                y:      i as i32,
                width:  geometry.width.saturating_sub(1 + 2 * i),
                height: geometry.height.saturating_sub(1 + 2 * i),
            })
            .collect();

        let (w, h) = (geometry.width as i32, geometry.height as i32);

        Self {
            border,
            text_x: (w - text.width) / 2,
            text_y: (h + text.height - TEXT_BASELINE_FUDGE) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(width: i32, height: i32) -> TextExtents {
        TextExtents { width, height }
    }

    #[test]
    fn two_pixel_border() {
        let frame = Frame::plan(&Geometry::default(), extents(0, 0));
        assert_eq!(
            frame.border,
            vec![
                Rect { x: 0, y: 0, width: 999, height: 199 },
                Rect { x: 1, y: 1, width: 997, height: 197 },
            ]
        );
    }

    #[test]
    fn centred_horizontally() {
        let geometry = Geometry::default();
        assert_eq!(Frame::plan(&geometry, extents(600, 40)).text_x, 200);
        // odd widths truncate
        assert_eq!(Frame::plan(&geometry, extents(601, 40)).text_x, 199);
    }

    #[test]
    fn vertical_fudge_applied() {
        let frame = Frame::plan(&Geometry::default(), extents(600, 40));
        assert_eq!(frame.text_y, (200 + 40 - 10) / 2);
    }

    #[test]
    fn text_wider_than_window_goes_negative() {
        let frame = Frame::plan(&Geometry::default(), extents(1100, 40));
        assert_eq!(frame.text_x, -50);
    }

    #[test]
    fn no_border_when_thickness_zero() {
        let geometry = Geometry { border_thickness: 0, ..Geometry::default() };
        assert!(Frame::plan(&geometry, extents(10, 10)).border.is_empty());
    }
}
