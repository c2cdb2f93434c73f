//! Toolkit-independent drawing for the battery popup.
//!
//! The windowing backend implements [`Surface`]; everything that decides
//! *where* things go, and *when* to repaint, lives here so it can be tested
//! without a display server.

pub mod layout;
pub mod popup;

pub use layout::{Frame, Geometry, Rect, TextExtents, TEXT_BASELINE_FUDGE};
pub use popup::{run_popup, PopupSummary};

/// Low-level drawing primitives a windowing backend must provide.
pub trait Surface {
    /// Map the window so it becomes visible.
    fn show(&mut self);

    /// Fill the whole window with its background.
    fn clear(&mut self);

    /// Outline a rectangle one pixel wide in the border colour.
    fn draw_rectangle(&mut self, rect: Rect);

    /// Rendered size of `text` in the popup font.
    fn text_extents(&mut self, text: &str) -> TextExtents;

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Push buffered drawing requests to the display server.
    fn flush(&mut self);

    /// Consume every pending event without blocking and return how many of
    /// them were redraw (Expose) requests.
    fn drain_redraws(&mut self) -> usize;
}

/// Clear the window, then draw the border and the centred message.
///
/// This is the only repaint path; the initial paint, redraw requests and
/// loop ticks all go through it.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, geometry: &Geometry, message: &str) -> Frame {
    surface.clear();

    let extents = surface.text_extents(message);
    let frame   = Frame::plan(geometry, extents);

    for rect in &frame.border {
        surface.draw_rectangle(*rect);
    }
    surface.draw_text(frame.text_x, frame.text_y, message);
    surface.flush();

    frame
}
