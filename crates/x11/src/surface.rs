use batnotify_config::WindowConfig;
use batnotify_core::{NotifyError, Result};
use batnotify_renderer::{Rect, Surface, TextExtents};
use batnotify_theme::{Color, Theme};
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_int, c_uint};
use std::ptr;
use x11::{xft, xlib, xrender};

// ── Owned handles ─────────────────────────────────────────────────────────────
//
// Each wrapper releases exactly one X resource on drop.  Everything except
// `Connection` borrows the raw `Display*`, so they must be dropped before it.

struct Connection(*mut xlib::Display);

impl Connection {
    fn open() -> Result<Self> {
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            let name = std::env::var("DISPLAY").unwrap_or_else(|_| "$DISPLAY unset".to_string());
            return Err(NotifyError::Display(name));
        }
        Ok(Self(display))
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        unsafe { xlib::XCloseDisplay(self.0) };
    }
}

struct Font {
    display: *mut xlib::Display,
    font:    *mut xft::XftFont,
}

impl Font {
    fn open(display: *mut xlib::Display, screen: c_int, name: &str) -> Result<Self> {
        let pattern = CString::new(name).map_err(|_| NotifyError::Font(name.to_string()))?;
        let font = unsafe { xft::XftFontOpenName(display, screen, pattern.as_ptr()) };
        if font.is_null() {
            return Err(NotifyError::Font(name.to_string()));
        }
        Ok(Self { display, font })
    }
}

impl Drop for Font {
    fn drop(&mut self) {
        unsafe { xft::XftFontClose(self.display, self.font) };
    }
}

struct Window {
    display: *mut xlib::Display,
    id:      xlib::Window,
}

impl Window {
    fn create(
        display:    *mut xlib::Display,
        root:       xlib::Window,
        config:     &WindowConfig,
        background: Color,
    ) -> Result<Self> {
        let id = unsafe {
            xlib::XCreateSimpleWindow(
                display,
                root,
                0,
                0,
                config.width as c_uint,
                config.height as c_uint,
                0, // no native border; ours is drawn
                0,
                background.to_pixel() as _,
            )
        };
        if id == 0 {
            return Err(NotifyError::Window("XCreateSimpleWindow failed".into()));
        }
        let window = Self { display, id };

        let title = CString::new(config.title.as_str())
            .map_err(|_| NotifyError::Window(format!("invalid title '{}'", config.title)))?;
        unsafe { xlib::XStoreName(display, id, title.as_ptr()) };

        window.mark_as_notification();
        Ok(window)
    }

    /// Set `_NET_WM_WINDOW_TYPE` so the window manager treats the window as
    /// a transient overlay rather than an application.
    fn mark_as_notification(&self) {
        unsafe {
            let wm_type = xlib::XInternAtom(self.display, c"_NET_WM_WINDOW_TYPE".as_ptr(), 0);
            let notification = xlib::XInternAtom(
                self.display,
                c"_NET_WM_WINDOW_TYPE_NOTIFICATION".as_ptr(),
                0,
            );
            xlib::XChangeProperty(
                self.display,
                self.id,
                wm_type,
                xlib::XA_ATOM,
                32,
                xlib::PropModeReplace,
                &notification as *const xlib::Atom as *const u8,
                1,
            );
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { xlib::XDestroyWindow(self.display, self.id) };
    }
}

struct Gc {
    display: *mut xlib::Display,
    gc:      xlib::GC,
}

impl Gc {
    fn create(display: *mut xlib::Display, window: xlib::Window, foreground: Color) -> Result<Self> {
        let gc = unsafe { xlib::XCreateGC(display, window, 0, ptr::null_mut()) };
        if gc.is_null() {
            return Err(NotifyError::Window("XCreateGC failed".into()));
        }
        unsafe { xlib::XSetForeground(display, gc, foreground.to_pixel() as _) };
        Ok(Self { display, gc })
    }
}

impl Drop for Gc {
    fn drop(&mut self) {
        unsafe { xlib::XFreeGC(self.display, self.gc) };
    }
}

struct TextColor {
    display:  *mut xlib::Display,
    visual:   *mut xlib::Visual,
    colormap: xlib::Colormap,
    color:    xft::XftColor,
}

impl TextColor {
    fn alloc(
        display:  *mut xlib::Display,
        visual:   *mut xlib::Visual,
        colormap: xlib::Colormap,
        color:    Color,
    ) -> Result<Self> {
        let [red, green, blue, alpha] = color.to_rgba16();
        let value = xrender::XRenderColor { red, green, blue, alpha };

        let mut allocated: xft::XftColor = unsafe { mem::zeroed() };
        let ok = unsafe { xft::XftColorAllocValue(display, visual, colormap, &value, &mut allocated) };
        if ok == 0 {
            return Err(NotifyError::Window("cannot allocate text colour".into()));
        }
        Ok(Self { display, visual, colormap, color: allocated })
    }
}

impl Drop for TextColor {
    fn drop(&mut self) {
        unsafe { xft::XftColorFree(self.display, self.visual, self.colormap, &mut self.color) };
    }
}

struct Draw(*mut xft::XftDraw);

impl Draw {
    fn create(
        display:  *mut xlib::Display,
        window:   xlib::Window,
        visual:   *mut xlib::Visual,
        colormap: xlib::Colormap,
    ) -> Result<Self> {
        let draw = unsafe { xft::XftDrawCreate(display, window, visual, colormap) };
        if draw.is_null() {
            return Err(NotifyError::Window("XftDrawCreate failed".into()));
        }
        Ok(Self(draw))
    }
}

impl Drop for Draw {
    fn drop(&mut self) {
        unsafe { xft::XftDrawDestroy(self.0) };
    }
}

// ── Resource bundle ───────────────────────────────────────────────────────────

/// Every X resource the popup holds, released together on drop.
///
/// Fields drop top to bottom, the reverse of the order `open` acquires them.
/// A failure halfway through `open` drops the locals acquired so far in the
/// same order, so no path leaks the display connection.
pub struct XPopup {
    draw:   Draw,
    color:  TextColor,
    gc:     Gc,
    window: Window,
    font:   Font,
    conn:   Connection,
}

impl XPopup {
    pub fn open(config: &WindowConfig, theme: &Theme) -> Result<Self> {
        let conn    = Connection::open()?;
        let display = conn.0;

        let (screen, root, visual, colormap) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            (
                screen,
                xlib::XRootWindow(display, screen),
                xlib::XDefaultVisual(display, screen),
                xlib::XDefaultColormap(display, screen),
            )
        };

        let font   = Font::open(display, screen, &theme.font)?;
        let window = Window::create(display, root, config, theme.background)?;
        let gc     = Gc::create(display, window.id, theme.border)?;
        let color  = TextColor::alloc(display, visual, colormap, theme.text)?;
        let draw   = Draw::create(display, window.id, visual, colormap)?;

        unsafe { xlib::XSelectInput(display, window.id, xlib::ExposureMask) };

        Ok(Self { draw, color, gc, window, font, conn })
    }

    fn display(&self) -> *mut xlib::Display {
        self.conn.0
    }
}

impl Surface for XPopup {
    fn show(&mut self) {
        unsafe {
            xlib::XMapWindow(self.display(), self.window.id);
            xlib::XFlush(self.display());
        }
    }

    fn clear(&mut self) {
        unsafe { xlib::XClearWindow(self.display(), self.window.id) };
    }

    fn draw_rectangle(&mut self, rect: Rect) {
        unsafe {
            xlib::XDrawRectangle(
                self.display(),
                self.window.id,
                self.gc.gc,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            );
        }
    }

    fn text_extents(&mut self, text: &str) -> TextExtents {
        let mut info: xrender::XGlyphInfo = unsafe { mem::zeroed() };
        unsafe {
            xft::XftTextExtentsUtf8(
                self.display(),
                self.font.font,
                text.as_ptr() as *const _,
                text.len() as c_int,
                &mut info,
            );
        }
        TextExtents { width: info.width as i32, height: info.height as i32 }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        unsafe {
            xft::XftDrawStringUtf8(
                self.draw.0,
                &self.color.color,
                self.font.font,
                x,
                y,
                text.as_ptr() as *const _,
                text.len() as c_int,
            );
        }
    }

    fn flush(&mut self) {
        unsafe { xlib::XFlush(self.display()) };
    }

    fn drain_redraws(&mut self) -> usize {
        let mut exposes = 0;
        unsafe {
            while xlib::XPending(self.display()) > 0 {
                let mut event: xlib::XEvent = mem::zeroed();
                xlib::XNextEvent(self.display(), &mut event);
                if event.get_type() == xlib::Expose {
                    exposes += 1;
                }
            }
        }
        exposes
    }
}
