use std::{
    ffi::{c_void, CString},
    ptr::NonNull,
};

use sdl2_sys as sys;
use sys::{DisplayMode, Rect};

use crate::{opt_ptr, string_from_ptr, surface::Surface, Result, Sdl};

/// A native window. Destroyed on drop.
pub struct Window<'sdl> {
    pub(crate) sdl: &'sdl Sdl,
    raw: NonNull<sys::Window>,
}

/// Red, green and blue translation tables.
pub type GammaRamp = [[u16; 256]; 3];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BordersSize {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Sdl {
    /// `x` and `y` may be `sys::WINDOWPOS_CENTERED` or
    /// `sys::WINDOWPOS_UNDEFINED`; `flags` is a mask of `sys::WINDOW_*`.
    pub fn create_window(&self, title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Result<Window<'_>> {
        let title = CString::new(title)?;
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateWindow)(title.as_ptr(), x, y, w, h, flags)
        })?;
        Ok(Window { sdl: self, raw })
    }

    /// Wrap a window created by another toolkit.
    ///
    /// # Safety
    ///
    /// `data` must be a native window handle of the current video driver.
    pub unsafe fn create_window_from(&self, data: *const c_void) -> Result<Window<'_>> {
        let raw = self.check_ptr((self.fns.SDL_CreateWindowFrom)(data))?;
        Ok(Window { sdl: self, raw })
    }

    pub(crate) fn window_id_of(&self, window: *mut sys::Window) -> Option<u32> {
        if window.is_null() {
            None
        } else {
            Some(unsafe { (self.fns.SDL_GetWindowID)(window) })
        }
    }

    /// Whether a window with `id` exists.
    pub fn window_exists(&self, id: u32) -> bool {
        !unsafe { (self.fns.SDL_GetWindowFromID)(id) }.is_null()
    }

    /// Id of the window holding an input grab.
    pub fn get_grabbed_window_id(&self) -> Option<u32> {
        self.window_id_of(unsafe { (self.fns.SDL_GetGrabbedWindow)() })
    }
}

impl<'sdl> Window<'sdl> {
    pub(crate) fn from_raw(sdl: &'sdl Sdl, raw: NonNull<sys::Window>) -> Self {
        Self { sdl, raw }
    }

    pub fn as_ptr(&self) -> *mut sys::Window {
        self.raw.as_ptr()
    }

    pub fn id(&self) -> Result<u32> {
        self.sdl
            .check_nonzero(unsafe { (self.sdl.fns.SDL_GetWindowID)(self.raw.as_ptr()) })
    }

    pub fn display_index(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_GetWindowDisplayIndex)(self.raw.as_ptr()) })
    }

    /// The mode used when fullscreen. `None` picks the window size and the
    /// desktop format and rate.
    pub fn set_display_mode(&mut self, mode: Option<&DisplayMode>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowDisplayMode)(self.raw.as_ptr(), opt_ptr(mode))
        })?;
        Ok(())
    }

    pub fn display_mode(&self) -> Result<DisplayMode> {
        let mut mode = DisplayMode::default();
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetWindowDisplayMode)(self.raw.as_ptr(), &mut mode)
        })?;
        Ok(mode)
    }

    pub fn pixel_format(&self) -> Result<u32> {
        let format = unsafe { (self.sdl.fns.SDL_GetWindowPixelFormat)(self.raw.as_ptr()) };
        match format {
            sys::PIXELFORMAT_UNKNOWN => Err(self.sdl.last_error()),
            format => Ok(format),
        }
    }

    /// Mask of `sys::WINDOW_*`.
    pub fn flags(&self) -> u32 {
        unsafe { (self.sdl.fns.SDL_GetWindowFlags)(self.raw.as_ptr()) }
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        let title = CString::new(title)?;
        unsafe { (self.sdl.fns.SDL_SetWindowTitle)(self.raw.as_ptr(), title.as_ptr()) };
        Ok(())
    }

    pub fn title(&self) -> String {
        unsafe { string_from_ptr((self.sdl.fns.SDL_GetWindowTitle)(self.raw.as_ptr())) }
    }

    pub fn set_icon(&mut self, icon: &Surface<'_>) {
        unsafe { (self.sdl.fns.SDL_SetWindowIcon)(self.raw.as_ptr(), icon.as_ptr()) }
    }

    /// Attach a pointer under `name`, returning the one it replaced.
    ///
    /// # Safety
    ///
    /// The native side never dereferences `userdata`, but other code
    /// reading it back with [`Window::data`] will.
    pub unsafe fn set_data(&mut self, name: &str, userdata: *mut c_void) -> Result<*mut c_void> {
        let name = CString::new(name)?;
        Ok((self.sdl.fns.SDL_SetWindowData)(self.raw.as_ptr(), name.as_ptr(), userdata))
    }

    pub fn data(&self, name: &str) -> Result<*mut c_void> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.sdl.fns.SDL_GetWindowData)(self.raw.as_ptr(), name.as_ptr()) })
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        unsafe { (self.sdl.fns.SDL_SetWindowPosition)(self.raw.as_ptr(), x, y) }
    }

    pub fn position(&self) -> (i32, i32) {
        let (mut x, mut y) = (0, 0);
        unsafe { (self.sdl.fns.SDL_GetWindowPosition)(self.raw.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn set_size(&mut self, w: i32, h: i32) {
        unsafe { (self.sdl.fns.SDL_SetWindowSize)(self.raw.as_ptr(), w, h) }
    }

    pub fn size(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_GetWindowSize)(self.raw.as_ptr(), &mut w, &mut h) };
        (w, h)
    }

    /// Size of the decorations around the client area.
    pub fn borders_size(&self) -> Result<BordersSize> {
        let mut size = BordersSize::default();
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetWindowBordersSize)(
                self.raw.as_ptr(),
                &mut size.top,
                &mut size.left,
                &mut size.bottom,
                &mut size.right,
            )
        })?;
        Ok(size)
    }

    pub fn set_minimum_size(&mut self, w: i32, h: i32) {
        unsafe { (self.sdl.fns.SDL_SetWindowMinimumSize)(self.raw.as_ptr(), w, h) }
    }

    pub fn minimum_size(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_GetWindowMinimumSize)(self.raw.as_ptr(), &mut w, &mut h) };
        (w, h)
    }

    pub fn set_maximum_size(&mut self, w: i32, h: i32) {
        unsafe { (self.sdl.fns.SDL_SetWindowMaximumSize)(self.raw.as_ptr(), w, h) }
    }

    pub fn maximum_size(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_GetWindowMaximumSize)(self.raw.as_ptr(), &mut w, &mut h) };
        (w, h)
    }

    pub fn set_bordered(&mut self, bordered: bool) {
        unsafe { (self.sdl.fns.SDL_SetWindowBordered)(self.raw.as_ptr(), bordered.into()) }
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        unsafe { (self.sdl.fns.SDL_SetWindowResizable)(self.raw.as_ptr(), resizable.into()) }
    }

    pub fn show(&mut self) {
        unsafe { (self.sdl.fns.SDL_ShowWindow)(self.raw.as_ptr()) }
    }

    pub fn hide(&mut self) {
        unsafe { (self.sdl.fns.SDL_HideWindow)(self.raw.as_ptr()) }
    }

    pub fn raise(&mut self) {
        unsafe { (self.sdl.fns.SDL_RaiseWindow)(self.raw.as_ptr()) }
    }

    pub fn maximize(&mut self) {
        unsafe { (self.sdl.fns.SDL_MaximizeWindow)(self.raw.as_ptr()) }
    }

    pub fn minimize(&mut self) {
        unsafe { (self.sdl.fns.SDL_MinimizeWindow)(self.raw.as_ptr()) }
    }

    pub fn restore(&mut self) {
        unsafe { (self.sdl.fns.SDL_RestoreWindow)(self.raw.as_ptr()) }
    }

    /// `flags` is `sys::WINDOW_FULLSCREEN`, `sys::WINDOW_FULLSCREEN_DESKTOP`
    /// or zero for windowed.
    pub fn set_fullscreen(&mut self, flags: u32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowFullscreen)(self.raw.as_ptr(), flags)
        })?;
        Ok(())
    }

    /// The software framebuffer of the window, valid until the window is
    /// resized or destroyed.
    pub fn surface(&mut self) -> Result<Surface<'_>> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.fns.SDL_GetWindowSurface)(self.raw.as_ptr()) })?;
        Ok(Surface::borrowed(self.sdl, raw))
    }

    pub fn update_surface(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_UpdateWindowSurface)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn update_surface_rects(&self, rects: &[Rect]) -> Result<()> {
        let count = crate::count(rects.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_UpdateWindowSurfaceRects)(self.raw.as_ptr(), rects.as_ptr(), count)
        })?;
        Ok(())
    }

    pub fn set_grab(&mut self, grabbed: bool) {
        unsafe { (self.sdl.fns.SDL_SetWindowGrab)(self.raw.as_ptr(), grabbed.into()) }
    }

    pub fn grab(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_GetWindowGrab)(self.raw.as_ptr()) }.into()
    }

    /// Gamma correction for the display the window is on. 1.0 is
    /// unchanged.
    pub fn set_brightness(&mut self, brightness: f32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowBrightness)(self.raw.as_ptr(), brightness)
        })?;
        Ok(())
    }

    pub fn brightness(&self) -> f32 {
        unsafe { (self.sdl.fns.SDL_GetWindowBrightness)(self.raw.as_ptr()) }
    }

    pub fn set_opacity(&mut self, opacity: f32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowOpacity)(self.raw.as_ptr(), opacity)
        })?;
        Ok(())
    }

    pub fn opacity(&self) -> Result<f32> {
        let mut opacity = 1.0;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetWindowOpacity)(self.raw.as_ptr(), &mut opacity)
        })?;
        Ok(opacity)
    }

    pub fn set_modal_for(&mut self, parent: &Window<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowModalFor)(self.raw.as_ptr(), parent.raw.as_ptr())
        })?;
        Ok(())
    }

    pub fn set_input_focus(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_SetWindowInputFocus)(self.raw.as_ptr()) })?;
        Ok(())
    }

    /// Channels left `None` keep their current table.
    pub fn set_gamma_ramp(
        &mut self,
        red: Option<&[u16; 256]>,
        green: Option<&[u16; 256]>,
        blue: Option<&[u16; 256]>,
    ) -> Result<()> {
        let ptr = |ramp: Option<&[u16; 256]>| ramp.map_or(std::ptr::null(), |ramp| ramp.as_ptr());
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetWindowGammaRamp)(self.raw.as_ptr(), ptr(red), ptr(green), ptr(blue))
        })?;
        Ok(())
    }

    pub fn gamma_ramp(&self) -> Result<GammaRamp> {
        let mut ramp = [[0; 256]; 3];
        let [red, green, blue] = &mut ramp;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetWindowGammaRamp)(
                self.raw.as_ptr(),
                red.as_mut_ptr(),
                green.as_mut_ptr(),
                blue.as_mut_ptr(),
            )
        })?;
        Ok(ramp)
    }

    pub fn sdl(&self) -> &'sdl Sdl {
        self.sdl
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroyWindow)(self.raw.as_ptr()) }
    }
}
