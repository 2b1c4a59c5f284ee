//! Video drivers, displays and display modes.

use sdl2_sys as sys;
use sys::{DisplayMode, Rect};

use crate::{opt_cstr_ptr, opt_cstring, opt_string, Result, Sdl};

/// Dots per inch of a display.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Dpi {
    pub diagonal: f32,
    pub horizontal: f32,
    pub vertical: f32,
}

impl Sdl {
    pub fn get_num_video_drivers(&self) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_GetNumVideoDrivers)() })
    }

    pub fn get_video_driver(&self, index: i32) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GetVideoDriver)(index)) }
    }

    /// Start video with `driver`, or the default driver.
    pub fn video_init(&self, driver: Option<&str>) -> Result<()> {
        let driver = opt_cstring(driver)?;
        self.check(unsafe { (self.fns.SDL_VideoInit)(opt_cstr_ptr(&driver)) })?;
        Ok(())
    }

    pub fn video_quit(&self) {
        unsafe { (self.fns.SDL_VideoQuit)() }
    }

    /// `None` before video is initialized.
    pub fn get_current_video_driver(&self) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GetCurrentVideoDriver)()) }
    }

    pub fn get_num_video_displays(&self) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_GetNumVideoDisplays)() })
    }

    pub fn get_display_name(&self, display_index: i32) -> Result<String> {
        let name = unsafe { (self.fns.SDL_GetDisplayName)(display_index) };
        unsafe { opt_string(name) }.ok_or_else(|| self.last_error())
    }

    pub fn get_display_bounds(&self, display_index: i32) -> Result<Rect> {
        let mut rect = Rect::default();
        self.check(unsafe { (self.fns.SDL_GetDisplayBounds)(display_index, &mut rect) })?;
        Ok(rect)
    }

    /// Bounds minus task bars, docks and menus.
    pub fn get_display_usable_bounds(&self, display_index: i32) -> Result<Rect> {
        let mut rect = Rect::default();
        self.check(unsafe { (self.fns.SDL_GetDisplayUsableBounds)(display_index, &mut rect) })?;
        Ok(rect)
    }

    pub fn get_display_dpi(&self, display_index: i32) -> Result<Dpi> {
        let mut dpi = Dpi::default();
        self.check(unsafe {
            (self.fns.SDL_GetDisplayDPI)(
                display_index,
                &mut dpi.diagonal,
                &mut dpi.horizontal,
                &mut dpi.vertical,
            )
        })?;
        Ok(dpi)
    }

    /// One of the `sys::ORIENTATION_*` values.
    pub fn get_display_orientation(&self, display_index: i32) -> Result<sys::DisplayOrientation> {
        let get_display_orientation = optional_fn!(self, SDL_GetDisplayOrientation);
        Ok(unsafe { get_display_orientation(display_index) })
    }

    pub fn get_num_display_modes(&self, display_index: i32) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_GetNumDisplayModes)(display_index) })
    }

    /// Modes are sorted largest first, then by depth and refresh rate.
    pub fn get_display_mode(&self, display_index: i32, mode_index: i32) -> Result<DisplayMode> {
        let mut mode = DisplayMode::default();
        self.check(unsafe { (self.fns.SDL_GetDisplayMode)(display_index, mode_index, &mut mode) })?;
        Ok(mode)
    }

    /// Every mode of `display_index`.
    pub fn display_modes(&self, display_index: i32) -> Result<Vec<DisplayMode>> {
        (0..self.get_num_display_modes(display_index)?)
            .map(|mode_index| self.get_display_mode(display_index, mode_index))
            .collect()
    }

    pub fn get_desktop_display_mode(&self, display_index: i32) -> Result<DisplayMode> {
        let mut mode = DisplayMode::default();
        self.check(unsafe { (self.fns.SDL_GetDesktopDisplayMode)(display_index, &mut mode) })?;
        Ok(mode)
    }

    pub fn get_current_display_mode(&self, display_index: i32) -> Result<DisplayMode> {
        let mut mode = DisplayMode::default();
        self.check(unsafe { (self.fns.SDL_GetCurrentDisplayMode)(display_index, &mut mode) })?;
        Ok(mode)
    }

    /// The available mode nearest to `mode`. Zero fields take the desktop's
    /// value.
    pub fn get_closest_display_mode(&self, display_index: i32, mode: &DisplayMode) -> Result<DisplayMode> {
        let mut closest = DisplayMode::default();
        self.check_ptr(unsafe {
            (self.fns.SDL_GetClosestDisplayMode)(display_index, mode, &mut closest)
        })?;
        Ok(closest)
    }

    pub fn is_screen_saver_enabled(&self) -> bool {
        unsafe { (self.fns.SDL_IsScreenSaverEnabled)() }.into()
    }

    pub fn enable_screen_saver(&self) {
        unsafe { (self.fns.SDL_EnableScreenSaver)() }
    }

    pub fn disable_screen_saver(&self) {
        unsafe { (self.fns.SDL_DisableScreenSaver)() }
    }
}
