//! Mouse state, warping, capture and cursors.

use std::ptr::NonNull;

use sdl2_sys as sys;

use crate::{surface::Surface, window::Window, Error, Result, Sdl};

/// Cursor position with a mask of `sys::button_mask` bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MouseState {
    pub buttons: u32,
    pub x: i32,
    pub y: i32,
}

impl MouseState {
    /// `button` is one of `sys::BUTTON_*`.
    pub fn is_pressed(&self, button: u8) -> bool {
        self.buttons & sys::button_mask(button) != 0
    }
}

/// A mouse cursor image. Freed on drop.
pub struct Cursor<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Cursor>,
}

impl Cursor<'_> {
    pub fn as_ptr(&self) -> *mut sys::Cursor {
        self.raw.as_ptr()
    }

    /// Make this the active cursor. It must stay alive while active.
    pub fn set(&self) {
        unsafe { (self.sdl.fns.SDL_SetCursor)(self.raw.as_ptr()) }
    }

    pub fn is_active(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_GetCursor)() == self.raw.as_ptr() }
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_FreeCursor)(self.raw.as_ptr()) }
    }
}

impl Sdl {
    /// Id of the window with mouse focus.
    pub fn get_mouse_focus(&self) -> Option<u32> {
        self.window_id_of(unsafe { (self.fns.SDL_GetMouseFocus)() })
    }

    /// Relative to the focus window, as of the last event pump.
    pub fn get_mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0, 0);
        let buttons = unsafe { (self.fns.SDL_GetMouseState)(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    /// In desktop coordinates, queried from the OS directly.
    pub fn get_global_mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0, 0);
        let buttons = unsafe { (self.fns.SDL_GetGlobalMouseState)(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    /// Motion since the last call.
    pub fn get_relative_mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0, 0);
        let buttons = unsafe { (self.fns.SDL_GetRelativeMouseState)(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    pub fn warp_mouse_global(&self, x: i32, y: i32) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_WarpMouseGlobal)(x, y) })?;
        Ok(())
    }

    /// Hide the cursor and report only relative motion.
    pub fn set_relative_mouse_mode(&self, enabled: bool) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_SetRelativeMouseMode)(enabled.into()) })?;
        Ok(())
    }

    pub fn get_relative_mouse_mode(&self) -> bool {
        unsafe { (self.fns.SDL_GetRelativeMouseMode)() }.into()
    }

    /// Keep receiving mouse events outside the focus window.
    pub fn capture_mouse(&self, enabled: bool) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_CaptureMouse)(enabled.into()) })?;
        Ok(())
    }

    /// A monochrome cursor. `data` and `mask` hold one bit per pixel, rows
    /// padded to whole bytes, and `w` must be a multiple of 8.
    pub fn create_cursor(&self, data: &[u8], mask: &[u8], w: i32, h: i32, hot_x: i32, hot_y: i32) -> Result<Cursor<'_>> {
        let row_bytes = usize::try_from(w).map_err(|_| Error::InvalidParameters)?.div_ceil(8);
        let rows = usize::try_from(h).map_err(|_| Error::InvalidParameters)?;
        let needed = row_bytes.checked_mul(rows).ok_or(Error::InvalidParameters)?;
        if data.len() < needed || mask.len() < needed {
            return Err(Error::InvalidParameters);
        }
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateCursor)(data.as_ptr(), mask.as_ptr(), w, h, hot_x, hot_y)
        })?;
        Ok(Cursor { sdl: self, raw })
    }

    pub fn create_color_cursor(&self, surface: &Surface<'_>, hot_x: i32, hot_y: i32) -> Result<Cursor<'_>> {
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateColorCursor)(surface.as_ptr(), hot_x, hot_y)
        })?;
        Ok(Cursor { sdl: self, raw })
    }

    /// `id` is one of `sys::SYSTEM_CURSOR_*`.
    pub fn create_system_cursor(&self, id: sys::SystemCursor) -> Result<Cursor<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_CreateSystemCursor)(id) })?;
        Ok(Cursor { sdl: self, raw })
    }

    /// Restore the default cursor.
    pub fn set_default_cursor(&self) {
        unsafe {
            let cursor = (self.fns.SDL_GetDefaultCursor)();
            if !cursor.is_null() {
                (self.fns.SDL_SetCursor)(cursor);
            }
        }
    }

    /// Force a redraw of the active cursor.
    pub fn redraw_cursor(&self) {
        unsafe { (self.fns.SDL_SetCursor)(std::ptr::null_mut()) }
    }

    /// `toggle` is `sys::ENABLE`, `sys::DISABLE` or `sys::QUERY`. Returns
    /// whether the cursor is shown afterwards.
    pub fn show_cursor(&self, toggle: i32) -> Result<bool> {
        Ok(self.check(unsafe { (self.fns.SDL_ShowCursor)(toggle) })? == sys::ENABLE)
    }
}

impl Window<'_> {
    pub fn warp_mouse(&self, x: i32, y: i32) {
        unsafe { (self.sdl.fns.SDL_WarpMouseInWindow)(self.as_ptr(), x, y) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_masks() {
        let state = MouseState {
            buttons: sys::button_mask(sys::BUTTON_LEFT) | sys::button_mask(sys::BUTTON_X2),
            x: 0,
            y: 0,
        };
        assert!(state.is_pressed(sys::BUTTON_LEFT));
        assert!(state.is_pressed(sys::BUTTON_X2));
        assert!(!state.is_pressed(sys::BUTTON_RIGHT));
    }
}
