//! Native window-manager handles.

use std::mem::MaybeUninit;

use sdl2_sys as sys;

use crate::{window::Window, Result};

impl Window<'_> {
    /// Platform handles behind this window. `subsystem` tells which member
    /// of `info` is valid.
    pub fn wm_info(&self) -> Result<sys::SysWMinfo> {
        let mut info = MaybeUninit::<sys::SysWMinfo>::zeroed();
        unsafe {
            (*info.as_mut_ptr()).version = sys::Version::current();
        }
        self.sdl.check_bool(unsafe {
            (self.sdl.fns.SDL_GetWindowWMInfo)(self.as_ptr(), info.as_mut_ptr())
        })?;
        Ok(unsafe { info.assume_init() })
    }
}
