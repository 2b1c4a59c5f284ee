use std::{
    ffi::{c_void, CString},
    ptr::NonNull,
};

use crate::{Result, Sdl};

/// A shared object opened through the native loader. Unloaded on drop.
pub struct SharedObject<'sdl> {
    sdl: &'sdl Sdl,
    handle: NonNull<c_void>,
}

impl Sdl {
    pub fn load_object(&self, path: &str) -> Result<SharedObject<'_>> {
        let path = CString::new(path)?;
        let handle = self.check_ptr(unsafe { (self.fns.SDL_LoadObject)(path.as_ptr()) })?;
        Ok(SharedObject { sdl: self, handle })
    }
}

impl SharedObject<'_> {
    /// Address of the exported symbol `name`.
    ///
    /// The address is only valid while `self` is alive.
    pub fn load_function(&self, name: &str) -> Result<NonNull<c_void>> {
        let name = CString::new(name)?;
        self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_LoadFunction)(self.handle.as_ptr(), name.as_ptr())
        })
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.handle.as_ptr()
    }
}

impl Drop for SharedObject<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_UnloadObject)(self.handle.as_ptr()) }
    }
}
