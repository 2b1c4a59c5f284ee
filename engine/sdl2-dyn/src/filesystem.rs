use std::{ffi::CString, path::PathBuf};

use crate::{Result, Sdl};

impl Sdl {
    /// The directory the application was run from, with a trailing separator.
    pub fn get_base_path(&self) -> Result<PathBuf> {
        let path = unsafe { (self.fns.SDL_GetBasePath)() };
        unsafe { self.take_native_string(path) }
            .map(PathBuf::from)
            .ok_or_else(|| self.last_error())
    }

    /// A per-user writable directory for `org` and `app`, created if missing.
    pub fn get_pref_path(&self, org: &str, app: &str) -> Result<PathBuf> {
        let org = CString::new(org)?;
        let app = CString::new(app)?;
        let path = unsafe { (self.fns.SDL_GetPrefPath)(org.as_ptr(), app.as_ptr()) };
        unsafe { self.take_native_string(path) }
            .map(PathBuf::from)
            .ok_or_else(|| self.last_error())
    }
}
