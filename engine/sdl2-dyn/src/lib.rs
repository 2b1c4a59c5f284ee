//! Safe bindings to an SDL2 shared library opened at run time.
//!
//! Nothing links against SDL2. [`Sdl::load`] opens the library, resolves the
//! 2.0.9 entry point table and hands back a context through which every
//! wrapper is reached. [`sdl`] keeps one such context for the whole process.

use std::{
    ffi::{c_char, c_void, CStr, CString, OsStr},
    mem::ManuallyDrop,
    ptr::NonNull,
    sync::OnceLock,
};

use log::{debug, warn};
use sdl2_sys as sys;

/// Fetch an entry point that older libraries may not export.
macro_rules! optional_fn {
    ($sdl:expr, $name:ident) => {
        $sdl.fns
            .$name
            .ok_or($crate::Error::Unsupported(stringify!($name)))?
    };
}

pub mod abi;
pub mod audio;
mod callback;
pub mod clipboard;
pub mod controller;
pub mod cpuinfo;
mod error;
pub mod event;
pub mod event_queue;
pub mod filesystem;
pub mod gl;
pub mod haptic;
pub mod hints;
pub mod joystick;
pub mod keyboard;
pub mod loadso;
pub mod logging;
pub mod main_thread;
pub mod messagebox;
pub mod mouse;
pub mod pixels;
pub mod rect;
pub mod render;
pub mod rwops;
pub mod sensor;
pub mod surface;
pub mod sync;
pub mod syswm;
pub mod timer;
pub mod touch;
pub mod video;
pub mod vulkan;
pub mod window;

pub use error::{Error, Result};
pub use sdl2_sys;

/// Environment variable naming an explicit library file for [`Sdl::load`].
pub const LIBRARY_PATH_VAR: &str = "SDL2_LIBRARY_PATH";

/// A resolved SDL2 entry point table.
///
/// Handles created through a context borrow it, so the table outlives every
/// native object made from it.
pub struct Sdl {
    pub(crate) fns: sys::Functions,
    pub(crate) varargs: sys::VarargFunctions,
    // Never unloaded; native threads and callbacks may still be running.
    _library: Option<ManuallyDrop<libloading::Library>>,
}

static SDL: OnceLock<Sdl> = OnceLock::new();

/// The process-wide context, loaded on first use.
///
/// Panics when the library cannot be opened or lacks a required entry point.
pub fn sdl() -> &'static Sdl {
    SDL.get_or_init(|| Sdl::load().unwrap_or_else(|err| load_failed(err)))
}

#[cold]
fn load_failed(err: Error) -> ! {
    panic!("unable to load SDL2: {err}")
}

impl Sdl {
    /// Open the library named by `SDL2_LIBRARY_PATH`, or else the first of
    /// the platform's usual file names that loads.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(LIBRARY_PATH_VAR) {
            return Self::load_from(path);
        }

        let mut last_error = None;
        for name in sys::LIBRARY_NAMES {
            match Self::load_from(name) {
                Ok(sdl) => return Ok(sdl),
                Err(Error::Library(err)) => last_error = Some(err),
                Err(err) => return Err(err),
            }
        }

        Err(last_error.map_or(Error::Unsupported("SDL2 on this platform"), Error::Library))
    }

    pub fn load_from<P: AsRef<OsStr>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let library = unsafe { libloading::Library::new(path)? };
        let mut sdl = unsafe {
            Self::from_resolver(|name| {
                library
                    .get::<*mut c_void>(name.to_bytes_with_nul())
                    .map_or(std::ptr::null_mut(), |symbol| *symbol)
            })?
        };
        sdl._library = Some(ManuallyDrop::new(library));

        let version = sdl.version();
        debug!(
            "loaded {} (SDL {}.{}.{})",
            path.to_string_lossy(),
            version.major,
            version.minor,
            version.patch
        );

        Ok(sdl)
    }

    /// Build a context from an arbitrary name to address lookup.
    ///
    /// # Safety
    ///
    /// Every non-null address returned by `resolve` must be a function with
    /// the native signature of the requested name, and must stay valid for
    /// the lifetime of the returned context.
    pub unsafe fn from_resolver<F>(mut resolve: F) -> Result<Self>
    where
        F: FnMut(&CStr) -> *mut c_void,
    {
        let fns = sys::Functions::load(|name| {
            let ptr = resolve(name);
            if ptr.is_null() && is_optional(name) {
                warn!(
                    "{} is not exported, dependent wrappers are unsupported",
                    name.to_string_lossy()
                );
            }
            ptr
        })?;
        let varargs = sys::VarargFunctions::load(&mut resolve);

        Ok(Self {
            fns,
            varargs,
            _library: None,
        })
    }

    /// Raw access to the resolved table.
    pub fn functions(&self) -> &sys::Functions {
        &self.fns
    }

    pub fn init(&self, flags: u32) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_Init)(flags) })?;
        Ok(())
    }

    pub fn init_subsystem(&self, flags: u32) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_InitSubSystem)(flags) })?;
        Ok(())
    }

    pub fn quit_subsystem(&self, flags: u32) {
        unsafe { (self.fns.SDL_QuitSubSystem)(flags) }
    }

    /// The subset of `flags` that is initialized, or every initialized
    /// subsystem when `flags` is zero.
    pub fn was_init(&self, flags: u32) -> u32 {
        unsafe { (self.fns.SDL_WasInit)(flags) }
    }

    pub fn quit(&self) {
        unsafe { (self.fns.SDL_Quit)() }
    }

    pub fn set_main_ready(&self) {
        unsafe { (self.fns.SDL_SetMainReady)() }
    }

    /// The native last-error text, empty when no error is set.
    pub fn get_error(&self) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetError)()) }
    }

    pub fn clear_error(&self) {
        unsafe { (self.fns.SDL_ClearError)() }
    }

    /// Replace the native last-error text. The message is passed through a
    /// `%s` format, so it is never interpreted.
    pub fn set_error(&self, message: &str) -> Result<()> {
        let set_error = self
            .varargs
            .SDL_SetError
            .ok_or(Error::Unsupported("SDL_SetError"))?;
        let message = CString::new(message)?;
        unsafe { set_error(c"%s".as_ptr(), message.as_ptr()) };
        Ok(())
    }

    /// Set one of the canned `sys::ENOMEM`.. `sys::UNSUPPORTED` errors.
    pub fn error(&self, code: i32) {
        unsafe { (self.fns.SDL_Error)(code) };
    }

    /// Version of the loaded library.
    pub fn version(&self) -> sys::Version {
        let mut version = sys::Version::default();
        unsafe { (self.fns.SDL_GetVersion)(&mut version) };
        version
    }

    pub fn revision(&self) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetRevision)()) }
    }

    pub fn revision_number(&self) -> i32 {
        unsafe { (self.fns.SDL_GetRevisionNumber)() }
    }

    pub fn platform(&self) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetPlatform)()) }
    }

    /// Capture the current last-error text as an error value.
    ///
    /// Must run directly after the failing call.
    #[cold]
    pub(crate) fn last_error(&self) -> Error {
        Error::Native(self.get_error())
    }

    /// Negative return codes are failures.
    #[inline]
    pub(crate) fn check(&self, ret: i32) -> Result<i32> {
        if ret < 0 {
            Err(self.last_error())
        } else {
            Ok(ret)
        }
    }

    #[inline]
    pub(crate) fn check_ptr<T>(&self, ptr: *mut T) -> Result<NonNull<T>> {
        NonNull::new(ptr).ok_or_else(|| self.last_error())
    }

    #[inline]
    pub(crate) fn check_bool(&self, ret: sys::Bool) -> Result<()> {
        match ret {
            sys::Bool::True => Ok(()),
            sys::Bool::False => Err(self.last_error()),
        }
    }

    /// For entry points where zero is the failure value.
    #[inline]
    pub(crate) fn check_nonzero<T: Copy + Default + PartialEq>(&self, ret: T) -> Result<T> {
        if ret == T::default() {
            Err(self.last_error())
        } else {
            Ok(ret)
        }
    }

    /// Copy out a string the native side allocated, then release it.
    pub(crate) unsafe fn take_native_string(&self, ptr: *mut c_char) -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let string = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        (self.fns.SDL_free)(ptr.cast());
        Some(string)
    }
}

fn is_optional(name: &CStr) -> bool {
    sys::Functions::OPTIONAL
        .iter()
        .any(|optional| optional.as_bytes() == name.to_bytes())
}

/// Decode a nul terminated native string, treating null as empty.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    opt_string(ptr).unwrap_or_default()
}

pub(crate) unsafe fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Convert a length to the native `int` count, rejecting empty input where
/// the native call needs at least one element.
pub(crate) fn non_empty_count(len: usize) -> Result<i32> {
    match len {
        0 => Err(Error::InvalidParameters),
        len => count(len),
    }
}

pub(crate) fn count(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| Error::InvalidParameters)
}

pub(crate) fn opt_cstring(value: Option<&str>) -> Result<Option<CString>> {
    Ok(value.map(CString::new).transpose()?)
}

pub(crate) fn opt_cstr_ptr(value: &Option<CString>) -> *const c_char {
    value.as_ref().map_or(std::ptr::null(), |value| value.as_ptr())
}

#[inline]
pub(crate) fn opt_ptr<T>(value: Option<&T>) -> *const T {
    value.map_or(std::ptr::null(), |value| value as *const T)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_names() {
        assert!(is_optional(c"SDL_SensorOpen"));
        assert!(is_optional(c"SDL_HasAVX512F"));
        assert!(!is_optional(c"SDL_Init"));
    }

    #[test]
    fn counts() {
        assert!(matches!(non_empty_count(0), Err(Error::InvalidParameters)));
        assert_eq!(non_empty_count(3).unwrap(), 3);
        assert_eq!(count(0).unwrap(), 0);
        assert!(matches!(
            count(i32::MAX as usize + 1),
            Err(Error::InvalidParameters)
        ));
    }

    #[test]
    fn null_strings() {
        unsafe {
            assert_eq!(string_from_ptr(std::ptr::null()), "");
            assert_eq!(opt_string(std::ptr::null()), None);
            assert_eq!(opt_string(c"abc".as_ptr()).as_deref(), Some("abc"));
        }
    }
}
