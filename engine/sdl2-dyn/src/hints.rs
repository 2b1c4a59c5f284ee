//! Configuration hints and hint change callbacks.

use std::ffi::{c_char, c_void, CString};

use parking_lot::ReentrantMutex;
use sdl2_sys as sys;

use crate::{callback::Registry, opt_string, string_from_ptr, Result, Sdl};

/// Called with the hint name, the previous value and the new value.
pub type HintHandler = dyn FnMut(&str, Option<&str>, Option<&str>) + Send;

static HINTS: Registry<String, HintHandler> = Registry::new();

// Serializes add and remove so native registration and the registry agree.
// Reentrant so a handler may itself register handlers.
static HINT_REGISTRATION: ReentrantMutex<()> = ReentrantMutex::new(());

unsafe extern "C" fn hint_trampoline(
    _userdata: *mut c_void,
    name: *const c_char,
    old_value: *const c_char,
    new_value: *const c_char,
) {
    let name = string_from_ptr(name);
    let old_value = opt_string(old_value);
    let new_value = opt_string(new_value);
    HINTS.invoke(name.as_str(), |handler| {
        handler(&name, old_value.as_deref(), new_value.as_deref())
    });
}

impl Sdl {
    /// Set a hint at normal priority. Returns `false` when a higher priority
    /// setting is already in place.
    pub fn set_hint(&self, name: &str, value: &str) -> Result<bool> {
        let name = CString::new(name)?;
        let value = CString::new(value)?;
        Ok(unsafe { (self.fns.SDL_SetHint)(name.as_ptr(), value.as_ptr()) }.into())
    }

    /// `priority` is one of `sys::HINT_DEFAULT`, `sys::HINT_NORMAL` or
    /// `sys::HINT_OVERRIDE`.
    pub fn set_hint_with_priority(
        &self,
        name: &str,
        value: &str,
        priority: sys::HintPriority,
    ) -> Result<bool> {
        let name = CString::new(name)?;
        let value = CString::new(value)?;
        Ok(unsafe {
            (self.fns.SDL_SetHintWithPriority)(name.as_ptr(), value.as_ptr(), priority)
        }
        .into())
    }

    pub fn get_hint(&self, name: &str) -> Result<Option<String>> {
        let name = CString::new(name)?;
        Ok(unsafe { opt_string((self.fns.SDL_GetHint)(name.as_ptr())) })
    }

    pub fn get_hint_boolean(&self, name: &str, default_value: bool) -> Result<bool> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns.SDL_GetHintBoolean)(name.as_ptr(), default_value.into()) }.into())
    }

    /// Reset every hint to its default. Callbacks stay registered.
    pub fn clear_hints(&self) {
        unsafe { (self.fns.SDL_ClearHints)() }
    }

    /// Watch hint `name`. The handler runs immediately with the current
    /// value, then on every change. Registering again for the same name
    /// replaces the earlier handler.
    pub fn add_hint_callback<F>(&self, name: &str, handler: F) -> Result<()>
    where
        F: FnMut(&str, Option<&str>, Option<&str>) + Send + 'static,
    {
        let c_name = CString::new(name)?;
        let registration = HINT_REGISTRATION.lock();

        if HINTS.contains(name) {
            unsafe {
                (self.fns.SDL_DelHintCallback)(c_name.as_ptr(), hint_trampoline, std::ptr::null_mut())
            };
        }
        let previous = HINTS.insert(name.to_owned(), Box::new(handler));
        // Calls straight back into the trampoline, so no registry lock may be
        // held here.
        unsafe {
            (self.fns.SDL_AddHintCallback)(c_name.as_ptr(), hint_trampoline, std::ptr::null_mut())
        };
        drop(registration);

        // Clearing waits for a running call of the old handler, which may
        // itself be waiting on the registration lock.
        if let Some(previous) = previous {
            drop(previous.clear());
        }
        Ok(())
    }

    /// Stop watching hint `name`. Returns whether a handler was registered.
    pub fn del_hint_callback(&self, name: &str) -> Result<bool> {
        let c_name = CString::new(name)?;
        let registration = HINT_REGISTRATION.lock();
        unsafe {
            (self.fns.SDL_DelHintCallback)(c_name.as_ptr(), hint_trampoline, std::ptr::null_mut())
        };
        let removed = HINTS.take(name);
        drop(registration);

        Ok(match removed {
            Some(slot) => {
                drop(slot.clear());
                true
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn trampoline_routes_by_name() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        HINTS.insert(
            "TEST_HINT_ROUTING".into(),
            Box::new(move |name: &str, old: Option<&str>, new: Option<&str>| {
                log.lock()
                    .unwrap()
                    .push(format!("{name}:{old:?}:{new:?}"));
            }),
        );

        unsafe {
            hint_trampoline(
                std::ptr::null_mut(),
                c"TEST_HINT_ROUTING".as_ptr(),
                std::ptr::null(),
                c"1".as_ptr(),
            );
            hint_trampoline(
                std::ptr::null_mut(),
                c"TEST_HINT_OTHER".as_ptr(),
                std::ptr::null(),
                c"1".as_ptr(),
            );
        }
        assert!(HINTS.remove("TEST_HINT_ROUTING"));
        unsafe {
            hint_trampoline(
                std::ptr::null_mut(),
                c"TEST_HINT_ROUTING".as_ptr(),
                c"1".as_ptr(),
                c"0".as_ptr(),
            );
        }

        assert_eq!(
            *seen.lock().unwrap(),
            ["TEST_HINT_ROUTING:None:Some(\"1\")"]
        );
    }
}
