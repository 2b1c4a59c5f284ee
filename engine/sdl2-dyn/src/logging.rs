//! Native log priorities and output redirection.

use std::ffi::{c_char, c_void, CString};

use parking_lot::Mutex;
use sdl2_sys as sys;

use crate::{callback::Registry, string_from_ptr, Error, Result, Sdl};

/// Receives `(category, priority, message)` for every native log line.
pub type LogOutput = dyn FnMut(i32, sys::LogPriority, &str) + Send;

static OUTPUT: Registry<(), LogOutput> = Registry::new();

// The output function in place before the first redirection, with its user
// data as an address.
static ORIGINAL_OUTPUT: Mutex<Option<(Option<sys::LogOutputFunction>, usize)>> = Mutex::new(None);

unsafe extern "C" fn output_trampoline(
    _userdata: *mut c_void,
    category: i32,
    priority: sys::LogPriority,
    message: *const c_char,
) {
    let message = string_from_ptr(message);
    OUTPUT.invoke(&(), |output| output(category, priority, &message));
}

/// The `log` level matching a native priority.
pub fn level(priority: sys::LogPriority) -> log::Level {
    match priority {
        sys::LOG_PRIORITY_VERBOSE => log::Level::Trace,
        sys::LOG_PRIORITY_DEBUG => log::Level::Debug,
        sys::LOG_PRIORITY_INFO => log::Level::Info,
        sys::LOG_PRIORITY_WARN => log::Level::Warn,
        _ => log::Level::Error,
    }
}

fn category_name(category: i32) -> &'static str {
    match category {
        sys::LOG_CATEGORY_APPLICATION => "application",
        sys::LOG_CATEGORY_ERROR => "error",
        sys::LOG_CATEGORY_ASSERT => "assert",
        sys::LOG_CATEGORY_SYSTEM => "system",
        sys::LOG_CATEGORY_AUDIO => "audio",
        sys::LOG_CATEGORY_VIDEO => "video",
        sys::LOG_CATEGORY_RENDER => "render",
        sys::LOG_CATEGORY_INPUT => "input",
        sys::LOG_CATEGORY_TEST => "test",
        _ => "custom",
    }
}

/// Forward native log output into the `log` facade under the target
/// `sdl2::<category>`.
pub fn route_native_output(sdl: &Sdl) {
    sdl.set_log_output(|category, priority, message| {
        log::log!(
            target: &format!("sdl2::{}", category_name(category)),
            level(priority),
            "{message}"
        );
    });
}

macro_rules! priority_helpers {
    ($($name:ident => $priority:ident;)*) => {
        $(
            pub fn $name(&self, category: i32, message: &str) -> Result<()> {
                self.log_message(category, sys::$priority, message)
            }
        )*
    };
}

impl Sdl {
    pub fn log_set_all_priority(&self, priority: sys::LogPriority) {
        unsafe { (self.fns.SDL_LogSetAllPriority)(priority) }
    }

    pub fn log_set_priority(&self, category: i32, priority: sys::LogPriority) {
        unsafe { (self.fns.SDL_LogSetPriority)(category, priority) }
    }

    pub fn log_get_priority(&self, category: i32) -> sys::LogPriority {
        unsafe { (self.fns.SDL_LogGetPriority)(category) }
    }

    pub fn log_reset_priorities(&self) {
        unsafe { (self.fns.SDL_LogResetPriorities)() }
    }

    /// Emit `message` through the native logger. It is never interpreted as
    /// a format string.
    pub fn log_message(&self, category: i32, priority: sys::LogPriority, message: &str) -> Result<()> {
        let log_message = self
            .varargs
            .SDL_LogMessage
            .ok_or(Error::Unsupported("SDL_LogMessage"))?;
        let message = CString::new(message)?;
        unsafe { log_message(category, priority, c"%s".as_ptr(), message.as_ptr()) };
        Ok(())
    }

    /// Log at info priority in the application category.
    pub fn log(&self, message: &str) -> Result<()> {
        self.log_message(sys::LOG_CATEGORY_APPLICATION, sys::LOG_PRIORITY_INFO, message)
    }

    priority_helpers! {
        log_verbose => LOG_PRIORITY_VERBOSE;
        log_debug => LOG_PRIORITY_DEBUG;
        log_info => LOG_PRIORITY_INFO;
        log_warn => LOG_PRIORITY_WARN;
        log_error => LOG_PRIORITY_ERROR;
        log_critical => LOG_PRIORITY_CRITICAL;
    }

    /// The native output function and its user data as currently installed.
    pub fn log_output_function(&self) -> (Option<sys::LogOutputFunction>, *mut c_void) {
        let mut function = None;
        let mut userdata = std::ptr::null_mut();
        unsafe { (self.fns.SDL_LogGetOutputFunction)(&mut function, &mut userdata) };
        (function, userdata)
    }

    /// Whether native output currently goes to a handler from
    /// [`Sdl::set_log_output`].
    pub fn log_output_is_set(&self) -> bool {
        let (function, _) = self.log_output_function();
        let ours = output_trampoline as sys::LogOutputFunction;
        function.is_some_and(|function| function as usize == ours as usize) && OUTPUT.contains(&())
    }

    /// Replace the native output function with `output`.
    pub fn set_log_output<F>(&self, output: F)
    where
        F: FnMut(i32, sys::LogPriority, &str) + Send + 'static,
    {
        {
            let mut original = ORIGINAL_OUTPUT.lock();
            if original.is_none() {
                let (function, userdata) = self.log_output_function();
                *original = Some((function, userdata as usize));
            }
        }

        if let Some(previous) = OUTPUT.insert((), Box::new(output)) {
            drop(previous.clear());
        }
        unsafe { (self.fns.SDL_LogSetOutputFunction)(Some(output_trampoline), std::ptr::null_mut()) };
    }

    /// Put back the output function that was in place before
    /// [`Sdl::set_log_output`].
    pub fn reset_log_output(&self) {
        let Some((function, userdata)) = ORIGINAL_OUTPUT.lock().take() else {
            return;
        };
        unsafe { (self.fns.SDL_LogSetOutputFunction)(function, userdata as *mut c_void) };
        OUTPUT.remove(&());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_map_to_levels() {
        assert_eq!(level(sys::LOG_PRIORITY_VERBOSE), log::Level::Trace);
        assert_eq!(level(sys::LOG_PRIORITY_DEBUG), log::Level::Debug);
        assert_eq!(level(sys::LOG_PRIORITY_INFO), log::Level::Info);
        assert_eq!(level(sys::LOG_PRIORITY_WARN), log::Level::Warn);
        assert_eq!(level(sys::LOG_PRIORITY_ERROR), log::Level::Error);
        assert_eq!(level(sys::LOG_PRIORITY_CRITICAL), log::Level::Error);
    }

    #[test]
    fn categories() {
        assert_eq!(category_name(sys::LOG_CATEGORY_RENDER), "render");
        assert_eq!(category_name(sys::LOG_CATEGORY_CUSTOM + 3), "custom");
    }
}
