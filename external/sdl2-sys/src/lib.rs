#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::upper_case_acronyms)]

mod events;
mod flags;
mod functions;
mod handles;
mod keyboard;
mod structs;

pub use events::*;
pub use flags::*;
pub use functions::*;
pub use handles::*;
pub use keyboard::*;
pub use structs::*;

pub const MAJOR_VERSION: u8 = 2;
pub const MINOR_VERSION: u8 = 0;
pub const PATCH_VERSION: u8 = 9;

/// Candidate file names for the shared library, tried in order.
#[cfg(windows)]
pub const LIBRARY_NAMES: &[&str] = &["SDL2.dll"];
#[cfg(target_os = "macos")]
pub const LIBRARY_NAMES: &[&str] = &["libSDL2-2.0.0.dylib", "libSDL2.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_NAMES: &[&str] = &["libSDL2-2.0.so.0", "libSDL2.so"];

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bool {
    False = 0,
    True = 1,
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        match value {
            true => Bool::True,
            false => Bool::False,
        }
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value == Bool::True
    }
}

impl Default for Bool {
    fn default() -> Self {
        Bool::False
    }
}

pub type JoystickID = i32;
pub type TouchID = i64;
pub type FingerID = i64;
pub type GestureID = i64;
pub type SensorID = i32;
pub type AudioDeviceID = u32;
pub type AudioFormat = u16;
pub type TimerID = i32;
pub type BlendMode = u32;
pub type LogPriority = i32;
pub type PowerState = i32;
pub type ThreadPriority = i32;
pub type HintPriority = i32;
pub type EventAction = i32;
pub type AudioStatus = i32;
pub type JoystickType = i32;
pub type JoystickPowerLevel = i32;
pub type GameControllerAxis = i32;
pub type GameControllerButton = i32;
pub type GameControllerBindType = i32;
pub type SystemCursor = i32;
pub type RendererFlip = u32;
pub type GLattr = i32;
pub type SensorType = i32;
pub type DisplayOrientation = i32;
pub type GLContext = *mut std::ffi::c_void;
pub type VkInstance = *mut std::ffi::c_void;
pub type VkSurfaceKHR = u64;

/// Native `SDL_threadID`, an `unsigned long`.
pub type ThreadID = std::os::raw::c_ulong;

#[cfg(not(any(windows, unix)))]
pub const LIBRARY_NAMES: &[&str] = &[];

impl Version {
    /// The version these mirrors were written against.
    pub const fn current() -> Self {
        Self {
            major: MAJOR_VERSION,
            minor: MINOR_VERSION,
            patch: PATCH_VERSION,
        }
    }
}
