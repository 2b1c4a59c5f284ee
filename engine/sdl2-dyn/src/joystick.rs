//! Joysticks by device index and opened joystick handles.

use std::{
    ffi::{c_char, CString},
    ptr::NonNull,
};

use sdl2_sys as sys;
use sys::{JoystickGUID, JoystickID};

use crate::{opt_string, Result, Sdl};

/// An opened joystick. Closed on drop.
pub struct Joystick<'sdl> {
    pub(crate) sdl: &'sdl Sdl,
    raw: NonNull<sys::Joystick>,
}

/// Holds the native joystick lock, released on drop.
pub struct JoystickLock<'sdl> {
    sdl: &'sdl Sdl,
}

impl Drop for JoystickLock<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_UnlockJoysticks)() }
    }
}

// 16 bytes as hex plus the terminator.
const GUID_STRING_LEN: usize = 33;

impl Sdl {
    /// Block other threads from opening or closing joysticks while the
    /// guard lives.
    pub fn lock_joysticks(&self) -> JoystickLock<'_> {
        unsafe { (self.fns.SDL_LockJoysticks)() };
        JoystickLock { sdl: self }
    }

    pub fn num_joysticks(&self) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_NumJoysticks)() })
    }

    pub fn joystick_name_for_index(&self, device_index: i32) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_JoystickNameForIndex)(device_index)) }
    }

    pub fn joystick_get_device_player_index(&self, device_index: i32) -> Result<Option<i32>> {
        let get_player_index = optional_fn!(self, SDL_JoystickGetDevicePlayerIndex);
        let index = unsafe { get_player_index(device_index) };
        Ok((index >= 0).then_some(index))
    }

    pub fn joystick_get_device_guid(&self, device_index: i32) -> JoystickGUID {
        unsafe { (self.fns.SDL_JoystickGetDeviceGUID)(device_index) }
    }

    /// Zero when unavailable.
    pub fn joystick_get_device_vendor(&self, device_index: i32) -> u16 {
        unsafe { (self.fns.SDL_JoystickGetDeviceVendor)(device_index) }
    }

    pub fn joystick_get_device_product(&self, device_index: i32) -> u16 {
        unsafe { (self.fns.SDL_JoystickGetDeviceProduct)(device_index) }
    }

    pub fn joystick_get_device_product_version(&self, device_index: i32) -> u16 {
        unsafe { (self.fns.SDL_JoystickGetDeviceProductVersion)(device_index) }
    }

    /// One of `sys::JOYSTICK_TYPE_*`.
    pub fn joystick_get_device_type(&self, device_index: i32) -> sys::JoystickType {
        unsafe { (self.fns.SDL_JoystickGetDeviceType)(device_index) }
    }

    pub fn joystick_get_device_instance_id(&self, device_index: i32) -> Result<JoystickID> {
        self.check(unsafe { (self.fns.SDL_JoystickGetDeviceInstanceID)(device_index) })
    }

    pub fn joystick_open(&self, device_index: i32) -> Result<Joystick<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_JoystickOpen)(device_index) })?;
        Ok(Joystick { sdl: self, raw })
    }

    /// Whether a joystick with `instance_id` is currently open.
    pub fn joystick_is_open(&self, instance_id: JoystickID) -> bool {
        !unsafe { (self.fns.SDL_JoystickFromInstanceID)(instance_id) }.is_null()
    }

    /// 32 lowercase hex digits.
    pub fn joystick_get_guid_string(&self, guid: JoystickGUID) -> String {
        let mut buf = [0 as c_char; GUID_STRING_LEN];
        unsafe {
            (self.fns.SDL_JoystickGetGUIDString)(guid, buf.as_mut_ptr(), GUID_STRING_LEN as i32)
        };
        unsafe { crate::string_from_ptr(buf.as_ptr()) }
    }

    /// Parse the format produced by [`Sdl::joystick_get_guid_string`]. An
    /// all-zero GUID when the text is malformed.
    pub fn joystick_get_guid_from_string(&self, text: &str) -> Result<JoystickGUID> {
        let text = CString::new(text)?;
        Ok(unsafe { (self.fns.SDL_JoystickGetGUIDFromString)(text.as_ptr()) })
    }

    /// Refresh joystick state. Only needed when events are disabled.
    pub fn joystick_update(&self) {
        unsafe { (self.fns.SDL_JoystickUpdate)() }
    }

    /// `state` is `sys::QUERY`, `sys::ENABLE` or `sys::IGNORE`. Returns
    /// whether events are enabled afterwards.
    pub fn joystick_event_state(&self, state: i32) -> Result<bool> {
        Ok(self.check(unsafe { (self.fns.SDL_JoystickEventState)(state) })? == sys::ENABLE)
    }
}

impl Joystick<'_> {
    pub fn as_ptr(&self) -> *mut sys::Joystick {
        self.raw.as_ptr()
    }

    pub fn name(&self) -> Option<String> {
        unsafe { opt_string((self.sdl.fns.SDL_JoystickName)(self.raw.as_ptr())) }
    }

    pub fn player_index(&self) -> Result<Option<i32>> {
        let get_player_index = optional_fn!(self.sdl, SDL_JoystickGetPlayerIndex);
        let index = unsafe { get_player_index(self.raw.as_ptr()) };
        Ok((index >= 0).then_some(index))
    }

    pub fn guid(&self) -> JoystickGUID {
        unsafe { (self.sdl.fns.SDL_JoystickGetGUID)(self.raw.as_ptr()) }
    }

    pub fn vendor(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_JoystickGetVendor)(self.raw.as_ptr()) }
    }

    pub fn product(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_JoystickGetProduct)(self.raw.as_ptr()) }
    }

    pub fn product_version(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_JoystickGetProductVersion)(self.raw.as_ptr()) }
    }

    pub fn joystick_type(&self) -> sys::JoystickType {
        unsafe { (self.sdl.fns.SDL_JoystickGetType)(self.raw.as_ptr()) }
    }

    pub fn attached(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_JoystickGetAttached)(self.raw.as_ptr()) }.into()
    }

    pub fn instance_id(&self) -> Result<JoystickID> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickInstanceID)(self.raw.as_ptr()) })
    }

    pub fn num_axes(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickNumAxes)(self.raw.as_ptr()) })
    }

    pub fn num_balls(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickNumBalls)(self.raw.as_ptr()) })
    }

    pub fn num_hats(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickNumHats)(self.raw.as_ptr()) })
    }

    pub fn num_buttons(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickNumButtons)(self.raw.as_ptr()) })
    }

    /// Between `sys::JOYSTICK_AXIS_MIN` and `sys::JOYSTICK_AXIS_MAX`.
    pub fn axis(&self, axis: i32) -> i16 {
        unsafe { (self.sdl.fns.SDL_JoystickGetAxis)(self.raw.as_ptr(), axis) }
    }

    /// The axis position when the device was opened, if known.
    pub fn axis_initial_state(&self, axis: i32) -> Option<i16> {
        let mut state = 0;
        let known = unsafe {
            (self.sdl.fns.SDL_JoystickGetAxisInitialState)(self.raw.as_ptr(), axis, &mut state)
        };
        bool::from(known).then_some(state)
    }

    /// A mask of `sys::HAT_*`.
    pub fn hat(&self, hat: i32) -> u8 {
        unsafe { (self.sdl.fns.SDL_JoystickGetHat)(self.raw.as_ptr(), hat) }
    }

    /// Motion of a trackball since the last call.
    pub fn ball(&self, ball: i32) -> Result<(i32, i32)> {
        let (mut dx, mut dy) = (0, 0);
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_JoystickGetBall)(self.raw.as_ptr(), ball, &mut dx, &mut dy)
        })?;
        Ok((dx, dy))
    }

    pub fn button(&self, button: i32) -> bool {
        unsafe { (self.sdl.fns.SDL_JoystickGetButton)(self.raw.as_ptr(), button) != 0 }
    }

    /// Start a rumble effect, replacing any running one. Strengths range
    /// over the whole `u16`.
    pub fn rumble(&mut self, low_frequency: u16, high_frequency: u16, duration_ms: u32) -> Result<()> {
        let rumble = optional_fn!(self.sdl, SDL_JoystickRumble);
        self.sdl.check(unsafe {
            rumble(self.raw.as_ptr(), low_frequency, high_frequency, duration_ms)
        })?;
        Ok(())
    }

    /// One of `sys::JOYSTICK_POWER_*`.
    pub fn current_power_level(&self) -> sys::JoystickPowerLevel {
        unsafe { (self.sdl.fns.SDL_JoystickCurrentPowerLevel)(self.raw.as_ptr()) }
    }
}

impl Drop for Joystick<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_JoystickClose)(self.raw.as_ptr()) }
    }
}
