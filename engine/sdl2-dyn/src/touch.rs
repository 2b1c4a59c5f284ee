//! Touch devices, fingers and $1 gesture templates.

use sdl2_sys as sys;
use sys::{Finger, GestureID, TouchID};

use crate::{rwops::RWops, Result, Sdl};

impl Sdl {
    pub fn get_num_touch_devices(&self) -> i32 {
        unsafe { (self.fns.SDL_GetNumTouchDevices)() }
    }

    pub fn get_touch_device(&self, index: i32) -> Result<TouchID> {
        self.check_nonzero(unsafe { (self.fns.SDL_GetTouchDevice)(index) })
    }

    pub fn get_num_touch_fingers(&self, touch_id: TouchID) -> i32 {
        unsafe { (self.fns.SDL_GetNumTouchFingers)(touch_id) }
    }

    pub fn get_touch_finger(&self, touch_id: TouchID, index: i32) -> Result<Finger> {
        let finger = self.check_ptr(unsafe { (self.fns.SDL_GetTouchFinger)(touch_id, index) })?;
        Ok(unsafe { *finger.as_ptr() })
    }

    /// Every finger currently down on `touch_id`.
    pub fn touch_fingers(&self, touch_id: TouchID) -> Result<Vec<Finger>> {
        (0..self.get_num_touch_fingers(touch_id))
            .map(|index| self.get_touch_finger(touch_id, index))
            .collect()
    }

    /// Record the next gesture on `touch_id`, or on every device for -1, as
    /// a template. Completion arrives as a dollar record event.
    pub fn record_gesture(&self, touch_id: TouchID) -> Result<()> {
        self.check_nonzero(unsafe { (self.fns.SDL_RecordGesture)(touch_id) })?;
        Ok(())
    }

    /// Returns how many templates were written.
    pub fn save_all_dollar_templates(&self, dst: &mut RWops<'_>) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_SaveAllDollarTemplates)(dst.as_ptr()) })
    }

    pub fn save_dollar_template(&self, gesture_id: GestureID, dst: &mut RWops<'_>) -> Result<()> {
        self.check_nonzero(unsafe { (self.fns.SDL_SaveDollarTemplate)(gesture_id, dst.as_ptr()) })?;
        Ok(())
    }

    /// Returns how many templates were read.
    pub fn load_dollar_templates(&self, touch_id: TouchID, src: &mut RWops<'_>) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_LoadDollarTemplates)(touch_id, src.as_ptr()) })
    }
}
