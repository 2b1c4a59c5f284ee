//! Accelerometers and gyroscopes.
//!
//! Sensors arrived in SDL 2.0.9. Against an older library every wrapper
//! here reports [`crate::Error::Unsupported`].

use std::ptr::NonNull;

use sdl2_sys as sys;
use sys::{SensorID, SensorType};

use crate::{opt_string, Result, Sdl};

/// An opened sensor. Closed on drop.
pub struct Sensor<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Sensor>,
}

impl Sdl {
    pub fn num_sensors(&self) -> Result<i32> {
        let num_sensors = optional_fn!(self, SDL_NumSensors);
        Ok(unsafe { num_sensors() })
    }

    pub fn sensor_get_device_name(&self, device_index: i32) -> Result<Option<String>> {
        let get_device_name = optional_fn!(self, SDL_SensorGetDeviceName);
        Ok(unsafe { opt_string(get_device_name(device_index)) })
    }

    /// One of `sys::SENSOR_*`, `sys::SENSOR_INVALID` for a bad index.
    pub fn sensor_get_device_type(&self, device_index: i32) -> Result<SensorType> {
        let get_device_type = optional_fn!(self, SDL_SensorGetDeviceType);
        Ok(unsafe { get_device_type(device_index) })
    }

    pub fn sensor_get_device_non_portable_type(&self, device_index: i32) -> Result<i32> {
        let get_type = optional_fn!(self, SDL_SensorGetDeviceNonPortableType);
        self.check(unsafe { get_type(device_index) })
    }

    pub fn sensor_get_device_instance_id(&self, device_index: i32) -> Result<SensorID> {
        let get_instance_id = optional_fn!(self, SDL_SensorGetDeviceInstanceID);
        self.check(unsafe { get_instance_id(device_index) })
    }

    pub fn sensor_open(&self, device_index: i32) -> Result<Sensor<'_>> {
        let open = optional_fn!(self, SDL_SensorOpen);
        let raw = self.check_ptr(unsafe { open(device_index) })?;
        Ok(Sensor { sdl: self, raw })
    }

    /// Whether a sensor with `instance_id` is currently open.
    pub fn sensor_is_open(&self, instance_id: SensorID) -> Result<bool> {
        let from_instance_id = optional_fn!(self, SDL_SensorFromInstanceID);
        Ok(!unsafe { from_instance_id(instance_id) }.is_null())
    }

    /// Refresh sensor state. Only needed when events are disabled.
    pub fn sensor_update(&self) -> Result<()> {
        let update = optional_fn!(self, SDL_SensorUpdate);
        unsafe { update() };
        Ok(())
    }
}

impl Sensor<'_> {
    pub fn as_ptr(&self) -> *mut sys::Sensor {
        self.raw.as_ptr()
    }

    pub fn name(&self) -> Result<Option<String>> {
        let get_name = optional_fn!(self.sdl, SDL_SensorGetName);
        Ok(unsafe { opt_string(get_name(self.raw.as_ptr())) })
    }

    pub fn sensor_type(&self) -> Result<SensorType> {
        let get_type = optional_fn!(self.sdl, SDL_SensorGetType);
        Ok(unsafe { get_type(self.raw.as_ptr()) })
    }

    pub fn non_portable_type(&self) -> Result<i32> {
        let get_type = optional_fn!(self.sdl, SDL_SensorGetNonPortableType);
        self.sdl.check(unsafe { get_type(self.raw.as_ptr()) })
    }

    pub fn instance_id(&self) -> Result<SensorID> {
        let get_instance_id = optional_fn!(self.sdl, SDL_SensorGetInstanceID);
        self.sdl.check(unsafe { get_instance_id(self.raw.as_ptr()) })
    }

    /// Fill `data` with the current reading. Accelerometers report m/s²
    /// including `sys::STANDARD_GRAVITY`, gyroscopes rad/s, both as x, y, z.
    pub fn data(&self, data: &mut [f32]) -> Result<()> {
        let get_data = optional_fn!(self.sdl, SDL_SensorGetData);
        let count = crate::non_empty_count(data.len())?;
        self.sdl
            .check(unsafe { get_data(self.raw.as_ptr(), data.as_mut_ptr(), count) })?;
        Ok(())
    }
}

impl Drop for Sensor<'_> {
    fn drop(&mut self) {
        // Opening succeeded, so the library exports the close entry too.
        if let Some(close) = self.sdl.fns.SDL_SensorClose {
            unsafe { close(self.raw.as_ptr()) }
        }
    }
}
