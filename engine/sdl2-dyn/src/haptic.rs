//! Force feedback devices and effects.

use std::ptr::NonNull;

use sdl2_sys as sys;

use crate::{joystick::Joystick, opt_string, Error, Result, Sdl};

/// A force feedback effect. Each variant's `type` field selects the
/// `sys::HAPTIC_*` effect kind within its family.
#[derive(Clone, Copy, Debug)]
pub enum Effect<'a> {
    Constant(sys::HapticConstant),
    Periodic(sys::HapticPeriodic),
    Condition(sys::HapticCondition),
    Ramp(sys::HapticRamp),
    LeftRight(sys::HapticLeftRight),
    /// Samples are interleaved by channel, `channels * samples` values.
    Custom(sys::HapticCustom, &'a [u16]),
}

impl Effect<'_> {
    fn to_raw(&self) -> Result<sys::HapticEffect> {
        Ok(match *self {
            Self::Constant(constant) => sys::HapticEffect { constant },
            Self::Periodic(periodic) => sys::HapticEffect { periodic },
            Self::Condition(condition) => sys::HapticEffect { condition },
            Self::Ramp(ramp) => sys::HapticEffect { ramp },
            Self::LeftRight(leftright) => sys::HapticEffect { leftright },
            Self::Custom(mut custom, data) => {
                let needed = usize::from(custom.channels) * usize::from(custom.samples);
                if needed == 0 || data.len() < needed {
                    return Err(Error::InvalidParameters);
                }
                // Only read by the native side.
                custom.data = data.as_ptr().cast_mut();
                sys::HapticEffect { custom }
            }
        })
    }
}

/// An opened haptic device. Closed on drop. One opened from a joystick
/// borrows it, since the joystick must stay open.
pub struct Haptic<'a> {
    sdl: &'a Sdl,
    raw: NonNull<sys::Haptic>,
}

impl Sdl {
    pub fn num_haptics(&self) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_NumHaptics)() })
    }

    pub fn haptic_name(&self, device_index: i32) -> Result<String> {
        unsafe { opt_string((self.fns.SDL_HapticName)(device_index)) }.ok_or_else(|| self.last_error())
    }

    pub fn haptic_open(&self, device_index: i32) -> Result<Haptic<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_HapticOpen)(device_index) })?;
        Ok(Haptic::new(self, raw))
    }

    pub fn haptic_opened(&self, device_index: i32) -> bool {
        unsafe { (self.fns.SDL_HapticOpened)(device_index) == 1 }
    }

    pub fn mouse_is_haptic(&self) -> bool {
        unsafe { (self.fns.SDL_MouseIsHaptic)() == 1 }
    }

    pub fn haptic_open_from_mouse(&self) -> Result<Haptic<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_HapticOpenFromMouse)() })?;
        Ok(Haptic::new(self, raw))
    }
}

impl Joystick<'_> {
    pub fn is_haptic(&self) -> Result<bool> {
        Ok(self.sdl.check(unsafe { (self.sdl.fns.SDL_JoystickIsHaptic)(self.as_ptr()) })? == 1)
    }

    /// Open the force feedback of this joystick.
    pub fn open_haptic(&self) -> Result<Haptic<'_>> {
        let raw = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_HapticOpenFromJoystick)(self.as_ptr())
        })?;
        Ok(Haptic::new(self.sdl, raw))
    }
}

impl<'a> Haptic<'a> {
    fn new(sdl: &'a Sdl, raw: NonNull<sys::Haptic>) -> Self {
        Self { sdl, raw }
    }

    pub fn as_ptr(&self) -> *mut sys::Haptic {
        self.raw.as_ptr()
    }

    pub fn index(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticIndex)(self.raw.as_ptr()) })
    }

    /// How many effects the device can store.
    pub fn num_effects(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticNumEffects)(self.raw.as_ptr()) })
    }

    pub fn num_effects_playing(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticNumEffectsPlaying)(self.raw.as_ptr()) })
    }

    /// Mask of supported `sys::HAPTIC_*` effects and features.
    pub fn query(&self) -> Result<u32> {
        self.sdl
            .check_nonzero(unsafe { (self.sdl.fns.SDL_HapticQuery)(self.raw.as_ptr()) })
    }

    pub fn num_axes(&self) -> Result<i32> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticNumAxes)(self.raw.as_ptr()) })
    }

    pub fn effect_supported(&self, effect: &Effect<'_>) -> Result<bool> {
        let mut raw = effect.to_raw()?;
        let supported = self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticEffectSupported)(self.raw.as_ptr(), &mut raw)
        })?;
        Ok(supported == 1)
    }

    /// Upload `effect`, returning its id on the device.
    pub fn new_effect(&mut self, effect: &Effect<'_>) -> Result<i32> {
        let mut raw = effect.to_raw()?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticNewEffect)(self.raw.as_ptr(), &mut raw)
        })
    }

    /// Replace the parameters of a stored effect. The kind cannot change.
    pub fn update_effect(&mut self, id: i32, effect: &Effect<'_>) -> Result<()> {
        let mut raw = effect.to_raw()?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticUpdateEffect)(self.raw.as_ptr(), id, &mut raw)
        })?;
        Ok(())
    }

    /// `iterations` may be `sys::HAPTIC_INFINITY`.
    pub fn run_effect(&mut self, id: i32, iterations: u32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticRunEffect)(self.raw.as_ptr(), id, iterations)
        })?;
        Ok(())
    }

    pub fn stop_effect(&mut self, id: i32) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticStopEffect)(self.raw.as_ptr(), id) })?;
        Ok(())
    }

    pub fn destroy_effect(&mut self, id: i32) {
        unsafe { (self.sdl.fns.SDL_HapticDestroyEffect)(self.raw.as_ptr(), id) }
    }

    /// Needs `sys::HAPTIC_STATUS` support.
    pub fn effect_playing(&self, id: i32) -> Result<bool> {
        Ok(self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticGetEffectStatus)(self.raw.as_ptr(), id)
        })? == 1)
    }

    /// 0 to 100.
    pub fn set_gain(&mut self, gain: i32) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticSetGain)(self.raw.as_ptr(), gain) })?;
        Ok(())
    }

    /// 0 to 100, 0 disables autocenter.
    pub fn set_autocenter(&mut self, autocenter: i32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticSetAutocenter)(self.raw.as_ptr(), autocenter)
        })?;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticPause)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticUnpause)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn stop_all(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticStopAll)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn rumble_supported(&self) -> Result<bool> {
        Ok(self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticRumbleSupported)(self.raw.as_ptr())
        })? == 1)
    }

    pub fn rumble_init(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticRumbleInit)(self.raw.as_ptr()) })?;
        Ok(())
    }

    /// `strength` from 0.0 to 1.0.
    pub fn rumble_play(&mut self, strength: f32, length_ms: u32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_HapticRumblePlay)(self.raw.as_ptr(), strength, length_ms)
        })?;
        Ok(())
    }

    pub fn rumble_stop(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_HapticRumbleStop)(self.raw.as_ptr()) })?;
        Ok(())
    }
}

impl Drop for Haptic<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_HapticClose)(self.raw.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(channels: u8, samples: u16) -> sys::HapticCustom {
        sys::HapticCustom {
            r#type: sys::HAPTIC_CUSTOM,
            direction: sys::HapticDirection::default(),
            length: 1000,
            delay: 0,
            button: 0,
            interval: 0,
            channels,
            period: 10,
            samples,
            data: std::ptr::null_mut(),
            attack_length: 0,
            attack_level: 0,
            fade_length: 0,
            fade_level: 0,
        }
    }

    #[test]
    fn custom_samples_must_cover_every_channel() {
        let data = [0u16; 6];
        let raw = Effect::Custom(custom(2, 3), &data).to_raw().unwrap();
        unsafe {
            assert_eq!(raw.r#type, sys::HAPTIC_CUSTOM);
            assert_eq!(raw.custom.data.cast_const(), data.as_ptr());
        }
        assert!(matches!(
            Effect::Custom(custom(2, 4), &data).to_raw(),
            Err(Error::InvalidParameters)
        ));
        assert!(matches!(
            Effect::Custom(custom(0, 4), &data).to_raw(),
            Err(Error::InvalidParameters)
        ));
    }

    #[test]
    fn effect_type_is_shared() {
        let constant = sys::HapticConstant {
            r#type: sys::HAPTIC_CONSTANT,
            level: 0x4000,
            ..Default::default()
        };
        let raw = Effect::Constant(constant).to_raw().unwrap();
        unsafe {
            assert_eq!(raw.r#type, sys::HAPTIC_CONSTANT);
            assert_eq!(raw.constant.level, 0x4000);
        }
    }
}
