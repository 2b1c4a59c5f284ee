//! Game controllers: joysticks with a known button layout.

use std::{ffi::CString, ptr::NonNull};

use sdl2_sys as sys;
use sys::{GameControllerAxis, GameControllerButton, JoystickGUID, JoystickID};

use crate::{opt_string, rwops::RWops, Result, Sdl};

/// The joystick input a controller axis or button is mapped to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonBind {
    None,
    Button(i32),
    Axis(i32),
    /// A hat and the `sys::HAT_*` mask that triggers it.
    Hat { hat: i32, mask: i32 },
}

impl ButtonBind {
    fn from_raw(bind: &sys::GameControllerButtonBind) -> Self {
        unsafe {
            match bind.bindType {
                sys::CONTROLLER_BINDTYPE_BUTTON => Self::Button(bind.value.button),
                sys::CONTROLLER_BINDTYPE_AXIS => Self::Axis(bind.value.axis),
                sys::CONTROLLER_BINDTYPE_HAT => Self::Hat {
                    hat: bind.value.hat.hat,
                    mask: bind.value.hat.hat_mask,
                },
                _ => Self::None,
            }
        }
    }
}

/// An opened game controller. Closed on drop.
pub struct GameController<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::GameController>,
}

impl Sdl {
    /// Add every mapping line of `src`. Returns how many were added.
    pub fn game_controller_add_mappings_from_rw(&self, src: RWops<'_>) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_GameControllerAddMappingsFromRW)(src.into_raw(), 1) })
    }

    pub fn game_controller_add_mappings_from_file(&self, path: &str) -> Result<i32> {
        self.game_controller_add_mappings_from_rw(self.rw_from_file(path, "rb")?)
    }

    /// `true` when a new mapping was added, `false` when an existing one was
    /// updated.
    pub fn game_controller_add_mapping(&self, mapping: &str) -> Result<bool> {
        let mapping = CString::new(mapping)?;
        Ok(self.check(unsafe { (self.fns.SDL_GameControllerAddMapping)(mapping.as_ptr()) })? == 1)
    }

    pub fn game_controller_num_mappings(&self) -> i32 {
        unsafe { (self.fns.SDL_GameControllerNumMappings)() }
    }

    pub fn game_controller_mapping_for_index(&self, mapping_index: i32) -> Option<String> {
        unsafe { self.take_native_string((self.fns.SDL_GameControllerMappingForIndex)(mapping_index)) }
    }

    pub fn game_controller_mapping_for_guid(&self, guid: JoystickGUID) -> Option<String> {
        unsafe { self.take_native_string((self.fns.SDL_GameControllerMappingForGUID)(guid)) }
    }

    pub fn game_controller_mapping_for_device_index(&self, joystick_index: i32) -> Result<Option<String>> {
        let mapping_for_device_index = optional_fn!(self, SDL_GameControllerMappingForDeviceIndex);
        Ok(unsafe { self.take_native_string(mapping_for_device_index(joystick_index)) })
    }

    pub fn is_game_controller(&self, joystick_index: i32) -> bool {
        unsafe { (self.fns.SDL_IsGameController)(joystick_index) }.into()
    }

    pub fn game_controller_name_for_index(&self, joystick_index: i32) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GameControllerNameForIndex)(joystick_index)) }
    }

    pub fn game_controller_open(&self, joystick_index: i32) -> Result<GameController<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_GameControllerOpen)(joystick_index) })?;
        Ok(GameController { sdl: self, raw })
    }

    /// Whether a controller for joystick `instance_id` is currently open.
    pub fn game_controller_is_open(&self, instance_id: JoystickID) -> bool {
        !unsafe { (self.fns.SDL_GameControllerFromInstanceID)(instance_id) }.is_null()
    }

    /// `state` is `sys::QUERY`, `sys::ENABLE` or `sys::IGNORE`. Returns
    /// whether events are enabled afterwards.
    pub fn game_controller_event_state(&self, state: i32) -> Result<bool> {
        Ok(self.check(unsafe { (self.fns.SDL_GameControllerEventState)(state) })? == sys::ENABLE)
    }

    pub fn game_controller_update(&self) {
        unsafe { (self.fns.SDL_GameControllerUpdate)() }
    }

    /// `sys::CONTROLLER_AXIS_INVALID` for unknown names.
    pub fn game_controller_get_axis_from_string(&self, name: &str) -> Result<GameControllerAxis> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns.SDL_GameControllerGetAxisFromString)(name.as_ptr()) })
    }

    pub fn game_controller_get_string_for_axis(&self, axis: GameControllerAxis) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GameControllerGetStringForAxis)(axis)) }
    }

    /// `sys::CONTROLLER_BUTTON_INVALID` for unknown names.
    pub fn game_controller_get_button_from_string(&self, name: &str) -> Result<GameControllerButton> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns.SDL_GameControllerGetButtonFromString)(name.as_ptr()) })
    }

    pub fn game_controller_get_string_for_button(&self, button: GameControllerButton) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GameControllerGetStringForButton)(button)) }
    }
}

impl GameController<'_> {
    pub fn as_ptr(&self) -> *mut sys::GameController {
        self.raw.as_ptr()
    }

    pub fn mapping(&self) -> Option<String> {
        unsafe {
            self.sdl
                .take_native_string((self.sdl.fns.SDL_GameControllerMapping)(self.raw.as_ptr()))
        }
    }

    pub fn name(&self) -> Option<String> {
        unsafe { opt_string((self.sdl.fns.SDL_GameControllerName)(self.raw.as_ptr())) }
    }

    pub fn player_index(&self) -> Result<Option<i32>> {
        let get_player_index = optional_fn!(self.sdl, SDL_GameControllerGetPlayerIndex);
        let index = unsafe { get_player_index(self.raw.as_ptr()) };
        Ok((index >= 0).then_some(index))
    }

    pub fn vendor(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_GameControllerGetVendor)(self.raw.as_ptr()) }
    }

    pub fn product(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_GameControllerGetProduct)(self.raw.as_ptr()) }
    }

    pub fn product_version(&self) -> u16 {
        unsafe { (self.sdl.fns.SDL_GameControllerGetProductVersion)(self.raw.as_ptr()) }
    }

    pub fn attached(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_GameControllerGetAttached)(self.raw.as_ptr()) }.into()
    }

    /// Instance id of the underlying joystick, which the controller owns.
    pub fn instance_id(&self) -> Result<JoystickID> {
        let joystick = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_GameControllerGetJoystick)(self.raw.as_ptr())
        })?;
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_JoystickInstanceID)(joystick.as_ptr()) })
    }

    pub fn bind_for_axis(&self, axis: GameControllerAxis) -> ButtonBind {
        let bind = unsafe { (self.sdl.fns.SDL_GameControllerGetBindForAxis)(self.raw.as_ptr(), axis) };
        ButtonBind::from_raw(&bind)
    }

    /// Triggers range from 0 to `sys::JOYSTICK_AXIS_MAX`, sticks over the
    /// full `i16`.
    pub fn axis(&self, axis: GameControllerAxis) -> i16 {
        unsafe { (self.sdl.fns.SDL_GameControllerGetAxis)(self.raw.as_ptr(), axis) }
    }

    pub fn bind_for_button(&self, button: GameControllerButton) -> ButtonBind {
        let bind =
            unsafe { (self.sdl.fns.SDL_GameControllerGetBindForButton)(self.raw.as_ptr(), button) };
        ButtonBind::from_raw(&bind)
    }

    pub fn button(&self, button: GameControllerButton) -> bool {
        unsafe { (self.sdl.fns.SDL_GameControllerGetButton)(self.raw.as_ptr(), button) != 0 }
    }

    pub fn rumble(&mut self, low_frequency: u16, high_frequency: u16, duration_ms: u32) -> Result<()> {
        let rumble = optional_fn!(self.sdl, SDL_GameControllerRumble);
        self.sdl.check(unsafe {
            rumble(self.raw.as_ptr(), low_frequency, high_frequency, duration_ms)
        })?;
        Ok(())
    }
}

impl Drop for GameController<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_GameControllerClose)(self.raw.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_binds() {
        let hat = sys::GameControllerButtonBind {
            bindType: sys::CONTROLLER_BINDTYPE_HAT,
            value: sys::GameControllerButtonBindValue {
                hat: sys::GameControllerButtonBindHat {
                    hat: 0,
                    hat_mask: sys::HAT_UP as i32,
                },
            },
        };
        assert_eq!(
            ButtonBind::from_raw(&hat),
            ButtonBind::Hat {
                hat: 0,
                mask: sys::HAT_UP as i32
            }
        );

        let axis = sys::GameControllerButtonBind {
            bindType: sys::CONTROLLER_BINDTYPE_AXIS,
            value: sys::GameControllerButtonBindValue { axis: 3 },
        };
        assert_eq!(ButtonBind::from_raw(&axis), ButtonBind::Axis(3));

        let none = sys::GameControllerButtonBind {
            bindType: sys::CONTROLLER_BINDTYPE_NONE,
            value: sys::GameControllerButtonBindValue { button: 0 },
        };
        assert_eq!(ButtonBind::from_raw(&none), ButtonBind::None);
    }
}
