//! Keyboard state, key names and text input.

use std::ffi::CString;

use sdl2_sys as sys;
use sys::{Keycode, Keymod, Rect, Scancode};

use crate::{string_from_ptr, window::Window, Result, Sdl};

/// A view of the native key array, indexed by scancode. Updated in place by
/// event processing.
#[derive(Clone, Copy)]
pub struct KeyboardState<'sdl> {
    keys: &'sdl [u8],
}

impl KeyboardState<'_> {
    pub fn is_pressed(&self, scancode: Scancode) -> bool {
        usize::try_from(scancode.0)
            .ok()
            .and_then(|index| self.keys.get(index))
            .is_some_and(|&state| state != 0)
    }

    /// Scancodes currently held down.
    pub fn pressed(&self) -> impl Iterator<Item = Scancode> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, &state)| state != 0)
            .map(|(index, _)| Scancode(index as i32))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.keys
    }
}

impl Sdl {
    /// Id of the window with keyboard focus.
    pub fn get_keyboard_focus(&self) -> Option<u32> {
        self.window_id_of(unsafe { (self.fns.SDL_GetKeyboardFocus)() })
    }

    pub fn get_keyboard_state(&self) -> KeyboardState<'_> {
        let mut len = 0;
        let keys = unsafe { (self.fns.SDL_GetKeyboardState)(&mut len) };
        let keys = match usize::try_from(len) {
            Ok(len) if !keys.is_null() => unsafe { std::slice::from_raw_parts(keys, len) },
            _ => &[],
        };
        KeyboardState { keys }
    }

    pub fn get_mod_state(&self) -> Keymod {
        Keymod(unsafe { (self.fns.SDL_GetModState)() } as u16)
    }

    /// Overrides the modifier state without touching the keys.
    pub fn set_mod_state(&self, modifiers: Keymod) {
        unsafe { (self.fns.SDL_SetModState)(i32::from(modifiers.0)) }
    }

    pub fn get_key_from_scancode(&self, scancode: Scancode) -> Keycode {
        unsafe { (self.fns.SDL_GetKeyFromScancode)(scancode) }
    }

    pub fn get_scancode_from_key(&self, key: Keycode) -> Scancode {
        unsafe { (self.fns.SDL_GetScancodeFromKey)(key) }
    }

    /// Empty when the scancode has no name.
    pub fn get_scancode_name(&self, scancode: Scancode) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetScancodeName)(scancode)) }
    }

    /// `Scancode::UNKNOWN` when the name is not recognized.
    pub fn get_scancode_from_name(&self, name: &str) -> Result<Scancode> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns.SDL_GetScancodeFromName)(name.as_ptr()) })
    }

    pub fn get_key_name(&self, key: Keycode) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetKeyName)(key)) }
    }

    pub fn get_key_from_name(&self, name: &str) -> Result<Keycode> {
        let name = CString::new(name)?;
        Ok(unsafe { (self.fns.SDL_GetKeyFromName)(name.as_ptr()) })
    }

    pub fn start_text_input(&self) {
        unsafe { (self.fns.SDL_StartTextInput)() }
    }

    pub fn is_text_input_active(&self) -> bool {
        unsafe { (self.fns.SDL_IsTextInputActive)() }.into()
    }

    pub fn stop_text_input(&self) {
        unsafe { (self.fns.SDL_StopTextInput)() }
    }

    /// Where the input method should place its candidate list.
    pub fn set_text_input_rect(&self, rect: &Rect) {
        let mut rect = *rect;
        unsafe { (self.fns.SDL_SetTextInputRect)(&mut rect) }
    }

    pub fn has_screen_keyboard_support(&self) -> bool {
        unsafe { (self.fns.SDL_HasScreenKeyboardSupport)() }.into()
    }
}

impl Window<'_> {
    pub fn is_screen_keyboard_shown(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_IsScreenKeyboardShown)(self.as_ptr()) }.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_lookup() {
        let mut keys = [0u8; 8];
        keys[Scancode::A.0 as usize] = 1;
        let state = KeyboardState { keys: &keys };
        assert!(state.is_pressed(Scancode::A));
        assert!(!state.is_pressed(Scancode(5)));
        assert!(!state.is_pressed(Scancode(-1)));
        assert!(!state.is_pressed(Scancode(500)));
        assert_eq!(state.pressed().collect::<Vec<_>>(), [Scancode::A]);
    }
}
