use std::ffi::CString;

use crate::{Result, Sdl};

impl Sdl {
    pub fn set_clipboard_text(&self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        self.check(unsafe { (self.fns.SDL_SetClipboardText)(text.as_ptr()) })?;
        Ok(())
    }

    /// The clipboard contents, empty when the clipboard holds no text.
    pub fn get_clipboard_text(&self) -> Result<String> {
        let text = unsafe { (self.fns.SDL_GetClipboardText)() };
        // Null only when the copy could not be allocated.
        unsafe { self.take_native_string(text) }.ok_or_else(|| self.last_error())
    }

    pub fn has_clipboard_text(&self) -> bool {
        unsafe { (self.fns.SDL_HasClipboardText)() }.into()
    }
}
