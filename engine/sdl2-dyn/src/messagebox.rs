//! Modal message boxes.

use std::ffi::CString;

use sdl2_sys as sys;
pub use sys::{MessageBoxColor, MessageBoxColorScheme};

use crate::{window::Window, Result, Sdl};

#[derive(Clone, Copy, Debug)]
pub struct MessageBoxButton<'a> {
    /// `sys::MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT` and friends.
    pub flags: u32,
    pub id: i32,
    pub text: &'a str,
}

pub struct MessageBox<'a> {
    /// One of `sys::MESSAGEBOX_ERROR`, `_WARNING` or `_INFORMATION`.
    pub flags: u32,
    pub parent: Option<&'a Window<'a>>,
    pub title: &'a str,
    pub message: &'a str,
    pub buttons: &'a [MessageBoxButton<'a>],
    pub color_scheme: Option<MessageBoxColorScheme>,
}

impl Sdl {
    /// Block until a button is chosen and return its id. `None` when the box
    /// was closed without choosing one.
    ///
    /// Safe to call before initialization and from any thread.
    pub fn show_message_box(&self, message_box: &MessageBox<'_>) -> Result<Option<i32>> {
        let title = CString::new(message_box.title)?;
        let message = CString::new(message_box.message)?;
        let texts = message_box
            .buttons
            .iter()
            .map(|button| CString::new(button.text))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let buttons = message_box
            .buttons
            .iter()
            .zip(&texts)
            .map(|(button, text)| sys::MessageBoxButtonData {
                flags: button.flags,
                buttonid: button.id,
                text: text.as_ptr(),
            })
            .collect::<Vec<_>>();

        let data = sys::MessageBoxData {
            flags: message_box.flags,
            window: message_box
                .parent
                .map_or(std::ptr::null_mut(), |window| window.as_ptr()),
            title: title.as_ptr(),
            message: message.as_ptr(),
            numbuttons: crate::count(buttons.len())?,
            buttons: buttons.as_ptr(),
            colorScheme: crate::opt_ptr(message_box.color_scheme.as_ref()),
        };

        let mut button_id = -1;
        self.check(unsafe { (self.fns.SDL_ShowMessageBox)(&data, &mut button_id) })?;
        Ok((button_id >= 0).then_some(button_id))
    }

    pub fn show_simple_message_box(
        &self,
        flags: u32,
        title: &str,
        message: &str,
        parent: Option<&Window<'_>>,
    ) -> Result<()> {
        let title = CString::new(title)?;
        let message = CString::new(message)?;
        self.check(unsafe {
            (self.fns.SDL_ShowSimpleMessageBox)(
                flags,
                title.as_ptr(),
                message.as_ptr(),
                parent.map_or(std::ptr::null_mut(), |window| window.as_ptr()),
            )
        })?;
        Ok(())
    }
}
