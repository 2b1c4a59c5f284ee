//! OpenGL library loading, attributes and contexts.

use std::{
    ffi::{c_void, CString},
    ptr::NonNull,
};

use sdl2_sys as sys;

use crate::{opt_cstr_ptr, opt_cstring, window::Window, Result, Sdl};

/// An OpenGL context. Deleted on drop.
pub struct GlContext<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<c_void>,
}

impl GlContext<'_> {
    pub fn as_ptr(&self) -> sys::GLContext {
        self.raw.as_ptr()
    }

    pub fn is_current(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_GL_GetCurrentContext)() == self.raw.as_ptr() }
    }
}

impl Drop for GlContext<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_GL_DeleteContext)(self.raw.as_ptr()) }
    }
}

impl Sdl {
    /// Load `path`, or the platform's default GL library.
    pub fn gl_load_library(&self, path: Option<&str>) -> Result<()> {
        let path = opt_cstring(path)?;
        self.check(unsafe { (self.fns.SDL_GL_LoadLibrary)(opt_cstr_ptr(&path)) })?;
        Ok(())
    }

    pub fn gl_unload_library(&self) {
        unsafe { (self.fns.SDL_GL_UnloadLibrary)() }
    }

    /// Address of a GL function, `None` when it is not available.
    pub fn gl_get_proc_address(&self, name: &str) -> Result<Option<NonNull<c_void>>> {
        let name = CString::new(name)?;
        Ok(NonNull::new(unsafe { (self.fns.SDL_GL_GetProcAddress)(name.as_ptr()) }))
    }

    /// Needs a current context.
    pub fn gl_extension_supported(&self, extension: &str) -> Result<bool> {
        let extension = CString::new(extension)?;
        Ok(unsafe { (self.fns.SDL_GL_ExtensionSupported)(extension.as_ptr()) }.into())
    }

    pub fn gl_reset_attributes(&self) {
        unsafe { (self.fns.SDL_GL_ResetAttributes)() }
    }

    /// Set one of the `sys::GL_*` attributes. Takes effect for windows
    /// created afterwards.
    pub fn gl_set_attribute(&self, attr: sys::GLattr, value: i32) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_GL_SetAttribute)(attr, value) })?;
        Ok(())
    }

    pub fn gl_get_attribute(&self, attr: sys::GLattr) -> Result<i32> {
        let mut value = 0;
        self.check(unsafe { (self.fns.SDL_GL_GetAttribute)(attr, &mut value) })?;
        Ok(value)
    }

    /// Id of the window the current context renders to.
    pub fn gl_get_current_window_id(&self) -> Option<u32> {
        self.window_id_of(unsafe { (self.fns.SDL_GL_GetCurrentWindow)() })
    }

    /// 0 for immediate, 1 for vsync, -1 for adaptive vsync.
    pub fn gl_set_swap_interval(&self, interval: i32) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_GL_SetSwapInterval)(interval) })?;
        Ok(())
    }

    pub fn gl_get_swap_interval(&self) -> i32 {
        unsafe { (self.fns.SDL_GL_GetSwapInterval)() }
    }
}

impl<'sdl> Window<'sdl> {
    /// The window must have been created with `sys::WINDOW_OPENGL`. The new
    /// context is made current.
    pub fn gl_create_context(&self) -> Result<GlContext<'sdl>> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.fns.SDL_GL_CreateContext)(self.as_ptr()) })?;
        Ok(GlContext { sdl: self.sdl, raw })
    }

    pub fn gl_make_current(&self, context: &GlContext<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GL_MakeCurrent)(self.as_ptr(), context.as_ptr())
        })?;
        Ok(())
    }

    /// Size in pixels, which differs from [`Window::size`] on high-DPI
    /// displays.
    pub fn gl_drawable_size(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_GL_GetDrawableSize)(self.as_ptr(), &mut w, &mut h) };
        (w, h)
    }

    pub fn gl_swap_window(&self) {
        unsafe { (self.sdl.fns.SDL_GL_SwapWindow)(self.as_ptr()) }
    }
}
