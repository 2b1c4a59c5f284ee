//! Vulkan loader access and surface creation.

use std::{ffi::c_void, ptr::NonNull};

use sdl2_sys as sys;

use crate::{opt_cstr_ptr, opt_cstring, string_from_ptr, window::Window, Result, Sdl};

impl Sdl {
    /// Load `path`, or the platform's default Vulkan loader.
    pub fn vulkan_load_library(&self, path: Option<&str>) -> Result<()> {
        let path = opt_cstring(path)?;
        self.check(unsafe { (self.fns.SDL_Vulkan_LoadLibrary)(opt_cstr_ptr(&path)) })?;
        Ok(())
    }

    pub fn vulkan_unload_library(&self) {
        unsafe { (self.fns.SDL_Vulkan_UnloadLibrary)() }
    }

    /// `vkGetInstanceProcAddr` of the loaded loader.
    pub fn vulkan_get_instance_proc_addr(&self) -> Result<NonNull<c_void>> {
        self.check_ptr(unsafe { (self.fns.SDL_Vulkan_GetVkGetInstanceProcAddr)() })
    }

    /// Instance extensions needed to present to any window.
    pub fn vulkan_instance_extensions(&self) -> Result<Vec<String>> {
        self.instance_extensions(std::ptr::null_mut())
    }

    fn instance_extensions(&self, window: *mut sys::Window) -> Result<Vec<String>> {
        let mut count = 0;
        self.check_bool(unsafe {
            (self.fns.SDL_Vulkan_GetInstanceExtensions)(window, &mut count, std::ptr::null_mut())
        })?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut names = vec![std::ptr::null(); count as usize];
        self.check_bool(unsafe {
            (self.fns.SDL_Vulkan_GetInstanceExtensions)(window, &mut count, names.as_mut_ptr())
        })?;
        names.truncate(count as usize);

        Ok(names
            .into_iter()
            .map(|name| unsafe { string_from_ptr(name) })
            .collect())
    }
}

impl Window<'_> {
    /// Instance extensions needed to present to this window. The window must
    /// have been created with `sys::WINDOW_VULKAN`.
    pub fn vulkan_instance_extensions(&self) -> Result<Vec<String>> {
        self.sdl.instance_extensions(self.as_ptr())
    }

    /// Create a `VkSurfaceKHR` for this window. The caller destroys it with
    /// `vkDestroySurfaceKHR` before the window goes away.
    ///
    /// # Safety
    ///
    /// `instance` must be a live `VkInstance` created with the extensions
    /// from [`Window::vulkan_instance_extensions`].
    pub unsafe fn vulkan_create_surface(&self, instance: sys::VkInstance) -> Result<sys::VkSurfaceKHR> {
        let mut surface = !0;
        self.sdl.check_bool((self.sdl.fns.SDL_Vulkan_CreateSurface)(
            self.as_ptr(),
            instance,
            &mut surface,
        ))?;
        Ok(surface)
    }

    /// Size in pixels of the swapchain images.
    pub fn vulkan_drawable_size(&self) -> (u32, u32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_Vulkan_GetDrawableSize)(self.as_ptr(), &mut w, &mut h) };
        (w as u32, h as u32)
    }
}
