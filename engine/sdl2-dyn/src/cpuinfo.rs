use sdl2_sys as sys;

use crate::{Result, Sdl};

/// Battery state as reported by [`Sdl::get_power_info`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PowerInfo {
    /// One of the `sys::POWERSTATE_*` values.
    pub state: sys::PowerState,
    /// Seconds of battery life left, when known.
    pub seconds: Option<u32>,
    /// Percentage of battery left, when known.
    pub percent: Option<u32>,
}

fn known(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

impl Sdl {
    pub fn get_cpu_count(&self) -> i32 {
        unsafe { (self.fns.SDL_GetCPUCount)() }
    }

    /// L1 cache line size in bytes.
    pub fn get_cpu_cache_line_size(&self) -> i32 {
        unsafe { (self.fns.SDL_GetCPUCacheLineSize)() }
    }

    pub fn has_rdtsc(&self) -> bool {
        unsafe { (self.fns.SDL_HasRDTSC)() }.into()
    }

    pub fn has_altivec(&self) -> bool {
        unsafe { (self.fns.SDL_HasAltiVec)() }.into()
    }

    pub fn has_mmx(&self) -> bool {
        unsafe { (self.fns.SDL_HasMMX)() }.into()
    }

    pub fn has_3dnow(&self) -> bool {
        unsafe { (self.fns.SDL_Has3DNow)() }.into()
    }

    pub fn has_sse(&self) -> bool {
        unsafe { (self.fns.SDL_HasSSE)() }.into()
    }

    pub fn has_sse2(&self) -> bool {
        unsafe { (self.fns.SDL_HasSSE2)() }.into()
    }

    pub fn has_sse3(&self) -> bool {
        unsafe { (self.fns.SDL_HasSSE3)() }.into()
    }

    pub fn has_sse41(&self) -> bool {
        unsafe { (self.fns.SDL_HasSSE41)() }.into()
    }

    pub fn has_sse42(&self) -> bool {
        unsafe { (self.fns.SDL_HasSSE42)() }.into()
    }

    pub fn has_avx(&self) -> bool {
        unsafe { (self.fns.SDL_HasAVX)() }.into()
    }

    pub fn has_avx2(&self) -> bool {
        unsafe { (self.fns.SDL_HasAVX2)() }.into()
    }

    pub fn has_avx512f(&self) -> Result<bool> {
        let has_avx512f = optional_fn!(self, SDL_HasAVX512F);
        Ok(unsafe { has_avx512f() }.into())
    }

    pub fn has_neon(&self) -> bool {
        unsafe { (self.fns.SDL_HasNEON)() }.into()
    }

    /// Installed memory in MiB.
    pub fn get_system_ram(&self) -> i32 {
        unsafe { (self.fns.SDL_GetSystemRAM)() }
    }

    pub fn get_power_info(&self) -> PowerInfo {
        let mut seconds = -1;
        let mut percent = -1;
        let state = unsafe { (self.fns.SDL_GetPowerInfo)(&mut seconds, &mut percent) };
        PowerInfo {
            state,
            seconds: known(seconds),
            percent: known(percent),
        }
    }

    pub fn is_tablet(&self) -> Result<bool> {
        let is_tablet = optional_fn!(self, SDL_IsTablet);
        Ok(unsafe { is_tablet() }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_power_values() {
        assert_eq!(known(-1), None);
        assert_eq!(known(0), Some(0));
        assert_eq!(known(87), Some(87));
    }
}
