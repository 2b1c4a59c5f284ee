use std::{ffi::c_void, time::Duration};

use sdl2_sys as sys;

use crate::{callback, callback::Registry, Result, Sdl};

/// Receives the current interval and returns the next one in milliseconds,
/// or zero to stop.
pub type TimerHandler = dyn FnMut(u32) -> u32 + Send;

static TIMERS: Registry<usize, TimerHandler> = Registry::new();

unsafe extern "C" fn timer_trampoline(interval: u32, param: *mut c_void) -> u32 {
    let handle = callback::userdata_to_handle(param);
    TIMERS
        .invoke(&handle, |handler| handler(interval))
        .unwrap_or(0)
}

/// A running native timer. Dropping it cancels the timer.
pub struct Timer<'sdl> {
    sdl: &'sdl Sdl,
    id: sys::TimerID,
    handle: usize,
}

impl Timer<'_> {
    pub fn id(&self) -> sys::TimerID {
        self.id
    }

    /// Cancel the timer, returning `false` if it had already stopped itself.
    pub fn remove(self) -> bool {
        let removed = unsafe { (self.sdl.fns.SDL_RemoveTimer)(self.id) }.into();
        TIMERS.remove(&self.handle);
        std::mem::forget(self);
        removed
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_RemoveTimer)(self.id) };
        TIMERS.remove(&self.handle);
    }
}

impl Sdl {
    /// Milliseconds since the library initialized.
    pub fn get_ticks(&self) -> u32 {
        unsafe { (self.fns.SDL_GetTicks)() }
    }

    pub fn get_performance_counter(&self) -> u64 {
        unsafe { (self.fns.SDL_GetPerformanceCounter)() }
    }

    pub fn get_performance_frequency(&self) -> u64 {
        unsafe { (self.fns.SDL_GetPerformanceFrequency)() }
    }

    pub fn delay(&self, ms: u32) {
        unsafe { (self.fns.SDL_Delay)(ms) }
    }

    /// Run `handler` on the native timer thread after `interval`, and again
    /// after each interval it returns.
    pub fn add_timer<F>(&self, interval: Duration, handler: F) -> Result<Timer<'_>>
    where
        F: FnMut(u32) -> u32 + Send + 'static,
    {
        let interval = interval.as_millis().min(u32::MAX as u128) as u32;
        let handle = callback::next_handle();
        TIMERS.insert(handle, Box::new(handler));

        let id = unsafe {
            (self.fns.SDL_AddTimer)(interval, timer_trampoline, callback::handle_to_userdata(handle))
        };
        if id == 0 {
            let err = self.last_error();
            TIMERS.remove(&handle);
            return Err(err);
        }

        Ok(Timer {
            sdl: self,
            id,
            handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trampoline_returns_next_interval() {
        let handle = callback::next_handle();
        let mut calls = 0;
        TIMERS.insert(
            handle,
            Box::new(move |interval| {
                calls += 1;
                if calls < 2 {
                    interval * 2
                } else {
                    0
                }
            }),
        );
        let param = callback::handle_to_userdata(handle);
        unsafe {
            assert_eq!(timer_trampoline(10, param), 20);
            assert_eq!(timer_trampoline(20, param), 0);
        }
        TIMERS.remove(&handle);
        assert_eq!(unsafe { timer_trampoline(10, param) }, 0);
    }
}
