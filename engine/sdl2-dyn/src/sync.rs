//! Native mutexes, semaphores and condition variables.
//!
//! These exist for sharing locks with native code. Pure Rust code should
//! prefer `std::sync` or `parking_lot`.

use std::{ptr::NonNull, time::Duration};

use sdl2_sys as sys;

use crate::{Result, Sdl};

fn timeout_ms(timeout: Duration) -> u32 {
    // `MUTEX_MAXWAIT` means forever, so clamp one below it.
    timeout.as_millis().min((sys::MUTEX_MAXWAIT - 1) as u128) as u32
}

pub struct Mutex<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Mutex>,
}

unsafe impl Send for Mutex<'_> {}
unsafe impl Sync for Mutex<'_> {}

/// Held lock on a [`Mutex`]. Unlocks on drop.
pub struct MutexGuard<'a> {
    mutex: &'a Mutex<'a>,
}

impl Mutex<'_> {
    pub fn lock(&self) -> Result<MutexGuard<'_>> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_LockMutex)(self.raw.as_ptr()) })?;
        Ok(MutexGuard { mutex: self })
    }

    /// `None` when another thread holds the lock.
    pub fn try_lock(&self) -> Result<Option<MutexGuard<'_>>> {
        match self
            .sdl
            .check(unsafe { (self.sdl.fns.SDL_TryLockMutex)(self.raw.as_ptr()) })?
        {
            sys::MUTEX_TIMEDOUT => Ok(None),
            _ => Ok(Some(MutexGuard { mutex: self })),
        }
    }

    pub fn as_ptr(&self) -> *mut sys::Mutex {
        self.raw.as_ptr()
    }
}

impl Drop for MutexGuard<'_> {
    fn drop(&mut self) {
        let mutex = self.mutex;
        unsafe { (mutex.sdl.fns.SDL_UnlockMutex)(mutex.raw.as_ptr()) };
    }
}

impl Drop for Mutex<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroyMutex)(self.raw.as_ptr()) }
    }
}

pub struct Semaphore<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Semaphore>,
}

unsafe impl Send for Semaphore<'_> {}
unsafe impl Sync for Semaphore<'_> {}

impl Semaphore<'_> {
    /// Block until the value is positive, then decrement it.
    pub fn wait(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_SemWait)(self.raw.as_ptr()) })?;
        Ok(())
    }

    /// Returns `false` instead of blocking when the value is zero.
    pub fn try_wait(&self) -> Result<bool> {
        let ret = self
            .sdl
            .check(unsafe { (self.sdl.fns.SDL_SemTryWait)(self.raw.as_ptr()) })?;
        Ok(ret != sys::MUTEX_TIMEDOUT)
    }

    /// Returns `false` when `timeout` passed first.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<bool> {
        let ret = self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SemWaitTimeout)(self.raw.as_ptr(), timeout_ms(timeout))
        })?;
        Ok(ret != sys::MUTEX_TIMEDOUT)
    }

    pub fn post(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_SemPost)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn value(&self) -> u32 {
        unsafe { (self.sdl.fns.SDL_SemValue)(self.raw.as_ptr()) }
    }
}

impl Drop for Semaphore<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroySemaphore)(self.raw.as_ptr()) }
    }
}

pub struct Cond<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Cond>,
}

unsafe impl Send for Cond<'_> {}
unsafe impl Sync for Cond<'_> {}

impl Cond<'_> {
    pub fn signal(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_CondSignal)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn broadcast(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_CondBroadcast)(self.raw.as_ptr()) })?;
        Ok(())
    }

    /// Atomically release `guard`'s mutex and wait. The mutex is held again
    /// when this returns.
    pub fn wait(&self, guard: &mut MutexGuard<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_CondWait)(self.raw.as_ptr(), guard.mutex.raw.as_ptr())
        })?;
        Ok(())
    }

    /// Returns `false` when `timeout` passed without a signal.
    pub fn wait_timeout(&self, guard: &mut MutexGuard<'_>, timeout: Duration) -> Result<bool> {
        let ret = self.sdl.check(unsafe {
            (self.sdl.fns.SDL_CondWaitTimeout)(
                self.raw.as_ptr(),
                guard.mutex.raw.as_ptr(),
                timeout_ms(timeout),
            )
        })?;
        Ok(ret != sys::MUTEX_TIMEDOUT)
    }
}

impl Drop for Cond<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroyCond)(self.raw.as_ptr()) }
    }
}

impl Sdl {
    pub fn create_mutex(&self) -> Result<Mutex<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_CreateMutex)() })?;
        Ok(Mutex { sdl: self, raw })
    }

    pub fn create_semaphore(&self, initial_value: u32) -> Result<Semaphore<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_CreateSemaphore)(initial_value) })?;
        Ok(Semaphore { sdl: self, raw })
    }

    pub fn create_cond(&self) -> Result<Cond<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_CreateCond)() })?;
        Ok(Cond { sdl: self, raw })
    }

    /// The native id of the calling thread.
    pub fn thread_id(&self) -> sys::ThreadID {
        unsafe { (self.fns.SDL_ThreadID)() }
    }

    pub fn set_thread_priority(&self, priority: sys::ThreadPriority) -> Result<()> {
        self.check(unsafe { (self.fns.SDL_SetThreadPriority)(priority) })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_never_mean_forever() {
        assert_eq!(timeout_ms(Duration::from_millis(20)), 20);
        assert_eq!(timeout_ms(Duration::MAX), sys::MUTEX_MAXWAIT - 1);
    }
}
