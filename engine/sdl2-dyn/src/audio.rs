//! Audio drivers, devices, WAV loading, mixing and audio streams.

use std::{ffi::c_void, ptr::NonNull};

use sdl2_sys as sys;

use crate::{
    callback::{self, Registry},
    opt_cstr_ptr, opt_cstring, opt_string, rwops::RWops, Error, Result, Sdl,
};

/// Fills the device buffer. Playback devices must write every byte; capture
/// devices read it.
pub type AudioHandler = dyn FnMut(&mut [u8]) + Send;

static AUDIO: Registry<usize, AudioHandler> = Registry::new();

unsafe extern "C" fn audio_trampoline(userdata: *mut c_void, stream: *mut u8, len: i32) {
    let Ok(len) = usize::try_from(len) else {
        return;
    };
    if stream.is_null() || len == 0 {
        return;
    }
    let buf = std::slice::from_raw_parts_mut(stream, len);
    let handle = callback::userdata_to_handle(userdata);
    if AUDIO.invoke(&handle, |handler| handler(buf)).is_none() {
        buf.fill(0);
    }
}

fn capture_flag(iscapture: bool) -> i32 {
    i32::from(iscapture)
}

/// An open audio device. Closed on drop.
pub struct AudioDevice<'sdl> {
    sdl: &'sdl Sdl,
    id: sys::AudioDeviceID,
    spec: sys::AudioSpec,
    handle: Option<usize>,
}

unsafe impl Send for AudioDevice<'_> {}

/// Keeps the device callback from running. Unlocks on drop.
pub struct AudioDeviceLock<'a> {
    sdl: &'a Sdl,
    id: sys::AudioDeviceID,
}

impl Drop for AudioDeviceLock<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_UnlockAudioDevice)(self.id) }
    }
}

impl AudioDevice<'_> {
    pub fn id(&self) -> sys::AudioDeviceID {
        self.id
    }

    /// The format the device actually opened with.
    pub fn spec(&self) -> &sys::AudioSpec {
        &self.spec
    }

    /// One of `sys::AUDIO_STOPPED`, `sys::AUDIO_PLAYING` or
    /// `sys::AUDIO_PAUSED`.
    pub fn status(&self) -> sys::AudioStatus {
        unsafe { (self.sdl.fns.SDL_GetAudioDeviceStatus)(self.id) }
    }

    /// Devices open paused.
    pub fn pause(&self, pause_on: bool) {
        unsafe { (self.sdl.fns.SDL_PauseAudioDevice)(self.id, i32::from(pause_on)) }
    }

    /// Append samples to a playback device opened without a callback.
    pub fn queue(&self, data: &[u8]) -> Result<()> {
        let len = u32::try_from(data.len()).map_err(|_| Error::InvalidParameters)?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_QueueAudio)(self.id, data.as_ptr().cast(), len)
        })?;
        Ok(())
    }

    /// Take captured samples, returning how many bytes were written to
    /// `data`.
    pub fn dequeue(&self, data: &mut [u8]) -> usize {
        let len = data.len().min(u32::MAX as usize) as u32;
        unsafe { (self.sdl.fns.SDL_DequeueAudio)(self.id, data.as_mut_ptr().cast(), len) as usize }
    }

    pub fn queued_size(&self) -> u32 {
        unsafe { (self.sdl.fns.SDL_GetQueuedAudioSize)(self.id) }
    }

    pub fn clear_queued(&self) {
        unsafe { (self.sdl.fns.SDL_ClearQueuedAudio)(self.id) }
    }

    pub fn lock(&self) -> AudioDeviceLock<'_> {
        unsafe { (self.sdl.fns.SDL_LockAudioDevice)(self.id) };
        AudioDeviceLock {
            sdl: self.sdl,
            id: self.id,
        }
    }
}

impl Drop for AudioDevice<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_CloseAudioDevice)(self.id) };
        if let Some(handle) = self.handle {
            AUDIO.remove(&handle);
        }
    }
}

/// A WAV file decoded into memory.
pub struct Wav<'sdl> {
    sdl: &'sdl Sdl,
    spec: sys::AudioSpec,
    buf: NonNull<u8>,
    len: u32,
}

impl Wav<'_> {
    pub fn spec(&self) -> &sys::AudioSpec {
        &self.spec
    }

    pub fn buffer(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr(), self.len as usize) }
    }
}

impl Drop for Wav<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_FreeWAV)(self.buf.as_ptr()) }
    }
}

/// Converts between sample formats, channel layouts and rates.
pub struct AudioStream<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::AudioStream>,
}

unsafe impl Send for AudioStream<'_> {}

impl AudioStream<'_> {
    pub fn put(&mut self, data: &[u8]) -> Result<()> {
        let len = crate::count(data.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_AudioStreamPut)(self.raw.as_ptr(), data.as_ptr().cast(), len)
        })?;
        Ok(())
    }

    /// Returns how many converted bytes were written to `data`.
    pub fn get(&mut self, data: &mut [u8]) -> Result<usize> {
        let len = crate::count(data.len())?;
        let got = self.sdl.check(unsafe {
            (self.sdl.fns.SDL_AudioStreamGet)(self.raw.as_ptr(), data.as_mut_ptr().cast(), len)
        })?;
        Ok(got as usize)
    }

    /// Converted bytes ready to [`get`](Self::get).
    pub fn available(&self) -> usize {
        unsafe { (self.sdl.fns.SDL_AudioStreamAvailable)(self.raw.as_ptr()) }.max(0) as usize
    }

    /// Convert whatever is buffered, padding the final frame.
    pub fn flush(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_AudioStreamFlush)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn clear(&mut self) {
        unsafe { (self.sdl.fns.SDL_AudioStreamClear)(self.raw.as_ptr()) }
    }
}

impl Drop for AudioStream<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_FreeAudioStream)(self.raw.as_ptr()) }
    }
}

impl Sdl {
    pub fn get_num_audio_drivers(&self) -> i32 {
        unsafe { (self.fns.SDL_GetNumAudioDrivers)() }
    }

    pub fn get_audio_driver(&self, index: i32) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GetAudioDriver)(index)) }
    }

    /// Start the audio subsystem with `driver`, or the default driver.
    pub fn audio_init(&self, driver: Option<&str>) -> Result<()> {
        let driver = opt_cstring(driver)?;
        self.check(unsafe { (self.fns.SDL_AudioInit)(opt_cstr_ptr(&driver)) })?;
        Ok(())
    }

    pub fn audio_quit(&self) {
        unsafe { (self.fns.SDL_AudioQuit)() }
    }

    pub fn get_current_audio_driver(&self) -> Option<String> {
        unsafe { opt_string((self.fns.SDL_GetCurrentAudioDriver)()) }
    }

    /// Number of devices, or -1 when the list cannot be determined.
    pub fn get_num_audio_devices(&self, iscapture: bool) -> i32 {
        unsafe { (self.fns.SDL_GetNumAudioDevices)(capture_flag(iscapture)) }
    }

    pub fn get_audio_device_name(&self, index: i32, iscapture: bool) -> Result<String> {
        let name = unsafe { (self.fns.SDL_GetAudioDeviceName)(index, capture_flag(iscapture)) };
        unsafe { opt_string(name) }.ok_or_else(|| self.last_error())
    }

    /// Open a device fed through [`AudioDevice::queue`]. Any callback in
    /// `desired` is ignored.
    ///
    /// `allowed_changes` is a mask of `sys::AUDIO_ALLOW_*`.
    pub fn open_audio_device(
        &self,
        device: Option<&str>,
        iscapture: bool,
        desired: &sys::AudioSpec,
        allowed_changes: i32,
    ) -> Result<AudioDevice<'_>> {
        let desired = sys::AudioSpec {
            callback: None,
            userdata: std::ptr::null_mut(),
            ..*desired
        };
        self.open_device(device, iscapture, &desired, allowed_changes, None)
    }

    /// Open a device that pulls samples from `handler` on the audio thread.
    pub fn open_audio_device_with_callback<F>(
        &self,
        device: Option<&str>,
        iscapture: bool,
        desired: &sys::AudioSpec,
        allowed_changes: i32,
        handler: F,
    ) -> Result<AudioDevice<'_>>
    where
        F: FnMut(&mut [u8]) + Send + 'static,
    {
        let handle = callback::next_handle();
        AUDIO.insert(handle, Box::new(handler));
        let desired = sys::AudioSpec {
            callback: Some(audio_trampoline),
            userdata: callback::handle_to_userdata(handle),
            ..*desired
        };
        self.open_device(device, iscapture, &desired, allowed_changes, Some(handle))
            .inspect_err(|_| {
                AUDIO.remove(&handle);
            })
    }

    fn open_device(
        &self,
        device: Option<&str>,
        iscapture: bool,
        desired: &sys::AudioSpec,
        allowed_changes: i32,
        handle: Option<usize>,
    ) -> Result<AudioDevice<'_>> {
        let device = opt_cstring(device)?;
        let mut spec = sys::AudioSpec::default();
        let id = unsafe {
            (self.fns.SDL_OpenAudioDevice)(
                opt_cstr_ptr(&device),
                capture_flag(iscapture),
                desired,
                &mut spec,
                allowed_changes,
            )
        };
        let id = self.check_nonzero(id)?;
        Ok(AudioDevice {
            sdl: self,
            id,
            spec,
            handle,
        })
    }

    /// Open the legacy device 1 in queue mode, returning the obtained format.
    /// Use [`Sdl::queue_legacy_audio`] and friends on it.
    pub fn open_audio(&self, desired: &sys::AudioSpec) -> Result<sys::AudioSpec> {
        let mut desired = sys::AudioSpec {
            callback: None,
            userdata: std::ptr::null_mut(),
            ..*desired
        };
        let mut obtained = sys::AudioSpec::default();
        self.check(unsafe { (self.fns.SDL_OpenAudio)(&mut desired, &mut obtained) })?;
        Ok(obtained)
    }

    pub fn queue_legacy_audio(&self, data: &[u8]) -> Result<()> {
        let len = u32::try_from(data.len()).map_err(|_| Error::InvalidParameters)?;
        self.check(unsafe { (self.fns.SDL_QueueAudio)(1, data.as_ptr().cast(), len) })?;
        Ok(())
    }

    pub fn get_audio_status(&self) -> sys::AudioStatus {
        unsafe { (self.fns.SDL_GetAudioStatus)() }
    }

    pub fn pause_audio(&self, pause_on: bool) {
        unsafe { (self.fns.SDL_PauseAudio)(i32::from(pause_on)) }
    }

    pub fn lock_audio(&self) {
        unsafe { (self.fns.SDL_LockAudio)() }
    }

    pub fn unlock_audio(&self) {
        unsafe { (self.fns.SDL_UnlockAudio)() }
    }

    pub fn close_audio(&self) {
        unsafe { (self.fns.SDL_CloseAudio)() }
    }

    /// Decode a WAV stream. The stream is closed whether or not decoding
    /// succeeds.
    pub fn load_wav_rw<'sdl>(&'sdl self, src: RWops<'_>) -> Result<Wav<'sdl>> {
        let mut spec = sys::AudioSpec::default();
        let mut buf = std::ptr::null_mut();
        let mut len = 0;
        let ret = unsafe {
            (self.fns.SDL_LoadWAV_RW)(src.into_raw(), 1, &mut spec, &mut buf, &mut len)
        };
        self.check_ptr(ret)?;
        let buf = self.check_ptr(buf)?;
        Ok(Wav {
            sdl: self,
            spec,
            buf,
            len,
        })
    }

    pub fn load_wav(&self, path: &str) -> Result<Wav<'_>> {
        self.load_wav_rw(self.rw_from_file(path, "rb")?)
    }

    /// Mix `src` into `dst` in the legacy device's format. `volume` runs
    /// from 0 to `sys::MIX_MAXVOLUME`.
    pub fn mix_audio(&self, dst: &mut [u8], src: &[u8], volume: i32) {
        let len = dst.len().min(src.len()).min(u32::MAX as usize) as u32;
        unsafe { (self.fns.SDL_MixAudio)(dst.as_mut_ptr(), src.as_ptr(), len, volume) }
    }

    pub fn mix_audio_format(&self, dst: &mut [u8], src: &[u8], format: sys::AudioFormat, volume: i32) {
        let len = dst.len().min(src.len()).min(u32::MAX as usize) as u32;
        unsafe { (self.fns.SDL_MixAudioFormat)(dst.as_mut_ptr(), src.as_ptr(), format, len, volume) }
    }

    pub fn new_audio_stream(
        &self,
        src_format: sys::AudioFormat,
        src_channels: u8,
        src_rate: i32,
        dst_format: sys::AudioFormat,
        dst_channels: u8,
        dst_rate: i32,
    ) -> Result<AudioStream<'_>> {
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_NewAudioStream)(
                src_format,
                src_channels,
                src_rate,
                dst_format,
                dst_channels,
                dst_rate,
            )
        })?;
        Ok(AudioStream { sdl: self, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trampoline_fills_buffer() {
        let handle = callback::next_handle();
        AUDIO.insert(
            handle,
            Box::new(|buf: &mut [u8]| {
                for (i, sample) in buf.iter_mut().enumerate() {
                    *sample = i as u8;
                }
            }),
        );

        let mut buf = [0xAAu8; 4];
        let userdata = callback::handle_to_userdata(handle);
        unsafe { audio_trampoline(userdata, buf.as_mut_ptr(), 4) };
        assert_eq!(buf, [0, 1, 2, 3]);

        // A closed device's late callback plays silence.
        AUDIO.remove(&handle);
        unsafe { audio_trampoline(userdata, buf.as_mut_ptr(), 4) };
        assert_eq!(buf, [0; 4]);
    }

    #[test]
    fn capture_flags() {
        assert_eq!(capture_flag(false), 0);
        assert_eq!(capture_flag(true), 1);
    }
}
