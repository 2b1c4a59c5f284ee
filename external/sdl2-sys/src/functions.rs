use std::ffi::{c_char, c_void, CStr};
use std::mem::transmute;

use crate::*;

pub type HintCallback = unsafe extern "C" fn(
    userdata: *mut c_void,
    name: *const c_char,
    old_value: *const c_char,
    new_value: *const c_char,
);
pub type EventFilter = unsafe extern "C" fn(userdata: *mut c_void, event: *mut Event) -> i32;
pub type LogOutputFunction = unsafe extern "C" fn(
    userdata: *mut c_void,
    category: i32,
    priority: LogPriority,
    message: *const c_char,
);
pub type TimerCallback = unsafe extern "C" fn(interval: u32, param: *mut c_void) -> u32;
pub type AudioCallback = unsafe extern "C" fn(userdata: *mut c_void, stream: *mut u8, len: i32);

/// A required entry point was not exported by the loaded library.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MissingSymbol(pub &'static str);

impl std::fmt::Display for MissingSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load function {}", self.0)
    }
}

impl std::error::Error for MissingSymbol {}

#[inline(always)]
unsafe fn symbol_name(name: &'static str) -> &'static CStr {
    CStr::from_bytes_with_nul_unchecked(name.as_bytes())
}

macro_rules! sdl_functions {
    (
        required {
            $(fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;)*
        }
        optional {
            $(fn $opt_name:ident($($opt_arg:ident: $opt_ty:ty),* $(,)?) $(-> $opt_ret:ty)?;)*
        }
    ) => {
        /// Every resolved entry point, keyed by its exported name.
        ///
        /// Optional entries were introduced late in the 2.0 series and are
        /// `None` when the loaded library predates them.
        pub struct Functions {
            $(pub $name: unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?,)*
            $(pub $opt_name: Option<unsafe extern "C" fn($($opt_arg: $opt_ty),*) $(-> $opt_ret)?>,)*
        }

        impl Functions {
            pub const REQUIRED: &'static [&'static str] = &[$(stringify!($name)),*];
            pub const OPTIONAL: &'static [&'static str] = &[$(stringify!($opt_name)),*];

            /// Resolve the table through `resolve`, which must return null
            /// for names it cannot find.
            ///
            /// # Safety
            ///
            /// Every non-null address returned by `resolve` must point to a
            /// function with the matching native signature.
            pub unsafe fn load<F>(mut resolve: F) -> Result<Self, MissingSymbol>
            where
                F: FnMut(&CStr) -> *mut c_void,
            {
                Ok(Self {
                    $($name: {
                        let ptr = resolve(symbol_name(concat!(stringify!($name), "\0")));
                        if ptr.is_null() {
                            return Err(MissingSymbol(stringify!($name)));
                        }
                        transmute::<*mut c_void, unsafe extern "C" fn($($ty),*) $(-> $ret)?>(ptr)
                    },)*
                    $($opt_name: {
                        let ptr = resolve(symbol_name(concat!(stringify!($opt_name), "\0")));
                        if ptr.is_null() {
                            None
                        } else {
                            Some(transmute::<
                                *mut c_void,
                                unsafe extern "C" fn($($opt_ty),*) $(-> $opt_ret)?,
                            >(ptr))
                        }
                    },)*
                })
            }
        }
    };
}

sdl_functions! {
    required {
        // init
        fn SDL_Init(flags: u32) -> i32;
        fn SDL_InitSubSystem(flags: u32) -> i32;
        fn SDL_QuitSubSystem(flags: u32);
        fn SDL_WasInit(flags: u32) -> u32;
        fn SDL_Quit();
        fn SDL_SetMainReady();

        // error
        fn SDL_GetError() -> *const c_char;
        fn SDL_ClearError();
        fn SDL_Error(code: i32) -> i32;

        // version, platform
        fn SDL_GetVersion(ver: *mut Version);
        fn SDL_GetRevision() -> *const c_char;
        fn SDL_GetRevisionNumber() -> i32;
        fn SDL_GetPlatform() -> *const c_char;

        fn SDL_free(mem: *mut c_void);

        // hints
        fn SDL_SetHintWithPriority(name: *const c_char, value: *const c_char, priority: HintPriority) -> Bool;
        fn SDL_SetHint(name: *const c_char, value: *const c_char) -> Bool;
        fn SDL_GetHint(name: *const c_char) -> *const c_char;
        fn SDL_GetHintBoolean(name: *const c_char, default_value: Bool) -> Bool;
        fn SDL_AddHintCallback(name: *const c_char, callback: HintCallback, userdata: *mut c_void);
        fn SDL_DelHintCallback(name: *const c_char, callback: HintCallback, userdata: *mut c_void);
        fn SDL_ClearHints();

        // log
        fn SDL_LogSetAllPriority(priority: LogPriority);
        fn SDL_LogSetPriority(category: i32, priority: LogPriority);
        fn SDL_LogGetPriority(category: i32) -> LogPriority;
        fn SDL_LogResetPriorities();
        fn SDL_LogGetOutputFunction(callback: *mut Option<LogOutputFunction>, userdata: *mut *mut c_void);
        fn SDL_LogSetOutputFunction(callback: Option<LogOutputFunction>, userdata: *mut c_void);

        // timer
        fn SDL_GetTicks() -> u32;
        fn SDL_GetPerformanceCounter() -> u64;
        fn SDL_GetPerformanceFrequency() -> u64;
        fn SDL_Delay(ms: u32);
        fn SDL_AddTimer(interval: u32, callback: TimerCallback, param: *mut c_void) -> TimerID;
        fn SDL_RemoveTimer(id: TimerID) -> Bool;

        // cpu, power
        fn SDL_GetCPUCount() -> i32;
        fn SDL_GetCPUCacheLineSize() -> i32;
        fn SDL_HasRDTSC() -> Bool;
        fn SDL_HasAltiVec() -> Bool;
        fn SDL_HasMMX() -> Bool;
        fn SDL_Has3DNow() -> Bool;
        fn SDL_HasSSE() -> Bool;
        fn SDL_HasSSE2() -> Bool;
        fn SDL_HasSSE3() -> Bool;
        fn SDL_HasSSE41() -> Bool;
        fn SDL_HasSSE42() -> Bool;
        fn SDL_HasAVX() -> Bool;
        fn SDL_HasAVX2() -> Bool;
        fn SDL_HasNEON() -> Bool;
        fn SDL_GetSystemRAM() -> i32;
        fn SDL_GetPowerInfo(secs: *mut i32, pct: *mut i32) -> PowerState;

        // clipboard, filesystem
        fn SDL_SetClipboardText(text: *const c_char) -> i32;
        fn SDL_GetClipboardText() -> *mut c_char;
        fn SDL_HasClipboardText() -> Bool;
        fn SDL_GetBasePath() -> *mut c_char;
        fn SDL_GetPrefPath(org: *const c_char, app: *const c_char) -> *mut c_char;

        // loadso
        fn SDL_LoadObject(sofile: *const c_char) -> *mut c_void;
        fn SDL_LoadFunction(handle: *mut c_void, name: *const c_char) -> *mut c_void;
        fn SDL_UnloadObject(handle: *mut c_void);

        // mutex, semaphore, condition, thread
        fn SDL_CreateMutex() -> *mut Mutex;
        fn SDL_LockMutex(mutex: *mut Mutex) -> i32;
        fn SDL_TryLockMutex(mutex: *mut Mutex) -> i32;
        fn SDL_UnlockMutex(mutex: *mut Mutex) -> i32;
        fn SDL_DestroyMutex(mutex: *mut Mutex);
        fn SDL_CreateSemaphore(initial_value: u32) -> *mut Semaphore;
        fn SDL_DestroySemaphore(sem: *mut Semaphore);
        fn SDL_SemWait(sem: *mut Semaphore) -> i32;
        fn SDL_SemTryWait(sem: *mut Semaphore) -> i32;
        fn SDL_SemWaitTimeout(sem: *mut Semaphore, ms: u32) -> i32;
        fn SDL_SemPost(sem: *mut Semaphore) -> i32;
        fn SDL_SemValue(sem: *mut Semaphore) -> u32;
        fn SDL_CreateCond() -> *mut Cond;
        fn SDL_DestroyCond(cond: *mut Cond);
        fn SDL_CondSignal(cond: *mut Cond) -> i32;
        fn SDL_CondBroadcast(cond: *mut Cond) -> i32;
        fn SDL_CondWait(cond: *mut Cond, mutex: *mut Mutex) -> i32;
        fn SDL_CondWaitTimeout(cond: *mut Cond, mutex: *mut Mutex, ms: u32) -> i32;
        fn SDL_ThreadID() -> ThreadID;
        fn SDL_SetThreadPriority(priority: ThreadPriority) -> i32;

        // rwops
        fn SDL_RWFromFile(file: *const c_char, mode: *const c_char) -> *mut RWops;
        fn SDL_RWFromMem(mem: *mut c_void, size: i32) -> *mut RWops;
        fn SDL_RWFromConstMem(mem: *const c_void, size: i32) -> *mut RWops;
        fn SDL_AllocRW() -> *mut RWops;
        fn SDL_FreeRW(area: *mut RWops);
        fn SDL_LoadFile_RW(src: *mut RWops, datasize: *mut usize, freesrc: i32) -> *mut c_void;
        fn SDL_ReadU8(src: *mut RWops) -> u8;
        fn SDL_ReadLE16(src: *mut RWops) -> u16;
        fn SDL_ReadBE16(src: *mut RWops) -> u16;
        fn SDL_ReadLE32(src: *mut RWops) -> u32;
        fn SDL_ReadBE32(src: *mut RWops) -> u32;
        fn SDL_ReadLE64(src: *mut RWops) -> u64;
        fn SDL_ReadBE64(src: *mut RWops) -> u64;
        fn SDL_WriteU8(dst: *mut RWops, value: u8) -> usize;
        fn SDL_WriteLE16(dst: *mut RWops, value: u16) -> usize;
        fn SDL_WriteBE16(dst: *mut RWops, value: u16) -> usize;
        fn SDL_WriteLE32(dst: *mut RWops, value: u32) -> usize;
        fn SDL_WriteBE32(dst: *mut RWops, value: u32) -> usize;
        fn SDL_WriteLE64(dst: *mut RWops, value: u64) -> usize;
        fn SDL_WriteBE64(dst: *mut RWops, value: u64) -> usize;

        // audio
        fn SDL_GetNumAudioDrivers() -> i32;
        fn SDL_GetAudioDriver(index: i32) -> *const c_char;
        fn SDL_AudioInit(driver_name: *const c_char) -> i32;
        fn SDL_AudioQuit();
        fn SDL_GetCurrentAudioDriver() -> *const c_char;
        fn SDL_OpenAudio(desired: *mut AudioSpec, obtained: *mut AudioSpec) -> i32;
        fn SDL_GetNumAudioDevices(iscapture: i32) -> i32;
        fn SDL_GetAudioDeviceName(index: i32, iscapture: i32) -> *const c_char;
        fn SDL_OpenAudioDevice(device: *const c_char, iscapture: i32, desired: *const AudioSpec, obtained: *mut AudioSpec, allowed_changes: i32) -> AudioDeviceID;
        fn SDL_GetAudioStatus() -> AudioStatus;
        fn SDL_GetAudioDeviceStatus(dev: AudioDeviceID) -> AudioStatus;
        fn SDL_PauseAudio(pause_on: i32);
        fn SDL_PauseAudioDevice(dev: AudioDeviceID, pause_on: i32);
        fn SDL_LoadWAV_RW(src: *mut RWops, freesrc: i32, spec: *mut AudioSpec, audio_buf: *mut *mut u8, audio_len: *mut u32) -> *mut AudioSpec;
        fn SDL_FreeWAV(audio_buf: *mut u8);
        fn SDL_MixAudio(dst: *mut u8, src: *const u8, len: u32, volume: i32);
        fn SDL_MixAudioFormat(dst: *mut u8, src: *const u8, format: AudioFormat, len: u32, volume: i32);
        fn SDL_QueueAudio(dev: AudioDeviceID, data: *const c_void, len: u32) -> i32;
        fn SDL_DequeueAudio(dev: AudioDeviceID, data: *mut c_void, len: u32) -> u32;
        fn SDL_GetQueuedAudioSize(dev: AudioDeviceID) -> u32;
        fn SDL_ClearQueuedAudio(dev: AudioDeviceID);
        fn SDL_LockAudio();
        fn SDL_LockAudioDevice(dev: AudioDeviceID);
        fn SDL_UnlockAudio();
        fn SDL_UnlockAudioDevice(dev: AudioDeviceID);
        fn SDL_CloseAudio();
        fn SDL_CloseAudioDevice(dev: AudioDeviceID);
        fn SDL_NewAudioStream(src_format: AudioFormat, src_channels: u8, src_rate: i32, dst_format: AudioFormat, dst_channels: u8, dst_rate: i32) -> *mut AudioStream;
        fn SDL_AudioStreamPut(stream: *mut AudioStream, buf: *const c_void, len: i32) -> i32;
        fn SDL_AudioStreamGet(stream: *mut AudioStream, buf: *mut c_void, len: i32) -> i32;
        fn SDL_AudioStreamAvailable(stream: *mut AudioStream) -> i32;
        fn SDL_AudioStreamFlush(stream: *mut AudioStream) -> i32;
        fn SDL_AudioStreamClear(stream: *mut AudioStream);
        fn SDL_FreeAudioStream(stream: *mut AudioStream);

        // video drivers and displays
        fn SDL_GetNumVideoDrivers() -> i32;
        fn SDL_GetVideoDriver(index: i32) -> *const c_char;
        fn SDL_VideoInit(driver_name: *const c_char) -> i32;
        fn SDL_VideoQuit();
        fn SDL_GetCurrentVideoDriver() -> *const c_char;
        fn SDL_GetNumVideoDisplays() -> i32;
        fn SDL_GetDisplayName(display_index: i32) -> *const c_char;
        fn SDL_GetDisplayBounds(display_index: i32, rect: *mut Rect) -> i32;
        fn SDL_GetDisplayUsableBounds(display_index: i32, rect: *mut Rect) -> i32;
        fn SDL_GetDisplayDPI(display_index: i32, ddpi: *mut f32, hdpi: *mut f32, vdpi: *mut f32) -> i32;
        fn SDL_GetNumDisplayModes(display_index: i32) -> i32;
        fn SDL_GetDisplayMode(display_index: i32, mode_index: i32, mode: *mut DisplayMode) -> i32;
        fn SDL_GetDesktopDisplayMode(display_index: i32, mode: *mut DisplayMode) -> i32;
        fn SDL_GetCurrentDisplayMode(display_index: i32, mode: *mut DisplayMode) -> i32;
        fn SDL_GetClosestDisplayMode(display_index: i32, mode: *const DisplayMode, closest: *mut DisplayMode) -> *mut DisplayMode;

        // window
        fn SDL_GetWindowDisplayIndex(window: *mut Window) -> i32;
        fn SDL_SetWindowDisplayMode(window: *mut Window, mode: *const DisplayMode) -> i32;
        fn SDL_GetWindowDisplayMode(window: *mut Window, mode: *mut DisplayMode) -> i32;
        fn SDL_GetWindowPixelFormat(window: *mut Window) -> u32;
        fn SDL_CreateWindow(title: *const c_char, x: i32, y: i32, w: i32, h: i32, flags: u32) -> *mut Window;
        fn SDL_CreateWindowFrom(data: *const c_void) -> *mut Window;
        fn SDL_GetWindowID(window: *mut Window) -> u32;
        fn SDL_GetWindowFromID(id: u32) -> *mut Window;
        fn SDL_GetWindowFlags(window: *mut Window) -> u32;
        fn SDL_SetWindowTitle(window: *mut Window, title: *const c_char);
        fn SDL_GetWindowTitle(window: *mut Window) -> *const c_char;
        fn SDL_SetWindowIcon(window: *mut Window, icon: *mut Surface);
        fn SDL_SetWindowData(window: *mut Window, name: *const c_char, userdata: *mut c_void) -> *mut c_void;
        fn SDL_GetWindowData(window: *mut Window, name: *const c_char) -> *mut c_void;
        fn SDL_SetWindowPosition(window: *mut Window, x: i32, y: i32);
        fn SDL_GetWindowPosition(window: *mut Window, x: *mut i32, y: *mut i32);
        fn SDL_SetWindowSize(window: *mut Window, w: i32, h: i32);
        fn SDL_GetWindowSize(window: *mut Window, w: *mut i32, h: *mut i32);
        fn SDL_GetWindowBordersSize(window: *mut Window, top: *mut i32, left: *mut i32, bottom: *mut i32, right: *mut i32) -> i32;
        fn SDL_SetWindowMinimumSize(window: *mut Window, min_w: i32, min_h: i32);
        fn SDL_GetWindowMinimumSize(window: *mut Window, w: *mut i32, h: *mut i32);
        fn SDL_SetWindowMaximumSize(window: *mut Window, max_w: i32, max_h: i32);
        fn SDL_GetWindowMaximumSize(window: *mut Window, w: *mut i32, h: *mut i32);
        fn SDL_SetWindowBordered(window: *mut Window, bordered: Bool);
        fn SDL_SetWindowResizable(window: *mut Window, resizable: Bool);
        fn SDL_ShowWindow(window: *mut Window);
        fn SDL_HideWindow(window: *mut Window);
        fn SDL_RaiseWindow(window: *mut Window);
        fn SDL_MaximizeWindow(window: *mut Window);
        fn SDL_MinimizeWindow(window: *mut Window);
        fn SDL_RestoreWindow(window: *mut Window);
        fn SDL_SetWindowFullscreen(window: *mut Window, flags: u32) -> i32;
        fn SDL_GetWindowSurface(window: *mut Window) -> *mut Surface;
        fn SDL_UpdateWindowSurface(window: *mut Window) -> i32;
        fn SDL_UpdateWindowSurfaceRects(window: *mut Window, rects: *const Rect, numrects: i32) -> i32;
        fn SDL_SetWindowGrab(window: *mut Window, grabbed: Bool);
        fn SDL_GetWindowGrab(window: *mut Window) -> Bool;
        fn SDL_GetGrabbedWindow() -> *mut Window;
        fn SDL_SetWindowBrightness(window: *mut Window, brightness: f32) -> i32;
        fn SDL_GetWindowBrightness(window: *mut Window) -> f32;
        fn SDL_SetWindowOpacity(window: *mut Window, opacity: f32) -> i32;
        fn SDL_GetWindowOpacity(window: *mut Window, out_opacity: *mut f32) -> i32;
        fn SDL_SetWindowModalFor(modal_window: *mut Window, parent_window: *mut Window) -> i32;
        fn SDL_SetWindowInputFocus(window: *mut Window) -> i32;
        fn SDL_SetWindowGammaRamp(window: *mut Window, red: *const u16, green: *const u16, blue: *const u16) -> i32;
        fn SDL_GetWindowGammaRamp(window: *mut Window, red: *mut u16, green: *mut u16, blue: *mut u16) -> i32;
        fn SDL_DestroyWindow(window: *mut Window);
        fn SDL_IsScreenSaverEnabled() -> Bool;
        fn SDL_EnableScreenSaver();
        fn SDL_DisableScreenSaver();
        fn SDL_GetWindowWMInfo(window: *mut Window, info: *mut SysWMinfo) -> Bool;

        // opengl
        fn SDL_GL_LoadLibrary(path: *const c_char) -> i32;
        fn SDL_GL_GetProcAddress(proc_name: *const c_char) -> *mut c_void;
        fn SDL_GL_UnloadLibrary();
        fn SDL_GL_ExtensionSupported(extension: *const c_char) -> Bool;
        fn SDL_GL_ResetAttributes();
        fn SDL_GL_SetAttribute(attr: GLattr, value: i32) -> i32;
        fn SDL_GL_GetAttribute(attr: GLattr, value: *mut i32) -> i32;
        fn SDL_GL_CreateContext(window: *mut Window) -> GLContext;
        fn SDL_GL_MakeCurrent(window: *mut Window, context: GLContext) -> i32;
        fn SDL_GL_GetCurrentWindow() -> *mut Window;
        fn SDL_GL_GetCurrentContext() -> GLContext;
        fn SDL_GL_GetDrawableSize(window: *mut Window, w: *mut i32, h: *mut i32);
        fn SDL_GL_SetSwapInterval(interval: i32) -> i32;
        fn SDL_GL_GetSwapInterval() -> i32;
        fn SDL_GL_SwapWindow(window: *mut Window);
        fn SDL_GL_DeleteContext(context: GLContext);

        // vulkan
        fn SDL_Vulkan_LoadLibrary(path: *const c_char) -> i32;
        fn SDL_Vulkan_GetVkGetInstanceProcAddr() -> *mut c_void;
        fn SDL_Vulkan_UnloadLibrary();
        fn SDL_Vulkan_GetInstanceExtensions(window: *mut Window, count: *mut u32, names: *mut *const c_char) -> Bool;
        fn SDL_Vulkan_CreateSurface(window: *mut Window, instance: VkInstance, surface: *mut VkSurfaceKHR) -> Bool;
        fn SDL_Vulkan_GetDrawableSize(window: *mut Window, w: *mut i32, h: *mut i32);

        // message box
        fn SDL_ShowMessageBox(messageboxdata: *const MessageBoxData, buttonid: *mut i32) -> i32;
        fn SDL_ShowSimpleMessageBox(flags: u32, title: *const c_char, message: *const c_char, window: *mut Window) -> i32;

        // surface
        fn SDL_CreateRGBSurface(flags: u32, width: i32, height: i32, depth: i32, r_mask: u32, g_mask: u32, b_mask: u32, a_mask: u32) -> *mut Surface;
        fn SDL_CreateRGBSurfaceWithFormat(flags: u32, width: i32, height: i32, depth: i32, format: u32) -> *mut Surface;
        fn SDL_CreateRGBSurfaceFrom(pixels: *mut c_void, width: i32, height: i32, depth: i32, pitch: i32, r_mask: u32, g_mask: u32, b_mask: u32, a_mask: u32) -> *mut Surface;
        fn SDL_CreateRGBSurfaceWithFormatFrom(pixels: *mut c_void, width: i32, height: i32, depth: i32, pitch: i32, format: u32) -> *mut Surface;
        fn SDL_FreeSurface(surface: *mut Surface);
        fn SDL_SetSurfacePalette(surface: *mut Surface, palette: *mut Palette) -> i32;
        fn SDL_LockSurface(surface: *mut Surface) -> i32;
        fn SDL_UnlockSurface(surface: *mut Surface);
        fn SDL_LoadBMP_RW(src: *mut RWops, freesrc: i32) -> *mut Surface;
        fn SDL_SaveBMP_RW(surface: *mut Surface, dst: *mut RWops, freedst: i32) -> i32;
        fn SDL_SetSurfaceRLE(surface: *mut Surface, flag: i32) -> i32;
        fn SDL_SetColorKey(surface: *mut Surface, flag: i32, key: u32) -> i32;
        fn SDL_GetColorKey(surface: *mut Surface, key: *mut u32) -> i32;
        fn SDL_SetSurfaceColorMod(surface: *mut Surface, r: u8, g: u8, b: u8) -> i32;
        fn SDL_GetSurfaceColorMod(surface: *mut Surface, r: *mut u8, g: *mut u8, b: *mut u8) -> i32;
        fn SDL_SetSurfaceAlphaMod(surface: *mut Surface, alpha: u8) -> i32;
        fn SDL_GetSurfaceAlphaMod(surface: *mut Surface, alpha: *mut u8) -> i32;
        fn SDL_SetSurfaceBlendMode(surface: *mut Surface, blend_mode: BlendMode) -> i32;
        fn SDL_GetSurfaceBlendMode(surface: *mut Surface, blend_mode: *mut BlendMode) -> i32;
        fn SDL_SetClipRect(surface: *mut Surface, rect: *const Rect) -> Bool;
        fn SDL_GetClipRect(surface: *mut Surface, rect: *mut Rect);
        fn SDL_DuplicateSurface(surface: *mut Surface) -> *mut Surface;
        fn SDL_ConvertSurface(src: *mut Surface, fmt: *const PixelFormat, flags: u32) -> *mut Surface;
        fn SDL_ConvertSurfaceFormat(src: *mut Surface, pixel_format: u32, flags: u32) -> *mut Surface;
        fn SDL_ConvertPixels(width: i32, height: i32, src_format: u32, src: *const c_void, src_pitch: i32, dst_format: u32, dst: *mut c_void, dst_pitch: i32) -> i32;
        fn SDL_FillRect(dst: *mut Surface, rect: *const Rect, color: u32) -> i32;
        fn SDL_FillRects(dst: *mut Surface, rects: *const Rect, count: i32, color: u32) -> i32;
        fn SDL_UpperBlit(src: *mut Surface, srcrect: *const Rect, dst: *mut Surface, dstrect: *mut Rect) -> i32;
        fn SDL_LowerBlit(src: *mut Surface, srcrect: *mut Rect, dst: *mut Surface, dstrect: *mut Rect) -> i32;
        fn SDL_SoftStretch(src: *mut Surface, srcrect: *const Rect, dst: *mut Surface, dstrect: *const Rect) -> i32;
        fn SDL_UpperBlitScaled(src: *mut Surface, srcrect: *const Rect, dst: *mut Surface, dstrect: *mut Rect) -> i32;
        fn SDL_LowerBlitScaled(src: *mut Surface, srcrect: *mut Rect, dst: *mut Surface, dstrect: *mut Rect) -> i32;

        // pixels
        fn SDL_GetPixelFormatName(format: u32) -> *const c_char;
        fn SDL_PixelFormatEnumToMasks(format: u32, bpp: *mut i32, r_mask: *mut u32, g_mask: *mut u32, b_mask: *mut u32, a_mask: *mut u32) -> Bool;
        fn SDL_MasksToPixelFormatEnum(bpp: i32, r_mask: u32, g_mask: u32, b_mask: u32, a_mask: u32) -> u32;
        fn SDL_AllocFormat(pixel_format: u32) -> *mut PixelFormat;
        fn SDL_FreeFormat(format: *mut PixelFormat);
        fn SDL_AllocPalette(ncolors: i32) -> *mut Palette;
        fn SDL_SetPixelFormatPalette(format: *mut PixelFormat, palette: *mut Palette) -> i32;
        fn SDL_SetPaletteColors(palette: *mut Palette, colors: *const Color, firstcolor: i32, ncolors: i32) -> i32;
        fn SDL_FreePalette(palette: *mut Palette);
        fn SDL_MapRGB(format: *const PixelFormat, r: u8, g: u8, b: u8) -> u32;
        fn SDL_MapRGBA(format: *const PixelFormat, r: u8, g: u8, b: u8, a: u8) -> u32;
        fn SDL_GetRGB(pixel: u32, format: *const PixelFormat, r: *mut u8, g: *mut u8, b: *mut u8);
        fn SDL_GetRGBA(pixel: u32, format: *const PixelFormat, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8);
        fn SDL_CalculateGammaRamp(gamma: f32, ramp: *mut u16);

        // rect
        fn SDL_HasIntersection(a: *const Rect, b: *const Rect) -> Bool;
        fn SDL_IntersectRect(a: *const Rect, b: *const Rect, result: *mut Rect) -> Bool;
        fn SDL_UnionRect(a: *const Rect, b: *const Rect, result: *mut Rect);
        fn SDL_EnclosePoints(points: *const Point, count: i32, clip: *const Rect, result: *mut Rect) -> Bool;
        fn SDL_IntersectRectAndLine(rect: *const Rect, x1: *mut i32, y1: *mut i32, x2: *mut i32, y2: *mut i32) -> Bool;

        // render
        fn SDL_GetNumRenderDrivers() -> i32;
        fn SDL_GetRenderDriverInfo(index: i32, info: *mut RendererInfo) -> i32;
        fn SDL_CreateWindowAndRenderer(width: i32, height: i32, window_flags: u32, window: *mut *mut Window, renderer: *mut *mut Renderer) -> i32;
        fn SDL_CreateRenderer(window: *mut Window, index: i32, flags: u32) -> *mut Renderer;
        fn SDL_CreateSoftwareRenderer(surface: *mut Surface) -> *mut Renderer;
        fn SDL_GetRenderer(window: *mut Window) -> *mut Renderer;
        fn SDL_GetRendererInfo(renderer: *mut Renderer, info: *mut RendererInfo) -> i32;
        fn SDL_GetRendererOutputSize(renderer: *mut Renderer, w: *mut i32, h: *mut i32) -> i32;
        fn SDL_CreateTexture(renderer: *mut Renderer, format: u32, access: i32, w: i32, h: i32) -> *mut Texture;
        fn SDL_CreateTextureFromSurface(renderer: *mut Renderer, surface: *mut Surface) -> *mut Texture;
        fn SDL_QueryTexture(texture: *mut Texture, format: *mut u32, access: *mut i32, w: *mut i32, h: *mut i32) -> i32;
        fn SDL_SetTextureColorMod(texture: *mut Texture, r: u8, g: u8, b: u8) -> i32;
        fn SDL_GetTextureColorMod(texture: *mut Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> i32;
        fn SDL_SetTextureAlphaMod(texture: *mut Texture, alpha: u8) -> i32;
        fn SDL_GetTextureAlphaMod(texture: *mut Texture, alpha: *mut u8) -> i32;
        fn SDL_SetTextureBlendMode(texture: *mut Texture, blend_mode: BlendMode) -> i32;
        fn SDL_GetTextureBlendMode(texture: *mut Texture, blend_mode: *mut BlendMode) -> i32;
        fn SDL_UpdateTexture(texture: *mut Texture, rect: *const Rect, pixels: *const c_void, pitch: i32) -> i32;
        fn SDL_UpdateYUVTexture(texture: *mut Texture, rect: *const Rect, y_plane: *const u8, y_pitch: i32, u_plane: *const u8, u_pitch: i32, v_plane: *const u8, v_pitch: i32) -> i32;
        fn SDL_LockTexture(texture: *mut Texture, rect: *const Rect, pixels: *mut *mut c_void, pitch: *mut i32) -> i32;
        fn SDL_UnlockTexture(texture: *mut Texture);
        fn SDL_RenderTargetSupported(renderer: *mut Renderer) -> Bool;
        fn SDL_SetRenderTarget(renderer: *mut Renderer, texture: *mut Texture) -> i32;
        fn SDL_GetRenderTarget(renderer: *mut Renderer) -> *mut Texture;
        fn SDL_RenderSetLogicalSize(renderer: *mut Renderer, w: i32, h: i32) -> i32;
        fn SDL_RenderGetLogicalSize(renderer: *mut Renderer, w: *mut i32, h: *mut i32);
        fn SDL_RenderSetIntegerScale(renderer: *mut Renderer, enable: Bool) -> i32;
        fn SDL_RenderGetIntegerScale(renderer: *mut Renderer) -> Bool;
        fn SDL_RenderSetViewport(renderer: *mut Renderer, rect: *const Rect) -> i32;
        fn SDL_RenderGetViewport(renderer: *mut Renderer, rect: *mut Rect);
        fn SDL_RenderSetClipRect(renderer: *mut Renderer, rect: *const Rect) -> i32;
        fn SDL_RenderGetClipRect(renderer: *mut Renderer, rect: *mut Rect);
        fn SDL_RenderIsClipEnabled(renderer: *mut Renderer) -> Bool;
        fn SDL_RenderSetScale(renderer: *mut Renderer, scale_x: f32, scale_y: f32) -> i32;
        fn SDL_RenderGetScale(renderer: *mut Renderer, scale_x: *mut f32, scale_y: *mut f32);
        fn SDL_SetRenderDrawColor(renderer: *mut Renderer, r: u8, g: u8, b: u8, a: u8) -> i32;
        fn SDL_GetRenderDrawColor(renderer: *mut Renderer, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> i32;
        fn SDL_SetRenderDrawBlendMode(renderer: *mut Renderer, blend_mode: BlendMode) -> i32;
        fn SDL_GetRenderDrawBlendMode(renderer: *mut Renderer, blend_mode: *mut BlendMode) -> i32;
        fn SDL_RenderClear(renderer: *mut Renderer) -> i32;
        fn SDL_RenderDrawPoint(renderer: *mut Renderer, x: i32, y: i32) -> i32;
        fn SDL_RenderDrawPoints(renderer: *mut Renderer, points: *const Point, count: i32) -> i32;
        fn SDL_RenderDrawLine(renderer: *mut Renderer, x1: i32, y1: i32, x2: i32, y2: i32) -> i32;
        fn SDL_RenderDrawLines(renderer: *mut Renderer, points: *const Point, count: i32) -> i32;
        fn SDL_RenderDrawRect(renderer: *mut Renderer, rect: *const Rect) -> i32;
        fn SDL_RenderDrawRects(renderer: *mut Renderer, rects: *const Rect, count: i32) -> i32;
        fn SDL_RenderFillRect(renderer: *mut Renderer, rect: *const Rect) -> i32;
        fn SDL_RenderFillRects(renderer: *mut Renderer, rects: *const Rect, count: i32) -> i32;
        fn SDL_RenderCopy(renderer: *mut Renderer, texture: *mut Texture, srcrect: *const Rect, dstrect: *const Rect) -> i32;
        fn SDL_RenderCopyEx(renderer: *mut Renderer, texture: *mut Texture, srcrect: *const Rect, dstrect: *const Rect, angle: f64, center: *const Point, flip: RendererFlip) -> i32;
        fn SDL_RenderReadPixels(renderer: *mut Renderer, rect: *const Rect, format: u32, pixels: *mut c_void, pitch: i32) -> i32;
        fn SDL_RenderPresent(renderer: *mut Renderer);
        fn SDL_DestroyTexture(texture: *mut Texture);
        fn SDL_DestroyRenderer(renderer: *mut Renderer);
        fn SDL_GL_BindTexture(texture: *mut Texture, texw: *mut f32, texh: *mut f32) -> i32;
        fn SDL_GL_UnbindTexture(texture: *mut Texture) -> i32;
        fn SDL_ComposeCustomBlendMode(src_color_factor: i32, dst_color_factor: i32, color_operation: i32, src_alpha_factor: i32, dst_alpha_factor: i32, alpha_operation: i32) -> BlendMode;

        // events
        fn SDL_PumpEvents();
        fn SDL_PeepEvents(events: *mut Event, numevents: i32, action: EventAction, min_type: u32, max_type: u32) -> i32;
        fn SDL_HasEvent(r#type: u32) -> Bool;
        fn SDL_HasEvents(min_type: u32, max_type: u32) -> Bool;
        fn SDL_FlushEvent(r#type: u32);
        fn SDL_FlushEvents(min_type: u32, max_type: u32);
        fn SDL_PollEvent(event: *mut Event) -> i32;
        fn SDL_WaitEvent(event: *mut Event) -> i32;
        fn SDL_WaitEventTimeout(event: *mut Event, timeout: i32) -> i32;
        fn SDL_PushEvent(event: *mut Event) -> i32;
        fn SDL_SetEventFilter(filter: Option<EventFilter>, userdata: *mut c_void);
        fn SDL_GetEventFilter(filter: *mut Option<EventFilter>, userdata: *mut *mut c_void) -> Bool;
        fn SDL_AddEventWatch(filter: EventFilter, userdata: *mut c_void);
        fn SDL_DelEventWatch(filter: EventFilter, userdata: *mut c_void);
        fn SDL_FilterEvents(filter: EventFilter, userdata: *mut c_void);
        fn SDL_EventState(r#type: u32, state: i32) -> u8;
        fn SDL_RegisterEvents(numevents: i32) -> u32;

        // keyboard
        fn SDL_GetKeyboardFocus() -> *mut Window;
        fn SDL_GetKeyboardState(numkeys: *mut i32) -> *const u8;
        fn SDL_GetModState() -> i32;
        fn SDL_SetModState(modstate: i32);
        fn SDL_GetKeyFromScancode(scancode: Scancode) -> Keycode;
        fn SDL_GetScancodeFromKey(key: Keycode) -> Scancode;
        fn SDL_GetScancodeName(scancode: Scancode) -> *const c_char;
        fn SDL_GetScancodeFromName(name: *const c_char) -> Scancode;
        fn SDL_GetKeyName(key: Keycode) -> *const c_char;
        fn SDL_GetKeyFromName(name: *const c_char) -> Keycode;
        fn SDL_StartTextInput();
        fn SDL_IsTextInputActive() -> Bool;
        fn SDL_StopTextInput();
        fn SDL_SetTextInputRect(rect: *mut Rect);
        fn SDL_HasScreenKeyboardSupport() -> Bool;
        fn SDL_IsScreenKeyboardShown(window: *mut Window) -> Bool;

        // mouse
        fn SDL_GetMouseFocus() -> *mut Window;
        fn SDL_GetMouseState(x: *mut i32, y: *mut i32) -> u32;
        fn SDL_GetGlobalMouseState(x: *mut i32, y: *mut i32) -> u32;
        fn SDL_GetRelativeMouseState(x: *mut i32, y: *mut i32) -> u32;
        fn SDL_WarpMouseInWindow(window: *mut Window, x: i32, y: i32);
        fn SDL_WarpMouseGlobal(x: i32, y: i32) -> i32;
        fn SDL_SetRelativeMouseMode(enabled: Bool) -> i32;
        fn SDL_GetRelativeMouseMode() -> Bool;
        fn SDL_CaptureMouse(enabled: Bool) -> i32;
        fn SDL_CreateCursor(data: *const u8, mask: *const u8, w: i32, h: i32, hot_x: i32, hot_y: i32) -> *mut Cursor;
        fn SDL_CreateColorCursor(surface: *mut Surface, hot_x: i32, hot_y: i32) -> *mut Cursor;
        fn SDL_CreateSystemCursor(id: SystemCursor) -> *mut Cursor;
        fn SDL_SetCursor(cursor: *mut Cursor);
        fn SDL_GetCursor() -> *mut Cursor;
        fn SDL_GetDefaultCursor() -> *mut Cursor;
        fn SDL_FreeCursor(cursor: *mut Cursor);
        fn SDL_ShowCursor(toggle: i32) -> i32;

        // joystick
        fn SDL_LockJoysticks();
        fn SDL_UnlockJoysticks();
        fn SDL_NumJoysticks() -> i32;
        fn SDL_JoystickNameForIndex(device_index: i32) -> *const c_char;
        fn SDL_JoystickGetDeviceGUID(device_index: i32) -> JoystickGUID;
        fn SDL_JoystickGetDeviceVendor(device_index: i32) -> u16;
        fn SDL_JoystickGetDeviceProduct(device_index: i32) -> u16;
        fn SDL_JoystickGetDeviceProductVersion(device_index: i32) -> u16;
        fn SDL_JoystickGetDeviceType(device_index: i32) -> JoystickType;
        fn SDL_JoystickGetDeviceInstanceID(device_index: i32) -> JoystickID;
        fn SDL_JoystickOpen(device_index: i32) -> *mut Joystick;
        fn SDL_JoystickFromInstanceID(id: JoystickID) -> *mut Joystick;
        fn SDL_JoystickName(joystick: *mut Joystick) -> *const c_char;
        fn SDL_JoystickGetGUID(joystick: *mut Joystick) -> JoystickGUID;
        fn SDL_JoystickGetVendor(joystick: *mut Joystick) -> u16;
        fn SDL_JoystickGetProduct(joystick: *mut Joystick) -> u16;
        fn SDL_JoystickGetProductVersion(joystick: *mut Joystick) -> u16;
        fn SDL_JoystickGetType(joystick: *mut Joystick) -> JoystickType;
        fn SDL_JoystickGetGUIDString(guid: JoystickGUID, psz_guid: *mut c_char, cb_guid: i32);
        fn SDL_JoystickGetGUIDFromString(pch_guid: *const c_char) -> JoystickGUID;
        fn SDL_JoystickGetAttached(joystick: *mut Joystick) -> Bool;
        fn SDL_JoystickInstanceID(joystick: *mut Joystick) -> JoystickID;
        fn SDL_JoystickNumAxes(joystick: *mut Joystick) -> i32;
        fn SDL_JoystickNumBalls(joystick: *mut Joystick) -> i32;
        fn SDL_JoystickNumHats(joystick: *mut Joystick) -> i32;
        fn SDL_JoystickNumButtons(joystick: *mut Joystick) -> i32;
        fn SDL_JoystickUpdate();
        fn SDL_JoystickEventState(state: i32) -> i32;
        fn SDL_JoystickGetAxis(joystick: *mut Joystick, axis: i32) -> i16;
        fn SDL_JoystickGetAxisInitialState(joystick: *mut Joystick, axis: i32, state: *mut i16) -> Bool;
        fn SDL_JoystickGetHat(joystick: *mut Joystick, hat: i32) -> u8;
        fn SDL_JoystickGetBall(joystick: *mut Joystick, ball: i32, dx: *mut i32, dy: *mut i32) -> i32;
        fn SDL_JoystickGetButton(joystick: *mut Joystick, button: i32) -> u8;
        fn SDL_JoystickClose(joystick: *mut Joystick);
        fn SDL_JoystickCurrentPowerLevel(joystick: *mut Joystick) -> JoystickPowerLevel;

        // game controller
        fn SDL_GameControllerAddMappingsFromRW(rw: *mut RWops, freerw: i32) -> i32;
        fn SDL_GameControllerAddMapping(mapping_string: *const c_char) -> i32;
        fn SDL_GameControllerNumMappings() -> i32;
        fn SDL_GameControllerMappingForIndex(mapping_index: i32) -> *mut c_char;
        fn SDL_GameControllerMappingForGUID(guid: JoystickGUID) -> *mut c_char;
        fn SDL_GameControllerMapping(gamecontroller: *mut GameController) -> *mut c_char;
        fn SDL_IsGameController(joystick_index: i32) -> Bool;
        fn SDL_GameControllerNameForIndex(joystick_index: i32) -> *const c_char;
        fn SDL_GameControllerOpen(joystick_index: i32) -> *mut GameController;
        fn SDL_GameControllerFromInstanceID(joyid: JoystickID) -> *mut GameController;
        fn SDL_GameControllerName(gamecontroller: *mut GameController) -> *const c_char;
        fn SDL_GameControllerGetVendor(gamecontroller: *mut GameController) -> u16;
        fn SDL_GameControllerGetProduct(gamecontroller: *mut GameController) -> u16;
        fn SDL_GameControllerGetProductVersion(gamecontroller: *mut GameController) -> u16;
        fn SDL_GameControllerGetAttached(gamecontroller: *mut GameController) -> Bool;
        fn SDL_GameControllerGetJoystick(gamecontroller: *mut GameController) -> *mut Joystick;
        fn SDL_GameControllerEventState(state: i32) -> i32;
        fn SDL_GameControllerUpdate();
        fn SDL_GameControllerGetAxisFromString(pch_string: *const c_char) -> GameControllerAxis;
        fn SDL_GameControllerGetStringForAxis(axis: GameControllerAxis) -> *const c_char;
        fn SDL_GameControllerGetBindForAxis(gamecontroller: *mut GameController, axis: GameControllerAxis) -> GameControllerButtonBind;
        fn SDL_GameControllerGetAxis(gamecontroller: *mut GameController, axis: GameControllerAxis) -> i16;
        fn SDL_GameControllerGetButtonFromString(pch_string: *const c_char) -> GameControllerButton;
        fn SDL_GameControllerGetStringForButton(button: GameControllerButton) -> *const c_char;
        fn SDL_GameControllerGetBindForButton(gamecontroller: *mut GameController, button: GameControllerButton) -> GameControllerButtonBind;
        fn SDL_GameControllerGetButton(gamecontroller: *mut GameController, button: GameControllerButton) -> u8;
        fn SDL_GameControllerClose(gamecontroller: *mut GameController);

        // haptic
        fn SDL_NumHaptics() -> i32;
        fn SDL_HapticName(device_index: i32) -> *const c_char;
        fn SDL_HapticOpen(device_index: i32) -> *mut Haptic;
        fn SDL_HapticOpened(device_index: i32) -> i32;
        fn SDL_HapticIndex(haptic: *mut Haptic) -> i32;
        fn SDL_MouseIsHaptic() -> i32;
        fn SDL_HapticOpenFromMouse() -> *mut Haptic;
        fn SDL_JoystickIsHaptic(joystick: *mut Joystick) -> i32;
        fn SDL_HapticOpenFromJoystick(joystick: *mut Joystick) -> *mut Haptic;
        fn SDL_HapticClose(haptic: *mut Haptic);
        fn SDL_HapticNumEffects(haptic: *mut Haptic) -> i32;
        fn SDL_HapticNumEffectsPlaying(haptic: *mut Haptic) -> i32;
        fn SDL_HapticQuery(haptic: *mut Haptic) -> u32;
        fn SDL_HapticNumAxes(haptic: *mut Haptic) -> i32;
        fn SDL_HapticEffectSupported(haptic: *mut Haptic, effect: *mut HapticEffect) -> i32;
        fn SDL_HapticNewEffect(haptic: *mut Haptic, effect: *mut HapticEffect) -> i32;
        fn SDL_HapticUpdateEffect(haptic: *mut Haptic, effect: i32, data: *mut HapticEffect) -> i32;
        fn SDL_HapticRunEffect(haptic: *mut Haptic, effect: i32, iterations: u32) -> i32;
        fn SDL_HapticStopEffect(haptic: *mut Haptic, effect: i32) -> i32;
        fn SDL_HapticDestroyEffect(haptic: *mut Haptic, effect: i32);
        fn SDL_HapticGetEffectStatus(haptic: *mut Haptic, effect: i32) -> i32;
        fn SDL_HapticSetGain(haptic: *mut Haptic, gain: i32) -> i32;
        fn SDL_HapticSetAutocenter(haptic: *mut Haptic, autocenter: i32) -> i32;
        fn SDL_HapticPause(haptic: *mut Haptic) -> i32;
        fn SDL_HapticUnpause(haptic: *mut Haptic) -> i32;
        fn SDL_HapticStopAll(haptic: *mut Haptic) -> i32;
        fn SDL_HapticRumbleSupported(haptic: *mut Haptic) -> i32;
        fn SDL_HapticRumbleInit(haptic: *mut Haptic) -> i32;
        fn SDL_HapticRumblePlay(haptic: *mut Haptic, strength: f32, length: u32) -> i32;
        fn SDL_HapticRumbleStop(haptic: *mut Haptic) -> i32;

        // touch, gesture
        fn SDL_GetNumTouchDevices() -> i32;
        fn SDL_GetTouchDevice(index: i32) -> TouchID;
        fn SDL_GetNumTouchFingers(touch_id: TouchID) -> i32;
        fn SDL_GetTouchFinger(touch_id: TouchID, index: i32) -> *mut Finger;
        fn SDL_RecordGesture(touch_id: TouchID) -> i32;
        fn SDL_SaveAllDollarTemplates(dst: *mut RWops) -> i32;
        fn SDL_SaveDollarTemplate(gesture_id: GestureID, dst: *mut RWops) -> i32;
        fn SDL_LoadDollarTemplates(touch_id: TouchID, src: *mut RWops) -> i32;
    }
    optional {
        fn SDL_HasAVX512F() -> Bool;
        fn SDL_IsTablet() -> Bool;
        fn SDL_GetDisplayOrientation(display_index: i32) -> DisplayOrientation;
        fn SDL_HasColorKey(surface: *mut Surface) -> Bool;
        fn SDL_JoystickGetDevicePlayerIndex(device_index: i32) -> i32;
        fn SDL_JoystickGetPlayerIndex(joystick: *mut Joystick) -> i32;
        fn SDL_JoystickRumble(joystick: *mut Joystick, low_frequency_rumble: u16, high_frequency_rumble: u16, duration_ms: u32) -> i32;
        fn SDL_GameControllerMappingForDeviceIndex(joystick_index: i32) -> *mut c_char;
        fn SDL_GameControllerGetPlayerIndex(gamecontroller: *mut GameController) -> i32;
        fn SDL_GameControllerRumble(gamecontroller: *mut GameController, low_frequency_rumble: u16, high_frequency_rumble: u16, duration_ms: u32) -> i32;
        fn SDL_NumSensors() -> i32;
        fn SDL_SensorGetDeviceName(device_index: i32) -> *const c_char;
        fn SDL_SensorGetDeviceType(device_index: i32) -> SensorType;
        fn SDL_SensorGetDeviceNonPortableType(device_index: i32) -> i32;
        fn SDL_SensorGetDeviceInstanceID(device_index: i32) -> SensorID;
        fn SDL_SensorOpen(device_index: i32) -> *mut Sensor;
        fn SDL_SensorFromInstanceID(instance_id: SensorID) -> *mut Sensor;
        fn SDL_SensorGetName(sensor: *mut Sensor) -> *const c_char;
        fn SDL_SensorGetType(sensor: *mut Sensor) -> SensorType;
        fn SDL_SensorGetNonPortableType(sensor: *mut Sensor) -> i32;
        fn SDL_SensorGetInstanceID(sensor: *mut Sensor) -> SensorID;
        fn SDL_SensorGetData(sensor: *mut Sensor, data: *mut f32, num_values: i32) -> i32;
        fn SDL_SensorClose(sensor: *mut Sensor);
        fn SDL_SensorUpdate();
    }
}

pub type SetErrorFn = unsafe extern "C" fn(fmt: *const c_char, ...) -> i32;
pub type LogMessageFn =
    unsafe extern "C" fn(category: i32, priority: LogPriority, fmt: *const c_char, ...);

/// C-variadic entry points, which the table macro cannot express.
pub struct VarargFunctions {
    pub SDL_SetError: Option<SetErrorFn>,
    pub SDL_LogMessage: Option<LogMessageFn>,
}

impl VarargFunctions {
    /// # Safety
    ///
    /// Same contract as [`Functions::load`].
    pub unsafe fn load<F>(mut resolve: F) -> Self
    where
        F: FnMut(&CStr) -> *mut c_void,
    {
        let set_error = resolve(c"SDL_SetError");
        let log_message = resolve(c"SDL_LogMessage");
        Self {
            SDL_SetError: (!set_error.is_null())
                .then(|| transmute::<*mut c_void, SetErrorFn>(set_error)),
            SDL_LogMessage: (!log_message.is_null())
                .then(|| transmute::<*mut c_void, LogMessageFn>(log_message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names = Functions::REQUIRED
            .iter()
            .chain(Functions::OPTIONAL)
            .collect::<Vec<_>>();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
        assert!(count > 300);
    }

    #[test]
    fn missing_required_symbol_is_reported() {
        unsafe extern "C" fn stub() {}
        let result = unsafe {
            Functions::load(|name| {
                if name == c"SDL_PollEvent" {
                    std::ptr::null_mut()
                } else {
                    stub as *mut c_void
                }
            })
        };
        assert_eq!(result.err(), Some(MissingSymbol("SDL_PollEvent")));
    }

    #[test]
    fn missing_optional_symbol_is_none() {
        unsafe extern "C" fn stub() {}
        let functions = unsafe {
            Functions::load(|name| {
                if name.to_bytes().starts_with(b"SDL_Sensor") {
                    std::ptr::null_mut()
                } else {
                    stub as *mut c_void
                }
            })
        }
        .unwrap();
        assert!(functions.SDL_SensorOpen.is_none());
        assert!(functions.SDL_IsTablet.is_some());
    }
}
