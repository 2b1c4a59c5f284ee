use std::ffi::{c_char, c_void};

use crate::{AudioCallback, BlitMap, Bool, FingerID, Window};

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
pub struct Palette {
    pub ncolors: i32,
    pub colors: *mut Color,
    pub version: u32,
    pub refcount: i32,
}

#[repr(C)]
pub struct PixelFormat {
    pub format: u32,
    pub palette: *mut Palette,
    pub BitsPerPixel: u8,
    pub BytesPerPixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rloss: u8,
    pub Gloss: u8,
    pub Bloss: u8,
    pub Aloss: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
    pub refcount: i32,
    pub next: *mut PixelFormat,
}

#[repr(C)]
pub struct Surface {
    pub flags: u32,
    pub format: *mut PixelFormat,
    pub w: i32,
    pub h: i32,
    pub pitch: i32,
    pub pixels: *mut c_void,
    pub userdata: *mut c_void,
    pub locked: i32,
    pub lock_data: *mut c_void,
    pub clip_rect: Rect,
    pub map: *mut BlitMap,
    pub refcount: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DisplayMode {
    pub format: u32,
    pub w: i32,
    pub h: i32,
    pub refresh_rate: i32,
    pub driverdata: *mut c_void,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            format: 0,
            w: 0,
            h: 0,
            refresh_rate: 0,
            driverdata: std::ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AudioSpec {
    pub freq: i32,
    pub format: u16,
    pub channels: u8,
    pub silence: u8,
    pub samples: u16,
    pub padding: u16,
    pub size: u32,
    pub callback: Option<AudioCallback>,
    pub userdata: *mut c_void,
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self {
            freq: 0,
            format: 0,
            channels: 0,
            silence: 0,
            samples: 0,
            padding: 0,
            size: 0,
            callback: None,
            userdata: std::ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RendererInfo {
    pub name: *const c_char,
    pub flags: u32,
    pub num_texture_formats: u32,
    pub texture_formats: [u32; 16],
    pub max_texture_width: i32,
    pub max_texture_height: i32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct JoystickGUID {
    pub data: [u8; 16],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct GameControllerButtonBindHat {
    pub hat: i32,
    pub hat_mask: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union GameControllerButtonBindValue {
    pub button: i32,
    pub axis: i32,
    pub hat: GameControllerButtonBindHat,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct GameControllerButtonBind {
    pub bindType: i32,
    pub value: GameControllerButtonBindValue,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Finger {
    pub id: FingerID,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MessageBoxButtonData {
    pub flags: u32,
    pub buttonid: i32,
    pub text: *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MessageBoxColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MessageBoxColorScheme {
    pub colors: [MessageBoxColor; 5],
}

#[repr(C)]
pub struct MessageBoxData {
    pub flags: u32,
    pub window: *mut Window,
    pub title: *const c_char,
    pub message: *const c_char,
    pub numbuttons: i32,
    pub buttons: *const MessageBoxButtonData,
    pub colorScheme: *const MessageBoxColorScheme,
}

pub type RWsizeFn = unsafe extern "C" fn(context: *mut RWops) -> i64;
pub type RWseekFn = unsafe extern "C" fn(context: *mut RWops, offset: i64, whence: i32) -> i64;
pub type RWreadFn =
    unsafe extern "C" fn(context: *mut RWops, ptr: *mut c_void, size: usize, maxnum: usize) -> usize;
pub type RWwriteFn =
    unsafe extern "C" fn(context: *mut RWops, ptr: *const c_void, size: usize, num: usize) -> usize;
pub type RWcloseFn = unsafe extern "C" fn(context: *mut RWops) -> i32;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RWopsMem {
    pub base: *mut u8,
    pub here: *mut u8,
    pub stop: *mut u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RWopsUnknown {
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[cfg(windows)]
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RWopsWindowsBuffer {
    pub data: *mut c_void,
    pub size: usize,
    pub left: usize,
}

#[cfg(windows)]
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RWopsWindowsIo {
    pub append: Bool,
    pub h: *mut c_void,
    pub buffer: RWopsWindowsBuffer,
}

#[cfg(not(windows))]
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RWopsStdio {
    pub autoclose: Bool,
    pub fp: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RWopsHidden {
    #[cfg(windows)]
    pub windowsio: RWopsWindowsIo,
    #[cfg(not(windows))]
    pub stdio: RWopsStdio,
    pub mem: RWopsMem,
    pub unknown: RWopsUnknown,
}

#[repr(C)]
pub struct RWops {
    pub size: Option<RWsizeFn>,
    pub seek: Option<RWseekFn>,
    pub read: Option<RWreadFn>,
    pub write: Option<RWwriteFn>,
    pub close: Option<RWcloseFn>,
    pub r#type: u32,
    pub hidden: RWopsHidden,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HapticDirection {
    pub r#type: u8,
    pub dir: [i32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct HapticConstant {
    pub r#type: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub level: i16,
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct HapticPeriodic {
    pub r#type: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub period: u16,
    pub magnitude: i16,
    pub offset: i16,
    pub phase: u16,
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct HapticCondition {
    pub r#type: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub right_sat: [u16; 3],
    pub left_sat: [u16; 3],
    pub right_coeff: [i16; 3],
    pub left_coeff: [i16; 3],
    pub deadband: [u16; 3],
    pub center: [i16; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct HapticRamp {
    pub r#type: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub start: i16,
    pub end: i16,
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct HapticLeftRight {
    pub r#type: u16,
    pub length: u32,
    pub large_magnitude: u16,
    pub small_magnitude: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct HapticCustom {
    pub r#type: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub channels: u8,
    pub period: u16,
    pub samples: u16,
    pub data: *mut u16,
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union HapticEffect {
    pub r#type: u16,
    pub constant: HapticConstant,
    pub periodic: HapticPeriodic,
    pub condition: HapticCondition,
    pub ramp: HapticRamp,
    pub leftright: HapticLeftRight,
    pub custom: HapticCustom,
}

pub type SysWMType = i32;

pub const SYSWM_UNKNOWN: SysWMType = 0;
pub const SYSWM_WINDOWS: SysWMType = 1;
pub const SYSWM_X11: SysWMType = 2;
pub const SYSWM_DIRECTFB: SysWMType = 3;
pub const SYSWM_COCOA: SysWMType = 4;
pub const SYSWM_UIKIT: SysWMType = 5;
pub const SYSWM_WAYLAND: SysWMType = 6;
pub const SYSWM_MIR: SysWMType = 7;
pub const SYSWM_WINRT: SysWMType = 8;
pub const SYSWM_ANDROID: SysWMType = 9;
pub const SYSWM_VIVANTE: SysWMType = 10;
pub const SYSWM_OS2: SysWMType = 11;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMinfoWin {
    pub window: *mut c_void,
    pub hdc: *mut c_void,
    pub hinstance: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMinfoX11 {
    pub display: *mut c_void,
    pub window: std::os::raw::c_ulong,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMinfoWayland {
    pub display: *mut c_void,
    pub surface: *mut c_void,
    pub shell_surface: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMinfoCocoa {
    pub window: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union SysWMinfoInfo {
    pub win: SysWMinfoWin,
    pub x11: SysWMinfoX11,
    pub wl: SysWMinfoWayland,
    pub cocoa: SysWMinfoCocoa,
    pub dummy: [u8; 64],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMinfo {
    pub version: Version,
    pub subsystem: SysWMType,
    pub info: SysWMinfoInfo,
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn haptic_layout() {
        assert_eq!(size_of::<HapticDirection>(), 16);
        assert_eq!(offset_of!(HapticConstant, direction), 4);
        assert_eq!(offset_of!(HapticConstant, length), 20);
        assert_eq!(size_of::<HapticConstant>(), 40);
        assert_eq!(size_of::<HapticPeriodic>(), 48);
        assert_eq!(size_of::<HapticCondition>(), 68);
        assert_eq!(size_of::<HapticRamp>(), 44);
        assert_eq!(size_of::<HapticLeftRight>(), 12);
    }

    #[test]
    fn misc_layout() {
        assert_eq!(size_of::<Version>(), 3);
        assert_eq!(size_of::<Rect>(), 16);
        assert_eq!(size_of::<JoystickGUID>(), 16);
        assert_eq!(size_of::<GameControllerButtonBind>(), 12);
        assert_eq!(size_of::<MessageBoxColorScheme>(), 15);
        assert_eq!(offset_of!(SysWMinfo, subsystem), 4);
        assert_eq!(offset_of!(SysWMinfo, info), 8);
        assert!(size_of::<SysWMinfoInfo>() >= 64);
        assert_eq!(offset_of!(AudioSpec, size), 12);
    }

    #[test]
    fn plain_value_layout() {
        assert_eq!(size_of::<Color>(), 4);
        assert_eq!(offset_of!(Color, a), 3);
        assert_eq!(size_of::<Point>(), 8);
        assert_eq!(offset_of!(Point, y), 4);
        assert_eq!(offset_of!(Rect, h), 12);
        assert_eq!(offset_of!(DisplayMode, refresh_rate), 12);
        assert_eq!(offset_of!(DisplayMode, driverdata), 16);
        assert_eq!(offset_of!(Finger, x), 8);
        assert_eq!(offset_of!(Finger, pressure), 16);
        assert_eq!(offset_of!(MessageBoxButtonData, buttonid), 4);
        assert_eq!(offset_of!(MessageBoxButtonData, text), 8);
        assert_eq!(offset_of!(AudioSpec, channels), 6);
        assert_eq!(offset_of!(AudioSpec, samples), 8);
        assert_eq!(offset_of!(AudioSpec, callback), 16);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pointer_sized_layout() {
        assert_eq!(offset_of!(Palette, colors), 8);
        assert_eq!(offset_of!(Palette, refcount), 20);
        assert_eq!(size_of::<Palette>(), 24);

        assert_eq!(offset_of!(PixelFormat, BitsPerPixel), 16);
        assert_eq!(offset_of!(PixelFormat, Rmask), 20);
        assert_eq!(offset_of!(PixelFormat, Ashift), 43);
        assert_eq!(offset_of!(PixelFormat, refcount), 44);
        assert_eq!(offset_of!(PixelFormat, next), 48);
        assert_eq!(size_of::<PixelFormat>(), 56);

        assert_eq!(offset_of!(Surface, pixels), 32);
        assert_eq!(offset_of!(Surface, lock_data), 56);
        assert_eq!(offset_of!(Surface, clip_rect), 64);
        assert_eq!(offset_of!(Surface, refcount), 88);
        assert_eq!(size_of::<Surface>(), 96);

        assert_eq!(size_of::<DisplayMode>(), 24);
        assert_eq!(size_of::<Finger>(), 24);

        assert_eq!(offset_of!(RWops, close), 32);
        assert_eq!(offset_of!(RWops, r#type), 40);
        assert_eq!(offset_of!(RWops, hidden), 48);
        #[cfg(not(windows))]
        assert_eq!(size_of::<RWops>(), 72);

        assert_eq!(offset_of!(AudioSpec, userdata), 24);
        assert_eq!(size_of::<AudioSpec>(), 32);

        assert_eq!(offset_of!(HapticCustom, data), 40);
        assert_eq!(offset_of!(HapticCustom, fade_level), 54);
        assert_eq!(size_of::<HapticCustom>(), 56);

        assert_eq!(offset_of!(RendererInfo, flags), 8);
        assert_eq!(offset_of!(RendererInfo, texture_formats), 16);
        assert_eq!(offset_of!(RendererInfo, max_texture_height), 84);
        assert_eq!(size_of::<RendererInfo>(), 88);

        assert_eq!(size_of::<MessageBoxButtonData>(), 16);
        assert_eq!(offset_of!(MessageBoxData, window), 8);
        assert_eq!(offset_of!(MessageBoxData, numbuttons), 32);
        assert_eq!(offset_of!(MessageBoxData, buttons), 40);
        assert_eq!(offset_of!(MessageBoxData, colorScheme), 48);
        assert_eq!(size_of::<MessageBoxData>(), 56);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn pointer_sized_layout() {
        assert_eq!(offset_of!(Palette, colors), 4);
        assert_eq!(offset_of!(Palette, refcount), 12);
        assert_eq!(size_of::<Palette>(), 16);

        assert_eq!(offset_of!(PixelFormat, BitsPerPixel), 8);
        assert_eq!(offset_of!(PixelFormat, Rmask), 12);
        assert_eq!(offset_of!(PixelFormat, Ashift), 35);
        assert_eq!(offset_of!(PixelFormat, refcount), 36);
        assert_eq!(offset_of!(PixelFormat, next), 40);
        assert_eq!(size_of::<PixelFormat>(), 44);

        assert_eq!(offset_of!(Surface, pixels), 20);
        assert_eq!(offset_of!(Surface, lock_data), 32);
        assert_eq!(offset_of!(Surface, clip_rect), 36);
        assert_eq!(offset_of!(Surface, refcount), 56);
        assert_eq!(size_of::<Surface>(), 60);

        assert_eq!(size_of::<DisplayMode>(), 20);
        // 64-bit integers are only 4-aligned on some 32-bit targets.
        assert_eq!(size_of::<Finger>(), 20usize.next_multiple_of(std::mem::align_of::<i64>()));

        assert_eq!(offset_of!(RWops, close), 16);
        assert_eq!(offset_of!(RWops, r#type), 20);
        assert_eq!(offset_of!(RWops, hidden), 24);
        #[cfg(not(windows))]
        assert_eq!(size_of::<RWops>(), 36);

        assert_eq!(offset_of!(AudioSpec, userdata), 20);
        assert_eq!(size_of::<AudioSpec>(), 24);

        assert_eq!(offset_of!(HapticCustom, data), 36);
        assert_eq!(offset_of!(HapticCustom, fade_level), 46);
        assert_eq!(size_of::<HapticCustom>(), 48);

        assert_eq!(offset_of!(RendererInfo, flags), 4);
        assert_eq!(offset_of!(RendererInfo, texture_formats), 12);
        assert_eq!(offset_of!(RendererInfo, max_texture_height), 80);
        assert_eq!(size_of::<RendererInfo>(), 84);

        assert_eq!(size_of::<MessageBoxButtonData>(), 12);
        assert_eq!(offset_of!(MessageBoxData, window), 4);
        assert_eq!(offset_of!(MessageBoxData, numbuttons), 16);
        assert_eq!(offset_of!(MessageBoxData, buttons), 20);
        assert_eq!(offset_of!(MessageBoxData, colorScheme), 24);
        assert_eq!(size_of::<MessageBoxData>(), 28);
    }
}
