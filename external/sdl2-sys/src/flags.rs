use crate::{AudioFormat, BlendMode};

pub const INIT_TIMER: u32 = 0x0000_0001;
pub const INIT_AUDIO: u32 = 0x0000_0010;
pub const INIT_VIDEO: u32 = 0x0000_0020;
pub const INIT_JOYSTICK: u32 = 0x0000_0200;
pub const INIT_HAPTIC: u32 = 0x0000_1000;
pub const INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const INIT_EVENTS: u32 = 0x0000_4000;
pub const INIT_SENSOR: u32 = 0x0000_8000;
pub const INIT_NOPARACHUTE: u32 = 0x0010_0000;
pub const INIT_EVERYTHING: u32 = INIT_TIMER
    | INIT_AUDIO
    | INIT_VIDEO
    | INIT_EVENTS
    | INIT_JOYSTICK
    | INIT_HAPTIC
    | INIT_GAMECONTROLLER
    | INIT_SENSOR;

pub const WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const WINDOW_OPENGL: u32 = 0x0000_0002;
pub const WINDOW_SHOWN: u32 = 0x0000_0004;
pub const WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const WINDOW_RESIZABLE: u32 = 0x0000_0020;
pub const WINDOW_MINIMIZED: u32 = 0x0000_0040;
pub const WINDOW_MAXIMIZED: u32 = 0x0000_0080;
pub const WINDOW_INPUT_GRABBED: u32 = 0x0000_0100;
pub const WINDOW_INPUT_FOCUS: u32 = 0x0000_0200;
pub const WINDOW_MOUSE_FOCUS: u32 = 0x0000_0400;
pub const WINDOW_FULLSCREEN_DESKTOP: u32 = WINDOW_FULLSCREEN | 0x0000_1000;
pub const WINDOW_FOREIGN: u32 = 0x0000_0800;
pub const WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
pub const WINDOW_MOUSE_CAPTURE: u32 = 0x0000_4000;
pub const WINDOW_ALWAYS_ON_TOP: u32 = 0x0000_8000;
pub const WINDOW_SKIP_TASKBAR: u32 = 0x0001_0000;
pub const WINDOW_UTILITY: u32 = 0x0002_0000;
pub const WINDOW_TOOLTIP: u32 = 0x0004_0000;
pub const WINDOW_POPUP_MENU: u32 = 0x0008_0000;
pub const WINDOW_VULKAN: u32 = 0x1000_0000;

pub const WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

pub const RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
pub const RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

pub const TEXTUREACCESS_STATIC: i32 = 0;
pub const TEXTUREACCESS_STREAMING: i32 = 1;
pub const TEXTUREACCESS_TARGET: i32 = 2;

pub const FLIP_NONE: u32 = 0x0000_0000;
pub const FLIP_HORIZONTAL: u32 = 0x0000_0001;
pub const FLIP_VERTICAL: u32 = 0x0000_0002;

pub const BLENDMODE_NONE: BlendMode = 0x0000_0000;
pub const BLENDMODE_BLEND: BlendMode = 0x0000_0001;
pub const BLENDMODE_ADD: BlendMode = 0x0000_0002;
pub const BLENDMODE_MOD: BlendMode = 0x0000_0004;
pub const BLENDMODE_INVALID: BlendMode = 0x7FFF_FFFF;

pub const AUDIO_U8: AudioFormat = 0x0008;
pub const AUDIO_S8: AudioFormat = 0x8008;
pub const AUDIO_U16LSB: AudioFormat = 0x0010;
pub const AUDIO_S16LSB: AudioFormat = 0x8010;
pub const AUDIO_U16MSB: AudioFormat = 0x1010;
pub const AUDIO_S16MSB: AudioFormat = 0x9010;
pub const AUDIO_S32LSB: AudioFormat = 0x8020;
pub const AUDIO_S32MSB: AudioFormat = 0x9020;
pub const AUDIO_F32LSB: AudioFormat = 0x8120;
pub const AUDIO_F32MSB: AudioFormat = 0x9120;

pub const AUDIO_ALLOW_FREQUENCY_CHANGE: i32 = 0x0000_0001;
pub const AUDIO_ALLOW_FORMAT_CHANGE: i32 = 0x0000_0002;
pub const AUDIO_ALLOW_CHANNELS_CHANGE: i32 = 0x0000_0004;
pub const AUDIO_ALLOW_SAMPLES_CHANGE: i32 = 0x0000_0008;
pub const AUDIO_ALLOW_ANY_CHANGE: i32 = AUDIO_ALLOW_FREQUENCY_CHANGE
    | AUDIO_ALLOW_FORMAT_CHANGE
    | AUDIO_ALLOW_CHANNELS_CHANGE
    | AUDIO_ALLOW_SAMPLES_CHANGE;

pub const AUDIO_STOPPED: i32 = 0;
pub const AUDIO_PLAYING: i32 = 1;
pub const AUDIO_PAUSED: i32 = 2;

pub const MIX_MAXVOLUME: i32 = 128;

pub const HINT_DEFAULT: i32 = 0;
pub const HINT_NORMAL: i32 = 1;
pub const HINT_OVERRIDE: i32 = 2;

pub const LOG_CATEGORY_APPLICATION: i32 = 0;
pub const LOG_CATEGORY_ERROR: i32 = 1;
pub const LOG_CATEGORY_ASSERT: i32 = 2;
pub const LOG_CATEGORY_SYSTEM: i32 = 3;
pub const LOG_CATEGORY_AUDIO: i32 = 4;
pub const LOG_CATEGORY_VIDEO: i32 = 5;
pub const LOG_CATEGORY_RENDER: i32 = 6;
pub const LOG_CATEGORY_INPUT: i32 = 7;
pub const LOG_CATEGORY_TEST: i32 = 8;
pub const LOG_CATEGORY_CUSTOM: i32 = 19;

pub const LOG_PRIORITY_VERBOSE: i32 = 1;
pub const LOG_PRIORITY_DEBUG: i32 = 2;
pub const LOG_PRIORITY_INFO: i32 = 3;
pub const LOG_PRIORITY_WARN: i32 = 4;
pub const LOG_PRIORITY_ERROR: i32 = 5;
pub const LOG_PRIORITY_CRITICAL: i32 = 6;

pub const POWERSTATE_UNKNOWN: i32 = 0;
pub const POWERSTATE_ON_BATTERY: i32 = 1;
pub const POWERSTATE_NO_BATTERY: i32 = 2;
pub const POWERSTATE_CHARGING: i32 = 3;
pub const POWERSTATE_CHARGED: i32 = 4;

pub const THREAD_PRIORITY_LOW: i32 = 0;
pub const THREAD_PRIORITY_NORMAL: i32 = 1;
pub const THREAD_PRIORITY_HIGH: i32 = 2;

pub const MUTEX_TIMEDOUT: i32 = 1;
pub const MUTEX_MAXWAIT: u32 = !0;

pub const RW_SEEK_SET: i32 = 0;
pub const RW_SEEK_CUR: i32 = 1;
pub const RW_SEEK_END: i32 = 2;

pub const RWOPS_UNKNOWN: u32 = 0;
pub const RWOPS_WINFILE: u32 = 1;
pub const RWOPS_STDFILE: u32 = 2;
pub const RWOPS_JNIFILE: u32 = 3;
pub const RWOPS_MEMORY: u32 = 4;
pub const RWOPS_MEMORY_RO: u32 = 5;

pub const ADDEVENT: i32 = 0;
pub const PEEKEVENT: i32 = 1;
pub const GETEVENT: i32 = 2;

pub const QUERY: i32 = -1;
pub const IGNORE: i32 = 0;
pub const DISABLE: i32 = 0;
pub const ENABLE: i32 = 1;

pub const RELEASED: u8 = 0;
pub const PRESSED: u8 = 1;

pub const BUTTON_LEFT: u8 = 1;
pub const BUTTON_MIDDLE: u8 = 2;
pub const BUTTON_RIGHT: u8 = 3;
pub const BUTTON_X1: u8 = 4;
pub const BUTTON_X2: u8 = 5;

pub const fn button_mask(button: u8) -> u32 {
    1 << (button - 1)
}

pub const MOUSEWHEEL_NORMAL: u32 = 0;
pub const MOUSEWHEEL_FLIPPED: u32 = 1;

pub const TOUCH_MOUSEID: u32 = !0;

pub const SYSTEM_CURSOR_ARROW: i32 = 0;
pub const SYSTEM_CURSOR_IBEAM: i32 = 1;
pub const SYSTEM_CURSOR_WAIT: i32 = 2;
pub const SYSTEM_CURSOR_CROSSHAIR: i32 = 3;
pub const SYSTEM_CURSOR_WAITARROW: i32 = 4;
pub const SYSTEM_CURSOR_SIZENWSE: i32 = 5;
pub const SYSTEM_CURSOR_SIZENESW: i32 = 6;
pub const SYSTEM_CURSOR_SIZEWE: i32 = 7;
pub const SYSTEM_CURSOR_SIZENS: i32 = 8;
pub const SYSTEM_CURSOR_SIZEALL: i32 = 9;
pub const SYSTEM_CURSOR_NO: i32 = 10;
pub const SYSTEM_CURSOR_HAND: i32 = 11;

pub const HAT_CENTERED: u8 = 0x00;
pub const HAT_UP: u8 = 0x01;
pub const HAT_RIGHT: u8 = 0x02;
pub const HAT_DOWN: u8 = 0x04;
pub const HAT_LEFT: u8 = 0x08;

pub const JOYSTICK_AXIS_MAX: i16 = 32767;
pub const JOYSTICK_AXIS_MIN: i16 = -32768;

pub const JOYSTICK_TYPE_UNKNOWN: i32 = 0;
pub const JOYSTICK_TYPE_GAMECONTROLLER: i32 = 1;
pub const JOYSTICK_TYPE_WHEEL: i32 = 2;
pub const JOYSTICK_TYPE_ARCADE_STICK: i32 = 3;
pub const JOYSTICK_TYPE_FLIGHT_STICK: i32 = 4;
pub const JOYSTICK_TYPE_DANCE_PAD: i32 = 5;
pub const JOYSTICK_TYPE_GUITAR: i32 = 6;
pub const JOYSTICK_TYPE_DRUM_KIT: i32 = 7;
pub const JOYSTICK_TYPE_ARCADE_PAD: i32 = 8;
pub const JOYSTICK_TYPE_THROTTLE: i32 = 9;

pub const JOYSTICK_POWER_UNKNOWN: i32 = -1;
pub const JOYSTICK_POWER_EMPTY: i32 = 0;
pub const JOYSTICK_POWER_LOW: i32 = 1;
pub const JOYSTICK_POWER_MEDIUM: i32 = 2;
pub const JOYSTICK_POWER_FULL: i32 = 3;
pub const JOYSTICK_POWER_WIRED: i32 = 4;
pub const JOYSTICK_POWER_MAX: i32 = 5;

pub const CONTROLLER_BINDTYPE_NONE: i32 = 0;
pub const CONTROLLER_BINDTYPE_BUTTON: i32 = 1;
pub const CONTROLLER_BINDTYPE_AXIS: i32 = 2;
pub const CONTROLLER_BINDTYPE_HAT: i32 = 3;

pub const CONTROLLER_AXIS_INVALID: i32 = -1;
pub const CONTROLLER_AXIS_LEFTX: i32 = 0;
pub const CONTROLLER_AXIS_LEFTY: i32 = 1;
pub const CONTROLLER_AXIS_RIGHTX: i32 = 2;
pub const CONTROLLER_AXIS_RIGHTY: i32 = 3;
pub const CONTROLLER_AXIS_TRIGGERLEFT: i32 = 4;
pub const CONTROLLER_AXIS_TRIGGERRIGHT: i32 = 5;
pub const CONTROLLER_AXIS_MAX: i32 = 6;

pub const CONTROLLER_BUTTON_INVALID: i32 = -1;
pub const CONTROLLER_BUTTON_A: i32 = 0;
pub const CONTROLLER_BUTTON_B: i32 = 1;
pub const CONTROLLER_BUTTON_X: i32 = 2;
pub const CONTROLLER_BUTTON_Y: i32 = 3;
pub const CONTROLLER_BUTTON_BACK: i32 = 4;
pub const CONTROLLER_BUTTON_GUIDE: i32 = 5;
pub const CONTROLLER_BUTTON_START: i32 = 6;
pub const CONTROLLER_BUTTON_LEFTSTICK: i32 = 7;
pub const CONTROLLER_BUTTON_RIGHTSTICK: i32 = 8;
pub const CONTROLLER_BUTTON_LEFTSHOULDER: i32 = 9;
pub const CONTROLLER_BUTTON_RIGHTSHOULDER: i32 = 10;
pub const CONTROLLER_BUTTON_DPAD_UP: i32 = 11;
pub const CONTROLLER_BUTTON_DPAD_DOWN: i32 = 12;
pub const CONTROLLER_BUTTON_DPAD_LEFT: i32 = 13;
pub const CONTROLLER_BUTTON_DPAD_RIGHT: i32 = 14;
pub const CONTROLLER_BUTTON_MAX: i32 = 15;

pub const HAPTIC_CONSTANT: u16 = 1 << 0;
pub const HAPTIC_SINE: u16 = 1 << 1;
pub const HAPTIC_LEFTRIGHT: u16 = 1 << 2;
pub const HAPTIC_TRIANGLE: u16 = 1 << 3;
pub const HAPTIC_SAWTOOTHUP: u16 = 1 << 4;
pub const HAPTIC_SAWTOOTHDOWN: u16 = 1 << 5;
pub const HAPTIC_RAMP: u16 = 1 << 6;
pub const HAPTIC_SPRING: u16 = 1 << 7;
pub const HAPTIC_DAMPER: u16 = 1 << 8;
pub const HAPTIC_INERTIA: u16 = 1 << 9;
pub const HAPTIC_FRICTION: u16 = 1 << 10;
pub const HAPTIC_CUSTOM: u16 = 1 << 11;
pub const HAPTIC_GAIN: u32 = 1 << 12;
pub const HAPTIC_AUTOCENTER: u32 = 1 << 13;
pub const HAPTIC_STATUS: u32 = 1 << 14;
pub const HAPTIC_PAUSE: u32 = 1 << 15;

pub const HAPTIC_POLAR: u8 = 0;
pub const HAPTIC_CARTESIAN: u8 = 1;
pub const HAPTIC_SPHERICAL: u8 = 2;
pub const HAPTIC_INFINITY: u32 = 4_294_967_295;

pub const MESSAGEBOX_ERROR: u32 = 0x0000_0010;
pub const MESSAGEBOX_WARNING: u32 = 0x0000_0020;
pub const MESSAGEBOX_INFORMATION: u32 = 0x0000_0040;

pub const MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT: u32 = 0x0000_0001;
pub const MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT: u32 = 0x0000_0002;

pub const MESSAGEBOX_COLOR_BACKGROUND: usize = 0;
pub const MESSAGEBOX_COLOR_TEXT: usize = 1;
pub const MESSAGEBOX_COLOR_BUTTON_BORDER: usize = 2;
pub const MESSAGEBOX_COLOR_BUTTON_BACKGROUND: usize = 3;
pub const MESSAGEBOX_COLOR_BUTTON_SELECTED: usize = 4;
pub const MESSAGEBOX_COLOR_MAX: usize = 5;

pub const GL_RED_SIZE: i32 = 0;
pub const GL_GREEN_SIZE: i32 = 1;
pub const GL_BLUE_SIZE: i32 = 2;
pub const GL_ALPHA_SIZE: i32 = 3;
pub const GL_BUFFER_SIZE: i32 = 4;
pub const GL_DOUBLEBUFFER: i32 = 5;
pub const GL_DEPTH_SIZE: i32 = 6;
pub const GL_STENCIL_SIZE: i32 = 7;
pub const GL_ACCUM_RED_SIZE: i32 = 8;
pub const GL_ACCUM_GREEN_SIZE: i32 = 9;
pub const GL_ACCUM_BLUE_SIZE: i32 = 10;
pub const GL_ACCUM_ALPHA_SIZE: i32 = 11;
pub const GL_STEREO: i32 = 12;
pub const GL_MULTISAMPLEBUFFERS: i32 = 13;
pub const GL_MULTISAMPLESAMPLES: i32 = 14;
pub const GL_ACCELERATED_VISUAL: i32 = 15;
pub const GL_RETAINED_BACKING: i32 = 16;
pub const GL_CONTEXT_MAJOR_VERSION: i32 = 17;
pub const GL_CONTEXT_MINOR_VERSION: i32 = 18;
pub const GL_CONTEXT_EGL: i32 = 19;
pub const GL_CONTEXT_FLAGS: i32 = 20;
pub const GL_CONTEXT_PROFILE_MASK: i32 = 21;
pub const GL_SHARE_WITH_CURRENT_CONTEXT: i32 = 22;
pub const GL_FRAMEBUFFER_SRGB_CAPABLE: i32 = 23;
pub const GL_CONTEXT_RELEASE_BEHAVIOR: i32 = 24;
pub const GL_CONTEXT_RESET_NOTIFICATION: i32 = 25;
pub const GL_CONTEXT_NO_ERROR: i32 = 26;

pub const GL_CONTEXT_PROFILE_CORE: i32 = 0x0001;
pub const GL_CONTEXT_PROFILE_COMPATIBILITY: i32 = 0x0002;
pub const GL_CONTEXT_PROFILE_ES: i32 = 0x0004;

pub const SENSOR_INVALID: i32 = -1;
pub const SENSOR_UNKNOWN: i32 = 0;
pub const SENSOR_ACCEL: i32 = 1;
pub const SENSOR_GYRO: i32 = 2;

pub const STANDARD_GRAVITY: f32 = 9.80665;

pub const ORIENTATION_UNKNOWN: i32 = 0;
pub const ORIENTATION_LANDSCAPE: i32 = 1;
pub const ORIENTATION_LANDSCAPE_FLIPPED: i32 = 2;
pub const ORIENTATION_PORTRAIT: i32 = 3;
pub const ORIENTATION_PORTRAIT_FLIPPED: i32 = 4;

pub const ALPHA_OPAQUE: u8 = 255;
pub const ALPHA_TRANSPARENT: u8 = 0;

pub const SWSURFACE: u32 = 0;
pub const PREALLOC: u32 = 0x0000_0001;
pub const RLEACCEL: u32 = 0x0000_0002;
pub const DONTFREE: u32 = 0x0000_0004;

pub const CACHELINE_SIZE: i32 = 128;

pub const PIXELTYPE_UNKNOWN: u32 = 0;
pub const PIXELTYPE_INDEX1: u32 = 1;
pub const PIXELTYPE_INDEX4: u32 = 2;
pub const PIXELTYPE_INDEX8: u32 = 3;
pub const PIXELTYPE_PACKED8: u32 = 4;
pub const PIXELTYPE_PACKED16: u32 = 5;
pub const PIXELTYPE_PACKED32: u32 = 6;
pub const PIXELTYPE_ARRAYU8: u32 = 7;
pub const PIXELTYPE_ARRAYU16: u32 = 8;
pub const PIXELTYPE_ARRAYU32: u32 = 9;
pub const PIXELTYPE_ARRAYF16: u32 = 10;
pub const PIXELTYPE_ARRAYF32: u32 = 11;

pub const BITMAPORDER_NONE: u32 = 0;
pub const BITMAPORDER_4321: u32 = 1;
pub const BITMAPORDER_1234: u32 = 2;

pub const PACKEDORDER_NONE: u32 = 0;
pub const PACKEDORDER_XRGB: u32 = 1;
pub const PACKEDORDER_RGBX: u32 = 2;
pub const PACKEDORDER_ARGB: u32 = 3;
pub const PACKEDORDER_RGBA: u32 = 4;
pub const PACKEDORDER_XBGR: u32 = 5;
pub const PACKEDORDER_BGRX: u32 = 6;
pub const PACKEDORDER_ABGR: u32 = 7;
pub const PACKEDORDER_BGRA: u32 = 8;

pub const ARRAYORDER_NONE: u32 = 0;
pub const ARRAYORDER_RGB: u32 = 1;
pub const ARRAYORDER_RGBA: u32 = 2;
pub const ARRAYORDER_ARGB: u32 = 3;
pub const ARRAYORDER_BGR: u32 = 4;
pub const ARRAYORDER_BGRA: u32 = 5;
pub const ARRAYORDER_ABGR: u32 = 6;

pub const PACKEDLAYOUT_NONE: u32 = 0;
pub const PACKEDLAYOUT_332: u32 = 1;
pub const PACKEDLAYOUT_4444: u32 = 2;
pub const PACKEDLAYOUT_1555: u32 = 3;
pub const PACKEDLAYOUT_5551: u32 = 4;
pub const PACKEDLAYOUT_565: u32 = 5;
pub const PACKEDLAYOUT_8888: u32 = 6;
pub const PACKEDLAYOUT_2101010: u32 = 7;
pub const PACKEDLAYOUT_1010102: u32 = 8;

pub const fn define_pixel_fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | (b as u32) << 8 | (c as u32) << 16 | (d as u32) << 24
}

pub const fn define_pixel_format(
    r#type: u32,
    order: u32,
    layout: u32,
    bits: u32,
    bytes: u32,
) -> u32 {
    (1 << 28) | (r#type << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes
}

pub const fn is_pixel_format_fourcc(format: u32) -> bool {
    format != 0 && (format >> 28) & 0x0f != 1
}

pub const fn bits_per_pixel(format: u32) -> u32 {
    (format >> 8) & 0xff
}

/// Bytes of one pixel. Planar YUV formats report their luma plane, and
/// formats packing several pixels into a byte report 0.
pub const fn bytes_per_pixel(format: u32) -> u32 {
    if is_pixel_format_fourcc(format) {
        match format {
            PIXELFORMAT_YUY2 | PIXELFORMAT_UYVY | PIXELFORMAT_YVYU => 2,
            _ => 1,
        }
    } else {
        format & 0xff
    }
}

pub const PIXELFORMAT_UNKNOWN: u32 = 0;
pub const PIXELFORMAT_INDEX1LSB: u32 =
    define_pixel_format(PIXELTYPE_INDEX1, BITMAPORDER_4321, 0, 1, 0);
pub const PIXELFORMAT_INDEX1MSB: u32 =
    define_pixel_format(PIXELTYPE_INDEX1, BITMAPORDER_1234, 0, 1, 0);
pub const PIXELFORMAT_INDEX4LSB: u32 =
    define_pixel_format(PIXELTYPE_INDEX4, BITMAPORDER_4321, 0, 4, 0);
pub const PIXELFORMAT_INDEX4MSB: u32 =
    define_pixel_format(PIXELTYPE_INDEX4, BITMAPORDER_1234, 0, 4, 0);
pub const PIXELFORMAT_INDEX8: u32 = define_pixel_format(PIXELTYPE_INDEX8, 0, 0, 8, 1);
pub const PIXELFORMAT_RGB332: u32 =
    define_pixel_format(PIXELTYPE_PACKED8, PACKEDORDER_XRGB, PACKEDLAYOUT_332, 8, 1);
pub const PIXELFORMAT_RGB444: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_XRGB, PACKEDLAYOUT_4444, 12, 2);
pub const PIXELFORMAT_RGB555: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_XRGB, PACKEDLAYOUT_1555, 15, 2);
pub const PIXELFORMAT_BGR555: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_XBGR, PACKEDLAYOUT_1555, 15, 2);
pub const PIXELFORMAT_ARGB4444: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_ARGB, PACKEDLAYOUT_4444, 16, 2);
pub const PIXELFORMAT_RGBA4444: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_RGBA, PACKEDLAYOUT_4444, 16, 2);
pub const PIXELFORMAT_ABGR4444: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_ABGR, PACKEDLAYOUT_4444, 16, 2);
pub const PIXELFORMAT_BGRA4444: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_BGRA, PACKEDLAYOUT_4444, 16, 2);
pub const PIXELFORMAT_ARGB1555: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_ARGB, PACKEDLAYOUT_1555, 16, 2);
pub const PIXELFORMAT_RGBA5551: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_RGBA, PACKEDLAYOUT_5551, 16, 2);
pub const PIXELFORMAT_ABGR1555: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_ABGR, PACKEDLAYOUT_1555, 16, 2);
pub const PIXELFORMAT_BGRA5551: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_BGRA, PACKEDLAYOUT_5551, 16, 2);
pub const PIXELFORMAT_RGB565: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_XRGB, PACKEDLAYOUT_565, 16, 2);
pub const PIXELFORMAT_BGR565: u32 =
    define_pixel_format(PIXELTYPE_PACKED16, PACKEDORDER_XBGR, PACKEDLAYOUT_565, 16, 2);
pub const PIXELFORMAT_RGB24: u32 = define_pixel_format(PIXELTYPE_ARRAYU8, ARRAYORDER_RGB, 0, 24, 3);
pub const PIXELFORMAT_BGR24: u32 = define_pixel_format(PIXELTYPE_ARRAYU8, ARRAYORDER_BGR, 0, 24, 3);
pub const PIXELFORMAT_RGB888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_XRGB, PACKEDLAYOUT_8888, 24, 4);
pub const PIXELFORMAT_RGBX8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_RGBX, PACKEDLAYOUT_8888, 24, 4);
pub const PIXELFORMAT_BGR888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_XBGR, PACKEDLAYOUT_8888, 24, 4);
pub const PIXELFORMAT_BGRX8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_BGRX, PACKEDLAYOUT_8888, 24, 4);
pub const PIXELFORMAT_ARGB8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_ARGB, PACKEDLAYOUT_8888, 32, 4);
pub const PIXELFORMAT_RGBA8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_RGBA, PACKEDLAYOUT_8888, 32, 4);
pub const PIXELFORMAT_ABGR8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_ABGR, PACKEDLAYOUT_8888, 32, 4);
pub const PIXELFORMAT_BGRA8888: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_BGRA, PACKEDLAYOUT_8888, 32, 4);
pub const PIXELFORMAT_ARGB2101010: u32 =
    define_pixel_format(PIXELTYPE_PACKED32, PACKEDORDER_ARGB, PACKEDLAYOUT_2101010, 32, 4);

#[cfg(target_endian = "little")]
pub const PIXELFORMAT_RGBA32: u32 = PIXELFORMAT_ABGR8888;
#[cfg(target_endian = "little")]
pub const PIXELFORMAT_ARGB32: u32 = PIXELFORMAT_BGRA8888;
#[cfg(target_endian = "little")]
pub const PIXELFORMAT_BGRA32: u32 = PIXELFORMAT_ARGB8888;
#[cfg(target_endian = "little")]
pub const PIXELFORMAT_ABGR32: u32 = PIXELFORMAT_RGBA8888;
#[cfg(target_endian = "big")]
pub const PIXELFORMAT_RGBA32: u32 = PIXELFORMAT_RGBA8888;
#[cfg(target_endian = "big")]
pub const PIXELFORMAT_ARGB32: u32 = PIXELFORMAT_ARGB8888;
#[cfg(target_endian = "big")]
pub const PIXELFORMAT_BGRA32: u32 = PIXELFORMAT_BGRA8888;
#[cfg(target_endian = "big")]
pub const PIXELFORMAT_ABGR32: u32 = PIXELFORMAT_ABGR8888;

pub const PIXELFORMAT_YV12: u32 = define_pixel_fourcc(b'Y', b'V', b'1', b'2');
pub const PIXELFORMAT_IYUV: u32 = define_pixel_fourcc(b'I', b'Y', b'U', b'V');
pub const PIXELFORMAT_YUY2: u32 = define_pixel_fourcc(b'Y', b'U', b'Y', b'2');
pub const PIXELFORMAT_UYVY: u32 = define_pixel_fourcc(b'U', b'Y', b'V', b'Y');
pub const PIXELFORMAT_YVYU: u32 = define_pixel_fourcc(b'Y', b'V', b'Y', b'U');
pub const PIXELFORMAT_NV12: u32 = define_pixel_fourcc(b'N', b'V', b'1', b'2');
pub const PIXELFORMAT_NV21: u32 = define_pixel_fourcc(b'N', b'V', b'2', b'1');

pub const HINT_FRAMEBUFFER_ACCELERATION: &str = "SDL_FRAMEBUFFER_ACCELERATION";
pub const HINT_RENDER_DRIVER: &str = "SDL_RENDER_DRIVER";
pub const HINT_RENDER_OPENGL_SHADERS: &str = "SDL_RENDER_OPENGL_SHADERS";
pub const HINT_RENDER_DIRECT3D_THREADSAFE: &str = "SDL_RENDER_DIRECT3D_THREADSAFE";
pub const HINT_RENDER_DIRECT3D11_DEBUG: &str = "SDL_RENDER_DIRECT3D11_DEBUG";
pub const HINT_RENDER_LOGICAL_SIZE_MODE: &str = "SDL_RENDER_LOGICAL_SIZE_MODE";
pub const HINT_RENDER_SCALE_QUALITY: &str = "SDL_RENDER_SCALE_QUALITY";
pub const HINT_RENDER_VSYNC: &str = "SDL_RENDER_VSYNC";
pub const HINT_VIDEO_ALLOW_SCREENSAVER: &str = "SDL_VIDEO_ALLOW_SCREENSAVER";
pub const HINT_VIDEO_X11_XVIDMODE: &str = "SDL_VIDEO_X11_XVIDMODE";
pub const HINT_VIDEO_X11_XINERAMA: &str = "SDL_VIDEO_X11_XINERAMA";
pub const HINT_VIDEO_X11_XRANDR: &str = "SDL_VIDEO_X11_XRANDR";
pub const HINT_VIDEO_X11_NET_WM_PING: &str = "SDL_VIDEO_X11_NET_WM_PING";
pub const HINT_WINDOW_FRAME_USABLE_WHILE_CURSOR_HIDDEN: &str =
    "SDL_WINDOW_FRAME_USABLE_WHILE_CURSOR_HIDDEN";
pub const HINT_WINDOWS_INTRESOURCE_ICON: &str = "SDL_WINDOWS_INTRESOURCE_ICON";
pub const HINT_WINDOWS_INTRESOURCE_ICON_SMALL: &str = "SDL_WINDOWS_INTRESOURCE_ICON_SMALL";
pub const HINT_WINDOWS_ENABLE_MESSAGELOOP: &str = "SDL_WINDOWS_ENABLE_MESSAGELOOP";
pub const HINT_WINDOWS_NO_CLOSE_ON_ALT_F4: &str = "SDL_WINDOWS_NO_CLOSE_ON_ALT_F4";
pub const HINT_GRAB_KEYBOARD: &str = "SDL_GRAB_KEYBOARD";
pub const HINT_MOUSE_DOUBLE_CLICK_TIME: &str = "SDL_MOUSE_DOUBLE_CLICK_TIME";
pub const HINT_MOUSE_DOUBLE_CLICK_RADIUS: &str = "SDL_MOUSE_DOUBLE_CLICK_RADIUS";
pub const HINT_MOUSE_NORMAL_SPEED_SCALE: &str = "SDL_MOUSE_NORMAL_SPEED_SCALE";
pub const HINT_MOUSE_RELATIVE_SPEED_SCALE: &str = "SDL_MOUSE_RELATIVE_SPEED_SCALE";
pub const HINT_MOUSE_RELATIVE_MODE_WARP: &str = "SDL_MOUSE_RELATIVE_MODE_WARP";
pub const HINT_MOUSE_FOCUS_CLICKTHROUGH: &str = "SDL_MOUSE_FOCUS_CLICKTHROUGH";
pub const HINT_TOUCH_MOUSE_EVENTS: &str = "SDL_TOUCH_MOUSE_EVENTS";
pub const HINT_MOUSE_TOUCH_EVENTS: &str = "SDL_MOUSE_TOUCH_EVENTS";
pub const HINT_VIDEO_MINIMIZE_ON_FOCUS_LOSS: &str = "SDL_VIDEO_MINIMIZE_ON_FOCUS_LOSS";
pub const HINT_IDLE_TIMER_DISABLED: &str = "SDL_IOS_IDLE_TIMER_DISABLED";
pub const HINT_ORIENTATIONS: &str = "SDL_IOS_ORIENTATIONS";
pub const HINT_ACCELEROMETER_AS_JOYSTICK: &str = "SDL_ACCELEROMETER_AS_JOYSTICK";
pub const HINT_XINPUT_ENABLED: &str = "SDL_XINPUT_ENABLED";
pub const HINT_XINPUT_USE_OLD_JOYSTICK_MAPPING: &str = "SDL_XINPUT_USE_OLD_JOYSTICK_MAPPING";
pub const HINT_GAMECONTROLLERCONFIG: &str = "SDL_GAMECONTROLLERCONFIG";
pub const HINT_GAMECONTROLLER_IGNORE_DEVICES: &str = "SDL_GAMECONTROLLER_IGNORE_DEVICES";
pub const HINT_GAMECONTROLLER_IGNORE_DEVICES_EXCEPT: &str =
    "SDL_GAMECONTROLLER_IGNORE_DEVICES_EXCEPT";
pub const HINT_JOYSTICK_ALLOW_BACKGROUND_EVENTS: &str = "SDL_JOYSTICK_ALLOW_BACKGROUND_EVENTS";
pub const HINT_JOYSTICK_HIDAPI: &str = "SDL_JOYSTICK_HIDAPI";
pub const HINT_ENABLE_STEAM_CONTROLLERS: &str = "SDL_ENABLE_STEAM_CONTROLLERS";
pub const HINT_ALLOW_TOPMOST: &str = "SDL_ALLOW_TOPMOST";
pub const HINT_TIMER_RESOLUTION: &str = "SDL_TIMER_RESOLUTION";
pub const HINT_QTWAYLAND_CONTENT_ORIENTATION: &str = "SDL_QTWAYLAND_CONTENT_ORIENTATION";
pub const HINT_QTWAYLAND_WINDOW_FLAGS: &str = "SDL_QTWAYLAND_WINDOW_FLAGS";
pub const HINT_THREAD_STACK_SIZE: &str = "SDL_THREAD_STACK_SIZE";
pub const HINT_VIDEO_HIGHDPI_DISABLED: &str = "SDL_VIDEO_HIGHDPI_DISABLED";
pub const HINT_MAC_CTRL_CLICK_EMULATE_RIGHT_CLICK: &str = "SDL_MAC_CTRL_CLICK_EMULATE_RIGHT_CLICK";
pub const HINT_VIDEO_WIN_D3DCOMPILER: &str = "SDL_VIDEO_WIN_D3DCOMPILER";
pub const HINT_VIDEO_WINDOW_SHARE_PIXEL_FORMAT: &str = "SDL_VIDEO_WINDOW_SHARE_PIXEL_FORMAT";
pub const HINT_WINRT_PRIVACY_POLICY_URL: &str = "SDL_WINRT_PRIVACY_POLICY_URL";
pub const HINT_WINRT_PRIVACY_POLICY_LABEL: &str = "SDL_WINRT_PRIVACY_POLICY_LABEL";
pub const HINT_WINRT_HANDLE_BACK_BUTTON: &str = "SDL_WINRT_HANDLE_BACK_BUTTON";
pub const HINT_VIDEO_MAC_FULLSCREEN_SPACES: &str = "SDL_VIDEO_MAC_FULLSCREEN_SPACES";
pub const HINT_MAC_BACKGROUND_APP: &str = "SDL_MAC_BACKGROUND_APP";
pub const HINT_ANDROID_APK_EXPANSION_MAIN_FILE_VERSION: &str =
    "SDL_ANDROID_APK_EXPANSION_MAIN_FILE_VERSION";
pub const HINT_ANDROID_APK_EXPANSION_PATCH_FILE_VERSION: &str =
    "SDL_ANDROID_APK_EXPANSION_PATCH_FILE_VERSION";
pub const HINT_IME_INTERNAL_EDITING: &str = "SDL_IME_INTERNAL_EDITING";
pub const HINT_ANDROID_TRAP_BACK_BUTTON: &str = "SDL_ANDROID_TRAP_BACK_BUTTON";
pub const HINT_EMSCRIPTEN_KEYBOARD_ELEMENT: &str = "SDL_EMSCRIPTEN_KEYBOARD_ELEMENT";
pub const HINT_NO_SIGNAL_HANDLERS: &str = "SDL_NO_SIGNAL_HANDLERS";
pub const HINT_WINDOWS_NO_CLOSE_ON_ALT_F4_LEGACY: &str = HINT_WINDOWS_NO_CLOSE_ON_ALT_F4;
pub const HINT_BMP_SAVE_LEGACY_FORMAT: &str = "SDL_BMP_SAVE_LEGACY_FORMAT";
pub const HINT_WINDOWS_DISABLE_THREAD_NAMING: &str = "SDL_WINDOWS_DISABLE_THREAD_NAMING";
pub const HINT_RPI_VIDEO_LAYER: &str = "SDL_RPI_VIDEO_LAYER";
pub const HINT_AUDIO_RESAMPLING_MODE: &str = "SDL_AUDIO_RESAMPLING_MODE";
pub const HINT_AUDIO_CATEGORY: &str = "SDL_AUDIO_CATEGORY";
pub const HINT_OPENGL_ES_DRIVER: &str = "SDL_OPENGL_ES_DRIVER";
pub const HINT_VIDEO_DOUBLE_BUFFER: &str = "SDL_VIDEO_DOUBLE_BUFFER";
pub const HINT_VIDEO_EXTERNAL_CONTEXT: &str = "SDL_VIDEO_EXTERNAL_CONTEXT";

pub const AUDIO_MASK_BITSIZE: AudioFormat = 0xFF;
pub const AUDIO_MASK_DATATYPE: AudioFormat = 1 << 8;
pub const AUDIO_MASK_ENDIAN: AudioFormat = 1 << 12;
pub const AUDIO_MASK_SIGNED: AudioFormat = 1 << 15;

#[cfg(target_endian = "little")]
pub const AUDIO_S16SYS: AudioFormat = AUDIO_S16LSB;
#[cfg(target_endian = "little")]
pub const AUDIO_U16SYS: AudioFormat = AUDIO_U16LSB;
#[cfg(target_endian = "little")]
pub const AUDIO_S32SYS: AudioFormat = AUDIO_S32LSB;
#[cfg(target_endian = "little")]
pub const AUDIO_F32SYS: AudioFormat = AUDIO_F32LSB;
#[cfg(target_endian = "big")]
pub const AUDIO_S16SYS: AudioFormat = AUDIO_S16MSB;
#[cfg(target_endian = "big")]
pub const AUDIO_U16SYS: AudioFormat = AUDIO_U16MSB;
#[cfg(target_endian = "big")]
pub const AUDIO_S32SYS: AudioFormat = AUDIO_S32MSB;
#[cfg(target_endian = "big")]
pub const AUDIO_F32SYS: AudioFormat = AUDIO_F32MSB;

pub const BLENDOPERATION_ADD: i32 = 0x1;
pub const BLENDOPERATION_SUBTRACT: i32 = 0x2;
pub const BLENDOPERATION_REV_SUBTRACT: i32 = 0x3;
pub const BLENDOPERATION_MINIMUM: i32 = 0x4;
pub const BLENDOPERATION_MAXIMUM: i32 = 0x5;

pub const BLENDFACTOR_ZERO: i32 = 0x1;
pub const BLENDFACTOR_ONE: i32 = 0x2;
pub const BLENDFACTOR_SRC_COLOR: i32 = 0x3;
pub const BLENDFACTOR_ONE_MINUS_SRC_COLOR: i32 = 0x4;
pub const BLENDFACTOR_SRC_ALPHA: i32 = 0x5;
pub const BLENDFACTOR_ONE_MINUS_SRC_ALPHA: i32 = 0x6;
pub const BLENDFACTOR_DST_COLOR: i32 = 0x7;
pub const BLENDFACTOR_ONE_MINUS_DST_COLOR: i32 = 0x8;
pub const BLENDFACTOR_DST_ALPHA: i32 = 0x9;
pub const BLENDFACTOR_ONE_MINUS_DST_ALPHA: i32 = 0xA;

pub const GL_CONTEXT_DEBUG_FLAG: i32 = 0x0001;
pub const GL_CONTEXT_FORWARD_COMPATIBLE_FLAG: i32 = 0x0002;
pub const GL_CONTEXT_ROBUST_ACCESS_FLAG: i32 = 0x0004;
pub const GL_CONTEXT_RESET_ISOLATION_FLAG: i32 = 0x0008;

pub const LIL_ENDIAN: i32 = 1234;
pub const BIG_ENDIAN: i32 = 4321;

pub const ENOMEM: i32 = 0;
pub const EFREAD: i32 = 1;
pub const EFWRITE: i32 = 2;
pub const EFSEEK: i32 = 3;
pub const UNSUPPORTED: i32 = 4;
