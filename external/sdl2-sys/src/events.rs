use std::ffi::{c_char, c_void};

use crate::{FingerID, GestureID, JoystickID, Keysym, SysWMmsg, TouchID};

/// Leading tag of every event record. Kept open since applications register
/// their own codes above [`EventType::USEREVENT`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct EventType(pub u32);

impl EventType {
    pub const FIRSTEVENT: Self = Self(0);

    pub const QUIT: Self = Self(0x100);
    pub const APP_TERMINATING: Self = Self(0x101);
    pub const APP_LOWMEMORY: Self = Self(0x102);
    pub const APP_WILLENTERBACKGROUND: Self = Self(0x103);
    pub const APP_DIDENTERBACKGROUND: Self = Self(0x104);
    pub const APP_WILLENTERFOREGROUND: Self = Self(0x105);
    pub const APP_DIDENTERFOREGROUND: Self = Self(0x106);

    pub const DISPLAYEVENT: Self = Self(0x150);

    pub const WINDOWEVENT: Self = Self(0x200);
    pub const SYSWMEVENT: Self = Self(0x201);

    pub const KEYDOWN: Self = Self(0x300);
    pub const KEYUP: Self = Self(0x301);
    pub const TEXTEDITING: Self = Self(0x302);
    pub const TEXTINPUT: Self = Self(0x303);
    pub const KEYMAPCHANGED: Self = Self(0x304);

    pub const MOUSEMOTION: Self = Self(0x400);
    pub const MOUSEBUTTONDOWN: Self = Self(0x401);
    pub const MOUSEBUTTONUP: Self = Self(0x402);
    pub const MOUSEWHEEL: Self = Self(0x403);

    pub const JOYAXISMOTION: Self = Self(0x600);
    pub const JOYBALLMOTION: Self = Self(0x601);
    pub const JOYHATMOTION: Self = Self(0x602);
    pub const JOYBUTTONDOWN: Self = Self(0x603);
    pub const JOYBUTTONUP: Self = Self(0x604);
    pub const JOYDEVICEADDED: Self = Self(0x605);
    pub const JOYDEVICEREMOVED: Self = Self(0x606);

    pub const CONTROLLERAXISMOTION: Self = Self(0x650);
    pub const CONTROLLERBUTTONDOWN: Self = Self(0x651);
    pub const CONTROLLERBUTTONUP: Self = Self(0x652);
    pub const CONTROLLERDEVICEADDED: Self = Self(0x653);
    pub const CONTROLLERDEVICEREMOVED: Self = Self(0x654);
    pub const CONTROLLERDEVICEREMAPPED: Self = Self(0x655);

    pub const FINGERDOWN: Self = Self(0x700);
    pub const FINGERUP: Self = Self(0x701);
    pub const FINGERMOTION: Self = Self(0x702);

    pub const DOLLARGESTURE: Self = Self(0x800);
    pub const DOLLARRECORD: Self = Self(0x801);
    pub const MULTIGESTURE: Self = Self(0x802);

    pub const CLIPBOARDUPDATE: Self = Self(0x900);

    pub const DROPFILE: Self = Self(0x1000);
    pub const DROPTEXT: Self = Self(0x1001);
    pub const DROPBEGIN: Self = Self(0x1002);
    pub const DROPCOMPLETE: Self = Self(0x1003);

    pub const AUDIODEVICEADDED: Self = Self(0x1100);
    pub const AUDIODEVICEREMOVED: Self = Self(0x1101);

    pub const SENSORUPDATE: Self = Self(0x1200);

    pub const RENDER_TARGETS_RESET: Self = Self(0x2000);
    pub const RENDER_DEVICE_RESET: Self = Self(0x2001);

    pub const USEREVENT: Self = Self(0x8000);
    pub const LASTEVENT: Self = Self(0xFFFF);
}

pub const WINDOWEVENT_NONE: u8 = 0;
pub const WINDOWEVENT_SHOWN: u8 = 1;
pub const WINDOWEVENT_HIDDEN: u8 = 2;
pub const WINDOWEVENT_EXPOSED: u8 = 3;
pub const WINDOWEVENT_MOVED: u8 = 4;
pub const WINDOWEVENT_RESIZED: u8 = 5;
pub const WINDOWEVENT_SIZE_CHANGED: u8 = 6;
pub const WINDOWEVENT_MINIMIZED: u8 = 7;
pub const WINDOWEVENT_MAXIMIZED: u8 = 8;
pub const WINDOWEVENT_RESTORED: u8 = 9;
pub const WINDOWEVENT_ENTER: u8 = 10;
pub const WINDOWEVENT_LEAVE: u8 = 11;
pub const WINDOWEVENT_FOCUS_GAINED: u8 = 12;
pub const WINDOWEVENT_FOCUS_LOST: u8 = 13;
pub const WINDOWEVENT_CLOSE: u8 = 14;
pub const WINDOWEVENT_TAKE_FOCUS: u8 = 15;
pub const WINDOWEVENT_HIT_TEST: u8 = 16;

pub const DISPLAYEVENT_NONE: u8 = 0;
pub const DISPLAYEVENT_ORIENTATION: u8 = 1;

pub const TEXTEDITINGEVENT_TEXT_SIZE: usize = 32;
pub const TEXTINPUTEVENT_TEXT_SIZE: usize = 32;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct CommonEvent {
    pub r#type: u32,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DisplayEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub display: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct WindowEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
    pub data2: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct KeyboardEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub keysym: Keysym,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TextEditingEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [c_char; TEXTEDITINGEVENT_TEXT_SIZE],
    pub start: i32,
    pub length: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TextInputEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub text: [c_char; TEXTINPUTEVENT_TEXT_SIZE],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseMotionEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseButtonEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MouseWheelEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyAxisEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyBallEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub ball: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyHatEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub hat: u8,
    pub value: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyButtonEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct JoyDeviceEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerAxisEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerButtonEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: JoystickID,
    pub button: u8,
    pub state: u8,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ControllerDeviceEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: i32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AudioDeviceEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: u32,
    pub iscapture: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SensorEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub which: i32,
    pub data: [f32; 6],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct QuitEvent {
    pub r#type: u32,
    pub timestamp: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct UserEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SysWMEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub msg: *mut SysWMmsg,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct TouchFingerEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub finger_id: FingerID,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct MultiGestureEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub d_theta: f32,
    pub d_dist: f32,
    pub x: f32,
    pub y: f32,
    pub num_fingers: u16,
    pub padding: u16,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DollarGestureEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub touch_id: TouchID,
    pub gesture_id: GestureID,
    pub num_fingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct DropEvent {
    pub r#type: u32,
    pub timestamp: u32,
    pub file: *mut c_char,
    pub window_id: u32,
}

pub const EVENT_SIZE: usize = 56;

#[repr(C)]
#[derive(Clone, Copy)]
pub union Event {
    pub r#type: u32,
    pub common: CommonEvent,
    pub display: DisplayEvent,
    pub window: WindowEvent,
    pub key: KeyboardEvent,
    pub edit: TextEditingEvent,
    pub text: TextInputEvent,
    pub motion: MouseMotionEvent,
    pub button: MouseButtonEvent,
    pub wheel: MouseWheelEvent,
    pub jaxis: JoyAxisEvent,
    pub jball: JoyBallEvent,
    pub jhat: JoyHatEvent,
    pub jbutton: JoyButtonEvent,
    pub jdevice: JoyDeviceEvent,
    pub caxis: ControllerAxisEvent,
    pub cbutton: ControllerButtonEvent,
    pub cdevice: ControllerDeviceEvent,
    pub adevice: AudioDeviceEvent,
    pub sensor: SensorEvent,
    pub quit: QuitEvent,
    pub user: UserEvent,
    pub syswm: SysWMEvent,
    pub tfinger: TouchFingerEvent,
    pub mgesture: MultiGestureEvent,
    pub dgesture: DollarGestureEvent,
    pub r#drop: DropEvent,
    pub padding: [u8; EVENT_SIZE],
}

impl Default for Event {
    fn default() -> Self {
        Self {
            padding: [0; EVENT_SIZE],
        }
    }
}

const _: () = assert!(std::mem::size_of::<Event>() == EVENT_SIZE);

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    #[test]
    fn event_layout() {
        assert_eq!(offset_of!(KeyboardEvent, keysym), 16);
        assert_eq!(size_of::<KeyboardEvent>(), 32);
        assert_eq!(offset_of!(TextEditingEvent, start), 44);
        assert_eq!(size_of::<TextInputEvent>(), 44);
        assert_eq!(size_of::<MouseMotionEvent>(), 36);
        assert_eq!(offset_of!(MouseWheelEvent, direction), 24);
        assert_eq!(offset_of!(JoyAxisEvent, value), 16);
        assert_eq!(offset_of!(JoyBallEvent, yrel), 18);
        assert_eq!(offset_of!(ControllerAxisEvent, value), 16);
        assert_eq!(offset_of!(SensorEvent, data), 12);
        assert_eq!(offset_of!(TouchFingerEvent, touch_id), 8);
        assert_eq!(offset_of!(TouchFingerEvent, pressure), 40);
        assert_eq!(offset_of!(MultiGestureEvent, num_fingers), 32);
        assert_eq!(offset_of!(DollarGestureEvent, y), 36);
        assert_eq!(offset_of!(SysWMEvent, msg), 8);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pointer_event_layout() {
        assert_eq!(offset_of!(UserEvent, data1), 16);
        assert_eq!(offset_of!(UserEvent, data2), 24);
        assert_eq!(offset_of!(DropEvent, window_id), 16);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn pointer_event_layout() {
        assert_eq!(offset_of!(UserEvent, data1), 16);
        assert_eq!(offset_of!(UserEvent, data2), 20);
        assert_eq!(offset_of!(DropEvent, window_id), 12);
    }
}
