//! The native event record as a Rust enum.
//!
//! Every record is [`sys::EVENT_SIZE`] bytes led by a 32-bit tag. Decoding
//! reads each field at the offset the native struct puts it, so the same
//! code serves both pointer widths; 64-bit ids go through [`crate::abi`].

use std::{
    ffi::{c_char, c_void, CStr},
    mem::offset_of,
};

use sdl2_sys as sys;
use sys::{EventType, EVENT_SIZE};

use crate::{
    abi::{self, NativeWord},
    Error, Result,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DisplayEvent {
    pub timestamp: u32,
    pub display: u32,
    /// One of the `sys::DISPLAYEVENT_*` ids.
    pub event: u8,
    pub data1: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WindowEvent {
    pub timestamp: u32,
    pub window_id: u32,
    /// One of the `sys::WINDOWEVENT_*` ids.
    pub event: u8,
    pub data1: i32,
    pub data2: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SysWmEvent {
    pub timestamp: u32,
    /// Platform message, valid only while the event is being handled.
    pub msg: *mut sys::SysWMmsg,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct KeyboardEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub keysym: sys::Keysym,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TextEditingEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub text: String,
    pub start: i32,
    pub length: i32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TextInputEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MouseMotionEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MouseButtonEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MouseWheelEvent {
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct JoyAxisEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct JoyBallEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub ball: u8,
    pub xrel: i16,
    pub yrel: i16,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct JoyHatEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub hat: u8,
    pub value: u8,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct JoyButtonEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub button: u8,
    pub state: u8,
}

/// `which` is a device index when added, an instance id otherwise.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct JoyDeviceEvent {
    pub timestamp: u32,
    pub which: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ControllerAxisEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub axis: u8,
    pub value: i16,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ControllerButtonEvent {
    pub timestamp: u32,
    pub which: sys::JoystickID,
    pub button: u8,
    pub state: u8,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ControllerDeviceEvent {
    pub timestamp: u32,
    pub which: i32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TouchFingerEvent {
    pub timestamp: u32,
    pub touch_id: sys::TouchID,
    pub finger_id: sys::FingerID,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub pressure: f32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MultiGestureEvent {
    pub timestamp: u32,
    pub touch_id: sys::TouchID,
    pub d_theta: f32,
    pub d_dist: f32,
    pub x: f32,
    pub y: f32,
    pub num_fingers: u16,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DollarGestureEvent {
    pub timestamp: u32,
    pub touch_id: sys::TouchID,
    pub gesture_id: sys::GestureID,
    pub num_fingers: u32,
    pub error: f32,
    pub x: f32,
    pub y: f32,
}

/// The native record carries an allocated string; this carries a copy.
#[derive(Clone, PartialEq, Debug)]
pub struct DropEvent {
    pub timestamp: u32,
    pub file: Option<String>,
    pub window_id: u32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AudioDeviceEvent {
    pub timestamp: u32,
    pub which: u32,
    pub iscapture: bool,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SensorEvent {
    pub timestamp: u32,
    pub which: i32,
    pub data: [f32; 6],
}

/// An application defined event. The data pointers are opaque to the
/// binding and passed through untouched.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct UserEvent {
    pub kind: EventType,
    pub timestamp: u32,
    pub window_id: u32,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Event {
    Quit { timestamp: u32 },
    AppTerminating { timestamp: u32 },
    AppLowMemory { timestamp: u32 },
    AppWillEnterBackground { timestamp: u32 },
    AppDidEnterBackground { timestamp: u32 },
    AppWillEnterForeground { timestamp: u32 },
    AppDidEnterForeground { timestamp: u32 },
    Display(DisplayEvent),
    Window(WindowEvent),
    SysWm(SysWmEvent),
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
    TextEditing(TextEditingEvent),
    TextInput(TextInputEvent),
    KeymapChanged { timestamp: u32 },
    MouseMotion(MouseMotionEvent),
    MouseButtonDown(MouseButtonEvent),
    MouseButtonUp(MouseButtonEvent),
    MouseWheel(MouseWheelEvent),
    JoyAxisMotion(JoyAxisEvent),
    JoyBallMotion(JoyBallEvent),
    JoyHatMotion(JoyHatEvent),
    JoyButtonDown(JoyButtonEvent),
    JoyButtonUp(JoyButtonEvent),
    JoyDeviceAdded(JoyDeviceEvent),
    JoyDeviceRemoved(JoyDeviceEvent),
    ControllerAxisMotion(ControllerAxisEvent),
    ControllerButtonDown(ControllerButtonEvent),
    ControllerButtonUp(ControllerButtonEvent),
    ControllerDeviceAdded(ControllerDeviceEvent),
    ControllerDeviceRemoved(ControllerDeviceEvent),
    ControllerDeviceRemapped(ControllerDeviceEvent),
    FingerDown(TouchFingerEvent),
    FingerUp(TouchFingerEvent),
    FingerMotion(TouchFingerEvent),
    DollarGesture(DollarGestureEvent),
    DollarRecord(DollarGestureEvent),
    MultiGesture(MultiGestureEvent),
    ClipboardUpdate { timestamp: u32 },
    DropFile(DropEvent),
    DropText(DropEvent),
    DropBegin(DropEvent),
    DropComplete(DropEvent),
    AudioDeviceAdded(AudioDeviceEvent),
    AudioDeviceRemoved(AudioDeviceEvent),
    SensorUpdate(SensorEvent),
    RenderTargetsReset { timestamp: u32 },
    RenderDeviceReset { timestamp: u32 },
    User(UserEvent),
    /// A tag this binding does not know.
    Common { kind: EventType, timestamp: u32 },
}

// The only pointers carried are opaque tokens the binding never dereferences.
unsafe impl Send for Event {}

macro_rules! field {
    ($ty:ident, $field:ident) => {
        offset_of!(sys::$ty, $field)
    };
}

struct Reader<'a>(&'a [u8; EVENT_SIZE]);

impl Reader<'_> {
    fn bytes<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut bytes = [0; N];
        bytes.copy_from_slice(&self.0[offset..offset + N]);
        bytes
    }

    fn u8(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    fn i16(&self, offset: usize) -> i16 {
        i16::from_ne_bytes(self.bytes(offset))
    }

    fn u16(&self, offset: usize) -> u16 {
        u16::from_ne_bytes(self.bytes(offset))
    }

    fn u32(&self, offset: usize) -> u32 {
        u32::from_ne_bytes(self.bytes(offset))
    }

    fn i32(&self, offset: usize) -> i32 {
        i32::from_ne_bytes(self.bytes(offset))
    }

    fn f32(&self, offset: usize) -> f32 {
        f32::from_ne_bytes(self.bytes(offset))
    }

    fn i64(&self, offset: usize) -> i64 {
        abi::load_i64::<NativeWord>(&self.0[offset..offset + 8])
    }

    fn ptr<T>(&self, offset: usize) -> *mut T {
        usize::from_ne_bytes(self.bytes(offset)) as *mut T
    }

    /// Fixed-size text field, up to the first nul.
    fn text(&self, offset: usize, size: usize) -> String {
        let field = &self.0[offset..offset + size];
        let len = memchr::memchr(0, field).unwrap_or(size);
        String::from_utf8_lossy(&field[..len]).into_owned()
    }
}

struct Writer([u8; EVENT_SIZE]);

impl Writer {
    fn new(kind: EventType, timestamp: u32) -> Self {
        let mut writer = Self([0; EVENT_SIZE]);
        writer.u32(field!(CommonEvent, r#type), kind.0);
        writer.u32(field!(CommonEvent, timestamp), timestamp);
        writer
    }

    fn put(&mut self, offset: usize, bytes: &[u8]) {
        self.0[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    fn u8(&mut self, offset: usize, value: u8) {
        self.0[offset] = value;
    }

    fn i16(&mut self, offset: usize, value: i16) {
        self.put(offset, &value.to_ne_bytes())
    }

    fn u16(&mut self, offset: usize, value: u16) {
        self.put(offset, &value.to_ne_bytes())
    }

    fn u32(&mut self, offset: usize, value: u32) {
        self.put(offset, &value.to_ne_bytes())
    }

    fn i32(&mut self, offset: usize, value: i32) {
        self.put(offset, &value.to_ne_bytes())
    }

    fn f32(&mut self, offset: usize, value: f32) {
        self.put(offset, &value.to_ne_bytes())
    }

    fn i64(&mut self, offset: usize, value: i64) {
        abi::store_i64::<NativeWord>(&mut self.0[offset..offset + 8], value)
    }

    fn ptr<T>(&mut self, offset: usize, value: *mut T) {
        self.put(offset, &(value as usize).to_ne_bytes())
    }

    fn text(&mut self, offset: usize, size: usize, text: &str) -> Result<()> {
        // Room for the terminator, and no interior nul to truncate at.
        if text.len() >= size || memchr::memchr(0, text.as_bytes()).is_some() {
            return Err(Error::InvalidParameters);
        }
        self.put(offset, text.as_bytes());
        Ok(())
    }
}

impl Event {
    /// Decode a raw event record.
    ///
    /// # Safety
    ///
    /// For drop events the `file` field must be null or point to a nul
    /// terminated string.
    pub unsafe fn decode(bytes: &[u8; EVENT_SIZE]) -> Event {
        let r = Reader(bytes);
        let kind = EventType(r.u32(field!(CommonEvent, r#type)));
        let timestamp = r.u32(field!(CommonEvent, timestamp));

        match kind {
            EventType::QUIT => Event::Quit { timestamp },
            EventType::APP_TERMINATING => Event::AppTerminating { timestamp },
            EventType::APP_LOWMEMORY => Event::AppLowMemory { timestamp },
            EventType::APP_WILLENTERBACKGROUND => Event::AppWillEnterBackground { timestamp },
            EventType::APP_DIDENTERBACKGROUND => Event::AppDidEnterBackground { timestamp },
            EventType::APP_WILLENTERFOREGROUND => Event::AppWillEnterForeground { timestamp },
            EventType::APP_DIDENTERFOREGROUND => Event::AppDidEnterForeground { timestamp },

            EventType::DISPLAYEVENT => Event::Display(DisplayEvent {
                timestamp,
                display: r.u32(field!(DisplayEvent, display)),
                event: r.u8(field!(DisplayEvent, event)),
                data1: r.i32(field!(DisplayEvent, data1)),
            }),

            EventType::WINDOWEVENT => Event::Window(WindowEvent {
                timestamp,
                window_id: r.u32(field!(WindowEvent, window_id)),
                event: r.u8(field!(WindowEvent, event)),
                data1: r.i32(field!(WindowEvent, data1)),
                data2: r.i32(field!(WindowEvent, data2)),
            }),

            EventType::SYSWMEVENT => Event::SysWm(SysWmEvent {
                timestamp,
                msg: r.ptr(field!(SysWMEvent, msg)),
            }),

            EventType::KEYDOWN | EventType::KEYUP => {
                let keysym = field!(KeyboardEvent, keysym);
                let key = KeyboardEvent {
                    timestamp,
                    window_id: r.u32(field!(KeyboardEvent, window_id)),
                    state: r.u8(field!(KeyboardEvent, state)),
                    repeat: r.u8(field!(KeyboardEvent, repeat)),
                    keysym: sys::Keysym {
                        scancode: sys::Scancode(r.i32(keysym + offset_of!(sys::Keysym, scancode))),
                        sym: sys::Keycode(r.i32(keysym + offset_of!(sys::Keysym, sym))),
                        modifiers: sys::Keymod(r.u16(keysym + offset_of!(sys::Keysym, modifiers))),
                        unused: r.u32(keysym + offset_of!(sys::Keysym, unused)),
                    },
                };
                match kind {
                    EventType::KEYDOWN => Event::KeyDown(key),
                    _ => Event::KeyUp(key),
                }
            }

            EventType::TEXTEDITING => Event::TextEditing(TextEditingEvent {
                timestamp,
                window_id: r.u32(field!(TextEditingEvent, window_id)),
                text: r.text(field!(TextEditingEvent, text), sys::TEXTEDITINGEVENT_TEXT_SIZE),
                start: r.i32(field!(TextEditingEvent, start)),
                length: r.i32(field!(TextEditingEvent, length)),
            }),

            EventType::TEXTINPUT => Event::TextInput(TextInputEvent {
                timestamp,
                window_id: r.u32(field!(TextInputEvent, window_id)),
                text: r.text(field!(TextInputEvent, text), sys::TEXTINPUTEVENT_TEXT_SIZE),
            }),

            EventType::KEYMAPCHANGED => Event::KeymapChanged { timestamp },

            EventType::MOUSEMOTION => Event::MouseMotion(MouseMotionEvent {
                timestamp,
                window_id: r.u32(field!(MouseMotionEvent, window_id)),
                which: r.u32(field!(MouseMotionEvent, which)),
                state: r.u32(field!(MouseMotionEvent, state)),
                x: r.i32(field!(MouseMotionEvent, x)),
                y: r.i32(field!(MouseMotionEvent, y)),
                xrel: r.i32(field!(MouseMotionEvent, xrel)),
                yrel: r.i32(field!(MouseMotionEvent, yrel)),
            }),

            EventType::MOUSEBUTTONDOWN | EventType::MOUSEBUTTONUP => {
                let button = MouseButtonEvent {
                    timestamp,
                    window_id: r.u32(field!(MouseButtonEvent, window_id)),
                    which: r.u32(field!(MouseButtonEvent, which)),
                    button: r.u8(field!(MouseButtonEvent, button)),
                    state: r.u8(field!(MouseButtonEvent, state)),
                    clicks: r.u8(field!(MouseButtonEvent, clicks)),
                    x: r.i32(field!(MouseButtonEvent, x)),
                    y: r.i32(field!(MouseButtonEvent, y)),
                };
                match kind {
                    EventType::MOUSEBUTTONDOWN => Event::MouseButtonDown(button),
                    _ => Event::MouseButtonUp(button),
                }
            }

            EventType::MOUSEWHEEL => Event::MouseWheel(MouseWheelEvent {
                timestamp,
                window_id: r.u32(field!(MouseWheelEvent, window_id)),
                which: r.u32(field!(MouseWheelEvent, which)),
                x: r.i32(field!(MouseWheelEvent, x)),
                y: r.i32(field!(MouseWheelEvent, y)),
                direction: r.u32(field!(MouseWheelEvent, direction)),
            }),

            EventType::JOYAXISMOTION => Event::JoyAxisMotion(JoyAxisEvent {
                timestamp,
                which: r.i32(field!(JoyAxisEvent, which)),
                axis: r.u8(field!(JoyAxisEvent, axis)),
                value: r.i16(field!(JoyAxisEvent, value)),
            }),

            EventType::JOYBALLMOTION => Event::JoyBallMotion(JoyBallEvent {
                timestamp,
                which: r.i32(field!(JoyBallEvent, which)),
                ball: r.u8(field!(JoyBallEvent, ball)),
                xrel: r.i16(field!(JoyBallEvent, xrel)),
                yrel: r.i16(field!(JoyBallEvent, yrel)),
            }),

            EventType::JOYHATMOTION => Event::JoyHatMotion(JoyHatEvent {
                timestamp,
                which: r.i32(field!(JoyHatEvent, which)),
                hat: r.u8(field!(JoyHatEvent, hat)),
                value: r.u8(field!(JoyHatEvent, value)),
            }),

            EventType::JOYBUTTONDOWN | EventType::JOYBUTTONUP => {
                let button = JoyButtonEvent {
                    timestamp,
                    which: r.i32(field!(JoyButtonEvent, which)),
                    button: r.u8(field!(JoyButtonEvent, button)),
                    state: r.u8(field!(JoyButtonEvent, state)),
                };
                match kind {
                    EventType::JOYBUTTONDOWN => Event::JoyButtonDown(button),
                    _ => Event::JoyButtonUp(button),
                }
            }

            EventType::JOYDEVICEADDED | EventType::JOYDEVICEREMOVED => {
                let device = JoyDeviceEvent {
                    timestamp,
                    which: r.i32(field!(JoyDeviceEvent, which)),
                };
                match kind {
                    EventType::JOYDEVICEADDED => Event::JoyDeviceAdded(device),
                    _ => Event::JoyDeviceRemoved(device),
                }
            }

            EventType::CONTROLLERAXISMOTION => Event::ControllerAxisMotion(ControllerAxisEvent {
                timestamp,
                which: r.i32(field!(ControllerAxisEvent, which)),
                axis: r.u8(field!(ControllerAxisEvent, axis)),
                value: r.i16(field!(ControllerAxisEvent, value)),
            }),

            EventType::CONTROLLERBUTTONDOWN | EventType::CONTROLLERBUTTONUP => {
                let button = ControllerButtonEvent {
                    timestamp,
                    which: r.i32(field!(ControllerButtonEvent, which)),
                    button: r.u8(field!(ControllerButtonEvent, button)),
                    state: r.u8(field!(ControllerButtonEvent, state)),
                };
                match kind {
                    EventType::CONTROLLERBUTTONDOWN => Event::ControllerButtonDown(button),
                    _ => Event::ControllerButtonUp(button),
                }
            }

            EventType::CONTROLLERDEVICEADDED
            | EventType::CONTROLLERDEVICEREMOVED
            | EventType::CONTROLLERDEVICEREMAPPED => {
                let device = ControllerDeviceEvent {
                    timestamp,
                    which: r.i32(field!(ControllerDeviceEvent, which)),
                };
                match kind {
                    EventType::CONTROLLERDEVICEADDED => Event::ControllerDeviceAdded(device),
                    EventType::CONTROLLERDEVICEREMOVED => Event::ControllerDeviceRemoved(device),
                    _ => Event::ControllerDeviceRemapped(device),
                }
            }

            EventType::FINGERDOWN | EventType::FINGERUP | EventType::FINGERMOTION => {
                let finger = TouchFingerEvent {
                    timestamp,
                    touch_id: r.i64(field!(TouchFingerEvent, touch_id)),
                    finger_id: r.i64(field!(TouchFingerEvent, finger_id)),
                    x: r.f32(field!(TouchFingerEvent, x)),
                    y: r.f32(field!(TouchFingerEvent, y)),
                    dx: r.f32(field!(TouchFingerEvent, dx)),
                    dy: r.f32(field!(TouchFingerEvent, dy)),
                    pressure: r.f32(field!(TouchFingerEvent, pressure)),
                };
                match kind {
                    EventType::FINGERDOWN => Event::FingerDown(finger),
                    EventType::FINGERUP => Event::FingerUp(finger),
                    _ => Event::FingerMotion(finger),
                }
            }

            EventType::DOLLARGESTURE | EventType::DOLLARRECORD => {
                let gesture = DollarGestureEvent {
                    timestamp,
                    touch_id: r.i64(field!(DollarGestureEvent, touch_id)),
                    gesture_id: r.i64(field!(DollarGestureEvent, gesture_id)),
                    num_fingers: r.u32(field!(DollarGestureEvent, num_fingers)),
                    error: r.f32(field!(DollarGestureEvent, error)),
                    x: r.f32(field!(DollarGestureEvent, x)),
                    y: r.f32(field!(DollarGestureEvent, y)),
                };
                match kind {
                    EventType::DOLLARGESTURE => Event::DollarGesture(gesture),
                    _ => Event::DollarRecord(gesture),
                }
            }

            EventType::MULTIGESTURE => Event::MultiGesture(MultiGestureEvent {
                timestamp,
                touch_id: r.i64(field!(MultiGestureEvent, touch_id)),
                d_theta: r.f32(field!(MultiGestureEvent, d_theta)),
                d_dist: r.f32(field!(MultiGestureEvent, d_dist)),
                x: r.f32(field!(MultiGestureEvent, x)),
                y: r.f32(field!(MultiGestureEvent, y)),
                num_fingers: r.u16(field!(MultiGestureEvent, num_fingers)),
            }),

            EventType::CLIPBOARDUPDATE => Event::ClipboardUpdate { timestamp },

            EventType::DROPFILE
            | EventType::DROPTEXT
            | EventType::DROPBEGIN
            | EventType::DROPCOMPLETE => {
                let file = r.ptr::<c_char>(field!(DropEvent, file));
                let drop = DropEvent {
                    timestamp,
                    file: crate::opt_string(file),
                    window_id: r.u32(field!(DropEvent, window_id)),
                };
                match kind {
                    EventType::DROPFILE => Event::DropFile(drop),
                    EventType::DROPTEXT => Event::DropText(drop),
                    EventType::DROPBEGIN => Event::DropBegin(drop),
                    _ => Event::DropComplete(drop),
                }
            }

            EventType::AUDIODEVICEADDED | EventType::AUDIODEVICEREMOVED => {
                let device = AudioDeviceEvent {
                    timestamp,
                    which: r.u32(field!(AudioDeviceEvent, which)),
                    iscapture: r.u8(field!(AudioDeviceEvent, iscapture)) != 0,
                };
                match kind {
                    EventType::AUDIODEVICEADDED => Event::AudioDeviceAdded(device),
                    _ => Event::AudioDeviceRemoved(device),
                }
            }

            EventType::SENSORUPDATE => {
                let data = field!(SensorEvent, data);
                Event::SensorUpdate(SensorEvent {
                    timestamp,
                    which: r.i32(field!(SensorEvent, which)),
                    data: std::array::from_fn(|i| r.f32(data + i * 4)),
                })
            }

            EventType::RENDER_TARGETS_RESET => Event::RenderTargetsReset { timestamp },
            EventType::RENDER_DEVICE_RESET => Event::RenderDeviceReset { timestamp },

            kind if kind >= EventType::USEREVENT && kind < EventType::LASTEVENT => {
                Event::User(UserEvent {
                    kind,
                    timestamp,
                    window_id: r.u32(field!(UserEvent, window_id)),
                    code: r.i32(field!(UserEvent, code)),
                    data1: r.ptr(field!(UserEvent, data1)),
                    data2: r.ptr(field!(UserEvent, data2)),
                })
            }

            kind => Event::Common { kind, timestamp },
        }
    }

    /// # Safety
    ///
    /// Same contract as [`Event::decode`].
    pub(crate) unsafe fn from_native(event: &sys::Event) -> Event {
        Event::decode(&event.padding)
    }

    /// Build the native record for pushing back into the queue.
    ///
    /// Drop events own a native allocation and cannot be rebuilt; they and
    /// text that does not fit its fixed field return `InvalidParameters`.
    pub fn encode(&self) -> Result<[u8; EVENT_SIZE]> {
        let mut w = Writer::new(self.kind(), self.timestamp());

        match self {
            Event::Quit { .. }
            | Event::AppTerminating { .. }
            | Event::AppLowMemory { .. }
            | Event::AppWillEnterBackground { .. }
            | Event::AppDidEnterBackground { .. }
            | Event::AppWillEnterForeground { .. }
            | Event::AppDidEnterForeground { .. }
            | Event::KeymapChanged { .. }
            | Event::ClipboardUpdate { .. }
            | Event::RenderTargetsReset { .. }
            | Event::RenderDeviceReset { .. }
            | Event::Common { .. } => {}

            Event::Display(e) => {
                w.u32(field!(DisplayEvent, display), e.display);
                w.u8(field!(DisplayEvent, event), e.event);
                w.i32(field!(DisplayEvent, data1), e.data1);
            }

            Event::Window(e) => {
                w.u32(field!(WindowEvent, window_id), e.window_id);
                w.u8(field!(WindowEvent, event), e.event);
                w.i32(field!(WindowEvent, data1), e.data1);
                w.i32(field!(WindowEvent, data2), e.data2);
            }

            Event::SysWm(e) => w.ptr(field!(SysWMEvent, msg), e.msg),

            Event::KeyDown(e) | Event::KeyUp(e) => {
                let keysym = field!(KeyboardEvent, keysym);
                w.u32(field!(KeyboardEvent, window_id), e.window_id);
                w.u8(field!(KeyboardEvent, state), e.state);
                w.u8(field!(KeyboardEvent, repeat), e.repeat);
                w.i32(keysym + offset_of!(sys::Keysym, scancode), e.keysym.scancode.0);
                w.i32(keysym + offset_of!(sys::Keysym, sym), e.keysym.sym.0);
                w.u16(keysym + offset_of!(sys::Keysym, modifiers), e.keysym.modifiers.0);
                w.u32(keysym + offset_of!(sys::Keysym, unused), e.keysym.unused);
            }

            Event::TextEditing(e) => {
                w.u32(field!(TextEditingEvent, window_id), e.window_id);
                w.text(
                    field!(TextEditingEvent, text),
                    sys::TEXTEDITINGEVENT_TEXT_SIZE,
                    &e.text,
                )?;
                w.i32(field!(TextEditingEvent, start), e.start);
                w.i32(field!(TextEditingEvent, length), e.length);
            }

            Event::TextInput(e) => {
                w.u32(field!(TextInputEvent, window_id), e.window_id);
                w.text(
                    field!(TextInputEvent, text),
                    sys::TEXTINPUTEVENT_TEXT_SIZE,
                    &e.text,
                )?;
            }

            Event::MouseMotion(e) => {
                w.u32(field!(MouseMotionEvent, window_id), e.window_id);
                w.u32(field!(MouseMotionEvent, which), e.which);
                w.u32(field!(MouseMotionEvent, state), e.state);
                w.i32(field!(MouseMotionEvent, x), e.x);
                w.i32(field!(MouseMotionEvent, y), e.y);
                w.i32(field!(MouseMotionEvent, xrel), e.xrel);
                w.i32(field!(MouseMotionEvent, yrel), e.yrel);
            }

            Event::MouseButtonDown(e) | Event::MouseButtonUp(e) => {
                w.u32(field!(MouseButtonEvent, window_id), e.window_id);
                w.u32(field!(MouseButtonEvent, which), e.which);
                w.u8(field!(MouseButtonEvent, button), e.button);
                w.u8(field!(MouseButtonEvent, state), e.state);
                w.u8(field!(MouseButtonEvent, clicks), e.clicks);
                w.i32(field!(MouseButtonEvent, x), e.x);
                w.i32(field!(MouseButtonEvent, y), e.y);
            }

            Event::MouseWheel(e) => {
                w.u32(field!(MouseWheelEvent, window_id), e.window_id);
                w.u32(field!(MouseWheelEvent, which), e.which);
                w.i32(field!(MouseWheelEvent, x), e.x);
                w.i32(field!(MouseWheelEvent, y), e.y);
                w.u32(field!(MouseWheelEvent, direction), e.direction);
            }

            Event::JoyAxisMotion(e) => {
                w.i32(field!(JoyAxisEvent, which), e.which);
                w.u8(field!(JoyAxisEvent, axis), e.axis);
                w.i16(field!(JoyAxisEvent, value), e.value);
            }

            Event::JoyBallMotion(e) => {
                w.i32(field!(JoyBallEvent, which), e.which);
                w.u8(field!(JoyBallEvent, ball), e.ball);
                w.i16(field!(JoyBallEvent, xrel), e.xrel);
                w.i16(field!(JoyBallEvent, yrel), e.yrel);
            }

            Event::JoyHatMotion(e) => {
                w.i32(field!(JoyHatEvent, which), e.which);
                w.u8(field!(JoyHatEvent, hat), e.hat);
                w.u8(field!(JoyHatEvent, value), e.value);
            }

            Event::JoyButtonDown(e) | Event::JoyButtonUp(e) => {
                w.i32(field!(JoyButtonEvent, which), e.which);
                w.u8(field!(JoyButtonEvent, button), e.button);
                w.u8(field!(JoyButtonEvent, state), e.state);
            }

            Event::JoyDeviceAdded(e) | Event::JoyDeviceRemoved(e) => {
                w.i32(field!(JoyDeviceEvent, which), e.which);
            }

            Event::ControllerAxisMotion(e) => {
                w.i32(field!(ControllerAxisEvent, which), e.which);
                w.u8(field!(ControllerAxisEvent, axis), e.axis);
                w.i16(field!(ControllerAxisEvent, value), e.value);
            }

            Event::ControllerButtonDown(e) | Event::ControllerButtonUp(e) => {
                w.i32(field!(ControllerButtonEvent, which), e.which);
                w.u8(field!(ControllerButtonEvent, button), e.button);
                w.u8(field!(ControllerButtonEvent, state), e.state);
            }

            Event::ControllerDeviceAdded(e)
            | Event::ControllerDeviceRemoved(e)
            | Event::ControllerDeviceRemapped(e) => {
                w.i32(field!(ControllerDeviceEvent, which), e.which);
            }

            Event::FingerDown(e) | Event::FingerUp(e) | Event::FingerMotion(e) => {
                w.i64(field!(TouchFingerEvent, touch_id), e.touch_id);
                w.i64(field!(TouchFingerEvent, finger_id), e.finger_id);
                w.f32(field!(TouchFingerEvent, x), e.x);
                w.f32(field!(TouchFingerEvent, y), e.y);
                w.f32(field!(TouchFingerEvent, dx), e.dx);
                w.f32(field!(TouchFingerEvent, dy), e.dy);
                w.f32(field!(TouchFingerEvent, pressure), e.pressure);
            }

            Event::DollarGesture(e) | Event::DollarRecord(e) => {
                w.i64(field!(DollarGestureEvent, touch_id), e.touch_id);
                w.i64(field!(DollarGestureEvent, gesture_id), e.gesture_id);
                w.u32(field!(DollarGestureEvent, num_fingers), e.num_fingers);
                w.f32(field!(DollarGestureEvent, error), e.error);
                w.f32(field!(DollarGestureEvent, x), e.x);
                w.f32(field!(DollarGestureEvent, y), e.y);
            }

            Event::MultiGesture(e) => {
                w.i64(field!(MultiGestureEvent, touch_id), e.touch_id);
                w.f32(field!(MultiGestureEvent, d_theta), e.d_theta);
                w.f32(field!(MultiGestureEvent, d_dist), e.d_dist);
                w.f32(field!(MultiGestureEvent, x), e.x);
                w.f32(field!(MultiGestureEvent, y), e.y);
                w.u16(field!(MultiGestureEvent, num_fingers), e.num_fingers);
            }

            Event::DropFile(_) | Event::DropText(_) | Event::DropBegin(_) | Event::DropComplete(_) => {
                return Err(Error::InvalidParameters)
            }

            Event::AudioDeviceAdded(e) | Event::AudioDeviceRemoved(e) => {
                w.u32(field!(AudioDeviceEvent, which), e.which);
                w.u8(field!(AudioDeviceEvent, iscapture), e.iscapture as u8);
            }

            Event::SensorUpdate(e) => {
                w.i32(field!(SensorEvent, which), e.which);
                let data = field!(SensorEvent, data);
                for (i, value) in e.data.iter().enumerate() {
                    w.f32(data + i * 4, *value);
                }
            }

            Event::User(e) => {
                w.u32(field!(UserEvent, window_id), e.window_id);
                w.i32(field!(UserEvent, code), e.code);
                w.ptr(field!(UserEvent, data1), e.data1);
                w.ptr(field!(UserEvent, data2), e.data2);
            }
        }

        Ok(w.0)
    }

    pub(crate) fn to_native(&self) -> Result<sys::Event> {
        Ok(sys::Event {
            padding: self.encode()?,
        })
    }

    pub fn kind(&self) -> EventType {
        match self {
            Event::Quit { .. } => EventType::QUIT,
            Event::AppTerminating { .. } => EventType::APP_TERMINATING,
            Event::AppLowMemory { .. } => EventType::APP_LOWMEMORY,
            Event::AppWillEnterBackground { .. } => EventType::APP_WILLENTERBACKGROUND,
            Event::AppDidEnterBackground { .. } => EventType::APP_DIDENTERBACKGROUND,
            Event::AppWillEnterForeground { .. } => EventType::APP_WILLENTERFOREGROUND,
            Event::AppDidEnterForeground { .. } => EventType::APP_DIDENTERFOREGROUND,
            Event::Display(_) => EventType::DISPLAYEVENT,
            Event::Window(_) => EventType::WINDOWEVENT,
            Event::SysWm(_) => EventType::SYSWMEVENT,
            Event::KeyDown(_) => EventType::KEYDOWN,
            Event::KeyUp(_) => EventType::KEYUP,
            Event::TextEditing(_) => EventType::TEXTEDITING,
            Event::TextInput(_) => EventType::TEXTINPUT,
            Event::KeymapChanged { .. } => EventType::KEYMAPCHANGED,
            Event::MouseMotion(_) => EventType::MOUSEMOTION,
            Event::MouseButtonDown(_) => EventType::MOUSEBUTTONDOWN,
            Event::MouseButtonUp(_) => EventType::MOUSEBUTTONUP,
            Event::MouseWheel(_) => EventType::MOUSEWHEEL,
            Event::JoyAxisMotion(_) => EventType::JOYAXISMOTION,
            Event::JoyBallMotion(_) => EventType::JOYBALLMOTION,
            Event::JoyHatMotion(_) => EventType::JOYHATMOTION,
            Event::JoyButtonDown(_) => EventType::JOYBUTTONDOWN,
            Event::JoyButtonUp(_) => EventType::JOYBUTTONUP,
            Event::JoyDeviceAdded(_) => EventType::JOYDEVICEADDED,
            Event::JoyDeviceRemoved(_) => EventType::JOYDEVICEREMOVED,
            Event::ControllerAxisMotion(_) => EventType::CONTROLLERAXISMOTION,
            Event::ControllerButtonDown(_) => EventType::CONTROLLERBUTTONDOWN,
            Event::ControllerButtonUp(_) => EventType::CONTROLLERBUTTONUP,
            Event::ControllerDeviceAdded(_) => EventType::CONTROLLERDEVICEADDED,
            Event::ControllerDeviceRemoved(_) => EventType::CONTROLLERDEVICEREMOVED,
            Event::ControllerDeviceRemapped(_) => EventType::CONTROLLERDEVICEREMAPPED,
            Event::FingerDown(_) => EventType::FINGERDOWN,
            Event::FingerUp(_) => EventType::FINGERUP,
            Event::FingerMotion(_) => EventType::FINGERMOTION,
            Event::DollarGesture(_) => EventType::DOLLARGESTURE,
            Event::DollarRecord(_) => EventType::DOLLARRECORD,
            Event::MultiGesture(_) => EventType::MULTIGESTURE,
            Event::ClipboardUpdate { .. } => EventType::CLIPBOARDUPDATE,
            Event::DropFile(_) => EventType::DROPFILE,
            Event::DropText(_) => EventType::DROPTEXT,
            Event::DropBegin(_) => EventType::DROPBEGIN,
            Event::DropComplete(_) => EventType::DROPCOMPLETE,
            Event::AudioDeviceAdded(_) => EventType::AUDIODEVICEADDED,
            Event::AudioDeviceRemoved(_) => EventType::AUDIODEVICEREMOVED,
            Event::SensorUpdate(_) => EventType::SENSORUPDATE,
            Event::RenderTargetsReset { .. } => EventType::RENDER_TARGETS_RESET,
            Event::RenderDeviceReset { .. } => EventType::RENDER_DEVICE_RESET,
            Event::User(e) => e.kind,
            Event::Common { kind, .. } => *kind,
        }
    }

    pub fn timestamp(&self) -> u32 {
        match self {
            Event::Quit { timestamp }
            | Event::AppTerminating { timestamp }
            | Event::AppLowMemory { timestamp }
            | Event::AppWillEnterBackground { timestamp }
            | Event::AppDidEnterBackground { timestamp }
            | Event::AppWillEnterForeground { timestamp }
            | Event::AppDidEnterForeground { timestamp }
            | Event::KeymapChanged { timestamp }
            | Event::ClipboardUpdate { timestamp }
            | Event::RenderTargetsReset { timestamp }
            | Event::RenderDeviceReset { timestamp }
            | Event::Common { timestamp, .. } => *timestamp,
            Event::Display(e) => e.timestamp,
            Event::Window(e) => e.timestamp,
            Event::SysWm(e) => e.timestamp,
            Event::KeyDown(e) | Event::KeyUp(e) => e.timestamp,
            Event::TextEditing(e) => e.timestamp,
            Event::TextInput(e) => e.timestamp,
            Event::MouseMotion(e) => e.timestamp,
            Event::MouseButtonDown(e) | Event::MouseButtonUp(e) => e.timestamp,
            Event::MouseWheel(e) => e.timestamp,
            Event::JoyAxisMotion(e) => e.timestamp,
            Event::JoyBallMotion(e) => e.timestamp,
            Event::JoyHatMotion(e) => e.timestamp,
            Event::JoyButtonDown(e) | Event::JoyButtonUp(e) => e.timestamp,
            Event::JoyDeviceAdded(e) | Event::JoyDeviceRemoved(e) => e.timestamp,
            Event::ControllerAxisMotion(e) => e.timestamp,
            Event::ControllerButtonDown(e) | Event::ControllerButtonUp(e) => e.timestamp,
            Event::ControllerDeviceAdded(e)
            | Event::ControllerDeviceRemoved(e)
            | Event::ControllerDeviceRemapped(e) => e.timestamp,
            Event::FingerDown(e) | Event::FingerUp(e) | Event::FingerMotion(e) => e.timestamp,
            Event::DollarGesture(e) | Event::DollarRecord(e) => e.timestamp,
            Event::MultiGesture(e) => e.timestamp,
            Event::DropFile(e) | Event::DropText(e) | Event::DropBegin(e) | Event::DropComplete(e) => {
                e.timestamp
            }
            Event::AudioDeviceAdded(e) | Event::AudioDeviceRemoved(e) => e.timestamp,
            Event::SensorUpdate(e) => e.timestamp,
            Event::User(e) => e.timestamp,
        }
    }

    /// The window the event is addressed to, when it carries one.
    pub fn window_id(&self) -> Option<u32> {
        match self {
            Event::Window(e) => Some(e.window_id),
            Event::KeyDown(e) | Event::KeyUp(e) => Some(e.window_id),
            Event::TextEditing(e) => Some(e.window_id),
            Event::TextInput(e) => Some(e.window_id),
            Event::MouseMotion(e) => Some(e.window_id),
            Event::MouseButtonDown(e) | Event::MouseButtonUp(e) => Some(e.window_id),
            Event::MouseWheel(e) => Some(e.window_id),
            Event::DropFile(e) | Event::DropText(e) | Event::DropBegin(e) | Event::DropComplete(e) => {
                Some(e.window_id)
            }
            Event::User(e) => Some(e.window_id),
            _ => None,
        }
    }
}

/// Release the string a native drop event owns.
pub(crate) unsafe fn free_native_drop(sdl: &crate::Sdl, event: &sys::Event) {
    let kind = EventType(event.r#type);
    if (EventType::DROPFILE..=EventType::DROPCOMPLETE).contains(&kind) && !event.r#drop.file.is_null() {
        (sdl.fns.SDL_free)(event.r#drop.file.cast());
    }
}

/// Text carried by an event field as a `CStr`, for handlers that want the
/// native bytes.
pub fn text_field(bytes: &[u8]) -> Option<&CStr> {
    let len = memchr::memchr(0, bytes)?;
    CStr::from_bytes_with_nul(&bytes[..=len]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: EventType, timestamp: u32) -> Writer {
        Writer::new(kind, timestamp)
    }

    fn decode(writer: &Writer) -> Event {
        unsafe { Event::decode(&writer.0) }
    }

    #[test]
    fn lifecycle_tags() {
        let cases = [
            (EventType::QUIT, Event::Quit { timestamp: 7 }),
            (EventType::APP_TERMINATING, Event::AppTerminating { timestamp: 7 }),
            (EventType::APP_LOWMEMORY, Event::AppLowMemory { timestamp: 7 }),
            (
                EventType::APP_WILLENTERBACKGROUND,
                Event::AppWillEnterBackground { timestamp: 7 },
            ),
            (
                EventType::APP_DIDENTERBACKGROUND,
                Event::AppDidEnterBackground { timestamp: 7 },
            ),
            (
                EventType::APP_WILLENTERFOREGROUND,
                Event::AppWillEnterForeground { timestamp: 7 },
            ),
            (
                EventType::APP_DIDENTERFOREGROUND,
                Event::AppDidEnterForeground { timestamp: 7 },
            ),
            (EventType::KEYMAPCHANGED, Event::KeymapChanged { timestamp: 7 }),
            (EventType::CLIPBOARDUPDATE, Event::ClipboardUpdate { timestamp: 7 }),
            (
                EventType::RENDER_TARGETS_RESET,
                Event::RenderTargetsReset { timestamp: 7 },
            ),
            (
                EventType::RENDER_DEVICE_RESET,
                Event::RenderDeviceReset { timestamp: 7 },
            ),
        ];
        for (kind, expected) in cases {
            let event = decode(&record(kind, 7));
            assert_eq!(event, expected);
            assert_eq!(event.kind(), kind);
            assert_eq!(event.timestamp(), 7);
        }
    }

    #[test]
    fn window() {
        let mut w = record(EventType::WINDOWEVENT, 100);
        w.u32(field!(WindowEvent, window_id), 3);
        w.u8(field!(WindowEvent, event), sys::WINDOWEVENT_RESIZED);
        w.i32(field!(WindowEvent, data1), 640);
        w.i32(field!(WindowEvent, data2), -480);
        assert_eq!(
            decode(&w),
            Event::Window(WindowEvent {
                timestamp: 100,
                window_id: 3,
                event: sys::WINDOWEVENT_RESIZED,
                data1: 640,
                data2: -480,
            })
        );
    }

    #[test]
    fn display() {
        let mut w = record(EventType::DISPLAYEVENT, 1);
        w.u32(field!(DisplayEvent, display), 2);
        w.u8(field!(DisplayEvent, event), sys::DISPLAYEVENT_ORIENTATION);
        w.i32(field!(DisplayEvent, data1), sys::ORIENTATION_PORTRAIT);
        assert_eq!(
            decode(&w),
            Event::Display(DisplayEvent {
                timestamp: 1,
                display: 2,
                event: sys::DISPLAYEVENT_ORIENTATION,
                data1: sys::ORIENTATION_PORTRAIT,
            })
        );
    }

    #[test]
    fn keyboard() {
        let mut w = record(EventType::KEYUP, 9);
        let keysym = field!(KeyboardEvent, keysym);
        w.u32(field!(KeyboardEvent, window_id), 1);
        w.u8(field!(KeyboardEvent, state), sys::RELEASED);
        w.u8(field!(KeyboardEvent, repeat), 1);
        w.i32(keysym, sys::Scancode::A.0);
        w.i32(keysym + 4, sys::Keycode::A.0);
        w.u16(keysym + 8, (sys::Keymod::LSHIFT | sys::Keymod::RCTRL).0);

        let Event::KeyUp(key) = decode(&w) else {
            panic!("expected key up");
        };
        assert_eq!(key.window_id, 1);
        assert_eq!(key.state, sys::RELEASED);
        assert_eq!(key.repeat, 1);
        assert_eq!(key.keysym.scancode, sys::Scancode::A);
        assert_eq!(key.keysym.sym, sys::Keycode::A);
        assert!(key.keysym.modifiers.intersects(sys::Keymod::RCTRL));
    }

    #[test]
    fn text() {
        let mut w = record(EventType::TEXTEDITING, 5);
        w.u32(field!(TextEditingEvent, window_id), 2);
        w.text(field!(TextEditingEvent, text), 32, "héllo").unwrap();
        w.i32(field!(TextEditingEvent, start), 1);
        w.i32(field!(TextEditingEvent, length), 3);
        assert_eq!(
            decode(&w),
            Event::TextEditing(TextEditingEvent {
                timestamp: 5,
                window_id: 2,
                text: "héllo".into(),
                start: 1,
                length: 3,
            })
        );

        // A field filled to the brim without a terminator still decodes.
        let mut w = record(EventType::TEXTINPUT, 5);
        w.put(field!(TextInputEvent, text), &[b'x'; 32]);
        let Event::TextInput(input) = decode(&w) else {
            panic!("expected text input");
        };
        assert_eq!(input.text.len(), 32);
    }

    #[test]
    fn mouse() {
        let mut w = record(EventType::MOUSEMOTION, 3);
        w.u32(field!(MouseMotionEvent, window_id), 1);
        w.u32(field!(MouseMotionEvent, which), sys::TOUCH_MOUSEID);
        w.u32(field!(MouseMotionEvent, state), sys::button_mask(sys::BUTTON_LEFT));
        w.i32(field!(MouseMotionEvent, x), 10);
        w.i32(field!(MouseMotionEvent, y), 20);
        w.i32(field!(MouseMotionEvent, xrel), -1);
        w.i32(field!(MouseMotionEvent, yrel), -2);
        assert_eq!(
            decode(&w),
            Event::MouseMotion(MouseMotionEvent {
                timestamp: 3,
                window_id: 1,
                which: sys::TOUCH_MOUSEID,
                state: 1,
                x: 10,
                y: 20,
                xrel: -1,
                yrel: -2,
            })
        );

        let mut w = record(EventType::MOUSEBUTTONDOWN, 4);
        w.u8(field!(MouseButtonEvent, button), sys::BUTTON_RIGHT);
        w.u8(field!(MouseButtonEvent, state), sys::PRESSED);
        w.u8(field!(MouseButtonEvent, clicks), 2);
        w.i32(field!(MouseButtonEvent, y), 99);
        let Event::MouseButtonDown(button) = decode(&w) else {
            panic!("expected button down");
        };
        assert_eq!(button.button, sys::BUTTON_RIGHT);
        assert_eq!(button.clicks, 2);
        assert_eq!(button.y, 99);

        let mut w = record(EventType::MOUSEWHEEL, 4);
        w.i32(field!(MouseWheelEvent, y), -3);
        w.u32(field!(MouseWheelEvent, direction), sys::MOUSEWHEEL_FLIPPED);
        let Event::MouseWheel(wheel) = decode(&w) else {
            panic!("expected wheel");
        };
        assert_eq!(wheel.y, -3);
        assert_eq!(wheel.direction, sys::MOUSEWHEEL_FLIPPED);
    }

    #[test]
    fn joystick_and_controller() {
        let mut w = record(EventType::JOYAXISMOTION, 1);
        w.i32(field!(JoyAxisEvent, which), 4);
        w.u8(field!(JoyAxisEvent, axis), 2);
        w.i16(field!(JoyAxisEvent, value), sys::JOYSTICK_AXIS_MIN);
        assert_eq!(
            decode(&w),
            Event::JoyAxisMotion(JoyAxisEvent {
                timestamp: 1,
                which: 4,
                axis: 2,
                value: sys::JOYSTICK_AXIS_MIN,
            })
        );

        let mut w = record(EventType::JOYBALLMOTION, 1);
        w.u8(field!(JoyBallEvent, ball), 1);
        w.i16(field!(JoyBallEvent, xrel), -5);
        w.i16(field!(JoyBallEvent, yrel), 6);
        let Event::JoyBallMotion(ball) = decode(&w) else {
            panic!("expected ball");
        };
        assert_eq!((ball.ball, ball.xrel, ball.yrel), (1, -5, 6));

        let mut w = record(EventType::JOYHATMOTION, 1);
        w.u8(field!(JoyHatEvent, value), sys::HAT_LEFT | sys::HAT_UP);
        let Event::JoyHatMotion(hat) = decode(&w) else {
            panic!("expected hat");
        };
        assert_eq!(hat.value, sys::HAT_LEFT | sys::HAT_UP);

        let mut w = record(EventType::JOYBUTTONUP, 1);
        w.u8(field!(JoyButtonEvent, button), 9);
        assert!(matches!(decode(&w), Event::JoyButtonUp(JoyButtonEvent { button: 9, .. })));

        let mut w = record(EventType::JOYDEVICEREMOVED, 1);
        w.i32(field!(JoyDeviceEvent, which), 12);
        assert!(matches!(
            decode(&w),
            Event::JoyDeviceRemoved(JoyDeviceEvent { which: 12, .. })
        ));

        let mut w = record(EventType::CONTROLLERAXISMOTION, 1);
        w.u8(field!(ControllerAxisEvent, axis), sys::CONTROLLER_AXIS_TRIGGERLEFT as u8);
        w.i16(field!(ControllerAxisEvent, value), 1234);
        assert!(matches!(
            decode(&w),
            Event::ControllerAxisMotion(ControllerAxisEvent { value: 1234, .. })
        ));

        let mut w = record(EventType::CONTROLLERBUTTONDOWN, 1);
        w.u8(field!(ControllerButtonEvent, state), sys::PRESSED);
        assert!(matches!(
            decode(&w),
            Event::ControllerButtonDown(ControllerButtonEvent { state: sys::PRESSED, .. })
        ));

        let mut w = record(EventType::CONTROLLERDEVICEREMAPPED, 1);
        w.i32(field!(ControllerDeviceEvent, which), 3);
        assert!(matches!(
            decode(&w),
            Event::ControllerDeviceRemapped(ControllerDeviceEvent { which: 3, .. })
        ));
    }

    #[test]
    fn touch_ids_keep_both_halves() {
        let touch_id = 0x7fff_0000_0000_0001;
        let finger_id = -2;

        let mut w = record(EventType::FINGERMOTION, 8);
        w.i64(field!(TouchFingerEvent, touch_id), touch_id);
        w.i64(field!(TouchFingerEvent, finger_id), finger_id);
        w.f32(field!(TouchFingerEvent, x), 0.25);
        w.f32(field!(TouchFingerEvent, pressure), 1.0);
        assert_eq!(&w.0[8..16], &touch_id.to_ne_bytes());
        assert_eq!(
            decode(&w),
            Event::FingerMotion(TouchFingerEvent {
                timestamp: 8,
                touch_id,
                finger_id,
                x: 0.25,
                y: 0.0,
                dx: 0.0,
                dy: 0.0,
                pressure: 1.0,
            })
        );

        let mut w = record(EventType::DOLLARRECORD, 8);
        w.i64(field!(DollarGestureEvent, touch_id), touch_id);
        w.i64(field!(DollarGestureEvent, gesture_id), i64::MIN);
        w.u32(field!(DollarGestureEvent, num_fingers), 2);
        let Event::DollarRecord(gesture) = decode(&w) else {
            panic!("expected dollar record");
        };
        assert_eq!(gesture.touch_id, touch_id);
        assert_eq!(gesture.gesture_id, i64::MIN);
        assert_eq!(gesture.num_fingers, 2);

        let mut w = record(EventType::MULTIGESTURE, 8);
        w.i64(field!(MultiGestureEvent, touch_id), -1);
        w.f32(field!(MultiGestureEvent, d_theta), 0.5);
        w.u16(field!(MultiGestureEvent, num_fingers), 3);
        let Event::MultiGesture(gesture) = decode(&w) else {
            panic!("expected multi gesture");
        };
        assert_eq!(gesture.touch_id, -1);
        assert_eq!(gesture.d_theta, 0.5);
        assert_eq!(gesture.num_fingers, 3);
    }

    #[test]
    fn drop_copies_string() {
        let path = c"/tmp/dropped.txt";
        let mut w = record(EventType::DROPFILE, 2);
        w.ptr(field!(DropEvent, file), path.as_ptr() as *mut c_char);
        w.u32(field!(DropEvent, window_id), 6);
        assert_eq!(
            decode(&w),
            Event::DropFile(DropEvent {
                timestamp: 2,
                file: Some("/tmp/dropped.txt".into()),
                window_id: 6,
            })
        );

        let w = record(EventType::DROPCOMPLETE, 2);
        assert!(matches!(
            decode(&w),
            Event::DropComplete(DropEvent { file: None, .. })
        ));
    }

    #[test]
    fn audio_sensor_syswm() {
        let mut w = record(EventType::AUDIODEVICEADDED, 1);
        w.u32(field!(AudioDeviceEvent, which), 2);
        w.u8(field!(AudioDeviceEvent, iscapture), 1);
        assert_eq!(
            decode(&w),
            Event::AudioDeviceAdded(AudioDeviceEvent {
                timestamp: 1,
                which: 2,
                iscapture: true,
            })
        );

        let mut w = record(EventType::SENSORUPDATE, 1);
        w.i32(field!(SensorEvent, which), 5);
        for i in 0..6 {
            w.f32(field!(SensorEvent, data) + i * 4, i as f32);
        }
        assert_eq!(
            decode(&w),
            Event::SensorUpdate(SensorEvent {
                timestamp: 1,
                which: 5,
                data: [0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            })
        );

        let mut w = record(EventType::SYSWMEVENT, 1);
        w.ptr(field!(SysWMEvent, msg), 0x1000 as *mut sys::SysWMmsg);
        let Event::SysWm(syswm) = decode(&w) else {
            panic!("expected syswm");
        };
        assert_eq!(syswm.msg as usize, 0x1000);
    }

    #[test]
    fn user_range() {
        let kind = EventType(EventType::USEREVENT.0 + 3);
        let mut w = record(kind, 11);
        w.u32(field!(UserEvent, window_id), 2);
        w.i32(field!(UserEvent, code), -7);
        w.ptr(field!(UserEvent, data1), 0x10 as *mut c_void);
        w.ptr(field!(UserEvent, data2), std::ptr::null_mut::<c_void>());
        let event = decode(&w);
        assert_eq!(event.kind(), kind);
        assert_eq!(event.window_id(), Some(2));
        let Event::User(user) = event else {
            panic!("expected user event");
        };
        assert_eq!(user.code, -7);
        assert_eq!(user.data1 as usize, 0x10);
        assert!(user.data2.is_null());

        let w = record(EventType::LASTEVENT, 11);
        assert_eq!(
            decode(&w),
            Event::Common {
                kind: EventType::LASTEVENT,
                timestamp: 11,
            }
        );
    }

    #[test]
    fn unknown_tag_is_common() {
        let mut w = record(EventType(0x1234), 77);
        w.u32(8, 0xdead_beef);
        let event = decode(&w);
        assert_eq!(
            event,
            Event::Common {
                kind: EventType(0x1234),
                timestamp: 77,
            }
        );
        assert_eq!(event.window_id(), None);
    }

    #[test]
    fn encode_matches_decode() {
        let events = [
            Event::Quit { timestamp: 1 },
            Event::Window(WindowEvent {
                timestamp: 2,
                window_id: 3,
                event: sys::WINDOWEVENT_MOVED,
                data1: 4,
                data2: 5,
            }),
            Event::TextInput(TextInputEvent {
                timestamp: 6,
                window_id: 7,
                text: "abc".into(),
            }),
            Event::FingerDown(TouchFingerEvent {
                timestamp: 8,
                touch_id: i64::MAX,
                finger_id: -1,
                x: 0.5,
                y: 0.5,
                dx: 0.0,
                dy: 0.0,
                pressure: 0.75,
            }),
            Event::User(UserEvent {
                kind: EventType::USEREVENT,
                timestamp: 9,
                window_id: 0,
                code: 42,
                data1: std::ptr::null_mut(),
                data2: std::ptr::null_mut(),
            }),
        ];
        for event in events {
            let bytes = event.encode().unwrap();
            assert_eq!(unsafe { Event::decode(&bytes) }, event);
        }
    }

    #[test]
    fn encode_rejects() {
        let drop = Event::DropText(DropEvent {
            timestamp: 0,
            file: Some("x".into()),
            window_id: 0,
        });
        assert!(matches!(drop.encode(), Err(Error::InvalidParameters)));

        let long = Event::TextInput(TextInputEvent {
            timestamp: 0,
            window_id: 0,
            text: "x".repeat(32),
        });
        assert!(matches!(long.encode(), Err(Error::InvalidParameters)));

        let nul = Event::TextInput(TextInputEvent {
            timestamp: 0,
            window_id: 0,
            text: "a\0b".into(),
        });
        assert!(matches!(nul.encode(), Err(Error::InvalidParameters)));
    }

    #[test]
    fn fixed_text_field() {
        assert_eq!(text_field(b"ab\0cd"), Some(c"ab"));
        assert_eq!(text_field(b"abcd"), None);
    }
}
