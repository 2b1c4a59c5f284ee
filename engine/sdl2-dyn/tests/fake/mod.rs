//! An in-process stand-in for the native library.
//!
//! Entry points the tests exercise are implemented here in Rust; every other
//! required name resolves to a stub that aborts, and optional names resolve
//! to null as they would against an older library.

#![allow(non_snake_case, dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::{c_char, c_void, CStr, CString},
    sync::OnceLock,
};

use parking_lot::Mutex;
use sdl2_dyn::{sdl2_sys as sys, Sdl};

pub const INIT_FAILURE: &str = "Haptic subsystem unavailable in fake";
pub const WINDOW_FAILURE: &str = "No available video device";
pub const FORMAT_FAILURE: &str = "Unknown pixel format";

thread_local! {
    static ERROR: RefCell<CString> = RefCell::new(CString::default());
}

fn set_error(message: &str) {
    let message = CString::new(message).unwrap();
    ERROR.with(|error| *error.borrow_mut() = message);
}

unsafe extern "C" fn SDL_GetError() -> *const c_char {
    ERROR.with(|error| error.borrow().as_ptr())
}

unsafe extern "C" fn SDL_ClearError() {
    set_error("");
}

unsafe extern "C" fn SDL_InitSubSystem(flags: u32) -> i32 {
    if flags & sys::INIT_HAPTIC != 0 {
        set_error(INIT_FAILURE);
        -1
    } else {
        0
    }
}

unsafe extern "C" fn SDL_CreateWindow(
    _title: *const c_char,
    _x: i32,
    _y: i32,
    _w: i32,
    _h: i32,
    _flags: u32,
) -> *mut sys::Window {
    set_error(WINDOW_FAILURE);
    std::ptr::null_mut()
}

unsafe extern "C" fn SDL_PixelFormatEnumToMasks(
    format: u32,
    bpp: *mut i32,
    r: *mut u32,
    g: *mut u32,
    b: *mut u32,
    a: *mut u32,
) -> sys::Bool {
    if format != sys::PIXELFORMAT_ARGB8888 {
        set_error(FORMAT_FAILURE);
        return sys::Bool::False;
    }
    *bpp = 32;
    *a = 0xff00_0000;
    *r = 0x00ff_0000;
    *g = 0x0000_ff00;
    *b = 0x0000_00ff;
    sys::Bool::True
}

struct HintEntry {
    name: String,
    callback: sys::HintCallback,
    userdata: usize,
    removed: bool,
}

static HINT_VALUES: Mutex<Option<HashMap<String, CString>>> = Mutex::new(None);
static HINT_CALLBACKS: Mutex<Vec<HintEntry>> = Mutex::new(Vec::new());

fn hint_value(name: &str) -> Option<CString> {
    HINT_VALUES
        .lock()
        .as_ref()
        .and_then(|values| values.get(name).cloned())
}

fn fire_hints(name: &str, old: Option<&CStr>, new: Option<&CStr>, removed: bool) {
    let targets = HINT_CALLBACKS
        .lock()
        .iter()
        .filter(|entry| entry.name == name && entry.removed == removed)
        .map(|entry| (entry.callback, entry.userdata))
        .collect::<Vec<_>>();
    let c_name = CString::new(name).unwrap();
    let ptr = |value: Option<&CStr>| value.map_or(std::ptr::null(), CStr::as_ptr);
    for (callback, userdata) in targets {
        unsafe { callback(userdata as *mut c_void, c_name.as_ptr(), ptr(old), ptr(new)) };
    }
}

unsafe extern "C" fn SDL_SetHint(name: *const c_char, value: *const c_char) -> sys::Bool {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    let value = CStr::from_ptr(value).to_owned();
    let old = HINT_VALUES
        .lock()
        .get_or_insert_with(HashMap::new)
        .insert(name.clone(), value.clone());
    fire_hints(&name, old.as_deref(), Some(&value), false);
    sys::Bool::True
}

unsafe extern "C" fn SDL_AddHintCallback(
    name: *const c_char,
    callback: sys::HintCallback,
    userdata: *mut c_void,
) {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    HINT_CALLBACKS.lock().push(HintEntry {
        name: name.clone(),
        callback,
        userdata: userdata as usize,
        removed: false,
    });
    // The native library reports the current value straight away.
    let value = hint_value(&name);
    let c_name = CString::new(name).unwrap();
    let value_ptr = value.as_deref().map_or(std::ptr::null(), CStr::as_ptr);
    callback(userdata, c_name.as_ptr(), value_ptr, value_ptr);
}

unsafe extern "C" fn SDL_DelHintCallback(
    name: *const c_char,
    callback: sys::HintCallback,
    userdata: *mut c_void,
) {
    let name = CStr::from_ptr(name).to_string_lossy();
    for entry in HINT_CALLBACKS.lock().iter_mut() {
        if entry.name == name
            && entry.callback as usize == callback as usize
            && entry.userdata == userdata as usize
        {
            entry.removed = true;
        }
    }
}

/// Deliver a change notification to callbacks removed earlier, as a native
/// thread that fetched them before removal would.
pub fn fire_removed_hint(name: &str, value: &str) {
    let value = CString::new(value).unwrap();
    fire_hints(name, None, Some(&value), true);
}

struct WatchEntry {
    filter: sys::EventFilter,
    userdata: usize,
    removed: bool,
}

static WATCHES: Mutex<Vec<WatchEntry>> = Mutex::new(Vec::new());

fn fire_watches(event: &mut sys::Event, removed: bool) {
    let targets = WATCHES
        .lock()
        .iter()
        .filter(|entry| entry.removed == removed)
        .map(|entry| (entry.filter, entry.userdata))
        .collect::<Vec<_>>();
    for (filter, userdata) in targets {
        unsafe { filter(userdata as *mut c_void, event) };
    }
}

unsafe extern "C" fn SDL_AddEventWatch(filter: sys::EventFilter, userdata: *mut c_void) {
    WATCHES.lock().push(WatchEntry {
        filter,
        userdata: userdata as usize,
        removed: false,
    });
}

unsafe extern "C" fn SDL_DelEventWatch(filter: sys::EventFilter, userdata: *mut c_void) {
    for entry in WATCHES.lock().iter_mut() {
        if entry.filter as usize == filter as usize && entry.userdata == userdata as usize {
            entry.removed = true;
        }
    }
}

/// Watches see the event; nothing is queued.
unsafe extern "C" fn SDL_PushEvent(event: *mut sys::Event) -> i32 {
    fire_watches(&mut *event, false);
    1
}

/// Deliver `event` to watches removed earlier.
pub fn fire_removed_watches(event: &sdl2_dyn::event::Event) {
    let mut raw = sys::Event {
        padding: event.encode().unwrap(),
    };
    fire_watches(&mut raw, true);
}

unsafe extern "C" fn SDL_AllocRW() -> *mut sys::RWops {
    Box::into_raw(Box::new(std::mem::MaybeUninit::<sys::RWops>::zeroed().assume_init()))
}

unsafe extern "C" fn SDL_FreeRW(rw: *mut sys::RWops) {
    drop(Box::from_raw(rw));
}

unsafe fn mem_left(rw: *mut sys::RWops) -> usize {
    let mem = (*rw).hidden.mem;
    mem.stop.offset_from(mem.here) as usize
}

unsafe extern "C" fn mem_size(rw: *mut sys::RWops) -> i64 {
    let mem = (*rw).hidden.mem;
    mem.stop.offset_from(mem.base) as i64
}

unsafe extern "C" fn mem_seek(rw: *mut sys::RWops, offset: i64, whence: i32) -> i64 {
    let mem = (*rw).hidden.mem;
    let base = match whence {
        sys::RW_SEEK_SET => 0,
        sys::RW_SEEK_CUR => mem.here.offset_from(mem.base) as i64,
        sys::RW_SEEK_END => mem_size(rw),
        _ => {
            set_error("Unknown value for 'whence'");
            return -1;
        }
    };
    let pos = (base + offset).clamp(0, mem_size(rw));
    (*rw).hidden.mem.here = mem.base.add(pos as usize);
    pos
}

unsafe extern "C" fn mem_read(rw: *mut sys::RWops, ptr: *mut c_void, size: usize, maxnum: usize) -> usize {
    let count = maxnum.min(mem_left(rw) / size);
    let len = count * size;
    std::ptr::copy_nonoverlapping((*rw).hidden.mem.here, ptr.cast::<u8>(), len);
    (*rw).hidden.mem.here = (*rw).hidden.mem.here.add(len);
    count
}

unsafe extern "C" fn mem_write(rw: *mut sys::RWops, ptr: *const c_void, size: usize, num: usize) -> usize {
    let count = num.min(mem_left(rw) / size);
    let len = count * size;
    std::ptr::copy_nonoverlapping(ptr.cast::<u8>(), (*rw).hidden.mem.here, len);
    (*rw).hidden.mem.here = (*rw).hidden.mem.here.add(len);
    count
}

unsafe extern "C" fn mem_write_const(_rw: *mut sys::RWops, _ptr: *const c_void, _size: usize, _num: usize) -> usize {
    set_error("Can't write to read-only memory");
    0
}

unsafe extern "C" fn mem_close(rw: *mut sys::RWops) -> i32 {
    SDL_FreeRW(rw);
    0
}

unsafe fn mem_rw(base: *mut u8, size: i32, kind: u32, write: sys::RWwriteFn) -> *mut sys::RWops {
    let rw = SDL_AllocRW();
    (*rw).size = Some(mem_size);
    (*rw).seek = Some(mem_seek);
    (*rw).read = Some(mem_read);
    (*rw).write = Some(write);
    (*rw).close = Some(mem_close);
    (*rw).r#type = kind;
    (*rw).hidden.mem = sys::RWopsMem {
        base,
        here: base,
        stop: base.add(size as usize),
    };
    rw
}

unsafe extern "C" fn SDL_RWFromMem(mem: *mut c_void, size: i32) -> *mut sys::RWops {
    mem_rw(mem.cast(), size, sys::RWOPS_MEMORY, mem_write)
}

unsafe extern "C" fn SDL_RWFromConstMem(mem: *const c_void, size: i32) -> *mut sys::RWops {
    mem_rw(mem.cast_mut().cast(), size, sys::RWOPS_MEMORY_RO, mem_write_const)
}

// Each primitive goes through the stream's own read or write entry, so both
// memory streams and Rust backed streams are exercised.
macro_rules! fake_reads {
    ($($name:ident: $ty:ty => $from:ident;)*) => {
        $(
            unsafe extern "C" fn $name(rw: *mut sys::RWops) -> $ty {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                match (*rw).read {
                    Some(read) if read(rw, bytes.as_mut_ptr().cast(), bytes.len(), 1) == 1 => {
                        <$ty>::$from(bytes)
                    }
                    _ => 0,
                }
            }
        )*
    };
}

macro_rules! fake_writes {
    ($($name:ident: $ty:ty => $to:ident;)*) => {
        $(
            unsafe extern "C" fn $name(rw: *mut sys::RWops, value: $ty) -> usize {
                let bytes = value.$to();
                match (*rw).write {
                    Some(write) => write(rw, bytes.as_ptr().cast(), bytes.len(), 1),
                    None => 0,
                }
            }
        )*
    };
}

fake_reads! {
    SDL_ReadU8: u8 => from_le_bytes;
    SDL_ReadLE16: u16 => from_le_bytes;
    SDL_ReadBE16: u16 => from_be_bytes;
    SDL_ReadLE32: u32 => from_le_bytes;
    SDL_ReadBE32: u32 => from_be_bytes;
    SDL_ReadLE64: u64 => from_le_bytes;
    SDL_ReadBE64: u64 => from_be_bytes;
}

fake_writes! {
    SDL_WriteU8: u8 => to_le_bytes;
    SDL_WriteLE16: u16 => to_le_bytes;
    SDL_WriteBE16: u16 => to_be_bytes;
    SDL_WriteLE32: u32 => to_le_bytes;
    SDL_WriteBE32: u32 => to_be_bytes;
    SDL_WriteLE64: u64 => to_le_bytes;
    SDL_WriteBE64: u64 => to_be_bytes;
}

struct LogState {
    all: Option<sys::LogPriority>,
    overrides: Vec<(i32, sys::LogPriority)>,
    output: Option<sys::LogOutputFunction>,
    userdata: usize,
}

static LOG: Mutex<LogState> = Mutex::new(LogState {
    all: None,
    overrides: Vec::new(),
    output: Some(default_output),
    userdata: 0,
});

/// Stands in for the library's stderr writer.
pub unsafe extern "C" fn default_output(
    _userdata: *mut c_void,
    _category: i32,
    _priority: sys::LogPriority,
    _message: *const c_char,
) {
}

fn default_priority(category: i32) -> sys::LogPriority {
    match category {
        sys::LOG_CATEGORY_APPLICATION => sys::LOG_PRIORITY_INFO,
        sys::LOG_CATEGORY_ASSERT => sys::LOG_PRIORITY_WARN,
        sys::LOG_CATEGORY_TEST => sys::LOG_PRIORITY_VERBOSE,
        _ => sys::LOG_PRIORITY_CRITICAL,
    }
}

unsafe extern "C" fn SDL_LogSetAllPriority(priority: sys::LogPriority) {
    let mut log = LOG.lock();
    log.overrides.clear();
    log.all = Some(priority);
}

unsafe extern "C" fn SDL_LogSetPriority(category: i32, priority: sys::LogPriority) {
    let mut log = LOG.lock();
    log.overrides.retain(|&(known, _)| known != category);
    log.overrides.push((category, priority));
}

unsafe extern "C" fn SDL_LogGetPriority(category: i32) -> sys::LogPriority {
    let log = LOG.lock();
    log.overrides
        .iter()
        .find(|&&(known, _)| known == category)
        .map(|&(_, priority)| priority)
        .or(log.all)
        .unwrap_or_else(|| default_priority(category))
}

unsafe extern "C" fn SDL_LogResetPriorities() {
    let mut log = LOG.lock();
    log.overrides.clear();
    log.all = None;
}

unsafe extern "C" fn SDL_LogGetOutputFunction(
    callback: *mut Option<sys::LogOutputFunction>,
    userdata: *mut *mut c_void,
) {
    let log = LOG.lock();
    *callback = log.output;
    *userdata = log.userdata as *mut c_void;
}

unsafe extern "C" fn SDL_LogSetOutputFunction(callback: Option<sys::LogOutputFunction>, userdata: *mut c_void) {
    let mut log = LOG.lock();
    log.output = callback;
    log.userdata = userdata as usize;
}

// The binding always passes "%s" and a single string, so the fixed form
// receives the same arguments as the variadic one on register based ABIs.
unsafe extern "C" fn SDL_LogMessage(
    category: i32,
    priority: sys::LogPriority,
    _fmt: *const c_char,
    message: *const c_char,
) {
    if priority < SDL_LogGetPriority(category) {
        return;
    }
    let (output, userdata) = {
        let log = LOG.lock();
        (log.output, log.userdata)
    };
    if let Some(output) = output {
        output(userdata as *mut c_void, category, priority, message);
    }
}

unsafe extern "C" fn unexpected() {
    eprintln!("fake SDL: an unimplemented entry point was called");
    std::process::abort()
}

macro_rules! symbols {
    ($($name:ident),* $(,)?) => {
        &[$((stringify!($name), $name as *mut c_void)),*]
    };
}

fn lookup(name: &CStr) -> *mut c_void {
    let implemented: &[(&str, *mut c_void)] = symbols![
        SDL_GetError,
        SDL_ClearError,
        SDL_InitSubSystem,
        SDL_CreateWindow,
        SDL_PixelFormatEnumToMasks,
        SDL_SetHint,
        SDL_AddHintCallback,
        SDL_DelHintCallback,
        SDL_AddEventWatch,
        SDL_DelEventWatch,
        SDL_PushEvent,
        SDL_AllocRW,
        SDL_FreeRW,
        SDL_LogSetAllPriority,
        SDL_LogSetPriority,
        SDL_LogGetPriority,
        SDL_LogResetPriorities,
        SDL_LogGetOutputFunction,
        SDL_LogSetOutputFunction,
        SDL_LogMessage,
        SDL_RWFromMem,
        SDL_RWFromConstMem,
        SDL_ReadU8,
        SDL_ReadLE16,
        SDL_ReadBE16,
        SDL_ReadLE32,
        SDL_ReadBE32,
        SDL_ReadLE64,
        SDL_ReadBE64,
        SDL_WriteU8,
        SDL_WriteLE16,
        SDL_WriteBE16,
        SDL_WriteLE32,
        SDL_WriteBE32,
        SDL_WriteLE64,
        SDL_WriteBE64,
    ];

    let name = name.to_str().unwrap_or_default();
    if let Some(&(_, ptr)) = implemented.iter().find(|(known, _)| *known == name) {
        return ptr;
    }
    if sys::Functions::REQUIRED.contains(&name) {
        return unexpected as *mut c_void;
    }
    std::ptr::null_mut()
}

/// The context every test in a binary shares.
pub fn sdl() -> &'static Sdl {
    static SDL: OnceLock<Sdl> = OnceLock::new();
    SDL.get_or_init(|| unsafe { Sdl::from_resolver(lookup) }.unwrap())
}
