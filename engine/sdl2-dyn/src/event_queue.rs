//! The native event queue, event filters and watches.

use std::{ffi::c_void, time::Duration};

use sdl2_sys as sys;
use sys::EventType;

use crate::{
    callback::{self, Registry},
    event::{self, Event},
    Error, Result, Sdl,
};

/// Return `true` to keep the event. Ignored for watches.
pub type EventHandler = dyn FnMut(&Event) -> bool + Send;

static WATCHES: Registry<usize, EventHandler> = Registry::new();
static FILTER: Registry<(), EventHandler> = Registry::new();

/// Identifies a watch installed by [`Sdl::add_event_watch`].
#[derive(PartialEq, Eq, Debug)]
pub struct EventWatch(usize);

unsafe extern "C" fn watch_trampoline(userdata: *mut c_void, event: *mut sys::Event) -> i32 {
    let handle = callback::userdata_to_handle(userdata);
    let Some(slot) = WATCHES.get(&handle) else {
        return 1;
    };
    let event = Event::from_native(&*event);
    slot.with(|handler| handler(&event)).map_or(1, i32::from)
}

unsafe extern "C" fn filter_trampoline(_userdata: *mut c_void, event: *mut sys::Event) -> i32 {
    let Some(slot) = FILTER.get(&()) else {
        return 1;
    };
    let event = Event::from_native(&*event);
    slot.with(|handler| handler(&event)).map_or(1, i32::from)
}

unsafe extern "C" fn filter_once_trampoline<F>(userdata: *mut c_void, event: *mut sys::Event) -> i32
where
    F: FnMut(&Event) -> bool,
{
    let filter = &mut *userdata.cast::<F>();
    i32::from(filter(&Event::from_native(&*event)))
}

fn duration_ms(timeout: Duration) -> i32 {
    timeout.as_millis().min(i32::MAX as u128) as i32
}

impl Sdl {
    pub fn pump_events(&self) {
        unsafe { (self.fns.SDL_PumpEvents)() }
    }

    /// Decode a record the queue handed over, releasing what it owned.
    unsafe fn take_event(&self, raw: &sys::Event) -> Event {
        let event = Event::from_native(raw);
        event::free_native_drop(self, raw);
        event
    }

    pub fn poll_event(&self) -> Option<Event> {
        let mut raw = sys::Event::default();
        match unsafe { (self.fns.SDL_PollEvent)(&mut raw) } {
            0 => None,
            _ => Some(unsafe { self.take_event(&raw) }),
        }
    }

    /// Drain the queue.
    pub fn poll_iter(&self) -> impl Iterator<Item = Event> + '_ {
        std::iter::from_fn(|| self.poll_event())
    }

    pub fn wait_event(&self) -> Result<Event> {
        let mut raw = sys::Event::default();
        match unsafe { (self.fns.SDL_WaitEvent)(&mut raw) } {
            0 => Err(self.last_error()),
            _ => Ok(unsafe { self.take_event(&raw) }),
        }
    }

    /// `None` when the timeout passes with the queue empty.
    pub fn wait_event_timeout(&self, timeout: Duration) -> Option<Event> {
        let mut raw = sys::Event::default();
        match unsafe { (self.fns.SDL_WaitEventTimeout)(&mut raw, duration_ms(timeout)) } {
            0 => None,
            _ => Some(unsafe { self.take_event(&raw) }),
        }
    }

    /// Returns `false` when a filter dropped the event.
    pub fn push_event(&self, event: &Event) -> Result<bool> {
        let mut raw = event.to_native()?;
        let ret = self.check(unsafe { (self.fns.SDL_PushEvent)(&mut raw) })?;
        Ok(ret == 1)
    }

    /// Append `events` to the queue, returning how many were added.
    pub fn add_events(&self, events: &[Event]) -> Result<usize> {
        let mut raw = events
            .iter()
            .map(Event::to_native)
            .collect::<Result<Vec<_>>>()?;
        let count = crate::non_empty_count(raw.len())?;
        let ret = self.check(unsafe {
            (self.fns.SDL_PeepEvents)(
                raw.as_mut_ptr(),
                count,
                sys::ADDEVENT,
                EventType::FIRSTEVENT.0,
                EventType::LASTEVENT.0,
            )
        })?;
        Ok(ret as usize)
    }

    /// Copy up to `max` queued events with tags in `[min, max_kind]` without
    /// removing them.
    pub fn peek_events(&self, max: usize, min: EventType, max_kind: EventType) -> Result<Vec<Event>> {
        self.peep(max, sys::PEEKEVENT, min, max_kind, false)
    }

    /// Remove and return up to `max` queued events with tags in
    /// `[min, max_kind]`.
    pub fn get_events(&self, max: usize, min: EventType, max_kind: EventType) -> Result<Vec<Event>> {
        self.peep(max, sys::GETEVENT, min, max_kind, true)
    }

    fn peep(
        &self,
        max: usize,
        action: sys::EventAction,
        min: EventType,
        max_kind: EventType,
        owned: bool,
    ) -> Result<Vec<Event>> {
        let count = crate::non_empty_count(max)?;
        let mut raw = vec![sys::Event::default(); max];
        let ret = self.check(unsafe {
            (self.fns.SDL_PeepEvents)(raw.as_mut_ptr(), count, action, min.0, max_kind.0)
        })?;
        raw.truncate(ret as usize);
        Ok(raw
            .iter()
            .map(|raw| unsafe {
                match owned {
                    true => self.take_event(raw),
                    // Peeked records still belong to the queue.
                    false => Event::from_native(raw),
                }
            })
            .collect())
    }

    pub fn has_event(&self, kind: EventType) -> bool {
        unsafe { (self.fns.SDL_HasEvent)(kind.0) }.into()
    }

    pub fn has_events(&self, min: EventType, max: EventType) -> bool {
        unsafe { (self.fns.SDL_HasEvents)(min.0, max.0) }.into()
    }

    pub fn flush_event(&self, kind: EventType) {
        unsafe { (self.fns.SDL_FlushEvent)(kind.0) }
    }

    pub fn flush_events(&self, min: EventType, max: EventType) {
        unsafe { (self.fns.SDL_FlushEvents)(min.0, max.0) }
    }

    /// Query or change whether `kind` is queued. `state` is one of
    /// `sys::QUERY`, `sys::IGNORE` or `sys::ENABLE`; returns the previous
    /// state.
    pub fn event_state(&self, kind: EventType, state: i32) -> bool {
        unsafe { (self.fns.SDL_EventState)(kind.0, state) != 0 }
    }

    /// Reserve `count` consecutive user event tags, returning the first.
    pub fn register_events(&self, count: usize) -> Result<EventType> {
        let count = crate::non_empty_count(count)?;
        match unsafe { (self.fns.SDL_RegisterEvents)(count) } {
            u32::MAX => Err(Error::InvalidParameters),
            first => Ok(EventType(first)),
        }
    }

    /// Install `handler` to see every event as it is queued, possibly from
    /// another thread.
    pub fn add_event_watch<F>(&self, handler: F) -> EventWatch
    where
        F: FnMut(&Event) -> bool + Send + 'static,
    {
        let handle = callback::next_handle();
        WATCHES.insert(handle, Box::new(handler));
        unsafe {
            (self.fns.SDL_AddEventWatch)(watch_trampoline, callback::handle_to_userdata(handle))
        };
        EventWatch(handle)
    }

    /// Remove a watch. Once this returns its handler is never entered again.
    pub fn del_event_watch(&self, watch: EventWatch) {
        unsafe {
            (self.fns.SDL_DelEventWatch)(watch_trampoline, callback::handle_to_userdata(watch.0))
        };
        WATCHES.remove(&watch.0);
    }

    /// Install the queue filter. Events it rejects are dropped before
    /// queueing. Replaces any filter installed earlier.
    pub fn set_event_filter<F>(&self, filter: F)
    where
        F: FnMut(&Event) -> bool + Send + 'static,
    {
        if let Some(previous) = FILTER.insert((), Box::new(filter)) {
            drop(previous.clear());
        }
        unsafe { (self.fns.SDL_SetEventFilter)(Some(filter_trampoline), std::ptr::null_mut()) };
    }

    pub fn clear_event_filter(&self) {
        unsafe { (self.fns.SDL_SetEventFilter)(None, std::ptr::null_mut()) };
        FILTER.remove(&());
    }

    /// Whether any filter is installed natively, including one installed
    /// behind this binding's back.
    pub fn event_filter_is_set(&self) -> bool {
        let mut filter = None;
        let mut userdata = std::ptr::null_mut();
        unsafe { (self.fns.SDL_GetEventFilter)(&mut filter, &mut userdata) }.into()
    }

    /// Run `filter` over the queue once, removing the events it rejects.
    pub fn filter_events<F>(&self, mut filter: F)
    where
        F: FnMut(&Event) -> bool,
    {
        unsafe {
            (self.fns.SDL_FilterEvents)(
                filter_once_trampoline::<F>,
                (&mut filter as *mut F).cast(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_clamp() {
        assert_eq!(duration_ms(Duration::from_millis(250)), 250);
        assert_eq!(duration_ms(Duration::from_secs(u64::MAX)), i32::MAX);
    }

    #[test]
    fn watch_trampoline_routes_by_handle() {
        let seen = std::sync::Arc::new(std::sync::atomic::AtomicU32::new(0));
        let handle = callback::next_handle();
        let counter = seen.clone();
        WATCHES.insert(
            handle,
            Box::new(move |event: &Event| {
                counter.fetch_add(event.timestamp(), std::sync::atomic::Ordering::SeqCst);
                true
            }),
        );

        let mut raw = Event::Quit { timestamp: 5 }.to_native().unwrap();
        let userdata = callback::handle_to_userdata(handle);
        unsafe {
            assert_eq!(watch_trampoline(userdata, &mut raw), 1);
            assert_eq!(watch_trampoline(callback::handle_to_userdata(0), &mut raw), 1);
        }
        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 5);

        WATCHES.remove(&handle);
        unsafe { watch_trampoline(userdata, &mut raw) };
        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 5);
    }

    fn filter_once<F: FnMut(&Event) -> bool>(filter: &mut F, raw: &mut sys::Event) -> i32 {
        unsafe { filter_once_trampoline::<F>((filter as *mut F).cast(), raw) }
    }

    #[test]
    fn one_shot_filter_sees_event() {
        let mut kinds = Vec::new();
        let mut filter = |event: &Event| {
            kinds.push(event.kind());
            false
        };
        let mut raw = Event::KeymapChanged { timestamp: 1 }.to_native().unwrap();
        assert_eq!(filter_once(&mut filter, &mut raw), 0);
        assert_eq!(kinds, [EventType::KEYMAPCHANGED]);
    }
}
