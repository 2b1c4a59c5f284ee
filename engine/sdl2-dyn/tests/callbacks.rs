mod fake;

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    thread,
    time::Duration,
};

use crossbeam_channel::bounded;

use sdl2_dyn::{
    event::{Event, UserEvent},
    sdl2_sys::EventType,
};

fn user_event(code: i32) -> Event {
    Event::User(UserEvent {
        kind: EventType::USEREVENT,
        timestamp: 0,
        window_id: 0,
        code,
        data1: std::ptr::null_mut(),
        data2: std::ptr::null_mut(),
    })
}

fn counter_for(code: i32, hits: &Arc<AtomicUsize>) -> impl FnMut(&Event) -> bool + Send + 'static {
    let hits = hits.clone();
    move |event| {
        if matches!(event, Event::User(user) if user.code == code) {
            hits.fetch_add(1, Ordering::SeqCst);
        }
        true
    }
}

#[test]
fn hint_callback_sees_current_value_then_changes() {
    let sdl = fake::sdl();
    let seen = Arc::new(Mutex::new(Vec::new()));

    sdl.set_hint("FAKE_HINT_CHANGES", "0").unwrap();
    let log = seen.clone();
    sdl.add_hint_callback("FAKE_HINT_CHANGES", move |name, _old, new| {
        log.lock()
            .unwrap()
            .push((name.to_owned(), new.map(str::to_owned)));
    })
    .unwrap();
    sdl.set_hint("FAKE_HINT_CHANGES", "1").unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        [
            ("FAKE_HINT_CHANGES".to_owned(), Some("0".to_owned())),
            ("FAKE_HINT_CHANGES".to_owned(), Some("1".to_owned())),
        ]
    );
}

#[test]
fn removed_hint_callback_is_silent() {
    let sdl = fake::sdl();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    sdl.add_hint_callback("FAKE_HINT_REMOVED", move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    assert!(sdl.del_hint_callback("FAKE_HINT_REMOVED").unwrap());
    assert!(!sdl.del_hint_callback("FAKE_HINT_REMOVED").unwrap());

    sdl.set_hint("FAKE_HINT_REMOVED", "1").unwrap();
    // A notification already in flight on a native thread.
    fake::fire_removed_hint("FAKE_HINT_REMOVED", "2");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn replacing_a_hint_callback_retires_the_old_one() {
    let sdl = fake::sdl();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let counter = first.clone();
    sdl.add_hint_callback("FAKE_HINT_REPLACED", move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    let counter = second.clone();
    sdl.add_hint_callback("FAKE_HINT_REPLACED", move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    sdl.set_hint("FAKE_HINT_REPLACED", "1").unwrap();

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn replacing_a_running_hint_callback_does_not_block_its_handler() {
    let sdl = fake::sdl();
    let (entered_tx, entered_rx) = bounded(1);
    let (done_tx, done_rx) = bounded(2);

    // Fires on another thread, then unregisters an unrelated hint while the
    // replacement below waits for it to return.
    let handler_done = done_tx.clone();
    sdl.add_hint_callback("FAKE_HINT_BUSY", move |_, _, new| {
        if new == Some("go") {
            entered_tx.send(()).unwrap();
            thread::sleep(Duration::from_millis(50));
            fake::sdl().del_hint_callback("FAKE_HINT_UNRELATED").unwrap();
            handler_done.send("handler").unwrap();
        }
    })
    .unwrap();

    let notifier = thread::spawn(|| {
        fake::sdl().set_hint("FAKE_HINT_BUSY", "go").unwrap();
    });
    entered_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    let replaced_done = done_tx;
    thread::spawn(move || {
        fake::sdl().add_hint_callback("FAKE_HINT_BUSY", |_, _, _| {}).unwrap();
        replaced_done.send("replace").unwrap();
    });

    let mut finished = Vec::new();
    for _ in 0..2 {
        match done_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(who) => finished.push(who),
            Err(_) => panic!("deadlocked, finished so far: {finished:?}"),
        }
    }
    finished.sort_unstable();
    assert_eq!(finished, ["handler", "replace"]);
    notifier.join().unwrap();

    assert!(sdl.del_hint_callback("FAKE_HINT_BUSY").unwrap());
}

#[test]
fn deleting_a_watch_silences_only_that_watch() {
    let sdl = fake::sdl();
    let kept_hits = Arc::new(AtomicUsize::new(0));
    let removed_hits = Arc::new(AtomicUsize::new(0));

    let kept = sdl.add_event_watch(counter_for(101, &kept_hits));
    let removed = sdl.add_event_watch(counter_for(101, &removed_hits));
    assert_ne!(kept, removed);

    assert!(sdl.push_event(&user_event(101)).unwrap());
    assert_eq!(kept_hits.load(Ordering::SeqCst), 1);
    assert_eq!(removed_hits.load(Ordering::SeqCst), 1);

    sdl.del_event_watch(removed);
    assert!(sdl.push_event(&user_event(101)).unwrap());
    fake::fire_removed_watches(&user_event(101));

    assert_eq!(kept_hits.load(Ordering::SeqCst), 2);
    assert_eq!(removed_hits.load(Ordering::SeqCst), 1);

    sdl.del_event_watch(kept);
}

#[test]
fn watch_may_remove_itself() {
    let sdl = fake::sdl();
    let hits = Arc::new(AtomicUsize::new(0));
    let handle = Arc::new(Mutex::new(None));

    let counter = hits.clone();
    let own = handle.clone();
    let watch = sdl.add_event_watch(move |event| {
        if matches!(event, Event::User(user) if user.code == 202) {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(watch) = own.lock().unwrap().take() {
                fake::sdl().del_event_watch(watch);
            }
        }
        true
    });
    *handle.lock().unwrap() = Some(watch);

    sdl.push_event(&user_event(202)).unwrap();
    sdl.push_event(&user_event(202)).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
