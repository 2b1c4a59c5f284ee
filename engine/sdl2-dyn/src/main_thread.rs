//! Running work on the thread that owns the video and event subsystems.
//!
//! Most platforms require windows and event pumping on the thread that
//! initialized the library, usually the process main thread. [`main`] turns
//! the calling thread into a servicing loop and runs the application on a
//! second thread; [`run`] sends closures back to the loop.

use std::{cell::Cell, thread};

use crossbeam_channel::{bounded, unbounded, Sender};
use parking_lot::Mutex;

type Job = Box<dyn FnOnce() + Send>;

static QUEUE: Mutex<Option<Sender<Job>>> = Mutex::new(None);

thread_local! {
    static ON_MAIN: Cell<bool> = const { Cell::new(false) };
}

// Closes the queue when the application closure finishes, even by unwinding.
struct CloseQueue;

impl Drop for CloseQueue {
    fn drop(&mut self) {
        QUEUE.lock().take();
    }
}

#[cold]
fn not_running() -> ! {
    panic!("main_thread::run called while main_thread::main is not running")
}

/// Run `f` on a new thread while the calling thread services [`run`]
/// requests. Returns once `f` has returned and every queued job has run.
///
/// # Panics
///
/// Panics if `main` is already running, and propagates a panic from `f`.
pub fn main<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let (sender, receiver) = unbounded::<Job>();
    {
        let mut queue = QUEUE.lock();
        assert!(queue.is_none(), "main_thread::main is already running");
        *queue = Some(sender);
    }

    ON_MAIN.with(|on_main| on_main.set(true));
    let result = thread::scope(|scope| {
        let app = scope.spawn(move || {
            let _close = CloseQueue;
            f()
        });
        // Ends once the queue is closed and every sender clone is gone.
        for job in receiver {
            job();
        }
        app.join()
    });
    ON_MAIN.with(|on_main| on_main.set(false));

    match result {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Whether the calling thread is the one servicing [`main`].
pub fn is_main_thread() -> bool {
    ON_MAIN.with(Cell::get)
}

/// Run `f` on the servicing thread and wait for its result. Runs inline when
/// already there.
///
/// # Panics
///
/// Panics when [`main`] is not running.
pub fn run<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if is_main_thread() {
        return f();
    }

    let sender = QUEUE.lock().clone().unwrap_or_else(|| not_running());
    let (result_sender, result_receiver) = bounded(1);
    let job: Job = Box::new(move || {
        // The caller waits on the other end for as long as this can run.
        let _ = result_sender.send(f());
    });
    if sender.send(job).is_err() {
        not_running();
    }
    drop(sender);

    result_receiver.recv().unwrap_or_else(|_| not_running())
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the queue is process wide.
    #[test]
    fn jobs_run_on_servicing_thread() {
        let servicing = thread::current().id();
        let (app_thread, job_thread, nested) = main(|| {
            assert!(!is_main_thread());
            let job_thread = run(|| thread::current().id());
            let nested = run(|| run(|| 7) + 1);
            (thread::current().id(), job_thread, nested)
        });

        assert_ne!(app_thread, servicing);
        assert_eq!(job_thread, servicing);
        assert_eq!(nested, 8);
        assert!(!is_main_thread());

        let outside = std::panic::catch_unwind(|| run(|| ()));
        assert!(outside.is_err());
    }
}
