mod fake;

use std::sync::{Arc, Mutex};

use sdl2_dyn::sdl2_sys as sys;

// Variadic arguments travel on the stack there, which the fixed-argument
// stand-in cannot read.
#[cfg_attr(
    all(target_vendor = "apple", target_arch = "aarch64"),
    ignore = "fake SDL_LogMessage needs a register based variadic ABI"
)]
#[test]
fn output_follows_priorities_until_reset() {
    let sdl = fake::sdl();
    let seen = Arc::new(Mutex::new(Vec::new()));

    assert!(!sdl.log_output_is_set());
    let log = seen.clone();
    sdl.set_log_output(move |category, priority, message| {
        log.lock().unwrap().push((category, priority, message.to_owned()));
    });
    assert!(sdl.log_output_is_set());

    let app = sys::LOG_CATEGORY_APPLICATION;
    sdl.log_set_priority(app, sys::LOG_PRIORITY_WARN);
    assert_eq!(sdl.log_get_priority(app), sys::LOG_PRIORITY_WARN);
    sdl.log_info(app, "filtered").unwrap();
    sdl.log_warn(app, "warned").unwrap();
    sdl.log_critical(app, "100% %s").unwrap();
    sdl.log_debug(sys::LOG_CATEGORY_RENDER, "below the default").unwrap();
    sdl.log_verbose(sys::LOG_CATEGORY_TEST, "tests hear everything").unwrap();

    sdl.log_set_all_priority(sys::LOG_PRIORITY_ERROR);
    sdl.log_warn(sys::LOG_CATEGORY_TEST, "filtered").unwrap();
    sdl.log_error(sys::LOG_CATEGORY_VIDEO, "errored").unwrap();

    sdl.log_reset_priorities();
    assert_eq!(sdl.log_get_priority(app), sys::LOG_PRIORITY_INFO);
    sdl.log("restored").unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        [
            (app, sys::LOG_PRIORITY_WARN, "warned".to_owned()),
            (app, sys::LOG_PRIORITY_CRITICAL, "100% %s".to_owned()),
            (sys::LOG_CATEGORY_TEST, sys::LOG_PRIORITY_VERBOSE, "tests hear everything".to_owned()),
            (sys::LOG_CATEGORY_VIDEO, sys::LOG_PRIORITY_ERROR, "errored".to_owned()),
            (app, sys::LOG_PRIORITY_INFO, "restored".to_owned()),
        ]
    );

    sdl.reset_log_output();
    assert!(!sdl.log_output_is_set());
    let (function, _) = sdl.log_output_function();
    assert_eq!(
        function.map(|function| function as usize),
        Some(fake::default_output as sys::LogOutputFunction as usize)
    );

    sdl.log_critical(app, "after reset").unwrap();
    assert_eq!(seen.lock().unwrap().len(), 5);
}
