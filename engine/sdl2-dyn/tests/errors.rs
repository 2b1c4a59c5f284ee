mod fake;

use sdl2_dyn::{pixels::Masks, sdl2_sys as sys, Error};

#[test]
fn failures_carry_the_native_message() {
    let sdl = fake::sdl();

    match sdl.init_subsystem(sys::INIT_HAPTIC) {
        Err(Error::Native(message)) => assert_eq!(message, fake::INIT_FAILURE),
        other => panic!("unexpected result {other:?}"),
    }

    match sdl.create_window("fake", 0, 0, 64, 64, 0) {
        Err(err) => {
            assert!(matches!(err, Error::Native(_)));
            assert_eq!(err.to_string(), fake::WINDOW_FAILURE);
        }
        Ok(_) => panic!("window creation should fail"),
    }

    match sdl.pixel_format_enum_to_masks(sys::PIXELFORMAT_UNKNOWN) {
        Err(Error::Native(message)) => assert_eq!(message, fake::FORMAT_FAILURE),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn successes_return_values() {
    let sdl = fake::sdl();
    sdl.init_subsystem(sys::INIT_TIMER).unwrap();
    assert_eq!(
        sdl.pixel_format_enum_to_masks(sys::PIXELFORMAT_ARGB8888).unwrap(),
        Masks {
            bpp: 32,
            r: 0x00ff_0000,
            g: 0x0000_ff00,
            b: 0x0000_00ff,
            a: 0xff00_0000,
        }
    );
}

#[test]
fn error_text_round_trips_through_clear() {
    let sdl = fake::sdl();
    assert!(sdl.init_subsystem(sys::INIT_HAPTIC).is_err());
    assert_eq!(sdl.get_error(), fake::INIT_FAILURE);
    sdl.clear_error();
    assert_eq!(sdl.get_error(), "");
}

#[test]
fn missing_entry_points_are_unsupported() {
    let sdl = fake::sdl();
    assert!(sdl.functions().SDL_SensorOpen.is_none());
    assert!(matches!(
        sdl.sensor_open(0),
        Err(Error::Unsupported("SDL_SensorOpen"))
    ));
    assert!(matches!(
        sdl.num_sensors(),
        Err(Error::Unsupported("SDL_NumSensors"))
    ));
    assert!(matches!(
        sdl.set_error("boom"),
        Err(Error::Unsupported("SDL_SetError"))
    ));
}

#[test]
fn empty_inputs_are_rejected_before_native_calls() {
    let sdl = fake::sdl();
    assert!(matches!(sdl.rw_from_mem(&mut []), Err(Error::InvalidParameters)));
    assert!(matches!(sdl.rw_from_const_mem(&[]), Err(Error::InvalidParameters)));
    assert!(matches!(sdl.add_events(&[]), Err(Error::InvalidParameters)));
}

#[test]
fn interior_nul_is_rejected() {
    let sdl = fake::sdl();
    assert!(matches!(sdl.set_hint("BAD\0NAME", "1"), Err(Error::Nul(_))));
}
