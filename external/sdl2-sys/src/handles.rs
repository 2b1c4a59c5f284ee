macro_rules! opaque_handle {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _unused: [u8; 0],
            }
        )*
    };
}

opaque_handle!(
    Window,
    Renderer,
    Texture,
    Joystick,
    GameController,
    Haptic,
    Sensor,
    Cursor,
    Mutex,
    Semaphore,
    Cond,
    AudioStream,
    BlitMap,
    SysWMmsg,
);
