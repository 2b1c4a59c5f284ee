use std::ffi::NulError;

use sdl2_sys as sys;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A call signalled failure; carries the native last-error text captured
    /// immediately after that call.
    #[error("{0}")]
    Native(String),
    /// Rejected before reaching native code.
    #[error("invalid parameters")]
    InvalidParameters,
    /// The entry point is absent from the loaded library.
    #[error("{0} is not supported by the loaded library")]
    Unsupported(&'static str),
    #[error("failed to open the SDL2 library: {0}")]
    Library(#[from] libloading::Error),
    #[error(transparent)]
    MissingSymbol(#[from] sys::MissingSymbol),
    #[error("string contains an interior nul byte")]
    Nul(#[from] NulError),
}

pub type Result<T> = std::result::Result<T, Error>;
