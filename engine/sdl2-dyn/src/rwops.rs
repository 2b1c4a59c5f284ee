//! Native data streams over memory, files and Rust I/O objects.

use std::{
    ffi::{c_void, CString},
    io::{self, Read, Seek, SeekFrom, Write},
    marker::PhantomData,
    ptr::NonNull,
};

use sdl2_sys as sys;

use crate::{Error, Result, Sdl};

/// A native `SDL_RWops`. Closed on drop.
///
/// `'a` covers both the context and any memory the stream reads from or
/// writes to.
pub struct RWops<'a> {
    sdl: &'a Sdl,
    raw: NonNull<sys::RWops>,
    _data: PhantomData<&'a mut [u8]>,
}

trait Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;
    fn flush(&mut self) -> io::Result<()>;
}

struct ReadOnly<R>(R);

impl<R: Read + Seek> Stream for ReadOnly<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }

    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "stream is read only"))
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct ReadWrite<S>(S);

impl<S: Read + Write + Seek> Stream for ReadWrite<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Owned through `hidden.unknown.data1` of a custom stream.
struct StreamState<'a> {
    stream: Box<dyn Stream + 'a>,
    free_rw: unsafe extern "C" fn(*mut sys::RWops),
    set_error: Option<sys::SetErrorFn>,
}

impl StreamState<'_> {
    fn fail(&self, err: &io::Error) {
        let Some(set_error) = self.set_error else {
            return;
        };
        if let Ok(message) = CString::new(err.to_string()) {
            unsafe { set_error(c"%s".as_ptr(), message.as_ptr()) };
        }
    }
}

unsafe fn stream_state<'s>(context: *mut sys::RWops) -> &'s mut StreamState<'static> {
    &mut *(*context).hidden.unknown.data1.cast::<StreamState<'static>>()
}

unsafe extern "C" fn stream_size(context: *mut sys::RWops) -> i64 {
    let state = stream_state(context);
    let size = (|| -> io::Result<u64> {
        let here = state.stream.seek(SeekFrom::Current(0))?;
        let end = state.stream.seek(SeekFrom::End(0))?;
        state.stream.seek(SeekFrom::Start(here))?;
        Ok(end)
    })();
    match size {
        Ok(size) => size as i64,
        Err(err) => {
            state.fail(&err);
            -1
        }
    }
}

fn seek_from(offset: i64, whence: i32) -> Option<SeekFrom> {
    match whence {
        sys::RW_SEEK_SET => u64::try_from(offset).ok().map(SeekFrom::Start),
        sys::RW_SEEK_CUR => Some(SeekFrom::Current(offset)),
        sys::RW_SEEK_END => Some(SeekFrom::End(offset)),
        _ => None,
    }
}

unsafe extern "C" fn stream_seek(context: *mut sys::RWops, offset: i64, whence: i32) -> i64 {
    let state = stream_state(context);
    let Some(pos) = seek_from(offset, whence) else {
        state.fail(&io::Error::from(io::ErrorKind::InvalidInput));
        return -1;
    };
    match state.stream.seek(pos) {
        Ok(pos) => pos as i64,
        Err(err) => {
            state.fail(&err);
            -1
        }
    }
}

unsafe extern "C" fn stream_read(
    context: *mut sys::RWops,
    ptr: *mut c_void,
    size: usize,
    maxnum: usize,
) -> usize {
    let state = stream_state(context);
    let Some(len) = size.checked_mul(maxnum).filter(|&len| len > 0) else {
        return 0;
    };
    let buf = std::slice::from_raw_parts_mut(ptr.cast::<u8>(), len);

    let mut filled = 0;
    while filled < len {
        match state.stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                state.fail(&err);
                break;
            }
        }
    }
    filled / size
}

unsafe extern "C" fn stream_write(
    context: *mut sys::RWops,
    ptr: *const c_void,
    size: usize,
    num: usize,
) -> usize {
    let state = stream_state(context);
    let Some(len) = size.checked_mul(num).filter(|&len| len > 0) else {
        return 0;
    };
    let buf = std::slice::from_raw_parts(ptr.cast::<u8>(), len);

    let mut written = 0;
    while written < len {
        match state.stream.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                state.fail(&err);
                break;
            }
        }
    }
    written / size
}

unsafe extern "C" fn stream_close(context: *mut sys::RWops) -> i32 {
    let mut state = Box::from_raw((*context).hidden.unknown.data1.cast::<StreamState<'static>>());
    let flushed = state.stream.flush();
    if let Err(err) = &flushed {
        state.fail(err);
    }
    let free_rw = state.free_rw;
    drop(state);
    free_rw(context);
    match flushed {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

impl Sdl {
    /// A read-write stream over `mem`. Writes never grow the buffer.
    pub fn rw_from_mem<'a>(&'a self, mem: &'a mut [u8]) -> Result<RWops<'a>> {
        let size = crate::non_empty_count(mem.len())?;
        let raw = self.check_ptr(unsafe { (self.fns.SDL_RWFromMem)(mem.as_mut_ptr().cast(), size) })?;
        Ok(RWops::from_raw(self, raw))
    }

    pub fn rw_from_const_mem<'a>(&'a self, mem: &'a [u8]) -> Result<RWops<'a>> {
        let size = crate::non_empty_count(mem.len())?;
        let raw =
            self.check_ptr(unsafe { (self.fns.SDL_RWFromConstMem)(mem.as_ptr().cast(), size) })?;
        Ok(RWops::from_raw(self, raw))
    }

    /// Open `path` with a C `fopen` style `mode` such as `"rb"`.
    pub fn rw_from_file(&self, path: &str, mode: &str) -> Result<RWops<'_>> {
        let path = CString::new(path)?;
        let mode = CString::new(mode)?;
        let raw = self.check_ptr(unsafe { (self.fns.SDL_RWFromFile)(path.as_ptr(), mode.as_ptr()) })?;
        Ok(RWops::from_raw(self, raw))
    }

    /// Expose a Rust reader to native code. Native writes fail.
    pub fn rw_from_reader<'a, R>(&'a self, reader: R) -> Result<RWops<'a>>
    where
        R: Read + Seek + 'a,
    {
        self.rw_from_boxed(Box::new(ReadOnly(reader)))
    }

    /// Expose a Rust stream to native code.
    pub fn rw_from_stream<'a, S>(&'a self, stream: S) -> Result<RWops<'a>>
    where
        S: Read + Write + Seek + 'a,
    {
        self.rw_from_boxed(Box::new(ReadWrite(stream)))
    }

    fn rw_from_boxed<'a>(&'a self, stream: Box<dyn Stream + 'a>) -> Result<RWops<'a>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_AllocRW)() })?;
        let state = Box::new(StreamState {
            stream,
            free_rw: self.fns.SDL_FreeRW,
            set_error: self.varargs.SDL_SetError,
        });

        unsafe {
            let rw = raw.as_ptr();
            (*rw).size = Some(stream_size);
            (*rw).seek = Some(stream_seek);
            (*rw).read = Some(stream_read);
            (*rw).write = Some(stream_write);
            (*rw).close = Some(stream_close);
            (*rw).r#type = sys::RWOPS_UNKNOWN;
            (*rw).hidden.unknown = sys::RWopsUnknown {
                data1: Box::into_raw(state).cast(),
                data2: std::ptr::null_mut(),
            };
        }
        Ok(RWops::from_raw(self, raw))
    }

    /// Read all of `path` into memory.
    pub fn load_file(&self, path: &str) -> Result<Vec<u8>> {
        self.rw_from_file(path, "rb")?.load_file()
    }
}

macro_rules! read_primitives {
    ($($name:ident => $native:ident: $ty:ty;)*) => {
        $(
            /// Zero at end of stream or on error.
            pub fn $name(&mut self) -> $ty {
                unsafe { (self.sdl.fns.$native)(self.raw.as_ptr()) }
            }
        )*
    };
}

macro_rules! write_primitives {
    ($($name:ident => $native:ident: $ty:ty;)*) => {
        $(
            /// Returns 1 on success, 0 when the value did not fit.
            pub fn $name(&mut self, value: $ty) -> usize {
                unsafe { (self.sdl.fns.$native)(self.raw.as_ptr(), value) }
            }
        )*
    };
}

impl<'a> RWops<'a> {
    fn from_raw(sdl: &'a Sdl, raw: NonNull<sys::RWops>) -> Self {
        Self {
            sdl,
            raw,
            _data: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *mut sys::RWops {
        self.raw.as_ptr()
    }

    /// Hand the stream to a native call that closes it.
    pub(crate) fn into_raw(self) -> *mut sys::RWops {
        let raw = self.raw.as_ptr();
        std::mem::forget(self);
        raw
    }

    /// One of the `sys::RWOPS_*` kinds.
    pub fn kind(&self) -> u32 {
        unsafe { (*self.raw.as_ptr()).r#type }
    }

    pub fn size(&mut self) -> Result<i64> {
        let size = unsafe { (*self.raw.as_ptr()).size }.ok_or(Error::Unsupported("RWops::size"))?;
        match unsafe { size(self.raw.as_ptr()) } {
            size if size < 0 => Err(self.sdl.last_error()),
            size => Ok(size),
        }
    }

    /// Returns the new offset from the start of the stream.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let (offset, whence) = match pos {
            SeekFrom::Start(offset) => (
                i64::try_from(offset).map_err(|_| Error::InvalidParameters)?,
                sys::RW_SEEK_SET,
            ),
            SeekFrom::Current(offset) => (offset, sys::RW_SEEK_CUR),
            SeekFrom::End(offset) => (offset, sys::RW_SEEK_END),
        };
        let seek = unsafe { (*self.raw.as_ptr()).seek }.ok_or(Error::Unsupported("RWops::seek"))?;
        match unsafe { seek(self.raw.as_ptr(), offset, whence) } {
            pos if pos < 0 => Err(self.sdl.last_error()),
            pos => Ok(pos as u64),
        }
    }

    pub fn tell(&mut self) -> Result<u64> {
        self.seek(SeekFrom::Current(0))
    }

    /// Read up to `buf.len() / size` objects of `size` bytes, returning how
    /// many were read. Zero means end of stream or an error.
    pub fn read(&mut self, buf: &mut [u8], size: usize) -> Result<usize> {
        if size == 0 {
            return Err(Error::InvalidParameters);
        }
        let read = unsafe { (*self.raw.as_ptr()).read }.ok_or(Error::Unsupported("RWops::read"))?;
        Ok(unsafe { read(self.raw.as_ptr(), buf.as_mut_ptr().cast(), size, buf.len() / size) })
    }

    /// Write `buf.len() / size` objects of `size` bytes, returning how many
    /// were written.
    pub fn write(&mut self, buf: &[u8], size: usize) -> Result<usize> {
        if size == 0 {
            return Err(Error::InvalidParameters);
        }
        let write =
            unsafe { (*self.raw.as_ptr()).write }.ok_or(Error::Unsupported("RWops::write"))?;
        Ok(unsafe { write(self.raw.as_ptr(), buf.as_ptr().cast(), size, buf.len() / size) })
    }

    read_primitives! {
        read_u8 => SDL_ReadU8: u8;
        read_le16 => SDL_ReadLE16: u16;
        read_be16 => SDL_ReadBE16: u16;
        read_le32 => SDL_ReadLE32: u32;
        read_be32 => SDL_ReadBE32: u32;
        read_le64 => SDL_ReadLE64: u64;
        read_be64 => SDL_ReadBE64: u64;
    }

    write_primitives! {
        write_u8 => SDL_WriteU8: u8;
        write_le16 => SDL_WriteLE16: u16;
        write_be16 => SDL_WriteBE16: u16;
        write_le32 => SDL_WriteLE32: u32;
        write_be32 => SDL_WriteBE32: u32;
        write_le64 => SDL_WriteLE64: u64;
        write_be64 => SDL_WriteBE64: u64;
    }

    /// Read from the current position to the end, then close the stream.
    pub fn load_file(self) -> Result<Vec<u8>> {
        let sdl = self.sdl;
        let mut size = 0;
        let data = unsafe { (sdl.fns.SDL_LoadFile_RW)(self.into_raw(), &mut size, 1) };
        let data = sdl.check_ptr(data)?;
        let bytes = unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<u8>(), size) }.to_vec();
        unsafe { (sdl.fns.SDL_free)(data.as_ptr()) };
        Ok(bytes)
    }

    /// Close the stream, reporting a failure to flush.
    pub fn close(self) -> Result<()> {
        let sdl = self.sdl;
        let raw = self.into_raw();
        let close = unsafe { (*raw).close }.ok_or(Error::Unsupported("RWops::close"))?;
        sdl.check(unsafe { close(raw) })?;
        Ok(())
    }
}

impl Drop for RWops<'_> {
    fn drop(&mut self) {
        if let Some(close) = unsafe { (*self.raw.as_ptr()).close } {
            unsafe { close(self.raw.as_ptr()) };
        }
    }
}

impl Read for RWops<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        RWops::read(self, buf, 1).map_err(io::Error::other)
    }
}

impl Write for RWops<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match RWops::write(self, buf, 1).map_err(io::Error::other)? {
            0 => Err(io::Error::other(self.sdl.get_error())),
            written => Ok(written),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for RWops<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        RWops::seek(self, pos).map_err(io::Error::other)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Cursor,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    static FREED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn count_free(_rw: *mut sys::RWops) {
        FREED.fetch_add(1, Ordering::SeqCst);
    }

    fn custom(stream: Box<dyn Stream + '_>) -> sys::RWops {
        let state = Box::new(StreamState {
            stream,
            free_rw: count_free,
            set_error: None,
        });
        sys::RWops {
            size: Some(stream_size),
            seek: Some(stream_seek),
            read: Some(stream_read),
            write: Some(stream_write),
            close: Some(stream_close),
            r#type: sys::RWOPS_UNKNOWN,
            hidden: sys::RWopsHidden {
                unknown: sys::RWopsUnknown {
                    data1: Box::into_raw(state).cast(),
                    data2: std::ptr::null_mut(),
                },
            },
        }
    }

    #[test]
    fn whence_mapping() {
        assert_eq!(seek_from(4, sys::RW_SEEK_SET), Some(SeekFrom::Start(4)));
        assert_eq!(seek_from(-4, sys::RW_SEEK_SET), None);
        assert_eq!(seek_from(-2, sys::RW_SEEK_END), Some(SeekFrom::End(-2)));
        assert_eq!(seek_from(0, 7), None);
    }

    #[test]
    fn custom_stream_reads_whole_objects() {
        let mut rw = custom(Box::new(ReadOnly(Cursor::new(vec![1u8, 2, 3, 4, 5]))));
        let rw = &mut rw as *mut sys::RWops;
        let mut buf = [0u8; 4];
        unsafe {
            assert_eq!(stream_size(rw), 5);
            assert_eq!(stream_read(rw, buf.as_mut_ptr().cast(), 2, 2), 2);
            assert_eq!(buf, [1, 2, 3, 4]);
            assert_eq!(stream_seek(rw, 0, sys::RW_SEEK_CUR), 4);
            // One byte left, not enough for an object of two.
            assert_eq!(stream_read(rw, buf.as_mut_ptr().cast(), 2, 1), 0);
            assert_eq!(stream_write(rw, buf.as_ptr().cast(), 1, 1), 0);

            let freed = FREED.load(Ordering::SeqCst);
            assert_eq!(stream_close(rw), 0);
            assert!(FREED.load(Ordering::SeqCst) > freed);
        }
    }

    #[test]
    fn custom_stream_writes() {
        let mut backing = [0u8; 6];
        {
            let mut rw = custom(Box::new(ReadWrite(Cursor::new(&mut backing[..]))));
            let rw = &mut rw as *mut sys::RWops;
            unsafe {
                assert_eq!(stream_seek(rw, 2, sys::RW_SEEK_SET), 2);
                assert_eq!(stream_write(rw, b"abcd".as_ptr().cast(), 2, 2), 2);
                // The cursor cannot grow past the slice.
                assert_eq!(stream_write(rw, b"zz".as_ptr().cast(), 2, 1), 0);
                assert_eq!(stream_seek(rw, -1, sys::RW_SEEK_SET), -1);
                assert_eq!(stream_close(rw), 0);
            }
        }
        assert_eq!(&backing, b"\0\0abcd");
    }
}
