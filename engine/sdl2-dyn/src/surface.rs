//! Software surfaces, blitting and BMP files.

use std::{marker::PhantomData, ptr::NonNull};

use sdl2_sys as sys;
use sys::Rect;

use crate::{opt_ptr, pixels::Masks, pixels::Palette, rwops::RWops, Error, Result, Sdl};

/// A native `SDL_Surface`.
///
/// Surfaces from the `create_*` and `load_*` functions are freed on drop.
/// A window's surface belongs to the window and is left alone.
pub struct Surface<'a> {
    sdl: &'a Sdl,
    raw: NonNull<sys::Surface>,
    owned: bool,
    _pixels: PhantomData<&'a mut [u8]>,
}

fn check_pixels_len(len: usize, pitch: i32, height: i32) -> Result<()> {
    let pitch = usize::try_from(pitch).map_err(|_| Error::InvalidParameters)?;
    let height = usize::try_from(height).map_err(|_| Error::InvalidParameters)?;
    match pitch.checked_mul(height) {
        Some(needed) if needed <= len => Ok(()),
        _ => Err(Error::InvalidParameters),
    }
}

impl<'a> Surface<'a> {
    pub(crate) fn owned(sdl: &'a Sdl, raw: NonNull<sys::Surface>) -> Self {
        Self {
            sdl,
            raw,
            owned: true,
            _pixels: PhantomData,
        }
    }

    pub(crate) fn borrowed(sdl: &'a Sdl, raw: NonNull<sys::Surface>) -> Self {
        Self {
            owned: false,
            ..Self::owned(sdl, raw)
        }
    }

    fn raw(&self) -> &sys::Surface {
        unsafe { self.raw.as_ref() }
    }

    pub(crate) fn sdl(&self) -> &'a Sdl {
        self.sdl
    }

    pub fn as_ptr(&self) -> *mut sys::Surface {
        self.raw.as_ptr()
    }

    pub fn width(&self) -> i32 {
        self.raw().w
    }

    pub fn height(&self) -> i32 {
        self.raw().h
    }

    /// Bytes per row.
    pub fn pitch(&self) -> i32 {
        self.raw().pitch
    }

    pub fn flags(&self) -> u32 {
        self.raw().flags
    }

    pub fn format(&self) -> &sys::PixelFormat {
        unsafe { &*self.raw().format }
    }

    pub fn pixel_format_enum(&self) -> u32 {
        self.format().format
    }

    /// RLE encoded surfaces must be locked before touching pixels.
    pub fn must_lock(&self) -> bool {
        self.raw().flags & sys::RLEACCEL != 0
    }

    fn pixels_len(&self) -> usize {
        let raw = self.raw();
        usize::try_from(raw.pitch).unwrap_or(0) * usize::try_from(raw.h).unwrap_or(0)
    }

    /// The pixel rows, `None` while the surface needs locking.
    pub fn pixels(&self) -> Option<&[u8]> {
        let raw = self.raw();
        if raw.pixels.is_null() || (self.must_lock() && raw.locked == 0) {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts(raw.pixels.cast(), self.pixels_len()) })
    }

    pub fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        let len = self.pixels_len();
        let raw = self.raw();
        if raw.pixels.is_null() || (self.must_lock() && raw.locked == 0) {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts_mut(raw.pixels.cast(), len) })
    }

    /// Lock, run `f` over the pixel rows, then unlock.
    pub fn with_lock<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> Result<R> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_LockSurface)(self.raw.as_ptr()) })?;
        let len = self.pixels_len();
        let pixels = self.raw().pixels;
        let result = if pixels.is_null() {
            f(&mut [])
        } else {
            f(unsafe { std::slice::from_raw_parts_mut(pixels.cast(), len) })
        };
        unsafe { (self.sdl.fns.SDL_UnlockSurface)(self.raw.as_ptr()) };
        Ok(result)
    }

    pub fn set_palette(&mut self, palette: &Palette<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetSurfacePalette)(self.raw.as_ptr(), palette.as_ptr())
        })?;
        Ok(())
    }

    pub fn set_rle(&mut self, enabled: bool) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetSurfaceRLE)(self.raw.as_ptr(), i32::from(enabled))
        })?;
        Ok(())
    }

    /// Make pixels equal to `key` transparent, or stop doing so.
    pub fn set_color_key(&mut self, enabled: bool, key: u32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetColorKey)(self.raw.as_ptr(), i32::from(enabled), key)
        })?;
        Ok(())
    }

    /// Fails when no color key is set.
    pub fn color_key(&self) -> Result<u32> {
        let mut key = 0;
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_GetColorKey)(self.raw.as_ptr(), &mut key) })?;
        Ok(key)
    }

    pub fn has_color_key(&self) -> Result<bool> {
        let has_color_key = optional_fn!(self.sdl, SDL_HasColorKey);
        Ok(unsafe { has_color_key(self.raw.as_ptr()) }.into())
    }

    pub fn set_color_mod(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetSurfaceColorMod)(self.raw.as_ptr(), r, g, b)
        })?;
        Ok(())
    }

    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetSurfaceColorMod)(self.raw.as_ptr(), &mut r, &mut g, &mut b)
        })?;
        Ok((r, g, b))
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetSurfaceAlphaMod)(self.raw.as_ptr(), alpha)
        })?;
        Ok(())
    }

    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetSurfaceAlphaMod)(self.raw.as_ptr(), &mut alpha)
        })?;
        Ok(alpha)
    }

    pub fn set_blend_mode(&mut self, mode: sys::BlendMode) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetSurfaceBlendMode)(self.raw.as_ptr(), mode)
        })?;
        Ok(())
    }

    pub fn blend_mode(&self) -> Result<sys::BlendMode> {
        let mut mode = sys::BLENDMODE_NONE;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetSurfaceBlendMode)(self.raw.as_ptr(), &mut mode)
        })?;
        Ok(mode)
    }

    /// Restrict blits into this surface to `rect`, or lift the restriction.
    /// Returns `false` when `rect` misses the surface, leaving nothing
    /// drawable.
    pub fn set_clip_rect(&mut self, rect: Option<&Rect>) -> bool {
        unsafe { (self.sdl.fns.SDL_SetClipRect)(self.raw.as_ptr(), opt_ptr(rect)) }.into()
    }

    pub fn clip_rect(&self) -> Rect {
        let mut rect = Rect::default();
        unsafe { (self.sdl.fns.SDL_GetClipRect)(self.raw.as_ptr(), &mut rect) };
        rect
    }

    pub fn duplicate(&self) -> Result<Surface<'a>> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.fns.SDL_DuplicateSurface)(self.raw.as_ptr()) })?;
        Ok(Surface::owned(self.sdl, raw))
    }

    pub fn convert(&self, format: &sys::PixelFormat) -> Result<Surface<'a>> {
        let raw = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_ConvertSurface)(self.raw.as_ptr(), format, 0)
        })?;
        Ok(Surface::owned(self.sdl, raw))
    }

    pub fn convert_format(&self, format: u32) -> Result<Surface<'a>> {
        let raw = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_ConvertSurfaceFormat)(self.raw.as_ptr(), format, 0)
        })?;
        Ok(Surface::owned(self.sdl, raw))
    }

    /// Fill `rect`, or the whole clip area, with a mapped `color`.
    pub fn fill_rect(&mut self, rect: Option<&Rect>, color: u32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_FillRect)(self.raw.as_ptr(), opt_ptr(rect), color)
        })?;
        Ok(())
    }

    pub fn fill_rects(&mut self, rects: &[Rect], color: u32) -> Result<()> {
        let count = crate::non_empty_count(rects.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_FillRects)(self.raw.as_ptr(), rects.as_ptr(), count, color)
        })?;
        Ok(())
    }

    /// Copy `src_rect` of `self` into `dst` at `dst_rect`'s position,
    /// returning the area actually written after clipping.
    pub fn blit(&self, src_rect: Option<&Rect>, dst: &mut Surface<'_>, dst_rect: Option<Rect>) -> Result<Rect> {
        let mut dst_rect = dst_rect.unwrap_or_default();
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_UpperBlit)(
                self.raw.as_ptr(),
                opt_ptr(src_rect),
                dst.raw.as_ptr(),
                &mut dst_rect,
            )
        })?;
        Ok(dst_rect)
    }

    /// Like [`blit`](Self::blit), stretching `src_rect` to fill `dst_rect`.
    pub fn blit_scaled(
        &self,
        src_rect: Option<&Rect>,
        dst: &mut Surface<'_>,
        dst_rect: Option<Rect>,
    ) -> Result<Rect> {
        let mut rect = dst_rect.unwrap_or_default();
        let dst_ptr = if dst_rect.is_some() {
            &mut rect as *mut Rect
        } else {
            std::ptr::null_mut()
        };
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_UpperBlitScaled)(
                self.raw.as_ptr(),
                opt_ptr(src_rect),
                dst.raw.as_ptr(),
                dst_ptr,
            )
        })?;
        Ok(if dst_rect.is_some() { rect } else { dst.clip_rect() })
    }

    /// Blit with rectangles already clipped to both surfaces.
    pub fn lower_blit(&self, src_rect: &mut Rect, dst: &mut Surface<'_>, dst_rect: &mut Rect) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_LowerBlit)(self.raw.as_ptr(), src_rect, dst.raw.as_ptr(), dst_rect)
        })?;
        Ok(())
    }

    pub fn lower_blit_scaled(
        &self,
        src_rect: &mut Rect,
        dst: &mut Surface<'_>,
        dst_rect: &mut Rect,
    ) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_LowerBlitScaled)(self.raw.as_ptr(), src_rect, dst.raw.as_ptr(), dst_rect)
        })?;
        Ok(())
    }

    /// Nearest neighbour stretch between surfaces of the same format.
    pub fn soft_stretch(
        &self,
        src_rect: Option<&Rect>,
        dst: &mut Surface<'_>,
        dst_rect: Option<&Rect>,
    ) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SoftStretch)(
                self.raw.as_ptr(),
                opt_ptr(src_rect),
                dst.raw.as_ptr(),
                opt_ptr(dst_rect),
            )
        })?;
        Ok(())
    }

    pub fn save_bmp_rw(&self, dst: &mut RWops<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SaveBMP_RW)(self.raw.as_ptr(), dst.as_ptr(), 0)
        })?;
        Ok(())
    }

    pub fn save_bmp(&self, path: &str) -> Result<()> {
        let mut dst = self.sdl.rw_from_file(path, "wb")?;
        self.save_bmp_rw(&mut dst)?;
        dst.close()
    }
}

impl Drop for Surface<'_> {
    fn drop(&mut self) {
        if self.owned {
            unsafe { (self.sdl.fns.SDL_FreeSurface)(self.raw.as_ptr()) }
        }
    }
}

impl Sdl {
    pub fn create_rgb_surface(&self, width: i32, height: i32, masks: &Masks) -> Result<Surface<'_>> {
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateRGBSurface)(
                0, width, height, masks.bpp, masks.r, masks.g, masks.b, masks.a,
            )
        })?;
        Ok(Surface::owned(self, raw))
    }

    pub fn create_rgb_surface_with_format(
        &self,
        width: i32,
        height: i32,
        depth: i32,
        format: u32,
    ) -> Result<Surface<'_>> {
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateRGBSurfaceWithFormat)(0, width, height, depth, format)
        })?;
        Ok(Surface::owned(self, raw))
    }

    /// A surface drawing straight into `pixels`, which must hold `height`
    /// rows of `pitch` bytes.
    pub fn create_rgb_surface_from<'a>(
        &'a self,
        pixels: &'a mut [u8],
        width: i32,
        height: i32,
        pitch: i32,
        masks: &Masks,
    ) -> Result<Surface<'a>> {
        check_pixels_len(pixels.len(), pitch, height)?;
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateRGBSurfaceFrom)(
                pixels.as_mut_ptr().cast(),
                width,
                height,
                masks.bpp,
                pitch,
                masks.r,
                masks.g,
                masks.b,
                masks.a,
            )
        })?;
        Ok(Surface::owned(self, raw))
    }

    pub fn create_rgb_surface_with_format_from<'a>(
        &'a self,
        pixels: &'a mut [u8],
        width: i32,
        height: i32,
        depth: i32,
        pitch: i32,
        format: u32,
    ) -> Result<Surface<'a>> {
        check_pixels_len(pixels.len(), pitch, height)?;
        let raw = self.check_ptr(unsafe {
            (self.fns.SDL_CreateRGBSurfaceWithFormatFrom)(
                pixels.as_mut_ptr().cast(),
                width,
                height,
                depth,
                pitch,
                format,
            )
        })?;
        Ok(Surface::owned(self, raw))
    }

    /// Decode a BMP stream, closing it.
    pub fn load_bmp_rw<'sdl>(&'sdl self, src: RWops<'_>) -> Result<Surface<'sdl>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_LoadBMP_RW)(src.into_raw(), 1) })?;
        Ok(Surface::owned(self, raw))
    }

    pub fn load_bmp(&self, path: &str) -> Result<Surface<'_>> {
        self.load_bmp_rw(self.rw_from_file(path, "rb")?)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn convert_pixels(
        &self,
        width: i32,
        height: i32,
        src_format: u32,
        src: &[u8],
        src_pitch: i32,
        dst_format: u32,
        dst: &mut [u8],
        dst_pitch: i32,
    ) -> Result<()> {
        check_pixels_len(src.len(), src_pitch, height)?;
        check_pixels_len(dst.len(), dst_pitch, height)?;
        self.check(unsafe {
            (self.fns.SDL_ConvertPixels)(
                width,
                height,
                src_format,
                src.as_ptr().cast(),
                src_pitch,
                dst_format,
                dst.as_mut_ptr().cast(),
                dst_pitch,
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_buffers_must_cover_every_row() {
        assert!(check_pixels_len(64, 16, 4).is_ok());
        assert!(matches!(check_pixels_len(63, 16, 4), Err(Error::InvalidParameters)));
        assert!(matches!(check_pixels_len(64, -16, 4), Err(Error::InvalidParameters)));
        assert!(matches!(check_pixels_len(64, i32::MAX, i32::MAX), Err(Error::InvalidParameters)));
    }
}
