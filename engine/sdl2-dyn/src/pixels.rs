//! Pixel format enums, allocated formats and palettes.

use std::{ops::Deref, ptr::NonNull};

use sdl2_sys as sys;
use sys::Color;

use crate::{string_from_ptr, Result, Sdl};

pub const fn pixel_flag(format: u32) -> u32 {
    (format >> 28) & 0x0F
}

/// One of the `sys::PIXELTYPE_*` values.
pub const fn pixel_type(format: u32) -> u32 {
    (format >> 24) & 0x0F
}

pub const fn pixel_order(format: u32) -> u32 {
    (format >> 20) & 0x0F
}

pub const fn pixel_layout(format: u32) -> u32 {
    (format >> 16) & 0x0F
}

pub const fn bits_per_pixel(format: u32) -> u32 {
    (format >> 8) & 0xFF
}

/// YUV formats are identified by a four character code instead of packed
/// fields.
pub const fn is_fourcc(format: u32) -> bool {
    format != 0 && pixel_flag(format) != 1
}

pub const fn bytes_per_pixel(format: u32) -> u32 {
    if is_fourcc(format) {
        match format {
            sys::PIXELFORMAT_YUY2 | sys::PIXELFORMAT_UYVY | sys::PIXELFORMAT_YVYU => 2,
            _ => 1,
        }
    } else {
        format & 0xFF
    }
}

pub const fn is_indexed(format: u32) -> bool {
    !is_fourcc(format)
        && matches!(
            pixel_type(format),
            sys::PIXELTYPE_INDEX1 | sys::PIXELTYPE_INDEX4 | sys::PIXELTYPE_INDEX8
        )
}

pub const fn is_packed(format: u32) -> bool {
    !is_fourcc(format)
        && matches!(
            pixel_type(format),
            sys::PIXELTYPE_PACKED8 | sys::PIXELTYPE_PACKED16 | sys::PIXELTYPE_PACKED32
        )
}

pub const fn is_array(format: u32) -> bool {
    !is_fourcc(format)
        && matches!(
            pixel_type(format),
            sys::PIXELTYPE_ARRAYU8
                | sys::PIXELTYPE_ARRAYU16
                | sys::PIXELTYPE_ARRAYU32
                | sys::PIXELTYPE_ARRAYF16
                | sys::PIXELTYPE_ARRAYF32
        )
}

pub const fn is_alpha(format: u32) -> bool {
    (is_packed(format)
        && matches!(
            pixel_order(format),
            sys::PACKEDORDER_ARGB
                | sys::PACKEDORDER_RGBA
                | sys::PACKEDORDER_ABGR
                | sys::PACKEDORDER_BGRA
        ))
        || (is_array(format)
            && matches!(
                pixel_order(format),
                sys::ARRAYORDER_ARGB
                    | sys::ARRAYORDER_RGBA
                    | sys::ARRAYORDER_ABGR
                    | sys::ARRAYORDER_BGRA
            ))
}

/// Channel masks for a packed format.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Masks {
    pub bpp: i32,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

/// A pixel format description allocated by the native side. Freed on drop.
pub struct PixelFormat<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::PixelFormat>,
}

impl PixelFormat<'_> {
    pub fn as_ptr(&self) -> *mut sys::PixelFormat {
        self.raw.as_ptr()
    }

    /// Attach `palette` to an indexed format.
    pub fn set_palette(&mut self, palette: &Palette<'_>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetPixelFormatPalette)(self.raw.as_ptr(), palette.raw.as_ptr())
        })?;
        Ok(())
    }
}

impl Deref for PixelFormat<'_> {
    type Target = sys::PixelFormat;

    fn deref(&self) -> &Self::Target {
        unsafe { self.raw.as_ref() }
    }
}

impl Drop for PixelFormat<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_FreeFormat)(self.raw.as_ptr()) }
    }
}

/// A reference counted native palette. Released on drop.
pub struct Palette<'sdl> {
    sdl: &'sdl Sdl,
    raw: NonNull<sys::Palette>,
}

impl Palette<'_> {
    pub fn as_ptr(&self) -> *mut sys::Palette {
        self.raw.as_ptr()
    }

    pub fn colors(&self) -> &[Color] {
        let palette = unsafe { self.raw.as_ref() };
        match usize::try_from(palette.ncolors) {
            Ok(len) if !palette.colors.is_null() => unsafe {
                std::slice::from_raw_parts(palette.colors, len)
            },
            _ => &[],
        }
    }

    /// Overwrite entries starting at `first`.
    pub fn set_colors(&mut self, colors: &[Color], first: i32) -> Result<()> {
        let count = crate::non_empty_count(colors.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetPaletteColors)(self.raw.as_ptr(), colors.as_ptr(), first, count)
        })?;
        Ok(())
    }
}

impl Drop for Palette<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_FreePalette)(self.raw.as_ptr()) }
    }
}

impl Sdl {
    pub fn get_pixel_format_name(&self, format: u32) -> String {
        unsafe { string_from_ptr((self.fns.SDL_GetPixelFormatName)(format)) }
    }

    pub fn pixel_format_enum_to_masks(&self, format: u32) -> Result<Masks> {
        let mut masks = Masks::default();
        self.check_bool(unsafe {
            (self.fns.SDL_PixelFormatEnumToMasks)(
                format,
                &mut masks.bpp,
                &mut masks.r,
                &mut masks.g,
                &mut masks.b,
                &mut masks.a,
            )
        })?;
        Ok(masks)
    }

    /// `sys::PIXELFORMAT_UNKNOWN` when no format matches.
    pub fn masks_to_pixel_format_enum(&self, masks: &Masks) -> u32 {
        unsafe {
            (self.fns.SDL_MasksToPixelFormatEnum)(masks.bpp, masks.r, masks.g, masks.b, masks.a)
        }
    }

    pub fn alloc_format(&self, format: u32) -> Result<PixelFormat<'_>> {
        let raw = self.check_ptr(unsafe { (self.fns.SDL_AllocFormat)(format) })?;
        Ok(PixelFormat { sdl: self, raw })
    }

    /// A palette of `ncolors` entries, all white.
    pub fn alloc_palette(&self, ncolors: usize) -> Result<Palette<'_>> {
        let ncolors = crate::non_empty_count(ncolors)?;
        let raw = self.check_ptr(unsafe { (self.fns.SDL_AllocPalette)(ncolors) })?;
        Ok(Palette { sdl: self, raw })
    }

    pub fn map_rgb(&self, format: &sys::PixelFormat, r: u8, g: u8, b: u8) -> u32 {
        unsafe { (self.fns.SDL_MapRGB)(format, r, g, b) }
    }

    pub fn map_rgba(&self, format: &sys::PixelFormat, r: u8, g: u8, b: u8, a: u8) -> u32 {
        unsafe { (self.fns.SDL_MapRGBA)(format, r, g, b, a) }
    }

    pub fn get_rgb(&self, pixel: u32, format: &sys::PixelFormat) -> (u8, u8, u8) {
        let (mut r, mut g, mut b) = (0, 0, 0);
        unsafe { (self.fns.SDL_GetRGB)(pixel, format, &mut r, &mut g, &mut b) };
        (r, g, b)
    }

    pub fn get_rgba(&self, pixel: u32, format: &sys::PixelFormat) -> Color {
        let mut color = Color::default();
        unsafe {
            (self.fns.SDL_GetRGBA)(
                pixel,
                format,
                &mut color.r,
                &mut color.g,
                &mut color.b,
                &mut color.a,
            )
        };
        color
    }

    pub fn calculate_gamma_ramp(&self, gamma: f32) -> [u16; 256] {
        let mut ramp = [0; 256];
        unsafe { (self.fns.SDL_CalculateGammaRamp)(gamma, ramp.as_mut_ptr()) };
        ramp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_fields() {
        let format = sys::PIXELFORMAT_ARGB8888;
        assert_eq!(pixel_type(format), sys::PIXELTYPE_PACKED32);
        assert_eq!(pixel_order(format), sys::PACKEDORDER_ARGB);
        assert_eq!(pixel_layout(format), sys::PACKEDLAYOUT_8888);
        assert_eq!(bits_per_pixel(format), 32);
        assert_eq!(bytes_per_pixel(format), 4);
        assert!(is_packed(format));
        assert!(is_alpha(format));
        assert!(!is_alpha(sys::PIXELFORMAT_RGB888));
    }

    #[test]
    fn format_classes() {
        assert!(is_indexed(sys::PIXELFORMAT_INDEX8));
        assert!(is_array(sys::PIXELFORMAT_RGB24));
        assert_eq!(bytes_per_pixel(sys::PIXELFORMAT_RGB24), 3);
        assert!(is_fourcc(sys::PIXELFORMAT_YV12));
        assert!(!is_fourcc(sys::PIXELFORMAT_UNKNOWN));
        assert_eq!(bytes_per_pixel(sys::PIXELFORMAT_YUY2), 2);
        assert_eq!(bytes_per_pixel(sys::PIXELFORMAT_NV12), 1);
        assert!(!is_indexed(sys::PIXELFORMAT_YV12));
    }
}
