//! 2D accelerated rendering and textures.

use std::{ffi::c_void, ptr::NonNull};

use sdl2_sys as sys;
use sys::{Point, Rect};

use crate::{opt_ptr, string_from_ptr, surface::Surface, window::Window, Error, Result, Sdl};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RendererInfo {
    pub name: String,
    /// Mask of `sys::RENDERER_*`.
    pub flags: u32,
    pub texture_formats: Vec<u32>,
    pub max_texture_width: i32,
    pub max_texture_height: i32,
}

impl RendererInfo {
    fn from_raw(info: &sys::RendererInfo) -> Self {
        let count = (info.num_texture_formats as usize).min(info.texture_formats.len());
        Self {
            name: unsafe { string_from_ptr(info.name) },
            flags: info.flags,
            texture_formats: info.texture_formats[..count].to_vec(),
            max_texture_width: info.max_texture_width,
            max_texture_height: info.max_texture_height,
        }
    }
}

fn empty_info() -> sys::RendererInfo {
    sys::RendererInfo {
        name: std::ptr::null(),
        flags: 0,
        num_texture_formats: 0,
        texture_formats: [0; 16],
        max_texture_width: 0,
        max_texture_height: 0,
    }
}

/// Bytes one row of `w` pixels occupies in `format`.
fn row_bytes(format: u32, w: usize) -> Option<usize> {
    match sys::bytes_per_pixel(format) {
        0 => w
            .checked_mul(sys::bits_per_pixel(format) as usize)
            .map(|bits| bits.div_ceil(8)),
        bytes => w.checked_mul(bytes as usize),
    }
}

/// Bytes spanned by `rows` rows of `row` bytes spaced `pitch` apart. The
/// last row stops after its own pixels.
fn plane_len(pitch: i32, rows: i32, row: usize) -> Result<usize> {
    let pitch = usize::try_from(pitch).map_err(|_| Error::InvalidParameters)?;
    let rows = usize::try_from(rows).map_err(|_| Error::InvalidParameters)?;
    if rows == 0 || row == 0 {
        return Ok(0);
    }
    if pitch < row {
        return Err(Error::InvalidParameters);
    }
    pitch
        .checked_mul(rows - 1)
        .and_then(|len| len.checked_add(row))
        .ok_or(Error::InvalidParameters)
}

/// `rect` resolved against a texture of `query`, rejecting rects that
/// reach outside it.
fn texture_region(query: &TextureQuery, rect: Option<&Rect>) -> Result<Rect> {
    let rect = rect.copied().unwrap_or(Rect {
        x: 0,
        y: 0,
        w: query.w,
        h: query.h,
    });
    let inside = |start: i32, len: i32, limit: i32| {
        start >= 0 && len >= 0 && start.checked_add(len).is_some_and(|end| end <= limit)
    };
    if inside(rect.x, rect.w, query.w) && inside(rect.y, rect.h, query.h) {
        Ok(rect)
    } else {
        Err(Error::InvalidParameters)
    }
}

/// Length of the pixels of `region` measured from its first pixel, for a
/// buffer laid out `pitch` bytes per row.
fn region_len(format: u32, region: &Rect, pitch: i32) -> Result<usize> {
    let w = usize::try_from(region.w).map_err(|_| Error::InvalidParameters)?;
    let row = row_bytes(format, w).ok_or(Error::InvalidParameters)?;
    plane_len(pitch, region.h, row)
}

/// Bytes needed for `rows` rows of `pitch` bytes.
fn buffer_len(pitch: i32, rows: i32) -> Result<usize> {
    let pitch = usize::try_from(pitch).map_err(|_| Error::InvalidParameters)?;
    let rows = usize::try_from(rows).map_err(|_| Error::InvalidParameters)?;
    pitch.checked_mul(rows).ok_or(Error::InvalidParameters)
}

fn check_len(len: usize, needed: usize) -> Result<()> {
    if needed <= len {
        Ok(())
    } else {
        Err(Error::InvalidParameters)
    }
}

/// A rendering context for a window or a software surface. Destroyed on
/// drop, together with every texture it created.
pub struct Renderer<'a> {
    sdl: &'a Sdl,
    raw: NonNull<sys::Renderer>,
    // Present when the renderer was created together with its window.
    window: Option<Window<'a>>,
}

impl Sdl {
    pub fn get_num_render_drivers(&self) -> Result<i32> {
        self.check(unsafe { (self.fns.SDL_GetNumRenderDrivers)() })
    }

    pub fn get_render_driver_info(&self, index: i32) -> Result<RendererInfo> {
        let mut info = empty_info();
        self.check(unsafe { (self.fns.SDL_GetRenderDriverInfo)(index, &mut info) })?;
        Ok(RendererInfo::from_raw(&info))
    }

    /// A window and a default renderer for it. The renderer owns the
    /// window, reachable through [`Renderer::window`].
    pub fn create_window_and_renderer(&self, width: i32, height: i32, window_flags: u32) -> Result<Renderer<'_>> {
        let mut window = std::ptr::null_mut();
        let mut renderer = std::ptr::null_mut();
        self.check(unsafe {
            (self.fns.SDL_CreateWindowAndRenderer)(width, height, window_flags, &mut window, &mut renderer)
        })?;
        let window = Window::from_raw(self, self.check_ptr(window)?);
        let raw = self.check_ptr(renderer)?;
        Ok(Renderer {
            sdl: self,
            raw,
            window: Some(window),
        })
    }

    /// `src_color_factor` and friends are `sys::BLENDFACTOR_*`, the
    /// operations `sys::BLENDOPERATION_*`.
    pub fn compose_custom_blend_mode(
        &self,
        src_color_factor: i32,
        dst_color_factor: i32,
        color_operation: i32,
        src_alpha_factor: i32,
        dst_alpha_factor: i32,
        alpha_operation: i32,
    ) -> sys::BlendMode {
        unsafe {
            (self.fns.SDL_ComposeCustomBlendMode)(
                src_color_factor,
                dst_color_factor,
                color_operation,
                src_alpha_factor,
                dst_alpha_factor,
                alpha_operation,
            )
        }
    }
}

impl<'sdl> Window<'sdl> {
    /// `index` -1 picks the first driver supporting `flags`.
    pub fn create_renderer<'w>(&'w self, index: i32, flags: u32) -> Result<Renderer<'w>> {
        let raw = self
            .sdl
            .check_ptr(unsafe { (self.sdl.fns.SDL_CreateRenderer)(self.as_ptr(), index, flags) })?;
        Ok(Renderer {
            sdl: self.sdl,
            raw,
            window: None,
        })
    }

    pub fn has_renderer(&self) -> bool {
        !unsafe { (self.sdl.fns.SDL_GetRenderer)(self.as_ptr()) }.is_null()
    }
}

impl<'a> Surface<'a> {
    /// A renderer drawing into this surface.
    pub fn create_software_renderer<'s>(&'s mut self) -> Result<Renderer<'s>>
    where
        'a: 's,
    {
        let sdl = self.sdl();
        let raw = sdl.check_ptr(unsafe { (sdl.fns.SDL_CreateSoftwareRenderer)(self.as_ptr()) })?;
        Ok(Renderer {
            sdl,
            raw,
            window: None,
        })
    }
}

impl<'a> Renderer<'a> {
    pub fn as_ptr(&self) -> *mut sys::Renderer {
        self.raw.as_ptr()
    }

    /// The window created alongside this renderer, if any.
    pub fn window(&self) -> Option<&Window<'a>> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut Window<'a>> {
        self.window.as_mut()
    }

    pub fn info(&self) -> Result<RendererInfo> {
        let mut info = empty_info();
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_GetRendererInfo)(self.raw.as_ptr(), &mut info) })?;
        Ok(RendererInfo::from_raw(&info))
    }

    pub fn output_size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetRendererOutputSize)(self.raw.as_ptr(), &mut w, &mut h)
        })?;
        Ok((w, h))
    }

    /// `access` is one of `sys::TEXTUREACCESS_*`.
    pub fn create_texture(&self, format: u32, access: i32, w: i32, h: i32) -> Result<Texture<'_>> {
        let raw = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_CreateTexture)(self.raw.as_ptr(), format, access, w, h)
        })?;
        Ok(Texture::new(self.sdl, raw))
    }

    pub fn create_texture_from_surface(&self, surface: &Surface<'_>) -> Result<Texture<'_>> {
        let raw = self.sdl.check_ptr(unsafe {
            (self.sdl.fns.SDL_CreateTextureFromSurface)(self.raw.as_ptr(), surface.as_ptr())
        })?;
        Ok(Texture::new(self.sdl, raw))
    }

    pub fn render_target_supported(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_RenderTargetSupported)(self.raw.as_ptr()) }.into()
    }

    /// Redirect drawing into `target`, created with
    /// `sys::TEXTUREACCESS_TARGET`. `None` restores the default target.
    pub fn set_render_target(&self, target: Option<&Texture<'_>>) -> Result<()> {
        let target = target.map_or(std::ptr::null_mut(), |texture| texture.as_ptr());
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_SetRenderTarget)(self.raw.as_ptr(), target) })?;
        Ok(())
    }

    /// Whether `texture` is the current target, or for `None` whether the
    /// default target is.
    pub fn is_render_target(&self, texture: Option<&Texture<'_>>) -> bool {
        let current = unsafe { (self.sdl.fns.SDL_GetRenderTarget)(self.raw.as_ptr()) };
        current == texture.map_or(std::ptr::null_mut(), |texture| texture.as_ptr())
    }

    /// A device independent resolution, scaled to the output.
    pub fn set_logical_size(&self, w: i32, h: i32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderSetLogicalSize)(self.raw.as_ptr(), w, h)
        })?;
        Ok(())
    }

    pub fn logical_size(&self) -> (i32, i32) {
        let (mut w, mut h) = (0, 0);
        unsafe { (self.sdl.fns.SDL_RenderGetLogicalSize)(self.raw.as_ptr(), &mut w, &mut h) };
        (w, h)
    }

    pub fn set_integer_scale(&self, enabled: bool) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderSetIntegerScale)(self.raw.as_ptr(), enabled.into())
        })?;
        Ok(())
    }

    pub fn integer_scale(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_RenderGetIntegerScale)(self.raw.as_ptr()) }.into()
    }

    /// `None` uses the whole target.
    pub fn set_viewport(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderSetViewport)(self.raw.as_ptr(), opt_ptr(rect))
        })?;
        Ok(())
    }

    pub fn viewport(&self) -> Rect {
        let mut rect = Rect::default();
        unsafe { (self.sdl.fns.SDL_RenderGetViewport)(self.raw.as_ptr(), &mut rect) };
        rect
    }

    /// `None` disables clipping.
    pub fn set_clip_rect(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderSetClipRect)(self.raw.as_ptr(), opt_ptr(rect))
        })?;
        Ok(())
    }

    /// An empty rectangle when clipping is disabled.
    pub fn clip_rect(&self) -> Rect {
        let mut rect = Rect::default();
        unsafe { (self.sdl.fns.SDL_RenderGetClipRect)(self.raw.as_ptr(), &mut rect) };
        rect
    }

    pub fn is_clip_enabled(&self) -> bool {
        unsafe { (self.sdl.fns.SDL_RenderIsClipEnabled)(self.raw.as_ptr()) }.into()
    }

    pub fn set_scale(&self, scale_x: f32, scale_y: f32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderSetScale)(self.raw.as_ptr(), scale_x, scale_y)
        })?;
        Ok(())
    }

    pub fn scale(&self) -> (f32, f32) {
        let (mut x, mut y) = (1.0, 1.0);
        unsafe { (self.sdl.fns.SDL_RenderGetScale)(self.raw.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn set_draw_color(&self, color: sys::Color) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetRenderDrawColor)(self.raw.as_ptr(), color.r, color.g, color.b, color.a)
        })?;
        Ok(())
    }

    pub fn draw_color(&self) -> Result<sys::Color> {
        let mut color = sys::Color::default();
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetRenderDrawColor)(
                self.raw.as_ptr(),
                &mut color.r,
                &mut color.g,
                &mut color.b,
                &mut color.a,
            )
        })?;
        Ok(color)
    }

    pub fn set_draw_blend_mode(&self, mode: sys::BlendMode) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetRenderDrawBlendMode)(self.raw.as_ptr(), mode)
        })?;
        Ok(())
    }

    pub fn draw_blend_mode(&self) -> Result<sys::BlendMode> {
        let mut mode = sys::BLENDMODE_NONE;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetRenderDrawBlendMode)(self.raw.as_ptr(), &mut mode)
        })?;
        Ok(mode)
    }

    /// Fill the target with the draw color, ignoring viewport and clip.
    pub fn clear(&self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_RenderClear)(self.raw.as_ptr()) })?;
        Ok(())
    }

    pub fn draw_point(&self, x: i32, y: i32) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_RenderDrawPoint)(self.raw.as_ptr(), x, y) })?;
        Ok(())
    }

    pub fn draw_points(&self, points: &[Point]) -> Result<()> {
        let count = crate::non_empty_count(points.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderDrawPoints)(self.raw.as_ptr(), points.as_ptr(), count)
        })?;
        Ok(())
    }

    pub fn draw_line(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderDrawLine)(self.raw.as_ptr(), x1, y1, x2, y2)
        })?;
        Ok(())
    }

    /// A connected polyline through `points`.
    pub fn draw_lines(&self, points: &[Point]) -> Result<()> {
        let count = crate::non_empty_count(points.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderDrawLines)(self.raw.as_ptr(), points.as_ptr(), count)
        })?;
        Ok(())
    }

    /// `None` outlines the whole target.
    pub fn draw_rect(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderDrawRect)(self.raw.as_ptr(), opt_ptr(rect))
        })?;
        Ok(())
    }

    pub fn draw_rects(&self, rects: &[Rect]) -> Result<()> {
        let count = crate::non_empty_count(rects.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderDrawRects)(self.raw.as_ptr(), rects.as_ptr(), count)
        })?;
        Ok(())
    }

    /// `None` fills the whole target.
    pub fn fill_rect(&self, rect: Option<&Rect>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderFillRect)(self.raw.as_ptr(), opt_ptr(rect))
        })?;
        Ok(())
    }

    pub fn fill_rects(&self, rects: &[Rect]) -> Result<()> {
        let count = crate::non_empty_count(rects.len())?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderFillRects)(self.raw.as_ptr(), rects.as_ptr(), count)
        })?;
        Ok(())
    }

    /// Copy `src` of `texture` (all of it for `None`) stretched onto `dst`
    /// (the whole target for `None`).
    pub fn copy(&self, texture: &Texture<'_>, src: Option<&Rect>, dst: Option<&Rect>) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderCopy)(self.raw.as_ptr(), texture.as_ptr(), opt_ptr(src), opt_ptr(dst))
        })?;
        Ok(())
    }

    /// [`Renderer::copy`] rotated clockwise by `angle` degrees around
    /// `center` (the middle of `dst` for `None`) and mirrored by `flip`, a
    /// mask of `sys::FLIP_*`.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_ex(
        &self,
        texture: &Texture<'_>,
        src: Option<&Rect>,
        dst: Option<&Rect>,
        angle: f64,
        center: Option<&Point>,
        flip: sys::RendererFlip,
    ) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderCopyEx)(
                self.raw.as_ptr(),
                texture.as_ptr(),
                opt_ptr(src),
                opt_ptr(dst),
                angle,
                opt_ptr(center),
                flip,
            )
        })?;
        Ok(())
    }

    /// Read back `rect` (the whole viewport for `None`) as `format` into
    /// `pixels`, `pitch` bytes per row. Slow; meant for screenshots.
    pub fn read_pixels(&self, rect: Option<&Rect>, format: u32, pixels: &mut [u8], pitch: i32) -> Result<()> {
        let region = match rect {
            Some(rect) => *rect,
            None => self.viewport(),
        };
        let needed = if format == sys::PIXELFORMAT_UNKNOWN {
            // Read in the target's own format, which may be wider.
            buffer_len(pitch, region.h)?
        } else {
            region_len(format, &region, pitch)?
        };
        check_len(pixels.len(), needed)?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_RenderReadPixels)(
                self.raw.as_ptr(),
                opt_ptr(rect),
                format,
                pixels.as_mut_ptr().cast(),
                pitch,
            )
        })?;
        Ok(())
    }

    pub fn present(&self) {
        unsafe { (self.sdl.fns.SDL_RenderPresent)(self.raw.as_ptr()) }
    }
}

impl Drop for Renderer<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroyRenderer)(self.raw.as_ptr()) }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextureQuery {
    pub format: u32,
    /// One of `sys::TEXTUREACCESS_*`.
    pub access: i32,
    pub w: i32,
    pub h: i32,
}

/// A texture bound to the renderer that created it. Destroyed on drop.
pub struct Texture<'r> {
    sdl: &'r Sdl,
    raw: NonNull<sys::Texture>,
}

impl<'r> Texture<'r> {
    fn new(sdl: &'r Sdl, raw: NonNull<sys::Texture>) -> Self {
        Self { sdl, raw }
    }

    pub fn as_ptr(&self) -> *mut sys::Texture {
        self.raw.as_ptr()
    }

    pub fn query(&self) -> Result<TextureQuery> {
        let mut query = TextureQuery {
            format: 0,
            access: 0,
            w: 0,
            h: 0,
        };
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_QueryTexture)(
                self.raw.as_ptr(),
                &mut query.format,
                &mut query.access,
                &mut query.w,
                &mut query.h,
            )
        })?;
        Ok(query)
    }

    pub fn set_color_mod(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetTextureColorMod)(self.raw.as_ptr(), r, g, b)
        })?;
        Ok(())
    }

    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetTextureColorMod)(self.raw.as_ptr(), &mut r, &mut g, &mut b)
        })?;
        Ok((r, g, b))
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetTextureAlphaMod)(self.raw.as_ptr(), alpha)
        })?;
        Ok(())
    }

    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetTextureAlphaMod)(self.raw.as_ptr(), &mut alpha)
        })?;
        Ok(alpha)
    }

    pub fn set_blend_mode(&mut self, mode: sys::BlendMode) -> Result<()> {
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_SetTextureBlendMode)(self.raw.as_ptr(), mode)
        })?;
        Ok(())
    }

    pub fn blend_mode(&self) -> Result<sys::BlendMode> {
        let mut mode = sys::BLENDMODE_NONE;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GetTextureBlendMode)(self.raw.as_ptr(), &mut mode)
        })?;
        Ok(mode)
    }

    /// Replace `rect` (the whole texture for `None`) with `pixels` laid out
    /// `pitch` bytes per row in the texture's format.
    pub fn update(&mut self, rect: Option<&Rect>, pixels: &[u8], pitch: i32) -> Result<()> {
        let query = self.query()?;
        let region = texture_region(&query, rect)?;
        check_len(pixels.len(), region_len(query.format, &region, pitch)?)?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_UpdateTexture)(
                self.raw.as_ptr(),
                opt_ptr(rect),
                pixels.as_ptr().cast(),
                pitch,
            )
        })?;
        Ok(())
    }

    /// Update a planar YV12 or IYUV texture. The chroma planes hold half
    /// as many rows as the luma plane.
    #[allow(clippy::too_many_arguments)]
    pub fn update_yuv(
        &mut self,
        rect: Option<&Rect>,
        y_plane: &[u8],
        y_pitch: i32,
        u_plane: &[u8],
        u_pitch: i32,
        v_plane: &[u8],
        v_pitch: i32,
    ) -> Result<()> {
        let region = texture_region(&self.query()?, rect)?;
        let luma_w = usize::try_from(region.w).map_err(|_| Error::InvalidParameters)?;
        let chroma_w = luma_w.div_ceil(2);
        let chroma_rows = (region.h + 1) / 2;
        check_len(y_plane.len(), plane_len(y_pitch, region.h, luma_w)?)?;
        check_len(u_plane.len(), plane_len(u_pitch, chroma_rows, chroma_w)?)?;
        check_len(v_plane.len(), plane_len(v_pitch, chroma_rows, chroma_w)?)?;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_UpdateYUVTexture)(
                self.raw.as_ptr(),
                opt_ptr(rect),
                y_plane.as_ptr(),
                y_pitch,
                u_plane.as_ptr(),
                u_pitch,
                v_plane.as_ptr(),
                v_pitch,
            )
        })?;
        Ok(())
    }

    /// Write-only access to `rect` (the whole texture for `None`) of a
    /// `sys::TEXTUREACCESS_STREAMING` texture. Unlocked when the guard
    /// drops.
    ///
    /// The returned pixels start at the first pixel of `rect` and end after
    /// its last one; rows are `pitch` bytes apart.
    pub fn lock(&mut self, rect: Option<&Rect>) -> Result<TextureLock<'_, 'r>> {
        let query = self.query()?;
        let region = texture_region(&query, rect)?;
        let mut pixels: *mut c_void = std::ptr::null_mut();
        let mut pitch = 0;
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_LockTexture)(self.raw.as_ptr(), &region, &mut pixels, &mut pitch)
        })?;
        let mut lock = TextureLock {
            texture: self,
            pixels: pixels.cast(),
            len: 0,
            pitch,
        };
        lock.len = region_len(query.format, &region, pitch)?;
        Ok(lock)
    }

    /// Bind to the current GL context, returning the texture coordinate
    /// scale.
    pub fn gl_bind(&mut self) -> Result<(f32, f32)> {
        let (mut w, mut h) = (0.0, 0.0);
        self.sdl.check(unsafe {
            (self.sdl.fns.SDL_GL_BindTexture)(self.raw.as_ptr(), &mut w, &mut h)
        })?;
        Ok((w, h))
    }

    pub fn gl_unbind(&mut self) -> Result<()> {
        self.sdl
            .check(unsafe { (self.sdl.fns.SDL_GL_UnbindTexture)(self.raw.as_ptr()) })?;
        Ok(())
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        unsafe { (self.sdl.fns.SDL_DestroyTexture)(self.raw.as_ptr()) }
    }
}

/// Locked texture memory.
pub struct TextureLock<'t, 'r> {
    texture: &'t mut Texture<'r>,
    pixels: *mut u8,
    len: usize,
    pitch: i32,
}

impl TextureLock<'_, '_> {
    /// Bytes per row.
    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn pixels(&mut self) -> &mut [u8] {
        if self.pixels.is_null() {
            return &mut [];
        }
        unsafe { std::slice::from_raw_parts_mut(self.pixels, self.len) }
    }
}

impl Drop for TextureLock<'_, '_> {
    fn drop(&mut self) {
        unsafe { (self.texture.sdl.fns.SDL_UnlockTexture)(self.texture.raw.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb_4x4() -> TextureQuery {
        TextureQuery {
            format: sys::PIXELFORMAT_ARGB8888,
            access: sys::TEXTUREACCESS_STREAMING,
            w: 4,
            h: 4,
        }
    }

    #[test]
    fn locked_regions_stay_inside_the_texture() {
        // A locked rect starts at `y * pitch + x * bpp` into the pixel
        // allocation, so the slice handed out must end within it.
        let query = argb_4x4();
        let pitch = 16;
        let allocation = (pitch * query.h) as usize;
        for y in 0..=query.h {
            for x in 0..=query.w {
                for h in 0..=query.h - y {
                    for w in 0..=query.w - x {
                        let rect = Rect { x, y, w, h };
                        let region = texture_region(&query, Some(&rect)).unwrap();
                        let len = region_len(query.format, &region, pitch).unwrap();
                        if len == 0 {
                            continue;
                        }
                        let offset = (y * pitch + x * 4) as usize;
                        assert!(offset + len <= allocation, "{rect:?} overruns by {}", offset + len - allocation);
                    }
                }
            }
        }

        let last_row = Rect { x: 1, y: 3, w: 3, h: 1 };
        let region = texture_region(&query, Some(&last_row)).unwrap();
        assert_eq!(region_len(query.format, &region, pitch).unwrap(), 12);

        let whole = texture_region(&query, None).unwrap();
        assert_eq!(region_len(query.format, &whole, pitch).unwrap(), 64);
    }

    #[test]
    fn regions_outside_the_texture_are_rejected() {
        let query = argb_4x4();
        for rect in [
            Rect { x: 1, y: 0, w: 4, h: 1 },
            Rect { x: 0, y: 2, w: 1, h: 3 },
            Rect { x: -1, y: 0, w: 1, h: 1 },
            Rect { x: 0, y: 0, w: -1, h: 1 },
            Rect { x: i32::MAX, y: 0, w: 1, h: 1 },
        ] {
            assert!(
                matches!(texture_region(&query, Some(&rect)), Err(Error::InvalidParameters)),
                "{rect:?}"
            );
        }
    }

    #[test]
    fn packed_updates_need_only_the_last_row_pixels() {
        let query = argb_4x4();
        // Two pixels wide, rows 16 bytes apart: the last row ends after 8.
        let rect = Rect { x: 0, y: 0, w: 2, h: 2 };
        let region = texture_region(&query, Some(&rect)).unwrap();
        let needed = region_len(query.format, &region, 16).unwrap();
        assert_eq!(needed, 24);
        assert!(check_len(24, needed).is_ok());
        assert!(matches!(check_len(23, needed), Err(Error::InvalidParameters)));

        // Tightly packed rows.
        assert_eq!(region_len(query.format, &region, 8).unwrap(), 16);
        // A pitch shorter than one row is never valid.
        assert!(matches!(
            region_len(query.format, &region, 7),
            Err(Error::InvalidParameters)
        ));
    }

    #[test]
    fn row_sizes_follow_the_format() {
        assert_eq!(row_bytes(sys::PIXELFORMAT_RGB24, 5), Some(15));
        assert_eq!(row_bytes(sys::PIXELFORMAT_INDEX1LSB, 9), Some(2));
        assert_eq!(row_bytes(sys::PIXELFORMAT_YUY2, 4), Some(8));
        assert_eq!(row_bytes(sys::PIXELFORMAT_IYUV, 4), Some(4));
        assert_eq!(plane_len(4, 0, 4).unwrap(), 0);
        assert!(matches!(plane_len(-1, 4, 4), Err(Error::InvalidParameters)));
        assert_eq!(buffer_len(16, 4).unwrap(), 64);
    }

    #[test]
    fn info_formats_are_clamped() {
        let mut raw = empty_info();
        raw.name = c"software".as_ptr();
        raw.num_texture_formats = 40;
        raw.texture_formats[0] = sys::PIXELFORMAT_ARGB8888;
        let info = RendererInfo::from_raw(&raw);
        assert_eq!(info.name, "software");
        assert_eq!(info.texture_formats.len(), 16);
        assert_eq!(info.texture_formats[0], sys::PIXELFORMAT_ARGB8888);
    }
}
