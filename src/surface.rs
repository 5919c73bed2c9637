use crate::color::Color;
use crate::error::GridError;

/// Largest side length a surface may have, in physical pixels.
pub const MAX_SURFACE_SIDE: u32 = 32767;
/// Largest pixel count a surface may have (128 MiB of RGBA).
pub const MAX_SURFACE_PIXELS: u64 = 32 * 1024 * 1024;

/// An owned RGBA8 raster, laid out row-major like a `pixels` frame.
///
/// Behaves like a 2D canvas: fills are clipped to the surface and composited
/// source-over onto what is already there, and resizing throws away the
/// current contents.
#[derive(Debug, Clone)]
pub struct Surface {
    frame: Vec<u8>,
    width: u32,
    height: u32,
}

/// A raster copy of a surface, restored with [`Surface::blit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    frame: Vec<u8>,
    width: u32,
    height: u32,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn frame_len(width: u32, height: u32) -> Result<usize, GridError> {
    let unsupported = GridError::UnsupportedSurface { width, height };
    if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
        return Err(unsupported);
    }
    if width as u64 * height as u64 > MAX_SURFACE_PIXELS {
        return Err(unsupported);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(unsupported)
}

/// Composites `src` over `dst` ("source-over"), non-premultiplied RGBA8.
fn blend_over(src: &[u8], dst: &mut [u8]) {
    let sa = src[3] as u32;
    if sa == 255 {
        dst.copy_from_slice(src);
        return;
    }
    if sa == 0 {
        return;
    }
    let da = dst[3] as u32;
    let inv = 255 - sa;
    // Output alpha, scaled by 255
    let out_a = sa * 255 + da * inv;
    for i in 0..3 {
        let c = src[i] as u32 * sa * 255 + dst[i] as u32 * da * inv;
        dst[i] = ((c + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let len = frame_len(width, height)?;
        Ok(Self {
            frame: vec![0; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Fails with `UnsupportedSurface` if no surface of this size may exist.
    pub fn check_size(width: u32, height: u32) -> Result<(), GridError> {
        frame_len(width, height).map(|_| ())
    }

    /// Resizes the surface. The previous contents are lost, as they are on a
    /// browser canvas; take a [`Snapshot`] first to keep them.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        let len = frame_len(width, height)?;
        self.frame.clear();
        self.frame.resize(len, 0);
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize * self.width as usize) + x as usize) * 4
    }

    /// Reads back one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.index(x, y);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.frame[index..index + 4]);
        Some(Color::from_array(bytes))
    }

    /// Paints a rectangle over the current contents, clipped to the surface.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color) {
        let rgba = color.to_array();
        self.for_each_in_rect(x, y, w, h, |pixel| blend_over(&rgba, pixel));
    }

    /// Resets a rectangle to transparent.
    pub fn clear_rect(&mut self, x: i64, y: i64, w: i64, h: i64) {
        let rgba = Color::TRANSPARENT.to_array();
        self.for_each_in_rect(x, y, w, h, |pixel| pixel.copy_from_slice(&rgba));
    }

    fn for_each_in_rect<F>(&mut self, x: i64, y: i64, w: i64, h: i64, mut paint: F)
    where
        F: FnMut(&mut [u8]),
    {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for py in y0..y1 {
            let start = self.index(x0, py);
            let end = self.index(x1, py);
            for pixel in self.frame[start..end].chunks_exact_mut(4) {
                paint(pixel);
            }
        }
    }

    fn clip(&self, x: i64, y: i64, w: i64, h: i64) -> Option<(u32, u32, u32, u32)> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i64);
        let y1 = y.saturating_add(h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Copies the current contents into an opaque snapshot.
    pub fn capture(&self) -> Snapshot {
        Snapshot {
            frame: self.frame.clone(),
            width: self.width,
            height: self.height,
        }
    }

    /// Draws a snapshot source-over with its top-left corner at the origin.
    /// Anything beyond the surface edge is dropped.
    pub fn blit(&mut self, snapshot: &Snapshot) {
        let cols = snapshot.width.min(self.width) as usize;
        let rows = snapshot.height.min(self.height);
        for y in 0..rows {
            let src_start = (y as usize * snapshot.width as usize) * 4;
            let dst_start = self.index(0, y);
            let src = &snapshot.frame[src_start..src_start + cols * 4];
            let dst = &mut self.frame[dst_start..dst_start + cols * 4];
            for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                blend_over(s, d);
            }
        }
    }
}
