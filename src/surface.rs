use egui::{Color32, Pos2, pos2};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgba, RgbaImage};

use crate::error::{DoodleError, DoodleResult};
use crate::stroke::distance_sq_to_segment;

/// The raster bitmap strokes are painted onto.
///
/// Fixed size for its whole lifetime and always opaque: it starts filled with
/// the background color and every paint operation writes opaque pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    pixels: RgbaImage,
    background: Color32,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .finish()
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Color32) -> DoodleResult<Self> {
        if width == 0 || height == 0 {
            return Err(DoodleError::EmptyCanvas { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            background,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Paint every pixel whose center lies within `radius` of the segment `from`..`to`.
    ///
    /// Only the bounding box of the capsule is visited, clipped to the surface.
    pub(crate) fn paint_capsule(&mut self, from: Pos2, to: Pos2, radius: f32, color: Color32) {
        if !from.is_finite() || !to.is_finite() || radius <= 0.0 {
            return;
        }

        let max_x = self.width() as f32 - 1.0;
        let max_y = self.height() as f32 - 1.0;
        let x0 = (from.x.min(to.x) - radius).floor().max(0.0);
        let x1 = (from.x.max(to.x) + radius).ceil().min(max_x);
        let y0 = (from.y.min(to.y) - radius).floor().max(0.0);
        let y1 = (from.y.max(to.y) + radius).ceil().min(max_y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let radius_sq = radius * radius;
        let paint = to_rgba(color);
        for y in y0 as u32..=y1 as u32 {
            for x in x0 as u32..=x1 as u32 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    self.pixels.put_pixel(x, y, paint);
                }
            }
        }
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&self) -> DoodleResult<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                self.pixels.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(DoodleError::Encode)?;
        Ok(bytes)
    }

    /// Replace the pixels with a PNG produced by [`Surface::encode_png`].
    ///
    /// On error the surface is left untouched.
    pub fn restore_png(&mut self, bytes: &[u8]) -> DoodleResult<()> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(DoodleError::Decode)?
            .into_rgba8();

        if decoded.dimensions() != self.pixels.dimensions() {
            return Err(DoodleError::SnapshotSize {
                expected: self.size(),
                found: [decoded.width(), decoded.height()],
            });
        }
        self.pixels = decoded;
        Ok(())
    }

    /// Copy of the pixels in the form egui uploads as a texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}
