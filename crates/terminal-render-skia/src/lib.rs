// File: crates/terminal-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the chart's DrawContext, with PNG/RGBA export.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use terminal_chart::{CanvasSize, Color, DrawContext};

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Headless drawing surface backed by a Skia N32 premultiplied raster.
///
/// `clear_rect` replaces pixels with the background color (transparent unless
/// set), mirroring canvas semantics. Stroke state persists across paths until
/// changed, as on an HTML canvas.
pub struct SkiaSurface {
    surface: skia::Surface,
    size: CanvasSize,
    background: Color,
    stroke: skia::Paint,
    path: skia::Path,
}

impl SkiaSurface {
    pub fn new(size: CanvasSize) -> Result<Self> {
        let w = i32::try_from(size.width).context("canvas width out of range")?;
        let h = i32::try_from(size.height).context("canvas height out of range")?;
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(skia::Color::BLACK);

        log::debug!("skia raster surface created ({w}x{h})");
        Ok(Self { surface, size, background: Color::TRANSPARENT, stroke, path: skia::Path::new() })
    }

    /// Surface whose cleared areas are filled with `background`.
    pub fn with_background(size: CanvasSize, background: Color) -> Result<Self> {
        let mut s = Self::new(size)?;
        s.background = background;
        Ok(s)
    }

    pub fn size(&self) -> CanvasSize { self.size }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w * 4;
        let mut pixels = vec![0u8; row_bytes * h];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("reading back {w}x{h} pixels failed"));
        }
        Ok(pixels)
    }
}

impl DrawContext for SkiaSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_blend_mode(skia::BlendMode::Src);
        paint.set_color(to_skia(self.background));
        let rect = skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke.set_color(to_skia(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.stroke.set_stroke_width(width as f32);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        self.surface.canvas().draw_path(&self.path, &self.stroke);
    }
}
