use std::path::Path;

use thiserror::Error;

use crate::{
    grid::{self, GridError, GridMetrics},
    pager::PalettePager,
    palette::Palette,
};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("palette {0:?} has no colors")]
    EmptyPalette(String),
    #[error("pager has no pages")]
    NoPages,
    #[error("cannot lay out palette: {0}")]
    Grid(#[from] GridError),
}

/// Measures the square grid `palette` takes on a `size` x `size` page.
pub fn palette_metrics(palette: &Palette, size: u32, spacing: u32) -> Result<GridMetrics, RenderError> {
    if palette.is_empty() {
        return Err(RenderError::EmptyPalette(palette.name().to_string()));
    }
    let columns = grid::column_count(palette.len()) as u32;
    Ok(GridMetrics::measure(size, size, spacing, columns)?)
}

fn paint_palette(target: &mut image::RgbaImage, offset_x: u32, palette: &Palette, metrics: &GridMetrics) {
    for (index, swatch) in palette.iter().enumerate() {
        let rect = metrics.swatch_rect(index);
        let pixel = image::Rgba::from(swatch.color);
        for y in rect.y..rect.y + rect.size {
            for x in rect.x..rect.x + rect.size {
                target.put_pixel(offset_x + x, y, pixel);
            }
        }
    }
}

/// Draws `palette` as a grid of swatches on a transparent square page.
pub fn render_palette(palette: &Palette, size: u32, spacing: u32) -> Result<image::RgbaImage, RenderError> {
    let metrics = palette_metrics(palette, size, spacing)?;
    let mut pixels = image::RgbaImage::new(size, size);
    paint_palette(&mut pixels, 0, palette, &metrics);
    tracing::trace!(palette = palette.name(), size, "rendered palette");
    Ok(pixels)
}

/// Draws every page of `pager` side by side, first page on the left.
pub fn render_pager(pager: &PalettePager, size: u32, spacing: u32) -> Result<image::RgbaImage, RenderError> {
    if pager.is_empty() {
        return Err(RenderError::NoPages);
    }
    let metrics = pager
        .pages()
        .iter()
        .map(|p| palette_metrics(p, size, spacing))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pixels = image::RgbaImage::new(size * pager.len() as u32, size);
    for (page, (palette, metrics)) in pager.pages().iter().zip(&metrics).enumerate() {
        paint_palette(&mut pixels, page as u32 * size, palette, metrics);
    }
    tracing::trace!(pages = pager.len(), size, "rendered pager");
    Ok(pixels)
}

pub fn save_palette_png(palette: &Palette, size: u32, spacing: u32, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let img = render_palette(palette, size, spacing)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        factory::{self, ColorFactory},
    };

    #[test]
    fn it_paints_each_swatch() {
        let palette = Palette::new("Rainbow", &factory::RAINBOW, 4);
        let img = render_palette(&palette, 100, 10).unwrap();
        assert_eq!(img.dimensions(), (100, 100));

        // 2 columns of 45px with a 10px gap
        for (index, (x, y)) in [(0, 0), (55, 0), (0, 55), (99, 99)].into_iter().enumerate() {
            assert_eq!(Color::from(*img.get_pixel(x, y)), factory::RAINBOW.color(index, 4), "swatch {index}");
        }
        assert_eq!(Color::from(*img.get_pixel(50, 10)), Color::TRANSPARENT);
        assert_eq!(Color::from(*img.get_pixel(10, 50)), Color::TRANSPARENT);
    }

    #[test]
    fn it_leaves_missing_swatches_blank() {
        let palette = Palette::new("Red", &factory::RED, 3);
        let img = render_palette(&palette, 100, 10).unwrap();
        assert_eq!(Color::from(*img.get_pixel(80, 80)), Color::TRANSPARENT);
    }

    #[test]
    fn it_lays_pages_side_by_side() {
        let pager = PalettePager::new(vec![
            Palette::new("Red", &factory::RED, 4),
            Palette::new("Blue", &factory::BLUE, 9),
        ]);
        let img = render_pager(&pager, 90, 0).unwrap();
        assert_eq!(img.dimensions(), (180, 90));
        assert_eq!(Color::from(*img.get_pixel(0, 0)), factory::RED.color(0, 4));
        assert_eq!(Color::from(*img.get_pixel(90, 0)), factory::BLUE.color(0, 9));
        assert_eq!(Color::from(*img.get_pixel(179, 89)), factory::BLUE.color(8, 9));
    }

    #[test]
    fn it_refuses_empty_input() {
        let empty = Palette::from_swatches("Nothing", Vec::new());
        assert!(matches!(render_palette(&empty, 64, 0), Err(RenderError::EmptyPalette(name)) if name == "Nothing"));
        assert!(matches!(render_pager(&PalettePager::new(Vec::new()), 64, 0), Err(RenderError::NoPages)));
        assert!(matches!(
            render_palette(&Palette::new("Red", &factory::RED, 16), 10, 8),
            Err(RenderError::Grid(GridError::TooSmall { .. }))
        ));
    }
}
