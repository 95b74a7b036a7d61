// SPDX-License-Identifier: MPL-2.0
//! Procedural test images.
//!
//! Both patterns are used as golden inputs by downstream image tests, so
//! their dimensions, pixel values, and PNG encoding must stay fixed.

use super::data_url::DataUrl;
use crate::error::Result;
use image_rs::codecs::png::PngEncoder;
use image_rs::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

/// Side length of the UV orientation grid.
pub const UV_SIZE: u32 = 2;

/// Side length of the checkerboard canvas.
pub const CHECKER_SIZE: u32 = 512;

/// Side length of one checkerboard tile.
pub const CHECKER_TILE: u32 = 64;

const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

const _: () = {
    assert!(CHECKER_TILE > 0);
    assert!(CHECKER_SIZE % CHECKER_TILE == 0);
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestPattern {
    /// 2×2 primary-color grid for checking UV orientation.
    Uv,
    /// Black and white tiles over a square canvas.
    Checker,
}

impl TestPattern {
    /// Renders the pattern into an RGBA buffer.
    #[must_use]
    pub fn render(self) -> RgbaImage {
        match self {
            TestPattern::Uv => uv_grid(),
            TestPattern::Checker => checkerboard(),
        }
    }

    /// Renders the pattern and encodes it as PNG bytes.
    pub fn to_png(self) -> Result<Vec<u8>> {
        encode_png(&self.render())
    }

    /// Renders the pattern and wraps the PNG bytes in a data URL.
    pub fn to_data_url(self) -> Result<DataUrl> {
        Ok(DataUrl::png(&self.to_png()?))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TestPattern::Uv => "uv",
            TestPattern::Checker => "checker",
        }
    }
}

fn uv_grid() -> RgbaImage {
    let mut img = RgbaImage::new(UV_SIZE, UV_SIZE);
    img.put_pixel(0, 0, BLUE);
    img.put_pixel(1, 0, YELLOW);
    img.put_pixel(0, 1, RED);
    img.put_pixel(1, 1, GREEN);
    img
}

fn checkerboard() -> RgbaImage {
    RgbaImage::from_fn(CHECKER_SIZE, CHECKER_SIZE, |x, y| {
        if (x / CHECKER_TILE + y / CHECKER_TILE) % 2 == 0 {
            WHITE
        } else {
            BLACK
        }
    })
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uv_grid_has_documented_pixels() {
        let img = TestPattern::Uv.render();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(*img.get_pixel(0, 0), BLUE);
        assert_eq!(*img.get_pixel(1, 0), YELLOW);
        assert_eq!(*img.get_pixel(0, 1), RED);
        assert_eq!(*img.get_pixel(1, 1), GREEN);
    }

    #[test]
    fn checkerboard_tiles_alternate_from_white() {
        let img = TestPattern::Checker.render();
        assert_eq!(img.dimensions(), (512, 512));

        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(63, 63), WHITE);
        assert_eq!(*img.get_pixel(64, 0), BLACK);
        assert_eq!(*img.get_pixel(0, 64), BLACK);
        assert_eq!(*img.get_pixel(64, 64), WHITE);
        assert_eq!(*img.get_pixel(511, 511), WHITE);
        assert_eq!(*img.get_pixel(511, 0), BLACK);
    }

    #[test]
    fn encoding_is_deterministic() {
        for pattern in [TestPattern::Uv, TestPattern::Checker] {
            let first = pattern.to_data_url().unwrap();
            let second = pattern.to_data_url().unwrap();
            assert_eq!(first, second, "{} pattern drifted", pattern.label());
        }
    }

    #[test]
    fn data_url_decodes_back_to_the_same_pixels() {
        let url = TestPattern::Uv.to_data_url().unwrap();
        assert_eq!(url.mime(), "image/png");

        let bytes = url.decode().expect("valid base64");
        let decoded = image_rs::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, TestPattern::Uv.render());
    }
}
