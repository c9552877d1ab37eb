use crate::error::Error;
use std::path::Path;

/// Minimum channel-average brightness for a pixel to count as white.
pub const BRIGHTNESS_THRESHOLD: u32 = 240;

/// Average of the red, green and blue channels of a packed 24-bit RGB value
/// (integer division, 0-255 scale).
pub fn brightness(rgb: u32) -> u32 {
    let red = (rgb >> 16) & 0xFF;
    let green = (rgb >> 8) & 0xFF;
    let blue = rgb & 0xFF;
    (red + green + blue) / 3
}

/// Row-major matrix of packed 24-bit RGB pixels (`0xRRGGBB`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelMatrix {
    /// Decodes an image file into a pixel matrix.
    ///
    /// Any decodable format is converted to 8-bit RGB first; alpha is
    /// dropped. Missing files and unsupported formats surface as
    /// [`Error::Image`].
    pub fn open(path: &Path) -> Result<Self, Error> {
        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let [red, green, blue] = rgb.get_pixel(x, y).0;
                pixels.push(u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue));
            }
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
            pixels,
        })
    }

    /// Builds a matrix from nested rows of packed RGB values.
    ///
    /// Every row must have the same length; ragged input is rejected with
    /// [`Error::SizeMismatch`].
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for row in &rows {
            if row.len() != width {
                return Err(Error::SizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed RGB value at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row * self.width + col]
    }

    pub fn brightness(&self, row: usize, col: usize) -> u32 {
        brightness(self.get(row, col))
    }

    /// Whether the pixel's brightness reaches [`BRIGHTNESS_THRESHOLD`].
    pub fn is_bright(&self, row: usize, col: usize) -> bool {
        self.brightness(row, col) >= BRIGHTNESS_THRESHOLD
    }
}
