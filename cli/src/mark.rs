use charsep_core::{PixelMatrix, Separation};
use image::{Rgb, RgbImage};

const ROW_MARK: Rgb<u8> = Rgb([255, 0, 0]);
const COL_MARK: Rgb<u8> = Rgb([0, 0, 255]);

/// Rebuilds the image with whitespace rows painted red and whitespace
/// columns painted blue, so the classification can be inspected visually.
pub fn mark_separations(pixels: &PixelMatrix, separation: &Separation) -> RgbImage {
    let mut img = RgbImage::new(pixels.width() as u32, pixels.height() as u32);

    for row in 0..pixels.height() {
        for col in 0..pixels.width() {
            let rgb = pixels.get(row, col);
            let channels = [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8];
            img.put_pixel(col as u32, row as u32, Rgb(channels));
        }
    }

    for &row in &separation.rows {
        for col in 0..pixels.width() {
            img.put_pixel(col as u32, row as u32, ROW_MARK);
        }
    }

    // Columns painted last, so crossings show as vertical marks
    for &col in &separation.cols {
        for row in 0..pixels.height() {
            img.put_pixel(col as u32, row as u32, COL_MARK);
        }
    }

    img
}
