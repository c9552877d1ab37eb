use charsep::mark_separations;
use charsep_core::{PixelMatrix, Separation};
use image::Rgb;

#[test]
fn test_marked_image_paints_rows_and_columns() {
    let pixels = PixelMatrix::from_rows(vec![
        vec![0xFFFFFF, 0x000000, 0xFFFFFF],
        vec![0xFFFFFF, 0x000000, 0xFFFFFF],
    ])
    .unwrap();
    let separation = Separation {
        rows: vec![],
        cols: vec![0, 2],
    };

    let marked = mark_separations(&pixels, &separation);

    assert_eq!(marked.dimensions(), (3, 2));
    // Whitespace columns painted blue
    assert_eq!(*marked.get_pixel(0, 0), Rgb([0, 0, 255]));
    assert_eq!(*marked.get_pixel(2, 1), Rgb([0, 0, 255]));
    // Untouched pixels keep their original color
    assert_eq!(*marked.get_pixel(1, 0), Rgb([0, 0, 0]));
}

#[test]
fn test_column_marks_overlay_row_marks_at_crossings() {
    let pixels = PixelMatrix::from_rows(vec![vec![0xFFFFFF; 2]; 2]).unwrap();
    let separation = Separation {
        rows: vec![0],
        cols: vec![1],
    };

    let marked = mark_separations(&pixels, &separation);

    assert_eq!(*marked.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*marked.get_pixel(1, 0), Rgb([0, 0, 255]));
    assert_eq!(*marked.get_pixel(1, 1), Rgb([0, 0, 255]));
    assert_eq!(*marked.get_pixel(0, 1), Rgb([255, 255, 255]));
}
