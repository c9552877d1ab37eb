use charsep::create_json_output;
use charsep_core::{PixelMatrix, Separation};
use std::path::Path;

#[test]
fn test_json_output_shape() {
    let pixels = PixelMatrix::from_rows(vec![vec![0xFFFFFF; 3]; 2]).unwrap();
    let separation = Separation {
        rows: vec![0, 1],
        cols: vec![2],
    };

    let output = create_json_output(Path::new("page.png"), &pixels, separation, 0.0421);
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["image"]["path"], "page.png");
    assert_eq!(json["image"]["width"], 3);
    assert_eq!(json["image"]["height"], 2);
    assert_eq!(json["result"]["rows"], serde_json::json!([0, 1]));
    assert_eq!(json["result"]["cols"], serde_json::json!([2]));
    assert_eq!(json["stats"]["analysis_time_ms"], 42);
}
