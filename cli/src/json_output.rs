use charsep_core::{PixelMatrix, Separation};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub image: JsonImage,
    pub result: Separation,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonImage {
    pub path: String,
    pub width: usize,
    pub height: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub analysis_time_ms: u64,
}

pub fn create_json_output(
    image_path: &Path,
    pixels: &PixelMatrix,
    separation: Separation,
    analysis_time: f64,
) -> JsonOutput {
    JsonOutput {
        image: JsonImage {
            path: image_path.display().to_string(),
            width: pixels.width(),
            height: pixels.height(),
        },
        result: separation,
        stats: JsonStats {
            analysis_time_ms: (analysis_time * 1000.0) as u64,
        },
    }
}
