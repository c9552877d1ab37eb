use crate::error::Error;
use crate::grid::{GridVertex, build_grid_graph};
use crate::pathfinding::{DistanceMap, shortest_paths};
use crate::raster::PixelMatrix;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whitespace rows and columns of an image, both in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separation {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

/// Finds the whitespace rows and columns of an image on disk.
///
/// A row or column is whitespace when every one of its pixels is bright and
/// belongs to the connected bright margin of the image. The whole decision
/// comes from one graph construction and one Dijkstra run; no partial
/// result is produced when the image cannot be loaded.
pub fn find_separation(path: &Path) -> Result<Separation, Error> {
    let pixels = PixelMatrix::open(path)?;
    find_separation_in_matrix(&pixels)
}

/// Same as [`find_separation`], for an already decoded pixel matrix.
pub fn find_separation_in_matrix(pixels: &PixelMatrix) -> Result<Separation, Error> {
    let graph = build_grid_graph(pixels);
    let distances = shortest_paths(&graph, &GridVertex::Source)?;
    Ok(classify_separations(pixels, &distances))
}

/// Turns per-pixel distances from the virtual source into row/column
/// whitespace decisions.
pub fn classify_separations(
    pixels: &PixelMatrix,
    distances: &DistanceMap<GridVertex>,
) -> Separation {
    let height = pixels.height();
    let width = pixels.width();

    let rows = (0..height)
        .filter(|&row| (0..width).all(|col| is_clear(pixels, distances, row, col)))
        .collect();

    let cols = (0..width)
        .filter(|&col| (0..height).all(|row| is_clear(pixels, distances, row, col)))
        .collect();

    Separation { rows, cols }
}

/// A pixel keeps its row/column in the running only if it is bright and
/// reachable from the border at zero cost. Unreachable pixels and pixels a
/// path had to pay to reach both disqualify.
fn is_clear(
    pixels: &PixelMatrix,
    distances: &DistanceMap<GridVertex>,
    row: usize,
    col: usize,
) -> bool {
    pixels.is_bright(row, col) && distances.get(&GridVertex::pixel(row, col)) == Some(&0)
}
