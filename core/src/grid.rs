use crate::graph::{Weight, WeightedGraph};
use crate::raster::PixelMatrix;

/// Vertex of the pixel-adjacency graph.
///
/// The virtual source is a separate variant rather than a sentinel
/// coordinate, so it can never collide with a real pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridVertex {
    Pixel { row: usize, col: usize },
    Source,
}

impl GridVertex {
    pub const fn pixel(row: usize, col: usize) -> Self {
        Self::Pixel { row, col }
    }
}

/// Builds the pixel-adjacency graph for a whitespace search.
///
/// Every pixel becomes a vertex with directed edges to its in-bounds
/// 4-neighbors. An edge costs 0 when its origin pixel is bright and 1
/// otherwise, so opposite directions between the same two pixels may carry
/// different weights. The virtual source gets a zero-weight edge to every
/// bright pixel on the top row or left column, which makes a single
/// shortest-path run from [`GridVertex::Source`] classify border
/// reachability for the whole image: distance 0 marks pixels connected to
/// the bright margin through bright pixels alone.
pub fn build_grid_graph(pixels: &PixelMatrix) -> WeightedGraph<GridVertex> {
    let height = pixels.height();
    let width = pixels.width();

    let mut graph = WeightedGraph::new();
    for row in 0..height {
        for col in 0..width {
            graph.add_vertex(GridVertex::pixel(row, col));
        }
    }
    graph.add_vertex(GridVertex::Source);

    for row in 0..height {
        for col in 0..width {
            let current = GridVertex::pixel(row, col);
            let bright = pixels.is_bright(row, col);
            let weight: Weight = if bright { 0 } else { 1 };

            if row > 0 {
                graph.add_edge(current, GridVertex::pixel(row - 1, col), weight);
            }
            if row + 1 < height {
                graph.add_edge(current, GridVertex::pixel(row + 1, col), weight);
            }
            if col > 0 {
                graph.add_edge(current, GridVertex::pixel(row, col - 1), weight);
            }
            if col + 1 < width {
                graph.add_edge(current, GridVertex::pixel(row, col + 1), weight);
            }

            // Bright pixels on the top or left border are free entry points
            if (row == 0 || col == 0) && bright {
                graph.add_edge(GridVertex::Source, current, 0);
            }
        }
    }

    graph
}
