pub mod error;
pub mod graph;
pub mod grid;
pub mod pathfinding;
pub mod raster;
pub mod separation;

// Re-export commonly used items
pub use error::Error;
pub use graph::{Weight, WeightedGraph};
pub use grid::{GridVertex, build_grid_graph};
pub use pathfinding::{DistanceMap, shortest_paths};
pub use raster::{BRIGHTNESS_THRESHOLD, PixelMatrix, brightness};
pub use separation::{Separation, find_separation, find_separation_in_matrix};
