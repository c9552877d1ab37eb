pub mod dijkstra;

// Re-export the public interface
pub use dijkstra::{DistanceMap, shortest_paths};
