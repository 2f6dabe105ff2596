pub mod traits;
pub mod undirected;
pub mod weight;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;
pub use weight::{Distance, Weight};
