//! 图核心模块
//!
//! 定义顶点、邻接存储能力和四种图变体

mod directed;
mod store;
mod undirected;
mod vertex;
mod weighted;

pub use directed::DirectedGraph;
pub use store::AdjacencyStore;
pub use undirected::UndirectedGraph;
pub use vertex::{ordered_pair, Vertex};
pub use weighted::{WeightedDirectedGraph, WeightedUndirectedGraph};
