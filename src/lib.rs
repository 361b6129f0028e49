//! Lexgraph - 内存图算法库
//!
//! 提供可变的顶点/边存储和一组经典图算法：
//! - 无向图/有向图/带权图的增删查引擎
//! - 字典序广度优先搜索（LexBFS）与弦图识别
//! - 二分图判定、带时间戳的深度优先搜索、拓扑排序
//! - Dijkstra 单源最短路径、Prim 最小生成树
//! - 传递定向（可比较图判定）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{
    Chordality, DepthFirstSearch, DfsTimestamps, Dijkstra, LexBfs, Prim, ShortestPathTree,
    TransitiveOrienter, TwoColoring,
};
pub use error::{Error, Result};
pub use graph::{
    AdjacencyStore, DirectedGraph, UndirectedGraph, Vertex, WeightedDirectedGraph,
    WeightedUndirectedGraph,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
