//! 图算法模块
//!
//! 包含 LexBFS、弦图识别、二分判定、DFS/拓扑排序、
//! 最短路径、最小生成树和传递定向算法

mod bipartite;
mod chordality;
mod dfs;
mod lex_bfs;
mod mst;
mod orientation;
mod shortest_path;

pub use bipartite::TwoColoring;
pub use chordality::Chordality;
pub use dfs::{DepthFirstSearch, DfsTimestamps};
pub use lex_bfs::LexBfs;
pub use mst::Prim;
pub use orientation::TransitiveOrienter;
pub use shortest_path::{Dijkstra, ShortestPathTree};

use std::cmp::Ordering;

/// 小顶堆优先级包装
///
/// priority-queue 弹出最大优先级，这里反转比较方向以取最小权重。
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MinWeight(pub(crate) f64);

impl Eq for MinWeight {}

impl PartialOrd for MinWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}
