//! 弦图识别
//!
//! 反转 LexBFS 排列得到完美消除序的候选：对每个顶点，
//! 它与排在其后的邻居必须构成团，否则图不是弦图。

use super::lex_bfs::LexBfs;
use crate::graph::{UndirectedGraph, Vertex};
use std::collections::HashSet;
use tracing::debug;

/// 弦图判定算法
pub struct Chordality<'a> {
    graph: &'a UndirectedGraph,
}

impl<'a> Chordality<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self { graph }
    }

    /// 判断图是否为弦图，遇到首个违例顶点即返回 false
    pub fn is_chordal(&self) -> bool {
        let mut ordering = LexBfs::new(self.graph).ordering();
        ordering.reverse();

        for (index, vertex) in ordering.iter().enumerate() {
            let later: HashSet<&Vertex> = ordering[index + 1..].iter().collect();
            let mut candidate = vec![vertex.clone()];
            candidate.extend(
                self.graph
                    .symmetric_neighbors(vertex)
                    .into_iter()
                    .filter(|neighbor| later.contains(neighbor)),
            );
            if !self.graph.is_clique(&candidate).unwrap_or(false) {
                debug!(vertex = %vertex, "后继邻居不构成团, 图非弦图");
                return false;
            }
        }
        true
    }
}
