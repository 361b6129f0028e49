//! 二分图判定
//!
//! 从首个顶点出发做基于栈的遍历，交替分配两个分区编号；
//! 一旦某条边连接同分区的两个顶点即返回 false。

use crate::graph::{AdjacencyStore, UndirectedGraph, Vertex};
use std::collections::HashMap;

/// 二染色判定算法
pub struct TwoColoring<'a> {
    graph: &'a UndirectedGraph,
}

impl<'a> TwoColoring<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self { graph }
    }

    /// 判断图是否为二分图
    ///
    /// 只从首个顶点所在的连通分量开始遍历，未触达的顶点保持未分区。
    pub fn is_bipartite(&self) -> bool {
        let vertices = self.graph.vertices();
        let Some(start) = vertices.first() else {
            return true;
        };

        // 0 表示未分区
        let mut partition: HashMap<Vertex, u8> =
            vertices.iter().map(|vertex| (vertex.clone(), 0)).collect();
        partition.insert(start.clone(), 1);

        let mut stack = vec![start.clone()];
        while let Some(vertex) = stack.pop() {
            let side = partition.get(&vertex).copied().unwrap_or(0);
            for neighbor in self.graph.symmetric_neighbors(&vertex) {
                let neighbor_side = partition.get(&neighbor).copied().unwrap_or(0);
                if neighbor_side == side {
                    return false;
                }
                if neighbor_side == 0 {
                    partition.insert(neighbor.clone(), 3 - side);
                    stack.push(neighbor);
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(name: &str) -> Vertex {
        Vertex::from(name)
    }

    fn cycle(names: &[&str]) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new();
        graph
            .add_vertices(names.iter().map(|&n| v(n)))
            .unwrap();
        for window in names.windows(2) {
            graph.add_edge(&v(window[0]), &v(window[1])).unwrap();
        }
        graph
            .add_edge(&v(names[names.len() - 1]), &v(names[0]))
            .unwrap();
        graph
    }

    #[test]
    fn test_even_cycle_is_bipartite() {
        assert!(cycle(&["a", "b", "c", "d"]).is_bipartite());
    }

    #[test]
    fn test_odd_cycle_is_not_bipartite() {
        assert!(!cycle(&["a", "b", "c"]).is_bipartite());
        assert!(!cycle(&["a", "b", "c", "d", "e"]).is_bipartite());
    }

    #[test]
    fn test_path_is_bipartite() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertices([v("a"), v("b"), v("c")]).unwrap();
        graph.add_edge(&v("a"), &v("b")).unwrap();
        graph.add_edge(&v("b"), &v("c")).unwrap();

        assert!(graph.is_bipartite());
    }

    #[test]
    fn test_empty_graph_is_bipartite() {
        assert!(UndirectedGraph::new().is_bipartite());
    }
}
