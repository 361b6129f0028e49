//! 传递定向
//!
//! 尝试给无向图的每条边定向，使结果有向图满足传递性
//! （u→v 且 v→w 蕴含 u→w）。反复取一条未处理的边任意定向，
//! 然后沿"领结"结构传播被迫的定向：两条共享一个端点且第三条边
//! （连接两个非共享端点）缺失的边，相对定向被互相锁定。
//! 不同传播路径给出矛盾定向时置失败标志，但波前仍会覆盖
//! 它可达的全部边。

use crate::error::{Error, Result};
use crate::graph::{ordered_pair, AdjacencyStore, DirectedGraph, UndirectedGraph, Vertex};
use tracing::debug;

/// 定向传播的可变状态
struct Propagation {
    oriented: DirectedGraph,
    unconsidered: Vec<(Vertex, Vertex)>,
    transitive: bool,
}

/// 传递定向算法
pub struct TransitiveOrienter<'a> {
    graph: &'a UndirectedGraph,
}

impl<'a> TransitiveOrienter<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self { graph }
    }

    /// 求传递定向，图不是可比较图时返回 `NotTransitive`
    pub fn orientation(&self) -> Result<DirectedGraph> {
        let mut oriented = DirectedGraph::new();
        oriented.add_vertices(self.graph.vertices())?;
        let mut state = Propagation {
            oriented,
            unconsidered: self.graph.edges(),
            transitive: true,
        };

        while let Some(edge) = state.unconsidered.first().cloned() {
            state.unconsidered.retain(|e| e != &edge);
            // 任意定向：按规范序取 first→last
            state.oriented.add_edge(&edge.0, &edge.1)?;

            for adjacent in self.graph.adjacent_edges(&edge.0, &edge.1)? {
                self.explore(&adjacent, &mut state)?;
            }
        }

        if state.transitive {
            Ok(state.oriented)
        } else {
            Err(Error::NotTransitive)
        }
    }

    /// 根据已定向的相邻边推导 edge 的被迫定向，并继续向外传播
    fn explore(&self, edge: &(Vertex, Vertex), state: &mut Propagation) -> Result<()> {
        let mut forced = false;
        let adjacent_edges = self.graph.adjacent_edges(&edge.0, &edge.1)?;

        for adjacent in &adjacent_edges {
            // 尚未定向的相邻边不构成约束来源
            if state.unconsidered.contains(adjacent) {
                continue;
            }

            let (shared, unshared, unshared_adjacent) = split_endpoints(edge, adjacent);

            // 第三条边存在时构成三角形捷径，不锁定相对定向
            if self.graph.edge_exists(&unshared, &unshared_adjacent) {
                continue;
            }

            if state.oriented.edge_exists(&shared, &unshared_adjacent) {
                // 相邻边背离共享点，edge 也必须背离
                if state.oriented.edge_exists(&unshared, &shared) {
                    debug!(edge = ?edge, "传播产生矛盾定向");
                    state.transitive = false;
                }
                if !state.oriented.edge_exists(&shared, &unshared) {
                    state.oriented.add_edge(&shared, &unshared)?;
                }
            } else {
                // 相邻边指向共享点，edge 也必须指向
                if state.oriented.edge_exists(&shared, &unshared) {
                    debug!(edge = ?edge, "传播产生矛盾定向");
                    state.transitive = false;
                }
                if !state.oriented.edge_exists(&unshared, &shared) {
                    state.oriented.add_edge(&unshared, &shared)?;
                }
            }

            let key = ordered_pair(&shared, &unshared);
            state.unconsidered.retain(|e| e != &key);
            forced = true;
        }

        if forced {
            for adjacent in adjacent_edges {
                if state.unconsidered.contains(&adjacent) {
                    self.explore(&adjacent, state)?;
                }
            }
        }
        Ok(())
    }
}

/// 把相邻的两条边拆成（共享端点, edge 的另一端, adjacent 的另一端）
fn split_endpoints(
    edge: &(Vertex, Vertex),
    adjacent: &(Vertex, Vertex),
) -> (Vertex, Vertex, Vertex) {
    if adjacent.0 == edge.0 || adjacent.0 == edge.1 {
        let shared = adjacent.0.clone();
        let unshared = if edge.0 == shared {
            edge.1.clone()
        } else {
            edge.0.clone()
        };
        (shared, unshared, adjacent.1.clone())
    } else {
        let shared = adjacent.1.clone();
        let unshared = if edge.0 == shared {
            edge.1.clone()
        } else {
            edge.0.clone()
        };
        (shared, unshared, adjacent.0.clone())
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
        graph.add_vertices(names.iter().map(|&n| v(n))).unwrap();
        for window in names.windows(2) {
            graph.add_edge(&v(window[0]), &v(window[1])).unwrap();
        }
        graph
            .add_edge(&v(names[names.len() - 1]), &v(names[0]))
            .unwrap();
        graph
    }

    /// 校验定向结果满足传递性
    fn assert_transitive(oriented: &DirectedGraph) {
        for (u, x) in oriented.edges() {
            for (x2, w) in oriented.edges() {
                if x == x2 {
                    assert!(
                        oriented.edge_exists(&u, &w),
                        "缺少传递弧 {u} -> {w}",
                    );
                }
            }
        }
    }

    #[test]
    fn test_odd_cycle_is_not_orientable() {
        let five_cycle = cycle(&["a", "b", "c", "d", "e"]);
        assert!(!five_cycle.is_comparability());
        assert_eq!(
            five_cycle.transitive_orientation(),
            Err(Error::NotTransitive)
        );

        let seven_cycle = cycle(&["a", "b", "c", "d", "e", "f", "g"]);
        assert!(!seven_cycle.is_comparability());
    }

    #[test]
    fn test_even_cycle_is_orientable() {
        let graph = cycle(&["a", "b", "c", "d"]);
        assert!(graph.is_comparability());
        assert_transitive(&graph.transitive_orientation().unwrap());
    }

    #[test]
    fn test_complete_graph_is_orientable() {
        // 完全图按规范序定向即是全序
        let mut graph = UndirectedGraph::new();
        graph.add_vertices([v("a"), v("b"), v("c")]).unwrap();
        graph.add_edge(&v("a"), &v("b")).unwrap();
        graph.add_edge(&v("a"), &v("c")).unwrap();
        graph.add_edge(&v("b"), &v("c")).unwrap();

        let oriented = graph.transitive_orientation().unwrap();
        assert!(oriented.edge_exists(&v("a"), &v("b")));
        assert!(oriented.edge_exists(&v("a"), &v("c")));
        assert!(oriented.edge_exists(&v("b"), &v("c")));
        assert_transitive(&oriented);
    }

    #[test]
    fn test_path_is_orientable() {
        let mut graph = UndirectedGraph::new();
        graph
            .add_vertices([v("a"), v("b"), v("c"), v("d")])
            .unwrap();
        graph.add_edge(&v("a"), &v("b")).unwrap();
        graph.add_edge(&v("b"), &v("c")).unwrap();
        graph.add_edge(&v("c"), &v("d")).unwrap();

        assert!(graph.is_comparability());
        let oriented = graph.transitive_orientation().unwrap();
        assert_eq!(oriented.edge_count(), 3);
        assert_transitive(&oriented);
    }

    #[test]
    fn test_star_is_orientable() {
        let mut graph = UndirectedGraph::new();
        graph
            .add_vertices([v("s"), v("a"), v("b"), v("c")])
            .unwrap();
        graph.add_edge(&v("s"), &v("a")).unwrap();
        graph.add_edge(&v("s"), &v("b")).unwrap();
        graph.add_edge(&v("s"), &v("c")).unwrap();

        let oriented = graph.transitive_orientation().unwrap();
        // 所有边相对中心点同向
        let toward = oriented.edge_exists(&v("a"), &v("s"));
        for leaf in ["a", "b", "c"] {
            assert_eq!(oriented.edge_exists(&v(leaf), &v("s")), toward);
        }
        assert_transitive(&oriented);
    }

    #[test]
    fn test_orientation_covers_every_edge() {
        let graph = cycle(&["a", "b", "c", "d", "e", "f"]);
        let oriented = graph.transitive_orientation().unwrap();

        assert_eq!(oriented.edge_count(), graph.edge_count());
        for (u, w) in graph.edges() {
            assert!(
                oriented.edge_exists(&u, &w) || oriented.edge_exists(&w, &u),
                "边 {u} - {w} 未被定向",
            );
        }
    }
}
