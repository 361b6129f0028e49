//! 最小生成树
//!
//! Prim 算法：从任意一个顶点开始生长，每次取恰好一个端点在树内的
//! 最小权重边（懒惰删除过期条目），直到覆盖全部顶点。

use super::MinWeight;
use crate::error::{Error, Result};
use crate::graph::{AdjacencyStore, Vertex, WeightedUndirectedGraph};
use priority_queue::PriorityQueue;
use tracing::debug;

/// Prim 算法
pub struct Prim<'a> {
    graph: &'a WeightedUndirectedGraph,
}

impl<'a> Prim<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a WeightedUndirectedGraph) -> Self {
        Self { graph }
    }

    /// 构造最小生成树
    ///
    /// 图不连通时边界队列会在覆盖全部顶点前耗尽，返回 `Disconnected`
    /// 而不是无法终止。空图得到空树。
    pub fn minimum_spanning_tree(&self) -> Result<WeightedUndirectedGraph> {
        let vertices = self.graph.vertices();
        let mut tree = WeightedUndirectedGraph::new();
        let Some(start) = vertices.first() else {
            return Ok(tree);
        };
        tree.add_vertex(start.clone())?;

        let mut frontier: PriorityQueue<(Vertex, Vertex), MinWeight> = PriorityQueue::new();
        self.push_incident_edges(start, &mut frontier)?;

        while tree.vertex_count() < vertices.len() {
            let Some(((u, w), _)) = frontier.pop() else {
                return Err(Error::Disconnected);
            };
            let (inside, outside) = if tree.vertex_exists(&u) { (u, w) } else { (w, u) };
            if tree.vertex_exists(&outside) {
                // 两端点都已入树的过期条目
                continue;
            }

            let weight = self.graph.edge_weight(&inside, &outside)?;
            debug!(from = %inside, to = %outside, weight, "生成树加入新边");
            tree.add_vertex(outside.clone())?;
            tree.add_edge(&inside, &outside, weight)?;
            self.push_incident_edges(&outside, &mut frontier)?;
        }

        Ok(tree)
    }

    fn push_incident_edges(
        &self,
        vertex: &Vertex,
        frontier: &mut PriorityQueue<(Vertex, Vertex), MinWeight>,
    ) -> Result<()> {
        for (u, w) in self.graph.edges_on_vertex(vertex)? {
            let weight = self.graph.edge_weight(&u, &w)?;
            frontier.push((u, w), MinWeight(weight));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn v(name: &str) -> Vertex {
        Vertex::from(name)
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn sample_graph() -> WeightedUndirectedGraph {
        let mut graph = WeightedUndirectedGraph::new();
        graph
            .add_vertices([v("a"), v("b"), v("c"), v("d")])
            .unwrap();
        graph.add_edge(&v("a"), &v("b"), 1.0).unwrap();
        graph.add_edge(&v("a"), &v("c"), 4.0).unwrap();
        graph.add_edge(&v("b"), &v("c"), 2.0).unwrap();
        graph.add_edge(&v("b"), &v("d"), 6.0).unwrap();
        graph.add_edge(&v("c"), &v("d"), 3.0).unwrap();
        graph
    }

    /// 穷举所有 n-1 条边的子集，返回连通生成树的最小总权重
    fn brute_force_mst_weight(graph: &WeightedUndirectedGraph) -> f64 {
        let vertices = graph.vertices();
        let edges = graph.edges();
        let n = vertices.len();
        let mut best = f64::INFINITY;

        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let chosen: Vec<_> = edges
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, e)| e.clone())
                .collect();

            // 连通性检查
            let mut reached = vec![vertices[0].clone()];
            loop {
                let before = reached.len();
                for (a, b) in &chosen {
                    if reached.contains(a) && !reached.contains(b) {
                        reached.push(b.clone());
                    } else if reached.contains(b) && !reached.contains(a) {
                        reached.push(a.clone());
                    }
                }
                if reached.len() == before {
                    break;
                }
            }
            if reached.len() != n {
                continue;
            }

            let total: f64 = chosen
                .iter()
                .map(|(a, b)| graph.edge_weight(a, b).unwrap())
                .sum();
            best = best.min(total);
        }
        best
    }

    #[test]
    fn test_mst_is_spanning_tree() {
        let graph = sample_graph();
        let tree = graph.minimum_spanning_tree().unwrap();

        // n 个顶点、n-1 条边，且每条树边都来自原图
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        for vertex in graph.vertices() {
            assert!(tree.vertex_exists(&vertex));
        }
        for (a, b) in tree.edges() {
            assert!(graph.edge_exists(&a, &b));
            assert_eq!(
                tree.edge_weight(&a, &b).unwrap(),
                graph.edge_weight(&a, &b).unwrap()
            );
        }
    }

    #[test]
    fn test_mst_weight_is_minimal() {
        let graph = sample_graph();
        let tree = graph.minimum_spanning_tree().unwrap();

        assert_eq!(tree.total_weight(), brute_force_mst_weight(&graph));
        assert_eq!(tree.total_weight(), 6.0); // a-b(1) + b-c(2) + c-d(3)
    }

    #[test]
    fn test_mst_on_random_graphs() {
        init_tracing();
        let mut rng = StdRng::seed_from_u64(42);
        let names = ["a", "b", "c", "d", "e"];

        for _ in 0..20 {
            let mut graph = WeightedUndirectedGraph::new();
            graph.add_vertices(names.iter().map(|&n| v(n))).unwrap();
            // 环保证连通，再随机加弦
            for i in 0..names.len() {
                let next = (i + 1) % names.len();
                graph
                    .add_edge(
                        &v(names[i]),
                        &v(names[next]),
                        rng.gen_range(1..20) as f64,
                    )
                    .unwrap();
            }
            for i in 0..names.len() {
                for j in i + 2..names.len() {
                    if (i, j) != (0, names.len() - 1) && rng.gen_bool(0.5) {
                        graph
                            .add_edge(&v(names[i]), &v(names[j]), rng.gen_range(1..20) as f64)
                            .unwrap();
                    }
                }
            }

            let tree = graph.minimum_spanning_tree().unwrap();
            assert_eq!(tree.vertex_count(), names.len());
            assert_eq!(tree.edge_count(), names.len() - 1);
            assert_eq!(tree.total_weight(), brute_force_mst_weight(&graph));
        }
    }

    #[test]
    fn test_disconnected_graph_fails() {
        let mut graph = sample_graph();
        graph.add_vertex(v("z")).unwrap();

        assert!(matches!(
            graph.minimum_spanning_tree(),
            Err(Error::Disconnected)
        ));
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = WeightedUndirectedGraph::new();
        assert_eq!(empty.minimum_spanning_tree().unwrap().vertex_count(), 0);

        let mut single = WeightedUndirectedGraph::new();
        single.add_vertex(v("a")).unwrap();
        let tree = single.minimum_spanning_tree().unwrap();
        assert_eq!(tree.vertex_count(), 1);
        assert_eq!(tree.edge_count(), 0);
    }
}
