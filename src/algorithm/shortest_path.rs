//! 单源最短路径
//!
//! Dijkstra 算法，要求非负权重。用优先队列反复取出暂定距离最小的
//! 未访问顶点并松弛其出弧；最小值为无穷大时剩余顶点不可达，提前结束。

use super::MinWeight;
use crate::error::{Error, Result};
use crate::graph::{AdjacencyStore, Vertex, WeightedDirectedGraph};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// 单源最短路径树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathTree {
    /// 顶点到源点的暂定距离，不可达为无穷大
    pub distance: HashMap<Vertex, f64>,
    /// 最短路径上的前驱顶点
    pub previous: HashMap<Vertex, Vertex>,
}

/// Dijkstra 算法
pub struct Dijkstra<'a> {
    graph: &'a WeightedDirectedGraph,
}

impl<'a> Dijkstra<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a WeightedDirectedGraph) -> Self {
        Self { graph }
    }

    /// 计算以 source 为源的最短路径树
    pub fn single_source(&self, source: &Vertex) -> Result<ShortestPathTree> {
        if !self.graph.vertex_exists(source) {
            return Err(Error::UnknownVertex(source.clone()));
        }

        let mut distance: HashMap<Vertex, f64> = self
            .graph
            .vertices()
            .into_iter()
            .map(|vertex| (vertex, f64::INFINITY))
            .collect();
        let mut previous: HashMap<Vertex, Vertex> = HashMap::new();
        distance.insert(source.clone(), 0.0);

        let mut queue: PriorityQueue<Vertex, MinWeight> = PriorityQueue::new();
        for (vertex, d) in &distance {
            queue.push(vertex.clone(), MinWeight(*d));
        }

        while let Some((u, MinWeight(d))) = queue.pop() {
            if d.is_infinite() {
                break;
            }
            for v in self.graph.neighbors_of_vertex(&u)? {
                let alt = d + self.graph.edge_weight(&u, &v)?;
                let current = distance.get(&v).copied().unwrap_or(f64::INFINITY);
                if alt < current {
                    trace!(from = %u, to = %v, distance = alt, "松弛出弧");
                    distance.insert(v.clone(), alt);
                    previous.insert(v.clone(), u.clone());
                    queue.change_priority(&v, MinWeight(alt));
                }
            }
        }

        Ok(ShortestPathTree { distance, previous })
    }

    /// v 到 u 的最短距离，u 不存在时失败，不可达时为无穷大
    pub fn distance(&self, v: &Vertex, u: &Vertex) -> Result<f64> {
        if !self.graph.vertex_exists(u) {
            return Err(Error::UnknownVertex(u.clone()));
        }
        let tree = self.single_source(v)?;
        Ok(tree.distance.get(u).copied().unwrap_or(f64::INFINITY))
    }

    /// v 到 u 的最短路径（含两端点），沿前驱映射回溯重建
    pub fn path(&self, v: &Vertex, u: &Vertex) -> Result<Vec<Vertex>> {
        if !self.graph.vertex_exists(u) {
            return Err(Error::UnknownVertex(u.clone()));
        }
        let tree = self.single_source(v)?;

        let mut path = Vec::new();
        let mut current = u.clone();
        while let Some(prev) = tree.previous.get(&current) {
            path.push(current.clone());
            current = prev.clone();
        }
        path.push(v.clone());
        path.reverse();
        Ok(path)
    }
}
