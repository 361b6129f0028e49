//! 带权图
//!
//! 在基础图之上组合一个权重存储：权重条目与边/弧一一对应，
//! 删除边时权重作为同一逻辑操作一并移除，不存在只剩一方的中间状态。

use super::directed::DirectedGraph;
use super::store::AdjacencyStore;
use super::undirected::UndirectedGraph;
use super::vertex::{ordered_pair, Vertex};
use crate::algorithm::{Dijkstra, Prim, ShortestPathTree};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// 权重存储
///
/// 键的顺序约定跟随基础图：无向图用规范序键，有向图用字面序键。
#[derive(Debug, Clone, Default)]
struct WeightStore {
    weights: IndexMap<(Vertex, Vertex), f64>,
}

impl WeightStore {
    fn insert(&mut self, key: (Vertex, Vertex), weight: f64) {
        self.weights.insert(key, weight);
    }

    fn remove(&mut self, key: &(Vertex, Vertex)) {
        self.weights.shift_remove(key);
    }

    fn get(&self, key: &(Vertex, Vertex)) -> Option<f64> {
        self.weights.get(key).copied()
    }

    /// 移除某顶点的全部关联权重
    fn remove_incident(&mut self, name: &Vertex) {
        self.weights.retain(|(u, v), _| u != name && v != name);
    }

    fn total(&self) -> f64 {
        self.weights.values().sum()
    }
}

/// 带权无向图
#[derive(Debug, Clone, Default)]
pub struct WeightedUndirectedGraph {
    graph: UndirectedGraph,
    weights: WeightStore,
}

impl AdjacencyStore for WeightedUndirectedGraph {
    fn adjacency(&self) -> &IndexMap<Vertex, Vec<Vertex>> {
        self.graph.adjacency()
    }

    fn adjacency_mut(&mut self) -> &mut IndexMap<Vertex, Vec<Vertex>> {
        self.graph.adjacency_mut()
    }

    fn edge_exists(&self, u: &Vertex, v: &Vertex) -> bool {
        self.graph.edge_exists(u, v)
    }

    fn neighbors_of_vertex(&self, name: &Vertex) -> Result<Vec<Vertex>> {
        self.graph.neighbors_of_vertex(name)
    }
}

impl WeightedUndirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从邻接映射和权重映射构造
    ///
    /// 每条边必须有对应权重，缺失时返回 `UnknownEdge`。
    pub fn from_adjacency(
        adjacency: IndexMap<Vertex, Vec<Vertex>>,
        weights: IndexMap<(Vertex, Vertex), f64>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone())?;
        }
        for (vertex, neighbors) in &adjacency {
            for neighbor in neighbors {
                let key = ordered_pair(vertex, neighbor);
                let weight = weights
                    .get(&key)
                    .copied()
                    .ok_or_else(|| Error::UnknownEdge(key.0.clone(), key.1.clone()))?;
                graph.add_edge(vertex, neighbor, weight)?;
            }
        }
        Ok(graph)
    }

    /// 内部的无权视图
    pub fn as_unweighted(&self) -> &UndirectedGraph {
        &self.graph
    }

    // ==================== 边操作 ====================

    /// 添加边 {u, v} 及其权重
    pub fn add_edge(&mut self, u: &Vertex, v: &Vertex, weight: f64) -> Result<()> {
        self.graph.add_edge(u, v)?;
        self.weights.insert(ordered_pair(u, v), weight);
        Ok(())
    }

    /// 删除边 {u, v} 及其权重
    pub fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> Result<()> {
        self.graph.remove_edge(u, v)?;
        self.weights.remove(&ordered_pair(u, v));
        Ok(())
    }

    /// 删除顶点、关联边及其权重
    pub fn remove_vertex(&mut self, name: &Vertex) -> Result<()> {
        self.graph.remove_vertex(name)?;
        self.weights.remove_incident(name);
        Ok(())
    }

    /// 查询边权重
    pub fn edge_weight(&self, u: &Vertex, v: &Vertex) -> Result<f64> {
        self.weights
            .get(&ordered_pair(u, v))
            .ok_or_else(|| Error::UnknownEdge(u.clone(), v.clone()))
    }

    /// 调整已有边的权重
    pub fn adjust_weight(&mut self, u: &Vertex, v: &Vertex, weight: f64) -> Result<()> {
        if !self.edge_exists(u, v) {
            return Err(Error::UnknownEdge(u.clone(), v.clone()));
        }
        self.weights.insert(ordered_pair(u, v), weight);
        Ok(())
    }

    /// 全部边权重之和
    pub fn total_weight(&self) -> f64 {
        self.weights.total()
    }

    // ==================== 算法入口 ====================

    /// Prim 最小生成树，图不连通时返回 `Disconnected`
    pub fn minimum_spanning_tree(&self) -> Result<WeightedUndirectedGraph> {
        Prim::new(self).minimum_spanning_tree()
    }
}

/// 带权有向图
#[derive(Debug, Clone, Default)]
pub struct WeightedDirectedGraph {
    graph: DirectedGraph,
    weights: WeightStore,
}

impl AdjacencyStore for WeightedDirectedGraph {
    fn adjacency(&self) -> &IndexMap<Vertex, Vec<Vertex>> {
        self.graph.adjacency()
    }

    fn adjacency_mut(&mut self) -> &mut IndexMap<Vertex, Vec<Vertex>> {
        self.graph.adjacency_mut()
    }

    fn edge_exists(&self, u: &Vertex, v: &Vertex) -> bool {
        self.graph.edge_exists(u, v)
    }

    fn neighbors_of_vertex(&self, name: &Vertex) -> Result<Vec<Vertex>> {
        self.graph.neighbors_of_vertex(name)
    }
}

impl WeightedDirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从邻接映射和权重映射构造
    pub fn from_adjacency(
        adjacency: IndexMap<Vertex, Vec<Vertex>>,
        weights: IndexMap<(Vertex, Vertex), f64>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone())?;
        }
        for (vertex, successors) in &adjacency {
            for successor in successors {
                let key = (vertex.clone(), successor.clone());
                let weight = weights
                    .get(&key)
                    .copied()
                    .ok_or_else(|| Error::UnknownEdge(key.0.clone(), key.1.clone()))?;
                graph.add_edge(vertex, successor, weight)?;
            }
        }
        Ok(graph)
    }

    /// 内部的无权视图
    pub fn as_unweighted(&self) -> &DirectedGraph {
        &self.graph
    }

    // ==================== 弧操作 ====================

    /// 添加弧 (u→v) 及其权重
    pub fn add_edge(&mut self, u: &Vertex, v: &Vertex, weight: f64) -> Result<()> {
        self.graph.add_edge(u, v)?;
        self.weights.insert((u.clone(), v.clone()), weight);
        Ok(())
    }

    /// 删除弧 (u→v) 及其权重
    pub fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> Result<()> {
        self.graph.remove_edge(u, v)?;
        self.weights.remove(&(u.clone(), v.clone()));
        Ok(())
    }

    /// 删除顶点、关联弧及其权重
    pub fn remove_vertex(&mut self, name: &Vertex) -> Result<()> {
        self.graph.remove_vertex(name)?;
        self.weights.remove_incident(name);
        Ok(())
    }

    /// 查询弧权重
    pub fn edge_weight(&self, u: &Vertex, v: &Vertex) -> Result<f64> {
        self.weights
            .get(&(u.clone(), v.clone()))
            .ok_or_else(|| Error::UnknownEdge(u.clone(), v.clone()))
    }

    /// 调整已有弧的权重
    pub fn adjust_weight(&mut self, u: &Vertex, v: &Vertex, weight: f64) -> Result<()> {
        if !self.edge_exists(u, v) {
            return Err(Error::UnknownEdge(u.clone(), v.clone()));
        }
        self.weights.insert((u.clone(), v.clone()), weight);
        Ok(())
    }

    // ==================== 算法入口 ====================

    /// 单源最短路径树
    pub fn single_source_shortest_paths(&self, source: &Vertex) -> Result<ShortestPathTree> {
        Dijkstra::new(self).single_source(source)
    }

    /// v 到 u 的最短距离，不可达时为无穷大
    pub fn shortest_path_distance(&self, v: &Vertex, u: &Vertex) -> Result<f64> {
        Dijkstra::new(self).distance(v, u)
    }

    /// v 到 u 的最短路径（含两端点）
    pub fn shortest_path(&self, v: &Vertex, u: &Vertex) -> Result<Vec<Vertex>> {
        Dijkstra::new(self).path(v, u)
    }
}
