//! 无向图
//!
//! 无向边 {u, v} 只存储一次：以字典序较小的端点为键，指向较大的端点。
//! 因此邻居查询必须双向检索，`edges()` 惰性重建对称的边列表。

use super::store::AdjacencyStore;
use super::vertex::{ordered_pair, Vertex};
use crate::algorithm::{Chordality, LexBfs, TransitiveOrienter, TwoColoring};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

use super::directed::DirectedGraph;

/// 无向图
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// 顶点 -> 规范存储的邻居序列
    adjacency: IndexMap<Vertex, Vec<Vertex>>,
}

impl AdjacencyStore for UndirectedGraph {
    fn adjacency(&self) -> &IndexMap<Vertex, Vec<Vertex>> {
        &self.adjacency
    }

    fn adjacency_mut(&mut self) -> &mut IndexMap<Vertex, Vec<Vertex>> {
        &mut self.adjacency
    }

    fn edge_exists(&self, u: &Vertex, v: &Vertex) -> bool {
        let (small, large) = ordered_pair(u, v);
        self.adjacency
            .get(&small)
            .is_some_and(|neighbors| neighbors.contains(&large))
    }

    fn neighbors_of_vertex(&self, name: &Vertex) -> Result<Vec<Vertex>> {
        if !self.vertex_exists(name) {
            return Err(Error::UnknownVertex(name.clone()));
        }
        Ok(self.symmetric_neighbors(name))
    }
}

impl UndirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从初始邻接映射构造
    ///
    /// 通过引擎操作逐条建边，保证所有不变量成立。
    pub fn from_adjacency(adjacency: IndexMap<Vertex, Vec<Vertex>>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone())?;
        }
        for (vertex, neighbors) in &adjacency {
            for neighbor in neighbors {
                graph.add_edge(vertex, neighbor)?;
            }
        }
        Ok(graph)
    }

    // ==================== 边操作 ====================

    /// 添加边 {u, v}
    pub fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> Result<()> {
        if self.edge_exists(u, v) {
            return Err(Error::DuplicateEdge(u.clone(), v.clone()));
        }
        if !self.vertex_exists(u) {
            return Err(Error::UnknownVertex(u.clone()));
        }
        if !self.vertex_exists(v) {
            return Err(Error::UnknownVertex(v.clone()));
        }
        let (small, large) = ordered_pair(u, v);
        if let Some(neighbors) = self.adjacency.get_mut(&small) {
            neighbors.push(large);
        }
        Ok(())
    }

    /// 删除边 {u, v}
    ///
    /// 不单独校验顶点存在性：顶点缺失时自然匹配不到任何边。
    pub fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> Result<()> {
        if !self.edge_exists(u, v) {
            return Err(Error::UnknownEdge(u.clone(), v.clone()));
        }
        let (small, large) = ordered_pair(u, v);
        if let Some(neighbors) = self.adjacency.get_mut(&small) {
            neighbors.retain(|n| n != &large);
        }
        Ok(())
    }

    /// 删除顶点及所有关联边
    pub fn remove_vertex(&mut self, name: &Vertex) -> Result<()> {
        if !self.vertex_exists(name) {
            return Err(Error::UnknownVertex(name.clone()));
        }
        for (u, v) in self.edges_on_vertex(name)? {
            self.remove_edge(&u, &v)?;
        }
        self.adjacency.shift_remove(name);
        Ok(())
    }

    /// 顶点的度数
    pub fn degree(&self, name: &Vertex) -> Result<usize> {
        Ok(self.neighbors_of_vertex(name)?.len())
    }

    /// 双向检索邻居（不校验顶点，内部使用）
    ///
    /// 按边扫描顺序返回，LexBFS 的细化顺序依赖这一点。
    pub(crate) fn symmetric_neighbors(&self, name: &Vertex) -> Vec<Vertex> {
        let mut neighbors = Vec::new();
        for (u, v) in self.edges() {
            if &u == name {
                neighbors.push(v);
            } else if &v == name {
                neighbors.push(u);
            }
        }
        neighbors
    }

    /// 与边 {u, v} 相邻的所有边（共享恰好一个端点，不含自身）
    pub fn adjacent_edges(&self, u: &Vertex, v: &Vertex) -> Result<Vec<(Vertex, Vertex)>> {
        if !self.edge_exists(u, v) {
            return Err(Error::UnknownEdge(u.clone(), v.clone()));
        }
        let own = ordered_pair(u, v);
        Ok(self
            .edges()
            .into_iter()
            .filter(|edge| {
                let touches = edge.0 == own.0
                    || edge.0 == own.1
                    || edge.1 == own.0
                    || edge.1 == own.1;
                touches && edge != &own
            })
            .collect())
    }

    /// 判断两条边是否相邻
    pub fn edges_adjacent(&self, first: (&Vertex, &Vertex), second: (&Vertex, &Vertex)) -> Result<bool> {
        let key = ordered_pair(second.0, second.1);
        Ok(self.adjacent_edges(first.0, first.1)?.contains(&key))
    }

    // ==================== 结构谓词 ====================

    /// 判断顶点集是否构成团：集合内任意两点互相邻接
    pub fn is_clique(&self, vertex_set: &[Vertex]) -> Result<bool> {
        let set: HashSet<&Vertex> = vertex_set.iter().collect();
        for vertex in vertex_set {
            let neighbors: HashSet<Vertex> = self
                .neighbors_of_vertex(vertex)?
                .into_iter()
                .filter(|n| set.contains(n))
                .collect();
            let expected: HashSet<Vertex> = vertex_set
                .iter()
                .filter(|other| *other != vertex)
                .cloned()
                .collect();
            if neighbors != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// 判断是否为完全图：边数等于 n(n-1)/2
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count() == n * (n - 1) / 2
    }

    // ==================== 算法入口 ====================

    /// 字典序广度优先搜索得到的顶点排列
    pub fn lexicographic_bfs(&self) -> Vec<Vertex> {
        LexBfs::new(self).ordering()
    }

    /// 判断是否为弦图
    pub fn is_chordal(&self) -> bool {
        Chordality::new(self).is_chordal()
    }

    /// `is_chordal` 的同义词
    pub fn is_triangulated(&self) -> bool {
        self.is_chordal()
    }

    /// 判断是否为二分图
    pub fn is_bipartite(&self) -> bool {
        TwoColoring::new(self).is_bipartite()
    }

    /// 判断是否为可比较图（边能否被赋予传递定向）
    pub fn is_comparability(&self) -> bool {
        TransitiveOrienter::new(self).orientation().is_ok()
    }

    /// 求传递定向，失败时返回 `NotTransitive`
    pub fn transitive_orientation(&self) -> Result<DirectedGraph> {
        TransitiveOrienter::new(self).orientation()
    }
}
