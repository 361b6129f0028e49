//! 有向图
//!
//! 弧 (u→v) 按字面顺序存储，与 (v→u) 互相独立，不做规范化。

use super::store::AdjacencyStore;
use super::vertex::Vertex;
use crate::algorithm::{DepthFirstSearch, DfsTimestamps};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// 有向图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// 顶点 -> 直接后继序列
    adjacency: IndexMap<Vertex, Vec<Vertex>>,
}

impl AdjacencyStore for DirectedGraph {
    fn adjacency(&self) -> &IndexMap<Vertex, Vec<Vertex>> {
        &self.adjacency
    }

    fn adjacency_mut(&mut self) -> &mut IndexMap<Vertex, Vec<Vertex>> {
        &mut self.adjacency
    }

    fn edge_exists(&self, u: &Vertex, v: &Vertex) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|successors| successors.contains(v))
    }

    fn neighbors_of_vertex(&self, name: &Vertex) -> Result<Vec<Vertex>> {
        if !self.vertex_exists(name) {
            return Err(Error::UnknownVertex(name.clone()));
        }
        Ok(self.successors(name).to_vec())
    }
}

impl DirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从初始邻接映射构造
    pub fn from_adjacency(adjacency: IndexMap<Vertex, Vec<Vertex>>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone())?;
        }
        for (vertex, successors) in &adjacency {
            for successor in successors {
                graph.add_edge(vertex, successor)?;
            }
        }
        Ok(graph)
    }

    // ==================== 弧操作 ====================

    /// 添加弧 (u→v)
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
        if let Some(successors) = self.adjacency.get_mut(u) {
            successors.push(v.clone());
        }
        Ok(())
    }

    /// 删除弧 (u→v)
    pub fn remove_edge(&mut self, u: &Vertex, v: &Vertex) -> Result<()> {
        if !self.edge_exists(u, v) {
            return Err(Error::UnknownEdge(u.clone(), v.clone()));
        }
        if let Some(successors) = self.adjacency.get_mut(u) {
            successors.retain(|s| s != v);
        }
        Ok(())
    }

    /// 删除顶点及所有关联弧（出弧和入弧）
    pub fn remove_vertex(&mut self, name: &Vertex) -> Result<()> {
        if !self.vertex_exists(name) {
            return Err(Error::UnknownVertex(name.clone()));
        }
        // 出弧随键一并删除，入弧需要逐表清除
        self.adjacency.shift_remove(name);
        for successors in self.adjacency.values_mut() {
            successors.retain(|s| s != name);
        }
        Ok(())
    }

    /// 直接后继（不校验顶点，内部使用）
    pub(crate) fn successors(&self, name: &Vertex) -> &[Vertex] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    // ==================== 图变换 ====================

    /// 转置：每条弧 (u→v) 变为 (v→u)，顶点集不变
    pub fn transpose(&self) -> Self {
        let mut graph = Self::new();
        for vertex in self.adjacency.keys() {
            graph.adjacency.insert(vertex.clone(), Vec::new());
        }
        for (u, v) in self.edges() {
            if let Some(successors) = graph.adjacency.get_mut(&v) {
                successors.push(u);
            }
        }
        graph
    }

    /// 原地转置
    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    /// 从 start 出发经至多一个中间顶点可达的顶点（去重）
    pub fn reachable_by_two_path(&self, start: &Vertex) -> Result<Vec<Vertex>> {
        if !self.vertex_exists(start) {
            return Err(Error::UnknownVertex(start.clone()));
        }
        let mut reached = self.successors(start).to_vec();
        for vertex in self.successors(start) {
            reached.extend(self.successors(vertex).iter().cloned());
        }
        let mut unique = Vec::new();
        for vertex in reached {
            if !unique.contains(&vertex) {
                unique.push(vertex);
            }
        }
        Ok(unique)
    }

    /// 图的平方：原有弧加上所有二跳可达弧（跳过已有弧和自环）
    pub fn square(&self) -> Result<Self> {
        let mut graph = self.clone();
        for vertex in self.vertices() {
            for reachable in self.reachable_by_two_path(&vertex)? {
                if reachable != vertex && !self.edge_exists(&vertex, &reachable) {
                    graph.add_edge(&vertex, &reachable)?;
                }
            }
        }
        Ok(graph)
    }

    // ==================== 算法入口 ====================

    /// 深度优先搜索，返回每个顶点的发现/完成时间戳
    pub fn dfs(&self) -> IndexMap<Vertex, DfsTimestamps> {
        DepthFirstSearch::new(self).run()
    }

    /// 拓扑排序（按完成时间降序），有环时返回 `CycleDetected`
    pub fn topological_sort(&self) -> Result<Vec<Vertex>> {
        DepthFirstSearch::new(self).topological_sort()
    }
}
