//! 邻接存储能力
//!
//! 无向图和有向图各自实现一种存储纪律（规范序存储 / 字面序存储），
//! 共用的顶点操作和扫描查询由默认方法提供。带权图通过组合内部基础图
//! 获得同一能力，而不是继承层次。

use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// 邻接存储能力
///
/// 邻接表使用 `IndexMap`：顶点迭代顺序即插入顺序，LexBFS 的初始划分和
/// DFS 的顶层访问顺序都依赖这一点。
pub trait AdjacencyStore {
    /// 邻接表只读视图
    fn adjacency(&self) -> &IndexMap<Vertex, Vec<Vertex>>;

    /// 邻接表可变视图
    fn adjacency_mut(&mut self) -> &mut IndexMap<Vertex, Vec<Vertex>>;

    /// 判断边/弧是否存在（无向图按规范序，有向图按字面序）
    fn edge_exists(&self, u: &Vertex, v: &Vertex) -> bool;

    /// 顶点的邻居序列
    ///
    /// 无向图需要双向检索（存储是非对称的），有向图只返回直接后继。
    fn neighbors_of_vertex(&self, name: &Vertex) -> Result<Vec<Vertex>>;

    // ==================== 共享查询 ====================

    /// 所有顶点（按插入顺序）
    fn vertices(&self) -> Vec<Vertex> {
        self.adjacency().keys().cloned().collect()
    }

    /// 所有存储的边/弧（按邻接表扫描顺序）
    fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut pairs = Vec::new();
        for (vertex, neighbors) in self.adjacency() {
            for neighbor in neighbors {
                pairs.push((vertex.clone(), neighbor.clone()));
            }
        }
        pairs
    }

    /// 判断顶点是否存在
    fn vertex_exists(&self, name: &Vertex) -> bool {
        self.adjacency().contains_key(name)
    }

    /// 顶点数量
    fn vertex_count(&self) -> usize {
        self.adjacency().len()
    }

    /// 边/弧数量
    fn edge_count(&self) -> usize {
        self.adjacency().values().map(Vec::len).sum()
    }

    /// 经过顶点的所有边/弧
    fn edges_on_vertex(&self, name: &Vertex) -> Result<Vec<(Vertex, Vertex)>> {
        if !self.vertex_exists(name) {
            return Err(Error::UnknownVertex(name.clone()));
        }
        Ok(self
            .edges()
            .into_iter()
            .filter(|(u, v)| u == name || v == name)
            .collect())
    }

    // ==================== 共享变更 ====================

    /// 添加顶点
    fn add_vertex(&mut self, name: Vertex) -> Result<()> {
        if self.vertex_exists(&name) {
            return Err(Error::DuplicateVertex(name));
        }
        self.adjacency_mut().insert(name, Vec::new());
        Ok(())
    }

    /// 批量添加顶点
    fn add_vertices(&mut self, names: impl IntoIterator<Item = Vertex>) -> Result<()>
    where
        Self: Sized,
    {
        for name in names {
            self.add_vertex(name)?;
        }
        Ok(())
    }
}
