//! 深度优先搜索与拓扑排序
//!
//! 单调递增的计数器在整个 DFS 森林中共享：顶层按顶点插入顺序访问，
//! 后继按邻接表顺序递归访问。拓扑排序按完成时间降序输出。

use crate::error::{Error, Result};
use crate::graph::{AdjacencyStore, DirectedGraph, Vertex};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// DFS 时间戳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsTimestamps {
    /// 发现时间
    pub discovery: usize,
    /// 完成时间
    pub finish: usize,
}

/// 深度优先搜索算法
pub struct DepthFirstSearch<'a> {
    graph: &'a DirectedGraph,
}

impl<'a> DepthFirstSearch<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a DirectedGraph) -> Self {
        Self { graph }
    }

    /// 执行 DFS，返回顶点到时间戳的映射（按发现顺序）
    pub fn run(&self) -> IndexMap<Vertex, DfsTimestamps> {
        let mut discovered = HashSet::new();
        let mut output = IndexMap::new();
        let mut time = 0;

        for vertex in self.graph.vertices() {
            if !discovered.contains(&vertex) {
                self.visit(&vertex, &mut time, &mut discovered, &mut output);
            }
        }

        output
    }

    /// 递归访问：计数器和已发现集合通过可变引用传递
    fn visit(
        &self,
        vertex: &Vertex,
        time: &mut usize,
        discovered: &mut HashSet<Vertex>,
        output: &mut IndexMap<Vertex, DfsTimestamps>,
    ) {
        discovered.insert(vertex.clone());
        *time += 1;
        output.insert(
            vertex.clone(),
            DfsTimestamps {
                discovery: *time,
                finish: 0,
            },
        );

        for successor in self.graph.successors(vertex) {
            if !discovered.contains(successor) {
                self.visit(successor, time, discovered, output);
            }
        }

        *time += 1;
        if let Some(timestamps) = output.get_mut(vertex) {
            timestamps.finish = *time;
        }
    }

    /// 拓扑排序
    ///
    /// 完成时间的降序仅对无环图有意义，存在环时返回 `CycleDetected`：
    /// 弧 (u→v) 满足 finish[u] < finish[v] 当且仅当它是回边。
    pub fn topological_sort(&self) -> Result<Vec<Vertex>> {
        let timestamps = self.run();

        for (u, v) in self.graph.edges() {
            if let (Some(tu), Some(tv)) = (timestamps.get(&u), timestamps.get(&v)) {
                if tu.finish < tv.finish {
                    return Err(Error::CycleDetected);
                }
            }
        }

        let mut order: Vec<(Vertex, usize)> = timestamps
            .into_iter()
            .map(|(vertex, times)| (vertex, times.finish))
            .collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(order.into_iter().map(|(vertex, _)| vertex).collect())
    }
}
