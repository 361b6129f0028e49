//! 字典序广度优先搜索
//!
//! 通过迭代的划分细化产生顶点排列：初始只有一个按插入顺序排列的部分，
//! 每一步取出第一个部分的首顶点，并把它在剩余部分中的邻居移动到
//! 所在部分之前新建（或本步已建）的部分中。

use crate::graph::{AdjacencyStore, UndirectedGraph, Vertex};
use std::collections::HashSet;

/// 带稳定编号的划分部分
///
/// 部分在序列中会因插入和删除而移动，编号用于识别本步内已被拆分过的部分。
struct Part {
    id: u64,
    members: Vec<Vertex>,
}

/// LexBFS 算法
pub struct LexBfs<'a> {
    graph: &'a UndirectedGraph,
}

impl<'a> LexBfs<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self { graph }
    }

    /// 产生字典序 BFS 排列
    pub fn ordering(&self) -> Vec<Vertex> {
        let mut parts = vec![Part {
            id: 0,
            members: self.graph.vertices(),
        }];
        let mut next_id: u64 = 1;
        let mut output = Vec::with_capacity(self.graph.vertex_count());

        while !parts.is_empty() {
            if parts[0].members.is_empty() {
                parts.remove(0);
                continue;
            }
            let vertex = parts[0].members.remove(0);
            if parts[0].members.is_empty() {
                parts.remove(0);
            }

            // 本步已拆分过的部分编号
            let mut split: HashSet<u64> = HashSet::new();

            for neighbor in self.graph.symmetric_neighbors(&vertex) {
                // 已输出的邻居不在任何部分中
                let Some(position) = parts
                    .iter()
                    .position(|part| part.members.contains(&neighbor))
                else {
                    continue;
                };

                let (target, source) = if split.contains(&parts[position].id) {
                    // 同一步内再次拆分：目标部分就在源部分之前
                    (position - 1, position)
                } else {
                    split.insert(parts[position].id);
                    parts.insert(
                        position,
                        Part {
                            id: next_id,
                            members: Vec::new(),
                        },
                    );
                    next_id += 1;
                    (position, position + 1)
                };

                parts[source].members.retain(|m| m != &neighbor);
                parts[target].members.push(neighbor);
                if parts[source].members.is_empty() {
                    parts.remove(source);
                }
            }

            output.push(vertex);
        }

        output
    }
}
