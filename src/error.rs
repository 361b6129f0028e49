//! 错误类型定义

use crate::graph::Vertex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    DuplicateVertex(Vertex),

    #[error("边已存在: {0} - {1}")]
    DuplicateEdge(Vertex, Vertex),

    #[error("顶点不存在: {0}")]
    UnknownVertex(Vertex),

    #[error("边不存在: {0} - {1}")]
    UnknownEdge(Vertex, Vertex),

    #[error("图不连通, 无法构造生成树")]
    Disconnected,

    #[error("图中存在环, 无法拓扑排序")]
    CycleDetected,

    #[error("该图不是可比较图, 无法赋予传递定向")]
    NotTransitive,
}
