//! 顶点定义
//!
//! 顶点是不透明的可比较标识符，实践中是一个短标签。
//! 字典序比较同时决定无向边的规范存储键。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点标识
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vertex(String);

impl Vertex {
    /// 创建顶点
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 获取标签
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// 按字典序排列一对顶点，得到无向边的规范存储键
pub fn ordered_pair(u: &Vertex, v: &Vertex) -> (Vertex, Vertex) {
    if u <= v {
        (u.clone(), v.clone())
    } else {
        (v.clone(), u.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_ordering() {
        let a = Vertex::from("a");
        let b = Vertex::from("b");

        assert!(a < b);
        assert_eq!(ordered_pair(&b, &a), (a.clone(), b.clone()));
        assert_eq!(ordered_pair(&a, &b), (a, b));
    }

    #[test]
    fn test_vertex_display() {
        let v = Vertex::new("node-1");
        assert_eq!(v.to_string(), "node-1");
        assert_eq!(v.as_str(), "node-1");
    }
}
