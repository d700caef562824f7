//! 全crate共用的错误类型定义

use thiserror::Error;

/// 神经网络引擎相关错误
///
/// 结构性错误（拓扑、参数、维度）在误用处立即失败并带上下文信息；
/// 数值上的退化情形（空聚类、零宽度高斯）不算错误，按退化值继续传播。
#[derive(Error, Debug, PartialEq)]
pub enum NeuroError {
    /// 网络拓扑非法（引用了不存在的神经元、删除不存在的层等）
    #[error("非法拓扑: {0}")]
    InvalidTopology(String),

    /// 参数非法（聚类数为0、近邻数超过参考集大小等）
    #[error("非法参数: {0}")]
    InvalidParameter(String),

    /// 向量维度不匹配
    #[error("向量维度不匹配: 期望{expected}, 实际{got}")]
    VectorSizeMismatch { expected: usize, got: usize },

    /// 持久化（保存/加载）失败
    #[error("持久化失败: {0}")]
    PersistenceFailure(String),
}
