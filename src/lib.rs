//! # Only Neuro
//!
//! `only_neuro`项目旨在用纯rust实现一个"小而全"的显式神经网络引擎：
//! 网络是由层、神经元、带权连接组成的显式计算图（而非张量算子图），
//! 训练则由一族可中断、可扩展的迭代学习算法驱动——
//! 包括LMS监督学习，以及"K-Means聚类 + K近邻宽度估计 + LMS输出层调权"
//! 组合而成的RBF（径向基函数）网络训练管线。
//!

pub mod data;
pub mod errors;
pub mod learning;
pub mod nn;
pub mod nnet;

pub use errors::NeuroError;
