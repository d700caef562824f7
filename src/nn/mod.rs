/*
 * @Author       : 老董
 * @Date         : 2026-03-02 19:40:11
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-19 21:08:45
 * @Description  : 负责神经网络（neural network）计算图的构建与前向计算
 */

mod connection;
mod events;
mod input_function;
mod layer;
mod network;
mod neuron;
mod persistence;
mod transfer;
mod weight;

pub use connection::Connection;
pub use events::{NetworkEvent, NetworkEventListener};
pub use input_function::{Difference, InputFunction, TraitInputFunction, WeightedInput, WeightedSum};
pub use layer::Layer;
pub use network::Network;
pub use neuron::Neuron;
pub use transfer::{
    Gaussian, Linear, RectifiedLinear, Sigmoid, Tanh, TraitTransferFunction, TransferFunction,
};
pub use weight::Weight;

use serde::{Deserialize, Serialize};

/// 神经元在网络内部arena中的id（按加入顺序递增的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronId(pub(crate) usize);

impl NeuronId {
    /// 返回arena下标
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests;
