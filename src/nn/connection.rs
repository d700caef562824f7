/*
 * @Author       : 老董
 * @Date         : 2026-03-02 20:14:02
 * @Description  : 连接：两个神经元之间的带权有向边
 */

use super::{NeuronId, Weight};
use serde::{Deserialize, Serialize};

/// 带权连接
///
/// 两端以arena id的形式引用神经元，由所属`Network`在建立连接时校验存在性，
/// 因此连接在其生命周期内两端恒为有效id。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    from: NeuronId,
    to: NeuronId,
    weight: Weight,
}

impl Connection {
    /// 以调用方提供的权值创建连接（仅供`Network`调用，两端id已校验）
    pub(crate) fn with_weight(from: NeuronId, to: NeuronId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 连接的源神经元
    pub fn from_neuron(&self) -> NeuronId {
        self.from
    }

    /// 连接的目标神经元
    pub fn to_neuron(&self) -> NeuronId {
        self.to
    }

    /// 连接权值
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// 连接权值（可变）
    pub fn weight_mut(&mut self) -> &mut Weight {
        &mut self.weight
    }
}
