/*
 * @Author       : 老董
 * @Date         : 2026-03-03 16:08:12
 * @Description  : 网络层：有序的一组神经元
 */

use super::NeuronId;
use serde::{Deserialize, Serialize};

/// 网络层
///
/// 只持有神经元在网络arena中的id序列；顺序稳定，同时决定
/// 前向计算顺序与权值枚举顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    neuron_ids: Vec<NeuronId>,
}

impl Layer {
    pub(crate) fn new(neuron_ids: Vec<NeuronId>) -> Self {
        Self { neuron_ids }
    }

    /// 本层神经元id（声明顺序）
    pub fn neuron_ids(&self) -> &[NeuronId] {
        &self.neuron_ids
    }

    /// 本层神经元个数
    pub fn neurons_count(&self) -> usize {
        self.neuron_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neuron_ids.is_empty()
    }
}
