/*
 * @Author       : 老董
 * @Date         : 2026-03-12 16:40:08
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-02 10:03:26
 * @Description  : LMS（最小均方）监督学习规则
 */

use super::error_function::{ErrorFunction, MeanSquaredError};
use super::iterative::{IterativeState, TraitLearningRule};
use super::stop::{MaxErrorStop, StopCondition};
use crate::data::DataSet;
use crate::errors::NeuroError;
use crate::nn::{Network, NeuronId};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// LMS学习规则
///
/// 每轮epoch按行执行：写输入 → 前向计算 → 误差 = 期望 - 输出 →
/// 对每个输出神经元的入边做 Δw = 学习率·误差·输入。
/// 只调输出神经元的入边权值，上游各层不动——RBF训练正是借此
/// 保持聚类初始化好的隐层权值不被触碰。
#[derive(Serialize, Deserialize)]
pub struct LmsLearning {
    state: IterativeState,
    max_error_stop: MaxErrorStop,
    error_function: MeanSquaredError,
}

impl Default for LmsLearning {
    fn default() -> Self {
        Self::new()
    }
}

impl LmsLearning {
    pub fn new() -> Self {
        Self {
            state: IterativeState::new(),
            max_error_stop: MaxErrorStop::default(),
            error_function: MeanSquaredError::default(),
        }
    }

    /// 误差阈值（总误差低于它即停止，默认0.01）
    pub fn max_error(&self) -> f64 {
        self.max_error_stop.max_error()
    }

    pub fn set_max_error(&mut self, max_error: f64) {
        self.max_error_stop = MaxErrorStop::new(max_error);
    }

    /// 对输出层做一次LMS调权
    fn update_output_weights(&self, network: &mut Network, pattern_error: &Array1<f64>) {
        let learning_rate = self.state.learning_rate();
        let output_ids: Vec<NeuronId> = network.output_neurons().to_vec();
        for (i, &id) in output_ids.iter().enumerate() {
            let neuron_error = pattern_error[i];
            // 先按入边顺序读出上游输出，再回写权值
            let upstream: Vec<f64> = network
                .neuron_ref(id)
                .input_connections()
                .iter()
                .map(|conn| network.neuron_ref(conn.from_neuron()).output())
                .collect();
            let neuron = network.neuron_ref_mut(id);
            for (ci, conn) in neuron.input_connections_mut().iter_mut().enumerate() {
                conn.weight_mut().inc(learning_rate * neuron_error * upstream[ci]);
            }
        }
    }
}

impl TraitLearningRule for LmsLearning {
    fn state(&self) -> &IterativeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut IterativeState {
        &mut self.state
    }

    fn on_start(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        if training_set.is_empty() {
            return Err(NeuroError::InvalidParameter("训练集为空".to_string()));
        }
        if !training_set.is_supervised() {
            return Err(NeuroError::InvalidParameter(
                "LMS需要携带期望输出的监督训练集".to_string(),
            ));
        }
        if training_set.input_size() != network.inputs_count() {
            return Err(NeuroError::VectorSizeMismatch {
                expected: network.inputs_count(),
                got: training_set.input_size(),
            });
        }
        if training_set.output_size() != network.outputs_count() {
            return Err(NeuroError::VectorSizeMismatch {
                expected: network.outputs_count(),
                got: training_set.output_size(),
            });
        }
        self.error_function.reset();
        Ok(())
    }

    fn do_learning_epoch(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        // 单独调用一轮epoch时也要守住输出维度（learn之外没有on_start把关）
        if training_set.output_size() != network.outputs_count() {
            return Err(NeuroError::VectorSizeMismatch {
                expected: network.outputs_count(),
                got: training_set.output_size(),
            });
        }
        self.error_function.reset();
        for row in training_set.iter() {
            let desired = row.desired_output().ok_or_else(|| {
                NeuroError::InvalidParameter("监督学习的行缺少期望输出".to_string())
            })?;
            network.set_input(row.input())?;
            network.calculate();
            let output = network.get_output();
            let pattern_error = self.error_function.calculate_pattern_error(&output, desired);
            self.update_output_weights(network, &pattern_error);
        }
        self.state
            .set_total_network_error(self.error_function.total_error());
        Ok(())
    }

    fn has_reached_stop(&self) -> bool {
        self.state.reached_stop_condition() || self.max_error_stop.is_reached(&self.state)
    }
}
