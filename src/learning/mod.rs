/*
 * @Author       : 老董
 * @Date         : 2026-03-10 14:20:37
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-20 11:32:09
 * @Description  : 迭代学习算法族：通用epoch循环 + LMS + RBF（K-Means/KNN）
 */

mod error_function;
mod iterative;
mod kmeans;
mod knn;
mod lms;
mod rbf;
mod stop;

#[cfg(test)]
mod tests;

pub use error_function::{ErrorFunction, MeanSquaredError};
pub use iterative::{IterativeState, LearningControl, TraitLearningRule};
pub use kmeans::{Cluster, KMeansClustering, KVector, euclidean_distance};
pub use knn::KNearestNeighbour;
pub use lms::LmsLearning;
pub use rbf::RbfLearning;
pub use stop::{MaxErrorStop, MaxIterationsStop, StopCondition};

use crate::data::DataSet;
use crate::errors::NeuroError;
use crate::nn::Network;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// 学习事件
///
/// 由epoch循环在每轮结束与训练停止时同步发出，按注册顺序通知，
/// 在训练线程上执行。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LearningEvent {
    /// 一轮epoch结束（携带当前迭代数与本轮总误差）
    EpochEnded { iteration: usize, total_error: f64 },
    /// 训练已停止
    LearningStopped { iteration: usize },
}

/// 学习事件监听器
pub type LearningEventListener = Box<dyn FnMut(&LearningEvent) + Send>;

/// 学习规则（静态分发）
#[enum_dispatch(TraitLearningRule)]
#[derive(Serialize, Deserialize)]
pub enum LearningRule {
    Lms(LmsLearning),
    Rbf(RbfLearning),
}

impl LearningRule {
    /// 在训练集上学习，直到满足某个停止条件
    ///
    /// 预期在专门的训练线程上调用；其它线程通过[`LearningControl`]
    /// 句柄暂停/恢复/停止（learn前先`control()`克隆好句柄）。
    pub fn learn(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        iterative::run_learning(self, network, training_set)
    }

    /// 只跑一轮epoch并发出轮末通知（不走启动钩子与停止条件）
    pub fn do_one_iteration(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        self.do_learning_epoch(network, training_set)?;
        let state = self.state_mut();
        state.advance_iteration();
        let event = LearningEvent::EpochEnded {
            iteration: state.current_iteration(),
            total_error: state.total_network_error(),
        };
        state.fire(event);
        Ok(())
    }

    /// 训练控制句柄（可克隆、可跨线程）
    pub fn control(&self) -> LearningControl {
        self.state().control().clone()
    }

    // ==================== 常用配置的便捷转发 ====================

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.state_mut().set_learning_rate(learning_rate);
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.state_mut().set_max_iterations(max_iterations);
    }

    pub fn add_stop_condition(&mut self, condition: Box<dyn StopCondition + Send>) {
        self.state_mut().add_stop_condition(condition);
    }

    pub fn add_listener(&mut self, listener: LearningEventListener) {
        self.state_mut().add_listener(listener);
    }
}
