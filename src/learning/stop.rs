/*
 * @Author       : 老董
 * @Date         : 2026-03-11 09:48:15
 * @Description  : 停止条件：迭代循环上的多态谓词
 */

use super::iterative::IterativeState;
use serde::{Deserialize, Serialize};

/// 停止条件接口
///
/// epoch循环在每轮结束后逐个评估；任一条件满足即停止训练。
/// 调用方可实现本接口注入任意谓词（误差平台检测等），循环本身不变。
pub trait StopCondition {
    fn is_reached(&self, state: &IterativeState) -> bool;
}

/// 迭代上限停止条件
///
/// 自门控：只有调用方通过`set_max_iterations`设定了正的上限才生效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxIterationsStop;

impl StopCondition for MaxIterationsStop {
    fn is_reached(&self, state: &IterativeState) -> bool {
        state.is_iterations_limited() && state.current_iteration() >= state.max_iterations()
    }
}

/// 误差阈值停止条件：最近一轮总误差低于阈值即停止
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxErrorStop {
    max_error: f64,
}

impl MaxErrorStop {
    pub fn new(max_error: f64) -> Self {
        Self { max_error }
    }

    pub fn max_error(&self) -> f64 {
        self.max_error
    }
}

impl Default for MaxErrorStop {
    fn default() -> Self {
        Self { max_error: 0.01 }
    }
}

impl StopCondition for MaxErrorStop {
    fn is_reached(&self, state: &IterativeState) -> bool {
        state.total_network_error() < self.max_error
    }
}
