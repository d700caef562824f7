/*
 * @Author       : 老董
 * @Date         : 2026-03-02 19:52:30
 * @Description  : 连接权值：单个可学习的标量参数
 */

use serde::{Deserialize, Serialize};

/// 连接权值
///
/// 只能通过显式的`set_value`/`inc`修改；新建权值统一为0.0，
/// 需要随机初始化时调用`Network::randomize_weights`。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weight {
    value: f64,
}

impl Weight {
    /// 以指定初值创建权值
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// 当前权值
    pub fn value(&self) -> f64 {
        self.value
    }

    /// 覆写权值
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// 在当前权值上累加增量（学习规则调权用）
    pub fn inc(&mut self, amount: f64) {
        self.value += amount;
    }
}
