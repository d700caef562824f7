/*
 * @Author       : 老董
 * @Date         : 2026-03-11 10:26:51
 * @Description  : 训练误差函数
 */

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// 误差函数接口：累计各样本误差，给出整轮的总误差
///
/// 自定义误差类型实现本接口即可接入监督学习规则。
pub trait ErrorFunction {
    /// 清零累计值（每轮epoch开始时调用）
    fn reset(&mut self);

    /// 本轮累计的总误差
    fn total_error(&self) -> f64;

    /// 计算单个样本的误差向量（期望 - 预测），并把平方误差并入累计值
    fn calculate_pattern_error(
        &mut self,
        predicted: &Array1<f64>,
        target: &Array1<f64>,
    ) -> Array1<f64>;
}

/// 均方误差：total = Σ各样本Σ各维e² / (2·样本数)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeanSquaredError {
    total: f64,
    pattern_count: f64,
}

impl ErrorFunction for MeanSquaredError {
    fn reset(&mut self) {
        self.total = 0.0;
        self.pattern_count = 0.0;
    }

    fn total_error(&self) -> f64 {
        if self.pattern_count == 0.0 {
            return 0.0;
        }
        self.total / (2.0 * self.pattern_count)
    }

    fn calculate_pattern_error(
        &mut self,
        predicted: &Array1<f64>,
        target: &Array1<f64>,
    ) -> Array1<f64> {
        let pattern_error = target - predicted;
        self.total += pattern_error.dot(&pattern_error);
        self.pattern_count += 1.0;
        pattern_error
    }
}
