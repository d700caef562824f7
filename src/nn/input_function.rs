/*
 * @Author       : 老董
 * @Date         : 2026-03-03 10:21:47
 * @Description  : 神经元的输入聚合函数（加权求和 / 差值距离）
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// 一条入边在本次计算中的(输入值, 权值)对
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedInput {
    pub input: f64,
    pub weight: f64,
}

/// 输入聚合函数接口：把所有入边的(输入, 权值)对聚合成一个净输入标量
#[enum_dispatch]
pub trait TraitInputFunction {
    fn aggregate(&self, inputs: &[WeightedInput]) -> f64;
}

/// 输入聚合函数（静态分发，构建神经元时选定）
#[enum_dispatch(TraitInputFunction)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputFunction {
    WeightedSum,
    Difference,
}

impl Default for InputFunction {
    fn default() -> Self {
        Self::WeightedSum(WeightedSum)
    }
}

/// 加权求和：Σ 输入·权值（经典前馈神经元）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightedSum;

impl TraitInputFunction for WeightedSum {
    fn aggregate(&self, inputs: &[WeightedInput]) -> f64 {
        inputs.iter().map(|wi| wi.input * wi.weight).sum()
    }
}

/// 差值距离：sqrt(Σ (输入-权值)²)
///
/// RBF隐层神经元的聚合方式——把入边权值向量视作质心，
/// 聚合结果即输入向量到质心的欧氏距离。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Difference;

impl TraitInputFunction for Difference {
    fn aggregate(&self, inputs: &[WeightedInput]) -> f64 {
        inputs
            .iter()
            .map(|wi| (wi.input - wi.weight) * (wi.input - wi.weight))
            .sum::<f64>()
            .sqrt()
    }
}
