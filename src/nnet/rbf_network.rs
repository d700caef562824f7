/*
 * @Author       : 老董
 * @Date         : 2026-03-20 11:37:26
 * @Description  : RBF（径向基函数）网络拓扑构建
 */

use super::{fully_connect, set_default_io};
use crate::errors::NeuroError;
use crate::learning::{LearningRule, RbfLearning};
use crate::nn::{
    Difference, Gaussian, InputFunction, Linear, Network, Neuron, TransferFunction, WeightedSum,
};

/// 构建三层RBF网络：线性输入层 → 高斯隐层 → 线性输出层
///
/// 隐层神经元以差值距离聚合入边（入边权值向量即质心）、高斯函数出值；
/// 输入/隐、隐/输出两两全连接；输入输出神经元按默认规则指定；
/// 学习规则挂[`RbfLearning`]。
pub fn rbf_network(
    inputs_count: usize,
    rbf_count: usize,
    outputs_count: usize,
) -> Result<Network, NeuroError> {
    if inputs_count == 0 || rbf_count == 0 || outputs_count == 0 {
        return Err(NeuroError::InvalidParameter(format!(
            "各层神经元数必须大于0（输入{inputs_count}/隐{rbf_count}/输出{outputs_count}）"
        )));
    }

    let mut network = Network::new();

    // 输入层：线性直通
    network.add_layer(
        (0..inputs_count)
            .map(|_| {
                Neuron::new(
                    InputFunction::WeightedSum(WeightedSum),
                    TransferFunction::Linear(Linear::default()),
                )
            })
            .collect(),
    );

    // 隐层：差值距离 + 高斯
    network.add_layer(
        (0..rbf_count)
            .map(|_| {
                Neuron::new(
                    InputFunction::Difference(Difference),
                    TransferFunction::Gaussian(Gaussian::default()),
                )
            })
            .collect(),
    );

    // 输出层：加权求和 + 线性
    network.add_layer(
        (0..outputs_count)
            .map(|_| {
                Neuron::new(
                    InputFunction::WeightedSum(WeightedSum),
                    TransferFunction::Linear(Linear::default()),
                )
            })
            .collect(),
    );

    fully_connect(&mut network, 0, 1)?;
    fully_connect(&mut network, 1, 2)?;
    set_default_io(&mut network)?;
    network.set_learning_rule(LearningRule::Rbf(RbfLearning::new()));

    Ok(network)
}
