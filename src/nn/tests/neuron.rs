/*
 * @Author       : 老董
 * @Date         : 2026-03-06 11:02:17
 * @Description  : 神经元聚合函数与输入神经元行为测试
 */

use crate::nn::{
    Difference, InputFunction, Linear, Neuron, Sigmoid, TraitInputFunction, TransferFunction,
    WeightedInput, WeightedSum,
};
use approx::assert_relative_eq;

#[test]
fn test_weighted_sum_aggregation() {
    let inputs = [
        WeightedInput {
            input: 2.0,
            weight: 0.5,
        },
        WeightedInput {
            input: -1.0,
            weight: 3.0,
        },
    ];
    // 2*0.5 + (-1)*3 = -2
    assert_relative_eq!(WeightedSum.aggregate(&inputs), -2.0);
}

#[test]
fn test_difference_aggregation_is_euclidean_distance() {
    let inputs = [
        WeightedInput {
            input: 3.0,
            weight: 1.0,
        },
        WeightedInput {
            input: 0.0,
            weight: 2.0,
        },
    ];
    // sqrt((3-1)² + (0-2)²) = sqrt(8)
    assert_relative_eq!(Difference.aggregate(&inputs), 8.0_f64.sqrt());
}

#[test]
fn test_aggregation_over_empty_inputs() {
    assert_relative_eq!(WeightedSum.aggregate(&[]), 0.0);
    assert_relative_eq!(Difference.aggregate(&[]), 0.0);
}

#[test]
fn test_input_neuron_keeps_external_net_input() {
    // 无入边的神经元保留set_net_input写入的值，输出 = 传递函数(净输入)
    let mut neuron = Neuron::new(
        InputFunction::WeightedSum(WeightedSum),
        TransferFunction::Linear(Linear::new(2.0)),
    );
    assert!(!neuron.has_input_connections());
    neuron.set_net_input(1.5);
    neuron.apply(neuron.net_input());
    assert_relative_eq!(neuron.output(), 3.0);
}

#[test]
fn test_output_is_transfer_of_net_input() {
    let mut neuron = Neuron::new(
        InputFunction::WeightedSum(WeightedSum),
        TransferFunction::Sigmoid(Sigmoid),
    );
    neuron.apply(0.0);
    assert_relative_eq!(neuron.output(), 0.5);
    assert_relative_eq!(neuron.net_input(), 0.0);
}
