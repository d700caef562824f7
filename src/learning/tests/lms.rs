/*
 * @Author       : 老董
 * @Date         : 2026-03-13 11:24:46
 * @Description  : LMS学习规则测试
 */

use super::{doubling_data_set, linear_1x1_network};
use crate::data::DataSet;
use crate::errors::NeuroError;
use crate::learning::{
    ErrorFunction, LearningRule, LmsLearning, MeanSquaredError, TraitLearningRule,
};
use approx::assert_relative_eq;
use ndarray::arr1;

#[test]
fn test_mean_squared_error_accumulation() {
    let mut mse = MeanSquaredError::default();
    assert_relative_eq!(mse.total_error(), 0.0);

    let e1 = mse.calculate_pattern_error(&arr1(&[1.0, 0.0]), &arr1(&[3.0, 1.0]));
    assert_relative_eq!(e1[0], 2.0);
    assert_relative_eq!(e1[1], 1.0);
    // (2² + 1²) / (2·1)
    assert_relative_eq!(mse.total_error(), 2.5);

    mse.calculate_pattern_error(&arr1(&[0.0, 0.0]), &arr1(&[1.0, 0.0]));
    // (5 + 1) / (2·2)
    assert_relative_eq!(mse.total_error(), 1.5);

    mse.reset();
    assert_relative_eq!(mse.total_error(), 0.0);
}

#[test]
fn test_lms_converges_to_regression_optimum() {
    // y = 2x，单权值线性网络：w收敛到2
    let (mut network, output_id) = linear_1x1_network();
    let mut rule = LmsLearning::new();
    rule.state_mut().set_learning_rate(0.05);
    rule.state_mut().set_max_iterations(200);
    rule.set_max_error(0.0); // 关掉误差阈值，让它跑满收敛
    let mut rule = LearningRule::Lms(rule);
    rule.learn(&mut network, &doubling_data_set()).unwrap();

    let weight = network.neuron(output_id).unwrap().input_connections()[0]
        .weight()
        .value();
    assert_relative_eq!(weight, 2.0, epsilon = 1e-6);
}

#[test]
fn test_max_error_stop_fires_before_iteration_cap() {
    let (mut network, _out) = linear_1x1_network();
    let mut rule = LmsLearning::new();
    rule.state_mut().set_learning_rate(0.05);
    rule.state_mut().set_max_iterations(1000);
    let mut rule = LearningRule::Lms(rule);
    rule.learn(&mut network, &doubling_data_set()).unwrap();

    let state = rule.state();
    assert!(state.is_stopped());
    assert!(state.total_network_error() < 0.01);
    assert!(
        state.current_iteration() < 1000,
        "应由误差阈值提前停止，实际迭代{}",
        state.current_iteration()
    );
}

#[test]
fn test_lms_rejects_unsupervised_data() {
    let (mut network, _out) = linear_1x1_network();
    let mut data = DataSet::new(1, 0);
    data.add_unsupervised(arr1(&[1.0])).unwrap();
    let mut rule = LearningRule::Lms(LmsLearning::new());
    assert!(matches!(
        rule.learn(&mut network, &data),
        Err(NeuroError::InvalidParameter(_))
    ));
}

#[test]
fn test_lms_rejects_empty_data_set() {
    let (mut network, _out) = linear_1x1_network();
    let data = DataSet::new(1, 1);
    let mut rule = LearningRule::Lms(LmsLearning::new());
    assert!(matches!(
        rule.learn(&mut network, &data),
        Err(NeuroError::InvalidParameter(_))
    ));
}

#[test]
fn test_lms_rejects_dimension_mismatch() {
    let (mut network, _out) = linear_1x1_network();
    let mut data = DataSet::new(2, 1);
    data.add_supervised(arr1(&[1.0, 2.0]), arr1(&[1.0])).unwrap();
    let mut rule = LearningRule::Lms(LmsLearning::new());
    assert_eq!(
        rule.learn(&mut network, &data),
        Err(NeuroError::VectorSizeMismatch {
            expected: 1,
            got: 2
        })
    );
}

#[test]
fn test_only_output_layer_weights_are_touched() {
    // 三层网络：LMS只调输出神经元的入边，隐层入边保持原值
    use crate::nn::{InputFunction, Linear, Network, Neuron, TransferFunction, Weight, WeightedSum};
    let linear = || {
        Neuron::new(
            InputFunction::WeightedSum(WeightedSum),
            TransferFunction::Linear(Linear::default()),
        )
    };
    let mut network = Network::new();
    let inputs = network.add_layer(vec![linear()]);
    let hidden = network.add_layer(vec![linear()]);
    let outputs = network.add_layer(vec![linear()]);
    network
        .connect_with_weight(inputs[0], hidden[0], Weight::new(0.7))
        .unwrap();
    network.connect(hidden[0], outputs[0]).unwrap();
    network.set_input_neurons(inputs).unwrap();
    network.set_output_neurons(outputs.clone()).unwrap();

    let mut rule = LearningRule::Lms(LmsLearning::new());
    rule.set_learning_rate(0.05);
    rule.set_max_iterations(50);
    rule.learn(&mut network, &doubling_data_set()).unwrap();

    let hidden_weight = network.neuron(hidden[0]).unwrap().input_connections()[0]
        .weight()
        .value();
    assert_relative_eq!(hidden_weight, 0.7);
    let output_weight = network.neuron(outputs[0]).unwrap().input_connections()[0]
        .weight()
        .value();
    assert!(output_weight != 0.0, "输出层权值应被调整");
}
