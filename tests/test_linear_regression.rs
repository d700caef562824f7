/*
 * @Author       : 老董
 * @Date         : 2026-03-21 16:02:18
 * @Description  : 端到端：两层线性网络用LMS拟合 y = 2x
 */

use ndarray::arr1;
use only_neuro::data::DataSet;
use only_neuro::learning::{LearningRule, LmsLearning, TraitLearningRule};
use only_neuro::nn::{InputFunction, Linear, Network, Neuron, TransferFunction, WeightedSum};
use only_neuro::nnet::{fully_connect, set_default_io};

fn linear_neuron() -> Neuron {
    Neuron::new(
        InputFunction::WeightedSum(WeightedSum),
        TransferFunction::Linear(Linear::default()),
    )
}

#[test]
fn test_lms_fits_doubling_function() {
    let mut network = Network::new();
    network.add_layer(vec![linear_neuron()]);
    network.add_layer(vec![linear_neuron()]);
    fully_connect(&mut network, 0, 1).unwrap();
    set_default_io(&mut network).unwrap();
    network.set_learning_rule(LearningRule::Lms(LmsLearning::new()));
    {
        let rule = network.learning_rule_mut().unwrap();
        rule.set_learning_rate(0.05);
        rule.set_max_iterations(500);
    }

    let mut data = DataSet::new(1, 1);
    data.add_supervised(arr1(&[1.0]), arr1(&[2.0])).unwrap();
    data.add_supervised(arr1(&[2.0]), arr1(&[4.0])).unwrap();
    data.add_supervised(arr1(&[3.0]), arr1(&[6.0])).unwrap();

    network.learn(&data).unwrap();

    let state = network.learning_rule().unwrap().state();
    assert!(state.is_stopped());
    assert!(state.total_network_error() < 0.01);

    // 对训练域内新输入也应给出翻倍输出
    network.set_input(&arr1(&[2.5])).unwrap();
    network.calculate();
    let output = network.get_output();
    assert_eq!(output.len(), 1);
    assert!((output[0] - 5.0).abs() < 0.2, "预测{}", output[0]);
}
