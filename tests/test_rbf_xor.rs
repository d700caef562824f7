/*
 * @Author       : 老董
 * @Date         : 2026-03-21 15:20:44
 * @Description  : 端到端：RBF网络学习XOR
 *
 * 四个隐神经元恰好对应四个训练点：聚类收敛成单例，质心即各训练点，
 * 宽度由质心间近邻距离给出，之后LMS把输出层权值调到位。
 */

use ndarray::arr1;
use only_neuro::data::DataSet;
use only_neuro::learning::{LearningRule, TraitLearningRule};
use only_neuro::nnet::rbf_network;

fn xor_data() -> DataSet {
    let mut data = DataSet::new(2, 1);
    data.add_supervised(arr1(&[0.0, 0.0]), arr1(&[0.0])).unwrap();
    data.add_supervised(arr1(&[0.0, 1.0]), arr1(&[1.0])).unwrap();
    data.add_supervised(arr1(&[1.0, 0.0]), arr1(&[1.0])).unwrap();
    data.add_supervised(arr1(&[1.0, 1.0]), arr1(&[0.0])).unwrap();
    data
}

#[test]
fn test_rbf_learns_xor() {
    let mut network = rbf_network(2, 4, 1).unwrap();
    {
        let rule = network.learning_rule_mut().unwrap();
        rule.set_learning_rate(0.3);
        rule.set_max_iterations(2000);
        if let LearningRule::Rbf(rbf) = rule {
            rbf.set_clustering_seed(Some(42));
        }
    }

    let data = xor_data();
    network.learn(&data).unwrap();

    // 默认误差阈值0.01应在迭代上限之前满足
    let state = network.learning_rule().unwrap().state();
    assert!(state.is_stopped());
    assert!(
        state.total_network_error() < 0.01,
        "总误差未收敛: {}",
        state.total_network_error()
    );
    assert!(state.current_iteration() < 2000);

    // 四个训练点的预测都应贴近各自的期望输出
    for row in data.iter() {
        network.set_input(row.input()).unwrap();
        network.calculate();
        let prediction = network.get_output()[0];
        let target = row.desired_output().unwrap()[0];
        assert!(
            (prediction - target).abs() < 0.3,
            "输入{:?}: 预测{prediction} vs 期望{target}",
            row.input()
        );
    }
}
