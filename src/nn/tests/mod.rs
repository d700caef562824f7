mod events;
mod neuron;

use crate::nn::{
    InputFunction, Linear, Network, Neuron, NeuronId, TransferFunction, WeightedSum,
};

/// 造一个线性神经元（加权求和 + 斜率1线性）
pub(crate) fn linear_neuron() -> Neuron {
    Neuron::new(
        InputFunction::WeightedSum(WeightedSum),
        TransferFunction::Linear(Linear::default()),
    )
}

/// 造一个"1输入-1输出、权值w"的两层线性网络，返回(网络, 输入id, 输出id)
pub(crate) fn two_neuron_network(weight: f64) -> (Network, NeuronId, NeuronId) {
    let mut network = Network::new();
    let input_ids = network.add_layer(vec![linear_neuron()]);
    let output_ids = network.add_layer(vec![linear_neuron()]);
    network
        .connect_with_weight(input_ids[0], output_ids[0], crate::nn::Weight::new(weight))
        .unwrap();
    network.set_input_neurons(vec![input_ids[0]]).unwrap();
    network.set_output_neurons(vec![output_ids[0]]).unwrap();
    (network, input_ids[0], output_ids[0])
}
