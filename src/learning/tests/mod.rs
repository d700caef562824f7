mod lms;

use crate::data::DataSet;
use crate::nn::{InputFunction, Linear, Network, Neuron, NeuronId, TransferFunction, WeightedSum};
use ndarray::arr1;

/// 造一个"1输入-1输出"的两层线性网络（权值0），返回(网络, 输出神经元id)
pub(crate) fn linear_1x1_network() -> (Network, NeuronId) {
    let mut network = Network::new();
    let linear = || {
        Neuron::new(
            InputFunction::WeightedSum(WeightedSum),
            TransferFunction::Linear(Linear::default()),
        )
    };
    let inputs = network.add_layer(vec![linear()]);
    let outputs = network.add_layer(vec![linear()]);
    network.connect(inputs[0], outputs[0]).unwrap();
    network.set_input_neurons(inputs).unwrap();
    network.set_output_neurons(outputs.clone()).unwrap();
    (network, outputs[0])
}

/// y = 2x 的单行监督训练集
pub(crate) fn doubling_data_set() -> DataSet {
    let mut data = DataSet::new(1, 1);
    data.add_supervised(arr1(&[3.0]), arr1(&[6.0])).unwrap();
    data
}
