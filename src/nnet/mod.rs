/*
 * @Author       : 老董
 * @Date         : 2026-03-20 11:05:52
 * @Description  : 具体网络拓扑的构建器与连接工具
 */

mod rbf_network;

pub use rbf_network::rbf_network;

use crate::errors::NeuroError;
use crate::nn::Network;

/// 两层全连接：`from_layer`的每个神经元连到`to_layer`的每个神经元
///
/// 对每个目标神经元，入边按源层的神经元顺序插入——正因如此，
/// RBF训练把质心坐标按枚举顺序写入入边权值时才能与输入维度对齐。
pub fn fully_connect(
    network: &mut Network,
    from_layer: usize,
    to_layer: usize,
) -> Result<(), NeuroError> {
    let from_ids = network
        .layer(from_layer)
        .ok_or_else(|| NeuroError::InvalidTopology(format!("源层{from_layer}不存在")))?
        .neuron_ids()
        .to_vec();
    let to_ids = network
        .layer(to_layer)
        .ok_or_else(|| NeuroError::InvalidTopology(format!("目标层{to_layer}不存在")))?
        .neuron_ids()
        .to_vec();
    for &to in &to_ids {
        for &from in &from_ids {
            network.connect(from, to)?;
        }
    }
    Ok(())
}

/// 默认输入/输出指定：第一层全部神经元为输入，最后一层全部为输出
pub fn set_default_io(network: &mut Network) -> Result<(), NeuroError> {
    if network.layers_count() == 0 {
        return Err(NeuroError::InvalidTopology(
            "空网络无法指定输入/输出神经元".to_string(),
        ));
    }
    let first = network
        .layer(0)
        .map(|layer| layer.neuron_ids().to_vec())
        .unwrap_or_default();
    let last = network
        .layer(network.layers_count() - 1)
        .map(|layer| layer.neuron_ids().to_vec())
        .unwrap_or_default();
    network.set_input_neurons(first)?;
    network.set_output_neurons(last)?;
    Ok(())
}
