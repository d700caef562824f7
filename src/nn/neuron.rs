/*
 * @Author       : 老董
 * @Date         : 2026-03-03 14:37:55
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-02 09:15:33
 * @Description  : 神经元：入边聚合 + 传递函数
 */

use super::connection::Connection;
use super::input_function::{InputFunction, TraitInputFunction, WeightedInput};
use super::transfer::{TraitTransferFunction, TransferFunction};
use serde::{Deserialize, Serialize};

/// 神经元
///
/// 持有自己的入边列表（插入顺序即聚合顺序），以及最近一次`calculate`
/// 产生的净输入与输出。聚合函数与传递函数在构建时选定。
///
/// 不变式：`output`恒等于最近一次计算时`transfer(aggregate(入边))`的结果；
/// 没有入边的神经元保留外部通过`set_net_input`写入的净输入（网络输入神经元）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    input_connections: Vec<Connection>,
    input_function: InputFunction,
    transfer_function: TransferFunction,
    net_input: f64,
    output: f64,
}

impl Neuron {
    /// 以指定的聚合函数与传递函数创建神经元
    pub fn new(input_function: InputFunction, transfer_function: TransferFunction) -> Self {
        Self {
            input_connections: Vec::new(),
            input_function,
            transfer_function,
            net_input: 0.0,
            output: 0.0,
        }
    }

    /// 入边列表（插入顺序）
    pub fn input_connections(&self) -> &[Connection] {
        &self.input_connections
    }

    /// 入边列表（可变，调权用）
    pub fn input_connections_mut(&mut self) -> &mut [Connection] {
        &mut self.input_connections
    }

    pub fn has_input_connections(&self) -> bool {
        !self.input_connections.is_empty()
    }

    pub(crate) fn add_input_connection(&mut self, connection: Connection) {
        self.input_connections.push(connection);
    }

    /// 最近一次计算的净输入
    pub fn net_input(&self) -> f64 {
        self.net_input
    }

    /// 直接写入净输入（只对无入边的输入神经元有意义）
    pub fn set_net_input(&mut self, net_input: f64) {
        self.net_input = net_input;
    }

    /// 最近一次计算的输出
    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn input_function(&self) -> &InputFunction {
        &self.input_function
    }

    pub fn transfer_function(&self) -> &TransferFunction {
        &self.transfer_function
    }

    /// 传递函数（可变，RBF训练写σ用）
    pub fn transfer_function_mut(&mut self) -> &mut TransferFunction {
        &mut self.transfer_function
    }

    /// 聚合入边的(输入, 权值)对得到净输入
    pub(crate) fn aggregate(&self, inputs: &[WeightedInput]) -> f64 {
        self.input_function.aggregate(inputs)
    }

    /// 以给定净输入刷新本神经元（写净输入、过传递函数得输出）
    pub(crate) fn apply(&mut self, net_input: f64) {
        self.net_input = net_input;
        self.output = self.transfer_function.output(net_input);
    }

    /// 清零净输入与输出（不动权值）
    pub(crate) fn reset(&mut self) {
        self.net_input = 0.0;
        self.output = 0.0;
    }
}
