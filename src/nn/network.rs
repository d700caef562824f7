/*
 * @Author       : 老董
 * @Date         : 2026-03-04 10:02:44
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-19 20:55:10
 * @Description  : 网络：神经元arena + 有序层序列 + 前向计算 + 学习入口
 */

use super::connection::Connection;
use super::events::{NetworkEvent, NetworkEventListener};
use super::input_function::WeightedInput;
use super::layer::Layer;
use super::neuron::Neuron;
use super::weight::Weight;
use super::NeuronId;
use crate::errors::NeuroError;
use crate::data::DataSet;
use crate::learning::{LearningControl, LearningRule};
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 神经网络
///
/// 所有神经元集中放在一个arena（`Vec<Neuron>`）里，层与连接都以
/// [`NeuronId`]（arena下标）相互引用，不存在悬垂引用问题。
///
/// 层按声明顺序前向求值；连接成环不报错，环上读到的是上一步的旧输出。
///
/// 并发契约：`learn`预期在专门的训练线程上执行，其它线程只通过
/// [`LearningControl`]句柄做暂停/恢复/停止；训练期间不得并发调用
/// `calculate`或直接改权——这是文档化的独占访问约定，引擎内部不加锁。
#[derive(Serialize, Deserialize)]
pub struct Network {
    neurons: Vec<Neuron>,
    layers: Vec<Layer>,
    input_neurons: Vec<NeuronId>,
    output_neurons: Vec<NeuronId>,
    learning_rule: Option<LearningRule>,
    #[serde(skip)]
    listeners: Vec<NetworkEventListener>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// 创建空网络
    pub fn new() -> Self {
        Self {
            neurons: Vec::new(),
            layers: Vec::new(),
            input_neurons: Vec::new(),
            output_neurons: Vec::new(),
            learning_rule: None,
            listeners: Vec::new(),
        }
    }

    // ==================== 结构构建 ====================

    /// 追加一层；神经元进入arena，返回它们的id（与传入顺序一致）
    pub fn add_layer(&mut self, neurons: Vec<Neuron>) -> Vec<NeuronId> {
        let ids: Vec<NeuronId> = neurons
            .into_iter()
            .map(|neuron| {
                let id = NeuronId(self.neurons.len());
                self.neurons.push(neuron);
                id
            })
            .collect();
        self.layers.push(Layer::new(ids.clone()));
        let index = self.layers.len() - 1;
        self.fire(NetworkEvent::LayerAdded { index });
        ids
    }

    /// 删除指定下标的层
    ///
    /// 该层从求值顺序与输入/输出指定中摘除；arena中的神经元保留，
    /// 引用它们的连接会一直读到删除前的旧输出。
    pub fn remove_layer(&mut self, index: usize) -> Result<(), NeuroError> {
        if index >= self.layers.len() {
            return Err(NeuroError::InvalidTopology(format!(
                "要删除的层{index}不存在（当前共{}层）",
                self.layers.len()
            )));
        }
        let layer = self.layers.remove(index);
        self.input_neurons
            .retain(|id| !layer.neuron_ids().contains(id));
        self.output_neurons
            .retain(|id| !layer.neuron_ids().contains(id));
        self.fire(NetworkEvent::LayerRemoved { index });
        Ok(())
    }

    /// 建立连接（权值0.0）
    pub fn connect(&mut self, from: NeuronId, to: NeuronId) -> Result<(), NeuroError> {
        self.connect_with_weight(from, to, Weight::default())
    }

    /// 以调用方给定的权值建立连接
    pub fn connect_with_weight(
        &mut self,
        from: NeuronId,
        to: NeuronId,
        weight: Weight,
    ) -> Result<(), NeuroError> {
        self.check_id(from)?;
        self.check_id(to)?;
        let connection = Connection::with_weight(from, to, weight);
        self.neurons[to.index()].add_input_connection(connection);
        Ok(())
    }

    fn check_id(&self, id: NeuronId) -> Result<(), NeuroError> {
        if id.index() >= self.neurons.len() {
            return Err(NeuroError::InvalidTopology(format!(
                "神经元id {}不存在（arena大小{}）",
                id.index(),
                self.neurons.len()
            )));
        }
        Ok(())
    }

    /// 指定网络的输入神经元（外部输入写入的目标）
    pub fn set_input_neurons(&mut self, ids: Vec<NeuronId>) -> Result<(), NeuroError> {
        for &id in &ids {
            self.check_id(id)?;
        }
        self.input_neurons = ids;
        Ok(())
    }

    /// 指定网络的输出神经元（输出缓冲的来源）
    pub fn set_output_neurons(&mut self, ids: Vec<NeuronId>) -> Result<(), NeuroError> {
        for &id in &ids {
            self.check_id(id)?;
        }
        self.output_neurons = ids;
        Ok(())
    }

    // ==================== 访问 ====================

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layers_count(&self) -> usize {
        self.layers.len()
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.index())
    }

    pub fn neuron_mut(&mut self, id: NeuronId) -> Option<&mut Neuron> {
        self.neurons.get_mut(id.index())
    }

    /// 内部直取：id必须出自本网络（学习规则持有的id满足此前提）
    pub(crate) fn neuron_ref(&self, id: NeuronId) -> &Neuron {
        &self.neurons[id.index()]
    }

    pub(crate) fn neuron_ref_mut(&mut self, id: NeuronId) -> &mut Neuron {
        &mut self.neurons[id.index()]
    }

    pub fn input_neurons(&self) -> &[NeuronId] {
        &self.input_neurons
    }

    pub fn output_neurons(&self) -> &[NeuronId] {
        &self.output_neurons
    }

    pub fn inputs_count(&self) -> usize {
        self.input_neurons.len()
    }

    pub fn outputs_count(&self) -> usize {
        self.output_neurons.len()
    }

    // ==================== 前向计算 ====================

    /// 写入网络输入
    ///
    /// 输入向量长度必须等于输入神经元个数，否则报`VectorSizeMismatch`，
    /// 绝不静默截断。
    pub fn set_input(&mut self, input: &Array1<f64>) -> Result<(), NeuroError> {
        if input.len() != self.input_neurons.len() {
            return Err(NeuroError::VectorSizeMismatch {
                expected: self.input_neurons.len(),
                got: input.len(),
            });
        }
        for i in 0..self.input_neurons.len() {
            let id = self.input_neurons[i];
            self.neurons[id.index()].set_net_input(input[i]);
        }
        Ok(())
    }

    /// 整网前向计算：按层声明顺序逐层、逐神经元求值
    pub fn calculate(&mut self) {
        for li in 0..self.layers.len() {
            for ni in 0..self.layers[li].neuron_ids().len() {
                let id = self.layers[li].neuron_ids()[ni];
                let net_input = {
                    let neuron = &self.neurons[id.index()];
                    if neuron.has_input_connections() {
                        // 入边聚合：按插入顺序收集(上游输出, 权值)对
                        let inputs: Vec<WeightedInput> = neuron
                            .input_connections()
                            .iter()
                            .map(|conn| WeightedInput {
                                input: self.neurons[conn.from_neuron().index()].output(),
                                weight: conn.weight().value(),
                            })
                            .collect();
                        neuron.aggregate(&inputs)
                    } else {
                        // 无入边：保留外部写入的净输入（输入神经元）
                        neuron.net_input()
                    }
                };
                self.neurons[id.index()].apply(net_input);
            }
        }
        self.fire(NetworkEvent::Calculated);
    }

    /// 读取网络输出；长度恒等于输出神经元个数，每次调用刷新
    pub fn get_output(&self) -> Array1<f64> {
        Array1::from(
            self.output_neurons
                .iter()
                .map(|id| self.neurons[id.index()].output())
                .collect::<Vec<f64>>(),
        )
    }

    /// 清零全部神经元的净输入与输出（不动权值）
    pub fn reset(&mut self) {
        for neuron in &mut self.neurons {
            neuron.reset();
        }
    }

    // ==================== 权值 ====================

    /// 用thread_rng把全部连接权值随机化到[min, max)区间
    pub fn randomize_weights(&mut self, min: f64, max: f64) {
        self.randomize_weights_with_rng(min, max, &mut rand::thread_rng());
    }

    /// 用指定rng把全部连接权值随机化到[min, max)区间
    ///
    /// 枚举顺序固定：层序 → 层内神经元序 → 入边插入序。
    pub fn randomize_weights_with_rng<R: Rng>(&mut self, min: f64, max: f64, rng: &mut R) {
        for li in 0..self.layers.len() {
            for ni in 0..self.layers[li].neuron_ids().len() {
                let id = self.layers[li].neuron_ids()[ni];
                for conn in self.neurons[id.index()].input_connections_mut() {
                    conn.weight_mut().set_value(rng.gen_range(min..max));
                }
            }
        }
    }

    // ==================== 学习 ====================

    /// 设置当前激活的学习规则（同一时刻至多一个）
    pub fn set_learning_rule(&mut self, rule: LearningRule) {
        self.learning_rule = Some(rule);
    }

    pub fn learning_rule(&self) -> Option<&LearningRule> {
        self.learning_rule.as_ref()
    }

    pub fn learning_rule_mut(&mut self) -> Option<&mut LearningRule> {
        self.learning_rule.as_mut()
    }

    /// 取训练控制句柄（暂停/恢复/停止用；learn前克隆好再把网络移交训练线程）
    pub fn learning_control(&self) -> Option<LearningControl> {
        self.learning_rule.as_ref().map(|rule| rule.control())
    }

    /// 用当前学习规则在训练集上学习，直到某个停止条件满足
    pub fn learn(&mut self, training_set: &DataSet) -> Result<(), NeuroError> {
        // 规则临时取出再放回，避免与&mut self的重复借用
        let mut rule = self.learning_rule.take().ok_or_else(|| {
            NeuroError::InvalidParameter("网络尚未设置学习规则".to_string())
        })?;
        let result = rule.learn(self, training_set);
        self.learning_rule = Some(rule);
        result
    }

    // ==================== 事件 ====================

    /// 注册网络事件监听器（同步、按注册顺序通知）
    pub fn add_listener(&mut self, listener: NetworkEventListener) {
        self.listeners.push(listener);
    }

    fn fire(&mut self, event: NetworkEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
