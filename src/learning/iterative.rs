/*
 * @Author       : 老董
 * @Date         : 2026-03-10 15:03:28
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-20 11:30:44
 * @Description  : 通用迭代学习：epoch循环、迭代计数、停止条件、暂停/恢复
 */

use super::stop::{MaxIterationsStop, StopCondition};
use super::{LearningEvent, LearningEventListener};
use crate::data::DataSet;
use crate::errors::NeuroError;
use crate::nn::Network;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Condvar, Mutex};

// ==================== 训练控制 ====================

#[derive(Default)]
struct ControlFlags {
    paused: bool,
    stop_requested: bool,
}

#[derive(Default)]
struct ControlInner {
    flags: Mutex<ControlFlags>,
    cond: Condvar,
}

/// 训练控制句柄
///
/// 可克隆、可跨线程：训练线程在epoch边界阻塞于条件变量，
/// 其它线程通过本句柄暂停/恢复/请求停止。标志位与条件变量共用一把锁，
/// 紧贴在wait之前发出的pause不会被漏掉；wait放在循环里，容忍虚假唤醒。
/// 停止是协作式的：epoch进行中不被打断，到下一个边界才生效。
#[derive(Clone, Default)]
pub struct LearningControl {
    inner: Arc<ControlInner>,
}

impl LearningControl {
    fn lock_flags(&self) -> std::sync::MutexGuard<'_, ControlFlags> {
        // 锁中毒只可能来自监听器panic，标志位本身不会损坏，取回继续
        self.inner
            .flags
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 请求暂停：训练线程在当前epoch结束后挂起
    pub fn pause(&self) {
        self.lock_flags().paused = true;
    }

    /// 恢复被暂停的训练：精确唤醒阻塞中的训练线程
    pub fn resume(&self) {
        {
            let mut flags = self.lock_flags();
            flags.paused = false;
        }
        self.inner.cond.notify_all();
    }

    /// 请求停止：训练在下一个epoch边界结束（同时唤醒暂停中的线程）
    pub fn request_stop(&self) {
        {
            let mut flags = self.lock_flags();
            flags.stop_requested = true;
        }
        self.inner.cond.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.lock_flags().paused
    }

    pub fn is_stop_requested(&self) -> bool {
        self.lock_flags().stop_requested
    }

    /// 训练线程的暂停点：只要处于暂停且未请求停止就持续等待
    pub(crate) fn wait_while_paused(&self) {
        let mut flags = self.lock_flags();
        while flags.paused && !flags.stop_requested {
            flags = self
                .inner
                .cond
                .wait(flags)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }

    /// 新一轮learn开始时清空两个标志
    pub(crate) fn reset(&self) {
        let mut flags = self.lock_flags();
        flags.paused = false;
        flags.stop_requested = false;
    }
}

// ==================== 迭代学习状态 ====================

/// 迭代学习的公共状态
///
/// 每个学习规则内嵌一份：学习率、迭代计数、迭代上限、停止条件集合、
/// 训练控制句柄、最近一轮的总误差、学习事件监听器。
/// 每次`learn`开始时复位（计数清零、控制标志清空）。
#[derive(Serialize, Deserialize)]
pub struct IterativeState {
    learning_rate: f64,
    current_iteration: usize,
    max_iterations: usize,
    iterations_limited: bool,
    total_network_error: f64,
    stopped: bool,
    #[serde(skip)]
    stop_conditions: Vec<Box<dyn StopCondition + Send>>,
    #[serde(skip)]
    control: LearningControl,
    #[serde(skip)]
    listeners: Vec<LearningEventListener>,
}

impl Default for IterativeState {
    fn default() -> Self {
        Self::new()
    }
}

impl IterativeState {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.1,
            current_iteration: 0,
            max_iterations: usize::MAX,
            iterations_limited: false,
            total_network_error: f64::MAX,
            stopped: false,
            stop_conditions: Vec::new(),
            control: LearningControl::default(),
            listeners: Vec::new(),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// 设置迭代上限；只有严格正值才会启用限制，传0保持不限
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        if max_iterations > 0 {
            self.max_iterations = max_iterations;
            self.iterations_limited = true;
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn is_iterations_limited(&self) -> bool {
        self.iterations_limited
    }

    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }

    /// 最近一轮epoch的总误差（尚未跑过epoch时为`f64::MAX`）
    pub fn total_network_error(&self) -> f64 {
        self.total_network_error
    }

    pub(crate) fn set_total_network_error(&mut self, error: f64) {
        self.total_network_error = error;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub(crate) fn mark_stopped(&mut self) {
        self.stopped = true;
    }

    /// 注册额外的停止条件（开放扩展点）
    pub fn add_stop_condition(&mut self, condition: Box<dyn StopCondition + Send>) {
        self.stop_conditions.push(condition);
    }

    /// 注册学习事件监听器（同步、按注册顺序通知）
    pub fn add_listener(&mut self, listener: LearningEventListener) {
        self.listeners.push(listener);
    }

    pub fn control(&self) -> &LearningControl {
        &self.control
    }

    /// 是否满足任一停止条件
    ///
    /// 内建的迭代上限谓词恒在列（未设上限时自门控不生效），
    /// 其后依注册顺序评估调用方追加的谓词。
    pub fn reached_stop_condition(&self) -> bool {
        if MaxIterationsStop.is_reached(self) {
            return true;
        }
        self.stop_conditions
            .iter()
            .any(|condition| condition.is_reached(self))
    }

    pub(crate) fn fire(&mut self, event: LearningEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// learn开始时复位：计数清零、停止标记清除、控制标志清空
    pub(crate) fn prepare_run(&mut self) {
        self.current_iteration = 0;
        self.total_network_error = f64::MAX;
        self.stopped = false;
        self.control.reset();
    }

    /// 迭代计数+1；未设上限时到达`usize::MAX`不溢出而是绕回1
    pub(crate) fn advance_iteration(&mut self) {
        if self.current_iteration == usize::MAX && !self.iterations_limited {
            self.current_iteration = 1;
        } else {
            self.current_iteration += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_current_iteration(&mut self, iteration: usize) {
        self.current_iteration = iteration;
    }
}

// ==================== 学习规则接口与epoch循环 ====================

/// 学习规则接口
///
/// 具体规则只需实现启动钩子与单轮epoch，循环骨架（计数、停止条件、
/// 事件、暂停点）由[`run_learning`]统一驱动。
#[enum_dispatch]
pub trait TraitLearningRule {
    fn state(&self) -> &IterativeState;

    fn state_mut(&mut self) -> &mut IterativeState;

    /// 训练启动钩子：状态复位之后、第一轮epoch之前调用
    /// （RBF规则在这里完成聚类初始化）
    fn on_start(&mut self, network: &mut Network, training_set: &DataSet)
    -> Result<(), NeuroError>;

    /// 一轮epoch：对整个训练集过一遍
    fn do_learning_epoch(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError>;

    /// 训练结束钩子
    fn on_stop(&mut self, _network: &mut Network) {}

    /// 是否满足任一停止条件（监督规则会在此叠加误差阈值判断）
    fn has_reached_stop(&self) -> bool {
        self.state().reached_stop_condition()
    }
}

/// epoch循环骨架
///
/// 顺序：epoch → 计数+1 → 停止条件 → 轮末通知 → 暂停点 → 停止判定。
/// epoch内部出错立即中止并上抛（误用错误不算正常停止，不走结束钩子）。
pub(crate) fn run_learning<R: TraitLearningRule>(
    rule: &mut R,
    network: &mut Network,
    training_set: &DataSet,
) -> Result<(), NeuroError> {
    rule.state_mut().prepare_run();
    rule.on_start(network, training_set)?;

    loop {
        rule.do_learning_epoch(network, training_set)?;
        rule.state_mut().advance_iteration();

        if rule.has_reached_stop() {
            rule.state_mut().mark_stopped();
        }

        let state = rule.state_mut();
        let event = LearningEvent::EpochEnded {
            iteration: state.current_iteration(),
            total_error: state.total_network_error(),
        };
        state.fire(event);

        // 暂停点：标志位与条件变量同锁，不会漏掉紧贴而来的pause
        state.control().wait_while_paused();

        if state.control().is_stop_requested() {
            state.mark_stopped();
        }
        if state.is_stopped() {
            break;
        }
    }

    rule.on_stop(network);
    let state = rule.state_mut();
    let event = LearningEvent::LearningStopped {
        iteration: state.current_iteration(),
    };
    state.fire(event);
    Ok(())
}
