/*
 * @Author       : 老董
 * @Date         : 2026-03-03 11:02:19
 * @LastEditors  : 老董
 * @LastEditTime : 2026-06-28 15:44:51
 * @Description  : 神经元的传递（激活）函数
 */

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// 传递函数接口
#[enum_dispatch]
pub trait TraitTransferFunction {
    /// 由净输入计算输出
    fn output(&self, net: f64) -> f64;
    /// 输出对净输入的导数
    fn derivative(&self, net: f64) -> f64;
}

/// 传递函数（静态分发，构建神经元时选定）
#[enum_dispatch(TraitTransferFunction)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransferFunction {
    Linear,
    Sigmoid,
    Tanh,
    Gaussian,
    RectifiedLinear,
}

impl Default for TransferFunction {
    fn default() -> Self {
        Self::Linear(Linear::default())
    }
}

// ==================== 线性 ====================

/// 线性函数：output = slope * net
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    slope: f64,
}

impl Linear {
    pub fn new(slope: f64) -> Self {
        Self { slope }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl Default for Linear {
    fn default() -> Self {
        Self { slope: 1.0 }
    }
}

impl TraitTransferFunction for Linear {
    fn output(&self, net: f64) -> f64 {
        self.slope * net
    }

    fn derivative(&self, _net: f64) -> f64 {
        self.slope
    }
}

// ==================== Sigmoid ====================

/// Sigmoid函数：output = 1 / (1 + e^(-net))
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sigmoid;

impl TraitTransferFunction for Sigmoid {
    fn output(&self, net: f64) -> f64 {
        1.0 / (1.0 + (-net).exp())
    }

    fn derivative(&self, net: f64) -> f64 {
        let out = self.output(net);
        out * (1.0 - out)
    }
}

// ==================== Tanh ====================

/// 双曲正切函数
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tanh;

impl TraitTransferFunction for Tanh {
    fn output(&self, net: f64) -> f64 {
        net.tanh()
    }

    fn derivative(&self, net: f64) -> f64 {
        let t = net.tanh();
        1.0 - t * t
    }
}

// ==================== 高斯 ====================

/// 高斯函数：output = e^(-net² / (2σ²))
///
/// RBF隐层神经元的传递函数，净输入为到质心的距离，σ为响应宽度。
/// σ允许为0（训练数据退化为单点时聚类宽度估计的自然结果）：
/// 此时在net=0处求值得NaN——引擎不做epsilon钳制，把退化如实暴露给调用方。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    sigma: f64,
}

impl Gaussian {
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// 响应宽度σ
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// 设置响应宽度σ
    pub fn set_sigma(&mut self, sigma: f64) {
        self.sigma = sigma;
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self { sigma: 0.5 }
    }
}

impl TraitTransferFunction for Gaussian {
    fn output(&self, net: f64) -> f64 {
        (-(net * net) / (2.0 * self.sigma * self.sigma)).exp()
    }

    fn derivative(&self, net: f64) -> f64 {
        self.output(net) * (-net / (self.sigma * self.sigma))
    }
}

// ==================== ReLU ====================

/// 修正线性函数：output = max(0, net)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectifiedLinear;

impl TraitTransferFunction for RectifiedLinear {
    fn output(&self, net: f64) -> f64 {
        net.max(0.0)
    }

    fn derivative(&self, net: f64) -> f64 {
        if net > 0.0 { 1.0 } else { 0.0 }
    }
}
