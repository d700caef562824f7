//! 训练集模块
//!
//! 提供引擎消费的训练数据形态：定长输入向量 + 可选的期望输出向量，
//! 按行有序存放。引擎只依赖行数、按序迭代与逐行取输入/期望输出。

use crate::errors::NeuroError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// 一行训练数据：输入特征向量 + 可选的期望输出向量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetRow {
    input: Array1<f64>,
    desired_output: Option<Array1<f64>>,
}

impl DataSetRow {
    pub fn new(input: Array1<f64>, desired_output: Option<Array1<f64>>) -> Self {
        Self {
            input,
            desired_output,
        }
    }

    pub fn input(&self) -> &Array1<f64> {
        &self.input
    }

    pub fn desired_output(&self) -> Option<&Array1<f64>> {
        self.desired_output.as_ref()
    }
}

/// 训练集：维度固定的有序行集合
///
/// `output_size`为0表示无监督数据集（各行不携带期望输出）。
/// 行在插入时校验维度，之后引擎可以放心按契约消费。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    input_size: usize,
    output_size: usize,
    rows: Vec<DataSetRow>,
}

impl DataSet {
    /// 创建空训练集；`output_size`为0即无监督
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            rows: Vec::new(),
        }
    }

    /// 追加一行，插入时校验输入/期望输出的维度
    pub fn add_row(&mut self, row: DataSetRow) -> Result<(), NeuroError> {
        if row.input.len() != self.input_size {
            return Err(NeuroError::VectorSizeMismatch {
                expected: self.input_size,
                got: row.input.len(),
            });
        }
        match (&row.desired_output, self.output_size) {
            (None, 0) => {}
            (None, _) => {
                return Err(NeuroError::InvalidParameter(
                    "监督数据集的行必须携带期望输出".to_string(),
                ));
            }
            (Some(_), 0) => {
                return Err(NeuroError::InvalidParameter(
                    "无监督数据集的行不应携带期望输出".to_string(),
                ));
            }
            (Some(desired), expected) => {
                if desired.len() != expected {
                    return Err(NeuroError::VectorSizeMismatch {
                        expected,
                        got: desired.len(),
                    });
                }
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// 追加一行监督数据
    pub fn add_supervised(
        &mut self,
        input: Array1<f64>,
        desired_output: Array1<f64>,
    ) -> Result<(), NeuroError> {
        self.add_row(DataSetRow::new(input, Some(desired_output)))
    }

    /// 追加一行无监督数据
    pub fn add_unsupervised(&mut self, input: Array1<f64>) -> Result<(), NeuroError> {
        self.add_row(DataSetRow::new(input, None))
    }

    pub fn rows(&self) -> &[DataSetRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataSetRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// 是否为监督数据集（行携带期望输出）
    pub fn is_supervised(&self) -> bool {
        self.output_size > 0
    }
}
