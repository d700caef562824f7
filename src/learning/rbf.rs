/*
 * @Author       : 老董
 * @Date         : 2026-03-18 14:12:09
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-20 10:47:18
 * @Description  : RBF网络学习规则：K-Means定质心 + KNN定宽度 + LMS调输出层
 */

use super::iterative::{IterativeState, TraitLearningRule};
use super::kmeans::{KMeansClustering, euclidean_distance};
use super::knn::KNearestNeighbour;
use super::lms::LmsLearning;
use crate::data::DataSet;
use crate::errors::NeuroError;
use crate::nn::{Network, TransferFunction};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// 估计宽度时默认取的近邻数
const DEFAULT_NEIGHBOURS: usize = 2;

/// RBF网络的学习规则
///
/// 训练启动时一次性完成无监督初始化：
/// 1. 对训练输入做K-Means，聚类数=隐层神经元数；
/// 2. 按枚举顺序把各聚类质心的坐标逐一写进对应隐神经元的入边权值；
/// 3. 对每个质心在全体质心中做K近邻检索，取
///    σ = sqrt(K个近邻平方距离的均值) 作为该隐神经元的高斯宽度。
///
/// 此后每轮epoch都是纯LMS输出层调权——聚类定下的隐层权值与宽度
/// 不再变动。聚类没把数据均匀切开时出现的空聚类（保留任意质心）
/// 属于容忍的退化情形，不报错。
#[derive(Serialize, Deserialize)]
pub struct RbfLearning {
    lms: LmsLearning,
    neighbours: usize,
    clustering_seed: Option<u64>,
}

impl Default for RbfLearning {
    fn default() -> Self {
        Self::new()
    }
}

impl RbfLearning {
    pub fn new() -> Self {
        Self {
            lms: LmsLearning::new(),
            neighbours: DEFAULT_NEIGHBOURS,
            clustering_seed: None,
        }
    }

    /// 宽度估计取的近邻数（默认2）
    pub fn neighbours(&self) -> usize {
        self.neighbours
    }

    pub fn set_neighbours(&mut self, neighbours: usize) {
        self.neighbours = neighbours;
    }

    /// 固定聚类初始化的随机种子（None则不可复现）
    pub fn set_clustering_seed(&mut self, seed: Option<u64>) {
        self.clustering_seed = seed;
    }

    /// 误差阈值（LMS阶段的停止判据）
    pub fn max_error(&self) -> f64 {
        self.lms.max_error()
    }

    pub fn set_max_error(&mut self, max_error: f64) {
        self.lms.set_max_error(max_error);
    }
}

impl TraitLearningRule for RbfLearning {
    fn state(&self) -> &IterativeState {
        self.lms.state()
    }

    fn state_mut(&mut self) -> &mut IterativeState {
        self.lms.state_mut()
    }

    fn on_start(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        self.lms.on_start(network, training_set)?;

        if network.layers_count() < 3 {
            return Err(NeuroError::InvalidTopology(
                "RBF训练要求网络至少有输入/隐/输出三层".to_string(),
            ));
        }
        let hidden_ids = network
            .layer(1)
            .ok_or_else(|| {
                NeuroError::InvalidTopology("RBF训练要求网络至少有输入/隐/输出三层".to_string())
            })?
            .neuron_ids()
            .to_vec();

        // 1. 对训练输入做K-Means，聚类数 = 隐层神经元数
        let mut kmeans = KMeansClustering::from_data_set(training_set, hidden_ids.len())?;
        if let Some(seed) = self.clustering_seed {
            kmeans = kmeans.with_seed(seed);
        }
        kmeans.do_clustering();

        // 2. 质心坐标 → 隐神经元入边权值（聚类与神经元均按枚举顺序一一对应）
        for (ci, &id) in hidden_ids.iter().enumerate() {
            let centroid = kmeans.clusters()[ci].centroid().clone();
            let neuron = network.neuron_ref_mut(id);
            if neuron.input_connections().len() != centroid.len() {
                return Err(NeuroError::InvalidTopology(format!(
                    "隐神经元入边数{}与质心维度{}不一致",
                    neuron.input_connections().len(),
                    centroid.len()
                )));
            }
            for (wi, conn) in neuron.input_connections_mut().iter_mut().enumerate() {
                conn.weight_mut().set_value(centroid[wi]);
            }
        }

        // 3. 质心间K近邻 → 各隐神经元的高斯宽度σ
        //    参考集即全体质心，不排除查询质心自身（自匹配贡献一个零距离项）；
        //    近邻数不超过质心总数，单质心的退化场景由此得到σ=0而非报错
        let centroids: Vec<Array1<f64>> = kmeans
            .clusters()
            .iter()
            .map(|cluster| cluster.centroid().clone())
            .collect();
        let mut knn = KNearestNeighbour::new(centroids.clone());
        let k_query = self.neighbours.min(centroids.len());
        for (ci, &id) in hidden_ids.iter().enumerate() {
            let neighbour_indices = knn.k_nearest(&centroids[ci], k_query)?;
            let mean_squared = neighbour_indices
                .iter()
                .map(|&ni| {
                    let d = euclidean_distance(&centroids[ci], knn.data_set()[ni].values());
                    d * d
                })
                .sum::<f64>()
                / k_query as f64;
            let sigma = mean_squared.sqrt();
            match network.neuron_ref_mut(id).transfer_function_mut() {
                TransferFunction::Gaussian(gaussian) => gaussian.set_sigma(sigma),
                _ => {
                    return Err(NeuroError::InvalidTopology(
                        "RBF隐神经元的传递函数必须是高斯函数".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn do_learning_epoch(
        &mut self,
        network: &mut Network,
        training_set: &DataSet,
    ) -> Result<(), NeuroError> {
        self.lms.do_learning_epoch(network, training_set)
    }

    fn has_reached_stop(&self) -> bool {
        self.lms.has_reached_stop()
    }
}
