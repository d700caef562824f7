/*
 * @Author       : 老董
 * @Date         : 2026-03-16 10:55:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-07-08 17:21:36
 * @Description  : K-Means聚类：特征向量、聚类、迭代重分配引擎
 */

use crate::data::DataSet;
use crate::errors::NeuroError;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// 重分配轮数的保险上限：收敛判据在浮点边界上理论上可能振荡
const MAX_PASSES: usize = 1000;

/// 两个特征向量间的欧氏距离
pub fn euclidean_distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    (a - b).mapv(|d| d * d).sum().sqrt()
}

// ==================== 特征向量 ====================

/// 特征向量：聚类/近邻检索中的一个定长数值点
///
/// `cluster`是它当前归属聚类在聚类arena中的下标（弱引用的下标化形态），
/// 重分配只是一次O(1)的下标换写；`distance`是KNN检索用的暂存距离。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KVector {
    values: Array1<f64>,
    cluster: Option<usize>,
    distance: f64,
}

impl KVector {
    pub fn new(values: Array1<f64>) -> Self {
        Self {
            values,
            cluster: None,
            distance: 0.0,
        }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// 当前归属聚类的下标（尚未分配则为None）
    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }

    /// KNN检索暂存的距离
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub(crate) fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    /// 到另一个向量的欧氏距离
    pub fn distance_from(&self, other: &Array1<f64>) -> f64 {
        euclidean_distance(&self.values, other)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ==================== 聚类 ====================

/// 一个聚类：质心 + 当前归属成员（向量arena下标）
///
/// 质心是独立持有的均值向量，不与任何训练向量共享存储。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    centroid: Array1<f64>,
    members: Vec<usize>,
}

impl Cluster {
    pub(crate) fn new(centroid: Array1<f64>) -> Self {
        Self {
            centroid,
            members: Vec::new(),
        }
    }

    pub fn centroid(&self) -> &Array1<f64> {
        &self.centroid
    }

    /// 当前成员（向量下标，归属顺序）
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// ==================== 聚类引擎 ====================

/// K-Means聚类引擎
///
/// 算法：随机取K个互不重复的样本下标作为初始质心；按欧氏距离把每个
/// 向量分给最近的质心（平局归先枚举到的聚类）；对非空聚类重算质心为
/// 成员的逐维均值（空聚类保留原质心——零成员没有均值可言）；
/// 重复直至一整轮无任何向量换聚类。
///
/// 全部参数校验在构造时完成，`do_clustering`开始前不会触碰任何聚类状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansClustering {
    vectors: Vec<KVector>,
    clusters: Vec<Cluster>,
    number_of_clusters: usize,
    seed: Option<u64>,
}

impl KMeansClustering {
    /// 由特征向量集合创建引擎；`k`须满足 0 < k ≤ 样本数
    pub fn new(vectors: Vec<Array1<f64>>, k: usize) -> Result<Self, NeuroError> {
        if k == 0 {
            return Err(NeuroError::InvalidParameter(
                "聚类数必须大于0".to_string(),
            ));
        }
        if k > vectors.len() {
            return Err(NeuroError::InvalidParameter(format!(
                "聚类数{k}超过样本数{}",
                vectors.len()
            )));
        }
        let dim = vectors[0].len();
        for vector in &vectors {
            if vector.len() != dim {
                return Err(NeuroError::VectorSizeMismatch {
                    expected: dim,
                    got: vector.len(),
                });
            }
        }
        Ok(Self {
            vectors: vectors.into_iter().map(KVector::new).collect(),
            clusters: Vec::new(),
            number_of_clusters: k,
            seed: None,
        })
    }

    /// 由训练集的输入向量创建引擎
    pub fn from_data_set(data_set: &DataSet, k: usize) -> Result<Self, NeuroError> {
        Self::new(
            data_set.iter().map(|row| row.input().clone()).collect(),
            k,
        )
    }

    /// 固定初始质心抽取的随机种子（可复现的聚类）
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn number_of_clusters(&self) -> usize {
        self.number_of_clusters
    }

    pub fn vectors(&self) -> &[KVector] {
        &self.vectors
    }

    /// 聚类结果（下标即聚类枚举顺序）
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// 执行聚类直至收敛
    pub fn do_clustering(&mut self) {
        // 1. 随机初始化质心
        self.init_clusters();

        // 2. 首轮：把每个向量分给最近的质心
        for vi in 0..self.vectors.len() {
            let nearest = self.nearest_cluster(vi);
            self.assign(vi, nearest);
        }

        // 3. 重算质心、重分配，直至一整轮无变化
        for _pass in 0..MAX_PASSES {
            self.recalculate_centroids();
            if !self.reassign_pass() {
                break;
            }
        }
    }

    /// 随机取K个互不重复的样本作为初始质心（质心是样本值的拷贝）
    fn init_clusters(&mut self) {
        for vector in &mut self.vectors {
            vector.cluster = None;
        }
        let mut indices: Vec<usize> = (0..self.vectors.len()).collect();
        match self.seed {
            Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => indices.shuffle(&mut rand::thread_rng()),
        }
        self.clusters = indices[..self.number_of_clusters]
            .iter()
            .map(|&vi| Cluster::new(self.vectors[vi].values.clone()))
            .collect();
    }

    /// 距vi号向量最近的聚类下标；平局归先枚举到的聚类
    fn nearest_cluster(&self, vi: usize) -> usize {
        let vector = &self.vectors[vi];
        let mut nearest = 0;
        let mut min_distance = vector.distance_from(self.clusters[0].centroid());
        for (ci, cluster) in self.clusters.iter().enumerate().skip(1) {
            let distance = vector.distance_from(cluster.centroid());
            if distance < min_distance {
                min_distance = distance;
                nearest = ci;
            }
        }
        nearest
    }

    /// 把vi号向量转入ci号聚类：先从旧聚类摘除，再写新归属
    fn assign(&mut self, vi: usize, ci: usize) {
        if let Some(old) = self.vectors[vi].cluster {
            if old == ci {
                return;
            }
            self.clusters[old].members.retain(|&m| m != vi);
        }
        self.vectors[vi].cluster = Some(ci);
        self.clusters[ci].members.push(vi);
    }

    /// 对非空聚类重算质心为成员的逐维均值；空聚类保留原质心
    fn recalculate_centroids(&mut self) {
        for cluster in &mut self.clusters {
            if cluster.members.is_empty() {
                continue;
            }
            let mut sum = Array1::<f64>::zeros(cluster.centroid.len());
            for &vi in &cluster.members {
                sum += &self.vectors[vi].values;
            }
            cluster.centroid = sum / cluster.members.len() as f64;
        }
    }

    /// 一整轮重分配；返回是否有向量换了聚类（收敛后再跑一轮必为false）
    pub(crate) fn reassign_pass(&mut self) -> bool {
        let mut changed = false;
        for vi in 0..self.vectors.len() {
            let nearest = self.nearest_cluster(vi);
            if self.vectors[vi].cluster != Some(nearest) {
                self.assign(vi, nearest);
                changed = true;
            }
        }
        changed
    }
}
