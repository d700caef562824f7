/*
 * @Author       : 老董
 * @Date         : 2026-03-17 09:31:44
 * @Description  : K近邻检索（RBF宽度估计用）
 */

use super::kmeans::KVector;
use crate::errors::NeuroError;
use ndarray::Array1;

/// K近邻检索
///
/// 持有一份参考集；`k_nearest`返回与查询点欧氏距离最小的k个参考向量
/// 的下标，平局按枚举顺序取先者。不主动排除查询点自身——
/// 查询点若在参考集内，是否避开自匹配由调用方决定。
pub struct KNearestNeighbour {
    data_set: Vec<KVector>,
}

impl KNearestNeighbour {
    pub fn new(vectors: Vec<Array1<f64>>) -> Self {
        Self {
            data_set: vectors.into_iter().map(KVector::new).collect(),
        }
    }

    /// 参考集（枚举顺序即下标顺序）
    pub fn data_set(&self) -> &[KVector] {
        &self.data_set
    }

    pub fn len(&self) -> usize {
        self.data_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_set.is_empty()
    }

    /// 返回距查询点最近的k个参考向量下标（按距离升序，平局按枚举顺序）
    ///
    /// 要求 0 < k ≤ 参考集大小；查询点维度须与参考集一致。
    pub fn k_nearest(
        &mut self,
        query: &Array1<f64>,
        k: usize,
    ) -> Result<Vec<usize>, NeuroError> {
        if k == 0 {
            return Err(NeuroError::InvalidParameter(
                "近邻数必须大于0".to_string(),
            ));
        }
        if k > self.data_set.len() {
            return Err(NeuroError::InvalidParameter(format!(
                "近邻数{k}超过参考集大小{}",
                self.data_set.len()
            )));
        }
        if let Some(first) = self.data_set.first() {
            if first.len() != query.len() {
                return Err(NeuroError::VectorSizeMismatch {
                    expected: first.len(),
                    got: query.len(),
                });
            }
        }

        // 1. 全量算距离，缓存进KVector的暂存字段
        for vector in &mut self.data_set {
            let distance = vector.distance_from(query);
            vector.set_distance(distance);
        }

        // 2. 按缓存距离稳定排序下标（稳定性保证平局保持枚举顺序），取前k
        let mut indices: Vec<usize> = (0..self.data_set.len()).collect();
        indices.sort_by(|&a, &b| {
            self.data_set[a]
                .distance()
                .partial_cmp(&self.data_set[b].distance())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indices.truncate(k);
        Ok(indices)
    }
}
