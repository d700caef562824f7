/*
 * @Author       : 老董
 * @Date         : 2026-03-05 09:12:40
 * @Description  : 网络快照的保存/加载（bincode二进制 + JSON可读格式）
 *
 * 快照内容：层、神经元、连接、权值、学习规则配置。
 * 监听器、停止条件、训练控制句柄属于运行期状态，不入快照，
 * 加载后为空/默认值。
 */

use super::network::Network;
use crate::errors::NeuroError;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

// TODO: 快照暂无格式版本号，字段布局变更会破坏旧快照的反序列化

impl Network {
    /// 把整个网络序列化为二进制快照写入文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), NeuroError> {
        let file = File::create(path.as_ref())
            .map_err(|e| NeuroError::PersistenceFailure(format!("创建快照文件失败: {e}")))?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)
            .map_err(|e| NeuroError::PersistenceFailure(format!("序列化网络失败: {e}")))?;
        Ok(())
    }

    /// 从二进制快照文件重建网络（拓扑与权值与保存时完全一致）
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NeuroError> {
        let file = File::open(path.as_ref())
            .map_err(|e| NeuroError::PersistenceFailure(format!("打开快照文件失败: {e}")))?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader)
            .map_err(|e| NeuroError::PersistenceFailure(format!("反序列化网络失败: {e}")))
    }

    /// 导出为JSON字符串（可读格式，内容与二进制快照等价）
    pub fn to_json(&self) -> Result<String, NeuroError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NeuroError::PersistenceFailure(format!("导出JSON失败: {e}")))
    }

    /// 从JSON字符串重建网络
    pub fn from_json(json: &str) -> Result<Self, NeuroError> {
        serde_json::from_str(json)
            .map_err(|e| NeuroError::PersistenceFailure(format!("解析JSON失败: {e}")))
    }
}
