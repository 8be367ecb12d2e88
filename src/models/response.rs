//! 东方财富接口响应模型
//!
//! 定义历史K线接口返回的 JSON 结构，只保留本工具用到的字段，
//! 其余字段在反序列化时忽略

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// 历史K线接口响应
///
/// 证券不存在或市场前缀错误时 `data` 为 null
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EastmoneyKlineResponse {
    /// 返回码
    #[serde(default)]
    pub rc: i32,
    /// K线数据，未查到时为 null
    pub data: Option<EastmoneyKlineData>,
}

/// 历史K线数据体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EastmoneyKlineData {
    /// 股票代码
    #[serde(default)]
    pub code: String,
    /// 市场标识（0 深市，1 沪市）
    #[serde(default)]
    pub market: i32,
    /// 证券名称
    #[serde(default)]
    pub name: String,
    /// K线记录，每条为逗号拼接的字符串
    #[serde(default)]
    pub klines: Vec<String>,
}

// ==================== 测试模块 ====================
