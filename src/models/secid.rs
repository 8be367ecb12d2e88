//! 证券标识模型
//!
//! 东方财富接口使用 `市场前缀.股票代码` 格式的 secid 定位证券，
//! 前缀 0 表示深市，1 表示沪市

use serde::{Deserialize, Serialize};
use std::fmt;

/// 市场标识（secid 前缀）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    /// 深市（前缀 0）
    Shenzhen,
    /// 沪市（前缀 1）
    Shanghai,
}

impl Market {
    /// 返回相反的市场前缀
    pub fn flipped(&self) -> Self {
        match self {
            Self::Shenzhen => Self::Shanghai,
            Self::Shanghai => Self::Shenzhen,
        }
    }

    /// secid 中使用的前缀数字
    pub fn prefix(&self) -> char {
        match self {
            Self::Shenzhen => '0',
            Self::Shanghai => '1',
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// 东方财富专用证券标识
///
/// 由 6 位股票代码按前缀规则推导，不做数字校验，任何输入原样保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecId {
    /// 市场前缀
    pub market: Market,
    /// 原始股票代码
    pub code: String,
}

impl SecId {
    /// 根据 6 位股票代码生成 secid
    ///
    /// 规则按顺序匹配，命中即返回：
    /// - `000` 开头：沪市指数
    /// - `399` 开头：深证指数
    /// - 首位不是 `6`：深市股票
    /// - 其余：沪市股票
    pub fn resolve(code: &str) -> Self {
        let market = if code.starts_with("000") {
            // 沪市指数
            Market::Shanghai
        } else if code.starts_with("399") {
            // 深证指数
            Market::Shenzhen
        } else if !code.starts_with('6') {
            // 深市股票
            Market::Shenzhen
        } else {
            // 沪市股票
            Market::Shanghai
        };

        Self {
            market,
            code: code.to_string(),
        }
    }

    /// 切换市场前缀，代码保持不变
    ///
    /// 重试时只翻转当前使用的前缀，不重新执行推导规则
    pub fn flipped(&self) -> Self {
        Self {
            market: self.market.flipped(),
            code: self.code.clone(),
        }
    }
}

impl fmt::Display for SecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.market, self.code)
    }
}

// ==================== 测试模块 ====================
