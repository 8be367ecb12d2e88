//! K线数据模型
//!
//! 定义K线相关的数据结构，包括：
//! - 固定的 11 列表头
//! - 单条K线记录
//! - K线表格
//! - 查询参数

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// K线表格的固定表头（11 列，顺序与接口 f51~f61 字段一致）
pub const KLINE_COLUMNS: [&str; 11] = [
    "日期",
    "开盘",
    "收盘",
    "最高",
    "最低",
    "成交量",
    "成交额",
    "振幅",
    "涨跌幅",
    "涨跌额",
    "换手率",
];

/// 单条K线记录
///
/// 接口返回的记录为逗号拼接的字符串，按固定列序拆分得到。
/// 所有字段保持接口原始的字符串格式，不做数值解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlineRow {
    /// 日期
    pub date: String,
    /// 开盘价
    pub open: String,
    /// 收盘价
    pub close: String,
    /// 最高价
    pub high: String,
    /// 最低价
    pub low: String,
    /// 成交量
    pub volume: String,
    /// 成交额
    pub turnover: String,
    /// 振幅
    pub amplitude: String,
    /// 涨跌幅
    pub change_percent: String,
    /// 涨跌额
    pub change_amount: String,
    /// 换手率
    pub turnover_rate: String,
}

impl KlineRow {
    /// 按逗号拆分一条K线记录
    ///
    /// 字段数不等于 11 视为数据异常，返回错误并附带原始记录
    pub fn parse(record: &str) -> Result<Self> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() != KLINE_COLUMNS.len() {
            bail!(
                "K线记录字段数异常，期望 {} 个，实际 {} 个: {}",
                KLINE_COLUMNS.len(),
                fields.len(),
                record
            );
        }

        Ok(Self {
            date: fields[0].to_string(),
            open: fields[1].to_string(),
            close: fields[2].to_string(),
            high: fields[3].to_string(),
            low: fields[4].to_string(),
            volume: fields[5].to_string(),
            turnover: fields[6].to_string(),
            amplitude: fields[7].to_string(),
            change_percent: fields[8].to_string(),
            change_amount: fields[9].to_string(),
            turnover_rate: fields[10].to_string(),
        })
    }

    /// 按表头列序返回各字段
    pub fn fields(&self) -> [&str; 11] {
        [
            &self.date,
            &self.open,
            &self.close,
            &self.high,
            &self.low,
            &self.volume,
            &self.turnover,
            &self.amplitude,
            &self.change_percent,
            &self.change_amount,
            &self.turnover_rate,
        ]
    }
}

/// K线表格
///
/// 按时间顺序保存K线记录，表头固定为 [`KLINE_COLUMNS`]。
/// 接口未返回数据时为空表（只有表头，零行）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KlineTable {
    /// K线记录列表
    pub rows: Vec<KlineRow>,
}

impl KlineTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量创建
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    /// 固定表头
    pub fn columns() -> &'static [&'static str; 11] {
        &KLINE_COLUMNS
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 是否为空表
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// K线查询参数
///
/// 日期为 YYYYMMDD 格式字符串，原样传给接口，不做校验
#[derive(Debug, Clone)]
pub struct KlineQuery {
    /// 开始日期（YYYYMMDD）
    pub beg: String,
    /// 结束日期（YYYYMMDD）
    pub end: String,
    /// K线周期：1 一分钟，5 五分钟，101 日线，102 周线
    pub klt: u32,
    /// 复权方式：0 不复权，1 前复权，2 后复权
    pub fqt: u32,
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试单条记录按列序拆分
    #[test]
    fn test_parse_kline_row() {
        println!("\n========== 测试K线记录拆分 ==========");
        let record = "20230103,10.0,10.5,10.6,9.9,1000,10500,5.0,2.0,0.2,1.5";
        let row = KlineRow::parse(record).unwrap();

        assert_eq!(row.date, "20230103");
        assert_eq!(row.open, "10.0");
        assert_eq!(row.close, "10.5");
        assert_eq!(row.high, "10.6");
        assert_eq!(row.low, "9.9");
        assert_eq!(row.volume, "1000");
        assert_eq!(row.turnover, "10500");
        assert_eq!(row.amplitude, "5.0");
        assert_eq!(row.change_percent, "2.0");
        assert_eq!(row.change_amount, "0.2");
        assert_eq!(row.turnover_rate, "1.5");

        // 列序视图应与原始记录完全一致
        let joined = row.fields().join(",");
        assert_eq!(joined, record);
        println!("✅ K线记录拆分测试通过！");
    }

    /// 测试字段保持原始字符串格式，不做数值转换
    #[test]
    fn test_parse_preserves_string_formatting() {
        let record = "20230103,10.00,10.50,10.60,9.90,1000,10500.0,5.00,-2.00,-0.20,1.50";
        let row = KlineRow::parse(record).unwrap();
        assert_eq!(row.open, "10.00");
        assert_eq!(row.change_percent, "-2.00");
    }

    /// 测试字段数异常的记录返回错误
    #[test]
    fn test_parse_rejects_malformed_record() {
        // 字段不足
        let err = KlineRow::parse("20230103,10.0").unwrap_err();
        assert!(err.to_string().contains("字段数异常"));

        // 字段过多
        let record = "20230103,10.0,10.5,10.6,9.9,1000,10500,5.0,2.0,0.2,1.5,extra";
        assert!(KlineRow::parse(record).is_err());
    }

    /// 测试空表只有固定表头
    #[test]
    fn test_empty_table() {
        let table = KlineTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(KlineTable::columns()[0], "日期");
        assert_eq!(KlineTable::columns().len(), 11);
    }
}
