//! K线表格导出
//!
//! 将K线表格写入 CSV 文件：一行固定的 11 列中文表头，
//! 之后按表格顺序每条K线记录一行，不带索引列

use anyhow::Result;
use csv::Writer;
use std::path::Path;

use crate::models::{KlineTable, KLINE_COLUMNS};

/// 将K线表格保存为 CSV 文件
///
/// 空表也会写出只含表头的文件
pub fn save_table_csv(table: &KlineTable, output_path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(output_path)?;

    // 写入表头
    wtr.write_record(KLINE_COLUMNS)?;

    // 写入数据
    for row in &table.rows {
        wtr.write_record(row.fields())?;
    }

    wtr.flush()?;
    Ok(())
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KlineRow;
    use std::fs;

    fn temp_output(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("eastmoney_kline_{}_{}.csv", name, std::process::id()))
    }

    /// 测试空表导出：只有表头行
    #[test]
    fn test_save_empty_table() {
        let path = temp_output("empty");
        let table = KlineTable::new();

        save_table_csv(&table, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "日期,开盘,收盘,最高,最低,成交量,成交额,振幅,涨跌幅,涨跌额,换手率"
        );
        assert!(lines.next().is_none());

        let _ = fs::remove_file(&path);
    }

    /// 测试数据表导出：表头后按顺序每条记录一行
    #[test]
    fn test_save_table_with_rows() {
        let path = temp_output("rows");
        let mut table = KlineTable::new();
        table.rows.push(
            KlineRow::parse("20230103,10.0,10.5,10.6,9.9,1000,10500,5.0,2.0,0.2,1.5").unwrap(),
        );
        table.rows.push(
            KlineRow::parse("20230104,10.5,10.2,10.7,10.1,900,9300,5.7,-2.9,-0.3,1.2").unwrap(),
        );

        save_table_csv(&table, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "20230103,10.0,10.5,10.6,9.9,1000,10500,5.0,2.0,0.2,1.5");
        assert_eq!(lines[2], "20230104,10.5,10.2,10.7,10.1,900,9300,5.7,-2.9,-0.3,1.2");

        let _ = fs::remove_file(&path);
    }
}
