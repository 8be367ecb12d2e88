//! 东方财富历史K线导出工具
//!
//! 按股票代码和日期区间拉取历史K线数据并保存为 CSV 表格
//! 数据来源：东方财富

mod config;   // 配置加载
mod export;   // CSV 导出
mod models;   // 数据模型定义
mod services; // 业务逻辑服务

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::fs;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::models::KlineQuery;
use crate::services::stock::{today_shanghai, EastmoneyKlineClient};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "eastmoney-kline")]
#[command(about = "东方财富历史K线导出工具", long_about = None)]
#[command(version)]
struct Args {
    /// 6 位股票代码（如 000001、600519）
    code: String,

    /// 开始日期（YYYYMMDD）
    #[arg(long, default_value = "19900101")]
    beg: String,

    /// 结束日期（YYYYMMDD），默认为今天（北京时间）
    #[arg(long)]
    end: Option<String>,

    /// K线周期：1 一分钟，5 五分钟，101 日线，102 周线
    #[arg(long, default_value_t = 101)]
    klt: u32,

    /// 复权方式：0 不复权，1 前复权，2 后复权
    #[arg(long, default_value_t = 1)]
    fqt: u32,

    /// 输出文件路径，默认为 <输出目录>/<股票代码>.csv
    #[arg(long)]
    output: Option<PathBuf>,
}

/// 应用程序入口
///
/// 拉取K线数据并写出 CSV 文件。未查到数据时仍写出只含表头的
/// 文件并正常退出；网络或解析故障则报错退出
#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let config = AppConfig::load();

    let query = KlineQuery {
        beg: args.beg,
        end: args.end.unwrap_or_else(today_shanghai),
        klt: args.klt,
        fqt: args.fqt,
    };

    println!(
        "正在获取 {} 从 {} 到 {} 的K线数据......",
        args.code, query.beg, query.end
    );

    let client = EastmoneyKlineClient::new(&config.http)?;
    let table = client.fetch_kline_history(&args.code, &query).await?;

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.dir).join(format!("{}.csv", args.code)));

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    export::save_table_csv(&table, &output_path)?;

    println!(
        "股票代码 {} 的K线数据已保存到 {}（共 {} 条记录）",
        args.code,
        output_path.display(),
        table.len()
    );

    Ok(())
}
