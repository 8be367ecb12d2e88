//! 股票数据服务模块
//!
//! 提供股票历史K线的数据获取逻辑
//!
//! ## 数据来源
//! - 东方财富：历史K线数据

mod common;
mod eastmoney;

// 重新导出公共类型和函数（这些是公共 API，供外部使用）
pub use common::today_shanghai;
pub use eastmoney::EastmoneyKlineClient;
