//! 公共常量和辅助函数

use chrono::Utc;
use chrono_tz::Asia::Shanghai;

// ==================== 东方财富 API 常量 ====================

/// 东方财富历史K线 API
pub const EASTMONEY_KLINE_API: &str = "https://push2his.eastmoney.com/api/qt/stock/kline/get";

/// fields1 参数：固定的响应元信息字段列表
pub const EASTMONEY_FIELDS1: &str = "f1,f2,f3,f4,f5,f6,f7,f8,f9,f10,f11,f12,f13";

/// fields2 参数：K线记录的 11 个输出字段，
/// 依次对应 日期/开盘/收盘/最高/最低/成交量/成交额/振幅/涨跌幅/涨跌额/换手率
pub const EASTMONEY_FIELDS2: &str = "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61";

// ==================== 请求头常量 ====================
// 接口要求携带浏览器特征，缺少时会拒绝响应

/// User-Agent 请求头
pub const EASTMONEY_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Apple M1 Mac OS X 10_16_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";
/// Accept 请求头
pub const EASTMONEY_ACCEPT: &str = "*/*";
/// Accept-Language 请求头
pub const EASTMONEY_ACCEPT_LANGUAGE: &str =
    "zh-CN,zh;q=0.8,zh-TW;q=0.7,zh-HK;q=0.5,en-US;q=0.3,en;q=0.2";
/// Referer 请求头
pub const EASTMONEY_REFERER: &str = "http://quote.eastmoney.com/center/gridlist.html#hs_a_board";

/// 获取北京时间的当前日期（YYYYMMDD 格式）
pub fn today_shanghai() -> String {
    Utc::now().with_timezone(&Shanghai).format("%Y%m%d").to_string()
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试当前日期格式为 8 位数字
    #[test]
    fn test_today_shanghai_format() {
        let today = today_shanghai();
        assert_eq!(today.len(), 8);
        assert!(today.chars().all(|c| c.is_ascii_digit()));
    }
}
