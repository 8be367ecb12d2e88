//! 东方财富历史K线接口实现
//!
//! 对接 https://push2his.eastmoney.com 的历史K线接口，
//! 对应 akshare 的 stock_zh_a_hist() 函数
//!
//! ## 重试逻辑
//! secid 前缀推导存在歧义（同号代码在两市都可能存在），
//! 首次请求未返回数据时翻转市场前缀重试一次，仍无数据则返回空表

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::models::{EastmoneyKlineResponse, KlineQuery, KlineRow, KlineTable, SecId};

use super::common::{
    EASTMONEY_ACCEPT, EASTMONEY_ACCEPT_LANGUAGE, EASTMONEY_FIELDS1, EASTMONEY_FIELDS2,
    EASTMONEY_KLINE_API, EASTMONEY_REFERER, EASTMONEY_USER_AGENT,
};

/// 东方财富历史K线客户端
pub struct EastmoneyKlineClient {
    client: Client,
    base_url: String,
}

impl EastmoneyKlineClient {
    /// 按 HTTP 配置创建客户端
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: EASTMONEY_KLINE_API.to_string(),
        })
    }

    /// 替换接口地址（测试用）
    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// 获取指定股票代码、日期区间的历史K线数据
    ///
    /// 首次请求未返回数据时翻转市场前缀重试一次；
    /// 两次都无数据则打印诊断信息并返回空表（不视为错误）。
    /// 网络故障、非 2xx 状态码、响应体非 JSON 均作为错误向上传播
    pub async fn fetch_kline_history(&self, code: &str, query: &KlineQuery) -> Result<KlineTable> {
        let secid = SecId::resolve(code);
        println!("📡 请求K线数据 secid: {} 区间: {} ~ {}", secid, query.beg, query.end);

        let mut response = self.request_klines(&secid, query).await?;

        if response.data.is_none() {
            let flipped = secid.flipped();
            println!("📡 {} 未返回数据，翻转市场前缀重试: {}", secid, flipped);
            response = self.request_klines(&flipped, query).await?;
        }

        let data = match response.data {
            Some(data) => data,
            None => {
                println!("⚠️ 股票代码: {} 可能有误", code);
                return Ok(KlineTable::new());
            }
        };

        println!(
            "📥 {}（{}）解析到 {} 条K线记录",
            data.name,
            data.code,
            data.klines.len()
        );

        let mut table = KlineTable::with_capacity(data.klines.len());
        for record in &data.klines {
            table.rows.push(KlineRow::parse(record)?);
        }

        Ok(table)
    }

    /// 发起一次K线请求并反序列化响应
    async fn request_klines(
        &self,
        secid: &SecId,
        query: &KlineQuery,
    ) -> Result<EastmoneyKlineResponse> {
        let secid_str = secid.to_string();
        let klt_str = query.klt.to_string();
        let fqt_str = query.fqt.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("fields1", EASTMONEY_FIELDS1),
                ("fields2", EASTMONEY_FIELDS2),
                ("beg", query.beg.as_str()),
                ("end", query.end.as_str()),
                ("rtntype", "6"),
                ("secid", secid_str.as_str()),
                ("klt", klt_str.as_str()),
                ("fqt", fqt_str.as_str()),
            ])
            .header("User-Agent", EASTMONEY_USER_AGENT)
            .header("Accept", EASTMONEY_ACCEPT)
            .header("Accept-Language", EASTMONEY_ACCEPT_LANGUAGE)
            .header("Referer", EASTMONEY_REFERER)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("获取K线数据失败: {}", response.status()));
        }

        let parsed: EastmoneyKlineResponse = response.json().await?;
        Ok(parsed)
    }
}

// ==================== 测试模块 ====================
