//! 地理定位：IP → 国家代码
//!
//! - `HttpGeoLocator`：在线查询（ipapi 兼容接口）
//! - `GeoTable`：离线 IP 段表

use std::net::IpAddr;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::locale::utils::{create_http_client, normalize_country_code, DEFAULT_TIMEOUT_SECS};

pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipapi.co/{ip}/json/";

/// 地理定位器
///
/// 查不到国家时返回 `Ok(None)`，服务故障返回 `Err`
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn country_code(&self, ip: IpAddr) -> Result<Option<String>>;
}

// ============================================================================
// 在线查询
// ============================================================================

/// 从响应 JSON 提取国家代码（`country_code` 优先，其次 `country`）
pub(crate) fn extract_country(value: &serde_json::Value) -> Option<String> {
    ["country_code", "country"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .find_map(normalize_country_code)
}

/// HTTP 地理定位器
#[derive(Clone)]
pub struct HttpGeoLocator {
    client: Client,
    /// 端点模板，`{ip}` 会被替换为查询地址
    endpoint: String,
}

impl HttpGeoLocator {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: create_http_client(timeout_secs),
            endpoint: endpoint.into(),
        }
    }

    fn url_for(&self, ip: IpAddr) -> String {
        self.endpoint.replace("{ip}", &ip.to_string())
    }
}

impl Default for HttpGeoLocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEO_ENDPOINT, DEFAULT_TIMEOUT_SECS)
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn country_code(&self, ip: IpAddr) -> Result<Option<String>> {
        let url = self.url_for(ip);
        tracing::info!("查询地理定位: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("地理定位服务错误响应: {}", error_text);
            anyhow::bail!("地理定位请求失败 ({}): {}", status, error_text);
        }

        let value: serde_json::Value = response.json().await?;
        let country = extract_country(&value);
        if country.is_none() {
            tracing::warn!("地理定位响应中没有国家代码: {}", value);
        }
        Ok(country)
    }
}

// ============================================================================
// 离线 IP 段表
// ============================================================================

/// IP 段（闭区间，同一地址族）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRange {
    pub start: IpAddr,
    pub end: IpAddr,
    pub country: String,
}

impl GeoRange {
    pub fn contains(&self, ip: IpAddr) -> bool {
        let same_family = self.start.is_ipv4() == ip.is_ipv4() && self.end.is_ipv4() == ip.is_ipv4();
        same_family && self.start <= ip && ip <= self.end
    }
}

/// 离线 IP 段表
#[derive(Debug, Clone, Default)]
pub struct GeoTable {
    ranges: Vec<GeoRange>,
}

impl GeoTable {
    pub fn new(ranges: Vec<GeoRange>) -> Self {
        Self { ranges }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let ranges: Vec<GeoRange> = serde_json::from_str(json).context("无法解析 IP 段表")?;
        Ok(Self::new(ranges))
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("加载 IP 段表: {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取 IP 段表: {:?}", path))?;
        Self::from_json(&content)
    }

    /// 返回第一个包含该地址的段的国家代码
    pub fn lookup(&self, ip: IpAddr) -> Option<String> {
        self.ranges
            .iter()
            .find(|r| r.contains(ip))
            .and_then(|r| normalize_country_code(&r.country))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[async_trait]
impl GeoLocator for GeoTable {
    async fn country_code(&self, ip: IpAddr) -> Result<Option<String>> {
        Ok(self.lookup(ip))
    }
}
