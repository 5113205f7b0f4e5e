//! 公网 IP 查询

use std::net::IpAddr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::locale::utils::{create_http_client, DEFAULT_TIMEOUT_SECS};

pub const IPIFY_URL: &str = "https://api64.ipify.org?format=json";

/// 公网 IP 解析器
#[async_trait]
pub trait IpResolver: Send + Sync {
    async fn public_ip(&self) -> Result<IpAddr>;
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// 解析 `{ "ip": "..." }` 响应体
pub(crate) fn parse_ip_response(body: &str) -> Result<IpAddr> {
    let response: IpResponse =
        serde_json::from_str(body).with_context(|| format!("无法解析 IP 响应: {}", body))?;
    response
        .ip
        .trim()
        .parse()
        .with_context(|| format!("无效的 IP 地址: {}", response.ip))
}

/// ipify 兼容的 IP 查询服务
#[derive(Clone)]
pub struct IpifyResolver {
    client: Client,
    url: String,
}

impl IpifyResolver {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: create_http_client(timeout_secs),
            url: url.into(),
        }
    }
}

impl Default for IpifyResolver {
    fn default() -> Self {
        Self::new(IPIFY_URL, DEFAULT_TIMEOUT_SECS)
    }
}

#[async_trait]
impl IpResolver for IpifyResolver {
    async fn public_ip(&self) -> Result<IpAddr> {
        tracing::info!("查询公网 IP: {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("IP 服务错误响应: {}", error_text);
            anyhow::bail!("IP 服务请求失败 ({}): {}", status, error_text);
        }

        let body = response.text().await?;
        let ip = parse_ip_response(&body)?;
        tracing::info!("公网 IP: {}", ip);
        Ok(ip)
    }
}
