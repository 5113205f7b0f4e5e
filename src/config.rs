// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::locale::{DEFAULT_GEO_ENDPOINT, DEFAULT_TIMEOUT_SECS, IPIFY_URL};
use crate::transcriber::QuotePolicy;

/// 货币符号环境变量（优先于配置文件）
pub const CURRENCY_ENV: &str = "POKESCRIPT_CURRENCY";

// ============================================================================
// 应用配置
// ============================================================================

/// 应用配置
///
/// 字段缺失或无法解析时逐字段回退为默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 字面量引号识别策略
    pub quote_policy: QuotePolicy,
    /// 公网 IP 查询服务
    pub ip_service_url: String,
    /// 地理定位端点模板（`{ip}` 占位）
    pub geo_endpoint: String,
    /// 离线 IP 段表（设置后不再在线查询国家）
    pub geo_table: Option<PathBuf>,
    /// 自定义货币表（为空时使用内置表）
    pub currency_table: Option<PathBuf>,
    /// 默认货币符号
    pub default_currency: Option<String>,
    /// 网络请求超时（秒）
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quote_policy: QuotePolicy::default(),
            ip_service_url: IPIFY_URL.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            geo_table: None,
            currency_table: None,
            default_currency: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("PokeScript").join("config.json"))
    }

    /// 从默认路径加载，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {:?}", path))?;

        // 先解析为 Value，整体失败时逐字段恢复
        let v: serde_json::Value =
            serde_json::from_str(&content).with_context(|| format!("配置文件不是有效 JSON: {:?}", path))?;

        match serde_json::from_value::<AppConfig>(v.clone()) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("直接解析配置失败，逐字段恢复: {}", e);
                Ok(Self::recover(&v))
            }
        }
    }

    /// 从部分损坏的 JSON 中恢复可用字段
    fn recover(v: &serde_json::Value) -> Self {
        let mut cfg = Self::default();

        if let Some(policy) = field(v, "quote_policy") {
            cfg.quote_policy = policy;
        }
        if let Some(url) = field(v, "ip_service_url") {
            cfg.ip_service_url = url;
        }
        if let Some(endpoint) = field(v, "geo_endpoint") {
            cfg.geo_endpoint = endpoint;
        }
        if let Some(table) = field(v, "geo_table") {
            cfg.geo_table = table;
        }
        if let Some(table) = field(v, "currency_table") {
            cfg.currency_table = table;
        }
        if let Some(currency) = field(v, "default_currency") {
            cfg.default_currency = currency;
        }
        if let Some(secs) = field(v, "request_timeout_secs") {
            cfg.request_timeout_secs = secs;
        }

        cfg
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// 原子写入：先写临时文件，再重命名
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        tracing::info!("保存配置到: {:?}", path);

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            tracing::error!("替换配置文件失败: {}", e);
            e
        })?;

        Ok(())
    }

    /// 默认货币符号：环境变量优先，其次配置文件
    pub fn default_currency(&self) -> Option<String> {
        pick_currency(std::env::var(CURRENCY_ENV).ok(), self.default_currency.as_deref())
    }
}

fn field<T: serde::de::DeserializeOwned>(v: &serde_json::Value, key: &str) -> Option<T> {
    let value = v.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => {
            tracing::info!("成功恢复 {}", key);
            Some(parsed)
        }
        Err(_) => None,
    }
}

fn pick_currency(env: Option<String>, configured: Option<&str>) -> Option<String> {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
