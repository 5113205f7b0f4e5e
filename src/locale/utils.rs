use reqwest::Client;
use std::time::Duration;

/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 创建标准配置的 HTTP 客户端（禁用代理）
pub fn create_http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(30))
        .no_proxy()
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// 规范化国家代码（去空白、转大写），空串返回 None
pub fn normalize_country_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}
