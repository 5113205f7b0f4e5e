use std::net::IpAddr;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 货币解析错误
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("公网 IP 查询失败: {0}")]
    IpLookup(#[source] BoxError),
    #[error("地理定位查询失败 ({ip}): {source}")]
    GeoLookup {
        ip: IpAddr,
        #[source]
        source: BoxError,
    },
    #[error("无法确定 IP {0} 所属国家")]
    NoCountry(IpAddr),
    #[error("未找到国家 {country} 的货币记录")]
    NotFound { country: String },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
