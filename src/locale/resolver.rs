//! 国家货币解析
//!
//! 公网 IP → 国家代码 → 货币记录，两次外部调用严格串行

use crate::locale::error::ResolveError;
use crate::locale::geo::{GeoLocator, HttpGeoLocator};
use crate::locale::ip::{IpResolver, IpifyResolver};
use crate::locale::types::{find_record, CurrencyRecord};

/// 国家货币解析器
pub struct CurrencyResolver<I, G> {
    ip_resolver: I,
    geo_locator: G,
}

impl CurrencyResolver<IpifyResolver, HttpGeoLocator> {
    /// 使用在线服务的解析器
    pub fn online(ip_url: &str, geo_endpoint: &str, timeout_secs: u64) -> Self {
        Self::new(
            IpifyResolver::new(ip_url, timeout_secs),
            HttpGeoLocator::new(geo_endpoint, timeout_secs),
        )
    }
}

impl<I: IpResolver, G: GeoLocator> CurrencyResolver<I, G> {
    pub fn new(ip_resolver: I, geo_locator: G) -> Self {
        Self {
            ip_resolver,
            geo_locator,
        }
    }

    /// 解析调用方所在国家代码
    pub async fn resolve_country_code(&self) -> Result<String, ResolveError> {
        let ip = self
            .ip_resolver
            .public_ip()
            .await
            .map_err(|e| ResolveError::IpLookup(e.into()))?;

        let country = self
            .geo_locator
            .country_code(ip)
            .await
            .map_err(|e| ResolveError::GeoLookup {
                ip,
                source: e.into(),
            })?
            .ok_or(ResolveError::NoCountry(ip))?;

        tracing::info!("IP {} 所属国家: {}", ip, country);
        Ok(country)
    }

    /// 解析货币记录
    pub async fn resolve_record<'a>(
        &self,
        records: &'a [CurrencyRecord],
    ) -> Result<&'a CurrencyRecord, ResolveError> {
        let country = self.resolve_country_code().await?;
        find_record(records, &country).ok_or_else(|| {
            tracing::error!("货币记录中没有国家 {}", country);
            ResolveError::NotFound { country }
        })
    }

    /// 解析货币符号
    pub async fn resolve_currency(&self, records: &[CurrencyRecord]) -> Result<String, ResolveError> {
        let record = self.resolve_record(records).await?;
        Ok(record.currency.symbol.clone())
    }
}
