//! 区域货币解析
//!
//! 公网 IP 查询与地理定位均为外部协作者，通过 trait 注入，便于替换

mod error;
mod geo;
mod ip;
mod resolver;
mod table;
mod types;
mod utils;

pub use error::ResolveError;
pub use geo::{GeoLocator, GeoRange, GeoTable, HttpGeoLocator, DEFAULT_GEO_ENDPOINT};
pub use ip::{IpResolver, IpifyResolver, IPIFY_URL};
pub use resolver::CurrencyResolver;
pub use table::CurrencyTable;
pub use types::{find_record, CurrencyInfo, CurrencyRecord, LanguageInfo};
pub use utils::DEFAULT_TIMEOUT_SECS;
