//! 货币记录类型
//!
//! JSON 结构：`{ "code": "DE", "currency": { "symbol": "€" }, "language": { "code": "de" } }`

use serde::{Deserialize, Serialize};

/// 国家货币记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// 国家代码（ISO 3166-1 alpha-2）
    pub code: String,
    pub currency: CurrencyInfo,
    pub language: LanguageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
}

impl CurrencyRecord {
    pub fn new(code: &str, symbol: &str, language: &str) -> Self {
        Self {
            code: code.to_string(),
            currency: CurrencyInfo {
                symbol: symbol.to_string(),
            },
            language: LanguageInfo {
                code: language.to_string(),
            },
        }
    }

    pub fn symbol(&self) -> &str {
        &self.currency.symbol
    }
}

/// 查找第一条国家代码相等的记录
pub fn find_record<'a>(records: &'a [CurrencyRecord], country: &str) -> Option<&'a CurrencyRecord> {
    records.iter().find(|r| r.code == country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let record = CurrencyRecord::new("PL", "zł", "pl");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": "PL",
                "currency": { "symbol": "zł" },
                "language": { "code": "pl" }
            })
        );

        let back: CurrencyRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_find_first_match() {
        let records = vec![
            CurrencyRecord::new("US", "$", "en"),
            CurrencyRecord::new("DE", "€", "de"),
            CurrencyRecord::new("DE", "DM", "de"),
        ];
        assert_eq!(find_record(&records, "DE").map(|r| r.symbol()), Some("€"));
        assert!(find_record(&records, "de").is_none());
        assert!(find_record(&records, "FR").is_none());
    }
}
