//! PokeScript 转译器
//!
//! - `transcriber`：有序关键字规则 + 引号感知整词替换 + 货币占位符改写
//! - `locale`：公网 IP → 国家 → 货币符号
//! - `config`：用户配置

pub mod config;
pub mod locale;
pub mod transcriber;

pub use config::AppConfig;
pub use locale::{CurrencyRecord, CurrencyResolver, CurrencyTable, ResolveError};
pub use transcriber::{
    place_currency, replace_word, transcribe, QuotePolicy, Transcribable, Transcriber,
    TranscriptionResult,
};
