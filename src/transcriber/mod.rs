//! 转译层 - PokeScript 关键字 → 常规语法
//!
//! ## 处理流程
//! 1. 按固定顺序逐条应用关键字规则（整词、跳过双引号字面量）
//! 2. 货币占位符改写（`{}€` / `${}` → `${}`）

mod currency;
mod engine;
mod literal;
mod replacer;
mod rules;
mod transcribable;
mod types;

pub use currency::{place_currency, CurrencyPlacer, CANONICAL_PLACEHOLDER};
pub use engine::{transcribe, Transcriber};
pub use literal::{LiteralScanner, LiteralSpans};
pub use replacer::{replace_word, QuoteAwareReplacer};
pub use rules::{PlacementTable, Rulebook, RULES};
pub use transcribable::Transcribable;
pub use types::{LiteralSpan, Placement, QuotePolicy, Rule, RuleHit, TranscriptionResult};
