//! 货币占位符改写
//!
//! `{}€` / `${}` 等带符号占位符 → 规范占位符 `${}`

use crate::transcriber::rules::PlacementTable;
use crate::transcriber::types::Placement;

/// 规范插值占位符
pub const CANONICAL_PLACEHOLDER: &str = "${}";
/// 插值标记
const MARKER: &str = "{}";

/// 货币占位符改写器
#[derive(Default)]
pub struct CurrencyPlacer {
    table: PlacementTable,
}

impl CurrencyPlacer {
    pub fn new(table: PlacementTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PlacementTable {
        &self.table
    }

    /// 构造带符号的占位符（符号原样紧邻 `{}`，仅位置判断做归一化）
    pub fn annotated_placeholder(&self, symbol: &str) -> String {
        match self.table.placement(symbol) {
            Placement::Rightside => format!("{}{}", MARKER, symbol),
            Placement::Leftside => format!("{}{}", symbol, MARKER),
        }
    }

    /// 改写所有带符号占位符为 `${}`
    ///
    /// 符号本身被丢弃；空符号不做改写
    pub fn place_currency(&self, text: &str, symbol: &str) -> String {
        self.place_currency_counted(text, symbol).0
    }

    /// 改写并返回改写次数
    pub fn place_currency_counted(&self, text: &str, symbol: &str) -> (String, usize) {
        if symbol.trim().is_empty() {
            tracing::debug!("货币符号为空，跳过占位符改写");
            return (text.to_string(), 0);
        }

        let pattern = self.annotated_placeholder(symbol);
        let count = text.matches(pattern.as_str()).count();
        if count == 0 {
            return (text.to_string(), 0);
        }

        tracing::debug!("改写 {} 个货币占位符: {}", count, pattern);
        (text.replace(pattern.as_str(), CANONICAL_PLACEHOLDER), count)
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_PLACER: CurrencyPlacer = CurrencyPlacer::default();
}

/// 使用默认符号表改写货币占位符
pub fn place_currency(text: &str, symbol: &str) -> String {
    DEFAULT_PLACER.place_currency(text, symbol)
}
