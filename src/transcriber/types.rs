//! 转译类型定义

use serde::{Deserialize, Serialize};

/// 转译规则（关键字 → 替换串）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// DSL 关键字（整词匹配）
    pub keyword: &'static str,
    /// 替换后的目标语法
    pub replacement: &'static str,
}

impl Rule {
    pub const fn new(keyword: &'static str, replacement: &'static str) -> Self {
        Self {
            keyword,
            replacement,
        }
    }
}

/// 引号识别策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// 转义感知：`\"` 不切换字面量状态（默认）
    #[default]
    EscapeAware,
    /// 朴素计数：左侧 `"` 个数为奇数即视为在字面量内
    Naive,
}

/// 字面量片段（双引号包裹，受保护不做替换）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralSpan {
    /// 起始字节位置（开引号）
    pub start: usize,
    /// 结束字节位置（不含；未闭合时为文本末尾）
    pub end: usize,
}

impl LiteralSpan {
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// 货币符号位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// 符号在金额前（默认，如 `${}`）
    Leftside,
    /// 符号在金额后（如 `{}€`）
    Rightside,
}

/// 单条规则的命中记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub keyword: String,
    pub replacement: String,
    /// 本次转译中替换的次数
    pub count: usize,
}

/// 转译结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// 转译后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 命中的规则（按应用顺序）
    pub applied: Vec<RuleHit>,
    /// 被改写的货币占位符个数
    pub currency_placeholders: usize,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl TranscriptionResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            currency_placeholders: 0,
            elapsed_us,
        }
    }
}
