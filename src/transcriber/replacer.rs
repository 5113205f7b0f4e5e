//! 整词替换器
//!
//! 单次从左到右扫描，跳过字面量内的候选，替换结果不再重新扫描

use crate::transcriber::literal::LiteralScanner;
use crate::transcriber::types::QuotePolicy;

/// 词字符（与正则 `\b` 的 ASCII 定义一致）
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// 引号感知的整词替换器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteAwareReplacer {
    policy: QuotePolicy,
}

impl QuoteAwareReplacer {
    pub fn new(policy: QuotePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> QuotePolicy {
        self.policy
    }

    /// 整词替换
    pub fn replace_word(&self, text: &str, keyword: &str, replacement: &str) -> String {
        self.replace_word_counted(text, keyword, replacement).0
    }

    /// 整词替换，并返回替换次数
    ///
    /// 空关键字视为无操作
    pub fn replace_word_counted(
        &self,
        text: &str,
        keyword: &str,
        replacement: &str,
    ) -> (String, usize) {
        if keyword.is_empty() {
            tracing::debug!("空关键字，跳过替换");
            return (text.to_string(), 0);
        }
        if !text.contains(keyword) {
            return (text.to_string(), 0);
        }

        let literals = LiteralScanner::scan(text, self.policy);
        let mut result = String::with_capacity(text.len());
        let mut count = 0;
        let mut last_end = 0;
        let mut idx = 0;

        while idx < text.len() {
            let rest = &text[idx..];

            if rest.starts_with(keyword)
                && Self::at_word_boundary(text, idx, keyword)
                && !literals.is_protected(idx)
            {
                result.push_str(&text[last_end..idx]);
                result.push_str(replacement);
                count += 1;
                idx += keyword.len();
                last_end = idx;
                continue;
            }

            // 未命中：前进一个字符
            match rest.chars().next() {
                Some(ch) => idx += ch.len_utf8(),
                None => break,
            }
        }

        result.push_str(&text[last_end..]);
        (result, count)
    }

    /// 检查 `text[start..start + keyword.len()]` 两端是否为词边界
    fn at_word_boundary(text: &str, start: usize, keyword: &str) -> bool {
        let end = start + keyword.len();

        let before = text[..start].chars().next_back().is_some_and(is_word_char);
        let first = keyword.chars().next().is_some_and(is_word_char);
        let last = keyword.chars().next_back().is_some_and(is_word_char);
        let after = text[end..].chars().next().is_some_and(is_word_char);

        before != first && last != after
    }
}

/// 使用默认引号策略的整词替换
pub fn replace_word(text: &str, keyword: &str, replacement: &str) -> String {
    QuoteAwareReplacer::default().replace_word(text, keyword, replacement)
}
