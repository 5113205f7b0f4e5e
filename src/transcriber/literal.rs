//! 字面量扫描器
//!
//! 逐字符跟踪引号内/外状态，输出受保护的字面量片段

use crate::transcriber::types::{LiteralSpan, QuotePolicy};

const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// 字面量片段集合（按起始位置有序，互不重叠）
#[derive(Debug, Clone, Default)]
pub struct LiteralSpans {
    spans: Vec<LiteralSpan>,
}

impl LiteralSpans {
    /// 判断字节位置是否落在某个字面量内
    pub fn is_protected(&self, pos: usize) -> bool {
        // spans 有序：找到最后一个 start <= pos 的片段
        let idx = self.spans.partition_point(|s| s.start <= pos);
        idx > 0 && self.spans[idx - 1].contains(pos)
    }

    pub fn as_slice(&self) -> &[LiteralSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// 字面量扫描器
pub struct LiteralScanner;

impl LiteralScanner {
    /// 扫描文本中的字面量片段
    ///
    /// 未闭合的字面量延伸到文本末尾
    pub fn scan(text: &str, policy: QuotePolicy) -> LiteralSpans {
        let mut spans = Vec::new();
        let mut open: Option<usize> = None;
        let mut escaped = false;

        for (idx, ch) in text.char_indices() {
            // 转义感知：字面量内外的 `\x` 都不参与引号判断
            if policy == QuotePolicy::EscapeAware {
                if escaped {
                    escaped = false;
                    continue;
                }
                if ch == ESCAPE {
                    escaped = true;
                    continue;
                }
            }

            match open {
                None => {
                    if ch == QUOTE {
                        open = Some(idx);
                    }
                }
                Some(start) => {
                    if ch == QUOTE {
                        spans.push(LiteralSpan {
                            start,
                            end: idx + ch.len_utf8(),
                        });
                        open = None;
                    }
                }
            }
        }

        if let Some(start) = open {
            spans.push(LiteralSpan {
                start,
                end: text.len(),
            });
        }

        LiteralSpans { spans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_balanced() {
        let spans = LiteralScanner::scan(r#"let x = "abc" + "d""#, QuotePolicy::Naive);
        assert_eq!(spans.as_slice().len(), 2);
        assert_eq!(spans.as_slice()[0], LiteralSpan { start: 8, end: 13 });
        assert!(spans.is_protected(9));
        assert!(!spans.is_protected(14));
    }

    #[test]
    fn test_scan_unterminated() {
        let text = r#"a "b c"#;
        let spans = LiteralScanner::scan(text, QuotePolicy::EscapeAware);
        assert_eq!(spans.as_slice(), &[LiteralSpan { start: 2, end: text.len() }]);
        assert!(spans.is_protected(5));
        assert!(!spans.is_protected(0));
    }

    #[test]
    fn test_escape_aware_vs_naive() {
        let text = r#""a \" b" c"#;
        let aware = LiteralScanner::scan(text, QuotePolicy::EscapeAware);
        assert_eq!(aware.as_slice(), &[LiteralSpan { start: 0, end: 8 }]);
        assert!(!aware.is_protected(text.len() - 1));

        // 朴素计数把 \" 当作引号，末尾的 c 被误判为字面量
        let naive = LiteralScanner::scan(text, QuotePolicy::Naive);
        assert_eq!(naive.as_slice().len(), 2);
        assert!(naive.is_protected(text.len() - 1));
    }

    #[test]
    fn test_escaped_quote_outside_literal() {
        // 字面量外的 \" 不开启字面量
        let text = r#"a \" catch "b" c"#;
        let aware = LiteralScanner::scan(text, QuotePolicy::EscapeAware);
        assert_eq!(aware.as_slice(), &[LiteralSpan { start: 11, end: 14 }]);
        assert!(!aware.is_protected(5));

        // 朴素计数仍把它当作开引号
        let naive = LiteralScanner::scan(text, QuotePolicy::Naive);
        assert_eq!(naive.as_slice()[0], LiteralSpan { start: 3, end: 12 });
        assert!(naive.is_protected(5));
    }

    #[test]
    fn test_escaped_backslash_closes() {
        // "a\\" b：\\ 是转义的反斜杠，随后的引号正常闭合
        let text = r#""a\\" b"#;
        let spans = LiteralScanner::scan(text, QuotePolicy::EscapeAware);
        assert_eq!(spans.as_slice(), &[LiteralSpan { start: 0, end: 5 }]);
    }

    #[test]
    fn test_no_quotes() {
        let spans = LiteralScanner::scan("plain text", QuotePolicy::EscapeAware);
        assert!(spans.is_empty());
        assert!(!spans.is_protected(3));
    }
}
