//! 转译主引擎
//!
//! 组合有序规则表、整词替换器、货币占位符改写

use std::time::Instant;

use crate::transcriber::currency::CurrencyPlacer;
use crate::transcriber::replacer::QuoteAwareReplacer;
use crate::transcriber::rules::Rulebook;
use crate::transcriber::types::{QuotePolicy, RuleHit, TranscriptionResult};

/// 转译引擎（可复用，规则表预置）
#[derive(Default)]
pub struct Transcriber {
    /// 有序规则表
    rulebook: Rulebook,
    /// 整词替换器
    replacer: QuoteAwareReplacer,
    /// 货币占位符改写器
    placer: CurrencyPlacer,
}

impl Transcriber {
    /// 创建转译引擎
    ///
    /// # Arguments
    /// * `policy` - 字面量引号识别策略
    pub fn new(policy: QuotePolicy) -> Self {
        Self {
            rulebook: Rulebook::new(),
            replacer: QuoteAwareReplacer::new(policy),
            placer: CurrencyPlacer::default(),
        }
    }

    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    pub fn policy(&self) -> QuotePolicy {
        self.replacer.policy()
    }

    /// 转译源码
    pub fn transcribe(&self, code: &str, currency: &str) -> String {
        self.transcribe_detailed(code, currency).text
    }

    /// 转译源码并返回命中记录
    ///
    /// 纯函数，不可失败
    pub fn transcribe_detailed(&self, code: &str, currency: &str) -> TranscriptionResult {
        let start = Instant::now();

        if code.is_empty() {
            return TranscriptionResult::unchanged(String::new(), 0);
        }

        // 1. 按顺序应用关键字规则，每步作用于上一步的输出
        let mut text = code.to_string();
        let mut applied = Vec::new();
        for rule in self.rulebook.iter() {
            let (next, count) = self
                .replacer
                .replace_word_counted(&text, rule.keyword, rule.replacement);
            if count > 0 {
                tracing::debug!("规则 {} → {} 命中 {} 次", rule.keyword, rule.replacement, count);
                applied.push(RuleHit {
                    keyword: rule.keyword.to_string(),
                    replacement: rule.replacement.to_string(),
                    count,
                });
                text = next;
            }
        }

        // 2. 货币占位符改写（最后一步）
        let (text, currency_placeholders) = self.placer.place_currency_counted(&text, currency);

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = text != code;

        TranscriptionResult {
            text,
            changed,
            applied,
            currency_placeholders,
            elapsed_us,
        }
    }
}

lazy_static::lazy_static! {
    /// 默认转译引擎（转义感知引号策略）
    static ref DEFAULT_TRANSCRIBER: Transcriber = Transcriber::default();
}

/// 使用默认引擎转译
pub fn transcribe(code: &str, currency: &str) -> String {
    DEFAULT_TRANSCRIBER.transcribe(code, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_function() {
        assert_eq!(
            transcribe(r#"trainer greet pokeball use "Hello" pokecapture"#, "€"),
            r#"function greet { println "Hello" }"#
        );
    }

    #[test]
    fn test_revive_not_reprocessed() {
        let code = "pokecenter pokeball risky() pokecapture revive (e) pokeball pokecapture";
        assert_eq!(transcribe(code, "$"), "try { risky() } catch (e) { }");
    }

    #[test]
    fn test_catch_becomes_let() {
        assert_eq!(
            transcribe("catch hp swap_move 100", "$"),
            "let hp = 100"
        );
    }

    #[test]
    fn test_operators_and_literals() {
        let code = "battle a type_advantage legendary pokeball release_move a attack b combine 2 pokecapture faint pokeball release_move wildcard pokecapture";
        assert_eq!(
            transcribe(code, "$"),
            "if a && true { return a + b * 2 } else { return null }"
        );
    }

    #[test]
    fn test_loop_and_arrow() {
        let code = "evolve (catch i swap_move 0; i < n; i swap_move i attack 1) pokeball use(i) pokecapture";
        assert_eq!(
            transcribe(code, "$"),
            "for (let i = 0; i < n; i = i + 1) { println(i) }"
        );
        assert_eq!(
            transcribe("catch f swap_move (a move_set b) mega_evolve a split b", "$"),
            "let f = (a , b) => a / b"
        );
    }

    #[test]
    fn test_every_keyword() {
        let code = "catch evolve attack defend combine split trainer battle faint wildcard legendary common \
                    pokeball pokecapture pokedex_entry move_set swap_move mega_evolve status_effects \
                    type_advantage pokecenter revive release_move use";
        assert_eq!(
            transcribe(code, "$"),
            "let for + - * / function if else null true false { } : , = => | && try catch return println"
        );

        let result = Transcriber::default().transcribe_detailed(code, "$");
        assert_eq!(result.applied.len(), 24);
        assert!(result.applied.iter().all(|h| h.count == 1));
    }

    #[test]
    fn test_currency_applied_last() {
        let code = r#"use("price: {}€", amount)"#;
        assert_eq!(transcribe(code, "€"), r#"println("price: ${}", amount)"#);
    }

    #[test]
    fn test_keywords_in_strings_kept() {
        let code = r#"use "catch them all" move_set "trainer""#;
        assert_eq!(transcribe(code, "$"), r#"println "catch them all" , "trainer""#);
    }

    #[test]
    fn test_detailed_result() {
        let engine = Transcriber::default();
        let result = engine.transcribe_detailed("catch a swap_move {}€ attack {}€", "€");
        assert!(result.changed);
        assert_eq!(result.text, "let a = ${} + ${}");
        assert_eq!(result.currency_placeholders, 2);
        let keywords: Vec<&str> = result.applied.iter().map(|h| h.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["catch", "attack", "swap_move"]);
    }

    #[test]
    fn test_unchanged() {
        let engine = Transcriber::default();
        let result = engine.transcribe_detailed("let x = 1", "$");
        assert!(!result.changed);
        assert!(result.applied.is_empty());

        let empty = engine.transcribe_detailed("", "$");
        assert_eq!(empty.text, "");
        assert!(!empty.changed);
    }

    #[test]
    fn test_naive_policy_engine() {
        let engine = Transcriber::new(QuotePolicy::Naive);
        assert_eq!(engine.policy(), QuotePolicy::Naive);
        assert_eq!(
            engine.transcribe(r#"use "x" catch"#, "$"),
            r#"println "x" let"#
        );
    }
}
