//! 转译规则定义
//!
//! 包含有序关键字规则表、后置货币符号表

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::transcriber::types::{Placement, Rule};

/// 关键字规则（严格按顺序应用）
///
/// `revive → catch` 必须排在 `catch → let` 之后，否则 revive 会被二次替换为 let
pub const RULES: [Rule; 24] = [
    Rule::new("catch", "let"),
    Rule::new("evolve", "for"),
    Rule::new("attack", "+"),
    Rule::new("defend", "-"),
    Rule::new("combine", "*"),
    Rule::new("split", "/"),
    Rule::new("trainer", "function"),
    Rule::new("battle", "if"),
    Rule::new("faint", "else"),
    Rule::new("wildcard", "null"),
    Rule::new("legendary", "true"),
    Rule::new("common", "false"),
    // 代码块
    Rule::new("pokeball", "{"),
    Rule::new("pokecapture", "}"),
    // 键值对与参数
    Rule::new("pokedex_entry", ":"),
    Rule::new("move_set", ","),
    Rule::new("swap_move", "="),
    Rule::new("mega_evolve", "=>"),
    Rule::new("status_effects", "|"),
    Rule::new("type_advantage", "&&"),
    // 异常处理
    Rule::new("pokecenter", "try"),
    Rule::new("revive", "catch"),
    Rule::new("release_move", "return"),
    Rule::new("use", "println"),
];

/// 有序规则表
pub struct Rulebook {
    rules: &'static [Rule],
}

impl Rulebook {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// 按应用顺序遍历规则
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// 查找关键字对应的替换串
    pub fn lookup(&self, keyword: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|r| r.keyword == keyword)
            .map(|r| r.replacement)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Rulebook {
    fn default() -> Self {
        Self::new()
    }
}

/// 后置货币符号表
pub struct PlacementTable {
    rightside: HashSet<&'static str>,
}

impl PlacementTable {
    pub fn new() -> Self {
        let rightside: HashSet<&'static str> = [
            "€",   // 欧元
            "£",   // 英镑
            "CHF", // 瑞士法郎
            "kr",  // 丹麦/挪威/瑞典克朗
            "zł",  // 波兰兹罗提
            "Ft",  // 匈牙利福林
            "Kč",  // 捷克克朗
            "kn",  // 克罗地亚库纳
            "RSD", // 塞尔维亚第纳尔
            "лв",  // 保加利亚列弗
            "lei", // 罗马尼亚列伊
            "₽",   // 俄罗斯卢布
            "₺",   // 土耳其里拉
            "₴",   // 乌克兰格里夫纳
        ]
        .into_iter()
        .collect();

        Self { rightside }
    }

    /// 判断符号位置（NFC 归一化并去除首尾空白后比较）
    pub fn placement(&self, symbol: &str) -> Placement {
        let normalized: String = symbol.trim().nfc().collect();
        if self.rightside.contains(normalized.as_str()) {
            Placement::Rightside
        } else {
            Placement::Leftside
        }
    }

    pub fn is_rightside(&self, symbol: &str) -> bool {
        self.placement(symbol) == Placement::Rightside
    }

    /// 获取所有后置符号
    pub fn rightside_symbols(&self) -> &HashSet<&'static str> {
        &self.rightside
    }
}

impl Default for PlacementTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let book = Rulebook::new();
        let keywords: Vec<&str> = book.iter().map(|r| r.keyword).collect();
        let catch_pos = keywords.iter().position(|k| *k == "catch").unwrap();
        let revive_pos = keywords.iter().position(|k| *k == "revive").unwrap();
        assert!(catch_pos < revive_pos);
        assert_eq!(keywords.first(), Some(&"catch"));
        assert_eq!(keywords.last(), Some(&"use"));
        assert_eq!(book.len(), 24);
    }

    #[test]
    fn test_rule_table_exact() {
        let expected = [
            ("catch", "let"),
            ("evolve", "for"),
            ("attack", "+"),
            ("defend", "-"),
            ("combine", "*"),
            ("split", "/"),
            ("trainer", "function"),
            ("battle", "if"),
            ("faint", "else"),
            ("wildcard", "null"),
            ("legendary", "true"),
            ("common", "false"),
            ("pokeball", "{"),
            ("pokecapture", "}"),
            ("pokedex_entry", ":"),
            ("move_set", ","),
            ("swap_move", "="),
            ("mega_evolve", "=>"),
            ("status_effects", "|"),
            ("type_advantage", "&&"),
            ("pokecenter", "try"),
            ("revive", "catch"),
            ("release_move", "return"),
            ("use", "println"),
        ];
        let actual: Vec<(&str, &str)> = RULES.iter().map(|r| (r.keyword, r.replacement)).collect();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn test_lookup() {
        let book = Rulebook::new();
        assert_eq!(book.lookup("mega_evolve"), Some("=>"));
        assert_eq!(book.lookup("status_effects"), Some("|"));
        assert_eq!(book.lookup("pikachu"), None);
    }

    #[test]
    fn test_keywords_unique() {
        let book = Rulebook::new();
        let unique: HashSet<&str> = book.iter().map(|r| r.keyword).collect();
        assert_eq!(unique.len(), book.len());
    }

    #[test]
    fn test_placement_table() {
        let table = PlacementTable::new();
        assert_eq!(table.placement("€"), Placement::Rightside);
        assert_eq!(table.placement("CHF"), Placement::Rightside);
        assert_eq!(table.placement(" kr "), Placement::Rightside);
        assert_eq!(table.placement("$"), Placement::Leftside);
        assert_eq!(table.placement("¥"), Placement::Leftside);
        assert_eq!(table.rightside_symbols().len(), 14);
    }

    #[test]
    fn test_placement_decomposed_symbol() {
        // K + 组合用抑扬符（U+030C）归一化后等于 Kč
        let table = PlacementTable::new();
        assert!(table.is_rightside("Kc\u{30C}"));
    }
}
