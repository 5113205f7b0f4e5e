//! 货币记录表
//!
//! 内置表随 crate 发布，也可从 JSON 文件加载

use std::path::Path;

use anyhow::{Context, Result};

use crate::locale::types::{find_record, CurrencyRecord};

const BUILTIN_TABLE: &str = include_str!("../../data/currencies.json");

/// 货币记录表
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    records: Vec<CurrencyRecord>,
}

impl CurrencyTable {
    pub fn new(records: Vec<CurrencyRecord>) -> Self {
        Self { records }
    }

    /// 内置记录表
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TABLE).context("内置货币表格式错误")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CurrencyRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("加载货币表: {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取货币表: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("无法解析货币表: {:?}", path))
    }

    /// 指定路径时加载文件，否则使用内置表
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }

    pub fn find(&self, country: &str) -> Option<&CurrencyRecord> {
        find_record(&self.records, country)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
