// PokeScript 命令行 - 转译关键字源码并输出
//
// 用法: pokescript [--currency <符号> | --auto] [--naive] [--detailed] [文件]
// 未给出文件时从标准输入读取
use anyhow::{Context, Result};
use clap::Parser;
use pokescript_lib::locale::{CurrencyResolver, CurrencyTable, GeoTable, IpifyResolver};
use pokescript_lib::{AppConfig, QuotePolicy, Transcriber};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 转译 PokeScript 关键字源码
#[derive(Parser, Debug)]
#[command(name = "pokescript", version, about)]
struct CliArgs {
    /// 货币符号（如 €、$、zł）
    #[arg(short, long, value_name = "SYMBOL", conflicts_with = "auto")]
    currency: Option<String>,

    /// 根据公网 IP 自动解析货币符号
    #[arg(long)]
    auto: bool,

    /// 使用朴素引号计数（不识别 \"）
    #[arg(long)]
    naive: bool,

    /// 输出 JSON 格式的详细结果
    #[arg(long)]
    detailed: bool,

    /// 输入文件，省略或为 `-` 时读取标准输入
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl CliArgs {
    /// 输入文件路径，`-` 视为标准输入
    fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// 根据 IP 自动解析货币符号
async fn resolve_currency(config: &AppConfig) -> Result<String> {
    let table = CurrencyTable::load_or_builtin(config.currency_table.as_deref())?;

    let symbol = match &config.geo_table {
        Some(path) => {
            let resolver = CurrencyResolver::new(
                IpifyResolver::new(&config.ip_service_url, config.request_timeout_secs),
                GeoTable::load(path)?,
            );
            resolver.resolve_currency(table.records()).await?
        }
        None => {
            let resolver = CurrencyResolver::online(
                &config.ip_service_url,
                &config.geo_endpoint,
                config.request_timeout_secs,
            );
            resolver.resolve_currency(table.records()).await?
        }
    };

    tracing::info!("自动解析货币符号: {}", symbol);
    Ok(symbol)
}

async fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取输入文件: {:?}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 日志输出到 stderr，stdout 只输出转译结果
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("加载配置失败，使用默认配置: {}", e);
        AppConfig::default()
    });

    let currency = match (&args.currency, args.auto) {
        (Some(symbol), _) => symbol.clone(),
        (None, true) => resolve_currency(&config).await?,
        (None, false) => config
            .default_currency()
            .ok_or_else(|| anyhow::anyhow!("未指定货币符号：请使用 --currency 或 --auto"))?,
    };

    let code = read_input(args.input_path()).await?;

    let policy = if args.naive {
        QuotePolicy::Naive
    } else {
        config.quote_policy
    };
    let transcriber = Transcriber::new(policy);

    if args.detailed {
        let result = transcriber.transcribe_detailed(&code, &currency);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", transcriber.transcribe(&code, &currency));
    }

    Ok(())
}
