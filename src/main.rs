//! bqbsearch 命令行入口
//! 仅负责参数解析与终端展示，加载/归一化/搜索逻辑全部在库中

use std::io::Write;

use anyhow::{Context, Result};
use bqbsearch::{
    accept_keyword, category_index, display_name, init_global_loader, load_catalog, search_with_base,
    ConfigManager, DisplayPage, GlobalConfig, LoadReport,
};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

/// 表情包搜索（数据源：ChineseBQB）
#[derive(Parser, Debug)]
#[command(name = "bqbsearch", version, about = "🤪 表情包搜索", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// 远程索引地址
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// 相对资源路径前缀
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// HTTP 超时（秒）
    #[arg(long, global = true, default_value_t = 15)]
    timeout: u64,

    /// 最多展示的结果数
    #[arg(long, global = true, default_value_t = 50)]
    limit: usize,

    /// 索引缓存有效期（秒）
    #[arg(long, global = true, default_value_t = 3600)]
    ttl: u64,

    /// 提取热门分类时检查的记录数
    #[arg(long, global = true, default_value_t = 2000)]
    category_sample: usize,

    /// 最多展示的热门分类数
    #[arg(long, global = true, default_value_t = 15)]
    category_limit: usize,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 按关键词搜索名称或分类（不区分大小写）
    Search {
        keyword: String,

        /// 以 JSON 输出结果
        #[arg(long)]
        json: bool,
    },

    /// 列出热门分类
    Categories,

    /// 显示索引统计信息
    Stats,

    /// 交互式搜索（默认）
    Interactive,
}

impl Cli {
    fn to_config(&self) -> GlobalConfig {
        let mut builder = ConfigManager::custom()
            .http_timeout(self.timeout)
            .cache_ttl(self.ttl)
            .display_limit(self.limit)
            .category_sample(self.category_sample)
            .category_limit(self.category_limit)
            .verbose(self.verbose);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.clone());
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();
    init_logging(config.verbose);

    init_global_loader(&config)
        .await
        .context("初始化索引加载器失败")?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search { keyword, json } => run_search(&config, &keyword, json).await,
        Command::Categories => run_categories(&config).await,
        Command::Stats => run_stats(&config).await,
        Command::Interactive => run_interactive(&config).await,
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "warn,bqbsearch=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

/// 加载索引；失败时打印提示并返回 None
async fn load_or_report() -> Option<LoadReport> {
    let report = load_catalog().await;
    if let Some(notice) = &report.notice {
        eprintln!("❌ {}", notice);
    }
    let available = report.into_available();
    if available.is_none() {
        eprintln!("⚠️ 数据加载失败。可能是网络无法连接 GitHub CDN。");
    }
    available
}

async fn run_search(config: &GlobalConfig, keyword: &str, json: bool) -> Result<()> {
    let Some(keyword) = accept_keyword(keyword) else {
        eprintln!("请输入关键词");
        return Ok(());
    };

    let Some(report) = load_or_report().await else {
        return Ok(());
    };
    search_and_render(config, &report, keyword, json)
}

fn search_and_render(config: &GlobalConfig, report: &LoadReport, keyword: &str, json: bool) -> Result<()> {
    let results = search_with_base(report.records(), keyword, &config.base_url);
    let page = DisplayPage::new(results, config.display_limit);

    if json {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &page).context("输出 JSON 失败")?;
        writeln!(out)?;
        return Ok(());
    }

    render_page(&page);
    Ok(())
}

fn render_page(page: &DisplayPage) {
    if page.is_empty() {
        println!("🤔 没搜到... 试试侧边栏里的分类名？");
        return;
    }

    println!("🎉 找到 {} 张相关表情！", page.total);
    if page.truncated {
        println!("结果较多，为您展示前 {} 张。", page.shown());
    }

    for (idx, entry) in page.entries.iter().enumerate() {
        println!("{:>3}. {}  ({})", idx + 1, display_name(&entry.name), entry.category);
        println!("     [⬇️ 原图链接]({})", entry.url);
    }
}

fn render_stats(config: &GlobalConfig, report: &LoadReport) {
    println!("📚 索引加载成功！");
    println!("表情包总数：{}", report.catalog.len());
    render_categories(config, report);
}

fn render_categories(config: &GlobalConfig, report: &LoadReport) {
    let categories = category_index(&report.catalog, config.category_sample, config.category_limit);
    println!("### 🔥 热门分类");
    println!("{}", categories.join(" / "));
}

async fn run_categories(config: &GlobalConfig) -> Result<()> {
    if let Some(report) = load_or_report().await {
        render_categories(config, &report);
    }
    Ok(())
}

async fn run_stats(config: &GlobalConfig) -> Result<()> {
    if let Some(report) = load_or_report().await {
        render_stats(config, &report);
    }
    Ok(())
}

async fn run_interactive(config: &GlobalConfig) -> Result<()> {
    println!("🤪 表情包搜索");
    println!("数据源：ChineseBQB");

    let Some(report) = load_or_report().await else {
        return Ok(());
    };
    render_stats(config, &report);
    println!("👈 试试搜索 'Cat' 或 'Dog' ...（输入 :q 退出）");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("🔍 搜索> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("读取输入失败")? else {
            break;
        };
        if matches!(line.trim(), ":q" | ":quit" | "exit") {
            break;
        }
        let Some(query) = accept_keyword(&line) else {
            println!("请输入关键词");
            continue;
        };

        // 每次搜索都经过加载器，缓存过期后自动重新拉取
        let Some(report) = load_or_report().await else {
            continue;
        };
        search_and_render(config, &report, query, false)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "bqbsearch", "--ttl", "60", "--category-sample", "100", "--category-limit", "5", "categories",
        ])
        .unwrap();
        let config = cli.to_config();

        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.category_sample, 100);
        assert_eq!(config.category_limit, 5);
        assert!(matches!(cli.command, Some(Command::Categories)));
    }

    #[test]
    fn test_flag_defaults_match_config_defaults() {
        let config = Cli::try_parse_from(["bqbsearch"]).unwrap().to_config();
        let defaults = GlobalConfig::default();

        assert_eq!(config.cache_ttl, defaults.cache_ttl);
        assert_eq!(config.category_sample, defaults.category_sample);
        assert_eq!(config.category_limit, defaults.category_limit);
        assert_eq!(config.display_limit, defaults.display_limit);
    }

    #[test]
    fn test_search_keyword_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["bqbsearch", "search", " cat "]).unwrap();
        match cli.command {
            Some(Command::Search { keyword, .. }) => assert_eq!(accept_keyword(&keyword), Some(" cat ")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
