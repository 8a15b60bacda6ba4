pub mod config;
pub mod display;
pub mod sign;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use config::{AppConfig, OutputFormat, CONFIG_LOCK};
use display::RenderOptions;
use sign::{SignResolver, TextNormalizer};

// ================== 命令行定义 ==================

#[derive(Debug, Parser)]
#[command(
    name = "sign-translator",
    version,
    about = "Convert spoken or typed English into ASL sign instructions"
)]
struct Cli {
    /// 日志详细程度（-v: info, -vv: debug）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 使用指定配置文件（默认位于系统配置目录）
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate text into a sign sequence (reads stdin when no text is given)
    Translate {
        text: Vec<String>,
        /// Output format: text or json
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Do not print the original text
        #[arg(long)]
        no_original: bool,
        /// Only print one line per sign
        #[arg(long)]
        brief: bool,
        /// Skip filler removal and contraction expansion
        #[arg(long)]
        raw: bool,
    },
    /// Print the normalized form of the text
    Normalize { text: Vec<String> },
    /// List every word and phrase in the sign dictionary
    Words,
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration as JSON
    Show,
    /// Write the default configuration to disk
    Init,
    /// Set a single value, e.g. `config set output_format json`
    Set { key: String, value: String },
}

// ================== 配置读写 ==================

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => AppConfig::config_path(),
    }
}

fn load_persisted_config(path: &Path) -> Result<AppConfig> {
    let _guard = CONFIG_LOCK
        .lock()
        .map_err(|e| anyhow::anyhow!("获取配置锁失败: {}", e))?;
    AppConfig::load_from_path(path)
}

// ================== 输入 ==================

/// 拼接命令行文本；为空时从标准输入读取
fn read_input(text: Vec<String>) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    // 日志写到 stderr，stdout 只输出翻译结果
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// ================== 入口 ==================

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = resolve_config_path(cli.config)?;

    match cli.command {
        Command::Translate {
            text,
            format,
            no_original,
            brief,
            raw,
        } => {
            let config = load_persisted_config(&config_path)?;
            let input = read_input(text)?;

            let normalizer = if raw || !config.normalizer.enabled {
                TextNormalizer::without_rules()
            } else {
                TextNormalizer::new()
            };
            let resolver = SignResolver::new(normalizer);
            let result = resolver.translate(&input);

            let options = RenderOptions {
                format: format.unwrap_or(config.output_format),
                show_original: config.show_original && !no_original,
                show_details: config.show_details && !brief,
            };
            print!("{}", display::render(&result, &options)?);
            if options.format == OutputFormat::Json {
                println!();
            }
        }
        Command::Normalize { text } => {
            let input = read_input(text)?;
            println!("{}", sign::normalize(&input));
        }
        Command::Words => {
            for word in sign::available_words() {
                println!("{}", word);
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Path => println!("{}", config_path.display()),
            ConfigAction::Show => {
                let config = load_persisted_config(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init => {
                let _guard = CONFIG_LOCK
                    .lock()
                    .map_err(|e| anyhow::anyhow!("获取配置锁失败: {}", e))?;
                if config_path.exists() {
                    anyhow::bail!("配置文件已存在: {}", config_path.display());
                }
                AppConfig::new().save_to_path(&config_path)?;
                println!("{}", config_path.display());
            }
            ConfigAction::Set { key, value } => {
                let config =
                    config::mutate_config_at(&config_path, |config| config.set_field(&key, &value))?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}
