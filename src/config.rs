// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ============================================================================
// 全局配置操作锁
// ============================================================================

lazy_static::lazy_static! {
    /// 全局配置操作锁
    ///
    /// 保护所有 config 的读写操作，防止并发 load->modify->save 导致的数据丢失
    pub static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

pub const APP_DIR_NAME: &str = "SignTranslator";
pub const CONFIG_FILENAME: &str = "config.json";

// ============================================================================
// 输出格式
// ============================================================================

/// 翻译结果的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人类可读文本（默认）
    #[default]
    Text,
    /// JSON（供其他前端消费）
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("未知输出格式: {}", other),
        }
    }
}

// ============================================================================
// 规范化配置
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 是否启用填充词删除与缩写展开（默认启用）
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

// ============================================================================
// 应用配置
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 输出格式
    #[serde(default)]
    pub output_format: OutputFormat,
    /// 是否并排显示原文
    #[serde(default = "default_true")]
    pub show_original: bool,
    /// 是否显示手形/动作/位置/提示等详情
    #[serde(default = "default_true")]
    pub show_details: bool,
    /// 文本规范化配置
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            output_format: OutputFormat::default(),
            show_original: true,
            show_details: true,
            normalizer: NormalizerConfig::default(),
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join(CONFIG_FILENAME))
    }

    /// 从指定路径加载配置
    ///
    /// 文件不存在时返回默认配置；文件损坏时返回错误
    pub fn load_from_path(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("解析配置文件失败 {:?}: {}", path, e))?;
        tracing::info!("配置加载成功");
        Ok(config)
    }

    /// 原子写入：先写临时文件，再替换目标文件
    ///
    /// 目标已存在时先改名为 `.bak`，替换失败则还原
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("写入配置: {:?}", path);

        if let Some(parent) = path.parent() {
            io_step("创建配置目录", std::fs::create_dir_all(parent))?;
        }

        let temp_path = path.with_extension("json.tmp");
        let backup_path = path.with_extension("json.bak");
        io_step("写入临时配置", std::fs::write(&temp_path, &content))?;

        let had_previous = path.exists();
        if had_previous {
            let _ = std::fs::remove_file(&backup_path);
            io_step("备份现有配置", std::fs::rename(path, &backup_path))?;
        }

        if let Err(e) = io_step("替换配置文件", std::fs::rename(&temp_path, path)) {
            if had_previous {
                let _ = io_step("还原备份配置", std::fs::rename(&backup_path, path));
            }
            return Err(e);
        }

        let _ = std::fs::remove_file(&backup_path);
        tracing::info!("配置已写入");
        Ok(())
    }

    /// 按键名修改单个配置项
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" => self.output_format = value.parse()?,
            "show_original" => self.show_original = parse_bool(value)?,
            "show_details" => self.show_details = parse_bool(value)?,
            "normalizer.enabled" => self.normalizer.enabled = parse_bool(value)?,
            other => anyhow::bail!("未知配置项: {}", other),
        }
        Ok(())
    }
}

/// 记录失败的文件操作并转为带步骤说明的错误
fn io_step<T>(step: &str, result: std::io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        tracing::error!("{}失败: {}", step, e);
        anyhow::anyhow!("{}失败: {}", step, e)
    })
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => anyhow::bail!("无效布尔值: {}", other),
    }
}

/// 在配置锁保护下执行 load -> modify -> save
pub fn mutate_config_at<F>(path: &Path, mutator: F) -> Result<AppConfig>
where
    F: FnOnce(&mut AppConfig) -> Result<()>,
{
    let _guard = CONFIG_LOCK
        .lock()
        .map_err(|e| anyhow::anyhow!("获取配置锁失败: {}", e))?;

    let mut config = AppConfig::load_from_path(path)?;
    mutator(&mut config)?;
    config.save_to_path(path)?;

    Ok(config)
}
