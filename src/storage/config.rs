//! 应用配置持久化
//!
//! 管理 ~/.deskpad/config.toml（上次启动模式等）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::deskpad_dir;
use crate::error::Result;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 上次启动的模式（无子命令启动时重放）
    #[serde(default)]
    pub last_launch: Option<LastLaunch>,
}

/// 启动模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastLaunch {
    Calc,
    Todo,
}

impl LastLaunch {
    /// 显示用标签（重放提示）
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Calc => "calc",
            Self::Todo => "todo",
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    deskpad_dir().join("config.toml")
}

/// 加载配置（不存在或损坏则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    let dir = deskpad_dir();
    fs::create_dir_all(&dir)?;

    let path = config_path();
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
