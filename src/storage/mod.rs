//! 数据存储模块
//!
//! 所有持久化数据放在 ~/.deskpad/ 目录下：
//! - config.toml  应用配置（上次启动模式等）
//! - todos.json   待办任务数据

pub mod config;
pub mod tasks;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// 获取 ~/.deskpad/ 目录路径
pub fn deskpad_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".deskpad")
}

/// 确保 ~/.deskpad/ 目录存在
pub fn ensure_deskpad_dir() -> Result<PathBuf> {
    let path = deskpad_dir();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// 从 JSON 文件加载反序列化数据
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 将数据序列化后保存到 JSON 文件
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}
