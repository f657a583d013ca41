//! Deskpad 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Deskpad 错误类型
#[derive(Debug, Error)]
pub enum DeskpadError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 序列化错误（config.toml）
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON 解析/序列化错误（todos.json）
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 数学运算错误（除零、模零）
    #[error("{0}")]
    Math(String),
}

/// Deskpad Result 类型别名
pub type Result<T> = std::result::Result<T, DeskpadError>;

impl DeskpadError {
    /// 创建数学运算错误
    pub fn math(msg: impl Into<String>) -> Self {
        Self::Math(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskpadError::math("Cannot divide by zero!");
        assert_eq!(err.to_string(), "Cannot divide by zero!");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: DeskpadError = io_err.into();
        assert!(matches!(err, DeskpadError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }
}
