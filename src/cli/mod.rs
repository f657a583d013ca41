//! CLI 模块

pub mod calc;
pub mod todo;

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::storage::config::LastLaunch;

#[derive(Parser)]
#[command(name = "deskpad")]
#[command(version)]
#[command(about = "Desk companion: calculator + to-do list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive calculator
    Calc,
    /// Start the interactive to-do list manager
    Todo,
}

impl Commands {
    /// 转换为可持久化的启动模式
    pub fn to_last_launch(&self) -> LastLaunch {
        match self {
            Self::Calc => LastLaunch::Calc,
            Self::Todo => LastLaunch::Todo,
        }
    }
}

impl LastLaunch {
    /// 转换回待执行的命令
    pub fn to_command(self) -> Commands {
        match self {
            Self::Calc => Commands::Calc,
            Self::Todo => Commands::Todo,
        }
    }
}

/// 打印提示并读取一行输入（去除首尾空白）
///
/// stdin 到达 EOF 时返回 None，调用方据此退出循环。
pub(crate) fn read_input(prompt: &str) -> crate::error::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
