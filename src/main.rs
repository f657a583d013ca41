mod calc;
mod cli;
mod error;
mod storage;

use clap::Parser;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 确定要执行的命令
    let (command, from_replay) = match cli.command {
        Some(cmd) => (cmd, false),
        None => {
            // 无子命令：重放上次启动模式，默认 todo
            let config = storage::config::load_config();
            match config.last_launch {
                Some(ll) => {
                    eprintln!("deskpad → deskpad {}", ll.display_label());
                    (ll.to_command(), true)
                }
                None => (Commands::Todo, true),
            }
        }
    };

    // 如果是新的启动模式命令（非重放），保存到配置
    if !from_replay {
        let mut config = storage::config::load_config();
        config.last_launch = Some(command.to_last_launch());
        let _ = storage::config::save_config(&config);
    }

    if let Err(e) = dispatch(command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// 统一调度
fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Calc => cli::calc::execute(),
        Commands::Todo => cli::todo::execute(),
    }
}
