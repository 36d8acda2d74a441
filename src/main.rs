use anyhow::Result;

use crate::{
    app::{config::AppConfig, state::AppState},
    repl::engine::ReplEngine,
};

mod app;
mod command;
mod core;
mod error;
mod repl;

/// 程序入口点
fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // 初始化日志记录器，RUST_LOG 优先于配置文件
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    log::info!("日志系统已初始化, court_dir={}", config.court_dir.display());

    let mut engine = ReplEngine::new(AppState::new(&config));
    log::info!("REPL 引擎已创建，即将运行...");
    engine.run()?;
    log::info!("REPL 引擎运行结束");

    Ok(())
}
