mod error;
mod logging;
mod models;
mod storage;
mod terminal;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use ratatui::DefaultTerminal;

use crate::error::Error;
use crate::logging::init_logging;
use crate::storage::{load_portfolio, resolve_source, save_portfolio};
use crate::ui::{App, Command, render};

/// 终端个人作品集
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// 内容文件 (TOML)，默认读取 ~/.local/share/folio/portfolio.toml 或内置示例
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// 将当前内容导出为 TOML 后退出
    #[arg(long, value_name = "PATH")]
    export_content: Option<PathBuf>,

    /// 日志级别 (error/warn/info/debug/trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 获取数据目录路径 (~/.local/share/folio/)
fn get_data_dir() -> Result<PathBuf, Error> {
    let data_dir = dirs::data_dir()
        .ok_or(Error::DataDirUnavailable)?
        .join("folio");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = get_data_dir()?;
    let _logger = init_logging(&cli.log_level, &data_dir.join("logs"))
        .context("failed to initialize logging")?;

    // 加载内容
    let data_file = data_dir.join("portfolio.toml");
    let source = resolve_source(cli.content.as_deref(), Some(data_file.as_path()));
    let portfolio = load_portfolio(&source)
        .with_context(|| format!("failed to load portfolio content from {source:?}"))?;

    if let Some(path) = &cli.export_content {
        save_portfolio(&portfolio, path)
            .with_context(|| format!("failed to export content to {}", path.display()))?;
        println!("Content exported to {}", path.display());
        return Ok(());
    }

    // 创建应用状态
    let mut app = App::new(portfolio);

    // 设置终端，_guard 离开作用域时恢复
    let (mut terminal, _guard) = terminal::enter().context("failed to initialize terminal")?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    info!("event=app_exit module=main status={}", if result.is_ok() { "ok" } else { "error" });

    result.context("terminal session failed")
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match ui::handle_key_event(app, key.code) {
                Some(Command::Quit) => break,
                Some(Command::OpenLink(url)) => open_link(app, &url),
                None => {}
            }
        }
    }
    Ok(())
}

fn open_link(app: &mut App, url: &str) {
    let result = open::that(url).map_err(|err| {
        warn!("event=open_link module=main status=error url={} err={}", url, err);
        err.to_string()
    });
    if result.is_ok() {
        info!("event=open_link module=main status=ok url={}", url);
    }
    app.report_link(url, result);
}
