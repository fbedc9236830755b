//! 文件日志
//!
//! 终端由 TUI 占用，日志只写文件：`<data_dir>/folio/logs/folio_*.log`，
//! 按大小滚动，保留有限数量。

use std::fs;
use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::error::Result;

const LOG_FILE_BASENAME: &str = "folio";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// 初始化日志，返回的 handle 需保持存活直到进程退出
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    fs::create_dir_all(log_dir)?;

    let handle = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=app_start module=logging platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(handle)
}
