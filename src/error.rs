//! 错误类型定义

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// folio 统一错误类型
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse content file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize content: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    #[error("content file `{}` does not exist", .0.display())]
    ContentNotFound(PathBuf),

    #[error("unable to locate the user data directory")]
    DataDirUnavailable,

    #[error("failed to start logger: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
