use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::models::{Portfolio, PortfolioData};

/// 内置示例内容
const BUILTIN_CONTENT: &str = include_str!("../assets/portfolio.toml");

/// 内容来源
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    /// 命令行显式指定
    Explicit(PathBuf),
    /// 数据目录下的 portfolio.toml
    DataDir(PathBuf),
    Builtin,
}

/// 按优先级决定内容来源：显式路径 > 数据目录文件 > 内置示例
pub fn resolve_source(explicit: Option<&Path>, data_file: Option<&Path>) -> ContentSource {
    if let Some(path) = explicit {
        return ContentSource::Explicit(path.to_path_buf());
    }
    match data_file {
        Some(path) if path.exists() => ContentSource::DataDir(path.to_path_buf()),
        _ => ContentSource::Builtin,
    }
}

/// 加载内容
pub fn load_portfolio(source: &ContentSource) -> Result<Portfolio> {
    let data = match source {
        ContentSource::Explicit(path) => {
            if !path.exists() {
                return Err(Error::ContentNotFound(path.clone()));
            }
            read_data(path)?
        }
        ContentSource::DataDir(path) => read_data(path)?,
        ContentSource::Builtin => toml::from_str::<PortfolioData>(BUILTIN_CONTENT)?,
    };

    let portfolio = Portfolio::from_data(data)?;
    info!(
        "event=content_loaded module=storage source={:?} projects={} articles={}",
        source,
        portfolio.projects.len(),
        portfolio.articles.len()
    );
    Ok(portfolio)
}

/// 导出内容到TOML文件
pub fn save_portfolio(portfolio: &Portfolio, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&portfolio.to_data())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    info!(
        "event=content_exported module=storage path={}",
        path.display()
    );
    Ok(())
}

fn read_data(path: &Path) -> Result<PortfolioData> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::portfolio;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_content_loads() {
        let portfolio = load_portfolio(&ContentSource::Builtin).unwrap();

        assert_eq!(portfolio.profile.name, "John Doe");
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.articles.len(), 3);
        assert_eq!(portfolio.projects[1].id, "project-2");
        assert_eq!(portfolio.articles[0].published_label(), "1/15/2024");
    }

    #[test]
    fn test_resolve_source_precedence() {
        let dir = tempdir().unwrap();
        let data_file = dir.path().join("portfolio.toml");
        let explicit = dir.path().join("custom.toml");

        assert_eq!(resolve_source(None, None), ContentSource::Builtin);
        assert_eq!(
            resolve_source(None, Some(data_file.as_path())),
            ContentSource::Builtin
        );

        fs::write(&data_file, "").unwrap();
        assert_eq!(
            resolve_source(None, Some(data_file.as_path())),
            ContentSource::DataDir(data_file.clone())
        );
        assert_eq!(
            resolve_source(Some(explicit.as_path()), Some(data_file.as_path())),
            ContentSource::Explicit(explicit)
        );
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let result = load_portfolio(&ContentSource::Explicit(path.clone()));
        assert!(matches!(result, Err(Error::ContentNotFound(p)) if p == path));
    }

    #[test]
    fn test_export_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("portfolio.toml");

        save_portfolio(&portfolio(), &path).unwrap();
        let loaded = load_portfolio(&ContentSource::Explicit(path)).unwrap();

        assert_eq!(loaded.to_data().projects, portfolio().to_data().projects);
        assert_eq!(loaded.articles, portfolio().articles);
        assert_eq!(loaded.profile, portfolio().profile);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[profile\nname = ").unwrap();

        let result = load_portfolio(&ContentSource::DataDir(path));
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
