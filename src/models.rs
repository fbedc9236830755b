use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{Error, Result};

/// 项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// 文章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: NaiveDate,
    pub read_time: String,
}

impl Article {
    /// 展示用日期 (m/d/yyyy)
    pub fn published_label(&self) -> String {
        self.published_at.format("%-m/%-d/%Y").to_string()
    }
}

/// 个人信息：页头、关于、联系方式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact_blurb: String,
    #[serde(default)]
    pub availability: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// 运行时内容（只读）
///
/// 项目以 `Rc` 持有，视图状态只引用，不复制。
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Rc<Project>>,
    pub articles: Vec<Article>,
}

impl Portfolio {
    /// 从文件结构构建，要求 id 唯一
    pub fn from_data(data: PortfolioData) -> Result<Self> {
        ensure_unique("project", data.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("article", data.articles.iter().map(|a| a.id.as_str()))?;

        Ok(Self {
            profile: data.profile,
            projects: data.projects.into_iter().map(Rc::new).collect(),
            articles: data.articles,
        })
    }

    pub fn to_data(&self) -> PortfolioData {
        PortfolioData {
            profile: self.profile.clone(),
            projects: self.projects.iter().map(|p| p.as_ref().clone()).collect(),
            articles: self.articles.clone(),
        }
    }

    pub fn project(&self, index: usize) -> Option<&Rc<Project>> {
        self.projects.get(index)
    }

    pub fn article(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Title {id}"),
            description: "short".to_string(),
            long_description: "long".to_string(),
            technologies: vec!["Rust".to_string()],
            demo_url: None,
            source_url: None,
        }
    }

    pub(crate) fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {id}"),
            description: "about things".to_string(),
            url: format!("https://example.com/{id}"),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            read_time: "5 min read".to_string(),
        }
    }

    pub(crate) fn profile() -> Profile {
        Profile {
            name: "Jane Roe".to_string(),
            headline: "Engineer".to_string(),
            email: "jane@example.com".to_string(),
            linkedin_url: "https://linkedin.com/in/janeroe".to_string(),
            github_url: "https://github.com/janeroe".to_string(),
            about: vec!["Hello.".to_string()],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            contact_blurb: "Say hi.".to_string(),
            availability: "Open to work.".to_string(),
        }
    }

    pub(crate) fn find_project<'a>(portfolio: &'a Portfolio, id: &str) -> Option<&'a Rc<Project>> {
        portfolio.projects.iter().find(|p| p.id == id)
    }

    pub(crate) fn portfolio() -> Portfolio {
        let mut with_links = project("project-2");
        with_links.demo_url = Some("https://demo.example.com".to_string());
        with_links.source_url = Some("https://github.com/janeroe/two".to_string());

        Portfolio::from_data(PortfolioData {
            profile: profile(),
            projects: vec![project("project-1"), with_links, project("project-3")],
            articles: vec![article("article-1"), article("article-2")],
        })
        .unwrap()
    }

    #[test]
    fn test_from_data_keeps_order() {
        let portfolio = portfolio();
        let ids: Vec<&str> = portfolio.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["project-1", "project-2", "project-3"]);
        assert_eq!(find_project(&portfolio, "project-2").unwrap().title, "Title project-2");
        assert!(find_project(&portfolio, "missing").is_none());
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let data = PortfolioData {
            profile: profile(),
            projects: vec![project("dup"), project("dup")],
            articles: Vec::new(),
        };

        match Portfolio::from_data(data) {
            Err(Error::DuplicateId { kind, id }) => {
                assert_eq!(kind, "project");
                assert_eq!(id, "dup");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_article_id_rejected() {
        let data = PortfolioData {
            profile: profile(),
            projects: Vec::new(),
            articles: vec![article("a"), article("b"), article("a")],
        };

        assert!(matches!(
            Portfolio::from_data(data),
            Err(Error::DuplicateId { kind: "article", .. })
        ));
    }

    #[test]
    fn test_published_label() {
        let mut article = article("a");
        assert_eq!(article.published_label(), "1/15/2024");

        article.published_at = NaiveDate::from_ymd_opt(2023, 12, 8).unwrap();
        assert_eq!(article.published_label(), "12/8/2023");
    }

    #[test]
    fn test_mailto() {
        assert_eq!(profile().mailto(), "mailto:jane@example.com");
    }
}
