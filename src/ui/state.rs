//! App 状态定义 (Model)
//!
//! 只读内容 + 视图状态 + 列表光标等界面瞬态

use super::navigation::ViewState;
use crate::models::{Article, Portfolio};

/// 应用状态
pub struct App {
    pub portfolio: Portfolio,
    pub view: ViewState,
    pub project_cursor: usize,
    pub article_cursor: usize,
    pub show_help: bool,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            view: ViewState::default(),
            project_cursor: 0,
            article_cursor: 0,
            show_help: false,
            message: None,
        }
    }

    /// 光标所在的文章
    pub fn cursor_article(&self) -> Option<&Article> {
        self.portfolio.article(self.article_cursor)
    }
}
