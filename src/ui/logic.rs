//! 业务逻辑处理 (Update/Dispatch)
//!
//! Action 在这里变成视图状态转移、光标移动或外部链接命令

use std::rc::Rc;

use log::debug;

use super::actions::{Action, Command};
use super::navigation::{Tab, ViewState};
use super::state::App;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Option<Command> {
        debug!("event=dispatch module=ui action={:?} view={:?}", action, self.view.active_tab());

        match action {
            Action::Quit => return Some(Command::Quit),
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::NextTab => self.go_to_tab(self.view.highlighted_tab().next()),
            Action::PrevTab => self.go_to_tab(self.view.highlighted_tab().prev()),
            Action::GoToTab(tab) => self.go_to_tab(tab),

            Action::CursorUp => self.move_up(),
            Action::CursorDown => self.move_down(),
            Action::Activate => return self.activate(),
            Action::Back => self.back_to_projects(),

            Action::OpenDemo => return self.open_project_link(LinkKind::Demo),
            Action::OpenSource => return self.open_project_link(LinkKind::Source),
            Action::OpenEmail => return Some(Command::OpenLink(self.portfolio.profile.mailto())),
            Action::OpenLinkedIn => {
                return Some(Command::OpenLink(self.portfolio.profile.linkedin_url.clone()));
            }
            Action::OpenGithub => {
                return Some(Command::OpenLink(self.portfolio.profile.github_url.clone()));
            }
        }
        None
    }

    // ============ 导航相关 ============

    fn go_to_tab(&mut self, tab: Tab) {
        self.view.set_active_tab(tab);
        self.message = None;
    }

    /// 选择项目并进入详情页
    pub fn open_project(&mut self, index: usize) {
        if let Some(project) = self.portfolio.project(index) {
            let project = Rc::clone(project);
            self.project_cursor = index;
            self.message = None;
            self.view.select_project(project);
        }
    }

    fn back_to_projects(&mut self) {
        if matches!(self.view, ViewState::ProjectDetail(_)) {
            self.view.return_to_project_list();
            self.message = None;
        }
    }

    fn activate(&mut self) -> Option<Command> {
        match self.view {
            ViewState::Projects => {
                self.open_project(self.project_cursor);
                None
            }
            ViewState::Articles => self
                .cursor_article()
                .map(|article| Command::OpenLink(article.url.clone())),
            _ => None,
        }
    }

    // ============ 列表光标 ============

    fn list_len(&self) -> usize {
        match self.view {
            ViewState::Projects => self.portfolio.projects.len(),
            ViewState::Articles => self.portfolio.articles.len(),
            _ => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.view {
            ViewState::Projects => Some(&mut self.project_cursor),
            ViewState::Articles => Some(&mut self.article_cursor),
            _ => None,
        }
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            if *cursor > 0 {
                *cursor -= 1;
            }
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        let len = self.list_len();
        if let Some(cursor) = self.cursor_mut() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    // ============ 外部链接 ============

    fn open_project_link(&mut self, kind: LinkKind) -> Option<Command> {
        let project = self.view.selected_project()?;
        let url = match kind {
            LinkKind::Demo => project.demo_url.clone(),
            LinkKind::Source => project.source_url.clone(),
        };

        match url {
            Some(url) => Some(Command::OpenLink(url)),
            None => {
                self.message = Some(format!("{} has no {}", project.title, kind.label()));
                None
            }
        }
    }

    /// 记录链接打开结果
    pub fn report_link(&mut self, url: &str, result: Result<(), String>) {
        self.message = Some(match result {
            Ok(()) => format!("Opened {url}"),
            Err(err) => format!("Failed to open {url}: {err}"),
        });
    }
}

#[derive(Debug, Clone, Copy)]
enum LinkKind {
    Demo,
    Source,
}

impl LinkKind {
    fn label(self) -> &'static str {
        match self {
            LinkKind::Demo => "live demo",
            LinkKind::Source => "source code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::portfolio;
    use crate::ui::navigation::ActiveTab;

    fn app() -> App {
        App::new(portfolio())
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().dispatch(Action::Quit), Some(Command::Quit));
    }

    #[test]
    fn test_next_tab_wraps_and_prev_tab() {
        let mut app = app();
        app.dispatch(Action::GoToTab(Tab::Contact));
        app.dispatch(Action::NextTab);
        assert_eq!(app.view, ViewState::About);

        app.dispatch(Action::PrevTab);
        assert_eq!(app.view, ViewState::Contact);
    }

    #[test]
    fn test_next_tab_from_detail_starts_at_projects() {
        let mut app = app();
        app.open_project(0);
        app.dispatch(Action::NextTab);
        assert_eq!(app.view, ViewState::Articles);
        assert!(app.view.selected_project().is_none());
    }

    #[test]
    fn test_cursor_clamps() {
        let mut app = app();
        app.dispatch(Action::GoToTab(Tab::Projects));

        app.dispatch(Action::CursorUp);
        assert_eq!(app.project_cursor, 0);

        for _ in 0..10 {
            app.dispatch(Action::CursorDown);
        }
        assert_eq!(app.project_cursor, 2);

        app.dispatch(Action::GoToTab(Tab::Articles));
        for _ in 0..10 {
            app.dispatch(Action::CursorDown);
        }
        assert_eq!(app.article_cursor, 1);
        assert_eq!(app.project_cursor, 2);
    }

    #[test]
    fn test_activate_project_then_back() {
        let mut app = app();
        app.dispatch(Action::GoToTab(Tab::Projects));
        app.dispatch(Action::CursorDown);

        assert_eq!(app.dispatch(Action::Activate), None);
        assert_eq!(app.view.active_tab(), ActiveTab::ProjectDetail);
        let selected = app.view.selected_project().unwrap();
        assert!(Rc::ptr_eq(selected, &app.portfolio.projects[1]));

        app.dispatch(Action::Back);
        assert_eq!(app.view, ViewState::Projects);
        assert_eq!(app.project_cursor, 1);
    }

    #[test]
    fn test_back_outside_detail_is_noop() {
        let mut app = app();
        app.dispatch(Action::GoToTab(Tab::Articles));
        app.dispatch(Action::Back);
        assert_eq!(app.view, ViewState::Articles);
    }

    #[test]
    fn test_activate_article_opens_url() {
        let mut app = app();
        app.dispatch(Action::GoToTab(Tab::Articles));
        app.dispatch(Action::CursorDown);

        assert_eq!(
            app.dispatch(Action::Activate),
            Some(Command::OpenLink("https://example.com/article-2".to_string()))
        );
        assert_eq!(app.view, ViewState::Articles);
    }

    #[test]
    fn test_project_links() {
        let mut app = app();
        app.open_project(1);
        assert_eq!(
            app.dispatch(Action::OpenDemo),
            Some(Command::OpenLink("https://demo.example.com".to_string()))
        );
        assert_eq!(
            app.dispatch(Action::OpenSource),
            Some(Command::OpenLink("https://github.com/janeroe/two".to_string()))
        );
    }

    #[test]
    fn test_missing_project_link_sets_message() {
        let mut app = app();
        app.open_project(0);

        assert_eq!(app.dispatch(Action::OpenDemo), None);
        assert_eq!(
            app.message.as_deref(),
            Some("Title project-1 has no live demo")
        );
    }

    #[test]
    fn test_contact_links() {
        let mut app = app();
        assert_eq!(
            app.dispatch(Action::OpenEmail),
            Some(Command::OpenLink("mailto:jane@example.com".to_string()))
        );
        assert_eq!(
            app.dispatch(Action::OpenGithub),
            Some(Command::OpenLink("https://github.com/janeroe".to_string()))
        );
        assert_eq!(
            app.dispatch(Action::OpenLinkedIn),
            Some(Command::OpenLink("https://linkedin.com/in/janeroe".to_string()))
        );
    }

    #[test]
    fn test_toggle_help() {
        let mut app = app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.show_help);
        app.dispatch(Action::ToggleHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn test_report_link() {
        let mut app = app();
        app.report_link("https://x.dev", Err("no browser".to_string()));
        assert_eq!(
            app.message.as_deref(),
            Some("Failed to open https://x.dev: no browser")
        );
    }
}
