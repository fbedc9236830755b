//! 视图状态机 (ViewState)
//!
//! 四个可见标签页加一个隐藏的项目详情页。详情页只能通过选择项目进入，
//! 并且自身携带所选项目，因此“有选中项目 ⇔ 处于详情页”恒成立。
//!
//! | From           | Navigation               | To                         |
//! |----------------|--------------------------|----------------------------|
//! | any            | SetActiveTab(t)          | t                          |
//! | any            | SelectProject(p)         | ProjectDetail(p)           |
//! | ProjectDetail  | ReturnToProjectList      | Projects (selection clear) |

use std::rc::Rc;

use crate::models::Project;

/// 可见标签页（用户可直接切换的封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    About,
    Projects,
    Articles,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::About, Tab::Projects, Tab::Articles, Tab::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Projects => "Projects",
            Tab::Articles => "Articles",
            Tab::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::About => 0,
            Tab::Projects => 1,
            Tab::Articles => 2,
            Tab::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// 当前活动视图的标识，包含隐藏的详情页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Visible(Tab),
    ProjectDetail,
}

/// 视图状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    About,
    Projects,
    Articles,
    Contact,
    ProjectDetail(Rc<Project>),
}

/// 状态转移
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    SetActiveTab(Tab),
    SelectProject(Rc<Project>),
    ReturnToProjectList,
}

impl ViewState {
    fn of_tab(tab: Tab) -> Self {
        match tab {
            Tab::About => ViewState::About,
            Tab::Projects => ViewState::Projects,
            Tab::Articles => ViewState::Articles,
            Tab::Contact => ViewState::Contact,
        }
    }

    pub fn active_tab(&self) -> ActiveTab {
        match self {
            ViewState::About => ActiveTab::Visible(Tab::About),
            ViewState::Projects => ActiveTab::Visible(Tab::Projects),
            ViewState::Articles => ActiveTab::Visible(Tab::Articles),
            ViewState::Contact => ActiveTab::Visible(Tab::Contact),
            ViewState::ProjectDetail(_) => ActiveTab::ProjectDetail,
        }
    }

    pub fn selected_project(&self) -> Option<&Rc<Project>> {
        match self {
            ViewState::ProjectDetail(project) => Some(project),
            _ => None,
        }
    }

    /// 标签栏中高亮的可见标签；详情页归属于 Projects
    pub fn highlighted_tab(&self) -> Tab {
        match self.active_tab() {
            ActiveTab::Visible(tab) => tab,
            ActiveTab::ProjectDetail => Tab::Projects,
        }
    }

    pub fn select_project(&mut self, project: Rc<Project>) {
        self.apply(Navigation::SelectProject(project));
    }

    pub fn return_to_project_list(&mut self) {
        self.apply(Navigation::ReturnToProjectList);
    }

    /// 直接切换标签；离开详情页时选中项目随之清除
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.apply(Navigation::SetActiveTab(tab));
    }

    fn apply(&mut self, navigation: Navigation) {
        *self = reduce(std::mem::take(self), navigation);
    }
}

/// 纯函数状态转移
pub fn reduce(_state: ViewState, navigation: Navigation) -> ViewState {
    match navigation {
        Navigation::SetActiveTab(tab) => ViewState::of_tab(tab),
        Navigation::SelectProject(project) => ViewState::ProjectDetail(project),
        Navigation::ReturnToProjectList => ViewState::Projects,
    }
}
