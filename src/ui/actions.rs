//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::navigation::Tab;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleHelp,

    // 标签切换
    NextTab,
    PrevTab,
    GoToTab(Tab),

    // 列表
    CursorUp,
    CursorDown,
    Activate, // Enter：打开项目详情 / 文章链接
    Back,     // 详情页返回列表

    // 外部链接
    OpenDemo,
    OpenSource,
    OpenEmail,
    OpenLinkedIn,
    OpenGithub,
}

/// dispatch 产生的副作用，由主循环执行
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    OpenLink(String),
}
