//! 通用 UI 组件
//!
//! 卡片边框、标签徽章、按键提示

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带标题的卡片边框
pub fn card(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
}

/// [组件] 一行徽章，如技术栈、技能
pub fn badges(items: &[String], color: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{item}]"),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}

/// [组件] 按键提示，如 `[d] Live Demo`
pub fn key_hint(key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("[{key}]"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {label}  ")),
    ]
}
