//! 视图层模块
//!
//! 包含主渲染入口和各标签页视图

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use super::navigation::{Tab, ViewState};
use super::state::App;
use crate::models::Project;
use components::{badges, card, key_hint, render_dialog_framework};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 页头
            Constraint::Length(3), // 标签栏
            Constraint::Min(6),    // 内容
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);

    match &app.view {
        ViewState::About => render_about(frame, app, chunks[2]),
        ViewState::Projects => render_projects(frame, app, chunks[2]),
        ViewState::Articles => render_articles(frame, app, chunks[2]),
        ViewState::Contact => render_contact(frame, app, chunks[2]),
        ViewState::ProjectDetail(project) => render_project_detail(frame, project, chunks[2]),
    }

    render_help(frame, app, chunks[3]);

    if app.show_help {
        render_help_dialog(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let profile = &app.portfolio.profile;

    let mut contacts = Vec::new();
    contacts.extend(key_hint("e", "Email"));
    contacts.extend(key_hint("l", "LinkedIn"));
    contacts.extend(key_hint("g", "GitHub"));

    let lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            profile.headline.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(contacts).centered(),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.view.highlighted_tab().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let profile = &app.portfolio.profile;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(area);

    let mut paragraphs = Vec::new();
    for (i, text) in profile.about.iter().enumerate() {
        if i > 0 {
            paragraphs.push(Line::default());
        }
        paragraphs.push(Line::from(text.as_str()));
    }

    let about = Paragraph::new(paragraphs)
        .block(card("About Me"))
        .wrap(Wrap { trim: true });
    frame.render_widget(about, chunks[0]);

    let skills = Paragraph::new(badges(&profile.skills, Color::Magenta))
        .block(card("Skills"))
        .wrap(Wrap { trim: true });
    frame.render_widget(skills, chunks[1]);
}

fn render_projects(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .portfolio
        .projects
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    project.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
                badges(&project.technologies, Color::Green),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(card("Projects"))
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.portfolio.projects.is_empty() {
        state.select(Some(app.project_cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_project_detail(frame: &mut Frame, project: &Project, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(key_hint("Esc", "← Back to Projects"))),
        chunks[0],
    );

    let mut links = Vec::new();
    if project.demo_url.is_some() {
        links.extend(key_hint("d", "Live Demo"));
    }
    if project.source_url.is_some() {
        links.extend(key_hint("s", "Source Code"));
    }

    let mut lines = vec![
        Line::from(project.long_description.as_str()),
        Line::default(),
        Line::from(Span::styled(
            "Technologies Used",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        badges(&project.technologies, Color::Green),
    ];
    if !links.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(links));
    }

    let detail = Paragraph::new(lines)
        .block(card(&project.title))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, chunks[1]);
}

fn render_articles(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .portfolio
        .articles
        .iter()
        .map(|article| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    article.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("{}  ·  {}", article.published_label(), article.read_time),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(key_hint("Enter", "Read on Medium")),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(card("Articles"))
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.portfolio.articles.is_empty() {
        state.select(Some(app.article_cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let profile = &app.portfolio.profile;

    let mut actions = Vec::new();
    actions.extend(key_hint("e", "Send Email"));
    actions.extend(key_hint("l", "Connect on LinkedIn"));

    let lines = vec![
        Line::from(Span::styled(
            profile.contact_blurb.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(actions),
        Line::default(),
        Line::from(profile.availability.as_str()).centered(),
    ];

    let contact = Paragraph::new(lines)
        .block(card("Get In Touch"))
        .wrap(Wrap { trim: true });
    frame.render_widget(contact, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.view {
        ViewState::About | ViewState::Contact => {
            "[Tab/←→/1-4] switch  [?] help  [q] quit".to_string()
        }
        ViewState::Projects => {
            "[j/k] select  [Enter] view details  [Tab/1-4] switch  [q] quit".to_string()
        }
        ViewState::Articles => {
            "[j/k] select  [Enter] read article  [Tab/1-4] switch  [q] quit".to_string()
        }
        ViewState::ProjectDetail(project) => detail_help(project),
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// 详情页帮助行，只列出项目实际拥有的链接
fn detail_help(project: &Project) -> String {
    let mut text = String::from("[Esc] back  ");
    if project.demo_url.is_some() {
        text.push_str("[d] live demo  ");
    }
    if project.source_url.is_some() {
        text.push_str("[s] source  ");
    }
    text.push_str("[Tab/1-4] switch  [q] quit");
    text
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "Keys");

    let bindings = [
        ("Tab / →", "next tab"),
        ("Shift-Tab / ←", "previous tab"),
        ("1-4", "jump to tab"),
        ("j / k", "move in list"),
        ("Enter", "open project / article"),
        ("Esc / b", "back to projects"),
        ("d / s", "live demo / source code"),
        ("e / l / g", "email / LinkedIn / GitHub"),
        ("?", "close help"),
        ("q", "quit"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:<16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*desc),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
