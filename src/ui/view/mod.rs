//! 视图层模块
//!
//! 包含主渲染入口、标签栏、状态栏；各页面在 screens.rs

pub mod components;
pub mod screens;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::router::ViewMode;
use super::state::{App, InputMode};
use crate::offer::OfferField;

pub const ACCENT: Color = Color::Rgb(0x00, 0x2D, 0x62);
pub const CYAN: Color = Color::Rgb(0x00, 0xA3, 0xC4);

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题 + 时钟
            Constraint::Min(10),   // 页面
            Constraint::Length(3), // 底部标签栏
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    // ViewMode 决定页面；Messages 下打开会话时显示聊天
    match app.view() {
        ViewMode::Home => screens::render_home(frame, app, chunks[1]),
        ViewMode::Messages => match app.router.selected_conversation() {
            Some(conversation) => screens::render_chat(frame, conversation, chunks[1]),
            None => screens::render_messages(frame, app, chunks[1]),
        },
        ViewMode::OfferRide => screens::render_offer(frame, app, chunks[1]),
        ViewMode::FindRide => screens::render_find_ride(frame, app, chunks[1]),
        ViewMode::Profile => screens::render_profile(frame, app, chunks[1]),
    }

    render_tabs(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new("🏘  NeighborLink").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, inner);

    let clock = Paragraph::new(app.clock.as_str())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right);
    frame.render_widget(clock, inner);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ViewMode::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.view().index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        InputMode::Searching => "输入关键字过滤  [Enter] 完成  [Esc] 清除",
        InputMode::EditingField(_) => "[Enter] 保存  [Esc] 取消",
        InputMode::Normal => match app.view() {
            ViewMode::Home => "[v] View All Rides  [c] Start New Chat  [1-5/Tab] 切换  [q] 退出",
            ViewMode::Messages if app.router.selected_conversation().is_some() => {
                "[Esc] 返回会话列表  [1-5/Tab] 切换  [q] 退出"
            }
            ViewMode::Messages | ViewMode::FindRide => {
                "[j/k] 导航  [Enter] 打开  [/] 搜索  [1-5/Tab] 切换  [q] 退出"
            }
            ViewMode::OfferRide => match app.focused_field() {
                OfferField::Seats => "[+/-] 调整座位  [j/k] 字段  [1-5/Tab] 切换  [q] 退出",
                OfferField::Flexible => "[Enter/Space] 切换  [j/k] 字段  [q] 退出",
                OfferField::Submit => "[Enter] 提交  [j/k] 字段  [q] 退出",
                _ => "[Enter] 编辑  [j/k] 字段  [1-5/Tab] 切换  [q] 退出",
            },
            ViewMode::Profile => "[r] 刷新邻居列表  [1-5/Tab] 切换  [q] 退出",
        },
    };

    let message = app.message.as_deref().unwrap_or("");
    let line = if message.is_empty() {
        Line::from(help_text)
    } else {
        Line::from(vec![
            Span::raw(help_text),
            Span::raw("  |  "),
            Span::styled(message, Style::default().fg(Color::Yellow)),
        ])
    };

    let help = Paragraph::new(line)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
