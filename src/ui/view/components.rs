//! 通用 UI 组件
//!
//! 输入框、状态徽章等

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// [组件] 带有标题和样式的输入框；值为空时显示占位文字
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = if value.is_empty() {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(value.to_string()).style(style)
    };

    let border_style = if is_focused {
        Style::default().fg(active_color)
    } else {
        Style::default()
    };

    let input = input.wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// [组件] 彩色状态徽章
pub fn badge(label: &str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}
