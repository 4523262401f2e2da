//! 各页面的渲染函数

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::components::{badge, render_input_widget};
use super::{ACCENT, CYAN};
use crate::models::{
    ACTIVITY, ActivityStatus, CURRENT_USER, Conversation, RideStatus, Sender,
};
use crate::offer::OfferField;
use crate::ui::state::{App, InputMode, RemoteProfiles};

const CONFIRMED: Color = Color::Rgb(0x28, 0xA7, 0x45);
const ALERT: Color = Color::Rgb(0xBD, 0x21, 0x30);

fn highlight() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome Home!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.clock.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let mut lines = Vec::new();
    for item in ACTIVITY {
        let status = match item.status {
            ActivityStatus::Confirmed => badge("Confirmed", CONFIRMED),
            ActivityStatus::Pending => badge("Pending", Color::DarkGray),
        };
        lines.push(Line::from(Span::styled(
            item.when,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.route));
        lines.push(Line::from(vec![status, Span::raw(" "), Span::raw(item.with)]));
        lines.push(Line::default());
    }
    let activity = Paragraph::new(lines)
        .block(Block::default().title("Your Activity").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(activity, chunks[1]);

    let actions = Paragraph::new(Line::from(vec![
        badge("[v] View All Rides", ACCENT),
        Span::raw("   "),
        badge("[c] Start New Chat", ACCENT),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, chunks[2]);
}

fn search_and_list_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render_messages(frame: &mut Frame, app: &App, area: Rect) {
    let (search_area, list_area) = search_and_list_areas(area);
    render_input_widget(
        frame,
        search_area,
        "Search",
        &app.search,
        "Search messages... ([/])",
        app.mode == InputMode::Searching,
        Color::Yellow,
    );

    let rooms = app.visible_conversations();
    let items: Vec<ListItem> = rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            let mut title = vec![
                Span::styled(room.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(room.time, Style::default().fg(Color::Gray)),
            ];
            if room.unread {
                title.push(Span::raw(" "));
                title.push(badge("New", ALERT));
            }
            let item = ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(
                    format!("  {}", room.last_message),
                    Style::default().fg(Color::Gray),
                )),
            ]);
            if i == app.selected_index {
                item.style(highlight())
            } else {
                item
            }
        })
        .collect();

    let title = if rooms.is_empty() {
        "Messages (no matches)"
    } else {
        "Messages"
    };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    let mut state = ListState::default();
    if !rooms.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, list_area, &mut state);
}

pub fn render_chat(frame: &mut Frame, conversation: &Conversation, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    for message in conversation.messages {
        let line = match message.sender {
            Sender::Me => Line::from(Span::styled(
                format!(" {} ", message.text),
                Style::default().fg(Color::Black).bg(CYAN),
            ))
            .alignment(Alignment::Right),
            Sender::Other => Line::from(Span::styled(
                format!(" {} ", message.text),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )),
        };
        lines.push(line);
        lines.push(Line::default());
    }

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!("← {}", conversation.name))
                .borders(Borders::ALL),
        );
    frame.render_widget(messages, chunks[0]);

    render_input_widget(
        frame,
        chunks[1],
        "Message",
        "",
        "Type a message... (sending is not available yet)",
        false,
        Color::Yellow,
    );
}

pub fn render_offer(frame: &mut Frame, app: &App, area: Rect) {
    let constraints: Vec<Constraint> = OfferField::ALL
        .iter()
        .map(|field| {
            if field.is_text() {
                Constraint::Length(3)
            } else {
                Constraint::Length(1)
            }
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let block = Block::default().title("Offer a Ride").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = app.focused_field();
    for (field, chunk) in OfferField::ALL.iter().zip(chunks.iter()) {
        let is_focused = *field == focused;
        let marker = if is_focused { "▶ " } else { "  " };
        let style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        match field {
            OfferField::Flexible => {
                let toggle = if app.offer.flexible {
                    badge("ON", CONFIRMED)
                } else {
                    badge("OFF", Color::DarkGray)
                };
                let line = Line::from(vec![
                    Span::styled(format!("{marker}{}  ", field.label()), style),
                    toggle,
                ]);
                frame.render_widget(Paragraph::new(line), *chunk);
            }
            OfferField::Seats => {
                let line = Line::from(vec![
                    Span::styled(format!("{marker}{}: ", field.label()), style),
                    Span::styled(
                        format!("‹ {} ›", app.offer.seats),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]);
                frame.render_widget(Paragraph::new(line), *chunk);
            }
            OfferField::Submit => {
                let bg = if is_focused { ACCENT } else { Color::DarkGray };
                let line = Line::from(vec![Span::raw(marker), badge(field.label(), bg)]);
                frame.render_widget(Paragraph::new(line), *chunk);
            }
            _ => {
                let editing = app.mode == InputMode::EditingField(*field);
                let value = if editing {
                    app.input_buffer.as_str()
                } else {
                    app.offer.text(*field)
                };
                render_input_widget(
                    frame,
                    *chunk,
                    field.label(),
                    value,
                    field.placeholder(),
                    is_focused,
                    if editing { Color::Yellow } else { Color::Cyan },
                );
            }
        }
    }
}

pub fn render_find_ride(frame: &mut Frame, app: &App, area: Rect) {
    let (search_area, list_area) = search_and_list_areas(area);
    render_input_widget(
        frame,
        search_area,
        "Search",
        &app.search,
        "Search origin/destination... ([/])",
        app.mode == InputMode::Searching,
        Color::Yellow,
    );

    let rides = app.visible_rides();
    let items: Vec<ListItem> = rides
        .iter()
        .enumerate()
        .map(|(i, ride)| {
            let status = match ride.status {
                RideStatus::Available => badge(ride.status.label(), CONFIRMED),
                RideStatus::Full => badge(ride.status.label(), ALERT),
                RideStatus::Expired => badge(ride.status.label(), Color::DarkGray),
            };
            let item = ListItem::new(vec![
                Line::from(Span::styled(
                    ride.driver,
                    Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("  {} to {}", ride.from, ride.to)),
                Line::from(vec![
                    Span::styled(
                        format!("  {}, {}  ", ride.date, ride.time),
                        Style::default().fg(Color::Gray),
                    ),
                    status,
                ]),
            ]);
            if i == app.selected_index {
                item.style(highlight())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Find a Ride").borders(Borders::ALL));
    let mut state = ListState::default();
    if !rides.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, list_area, &mut state);
}

pub fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    let user = &CURRENT_USER;
    let label = |name: &'static str| Span::styled(name, Style::default().add_modifier(Modifier::BOLD));
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            user.name,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(user.unit, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(vec![label("Email: "), Span::raw(user.email)]),
        Line::from(vec![label("Phone: "), Span::raw(user.phone)]),
        Line::from(vec![label("Bio: "), Span::raw(user.bio)]),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().title("My Profile").borders(Borders::ALL));
    frame.render_widget(card, chunks[0]);

    let lines: Vec<Line> = match &app.profiles {
        RemoteProfiles::NotConfigured => vec![Line::from(Span::styled(
            "Remote store not configured",
            Style::default().fg(Color::Gray),
        ))],
        RemoteProfiles::Loading => vec![Line::from("Loading profiles...")],
        RemoteProfiles::Failed(e) | RemoteProfiles::Unavailable(e) => vec![Line::from(Span::styled(
            format!("Error: {e}"),
            Style::default().fg(Color::Red),
        ))],
        RemoteProfiles::Loaded(records) if records.is_empty() => {
            vec![Line::from("No profiles found or table is empty.")]
        }
        RemoteProfiles::Loaded(records) => records
            .iter()
            .map(|r| Line::from(format!("• {}", r.display_name())))
            .collect(),
    };
    let neighbors = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Neighbors").borders(Borders::ALL));
    frame.render_widget(neighbors, chunks[1]);
}
