use pozarreal_core::model::{Representative, StreetInfo};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new(format!(
        "pozarreal – street records ({})",
        app.backend.description
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Pozarreal · {}", app.backend.name)),
    );
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::StreetList => draw_street_list(frame, app, *content_area),
        Screen::StreetInfo => draw_street_info(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::StreetList => "↑/↓ move · Enter/→ open street · r reload · q/Ctrl-C quit",
        Screen::StreetInfo => "Esc/←/b back to streets · r refresh · q/Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_street_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = if app.streets.is_empty() {
        vec![ListItem::new("No streets recorded. Press r to reload.")]
    } else {
        app.streets
            .iter()
            .enumerate()
            .map(|(idx, street)| {
                let prefix = if idx == app.street_list_index {
                    "> "
                } else {
                    "  "
                };
                ListItem::new(format!("{prefix}{}", street.name))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Streets ({})", app.streets.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.streets.is_empty() {
        state.select(Some(app.street_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_street_info(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(info) = app.street_info.as_ref() else {
        let paragraph = Paragraph::new("No street loaded.")
            .block(Block::default().borders(Borders::ALL).title("Street"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // representative
            Constraint::Min(0),    // houses
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [representative_area, houses_area] = chunks else {
        return;
    };

    let representative = Paragraph::new(representative_lines(info.representative.as_ref()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} · representative", info.name)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(representative, *representative_area);

    draw_houses(frame, info, *houses_area);
}

fn representative_lines(representative: Option<&Representative>) -> Vec<Line<'static>> {
    let Some(representative) = representative else {
        return vec![Line::styled(
            "No representative assigned.",
            Style::default().fg(Color::DarkGray),
        )];
    };

    vec![
        Line::from(vec![
            Span::styled("Name:    ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(representative.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Address: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(representative.address.clone()),
        ]),
        Line::from(vec![
            Span::styled("Phone:   ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(representative.phone.clone()),
        ]),
    ]
}

fn draw_houses(frame: &mut Frame<'_>, info: &StreetInfo, area: Rect) {
    let title = format!(
        "Houses ({} · {} with chips)",
        info.house_count(),
        info.chips_enabled_count()
    );

    if info.houses.is_empty() {
        let paragraph = Paragraph::new("No houses recorded on this street.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = info.houses.iter().map(|house| {
        let (chips, color) = if house.chips_enabled {
            ("enabled", Color::Green)
        } else {
            ("disabled", Color::Red)
        };

        Row::new(vec![
            Cell::from(house.number.clone()),
            Cell::from(chips).style(Style::default().fg(color)),
            Cell::from(house.id.to_string()),
        ])
    });

    let column_widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Number", "Chips", "Id"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}
