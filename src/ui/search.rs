use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let banner_height = if app.lookup.loading || app.lookup.error.is_some() {
        3
    } else {
        0
    };

    // Layout: header(3) + search(3) + banner(0/3) + record(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header = Paragraph::new(" Pokédex Explorer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    // ── Search bar ──
    let search_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };
    let search_label = if app.input_mode == InputMode::Editing {
        " 🔍 Nombre o número (Enter para buscar, Esc para salir): "
    } else {
        " 🔍 Buscar (/): "
    };
    let search_text = format!("{}{}", search_label, app.input);
    let search_bar = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_style)
                .title(" Buscar "),
        );
    frame.render_widget(search_bar, chunks[1]);

    if app.input_mode == InputMode::Editing {
        let offset = (search_label.width() + app.input.width()) as u16;
        let cursor_x = (chunks[1].x + 1 + offset).min(chunks[1].right().saturating_sub(2));
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    // ── Loading / error banner ──
    if app.lookup.loading {
        let spinner = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", app.spinner()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cargando..."),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(spinner, chunks[2]);
    } else if let Some(error) = &app.lookup.error {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(
                " ⚠ ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(banner, chunks[2]);
    }

    // ── Record ──
    super::record::render(app, frame, chunks[3]);

    // ── Status bar ──
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut status = vec![
        Span::styled(" /", key_style),
        Span::raw(" Buscar  "),
    ];
    if app.capabilities().navigation {
        status.push(Span::styled("←/→", key_style));
        status.push(Span::raw(" Anterior/Siguiente  "));
    }
    status.extend([
        Span::styled("o", key_style),
        Span::raw(" Abrir arte  "),
        Span::styled("?", key_style),
        Span::raw(" Ayuda  "),
        Span::styled("q", key_style),
        Span::raw(" Salir  "),
        Span::styled(&app.status_msg, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[4]);
}
