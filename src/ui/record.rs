use crate::app::App;
use crate::catalog::{self, StatTier};
use crate::dex::Record;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

const LABEL_WIDTH: u16 = 12;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(record) = &app.lookup.record else {
        let hint = if app.lookup.loading { "" } else { "Sin resultados todavía" };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(empty, area);
        return;
    };

    let capabilities = app.capabilities();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", catalog::display_name(&record.name)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", catalog::format_id(record.id)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats_height = if capabilities.statistics {
        record.statistics.len() as u16 + 2
    } else {
        0
    };

    // badges(1) + artwork(1) + spacer(1) + tiles(0/3) + stats(?) + rest + nav(0/1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(if capabilities.statistics { 3 } else { 0 }),
            Constraint::Length(stats_height),
            Constraint::Min(0),
            Constraint::Length(if capabilities.navigation { 1 } else { 0 }),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(badges(record)), chunks[0]);

    let artwork = match &record.image_url {
        Some(url) => Line::from(vec![
            Span::styled(" Arte: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                super::truncate_str(url, chunks[1].width.saturating_sub(8) as usize),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        None => Line::from(Span::styled(" Sin imagen", Style::default().fg(Color::DarkGray))),
    };
    frame.render_widget(Paragraph::new(artwork), chunks[1]);

    if capabilities.statistics {
        render_measurements(record, frame, chunks[3]);
        render_statistics(record, frame, chunks[4]);
    }

    if capabilities.navigation {
        render_navigation(app, frame, chunks[6]);
    }
}

/// One coloured badge per category, in the order the service returned them.
fn badges(record: &Record) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for tag in &record.categories {
        spans.push(Span::styled(
            format!(" {} ", catalog::type_label(tag)),
            Style::default()
                .bg(catalog::type_accent(tag))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_measurements(record: &Record, frame: &mut Frame, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let tile = |title: &'static str, value: String| {
        Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(title),
            )
    };

    let m = record.measurements;
    frame.render_widget(tile(" Altura ", format!("{:.1} m", m.height_m())), tiles[0]);
    frame.render_widget(tile(" Peso ", format!("{:.1} kg", m.weight_kg())), tiles[1]);
}

fn render_statistics(record: &Record, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Estadísticas ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(record.statistics.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (stat, row) in record.statistics.iter().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Length(5),
                Constraint::Min(1),
            ])
            .split(*row);

        let tier = StatTier::for_value(stat.value);
        frame.render_widget(
            Paragraph::new(format!(" {}", catalog::stat_label(&stat.name)))
                .style(Style::default().fg(Color::DarkGray)),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new(format!("{:>3}", stat.value))
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            cols[1],
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(tier.accent()).bg(Color::Black))
            .ratio(catalog::stat_bar_percent(stat.value) / 100.0)
            .label("");
        frame.render_widget(gauge, cols[2]);
    }
}

fn render_navigation(app: &App, frame: &mut Frame, area: Rect) {
    let enabled = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);

    let prev_style = if app.lookup.can_go_previous() { enabled } else { disabled };
    let next_style = if app.lookup.can_go_next() { enabled } else { disabled };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(" ◀ Anterior (h)", prev_style)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("Siguiente (l) ▶ ", next_style)).alignment(Alignment::Right),
        halves[1],
    );
}
