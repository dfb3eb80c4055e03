use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {:<10}", keys), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render(app: &App, frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut help_text = vec![
        Line::from(""),
        section("General"),
        binding("?", "Mostrar/ocultar esta ayuda"),
        binding("q / C-c", "Salir"),
        Line::from(""),
        section("Búsqueda"),
        binding("/ o i", "Escribir un nombre o número"),
        binding("Enter", "Buscar"),
        binding("Esc", "Cancelar la edición"),
        Line::from(""),
        section("Resultado"),
        binding("o", "Abrir la ilustración en el navegador"),
        binding("y", "Copiar el enlace de la ilustración"),
    ];
    if app.capabilities().navigation {
        help_text.push(binding("←/h", "Pokémon anterior"));
        help_text.push(binding("→/l", "Pokémon siguiente"));
    }
    help_text.push(Line::from(""));

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Ayuda: Atajos de teclado ")
                .title_bottom(Line::from(" Pulsa cualquier tecla para cerrar ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
