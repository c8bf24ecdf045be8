use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{SlideshowApp, key_hint};
use gviz_engine::NavCommand;

pub(crate) fn draw(f: &mut Frame, app: &SlideshowApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_page(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &SlideshowApp) {
    let header = Line::from(vec![
        Span::styled(
            app.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.counter(), Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn render_page(f: &mut Frame, area: Rect, app: &SlideshowApp) {
    let lines: Vec<Line> = app.lines.iter().map(|l| Line::from(l.as_str())).collect();
    let page = Paragraph::new(Text::from(lines)).scroll((app.scroll, 0));
    f.render_widget(page, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &SlideshowApp) {
    let mut spans = Vec::new();
    for command in NavCommand::ALL {
        spans.push(Span::styled(
            command.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}  ", key_hint(command)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::raw(app.counter()));
    spans.push(Span::styled("   q quit", Style::default().fg(Color::DarkGray)));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer, area);
}
