//! Desk rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::desk::{Desk, Status};
use crate::formatters::WeatherReport;
use crate::i18n::Language;

/// Render the whole desk.
pub fn render(frame: &mut Frame, desk: &Desk) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + language switcher
            Constraint::Length(3), // City input
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, desk, chunks[0]);
    render_input(frame, desk, chunks[1]);
    render_status(frame, desk, chunks[2]);
    render_cards(frame, desk, chunks[3]);
    render_footer(frame, desk, chunks[4]);
}

fn render_header(frame: &mut Frame, desk: &Desk, area: Rect) {
    let text = desk.lang().translations();

    let mut spans = Vec::new();
    for (i, lang) in Language::ALL.iter().enumerate() {
        let style = if *lang == desk.lang() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} F{} ", lang.flag(), i + 2), style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", text.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, desk: &Desk, area: Rect) {
    let text = desk.lang().translations();
    let style = if desk.input_is_placeholder() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let input = Paragraph::new(Span::styled(desk.input().to_string(), style)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ⏎ ", text.search)),
    );
    frame.render_widget(input, area);

    if !desk.input_is_placeholder() {
        let width = desk.input().chars().count() as u16;
        frame.set_cursor_position((
            (area.x + 1 + width).min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn render_status(frame: &mut Frame, desk: &Desk, area: Rect) {
    let text = desk.lang().translations();
    let line = match desk.status() {
        Status::Loading => Span::styled(text.loading, Style::default().fg(Color::Yellow)),
        Status::Failed(kind) => Span::styled(
            kind.message(text),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Status::Idle => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Lines of the current, hourly, multi-day and advisory cards
pub fn report_lines(report: &WeatherReport) -> Vec<Line<'static>> {
    let text = report.lang.translations();
    let current = &report.current;
    let mut lines = vec![
        Line::from(Span::styled(
            report.location.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}°C", current.temp),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}: {}°C", text.feels_like, current.feels_like)),
        Line::from(format!("{}: {}%", text.humidity, current.humidity)),
        Line::from(format!("{}: {} {}", text.wind_speed, current.wind, text.wind_unit)),
        Line::from(Span::styled(
            current.description.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        heading(text.hourly_forecast),
    ];
    lines.extend(report.hourly.iter().map(|h| Line::from(h.to_text())));

    lines.push(Line::default());
    lines.push(heading(text.multi_day_forecast));
    lines.extend(report.days.iter().map(|d| Line::from(d.to_text())));

    lines.push(Line::default());
    lines.push(heading(text.recommendations_title));
    lines.extend(
        report
            .recommendations
            .iter()
            .map(|r| Line::from(format!("• {}", r.text(text)))),
    );

    if !report.warnings.is_empty() {
        let red = Style::default().fg(Color::Red);
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            text.warnings_title,
            red.add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            report
                .warnings
                .iter()
                .map(|w| Line::from(Span::styled(format!("• {}", w.text(text)), red))),
        );
    }
    lines
}

fn render_cards(frame: &mut Frame, desk: &Desk, area: Rect) {
    let lines = desk.report().map(|r| report_lines(&r)).unwrap_or_default();

    let cards = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((desk.scroll(), 0));

    frame.render_widget(cards, area);
}

fn render_footer(frame: &mut Frame, desk: &Desk, area: Rect) {
    let text = desk.lang().translations();
    let style = if desk.show_help() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(Span::styled(text.help, style)), area);
}
