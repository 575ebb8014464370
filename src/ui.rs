use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calc::MortgageKind;
use crate::form::Field;
use crate::App;

/// Formats a currency amount with a pound sign, thousands grouping, and
/// exactly two decimal places, e.g. 350754.832 -> "£350,754.83".
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}£{int_grouped}.{frac_part}")
}

pub fn render(f: &mut Frame, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(f.size());

    render_form(f, app, halves[0]);
    render_results(f, app, halves[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2), // title
                Constraint::Length(3), // amount
                Constraint::Length(1), // amount error
                Constraint::Length(3), // term
                Constraint::Length(1), // term error
                Constraint::Length(3), // rate
                Constraint::Length(1), // rate error
                Constraint::Length(4), // type selector
                Constraint::Length(1), // type error
                Constraint::Min(0),
                Constraint::Length(2), // help
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new("Mortgage Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_numeric_field(
        f,
        chunks[1],
        chunks[2],
        "Mortgage Amount",
        format!("£{}", app.form.amount),
        app.focus == Field::Amount,
        app.form.errors.amount,
    );
    render_numeric_field(
        f,
        chunks[3],
        chunks[4],
        "Mortgage Term",
        format!("{} years", app.form.term),
        app.focus == Field::Term,
        app.form.errors.term,
    );
    render_numeric_field(
        f,
        chunks[5],
        chunks[6],
        "Interest Rate",
        format!("{}%", app.form.rate),
        app.focus == Field::Rate,
        app.form.errors.rate,
    );
    render_kind_selector(f, app, chunks[7], chunks[8]);

    let mut help = vec![Line::from(
        "Tab/↓ ↑: move | Enter: calculate | c: clear all | e: export | q: quit",
    )];
    if let Some(status) = &app.status {
        help.push(Line::from(status.as_str()).style(Style::default().fg(Color::Cyan)));
    }
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[10]);
}

fn border_style(focused: bool, error: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else if error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

fn render_numeric_field(
    f: &mut Frame,
    box_area: Rect,
    error_area: Rect,
    label: &str,
    value: String,
    focused: bool,
    error: bool,
) {
    let input = Paragraph::new(value)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused, error))
                .title(label),
        );
    f.render_widget(input, box_area);

    if error {
        let message = Paragraph::new("This field is required")
            .style(Style::default().fg(Color::Red));
        f.render_widget(message, error_area);
    }
}

fn render_kind_selector(f: &mut Frame, app: &App, box_area: Rect, error_area: Rect) {
    let option = |label: &str, selected: bool| {
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(format!("{marker}{label}")).style(style)
    };

    let options = vec![
        option("Repayment", app.form.kind == Some(MortgageKind::Repayment)),
        option("Interest Only", app.form.kind == Some(MortgageKind::InterestOnly)),
    ];

    let selector = Paragraph::new(options).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app.focus == Field::Kind, app.form.errors.kind))
            .title("Mortgage Type - ←/→ or Space to choose"),
    );
    f.render_widget(selector, box_area);

    if app.form.errors.kind {
        let message = Paragraph::new("This field is required")
            .style(Style::default().fg(Color::Red));
        f.render_widget(message, error_area);
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Your results");

    let text = match &app.form.result {
        Some(result) => vec![
            Line::from(""),
            Line::from(
                "Your results are shown below based on the information you provided. \
                 To adjust them, edit the form and calculate again.",
            )
            .style(Style::default().fg(Color::DarkGray)),
            Line::from(""),
            Line::from("Your monthly repayments"),
            Line::from(vec![Span::styled(
                format_currency(result.monthly),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Total you'll repay over the term"),
            Line::from(vec![Span::styled(
                format_currency(result.total),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
        ],
        None => vec![
            Line::from(""),
            Line::from("Results shown here").style(
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(
                "Complete the form and press Enter to see what your monthly \
                 repayments would be.",
            )
            .style(Style::default().fg(Color::DarkGray)),
        ],
    };

    let results = Paragraph::new(text)
        .alignment(Alignment::Left)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(results, area);
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(350_754.832), "£350,754.83");
        assert_eq!(format_currency(1_169.1817), "£1,169.18");
        assert_eq!(format_currency(833.333), "£833.33");
        assert_eq!(format_currency(0.0), "£0.00");
        assert_eq!(format_currency(1_000_000.0), "£1,000,000.00");
    }

    #[test]
    fn currency_formatting_handles_negatives() {
        assert_eq!(format_currency(-1234.5), "-£1,234.50");
    }
}
