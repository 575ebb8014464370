use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, Write},
};

mod calc;
mod form;
mod ui;

use calc::MortgageKind;
use form::{Field, MortgageForm};

const EXPORT_PATH: &str = "mortgage_result.json";

pub struct App {
    pub form: MortgageForm,
    pub focus: Field,
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: MortgageForm::new(),
            focus: Field::Amount,
            status: None,
        }
    }
}

#[derive(Serialize)]
struct ResultExport {
    kind: MortgageKind,
    monthly: f64,
    total: f64,
}

impl App {
    fn export_result(&self) -> Result<()> {
        let result = self.form.result.context("no results to export yet")?;
        let kind = self.form.kind.context("no repayment type selected")?;
        let export = ResultExport {
            kind,
            monthly: result.monthly,
            total: result.total,
        };
        let mut file = File::create(EXPORT_PATH)?;
        file.write_all(serde_json::to_string_pretty(&export)?.as_bytes())?;
        writeln!(file)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::default();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if handle_key(&mut app, key) {
                return Ok(());
            }
        }
    }
}

/// Processes one keystroke. Returns true when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => {
            app.focus = app.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus = app.focus.prev();
        }
        KeyCode::Enter => {
            app.form.submit();
            app.status = if app.form.errors.any() {
                Some("Please fix the highlighted fields".to_string())
            } else {
                None
            };
        }
        KeyCode::Char('c') => {
            app.form.clear();
            app.focus = Field::Amount;
            app.status = None;
        }
        KeyCode::Char('e') => {
            app.status = Some(match app.export_result() {
                Ok(()) => format!("Exported to {}", EXPORT_PATH),
                Err(err) => format!("Export failed: {}", err),
            });
        }
        KeyCode::Left if app.focus == Field::Kind => {
            app.form.select_kind(MortgageKind::Repayment);
        }
        KeyCode::Right if app.focus == Field::Kind => {
            app.form.select_kind(MortgageKind::InterestOnly);
        }
        KeyCode::Char(' ') if app.focus == Field::Kind => {
            let next = match app.form.kind {
                Some(MortgageKind::Repayment) => MortgageKind::InterestOnly,
                _ => MortgageKind::Repayment,
            };
            app.form.select_kind(next);
        }
        KeyCode::Char(c) => {
            app.form.push_char(app.focus, c);
        }
        KeyCode::Backspace => {
            app.form.pop_char(app.focus);
        }
        _ => {}
    }
    false
}
