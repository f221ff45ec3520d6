//! Ratatui front end: two input fields on top, the current page below.
//!
//! Keys: type to edit the focused operand, `Tab` switches operand,
//! `Backspace` deletes, `Ctrl+U` clears, arrow keys change page, `Esc` quits.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use intdiv_core::readout::{format_approximate, OutputField};
use intdiv_core::slides::NavKey;
use intdiv_core::RoundingMode;
use log::info;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Row, Table};
use ratatui::{DefaultTerminal, Frame};

use crate::app::{Action, App, Focus, Page};
use crate::result::CliResult;

/// Run the TUI until the user quits. Restores the terminal on every exit path.
pub(crate) fn run(mut app: App) -> CliResult<()> {
    let mut terminal = ratatui::init();
    info!("TUI started");
    let outcome = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    outcome
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> CliResult<()> {
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = action_for(key) {
                app.apply(action);
            }
        }
    }
    Ok(())
}

/// Map a key press to an [`Action`]; unhandled keys map to `None`.
pub(crate) fn action_for(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char(c) if !ctrl => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => Some(Action::ToggleFocus),
        KeyCode::Up => Some(Action::Navigate(NavKey::Up)),
        KeyCode::Down => Some(Action::Navigate(NavKey::Down)),
        KeyCode::Left => Some(Action::Navigate(NavKey::Left)),
        KeyCode::Right => Some(Action::Navigate(NavKey::Right)),
        _ => None,
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let [title_area, inputs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let page = app.page();
    let title = format!(
        "Integer division - {} [{}/{}]",
        page.title(),
        app.slides.current_slide() + 1,
        Page::ALL.len()
    );
    frame.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );

    draw_inputs(frame, app, inputs_area);

    match page {
        Page::Results => draw_results(frame, app, body_area),
        Page::Remainders => draw_remainders(frame, app, body_area),
        Page::Reference => draw_reference(frame, body_area),
    }

    frame.render_widget(
        Paragraph::new("Tab: switch operand  Ctrl+U: clear  \u{2190}/\u{2192}: page  Esc: quit")
            .style(Style::default().fg(Color::DarkGray)),
        status_area,
    );
}

fn draw_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let [x_area, y_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    for (focus, label, text, field_area) in [
        (Focus::Dividend, "x (dividend)", &app.x_text, x_area),
        (Focus::Divisor, "y (divisor)", &app.y_text, y_area),
    ] {
        let style = if app.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(text.as_str()).block(Block::bordered().title(label).border_style(style));
        frame.render_widget(input, field_area);
    }

    let focused_area = match app.focus {
        Focus::Dividend => x_area,
        Focus::Divisor => y_area,
    };
    frame.set_cursor_position(cursor_position(focused_area, app.focused_text()));
}

/// Cursor just past the text inside a bordered field, pinned to the right border.
fn cursor_position(area: Rect, text: &str) -> Position {
    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    let x = area.x.saturating_add(1).saturating_add(width).min(max_x);
    Position::new(x, area.y.saturating_add(1))
}

fn value_style(app: &App) -> Style {
    if app.readout.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let style = value_style(app);
    let rows: Vec<Row> = app
        .settings
        .visible(&app.readout)
        .map(|cell| Row::new(vec![cell.field.label().to_string(), cell.text.clone()]).style(style))
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)])
        .header(Row::new(vec!["field", "value"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::bordered().title(Page::Results.title()));
    frame.render_widget(table, area);
}

fn draw_remainders(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(Page::Remainders.title());
    let result = match &app.outcome {
        Ok(result) => result,
        Err(e) => {
            let message = Paragraph::new(Line::from(e.label())).style(value_style(app)).block(block);
            frame.render_widget(message, area);
            return;
        }
    };

    let mut rows: Vec<Row> = RoundingMode::ALL
        .iter()
        .filter(|mode| app.settings.shows(OutputField::Quotient(**mode)))
        .map(|mode| {
            let div_rem = result.div_rem(*mode);
            Row::new(vec![
                mode.code().to_string(),
                div_rem.quotient.to_string(),
                div_rem.remainder.to_string(),
            ])
        })
        .collect();
    if app.settings.show_approximate {
        rows.push(Row::new(vec![
            "double".to_string(),
            format_approximate(result.double),
            String::new(),
        ]));
    }

    let table = Table::new(
        rows,
        [Constraint::Length(12), Constraint::Percentage(50), Constraint::Percentage(50)],
    )
    .header(Row::new(vec!["policy", "quotient", "remainder"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(block);
    frame.render_widget(table, area);
}

fn draw_reference(frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = RoundingMode::ALL
        .iter()
        .map(|mode| Row::new(vec![mode.code(), mode.description()]))
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(20)])
        .header(Row::new(vec!["policy", "meaning"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::bordered().title(Page::Reference.title()));
    frame.render_widget(table, area);
}
