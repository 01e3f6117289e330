use crate::callers::RecentCaller;
use crate::store::State;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{Activity, Header};
use crate::ui::layout::{layout_regions, split_banner};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

/// Height of the error banner including its borders.
const ERROR_BANNER_HEIGHT: u16 = 3;

const COLUMNS: [&str; 5] = ["Caller", "Contact", "Date", "Input", "Results"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let (header, body, footer) = layout_regions(frame.area());

    let activity = if app.is_fetching() {
        Activity::Fetching {
            animation_tick: app.animation_tick(),
        }
    } else {
        Activity::Idle
    };
    frame.render_widget(Header::new().widget(&state, activity), header);

    frame.render_widget(Clear, body);
    let table_area = match &state.last_error {
        Some(error) => {
            let (banner, rest) = split_banner(body, ERROR_BANNER_HEIGHT);
            render_error_banner(frame, banner, error);
            rest
        }
        None => body,
    };
    render_callers(frame, table_area, &state, app.selected(), app.is_fetching());

    frame.render_widget(Footer::new().widget(footer, &state.version), footer);
}

fn render_error_banner(frame: &mut Frame<'_>, area: Rect, error: &str) {
    let block = Block::default()
        .title(Span::styled(" Refresh failed ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let widget = Paragraph::new(Line::from(error.to_string()))
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}

fn render_callers(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &State,
    selected: Option<usize>,
    fetching: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.recent_callers.is_empty() {
        let message = if fetching {
            "Loading recent callers..."
        } else {
            "No recent callers. Press r to refresh."
        };
        let widget = Paragraph::new(Line::from(message))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let header = Row::new(COLUMNS).style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let rows = state.recent_callers.iter().map(caller_row);
    let widths = [
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(HEADER_TEXT))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn caller_row(caller: &RecentCaller) -> Row<'static> {
    Row::new([
        caller.caller_id.clone(),
        caller.contact_id.clone(),
        caller.date.clone(),
        caller.input.clone(),
        caller.results.clone(),
    ])
}
