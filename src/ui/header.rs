use crate::store::State;
use crate::ui::theme::{DEBUG_BADGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Fetch activity shown next to the record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Fetching { animation_tick: u8 },
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &State, activity: Activity) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let status_style = if state.last_error.is_some() {
            Style::default().fg(STATUS_ERROR)
        } else {
            Style::default().fg(STATUS_OK)
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled("Recent Callers", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("v{}", state.version), text_style),
        ];

        if state.debug {
            spans.push(Span::styled(
                " DEV",
                Style::default().fg(DEBUG_BADGE).add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            caller_count_label(state.recent_callers.len()),
            text_style,
        ));

        if let Activity::Fetching { animation_tick } = activity {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} refreshing", spinner),
                Style::default().fg(STATUS_OK),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn caller_count_label(count: usize) -> String {
    match count {
        1 => "1 caller".to_string(),
        n => format!("{} callers", n),
    }
}
