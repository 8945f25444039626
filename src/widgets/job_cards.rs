use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::jobs::Job;

/// Rows per card: title border, three field lines and a blank margin.
const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone)]
pub struct JobCards<'a> {
    pub jobs: &'a [Job],
    pub is_focused: bool,
}

#[derive(Debug, Default, Clone)]
pub struct JobCardsState {
    pub vertical_scroll: usize,
    pub selected_idx: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    None,
    Open(String),
}

impl JobCardsState {
    pub fn reset(&mut self) {
        self.vertical_scroll = 0;
        self.selected_idx = 0;
    }

    pub fn selected<'a>(&self, jobs: &'a [Job]) -> Option<&'a Job> {
        jobs.get(self.selected_idx)
    }

    pub fn handle_key(&mut self, key: KeyEvent, jobs: &[Job]) -> CardAction {
        if jobs.is_empty() {
            return CardAction::None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected_idx = (self.selected_idx + 1) % jobs.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_idx = self.selected_idx.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.selected_idx = 0,
            KeyCode::Char('G') | KeyCode::End => self.selected_idx = jobs.len() - 1,
            KeyCode::Char('l') | KeyCode::Enter => {
                if let Some(url) = self.selected(jobs).and_then(|job| job.job_url.clone()) {
                    return CardAction::Open(url);
                }
            }
            _ => {}
        }

        CardAction::None
    }
}

impl<'a> StatefulWidget for JobCards<'a> {
    type State = JobCardsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.jobs.is_empty() {
            return;
        }

        // Results may shrink under a stale selection.
        state.selected_idx = state.selected_idx.min(self.jobs.len() - 1);

        let border_style = if self.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let heading = format!(" Found {} jobs ", self.jobs.len());
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(heading.bold());

        let inner_area = block.inner(area);
        block.render(area, buf);

        // adjust the offset based on the selected card
        let card_height = CARD_HEIGHT as usize;
        let offset_start = state.selected_idx * card_height;
        let offset_end = offset_start + card_height;

        let h = inner_area.height as usize;
        let window_start = state.vertical_scroll;
        let window_end = state.vertical_scroll + h;

        if offset_end > window_end {
            state.vertical_scroll = offset_end.saturating_sub(h);
        }
        if offset_start < window_start {
            state.vertical_scroll = offset_start;
        }

        // Only the cards overlapping the window are drawn offscreen.
        let first = state.vertical_scroll / card_height;
        let last = (state.vertical_scroll + h)
            .div_ceil(card_height)
            .min(self.jobs.len());
        if first >= last {
            return;
        }

        let window_height = ((last - first) * card_height) as u16;
        let mut tbuf = Buffer::empty(Rect::new(0, 0, inner_area.width, window_height));

        for (idx, job) in self.jobs.iter().enumerate().take(last).skip(first) {
            let y = ((idx - first) * card_height) as u16;
            let card_area = Rect::new(0, y, inner_area.width, CARD_HEIGHT - 1);
            render_card(job, idx == state.selected_idx, card_area, &mut tbuf);
        }

        let src_offset_y = (state.vertical_scroll - first * card_height) as u16;
        crate::buffers::blit(buf, &tbuf, inner_area, (0, src_offset_y));
    }
}

fn render_card(job: &Job, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let block = Block::new().borders(Borders::TOP).title(
        Span::from(format!(" {} ", job.title())).style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
    );

    let lines = vec![
        field_line("Company", job.company_name()),
        field_line("Location", job.location()),
        field_line("Source", job.source()),
    ];

    let paragraph_style = if is_selected {
        Style::default().reversed()
    } else {
        Style::default()
    };

    Paragraph::new(lines)
        .style(paragraph_style)
        .block(block)
        .render(area, buf);
}

fn field_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![Span::from(format!("{label}: ")).bold(), Span::from(value)])
}
