use std::time::Duration;

use color_eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, StatefulWidget};
use ratatui::{DefaultTerminal, Frame, prelude::*};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::api::JobsClient;
use crate::config::Config;
use crate::error::SearchError;
use crate::jobs::{Health, Job};
use crate::state::{SearchState, Settlement};
use crate::widgets::search_button::BUTTON_WIDTH;
use crate::widgets::{
    CardAction, JobCards, JobCardsState, JobDetail, SearchButton, TextInput, TextInputState,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Results,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Healthy {
        version: Option<String>,
    },
    Unavailable(String),
}

/// Completions reported back to the UI loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    SearchSettled {
        seq: u64,
        outcome: Result<Vec<Job>, SearchError>,
    },
    Health(Result<Health, SearchError>),
}

#[derive(Debug)]
pub struct App {
    pub should_exit: bool,
    pub focus: Focus,
    pub input: TextInputState,
    pub search: SearchState,
    pub cards: JobCardsState,
    pub backend: BackendStatus,
    client: JobsClient,
    health_check: bool,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    pending: Option<JoinHandle<()>>,
    input_area: Rect,
}

impl App {
    pub fn new(client: JobsClient, config: &Config) -> Self {
        let (events_tx, events_rx) = unbounded_channel();

        Self {
            should_exit: false,
            focus: Focus::Input,
            input: TextInputState::new(config.hashtags.clone().unwrap_or_default()),
            search: SearchState::default(),
            cards: JobCardsState::default(),
            backend: BackendStatus::Unknown,
            client,
            health_check: !config.no_health_check,
            events_tx,
            events_rx,
            pending: None,
            input_area: Rect::default(),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> eyre::Result<()> {
        if self.health_check {
            self.check_health();
        }
        self.trigger_search();

        while !self.should_exit {
            while let Ok(app_event) = self.events_rx.try_recv() {
                self.handle_app_event(app_event);
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        frame.render_widget(&mut *self, frame.area());

        if self.focus == Focus::Input && !self.search.in_flight() {
            frame.set_cursor_position(self.input.cursor(self.input_area));
        }
    }

    fn check_health(&self) {
        let client = self.client.clone();
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = client.health().await;
            let _ = events_tx.send(AppEvent::Health(outcome));
        });
    }

    /// Sends a search for the current input unless it is blank.
    fn trigger_search(&mut self) {
        let (search, dispatch) = std::mem::take(&mut self.search).trigger(&self.input.input);
        self.search = search;

        let Some(dispatch) = dispatch else {
            return;
        };

        if let Some(previous) = self.pending.take() {
            tracing::debug!(seq = dispatch.seq, "superseding in-flight search");
            previous.abort();
        }

        tracing::info!(seq = dispatch.seq, hashtags = ?dispatch.query.tokens(), "searching jobs");

        let client = self.client.clone();
        let events_tx = self.events_tx.clone();

        self.pending = Some(tokio::spawn(async move {
            let outcome = client.search_hashtags(&dispatch.query).await;
            let _ = events_tx.send(AppEvent::SearchSettled {
                seq: dispatch.seq,
                outcome,
            });
        }));
    }

    fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::SearchSettled { seq, outcome } => self.apply_search_outcome(seq, outcome),
            AppEvent::Health(Ok(health)) => {
                tracing::info!(version = ?health.version, status = ?health.status, "API healthy");
                self.backend = BackendStatus::Healthy {
                    version: health.version,
                };
            }
            AppEvent::Health(Err(err)) => {
                tracing::warn!(error = %err, "API health check failed");
                self.backend = BackendStatus::Unavailable(err.kind().to_string());
            }
        }
    }

    fn apply_search_outcome(&mut self, seq: u64, outcome: Result<Vec<Job>, SearchError>) {
        let failure = outcome.as_ref().err().cloned();
        let count = outcome.as_ref().map_or(0, Vec::len);

        let (search, settlement) = std::mem::take(&mut self.search).settle(seq, outcome);
        self.search = search;

        match settlement {
            Settlement::Applied => {
                self.pending = None;
                match &failure {
                    Some(err) => tracing::error!(seq, error = %err, "search failed"),
                    None => {
                        tracing::info!(seq, count, "search finished");
                        self.cards.reset();
                    }
                }
                if self.search.results().is_empty() {
                    self.focus = Focus::Input;
                }
            }
            Settlement::Stale => {
                tracing::debug!(
                    seq,
                    phase = ?self.search.phase(),
                    error = ?failure,
                    "dropping stale search result"
                );
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Enter => self.trigger_search(),
            KeyCode::Tab | KeyCode::Down if !self.search.results().is_empty() => {
                self.focus = Focus::Results;
            }
            _ => {
                // The input is disabled while a search is running
                if !self.search.in_flight() {
                    self.input.handle_key(key);
                }
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => self.focus = Focus::Input,
            _ => match self.cards.handle_key(key, self.search.results()) {
                CardAction::Open(url) => {
                    tracing::info!(%url, "opening job posting");
                    if let Err(err) = open::that(&url) {
                        tracing::warn!(%url, error = %err, "failed to open job posting");
                    }
                }
                CardAction::None => {}
            },
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, search_area, status_area, main_area, footer_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let [input_area, button_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)])
                .areas(search_area);

        let [list_area, detail_area] =
            Layout::vertical([Constraint::Fill(2), Constraint::Fill(1)]).areas(main_area);

        let in_flight = self.search.in_flight();
        self.input_area = input_area;

        self.render_header(header_area, buf);

        TextInput {
            is_focused: self.focus == Focus::Input,
            disabled: in_flight,
        }
        .render(input_area, buf, &mut self.input);

        SearchButton { loading: in_flight }.render(button_area, buf);

        self.render_status(status_area, buf);

        JobCards {
            jobs: self.search.results(),
            is_focused: self.focus == Focus::Results,
        }
        .render(list_area, buf, &mut self.cards);

        if let Some(job) = self.cards.selected(self.search.results()) {
            JobDetail { job }.render(detail_area, buf);
        }

        App::render_footer(self.focus, footer_area, buf);
    }
}

impl App {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let backend = match &self.backend {
            BackendStatus::Unknown => Span::from("API: checking").dark_gray(),
            BackendStatus::Healthy { version } => {
                let version = version.as_deref().unwrap_or("unknown version");
                Span::from(format!("API: healthy ({version})")).green()
            }
            BackendStatus::Unavailable(reason) => {
                Span::from(format!("API: unavailable ({reason})")).red()
            }
        };

        let lines = vec![
            Line::from("Job Discovery Platform".bold()).centered(),
            Line::from(backend).centered(),
        ];

        Paragraph::new(lines).render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.search.in_flight() {
            Line::from("Searching for jobs...".yellow())
        } else if let Some(err) = self.search.last_error() {
            Line::from(format!("Search failed ({}): {err}", err.kind()).red())
        } else {
            Line::default()
        };

        Paragraph::new(line).render(area, buf);
    }

    fn render_footer(focus: Focus, area: Rect, buf: &mut Buffer) {
        let help = match focus {
            Focus::Input => "Enter to search, Tab/↓ to browse results, Esc to quit.",
            Focus::Results => "Use ↓↑ to move, g/G to go top/bottom, Enter to open, Tab to edit, q to quit.",
        };

        Paragraph::new(help).centered().render(area, buf);
    }
}
