//! Interactive full-screen front end.
//!
//! [`Desk`] owns all view state and is only touched by the event loop in
//! [`Desk::run`]. Fetches run as separate tasks and report back through the
//! loop's channel, tagged with the generation of the request that started them.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::WttrClient;
use crate::config::Settings;
use crate::error::{FailureKind, FetchError};
use crate::formatters::{build_report, WeatherReport};
use crate::i18n::{Language, Translations};
use crate::models::WttrResponse;
use crate::ui;

/// How long one iteration waits for a terminal event
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

const PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Failed(FailureKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Fetch(FetchRequest),
    Redraw,
    Quit,
}

/// Result of a background fetch, delivered back to the event loop
#[derive(Debug)]
pub struct Fetched {
    pub generation: u64,
    pub outcome: Result<WttrResponse, FetchError>,
}

pub struct Desk {
    lang: Language,
    input: String,
    default_city: String,
    status: Status,
    response: Option<WttrResponse>,
    last_city: Option<String>,
    generation: u64,
    scroll: u16,
    show_help: bool,
}

impl Desk {
    pub fn new(settings: &Settings) -> Self {
        let lang = settings.lang;
        Self {
            lang,
            input: lang.translations().placeholder.to_string(),
            default_city: settings.city.clone(),
            status: Status::Idle,
            response: None,
            last_city: None,
            generation: 0,
            scroll: 0,
            show_help: false,
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while the input box shows the placeholder rather than typed text
    pub fn input_is_placeholder(&self) -> bool {
        Translations::is_any_placeholder(&self.input)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn response(&self) -> Option<&WttrResponse> {
        self.response.as_ref()
    }

    /// The cards for the current response, localized for the current language
    pub fn report(&self) -> Option<WeatherReport> {
        match self.status {
            Status::Idle => self.response.as_ref().map(|data| build_report(data, self.lang)),
            _ => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    fn reset_input(&mut self) {
        self.input = self.lang.translations().placeholder.to_string();
    }

    fn start_fetch(&mut self, city: String) -> Action {
        self.generation += 1;
        self.status = Status::Loading;
        self.response = None;
        self.scroll = 0;
        self.last_city = Some(city.clone());
        Action::Fetch(FetchRequest {
            generation: self.generation,
            city,
        })
    }

    /// Loads the default city, as on startup
    pub fn load_default(&mut self) -> Action {
        self.start_fetch(self.default_city.clone())
    }

    /// Searches for the typed city; empty input or a placeholder means the default city
    pub fn search(&mut self, input: &str) -> Action {
        let typed = input.trim();
        if typed.is_empty() || Translations::is_any_placeholder(typed) {
            self.reset_input();
            return self.load_default();
        }
        self.input = typed.to_string();
        self.start_fetch(typed.to_string())
    }

    pub fn refresh(&mut self) -> Action {
        match self.last_city.clone() {
            Some(city) => self.start_fetch(city),
            None => self.load_default(),
        }
    }

    /// Switches every visible string and re-renders the cached report
    pub fn change_language(&mut self, lang: Language) -> Action {
        self.lang = lang;
        if self.input_is_placeholder() {
            self.reset_input();
        }
        Action::Redraw
    }

    /// Interprets the submitted content of the input box
    pub fn handle_line(&mut self, line: &str) -> Action {
        let line = line.trim();
        self.show_help = false;

        let Some(command) = line.strip_prefix(':') else {
            return self.search(line);
        };
        self.reset_input();

        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("q" | "quit"), _) => Action::Quit,
            (Some("refresh" | "r"), _) => self.refresh(),
            (Some("lang"), Some(code)) | (Some(code @ ("ua" | "uk" | "en")), None) => {
                match code.parse::<Language>() {
                    Ok(lang) => self.change_language(lang),
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.show_help = true;
                        Action::Redraw
                    }
                }
            }
            _ => {
                self.show_help = true;
                Action::Redraw
            }
        }
    }

    /// Handles one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Redraw;
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                Action::Redraw
            }
            KeyCode::F(2) => self.change_language(Language::Ua),
            KeyCode::F(3) => self.change_language(Language::En),
            KeyCode::F(5) => self.refresh(),
            KeyCode::Enter => {
                let line = self.input.clone();
                self.handle_line(&line)
            }
            KeyCode::Backspace => {
                if self.input_is_placeholder() {
                    self.input.clear();
                } else {
                    self.input.pop();
                }
                Action::Redraw
            }
            KeyCode::Char(c) => {
                if self.input_is_placeholder() {
                    self.input.clear();
                }
                self.input.push(c);
                Action::Redraw
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::Redraw
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::Redraw
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE);
                Action::Redraw
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(PAGE);
                Action::Redraw
            }
            KeyCode::Home => {
                self.scroll = 0;
                Action::Redraw
            }
            _ => Action::Redraw,
        }
    }

    /// Applies a fetch result; returns false when it belongs to a superseded request
    pub fn apply(&mut self, generation: u64, outcome: Result<WttrResponse, FetchError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Dropping stale response {} (current {})",
                generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(data) => {
                self.response = Some(data);
                self.status = Status::Idle;
            }
            Err(e) => {
                self.response = None;
                self.status = Status::Failed(e.kind());
            }
        }
        true
    }

    fn drain(&mut self, rx: &mut UnboundedReceiver<Fetched>) {
        while let Ok(fetched) = rx.try_recv() {
            self.apply(fetched.generation, fetched.outcome);
        }
    }

    /// Runs the desk until the user quits.
    ///
    /// `next_event` waits up to [`POLL_INTERVAL`] for a terminal event and
    /// sees the current state.
    pub async fn run<B, E>(
        mut self,
        terminal: &mut Terminal<B>,
        client: WttrClient,
        mut next_event: E,
    ) -> anyhow::Result<()>
    where
        B: Backend,
        E: FnMut(&Desk) -> io::Result<Option<Event>>,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let initial = self.load_default();
        dispatch(initial, &client, &tx);

        loop {
            self.drain(&mut rx);
            terminal.draw(|frame| ui::render(frame, &self))?;

            if let Some(Event::Key(key)) = next_event(&self)? {
                match self.handle_key(key) {
                    Action::Quit => return Ok(()),
                    action => dispatch(action, &client, &tx),
                }
            }

            // lets fetch tasks progress when the runtime has a single thread
            tokio::task::yield_now().await;
        }
    }
}

fn dispatch(action: Action, client: &WttrClient, tx: &UnboundedSender<Fetched>) {
    if let Action::Fetch(request) = action {
        spawn_fetch(client.clone(), tx.clone(), request);
    }
}

fn spawn_fetch(client: WttrClient, tx: UnboundedSender<Fetched>, request: FetchRequest) {
    tokio::spawn(async move {
        // Ukrainian responses carry the English descriptions too, so one fetch serves both languages
        let outcome = client.fetch(&request.city, Language::Ua).await;
        if let Err(e) = &outcome {
            tracing::warn!("Error loading data for {}: {}", request.city, e);
        }
        let _ = tx.send(Fetched {
            generation: request.generation,
            outcome,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{EN, UA};
    use reqwest::StatusCode;

    fn fixture() -> WttrResponse {
        serde_json::from_str(include_str!("../tests/fixtures/kyiv_j1.json")).unwrap()
    }

    fn desk() -> Desk {
        Desk::new(&Settings::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(desk: &mut Desk, text: &str) {
        for c in text.chars() {
            desk.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn fetched(action: Action) -> FetchRequest {
        match action {
            Action::Fetch(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn starts_with_placeholder() {
        let desk = desk();
        assert_eq!(desk.lang(), Language::Ua);
        assert_eq!(desk.input(), UA.placeholder);
        assert!(desk.input_is_placeholder());
        assert_eq!(desk.status(), Status::Idle);
    }

    #[test]
    fn empty_or_placeholder_search_loads_default_city() {
        let mut desk = desk();
        assert_eq!(fetched(desk.handle_line("   ")).city, "Kyiv");
        assert_eq!(fetched(desk.search(EN.placeholder)).city, "Kyiv");
        assert_eq!(desk.input(), UA.placeholder);
        assert_eq!(desk.status(), Status::Loading);
    }

    #[test]
    fn empty_search_after_typed_city_restores_placeholder() {
        let mut desk = desk();
        assert_eq!(fetched(desk.handle_line("Lviv")).city, "Lviv");
        assert_eq!(desk.input(), "Lviv");

        assert_eq!(fetched(desk.handle_line("")).city, "Kyiv");
        assert_eq!(desk.input(), UA.placeholder);
    }

    #[test]
    fn typing_replaces_placeholder_and_enter_searches() {
        let mut desk = desk();
        type_text(&mut desk, "Lvia");
        desk.handle_key(press(KeyCode::Backspace));
        type_text(&mut desk, "v");
        assert_eq!(desk.input(), "Lviv");

        let request = fetched(desk.handle_key(press(KeyCode::Enter)));
        assert_eq!(request.city, "Lviv");
        assert_eq!(desk.input(), "Lviv");
    }

    #[test]
    fn backspace_on_placeholder_clears_it() {
        let mut desk = desk();
        desk.handle_key(press(KeyCode::Backspace));
        assert_eq!(desk.input(), "");
        assert_eq!(fetched(desk.handle_key(press(KeyCode::Enter))).city, "Kyiv");
        assert_eq!(desk.input(), UA.placeholder);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut desk = desk();
        assert_eq!(desk.handle_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            desk.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        type_text(&mut desk, ":q");
        assert_eq!(desk.handle_key(press(KeyCode::Enter)), Action::Quit);
    }

    #[test]
    fn search_starts_new_generation() {
        let mut desk = desk();
        let first = fetched(desk.handle_line("Lviv"));
        let second = fetched(desk.handle_line("Odesa"));
        assert_eq!(first.city, "Lviv");
        assert_eq!(second.city, "Odesa");
        assert!(second.generation > first.generation);
        assert_eq!(desk.input(), "Odesa");
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut desk = desk();
        let old = fetched(desk.handle_line("Lviv"));
        let new = fetched(desk.handle_line("Odesa"));

        assert!(!desk.apply(old.generation, Ok(fixture())));
        assert_eq!(desk.status(), Status::Loading);

        assert!(desk.apply(new.generation, Err(FetchError::CityNotFound)));
        assert_eq!(desk.status(), Status::Failed(FailureKind::CityNotFound));
        assert!(desk.response().is_none());
        assert!(desk.report().is_none());
    }

    #[test]
    fn non_ok_status_fails_with_request_failed() {
        let mut desk = desk();
        let req = fetched(desk.handle_line("Nowhere"));
        desk.apply(req.generation, Err(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(desk.status(), Status::Failed(FailureKind::RequestFailed));
    }

    #[test]
    fn loading_hides_cards() {
        let mut desk = desk();
        let req = fetched(desk.load_default());
        desk.apply(req.generation, Ok(fixture()));
        assert_eq!(desk.report().unwrap().location, "Kyiv, Ukraine");

        desk.handle_key(press(KeyCode::F(5)));
        assert_eq!(desk.status(), Status::Loading);
        assert!(desk.report().is_none());
    }

    #[test]
    fn language_switch_rerenders_cached_report() {
        let mut desk = desk();
        let req = fetched(desk.load_default());
        desk.apply(req.generation, Ok(fixture()));
        assert_eq!(desk.report().unwrap().current.description, "Мінлива хмарність");

        assert_eq!(desk.handle_key(press(KeyCode::F(3))), Action::Redraw);
        assert_eq!(desk.input(), EN.placeholder);
        let report = desk.report().unwrap();
        assert_eq!(report.lang, Language::En);
        assert_eq!(report.current.description, "Partly cloudy");
        assert_eq!(desk.status(), Status::Idle);
    }

    #[test]
    fn language_switch_keeps_typed_city() {
        let mut desk = desk();
        type_text(&mut desk, "Lviv");
        desk.handle_key(press(KeyCode::F(3)));
        assert_eq!(desk.input(), "Lviv");
        desk.handle_key(press(KeyCode::F(2)));
        assert_eq!(desk.lang(), Language::Ua);
    }

    #[test]
    fn language_commands_clear_the_input() {
        let mut desk = desk();
        assert_eq!(desk.handle_line(":lang en"), Action::Redraw);
        assert_eq!(desk.lang(), Language::En);
        assert_eq!(desk.input(), EN.placeholder);
        desk.handle_line(":uk");
        assert_eq!(desk.lang(), Language::Ua);
    }

    #[test]
    fn unknown_commands_show_help() {
        let mut desk = desk();
        assert_eq!(desk.handle_line(":lang de"), Action::Redraw);
        assert!(desk.show_help());
        assert_eq!(desk.handle_line(":what"), Action::Redraw);
        assert!(desk.show_help());
        desk.handle_line("Lviv");
        assert!(!desk.show_help());
    }

    #[test]
    fn refresh_reuses_last_city() {
        let mut desk = desk();
        desk.handle_line("Kharkiv");
        assert_eq!(fetched(desk.handle_line(":refresh")).city, "Kharkiv");
    }

    #[test]
    fn scrolling_is_bounded_at_top() {
        let mut desk = desk();
        desk.handle_key(press(KeyCode::Up));
        assert_eq!(desk.scroll(), 0);
        desk.handle_key(press(KeyCode::PageDown));
        desk.handle_key(press(KeyCode::Down));
        assert_eq!(desk.scroll(), PAGE + 1);
        desk.handle_key(press(KeyCode::Home));
        assert_eq!(desk.scroll(), 0);
    }
}
