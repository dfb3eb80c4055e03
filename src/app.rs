use crate::dex::{Identifier, Record, RecordSource};
use crate::error::LookupError;
use crate::lookup::{Capabilities, Completion, Direction, LookupState, Ticket};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Sent from a fetch task back to the UI loop.
#[derive(Debug)]
pub struct LookupMessage {
    pub ticket: Ticket,
    pub result: Result<Record, LookupError>,
}

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,

    pub input: String,
    pub input_mode: InputMode,

    pub lookup: LookupState,

    // Status message
    pub status_msg: String,
    pub spinner_frame: usize,

    source: Arc<dyn RecordSource>,
    message_tx: Sender<LookupMessage>,
    message_rx: Receiver<LookupMessage>,
}

impl App {
    pub fn new(source: Arc<dyn RecordSource>, capabilities: Capabilities) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel();
        Self {
            should_quit: false,
            show_help: false,

            input: String::new(),
            input_mode: InputMode::Editing,

            lookup: LookupState::new(capabilities),

            status_msg: "Escribe un nombre o número y pulsa Enter".to_string(),
            spinner_frame: 0,

            source,
            message_tx,
            message_rx,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.lookup.capabilities
    }

    /// Submit the search bar contents.
    pub fn submit_search(&mut self) {
        let Some((ticket, identifier)) = self.lookup.submit(&self.input) else {
            return;
        };
        self.input_mode = InputMode::Normal;
        self.spawn_fetch(ticket, identifier);
    }

    /// Look up a specific identifier, e.g. one given on the command line.
    pub fn search_for(&mut self, text: &str) {
        self.input = text.trim().to_string();
        self.submit_search();
    }

    pub fn navigate(&mut self, direction: Direction) {
        if let Some((ticket, identifier)) = self.lookup.navigate(direction) {
            self.spawn_fetch(ticket, identifier);
        }
    }

    fn spawn_fetch(&mut self, ticket: Ticket, identifier: Identifier) {
        self.status_msg = format!("Buscando {}...", identifier);
        tracing::debug!(ticket = ticket.value(), %identifier, "spawning fetch");
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(&identifier).await;
            // The receiver only goes away on shutdown.
            let _ = tx.send(LookupMessage { ticket, result });
        });
    }

    /// Apply every finished fetch. Returns how many were received.
    pub fn drain_completions(&mut self) -> usize {
        let mut received = 0;
        while let Ok(message) = self.message_rx.try_recv() {
            received += 1;
            match self.lookup.complete(message.ticket, message.result) {
                Completion::Loaded { id } => {
                    if let Some(record) = &self.lookup.record {
                        self.input = record.name.clone();
                        self.status_msg = format!(
                            "{} {}",
                            crate::catalog::format_id(id),
                            crate::catalog::display_name(&record.name)
                        );
                    }
                }
                Completion::Failed => {
                    self.status_msg.clear();
                }
                Completion::Stale => {}
            }
        }
        received
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.lookup.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn artwork_url(&self) -> Option<&str> {
        self.lookup.record.as_ref()?.image_url.as_deref()
    }

    /// Copy the artwork URL using xclip, falling back to wl-copy.
    pub fn yank_artwork(&mut self) {
        let Some(link) = self.artwork_url().map(str::to_string) else {
            return;
        };
        self.status_msg = if copy_to_clipboard(&link) {
            format!("Copiado: {}", link)
        } else {
            format!("Enlace: {} (portapapeles no disponible)", link)
        };
    }

    pub fn open_artwork(&mut self) {
        let Some(link) = self.artwork_url().map(str::to_string) else {
            return;
        };
        let _ = std::process::Command::new("xdg-open").arg(&link).spawn();
        self.status_msg = format!("Abriendo: {}", link);
    }
}

fn copy_to_clipboard(text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let candidates: [(&str, &[&str]); 2] = [("xclip", &["-selection", "clipboard"]), ("wl-copy", &[])];
    for (program, args) in candidates {
        if let Ok(mut child) = Command::new(program).args(args).stdin(Stdio::piped()).spawn() {
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(text.as_bytes());
            }
            let _ = child.wait();
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::Measurements;
    use crate::error::NOT_FOUND_MESSAGE;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every requested path segment; knows ids 1..=3 and "pikachu".
    struct ScriptedDex {
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedDex {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    fn record(id: u32, name: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            image_url: None,
            categories: vec!["grass".to_string(), "poison".to_string()],
            measurements: Measurements { height: 7, weight: 69 },
            statistics: Vec::new(),
        }
    }

    #[async_trait::async_trait]
    impl RecordSource for ScriptedDex {
        async fn fetch(&self, identifier: &Identifier) -> Result<Record, LookupError> {
            let segment = identifier.path_segment();
            self.requests.lock().unwrap().push(segment.clone());
            match segment.as_str() {
                "1" | "bulbasaur" => Ok(record(1, "bulbasaur")),
                "2" => Ok(record(2, "ivysaur")),
                "3" => Ok(record(3, "venusaur")),
                "pikachu" => Ok(record(25, "pikachu")),
                _ => Err(LookupError::Status { status: 404 }),
            }
        }
    }

    async fn settle(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while app.drain_completions() == 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("fetch never completed");
    }

    #[tokio::test]
    async fn test_search_pikachu() {
        let dex = ScriptedDex::new();
        let mut app = App::new(dex.clone(), Capabilities::full());
        app.input = "Pikachu".to_string();

        app.submit_search();
        assert!(app.lookup.loading);
        settle(&mut app).await;

        assert!(!app.lookup.loading);
        let record = app.lookup.record.as_ref().unwrap();
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.categories, vec!["grass", "poison"]);
        assert_eq!(dex.requests(), vec!["pikachu"]);
    }

    #[tokio::test]
    async fn test_search_unknown_shows_error() {
        let dex = ScriptedDex::new();
        let mut app = App::new(dex, Capabilities::basic());

        app.search_for("notapokemon");
        settle(&mut app).await;

        assert!(app.lookup.record.is_none());
        assert_eq!(app.lookup.error.as_deref(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_search_issues_no_request() {
        let dex = ScriptedDex::new();
        let mut app = App::new(dex.clone(), Capabilities::full());
        app.input = "   ".to_string();

        app.submit_search();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(app.drain_completions(), 0);
        assert!(!app.lookup.loading);
        assert!(dex.requests().is_empty());
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[tokio::test]
    async fn test_navigation_from_first_record() {
        let dex = ScriptedDex::new();
        let mut app = App::new(dex.clone(), Capabilities::full());
        app.search_for("bulbasaur");
        settle(&mut app).await;

        assert!(!app.lookup.can_go_previous());
        app.navigate(Direction::Previous);
        assert!(!app.lookup.loading);

        app.navigate(Direction::Next);
        settle(&mut app).await;

        assert_eq!(app.lookup.record.as_ref().map(|r| r.id), Some(2));
        assert_eq!(dex.requests(), vec!["bulbasaur", "2"]);
        assert_eq!(app.input, "ivysaur");
    }

    #[test]
    fn test_spinner_only_moves_while_loading() {
        let mut app = App::new(ScriptedDex::new(), Capabilities::full());

        app.tick();
        assert_eq!(app.spinner_frame, 0);

        app.lookup.loading = true;
        app.tick();
        app.tick();
        assert_eq!(app.spinner_frame, 2);
        assert_eq!(app.spinner(), SPINNER_FRAMES[2]);
    }
}
