use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jobtrack_core::{JobSource, Tab, TrackerConfig, ViewController};
use tracing::info;

use crate::theme::ColorScheme;

/// How long a status message stays in the status bar
const MESSAGE_TTL_SECS: i64 = 5;

pub struct App {
    // Core data
    pub view: ViewController,
    source: Box<dyn JobSource>,

    // Configuration
    pub config: TrackerConfig,
    pub config_path: Option<PathBuf>,

    // Timing and status
    pub last_refresh: DateTime<Utc>,
    pub last_message: Option<String>,
    message_timeout: Option<DateTime<Utc>>,

    pub color_scheme: ColorScheme,

    // Control flags
    pub should_quit: bool,
}

impl App {
    pub fn new(
        source: Box<dyn JobSource>,
        config: TrackerConfig,
        config_path: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let view = ViewController::from_source(source.as_ref())?;
        info!("Loaded {} jobs from {}", view.jobs().len(), source.describe());

        Ok(Self {
            view,
            source,
            config,
            config_path,
            last_refresh: Utc::now(),
            last_message: None,
            message_timeout: None,
            color_scheme: ColorScheme::default(),
            should_quit: false,
        })
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Re-fetch from the data source, reporting the outcome in the status bar
    pub fn refresh(&mut self) {
        match self.view.reload(self.source.as_ref()) {
            Ok(count) => {
                self.last_refresh = Utc::now();
                self.set_message(format!("Reloaded {} applications", count));
            }
            Err(e) => self.set_message(format!("❌ Reload failed: {}", e)),
        }
    }

    pub fn set_message(&mut self, message: String) {
        self.last_message = Some(message);
        self.message_timeout = Some(Utc::now() + Duration::seconds(MESSAGE_TTL_SECS));
    }

    pub fn clear_expired_message(&mut self) {
        if let Some(timeout) = self.message_timeout {
            if Utc::now() >= timeout {
                self.last_message = None;
                self.message_timeout = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.view.is_search_focused() {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('/') => self.view.focus_search(),
            KeyCode::Char(c) => {
                if let Some(tab) = Tab::from_shortcut(c) {
                    self.view.select_tab(tab);
                }
            }
            KeyCode::Tab => self.view.next_tab(),
            KeyCode::BackTab => self.view.previous_tab(),
            KeyCode::Esc => self.view.clear_search(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.view.push_search_char(c),
            KeyCode::Backspace => self.view.pop_search_char(),
            KeyCode::Esc | KeyCode::Enter => self.view.blur_search(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::{FileJobSource, SampleJobSource};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn sample_app() -> App {
        App::new(Box::new(SampleJobSource::new()), TrackerConfig::default(), None).unwrap()
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut app = sample_app();
        assert_eq!(app.view.active_tab(), Tab::Dashboard);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view.active_tab(), Tab::Jobs);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view.active_tab(), Tab::Settings);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.view.active_tab(), Tab::Settings);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.view.active_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_tab_keys_cycle() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view.active_tab(), Tab::Jobs);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view.active_tab(), Tab::Settings);
    }

    #[test]
    fn test_search_mode_captures_typing() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.view.is_search_focused());

        for c in "q2x".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.view.search(), "q2x");
        assert!(!app.should_quit);
        assert_eq!(app.view.active_tab(), Tab::Dashboard);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.search(), "q2");

        press(&mut app, KeyCode::Esc);
        assert!(!app.view.is_search_focused());
        assert_eq!(app.view.search(), "q2");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view.search(), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = sample_app();
        app.view.focus_search();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_refresh_reports_failure_and_keeps_jobs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("jobs.json");
        std::fs::write(&path, "[]").unwrap();

        let mut app =
            App::new(Box::new(FileJobSource::new(&path)), TrackerConfig::default(), None).unwrap();
        assert!(app.view.jobs().is_empty());

        std::fs::write(
            &path,
            r#"[{"id":"1","title":"Dev","company":"Acme","status":"applied","date":"2024-01-01"}]"#,
        )
        .unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view.jobs().len(), 1);
        assert_eq!(app.last_message.as_deref(), Some("Reloaded 1 applications"));

        std::fs::write(&path, "garbage").unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view.jobs().len(), 1);
        assert!(app.last_message.as_deref().unwrap_or("").contains("Reload failed"));
    }
}
