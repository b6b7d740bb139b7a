//! Scribe binary entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Action, EditSession, translate_command};
use core_config::{Config, load_from};
use core_events::{InputEvent, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use core_keymap::Keymap;
use core_model::Layout;
use core_render::{SyntaxLexer, build_render_model, lexer_for, paint};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use std::fmt;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod prompt;

use prompt::TerminalPrompt;

const LOG_FILE_NAME: &str = "scribe.log";

#[derive(Parser, Debug)]
#[command(name = "scribe", version, about = "Scribe text editor")]
struct Args {
    /// File to open. Missing files start empty and are created on save.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `scribe.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Everything that can fail before the terminal is touched.
    fn bootstrap(args: &Args) -> Result<EditorBootstrap> {
        let config = load_from(args.config.clone())?;
        let keymap = match Keymap::from_config(config.keys()) {
            Ok(k) => k,
            Err(e) => {
                warn!(target: "config", error = %e, "invalid_key_binding_using_defaults");
                Keymap::default()
            }
        };
        let lexer = lexer_for(config.lexer_id());
        let session = EditSession::open(args.path.clone(), &config);
        info!(
            target: "runtime.startup",
            path = ?args.path,
            config_source = ?config.source,
            lexer = lexer.id(),
            history_capacity = config.history_capacity(),
            lines = session.model().state().document.line_count(),
            "bootstrap_complete"
        );
        Ok(EditorBootstrap {
            session,
            keymap,
            lexer,
            config,
        })
    }
}

struct EditorBootstrap {
    session: EditSession,
    keymap: Keymap,
    lexer: Box<dyn SyntaxLexer>,
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    Quit,
    InputError,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
            ShutdownReason::InputError => "input_error",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct EditorRuntime<'a> {
    guard: TerminalGuard<'a>,
    session: EditSession,
    keymap: Keymap,
    lexer: Box<dyn SyntaxLexer>,
    legend: String,
    layout: Layout,
}

impl<'a> EditorRuntime<'a> {
    fn new(guard: TerminalGuard<'a>, boot: EditorBootstrap) -> Self {
        let legend = boot.keymap.legend();
        trace!(target: "runtime", lexer = boot.config.lexer_id(), "runtime_ready");
        Self {
            guard,
            session: boot.session,
            keymap: boot.keymap,
            lexer: boot.lexer,
            legend,
            layout: Layout::for_terminal(0, 0),
        }
    }

    fn run(&mut self) -> Result<ShutdownReason> {
        let title = format!("scribe - {}", self.session.model().state().display_name());
        self.guard.backend().set_title(&title)?;
        let mut dirty = true;
        loop {
            if dirty {
                self.render()?;
            }
            let event = match core_input::read_event() {
                Ok(Some(ev)) => ev,
                Ok(None) => {
                    dirty = false;
                    continue;
                }
                Err(e) => {
                    warn!(target: "runtime", error = %e, "input_read_failed");
                    return Ok(ShutdownReason::InputError);
                }
            };
            let (repaint, quit) = self.handle_event(event);
            if quit {
                return Ok(ShutdownReason::Quit);
            }
            dirty = repaint;
        }
    }

    /// Returns `(repaint, quit)`.
    fn handle_event(&mut self, event: InputEvent) -> (bool, bool) {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let mut prompt = self.prompt();
                self.apply(Action::Click { row, col: column }, &mut prompt)
            }
            InputEvent::Mouse(_) => (false, false),
            InputEvent::Resize(w, h) => {
                self.resize(w, h);
                (true, false)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> (bool, bool) {
        let command = self.keymap.resolve(key);
        let mut prompt = self.prompt();
        match translate_command(command, &mut prompt) {
            Some(action) => self.apply(action, &mut prompt),
            None => (self.session.note_input() || prompt.was_shown(), false),
        }
    }

    fn apply(&mut self, action: Action, prompt: &mut TerminalPrompt) -> (bool, bool) {
        let result = self.session.dispatch(action, prompt);
        // A prompt overwrote the status row.
        (result.dirty || prompt.was_shown(), result.quit)
    }

    fn prompt(&self) -> TerminalPrompt {
        let width = u16::try_from(self.layout.width()).unwrap_or(u16::MAX);
        TerminalPrompt::new(width, self.layout.status_row())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.layout = Layout::for_terminal(width, height);
        self.session.set_text_height(self.layout.text_height());
        trace!(target: "runtime", width, height, "resize");
    }

    fn render(&mut self) -> Result<()> {
        let (w, h) = self.guard.backend().size()?;
        if self.layout != Layout::for_terminal(w, h) {
            self.resize(w, h);
        }
        let frame = build_render_model(
            self.session.model(),
            &self.layout,
            self.lexer.as_ref(),
            &self.legend,
        );
        paint(&mut stdout().lock(), &frame).context("painting frame")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let boot = AppStartup::bootstrap(&args)?;
    let guard = startup.backend.enter_guard()?;
    let mut runtime = EditorRuntime::new(guard, boot);
    let reason = runtime.run()?;
    drop(runtime);
    info!(target: "runtime.shutdown", reason = %reason, "shutdown");
    Ok(())
}
