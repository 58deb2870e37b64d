use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use caderno_config::{default_title, timestamp, CadernoConfig, DEFAULT_PROMPT};
use caderno_core::{ExtractionOutcome, ExtractionRequest};
use caderno_extract::ExtractionPipeline;
use caderno_transcribe::GeminiClient;
use docwriter::DocxSink;

use tui::{draw_ui, handle_key_event, AppState, Status, UiAction};

#[tokio::main]
async fn main() -> Result<()> {
    let config = CadernoConfig::from_env();
    // File-only logging: the TUI owns the screen.
    logging::init_file_logger(&config.log_dir);

    // Pre-flight: refuse to start without a credential.
    let Some(api_key) = config.api_key.clone() else {
        eprintln!("The Gemini API key (GEMINI_API_KEY or GOOGLE_API_KEY) was not found.");
        eprintln!("Configure it in the environment. The program will now close.");
        std::process::exit(1);
    };

    let pipeline = Arc::new(ExtractionPipeline::new(
        Arc::new(GeminiClient::new(api_key, config.model.clone())),
        Arc::new(DocxSink::new()),
    ));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, pipeline, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    pipeline: Arc<ExtractionPipeline>,
    config: &CadernoConfig,
) -> Result<()> {
    let mut state = AppState::new(DEFAULT_PROMPT);
    // One-shot handoff: the worker sends exactly one outcome per trigger.
    let (tx, mut rx) = mpsc::channel::<ExtractionOutcome>(1);

    loop {
        terminal.draw(|f| draw_ui(f, &state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, &mut state) == UiAction::StartExtraction {
                    start_extraction(&mut state, &pipeline, config, tx.clone());
                }
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            state.apply_outcome(outcome);
        }

        if state.should_quit {
            // No cancellation: an in-flight worker is detached, not interrupted.
            return Ok(());
        }
    }
}

fn start_extraction(
    state: &mut AppState,
    pipeline: &Arc<ExtractionPipeline>,
    config: &CadernoConfig,
    tx: mpsc::Sender<ExtractionOutcome>,
) {
    let now = Local::now();
    let request = ExtractionRequest::new(
        PathBuf::from(state.image_path.trim()),
        state.prompt.clone(),
    );
    let title = default_title(now);
    // Output path is fixed: per-user documents directory, timestamped name.
    let destination = config.destination_for(&timestamp(now));

    state.busy = true;
    state.status = Status::Processing;

    let pipeline = Arc::clone(pipeline);
    tokio::spawn(async move {
        let outcome = pipeline.run(&request, &title, &destination).await;
        let _ = tx.send(outcome).await;
    });
}
