use anyhow::{Context, Result};
use clap::Parser;
use voicebros::cli::Cli;
use voicebros::platform::{open_audio, FsAssets, TerminalInput};
use voicebros::tui::Tui;
use voicebros::{App, Config};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_panic_hook();

    // Set up logging directory
    let log_dir = voicebros::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("voicebros.log");

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file so log lines never land on the UI
    let file_appender = tracing_appender::rolling::never(&log_dir, "voicebros.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    let config = cli.apply(config);
    tracing::info!("Loaded config from {:?}", config_path);

    let assets = FsAssets::new(&config.assets.dir);
    let audio = open_audio(cli.mute);
    let title = config.window.title.clone();
    let mut input = TerminalInput::new(config.canvas());
    let mut app = App::new(config, Box::new(assets), audio);

    let mut tui = Tui::new()?;
    tui.enter(&title)?;
    let result = app.run(tui.terminal_mut(), &mut input);

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    tui.exit()?;
    drop(guard);

    result
}
