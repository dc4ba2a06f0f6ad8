use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use global_notifications::config::{self, ConfigResult};
use global_notifications::gallery::{GalleryApp, STORIES, parse_story};
use global_notifications::notification::NotificationStore;

/// Notification banner story gallery
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Notification banner story gallery: every message type and position in your terminal"
)]
struct Args {
    /// Story to start on (see --list)
    #[arg(long, value_parser = parse_story)]
    story: Option<usize>,

    /// Let notifications hide themselves after the configured delay
    #[arg(long)]
    auto_hide: bool,

    /// Print the available stories and exit
    #[arg(long)]
    list: bool,

    /// Read configuration from this file instead of ~/.config/global-notifications/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/global-notifications-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if args.list {
        for story in &STORIES {
            println!("{}\t{}", story.name, story.title);
        }
        return Ok(());
    }

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    let auto_hide_delay = config_result.config.notifications.auto_hide_delay();
    let store = NotificationStore::spawn_worker(auto_hide_delay);
    let app = GalleryApp::new(
        store,
        &config_result.config,
        args.story.unwrap_or(0),
        args.auto_hide,
    );

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== GALLERY DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/global-notifications-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== GALLERY DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: GalleryApp,
    config_result: ConfigResult,
) -> Result<()> {
    // A config warning takes the first slot; the story shows on the next key press
    match config_result.warning {
        Some(warning) => app.show_warning(&warning)?,
        None => app.show_selected()?,
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
