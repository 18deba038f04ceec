use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use grblpanel::{
    init_logging_with_level, AppEvent, EventBus, EventFilter, LogNotifier, SettingsBinding,
    SettingsDialog, SettingsManager, SystemPinger, BUILD_DATE, VERSION,
};

/// Drive one headless session of the GrblPanel settings dialog.
#[derive(Parser, Debug)]
#[command(name = "grblpanel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (JSON or TOML); defaults to the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probe the configured controller address
    #[arg(long)]
    test_network: bool,

    /// Reset settings to defaults, keeping the port, user commands and preference flags
    #[arg(long)]
    restore_defaults: bool,

    /// Select a category by position before closing
    #[arg(long, value_name = "INDEX")]
    category: Option<usize>,

    /// Close with cancel, discarding every change
    #[arg(long)]
    cancel: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging_with_level(level)?;
    tracing::info!("GrblPanel {} (built {})", VERSION, BUILD_DATE);

    let manager = match cli.config {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new()?,
    };
    let config = manager.load_or_default()?;

    let events = Arc::new(EventBus::new());
    events.subscribe(EventFilter::All, |event: AppEvent| {
        tracing::info!("{}", event.description());
    });

    let mut dialog = SettingsDialog::with_event_bus(&config.dialog, events);
    let mut binding = SettingsBinding::new(config);
    binding.populate_dialog(&mut dialog);
    dialog.open()?;

    if let Some(index) = cli.category {
        dialog.select_category(index)?;
    }

    let notifier = LogNotifier::new(true);
    if cli.restore_defaults {
        dialog.restore_defaults(&notifier);
    }
    if cli.test_network {
        let pinger = SystemPinger::from(&dialog.settings().network_test);
        dialog.test_network(&pinger, &notifier);
    }

    if cli.cancel {
        dialog.cancel()?;
        return Ok(());
    }

    dialog.accept()?;
    binding.load_into_config(&dialog)?;
    manager.save(binding.config())?;
    tracing::info!("Settings saved to {}", manager.path().display());

    Ok(())
}
