use std::path::PathBuf;

use clap::Parser;
use fervor_config::Config;

mod app;
mod content;
mod logging;
mod session;

use app::App;
use session::TerminalSession;

/// Countdown, speaker and photo carousels for Fervor 2025, in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to read instead of the default location.
    #[arg(short, long, env = "FERVOR_CONFIG")]
    config: Option<PathBuf>,

    /// Start with the ambient background turned off.
    #[arg(long)]
    no_background: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_path = logging::init();
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_background {
        config.background = false;
    }
    tracing::info!(log = ?log_path, ?config, "starting fervor");

    let mut rng = fastrand::Rng::new();
    let mut images =
        content::gallery_images(&config.gallery.folders, config.gallery.max_images, &mut rng);
    if let Some(root) = &config.gallery.assets_root {
        images = content::retain_available(images, root);
    }

    let app = App::new(&config, images)?;
    let mut session = TerminalSession::start()?;
    app.run(session.terminal())
}
