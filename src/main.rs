mod display;

use std::fs::File;
use std::io::{self, stdout, BufWriter};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};

use dino_rush::config::GameConfig;
use dino_rush::geometry::Vec2;
use dino_rush::screens::App;

use display::TerminalHost;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode while the game runs, so logs go to a file.
/// `RUST_LOG` picks the level (default `info`).
fn init_logging(config: &GameConfig) {
    let path = &config.storage.log_file;
    match File::create(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("logging disabled, cannot open {}: {}", path.display(), e),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let config_path = GameConfig::default_path();
    let loaded = GameConfig::load(&config_path);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => GameConfig::default(),
    };
    init_logging(&config);
    if let Err(e) = loaded {
        log::warn!("{}; using default settings", e);
    }
    log::info!("starting with config {}", config_path.display());

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let mouse = out.execute(EnableMouseCapture).is_ok();

    // A dedicated thread does the blocking event reads and forwards them, so
    // the frame loop only ever polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, rx, config);

    // Always restore the terminal
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("game ended with error: {}", e);
    }
    result
}

fn run<W: io::Write>(out: &mut W, rx: mpsc::Receiver<Event>, config: GameConfig) -> io::Result<()> {
    let logical = Vec2::new(config.window.width, config.window.height);
    let mut host = TerminalHost::new(out, rx, logical, config.window.target_fps)?;
    let mut app = App::new(config);
    app.run(&mut host).map_err(io::Error::other)
}
