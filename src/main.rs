use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};
use dino_tui::{
    Config, Error, FrameDriver, Session, StepOutcome,
    audio::Speaker,
    input::{self, Action},
    render::{Assets, PixelBuf},
};
use std::fs::File;
use std::io::{self, Write, stdout};
use std::path::Path;
use std::time::{Duration, Instant};

const LOG_FILE: &str = "dino-tui.log";

// ── Logging ─────────────────────────────────────────────────────────────────

/// The alternate screen owns stderr, so logs go to a file, and only when
/// RUST_LOG asks for them.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create(LOG_FILE) {
        Ok(file) => env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init(),
        // The terminal is still in cooked mode here, so stderr is visible
        Err(e) => eprintln!("dino-tui: logging disabled, cannot create {LOG_FILE}: {e}"),
    }
}

fn load_config() -> Result<Config, Error> {
    match std::env::args_os().nth(1) {
        Some(path) => Config::load(Path::new(&path)),
        None => {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────────

/// Terminal size as a pixel buffer size: one pixel per column, two per row.
fn pixel_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols.max(1) as usize, rows.max(1) as usize * 2)
}

fn run(out: &mut impl Write, config: Config) -> Result<(), Error> {
    let (cols, rows) = terminal::size()?;
    let (pw, ph) = pixel_size(cols, rows);
    let buf = PixelBuf::new(pw, ph, config.viewport.width, config.viewport.height);

    let speaker = if config.sound {
        Speaker::open()
    } else {
        Speaker::silent()
    };
    let assets = Assets::load(config.sprites);
    let frame_dur = Duration::from_millis(config.frame_ms);
    let session = Session::new(config);
    let mut driver = FrameDriver::new(session, assets, speaker, buf);

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Event::Resize(c, r) = event {
                let (npw, nph) = pixel_size(c, r);
                log::debug!("Resized to {npw}x{nph} pixels");
                driver.surface_mut().resize(npw, nph);
                driver.render();
                continue;
            }
            match input::translate(&event) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Game(command)) => {
                    driver.command(command);
                }
                None => {}
            }
        }

        // Update + render
        if driver.step() == StepOutcome::Ended {
            let session = driver.session();
            log::info!(
                "Game over at {} (seed {})",
                session.run.score,
                session.seed()
            );
        }
        if driver.take_fresh_frame() {
            driver.surface().render(out)?;
        }

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

fn main() -> Result<(), Error> {
    init_logging();
    let config = load_config()?;
    log::info!("Dino TUI starting: {config:?}");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;
    // Lets held keys arrive as repeats instead of fresh presses
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        if enhanced {
            execute!(out, PopKeyboardEnhancementFlags)?;
        }
        execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    };

    let result = run(&mut out, config);
    let restored = cleanup(&mut out);
    log::info!("Dino TUI exiting");
    first_error(result, restored)
}

/// The game's own error wins over a failed terminal restore, which is
/// still logged.
fn first_error(result: Result<(), Error>, restored: io::Result<()>) -> Result<(), Error> {
    match (result, restored) {
        (Err(e), Err(restore)) => {
            log::error!("Terminal restore failed: {restore}");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored.map_err(Error::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(msg: &str) -> io::Error {
        io::Error::other(msg.to_string())
    }

    #[test]
    fn test_run_error_wins_over_restore_error() {
        let run = Err(Error::InvalidConfig("run".into()));
        let err = first_error(run, Err(io_err("restore"))).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg == "run"));
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let err = first_error(Ok(()), Err(io_err("restore"))).unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.to_string() == "restore"));
    }

    #[test]
    fn test_clean_exit() {
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_pixel_size_doubles_rows() {
        assert_eq!(pixel_size(80, 24), (80, 48));
        assert_eq!(pixel_size(0, 0), (1, 2));
    }
}
