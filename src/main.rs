mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use space_survival::achievements::AchievementManager;
use space_survival::compute::GameState;
use space_survival::controller::{GameController, TickOutcome};
use space_survival::logging::MessageLog;
use space_survival::persistence::{AchievementFile, AchievementLog, MemoryAchievementFile};
use space_survival::settings::{Settings, DEFAULT_SETTINGS_FILE};
use space_survival::spawn::GameRng;
use space_survival::stats::PlayerStats;

type Controller = GameController<MessageLog, Box<dyn AchievementFile>>;

/// Render rate while waiting between ticks.
const FRAME: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(name = "space_survival")]
#[command(about = "Survive asteroids and enemies on a 10×20 grid")]
struct Args {
    /// Settings file (JSON)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,
    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Show gameplay messages
    #[arg(long)]
    verbose: bool,
    /// Milliseconds between ticks
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,
    /// Where mastered achievements are logged
    #[arg(long)]
    achievement_log: Option<PathBuf>,
    /// Keep achievement mastery in memory only
    #[arg(long)]
    no_persist: bool,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if self.verbose {
            settings.verbose = true;
        }
        if let Some(ms) = self.tick_ms {
            settings.tick_millis = ms;
        }
        if let Some(path) = &self.achievement_log {
            settings.achievement_log = path.clone();
        }
        if self.no_persist {
            settings.persist_achievements = false;
        }
    }
}

fn build_controller(settings: &Settings) -> std::io::Result<Controller> {
    let file: Box<dyn AchievementFile> = if settings.persist_achievements {
        Box::new(AchievementLog::new(settings.achievement_log.clone()))
    } else {
        Box::new(MemoryAchievementFile::new())
    };
    let mut controller = GameController::with_default_achievements(
        GameState::new(MessageLog::new()),
        PlayerStats::new(),
        AchievementManager::new(file),
    )
    .map_err(std::io::Error::other)?;
    controller.set_verbose(settings.verbose);
    Ok(controller)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Map a key press to a command string.  Arrow keys alias W/A/S/D.
fn command_for(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => Some("W".to_string()),
        KeyCode::Left => Some("A".to_string()),
        KeyCode::Down => Some("S".to_string()),
        KeyCode::Right => Some("D".to_string()),
        KeyCode::Char(' ') => Some("F".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

fn game_loop<W: Write>(
    out: &mut W,
    controller: &mut Controller,
    rng: &mut GameRng,
    tick_every: Duration,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut tick: u64 = 0;
    let mut last_tick = Instant::now();
    let mut game_over = false;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                _ if game_over => {}
                _ => {
                    if let Some(command) = command_for(code) {
                        // Invalid keys are logged; boundary hits only show in verbose mode.
                        let _ = controller.handle_input(&command);
                    }
                }
            }
        }

        // ── Fixed-interval ticks ─────────────────────────────────────────────
        if !game_over && last_tick.elapsed() >= tick_every {
            last_tick = Instant::now();
            tick += 1;
            if controller.on_tick(tick, rng) == TickOutcome::GameOver {
                game_over = true;
            }
        }

        display::render(out, controller)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    args.apply(&mut settings);
    if args.save_settings {
        settings.save(&args.settings)?;
    }

    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            GameRng::seeded(seed)
        }
        None => GameRng::from_entropy(),
    };
    let mut controller = build_controller(&settings)?;
    let tick_every = Duration::from_millis(settings.tick_millis.max(1));

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
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

    let result = game_loop(&mut out, &mut controller, &mut rng, tick_every, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if result.is_ok() {
        for line in controller.summary_lines() {
            println!("{line}");
        }
    }
    result
}
