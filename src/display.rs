/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// controller.  No game logic is performed; this module only translates
/// state into terminal commands.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use space_survival::achievements::Tier;
use space_survival::consts::{GAME_HEIGHT, GAME_WIDTH};
use space_survival::controller::GameController;
use space_survival::entities::{ObjectKind, PowerUpKind, SpaceObject};
use space_survival::logging::MessageLog;
use space_survival::persistence::AchievementFile;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per grid cell (keeps the 10-wide grid readable).
const CELL_W: u16 = 2;
/// Top-left corner of the border.
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 1;
/// Column where the side panel starts.
const PANEL_X: u16 = ORIGIN_X + GAME_WIDTH as u16 * CELL_W + 4;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ASTEROID: Color = Color::DarkYellow;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_SHIELD: Color = Color::Blue;
const C_HEALTH: Color = Color::Magenta;
const C_MESSAGE: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write, F: AchievementFile>(
    out: &mut W,
    controller: &GameController<MessageLog, F>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;

    let model = controller.model();
    for object in model.space_objects() {
        draw_object(out, object)?;
    }
    draw_ship(out, model.ship().x(), model.ship().y())?;

    draw_hud(out, controller)?;
    draw_messages(out, model.logger())?;
    draw_controls_hint(out)?;

    if model.is_game_over() {
        draw_game_over(out, controller)?;
    } else if controller.is_paused() {
        draw_centered(out, ORIGIN_Y + GAME_HEIGHT as u16 / 2, "PAUSED", Color::Yellow)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, ORIGIN_Y + GAME_HEIGHT as u16 + 3))?;
    out.flush()?;
    Ok(())
}

/// Terminal cell for a grid coordinate.
fn cell(x: i32, y: i32) -> (u16, u16) {
    (
        ORIGIN_X + 1 + x as u16 * CELL_W,
        ORIGIN_Y + 1 + y as u16,
    )
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let inner = (GAME_WIDTH as u16 * CELL_W) as usize;
    let bottom = ORIGIN_Y + GAME_HEIGHT as u16 + 1;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;
    out.queue(cursor::MoveTo(ORIGIN_X, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in ORIGIN_Y + 1..bottom {
        out.queue(cursor::MoveTo(ORIGIN_X, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN_X + inner as u16 + 1, row))?;
        out.queue(Print("│"))?;
    }

    out.queue(cursor::MoveTo(ORIGIN_X + 2, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print("SPACE SURVIVAL"))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_object<W: Write>(out: &mut W, object: &SpaceObject) -> std::io::Result<()> {
    let color = match object.kind {
        ObjectKind::Bullet => C_BULLET,
        ObjectKind::Asteroid => C_ASTEROID,
        ObjectKind::Enemy => C_ENEMY,
        ObjectKind::PowerUp(PowerUpKind::Shield) => C_SHIELD,
        ObjectKind::PowerUp(PowerUpKind::Health) => C_HEALTH,
    };
    let (col, row) = cell(object.x(), object.y());
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(object.glyph()))?;
    Ok(())
}

fn draw_ship<W: Write>(out: &mut W, x: i32, y: i32) -> std::io::Result<()> {
    let (col, row) = cell(x, y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(Print("▲"))?;
    Ok(())
}

// ── HUD (side panel) ──────────────────────────────────────────────────────────

fn draw_hud<W: Write, F: AchievementFile>(
    out: &mut W,
    controller: &GameController<MessageLog, F>,
) -> std::io::Result<()> {
    let model = controller.model();
    let ship = model.ship();
    let stats = controller.stats();

    let rows: [(String, Color); 4] = [
        (format!("Level:  {:>4}", model.level()), Color::Green),
        (format!("Score:  {:>4}", ship.score()), C_HUD_SCORE),
        (format!("Health: {:>4}", ship.health()), C_HUD_HEALTH),
        (format!("Time:   {:>4}s", stats.elapsed_seconds()), Color::White),
    ];
    for (i, (text, color)) in rows.iter().enumerate() {
        out.queue(cursor::MoveTo(PANEL_X, ORIGIN_Y + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(text))?;
    }

    let top = ORIGIN_Y + rows.len() as u16 + 1;
    out.queue(cursor::MoveTo(PANEL_X, top))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Achievements"))?;
    for (i, achievement) in controller.achievements().achievements().iter().enumerate() {
        let color = match achievement.tier() {
            Tier::Novice => Color::Grey,
            Tier::Expert => Color::Yellow,
            Tier::Master => Color::Green,
        };
        out.queue(cursor::MoveTo(PANEL_X, top + 1 + i as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!(
            "{:<20}{:>4.0}% {}",
            achievement.name(),
            achievement.progress() * 100.0,
            achievement.tier()
        )))?;
    }
    Ok(())
}

// ── Message log ───────────────────────────────────────────────────────────────

fn draw_messages<W: Write>(out: &mut W, messages: &MessageLog) -> std::io::Result<()> {
    let top = ORIGIN_Y + 10;
    out.queue(style::SetForegroundColor(C_MESSAGE))?;
    for (i, line) in messages.lines().enumerate() {
        out.queue(cursor::MoveTo(PANEL_X, top + i as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(ORIGIN_X, ORIGIN_Y + GAME_HEIGHT as u16 + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D : Move   F : Fire   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_centered<W: Write>(out: &mut W, row: u16, text: &str, color: Color) -> std::io::Result<()> {
    let centre = ORIGIN_X + 1 + GAME_WIDTH as u16 * CELL_W / 2;
    let col = centre.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_game_over<W: Write, F: AchievementFile>(
    out: &mut W,
    controller: &GameController<MessageLog, F>,
) -> std::io::Result<()> {
    let banner = ["╔════════════╗", "║ GAME  OVER ║", "╚════════════╝"];
    let start_row = ORIGIN_Y + 3;
    for (i, line) in banner.iter().enumerate() {
        draw_centered(out, start_row + i as u16, line, Color::Red)?;
    }

    // Summary goes under the message log in the side panel.
    let top = ORIGIN_Y + 17;
    out.queue(cursor::MoveTo(PANEL_X, top))?;
    out.queue(style::SetForegroundColor(Color::Red))?;
    out.queue(Print("Game Over - Player Stats"))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    for (i, line) in controller.summary_lines().iter().enumerate() {
        out.queue(cursor::MoveTo(PANEL_X, top + 1 + i as u16))?;
        out.queue(Print(line))?;
    }

    draw_centered(out, start_row + 4, "Q - Quit", Color::White)?;
    Ok(())
}
