//! Doge Dodge headless runner
//!
//! Drives the simulation at a fixed cadence with a simple autopilot standing in
//! for keyboard/touch input, drains sound cues, and prints the final state as
//! JSON. Usage: `doge-dodge [settings.json]`

use std::path::Path;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use doge_dodge::consts::*;
use doge_dodge::sim::{Game, Hitbox, Mode, TickInput};
use doge_dodge::{Assets, AudioManager, Settings, floor_div};

/// Tiles ahead of the hitbox the autopilot looks for obstacles
const LOOKAHEAD_TILES: i32 = 2;

fn main() {
    env_logger::init();
    log::info!("Doge Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(wall_clock_seed);
    log::info!("Seed {}", seed);

    let sprite = settings.player_sprite;
    let assets = Assets::placeholder(sprite.width, sprite.height);
    let mut game = Game::from_seed(assets, AudioManager::from_settings(&settings), seed);

    let tick_duration = settings.tick_duration();
    let mut runs = 0u32;
    let mut best = 0u32;
    let mut last_mode = Mode::Title;

    for _ in 0..settings.max_ticks {
        let started = Instant::now();

        let input = TickInput::from(autopilot(&game));
        let snap = game.tick(input);

        for cue in game.audio_mut().drain() {
            log::debug!("Play {:?} at {:.2}", cue.effect, cue.volume);
        }

        if snap.mode == Mode::GameOver && last_mode == Mode::Game {
            runs += 1;
            best = best.max(snap.score);
            log::info!("Run {} ended with {} ({:?})", runs, snap.score_text(), game.last_hit());
        }
        last_mode = snap.mode;

        if settings.realtime {
            if let Some(rest) = tick_duration.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    log::info!("{} runs finished, best score {}", runs, best);

    let report = serde_json::json!({
        "seed": seed,
        "runs": runs,
        "best": best,
        "snapshot": game.snapshot(),
        "visible_obstacles": game.visible_obstacles(),
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode report: {}", e),
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Decide whether to press jump this tick
///
/// Outside a run it always presses, which starts a run or restarts after the
/// game-over countdown. In a run it hops from the ground when an obstacle is
/// coming up.
fn autopilot(game: &Game<AudioManager>) -> bool {
    let state = game.state();
    if state.mode != Mode::Game {
        return true;
    }
    if state.player.pos.y < FLOOR_Y_16 {
        return false;
    }

    let hitbox = Hitbox::for_player(state.player.pos, &game.assets().player);
    let front = floor_div(hitbox.x1, TILE_SIZE);
    (front..=front + LOOKAHEAD_TILES).any(|column| state.obstacle_at(column).is_some())
}
