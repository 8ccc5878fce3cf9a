use std::sync::Arc;
use std::thread;

use glam::DVec3;

use starraid_app::behaviors::{Drifter, Starbase};
use starraid_app::game_loop::{spawn_game_loop, TICK_DURATION};
use starraid_app::state::{AppState, LoopCommand};
use starraid_core::commands::FieldCommand;
use starraid_core::config::FieldConfig;
use starraid_core::enums::{BogeySlot, MissileDirection, MissileSlot, ViewMode};
use starraid_sim::pools::BogeySpawn;

fn load_config() -> FieldConfig {
    let Some(path) = std::env::args().nth(1) else {
        return FieldConfig::default();
    };
    match FieldConfig::load(&path) {
        Ok(config) => {
            log::info!("loaded field config from {path}");
            config
        }
        Err(e) => {
            log::warn!("could not load {path}: {e}; using defaults");
            FieldConfig::default()
        }
    }
}

fn wait_ticks(ticks: u32) {
    thread::sleep(TICK_DURATION * ticks);
}

fn main() {
    env_logger::init();

    let config = load_config();
    let state = AppState::new();

    let (tx, handle) = match spawn_game_loop(config, Arc::clone(&state.latest_frame)) {
        Ok(started) => started,
        Err(e) => {
            log::error!("failed to start game loop: {e}");
            std::process::exit(1);
        }
    };
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    let field = |cmd: FieldCommand| state.send(LoopCommand::Field(cmd));

    field(FieldCommand::SetSpeed { speed: 4.0 });
    state.send(LoopCommand::SpawnBogey {
        slot: BogeySlot::First,
        spawn: BogeySpawn::at(DVec3::new(0.0, 0.0, 60.0)),
        behavior: Box::new(Starbase),
    });
    state.send(LoopCommand::SpawnBogey {
        slot: BogeySlot::Second,
        spawn: BogeySpawn {
            glyph: "K".into(),
            ..BogeySpawn::at(DVec3::new(-30.0, 10.0, 90.0))
        },
        behavior: Box::new(Drifter::new(DVec3::new(2.0, 0.0, -1.0), 2)),
    });
    wait_ticks(10);

    field(FieldCommand::FireMissile {
        slot: MissileSlot::PlayerLeft,
        position: DVec3::new(-1.0, -1.0, 0.0),
        direction: MissileDirection::Fore,
    });
    field(FieldCommand::FireMissile {
        slot: MissileSlot::PlayerRight,
        position: DVec3::new(1.0, -1.0, 0.0),
        direction: MissileDirection::Fore,
    });
    wait_ticks(40);

    field(FieldCommand::Explosion {
        position: DVec3::new(5.0, 5.0, 40.0),
    });
    field(FieldCommand::SetMode { mode: ViewMode::Aft });
    wait_ticks(20);
    field(FieldCommand::SetMode {
        mode: ViewMode::Scan,
    });
    wait_ticks(20);
    field(FieldCommand::ResetForNewRound);
    wait_ticks(5);

    let last = state.latest_frame();
    state.send(LoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
    }

    match last {
        Some(frame) => {
            println!(
                "tick {} ({:.2}s) mode {:?}: {} of {} records visible",
                frame.time.tick,
                frame.time.elapsed_secs,
                frame.mode,
                frame.visible_records().count(),
                frame.records.len()
            );
            match serde_json::to_string_pretty(&frame) {
                Ok(json) => log::debug!("final frame:\n{json}"),
                Err(e) => log::warn!("could not serialize frame: {e}"),
            }
        }
        None => println!("no frame was produced"),
    }
}
