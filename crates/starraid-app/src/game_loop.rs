//! Game loop thread. Runs the field engine at a fixed tick rate.
//!
//! The engine is created inside this thread and never leaves it, so
//! `update` and `render` are always called strictly in sequence. Commands
//! arrive via an `mpsc` channel; the latest frame is stored in shared state
//! for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use starraid_core::config::FieldConfig;
use starraid_core::constants::{DT, TICK_RATE};
use starraid_core::events::FieldEvent;
use starraid_core::state::FieldFrame;
use starraid_sim::engine::FieldEngine;

use crate::state::LoopCommand;

/// Duration of one tick (40 ms).
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: FieldConfig,
    latest_frame: Arc<Mutex<Option<FieldFrame>>>,
) -> std::io::Result<(mpsc::Sender<LoopCommand>, std::thread::JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starraid-game-loop".into())
        .spawn(move || {
            let mut engine = FieldEngine::new(config);
            run_game_loop(&mut engine, &cmd_rx, &latest_frame);
            log::info!("game loop stopped at tick {}", engine.time().tick);
        })?;

    Ok((cmd_tx, handle))
}

/// Apply every pending command. Returns false when the loop should stop.
pub fn drain_commands(engine: &mut FieldEngine, cmd_rx: &mpsc::Receiver<LoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(LoopCommand::Field(cmd)) => engine.apply(cmd),
            Ok(LoopCommand::SpawnBogey {
                slot,
                spawn,
                behavior,
            }) => engine.set_bogey(slot, spawn, behavior),
            Ok(LoopCommand::Resize(viewport)) => engine.set_viewport(viewport),
            Ok(LoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Run one tick: update, log events, render and publish the frame.
pub fn step(engine: &mut FieldEngine, latest_frame: &Mutex<Option<FieldFrame>>) {
    engine.update(DT);

    for event in engine.drain_events() {
        log_event(&event);
    }

    let frame = engine.render();
    if let Ok(mut lock) = latest_frame.lock() {
        match lock.as_mut() {
            Some(existing) => existing.clone_from(frame),
            None => *lock = Some(frame.clone()),
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    engine: &mut FieldEngine,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    latest_frame: &Mutex<Option<FieldFrame>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        if !drain_commands(engine, cmd_rx) {
            return;
        }

        step(engine, latest_frame);

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset instead of spiralling to catch up
            log::warn!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

fn log_event(event: &FieldEvent) {
    match event {
        FieldEvent::BogeyHit { slot, outcome, .. } => {
            log::info!("bogey {slot:?} hit: {outcome:?}")
        }
        FieldEvent::MissilesIntercepted { player, .. } => {
            log::info!("enemy missile shot down by {player:?}")
        }
        other => log::debug!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use starraid_core::commands::FieldCommand;
    use starraid_core::enums::*;
    use starraid_sim::pools::BogeySpawn;

    use crate::behaviors::Starbase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Field(FieldCommand::SetSpeed { speed: 6.0 }))
            .unwrap();
        tx.send(LoopCommand::Field(FieldCommand::SetMode {
            mode: ViewMode::Aft,
        }))
        .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut engine = FieldEngine::new(FieldConfig::default());
        assert!(!drain_commands(&mut engine, &rx));
        assert_eq!(engine.speed(), 6.0);
        assert_eq!(engine.mode(), ViewMode::Aft);
    }

    #[test]
    fn test_disconnected_channel_stops_loop() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();
        drop(tx);
        let mut engine = FieldEngine::new(FieldConfig::default());
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_spawn_bogey_command() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();
        tx.send(LoopCommand::SpawnBogey {
            slot: BogeySlot::First,
            spawn: BogeySpawn::at(DVec3::new(0.0, 0.0, 60.0)),
            behavior: Box::new(Starbase),
        })
        .unwrap();

        let mut engine = FieldEngine::new(FieldConfig::default());
        assert!(drain_commands(&mut engine, &rx));
        assert!(engine.is_bogey_valid(BogeySlot::First));
    }

    #[test]
    fn test_step_publishes_frame() {
        let latest = Mutex::new(None);
        let mut engine = FieldEngine::new(FieldConfig::default());
        step(&mut engine, &latest);
        step(&mut engine, &latest);
        let frame = latest.lock().unwrap().clone().unwrap();
        assert_eq!(frame.time.tick, 2);
        assert!(!frame.records.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 25Hz = 40ms per tick
        assert_eq!(TICK_DURATION, Duration::from_millis(40));
    }

    #[test]
    fn test_game_loop_thread_runs_and_stops() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(FieldConfig::default(), Arc::clone(&latest)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while latest.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(latest.lock().unwrap().is_some());

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
