//! Field engine: the spatial core of the game.
//!
//! `FieldEngine` owns every entity pool, applies inbound commands, runs the
//! systems on `update` and builds a `FieldFrame` on `render`. It is
//! single-threaded and non-reentrant: the driver calls `update` and `render`
//! strictly in sequence. Nothing is allocated per tick.

use glam::{DVec2, DVec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starraid_core::commands::FieldCommand;
use starraid_core::config::FieldConfig;
use starraid_core::constants::{BOGEY_COUNT, DEBRIS_COUNT, MISSILE_COUNT, STAR_COUNT};
use starraid_core::enums::*;
use starraid_core::events::FieldEvent;
use starraid_core::state::{FieldFrame, Viewport};
use starraid_core::types::SimTime;

use crate::event_queue::EventQueue;
use crate::pools::*;
use crate::projection::View;
use crate::systems;
use crate::systems::motion::Motion;
use crate::systems::render::RenderInput;

/// The field engine. Owns all entity storage.
pub struct FieldEngine {
    config: FieldConfig,
    view: View,
    viewport: Viewport,
    rng: ChaCha8Rng,
    time: SimTime,

    // --- Player inputs ---
    speed: f64,
    yaw: Turn,
    pitch: Turn,
    display: bool,
    mirrored: bool,

    // --- Pools ---
    stars: [Star; STAR_COUNT],
    bogeys: [Bogey; BOGEY_COUNT],
    missiles: [Missile; MISSILE_COUNT],
    debris: DebrisCloud,

    events: EventQueue,
    frame: FieldFrame,
}

impl FieldEngine {
    /// Create an engine in forward view with a fresh starfield.
    pub fn new(config: FieldConfig) -> Self {
        let view = View::new(ViewMode::Forward, &config);
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            view,
            viewport: Viewport::default(),
            time: SimTime::default(),
            speed: 0.0,
            yaw: Turn::Neutral,
            pitch: Turn::Neutral,
            display: true,
            mirrored: false,
            stars: [Star::default(); STAR_COUNT],
            bogeys: std::array::from_fn(|_| Bogey::default()),
            missiles: [Missile::default(); MISSILE_COUNT],
            debris: DebrisCloud::default(),
            events: EventQueue::default(),
            frame: FieldFrame {
                records: Vec::with_capacity(STAR_COUNT + MISSILE_COUNT + BOGEY_COUNT + DEBRIS_COUNT),
                ..Default::default()
            },
            config,
        };
        engine.generate_stars();
        log::info!("field engine created (seed {})", engine.config.seed);
        engine
    }

    // ---- Inbound ----

    /// Apply one serialisable command.
    pub fn apply(&mut self, command: FieldCommand) {
        match command {
            FieldCommand::SetSpeed { speed } => self.set_speed(speed),
            FieldCommand::SetTurn { yaw, pitch } => self.set_turn(yaw, pitch),
            FieldCommand::FireMissile {
                slot,
                position,
                direction,
            } => self.fire_missile(slot, position, direction),
            FieldCommand::ClearBogey { slot } => self.clear_bogey(slot),
            FieldCommand::ClearBogeysAndMissiles => self.clear_bogeys_and_missiles(),
            FieldCommand::Explosion { position } => self.explosion(position),
            FieldCommand::SetMode { mode } => self.set_mode(mode),
            FieldCommand::SetDisplay { visible } => self.set_display(visible),
            FieldCommand::SetMirror { mirrored } => self.set_mirror(mirrored),
            FieldCommand::ResetForNewRound => self.reset_for_new_round(),
        }
    }

    /// Commanded speed in metrons per second.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_turn(&mut self, yaw: Turn, pitch: Turn) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Put a missile in flight, overwriting the slot.
    pub fn fire_missile(&mut self, slot: MissileSlot, position: DVec3, direction: MissileDirection) {
        self.missiles[slot.index()].fire(position, direction, self.config.missile_lifetime);
        log::debug!("missile {slot:?} fired from {position} heading {direction:?}");
    }

    /// Occupy a bogey slot with a new craft and its behaviour.
    pub fn set_bogey(&mut self, slot: BogeySlot, spawn: BogeySpawn, behavior: Box<dyn BogeyBehavior>) {
        log::debug!("bogey {slot:?} set at {} ({:?})", spawn.position, spawn.glyph);
        self.bogeys[slot.index()].set(spawn, behavior);
    }

    pub fn clear_bogey(&mut self, slot: BogeySlot) {
        self.bogeys[slot.index()].clear();
        log::debug!("bogey {slot:?} cleared");
    }

    /// Empty both bogey slots and every missile. Stars are untouched.
    pub fn clear_bogeys_and_missiles(&mut self) {
        for bogey in &mut self.bogeys {
            bogey.clear();
        }
        for missile in &mut self.missiles {
            missile.invalidate();
        }
        log::debug!("bogeys and missiles cleared");
    }

    /// Start an explosion at a point, replacing any running one.
    pub fn explosion(&mut self, position: DVec3) {
        systems::debris::spawn(
            &mut self.debris,
            position,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
    }

    /// Switch view mode. Stars are regenerated only when the mode changes.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == self.view.mode() {
            return;
        }
        self.view = View::new(mode, &self.config);
        self.generate_stars();
        log::info!("view mode set to {mode:?}");
    }

    /// Show or hide the whole field. The simulation keeps running either way.
    pub fn set_display(&mut self, visible: bool) {
        self.display = visible;
    }

    /// Flip the field horizontally, as a damaged scanner does.
    pub fn set_mirror(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Return to the start-of-round state: empty slots, no turn, forward
    /// view, visible field and a new starfield.
    pub fn reset_for_new_round(&mut self) {
        self.clear_bogeys_and_missiles();
        self.yaw = Turn::Neutral;
        self.pitch = Turn::Neutral;
        self.display = true;
        self.mirrored = false;
        self.view = View::new(ViewMode::Forward, &self.config);
        self.generate_stars();
        log::info!("field reset for new round");
    }

    // ---- Tick ----

    /// Advance the simulation by `dt` seconds.
    ///
    /// A non-positive or non-finite `dt` is a no-op, so a stalled clock is
    /// harmless.
    pub fn update(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }

        let motion = Motion::new(self.speed, self.yaw, self.pitch, dt, &self.config);

        // 1. Stars (with recycling)
        systems::stars::run(&mut self.stars, &motion, &self.view.volume, &mut self.rng);
        // 2. Bogeys (player motion, then behaviour)
        systems::bogeys::run(&mut self.bogeys, &motion, &self.config, dt);
        // 3. Missiles (travel, lifetime)
        systems::missiles::run(&mut self.missiles, &motion, &self.config, dt, &mut self.events);
        // 4. Debris (timer, radiation)
        systems::debris::run(&mut self.debris, &motion, &self.config, dt, &mut self.events);
        // 5. Collisions
        systems::collision::run(
            &mut self.missiles,
            &mut self.bogeys,
            &mut self.debris,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );

        self.time.advance(dt);
        log::trace!(
            "tick {} dt {dt:.3} forward {:.3} turning {}",
            self.time.tick,
            motion.forward,
            motion.is_turning()
        );
    }

    /// Project every entity for the renderer.
    pub fn render(&mut self) -> &FieldFrame {
        let input = RenderInput {
            view: &self.view,
            viewport: &self.viewport,
            config: &self.config,
            time: self.time,
            display: self.display,
            mirrored: self.mirrored,
            stars: &self.stars,
            missiles: &self.missiles,
            bogeys: &self.bogeys,
            debris: &self.debris,
        };
        systems::render::build_frame(&mut self.frame, &input);
        &self.frame
    }

    /// Take the events produced since the last drain. At most
    /// `EVENT_CAPACITY` are kept; older ones are dropped.
    pub fn drain_events(&mut self) -> std::collections::vec_deque::Drain<'_, FieldEvent> {
        self.events.drain()
    }

    /// Events waiting to be drained.
    pub fn pending_events(&self) -> &EventQueue {
        &self.events
    }

    // ---- Outbound ----

    pub fn bogey_position(&self, slot: BogeySlot) -> DVec3 {
        self.bogeys[slot.index()].location.position
    }

    pub fn is_bogey_valid(&self, slot: BogeySlot) -> bool {
        self.bogeys[slot.index()].is_valid()
    }

    pub fn bogey_glyph(&self, slot: BogeySlot) -> &str {
        &self.bogeys[slot.index()].glyph
    }

    /// Screen-unit position of a field point in the active view, or `None`
    /// if the view cannot show it. Used to place targeting cursors.
    pub fn project(&self, point: DVec3) -> Option<DVec2> {
        systems::render::screen_point(&self.view, self.mirrored, point)
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn turn(&self) -> (Turn, Turn) {
        (self.yaw, self.pitch)
    }

    pub fn display(&self) -> bool {
        self.display
    }

    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn missile(&self, slot: MissileSlot) -> &Missile {
        &self.missiles[slot.index()]
    }

    pub fn debris(&self) -> &DebrisCloud {
        &self.debris
    }

    /// Seconds left on the running explosion, 0 if none.
    pub fn explosion_remaining(&self) -> f64 {
        self.debris.remaining
    }

    fn generate_stars(&mut self) {
        systems::stars::generate(&mut self.stars, &self.view.volume, &mut self.rng);
    }
}
