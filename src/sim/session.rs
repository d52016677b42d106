//! One play session: the entities, the run state and the rules that tie
//! them together.
//!
//! The session never schedules itself. A host calls [`Session::tick`] once per
//! frame while [`Session::is_running`] is true and feeds player commands in
//! between ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty;
use super::entity::{Character, Obstacle, Tint};
use super::geometry::intersects;
use super::physics;
use super::recycler;
use super::state::{Cue, GameEvent, Phase, RunState};
use crate::config::Config;

/// Player intents, applied synchronously between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub character: Character,
    pub obstacle: Obstacle,
    pub run: RunState,
    /// Character color for this frame, derived before physics runs
    pub tint: Tint,
    seed: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Session {
    /// Start a run. Uses the configured seed, or draws one.
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        log::info!("Starting session with seed {}", seed);
        Self {
            character: Character::new(&config),
            obstacle: Obstacle::new(&config),
            run: RunState::new(config.base_speed),
            tint: Tint::Grounded,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            config,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_running(&self) -> bool {
        self.run.phase == Phase::Running
    }

    /// Run one update phase. Does nothing once the run has ended.
    /// Returns whether the run is still going afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.run.score += 1;
        self.tint = Tint::of(&self.character);

        physics::step(
            &mut self.character,
            self.config.gravity,
            self.config.ground_y(),
        );
        difficulty::update(&mut self.run, &self.config, &mut self.events);
        recycler::advance(
            &mut self.obstacle,
            self.run.game_speed,
            &self.config,
            &mut self.rng,
        );

        if intersects(&self.character.rect(), &self.obstacle.rect()) {
            self.run.finish();
            log::info!(
                "Run ended at score {} (high score {})",
                self.run.score,
                self.run.high_score
            );
            self.events.push(GameEvent::ShowRestart {
                score: self.run.score,
                high_score: self.run.high_score,
            });
            return false;
        }
        true
    }

    /// Start a jump. Dropped when already airborne or when the run is over.
    /// Returns true when the command was consumed.
    pub fn jump(&mut self) -> bool {
        if self.character.jumping || !self.is_running() {
            return false;
        }
        self.character.jumping = true;
        self.character.vy = self.config.jump_impulse;
        self.events.push(GameEvent::Sound(Cue::Jump));
        true
    }

    /// Begin a new run after the previous one ended. The high score is kept.
    /// Ignored while a run is in progress.
    pub fn restart(&mut self) -> bool {
        if self.is_running() {
            log::debug!("Restart ignored: run in progress");
            return false;
        }
        self.run.reset(self.config.base_speed);
        self.character.reset(&self.config);
        self.obstacle.reset(&self.config);
        self.tint = Tint::Grounded;
        self.events.push(GameEvent::HideRestart);
        log::info!("Restarted (high score {})", self.run.high_score);
        true
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Jump => self.jump(),
            Command::Restart => self.restart(),
        }
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
