//! Frame driver: one update phase then one render phase per host frame.
//!
//! The driver owns the session and its collaborators (audio, surface,
//! restart control) and routes the session's events to them. It never
//! sleeps or polls; the host decides when to call [`FrameDriver::step`].

use crate::audio::AudioSink;
use crate::render::{Assets, Surface, scene};
use crate::sim::{Command, GameEvent, Session};

/// The "play again" prompt. Visible exactly while a run is over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestartControl {
    visible: bool,
}

impl RestartControl {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Updated and rendered; the run goes on
    Ticked,
    /// Updated and rendered; the run ended during this tick
    Ended,
    /// The run is over, nothing was done
    Idle,
}

pub struct FrameDriver<A, S> {
    session: Session,
    assets: Assets,
    audio: A,
    surface: S,
    restart: RestartControl,
    /// A frame was drawn and not yet presented
    fresh: bool,
}

impl<A: AudioSink, S: Surface> FrameDriver<A, S> {
    pub fn new(session: Session, assets: Assets, audio: A, surface: S) -> Self {
        let mut driver = Self {
            session,
            assets,
            audio,
            surface,
            restart: RestartControl::default(),
            fresh: false,
        };
        driver.render();
        driver
    }

    /// Advance one frame while the run is live. Once it has ended the
    /// driver stops ticking until a restart command arrives.
    pub fn step(&mut self) -> StepOutcome {
        if !self.session.is_running() {
            return StepOutcome::Idle;
        }
        let alive = self.session.tick();
        self.dispatch();
        self.render();
        if alive {
            StepOutcome::Ticked
        } else {
            StepOutcome::Ended
        }
    }

    /// Apply a player command. Returns true when it was consumed, which tells
    /// the host to swallow the key.
    pub fn command(&mut self, command: Command) -> bool {
        let consumed = self.session.apply(command);
        self.dispatch();
        if consumed && command == Command::Restart {
            // Show the fresh run immediately, before its first tick
            self.render();
        }
        consumed
    }

    /// Redraw the current state without updating it (e.g. after a resize).
    pub fn render(&mut self) {
        scene::draw(
            &self.session,
            &self.assets,
            self.restart.is_visible(),
            &mut self.surface,
        );
        self.fresh = true;
    }

    /// True once per drawn frame, so the host only presents new frames.
    pub fn take_fresh_frame(&mut self) -> bool {
        std::mem::take(&mut self.fresh)
    }

    fn dispatch(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Sound(cue) => self.audio.play(cue),
                GameEvent::SpeedUp { score, speed } => {
                    log::debug!("Milestone {score}: speed {speed}");
                }
                GameEvent::ShowRestart { .. } => self.restart.show(),
                GameEvent::HideRestart => self.restart.hide(),
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn restart_control(&self) -> RestartControl {
        self.restart
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
