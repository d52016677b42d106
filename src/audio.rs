//! Sound effects, synthesized with fundsp and played through rodio.
//!
//! Playback is fire-and-forget. When no output device can be opened the
//! speaker stays silent and every `play` call is skipped.

use std::collections::HashMap;

use fundsp::prelude::*;
use rodio::{OutputStream, OutputStreamHandle, Sink, buffer::SamplesBuffer};

use crate::sim::Cue;

const SAMPLE_RATE: u32 = 44_100;

/// Anything that can play the simulation's audio cues.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

// ── Synthesis ───────────────────────────────────────────────────────────────

fn render(mut unit: impl AudioUnit, seconds: f32) -> Vec<f32> {
    unit.set_sample_rate(SAMPLE_RATE as f64);
    unit.reset();
    let len = (SAMPLE_RATE as f32 * seconds) as usize;
    (0..len).map(|_| unit.get_mono()).collect()
}

/// Short upward chirp: square wave sweeping 300Hz to 620Hz.
fn jump_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| lerp(300.0, 620.0, (t / 0.12).min(1.0)));
    let gain = lfo(|t: f32| lerp(0.12, 0.0, (t / 0.15).min(1.0)));
    render((freq >> square()) * gain, 0.15)
}

/// Two-note chime, a fifth apart.
fn milestone_samples() -> Vec<f32> {
    let freq = lfo(|t: f32| if t < 0.09 { 880.0f32 } else { 1320.0f32 });
    let gain = lfo(|t: f32| 0.18 * (1.0 - t / 0.3).max(0.0));
    render((freq >> sine::<f32>()) * gain, 0.3)
}

pub fn synthesize(cue: Cue) -> Vec<f32> {
    match cue {
        Cue::Jump => jump_samples(),
        Cue::Milestone => milestone_samples(),
    }
}

// ── Playback ────────────────────────────────────────────────────────────────

struct Output {
    // Dropping the stream stops all playback, so it lives as long as the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

pub struct Speaker {
    output: Option<Output>,
    clips: HashMap<Cue, Vec<f32>>,
}

impl Speaker {
    /// Open the default output device. Falls back to a silent speaker.
    pub fn open() -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                log::warn!("No audio output ({e}) - sound disabled");
                None
            }
        };
        let clips = if output.is_some() {
            [Cue::Jump, Cue::Milestone]
                .into_iter()
                .map(|cue| (cue, synthesize(cue)))
                .collect()
        } else {
            HashMap::new()
        };
        Self { output, clips }
    }

    pub fn silent() -> Self {
        Self {
            output: None,
            clips: HashMap::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, cue: Cue) {
        let (Some(output), Some(clip)) = (&self.output, self.clips.get(&cue)) else {
            return;
        };
        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, clip.clone()));
                sink.detach(); // Play in background
            }
            Err(e) => log::debug!("Dropped {cue:?} cue: {e}"),
        }
    }
}
