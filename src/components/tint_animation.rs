//! Keyed tint tweens.
//!
//! A [`TintAnimation`] is a declarative description of how a sprite tint
//! changes over time. A [`TintAnimator`] plays any number of them on one
//! entity, each under its own [`AnimationKey`], so unrelated effects can share
//! an entity without stepping on each other's bookkeeping.

use std::time::Duration;

use bevy::prelude::*;

use crate::utils::color::lerp_color;

/// Logical name of an animation playing on an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationKey(pub &'static str);

/// How the tint moves between two keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Blend channel-wise between neighbouring keyframes.
    #[default]
    Linear,
}

/// A tint value pinned to an absolute offset (seconds) from animation start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintKeyFrame {
    pub value: Color,
    pub time: f32,
}

impl TintKeyFrame {
    pub fn new(value: Color, time: f32) -> Self {
        Self { value, time }
    }
}

/// Declarative tint animation: ordered keyframes over a fixed length.
#[derive(Clone, Debug, PartialEq)]
pub struct TintAnimation {
    pub length: Duration,
    pub interpolation: Interpolation,
    /// Keyframes sorted by `time`.
    pub key_frames: Vec<TintKeyFrame>,
}

impl TintAnimation {
    /// Samples the tint at `seconds` after the animation started.
    ///
    /// Times before the first keyframe yield the first value and times at or
    /// past the last keyframe yield the last value exactly. Returns `None` for
    /// an animation without keyframes.
    pub fn sample(&self, seconds: f32) -> Option<Color> {
        let first = self.key_frames.first()?;
        let last = self.key_frames.last()?;

        if seconds <= first.time {
            return Some(first.value);
        }
        if seconds >= last.time {
            return Some(last.value);
        }

        let next_index = self
            .key_frames
            .iter()
            .position(|frame| frame.time > seconds)
            .unwrap_or(self.key_frames.len() - 1);
        let previous = self.key_frames[next_index.saturating_sub(1)];
        let next = self.key_frames[next_index];

        match self.interpolation {
            Interpolation::Linear => {
                let span = next.time - previous.time;
                if span <= f32::EPSILON {
                    return Some(next.value);
                }
                let t = (seconds - previous.time) / span;
                Some(lerp_color(previous.value, next.value, t))
            }
        }
    }
}

/// An animation currently registered on a [`TintAnimator`].
#[derive(Clone, Debug)]
struct PlayingTint {
    key: AnimationKey,
    animation: TintAnimation,
    timer: Timer,
    /// False until the first advance, which samples t = 0 without consuming delta.
    started: bool,
}

/// Result of advancing a [`TintAnimator`] by one frame.
#[derive(Debug, Default, PartialEq)]
pub struct TintStep {
    /// Tint to display this frame, if any animation is playing.
    pub color: Option<Color>,
    /// Keys of animations that reached their end this frame.
    pub finished: Vec<AnimationKey>,
}

/// Plays keyed tint animations on the entity it is attached to.
#[derive(Component, Debug, Default)]
pub struct TintAnimator {
    playing: Vec<PlayingTint>,
}

impl TintAnimator {
    /// Starts `animation` under `key`, replacing anything already playing under it.
    pub fn play(&mut self, animation: TintAnimation, key: AnimationKey) {
        if self.stop(key) {
            warn!("Tint animation '{}' was already playing, restarting it", key.0);
        }
        let timer = Timer::new(animation.length, TimerMode::Once);
        self.playing.push(PlayingTint {
            key,
            animation,
            timer,
            started: false,
        });
    }

    /// Stops the animation under `key` without reporting completion.
    /// Returns true if something was stopped.
    pub fn stop(&mut self, key: AnimationKey) -> bool {
        let before = self.playing.len();
        self.playing.retain(|playing| playing.key != key);
        self.playing.len() != before
    }

    pub fn has_running(&self, key: AnimationKey) -> bool {
        self.playing.iter().any(|playing| playing.key == key)
    }

    pub fn is_idle(&self) -> bool {
        self.playing.is_empty()
    }

    /// Advances every playing animation by `delta`.
    ///
    /// Later animations win when several drive the tint in the same frame.
    /// Finished animations are dropped and reported in [`TintStep::finished`].
    pub fn advance(&mut self, delta: Duration) -> TintStep {
        let mut step = TintStep::default();

        for playing in &mut self.playing {
            // A zero tick still lets a zero-length timer finish on its first frame
            if playing.started {
                playing.timer.tick(delta);
            } else {
                playing.started = true;
                playing.timer.tick(Duration::ZERO);
            }

            if let Some(color) = playing.animation.sample(playing.timer.elapsed_secs()) {
                step.color = Some(color);
            }
            if playing.timer.finished() {
                step.finished.push(playing.key);
            }
        }

        if !step.finished.is_empty() {
            self.playing.retain(|playing| !playing.timer.finished());
        }

        step
    }
}
