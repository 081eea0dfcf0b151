// Copyright 2025 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shimmer subtitle: a rotating "In New York, Designing..." line with a highlight sweep.
//!
//! The timeline repeats a cycle of `pass_ms` (highlight sweeping, `animating`) followed by
//! `pause_ms` (still). When a full cycle ends, a [`WordPicker`] chooses the next word and the
//! next cycle starts immediately. The host drives time with [`Shimmer::tick`].
//!
//! [`CyclingPicker`] steps through the list in order. With the `rand` feature,
//! `RandomPicker` draws a different word at random each cycle.
//!
//! ```
//! use masthead_interaction::shimmer::{Shimmer, ShimmerConfig};
//!
//! let mut s = Shimmer::new(ShimmerConfig::default());
//! s.start(0);
//! assert_eq!(s.text(), "In New York, Designing...");
//! assert!(s.is_animating());
//! s.tick(2_500);
//! assert!(!s.is_animating());
//! assert!(s.tick(3_000));
//! assert_ne!(s.word(), "Designing");
//! ```

use alloc::format;
use alloc::string::String;

use masthead_signal::error::ConfigError;
#[cfg(feature = "rand")]
use rand::rngs::SmallRng;
#[cfg(feature = "rand")]
use rand::{Rng, SeedableRng};

/// Verbs the subtitle rotates through.
pub const WORDS: &[&str] = &[
    "Actioning",
    "Actualizing",
    "Believing",
    "Brewing",
    "Calculating",
    "Caring",
    "Cerebrating",
    "Churning",
    "Clauding",
    "Coalescing",
    "Coding",
    "Cogitating",
    "Computing",
    "Conjuring",
    "Considering",
    "Cooking",
    "Crafting",
    "Creating",
    "Crunching",
    "Distilling",
    "Designing",
    "Deliberating",
    "Delivering",
    "Determining",
    "Empathizing",
    "Effecting",
    "Executing",
    "Exploring",
    "Finagling",
    "Focusing",
    "Forging",
    "Forming",
    "Framing",
    "Generating",
    "Grouping",
    "Hatching",
    "Herding",
    "Hustling",
    "Ideating",
    "Inspecting",
    "Intuiting",
    "Layering",
    "Levitating",
    "Listening",
    "Manifesting",
    "Marinating",
    "Mulling",
    "Musing",
    "Noodling",
    "Obsessing",
    "Owning",
    "Percolating",
    "Pondering",
    "Prestidigitating",
    "Processing",
    "Prototyping",
    "Reticulating",
    "Ruminating",
    "Schlepping",
    "Scoping",
    "Sensing",
    "Shucking",
    "Simmering",
    "Simplifying",
    "Sketching",
    "Smooshing",
    "Solving",
    "Stewing",
    "Stirring",
    "Synthesizes",
    "Thinking",
    "Transmuting",
    "Vectoring",
    "Vibing",
    "Working",
];

/// Word shown before the first rotation.
pub const INITIAL_WORD: &str = "Designing";

/// Chooses the next word index.
pub trait WordPicker {
    /// Return an index into `words` to show after `current`.
    ///
    /// Out-of-range results wrap around.
    fn pick(&mut self, words: &[&'static str], current: usize) -> usize;
}

/// Steps through the list in order.
#[derive(Copy, Clone, Debug, Default)]
pub struct CyclingPicker;

impl WordPicker for CyclingPicker {
    fn pick(&mut self, words: &[&'static str], current: usize) -> usize {
        (current + 1) % words.len().max(1)
    }
}

/// Draws a random word other than the current one.
#[cfg(feature = "rand")]
#[derive(Clone, Debug)]
pub struct RandomPicker<R = SmallRng> {
    rng: R,
}

#[cfg(feature = "rand")]
impl RandomPicker<SmallRng> {
    /// A small, fast generator seeded with `seed`, e.g. the mount time.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "rand")]
impl<R: Rng> RandomPicker<R> {
    /// Pick with a caller-supplied generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "rand")]
impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick(&mut self, words: &[&'static str], current: usize) -> usize {
        if words.len() < 2 {
            return 0;
        }
        // Draw from the other `len - 1` words.
        let i = self.rng.random_range(0..words.len() - 1);
        if i >= current { i + 1 } else { i }
    }
}

/// Timing and text of the shimmer line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShimmerConfig {
    /// Text before the rotating word.
    pub prefix: String,
    /// Duration of one highlight sweep.
    pub pass_ms: u64,
    /// Still time after each sweep.
    pub pause_ms: u64,
    /// Width of the highlight band, as a percentage of the line.
    pub spread: f64,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            prefix: String::from("In New York, "),
            pass_ms: 2000,
            pause_ms: 1000,
            spread: 50.0,
        }
    }
}

impl ShimmerConfig {
    /// Full cycle length.
    pub fn cycle_ms(&self) -> u64 {
        self.pass_ms.saturating_add(self.pause_ms)
    }

    /// Check the sweep is positive and the spread is a percentage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_duration("pass_ms", self.pass_ms)?;
        let spread = ConfigError::check("spread", self.spread)?;
        if spread > 100.0 {
            return Err(ConfigError::InvalidValue {
                field: "spread",
                value: spread,
            });
        }
        Ok(())
    }

    /// Gradient stop percentages bracketing the highlight: `[50 − spread/2, 50 + spread/2]`.
    pub fn gradient_stops(&self) -> [f64; 2] {
        let half = self.spread / 2.0;
        [50.0 - half, 50.0 + half]
    }
}

/// Shimmer subtitle state.
#[derive(Clone, Debug)]
pub struct Shimmer<P = CyclingPicker> {
    config: ShimmerConfig,
    picker: P,
    words: &'static [&'static str],
    word: usize,
    cycle_start: Option<u64>,
    animating: bool,
}

impl Shimmer<CyclingPicker> {
    /// A shimmer over [`WORDS`] with the cycling picker.
    pub fn new(config: ShimmerConfig) -> Self {
        Self::with_picker(config, CyclingPicker)
    }
}

impl<P: WordPicker> Shimmer<P> {
    /// A shimmer over [`WORDS`] choosing words with `picker`.
    pub fn with_picker(config: ShimmerConfig, picker: P) -> Self {
        Self::with_words(config, picker, WORDS)
    }

    /// A shimmer over a custom word list.
    ///
    /// Starts on [`INITIAL_WORD`] when the list contains it, otherwise on the first word.
    pub fn with_words(config: ShimmerConfig, picker: P, words: &'static [&'static str]) -> Self {
        let word = words.iter().position(|w| *w == INITIAL_WORD).unwrap_or(0);
        Self {
            config,
            picker,
            words,
            word,
            cycle_start: None,
            animating: false,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    /// Begin the first cycle at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.cycle_start = Some(now_ms);
        self.animating = true;
    }

    /// Stop the timeline; the current word stays.
    pub fn stop(&mut self) {
        self.cycle_start = None;
        self.animating = false;
    }

    /// Whether the timeline is running.
    pub fn is_running(&self) -> bool {
        self.cycle_start.is_some()
    }

    /// Whether the highlight is sweeping.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current word.
    pub fn word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    /// Full line, e.g. `In New York, Designing...`.
    pub fn text(&self) -> String {
        format!("{}{}...", self.config.prefix, self.word())
    }

    /// Advance the timeline. Returns `true` when the word changed.
    ///
    /// A long gap between ticks skips the missed cycles and changes the word once.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(start) = self.cycle_start else {
            return false;
        };
        let cycle = self.config.cycle_ms().max(1);
        let elapsed = now_ms.saturating_sub(start);
        let cycles = elapsed / cycle;
        let mut changed = false;
        let mut start = start;
        if cycles > 0 {
            start += cycles * cycle;
            self.cycle_start = Some(start);
            if !self.words.is_empty() {
                self.word = self.picker.pick(self.words, self.word) % self.words.len();
            }
            changed = true;
        }
        self.animating = now_ms.saturating_sub(start) < self.config.pass_ms;
        changed
    }
}
