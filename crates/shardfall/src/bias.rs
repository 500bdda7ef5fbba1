//! Per-channel color weights and their energy-preserving bump.

use std::fmt;
use std::str::FromStr;

use crate::config::{BUMP_FACTOR, ENERGY_BUDGET, INITIAL_WEIGHT};

/// One primary color channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token does not name a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color channel {:?} (expected red, green or blue)", self.0)
    }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}

/// Non-negative weight per channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorWeights {
    pub red:   f64,
    pub green: f64,
    pub blue:  f64,
}

impl ColorWeights {
    #[inline]
    pub const fn uniform(w: f64) -> Self {
        Self { red: w, green: w, blue: w }
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    #[inline]
    fn get_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Squared L2 norm of the weight vector.
    #[inline]
    pub fn energy(&self) -> f64 {
        self.red * self.red + self.green * self.green + self.blue * self.blue
    }

    fn scale(&mut self, k: f64) {
        self.red *= k;
        self.green *= k;
        self.blue *= k;
    }
}

impl Default for ColorWeights {
    fn default() -> Self {
        Self::uniform(INITIAL_WEIGHT)
    }
}

/// Owned color bias steering the sampler's color draws.
///
/// Invariant (after any `bump`):
/// - `weights().energy() == ENERGY_BUDGET` up to float rounding
/// - every weight is non-negative
///
/// The starting weights are taken as given; only bumps renormalize.
#[derive(Debug, Clone, Default)]
pub struct ColorBias {
    weights: ColorWeights,
}

impl ColorBias {
    pub fn new(weights: ColorWeights) -> Self {
        debug_assert!(
            [weights.red, weights.green, weights.blue]
                .iter()
                .all(|w| w.is_finite() && *w >= 0.0),
            "color weights must be finite and non-negative"
        );
        Self { weights }
    }

    #[inline]
    pub fn weights(&self) -> ColorWeights {
        self.weights
    }

    /// Multiplies `channel` by `BUMP_FACTOR`, then rescales all weights back
    /// onto the energy budget.
    pub fn bump(&mut self, channel: Channel) {
        *self.weights.get_mut(channel) *= BUMP_FACTOR;

        let norm = self.weights.energy().sqrt();
        if norm > 0.0 && norm.is_finite() {
            self.weights.scale(ENERGY_BUDGET.sqrt() / norm);
        }

        let w = self.weights;
        log::info!(
            "bumped {channel}: red {:.3} green {:.3} blue {:.3}",
            w.red,
            w.green,
            w.blue
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_on_budget(bias: &ColorBias) {
        let e = bias.weights().energy();
        assert!((e - ENERGY_BUDGET).abs() < 1e-9, "energy {e}");
    }

    #[test]
    fn starts_uniform() {
        let bias = ColorBias::default();
        assert_eq!(bias.weights(), ColorWeights::uniform(0.5));
    }

    #[test]
    fn bump_red_from_uniform() {
        let mut bias = ColorBias::default();
        let before = bias.weights();
        bias.bump(Channel::Red);
        let after = bias.weights();

        assert!(after.red > before.red);
        assert_on_budget(&bias);

        // 1.0, 0.5, 0.5 scaled by sqrt(1.5 / 1.5) = 1.
        assert!((after.red - 1.0).abs() < 1e-12);
        assert!((after.green - 0.5).abs() < 1e-12);
        assert_eq!(after.green, after.blue);
    }

    #[test]
    fn energy_holds_across_bump_sequences() {
        let mut bias = ColorBias::default();
        let seq = [Channel::Red, Channel::Red, Channel::Blue, Channel::Green, Channel::Red];
        for (i, ch) in seq.iter().cycle().take(200).enumerate() {
            bias.bump(*ch);
            assert_on_budget(&bias);
            let w = bias.weights();
            assert!(w.red >= 0.0 && w.green >= 0.0 && w.blue >= 0.0, "step {i}: {w:?}");
        }
    }

    #[test]
    fn repeated_bumps_approach_a_single_channel() {
        let mut bias = ColorBias::default();
        for _ in 0..40 {
            bias.bump(Channel::Blue);
        }
        let w = bias.weights();
        assert!((w.blue - ENERGY_BUDGET.sqrt()).abs() < 1e-6);
        assert!(w.red < 1e-6 && w.green < 1e-6);
    }

    #[test]
    fn bump_leaves_zero_vector_alone() {
        let mut bias = ColorBias::new(ColorWeights::uniform(0.0));
        bias.bump(Channel::Green);
        assert_eq!(bias.weights(), ColorWeights::uniform(0.0));
    }

    #[test]
    fn channel_tokens_round_trip() {
        for ch in Channel::ALL {
            assert_eq!(ch.to_string().parse::<Channel>(), Ok(ch));
        }
        assert_eq!("Red".parse::<Channel>(), Err(UnknownChannel("Red".to_string())));
    }
}
