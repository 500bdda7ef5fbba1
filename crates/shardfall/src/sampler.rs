//! Random points, colors, lines and fixed-area triangles.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bias::ColorBias;
use crate::config::{BIAS_EXPONENT, TARGET_AREA};
use crate::shapes::{Line, Point, Rgba, Triangle};

/// Shifts a magnitude draw `u` away from 0.5.
///
/// `coin < p` selects the upper half. The result is in `(0, 1)` whenever
/// `u` is in `[0, 1)`.
#[inline]
pub fn biased_from(u: f64, coin: f64, p: f64) -> f64 {
    let offset = 0.5 * u.powf(1.0 / BIAS_EXPONENT);
    if coin < p { 0.5 + offset } else { 0.5 - offset }
}

/// Maps a unit-sphere octant direction to an 8-bit channel.
#[inline]
fn channel_u8(v: f64) -> u8 {
    (256.0 * v).floor().clamp(0.0, 255.0) as u8
}

/// Shape generator owning its random source and the color bias.
pub struct Sampler<R = StdRng> {
    rng: R,
    bias: ColorBias,
}

impl Sampler<StdRng> {
    /// Sampler seeded from OS entropy.
    pub fn from_entropy(bias: ColorBias) -> Self {
        Self::new(StdRng::from_entropy(), bias)
    }

    /// Reproducible sampler.
    pub fn seeded(seed: u64, bias: ColorBias) -> Self {
        Self::new(StdRng::seed_from_u64(seed), bias)
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R, bias: ColorBias) -> Self {
        Self { rng, bias }
    }

    #[inline]
    pub fn bias(&self) -> &ColorBias {
        &self.bias
    }

    #[inline]
    pub fn bias_mut(&mut self) -> &mut ColorBias {
        &mut self.bias
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Scalar in `(0, 1)` landing above 0.5 with probability `p`.
    ///
    /// Probabilities above 1 always land above.
    pub fn biased_scalar(&mut self, p: f64) -> f64 {
        let u = self.unit();
        let coin = self.unit();
        biased_from(u, coin, p)
    }

    /// Color on the positive octant of the unit sphere, tilted toward green
    /// and blue by their weights.
    pub fn random_color(&mut self) -> Rgba {
        let w = self.bias.weights();
        let red_to_green = self.biased_scalar(w.green) * FRAC_PI_2;
        let toward_blue = self.biased_scalar(w.blue) * FRAC_PI_2;

        let (r, g, b) = (
            red_to_green.cos() * toward_blue.cos(),
            red_to_green.sin() * toward_blue.cos(),
            toward_blue.sin(),
        );

        Rgba {
            r: channel_u8(r),
            g: channel_u8(g),
            b: channel_u8(b),
            a: self.rng.gen_range(0.0f32..1.0),
        }
    }

    /// Uniform point in the unit square.
    pub fn random_point(&mut self) -> Point {
        let x = self.unit();
        let y = self.unit();
        Point::new(x, y)
    }

    pub fn random_line(&mut self) -> Line {
        let p1 = self.random_point();
        let p2 = self.random_point();
        let color = self.random_color();
        Line { p1, p2, color }
    }

    /// Triangle with random shape and orientation and area `TARGET_AREA`.
    ///
    /// Two edge lengths and the angle between them are drawn uniformly, then
    /// both lengths are scaled by the same factor to hit the target area.
    pub fn random_triangle(&mut self) -> Triangle {
        let mut len1 = self.unit();
        let mut len2 = self.unit();
        let angle = self.rng.gen_range(0.0..FRAC_PI_2);

        let area = 0.5 * len1 * angle.sin() * len2;
        let k = (area / TARGET_AREA).sqrt();
        len1 /= k;
        len2 /= k;

        let p1 = self.random_point();
        let rotation = self.rng.gen_range(0.0..TAU);
        let p2 = p1.offset(rotation, len1);
        let p3 = p1.offset(angle + rotation, len2);

        let color = self.random_color();
        Triangle { p1, p2, p3, color }
    }
}
