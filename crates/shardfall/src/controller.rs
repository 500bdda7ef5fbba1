//! Tick/pause/resize state machine tying sampler, buffer and renderer together.

use rand::Rng;
use rand::rngs::StdRng;

use shardfall_engine::canvas::Canvas;

use crate::bias::{Channel, ColorBias};
use crate::buffer::{ShapeBuffer, ShapeId};
use crate::painter::Renderer;
use crate::sampler::Sampler;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Owns the generator state. Every handler runs to completion on the
/// caller's thread.
pub struct Controller<R = StdRng> {
    state: RunState,
    sampler: Sampler<R>,
    buffer: ShapeBuffer,
    renderer: Renderer,
}

impl Controller<StdRng> {
    /// Controller with the default bias and capacity, seeded if `seed` is set.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let bias = ColorBias::default();
        let sampler = match seed {
            Some(seed) => Sampler::seeded(seed, bias),
            None => Sampler::from_entropy(bias),
        };
        Self::new(sampler, ShapeBuffer::default())
    }
}

impl<R: Rng> Controller<R> {
    pub fn new(sampler: Sampler<R>, buffer: ShapeBuffer) -> Self {
        Self {
            state: RunState::Running,
            sampler,
            buffer,
            renderer: Renderer::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    #[inline]
    pub fn buffer(&self) -> &ShapeBuffer {
        &self.buffer
    }

    #[inline]
    pub fn sampler(&self) -> &Sampler<R> {
        &self.sampler
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Flips Running and Paused. Returns the new state.
    pub fn toggle(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        log::info!("{:?}", self.state);
        self.state
    }

    /// Routes a bump to the color bias. Shapes already generated keep their color.
    pub fn bump(&mut self, channel: Channel) {
        self.sampler.bias_mut().bump(channel);
    }

    /// One scheduler tick.
    ///
    /// While running: samples a triangle, buffers it and paints whatever is
    /// unpainted. While paused: does nothing and returns `None`.
    pub fn tick<C>(&mut self, canvas: &mut C) -> Option<ShapeId>
    where
        C: Canvas + ?Sized,
    {
        if self.is_paused() {
            return None;
        }

        let triangle = self.sampler.random_triangle();
        let id = self.buffer.insert(triangle);
        self.renderer.draw_unpainted(&mut self.buffer, canvas);
        Some(id)
    }

    /// Debounced resize handler: clears the surface and repaints the whole
    /// history onto it. Runs whether or not the animation is paused.
    pub fn on_resize_settled<C>(&mut self, canvas: &mut C) -> usize
    where
        C: Canvas + ?Sized,
    {
        canvas.clear();
        let painted = self.renderer.repaint_all(&mut self.buffer, canvas);
        log::debug!(
            "repainted {painted} shapes at {}x{}",
            canvas.width(),
            canvas.height()
        );
        painted
    }

    /// Strokes one random line without touching the buffer.
    pub fn draw_random_line<C>(&mut self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let line = self.sampler.random_line();
        self.renderer.draw_line(&line, canvas);
    }
}
