//! Engine binding: owns the generator and presents its canvas every frame.

use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use shardfall_engine::canvas::{Canvas, PixelCanvas};
use shardfall_engine::core::{App as EngineApp, AppControl, FrameCtx};
use shardfall_engine::paint::Color;
use shardfall_engine::render::CanvasBlitter;

use crate::commands::Command;
use crate::config::Config;
use crate::controller::Controller;
use crate::scheduler::Scheduler;

/// Implements `shardfall_engine::core::App`.
///
/// The canvas is created on the first frame, once the surface size is known.
pub struct ShardfallApp {
    background: Color,
    controller: Controller,
    scheduler:  Scheduler,
    canvas:     Option<PixelCanvas>,
    blitter:    CanvasBlitter,
}

impl ShardfallApp {
    pub fn new(config: &Config) -> Self {
        Self {
            background: config.background,
            controller: Controller::from_seed(config.seed),
            scheduler:  Scheduler::new(Instant::now()),
            canvas:     None,
            blitter:    CanvasBlitter::new(),
        }
    }

    /// Applies one command. Returns `Exit` for `Command::Quit`.
    fn apply(&mut self, command: Command) -> AppControl {
        match command {
            Command::Toggle => {
                self.controller.toggle();
            }
            Command::Bump(channel) => self.controller.bump(channel),
            Command::Quit => {
                log::info!("quit requested");
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }

    /// Resizing discards the pixels right away; the full repaint waits for
    /// the burst to settle.
    fn on_resized(&mut self, width: u32, height: u32, now: Instant) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(width, height);
        }
        log::trace!("resize to {width}x{height}");
        self.scheduler.request_resize(now);
    }
}

impl EngineApp for ShardfallApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.on_resized(size.width, size.height, Instant::now());
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // ── Input ─────────────────────────────────────────────────────────
        for command in ctx.input_frame.key_presses().filter_map(Command::from_press) {
            if self.apply(command) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        // ── Simulation ────────────────────────────────────────────────────
        let now = Instant::now();
        let Self { background, controller, scheduler, canvas, blitter } = self;

        let canvas = canvas.get_or_insert_with(|| {
            let size = ctx.gpu.size();
            log::debug!("canvas {}x{}", size.width, size.height);
            scheduler.restart(now);
            PixelCanvas::new(size.width, size.height, *background)
        });

        scheduler.run_due(now, controller, canvas);

        // ── Present ───────────────────────────────────────────────────────
        if canvas.width() == 0 || canvas.height() == 0 {
            return AppControl::Continue;
        }
        ctx.render(*background, |rctx, target| blitter.render(rctx, target, canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::Channel;
    use crate::controller::RunState;

    fn app() -> ShardfallApp {
        let mut config = Config::default();
        config.seed = Some(5);
        ShardfallApp::new(&config)
    }

    #[test]
    fn commands_drive_the_controller() {
        let mut app = app();
        assert_eq!(app.apply(Command::Toggle), AppControl::Continue);
        assert_eq!(app.controller.state(), RunState::Paused);

        let before = app.controller.sampler().bias().weights();
        app.apply(Command::Bump(Channel::Red));
        assert!(app.controller.sampler().bias().weights().red > before.red);

        assert_eq!(app.apply(Command::Quit), AppControl::Exit);
    }

    #[test]
    fn resize_discards_pixels_and_schedules_one_repaint() {
        let mut app = app();
        let t0 = Instant::now();
        app.canvas = Some(PixelCanvas::new(8, 8, Color::BLACK));

        app.on_resized(64, 48, t0);
        app.on_resized(65, 48, t0);

        let canvas = app.canvas.as_ref().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (65, 48));
        assert_eq!(canvas.pixels().len(), 65 * 48);
        assert!(canvas.pixels().iter().all(|&p| p == [0, 0, 0, 255]));
        assert!(app.scheduler.resize_pending());
    }
}
