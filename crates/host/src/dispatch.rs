use glam::Vec2;
use renderer::{CanvasRect, DrawSurface};
use sim_core::SimulationEngine;
use types::{EditCommand, EditIntent, Modifiers};

use crate::controller::{FrameScheduler, Session};
use crate::timing::TicksPerFrame;

/// A click on the canvas, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Vec2,
    pub canvas: CanvasRect,
    /// Backing-store size of the canvas in pixels.
    pub backing: Vec2,
    pub modifiers: Modifiers,
}

/// Everything the page can ask of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Play,
    Pause,
    TogglePlay,
    /// Run one burst and repaint. Only while paused.
    Step,
    Reset,
    SetTicksPerFrame(TicksPerFrame),
    Edit(PointerInput),
    /// The display is about to refresh; `now` in milliseconds.
    Frame { now: f64 },
}

impl<E, S, D> Session<E, S, D>
where
    E: SimulationEngine,
    S: FrameScheduler,
    D: DrawSurface,
{
    pub fn dispatch(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Play => self.play(),
            SessionCommand::Pause => self.pause(),
            SessionCommand::TogglePlay => self.toggle_play(),
            SessionCommand::Step => self.step(),
            SessionCommand::Reset => self.reset(),
            SessionCommand::SetTicksPerFrame(ticks) => self.set_ticks_per_frame(ticks),
            SessionCommand::Edit(input) => {
                self.edit(input);
            }
            SessionCommand::Frame { now } => self.on_frame(now),
        }
    }

    /// Resolve a click to one engine mutation and repaint straight away,
    /// whether or not the animation is running.
    pub fn edit(&mut self, input: PointerInput) -> EditCommand {
        let (row, column) = self.picker.pixel_to_cell(input.position, input.canvas, input.backing);
        let command = EditCommand::new(EditIntent::classify(input.modifiers), row, column);
        log::debug!("edit {:?} at ({}, {})", command.intent, row, column);

        self.engine.apply(command);
        self.redraw();
        command
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.redraw();
    }

    pub fn step(&mut self) {
        if !self.is_paused() {
            log::debug!("step ignored while running");
            return;
        }
        self.advance_burst();
        self.redraw();
    }

    pub fn set_ticks_per_frame(&mut self, ticks: TicksPerFrame) {
        if ticks != self.ticks_per_frame {
            log::info!("ticks per frame: {} -> {}", self.ticks_per_frame.get(), ticks.get());
        }
        self.ticks_per_frame = ticks;
    }
}
