//! Interactive terminal viewer
//!
//! One tick polls for input with a fixed timeout, steps the live simulation
//! unless it is paused or the add-body form is open, and redraws the frame.

use crate::form::{BodyForm, FormAction, LABELS};
use crate::render::{tag_color, Frame};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use log::{debug, info};
use orbitsim_core::prediction::predict_draft;
use orbitsim_core::presets::TAG_NEW;
use orbitsim_core::projector::{Camera, Pan, Viewport};
use orbitsim_core::runtime::{add_body, body_states, clear, step_simulation, SimulationContext};
use orbitsim_core::{DVec2, SimConfig};
use std::io::{self, Stdout, Write};
use std::time::Duration;

const FORM_WIDTH: i32 = 40;
const FORM_HEIGHT: i32 = 13;

pub struct ViewApp {
    ctx: SimulationContext,
    config: SimConfig,
    camera: Camera,
    playing: bool,
    form: Option<BodyForm>,
    quit: bool,
}

impl ViewApp {
    pub fn new(ctx: SimulationContext, config: SimConfig) -> Result<Self> {
        let camera = Camera::new(DVec2::ZERO, config.initial_zoom)?;
        Ok(Self {
            ctx,
            config,
            camera,
            playing: true,
            form: None,
            quit: false,
        })
    }

    #[cfg(test)]
    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    #[cfg(test)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(form) = self.form.as_mut() {
            match form.handle_key(key) {
                FormAction::Continue => {}
                FormAction::Save(body) => {
                    info!("adding body '{}'", body.name);
                    add_body(&mut self.ctx, body);
                    self.form = None;
                }
                FormAction::Cancel => {
                    debug!("add-body form cancelled");
                    self.form = None;
                }
            }
            return;
        }

        let pan = self.config.pan_step;
        let zoom = self.config.zoom_factor;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up => self.camera.pan(Pan::Up, pan),
            KeyCode::Down => self.camera.pan(Pan::Down, pan),
            KeyCode::Left => self.camera.pan(Pan::Left, pan),
            KeyCode::Right => self.camera.pan(Pan::Right, pan),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera.zoom_in(zoom),
            KeyCode::Char('-') | KeyCode::Char('_') => self.camera.zoom_out(zoom),
            KeyCode::Char(' ') => self.playing = !self.playing,
            KeyCode::Char('a') => self.form = Some(BodyForm::new()),
            KeyCode::Char('c') => clear(&mut self.ctx),
            _ => {}
        }
    }

    /// Advance the live world unless paused or editing
    pub fn tick(&mut self) {
        if self.playing && !self.is_form_open() {
            step_simulation(&mut self.ctx);
        }
    }

    pub fn render(&self, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport);

        if let Some(form) = &self.form {
            let prediction = predict_draft(&self.ctx.world, form.draft(), self.config.prediction());
            if let Some(path) = prediction.candidate() {
                frame.draw_path(path, &self.camera);
            }
        }

        frame.draw_bodies(&body_states(&self.ctx), &self.camera);
        self.draw_hud(&mut frame);

        if let Some(form) = &self.form {
            draw_form(&mut frame, form);
        }
        frame
    }

    fn draw_hud(&self, frame: &mut Frame) {
        let status = format!(
            " orbitsim | step {} | t = {:.2} | bodies {} | zoom {:.3e}{}",
            self.ctx.current_step,
            self.ctx.time,
            self.ctx.world.len(),
            self.camera.zoom(),
            if self.playing { "" } else { " | paused" },
        );
        frame.text(0, 0, &status, Color::White, false);

        let rows = frame.viewport().rows as i32;
        frame.text(
            rows - 1,
            0,
            " arrows: pan  +/-: zoom  space: pause  a: add body  c: clear  q: quit",
            Color::DarkGrey,
            false,
        );
    }

    pub fn run(&mut self, tick: Duration) -> Result<()> {
        let mut guard = TerminalGuard::enter()?;

        while !self.should_quit() {
            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
            self.tick();

            let (cols, rows) = terminal::size()?;
            let frame = self.render(Viewport::new(rows, cols));
            flush_frame(&mut guard.stdout, &frame)?;
        }
        Ok(())
    }
}

fn draw_form(frame: &mut Frame, form: &BodyForm) {
    let viewport = frame.viewport();
    let top = (viewport.rows as i32 - FORM_HEIGHT) / 2;
    let left = (viewport.cols as i32 - FORM_WIDTH) / 2;
    let inner = (FORM_WIDTH - 2) as usize;

    let border = format!("+{}+", "-".repeat(inner));
    frame.text(top, left, &border, Color::White, false);
    for row in 1..FORM_HEIGHT - 1 {
        frame.text(top + row, left, &format!("|{}|", " ".repeat(inner)), Color::White, false);
    }
    frame.text(top + FORM_HEIGHT - 1, left, &border, Color::White, false);
    frame.text(top, left + 2, " Add New Body ", Color::White, false);

    for (i, label) in LABELS.iter().enumerate() {
        let mut line = format!("{}{}", label, form.value(i));
        if form.is_editing() && i == form.current() {
            line.push('_');
        }
        let line = clip(&line, inner - 2);
        frame.text(top + 2 + i as i32, left + 2, &line, tag_color(TAG_NEW), i == form.current());
    }

    frame.text(top + FORM_HEIGHT - 4, left + 2, "UP/DOWN: Move, ENTER: Edit", Color::White, false);
    frame.text(top + FORM_HEIGHT - 3, left + 2, "'s': Save & Exit, 'q': Quit", Color::White, false);
    if let Some(error) = form.error() {
        let message = clip(&format!("Error: {}", error), inner - 2);
        frame.text(top + FORM_HEIGHT - 2, left + 2, &message, Color::Red, true);
    }
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn flush_frame(stdout: &mut Stdout, frame: &Frame) -> Result<()> {
    for (row, glyphs) in frame.rows().enumerate() {
        queue!(stdout, cursor::MoveTo(0, row as u16))?;
        for glyph in glyphs {
            if glyph.reverse {
                queue!(stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(stdout, SetForegroundColor(glyph.color), Print(glyph.ch))?;
            if glyph.reverse {
                queue!(stdout, SetAttribute(Attribute::NoReverse))?;
            }
        }
    }
    queue!(stdout, ResetColor)?;
    stdout.flush()?;
    Ok(())
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
