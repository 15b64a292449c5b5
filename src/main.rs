//! Terminal Tetvaders runner (default binary).
//!
//! Owns the fixed-timestep loop: poll input until the next tick, then run
//! exactly one world update followed by exactly one draw.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tetvaders::core::World;
use tetvaders::headless;
use tetvaders::input::{should_quit, KeyboardState};
use tetvaders::settings::Args;
use tetvaders::term::{FrameBuffer, GameView, PixelCanvas, TerminalRenderer, Viewport};
use tetvaders::types::TICK_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.world_config()?;
    info!(
        "starting {}x{} world, seed {}, drop every {} ticks",
        config.width, config.height, config.seed, config.drop_start
    );

    if args.headless {
        let report = headless::run(&config, args.ticks, &args.input_script());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut world = World::new(&config);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exited after {} ticks", world.tick());
    result
}

fn run(term: &mut TerminalRenderer, world: &mut World) -> Result<()> {
    let view = GameView::new();
    let mut keyboard = KeyboardState::new();
    let mut canvas = PixelCanvas::new(world.width(), world.height());
    let mut fb = FrameBuffer::new(0, 0);
    let (frame_w, frame_h) = GameView::frame_size(world.width(), world.height());
    let mut warned_small = false;

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    keyboard.handle_key_event(key);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    warned_small = false;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        world.update(&keyboard);
        keyboard.update(TICK_MS);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if !warned_small && (w < frame_w || h < frame_h) {
            warn!("terminal {w}x{h} is smaller than the {frame_w}x{frame_h} frame; clipping");
            warned_small = true;
        }
        view.render_world_into(world, &mut canvas, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
