//! Terminal runner (default binary).
//!
//! Parses the command line, takes over the terminal and drives the game at a
//! fixed frame rate until the player quits.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use blockfall::cli::{init_logging, Args};
use blockfall::core::{Game, Mode};
use blockfall::input::{EventPoller, FrameClock};
use blockfall::term::TerminalSurface;

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    init_logging(&args)?;

    // Restore the terminal before the panic message is printed, otherwise it is lost
    // on the alternate screen.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ =
            crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::style::ResetColor);
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        eprint!("{panic_info}\n\n");
    }));

    let mut surface = TerminalSurface::new(args.rows, args.columns, args.cell_size());
    surface.enter()?;

    let result = run(&args, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn run(args: &Args, surface: &mut TerminalSurface) -> Result<()> {
    let seed = args.resolved_seed();
    info!(
        seed,
        rows = args.rows,
        columns = args.columns,
        drop_ms = args.drop_ms,
        "starting game"
    );

    let mut game = Game::new(args.session_config(), args.factory(seed));
    let mut events = EventPoller::new(args.drop_interval_ms());
    let mut clock = FrameClock::new(args.fps);

    loop {
        let batch = events.poll_events()?;
        if events.take_resized() {
            surface.invalidate();
        }

        let was_playing = game.mode() == Mode::Playing;
        if !game.tick(surface, &batch)? {
            return Ok(());
        }
        if !was_playing && game.mode() == Mode::Playing {
            events.resume();
        }

        clock.wait();
    }
}
