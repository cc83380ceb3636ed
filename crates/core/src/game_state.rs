//! Game state module - Playing / Paused / GameOver state machine
//!
//! Each frame the handler for the current [`Mode`] runs once and reports a [`Flow`]:
//! keep going, switch to another mode, or terminate. [`Game::tick`] applies the flow
//! so the outer loop only has to decide whether to keep running.

use tracing::info;

use crate::factory::BlockFactory;
use crate::session::{Landing, Session, SessionConfig};
use crate::surface::Surface;
use crate::types::{
    Command, GameEvent, DOWN, GAME_OVER_MESSAGE, LEFT, PAUSED_MESSAGE, QUIT_MESSAGE, RIGHT,
};

/// Which handler runs this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Playing,
    Paused,
    GameOver,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Playing => "playing",
            Mode::Paused => "paused",
            Mode::GameOver => "game_over",
        }
    }
}

/// Result of handling one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Stay in the current mode
    Continue,
    /// Switch to another mode from the next frame on
    Transition(Mode),
    /// Leave the game loop
    Terminate,
}

/// A session together with its current mode
#[derive(Debug, Clone)]
pub struct Game<F> {
    session: Session<F>,
    mode: Mode,
}

impl<F: BlockFactory> Game<F> {
    /// New game in [`Mode::Playing`]
    pub fn new(config: SessionConfig, factory: F) -> Self {
        Self {
            session: Session::new(config, factory),
            mode: Mode::Playing,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Session<F> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<F> {
        &mut self.session
    }

    /// Run one frame and apply the resulting flow.
    ///
    /// Returns `false` once the game should terminate.
    pub fn tick<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[GameEvent],
    ) -> Result<bool, S::Error> {
        let flow = self.step(surface, events)?;
        Ok(self.apply(flow))
    }

    /// Run the current mode's handler for one frame without changing mode
    pub fn step<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[GameEvent],
    ) -> Result<Flow, S::Error> {
        match self.mode {
            Mode::Playing => self.handle_playing(surface, events),
            Mode::Paused => self.handle_paused(surface, events),
            Mode::GameOver => self.handle_game_over(surface, events),
        }
    }

    /// Apply a flow produced by [`Game::step`].
    ///
    /// Returns `false` for [`Flow::Terminate`].
    pub fn apply(&mut self, flow: Flow) -> bool {
        match flow {
            Flow::Continue => true,
            Flow::Transition(mode) => {
                info!(from = self.mode.as_str(), to = mode.as_str(), "mode change");
                self.mode = mode;
                true
            }
            Flow::Terminate => {
                info!(mode = self.mode.as_str(), "quit");
                false
            }
        }
    }

    fn handle_playing<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[GameEvent],
    ) -> Result<Flow, S::Error> {
        if self.session.settle() == Landing::ToppedOut {
            return Ok(Flow::Transition(Mode::GameOver));
        }

        self.session.render(surface);
        self.session.clear_full_rows();
        surface.present_frame()?;

        for event in events {
            match *event {
                GameEvent::Quit | GameEvent::Key(Command::Quit) => return self.quit(surface),
                GameEvent::DropTick | GameEvent::Key(Command::MoveDown) => {
                    self.session.attempt_move(DOWN);
                }
                GameEvent::Key(Command::MoveLeft) => {
                    self.session.attempt_move(LEFT);
                }
                GameEvent::Key(Command::MoveRight) => {
                    self.session.attempt_move(RIGHT);
                }
                GameEvent::Key(Command::Rotate) => {
                    self.session.attempt_rotate();
                }
                GameEvent::Key(Command::Pause) => return Ok(Flow::Transition(Mode::Paused)),
                GameEvent::Key(Command::Restart) => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_paused<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[GameEvent],
    ) -> Result<Flow, S::Error> {
        self.show_frozen(surface, PAUSED_MESSAGE)?;

        for event in events {
            match *event {
                GameEvent::Quit | GameEvent::Key(Command::Quit) => return self.quit(surface),
                GameEvent::Key(Command::Pause) => return Ok(Flow::Transition(Mode::Playing)),
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_game_over<S: Surface>(
        &mut self,
        surface: &mut S,
        events: &[GameEvent],
    ) -> Result<Flow, S::Error> {
        self.show_frozen(surface, GAME_OVER_MESSAGE)?;

        for event in events {
            match *event {
                GameEvent::Quit | GameEvent::Key(Command::Quit) => return self.quit(surface),
                GameEvent::Key(Command::Restart) => {
                    info!("restarting");
                    self.session.reset();
                    return Ok(Flow::Transition(Mode::Playing));
                }
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }

    /// Present a farewell frame and terminate
    fn quit<S: Surface>(&self, surface: &mut S) -> Result<Flow, S::Error> {
        self.show_frozen(surface, QUIT_MESSAGE)?;
        Ok(Flow::Terminate)
    }

    fn show_frozen<S: Surface>(&self, surface: &mut S, message: &str) -> Result<(), S::Error> {
        self.session.render(surface);
        surface.show_message(message);
        surface.present_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellMap;
    use crate::factory::ScriptedFactory;
    use crate::types::BlockKind;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Frames {
        presented: usize,
        messages: Vec<String>,
    }

    impl Surface for Frames {
        type Error = Infallible;

        fn draw_cells(&mut self, _cells: &CellMap) {}

        fn show_message(&mut self, text: &str) {
            self.messages.push(text.to_string());
        }

        fn present_frame(&mut self) -> Result<(), Infallible> {
            self.presented += 1;
            Ok(())
        }
    }

    fn game() -> Game<ScriptedFactory> {
        Game::new(SessionConfig::default(), ScriptedFactory::repeat(BlockKind::T))
    }

    #[test]
    fn test_starts_playing() {
        assert_eq!(game().mode(), Mode::Playing);
    }

    #[test]
    fn test_pause_toggle() {
        let mut g = game();
        let mut frames = Frames::default();
        let pause = [GameEvent::Key(Command::Pause)];

        assert_eq!(g.tick(&mut frames, &pause), Ok(true));
        assert_eq!(g.mode(), Mode::Paused);

        // Movement is ignored while paused.
        let block = *g.session().block();
        let _ = g.tick(&mut frames, &[GameEvent::DropTick, GameEvent::Key(Command::MoveLeft)]);
        assert_eq!(*g.session().block(), block);
        assert_eq!(frames.messages.last().map(String::as_str), Some(PAUSED_MESSAGE));

        assert_eq!(g.tick(&mut frames, &pause), Ok(true));
        assert_eq!(g.mode(), Mode::Playing);
    }

    #[test]
    fn test_pause_drops_rest_of_batch() {
        let mut g = game();
        let mut frames = Frames::default();
        let block = *g.session().block();
        let events = [GameEvent::Key(Command::Pause), GameEvent::Key(Command::MoveLeft)];
        let _ = g.tick(&mut frames, &events);
        assert_eq!(*g.session().block(), block);
    }

    #[test]
    fn test_quit_from_every_mode() {
        for quit in [GameEvent::Quit, GameEvent::Key(Command::Quit)] {
            for mode in [Mode::Playing, Mode::Paused, Mode::GameOver] {
                let mut g = game();
                let mut frames = Frames::default();
                g.apply(Flow::Transition(mode));
                assert_eq!(g.step(&mut frames, &[quit]), Ok(Flow::Terminate));
                assert_eq!(frames.messages.last().map(String::as_str), Some(QUIT_MESSAGE));
            }
        }
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut g = game();
        let mut frames = Frames::default();
        let restart = [GameEvent::Key(Command::Restart)];

        assert_eq!(g.step(&mut frames, &restart), Ok(Flow::Continue));

        g.apply(Flow::Transition(Mode::GameOver));
        assert_eq!(
            g.step(&mut frames, &restart),
            Ok(Flow::Transition(Mode::Playing))
        );
    }

    #[test]
    fn test_drop_tick_moves_down() {
        let mut g = game();
        let before = g.session().block().center();
        let _ = g.tick(&mut Frames::default(), &[GameEvent::DropTick]);
        assert_eq!(g.session().block().center(), before + DOWN);
    }

    #[test]
    fn test_every_frame_is_presented() {
        let mut g = game();
        let mut frames = Frames::default();
        for _ in 0..3 {
            let _ = g.tick(&mut frames, &[]);
        }
        assert_eq!(frames.presented, 3);
        assert!(frames.messages.is_empty());
    }
}
