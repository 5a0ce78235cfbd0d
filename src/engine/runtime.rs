//! The top of the dispatch chain and the main loop.

use std::cell::{Cell, RefCell};
use std::io::{self, StdinLock, Stdout};

use log::{debug, info};

use crate::engine::controller::{Controller, InputController, Interaction};
use crate::engine::dispatch::{CommandTable, Controllable, Dispatch};
use crate::engine::game::Game;
use crate::engine::output::Output;
use crate::error::{DispatchResult, MapError};

/// Owns the game and the controller, and runs prompts until told to quit.
pub struct Engine<C: Controller = InputController<StdinLock<'static>, Stdout>> {
    commands: CommandTable<Engine<C>>,
    running: Cell<bool>,
    game: Game,
    controller: RefCell<C>,
}

impl Engine {
    /// An engine on the built-in map talking to stdin and stdout.
    pub fn new() -> Result<Self, MapError> {
        Engine::with_controller(InputController::stdio())
    }
}

impl<C: Controller> Engine<C> {
    pub fn with_controller(controller: C) -> Result<Self, MapError> {
        Ok(Self::with_game(Game::new()?, controller))
    }

    pub fn with_game(game: Game, controller: C) -> Self {
        Engine {
            commands: CommandTable::new().with(&["quit", "q"], Self::exit),
            running: Cell::new(false),
            game,
            controller: RefCell::new(controller),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn into_controller(self) -> C {
        self.controller.into_inner()
    }

    /// Describe the starting room, then prompt until `quit` or end of input.
    pub fn run(&self) -> io::Result<()> {
        info!("Starting engine");
        self.running.set(true);

        let mut controller = self.controller.borrow_mut();

        let mut out = Output::new();
        self.game.start(&mut out);
        controller.present(out)?;

        while self.running.get() {
            if controller.interact(self)? == Interaction::Closed {
                debug!("input closed");
                self.running.set(false);
            }
        }

        info!("Engine stopping");
        Ok(())
    }

    fn exit(&self, _args: &[String], _out: &mut Output) -> DispatchResult {
        debug!("Exit called.");
        self.running.set(false);
        Ok(())
    }
}

impl<C: Controller> Controllable for Engine<C> {
    fn commands(&self) -> &CommandTable<Self> {
        &self.commands
    }

    fn subordinate(&self) -> Option<&dyn Dispatch> {
        Some(&self.game)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use test_log::test;

    use super::*;
    use crate::world::RoomId;

    /// Feeds canned lines and records everything shown.
    #[derive(Default)]
    struct Script {
        lines: VecDeque<&'static str>,
        prompts: usize,
        shown: Vec<String>,
    }

    impl Script {
        fn new(lines: &[&'static str]) -> Self {
            Script {
                lines: lines.iter().copied().collect(),
                ..Script::default()
            }
        }
    }

    impl Controller for Script {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            self.prompts += 1;
            Ok(self.lines.pop_front().map(str::to_string))
        }

        fn present(&mut self, out: Output) -> io::Result<()> {
            self.shown.extend(out.lines());
            Ok(())
        }
    }

    #[test]
    fn quit_stops_after_one_prompt() {
        let engine = Engine::with_controller(Script::new(&["quit", "cry"])).unwrap();
        engine.run().unwrap();
        assert!(!engine.is_running());

        let script = engine.into_controller();
        assert_eq!(script.prompts, 1);
        assert_eq!(script.lines, VecDeque::from(["cry"]));
    }

    #[test]
    fn q_is_quit() {
        let engine = Engine::with_controller(Script::new(&["Q", "cry"])).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.into_controller().prompts, 1);
    }

    #[test]
    fn start_is_shown_before_first_prompt() {
        let engine = Engine::with_controller(Script::new(&["q"])).unwrap();
        engine.run().unwrap();
        assert_eq!(
            engine.into_controller().shown,
            vec![
                "The room is like a dungeon.",
                "There is an exit to the north.",
                "There is an exit to the east.",
            ]
        );
    }

    #[test]
    fn running_out_of_input_stops() {
        let engine = Engine::with_controller(Script::new(&["m east"])).unwrap();
        engine.run().unwrap();
        assert!(!engine.is_running());
        assert_eq!(engine.game().player().location(), RoomId(1));
        assert_eq!(engine.into_controller().prompts, 2);
    }

    #[test]
    fn unknown_verb_changes_nothing() {
        let engine = Engine::with_controller(Script::new(&["dance", "q"])).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.game().player().location(), RoomId(0));
        let shown = engine.into_controller().shown;
        assert_eq!(shown.last().map(String::as_str), Some("dance is not a valid command."));
    }

    #[test]
    fn quit_reaches_engine_before_game() {
        let engine = Engine::with_controller(Script::new(&[])).unwrap();
        let mut out = Output::new();
        engine.running.set(true);
        engine.dispatch(&["quit".to_string()], &mut out).unwrap();
        assert!(!engine.is_running());
        assert!(out.is_empty());
    }
}
