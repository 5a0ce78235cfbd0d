//! Chain-of-responsibility command routing.
//!
//! Every layer of the game (engine, game, player, room) owns a table of verbs
//! it answers itself and names one subordinate to hand anything else to.

use std::collections::HashMap;

use log::trace;

use crate::engine::output::Output;
use crate::error::{DispatchError, DispatchResult};

/// A verb handler. Receives the full token list, verb included.
pub type Handler<T> = fn(&T, &[String], &mut Output) -> DispatchResult;

/// Verb-to-handler lookup for one layer of the chain.
pub struct CommandTable<T> {
    entries: HashMap<&'static str, Handler<T>>,
}

impl<T> CommandTable<T> {
    pub fn new() -> Self {
        CommandTable {
            entries: HashMap::new(),
        }
    }

    /// Bind every keyword in `keywords` to the same handler.
    pub fn with(mut self, keywords: &[&'static str], handler: Handler<T>) -> Self {
        for keyword in keywords {
            self.entries.insert(*keyword, handler);
        }
        self
    }

    pub fn get(&self, keyword: &str) -> Option<Handler<T>> {
        self.entries.get(keyword).copied()
    }
}

impl<T> Default for CommandTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything a line of input can be sent to.
pub trait Dispatch {
    fn dispatch(&self, args: &[String], out: &mut Output) -> DispatchResult;
}

/// A link in the chain: its own verbs plus where to send the rest.
pub trait Controllable: Sized {
    fn commands(&self) -> &CommandTable<Self>;

    /// `None` ends the chain.
    fn subordinate(&self) -> Option<&dyn Dispatch> {
        None
    }
}

impl<T: Controllable> Dispatch for T {
    fn dispatch(&self, args: &[String], out: &mut Output) -> DispatchResult {
        let Some(verb) = args.first() else {
            return Err(DispatchError::NoCommand(String::new()));
        };

        if let Some(handler) = self.commands().get(verb) {
            trace!("{} handles '{}'", short_type_name::<T>(), verb);
            return handler(self, args, out);
        }

        match self.subordinate() {
            Some(next) => next.dispatch(args, out),
            None => Err(DispatchError::NoCommand(verb.clone())),
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
