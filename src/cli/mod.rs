use std::{future::Future, pin::Pin};

use crate::{Res, types::Token};

mod track;

pub use track::{get_current_track, is_current_track_liked, like_current_track};

pub type CommandFuture = Pin<Box<dyn Future<Output = Res<()>> + Send>>;

/// A command handler: a pure function from a valid token to an outcome.
/// Handlers share no state with each other.
pub type CommandFn = fn(Token) -> CommandFuture;

/// The fixed command registry. The table is the single source of truth for
/// both dispatch and the listing shown on unrecognized input.
pub const COMMANDS: &[(&str, CommandFn)] = &[
    ("get_current_track", |token| {
        Box::pin(track::get_current_track(token))
    }),
    ("like_current_track", |token| {
        Box::pin(track::like_current_track(token))
    }),
    ("is_current_track_liked", |token| {
        Box::pin(track::is_current_track_liked(token))
    }),
];

pub fn find_command(name: &str) -> Option<CommandFn> {
    COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, handler)| *handler)
}

/// Newline-joined list of all registered command names.
pub fn available_commands() -> String {
    COMMANDS
        .iter()
        .map(|(command, _)| *command)
        .collect::<Vec<_>>()
        .join("\n")
}
