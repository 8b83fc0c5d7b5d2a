//! Parsing of raw command lines into executable [`Command`] values.
//!
//! The pipeline is the same for every command: tokenize the argument string
//! on the command's recognized prefixes, check the preamble and the mandatory
//! prefix set, reject duplicate prefixes, then validate each field value.

use crate::domain::InvalidFieldError;

pub mod syntax;
pub use syntax::Prefix;

pub mod tokenizer;
pub use tokenizer::{tokenize, ArgumentTokens};

mod fields;

mod add;
mod add_deadline;
mod add_task;
mod find;
mod remark;
mod sort;

use super::commands::{
    AddCommand, AddDeadlineCommand, AddTaskCommand, Command, ExitCommand, FindCommand, ListCommand,
    RemarkCommand, SortCommand,
};

/// Failures raised while interpreting a command line.
///
/// Every failure is terminal for the command being parsed; the interactive
/// loop keeps accepting further commands.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The leading command word is not recognized.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A mandatory prefix is missing, or the positional part of the command
    /// has the wrong shape. The message carries the command's usage text.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat {
        /// The usage text of the offending command.
        usage: &'static str,
    },

    /// A prefix restricted to a single occurrence appeared more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.prefixes)
    )]
    DuplicatePrefix {
        /// The offending prefixes.
        prefixes: Vec<Prefix>,
    },

    /// A field's validity predicate rejected the trimmed input.
    #[error(transparent)]
    InvalidField(#[from] InvalidFieldError),

    /// A positional index is not a positive integer.
    #[error("Index has to be a positive number! (1,2,3...).")]
    InvalidIndex,

    /// No sort field prefix was supplied.
    #[error("Sort requires a field prefix (c/, cn/, cp/, ce/, s/, l/, r/, re/ or d/)!")]
    InvalidSortField,

    /// The sort direction token is not one of the two accepted literals.
    #[error("Order should be either 'asc' or 'desc'!")]
    InvalidOrder,
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|prefix| prefix.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a full command line into an executable command.
///
/// The first whitespace-separated token is the command word; the rest is the
/// command's argument string.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem encountered.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match word {
        AddCommand::WORD => add::parse(args).map(Command::Add),
        FindCommand::WORD => find::parse(args).map(Command::Find),
        ListCommand::WORD => Ok(Command::List(ListCommand)),
        SortCommand::WORD => sort::parse(args).map(Command::Sort),
        AddTaskCommand::WORD => add_task::parse(args).map(Command::AddTask),
        AddDeadlineCommand::WORD => add_deadline::parse(args).map(Command::AddDeadline),
        RemarkCommand::WORD => remark::parse(args).map(Command::Remark),
        ExitCommand::WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}
