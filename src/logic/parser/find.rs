use nonempty::NonEmpty;

use super::ParseError;
use crate::{domain::FindPredicate, logic::commands::FindCommand};

pub(super) fn parse(args: &str) -> Result<FindCommand, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: FindCommand::USAGE,
        });
    }

    let keywords: Vec<String> = trimmed.split_whitespace().map(ToString::to_string).collect();
    let keywords =
        NonEmpty::from_vec(keywords).expect("splitting non-empty input yields at least one token");

    Ok(FindCommand::new(FindPredicate::new(keywords)))
}
