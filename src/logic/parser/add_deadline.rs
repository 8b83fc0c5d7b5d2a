use super::{fields, syntax::PREFIX_DEADLINE, tokenizer::tokenize, ParseError};
use crate::logic::commands::AddDeadlineCommand;

pub(super) fn parse(args: &str) -> Result<AddDeadlineCommand, ParseError> {
    let tokens = tokenize(args, &[PREFIX_DEADLINE]);

    if !tokens.contains(PREFIX_DEADLINE) {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddDeadlineCommand::USAGE,
        });
    }
    tokens.verify_no_duplicates(&[PREFIX_DEADLINE])?;

    let mut positional = tokens.preamble().split_whitespace();
    let (Some(internship), Some(task), None) =
        (positional.next(), positional.next(), positional.next())
    else {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddDeadlineCommand::USAGE,
        });
    };
    let internship_index = fields::parse_index(internship)?;
    let task_index = fields::parse_index(task)?;

    let deadline = fields::parse_deadline(tokens.value(PREFIX_DEADLINE).unwrap_or_default())?;

    Ok(AddDeadlineCommand::new(
        internship_index,
        task_index,
        deadline,
    ))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{domain::Deadline, logic::commands::Index};

    fn index(one_based: usize) -> Index {
        Index::from_one_based(NonZeroUsize::new(one_based).unwrap())
    }

    #[test]
    fn parses_both_indices_and_the_deadline() {
        let command = parse("1 2 dl/20-04-2026").unwrap();
        assert_eq!(
            command,
            AddDeadlineCommand::new(index(1), index(2), Deadline::new("20-04-2026").unwrap())
        );
    }

    #[test]
    fn deadline_text_may_contain_whitespace() {
        let command = parse("1 1 dl/next Friday noon").unwrap();
        assert_eq!(
            command,
            AddDeadlineCommand::new(index(1), index(1), Deadline::new("next Friday noon").unwrap())
        );
    }

    #[test]
    fn wrong_positional_count_reports_the_usage() {
        assert!(matches!(
            parse("1 dl/soon").unwrap_err(),
            ParseError::InvalidCommandFormat { .. }
        ));
        assert!(matches!(
            parse("1 2 3 dl/soon").unwrap_err(),
            ParseError::InvalidCommandFormat { .. }
        ));
    }

    #[test]
    fn missing_deadline_prefix_reports_the_usage() {
        let error = parse("1 2 soon").unwrap_err();
        assert_eq!(
            error,
            ParseError::InvalidCommandFormat {
                usage: AddDeadlineCommand::USAGE
            }
        );
    }

    #[test]
    fn non_numeric_indices_are_index_errors() {
        assert_eq!(parse("a 2 dl/soon").unwrap_err(), ParseError::InvalidIndex);
        assert_eq!(parse("1 b dl/soon").unwrap_err(), ParseError::InvalidIndex);
    }

    #[test]
    fn blank_deadline_fails_validation() {
        let error = parse("1 1 dl/").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Deadline should not be blank!"
        );
    }
}
