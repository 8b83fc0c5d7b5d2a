use super::{fields, syntax::PREFIX_TASK, tokenizer::tokenize, ParseError};
use crate::{domain::Task, logic::commands::AddTaskCommand};

pub(super) fn parse(args: &str) -> Result<AddTaskCommand, ParseError> {
    let tokens = tokenize(args, &[PREFIX_TASK]);

    if !tokens.contains(PREFIX_TASK) {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddTaskCommand::USAGE,
        });
    }
    tokens.verify_no_duplicates(&[PREFIX_TASK])?;

    let mut positional = tokens.preamble().split_whitespace();
    let (Some(index), None) = (positional.next(), positional.next()) else {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddTaskCommand::USAGE,
        });
    };
    let index = fields::parse_index(index)?;

    let body = tokens.value(PREFIX_TASK).unwrap_or_default();
    let task = Task::new(body, None).map_err(ParseError::from)?;

    Ok(AddTaskCommand::new(index, task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_and_task_body() {
        let command = parse("2 t/prepare for interview").unwrap();
        assert_eq!(
            command,
            AddTaskCommand::new(
                crate::logic::commands::Index::from_one_based(
                    std::num::NonZeroUsize::new(2).unwrap()
                ),
                Task::new("prepare for interview", None).unwrap()
            )
        );
    }

    #[test]
    fn missing_task_prefix_reports_the_usage() {
        let error = parse("1 prepare for interview").unwrap_err();
        assert!(matches!(error, ParseError::InvalidCommandFormat { .. }));
    }

    #[test]
    fn missing_index_reports_the_usage() {
        let error = parse("t/prepare for interview").unwrap_err();
        assert!(matches!(error, ParseError::InvalidCommandFormat { .. }));
    }

    #[test]
    fn extra_positional_tokens_are_rejected() {
        let error = parse("1 2 t/prepare").unwrap_err();
        assert!(matches!(error, ParseError::InvalidCommandFormat { .. }));
    }

    #[test]
    fn non_numeric_index_is_an_index_error() {
        assert_eq!(parse("one t/prepare").unwrap_err(), ParseError::InvalidIndex);
        assert_eq!(parse("0 t/prepare").unwrap_err(), ParseError::InvalidIndex);
    }

    #[test]
    fn blank_task_body_fails_validation() {
        let error = parse("1 t/ ").unwrap_err();
        assert!(matches!(error, ParseError::InvalidField(_)));
    }

    #[test]
    fn duplicate_task_prefix_is_rejected() {
        let error = parse("1 t/first t/second").unwrap_err();
        assert!(matches!(error, ParseError::DuplicatePrefix { .. }));
    }
}
