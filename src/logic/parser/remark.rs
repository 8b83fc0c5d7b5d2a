use super::{fields, syntax::PREFIX_REMARK, tokenizer::tokenize, ParseError};
use crate::logic::commands::RemarkCommand;

pub(super) fn parse(args: &str) -> Result<RemarkCommand, ParseError> {
    let tokens = tokenize(args, &[PREFIX_REMARK]);

    if !tokens.contains(PREFIX_REMARK) {
        return Err(ParseError::InvalidCommandFormat {
            usage: RemarkCommand::USAGE,
        });
    }
    tokens.verify_no_duplicates(&[PREFIX_REMARK])?;

    let mut positional = tokens.preamble().split_whitespace();
    let (Some(index), None) = (positional.next(), positional.next()) else {
        return Err(ParseError::InvalidCommandFormat {
            usage: RemarkCommand::USAGE,
        });
    };
    let index = fields::parse_index(index)?;

    // An empty remark value is allowed; it clears the record's remark.
    let remark = fields::parse_remark(tokens.value(PREFIX_REMARK).unwrap_or_default());

    Ok(RemarkCommand::new(index, remark))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{domain::Remark, logic::commands::Index};

    fn index(one_based: usize) -> Index {
        Index::from_one_based(NonZeroUsize::new(one_based).unwrap())
    }

    #[test]
    fn parses_index_and_remark_text() {
        let command = parse("1 re/referred by a friend").unwrap();
        assert_eq!(
            command,
            RemarkCommand::new(index(1), Remark::new("referred by a friend"))
        );
    }

    #[test]
    fn empty_remark_value_is_accepted() {
        let command = parse("1 re/").unwrap();
        assert_eq!(command, RemarkCommand::new(index(1), Remark::new("")));
    }

    #[test]
    fn missing_remark_prefix_reports_the_usage() {
        let error = parse("1 just text").unwrap_err();
        assert!(matches!(error, ParseError::InvalidCommandFormat { .. }));
    }

    #[test]
    fn missing_index_reports_the_usage() {
        let error = parse("re/note").unwrap_err();
        assert!(matches!(error, ParseError::InvalidCommandFormat { .. }));
    }
}
