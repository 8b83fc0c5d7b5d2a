use super::{
    fields,
    syntax::{
        Prefix, PREFIX_COMPANY, PREFIX_CONTACT_EMAIL, PREFIX_CONTACT_NAME, PREFIX_CONTACT_NUMBER,
        PREFIX_DESCRIPTION, PREFIX_LOCATION, PREFIX_REMARK, PREFIX_ROLE, PREFIX_STATUS,
    },
    tokenizer::tokenize,
    ParseError,
};
use crate::{domain::SortField, logic::commands::SortCommand};

/// The field selected by each prefix, in the fixed priority order: when
/// several sort prefixes are supplied at once, the first entry present wins.
const SORT_FIELDS: [(Prefix, SortField); 9] = [
    (PREFIX_COMPANY, SortField::Company),
    (PREFIX_CONTACT_NAME, SortField::ContactName),
    (PREFIX_CONTACT_NUMBER, SortField::ContactNumber),
    (PREFIX_CONTACT_EMAIL, SortField::ContactEmail),
    (PREFIX_STATUS, SortField::Status),
    (PREFIX_LOCATION, SortField::Location),
    (PREFIX_ROLE, SortField::Role),
    (PREFIX_REMARK, SortField::Remark),
    (PREFIX_DESCRIPTION, SortField::Description),
];

pub(super) fn parse(args: &str) -> Result<SortCommand, ParseError> {
    if args.trim().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: SortCommand::USAGE,
        });
    }

    let prefixes: Vec<Prefix> = SORT_FIELDS.iter().map(|&(prefix, _)| prefix).collect();
    let tokens = tokenize(args, &prefixes);

    let Some(&(prefix, field)) = SORT_FIELDS
        .iter()
        .find(|&&(prefix, _)| tokens.contains(prefix))
    else {
        return Err(ParseError::InvalidSortField);
    };

    let order = fields::parse_order(tokens.value(prefix).unwrap_or_default())?;
    Ok(SortCommand::new(field, order))
}
