use super::{
    fields,
    syntax::{
        Prefix, PREFIX_COMPANY, PREFIX_CONTACT_EMAIL, PREFIX_CONTACT_NAME, PREFIX_CONTACT_NUMBER,
        PREFIX_DESCRIPTION, PREFIX_LOCATION, PREFIX_ROLE, PREFIX_STATUS,
    },
    tokenizer::tokenize,
    ParseError,
};
use crate::{
    domain::{Internship, Remark},
    logic::commands::AddCommand,
};

const PREFIXES: [Prefix; 8] = [
    PREFIX_COMPANY,
    PREFIX_DESCRIPTION,
    PREFIX_STATUS,
    PREFIX_CONTACT_NAME,
    PREFIX_CONTACT_EMAIL,
    PREFIX_CONTACT_NUMBER,
    PREFIX_LOCATION,
    PREFIX_ROLE,
];

const MANDATORY: [Prefix; 3] = [PREFIX_COMPANY, PREFIX_DESCRIPTION, PREFIX_STATUS];

pub(super) fn parse(args: &str) -> Result<AddCommand, ParseError> {
    let tokens = tokenize(args, &PREFIXES);

    let mandatory_present = MANDATORY.iter().all(|&prefix| tokens.contains(prefix));
    if !mandatory_present || !tokens.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddCommand::USAGE,
        });
    }

    tokens.verify_no_duplicates(&PREFIXES)?;

    let company_name = fields::parse_company_name(tokens.value(PREFIX_COMPANY).unwrap_or_default())?;
    let status = fields::parse_status(tokens.value(PREFIX_STATUS).unwrap_or_default())?;
    let description =
        fields::parse_description(tokens.value(PREFIX_DESCRIPTION).unwrap_or_default())?;

    let contact_name = fields::parse_optional_contact_name(tokens.value(PREFIX_CONTACT_NAME))?;
    let contact_email = fields::parse_optional_contact_email(tokens.value(PREFIX_CONTACT_EMAIL))?;
    let contact_number =
        fields::parse_optional_contact_number(tokens.value(PREFIX_CONTACT_NUMBER))?;
    let location = fields::parse_optional_location(tokens.value(PREFIX_LOCATION))?;
    let role = fields::parse_optional_role(tokens.value(PREFIX_ROLE))?;

    // A freshly added record never carries a remark; use the remark command.
    let internship = Internship::new(
        company_name,
        contact_name,
        contact_email,
        contact_number,
        location,
        status,
        description,
        role,
        Remark::new(""),
    );

    Ok(AddCommand::new(internship))
}
