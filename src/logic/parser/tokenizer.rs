use super::{syntax::Prefix, ParseError};

/// The result of tokenizing a command's argument string: the preamble plus a
/// mapping from each recognized prefix to the argument text that followed its
/// occurrences.
///
/// A prefix occurrence is the prefix literal at the start of the argument
/// string or preceded by whitespace. There is no quoting or escaping: a
/// prefix-looking substring inside a value starts a new value. This is an
/// accepted limitation of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentTokens {
    preamble: String,
    /// One entry per prefix occurrence, in order of appearance.
    values: Vec<(Prefix, String)>,
}

/// Splits an argument string on the given prefix markers.
///
/// Each prefix's argument text runs until the next recognized prefix
/// occurrence or the end of the string, and is trimmed. A prefix with no
/// occurrences simply maps to nothing; that is not an error.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentTokens {
    let mut occurrences: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(marker) {
            let at = from + found;
            let at_boundary = at == 0
                || args[..at]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
            if at_boundary {
                occurrences.push((at, prefix));
            }
            from = at + marker.len();
        }
    }
    occurrences.sort_by_key(|&(position, _)| position);

    let preamble = occurrences
        .first()
        .map_or(args, |&(first, _)| &args[..first])
        .trim()
        .to_string();

    let values = occurrences
        .iter()
        .enumerate()
        .map(|(i, &(position, prefix))| {
            let start = position + prefix.as_str().len();
            let end = occurrences
                .get(i + 1)
                .map_or(args.len(), |&(next, _)| next);
            (prefix, args[start..end].trim().to_string())
        })
        .collect();

    ArgumentTokens { preamble, values }
}

impl ArgumentTokens {
    /// The trimmed text appearing before the first recognized prefix.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The value of the last occurrence of `prefix`, if it occurred at all.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// All values of `prefix`, in order of appearance.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Returns `true` if `prefix` occurred at least once.
    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values
            .iter()
            .any(|(candidate, _)| *candidate == prefix)
    }

    /// Checks that each of the given prefixes occurred at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicatePrefix`] naming every offending prefix.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|&prefix| self.all_values(prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix {
                prefixes: duplicated,
            })
        }
    }
}
