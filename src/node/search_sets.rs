//! Keyword search over construction-set identifiers.

use super::NodeError;
use crate::catalog::ConstructionSetCatalog;
use crate::search::filter_identifiers;

/// Filters a catalog of construction sets by keyword.
///
/// `keywords` is required (an unconnected input is an error; an empty list
/// legally returns the whole catalog, sorted). An absent `split_words`
/// defaults to splitting multi-word keywords into independent tokens.
pub fn run(
    catalog: &ConstructionSetCatalog,
    keywords: Option<&[String]>,
    split_words: Option<bool>,
) -> Result<Vec<String>, NodeError> {
    let keywords = keywords.ok_or(NodeError::MissingInput("keywords"))?;
    Ok(catalog.search(keywords, split_words.unwrap_or(true)))
}

/// Filters an arbitrary identifier list by keyword.
///
/// Both the identifiers and the keywords must be connected.
pub fn filter(
    identifiers: Option<&[String]>,
    keywords: Option<&[String]>,
    split_words: Option<bool>,
) -> Result<Vec<String>, NodeError> {
    let identifiers = identifiers.ok_or(NodeError::MissingInput("identifiers"))?;
    let keywords = keywords.ok_or(NodeError::MissingInput("keywords"))?;
    Ok(filter_identifiers(
        identifiers,
        keywords,
        split_words.unwrap_or(true),
    ))
}
