//! Keyword search over identifier collections.
//!
//! Matching is case-insensitive substring containment: an identifier is kept
//! when at least one keyword occurs anywhere inside it. Results are always
//! returned in lexicographic ascending order regardless of input order.

use crate::name::HasName;

/// Filters a list of identifiers down to those matching the keywords.
///
/// With `split_words` set, keywords containing interior whitespace are broken
/// into independent single-word tokens before matching, so `"metal floor"`
/// matches both `"Metal Door"` and `"Wood Floor"`. Without it, multi-word
/// keywords must occur as exact contiguous phrases.
///
/// An empty keyword list is the identity: every identifier is returned,
/// sorted. The input is never mutated.
pub fn filter_identifiers(
    identifiers: &[String],
    keywords: &[String],
    split_words: bool,
) -> Vec<String> {
    let mut matches: Vec<String> = if keywords.is_empty() {
        identifiers.to_vec()
    } else {
        let tokens = normalize_keywords(keywords, split_words);
        identifiers
            .iter()
            .filter(|identifier| {
                let lowered = identifier.to_lowercase();
                tokens.iter().any(|token| lowered.contains(token.as_str()))
            })
            .cloned()
            .collect()
    };
    matches.sort();
    matches
}

/// Filters named objects by keyword, returning clones sorted by name.
///
/// Same matching semantics as [`filter_identifiers`], applied to
/// [`HasName::name`] instead of raw strings.
pub fn filter_by_name<T: HasName + Clone>(
    items: &[T],
    keywords: &[String],
    split_words: bool,
) -> Vec<T> {
    use crate::name::SortByName;

    let mut matches: Vec<T> = if keywords.is_empty() {
        items.to_vec()
    } else {
        let tokens = normalize_keywords(keywords, split_words);
        items
            .iter()
            .filter(|item| tokens.iter().any(|token| item.name_contains(token)))
            .cloned()
            .collect()
    };
    matches.as_mut_slice().sort_by_name();
    matches
}

/// Lowercases keywords, optionally splitting each on interior whitespace.
fn normalize_keywords(keywords: &[String], split_words: bool) -> Vec<String> {
    if split_words {
        keywords
            .iter()
            .flat_map(|keyword| keyword.split_whitespace())
            .map(|word| word.to_lowercase())
            .collect()
    } else {
        keywords.iter().map(|keyword| keyword.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_keywords_returns_all_sorted() {
        let identifiers = strings(&["Wood Floor", "Brick Wall", "Metal Door"]);
        let result = filter_identifiers(&identifiers, &[], true);
        assert_eq!(
            result,
            strings(&["Brick Wall", "Metal Door", "Wood Floor"])
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        let identifiers = strings(&["Brick_Wall"]);
        let result = filter_identifiers(&identifiers, &strings(&["brick"]), false);
        assert_eq!(result, strings(&["Brick_Wall"]));
    }

    #[test]
    fn test_split_words_matches_each_token() {
        let identifiers = strings(&["Metal Roof", "Wood Floor"]);
        let keywords = strings(&["metal floor"]);

        let split = filter_identifiers(&identifiers, &keywords, true);
        assert_eq!(split, strings(&["Metal Roof", "Wood Floor"]));

        // As a contiguous phrase, nothing contains "metal floor".
        let unsplit = filter_identifiers(&identifiers, &keywords, false);
        assert!(unsplit.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let result = filter_identifiers(&[], &strings(&["anything"]), true);
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_subset_and_sorted() {
        let identifiers = strings(&[
            "Generic Brick Wall",
            "Generic Wood Floor",
            "Metal Door",
        ]);
        let result = filter_identifiers(&identifiers, &strings(&["wood", "door"]), true);
        assert_eq!(result, strings(&["Generic Wood Floor", "Metal Door"]));
        for item in &result {
            assert!(identifiers.contains(item));
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let identifiers = strings(&["Metal Door", "Generic Wood Floor", "Brick Wall"]);
        let keywords = strings(&["door", "wood"]);
        let once = filter_identifiers(&identifiers, &keywords, true);
        let twice = filter_identifiers(&once, &keywords, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_phrase_match_when_present() {
        let identifiers = strings(&["Insulated Metal Door", "Metal Roof"]);
        let result = filter_identifiers(&identifiers, &strings(&["metal door"]), false);
        assert_eq!(result, strings(&["Insulated Metal Door"]));
    }

    #[test]
    fn test_filter_by_name() {
        #[derive(Clone)]
        struct Entry(String);
        impl crate::name::HasName for Entry {
            fn name(&self) -> &str {
                &self.0
            }
        }

        let items = vec![
            Entry("Wood Floor".to_string()),
            Entry("Metal Door".to_string()),
            Entry("Brick Wall".to_string()),
        ];
        let result = filter_by_name(&items, &strings(&["wall", "door"]), true);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, "Brick Wall");
        assert_eq!(result[1].0, "Metal Door");
    }
}
