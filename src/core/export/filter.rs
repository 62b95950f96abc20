//! Collection selection
//!
//! Pure selection of the collections an export should process. An item is
//! kept when its uid is listed in `ids` OR its name contains any of `names`
//! (case-insensitive). With no criteria at all, everything is kept.

use crate::domain::CollectionSummary;

/// Select collections by uid or name, preserving input order
///
/// Never fails; an empty selection is reported by the caller.
///
/// # Examples
///
/// ```
/// use collex::core::export::filter_collections;
/// use collex::domain::{CollectionSummary, CollectionUid};
///
/// let collections = vec![
///     CollectionSummary::new(CollectionUid::new("col1").unwrap(), "User API"),
///     CollectionSummary::new(CollectionUid::new("col2").unwrap(), "Auth"),
/// ];
///
/// let selected = filter_collections(&collections, &[], &["user".to_string()]);
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].uid.as_str(), "col1");
/// ```
pub fn filter_collections(
    collections: &[CollectionSummary],
    ids: &[String],
    names: &[String],
) -> Vec<CollectionSummary> {
    if ids.is_empty() && names.is_empty() {
        return collections.to_vec();
    }

    let needles: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();

    collections
        .iter()
        .filter(|c| {
            ids.iter().any(|id| id == c.uid.as_str()) || {
                let name = c.name.to_lowercase();
                needles.iter().any(|needle| name.contains(needle.as_str()))
            }
        })
        .cloned()
        .collect()
}
