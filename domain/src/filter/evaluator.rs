//! Predicate evaluation over the catalog
//!
//! Both functions are pure and stateless: the result is fully determined by
//! `(records, criteria)`, so re-running on every criteria change (even per
//! keystroke) is safe and idempotent.

use crate::filter::criteria::FilterCriteria;
use crate::listing::entities::Property;

/// Decide whether a single record satisfies the active criteria.
///
/// All four checks must hold (logical AND, no weighting):
/// 1. case-insensitive substring match of `search` against title or
///    location, with the empty needle matching everything;
/// 2. category equality, bypassed by [`KindFilter::All`](super::KindFilter);
/// 3. status equality, bypassed by [`StatusFilter::All`](super::StatusFilter);
/// 4. the price anchor lying inside the inclusive price window.
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    let matches_search = if criteria.search.is_empty() {
        true
    } else {
        let needle = criteria.search.to_lowercase();
        property.title.to_lowercase().contains(&needle)
            || property.location.to_lowercase().contains(&needle)
    };

    matches_search
        && criteria.kind.accepts(&property.kind)
        && criteria.status.accepts(property.status)
        && criteria.price.contains(property.price.anchor())
}

/// Select the records satisfying `criteria`, preserving catalog order.
///
/// A stable filter, never a sort: relative order in the result is exactly
/// the relative order in `properties`. An empty result is a valid outcome,
/// not an error; recovery (resetting the criteria) belongs to the caller.
pub fn filter<'a>(properties: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|property| matches(property, criteria))
        .collect()
}
