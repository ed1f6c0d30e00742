//! Filter criteria and the predicate evaluator

pub mod criteria;
pub mod evaluator;

pub use criteria::{FilterCriteria, KindFilter, PriceBounds, StatusFilter};
pub use evaluator::{filter, matches};
