//! Per-category content size policy.
//!
//! # Responsibility
//! - Map a training category to its maximum content length in characters.
//!
//! # Invariants
//! - Limits are fixed constants; adding a category extends this mapping.
//! - Lookup is pure and has no side effects.

use crate::model::subject::TrainingCategory;

/// Maximum characters of owner-wide (general) training content.
pub const GENERAL_MAX_CHARS: usize = 5_000;

/// Maximum characters of topic-scoped training content.
pub const TOPIC_MAX_CHARS: usize = 50_000;

/// Returns the maximum content length in characters for one category.
///
/// Length is measured in characters, not bytes, so multi-byte text is not
/// penalized by its encoding.
pub fn max_content_chars(category: TrainingCategory) -> usize {
    match category {
        TrainingCategory::General => GENERAL_MAX_CHARS,
        TrainingCategory::Topic => TOPIC_MAX_CHARS,
    }
}

#[cfg(test)]
mod tests {
    use super::{max_content_chars, GENERAL_MAX_CHARS, TOPIC_MAX_CHARS};
    use crate::model::subject::TrainingCategory;

    #[test]
    fn general_limit_is_five_thousand() {
        assert_eq!(max_content_chars(TrainingCategory::General), 5_000);
        assert_eq!(GENERAL_MAX_CHARS, 5_000);
    }

    #[test]
    fn topic_limit_is_fifty_thousand() {
        assert_eq!(max_content_chars(TrainingCategory::Topic), 50_000);
        assert_eq!(TOPIC_MAX_CHARS, 50_000);
    }
}
