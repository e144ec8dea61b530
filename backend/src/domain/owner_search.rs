//! Classification of last-name search results.

use crate::domain::Owner;

/// How many owners a last-name search matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing matched; the search form is shown again.
    NoMatches,
    /// Exactly one owner matched; clients go straight to its details.
    Single(Owner),
    /// Several owners matched; clients get a list to choose from.
    Many(Vec<Owner>),
}

impl SearchOutcome {
    /// Classify the owners returned by the directory.
    ///
    /// # Examples
    /// ```
    /// use petclinic::domain::SearchOutcome;
    ///
    /// assert_eq!(SearchOutcome::classify(Vec::new()), SearchOutcome::NoMatches);
    /// ```
    #[must_use]
    pub fn classify(mut owners: Vec<Owner>) -> Self {
        match owners.len() {
            0 => Self::NoMatches,
            1 => owners.pop().map_or(Self::NoMatches, Self::Single),
            _ => Self::Many(owners),
        }
    }

    /// Number of owners matched.
    pub fn match_count(&self) -> usize {
        match self {
            Self::NoMatches => 0,
            Self::Single(_) => 1,
            Self::Many(owners) => owners.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OwnerDetails, OwnerId};
    use rstest::rstest;

    fn owner(id: u32, last_name: &str) -> Owner {
        let details =
            OwnerDetails::try_from_parts("Test", last_name, "1 Main St.", "Madison", "6085550000")
                .expect("owner details");
        Owner::new(OwnerId::new(id).expect("owner id"), details)
    }

    #[rstest]
    fn empty_result_is_no_matches() {
        let outcome = SearchOutcome::classify(Vec::new());
        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(outcome.match_count(), 0);
    }

    #[rstest]
    fn one_result_is_single() {
        let expected = owner(1, "Franklin");
        let outcome = SearchOutcome::classify(vec![expected.clone()]);
        assert_eq!(outcome, SearchOutcome::Single(expected));
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    fn several_results_keep_directory_order(#[case] count: u32) {
        let owners: Vec<Owner> = (1..=count).map(|id| owner(id, "Davis")).collect();
        let outcome = SearchOutcome::classify(owners.clone());
        assert_eq!(outcome.match_count(), owners.len());
        assert_eq!(outcome, SearchOutcome::Many(owners));
    }
}
