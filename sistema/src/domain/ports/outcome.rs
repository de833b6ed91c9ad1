//! Explicit result types for remote fetches.
//!
//! Entity clients return these instead of raising: every failure mode of a
//! remote call collapses into `Missing` or `Unavailable`, so the enrichment
//! engine is plain data-flow over variants with no error handling at the
//! composition layer. `Unavailable` keeps an outage distinguishable from a
//! record that genuinely does not exist, and a listing outage distinguishable
//! from a legitimately empty collection.

/// Outcome of fetching one record by key from a remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The record exists and decoded cleanly.
    Found(T),
    /// The service answered and the record does not exist.
    Missing,
    /// The service could not be consulted (transport, timeout, bad status,
    /// undecodable payload).
    Unavailable,
}

impl<T> FetchOutcome<T> {
    /// The record, if the fetch found one.
    pub fn into_found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing | Self::Unavailable => None,
        }
    }

    /// Whether the service answered but holds no such record.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Whether the service could not be consulted at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Outcome of fetching a whole collection from a remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome<T> {
    /// The service answered; the collection may legitimately be empty.
    Listed(Vec<T>),
    /// The service could not be consulted.
    Unavailable,
}

impl<T> ListOutcome<T> {
    /// The records, collapsing an outage to an empty collection.
    pub fn into_records(self) -> Vec<T> {
        match self {
            Self::Listed(records) => records,
            Self::Unavailable => Vec::new(),
        }
    }

    /// Whether the service could not be consulted at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_outcome_collapses_to_option() {
        assert_eq!(FetchOutcome::Found(7).into_found(), Some(7));
        assert_eq!(FetchOutcome::<i64>::Missing.into_found(), None);
        assert_eq!(FetchOutcome::<i64>::Unavailable.into_found(), None);
    }

    #[test]
    fn fetch_outcome_distinguishes_missing_from_unavailable() {
        assert!(FetchOutcome::<i64>::Missing.is_missing());
        assert!(!FetchOutcome::<i64>::Missing.is_unavailable());
        assert!(FetchOutcome::<i64>::Unavailable.is_unavailable());
    }

    #[test]
    fn list_outcome_collapses_outage_to_empty() {
        assert_eq!(ListOutcome::Listed(vec![1, 2]).into_records(), vec![1, 2]);
        assert!(ListOutcome::<i64>::Unavailable.into_records().is_empty());
        assert!(ListOutcome::<i64>::Unavailable.is_unavailable());
        assert!(!ListOutcome::<i64>::Listed(Vec::new()).is_unavailable());
    }
}
