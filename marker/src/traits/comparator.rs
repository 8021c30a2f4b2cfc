use crate::report::ScoreReport;
use crate::types::TabularResult;

/// ResultComparator is a strategy trait for scoring a user's query output.
///
/// Implementations must be pure: the report depends only on the two inputs, and no input is
/// mutated. They must also be total: every input pair yields a well-formed [`ScoreReport`],
/// with internal failures reported through its `details`.
pub trait ResultComparator: Send + Sync {
    /// Score `user` against the reference `solution`.
    fn compare(&self, user: &TabularResult, solution: &TabularResult) -> ScoreReport;
}
