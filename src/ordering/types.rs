//! Core traits for priority-ordered records.

/// A discrete severity level with an explicit urgency rank.
///
/// Ranks are compared numerically: **lower rank is more urgent**
/// (consistent with the min-heap convention used throughout this crate).
/// Implementors must spell the rank out rather than relying on declaration
/// order, so that reordering variants never silently changes priorities.
///
/// # Examples
///
/// ```
/// use triage_heap::ordering::PriorityClass;
///
/// #[derive(Clone, Copy)]
/// enum Severity { Critical, Minor }
///
/// impl PriorityClass for Severity {
///     fn rank(&self) -> u8 {
///         match self {
///             Severity::Critical => 0,
///             Severity::Minor => 1,
///         }
///     }
///     fn label(&self) -> &'static str {
///         match self {
///             Severity::Critical => "CRITICAL",
///             Severity::Minor => "MINOR",
///         }
///     }
/// }
///
/// assert!(Severity::Critical.rank() < Severity::Minor.rank());
/// ```
pub trait PriorityClass: Copy {
    /// Returns the urgency rank. Lower values are served first.
    fn rank(&self) -> u8;

    /// Returns the display name of this level.
    fn label(&self) -> &'static str;
}

/// A record that can be ranked by [`compare`](super::compare).
///
/// # Type Parameters
///
/// * `Class` - The priority class type carried by the record
pub trait Triaged {
    /// The priority class type.
    type Class: PriorityClass;

    /// Returns the record's priority class.
    fn priority_class(&self) -> Self::Class;

    /// Returns the arrival sequence number assigned at creation.
    fn arrival_sequence(&self) -> u64;
}
