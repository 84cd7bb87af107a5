//! The two-level comparison rule.

use std::cmp::Ordering;

use super::types::{PriorityClass, Triaged};

/// Compares two records by priority class rank, then by arrival sequence.
///
/// Returns `Less` when `a` should be served before `b`. The rule is
/// pure and total: it depends only on the two keys of each record.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use triage_heap::admissions::{Gender, PatientRecord, TriageLevel};
/// use triage_heap::ordering::{compare, ArrivalCounter};
///
/// let mut arrivals = ArrivalCounter::new();
/// let green = PatientRecord::new(30, Gender::Male, TriageLevel::Green, &mut arrivals);
/// let red = PatientRecord::new(40, Gender::Female, TriageLevel::Red, &mut arrivals);
///
/// // RED outranks GREEN even though it arrived later.
/// assert_eq!(compare(&red, &green), Ordering::Less);
/// ```
pub fn compare<R: Triaged>(a: &R, b: &R) -> Ordering {
    let rank_a = a.priority_class().rank();
    let rank_b = b.priority_class().rank();

    rank_a
        .cmp(&rank_b)
        .then_with(|| a.arrival_sequence().cmp(&b.arrival_sequence()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test domain: bare keys with a three-level class
    #[derive(Debug, Clone, Copy)]
    enum Level {
        High,
        Mid,
        Low,
    }

    impl PriorityClass for Level {
        fn rank(&self) -> u8 {
            match self {
                Level::High => 0,
                Level::Mid => 1,
                Level::Low => 2,
            }
        }
        fn label(&self) -> &'static str {
            match self {
                Level::High => "HIGH",
                Level::Mid => "MID",
                Level::Low => "LOW",
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Key {
        level: Level,
        seq: u64,
    }

    impl Triaged for Key {
        type Class = Level;
        fn priority_class(&self) -> Level {
            self.level
        }
        fn arrival_sequence(&self) -> u64 {
            self.seq
        }
    }

    fn key(level: Level, seq: u64) -> Key {
        Key { level, seq }
    }

    #[test]
    fn test_class_dominates_arrival() {
        // Higher urgency wins regardless of arrival order.
        assert_eq!(compare(&key(Level::High, 9), &key(Level::Low, 1)), Ordering::Less);
        assert_eq!(compare(&key(Level::Low, 1), &key(Level::Mid, 2)), Ordering::Greater);
    }

    #[test]
    fn test_same_class_different_class_same_seq() {
        assert_eq!(compare(&key(Level::High, 1), &key(Level::Mid, 1)), Ordering::Less);
    }

    #[test]
    fn test_arrival_breaks_ties() {
        assert_eq!(compare(&key(Level::Mid, 1), &key(Level::Mid, 2)), Ordering::Less);
        assert_eq!(compare(&key(Level::Mid, 3), &key(Level::Mid, 1)), Ordering::Greater);
    }

    #[test]
    fn test_equal_keys_compare_equal() {
        assert_eq!(compare(&key(Level::Low, 4), &key(Level::Low, 4)), Ordering::Equal);
    }

    #[test]
    fn test_antisymmetric_and_transitive() {
        let keys = [
            key(Level::Low, 1),
            key(Level::High, 5),
            key(Level::Mid, 2),
            key(Level::High, 3),
            key(Level::Mid, 2),
            key(Level::Low, 0),
        ];

        for a in &keys {
            for b in &keys {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                for c in &keys {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }
}
