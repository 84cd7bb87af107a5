//! Arrival sequence source.

/// Hands out arrival sequence numbers in increasing order.
///
/// The counter is owned by whoever creates records and passed in
/// explicitly, so independent sessions (and tests) never share state.
/// The first number issued by a fresh counter is `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalCounter {
    next: u64,
}

impl ArrivalCounter {
    /// Creates a counter whose first issued number is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a counter whose first issued number is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issues the next sequence number.
    pub fn issue(&mut self) -> u64 {
        let issued = self.next;
        self.next += 1;
        issued
    }

    /// Returns the number the next call to [`issue`](Self::issue) will issue.
    pub fn peek_next(&self) -> u64 {
        self.next
    }

    /// Rewinds the counter so the next issued number is `1` again.
    ///
    /// Only useful for building records that compare equal.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for ArrivalCounter {
    fn default() -> Self {
        Self::new()
    }
}
