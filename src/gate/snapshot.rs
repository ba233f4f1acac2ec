//! Point-in-time view of a resource quota.

/// Quota state for one resource, as reported by the GitHub rate limit API.
///
/// # Example
///
/// ```
/// use quotawatch::gate::QuotaSnapshot;
///
/// let snapshot = QuotaSnapshot::new(5000, 2600, 1_696_896_000, 2400);
/// assert_eq!(snapshot.remaining(), 2600);
/// assert_eq!(snapshot.remaining_ratio().to_string(), "0.52");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaSnapshot {
    limit: u32,
    remaining: u32,
    reset: u64,
    used: u32,
}

impl QuotaSnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset: u64, used: u32) -> Self {
        Self {
            limit,
            remaining,
            reset,
            used,
        }
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp, in seconds, at which the window resets.
    #[must_use]
    pub const fn reset(&self) -> u64 {
        self.reset
    }

    /// Requests consumed in the current window.
    #[must_use]
    pub const fn used(&self) -> u32 {
        self.used
    }

    /// Share of the limit still available, rounded to two decimals.
    ///
    /// A zero limit yields `0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the ratio is exported as a two-decimal step output"
    )]
    pub fn remaining_ratio(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        let ratio = f64::from(self.remaining) / f64::from(self.limit);
        (ratio * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::QuotaSnapshot;

    #[rstest]
    #[case::half(5000, 2500, "0.5")]
    #[case::rounded(30, 18, "0.6")]
    #[case::two_decimals(5000, 4321, "0.86")]
    #[case::exhausted(5000, 0, "0")]
    #[case::zero_limit(0, 0, "0")]
    fn reports_remaining_ratio(#[case] limit: u32, #[case] remaining: u32, #[case] expected: &str) {
        let snapshot = QuotaSnapshot::new(limit, remaining, 1_700_000_000, 0);
        assert_eq!(snapshot.remaining_ratio().to_string(), expected);
    }
}
