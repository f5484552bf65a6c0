//! Scratch buffer configuration.

/// How a cached buffer grows when a cell needs more room than it has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Grow to exactly the requested length.
    Exact,
    /// Grow to at least double the current capacity, or the requested
    /// length if that is larger.
    #[default]
    Doubling,
}

impl GrowthPolicy {
    /// Capacity to grow to when `required` slots are needed and `current`
    /// are available. Never returns less than `required`.
    pub fn next_capacity(self, current: usize, required: usize) -> usize {
        match self {
            Self::Exact => required,
            // Overflow falls back to an exact fit.
            Self::Doubling => current.checked_mul(2).unwrap_or(required).max(required),
        }
    }
}

/// Configuration for the scratch buffer owned by an indirection container.
///
/// Immutable once handed to a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Slots reserved before the first access. Default: 0.
    pub initial_capacity: usize,
    /// Growth strategy once the reservation is exceeded.
    pub growth: GrowthPolicy,
}

impl ScratchConfig {
    /// Default initial capacity (lazy allocation).
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config reserving `initial_capacity` slots up front.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
