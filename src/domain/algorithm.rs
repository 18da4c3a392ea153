//! Algorithm enum for selecting how a transition pass is scheduled.
//!
//! Both variants produce identical grids; they differ only in how the
//! per-cell work is spread across threads.

/// Available transition pass implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single thread, z/y/x scan
    Serial,
    /// One rayon task per z-slab of the interior
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Byte per cell, single thread",
            Algorithm::Parallel => "Byte per cell, parallel z-slabs",
        }
    }

    /// The other variant, for a UI toggle
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
    }

    #[test]
    fn test_default_is_parallel() {
        assert_eq!(Algorithm::default(), Algorithm::Parallel);
    }

    #[test]
    fn test_toggle_round_trips() {
        for algo in Algorithm::all() {
            assert_ne!(algo.toggled(), algo);
            assert_eq!(algo.toggled().toggled(), algo);
        }
    }
}
