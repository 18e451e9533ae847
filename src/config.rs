//! Benchmark sweep configuration

use crate::harness::BenchError;

/// Dataset sizes of the reference sweep: N = 10^i for i in 3..=7
pub const DEFAULT_SIZES: [usize; 5] = [1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Number of timed `peek_min` and `extract_min` calls per structure
pub const DEFAULT_OPERATIONS: usize = 1_000;

/// Keys are drawn uniformly from `[0, DEFAULT_MAX_KEY)`
pub const DEFAULT_MAX_KEY: i32 = 1_000_000;

/// Parameters of one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset sizes, benchmarked in order
    pub sizes: Vec<usize>,
    /// Timed lookups and extractions per structure and size
    pub operations: usize,
    /// Exclusive upper bound of generated keys
    pub max_key: i32,
    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            operations: DEFAULT_OPERATIONS,
            max_key: DEFAULT_MAX_KEY,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Checks that the sweep can run
    ///
    /// # Errors
    /// Returns [`BenchError::InvalidConfig`] for an empty size list, a zero
    /// size, zero operations or a non-positive key bound.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one dataset size is required".to_string(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "dataset sizes must be positive".to_string(),
            ));
        }
        if self.operations == 0 {
            return Err(BenchError::InvalidConfig(
                "operation count must be positive".to_string(),
            ));
        }
        if self.max_key <= 0 {
            return Err(BenchError::InvalidConfig(format!(
                "max key must be positive, got {}",
                self.max_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_sweep() {
        let config = BenchConfig::default();
        assert_eq!(
            config.sizes,
            vec![1_000, 10_000, 100_000, 1_000_000, 10_000_000]
        );
        assert_eq!(config.operations, 1_000);
        assert_eq!(config.max_key, 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let bad = [
            BenchConfig {
                sizes: vec![],
                ..BenchConfig::default()
            },
            BenchConfig {
                sizes: vec![10, 0],
                ..BenchConfig::default()
            },
            BenchConfig {
                operations: 0,
                ..BenchConfig::default()
            },
            BenchConfig {
                max_key: 0,
                ..BenchConfig::default()
            },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(BenchError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
