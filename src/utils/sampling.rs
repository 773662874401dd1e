use crate::config::Config;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
///
/// The dashboard draws a fresh value on every render pass; tests substitute a
/// scripted source so the chosen index and window are exact.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. Callers guarantee `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}

/// `SmallRng`-backed source. Needs no OS entropy, so it runs unchanged in the browser.
#[derive(Debug, Clone)]
pub struct SeededRandom(SmallRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Seeded from the wall clock mixed with a per-view salt, for live page loads.
    /// Views sharing a render pass pass different salts so their draws are independent.
    pub fn from_clock(salt: u64) -> Self {
        Self::from_seed(salted_seed(
            chrono::Utc::now().timestamp_millis().unsigned_abs(),
            salt,
        ))
    }
}

/// Seed salts for views that sample in the same render pass
pub mod salt {
    pub const GAUGE: u64 = 1;
    pub const USAGE_CHART: u64 = 2;
}

/// Mixes `salt` into `seed` (golden-ratio multiply) so equal seeds diverge per salt.
pub fn salted_seed(seed: u64, salt: u64) -> u64 {
    seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Picks the record treated as "now" when previewing the billing cycle.
///
/// Uniform over `[floor(0.1 * len), len - 1]`, so the preview never lands in the
/// first tenth of the month. Returns `None` for an empty log.
pub fn simulated_current_index(len: usize, rng: &mut impl RandomSource) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let min_index = (len as f64 * Config::MIN_INDEX_FRACTION).floor() as usize;
    let max_index = len - 1;

    Some(min_index + rng.below(max_index - min_index + 1))
}

/// Contiguous run of records chosen by [`windowed_slice`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a, T> {
    pub start: usize,
    pub records: &'a [T],
}

impl<T> Window<'_, T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.records.last()
    }

    /// 1-based inclusive row numbers covered, as shown in the console log
    pub fn row_range(&self) -> (usize, usize) {
        (self.start + 1, self.start + self.records.len())
    }
}

/// Random contiguous window of `size` records.
///
/// Inputs no longer than `size` come back whole. Otherwise the start is uniform
/// in `[0, len - size)` and exactly `size` records are returned in order.
pub fn windowed_slice<'a, T>(
    records: &'a [T],
    size: usize,
    rng: &mut impl RandomSource,
) -> Window<'a, T> {
    if records.len() <= size {
        return Window { start: 0, records };
    }

    let start = rng.below(records.len() - size);
    Window {
        start,
        records: &records[start..start + size],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn below(&mut self, bound: usize) -> usize {
            self.0.min(bound - 1)
        }
    }

    #[test]
    fn test_salted_sources_diverge() {
        let seed = 1_733_400_000_000;
        assert_eq!(salted_seed(seed, 0), seed);
        assert_ne!(salted_seed(seed, salt::GAUGE), salted_seed(seed, salt::USAGE_CHART));

        let mut gauge = SeededRandom::from_seed(salted_seed(seed, salt::GAUGE));
        let mut chart = SeededRandom::from_seed(salted_seed(seed, salt::USAGE_CHART));
        let gauge_draws: Vec<usize> = (0..16).map(|_| gauge.below(1_000_000)).collect();
        let chart_draws: Vec<usize> = (0..16).map(|_| chart.below(1_000_000)).collect();
        assert_ne!(gauge_draws, chart_draws);
    }

    #[test]
    fn test_index_lower_bound() {
        assert_eq!(simulated_current_index(100, &mut Fixed(0)), Some(10));
        assert_eq!(simulated_current_index(100, &mut Fixed(usize::MAX)), Some(99));
    }

    #[test]
    fn test_index_single_and_empty() {
        assert_eq!(simulated_current_index(1, &mut Fixed(5)), Some(0));
        assert_eq!(simulated_current_index(0, &mut Fixed(0)), None);
    }

    #[test]
    fn test_window_exact_start() {
        let data: Vec<u32> = (0..20).collect();
        let window = windowed_slice(&data, 5, &mut Fixed(7));
        assert_eq!(window.start, 7);
        assert_eq!(window.records, &[7, 8, 9, 10, 11]);
        assert_eq!(window.row_range(), (8, 12));
    }

    #[test]
    fn test_window_start_excludes_last_offset() {
        let data: Vec<u32> = (0..12).collect();
        let window = windowed_slice(&data, 10, &mut Fixed(usize::MAX));
        assert_eq!(window.start, 1);
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn test_seeded_source_in_bounds() {
        let mut rng = SeededRandom::from_seed(42);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
    }
}
