//! Random sample generation.
//!
//! A [`DataSource`] owns its own generator (no process-wide random state) and
//! hands out freshly allocated [`SampleBatch`]es on every request.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};

/// Number of samples returned by [`DataSource::provide_default`].
pub const DEFAULT_COUNT: usize = 10;

/// Abstraction over the random generator used by a [`DataSource`].
///
/// Any `rand` generator implements this, so production code can use the
/// thread-local generator while tests inject a seeded one.
pub trait SampleRng {
    /// Draw one integer uniformly from the inclusive range `[low, high]`.
    fn sample_inclusive(&mut self, low: i64, high: i64) -> i64;
}

impl<R: RngCore> SampleRng for R {
    fn sample_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }
}

/// Inclusive `[low, high]` bounds for generated samples.
///
/// Serialized as a `[low, high]` pair; inverted pairs fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct SampleRange {
    low: i64,
    high: i64,
}

impl SampleRange {
    /// Create a range; fails when `low > high`.
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            return Err(DemoError::invalid_argument(
                "sample_range",
                format!("low bound {low} exceeds high bound {high}"),
            ));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Whether `value` lies inside the range (both ends included).
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl TryFrom<[i64; 2]> for SampleRange {
    type Error = DemoError;

    fn try_from([low, high]: [i64; 2]) -> Result<Self> {
        Self::new(low, high)
    }
}

impl From<SampleRange> for [i64; 2] {
    fn from(range: SampleRange) -> Self {
        [range.low, range.high]
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self { low: 0, high: 10 }
    }
}

/// One generated, ordered sequence of sample values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleBatch {
    values: Vec<i64>,
}

impl SampleBatch {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    /// Plot coordinates with the sample index on the x axis.
    pub fn to_points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v as f64])
            .collect()
    }
}

impl From<Vec<i64>> for SampleBatch {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a SampleBatch {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Formats as `[3, 0, 10]`, the console representation of a batch.
impl fmt::Display for SampleBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Produces batches of pseudo-random integers on demand.
pub struct DataSource {
    rng: Box<dyn SampleRng>,
    range: SampleRange,
}

impl DataSource {
    /// Data source backed by the thread-local generator, sampling `[0, 10]`.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }

    /// Deterministic data source: the same seed yields the same batches.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Data source using a caller-supplied generator.
    pub fn with_rng(rng: impl SampleRng + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            range: SampleRange::default(),
        }
    }

    /// Seeded when `seed` is given, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    /// Replace the sampling range.
    pub fn with_range(mut self, range: SampleRange) -> Self {
        self.range = range;
        self
    }

    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// Generate `count` fresh samples, each uniform in the configured range.
    pub fn provide_data(&mut self, count: usize) -> SampleBatch {
        let SampleRange { low, high } = self.range;
        let values = (0..count)
            .map(|_| self.rng.sample_inclusive(low, high))
            .collect();
        SampleBatch { values }
    }

    /// [`provide_data`](Self::provide_data) with [`DEFAULT_COUNT`] samples.
    pub fn provide_default(&mut self) -> SampleBatch {
        self.provide_data(DEFAULT_COUNT)
    }

    /// Signed-count variant; negative counts are rejected.
    pub fn provide_data_checked(&mut self, count: i64) -> Result<SampleBatch> {
        let count = usize::try_from(count).map_err(|_| {
            DemoError::invalid_argument("count", format!("must be non-negative, got {count}"))
        })?;
        Ok(self.provide_data(count))
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new()
    }
}
