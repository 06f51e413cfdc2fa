use cinder_core::errors::{CinderError, Result};

use crate::source::Keyframe;
use crate::values::Interpolatable;

/// Time-stamped samples of a single transform channel.
///
/// Timestamps are in clip ticks, strictly increasing, and there is always at
/// least one key. Both invariants are checked at construction.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Result<Self> {
        Self::validated("track", times, values)
    }

    /// Builds a track from loader keys. `name` only labels errors.
    pub fn from_keys(name: &str, keys: &[Keyframe<T>]) -> Result<Self> {
        let times = keys.iter().map(|k| k.time).collect();
        let values = keys.iter().map(|k| k.value).collect();
        Self::validated(name, times, values)
    }

    fn validated(name: &str, times: Vec<f32>, values: Vec<T>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(CinderError::TrackLengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(CinderError::EmptyTrack(name.to_string()));
        }
        if let Some(index) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CinderError::UnsortedKeyframes {
                name: name.to_string(),
                index: index + 1,
            });
        }
        Ok(Self { times, values })
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; tracks cannot be built empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// A track with one key holds that value for all time.
    #[inline]
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.times.len() == 1
    }

    /// Timestamp of the final key.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times[self.times.len() - 1]
    }

    /// Index `i` of the interval `[times[i], times[i + 1])` that contains `time`.
    ///
    /// Times before the first key fall into interval 0.
    ///
    /// # Panics
    ///
    /// Panics if `time` is not less than the final timestamp (or is NaN).
    /// The animator wraps time into `[0, duration)`, so reaching this means a
    /// caller sampled outside the clip.
    #[must_use]
    pub fn interval_index(&self, time: f32) -> usize {
        let last = self.times.len() - 1;
        // First key strictly after `time`.
        let next = self.times.partition_point(|&t| t <= time);
        assert!(
            !time.is_nan() && next <= last,
            "Keyframe index out of bounds: time {time} with {} keys ending at {}",
            self.times.len(),
            self.times[last],
        );
        next.saturating_sub(1)
    }

    /// Interpolation factor of `time` inside interval `index`. Unclamped.
    #[inline]
    #[must_use]
    pub fn factor(&self, index: usize, time: f32) -> f32 {
        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        (time - t0) / (t1 - t0)
    }

    /// Samples the track at `time`.
    ///
    /// Single-key tracks return their key unchanged. Otherwise the enclosing
    /// interval is interpolated with [`Interpolatable::interpolate_linear`].
    ///
    /// # Panics
    ///
    /// See [`interval_index`](Self::interval_index).
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        if self.is_constant() {
            return self.values[0];
        }

        let index = self.interval_index(time);
        let t = self.factor(index, time);
        T::interpolate_linear(self.values[index], self.values[index + 1], t)
    }
}
