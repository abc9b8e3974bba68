//! Smoothing filters for noisy sensor readings, one sample per `update`.

use crate::error::{DrillError, Result};

// =============================================================================
// Milestone 1: Exponential moving average
// =============================================================================

/// `value = alpha * input + (1 - alpha) * value`. A smaller `alpha` smooths
/// more. Without an initial value the first sample seeds the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaFilter {
    alpha: f32,
    value: Option<f32>,
}

impl EmaFilter {
    pub fn new(alpha: f32) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(DrillError::invalid_argument(
                "alpha",
                format!("must be in (0, 1], got {alpha}"),
            ));
        }
        Ok(EmaFilter { alpha, value: None })
    }

    pub fn with_initial(alpha: f32, initial: f32) -> Result<Self> {
        let mut filter = Self::new(alpha)?;
        filter.value = Some(initial);
        Ok(filter)
    }

    pub fn value(&self) -> Option<f32> {
        self.value
    }

    pub fn update(&mut self, input: f32) -> f32 {
        let next = match self.value {
            Some(prev) => self.alpha * input + (1.0 - self.alpha) * prev,
            None => input,
        };
        self.value = Some(next);
        next
    }
}

// =============================================================================
// Milestone 2: Moving average and median over a window
// =============================================================================

/// Running sum over the last `N` samples. Until the window fills, the average
/// covers only the samples seen so far.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    window: [f32; N],
    index: usize,
    count: usize,
    sum: f32,
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MovingAverage<N> {
    pub fn new() -> Self {
        MovingAverage {
            window: [0.0; N],
            index: 0,
            count: 0,
            sum: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn update(&mut self, input: f32) -> f32 {
        if N == 0 {
            return input;
        }
        self.sum += input - self.window[self.index];
        self.window[self.index] = input;
        self.index = (self.index + 1) % N;
        self.count = (self.count + 1).min(N);
        self.sum / self.count as f32
    }
}

/// Median of the last `N` samples. A single spike never reaches the output
/// once the window holds three or more samples.
#[derive(Debug, Clone)]
pub struct MedianFilter<const N: usize> {
    window: [f32; N],
    index: usize,
    count: usize,
}

impl<const N: usize> Default for MedianFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MedianFilter<N> {
    pub fn new() -> Self {
        MedianFilter {
            window: [0.0; N],
            index: 0,
            count: 0,
        }
    }

    /// On an even count this is the upper of the two middle samples.
    pub fn update(&mut self, input: f32) -> f32 {
        if N == 0 {
            return input;
        }
        self.window[self.index] = input;
        self.index = (self.index + 1) % N;
        self.count = (self.count + 1).min(N);

        let mut sorted = self.window;
        let filled = &mut sorted[..self.count];
        filled.sort_by(f32::total_cmp);
        filled[self.count / 2]
    }
}

// =============================================================================
// Milestone 3: ADC oversampling
// =============================================================================

/// Integer mean of a burst of ADC readings, truncated toward zero.
pub fn oversample(readings: &[u16]) -> Option<u16> {
    if readings.is_empty() {
        return None;
    }
    let sum: u64 = readings.iter().map(|&r| r as u64).sum();
    u16::try_from(sum / readings.len() as u64).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_ema_with_initial_value() {
        let mut ema = EmaFilter::with_initial(0.2, 1000.0).unwrap();
        let outputs: Vec<f32> = [1050.0, 950.0, 1030.0, 970.0]
            .into_iter()
            .map(|x| ema.update(x))
            .collect();
        for (got, want) in outputs.iter().zip([1010.0, 998.0, 1004.4, 997.52]) {
            assert!(close(*got, want), "{got} != {want}");
        }
    }

    #[test]
    fn test_ema_first_sample_seeds() {
        let mut ema = EmaFilter::new(0.5).unwrap();
        assert_eq!(ema.value(), None);
        assert_eq!(ema.update(8.0), 8.0);
        assert_eq!(ema.update(4.0), 6.0);
    }

    #[test]
    fn test_ema_rejects_bad_alpha() {
        assert!(EmaFilter::new(0.0).is_err());
        assert!(EmaFilter::new(1.5).is_err());
        assert!(EmaFilter::new(f32::NAN).is_err());
        assert!(EmaFilter::new(1.0).is_ok());
    }

    #[test]
    fn test_moving_average_warmup_and_window() {
        let mut avg: MovingAverage<4> = MovingAverage::new();
        assert!(avg.is_empty());
        assert_eq!(avg.update(4.0), 4.0);
        assert_eq!(avg.update(8.0), 6.0);
        assert_eq!(avg.update(0.0), 4.0);
        assert_eq!(avg.update(4.0), 4.0);
        // 4.0 drops out of the window.
        assert_eq!(avg.update(12.0), 6.0);
        assert_eq!(avg.len(), 4);
    }

    #[test]
    fn test_median_rejects_spike() {
        let mut median: MedianFilter<5> = MedianFilter::new();
        let outputs: Vec<f32> = [10.0, 11.0, 100.0, 12.0, 13.0]
            .into_iter()
            .map(|x| median.update(x))
            .collect();
        assert_eq!(outputs, vec![10.0, 11.0, 11.0, 12.0, 12.0]);
    }

    #[test]
    fn test_oversample() {
        let readings = [
            1000, 1020, 990, 1010, 1005, 995, 1015, 985, 1008, 1012, 998, 1002, 1018, 992, 1006,
            1004,
        ];
        assert_eq!(oversample(&readings), Some(1003));
        assert_eq!(oversample(&[u16::MAX, u16::MAX]), Some(u16::MAX));
        assert_eq!(oversample(&[]), None);
    }
}
