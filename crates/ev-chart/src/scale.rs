//! Band and linear scales.

/// Maps bar index `0..count` onto equal steps of `[0, width]`.
///
/// Each step is `width / count` wide and holds one band of
/// `step * (1 - padding)`; the remainder is the gap before the next band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    width: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, width: f64, padding: f64) -> Self {
        Self {
            count,
            width,
            padding,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance between consecutive band starts. Zero for an empty domain.
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.width / self.count as f64
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of band `index`, or `None` outside the domain.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.step() * index as f64)
    }

    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|x| x + self.bandwidth() / 2.0)
    }
}

/// Maps `[domain.0, domain.1]` linearly onto `[range.0, range.1]`.
///
/// A degenerate domain maps everything to `range.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. `count` is capped at
    /// [`MAX_TICKS`]. Domains too narrow for a representable step get just
    /// their two endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if stop <= start {
            return vec![start];
        }

        let step = tick_step(start, stop, count.min(MAX_TICKS));
        if !(step.is_finite() && step > 0.0) {
            return vec![start, stop];
        }
        if step >= 1.0 {
            let first = (start / step).ceil();
            let last = (stop / step).floor();
            tick_run(first, last, |i| i * step).unwrap_or_else(|| vec![start, stop])
        } else {
            // Divide by the inverse so 0.1-style steps stay exact.
            let inverse = (1.0 / step).round();
            if !(inverse.is_finite() && inverse > 0.0) {
                return vec![start, stop];
            }
            let first = (start * inverse).ceil();
            let last = (stop * inverse).floor();
            tick_run(first, last, |i| i / inverse).unwrap_or_else(|| vec![start, stop])
        }
    }
}

/// Upper bound on the tick count any axis asks for.
pub const MAX_TICKS: usize = 1_000;

/// `map(i)` for every integer `i` in `[first, last]`, or `None` when the run
/// is not a small finite range.
fn tick_run(first: f64, last: f64, map: impl Fn(f64) -> f64) -> Option<Vec<f64>> {
    let span = last - first;
    if !span.is_finite() || !(0.0..=2.0 * MAX_TICKS as f64).contains(&span) {
        return None;
    }
    let first = first as i64;
    let last = last as i64;
    Some((first..=last).map(|i| map(i as f64)).collect())
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let mut step = 10_f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50_f64.sqrt() {
        step *= 10.0;
    } else if error >= 10_f64.sqrt() {
        step *= 5.0;
    } else if error >= 2_f64.sqrt() {
        step *= 2.0;
    }
    step
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn steps_sum_to_width(
            count in 1_usize..200,
            width in 1.0_f64..5000.0,
            padding in 0.0_f64..0.9,
        ) {
            let x = BandScale::new(count, width, padding);
            let total: f64 = (0..count).map(|_| x.step()).sum();
            prop_assert!((total - width).abs() <= 1e-9 * width);
            prop_assert!(x.bandwidth() <= x.step());
        }

        #[test]
        fn scale_stays_in_range(max in 1.0_f64..1e6, frac in 0.0_f64..=1.0) {
            let y = LinearScale::new((0.0, max), (210.0, 0.0));
            let px = y.scale(max * frac);
            prop_assert!((-1e-9..=210.0 + 1e-9).contains(&px));
        }
    }
}
