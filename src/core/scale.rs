use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Like `new`, but widens a zero-span domain by one unit on each side.
    pub fn covering(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if domain_start == domain_end {
            return Self::new(domain_start - 1.0, domain_end + 1.0);
        }
        Self::new(domain_start, domain_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `range`; the range may be inverted (`start > end`).
    pub fn domain_to_range(self, value: f64, range: (f64, f64)) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        validate_range(range)?;

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.0 + normalized * (range.1 - range.0))
    }

    pub fn range_to_domain(self, pixel: f64, range: (f64, f64)) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        validate_range(range)?;

        let normalized = (pixel - range.0) / (range.1 - range.0);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn validate_range(range: (f64, f64)) -> ChartResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
        return Err(ChartError::InvalidData(
            "scale range must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}
