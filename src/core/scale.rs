/// Linear mapping from a data domain onto a pixel extent.
///
/// No validation happens here: a zero-width domain produces infinite or NaN
/// output, which downstream renderers skip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain_start: f64, domain_end: f64) -> Self {
        Self {
            domain_start,
            domain_end,
        }
    }

    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> f64 {
        extent_px * self.ratio(value)
    }
}
