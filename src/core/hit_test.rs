use ordered_float::OrderedFloat;

/// Default maximum distance in pixels between a tap and a rendered point.
pub const DEFAULT_TAP_RADIUS_PX: f64 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPoint<E> {
    pub x: f64,
    pub y: f64,
    pub value: E,
}

/// Device positions of the samples drawn in the last pass.
///
/// The owning series clears it at the start of every draw, so lookups always
/// reflect what is currently on screen.
#[derive(Debug, Clone)]
pub struct RenderedPointRegistry<E> {
    entries: Vec<RenderedPoint<E>>,
    tap_radius_px: f64,
}

impl<E> Default for RenderedPointRegistry<E> {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_RADIUS_PX)
    }
}

impl<E> RenderedPointRegistry<E> {
    #[must_use]
    pub fn new(tap_radius_px: f64) -> Self {
        Self {
            entries: Vec::new(),
            tap_radius_px,
        }
    }

    #[must_use]
    pub fn tap_radius_px(&self) -> f64 {
        self.tap_radius_px
    }

    pub fn set_tap_radius_px(&mut self, tap_radius_px: f64) {
        self.tap_radius_px = tap_radius_px;
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, x: f64, y: f64, value: E) {
        self.entries.push(RenderedPoint { x, y, value });
    }

    #[must_use]
    pub fn entries(&self) -> &[RenderedPoint<E>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nearest rendered sample strictly within the tap radius of `(x, y)`.
    #[must_use]
    pub fn find_data_point(&self, x: f64, y: f64) -> Option<&E> {
        self.entries
            .iter()
            .filter(|entry| entry.x.is_finite() && entry.y.is_finite())
            .map(|entry| (OrderedFloat((entry.x - x).hypot(entry.y - y)), entry))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| distance.0 < self.tap_radius_px)
            .map(|(_, entry)| &entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::RenderedPointRegistry;
    use crate::core::DataPoint;

    #[test]
    fn finds_nearest_within_radius() {
        let mut registry = RenderedPointRegistry::new(10.0);
        registry.register(0.0, 0.0, DataPoint::new(1.0, 1.0));
        registry.register(20.0, 0.0, DataPoint::new(2.0, 2.0));
        registry.register(f64::NAN, 0.0, DataPoint::new(3.0, 3.0));

        assert_eq!(
            registry.find_data_point(16.0, 3.0),
            Some(&DataPoint::new(2.0, 2.0))
        );
        assert_eq!(registry.find_data_point(10.0, 30.0), None);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut registry = RenderedPointRegistry::default();
        registry.register(0.0, 0.0, DataPoint::new(1.0, 1.0));
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.find_data_point(0.0, 0.0), None);
    }
}
