use serde::{Deserialize, Serialize};

use crate::{Colour, ColourStop};

/// Ordered anchors of a gradient. Holds between one and
/// [`GradientDescriptor::MAX_ANCHORS`] anchors.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<ColourStop>", into = "Vec<ColourStop>")]
pub struct GradientDescriptor {
    anchors: Vec<ColourStop>,
}

impl GradientDescriptor {
    /// Upper bound on the number of anchors, which keeps the cache of
    /// `255 * anchors + 1` entries small.
    pub const MAX_ANCHORS: usize = 1024;

    /// Returns `None` if there are no anchors or more than
    /// [`GradientDescriptor::MAX_ANCHORS`].
    pub fn new(anchors: Vec<ColourStop>) -> Option<Self> {
        if anchors.is_empty() || anchors.len() > Self::MAX_ANCHORS {
            None
        } else {
            Some(Self { anchors })
        }
    }

    pub fn anchors(&self) -> &[ColourStop] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn first(&self) -> ColourStop {
        self.anchors[0]
    }
}

impl TryFrom<Vec<ColourStop>> for GradientDescriptor {
    type Error = &'static str;

    fn try_from(anchors: Vec<ColourStop>) -> Result<Self, Self::Error> {
        Self::new(anchors).ok_or("gradient needs between 1 and 1024 anchors")
    }
}

impl From<GradientDescriptor> for Vec<ColourStop> {
    fn from(descriptor: GradientDescriptor) -> Self {
        descriptor.anchors
    }
}

impl<const N: usize> From<[Colour; N]> for GradientDescriptor {
    fn from(colours: [Colour; N]) -> Self {
        const { assert!(N > 0 && N <= GradientDescriptor::MAX_ANCHORS) };
        Self {
            anchors: colours.into_iter().map(ColourStop::from).collect(),
        }
    }
}

/// A gradient spread over the numeric domain `[min, max)`, with every colour
/// it can produce precomputed.
///
/// The cache holds `255 * anchors + 1` entries, so looking a value up is a
/// single index computation. It is never modified once built; build a new one
/// when any of the parameters change.
#[derive(Clone, Debug)]
pub struct GradientCache {
    anchors: Vec<ColourStop>,
    min: f64,
    max: f64,
    offset: f64,
    looped: bool,
    background: Option<Colour>,
    step_max: usize,
    step_size: f64,
    lut: Vec<Colour>,
}

pub struct GradientCacheBuilder {
    descriptor: GradientDescriptor,
    min: f64,
    max: f64,
    offset: f64,
    looped: bool,
    background: Option<Colour>,
}

impl GradientCacheBuilder {
    /// Shifts every value by `offset` before the colour is calculated.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Wraps values outside of the domain around instead of clamping them.
    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    /// Colour returned for a value of exactly zero, bypassing the gradient.
    pub fn background(mut self, background: Option<Colour>) -> Self {
        self.background = background;
        self
    }

    pub fn build(self) -> GradientCache {
        let (anchors, max) = if self.min >= self.max {
            (vec![self.descriptor.first()], self.min + 1.0)
        } else {
            (self.descriptor.anchors, self.max)
        };

        // Descriptors are capped at MAX_ANCHORS, so this never saturates.
        let step_max = anchors.len().saturating_mul(255);
        let mut cache = GradientCache {
            anchors,
            min: self.min,
            max,
            offset: self.offset,
            looped: self.looped,
            background: self.background,
            step_max,
            step_size: (max - self.min) / step_max as f64,
            lut: Vec::new(),
        };

        // Sampling at `min + diff * i / step_max` rather than `min + i * step_size`
        // keeps the last entry exactly on `max`.
        let lut: Vec<Colour> = (0..=step_max)
            .map(|i| {
                let position = i as f64 / step_max as f64;
                cache.calculate(cache.min + (max - cache.min) * position)
            })
            .collect();
        cache.lut = lut;
        cache
    }
}

impl GradientCache {
    pub fn builder(descriptor: GradientDescriptor, min: f64, max: f64) -> GradientCacheBuilder {
        GradientCacheBuilder {
            descriptor,
            min,
            max,
            offset: 0.0,
            looped: false,
            background: None,
        }
    }

    /// Clamped gradient without offset or background.
    pub fn new(descriptor: GradientDescriptor, min: f64, max: f64) -> Self {
        Self::builder(descriptor, min, max).build()
    }

    /// Reads the colour for `n` from the cache.
    pub fn lookup(&self, n: f64) -> Colour {
        if let Some(background) = self.background {
            if n == 0.0 {
                return background;
            }
        }

        let step_max = self.step_max as i64;
        let index = ((n - self.min) / self.step_size).floor() as i64;
        let index = if self.looped && index != step_max {
            index.rem_euclid(step_max)
        } else {
            index.clamp(0, step_max)
        };
        self.lut[index as usize]
    }

    /// Calculates the colour for `n` without going through the cache.
    pub fn calculate(&self, n: f64) -> Colour {
        self.calculate_exact(n).truncate()
    }

    /// Like [`GradientCache::calculate`], but keeps fractional channel values.
    pub fn calculate_exact(&self, n: f64) -> ColourStop {
        let position = (n + self.offset - self.min) / (self.max - self.min);
        let scaled = position * (self.anchors.len() - 1) as f64;

        let base = scaled.floor();
        let ratio = (scaled - base).clamp(0.0, 1.0);
        let (base, next) = self.anchor_indices(base as i64);
        self.anchors[base].lerp(&self.anchors[next], ratio)
    }

    fn anchor_indices(&self, base: i64) -> (usize, usize) {
        let next = base.saturating_add(1);
        let len = self.anchors.len() as i64;
        if self.looped {
            (base.rem_euclid(len) as usize, next.rem_euclid(len) as usize)
        } else {
            (base.clamp(0, len - 1) as usize, next.clamp(0, len - 1) as usize)
        }
    }

    pub fn anchors(&self) -> &[ColourStop] {
        &self.anchors
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn background(&self) -> Option<Colour> {
        self.background
    }

    /// Index of the last cache entry.
    pub fn step_count(&self) -> usize {
        self.step_max
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn entries(&self) -> &[Colour] {
        &self.lut
    }
}

impl From<GradientDescriptor> for GradientCache {
    /// Spreads the gradient over `[0, 1)`.
    fn from(descriptor: GradientDescriptor) -> Self {
        Self::new(descriptor, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Colour = Colour::rgb(0, 0, 255);
    const RED: Colour = Colour::rgb(255, 0, 0);
    const GREEN: Colour = Colour::rgb(0, 255, 0);

    #[test]
    fn descriptor_is_never_empty() {
        assert!(GradientDescriptor::new(Vec::new()).is_none());
        let descriptor = GradientDescriptor::from([BLUE, RED]);
        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.first(), ColourStop::from(BLUE));
        assert!(serde_json::from_str::<GradientDescriptor>("[]").is_err());
    }

    #[test]
    fn descriptor_size_is_bounded() {
        let stop = ColourStop::from(BLUE);
        let largest = GradientDescriptor::new(vec![stop; GradientDescriptor::MAX_ANCHORS]);
        assert!(largest.is_some());
        assert_eq!(
            GradientCache::new(largest.unwrap(), 0.0, 1.0).step_count(),
            255 * GradientDescriptor::MAX_ANCHORS
        );
        assert!(
            GradientDescriptor::new(vec![stop; GradientDescriptor::MAX_ANCHORS + 1]).is_none(),
            "one anchor too many"
        );
    }

    #[test]
    fn clamped_lookup() {
        let cache = GradientCache::new([BLUE, RED].into(), 0.0, 100.0);
        assert_eq!(cache.step_count(), 510);
        assert_eq!(cache.entries().len(), 511);
        assert_eq!(cache.lookup(0.0), BLUE, "start of domain");
        assert_eq!(cache.lookup(100.0), RED, "end of domain");
        assert_eq!(cache.lookup(-5.0), cache.lookup(0.0), "below domain");
        assert_eq!(cache.lookup(1e9), RED, "far above domain");
        assert_eq!(cache.lookup(50.0), Colour::rgb(127, 0, 127), "midpoint");
    }

    #[test]
    fn looped_lookup() {
        // A step size of exactly one keeps indices free of rounding.
        let cache = GradientCache::builder([BLUE, RED].into(), 0.0, 510.0)
            .looped(true)
            .build();
        assert_eq!(cache.step_size(), 1.0);
        assert_eq!(cache.lookup(0.0), BLUE);
        assert_eq!(cache.lookup(510.0), RED, "last entry is not wrapped");
        assert_eq!(cache.lookup(1020.0), BLUE, "wrapped past the end");
        assert_eq!(cache.lookup(511.0), cache.lookup(1.0));
        assert_eq!(cache.lookup(-1.0), cache.lookup(509.0), "wrapped below");
    }

    #[test]
    fn unlooped_lookup_with_same_domain_clamps() {
        let cache = GradientCache::new([BLUE, RED].into(), 0.0, 510.0);
        assert_eq!(cache.lookup(1020.0), RED);
        assert_eq!(cache.lookup(-1.0), BLUE);
    }

    #[test]
    fn background_replaces_zero_only() {
        let background = Colour::rgba(0, 0, 0, 0);
        let cache = GradientCache::builder([BLUE, RED].into(), -10.0, 10.0)
            .background(Some(background))
            .build();
        assert_eq!(cache.lookup(0.0), background);
        assert_ne!(cache.lookup(0.1), background);
        assert_eq!(cache.lookup(-10.0), BLUE);
    }

    #[test]
    fn three_anchors() {
        let cache = GradientCache::new([BLUE, RED, GREEN].into(), 0.0, 1.0);
        assert_eq!(cache.calculate(0.0), BLUE);
        assert_eq!(cache.calculate(0.5), RED);
        assert_eq!(cache.calculate(1.0), GREEN);
        assert_eq!(cache.calculate(0.25), Colour::rgb(127, 0, 127));
        assert_eq!(
            cache.calculate_exact(0.25),
            ColourStop::new(127.5, 0.0, 127.5, 255.0)
        );
        assert_eq!(cache.lookup(1.0), GREEN);
    }

    #[test]
    fn offset_shifts_values() {
        let cache = GradientCache::builder([BLUE, RED].into(), 0.0, 1.0)
            .offset(0.5)
            .build();
        assert_eq!(cache.calculate(0.0), Colour::rgb(127, 0, 127));
        assert_eq!(cache.calculate(0.5), RED);
        assert_eq!(cache.calculate(0.9), RED, "clamped after offset");
    }

    #[test]
    fn looped_calculation_blends_back_to_first_anchor() {
        let cache = GradientCache::builder([BLUE, RED, GREEN].into(), 0.0, 1.0)
            .looped(true)
            .offset(1.25)
            .build();
        assert_eq!(cache.calculate(0.0), Colour::rgb(0, 127, 127));
        assert_eq!(cache.calculate(0.25), BLUE);
    }

    #[test]
    fn empty_domain_collapses_to_first_anchor() {
        let cache = GradientCache::new([BLUE, RED].into(), 5.0, 5.0);
        assert_eq!(cache.anchors().len(), 1);
        assert_eq!(cache.domain(), (5.0, 6.0));
        assert_eq!(cache.step_count(), 255);
        assert!(cache.entries().iter().all(|c| *c == BLUE));
        assert_eq!(cache.lookup(100.0), BLUE);
        assert_eq!(cache.lookup(-100.0), BLUE);
    }

    #[test]
    fn building_is_deterministic() {
        let build = || {
            GradientCache::builder([BLUE, RED, GREEN].into(), 3.0, 17.0)
                .offset(2.0)
                .looped(true)
                .build()
        };
        assert_eq!(build().entries(), build().entries());
    }

    #[test]
    fn lookup_never_goes_out_of_bounds() {
        let cache = GradientCache::builder([BLUE, RED].into(), 0.0, 3.3)
            .looped(true)
            .build();
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1e300, 1e300, 3.3] {
            cache.lookup(n);
        }
        let clamped = GradientCache::new([BLUE, RED].into(), 0.0, 3.3);
        assert_eq!(clamped.lookup(f64::INFINITY), RED);
        assert_eq!(clamped.lookup(f64::NEG_INFINITY), BLUE);
    }
}
