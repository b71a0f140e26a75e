use crate::color::OkLab;

/// Gradient geometry.
///
/// Only `Linear` has a rendering and serialization contract. `Radial` and
/// `Conic` are structurally valid; serializers emit a defined fallback for them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

/// A single gradient stop.
///
/// `position` is expected in [0, 1] in typical usage but is not enforced: values
/// held during interactive editing may sit outside. Consumers clamp at the
/// point of use with [`clamp_unit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: String,
    pub position: f64,
    pub color: OkLab,
}

impl Stop {
    #[inline]
    pub fn new(id: impl Into<String>, position: f64, color: OkLab) -> Self {
        Self {
            id: id.into(),
            position,
            color,
        }
    }
}

/// Gradient value.
///
/// Semantics:
/// - stop ids are unique within a gradient
/// - `stops` order carries no meaning; consumers sort by position
/// - `angle` is in degrees (CSS convention, 0 = to top) and only meaningful for `Linear`
///
/// The engine never mutates a gradient; builders return new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    pub id: String,
    pub kind: GradientKind,
    pub angle: f64,
    pub stops: Vec<Stop>,
}

impl Gradient {
    pub fn new(id: impl Into<String>, kind: GradientKind, angle: f64, stops: Vec<Stop>) -> Self {
        Self {
            id: id.into(),
            kind,
            angle,
            stops,
        }
    }

    /// Empty linear gradient at `angle` degrees.
    pub fn linear(id: impl Into<String>, angle: f64) -> Self {
        Self::new(id, GradientKind::Linear, angle, Vec::new())
    }

    /// Returns a copy with one more stop appended.
    #[must_use]
    pub fn with_stop(mut self, id: impl Into<String>, position: f64, color: OkLab) -> Self {
        self.stops.push(Stop::new(id, position, color));
        self
    }

    /// Looks a stop up by id.
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Stops ordered by ascending position.
    ///
    /// The sort is stable: stops with equal positions keep their insertion order.
    /// `-0.0` ties with `0.0` and NaN sorts as `0.0`, matching [`clamp_unit`].
    /// Positions are not clamped here.
    pub fn sorted_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self.stops.iter().collect();
        stops.sort_by(|a, b| sort_key(a.position).total_cmp(&sort_key(b.position)));
        stops
    }

    /// Returns true when every stop has finite values and ids are unique.
    pub fn is_valid(&self) -> bool {
        self.angle.is_finite()
            && self
                .stops
                .iter()
                .all(|s| s.position.is_finite() && s.color.is_finite())
            && self
                .stops
                .iter()
                .enumerate()
                .all(|(i, s)| self.stops[..i].iter().all(|o| o.id != s.id))
    }
}

/// Ordering key for a raw position: NaN becomes `0.0`, `-0.0` becomes `+0.0`.
#[inline]
fn sort_key(position: f64) -> f64 {
    if position.is_nan() { 0.0 } else { position + 0.0 }
}

/// Clamps a stop position to [0, 1]. NaN and `-0.0` map to `0.0`.
#[inline]
pub fn clamp_unit(position: f64) -> f64 {
    if position.is_nan() || position <= 0.0 {
        0.0
    } else if position >= 1.0 {
        1.0
    } else {
        position
    }
}
