/// A fuzzy truth value, always within `[0, 1]`.
///
/// Construction clamps, so arithmetic on degrees can never escape the unit
/// interval. Combinators follow the Zadeh algebra: `and` is minimum, `or` is
/// maximum. This is the single combinator policy of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Truth(f64);

impl Truth {
    pub const FALSE: Truth = Truth(0.0);
    pub const TRUE: Truth = Truth(1.0);

    pub fn new(value: f64) -> Self {
        Truth(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Zadeh AND: minimum of the two degrees.
    pub fn and(self, other: Truth) -> Truth {
        Truth(self.0.min(other.0))
    }

    /// Zadeh OR: maximum of the two degrees.
    pub fn or(self, other: Truth) -> Truth {
        Truth(self.0.max(other.0))
    }
}

impl From<f64> for Truth {
    fn from(value: f64) -> Self {
        Truth::new(value)
    }
}

#[test]
fn test_zadeh_algebra() {
    let p = Truth::new(0.3);
    let q = Truth::new(0.7);

    assert_eq!(p.and(q).value(), 0.3);
    assert_eq!(p.or(q).value(), 0.7);
    assert_eq!(q.and(p).value(), 0.3);
    assert_eq!(q.or(p).value(), 0.7);

    // Idempotence
    assert_eq!(p.and(p), p);
    assert_eq!(p.or(p), p);

    // Identity elements
    assert_eq!(p.and(Truth::TRUE), p);
    assert_eq!(p.or(Truth::FALSE), p);
}

#[test]
fn test_construction_clamps() {
    assert_eq!(Truth::new(-0.5).value(), 0.0);
    assert_eq!(Truth::new(1.5).value(), 1.0);
    assert_eq!(Truth::new(0.25).value(), 0.25);
}
