use crate::error::ConfigError;
use crate::truth::Truth;

/// A triangular membership function over breakpoints `a <= b <= c`.
///
/// The curve is 0 outside `[a, c]`, rises linearly from `a` to the peak at
/// `b`, and falls linearly from `b` to `c`. Shoulder shapes are allowed:
/// when `a == b` (or `b == c`) the flat end evaluates to 1, matching
/// scikit-fuzzy's `trimf` so that e.g. `(6, 10, 10)` is fully true at 10.
///
/// Evaluation is analytic, valid at any real `x`; the universe grid is only
/// used later, for integration during defuzzification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        // The negated form also rejects NaN breakpoints.
        if !(a <= b && b <= c) {
            return Err(ConfigError::Breakpoints { a, b, c });
        }

        Ok(Triangular { a, b, c })
    }

    pub fn degree(&self, x: f64) -> Truth {
        let Triangular { a, b, c } = *self;

        if x < a || x > c {
            Truth::FALSE
        } else if x == b {
            Truth::TRUE
        } else if x < b {
            // a < x < b here, so a < b and the division is well-defined
            Truth::new((x - a) / (b - a))
        } else {
            Truth::new((c - x) / (c - b))
        }
    }
}

#[test]
fn test_degrees_at_breakpoints() {
    let mf = Triangular::new(2.0, 5.0, 8.0).unwrap();

    assert_eq!(mf.degree(2.0), Truth::FALSE);
    assert_eq!(mf.degree(5.0), Truth::TRUE);
    assert_eq!(mf.degree(8.0), Truth::FALSE);
}

#[test]
fn test_linear_interpolation() {
    let mf = Triangular::new(2.0, 5.0, 8.0).unwrap();

    assert_eq!(mf.degree(3.5).value(), 0.5);
    assert_eq!(mf.degree(6.5).value(), 0.5);
    assert_eq!(mf.degree(0.0), Truth::FALSE);
    assert_eq!(mf.degree(10.0), Truth::FALSE);
}

#[test]
fn test_shoulders() {
    let left = Triangular::new(0.0, 0.0, 4.0).unwrap();

    assert_eq!(left.degree(0.0), Truth::TRUE);
    assert_eq!(left.degree(2.0).value(), 0.5);
    assert_eq!(left.degree(4.0), Truth::FALSE);

    let right = Triangular::new(6.0, 10.0, 10.0).unwrap();

    assert_eq!(right.degree(6.0), Truth::FALSE);
    assert_eq!(right.degree(8.0).value(), 0.5);
    assert_eq!(right.degree(10.0), Truth::TRUE);
}

#[test]
fn test_rejects_decreasing_breakpoints() {
    assert_eq!(
        Triangular::new(5.0, 2.0, 8.0),
        Err(ConfigError::Breakpoints {
            a: 5.0,
            b: 2.0,
            c: 8.0
        })
    );
    assert!(Triangular::new(0.0, 4.0, 2.0).is_err());
    assert!(Triangular::new(f64::NAN, 0.0, 1.0).is_err());
}
