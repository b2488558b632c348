//! Defuzzification: reducing an aggregated fuzzy set to one crisp number.

/// Discrete centroid of area over a universe grid:
/// `sum(x_i * mu_i) / sum(mu_i)`.
///
/// Returns `None` when the membership sums to zero — the centroid of an
/// empty set is undefined, and the decision of what to do about it belongs
/// to the caller.
pub fn centroid(universe: &[f64], membership: &[f64]) -> Option<f64> {
    debug_assert_eq!(universe.len(), membership.len());

    let den: f64 = membership.iter().sum();

    if den == 0.0 {
        return None;
    }

    let num: f64 = universe
        .iter()
        .zip(membership.iter())
        .map(|(x, mu)| x * mu)
        .sum();

    Some(num / den)
}

#[test]
fn test_centroid_of_symmetric_set() {
    let universe = [0., 1., 2., 3.];
    let membership = [0., 1., 1., 0.];

    assert_eq!(centroid(&universe, &membership), Some(1.5));
}

#[test]
fn test_centroid_weights_by_membership() {
    let universe = [0., 1., 2.];
    let membership = [0., 0.25, 0.75];

    // (1 * 0.25 + 2 * 0.75) / 1.0
    assert_eq!(centroid(&universe, &membership), Some(1.75));
}

#[test]
fn test_empty_set_has_no_centroid() {
    let universe = [0., 1., 2., 3.];
    let membership = [0., 0., 0., 0.];

    assert_eq!(centroid(&universe, &membership), None);
}
