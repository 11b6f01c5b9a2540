//! Vector norms used by the step-size and error machinery.

/// Which scalar magnitude to extract from a vector.
///
/// Every component that needs a single number out of a state or derivative
/// vector goes through [`norm`] with one of these kinds. The solver itself
/// uses [`NormKind::Euclidean`] throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormKind {
    /// Largest absolute component (infinity norm).
    MaxAbs,
    /// Smallest absolute component.
    MinAbs,
    /// Number of nonzero components.
    CountNonzero,
    /// Sum of absolute components (L1).
    SumAbs,
    /// Square root of the sum of squares (L2).
    #[default]
    Euclidean,
}

/// Evaluate a vector norm.
///
/// Empty input is not meaningful for any of the kinds; callers must pass at
/// least one component.
pub fn norm(x: &[f64], kind: NormKind) -> f64 {
    match kind {
        NormKind::MaxAbs => x.iter().map(|v| v.abs()).fold(f64::NEG_INFINITY, f64::max),
        NormKind::MinAbs => x.iter().map(|v| v.abs()).fold(f64::INFINITY, f64::min),
        NormKind::CountNonzero => x.iter().filter(|v| **v != 0.0).count() as f64,
        NormKind::SumAbs => x.iter().map(|v| v.abs()).sum(),
        NormKind::Euclidean => x.iter().map(|v| v * v).sum::<f64>().sqrt(),
    }
}

/// Scaled root-mean-square norm: `sqrt(mean((x_i / scale_i)^2))`.
///
/// `scale` must have the same length as `x`.
pub fn weighted_rms(x: &[f64], scale: &[f64]) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .zip(scale)
        .map(|(v, s)| (v / s) * (v / s))
        .sum();
    (sum / n).sqrt()
}
