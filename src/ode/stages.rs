//! Stage evaluation and solution advance for one step attempt.

#![allow(clippy::needless_range_loop)]

use crate::tableau::Tableau;

/// Evaluate the ordered stage derivatives `k_0 .. k_{s-1}`.
///
/// `k[0] = f(t, y)`; each later stage feeds on every earlier one through the
/// strictly lower-triangular coefficient matrix, so the sequence is
/// inherently serial. The accumulation order is fixed, which makes the
/// result bit-reproducible for identical inputs.
pub fn stage_derivatives<F>(
    f: &F,
    t: f64,
    y: &[f64],
    params: &[f64],
    h: f64,
    tableau: &Tableau,
) -> Vec<Vec<f64>>
where
    F: Fn(f64, &[f64], &[f64]) -> Vec<f64>,
{
    let n = y.len();
    let s = tableau.stages;

    let mut k: Vec<Vec<f64>> = Vec::with_capacity(s);
    k.push(f(t, y, params));

    for i in 1..s {
        let mut acc = vec![0.0; n];
        for j in 0..i {
            let w = tableau.a[i][j] * h;
            for m in 0..n {
                acc[m] += w * k[j][m];
            }
        }
        let mut yi = Vec::with_capacity(n);
        for m in 0..n {
            yi.push(y[m] + acc[m]);
        }
        k.push(f(t + tableau.c[i] * h, &yi, params));
    }

    k
}

/// Combine a stage set with one weight vector:
/// `y_next = y + h * sum_i w_i * k_i`, `t_next = t + h`.
///
/// Called once with `b` and once with `bhat` against the same stage set to
/// produce the two embedded candidates.
pub fn advance(
    t: f64,
    y: &[f64],
    h: f64,
    stages: &[Vec<f64>],
    weights: &[f64],
) -> (f64, Vec<f64>) {
    let n = y.len();

    let mut tmp = vec![0.0; n];
    for (w, k) in weights.iter().zip(stages) {
        for m in 0..n {
            tmp[m] += w * k[m];
        }
    }

    let mut y_next = Vec::with_capacity(n);
    for m in 0..n {
        y_next.push(y[m] + h * tmp[m]);
    }

    (t + h, y_next)
}
