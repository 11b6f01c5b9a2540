//! Dormand-Prince 4(5) pair, the default method.
//!
//! J.R. Dormand and P.J. Prince, "A Family of Runge-Kutta Formulae",
//! Journal of Computational and Applied Mathematics, Vol 6, No 1, 1980.
//! See also Butcher, "Numerical Methods for Ordinary Differential
//! Equations" (2016), ch. 33.6, pp. 223-226.
//!
//! FSAL pair: the last row of A equals `b`, so the final stage of an
//! accepted step could seed the next step's first stage. The stepping loop
//! does not exploit this.

use super::Tableau;

pub(super) fn tableau() -> Tableau {
    let c = vec![0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

    let a = vec![
        vec![0.0; 7],
        vec![1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0, 0.0],
        vec![
            19372.0 / 6561.0,
            -25360.0 / 2187.0,
            64448.0 / 6561.0,
            -212.0 / 729.0,
            0.0,
            0.0,
            0.0,
        ],
        vec![
            9017.0 / 3168.0,
            -355.0 / 33.0,
            46732.0 / 5247.0,
            49.0 / 176.0,
            -5103.0 / 18656.0,
            0.0,
            0.0,
        ],
        vec![
            35.0 / 384.0,
            0.0,
            500.0 / 1113.0,
            125.0 / 192.0,
            -2187.0 / 6784.0,
            11.0 / 84.0,
            0.0,
        ],
    ];

    // 4th order weights
    let b = vec![
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
        0.0,
    ];

    // 5th order weights
    let bhat = vec![
        5179.0 / 57600.0,
        0.0,
        7571.0 / 16695.0,
        393.0 / 640.0,
        -92097.0 / 339200.0,
        187.0 / 2100.0,
        1.0 / 40.0,
    ];

    Tableau {
        stages: 7,
        c,
        a,
        b,
        bhat,
        order: 4,
    }
}
