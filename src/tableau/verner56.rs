//! Verner 5(6) pair.
//!
//! Verner's "robust" 6(5)9b pair. Reference:
//! <https://www.sfu.ca/~jverner/RKV65.IIIXb.Robust.00010102836.081204.RATOnWeb>

use super::Tableau;

pub(super) fn tableau() -> Tableau {
    let c = vec![
        0.0,
        9.0 / 50.0,
        1.0 / 6.0,
        1.0 / 4.0,
        53.0 / 100.0,
        3.0 / 5.0,
        4.0 / 5.0,
        1.0,
        1.0,
    ];

    let a = vec![
        vec![0.0; 9],
        vec![9.0 / 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![29.0 / 324.0, 25.0 / 324.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![1.0 / 16.0, 0.0, 3.0 / 16.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![
            79129.0 / 250000.0,
            0.0,
            -261237.0 / 250000.0,
            19663.0 / 15625.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        vec![
            1336883.0 / 4909125.0,
            0.0,
            -25476.0 / 30875.0,
            194159.0 / 185250.0,
            8225.0 / 78546.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        vec![
            -2459386.0 / 14727375.0,
            0.0,
            19504.0 / 30875.0,
            2377474.0 / 13615875.0,
            -6157250.0 / 5773131.0,
            902.0 / 735.0,
            0.0,
            0.0,
            0.0,
        ],
        vec![
            2699.0 / 7410.0,
            0.0,
            -252.0 / 1235.0,
            -1393253.0 / 3993990.0,
            236875.0 / 72618.0,
            -135.0 / 49.0,
            15.0 / 22.0,
            0.0,
            0.0,
        ],
        vec![
            11.0 / 144.0,
            0.0,
            0.0,
            256.0 / 693.0,
            0.0,
            125.0 / 504.0,
            125.0 / 528.0,
            5.0 / 72.0,
            0.0,
        ],
    ];

    // 5th order weights
    let b = vec![
        11.0 / 144.0,
        0.0,
        0.0,
        256.0 / 693.0,
        0.0,
        125.0 / 504.0,
        125.0 / 528.0,
        5.0 / 72.0,
        0.0,
    ];

    // 6th order weights
    let bhat = vec![
        28.0 / 477.0,
        0.0,
        0.0,
        212.0 / 441.0,
        -312500.0 / 366177.0,
        2125.0 / 1764.0,
        0.0,
        -2105.0 / 35532.0,
        2995.0 / 17766.0,
    ];

    Tableau {
        stages: 9,
        c,
        a,
        b,
        bhat,
        order: 5,
    }
}
