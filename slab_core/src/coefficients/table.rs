//! Built-in Method 2 moment coefficients.
//!
//! Rows are `(m, [Ca,neg, Ca,dl, Ca,ll, Cb,neg, Cb,dl, Cb,ll])` with
//! m = short span / long span. "a" is the short direction, "b" the long one.
//! Case 1 is sampled every 0.05; cases 2-9 every 0.10. Rows are listed in
//! ascending m.

pub(crate) type RawRow = (f64, [f64; 6]);

pub(crate) const CASE_1: &[RawRow] = &[
    (0.50, [0.091, 0.049, 0.068, 0.033, 0.008, 0.012]),
    (0.55, [0.084, 0.045, 0.062, 0.033, 0.009, 0.014]),
    (0.60, [0.077, 0.042, 0.057, 0.033, 0.010, 0.016]),
    (0.65, [0.070, 0.038, 0.052, 0.033, 0.011, 0.017]),
    (0.70, [0.063, 0.035, 0.047, 0.033, 0.012, 0.019]),
    (0.75, [0.056, 0.031, 0.043, 0.033, 0.013, 0.021]),
    (0.80, [0.050, 0.028, 0.039, 0.033, 0.014, 0.022]),
    (0.85, [0.045, 0.025, 0.035, 0.033, 0.015, 0.024]),
    (0.90, [0.040, 0.023, 0.032, 0.033, 0.016, 0.025]),
    (0.95, [0.036, 0.020, 0.030, 0.033, 0.017, 0.026]),
    (1.00, [0.033, 0.018, 0.027, 0.033, 0.018, 0.027]),
];

pub(crate) const CASE_2: &[RawRow] = &[
    (0.50, [0.097, 0.051, 0.069, 0.017, 0.007, 0.011]),
    (0.60, [0.083, 0.044, 0.059, 0.022, 0.009, 0.015]),
    (0.70, [0.070, 0.037, 0.050, 0.027, 0.012, 0.019]),
    (0.80, [0.058, 0.031, 0.042, 0.032, 0.015, 0.023]),
    (0.90, [0.048, 0.026, 0.036, 0.037, 0.018, 0.027]),
    (1.00, [0.041, 0.021, 0.031, 0.041, 0.021, 0.031]),
];

pub(crate) const CASE_3: &[RawRow] = &[
    (0.50, [0.029, 0.015, 0.022, 0.074, 0.035, 0.052]),
    (0.60, [0.033, 0.017, 0.024, 0.065, 0.031, 0.046]),
    (0.70, [0.036, 0.019, 0.027, 0.057, 0.028, 0.041]),
    (0.80, [0.039, 0.020, 0.029, 0.051, 0.025, 0.037]),
    (0.90, [0.040, 0.021, 0.030, 0.045, 0.023, 0.034]),
    (1.00, [0.041, 0.021, 0.031, 0.041, 0.021, 0.031]),
];

pub(crate) const CASE_4: &[RawRow] = &[
    (0.50, [0.103, 0.055, 0.074, 0.019, 0.008, 0.012]),
    (0.60, [0.090, 0.048, 0.065, 0.025, 0.011, 0.017]),
    (0.70, [0.078, 0.041, 0.056, 0.032, 0.015, 0.022]),
    (0.80, [0.067, 0.035, 0.048, 0.038, 0.018, 0.027]),
    (0.90, [0.057, 0.030, 0.041, 0.044, 0.022, 0.032]),
    (1.00, [0.049, 0.025, 0.036, 0.048, 0.025, 0.036]),
];

pub(crate) const CASE_5: &[RawRow] = &[
    (0.50, [0.036, 0.018, 0.025, 0.092, 0.045, 0.065]),
    (0.60, [0.040, 0.020, 0.028, 0.081, 0.040, 0.058]),
    (0.70, [0.044, 0.022, 0.031, 0.071, 0.035, 0.051]),
    (0.80, [0.046, 0.023, 0.033, 0.062, 0.031, 0.045]),
    (0.90, [0.048, 0.024, 0.035, 0.055, 0.028, 0.040]),
    (1.00, [0.048, 0.025, 0.036, 0.049, 0.025, 0.036]),
];

pub(crate) const CASE_6: &[RawRow] = &[
    (0.50, [0.099, 0.052, 0.072, 0.021, 0.009, 0.013]),
    (0.60, [0.086, 0.045, 0.063, 0.027, 0.012, 0.018]),
    (0.70, [0.074, 0.039, 0.054, 0.033, 0.016, 0.023]),
    (0.80, [0.063, 0.033, 0.047, 0.039, 0.019, 0.027]),
    (0.90, [0.055, 0.029, 0.041, 0.044, 0.022, 0.032]),
    (1.00, [0.048, 0.025, 0.036, 0.048, 0.025, 0.036]),
];

pub(crate) const CASE_7: &[RawRow] = &[
    (0.50, [0.074, 0.040, 0.055, 0.024, 0.010, 0.014]),
    (0.60, [0.066, 0.036, 0.049, 0.028, 0.012, 0.018]),
    (0.70, [0.058, 0.031, 0.043, 0.032, 0.015, 0.021]),
    (0.80, [0.051, 0.027, 0.038, 0.036, 0.017, 0.025]),
    (0.90, [0.045, 0.024, 0.034, 0.039, 0.020, 0.028]),
    (1.00, [0.041, 0.021, 0.031, 0.041, 0.021, 0.031]),
];

pub(crate) const CASE_8: &[RawRow] = &[
    (0.50, [0.053, 0.027, 0.039, 0.063, 0.031, 0.046]),
    (0.60, [0.050, 0.025, 0.037, 0.057, 0.028, 0.042]),
    (0.70, [0.047, 0.024, 0.035, 0.052, 0.026, 0.038]),
    (0.80, [0.045, 0.023, 0.033, 0.048, 0.024, 0.035]),
    (0.90, [0.043, 0.022, 0.032, 0.044, 0.023, 0.033]),
    (1.00, [0.041, 0.021, 0.031, 0.041, 0.021, 0.031]),
];

pub(crate) const CASE_9: &[RawRow] = &[
    (0.50, [0.106, 0.056, 0.076, 0.029, 0.013, 0.017]),
    (0.60, [0.093, 0.049, 0.067, 0.036, 0.017, 0.022]),
    (0.70, [0.082, 0.043, 0.059, 0.042, 0.020, 0.028]),
    (0.80, [0.072, 0.037, 0.052, 0.048, 0.024, 0.033]),
    (0.90, [0.064, 0.033, 0.046, 0.053, 0.027, 0.037]),
    (1.00, [0.057, 0.029, 0.041, 0.057, 0.029, 0.041]),
];
