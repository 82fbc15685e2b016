//! Calibrated coefficients of the microwave dielectric models.
//!
//! These are published regression constants. They have no meaning
//! individually and must not be "rounded" or rearranged; each set is kept
//! together under the model it belongs to so its provenance stays traceable.

/// Wavelengths below this (um) use the tabulated vis-ir optical constants;
/// at or above it the microwave permittivity models apply. There is no
/// blending across the threshold, so a small discontinuity at exactly
/// 100 um is expected.
pub const VISIR_MAX_WAVELENGTH_UM: f64 = 100.0;

/// Ellison (2007) pure-water permittivity fit, Table 2.
/// Valid 0-25 THz, 0-100 C.
pub mod water {
    /// Static permittivity cubic in t (C): ES0 + ES1*t + ES2*t^2 + ES3*t^3.
    pub const ES0: f64 = 87.9144;
    pub const ES1: f64 = -0.404399;
    pub const ES2: f64 = 9.58726e-4;
    pub const ES3: f64 = -1.32802e-6;

    /// Debye relaxation amplitudes.
    pub const A1: f64 = 79.23882;
    pub const A2: f64 = 3.815866;
    pub const A3: f64 = 1.634967;

    /// Amplitude decay rates (1/C).
    pub const B1: f64 = 0.004300598;
    pub const B2: f64 = 0.01117295;
    pub const B3: f64 = 0.006841548;

    /// Relaxation-time prefactors (s).
    pub const C1: f64 = 1.382264e-13;
    pub const C2: f64 = 3.510354e-16;
    pub const C3: f64 = 6.30035e-15;

    /// Relaxation-time activation temperatures (C).
    pub const D1: f64 = 652.7648;
    pub const D2: f64 = 1249.533;
    pub const D3: f64 = 405.5169;

    /// Offset added to t in the relaxation-time exponentials.
    pub const TC: f64 = 133.1383;

    /// Resonance-term polynomials p0..p19: amplitudes (p0-p2, p11-p13),
    /// center frequencies in Hz (p3-p6, p14-p16) and widths in s
    /// (p7-p10, p17-p19).
    pub const P0: f64 = 0.8379692;
    pub const P1: f64 = -0.006118594;
    pub const P2: f64 = -0.000012936798;
    pub const P3: f64 = 4235901000000.0;
    pub const P4: f64 = -14260880000.0;
    pub const P5: f64 = 273815700.0;
    pub const P6: f64 = -1246943.0;
    pub const P7: f64 = 9.618642e-14;
    pub const P8: f64 = 1.795786e-16;
    pub const P9: f64 = -9.310017e-18;
    pub const P10: f64 = 1.655473e-19;
    pub const P11: f64 = 0.6165532;
    pub const P12: f64 = 0.007238532;
    pub const P13: f64 = -0.00009523366;
    pub const P14: f64 = 15983170000000.0;
    pub const P15: f64 = -74413570000.0;
    pub const P16: f64 = 497448000.0;
    pub const P17: f64 = 2.882476e-14;
    pub const P18: f64 = -3.142118e-16;
    pub const P19: f64 = 3.528051e-18;
}

/// Mätzler (2006) ice permittivity fit, chap. 5.
pub mod ice {
    /// Real part above 243 K: ER_WARM_OFFSET + ER_WARM_SLOPE * (T_K - 273).
    pub const ER_WARM_OFFSET: f64 = 3.1884;
    pub const ER_WARM_SLOPE: f64 = 9.1e-4;

    /// Real part at or below 243 K: ER_COLD_OFFSET + ER_COLD_SLOPE * (T_K - 243).
    pub const ER_COLD_OFFSET: f64 = 3.1611;
    pub const ER_COLD_SLOPE: f64 = 4.3e-4;

    /// Branch point of the real-part fit (K). The boundary itself belongs
    /// to the cold branch.
    pub const ER_BRANCH_K: f64 = 243.0;

    /// Ionic-loss term alpha = (ALPHA0 + ALPHA1 * theta) * exp(ALPHA_EXP * theta)
    /// with theta = 300 / T_K - 1.
    pub const ALPHA0: f64 = 0.00504;
    pub const ALPHA1: f64 = 0.0062;
    pub const ALPHA_EXP: f64 = -22.1;

    /// Dipolar-loss Debye term betam: B1 / T_K * exp(B / T_K)
    /// / (exp(B / T_K) - 1)^2 + B2 * f_GHz^2.
    pub const B1: f64 = 0.0207;
    pub const B2: f64 = 1.16e-11;
    pub const B: f64 = 335.0;

    /// Exponential correction dbeta = exp(DBETA_OFFSET + DBETA_SLOPE * (T_K - 273.16)).
    pub const DBETA_OFFSET: f64 = -9.963;
    pub const DBETA_SLOPE: f64 = 0.0372;
}
