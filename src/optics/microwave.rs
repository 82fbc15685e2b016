//! Microwave permittivity models for liquid water and ice.
//!
//! Both functions are pure: (wavelength, temperature) in, complex
//! permittivity `er - i*ei` out, with `ei >= 0` for absorptive media. The
//! conversion to a refractive index (principal square root) happens in the
//! dispatcher, not here.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::optics::constants::{ice, water};
use crate::units::{SPEED_OF_LIGHT, kelvin_from_celsius};

/// Ellison (2007) permittivity of pure water, 0-25 THz, 0-100 C.
///
/// Three Debye relaxations plus two resonance terms. The real part is the
/// static permittivity minus the three relaxation-dispersion corrections
/// minus the two resonance corrections; the imaginary part is the three
/// relaxation-absorption terms plus the two resonance-absorption terms.
/// Each is one continuous expression per eqs. (10)-(11) of the reference.
pub fn water_permittivity(wl_um: f64, temp_c: f64) -> Complex64 {
    let t = temp_c;
    // frequency in Hz
    let v = SPEED_OF_LIGHT / wl_um * 1e6;

    let es = water::ES0 + water::ES1 * t + water::ES2 * t * t + water::ES3 * t * t * t;

    // Debye amplitudes and relaxation times
    let dt1 = water::A1 * (-water::B1 * t).exp();
    let dt2 = water::A2 * (-water::B2 * t).exp();
    let dt3 = water::A3 * (-water::B3 * t).exp();
    let tt1 = water::C1 * (water::D1 / (t + water::TC)).exp();
    let tt2 = water::C2 * (water::D2 / (t + water::TC)).exp();
    let tt3 = water::C3 * (water::D3 / (t + water::TC)).exp();

    // resonance amplitudes, center frequencies and widths
    let dt4 = water::P0 + water::P1 * t + water::P2 * t * t;
    let ft0 = water::P3 + water::P4 * t + water::P5 * t * t + water::P6 * t * t * t;
    let tt4 = water::P7 + water::P8 * t + water::P9 * t * t + water::P10 * t * t * t;
    let dt5 = water::P11 + water::P12 * t + water::P13 * t * t;
    let ft1 = water::P14 + water::P15 * t + water::P16 * t * t;
    let tt5 = water::P17 + water::P18 * t + water::P19 * t * t;

    let w = 2.0 * PI * v;

    let er = es
        - w.powi(2)
            * (tt1 * tt1 * dt1 / (1.0 + (w * tt1).powi(2))
                + tt2 * tt2 * dt2 / (1.0 + (w * tt2).powi(2))
                + tt3 * tt3 * dt3 / (1.0 + (w * tt3).powi(2)))
        - (2.0 * PI * tt4).powi(2) * dt4 / 2.0
            * (v * (ft0 + v) / (1.0 + (2.0 * PI * tt4 * (ft0 + v)).powi(2))
                - v * (ft0 - v) / (1.0 + (2.0 * PI * tt4 * (ft0 - v)).powi(2)))
        - (2.0 * PI * tt5).powi(2) * dt5 / 2.0
            * (v * (ft1 + v) / (1.0 + (2.0 * PI * tt5 * (ft1 + v)).powi(2))
                - v * (ft1 - v) / (1.0 + (2.0 * PI * tt5 * (ft1 - v)).powi(2)));

    let ei = w
        * (tt1 * dt1 / (1.0 + (w * tt1).powi(2))
            + tt2 * dt2 / (1.0 + (w * tt2).powi(2))
            + tt3 * dt3 / (1.0 + (w * tt3).powi(2)))
        + PI * v * tt4 * dt4
            * (1.0 / (1.0 + (2.0 * PI * tt4 * (ft0 + v)).powi(2))
                + 1.0 / (1.0 + (2.0 * PI * tt4 * (ft0 - v)).powi(2)))
        + PI * v * tt5 * dt5
            * (1.0 / (1.0 + (2.0 * PI * tt5 * (ft1 + v)).powi(2))
                + 1.0 / (1.0 + (2.0 * PI * tt5 * (ft1 - v)).powi(2)));

    Complex64::new(er, -ei)
}

/// Mätzler (2006) permittivity of ice in the microwave.
///
/// The real part is piecewise linear in T_K with the 243 K boundary on the
/// cold branch; the imaginary part is `alpha / f + beta * f` with an ionic
/// term `alpha` and a dipolar term `beta = betam + dbeta`.
pub fn ice_permittivity(wl_um: f64, temp_c: f64) -> Complex64 {
    let fghz = SPEED_OF_LIGHT / wl_um * 1e-3;
    let tk = kelvin_from_celsius(temp_c);

    let er = if tk > ice::ER_BRANCH_K {
        ice::ER_WARM_OFFSET + ice::ER_WARM_SLOPE * (tk - 273.0)
    } else {
        ice::ER_COLD_OFFSET + ice::ER_COLD_SLOPE * (tk - ice::ER_BRANCH_K)
    };

    let theta = 300.0 / tk - 1.0;
    let alpha = (ice::ALPHA0 + ice::ALPHA1 * theta) * (ice::ALPHA_EXP * theta).exp();
    let dbeta = (ice::DBETA_OFFSET + ice::DBETA_SLOPE * (tk - 273.16)).exp();
    let ebt = (ice::B / tk).exp();
    let betam = ice::B1 / tk * ebt / (ebt - 1.0).powi(2) + ice::B2 * fghz * fghz;
    let beta = betam + dbeta;

    let ei = alpha / fghz + beta * fghz;

    Complex64::new(er, -ei)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: f64, want: f64, tol: f64, what: &str) {
        assert!(
            (got - want).abs() <= tol * want.abs().max(1.0),
            "{what}: got {got}, want {want}"
        );
    }

    #[test]
    fn test_water_permittivity_reference_values() {
        // values computed from the Ellison (2007) fit as written here
        let e = water_permittivity(3000.0, 10.0);
        assert_close(e.re, 6.923291195, 1e-8, "er at 100 GHz, 10 C");
        assert_close(-e.im, 10.753192749, 1e-8, "ei at 100 GHz, 10 C");

        let e = water_permittivity(10000.0, 0.0);
        assert_close(e.re, 13.172958950, 1e-8, "er at 30 GHz, 0 C");
        assert_close(-e.im, 22.795041205, 1e-8, "ei at 30 GHz, 0 C");

        let e = water_permittivity(300.0, 20.0);
        assert_close(e.re, 4.198309835, 1e-8, "er at 1 THz, 20 C");
        assert_close(-e.im, 2.264019609, 1e-8, "ei at 1 THz, 20 C");
    }

    #[test]
    fn test_water_static_limit_near_es() {
        // far below the first relaxation the permittivity approaches the
        // static value, 83.9 at 10 C
        let e = water_permittivity(3.0e9, 10.0);
        let es = 87.9144 - 0.404399 * 10.0 + 9.58726e-4 * 100.0 - 1.32802e-6 * 1000.0;
        assert!((e.re - es).abs() < 0.1, "er = {}, es = {}", e.re, es);
    }

    #[test]
    fn test_ice_permittivity_reference_values() {
        let e = ice_permittivity(3000.0, -10.0);
        assert_close(e.re, 3.179445600, 1e-9, "er at 100 GHz, -10 C");
        assert_close(-e.im, 0.007505095, 1e-7, "ei at 100 GHz, -10 C");

        let e = ice_permittivity(500.0, -1.0);
        assert_close(e.re, 3.187635600, 1e-9, "er at 600 GHz, -1 C");
        assert_close(-e.im, 0.056287490, 1e-7, "ei at 600 GHz, -1 C");
    }

    #[test]
    fn test_ice_branch_boundary_inclusive_at_243_k() {
        // T_K = 243 exactly takes the cold branch: er = 3.1611
        let t_c = 243.0 - 273.16;
        let e = ice_permittivity(3000.0, t_c);
        assert_eq!(e.re, 3.1611);

        // just above the boundary switches to the warm branch
        let e = ice_permittivity(3000.0, t_c + 0.01);
        assert!(e.re > 3.1611);
        assert!((e.re - (3.1884 + 9.1e-4 * (243.01 - 273.0))).abs() < 1e-9);
    }

    #[test]
    fn test_absorption_is_nonnegative() {
        for &wl in &[100.0, 300.0, 1000.0, 3000.0, 3.0e4, 3.0e5] {
            for &t in &[0.0, 10.0, 30.0] {
                let e = water_permittivity(wl, t);
                assert!(-e.im >= 0.0, "water ei < 0 at wl={wl}, t={t}");
            }
            for &t in &[-40.0, -20.0, -1.0] {
                let e = ice_permittivity(wl, t);
                assert!(-e.im >= 0.0, "ice ei < 0 at wl={wl}, t={t}");
            }
        }
    }
}
