//! Complex refractive indices of liquid water and ice.
//!
//! Covers microwave through ultraviolet using four published sources:
//!
//! 1. Water, microwave and far infrared (0 - 25 THz): Ellison, W. J. (2007),
//!    Permittivity of pure water, at standard atmospheric pressure, over the
//!    frequency range 0-25 THz and the temperature range 0-100 C.
//!    J. Phys. Chem. Ref. Data, 36. doi:10.1063/1.2360986
//! 2. Water, visible and infrared (0.2 to 200 um): Hale, G. M. and
//!    M. R. Querry (1973), Optical constants of water in the 200-nm to 200-um
//!    wavelength region. App. Opt., 12(3), 555-563. doi:10.1364/ao.12.000555
//! 3. Ice, visible and infrared: Warren, S. G., and R. E. Brandt (2008),
//!    Optical constants of ice from the ultraviolet to the microwave: A
//!    revised compilation. J. Geophys. Res., 113, D14220.
//!    doi:10.1029/2007JD009744
//! 4. Ice, microwave: Mätzler, C. (2006), Microwave dielectric properties of
//!    ice, in Thermal Microwave Radiation - Applications for Remote Sensing,
//!    Electromagn. Waves Ser., vol. 52, chap. 5, 455-462.
//!
//! The convention throughout is `m = n - ik` with `k >= 0` for absorptive
//! media; permittivity and index are related by `m = sqrt(epsilon)`.
//!
//! ```no_run
//! use tethys::optics::{RefractiveModel, Substance};
//!
//! let model = RefractiveModel::from_dir("./data").unwrap();
//! let m = model.index(3000.0, 10.0, Substance::Water);
//! println!("n = {:.4}, k = {:.4}", m.re, -m.im);
//! ```

pub mod config;
pub mod lut;
pub mod optics;
pub mod units;
