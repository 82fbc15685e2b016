use std::env;

use tethys::config::Config;
use tethys::optics::{RefractiveModel, Substance};
use tethys::units::{celsius_from_kelvin, wavelength_um_from_ghz};

const USAGE: &str =
    "Usage: tethys [-fghz F | -wl lambda(um)] [-tc Tc | -tk TK] [-water | -ice] [--config PATH]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut config_path: Option<String> = None;
    let mut wavelength_um: Option<f64> = None;
    let mut temperature_c: Option<f64> = None;
    let mut substance = Substance::Water;

    // When both -fghz and -wl (or -tc and -tk) are given, the one given
    // last wins.
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-fghz" => {
                let fghz: f64 = next_value(&mut args, "-fghz")?.parse()?;
                wavelength_um = Some(wavelength_um_from_ghz(fghz));
            }
            "-wl" => {
                wavelength_um = Some(next_value(&mut args, "-wl")?.parse()?);
            }
            "-tc" => {
                temperature_c = Some(next_value(&mut args, "-tc")?.parse()?);
            }
            "-tk" => {
                let tk: f64 = next_value(&mut args, "-tk")?.parse()?;
                temperature_c = Some(celsius_from_kelvin(tk));
            }
            "-water" => substance = Substance::Water,
            "-ice" => substance = Substance::Ice,
            "--config" => config_path = Some(next_value(&mut args, "--config")?),
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            other => return Err(format!("unknown argument '{other}'\n{USAGE}").into()),
        }
    }

    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let wavelength_um = wavelength_um.unwrap_or(config.wavelength_um());
    let temperature_c = temperature_c.unwrap_or(config.temperature_c());

    if wavelength_um <= 0.0 {
        return Err(format!("wavelength must be positive, got {wavelength_um} um").into());
    }
    if temperature_c < -273.16 {
        return Err(format!("temperature below absolute zero: {temperature_c} C").into());
    }

    log::info!("computing m for {substance} at {wavelength_um} um, {temperature_c} C");

    let model = RefractiveModel::from_config(&config)?;
    let m = model.index(wavelength_um, temperature_c, substance);

    eprintln!(
        "Refractive index for {} at t={:.2} C and wl={:.2} um:",
        substance, temperature_c, wavelength_um
    );
    if m.im.abs() > 0.1 {
        println!("{:.4},{:.4}", m.re, m.im);
    } else {
        println!("{:.4},{:.4e}", m.re, m.im);
    }

    Ok(())
}

fn next_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next()
        .ok_or_else(|| format!("{flag} requires a value\n{USAGE}").into())
}
