// cf-core/src/units.rs

use uom::si::f64::{MassDensity as UomMassDensity, Length as UomLength, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Time = UomTime;
pub type MassDensity = UomMassDensity;

/// Megaparsecs to a length quantity.
///
/// Built on [`constants::MPC_M`] rather than uom's own parsec unit so that
/// `mpc`/`mpc_value` round-trip exactly against the module constants.
#[inline]
pub fn mpc(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v * constants::MPC_M)
}

/// Length quantity in megaparsecs.
#[inline]
pub fn mpc_value(l: Length) -> f64 {
    l.value / constants::MPC_M
}

/// Gigayears (Julian) to a time quantity.
#[inline]
pub fn gyr(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v * constants::SEC_PER_GYR)
}

/// Time quantity in gigayears.
#[inline]
pub fn gyr_value(t: Time) -> f64 {
    t.value / constants::SEC_PER_GYR
}

#[inline]
pub fn kg_per_m3(v: f64) -> MassDensity {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    MassDensity::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn kg_per_m3_value(rho: MassDensity) -> f64 {
    rho.value
}

pub mod constants {
    /// Speed of light [km/s]
    pub const C_KM_PER_S: f64 = 299_792.458;

    /// Speed of light [m/s]
    pub const C_M_PER_S: f64 = 2.997_924_58e8;

    /// One megaparsec [m] (IAU 2015 parsec)
    pub const MPC_M: f64 = 3.085_677_581_491_367_3e22;

    /// One megaparsec [km]
    pub const KM_PER_MPC: f64 = 3.085_677_581_491_367_3e19;

    /// One gigayear [s] (Julian year)
    pub const SEC_PER_GYR: f64 = 3.155_76e16;

    /// Newtonian gravitational constant [m^3 kg^-1 s^-2] (CODATA 2018)
    pub const G_SI: f64 = 6.674_30e-11;

    /// Stefan-Boltzmann constant [W m^-2 K^-4] (CODATA 2018, exact)
    pub const SIGMA_SB_SI: f64 = 5.670_374_419e-8;

    /// Arcseconds in one radian
    pub const ARCSEC_PER_RADIAN: f64 = 206_264.806_247_096_36;

    /// Radians in one arcminute
    pub const RADIAN_PER_ARCMIN: f64 = core::f64::consts::PI / 10_800.0;

    /// Kiloparsecs in one megaparsec
    pub const KPC_PER_MPC: f64 = 1.0e3;
}
