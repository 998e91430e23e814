//! Force due to a planet for massless particles.
//!
//! The planet moves on a circular orbit in the reference plane with a fixed
//! mean motion. The star is displaced from the origin by the planet's reflex
//! motion so that the barycenter stays at the origin. A particle feels the
//! point-mass attraction of both bodies. There is no softening; a particle
//! sitting on either body receives a non-finite acceleration.
//!
//! | Parameter    | Required | Description                          |
//! |--------------|----------|--------------------------------------|
//! | `pf_inc`     | Yes      | Inclination of the planet (unused)   |
//! | `pf_ap`      | Yes      | Semi-major axis of the planet        |
//! | `pf_as`      | Yes      | Semi-major axis of the star (unused) |
//! | `pf_n`       | Yes      | Mean motion of the planet            |
//! | `pf_m0p`     | Yes      | Initial planet mean anomaly          |
//! | `pf_mplanet` | Yes      | Planet mass                          |
//! | `pf_mstar`   | Yes      | Star mass                            |

use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

use crate::error::Result;
use crate::force::ForceContext;
use crate::params::Params;
use crate::Vec3;

pub const PF_INC: &str = "pf_inc";
pub const PF_AP: &str = "pf_ap";
pub const PF_AS: &str = "pf_as";
pub const PF_N: &str = "pf_n";
pub const PF_M0P: &str = "pf_m0p";
pub const PF_MPLANET: &str = "pf_mplanet";
pub const PF_MSTAR: &str = "pf_mstar";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetEphemeris {
    pub inclination: f64,
    pub planet_semi_major_axis: f64,
    pub star_semi_major_axis: f64,
    pub mean_motion: f64,
    pub initial_mean_anomaly: f64,
    pub planet_mass: f64,
    pub star_mass: f64,
}

impl PlanetEphemeris {
    /// Reads all seven `pf_*` parameters. The first missing key is reported.
    pub fn from_params(params: &Params) -> Result<Self> {
        Ok(PlanetEphemeris {
            inclination: params.get_f64(PF_INC)?,
            planet_semi_major_axis: params.get_f64(PF_AP)?,
            star_semi_major_axis: params.get_f64(PF_AS)?,
            mean_motion: params.get_f64(PF_N)?,
            initial_mean_anomaly: params.get_f64(PF_M0P)?,
            planet_mass: params.get_f64(PF_MPLANET)?,
            star_mass: params.get_f64(PF_MSTAR)?,
        })
    }

    pub fn write_params(&self, params: &mut Params) {
        params.set_f64(PF_INC, self.inclination);
        params.set_f64(PF_AP, self.planet_semi_major_axis);
        params.set_f64(PF_AS, self.star_semi_major_axis);
        params.set_f64(PF_N, self.mean_motion);
        params.set_f64(PF_M0P, self.initial_mean_anomaly);
        params.set_f64(PF_MPLANET, self.planet_mass);
        params.set_f64(PF_MSTAR, self.star_mass);
    }

    #[inline]
    pub fn mean_anomaly(&self, t: f64) -> f64 {
        self.mean_motion * t + self.initial_mean_anomaly
    }

    /// Planet position at time `t`. The orbit always lies in the x-y plane.
    pub fn planet_position(&self, t: f64) -> Vec3 {
        let (sin_m, cos_m) = self.mean_anomaly(t).sin_cos();
        let a = self.planet_semi_major_axis;
        Vec3::new(a * cos_m, a * sin_m, 0.0)
    }

    /// Star position at time `t`, opposite the planet about the barycenter.
    pub fn star_position(&self, t: f64) -> Vec3 {
        let mass_ratio = -self.planet_mass / self.star_mass;
        let planet = self.planet_position(t);
        Vec3::new(mass_ratio * planet.x, mass_ratio * planet.y, 0.0)
    }

    /// Combined acceleration from planet and star on a particle at `position`.
    pub fn acceleration(&self, t: f64, g: f64, position: Vec3) -> Vec3 {
        let gm_p = g * self.planet_mass;
        let gm_s = g * self.star_mass;

        let dp = position - self.planet_position(t);
        let ds = position - self.star_position(t);

        let d3p = dp.norm().powi(3);
        let d3s = ds.norm().powi(3);

        (-gm_p / d3p) * dp + (-gm_s / d3s) * ds
    }
}

/// Which particles of the supplied slice receive the force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticleScope {
    /// Only the particle at index 0.
    #[default]
    First,
    /// Every particle in the slice.
    All,
}

/// Adds the planet and star attraction to the particle accumulators in `ctx`.
///
/// With `ParticleScope::First` only `ctx.particles[0]` is touched, whatever
/// the length of the slice. An empty slice is left alone.
pub fn planet_force(
    ctx: &mut ForceContext<'_>,
    ephemeris: &PlanetEphemeris,
    scope: ParticleScope,
) {
    let t = ctx.t;
    let g = ctx.g;

    match scope {
        ParticleScope::First => {
            if let Some(p) = ctx.particles.first_mut() {
                let a = ephemeris.acceleration(t, g, p.position());
                p.add_acceleration(a);
            }
        }
        ParticleScope::All => {
            ctx.particles.par_iter_mut().for_each(|p| {
                let a = ephemeris.acceleration(t, g, p.position());
                p.add_acceleration(a);
            });
        }
    }
}
