//! Additional forces for the rendezvous N-body code.
//!
//! A force is loaded by name into a simulation's [`Extras`](extras::Extras),
//! configured through its named parameters, and then contributes to the
//! particle accelerations on every force evaluation.
//!
//! ```
//! use rendezvousx::particle::Particle;
//! use rendezvousx::rendezvous::Simulation;
//!
//! let mut sim = Simulation::init();
//! sim.add(Particle::at(10.0, 0.0, 0.0));
//!
//! let pf = sim.extras.load_force("planet_force").unwrap();
//! pf.params.set_f64("pf_inc", 0.0);
//! pf.params.set_f64("pf_ap", 5.0);
//! pf.params.set_f64("pf_as", 0.005);
//! pf.params.set_f64("pf_n", 0.1);
//! pf.params.set_f64("pf_m0p", 0.0);
//! pf.params.set_f64("pf_mplanet", 1e-3);
//! pf.params.set_f64("pf_mstar", 1.0);
//!
//! sim.update_acceleration().unwrap();
//! assert!(sim.particles[0].ax < 0.0);
//! ```

pub mod error;
pub mod extras;
pub mod force;
pub mod params;
pub mod particle;
pub mod planet_force;
pub mod rendezvous;

#[cfg(test)]
mod rendezvous_test;

pub use error::{Error, Result};

pub type Vec3 = nalgebra::Vector3<f64>;
