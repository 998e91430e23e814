use rayon::iter::ParallelIterator;

use crate::error::Result;
use crate::extras::Extras;
use crate::particle::{Particle, Particles};

#[allow(non_snake_case)]
pub struct Simulation {
    pub t: f64,
    pub G: f64,

    pub particles: Particles,

    pub extras: Extras,
}

impl Simulation {
    pub fn init() -> Self {
        Simulation {
            t: 0.0,
            G: 1.0,

            particles: Particles::default(),

            extras: Extras::new(),
        }
    }

    /// Adds a particle. Particles with zero mass are stored as test
    /// particles after all massive ones. Particles with a non-finite
    /// position or mass are reported and ignored.
    pub fn add(&mut self, p: Particle) {
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            log::error!(
                "Adding particle with non-finite position ({}, {}, {}). Particle ignored.",
                p.x,
                p.y,
                p.z
            );
            return;
        }

        if !p.m.is_finite() {
            log::error!("Adding particle with non-finite mass {}. Particle ignored.", p.m);
            return;
        }

        if p.m < 0.0 {
            log::warn!("Adding particle with negative mass {}. Treated as massive.", p.m);
        }

        if p.m == 0.0 {
            self.particles.push_test(p);
        } else {
            self.particles.push_active(p);
        }
    }

    pub fn zero_accelerations(&mut self) {
        self.particles
            .par_iter_mut()
            .for_each(|p| p.reset_acceleration());
    }

    /// Recomputes accelerations from scratch using the attached forces.
    ///
    /// Forces act on the test particles only, so index 0 of the force's
    /// particle set is the first massless particle added. Massive particles
    /// are zeroed and receive nothing. Positions, velocities and time are
    /// left unchanged.
    pub fn update_acceleration(&mut self) -> Result<()> {
        self.zero_accelerations();
        self.extras
            .apply_forces(self.t, self.G, self.particles.test_mut())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::init()
    }
}
