use crate::error::{Error, Result};
use crate::params::Params;
use crate::particle::Particle;
use crate::planet_force::{planet_force, ParticleScope, PlanetEphemeris};

/// Host state handed to a force for one evaluation.
pub struct ForceContext<'a> {
    pub t: f64,
    pub g: f64,
    pub particles: &'a mut [Particle],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceKind {
    PlanetForce(ParticleScope),
}

impl ForceKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "planet_force" => Some(ForceKind::PlanetForce(ParticleScope::First)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Force {
    pub name: String,
    pub params: Params,
    pub kind: ForceKind,
}

impl Force {
    /// Creates the force registered under `name` with an empty parameter set.
    pub fn load(name: &str) -> Result<Self> {
        let kind = ForceKind::from_name(name).ok_or_else(|| Error::UnknownForce {
            name: name.to_owned(),
        })?;

        Ok(Force {
            name: name.to_owned(),
            params: Params::new(),
            kind,
        })
    }

    /// Adds this force's contribution to the accumulators in `ctx`.
    ///
    /// Parameters are read on every call; a missing one aborts before any
    /// accumulator is modified.
    pub fn apply(&self, ctx: &mut ForceContext<'_>) -> Result<()> {
        log::trace!("applying force '{}' at t = {}", self.name, ctx.t);

        match self.kind {
            ForceKind::PlanetForce(scope) => {
                let ephemeris = PlanetEphemeris::from_params(&self.params)?;
                planet_force(ctx, &ephemeris, scope);
            }
        }

        Ok(())
    }
}
