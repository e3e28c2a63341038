pub mod euler;
pub mod verlet;

use nalgebra as na;

/// Integration scheme, chosen once when a run is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationPolicy {
    /// `v += a dt; p += v dt` on every tick.
    Euler,
    /// One explicit Euler step to seed the position history, then position Verlet.
    #[default]
    BootstrappedLeapfrog,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No position history yet; the next step is the seeding Euler step.
    Bootstrap,
    /// `previous_position` is the position one timestep before the current one.
    Steady { previous_position: na::Vector3<f64> },
}

/// Advances position and velocity by one fixed timestep.
///
/// The engine owns the one-step position history required by the Verlet scheme, so a
/// fresh engine (or one that has been [`reset`](Self::reset)) always starts with the
/// bootstrap step. Under [`IntegrationPolicy::Euler`] the phase never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationEngine {
    policy: IntegrationPolicy,
    phase: Phase,
}

impl IntegrationEngine {
    pub fn new(policy: IntegrationPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Bootstrap,
        }
    }

    /// Leapfrog engine that already holds a position history.
    pub fn resume(previous_position: na::Vector3<f64>) -> Self {
        Self {
            policy: IntegrationPolicy::BootstrappedLeapfrog,
            phase: Phase::Steady { previous_position },
        }
    }

    pub fn policy(&self) -> IntegrationPolicy {
        self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn previous_position(&self) -> Option<na::Vector3<f64>> {
        match self.phase {
            Phase::Bootstrap => None,
            Phase::Steady { previous_position } => Some(previous_position),
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Bootstrap;
    }

    /// Returns the new `(position, velocity)` for the given acceleration.
    pub fn step(
        &mut self,
        position: &na::Vector3<f64>,
        velocity: &na::Vector3<f64>,
        acceleration: &na::Vector3<f64>,
        dt: f64,
    ) -> (na::Vector3<f64>, na::Vector3<f64>) {
        match self.policy {
            IntegrationPolicy::Euler => euler::step(position, velocity, acceleration, dt),
            IntegrationPolicy::BootstrappedLeapfrog => {
                let next = match self.phase {
                    Phase::Bootstrap => {
                        log::debug!(
                            "Bootstrap step: position {:?}, velocity {:?}, acceleration {:?}",
                            position.as_slice(),
                            velocity.as_slice(),
                            acceleration.as_slice()
                        );
                        verlet::bootstrap(position, velocity, acceleration, dt)
                    }
                    Phase::Steady { previous_position } => {
                        verlet::steady(position, &previous_position, acceleration, dt)
                    }
                };
                self.phase = Phase::Steady {
                    previous_position: *position,
                };
                next
            }
        }
    }
}
