use super::{flight_computer::FlightComputer, GuidanceError};
use crate::{config::GuidanceConfig, info};

/// Drops the solid booster stage once its propellant is spent.
///
/// Separation is irreversible: after the first trigger every poll is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct StagingManager {
    epsilon: f64,
}

impl StagingManager {
    pub fn new(config: &GuidanceConfig) -> Self { Self { epsilon: config.propellant_epsilon } }

    /// Checks the sampled booster propellant and separates the stage if it is depleted.
    ///
    /// # Returns
    /// `true` if this call triggered the separation.
    pub async fn poll(
        &self,
        f_cont: &mut FlightComputer,
        propellant: f64,
    ) -> Result<bool, GuidanceError> {
        if f_cont.state().srbs_separated() || propellant >= self.epsilon {
            return Ok(false);
        }
        let separated = f_cont.separate_boosters().await?;
        if separated {
            info!("Boosters separated ({propellant:.3} units left)");
        }
        Ok(separated)
    }
}
