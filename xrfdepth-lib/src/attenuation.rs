use crate::db::AtomicDb;
use crate::error::{Result, XrfError};
use crate::interp::interp_loglog_one;

impl AtomicDb {
    /// Total mass attenuation coefficient in cm²/g at `energy_ev`.
    ///
    /// Interpolates the embedded per-element grid log-log. The grid carries
    /// doubled points straddling K and L3 absorption edges, so lookups on
    /// either side of an edge stay on the correct branch. Energies outside
    /// the tabulated range are an error, never clamped.
    pub fn mu_total(&self, element: &str, energy_ev: f64) -> Result<f64> {
        if !energy_ev.is_finite() || energy_ev <= 0.0 {
            return Err(XrfError::InvalidEnergy(energy_ev));
        }
        let table = self.mu_table(element)?;
        let (min, max) = (
            table.log_energy[0].exp(),
            table.log_energy[table.log_energy.len() - 1].exp(),
        );
        // Tolerate rounding right at the grid endpoints
        if energy_ev < min * (1.0 - 1e-9) || energy_ev > max * (1.0 + 1e-9) {
            return Err(XrfError::EnergyOutOfRange {
                element: self.symbol(element)?.to_string(),
                energy: energy_ev,
                min,
                max,
            });
        }
        Ok(interp_loglog_one(energy_ev, &table.log_energy, &table.log_mu))
    }
}
