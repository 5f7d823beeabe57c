use crate::db::AtomicDb;
use crate::error::{Result, XrfError};

/// Detectable photon fraction a typical XRF detector setup works at (1%).
pub const DEFAULT_DETECTABLE_FRACTION: f64 = 0.01;

impl AtomicDb {
    /// Maximum depth of `matrix` (element symbol, name, or Z) through which
    /// fluorescence at `fluorescence_energy_ev` stays detectable, in mm.
    ///
    /// `detectable_photon_fraction` is the surviving fraction of fluorescence
    /// photons required at the detector, strictly in (0, 1]. The Beer-Lambert
    /// survival fraction exp(-mu * rho * x) solved for x at the threshold:
    ///
    /// ```text
    /// depth_cm = ln(fraction) / (-mu * rho)
    /// ```
    ///
    /// A fraction of 1 yields a depth of exactly 0.
    pub fn fluorescence_depth_mm(
        &self,
        matrix: &str,
        fluorescence_energy_ev: f64,
        detectable_photon_fraction: f64,
    ) -> Result<f64> {
        if !(detectable_photon_fraction > 0.0 && detectable_photon_fraction <= 1.0) {
            return Err(XrfError::InvalidFraction(detectable_photon_fraction));
        }
        if !fluorescence_energy_ev.is_finite() || fluorescence_energy_ev <= 0.0 {
            return Err(XrfError::InvalidEnergy(fluorescence_energy_ev));
        }

        let mu = self.mu_total(matrix, fluorescence_energy_ev)?;
        let rho = self.density(matrix)?;

        let depth_cm = detectable_photon_fraction.ln() / (-mu * rho);
        Ok(depth_cm * 10.0)
    }
}
