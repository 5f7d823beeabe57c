use std::fmt;

use crate::db::AtomicDb;
use crate::depth::DEFAULT_DETECTABLE_FRACTION;
use crate::error::{Result, XrfError};
use crate::lines::EmissionLine;

/// Result of a completed selection flow.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthReport {
    pub element_symbol: &'static str,
    pub line: EmissionLine,
    pub line_energy_kev: f64,
    pub matrix_symbol: &'static str,
    pub detectable_photon_fraction: f64,
    pub depth_mm: f64,
}

impl fmt::Display for DepthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Max depth that {} {} fluorescence at {} keV will be detectable through solid {} \
             (with {:.2}% returned photons): {:.3} mm",
            self.element_symbol,
            self.line,
            self.line_energy_kev,
            self.matrix_symbol,
            self.detectable_photon_fraction * 100.0,
            self.depth_mm,
        )
    }
}

/// The interactive selection sequence, modeled as an explicit state object.
///
/// Enablement is sequential: an element of interest must be chosen before a
/// line, and [`SelectionFlow::compute`] refuses to run until both a line and
/// a matrix element are selected. Any front end (prompt loop, form, API)
/// drives these same transitions.
pub struct SelectionFlow {
    db: AtomicDb,
    element_of_interest: Option<&'static str>,
    candidate_lines: Vec<(EmissionLine, f64)>,
    line: Option<(EmissionLine, f64)>,
    matrix: Option<&'static str>,
    fraction: f64,
}

impl SelectionFlow {
    pub fn new() -> Self {
        SelectionFlow {
            db: AtomicDb::new(),
            element_of_interest: None,
            candidate_lines: Vec::new(),
            line: None,
            matrix: None,
            fraction: DEFAULT_DETECTABLE_FRACTION,
        }
    }

    pub fn db(&self) -> &AtomicDb {
        &self.db
    }

    /// Choose the element being looked for. Repopulates the candidate line
    /// list and clears any previously chosen line.
    pub fn choose_element_of_interest(
        &mut self,
        element: &str,
    ) -> Result<&[(EmissionLine, f64)]> {
        let symbol = self.db.symbol(element)?;
        self.candidate_lines = self.db.available_lines(symbol)?;
        self.element_of_interest = Some(symbol);
        self.line = None;
        Ok(&self.candidate_lines)
    }

    /// Lines currently on offer (empty before an element is chosen).
    pub fn candidate_lines(&self) -> &[(EmissionLine, f64)] {
        &self.candidate_lines
    }

    /// Choose one of the offered emission lines. Returns its energy in keV.
    pub fn choose_line(&mut self, line: EmissionLine) -> Result<f64> {
        let element = self
            .element_of_interest
            .ok_or(XrfError::SelectionIncomplete("no element of interest chosen"))?;
        let energy_kev = self
            .candidate_lines
            .iter()
            .find(|(l, _)| *l == line)
            .map(|&(_, kev)| kev)
            .ok_or_else(|| XrfError::UnknownLine {
                element: element.to_string(),
                line: line.as_str().to_string(),
            })?;
        self.line = Some((line, energy_kev));
        Ok(energy_kev)
    }

    /// Choose the matrix element the fluorescence must pass through.
    pub fn choose_matrix(&mut self, element: &str) -> Result<()> {
        self.matrix = Some(self.db.symbol(element)?);
        Ok(())
    }

    pub fn set_detectable_fraction(&mut self, fraction: f64) -> Result<()> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(XrfError::InvalidFraction(fraction));
        }
        self.fraction = fraction;
        Ok(())
    }

    /// True once both a line and a matrix element are selected.
    pub fn is_ready(&self) -> bool {
        self.line.is_some() && self.matrix.is_some()
    }

    /// Run the depth computation for the current selections.
    pub fn compute(&self) -> Result<DepthReport> {
        let element_symbol = self
            .element_of_interest
            .ok_or(XrfError::SelectionIncomplete("no element of interest chosen"))?;
        let (line, line_energy_kev) = self
            .line
            .ok_or(XrfError::SelectionIncomplete("no emission line chosen"))?;
        let matrix_symbol = self
            .matrix
            .ok_or(XrfError::SelectionIncomplete("no matrix element chosen"))?;

        let depth_mm = self.db.fluorescence_depth_mm(
            matrix_symbol,
            line_energy_kev * 1000.0,
            self.fraction,
        )?;

        Ok(DepthReport {
            element_symbol,
            line,
            line_energy_kev,
            matrix_symbol,
            detectable_photon_fraction: self.fraction,
            depth_mm,
        })
    }
}

impl Default for SelectionFlow {
    fn default() -> Self {
        Self::new()
    }
}
