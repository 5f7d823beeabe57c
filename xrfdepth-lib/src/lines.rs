use crate::db::AtomicDb;
use crate::error::{Result, XrfError};

/// Number of characteristic lines carried per element in the reference table.
pub const LINE_COUNT: usize = 15;

/// Siegbahn label of a characteristic emission line.
///
/// The variant order is the canonical column order of the reference table
/// and is preserved by [`AtomicDb::available_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmissionLine {
    Ka1,
    Ka2,
    Kb1,
    Kb2,
    Kb3,
    La1,
    La2,
    Lb1,
    Lb2,
    Lb3,
    Lb4,
    Lg1,
    Lg2,
    Lg3,
    Ll,
}

impl EmissionLine {
    /// All lines in canonical table order.
    pub const ALL: [EmissionLine; LINE_COUNT] = [
        Self::Ka1,
        Self::Ka2,
        Self::Kb1,
        Self::Kb2,
        Self::Kb3,
        Self::La1,
        Self::La2,
        Self::Lb1,
        Self::Lb2,
        Self::Lb3,
        Self::Lb4,
        Self::Lg1,
        Self::Lg2,
        Self::Lg3,
        Self::Ll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ka1 => "Ka1",
            Self::Ka2 => "Ka2",
            Self::Kb1 => "Kb1",
            Self::Kb2 => "Kb2",
            Self::Kb3 => "Kb3",
            Self::La1 => "La1",
            Self::La2 => "La2",
            Self::Lb1 => "Lb1",
            Self::Lb2 => "Lb2",
            Self::Lb3 => "Lb3",
            Self::Lb4 => "Lb4",
            Self::Lg1 => "Lg1",
            Self::Lg2 => "Lg2",
            Self::Lg3 => "Lg3",
            Self::Ll => "Ll",
        }
    }

    /// Case-insensitive parse of a Siegbahn label.
    pub fn parse(label: &str) -> Option<EmissionLine> {
        Self::ALL
            .iter()
            .copied()
            .find(|line| line.as_str().eq_ignore_ascii_case(label))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for EmissionLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AtomicDb {
    /// Returns the emission lines tabulated for an element, with energies
    /// in keV, in canonical table order.
    ///
    /// Lines stored as 0 in the table ("not tabulated") are excluded.
    pub fn available_lines(&self, element: &str) -> Result<Vec<(EmissionLine, f64)>> {
        let record = self.element_record(element)?;
        Ok(EmissionLine::ALL
            .iter()
            .filter_map(|&line| record.lines[line.index()].map(|kev| (line, kev)))
            .collect())
    }

    /// Energy of a single emission line in keV.
    pub fn line_energy_kev(&self, element: &str, line: EmissionLine) -> Result<f64> {
        let record = self.element_record(element)?;
        record.lines[line.index()].ok_or_else(|| XrfError::UnknownLine {
            element: record.symbol.clone(),
            line: line.as_str().to_string(),
        })
    }
}
