use std::fmt;

#[derive(Debug)]
pub enum XrfError {
    UnknownElement(String),
    UnknownLine { element: String, line: String },
    EnergyOutOfRange { element: String, energy: f64, min: f64, max: f64 },
    InvalidFraction(f64),
    InvalidEnergy(f64),
    SelectionIncomplete(&'static str),
    DataError(String),
}

pub type Result<T> = std::result::Result<T, XrfError>;

impl fmt::Display for XrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::UnknownLine { element, line } => {
                write!(f, "line '{line}' is not tabulated for element '{element}'")
            }
            Self::EnergyOutOfRange { element, energy, min, max } => {
                write!(
                    f,
                    "energy {energy} eV outside tabulated range [{min}, {max}] for '{element}'"
                )
            }
            Self::InvalidFraction(fr) => {
                write!(f, "detectable photon fraction {fr} not in (0, 1]")
            }
            Self::InvalidEnergy(e) => write!(f, "fluorescence energy {e} eV is not positive"),
            Self::SelectionIncomplete(what) => write!(f, "selection incomplete: {what}"),
            Self::DataError(msg) => write!(f, "data error: {msg}"),
        }
    }
}

impl std::error::Error for XrfError {}
