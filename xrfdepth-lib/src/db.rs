use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Result, XrfError};
use crate::lines::LINE_COUNT;

const ATOMIC_CSV: &str = include_str!("../../data/atomic.csv");
const MU_TOTAL_CSV: &str = include_str!("../../data/mu_total.csv");

/// One row of `data/atomic.csv`. Line energies are keV; 0 means
/// "not tabulated" and is converted to `None` at load time.
#[derive(Debug, Deserialize)]
struct AtomicRow {
    #[serde(rename = "Atomic#")]
    atomic_number: u16,
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "ElementName")]
    name: String,
    #[serde(rename = "Density")]
    density: f64,
    #[serde(rename = "Ka1")]
    ka1: f64,
    #[serde(rename = "Ka2")]
    ka2: f64,
    #[serde(rename = "Kb1")]
    kb1: f64,
    #[serde(rename = "Kb2")]
    kb2: f64,
    #[serde(rename = "Kb3")]
    kb3: f64,
    #[serde(rename = "La1")]
    la1: f64,
    #[serde(rename = "La2")]
    la2: f64,
    #[serde(rename = "Lb1")]
    lb1: f64,
    #[serde(rename = "Lb2")]
    lb2: f64,
    #[serde(rename = "Lb3")]
    lb3: f64,
    #[serde(rename = "Lb4")]
    lb4: f64,
    #[serde(rename = "Lg1")]
    lg1: f64,
    #[serde(rename = "Lg2")]
    lg2: f64,
    #[serde(rename = "Lg3")]
    lg3: f64,
    #[serde(rename = "Ll")]
    ll: f64,
}

/// One row of `data/mu_total.csv` (energy in eV, mu in cm²/g).
#[derive(Debug, Deserialize)]
struct MuRow {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "EnergyEv")]
    energy_ev: f64,
    #[serde(rename = "MuTotal")]
    mu_total: f64,
}

pub(crate) struct ElementEntry {
    pub(crate) atomic_number: u16,
    pub(crate) symbol: String,
    pub(crate) name: String,
    pub(crate) density: f64,
    /// Emission-line energies in keV, canonical order. `None` = not tabulated.
    pub(crate) lines: [Option<f64>; LINE_COUNT],
}

/// Per-element attenuation grid, stored as natural logs for log-log lookup.
pub(crate) struct MuTable {
    pub(crate) log_energy: Vec<f64>,
    pub(crate) log_mu: Vec<f64>,
}

struct InitializedDb {
    elements: Vec<ElementEntry>,
    symbol_to_z: HashMap<String, u16>,
    name_to_z: HashMap<String, u16>,
    mu_by_symbol: HashMap<String, MuTable>,
}

static DATABASE: OnceLock<InitializedDb> = OnceLock::new();

fn nonzero(energy_kev: f64) -> Option<f64> {
    (energy_kev != 0.0).then_some(energy_kev)
}

fn db() -> &'static InitializedDb {
    DATABASE.get_or_init(|| {
        let mut elements = Vec::new();
        let mut reader = csv::Reader::from_reader(ATOMIC_CSV.as_bytes());
        for row in reader.deserialize::<AtomicRow>() {
            let row = row.expect("malformed row in embedded atomic.csv");
            let lines = [
                row.ka1, row.ka2, row.kb1, row.kb2, row.kb3, row.la1, row.la2, row.lb1,
                row.lb2, row.lb3, row.lb4, row.lg1, row.lg2, row.lg3, row.ll,
            ]
            .map(nonzero);
            elements.push(ElementEntry {
                atomic_number: row.atomic_number,
                symbol: row.symbol,
                name: row.name,
                density: row.density,
                lines,
            });
        }

        let mut symbol_to_z = HashMap::new();
        let mut name_to_z = HashMap::new();
        for elem in &elements {
            symbol_to_z.insert(elem.symbol.to_lowercase(), elem.atomic_number);
            name_to_z.insert(elem.name.to_lowercase(), elem.atomic_number);
        }

        let mut mu_by_symbol: HashMap<String, MuTable> = HashMap::new();
        let mut reader = csv::Reader::from_reader(MU_TOTAL_CSV.as_bytes());
        for row in reader.deserialize::<MuRow>() {
            let row = row.expect("malformed row in embedded mu_total.csv");
            let table = mu_by_symbol.entry(row.symbol).or_insert_with(|| MuTable {
                log_energy: Vec::new(),
                log_mu: Vec::new(),
            });
            table.log_energy.push(row.energy_ev.ln());
            table.log_mu.push(row.mu_total.ln());
        }

        InitializedDb {
            elements,
            symbol_to_z,
            name_to_z,
            mu_by_symbol,
        }
    })
}

/// The main interface to the atomic reference tables.
///
/// Cheap to create — holds a reference to statically-allocated data
/// that is parsed from the embedded CSV tables on first use.
pub struct AtomicDb {
    db: &'static InitializedDb,
}

impl AtomicDb {
    pub fn new() -> Self {
        AtomicDb { db: db() }
    }

    /// Resolve an element identifier (symbol, name, or atomic number) to Z.
    pub fn resolve_element(&self, element: &str) -> Result<u16> {
        // Try as atomic number first
        if let Ok(z) = element.parse::<u16>() {
            if self.db.elements.iter().any(|e| e.atomic_number == z) {
                return Ok(z);
            }
            return Err(XrfError::UnknownElement(element.to_string()));
        }
        let lower = element.to_lowercase();
        if let Some(&z) = self.db.symbol_to_z.get(&lower) {
            return Ok(z);
        }
        if let Some(&z) = self.db.name_to_z.get(&lower) {
            return Ok(z);
        }
        Err(XrfError::UnknownElement(element.to_string()))
    }

    pub(crate) fn element_record(&self, element: &str) -> Result<&'static ElementEntry> {
        let z = self.resolve_element(element)?;
        self.db
            .elements
            .iter()
            .find(|e| e.atomic_number == z)
            .ok_or_else(|| XrfError::UnknownElement(element.to_string()))
    }

    pub(crate) fn mu_table(&self, element: &str) -> Result<&'static MuTable> {
        let sym = self.symbol(element)?;
        self.db
            .mu_by_symbol
            .get(sym)
            .ok_or_else(|| XrfError::DataError(format!("no attenuation table for '{sym}'")))
    }

    pub fn atomic_number(&self, element: &str) -> Result<u16> {
        self.resolve_element(element)
    }

    pub fn symbol(&self, element: &str) -> Result<&'static str> {
        Ok(&self.element_record(element)?.symbol)
    }

    pub fn element_name(&self, element: &str) -> Result<&'static str> {
        Ok(&self.element_record(element)?.name)
    }

    /// Density in g/cm³.
    pub fn density(&self, element: &str) -> Result<f64> {
        Ok(self.element_record(element)?.density)
    }

    /// All elements in the reference table, in ascending Z.
    pub fn elements(&self) -> impl Iterator<Item = (u16, &'static str, &'static str)> {
        self.db
            .elements
            .iter()
            .map(|e| (e.atomic_number, e.symbol.as_str(), e.name.as_str()))
    }

    pub fn element_count(&self) -> usize {
        self.db.elements.len()
    }
}

impl Default for AtomicDb {
    fn default() -> Self {
        Self::new()
    }
}
