pub mod attenuation;
pub mod db;
pub mod depth;
pub mod error;
pub mod flow;
pub mod interp;
pub mod lines;

pub use db::AtomicDb;
pub use depth::DEFAULT_DETECTABLE_FRACTION;
pub use error::{Result, XrfError};
pub use flow::{DepthReport, SelectionFlow};
pub use lines::EmissionLine;
