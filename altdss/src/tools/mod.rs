// Engine-level tools that are not tied to the active circuit.

mod active_class;
mod cmath_lib;
mod dss_element;
mod dss_property;
mod error;
mod executive;
mod parallel;
mod parser;
mod text;
mod ymatrix;
mod zip;

pub use active_class::ActiveClass;
pub use cmath_lib::CmathLib;
pub use dss_element::DSSElement;
pub use dss_property::DSSProperty;
pub use error::Error;
pub use executive::Executive;
pub use parallel::Parallel;
pub use parser::Parser;
pub use text::Text;
pub use ymatrix::YMatrix;
pub use zip::ZIP;
