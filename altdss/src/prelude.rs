// Prelude: one-import access to the facade, its proxies and the core runtime
// types.
//
// Usage: `use altdss::prelude::*;`

pub use crate::IDSS;

// Runtime types
pub use altdss_runtime::{Complex64, Context, DssError, DssResult, Engine, EngineConfig};
pub use altdss_runtime::{EntityKind, Selection};

// Circuit-level proxies
pub use crate::bus::Bus;
pub use crate::circuit::Circuit;
pub use crate::cktelement::CktElement;
pub use crate::pd_elements::PDElements;
pub use crate::settings::Settings;
pub use crate::solution::Solution;
pub use crate::topology::Topology;

// Options
pub use crate::enums::*;
pub use crate::flags::{DSSCompatFlags, DSSJSONFlags};
