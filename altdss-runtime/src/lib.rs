// altdss-runtime: safe Rust API wrapping altdss-ffi.
// All unsafe FFI calls are confined to this crate. The facade crate and user
// code interact only with the safe types exported here.

mod accessors;
pub mod config;
pub mod context;
pub mod engine;
pub mod entries;
pub mod error;
pub mod ffi_guard;
pub mod logging;
pub mod marshal;
pub mod selection;
pub mod strings;

// Re-export the primary public API surface.
pub use config::EngineConfig;
pub use context::Context;
pub use engine::Engine;
pub use entries::{
    ActionFn, ArraySetFn, BoolGetFn, BoolSetFn, Entry, GetFn, SetFn, StringArrayGetFn,
    StringArraySetFn, StringGetFn, StringSetFn,
};
pub use error::{DssError, DssResult};
pub use ffi_guard::ffi_boundary;
pub use marshal::{ScratchBuffers, complex_pairs, single_complex};
pub use selection::{EntityKind, Selection};
pub use strings::{CStringArray, NativeStringArray};

// Re-export FFI types needed by the facade.
pub use altdss_ffi::{ContextHandle, DssApi, DssBool};
pub use num_complex::Complex64;
