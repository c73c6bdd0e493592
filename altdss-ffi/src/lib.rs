// altdss-ffi: #[repr(C)] types, handle types, entry-point tables.
// Zero external dependencies. This crate defines the complete Rust <-> DSS C-API contract.

pub mod handles;
pub mod gr;
pub mod callbacks;
pub mod table;
pub mod api_table;
pub mod tables;
pub mod contract_tests;

pub use handles::*;
pub use gr::*;
pub use callbacks::*;
pub use api_table::*;
pub use tables::*;
