// Entry-point sub-tables, one per engine category.
//
// Conventions shared by every table:
// - scalar getters return the value; booleans are `DssBool` words
// - `*_GR` getters return nothing and fill the context's scratch buffers
// - string-array getters write a freshly allocated `char**` and a 4-slot
//   count array; the caller releases them with `DSS_Dispose_PPAnsiChar`
// - array setters take a pointer and an element count

pub mod base;
pub mod circuit;
pub mod elements;
pub mod general;
pub mod tools;

pub use base::*;
pub use circuit::*;
pub use elements::*;
pub use general::*;
pub use tools::*;
