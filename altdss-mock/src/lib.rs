// altdss-mock: a small in-process engine exporting a subset of the DSS C-API.
//
// It keeps the same contracts as the real library (per-context error cell,
// scratch buffers, engine-allocated string arrays, message callbacks) over a
// toy circuit model, so the binding can be exercised without the native
// engine installed. Entry points it does not provide resolve to null.

mod exports;
mod instance;
mod model;
mod script;

use altdss_ffi::DssApi;

pub use exports::registered_callbacks;
pub use instance::{Fault, MockResult, live_instances, outstanding_strings};

/// Reported by `ctx_DSS_Get_Version`.
pub const VERSION: &str = "DSS C-API mock 0.1.0";

/// A cut-down IEEE 13-node feeder: one source, three lines, three loads.
pub const IEEE13_MINI: &str = "\
clear
new circuit.ieee13mini basekv=4.16
// feeder backbone
new line.650632 bus1=sourcebus.1.2.3 bus2=632.1.2.3 phases=3 length=2
new line.632671 bus1=632.1.2.3 bus2=671.1.2.3 phases=3 length=2
new line.684611 bus1=671.3 bus2=611.3 phases=1 length=0.3
new load.671 bus1=671.1.2.3 phases=3 kw=1155 kvar=660
new load.611 bus1=611.3 phases=1 kw=170 kvar=80
new load.632 bus1=632.1.2.3 phases=3 kw=400 kvar=290
set voltagebases=[4.16]
calcvoltagebases
";

/// Resolve a binding entry-point table against the mock's exports.
pub fn api() -> DssApi {
    unsafe { DssApi::load_with(&mut |name| exports::symbol(name)) }
}

/// Look up one export by its C symbol name. Null when the mock lacks it.
pub fn symbol(name: &str) -> *const std::ffi::c_void {
    exports::symbol(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_entry_points_resolve() {
        let api = api();
        assert!(api.lifecycle.New.is_some());
        assert!(api.error.Get_NumberPtr.is_some());
        assert!(api.lines.Get_First.is_some());
        assert!(api.zip.Open.is_none());
    }

    #[test]
    fn unknown_symbols_are_null() {
        assert!(symbol("ctx_Nothing_Here").is_null());
    }
}
