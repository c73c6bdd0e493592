// Circuit element categories. Selecting through any of these also moves the
// active circuit element.

mod cap_controls;
mod capacitors;
mod fuses;
mod generators;
mod isources;
mod lines;
mod loads;
mod meters;
mod monitors;
mod pv_systems;
mod reactors;
mod reclosers;
mod reg_controls;
mod relays;
mod sensors;
mod storages;
mod swt_controls;
mod transformers;
mod vsources;

pub use cap_controls::CapControls;
pub use capacitors::Capacitors;
pub use fuses::Fuses;
pub use generators::Generators;
pub use isources::ISources;
pub use lines::Lines;
pub use loads::Loads;
pub use meters::Meters;
pub use monitors::Monitors;
pub use pv_systems::PVSystems;
pub use reactors::Reactors;
pub use reclosers::Reclosers;
pub use reg_controls::RegControls;
pub use relays::Relays;
pub use sensors::Sensors;
pub use storages::Storages;
pub use swt_controls::SwtControls;
pub use transformers::Transformers;
pub use vsources::Vsources;
