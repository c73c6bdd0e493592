// Active-selection bookkeeping.
//
// The engine keeps one "active object" per context and moves it whenever any
// category selects something. Selecting a Line, for instance, also makes that
// Line the active circuit element. `Context` mirrors those moves so callers
// can ask what is active without another round trip.

/// Engine object category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Bus,
    Line,
    Load,
    Transformer,
    Capacitor,
    Generator,
    EnergyMeter,
    Monitor,
    Relay,
    Recloser,
    Sensor,
    Fuse,
    SwtControl,
    RegControl,
    CapControl,
    PVSystem,
    Storage,
    Vsource,
    Isource,
    Reactor,
    LineCode,
    LoadShape,
    XYCurve,
    LineGeometry,
    LineSpacing,
    WireData,
    CNData,
    TSData,
    /// Any class this binding has no dedicated proxy for.
    Other,
}

const CLASS_NAMES: &[(EntityKind, &str)] = &[
    (EntityKind::Line, "Line"),
    (EntityKind::Load, "Load"),
    (EntityKind::Transformer, "Transformer"),
    (EntityKind::Capacitor, "Capacitor"),
    (EntityKind::Generator, "Generator"),
    (EntityKind::EnergyMeter, "EnergyMeter"),
    (EntityKind::Monitor, "Monitor"),
    (EntityKind::Relay, "Relay"),
    (EntityKind::Recloser, "Recloser"),
    (EntityKind::Sensor, "Sensor"),
    (EntityKind::Fuse, "Fuse"),
    (EntityKind::SwtControl, "SwtControl"),
    (EntityKind::RegControl, "RegControl"),
    (EntityKind::CapControl, "CapControl"),
    (EntityKind::PVSystem, "PVSystem"),
    (EntityKind::Storage, "Storage"),
    (EntityKind::Vsource, "Vsource"),
    (EntityKind::Isource, "Isource"),
    (EntityKind::Reactor, "Reactor"),
    (EntityKind::LineCode, "LineCode"),
    (EntityKind::LoadShape, "LoadShape"),
    (EntityKind::XYCurve, "XYcurve"),
    (EntityKind::LineGeometry, "LineGeometry"),
    (EntityKind::LineSpacing, "LineSpacing"),
    (EntityKind::WireData, "WireData"),
    (EntityKind::CNData, "CNData"),
    (EntityKind::TSData, "TSData"),
];

impl EntityKind {
    /// Map an engine class name (case-insensitive) to its kind.
    pub fn from_class_name(name: &str) -> EntityKind {
        CLASS_NAMES
            .iter()
            .find(|(_, class)| class.eq_ignore_ascii_case(name))
            .map(|(kind, _)| *kind)
            .unwrap_or(EntityKind::Other)
    }

    /// Kind of a full object name such as `Line.650632`.
    pub fn from_full_name(full_name: &str) -> EntityKind {
        match full_name.split_once('.') {
            Some((class, _)) => EntityKind::from_class_name(class),
            None => EntityKind::Other,
        }
    }

    /// Engine class name, `None` for buses and unknown classes.
    pub fn class_name(self) -> Option<&'static str> {
        CLASS_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, class)| *class)
    }

    /// Whether selecting an object of this kind moves the active circuit
    /// element. General objects (line codes, shapes, curves, wire data) and
    /// buses do not. `Other` may be either, so only the engine can tell.
    pub fn is_circuit_element(self) -> bool {
        !matches!(
            self,
            EntityKind::Bus
                | EntityKind::LineCode
                | EntityKind::LoadShape
                | EntityKind::XYCurve
                | EntityKind::LineGeometry
                | EntityKind::LineSpacing
                | EntityKind::WireData
                | EntityKind::CNData
                | EntityKind::TSData
                | EntityKind::Other
        )
    }
}

/// The last object selected through this binding.
///
/// `index` is the 1-based index within its category when the selecting
/// operation knows it (bus selections store the engine's 0-based bus index).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub kind: EntityKind,
    pub index: Option<i32>,
}

impl Selection {
    pub const fn new(kind: EntityKind, index: Option<i32>) -> Self {
        Selection { kind, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_case_insensitive() {
        assert_eq!(EntityKind::from_class_name("line"), EntityKind::Line);
        assert_eq!(EntityKind::from_class_name("XYCurve"), EntityKind::XYCurve);
        assert_eq!(EntityKind::from_class_name("storage"), EntityKind::Storage);
        assert_eq!(EntityKind::from_class_name("gicline"), EntityKind::Other);
    }

    #[test]
    fn full_names_use_the_class_prefix() {
        assert_eq!(EntityKind::from_full_name("Line.650632"), EntityKind::Line);
        assert_eq!(EntityKind::from_full_name("Load.671"), EntityKind::Load);
        assert_eq!(EntityKind::from_full_name("sourcebus"), EntityKind::Other);
    }

    #[test]
    fn general_objects_are_not_circuit_elements() {
        assert!(EntityKind::Line.is_circuit_element());
        assert!(EntityKind::Vsource.is_circuit_element());
        assert!(!EntityKind::Other.is_circuit_element());
        assert!(!EntityKind::LineCode.is_circuit_element());
        assert!(!EntityKind::Bus.is_circuit_element());
    }

    #[test]
    fn class_name_round_trips() {
        for (kind, class) in CLASS_NAMES {
            assert_eq!(kind.class_name(), Some(*class));
            assert_eq!(EntityKind::from_class_name(class), *kind);
        }
        assert_eq!(EntityKind::Bus.class_name(), None);
    }
}
