// Typed views of the engine's integer-coded options.
//
// Getters decode with `TryFrom<i32>`; a value outside the enum surfaces as
// `DssError::UnknownEnumValue` instead of being truncated. Setters pass the
// discriminant straight through.

use altdss_runtime::DssError;

macro_rules! dss_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl TryFrom<i32> for $name {
            type Error = DssError;

            fn try_from(value: i32) -> Result<Self, DssError> {
                match value {
                    $( v if v == $value => Ok($name::$variant), )+
                    _ => Err(DssError::UnknownEnumValue {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }
    };
}

dss_enum! {
    /// Solution mode, `Solution::mode`.
    pub enum SolveModes {
        SnapShot = 0,
        Daily = 1,
        Yearly = 2,
        Monte1 = 3,
        LD1 = 4,
        PeakDay = 5,
        DutyCycle = 6,
        Direct = 7,
        MonteFault = 8,
        FaultStudy = 9,
        Monte2 = 10,
        Monte3 = 11,
        LD2 = 12,
        AutoAdd = 13,
        Dynamic = 14,
        Harmonic = 15,
        Time = 16,
        HarmonicT = 17,
    }
}

dss_enum! {
    pub enum ControlModes {
        /// Control actions disabled.
        Off = -1,
        Static = 0,
        Event = 1,
        Time = 2,
        Multirate = 3,
    }
}

dss_enum! {
    pub enum SolutionAlgorithms {
        NormalSolve = 0,
        NewtonSolve = 1,
    }
}

dss_enum! {
    /// How loads enter the solution, `Solution::load_model`.
    pub enum SolutionLoadModels {
        PowerFlow = 1,
        Admittance = 2,
    }
}

dss_enum! {
    /// Load model code, `Loads::model`.
    pub enum LoadModels {
        ConstPQ = 1,
        ConstZ = 2,
        Motor = 3,
        CVR = 4,
        ConstI = 5,
        ConstPFixedQ = 6,
        ConstPFixedX = 7,
        ZIPV = 8,
    }
}

dss_enum! {
    pub enum LoadStatus {
        Variable = 0,
        Fixed = 1,
        Exempt = 2,
    }
}

dss_enum! {
    /// Base recording mode of a monitor. Higher bits are modifiers, see
    /// [`MonitorModes::BASE_MASK`].
    pub enum MonitorModes {
        VI = 0,
        Power = 1,
        Taps = 2,
        States = 3,
        Sequence = 16,
        Magnitude = 32,
        PosOnly = 64,
    }
}

impl MonitorModes {
    /// Bits of a raw mode value that select the base mode.
    pub const BASE_MASK: i32 = 0x0F;
}

dss_enum! {
    pub enum CapControlModes {
        Current = 0,
        Voltage = 1,
        KVAR = 2,
        Time = 3,
        PF = 4,
    }
}

dss_enum! {
    /// Control queue action codes.
    pub enum ActionCodes {
        None = 0,
        Open = 1,
        Close = 2,
        Reset = 3,
        Lock = 4,
        Unlock = 5,
        TapUp = 6,
        TapDown = 7,
    }
}

dss_enum! {
    /// Length units of lines, line codes and geometries.
    pub enum LineUnits {
        None = 0,
        Miles = 1,
        Kft = 2,
        Km = 3,
        Meter = 4,
        Ft = 5,
        Inch = 6,
        Cm = 7,
        Mm = 8,
    }
}

dss_enum! {
    pub enum CktModels {
        Multiphase = 0,
        PositiveSeq = 1,
    }
}

dss_enum! {
    pub enum GeneratorStatus {
        Variable = 0,
        Fixed = 1,
    }
}

dss_enum! {
    pub enum StorageStates {
        Discharging = -1,
        Idling = 0,
        Charging = 1,
    }
}

dss_enum! {
    /// Overcurrent protective device guarding the active element.
    pub enum OCPDevType {
        None = 0,
        Fuse = 1,
        Recloser = 2,
        Relay = 3,
    }
}

dss_enum! {
    /// Transformer core construction.
    pub enum CoreType {
        Shell = 0,
        OnePhase = 1,
        ThreeLeg = 3,
        FourLeg = 4,
        FiveLeg = 5,
        CoreType1Phase = 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_decode() {
        assert_eq!(SolveModes::try_from(16).unwrap(), SolveModes::Time);
        assert_eq!(ControlModes::try_from(-1).unwrap(), ControlModes::Off);
        assert_eq!(StorageStates::try_from(-1).unwrap(), StorageStates::Discharging);
        assert_eq!(CoreType::try_from(9).unwrap(), CoreType::CoreType1Phase);
    }

    #[test]
    fn unknown_values_are_errors() {
        let err = LineUnits::try_from(42).unwrap_err();
        assert!(matches!(
            err,
            DssError::UnknownEnumValue { kind: "LineUnits", value: 42 }
        ));
        assert!(CoreType::try_from(2).is_err());
    }

    #[test]
    fn discriminants_cross_unchanged() {
        assert_eq!(i32::from(MonitorModes::Sequence), 16);
        assert_eq!(LoadModels::ZIPV as i32, 8);
        assert_eq!(17 & MonitorModes::BASE_MASK, MonitorModes::Power as i32);
    }
}
