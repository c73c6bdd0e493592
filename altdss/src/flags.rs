use bitflags::bitflags;

bitflags! {
    /// Engine-wide compatibility switches, `IDSS::compat_flags`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DSSCompatFlags: u32 {
        /// Skip the floating-point sanity checks in the solver.
        const NO_SOLVER_FLOAT_CHECKS = 0x0000_0001;
        /// Reproduce the legacy precision loss in a few calculations.
        const BAD_PRECISION = 0x0000_0002;
        /// Legacy InvControl behaviour from the 9.6.1.1 releases.
        const INV_CONTROL_9611 = 0x0000_0004;
        const SAVE_CALC_VOLTAGE_BASES = 0x0000_0008;
        /// `Lines` proxy keeps its own active line instead of following the
        /// active circuit element.
        const ACTIVE_LINE = 0x0000_0010;
        const NO_PROPERTY_TRACKING = 0x0000_0020;
        const SKIP_SIDE_EFFECTS = 0x0000_0040;
    }
}

bitflags! {
    /// Options for the JSON exporters (`ActiveClass::to_json`,
    /// `DSSElement::to_json`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DSSJSONFlags: i32 {
        const FULL = 0x0000_0001;
        const SKIP_REDUNDANT = 0x0000_0002;
        const ENUM_AS_INT = 0x0000_0004;
        const FULL_NAMES = 0x0000_0008;
        const PRETTY = 0x0000_0010;
        const EXCLUDE_DISABLED = 0x0000_0020;
        const SKIP_DSS_CLASS = 0x0000_0040;
        const LOWERCASE_KEYS = 0x0000_0080;
        const INCLUDE_DEFAULT_OBJS = 0x0000_0100;
        const SKIP_TIMESTAMP = 0x0000_0200;
        const SKIP_BUSES = 0x0000_0400;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flags_combine_into_engine_bits() {
        let options = DSSJSONFlags::FULL | DSSJSONFlags::PRETTY;
        assert_eq!(options.bits(), 0x11);
    }

    #[test]
    fn compat_flags_keep_unknown_bits_out() {
        let flags = DSSCompatFlags::from_bits_truncate(0xFFFF_FFFF);
        assert_eq!(flags.bits(), 0x7F);
    }
}
