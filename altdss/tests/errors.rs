// Fault reporting: engine faults, marshalling faults and missing entry points.

mod common;

use altdss::prelude::*;

#[test]
fn engine_fault_carries_code_and_description() {
    let dss = common::feeder();
    let err = dss.active_circuit().lines().set_name("nope").unwrap_err();
    match &err {
        DssError::Engine { code, description } => {
            assert_eq!(*code, 302);
            assert!(description.contains("nope"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("(#302)"));
}

#[test]
fn fault_is_cleared_after_one_check() {
    let dss = common::feeder();
    let lines = dss.active_circuit().lines();
    assert!(lines.set_idx(42).is_err());
    assert_eq!(dss.error().number().unwrap(), 0);
    assert!(lines.set_idx(1).is_ok());
    assert_eq!(lines.name().unwrap(), "650632");
}

#[test]
fn no_circuit_getters_fail_instead_of_returning_zero() {
    let dss = IDSS::create(common::engine()).unwrap();
    let circuit = dss.active_circuit();
    assert!(circuit.num_nodes().is_err());
    assert!(circuit.all_node_names().is_err());
    assert!(circuit.all_bus_vmag().is_err());
    assert!(circuit.active_cktelement().name().is_err());
}

#[test]
fn single_complex_needs_exactly_two_values() {
    let dss = common::feeder();
    let err = dss.active_circuit().substation_losses().unwrap_err();
    assert!(matches!(err, DssError::InvalidComplex { count: 0 }));
}

#[test]
fn unexported_entry_points_are_reported_by_name() {
    let dss = common::feeder();
    let err = dss.zip().open("feeder.zip").unwrap_err();
    assert!(matches!(err, DssError::MissingEntryPoint("zip.Open")));
    assert!(dss.active_circuit().transformers().count().is_err());

    // Nothing was left in the error channel by the refused calls.
    assert_eq!(dss.active_circuit().loads().count().unwrap(), 3);
}

#[test]
fn enum_properties_round_trip() {
    let dss = common::feeder();
    let solution = dss.active_circuit().solution();
    assert_eq!(solution.mode().unwrap(), SolveModes::SnapShot);
    solution.set_mode(SolveModes::Daily).unwrap();
    assert_eq!(solution.mode().unwrap(), SolveModes::Daily);
}

#[test]
fn compat_flags_keep_unknown_bits() {
    let dss = common::feeder();
    dss.set_compat_flags(DSSCompatFlags::ACTIVE_LINE | DSSCompatFlags::BAD_PRECISION)
        .unwrap();
    assert_eq!(dss.compat_flags().unwrap().bits(), 0x12);

    dss.set_compat_flags(DSSCompatFlags::from_bits_retain(0x8000_0001))
        .unwrap();
    let flags = dss.compat_flags().unwrap();
    assert!(flags.contains(DSSCompatFlags::NO_SOLVER_FLOAT_CHECKS));
    assert_eq!(flags.bits(), 0x8000_0001);
}

#[test]
fn instance_flags_and_metadata() {
    let dss = common::feeder();
    assert!(!dss.allow_forms().unwrap());
    dss.set_legacy_models(true).unwrap();
    assert!(dss.legacy_models().unwrap());
    assert_eq!(dss.version().unwrap(), altdss_mock::VERSION);
    assert_eq!(dss.classes().unwrap(), ["Vsource", "Line", "Load"]);
    assert!(dss.error().extended_errors().unwrap());
}
