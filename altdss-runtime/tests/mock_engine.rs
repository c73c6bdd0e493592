// Runtime-level behavior against the in-process mock engine.

use std::sync::Arc;

use altdss_runtime::{
    Context, ContextHandle, DssError, EntityKind, Engine, EngineConfig, Selection, entry,
    single_complex,
};

fn engine() -> Arc<Engine> {
    Engine::from_api(altdss_mock::api())
}

fn loaded(engine: &Arc<Engine>) -> Context {
    let ctx = Context::create(Arc::clone(engine)).unwrap();
    ctx.set_string(entry!(ctx, text.Set_Command), altdss_mock::IEEE13_MINI)
        .unwrap();
    ctx
}

#[test]
fn engine_fault_is_reported_once() {
    let ctx = loaded(&engine());
    let err = ctx
        .set_string(entry!(ctx, text.Set_Command), "select line.nowhere")
        .unwrap_err();
    match err {
        DssError::Engine { code, description } => {
            assert_eq!(code, 302);
            assert!(description.contains("nowhere"), "{description}");
        }
        other => panic!("expected an engine fault, got {other:?}"),
    }
    assert!(ctx.check_error().is_ok());
    assert_eq!(ctx.peek(entry!(ctx, error.Get_Number)).unwrap(), 0);
}

#[test]
fn getter_without_circuit_fails_with_empty_value() {
    let ctx = Context::create(engine()).unwrap();
    let err = ctx.get_string(entry!(ctx, circuit.Get_Name)).unwrap_err();
    assert!(matches!(err, DssError::Engine { code: 8888, .. }));
    // The channel was cleared by the failing call.
    assert_eq!(ctx.get(entry!(ctx, dss.Get_NumCircuits)).unwrap(), 0);
}

#[test]
fn scratch_results_are_copied_out() {
    let ctx = loaded(&engine());
    ctx.call(entry!(ctx, solution.Solve)).unwrap();

    let vmag = ctx.get_f64s(entry!(ctx, circuit.Get_AllBusVmag_GR)).unwrap();
    let volts = ctx.get_complexes(entry!(ctx, circuit.Get_AllBusVolts_GR)).unwrap();
    let nodes = ctx.get(entry!(ctx, circuit.Get_NumNodes)).unwrap();
    assert_eq!(vmag.len(), nodes as usize);
    assert_eq!(volts.len(), vmag.len());
    for (mag, v) in vmag.iter().zip(&volts) {
        assert!((v.norm() - mag).abs() < 1e-6);
    }

    // A later call reuses the engine buffer; the copy above is unaffected.
    let power = ctx.get_complex(entry!(ctx, circuit.Get_TotalPower_GR)).unwrap();
    assert!(power.re < 0.0);
    assert_eq!(vmag.len(), nodes as usize);
}

#[test]
fn malformed_single_complex_is_a_marshalling_fault() {
    let ctx = loaded(&engine());
    let err = ctx
        .get_complex(entry!(ctx, circuit.Get_SubstationLosses_GR))
        .unwrap_err();
    assert!(matches!(err, DssError::InvalidComplex { count: 0 }));
    assert!(matches!(single_complex(&[1.0]), Err(DssError::InvalidComplex { count: 1 })));
}

#[test]
fn config_is_applied_to_new_contexts() {
    let config = EngineConfig {
        allow_forms: true,
        legacy_models: Some(true),
        compat_flags: Some(0x10),
        ..EngineConfig::default()
    };
    let engine = Engine::with_config(altdss_mock::api(), config);
    let ctx = Context::create(engine).unwrap();
    assert!(ctx.get_bool(entry!(ctx, dss.Get_AllowForms)).unwrap());
    assert!(ctx.get_bool(entry!(ctx, dss.Get_LegacyModels)).unwrap());
    assert_eq!(ctx.get(entry!(ctx, dss.Get_CompatFlags)).unwrap(), 0x10);

    let plain = Context::create(self::engine()).unwrap();
    assert!(!plain.get_bool(entry!(plain, dss.Get_AllowForms)).unwrap());
}

#[test]
fn missing_lifecycle_entry_is_reported() {
    let mut api = altdss_mock::api();
    api.lifecycle.New = None;
    let err = Context::create(Engine::from_api(api)).unwrap_err();
    assert!(matches!(err, DssError::MissingEntryPoint("lifecycle.New")));
}

unsafe extern "C" fn refuse_context() -> ContextHandle {
    ContextHandle::NULL
}

#[test]
fn null_context_is_an_allocation_fault() {
    let mut api = altdss_mock::api();
    api.lifecycle.New = Some(refuse_context);
    let err = Context::create(Engine::from_api(api)).unwrap_err();
    assert!(matches!(err, DssError::ContextAllocation), "{err:?}");
}

#[test]
fn prime_context_is_not_owned() {
    let engine = engine();
    let prime = Context::prime(Arc::clone(&engine)).unwrap();
    assert!(!prime.is_owned());
    let again = Context::prime(engine).unwrap();
    assert_eq!(prime.handle(), again.handle());
}

#[test]
fn installed_prime_is_handed_to_the_engine() {
    let engine = engine();
    let original = Context::prime(Arc::clone(&engine)).unwrap();
    let ctx = loaded(&engine);
    assert!(ctx.is_owned());

    let previous = ctx.make_prime().unwrap();
    assert_eq!(previous, original.handle());
    assert!(!ctx.is_owned());

    let prime = Context::prime(Arc::clone(&engine)).unwrap();
    assert_eq!(prime.handle(), ctx.handle());
    assert_eq!(prime.get_string(entry!(prime, circuit.Get_Name)).unwrap(), "ieee13mini");

    // Hand the original back so later tests on this thread see it again.
    assert_eq!(original.make_prime().unwrap(), ctx.handle());
}

#[test]
fn cursor_steps_record_selection() {
    let ctx = loaded(&engine());
    let first = ctx
        .step(entry!(ctx, loads.Get_First), EntityKind::Load, Some(entry!(ctx, loads.Get_idx)))
        .unwrap();
    assert_eq!(first, 1);
    assert_eq!(ctx.active_object(), Some(Selection::new(EntityKind::Load, Some(1))));
    assert_eq!(ctx.active_element(), ctx.active_object());

    ctx.select_idx(entry!(ctx, lines.Set_idx), EntityKind::Line, 2).unwrap();
    assert_eq!(ctx.get_string(entry!(ctx, lines.Get_Name)).unwrap(), "632671");
    assert_eq!(ctx.active_element(), Some(Selection::new(EntityKind::Line, Some(2))));
}

#[test]
fn unclassified_objects_leave_the_active_element() {
    let ctx = loaded(&engine());
    ctx.select_idx(entry!(ctx, lines.Set_idx), EntityKind::Line, 2).unwrap();

    // A general class with no dedicated kind moves only the active object.
    ctx.record_selection(Selection::new(EntityKind::from_class_name("Spectrum"), None));
    assert_eq!(ctx.active_object().map(|s| s.kind), Some(EntityKind::Other));
    assert_eq!(ctx.active_element(), Some(Selection::new(EntityKind::Line, Some(2))));

    // The engine confirming an element settles it, whatever the kind.
    ctx.record_active_element(Selection::new(EntityKind::from_full_name("GICLine.g1"), None));
    assert_eq!(ctx.active_element(), Some(Selection::new(EntityKind::Other, None)));
}
