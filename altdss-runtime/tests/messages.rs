// Engine messages reach `tracing` through the registered callback.

use std::sync::Arc;

use altdss_runtime::{Context, Engine, EngineConfig, entry};
use tracing_subscriber::EnvFilter;

#[test]
fn forwarder_registers_and_unregisters() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("altdss=trace"))
        .with_test_writer()
        .try_init();

    assert_eq!(altdss_mock::registered_callbacks(), 0);
    let engine = Engine::from_api(altdss_mock::api());
    assert!(engine.is_forwarding_messages());
    assert_eq!(altdss_mock::registered_callbacks(), 1);

    // A failing command is reported to the callback and through the error
    // channel; neither panics.
    let ctx = Context::create(Arc::clone(&engine)).unwrap();
    assert!(ctx.set_string(entry!(ctx, text.Set_Command), "bogus").is_err());

    drop(ctx);
    drop(engine);
    assert_eq!(altdss_mock::registered_callbacks(), 0);

    // Engines on one library share the registration; it outlives all but
    // the last of them.
    let first = Engine::from_api(altdss_mock::api());
    let second = Engine::from_api(altdss_mock::api());
    assert_eq!(altdss_mock::registered_callbacks(), 1);
    drop(first);
    assert!(second.is_forwarding_messages());
    assert_eq!(altdss_mock::registered_callbacks(), 1);
    drop(second);
    assert_eq!(altdss_mock::registered_callbacks(), 0);

    let quiet = EngineConfig {
        forward_messages: false,
        ..EngineConfig::default()
    };
    let engine = Engine::with_config(altdss_mock::api(), quiet);
    assert!(!engine.is_forwarding_messages());
    assert_eq!(altdss_mock::registered_callbacks(), 0);
}
