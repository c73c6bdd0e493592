#![allow(dead_code)]

use std::sync::Arc;

use altdss::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn engine() -> Arc<Engine> {
    // RUST_LOG=altdss=debug shows context lifecycle and engine messages.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Engine::from_api(altdss_mock::api())
}

/// A fresh instance with the mini IEEE 13-node feeder loaded.
pub fn feeder() -> IDSS {
    let dss = IDSS::create(engine()).unwrap();
    dss.text().set_command(altdss_mock::IEEE13_MINI).unwrap();
    dss
}
