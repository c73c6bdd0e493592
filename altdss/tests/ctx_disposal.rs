// Creating and disposing many contexts leaves no engine instance behind.
// Kept in its own binary: it reads the mock's global instance counter.

use altdss::prelude::*;

#[test]
fn ten_thousand_contexts_are_released() {
    let engine = Engine::from_api(altdss_mock::api());
    let baseline = altdss_mock::live_instances();

    for i in 0..10_000 {
        let dss = IDSS::create(engine.clone()).unwrap();
        if i % 1000 == 0 {
            dss.new_circuit("scratch").unwrap();
            assert_eq!(dss.num_circuits().unwrap(), 1);
            assert_eq!(altdss_mock::live_instances(), baseline + 1);
        }
        dss.dispose();
    }
    assert_eq!(altdss_mock::live_instances(), baseline);

    // Dropping without an explicit dispose releases too.
    {
        let _a = IDSS::create(engine.clone()).unwrap();
        let _b = IDSS::create(engine.clone()).unwrap();
        assert_eq!(altdss_mock::live_instances(), baseline + 2);
    }
    assert_eq!(altdss_mock::live_instances(), baseline);

    // The prime instance is borrowed, never released.
    let prime = IDSS::prime(engine).unwrap();
    drop(prime);
    assert_eq!(altdss_mock::live_instances(), baseline);
}
