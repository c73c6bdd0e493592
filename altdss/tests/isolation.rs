// Independent contexts share nothing: circuits, cursors and buffers are all
// per instance.

mod common;

use std::thread;

use altdss::prelude::*;

#[test]
fn commands_in_one_context_are_invisible_to_another() {
    let a = common::feeder();
    let b = a.new_context().unwrap();
    assert_eq!(b.num_circuits().unwrap(), 0);

    b.new_circuit("other").unwrap();
    b.text().set_command("new load.solo bus1=x kw=1").unwrap();

    assert_eq!(a.active_circuit().name().unwrap(), "ieee13mini");
    assert_eq!(a.active_circuit().loads().count().unwrap(), 3);
    assert_eq!(b.active_circuit().loads().all_names().unwrap(), ["solo"]);
}

#[test]
fn cursors_and_selections_are_per_context() {
    let a = common::feeder();
    let b = common::feeder();
    a.active_circuit().lines().set_name("684611").unwrap();
    b.active_circuit().lines().set_name("650632").unwrap();
    a.active_circuit().set_active_bus("671").unwrap();

    assert_eq!(a.active_circuit().lines().name().unwrap(), "684611");
    assert_eq!(b.active_circuit().lines().name().unwrap(), "650632");
    assert_eq!(b.context().active_bus(), None);
    assert!(b.active_circuit().active_bus().name().is_err());
}

#[test]
fn faults_stay_in_their_context() {
    let a = common::feeder();
    let b = common::feeder();
    assert!(a.text().set_command("select line.missing").is_err());
    assert_eq!(b.error().number().unwrap(), 0);
    assert_eq!(a.error().number().unwrap(), 0);
}

#[test]
fn contexts_run_on_their_own_threads() {
    let engine = common::engine();
    let workers: Vec<_> = (0..4i32)
        .map(|worker| {
            let dss = IDSS::create(engine.clone()).unwrap();
            thread::spawn(move || {
                dss.text().set_command(altdss_mock::IEEE13_MINI).unwrap();
                let loads = dss.active_circuit().loads();
                for round in 0..50i32 {
                    let kw = f64::from(worker * 100 + round);
                    loads.set_name("671").unwrap();
                    loads.set_kw(kw).unwrap();
                    loads.set_name("632").unwrap();
                    loads.set_name("671").unwrap();
                    assert_eq!(loads.kw().unwrap(), kw);
                }
                dss.active_circuit().num_nodes().unwrap()
            })
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), 10);
    }
}
