// Engine-allocated string arrays are always handed back, including when the
// call that produced them fails. Kept in its own binary so the mock's global
// allocation counter only sees this test.

use std::sync::Arc;

use altdss_runtime::{Context, Engine, entry};

#[test]
fn native_arrays_are_released_on_every_path() {
    let engine = Engine::from_api(altdss_mock::api());
    let ctx = Context::create(Arc::clone(&engine)).unwrap();
    assert_eq!(altdss_mock::outstanding_strings(), 0);

    // Failing call: no circuit yet, the engine still hands out an (empty) array.
    assert!(ctx.get_strings(entry!(ctx, circuit.Get_AllBusNames)).is_err());
    assert_eq!(altdss_mock::outstanding_strings(), 0);

    ctx.set_string(entry!(ctx, text.Set_Command), altdss_mock::IEEE13_MINI)
        .unwrap();
    for _ in 0..100 {
        let names = ctx.get_strings(entry!(ctx, circuit.Get_AllNodeNames)).unwrap();
        assert_eq!(names.len(), ctx.get(entry!(ctx, circuit.Get_NumNodes)).unwrap() as usize);
        assert_eq!(altdss_mock::outstanding_strings(), 0);
    }

    // Outbound array: reaches the engine intact and reads back the same.
    ctx.set_string(entry!(ctx, text.Set_Command), "select line.632671")
        .unwrap();
    let buses = ["632.1.2.3", "680.1.2.3"];
    ctx.set_strings(entry!(ctx, ckt_element.Set_BusNames), &buses[..])
        .unwrap();
    let read = ctx.get_strings(entry!(ctx, ckt_element.Get_BusNames)).unwrap();
    assert_eq!(read, buses);
    assert_eq!(altdss_mock::outstanding_strings(), 0);
}
