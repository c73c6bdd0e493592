// Cursor protocol shared by every enumerable category.

mod common;

use altdss::prelude::*;

#[test]
fn every_name_selects_back_to_itself() {
    let dss = common::feeder();
    let lines = dss.active_circuit().lines();
    let names = lines.all_names().unwrap();
    assert_eq!(names, ["650632", "632671", "684611"]);
    for name in &names {
        lines.set_name(name).unwrap();
        assert_eq!(&lines.name().unwrap(), name);
    }
}

#[test]
fn first_next_visits_count_entities() {
    let dss = common::feeder();
    let loads = dss.active_circuit().loads();
    let mut visited = 0;
    let mut step = loads.first().unwrap();
    while step != 0 {
        visited += 1;
        assert_eq!(loads.idx().unwrap(), visited);
        step = loads.next().unwrap();
    }
    assert_eq!(visited, loads.count().unwrap());
    assert_eq!(visited, 3);
}

#[test]
fn disabled_entities_are_skipped_unless_requested() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    circuit.disable("Line.632671").unwrap();

    let lines = circuit.lines();
    let names: Vec<String> = lines.iter().collect::<DssResult<_>>().unwrap();
    assert_eq!(names, ["650632", "684611"]);
    assert_eq!(lines.count().unwrap(), 2);

    let settings = circuit.settings();
    settings.set_iterate_disabled(true).unwrap();
    assert!(settings.iterate_disabled().unwrap());
    assert_eq!(lines.iter().count(), 3);
    assert_eq!(lines.count().unwrap(), 3);
}

#[test]
fn iteration_tracks_the_active_element() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    let loads = circuit.loads();
    let element = circuit.active_cktelement();
    for name in loads.iter() {
        let name = name.unwrap();
        assert_eq!(element.name().unwrap(), format!("Load.{name}"));
        assert_eq!(element.selection().map(|s| s.kind), Some(EntityKind::Load));
    }
}

#[test]
fn index_selection_is_bounds_checked() {
    let dss = common::feeder();
    let lines = dss.active_circuit().lines();
    lines.set_idx(3).unwrap();
    assert_eq!(lines.name().unwrap(), "684611");
    assert_eq!(lines.phases().unwrap(), 1);

    let err = lines.set_idx(9).unwrap_err();
    assert!(matches!(err, DssError::Engine { .. }), "{err}");
    // The failed selection left the previous one in place.
    assert_eq!(lines.name().unwrap(), "684611");
}

#[test]
fn empty_category_iterates_nothing() {
    let dss = IDSS::create(common::engine()).unwrap();
    let circuit = dss.new_circuit("bare").unwrap();
    assert_eq!(circuit.name().unwrap(), "bare");
    let loads = dss.active_circuit().loads();
    assert_eq!(loads.count().unwrap(), 0);
    assert_eq!(loads.first().unwrap(), 0);
    assert_eq!(loads.iter().next().map(|r| r.is_ok()), None);
}
