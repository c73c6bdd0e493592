// Load a feeder, solve it, and walk buses and elements through the facade.

mod common;

use altdss::prelude::*;

#[test]
fn node_views_agree_and_bus_selection_moves() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    assert_eq!(circuit.name().unwrap(), "ieee13mini");

    dss.text().set_command("solve").unwrap();
    assert!(circuit.solution().converged().unwrap());

    // sourcebus, 632 and 671 carry three nodes each; 611 only phase 3.
    assert_eq!(circuit.num_nodes().unwrap(), 10);
    let names = circuit.all_node_names().unwrap();
    let vmag = circuit.all_bus_vmag().unwrap();
    assert_eq!(names.len(), vmag.len());
    assert_eq!(circuit.all_bus_volts().unwrap().len(), vmag.len());
    assert!(names.contains(&"611.3".to_string()));

    let bus = circuit.active_bus();
    assert!(circuit.set_active_bus("632").unwrap() >= 0);
    assert_eq!(bus.name().unwrap(), "632");
    assert_eq!(bus.nodes().unwrap(), vec![1, 2, 3]);
    circuit.set_active_bus("671").unwrap();
    assert_eq!(bus.name().unwrap(), "671");
    assert_eq!(bus.voltages().unwrap().len(), 3);
    assert_eq!(bus.selection().map(|s| s.kind), Some(EntityKind::Bus));

    assert_eq!(circuit.set_active_bus("no-such-bus").unwrap(), -1);
    assert_eq!(bus.name().unwrap(), "671");
}

#[test]
fn selecting_a_line_makes_it_the_active_element() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    let lines = circuit.lines();

    lines.set_name("632671").unwrap();
    let element = circuit.active_cktelement();
    assert_eq!(element.name().unwrap(), "Line.632671");
    assert_eq!(element.num_terminals().unwrap(), 2);
    assert_eq!(element.selection().map(|s| s.kind), Some(EntityKind::Line));

    // Another category takes over the shared active element.
    circuit.loads().set_name("611").unwrap();
    assert_eq!(element.name().unwrap(), "Load.611");
    assert_eq!(element.selection().map(|s| s.kind), Some(EntityKind::Load));
    assert!(lines.name().is_err());

    circuit.set_active_element("Line.650632").unwrap();
    assert_eq!(element.selection(), Some(Selection::new(EntityKind::Line, None)));
    assert_eq!(lines.length().unwrap(), 2.0);
}

#[test]
fn text_commands_keep_selection_in_step() {
    let dss = common::feeder();
    let text = dss.text();
    text.set_command("new line.tap bus1=671 bus2=692 length=0.1").unwrap();
    assert_eq!(
        dss.context().active_element().map(|s| s.kind),
        Some(EntityKind::Line)
    );
    assert_eq!(text.command().unwrap(), "new line.tap bus1=671 bus2=692 length=0.1");

    text.commands(&["select load.632", "~ kw=500"]).unwrap();
    assert_eq!(dss.active_circuit().loads().kw().unwrap(), 500.0);
    assert_eq!(
        dss.context().active_object().map(|s| s.kind),
        Some(EntityKind::Load)
    );

    text.set_command("? load.632.kvar").unwrap();
    assert_eq!(text.result().unwrap(), "290");

    text.set_command("clear").unwrap();
    assert_eq!(dss.context().active_object(), None);
    assert_eq!(dss.num_circuits().unwrap(), 0);
}

#[test]
fn failed_and_redirected_scripts_resync_the_active_element() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    circuit.lines().set_name("632671").unwrap();
    let element = circuit.active_cktelement();

    // The first line runs before the second one fails.
    assert!(dss.text().set_command("select load.671\nbogus").is_err());
    assert_eq!(element.name().unwrap(), "Load.671");
    assert_eq!(element.selection(), Some(Selection::new(EntityKind::Load, None)));

    let script = std::env::temp_dir().join(format!("altdss-select-{}.dss", std::process::id()));
    std::fs::write(&script, "select line.684611\n").unwrap();
    let outcome = dss.text().set_command(&format!("redirect {}", script.display()));
    std::fs::remove_file(&script).unwrap();
    outcome.unwrap();
    assert_eq!(element.name().unwrap(), "Line.684611");
    assert_eq!(element.selection().map(|s| s.kind), Some(EntityKind::Line));

    dss.text().command_block("clear").unwrap();
    assert_eq!(element.selection(), None);
}

#[test]
fn totals_follow_the_loads() {
    let dss = common::feeder();
    let circuit = dss.active_circuit();
    circuit.solution().solve().unwrap();
    let power = circuit.total_power().unwrap();
    assert_eq!(power, Complex64::new(-1725.0, -1030.0));

    circuit.disable("Load.671").unwrap();
    circuit.solution().solve().unwrap();
    assert_eq!(circuit.total_power().unwrap().re, -570.0);
    assert!(circuit.losses().unwrap().re > 0.0);
}

#[test]
fn active_object_exports_as_json() {
    let dss = common::feeder();
    dss.active_circuit().loads().set_name("671").unwrap();

    let element = dss.dss_element();
    assert_eq!(element.name().unwrap(), "Load.671");
    assert_eq!(element.num_properties().unwrap() as usize, element.all_property_names().unwrap().len());

    let json = element.to_json_value(DSSJSONFlags::empty()).unwrap();
    assert_eq!(json["DSSClass"], "Load");
    assert_eq!(json["Name"], "671");
    assert_eq!(json["kW"].as_f64(), Some(1155.0));

    let json = element
        .to_json_value(DSSJSONFlags::SKIP_DSS_CLASS | DSSJSONFlags::LOWERCASE_KEYS | DSSJSONFlags::FULL_NAMES)
        .unwrap();
    assert!(json.get("dssclass").is_none());
    assert_eq!(json["name"], "Load.671");
    assert_eq!(json["kvar"].as_f64(), Some(660.0));
}
