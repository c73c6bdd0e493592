// The circuit a mock instance holds: buses, a handful of element classes and
// the per-class cursors the engine keeps.

use std::f64::consts::PI;

use crate::instance::{Fault, MockResult};

pub(crate) mod codes {
    pub const NO_CIRCUIT: i32 = 8888;
    pub const NO_ACTIVE_OBJECT: i32 = 8989;
    pub const NO_ACTIVE_BUS: i32 = 8990;
    pub const INVALID_INDEX: i32 = 8991;
    pub const OBJECT_NOT_FOUND: i32 = 302;
    pub const UNKNOWN_COMMAND: i32 = 260;
    pub const UNKNOWN_CLASS: i32 = 263;
    pub const UNKNOWN_PROPERTY: i32 = 110;
    pub const BAD_VALUE: i32 = 111;
    pub const FILE_NOT_FOUND: i32 = 242;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Class {
    Vsource,
    Line,
    Load,
}

impl Class {
    const ALL: [Class; 3] = [Class::Vsource, Class::Line, Class::Load];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Class::Vsource => "Vsource",
            Class::Line => "Line",
            Class::Load => "Load",
        }
    }

    pub(crate) fn parse(name: &str) -> Option<Class> {
        Class::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
    }

    fn slot(self) -> usize {
        self as usize
    }

    /// Class names reported by `ctx_DSS_Get_Classes`.
    pub(crate) fn names() -> Vec<String> {
        Class::ALL.iter().map(|c| c.name().to_string()).collect()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub(crate) class: Class,
    pub(crate) name: String,
    pub(crate) buses: Vec<String>,
    pub(crate) phases: i32,
    pub(crate) enabled: bool,
    pub(crate) length: f64,
    pub(crate) kw: f64,
    pub(crate) kvar: f64,
}

impl Element {
    pub(crate) fn new(class: Class, name: &str) -> Element {
        let terminals = if class == Class::Line { 2 } else { 1 };
        Element {
            class,
            name: name.to_ascii_lowercase(),
            buses: vec![String::new(); terminals],
            phases: 3,
            enabled: true,
            length: 1.0,
            kw: 10.0,
            kvar: 5.0,
        }
    }

    pub(crate) fn full_name(&self) -> String {
        format!("{}.{}", self.class.name(), self.name)
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) -> MockResult<()> {
        match key.to_ascii_lowercase().as_str() {
            "bus1" => self.buses[0] = value.to_string(),
            "bus2" if self.buses.len() > 1 => self.buses[1] = value.to_string(),
            "phases" => self.phases = parse(key, value)?,
            "length" if self.class == Class::Line => self.length = parse(key, value)?,
            "kw" if self.class == Class::Load => self.kw = parse(key, value)?,
            "kvar" if self.class == Class::Load => self.kvar = parse(key, value)?,
            "enabled" => self.enabled = matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "y"),
            _ => {
                return Err(Fault::new(
                    codes::UNKNOWN_PROPERTY,
                    format!("Unknown parameter \"{key}\" for object \"{}\"", self.full_name()),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn property_names(&self) -> Vec<&'static str> {
        let mut names = vec!["bus1"];
        if self.buses.len() > 1 {
            names.push("bus2");
        }
        names.push("phases");
        match self.class {
            Class::Line => names.push("length"),
            Class::Load => names.extend(["kW", "kvar"]),
            Class::Vsource => {}
        }
        names.push("enabled");
        names
    }

    /// Property value as the `?` command prints it.
    pub(crate) fn get(&self, key: &str) -> MockResult<String> {
        let value = match key.to_ascii_lowercase().as_str() {
            "bus1" => self.buses[0].clone(),
            "bus2" if self.buses.len() > 1 => self.buses[1].clone(),
            "phases" => self.phases.to_string(),
            "length" if self.class == Class::Line => self.length.to_string(),
            "kw" if self.class == Class::Load => self.kw.to_string(),
            "kvar" if self.class == Class::Load => self.kvar.to_string(),
            "enabled" => if self.enabled { "true" } else { "false" }.to_string(),
            _ => {
                return Err(Fault::new(
                    codes::UNKNOWN_PROPERTY,
                    format!("Unknown parameter \"{key}\" for object \"{}\"", self.full_name()),
                ));
            }
        };
        Ok(value)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> MockResult<T> {
    value
        .parse()
        .map_err(|_| Fault::new(codes::BAD_VALUE, format!("Invalid value \"{value}\" for {key}")))
}

#[derive(Clone, Debug)]
pub(crate) struct Bus {
    pub(crate) name: String,
    pub(crate) nodes: Vec<i32>,
}

/// Split `632.1.2.3` into the bus name and its node list.
fn bus_spec(spec: &str, phases: i32) -> (String, Vec<i32>) {
    let mut parts = spec.split('.');
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let nodes: Vec<i32> = parts.filter_map(|p| p.parse().ok()).filter(|n| *n > 0).collect();
    if nodes.is_empty() {
        (name, (1..=phases.max(1)).collect())
    } else {
        (name, nodes)
    }
}

pub(crate) struct Circuit {
    pub(crate) name: String,
    pub(crate) base_kv: f64,
    pub(crate) buses: Vec<Bus>,
    pub(crate) elements: Vec<Element>,
    /// The active circuit element, shared by every class.
    pub(crate) active: Option<usize>,
    pub(crate) active_bus: Option<usize>,
    cursors: [Option<usize>; 3],
    pub(crate) solved: bool,
}

impl Circuit {
    pub(crate) fn new(name: &str, base_kv: f64) -> Circuit {
        let mut circuit = Circuit {
            name: name.to_ascii_lowercase(),
            base_kv,
            buses: Vec::new(),
            elements: Vec::new(),
            active: None,
            active_bus: None,
            cursors: [None; 3],
            solved: false,
        };
        let mut source = Element::new(Class::Vsource, "source");
        source.buses[0] = "sourcebus".to_string();
        let index = circuit.define(source);
        circuit.activate(index);
        circuit
    }

    /// Add `element`, or replace the definition of an existing one.
    pub(crate) fn define(&mut self, element: Element) -> usize {
        let index = match self.find(element.class, &element.name) {
            Some(existing) => {
                self.elements[existing] = element;
                existing
            }
            None => {
                self.elements.push(element);
                self.elements.len() - 1
            }
        };
        self.connect(index);
        self.solved = false;
        index
    }

    /// Register the buses an element touches.
    pub(crate) fn connect(&mut self, index: usize) {
        let element = &self.elements[index];
        let specs: Vec<(String, Vec<i32>)> = element
            .buses
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| bus_spec(b, element.phases))
            .collect();
        for (name, nodes) in specs {
            match self.find_bus(&name) {
                Some(bus) => {
                    let known = &mut self.buses[bus].nodes;
                    for node in nodes {
                        if !known.contains(&node) {
                            known.push(node);
                        }
                    }
                    known.sort_unstable();
                }
                None => self.buses.push(Bus { name, nodes }),
            }
        }
    }

    pub(crate) fn activate(&mut self, index: usize) {
        self.active = Some(index);
        self.cursors[self.elements[index].class.slot()] = Some(index);
    }

    pub(crate) fn find(&self, class: Class, name: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.class == class && e.name.eq_ignore_ascii_case(name))
    }

    pub(crate) fn find_full(&self, full_name: &str) -> Option<usize> {
        let (class, name) = full_name.split_once('.')?;
        self.find(Class::parse(class)?, name)
    }

    pub(crate) fn find_bus(&self, name: &str) -> Option<usize> {
        let name = name.split('.').next().unwrap_or_default();
        self.buses.iter().position(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Element indices of `class`, in definition order.
    pub(crate) fn of_class(&self, class: Class) -> Vec<usize> {
        (0..self.elements.len())
            .filter(|i| self.elements[*i].class == class)
            .collect()
    }

    fn visible(&self, class: Class, iterate_disabled: bool) -> Vec<usize> {
        self.of_class(class)
            .into_iter()
            .filter(|i| iterate_disabled || self.elements[*i].enabled)
            .collect()
    }

    pub(crate) fn count(&self, class: Class, iterate_disabled: bool) -> i32 {
        self.visible(class, iterate_disabled).len() as i32
    }

    /// Move the class cursor to its first element. 0 when there is none.
    pub(crate) fn first(&mut self, class: Class, iterate_disabled: bool) -> i32 {
        match self.visible(class, iterate_disabled).first() {
            Some(&index) => {
                self.activate(index);
                self.class_index(index)
            }
            None => 0,
        }
    }

    pub(crate) fn next(&mut self, class: Class, iterate_disabled: bool) -> i32 {
        let Some(current) = self.cursors[class.slot()] else {
            return 0;
        };
        let following = self
            .visible(class, iterate_disabled)
            .into_iter()
            .find(|i| *i > current);
        match following {
            Some(index) => {
                self.activate(index);
                self.class_index(index)
            }
            None => 0,
        }
    }

    /// 1-based position of an element within its class.
    pub(crate) fn class_index(&self, index: usize) -> i32 {
        let class = self.elements[index].class;
        self.of_class(class)
            .iter()
            .position(|i| *i == index)
            .map_or(0, |p| p as i32 + 1)
    }

    /// The active element, required to be of `class`.
    pub(crate) fn active_of(&self, class: Class) -> MockResult<usize> {
        match self.active {
            Some(index) if self.elements[index].class == class => Ok(index),
            _ => Err(Fault::new(
                codes::NO_ACTIVE_OBJECT,
                format!("No active {} object found! Activate one and retry.", class.name()),
            )),
        }
    }

    pub(crate) fn select(&mut self, class: Class, name: &str) -> MockResult<()> {
        match self.find(class, name) {
            Some(index) => {
                self.activate(index);
                Ok(())
            }
            None => Err(Fault::new(
                codes::OBJECT_NOT_FOUND,
                format!("{} \"{name}\" not found in Active Circuit.", class.name()),
            )),
        }
    }

    pub(crate) fn select_index(&mut self, class: Class, index: i32) -> MockResult<()> {
        let members = self.of_class(class);
        match usize::try_from(index - 1).ok().and_then(|i| members.get(i)) {
            Some(&element) => {
                self.activate(element);
                Ok(())
            }
            None => Err(Fault::new(
                codes::INVALID_INDEX,
                format!("Invalid {} index: \"{index}\".", class.name()),
            )),
        }
    }

    pub(crate) fn active_bus(&self) -> MockResult<&Bus> {
        self.active_bus
            .and_then(|i| self.buses.get(i))
            .ok_or_else(|| Fault::new(codes::NO_ACTIVE_BUS, "No active bus found! Activate one and retry."))
    }

    // ---- Node views ----

    pub(crate) fn num_nodes(&self) -> i32 {
        self.buses.iter().map(|b| b.nodes.len() as i32).sum()
    }

    pub(crate) fn node_names(&self) -> Vec<String> {
        self.buses
            .iter()
            .flat_map(|b| b.nodes.iter().map(move |n| format!("{}.{n}", b.name)))
            .collect()
    }

    /// Complex voltage of one node as (re, im). Zero until solved.
    pub(crate) fn node_voltage(&self, bus: usize, node: i32) -> (f64, f64) {
        if !self.solved {
            return (0.0, 0.0);
        }
        let magnitude = self.base_kv * 1000.0 / 3f64.sqrt() * (1.0 - 0.01 * bus as f64);
        let angle = -2.0 * PI / 3.0 * f64::from(node - 1);
        (magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Complex voltage of every node, flattened as re, im pairs.
    pub(crate) fn node_voltages(&self) -> Vec<f64> {
        self.bus_voltages(0..self.buses.len())
    }

    pub(crate) fn bus_voltages(&self, buses: impl Iterator<Item = usize>) -> Vec<f64> {
        buses
            .flat_map(|b| self.buses[b].nodes.iter().map(move |n| (b, *n)))
            .flat_map(|(b, n)| {
                let (re, im) = self.node_voltage(b, n);
                [re, im]
            })
            .collect()
    }

    pub(crate) fn total_power(&self) -> (f64, f64) {
        if !self.solved {
            return (0.0, 0.0);
        }
        self.elements
            .iter()
            .filter(|e| e.class == Class::Load && e.enabled)
            .fold((0.0, 0.0), |(p, q), load| (p - load.kw, q - load.kvar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feeder() -> Circuit {
        let mut circuit = Circuit::new("feeder", 4.16);
        let mut line = Element::new(Class::Line, "l1");
        line.buses = vec!["sourcebus".into(), "632.1.2.3".into()];
        circuit.define(line);
        let mut load = Element::new(Class::Load, "ld");
        load.buses[0] = "632.1".into();
        load.phases = 1;
        circuit.define(load);
        circuit
    }

    #[test]
    fn buses_collect_nodes_from_every_connection() {
        let circuit = feeder();
        assert_eq!(circuit.buses.len(), 2);
        assert_eq!(circuit.num_nodes(), 6);
        assert_eq!(circuit.node_names()[3], "632.1");
    }

    #[test]
    fn cursors_skip_disabled_elements() {
        let mut circuit = feeder();
        let mut second = Element::new(Class::Line, "l2");
        second.enabled = false;
        circuit.define(second);
        assert_eq!(circuit.count(Class::Line, false), 1);
        assert_eq!(circuit.first(Class::Line, false), 1);
        assert_eq!(circuit.next(Class::Line, false), 0);
        assert_eq!(circuit.first(Class::Line, true), 1);
        assert_eq!(circuit.next(Class::Line, true), 2);
    }

    #[test]
    fn selecting_a_load_deactivates_lines() {
        let mut circuit = feeder();
        circuit.select(Class::Line, "L1").unwrap();
        assert!(circuit.active_of(Class::Line).is_ok());
        circuit.select(Class::Load, "ld").unwrap();
        assert_eq!(circuit.active_of(Class::Line).unwrap_err().code, codes::NO_ACTIVE_OBJECT);
    }

    #[test]
    fn redefinition_keeps_position() {
        let mut circuit = feeder();
        let again = Element::new(Class::Line, "L1");
        assert_eq!(circuit.define(again), 1);
        assert_eq!(circuit.of_class(Class::Line).len(), 1);
    }
}
