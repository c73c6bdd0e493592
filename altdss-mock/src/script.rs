// A small interpreter for the script subset the tests drive the mock with.

use std::fs;
use std::path::Path;

use crate::instance::{Fault, Instance, MockResult};
use crate::model::{Circuit, Class, Element, codes};

const DEFAULT_BASE_KV: f64 = 115.0;

impl Instance {
    /// Run every line of `block`, stopping at the first failure.
    pub(crate) fn execute_block(&mut self, block: &str) -> MockResult<()> {
        for line in block.lines() {
            self.execute(line)?;
        }
        Ok(())
    }

    pub(crate) fn execute(&mut self, line: &str) -> MockResult<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('!') {
            return Ok(());
        }
        self.last_command = line.to_string();
        self.last_result.clear();

        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = tokens.collect();
        match verb.as_str() {
            "clear" | "clearall" => {
                self.circuit = None;
                Ok(())
            }
            "new" => self.new_object(&rest),
            "edit" => {
                let (target, properties) = split_target(&rest)?;
                let index = self.lookup(target)?;
                self.assign(index, properties)
            }
            "select" => {
                let (target, _) = split_target(&rest)?;
                let index = self.lookup(target)?;
                self.circuit()?.activate(index);
                Ok(())
            }
            "~" | "more" | "m" => {
                let circuit = self.circuit()?;
                let Some(index) = circuit.active else {
                    return Err(Fault::new(codes::NO_ACTIVE_OBJECT, "No active object to edit"));
                };
                self.assign(index, &rest)
            }
            "?" => {
                let target = rest.first().copied().unwrap_or_default();
                let Some((object, property)) = target.rsplit_once('.') else {
                    return Err(Fault::new(codes::BAD_VALUE, format!("Invalid property reference \"{target}\"")));
                };
                let index = self.lookup(object)?;
                let value = self.circuit()?.elements[index].get(property)?;
                self.last_result = value;
                Ok(())
            }
            "solve" => {
                self.circuit()?.solved = true;
                Ok(())
            }
            "set" | "calcvoltagebases" | "calcv" => Ok(()),
            "redirect" | "compile" => {
                let path = rest.first().copied().unwrap_or_default();
                self.run_file(Path::new(path))
            }
            _ => Err(Fault::new(
                codes::UNKNOWN_COMMAND,
                format!("Unknown command: \"{verb}\""),
            )),
        }
    }

    pub(crate) fn circuit(&mut self) -> MockResult<&mut Circuit> {
        self.circuit.as_mut().ok_or_else(no_circuit)
    }

    fn run_file(&mut self, path: &Path) -> MockResult<()> {
        let script = fs::read_to_string(path).map_err(|err| {
            Fault::new(
                codes::FILE_NOT_FOUND,
                format!("Redirect file \"{}\" not found: {err}", path.display()),
            )
        })?;
        self.execute_block(&script)
    }

    fn new_object(&mut self, args: &[&str]) -> MockResult<()> {
        let (target, properties) = split_target(args)?;
        let (class, name) = target.split_once('.').ok_or_else(|| {
            Fault::new(codes::BAD_VALUE, format!("Object name \"{target}\" lacks a class"))
        })?;

        if class.eq_ignore_ascii_case("circuit") {
            let mut base_kv = DEFAULT_BASE_KV;
            for (key, value) in pairs(properties) {
                if key.eq_ignore_ascii_case("basekv") {
                    base_kv = value
                        .parse()
                        .map_err(|_| Fault::new(codes::BAD_VALUE, format!("Invalid basekv \"{value}\"")))?;
                }
            }
            self.circuit = Some(Circuit::new(name, base_kv));
            return Ok(());
        }

        let class = parse_class(class)?;
        let mut element = Element::new(class, name);
        for (key, value) in pairs(properties) {
            element.set(key, value)?;
        }
        let circuit = self.circuit()?;
        let index = circuit.define(element);
        circuit.activate(index);
        Ok(())
    }

    fn lookup(&mut self, target: &str) -> MockResult<usize> {
        let (class, name) = target.split_once('.').ok_or_else(|| {
            Fault::new(codes::BAD_VALUE, format!("Object name \"{target}\" lacks a class"))
        })?;
        let class = parse_class(class)?;
        let circuit = self.circuit()?;
        circuit.find(class, name).ok_or_else(|| {
            Fault::new(
                codes::OBJECT_NOT_FOUND,
                format!("{}.{name} not found", class.name()),
            )
        })
    }

    fn assign(&mut self, index: usize, properties: &[&str]) -> MockResult<()> {
        let circuit = self.circuit()?;
        for (key, value) in pairs(properties) {
            circuit.elements[index].set(key, value)?;
        }
        circuit.connect(index);
        circuit.activate(index);
        circuit.solved = false;
        Ok(())
    }
}

fn no_circuit() -> Fault {
    Fault::new(
        codes::NO_CIRCUIT,
        "There is no active circuit! Create a circuit and retry.",
    )
}

fn parse_class(name: &str) -> MockResult<Class> {
    Class::parse(name)
        .ok_or_else(|| Fault::new(codes::UNKNOWN_CLASS, format!("Unknown class: \"{name}\"")))
}

/// Separate the object reference from its property assignments.
fn split_target<'s>(args: &'s [&'s str]) -> MockResult<(&'s str, &'s [&'s str])> {
    let Some((first, properties)) = args.split_first() else {
        return Err(Fault::new(codes::BAD_VALUE, "Object name expected"));
    };
    let target = ["object=", "element="]
        .iter()
        .find_map(|key| {
            first
                .get(..key.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(key))
                .map(|_| &first[key.len()..])
        })
        .unwrap_or(*first);
    Ok((target, properties))
}

fn pairs<'s>(tokens: &'s [&'s str]) -> impl Iterator<Item = (&'s str, &'s str)> {
    tokens.iter().filter_map(|token| token.split_once('='))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IEEE13_MINI;

    fn loaded() -> Instance {
        let mut instance = Instance::detached();
        instance.execute_block(IEEE13_MINI).unwrap();
        instance
    }

    #[test]
    fn fixture_builds_the_feeder() {
        let mut instance = loaded();
        let circuit = instance.circuit().unwrap();
        assert_eq!(circuit.name, "ieee13mini");
        assert_eq!(circuit.of_class(Class::Line).len(), 3);
        assert_eq!(circuit.of_class(Class::Load).len(), 3);
        assert!(circuit.find_bus("632").is_some());
        assert!(circuit.find_bus("671").is_some());
    }

    #[test]
    fn continuation_edits_the_last_new_object() {
        let mut instance = loaded();
        instance.execute("new line.extra bus1=671 bus2=680").unwrap();
        instance.execute("~ length=0.5").unwrap();
        instance.execute("? line.extra.length").unwrap();
        assert_eq!(instance.last_result, "0.5");
    }

    #[test]
    fn commands_without_circuit_fail() {
        let mut instance = Instance::detached();
        let fault = instance.execute("new line.l1 bus1=a bus2=b").unwrap_err();
        assert_eq!(fault.code, codes::NO_CIRCUIT);
    }

    #[test]
    fn unknown_verbs_and_classes_are_reported() {
        let mut instance = loaded();
        assert_eq!(instance.execute("frobnicate").unwrap_err().code, codes::UNKNOWN_COMMAND);
        assert_eq!(instance.execute("new widget.w1").unwrap_err().code, codes::UNKNOWN_CLASS);
        assert_eq!(instance.execute("select line.nope").unwrap_err().code, codes::OBJECT_NOT_FOUND);
    }

    #[test]
    fn missing_redirect_file_is_reported() {
        let mut instance = Instance::detached();
        let fault = instance.execute("redirect /nonexistent/feeder.dss").unwrap_err();
        assert_eq!(fault.code, codes::FILE_NOT_FOUND);
    }
}
