// C entry points of the mock engine, and the name lookup the binding's
// tables resolve through.
//
// Every export runs its body under `catch_unwind`; a panic or fault is
// recorded in the instance's error cell and the export returns a neutral
// value, the way the real engine reports failures.

use std::ffi::{CStr, c_char, c_void};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;
use std::sync::{Mutex, PoisonError};

use altdss_ffi::{ContextHandle, DssBool, DssMessageCallback, message_type, to_dss_bool};

use crate::instance::{self, Fault, Instance, MockResult};
use crate::model::{Class, Element, codes};

const PANIC: i32 = 9999;

static CALLBACKS: Mutex<Vec<DssMessageCallback>> = Mutex::new(Vec::new());

// ---------------------------------------------------------------------------
// Helpers: catch panics, record faults
// ---------------------------------------------------------------------------

fn run<R>(ctx: ContextHandle, default: R, f: impl FnOnce(&mut Instance) -> MockResult<R>) -> R {
    let Some(instance) = (unsafe { Instance::from_handle(ctx) }) else {
        return default;
    };
    let fault = match catch_unwind(AssertUnwindSafe(|| f(&mut *instance))) {
        Ok(Ok(value)) => return value,
        Ok(Err(fault)) => fault,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Fault::new(PANIC, format!("internal error: {message}"))
        }
    };
    instance.fail(&fault);
    emit(ctx, &fault.message, message_type::ERROR);
    default
}

fn run_str(ctx: ContextHandle, f: impl FnOnce(&mut Instance) -> MockResult<String>) -> *const c_char {
    let value = run(ctx, String::new(), f);
    match unsafe { Instance::from_handle(ctx) } {
        Some(instance) => instance.hold_string(&value),
        None => ptr::null(),
    }
}

unsafe fn run_strings(
    ctx: ContextHandle,
    result: *mut *mut *mut c_char,
    count: *mut i32,
    f: impl FnOnce(&mut Instance) -> MockResult<Vec<String>>,
) {
    let values = run(ctx, Vec::new(), f);
    if result.is_null() || count.is_null() {
        return;
    }
    unsafe { instance::fill_string_array(&values, result, count) };
}

fn run_f64s(ctx: ContextHandle, f: impl FnOnce(&mut Instance) -> MockResult<Vec<f64>>) {
    let values = run(ctx, Vec::new(), f);
    if let Some(instance) = unsafe { Instance::from_handle(ctx) } {
        instance.f64s.store(values);
    }
}

fn run_i32s(ctx: ContextHandle, f: impl FnOnce(&mut Instance) -> MockResult<Vec<i32>>) {
    let values = run(ctx, Vec::new(), f);
    if let Some(instance) = unsafe { Instance::from_handle(ctx) } {
        instance.i32s.store(values);
    }
}

fn emit(ctx: ContextHandle, message: &str, kind: i32) {
    let callbacks = CALLBACKS.lock().unwrap_or_else(PoisonError::into_inner).clone();
    if callbacks.is_empty() {
        return;
    }
    let text = instance::to_c(message);
    for callback in callbacks {
        unsafe { callback(ctx, text.as_ptr(), kind, message.len() as i64, 0) };
    }
}

unsafe fn read_str(value: *const c_char) -> String {
    if value.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(value) }.to_string_lossy().into_owned()
}

fn no_element() -> Fault {
    Fault::new(codes::NO_ACTIVE_OBJECT, "No active circuit element found! Activate one and retry.")
}

fn active_element(instance: &mut Instance) -> MockResult<&mut Element> {
    let circuit = instance.circuit()?;
    let index = circuit.active.ok_or_else(no_element)?;
    Ok(&mut circuit.elements[index])
}

/// Callbacks currently registered with `DSS_RegisterMessageCallback`.
pub fn registered_callbacks() -> usize {
    CALLBACKS.lock().unwrap_or_else(PoisonError::into_inner).len()
}

// ---------------------------------------------------------------------------
// Lifecycle and memory
// ---------------------------------------------------------------------------

unsafe extern "C" fn ctx_new() -> ContextHandle {
    Instance::allocate()
}

unsafe extern "C" fn ctx_dispose(ctx: ContextHandle) {
    unsafe { Instance::release(ctx) }
}

unsafe extern "C" fn ctx_get_prime() -> ContextHandle {
    Instance::prime()
}

unsafe extern "C" fn ctx_set_prime(ctx: ContextHandle) -> ContextHandle {
    Instance::replace_prime(ctx)
}

unsafe extern "C" fn dispose_pp_ansi_char(data: *mut *mut *mut c_char, capacity: i32) {
    unsafe { instance::dispose_string_array(data, capacity) }
}

unsafe extern "C" fn register_message_callback(callback: Option<DssMessageCallback>) {
    if let Some(callback) = callback {
        let mut callbacks = CALLBACKS.lock().unwrap_or_else(PoisonError::into_inner);
        if !callbacks.iter().any(|known| ptr::fn_addr_eq(*known, callback)) {
            callbacks.push(callback);
        }
    }
}

unsafe extern "C" fn unregister_message_callback(callback: Option<DssMessageCallback>) {
    if let Some(callback) = callback {
        CALLBACKS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|known| !ptr::fn_addr_eq(*known, callback));
    }
}

// ---------------------------------------------------------------------------
// DSS interface
// ---------------------------------------------------------------------------

unsafe extern "C" fn dss_start(ctx: ContextHandle, _code: i32) -> DssBool {
    run(ctx, 0, |_| Ok(1))
}

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn dss_get_gr_pointers(
    ctx: ContextHandle,
    data_string: *mut *mut *mut *mut c_char,
    data_f64: *mut *mut *mut f64,
    data_i32: *mut *mut *mut i32,
    data_i8: *mut *mut *mut i8,
    count_string: *mut *mut i32,
    count_f64: *mut *mut i32,
    count_i32: *mut *mut i32,
    count_i8: *mut *mut i32,
) {
    if let Some(instance) = unsafe { Instance::from_handle(ctx) } {
        unsafe {
            instance.publish_pointers(
                data_string, data_f64, data_i32, data_i8, count_string, count_f64, count_i32,
                count_i8,
            )
        };
    }
}

unsafe extern "C" fn dss_clear_all(ctx: ContextHandle) {
    run(ctx, (), |instance| {
        instance.circuit = None;
        Ok(())
    })
}

unsafe extern "C" fn dss_reset(ctx: ContextHandle) {
    run(ctx, (), |instance| {
        if let Some(circuit) = instance.circuit.as_mut() {
            circuit.solved = false;
        }
        Ok(())
    })
}

unsafe extern "C" fn dss_new_circuit(ctx: ContextHandle, name: *const c_char) {
    let name = unsafe { read_str(name) };
    run(ctx, (), |instance| instance.execute(&format!("new circuit.{name}")))
}

unsafe extern "C" fn dss_get_version(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |_| Ok(crate::VERSION.to_string()))
}

unsafe extern "C" fn dss_get_classes(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32) {
    unsafe { run_strings(ctx, result, count, |_| Ok(Class::names())) }
}

unsafe extern "C" fn dss_get_num_circuits(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(i32::from(instance.circuit.is_some())))
}

unsafe extern "C" fn dss_get_allow_forms(ctx: ContextHandle) -> DssBool {
    run(ctx, 0, |instance| Ok(to_dss_bool(instance.allow_forms)))
}

unsafe extern "C" fn dss_set_allow_forms(ctx: ContextHandle, value: DssBool) {
    run(ctx, (), |instance| {
        instance.allow_forms = value != 0;
        Ok(())
    })
}

unsafe extern "C" fn dss_get_legacy_models(ctx: ContextHandle) -> DssBool {
    run(ctx, 0, |instance| Ok(to_dss_bool(instance.legacy_models)))
}

unsafe extern "C" fn dss_set_legacy_models(ctx: ContextHandle, value: DssBool) {
    run(ctx, (), |instance| {
        instance.legacy_models = value != 0;
        Ok(())
    })
}

unsafe extern "C" fn dss_get_compat_flags(ctx: ContextHandle) -> u32 {
    run(ctx, 0, |instance| Ok(instance.compat_flags))
}

unsafe extern "C" fn dss_set_compat_flags(ctx: ContextHandle, value: u32) {
    run(ctx, (), |instance| {
        instance.compat_flags = value;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Error channel
// ---------------------------------------------------------------------------

unsafe extern "C" fn error_get_number_ptr(ctx: ContextHandle) -> *mut i32 {
    match unsafe { Instance::from_handle(ctx) } {
        Some(instance) => instance.error_cell(),
        None => ptr::null_mut(),
    }
}

unsafe extern "C" fn error_get_number(ctx: ContextHandle) -> i32 {
    match unsafe { Instance::from_handle(ctx) } {
        Some(instance) => instance.take_error_number(),
        None => 0,
    }
}

unsafe extern "C" fn error_get_description(ctx: ContextHandle) -> *const c_char {
    match unsafe { Instance::from_handle(ctx) } {
        Some(instance) => instance.error_description(),
        None => ptr::null(),
    }
}

unsafe extern "C" fn error_get_extended_errors(ctx: ContextHandle) -> DssBool {
    run(ctx, 0, |instance| Ok(to_dss_bool(instance.extended_errors)))
}

unsafe extern "C" fn error_set_extended_errors(ctx: ContextHandle, value: DssBool) {
    run(ctx, (), |instance| {
        instance.extended_errors = value != 0;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

unsafe extern "C" fn text_get_command(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(instance.last_command.clone()))
}

unsafe extern "C" fn text_set_command(ctx: ContextHandle, value: *const c_char) {
    let block = unsafe { read_str(value) };
    run(ctx, (), |instance| instance.execute_block(&block))
}

unsafe extern "C" fn text_get_result(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(instance.last_result.clone()))
}

unsafe extern "C" fn text_command_array(ctx: ContextHandle, value: *const *const c_char, count: i32) {
    let lines: Vec<String> = (0..count.max(0) as usize)
        .map(|i| unsafe { read_str(*value.add(i)) })
        .collect();
    run(ctx, (), |instance| {
        lines.iter().try_for_each(|line| instance.execute(line))
    })
}

// ---------------------------------------------------------------------------
// Circuit
// ---------------------------------------------------------------------------

unsafe extern "C" fn circuit_get_name(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(instance.circuit()?.name.clone()))
}

unsafe extern "C" fn circuit_get_num_nodes(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(instance.circuit()?.num_nodes()))
}

unsafe extern "C" fn circuit_get_num_buses(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(instance.circuit()?.buses.len() as i32))
}

unsafe extern "C" fn circuit_get_all_bus_names(
    ctx: ContextHandle,
    result: *mut *mut *mut c_char,
    count: *mut i32,
) {
    unsafe {
        run_strings(ctx, result, count, |instance| {
            Ok(instance.circuit()?.buses.iter().map(|b| b.name.clone()).collect())
        })
    }
}

unsafe extern "C" fn circuit_get_all_node_names(
    ctx: ContextHandle,
    result: *mut *mut *mut c_char,
    count: *mut i32,
) {
    unsafe { run_strings(ctx, result, count, |instance| Ok(instance.circuit()?.node_names())) }
}

unsafe extern "C" fn circuit_get_all_bus_vmag_gr(ctx: ContextHandle) {
    run_f64s(ctx, |instance| {
        let voltages = instance.circuit()?.node_voltages();
        Ok(voltages.chunks_exact(2).map(|v| v[0].hypot(v[1])).collect())
    })
}

unsafe extern "C" fn circuit_get_all_bus_volts_gr(ctx: ContextHandle) {
    run_f64s(ctx, |instance| Ok(instance.circuit()?.node_voltages()))
}

unsafe extern "C" fn circuit_get_losses_gr(ctx: ContextHandle) {
    run_f64s(ctx, |instance| {
        let (p, q) = instance.circuit()?.total_power();
        // Watts and vars: a flat 2% / 4% of the load.
        Ok(vec![-p * 20.0, -q * 40.0])
    })
}

unsafe extern "C" fn circuit_get_total_power_gr(ctx: ContextHandle) {
    run_f64s(ctx, |instance| {
        let (p, q) = instance.circuit()?.total_power();
        Ok(vec![p, q])
    })
}

unsafe extern "C" fn circuit_get_substation_losses_gr(ctx: ContextHandle) {
    // No energy meter marks a substation, so there is nothing to report.
    run_f64s(ctx, |instance| {
        instance.circuit()?;
        Ok(Vec::new())
    })
}

unsafe extern "C" fn circuit_set_active_bus(ctx: ContextHandle, name: *const c_char) -> i32 {
    let name = unsafe { read_str(name) };
    run(ctx, -1, |instance| {
        let circuit = instance.circuit()?;
        Ok(match circuit.find_bus(&name) {
            Some(index) => {
                circuit.active_bus = Some(index);
                index as i32
            }
            None => -1,
        })
    })
}

unsafe extern "C" fn circuit_set_active_busi(ctx: ContextHandle, index: i32) -> i32 {
    run(ctx, -1, |instance| {
        let circuit = instance.circuit()?;
        match usize::try_from(index) {
            Ok(i) if i < circuit.buses.len() => {
                circuit.active_bus = Some(i);
                Ok(0)
            }
            _ => Ok(-1),
        }
    })
}

unsafe extern "C" fn circuit_set_active_element(ctx: ContextHandle, full_name: *const c_char) -> i32 {
    let full_name = unsafe { read_str(full_name) };
    run(ctx, -1, |instance| {
        let circuit = instance.circuit()?;
        Ok(match circuit.find_full(&full_name) {
            Some(index) => {
                circuit.activate(index);
                index as i32
            }
            None => -1,
        })
    })
}

fn set_enabled(ctx: ContextHandle, full_name: *const c_char, enabled: bool) {
    let full_name = unsafe { read_str(full_name) };
    run(ctx, (), |instance| {
        let circuit = instance.circuit()?;
        let index = circuit.find_full(&full_name).ok_or_else(|| {
            Fault::new(codes::OBJECT_NOT_FOUND, format!("Element \"{full_name}\" not found"))
        })?;
        circuit.elements[index].enabled = enabled;
        circuit.solved = false;
        Ok(())
    })
}

unsafe extern "C" fn circuit_disable(ctx: ContextHandle, name: *const c_char) {
    set_enabled(ctx, name, false)
}

unsafe extern "C" fn circuit_enable(ctx: ContextHandle, name: *const c_char) {
    set_enabled(ctx, name, true)
}

// ---------------------------------------------------------------------------
// Bus
// ---------------------------------------------------------------------------

unsafe extern "C" fn bus_get_name(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(instance.circuit()?.active_bus()?.name.clone()))
}

unsafe extern "C" fn bus_get_num_nodes(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(instance.circuit()?.active_bus()?.nodes.len() as i32))
}

unsafe extern "C" fn bus_get_kv_base(ctx: ContextHandle) -> f64 {
    run(ctx, 0.0, |instance| {
        let circuit = instance.circuit()?;
        circuit.active_bus()?;
        Ok(circuit.base_kv / 3f64.sqrt())
    })
}

unsafe extern "C" fn bus_get_nodes_gr(ctx: ContextHandle) {
    run_i32s(ctx, |instance| Ok(instance.circuit()?.active_bus()?.nodes.clone()))
}

unsafe extern "C" fn bus_get_voltages_gr(ctx: ContextHandle) {
    run_f64s(ctx, |instance| {
        let circuit = instance.circuit()?;
        circuit.active_bus()?;
        Ok(circuit.bus_voltages(circuit.active_bus.into_iter()))
    })
}

// ---------------------------------------------------------------------------
// Active circuit element
// ---------------------------------------------------------------------------

unsafe extern "C" fn cktelement_get_name(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(active_element(instance)?.full_name()))
}

unsafe extern "C" fn cktelement_get_num_phases(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(active_element(instance)?.phases))
}

unsafe extern "C" fn cktelement_get_num_terminals(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(active_element(instance)?.buses.len() as i32))
}

unsafe extern "C" fn cktelement_get_bus_names(
    ctx: ContextHandle,
    result: *mut *mut *mut c_char,
    count: *mut i32,
) {
    unsafe { run_strings(ctx, result, count, |instance| Ok(active_element(instance)?.buses.clone())) }
}

unsafe extern "C" fn cktelement_set_bus_names(ctx: ContextHandle, value: *const *const c_char, count: i32) {
    let names: Vec<String> = (0..count.max(0) as usize)
        .map(|i| unsafe { read_str(*value.add(i)) })
        .collect();
    run(ctx, (), |instance| {
        let circuit = instance.circuit()?;
        let index = circuit.active.ok_or_else(no_element)?;
        let element = &mut circuit.elements[index];
        for (slot, name) in element.buses.iter_mut().zip(names) {
            *slot = name;
        }
        circuit.connect(index);
        Ok(())
    })
}

unsafe extern "C" fn cktelement_get_enabled(ctx: ContextHandle) -> DssBool {
    run(ctx, 0, |instance| Ok(to_dss_bool(active_element(instance)?.enabled)))
}

unsafe extern "C" fn cktelement_set_enabled(ctx: ContextHandle, value: DssBool) {
    run(ctx, (), |instance| {
        active_element(instance)?.enabled = value != 0;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Active DSS object
// ---------------------------------------------------------------------------

const JSON_FULL_NAMES: i32 = 0x08;
const JSON_PRETTY: i32 = 0x10;
const JSON_SKIP_DSS_CLASS: i32 = 0x40;
const JSON_LOWERCASE_KEYS: i32 = 0x80;

fn element_json(element: &Element, options: i32) -> MockResult<String> {
    let key = |name: &str| {
        if options & JSON_LOWERCASE_KEYS != 0 {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    };
    let mut object = serde_json::Map::new();
    if options & JSON_SKIP_DSS_CLASS == 0 {
        object.insert(key("DSSClass"), element.class.name().into());
    }
    let name = if options & JSON_FULL_NAMES != 0 {
        element.full_name()
    } else {
        element.name.clone()
    };
    object.insert(key("Name"), name.into());
    for property in element.property_names() {
        let raw = element.get(property)?;
        let value = match raw.parse::<f64>() {
            Ok(number) => serde_json::json!(number),
            Err(_) => serde_json::Value::String(raw),
        };
        object.insert(key(property), value);
    }
    let object = serde_json::Value::Object(object);
    let text = if options & JSON_PRETTY != 0 {
        serde_json::to_string_pretty(&object)
    } else {
        serde_json::to_string(&object)
    };
    text.map_err(|err| Fault::new(codes::BAD_VALUE, err.to_string()))
}

unsafe extern "C" fn dss_element_get_name(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(active_element(instance)?.full_name()))
}

unsafe extern "C" fn dss_element_get_num_properties(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(active_element(instance)?.property_names().len() as i32))
}

unsafe extern "C" fn dss_element_get_all_property_names(
    ctx: ContextHandle,
    result: *mut *mut *mut c_char,
    count: *mut i32,
) {
    unsafe {
        run_strings(ctx, result, count, |instance| {
            let names = active_element(instance)?.property_names();
            Ok(names.into_iter().map(String::from).collect())
        })
    }
}

unsafe extern "C" fn dss_element_to_json(ctx: ContextHandle, options: i32) -> *const c_char {
    run_str(ctx, |instance| element_json(active_element(instance)?, options))
}

// ---------------------------------------------------------------------------
// Settings and solution
// ---------------------------------------------------------------------------

unsafe extern "C" fn settings_get_iterate_disabled(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(i32::from(instance.iterate_disabled)))
}

unsafe extern "C" fn settings_set_iterate_disabled(ctx: ContextHandle, value: i32) {
    run(ctx, (), |instance| {
        instance.iterate_disabled = value != 0;
        Ok(())
    })
}

unsafe extern "C" fn solution_solve(ctx: ContextHandle) {
    run(ctx, (), |instance| {
        instance.circuit()?.solved = true;
        Ok(())
    })
}

unsafe extern "C" fn solution_get_mode(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(instance.solve_mode))
}

unsafe extern "C" fn solution_set_mode(ctx: ContextHandle, value: i32) {
    run(ctx, (), |instance| {
        instance.circuit()?;
        instance.solve_mode = value;
        Ok(())
    })
}

unsafe extern "C" fn solution_get_converged(ctx: ContextHandle) -> DssBool {
    run(ctx, 0, |instance| Ok(to_dss_bool(instance.circuit()?.solved)))
}

// ---------------------------------------------------------------------------
// Element collections
// ---------------------------------------------------------------------------

fn all_names(instance: &mut Instance, class: Class) -> MockResult<Vec<String>> {
    let circuit = instance.circuit()?;
    Ok(circuit
        .of_class(class)
        .into_iter()
        .map(|i| circuit.elements[i].name.clone())
        .collect())
}

fn class_element(instance: &mut Instance, class: Class) -> MockResult<&mut Element> {
    let circuit = instance.circuit()?;
    let index = circuit.active_of(class)?;
    Ok(&mut circuit.elements[index])
}

fn step(instance: &mut Instance, class: Class, first: bool) -> MockResult<i32> {
    let iterate_disabled = instance.iterate_disabled;
    let circuit = instance.circuit()?;
    Ok(if first {
        circuit.first(class, iterate_disabled)
    } else {
        circuit.next(class, iterate_disabled)
    })
}

fn active_idx(instance: &mut Instance, class: Class) -> MockResult<i32> {
    let circuit = instance.circuit()?;
    Ok(match circuit.active {
        Some(index) if circuit.elements[index].class == class => circuit.class_index(index),
        _ => 0,
    })
}

/// The common collection entry points for one class.
macro_rules! collection_exports {
    ($module:ident, $class:expr) => {
        mod $module {
            use super::*;

            pub(super) unsafe extern "C" fn get_all_names(
                ctx: ContextHandle,
                result: *mut *mut *mut c_char,
                count: *mut i32,
            ) {
                unsafe { run_strings(ctx, result, count, |instance| all_names(instance, $class)) }
            }

            pub(super) unsafe extern "C" fn get_count(ctx: ContextHandle) -> i32 {
                run(ctx, 0, |instance| {
                    let iterate_disabled = instance.iterate_disabled;
                    Ok(instance.circuit()?.count($class, iterate_disabled))
                })
            }

            pub(super) unsafe extern "C" fn get_first(ctx: ContextHandle) -> i32 {
                run(ctx, 0, |instance| step(instance, $class, true))
            }

            pub(super) unsafe extern "C" fn get_next(ctx: ContextHandle) -> i32 {
                run(ctx, 0, |instance| step(instance, $class, false))
            }

            pub(super) unsafe extern "C" fn get_name(ctx: ContextHandle) -> *const c_char {
                run_str(ctx, |instance| Ok(class_element(instance, $class)?.name.clone()))
            }

            pub(super) unsafe extern "C" fn set_name(ctx: ContextHandle, value: *const c_char) {
                let name = unsafe { read_str(value) };
                run(ctx, (), |instance| instance.circuit()?.select($class, &name))
            }

            pub(super) unsafe extern "C" fn get_idx(ctx: ContextHandle) -> i32 {
                run(ctx, 0, |instance| active_idx(instance, $class))
            }

            pub(super) unsafe extern "C" fn set_idx(ctx: ContextHandle, value: i32) {
                run(ctx, (), |instance| instance.circuit()?.select_index($class, value))
            }
        }
    };
}

collection_exports!(lines, Class::Line);
collection_exports!(loads, Class::Load);

unsafe extern "C" fn lines_get_bus1(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(class_element(instance, Class::Line)?.buses[0].clone()))
}

unsafe extern "C" fn lines_get_bus2(ctx: ContextHandle) -> *const c_char {
    run_str(ctx, |instance| Ok(class_element(instance, Class::Line)?.buses[1].clone()))
}

fn set_line_property(ctx: ContextHandle, key: &str, value: String) {
    run(ctx, (), |instance| {
        let circuit = instance.circuit()?;
        let index = circuit.active_of(Class::Line)?;
        circuit.elements[index].set(key, &value)?;
        circuit.connect(index);
        circuit.solved = false;
        Ok(())
    })
}

unsafe extern "C" fn lines_set_bus1(ctx: ContextHandle, value: *const c_char) {
    set_line_property(ctx, "bus1", unsafe { read_str(value) })
}

unsafe extern "C" fn lines_set_bus2(ctx: ContextHandle, value: *const c_char) {
    set_line_property(ctx, "bus2", unsafe { read_str(value) })
}

unsafe extern "C" fn lines_get_length(ctx: ContextHandle) -> f64 {
    run(ctx, 0.0, |instance| Ok(class_element(instance, Class::Line)?.length))
}

unsafe extern "C" fn lines_set_length(ctx: ContextHandle, value: f64) {
    set_line_property(ctx, "length", value.to_string())
}

unsafe extern "C" fn lines_get_phases(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(class_element(instance, Class::Line)?.phases))
}

unsafe extern "C" fn lines_set_phases(ctx: ContextHandle, value: i32) {
    set_line_property(ctx, "phases", value.to_string())
}

unsafe extern "C" fn loads_get_kw(ctx: ContextHandle) -> f64 {
    run(ctx, 0.0, |instance| Ok(class_element(instance, Class::Load)?.kw))
}

unsafe extern "C" fn loads_set_kw(ctx: ContextHandle, value: f64) {
    run(ctx, (), |instance| {
        class_element(instance, Class::Load)?.kw = value;
        Ok(())
    })
}

unsafe extern "C" fn loads_get_kvar(ctx: ContextHandle) -> f64 {
    run(ctx, 0.0, |instance| Ok(class_element(instance, Class::Load)?.kvar))
}

unsafe extern "C" fn loads_set_kvar(ctx: ContextHandle, value: f64) {
    run(ctx, (), |instance| {
        class_element(instance, Class::Load)?.kvar = value;
        Ok(())
    })
}

unsafe extern "C" fn loads_get_phases(ctx: ContextHandle) -> i32 {
    run(ctx, 0, |instance| Ok(class_element(instance, Class::Load)?.phases))
}

// ---------------------------------------------------------------------------
// Symbol lookup
// ---------------------------------------------------------------------------

/// Address of the export named `name`, null when the mock does not provide it.
pub(crate) fn symbol(name: &str) -> *const c_void {
    match name {
        "ctx_New" => ctx_new as *const c_void,
        "ctx_Dispose" => ctx_dispose as *const c_void,
        "ctx_Get_Prime" => ctx_get_prime as *const c_void,
        "ctx_Set_Prime" => ctx_set_prime as *const c_void,
        "DSS_Dispose_PPAnsiChar" => dispose_pp_ansi_char as *const c_void,
        "DSS_RegisterMessageCallback" => register_message_callback as *const c_void,
        "DSS_UnregisterMessageCallback" => unregister_message_callback as *const c_void,

        "ctx_DSS_Start" => dss_start as *const c_void,
        "ctx_DSS_GetGRPointers" => dss_get_gr_pointers as *const c_void,
        "ctx_DSS_ClearAll" => dss_clear_all as *const c_void,
        "ctx_DSS_Reset" => dss_reset as *const c_void,
        "ctx_DSS_NewCircuit" => dss_new_circuit as *const c_void,
        "ctx_DSS_Get_Version" => dss_get_version as *const c_void,
        "ctx_DSS_Get_Classes" => dss_get_classes as *const c_void,
        "ctx_DSS_Get_NumCircuits" => dss_get_num_circuits as *const c_void,
        "ctx_DSS_Get_AllowForms" => dss_get_allow_forms as *const c_void,
        "ctx_DSS_Set_AllowForms" => dss_set_allow_forms as *const c_void,
        "ctx_DSS_Get_LegacyModels" => dss_get_legacy_models as *const c_void,
        "ctx_DSS_Set_LegacyModels" => dss_set_legacy_models as *const c_void,
        "ctx_DSS_Get_CompatFlags" => dss_get_compat_flags as *const c_void,
        "ctx_DSS_Set_CompatFlags" => dss_set_compat_flags as *const c_void,

        "ctx_Error_Get_NumberPtr" => error_get_number_ptr as *const c_void,
        "ctx_Error_Get_Number" => error_get_number as *const c_void,
        "ctx_Error_Get_Description" => error_get_description as *const c_void,
        "ctx_Error_Get_ExtendedErrors" => error_get_extended_errors as *const c_void,
        "ctx_Error_Set_ExtendedErrors" => error_set_extended_errors as *const c_void,

        "ctx_Text_Get_Command" => text_get_command as *const c_void,
        "ctx_Text_Set_Command" => text_set_command as *const c_void,
        "ctx_Text_Get_Result" => text_get_result as *const c_void,
        "ctx_Text_CommandBlock" => text_set_command as *const c_void,
        "ctx_Text_CommandArray" => text_command_array as *const c_void,

        "ctx_Circuit_Get_Name" => circuit_get_name as *const c_void,
        "ctx_Circuit_Get_NumNodes" => circuit_get_num_nodes as *const c_void,
        "ctx_Circuit_Get_NumBuses" => circuit_get_num_buses as *const c_void,
        "ctx_Circuit_Get_AllBusNames" => circuit_get_all_bus_names as *const c_void,
        "ctx_Circuit_Get_AllNodeNames" => circuit_get_all_node_names as *const c_void,
        "ctx_Circuit_Get_AllBusVmag_GR" => circuit_get_all_bus_vmag_gr as *const c_void,
        "ctx_Circuit_Get_AllBusVolts_GR" => circuit_get_all_bus_volts_gr as *const c_void,
        "ctx_Circuit_Get_Losses_GR" => circuit_get_losses_gr as *const c_void,
        "ctx_Circuit_Get_TotalPower_GR" => circuit_get_total_power_gr as *const c_void,
        "ctx_Circuit_Get_SubstationLosses_GR" => circuit_get_substation_losses_gr as *const c_void,
        "ctx_Circuit_SetActiveBus" => circuit_set_active_bus as *const c_void,
        "ctx_Circuit_SetActiveBusi" => circuit_set_active_busi as *const c_void,
        "ctx_Circuit_SetActiveElement" => circuit_set_active_element as *const c_void,
        "ctx_Circuit_Disable" => circuit_disable as *const c_void,
        "ctx_Circuit_Enable" => circuit_enable as *const c_void,

        "ctx_Bus_Get_Name" => bus_get_name as *const c_void,
        "ctx_Bus_Get_NumNodes" => bus_get_num_nodes as *const c_void,
        "ctx_Bus_Get_kVBase" => bus_get_kv_base as *const c_void,
        "ctx_Bus_Get_Nodes_GR" => bus_get_nodes_gr as *const c_void,
        "ctx_Bus_Get_Voltages_GR" => bus_get_voltages_gr as *const c_void,

        "ctx_CktElement_Get_Name" => cktelement_get_name as *const c_void,
        "ctx_CktElement_Get_NumPhases" => cktelement_get_num_phases as *const c_void,
        "ctx_CktElement_Get_NumTerminals" => cktelement_get_num_terminals as *const c_void,
        "ctx_CktElement_Get_BusNames" => cktelement_get_bus_names as *const c_void,
        "ctx_CktElement_Set_BusNames" => cktelement_set_bus_names as *const c_void,
        "ctx_CktElement_Get_Enabled" => cktelement_get_enabled as *const c_void,
        "ctx_CktElement_Set_Enabled" => cktelement_set_enabled as *const c_void,

        "ctx_DSSElement_Get_Name" => dss_element_get_name as *const c_void,
        "ctx_DSSElement_Get_NumProperties" => dss_element_get_num_properties as *const c_void,
        "ctx_DSSElement_Get_AllPropertyNames" => dss_element_get_all_property_names as *const c_void,
        "ctx_DSSElement_ToJSON" => dss_element_to_json as *const c_void,

        "ctx_Settings_Get_IterateDisabled" => settings_get_iterate_disabled as *const c_void,
        "ctx_Settings_Set_IterateDisabled" => settings_set_iterate_disabled as *const c_void,

        "ctx_Solution_Solve" => solution_solve as *const c_void,
        "ctx_Solution_Get_Mode" => solution_get_mode as *const c_void,
        "ctx_Solution_Set_Mode" => solution_set_mode as *const c_void,
        "ctx_Solution_Get_Converged" => solution_get_converged as *const c_void,

        "ctx_Lines_Get_AllNames" => lines::get_all_names as *const c_void,
        "ctx_Lines_Get_Count" => lines::get_count as *const c_void,
        "ctx_Lines_Get_First" => lines::get_first as *const c_void,
        "ctx_Lines_Get_Next" => lines::get_next as *const c_void,
        "ctx_Lines_Get_Name" => lines::get_name as *const c_void,
        "ctx_Lines_Set_Name" => lines::set_name as *const c_void,
        "ctx_Lines_Get_idx" => lines::get_idx as *const c_void,
        "ctx_Lines_Set_idx" => lines::set_idx as *const c_void,
        "ctx_Lines_Get_Bus1" => lines_get_bus1 as *const c_void,
        "ctx_Lines_Set_Bus1" => lines_set_bus1 as *const c_void,
        "ctx_Lines_Get_Bus2" => lines_get_bus2 as *const c_void,
        "ctx_Lines_Set_Bus2" => lines_set_bus2 as *const c_void,
        "ctx_Lines_Get_Length" => lines_get_length as *const c_void,
        "ctx_Lines_Set_Length" => lines_set_length as *const c_void,
        "ctx_Lines_Get_Phases" => lines_get_phases as *const c_void,
        "ctx_Lines_Set_Phases" => lines_set_phases as *const c_void,

        "ctx_Loads_Get_AllNames" => loads::get_all_names as *const c_void,
        "ctx_Loads_Get_Count" => loads::get_count as *const c_void,
        "ctx_Loads_Get_First" => loads::get_first as *const c_void,
        "ctx_Loads_Get_Next" => loads::get_next as *const c_void,
        "ctx_Loads_Get_Name" => loads::get_name as *const c_void,
        "ctx_Loads_Set_Name" => loads::set_name as *const c_void,
        "ctx_Loads_Get_idx" => loads::get_idx as *const c_void,
        "ctx_Loads_Set_idx" => loads::set_idx as *const c_void,
        "ctx_Loads_Get_kW" => loads_get_kw as *const c_void,
        "ctx_Loads_Set_kW" => loads_set_kw as *const c_void,
        "ctx_Loads_Get_kvar" => loads_get_kvar as *const c_void,
        "ctx_Loads_Set_kvar" => loads_set_kvar as *const c_void,
        "ctx_Loads_Get_Phases" => loads_get_phases as *const c_void,

        _ => ptr::null(),
    }
}
