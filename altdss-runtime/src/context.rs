// Engine context lifecycle and the per-context state the binding mirrors.

use std::cell::Cell;
use std::fmt;
use std::ptr;
use std::sync::Arc;

use altdss_ffi::{ContextHandle, DssApi, GrPointers, to_dss_bool};

use crate::engine::Engine;
use crate::entry;
use crate::error::{DssError, DssResult, take_error};
use crate::marshal::ScratchBuffers;
use crate::selection::{EntityKind, Selection};
use crate::strings::copy_cstr;

/// One engine instance plus the addresses of its scratch buffers and error
/// cell.
///
/// `Context` is `Send` but not `Sync`: the engine tolerates an instance moving
/// between threads, never two threads driving it at once. Proxies borrow the
/// context, so they cannot outlive it.
pub struct Context {
    engine: Arc<Engine>,
    handle: ContextHandle,
    owned: Cell<bool>,
    buffers: ScratchBuffers,
    error_cell: *mut i32,
    active_object: Cell<Option<Selection>>,
    active_element: Cell<Option<Selection>>,
    active_bus: Cell<Option<Selection>>,
}

// The raw pointers address memory owned by this context's engine instance,
// which may be used from any single thread.
unsafe impl Send for Context {}

impl Context {
    /// The engine's prime instance, started and ready. Never disposed here.
    pub fn prime(engine: Arc<Engine>) -> DssResult<Context> {
        let get_prime = entry!(engine, lifecycle.Get_Prime).resolve()?;
        let handle = unsafe { get_prime() };
        if handle.is_null() {
            return Err(DssError::ContextAllocation);
        }
        let start = entry!(engine, dss.Start).resolve()?;
        unsafe { start(handle, 0) };
        let mut ctx = Context::unattached(engine, handle, false);
        ctx.attach()?;
        ctx.apply_config()?;
        Ok(ctx)
    }

    /// Wrap a handle obtained elsewhere. The caller keeps ownership.
    pub fn from_handle(engine: Arc<Engine>, handle: ContextHandle) -> DssResult<Context> {
        if handle.is_null() {
            return Err(DssError::ContextAllocation);
        }
        let mut ctx = Context::unattached(engine, handle, false);
        ctx.attach()?;
        Ok(ctx)
    }

    /// A new, independent engine instance owned by the returned context.
    pub fn create(engine: Arc<Engine>) -> DssResult<Context> {
        let new = entry!(engine, lifecycle.New).resolve()?;
        let handle = unsafe { new() };
        if handle.is_null() {
            tracing::warn!(target: "altdss::context", "engine returned a null context");
            return Err(DssError::ContextAllocation);
        }
        // Disposed by Drop if anything below fails.
        let mut ctx = Context::unattached(engine, handle, true);
        ctx.attach()?;
        ctx.apply_config()?;
        tracing::debug!(target: "altdss::context", handle = handle.to_addr(), "created context");
        Ok(ctx)
    }

    /// Another independent instance from the same engine.
    pub fn new_context(&self) -> DssResult<Context> {
        Context::create(Arc::clone(&self.engine))
    }

    /// Release the engine instance if this context created it.
    pub fn dispose(self) {
        drop(self);
    }

    fn unattached(engine: Arc<Engine>, handle: ContextHandle, owned: bool) -> Context {
        Context {
            engine,
            handle,
            owned: Cell::new(owned),
            buffers: unsafe { ScratchBuffers::new(GrPointers::null()) },
            error_cell: ptr::null_mut(),
            active_object: Cell::new(None),
            active_element: Cell::new(None),
            active_bus: Cell::new(None),
        }
    }

    /// Query the scratch-buffer registry and the error cell.
    fn attach(&mut self) -> DssResult<()> {
        let get_pointers = entry!(self, dss.GetGRPointers).resolve()?;
        let mut gr = GrPointers::null();
        unsafe {
            get_pointers(
                self.handle,
                &mut gr.data_string,
                &mut gr.data_f64,
                &mut gr.data_i32,
                &mut gr.data_i8,
                &mut gr.count_string,
                &mut gr.count_f64,
                &mut gr.count_i32,
                &mut gr.count_i8,
            )
        };
        if !gr.is_populated() {
            tracing::warn!(target: "altdss::context", "engine left scratch-buffer slots unset");
        }
        self.buffers = unsafe { ScratchBuffers::new(gr) };
        let number_ptr = entry!(self, error.Get_NumberPtr).resolve()?;
        self.error_cell = unsafe { number_ptr(self.handle) };
        Ok(())
    }

    fn apply_config(&self) -> DssResult<()> {
        let config = self.engine.config().clone();
        self.set(entry!(self, dss.Set_AllowForms), to_dss_bool(config.allow_forms))?;
        if let Some(extended) = config.extended_errors {
            self.set(entry!(self, error.Set_ExtendedErrors), to_dss_bool(extended))?;
        }
        if let Some(legacy) = config.legacy_models {
            self.set(entry!(self, dss.Set_LegacyModels), to_dss_bool(legacy))?;
        }
        if let Some(flags) = config.compat_flags {
            self.set(entry!(self, dss.Set_CompatFlags), flags)?;
        }
        Ok(())
    }

    #[inline]
    pub fn api(&self) -> &DssApi {
        self.engine.api()
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    #[inline]
    pub fn handle(&self) -> ContextHandle {
        self.handle
    }

    /// Whether dropping this context disposes the engine instance.
    pub fn is_owned(&self) -> bool {
        self.owned.get()
    }

    /// Install this instance as the engine's prime and return the handle of
    /// the one it replaces. The engine keeps the new prime alive, so this
    /// context stops owning it; the previous prime is left running and can
    /// be wrapped with `from_handle`.
    pub fn make_prime(&self) -> DssResult<ContextHandle> {
        let set_prime = entry!(self, lifecycle.Set_Prime).resolve()?;
        let previous = unsafe { set_prime(self.handle) };
        self.owned.set(false);
        tracing::debug!(
            target: "altdss::context",
            handle = self.handle.to_addr(),
            previous = previous.to_addr(),
            "installed prime context"
        );
        Ok(previous)
    }

    pub fn buffers(&self) -> &ScratchBuffers {
        &self.buffers
    }

    // ---- Error channel ----

    /// Read and clear the error cell.
    pub fn check_error(&self) -> DssResult<()> {
        unsafe { take_error(self.error_cell, || self.error_description()) }
    }

    fn error_description(&self) -> String {
        match self.api().error.Get_Description {
            Some(describe) => unsafe { copy_cstr(describe(self.handle)) },
            None => String::new(),
        }
    }

    // ---- Selection ----

    /// The last object selected through any proxy.
    pub fn active_object(&self) -> Option<Selection> {
        self.active_object.get()
    }

    /// The last circuit element selected through any proxy.
    pub fn active_element(&self) -> Option<Selection> {
        self.active_element.get()
    }

    pub fn active_bus(&self) -> Option<Selection> {
        self.active_bus.get()
    }

    /// Mirror an engine-side selection. Bus selections only move the active
    /// bus; circuit elements move both the active object and active element.
    pub fn record_selection(&self, selection: Selection) {
        if selection.kind == EntityKind::Bus {
            self.active_bus.set(Some(selection));
            return;
        }
        self.active_object.set(Some(selection));
        if selection.kind.is_circuit_element() {
            self.active_element.set(Some(selection));
        }
    }

    /// Mirror an element the engine reported as its active circuit element,
    /// whatever its kind.
    pub fn record_active_element(&self, selection: Selection) {
        self.active_object.set(Some(selection));
        self.active_element.set(Some(selection));
    }

    pub fn clear_active_bus(&self) {
        self.active_bus.set(None);
    }

    /// Forget every selection (the circuit was cleared or replaced).
    pub fn clear_selections(&self) {
        self.active_object.set(None);
        self.active_element.set(None);
        self.active_bus.set(None);
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if !self.owned.get() || self.handle.is_null() {
            return;
        }
        match self.engine.api().lifecycle.Dispose {
            Some(dispose) => {
                unsafe { dispose(self.handle) };
                tracing::debug!(
                    target: "altdss::context",
                    handle = self.handle.to_addr(),
                    "disposed context"
                );
            }
            None => tracing::warn!(
                target: "altdss::context",
                "ctx_Dispose not exported; engine instance leaked"
            ),
        }
        self.handle = ContextHandle::NULL;
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("handle", &self.handle)
            .field("owned", &self.owned.get())
            .field("active_object", &self.active_object.get())
            .field("active_element", &self.active_element.get())
            .field("active_bus", &self.active_bus.get())
            .finish()
    }
}
