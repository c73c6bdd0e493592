// altdss: user-facing facade over the DSS engine.
//
// `IDSS` owns one engine context; every proxy borrows it. Proxies are cheap
// views created on demand and hold no state of their own.
//
//! ```ignore
//! use altdss::prelude::*;
//!
//! let dss = IDSS::load(EngineConfig::from_env()?)?;
//! dss.text().set_command("redirect IEEE13Nodeckt.dss")?;
//! let circuit = dss.active_circuit();
//! println!("{} nodes", circuit.num_nodes()?);
//! circuit.set_active_bus("632")?;
//! println!("active bus: {}", circuit.active_bus().name()?);
//! ```

pub mod bus;
pub mod circuit;
pub mod cktelement;
mod collection;
pub mod ctrl_queue;
pub mod elements;
pub mod enums;
pub mod flags;
pub mod general;
pub mod pd_elements;
pub mod prelude;
pub mod reduce_ckt;
pub mod settings;
pub mod solution;
pub mod tools;
pub mod topology;

use std::sync::Arc;

use altdss_runtime::{Context, ContextHandle, DssResult, Engine, EngineConfig, entry};

pub use altdss_ffi as ffi;
pub use altdss_runtime as runtime;
pub use collection::NameIter;

use circuit::Circuit;
use flags::DSSCompatFlags;
use tools::{
    ActiveClass, CmathLib, DSSElement, DSSProperty, Error, Executive, Parallel, Parser, Text,
    YMatrix, ZIP,
};

/// One engine instance and the entry point to every proxy.
///
/// Obtain one with [`prime`](Self::prime) (the engine's default instance),
/// [`create`](Self::create) or [`new_context`](Self::new_context) (fresh
/// instances owned by the facade), or [`from_handle`](Self::from_handle).
#[derive(Debug)]
pub struct IDSS {
    ctx: Context,
}

impl IDSS {
    /// Load the engine library described by `config` and wrap its prime
    /// instance.
    pub fn load(config: EngineConfig) -> DssResult<IDSS> {
        IDSS::prime(Engine::load(config)?)
    }

    /// The engine's prime instance, started. Never disposed by the binding.
    pub fn prime(engine: Arc<Engine>) -> DssResult<IDSS> {
        Ok(IDSS {
            ctx: Context::prime(engine)?,
        })
    }

    /// Wrap an engine instance created elsewhere. The caller keeps ownership.
    pub fn from_handle(engine: Arc<Engine>, handle: ContextHandle) -> DssResult<IDSS> {
        Ok(IDSS {
            ctx: Context::from_handle(engine, handle)?,
        })
    }

    /// A fresh engine instance, disposed when the facade is dropped.
    pub fn create(engine: Arc<Engine>) -> DssResult<IDSS> {
        Ok(IDSS {
            ctx: Context::create(engine)?,
        })
    }

    /// Another independent instance of the same engine. It shares nothing
    /// with this one: circuits, cursors and buffers are all separate.
    pub fn new_context(&self) -> DssResult<IDSS> {
        Ok(IDSS {
            ctx: self.ctx.new_context()?,
        })
    }

    /// Make this instance the engine's prime. Returns the replaced prime's
    /// handle; see `Context::make_prime`.
    pub fn make_prime(&self) -> DssResult<ContextHandle> {
        self.ctx.make_prime()
    }

    /// Release the engine instance if this facade created it.
    pub fn dispose(self) {
        self.ctx.dispose();
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    // ---- Proxies ----

    pub fn active_circuit(&self) -> Circuit<'_> {
        Circuit::new(&self.ctx)
    }

    pub fn text(&self) -> Text<'_> {
        Text::new(&self.ctx)
    }

    pub fn error(&self) -> Error<'_> {
        Error::new(&self.ctx)
    }

    pub fn active_class(&self) -> ActiveClass<'_> {
        ActiveClass::new(&self.ctx)
    }

    pub fn executive(&self) -> Executive<'_> {
        Executive::new(&self.ctx)
    }

    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.ctx)
    }

    pub fn dss_element(&self) -> DSSElement<'_> {
        DSSElement::new(&self.ctx)
    }

    pub fn dss_property(&self) -> DSSProperty<'_> {
        DSSProperty::new(&self.ctx)
    }

    pub fn ymatrix(&self) -> YMatrix<'_> {
        YMatrix::new(&self.ctx)
    }

    pub fn zip(&self) -> ZIP<'_> {
        ZIP::new(&self.ctx)
    }

    pub fn parallel(&self) -> Parallel<'_> {
        Parallel::new(&self.ctx)
    }

    pub fn cmath_lib(&self) -> CmathLib<'_> {
        CmathLib::new(&self.ctx)
    }

    // ---- Instance-wide operations ----

    /// Create a new circuit named `name`, replacing the active one.
    pub fn new_circuit(&self, name: &str) -> DssResult<Circuit<'_>> {
        self.ctx.set_string(entry!(self.ctx, dss.NewCircuit), name)?;
        self.ctx.clear_selections();
        Ok(self.active_circuit())
    }

    /// Remove every circuit from the instance.
    pub fn clear_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, dss.ClearAll))?;
        self.ctx.clear_selections();
        Ok(())
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, dss.Reset))
    }

    /// (Re)start the engine. Returns whether it reported success.
    pub fn start(&self, code: i32) -> DssResult<bool> {
        let started = self.ctx.invoke(entry!(self.ctx, dss.Start), |f, ctx| unsafe {
            f(ctx, code)
        })?;
        Ok(started != 0)
    }

    /// Make `class_name` the class served by [`active_class`](Self::active_class).
    /// Returns the class index, 0 when unknown.
    pub fn set_active_class(&self, class_name: &str) -> DssResult<i32> {
        let c_name = std::ffi::CString::new(class_name)?;
        self.ctx.invoke(entry!(self.ctx, dss.SetActiveClass), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })
    }

    pub fn version(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss.Get_Version))
    }

    /// Names of the built-in classes.
    pub fn classes(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, dss.Get_Classes))
    }

    pub fn user_classes(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, dss.Get_UserClasses))
    }

    pub fn num_circuits(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, dss.Get_NumCircuits))
    }

    pub fn num_classes(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, dss.Get_NumClasses))
    }

    pub fn num_user_classes(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, dss.Get_NumUserClasses))
    }

    /// Working directory for relative paths in scripts and reports.
    pub fn data_path(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss.Get_DataPath))
    }

    pub fn set_data_path(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, dss.Set_DataPath), value)
    }

    pub fn default_editor(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss.Get_DefaultEditor))
    }

    // ---- Global flags ----

    /// Whether the engine may open dialogs. Off for every context the
    /// binding configures unless `allow_forms` is set in the config.
    pub fn allow_forms(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_AllowForms))
    }

    pub fn set_allow_forms(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_AllowForms), value)
    }

    pub fn allow_editor(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_AllowEditor))
    }

    pub fn set_allow_editor(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_AllowEditor), value)
    }

    pub fn legacy_models(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_LegacyModels))
    }

    pub fn set_legacy_models(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_LegacyModels), value)
    }

    pub fn allow_change_dir(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_AllowChangeDir))
    }

    pub fn set_allow_change_dir(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_AllowChangeDir), value)
    }

    /// Whether scripts may run shell commands.
    pub fn allow_doscmd(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_AllowDOScmd))
    }

    pub fn set_allow_doscmd(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_AllowDOScmd), value)
    }

    pub fn com_error_results(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, dss.Get_COMErrorResults))
    }

    pub fn set_com_error_results(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, dss.Set_COMErrorResults), value)
    }

    /// Bits the engine reports that this binding has no name for are kept.
    pub fn compat_flags(&self) -> DssResult<DSSCompatFlags> {
        let bits = self.ctx.get(entry!(self.ctx, dss.Get_CompatFlags))?;
        Ok(DSSCompatFlags::from_bits_retain(bits))
    }

    pub fn set_compat_flags(&self, value: DSSCompatFlags) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, dss.Set_CompatFlags), value.bits())
    }
}
