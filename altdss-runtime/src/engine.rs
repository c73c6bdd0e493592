// A loaded engine: its entry-point table plus the library that backs it.

use std::ffi::c_void;
use std::fmt;
use std::sync::Arc;

use altdss_ffi::DssApi;
use libloading::Library;

use crate::config::EngineConfig;
use crate::error::{DssError, DssResult};
use crate::logging::{acquire_forwarding, release_forwarding};

/// One engine library, shared by every context created from it.
///
/// The table is read-only after construction, so an `Arc<Engine>` can be
/// handed to any number of threads.
pub struct Engine {
    api: DssApi,
    config: EngineConfig,
    forwarding: bool,
    // Declared last so the library is unloaded after everything else.
    _library: Option<Library>,
}

impl Engine {
    /// Open the engine library described by `config` and resolve every entry
    /// point by name. Symbols the library does not export stay unresolved.
    pub fn load(config: EngineConfig) -> DssResult<Arc<Engine>> {
        let path = config.library_path();
        let library = unsafe { Library::new(&path) }.map_err(|source| DssError::Library {
            path: path.clone(),
            source,
        })?;
        let api = unsafe { DssApi::load_with(&mut |name| resolve_symbol(&library, name)) };
        let missing = api.missing();
        tracing::info!(
            target: "altdss::engine",
            library = %path.display(),
            resolved = DssApi::symbol_count() - missing.len(),
            missing = missing.len(),
            "loaded DSS engine"
        );
        for name in &missing {
            tracing::debug!(target: "altdss::engine", symbol = *name, "entry point not exported");
        }
        Ok(Arc::new(Engine::assemble(api, config, Some(library))))
    }

    /// `load` with configuration taken from the environment.
    pub fn from_env() -> DssResult<Arc<Engine>> {
        Engine::load(EngineConfig::from_env()?)
    }

    /// Wrap an already-resolved table (a statically linked engine or a test
    /// double) with the default configuration.
    pub fn from_api(api: DssApi) -> Arc<Engine> {
        Engine::with_config(api, EngineConfig::default())
    }

    pub fn with_config(api: DssApi, config: EngineConfig) -> Arc<Engine> {
        Arc::new(Engine::assemble(api, config, None))
    }

    fn assemble(api: DssApi, config: EngineConfig, library: Option<Library>) -> Engine {
        let forwarding = config.forward_messages && acquire_forwarding(&api);
        Engine {
            api,
            config,
            forwarding,
            _library: library,
        }
    }

    #[inline]
    pub fn api(&self) -> &DssApi {
        &self.api
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether engine messages are being forwarded to `tracing`.
    pub fn is_forwarding_messages(&self) -> bool {
        self.forwarding
    }

    /// Entry points the engine does not provide.
    pub fn missing_symbols(&self) -> Vec<&'static str> {
        self.api.missing()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if self.forwarding {
            release_forwarding(&self.api);
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("dynamic", &self._library.is_some())
            .field("forwarding", &self.forwarding)
            .finish()
    }
}

fn resolve_symbol(library: &Library, name: &str) -> *const c_void {
    match unsafe { library.get::<*const c_void>(name.as_bytes()) } {
        Ok(symbol) => *symbol,
        Err(_) => std::ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_reports_all_symbols_missing() {
        let engine = Engine::from_api(DssApi::empty());
        assert_eq!(engine.missing_symbols().len(), DssApi::symbol_count());
        assert!(!engine.is_forwarding_messages());
    }

    #[test]
    fn missing_library_is_a_load_error() {
        let config = EngineConfig {
            library: Some("/nonexistent/libdss_capi.so".into()),
            ..EngineConfig::default()
        };
        match Engine::load(config) {
            Err(DssError::Library { path, .. }) => {
                assert_eq!(path, std::path::PathBuf::from("/nonexistent/libdss_capi.so"))
            }
            other => panic!("expected a library error, got {other:?}"),
        }
    }
}
