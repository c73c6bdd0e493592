use std::ffi::CString;

use altdss_runtime::{Context, DssResult, entry};

/// Run scripts and read files straight from a ZIP archive.
pub struct ZIP<'a> {
    ctx: &'a Context,
}

impl<'a> ZIP<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        ZIP { ctx }
    }

    pub fn close(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, zip.Close))
    }

    pub fn open(&self, path: &str) -> DssResult<()> {
        let path = CString::new(path)?;
        self.ctx.invoke(entry!(self.ctx, zip.Open), |f, ctx| unsafe { f(ctx, path.as_ptr()) })
    }

    /// Run a script stored in the open archive.
    pub fn redirect(&self, file_in_zip: &str) -> DssResult<()> {
        let file = CString::new(file_in_zip)?;
        self.ctx.invoke(entry!(self.ctx, zip.Redirect), |f, ctx| unsafe { f(ctx, file.as_ptr()) })
    }

    /// Raw contents of one file of the open archive.
    pub fn extract(&self, file_name: &str) -> DssResult<Vec<i8>> {
        let file = CString::new(file_name)?;
        self.ctx.fill_i8s(entry!(self.ctx, zip.Extract_GR), |f, ctx| unsafe {
            f(ctx, file.as_ptr())
        })
    }

    pub fn contains(&self, name: &str) -> DssResult<bool> {
        let name = CString::new(name)?;
        let found = self.ctx.invoke(entry!(self.ctx, zip.Contains), |f, ctx| unsafe {
            f(ctx, name.as_ptr())
        })?;
        Ok(found != 0)
    }

    /// Names of the archive entries matching `regexp` (every entry when empty).
    pub fn list(&self, regexp: &str) -> DssResult<Vec<String>> {
        let regexp = CString::new(regexp)?;
        self.ctx.collect_strings(entry!(self.ctx, zip.List), |f, ctx, data, count| unsafe {
            f(ctx, data, count, regexp.as_ptr())
        })
    }
}
