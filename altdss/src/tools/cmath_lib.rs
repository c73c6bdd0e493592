use altdss_runtime::{Complex64, Context, DssResult, entry};

/// Complex helpers evaluated by the engine, kept for parity with scripts
/// that rely on the engine's rounding.
pub struct CmathLib<'a> {
    ctx: &'a Context,
}

impl<'a> CmathLib<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        CmathLib { ctx }
    }

    pub fn cmplx(&self, real: f64, imag: f64) -> DssResult<Complex64> {
        self.ctx.fill_complex(entry!(self.ctx, cmath_lib.Get_cmplx_GR), |f, ctx| unsafe {
            f(ctx, real, imag)
        })
    }

    pub fn cabs(&self, value: Complex64) -> DssResult<f64> {
        self.ctx.invoke(entry!(self.ctx, cmath_lib.Get_cabs), |f, ctx| unsafe {
            f(ctx, value.re, value.im)
        })
    }

    /// Angle in degrees.
    pub fn cdang(&self, value: Complex64) -> DssResult<f64> {
        self.ctx.invoke(entry!(self.ctx, cmath_lib.Get_cdang), |f, ctx| unsafe {
            f(ctx, value.re, value.im)
        })
    }

    /// Magnitude and angle in degrees.
    pub fn ctopolardeg(&self, value: Complex64) -> DssResult<(f64, f64)> {
        let polar = self.ctx.fill_complex(entry!(self.ctx, cmath_lib.Get_ctopolardeg_GR), |f, ctx| unsafe {
            f(ctx, value.re, value.im)
        })?;
        Ok((polar.re, polar.im))
    }

    pub fn pdegtocomplex(&self, magnitude: f64, angle: f64) -> DssResult<Complex64> {
        self.ctx.fill_complex(entry!(self.ctx, cmath_lib.Get_pdegtocomplex_GR), |f, ctx| unsafe {
            f(ctx, magnitude, angle)
        })
    }

    pub fn cmul(&self, a: Complex64, b: Complex64) -> DssResult<Complex64> {
        self.ctx.fill_complex(entry!(self.ctx, cmath_lib.Get_cmul_GR), |f, ctx| unsafe {
            f(ctx, a.re, a.im, b.re, b.im)
        })
    }

    pub fn cdiv(&self, a: Complex64, b: Complex64) -> DssResult<Complex64> {
        self.ctx.fill_complex(entry!(self.ctx, cmath_lib.Get_cdiv_GR), |f, ctx| unsafe {
            f(ctx, a.re, a.im, b.re, b.im)
        })
    }
}
