mod playback;
mod session;

pub use playback::Playback;
pub use session::{ApplyError, Session};

use reservoir_core::{COLD_EDGE, HOT_EDGE, SolverConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Viewer {
    inner: Session,
}

#[wasm_bindgen]
impl Viewer {
    /// Default reservoir run with the given injection rate.
    #[wasm_bindgen(constructor)]
    pub fn new(injection_rate: f64) -> Result<Viewer, JsValue> {
        let config = SolverConfig::default().with_injection_rate(injection_rate);
        let inner = Session::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Viewer { inner })
    }

    pub fn nx(&self) -> usize { self.inner.config().nx }
    pub fn ny(&self) -> usize { self.inner.config().ny }
    pub fn len(&self) -> usize { self.inner.history().len() }
    pub fn injection_rate(&self) -> f64 { self.inner.injection_rate() }

    // Fixed display bounds for the color map.
    pub fn color_scale_min(&self) -> f64 { COLD_EDGE }
    pub fn color_scale_max(&self) -> f64 { HOT_EDGE }

    // Copy-based JS access (row-major, nx * ny)
    pub fn frame(&self, step: usize) -> Option<Vec<f64>> {
        self.inner.history().get(step).map(|g| g.as_slice().to_vec())
    }
    pub fn frame_min(&self, step: usize) -> Option<f64> {
        self.inner.history().stats(step).map(|s| s.min)
    }
    pub fn frame_max(&self, step: usize) -> Option<f64> {
        self.inner.history().stats(step).map(|s| s.max)
    }

    // Cursor
    pub fn current_step(&self) -> usize { self.inner.playback().current() }
    pub fn next_frame(&mut self) -> usize { self.inner.playback_mut().next_frame() }
    pub fn seek(&mut self, step: usize) -> usize { self.inner.playback_mut().seek(step) }
    pub fn reset(&mut self) { self.inner.playback_mut().reset(); }

    /// Re-run with a user-typed rate. On error the current history stays.
    pub fn apply_injection(&mut self, text: &str) -> Result<RunInfo, JsValue> {
        let t0 = now_ms();
        let rate = self
            .inner
            .apply_injection(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let t1 = now_ms();
        Ok(RunInfo { frames: self.inner.history().len(), compute_ms: t1 - t0, injection_rate: rate })
    }
}

#[wasm_bindgen]
pub struct RunInfo {
    frames: usize,
    compute_ms: f64,
    injection_rate: f64,
}

#[wasm_bindgen]
impl RunInfo {
    pub fn frames(&self) -> usize { self.frames }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn injection_rate(&self) -> f64 { self.injection_rate }
}


fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
