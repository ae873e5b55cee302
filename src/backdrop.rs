use crate::constants::{ATTR_PARTICLES, MAX_PARTICLES};
use crate::dom::{self, to_js};
use crate::events::{resize, Listener};
use crate::frame::RunningLoop;
use crate::surface::Canvas2dSurface;
use portfolio_core::{Backdrop, BackdropConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

type BackdropLoop = RunningLoop<Backdrop<StdRng>, Canvas2dSurface>;

/// Full-viewport grid + particle background bound to a `<canvas>`.
#[wasm_bindgen(js_name = Backdrop)]
pub struct BackdropCanvas {
    running: Option<BackdropLoop>,
    resize: Option<Listener>,
}

#[wasm_bindgen(js_class = Backdrop)]
impl BackdropCanvas {
    pub fn mount(canvas_id: &str) -> Result<BackdropCanvas, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id).map_err(to_js)?;
        Self::mount_canvas(canvas).map_err(to_js)
    }

    pub fn unmount(&mut self) {
        // order does not matter; both are cancelled before the canvas goes away
        self.resize = None;
        if let Some(mut running) = self.running.take() {
            running.stop();
            log::info!("[backdrop] unmounted");
        }
    }
}

impl BackdropCanvas {
    pub(crate) fn mount_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let mut config = BackdropConfig::default();
        if let Some(raw) = dom::data_attr(&canvas, ATTR_PARTICLES) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.particle_count = n.min(MAX_PARTICLES),
                Err(_) => log::warn!("[backdrop] ignoring {}={:?}", ATTR_PARTICLES, raw),
            }
        }

        let viewport = dom::viewport_size();
        dom::sync_canvas_backing_size(&canvas, viewport);
        let engine = Backdrop::new(viewport, StdRng::from_entropy(), config);
        let surface = Canvas2dSurface::new(canvas)?;
        let running = RunningLoop::start(engine, surface)?;

        let weak = running.downgrade();
        let resize = resize::wire_viewport_resize(move |size| {
            let Some(lp) = weak.upgrade() else {
                return;
            };
            let mut lp = lp.borrow_mut();
            if let Some(surface) = lp.surface_mut() {
                dom::sync_canvas_backing_size(surface.canvas(), size);
            }
            lp.animation_mut().resize(size);
        })?;

        log::info!("[backdrop] mounted at {}x{}", viewport.x, viewport.y);
        Ok(Self {
            running: Some(running),
            resize: Some(resize),
        })
    }
}

impl Drop for BackdropCanvas {
    fn drop(&mut self) {
        self.unmount();
    }
}
