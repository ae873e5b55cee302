use crate::constants::{ATTR_PIXEL_SRC, ATTR_VOLUMETRIC_SRC, PIXEL_AVATAR_URL, VOLUMETRIC_AVATAR_URL};
use crate::dom::{self, to_js};
use crate::events::{pointer, Listener};
use crate::frame::RunningLoop;
use crate::surface::{Canvas2dSurface, WebImage};
use portfolio_core::{HoverInput, MorphCard, MorphConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

type CardLoop = RunningLoop<MorphCard<WebImage, StdRng>, Canvas2dSurface>;

/// Hover-morphing portrait card bound to a `<canvas>`.
#[wasm_bindgen]
pub struct PortraitCard {
    hover: HoverInput,
    running: Option<CardLoop>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PortraitCard {
    /// Start the card on the canvas with id `canvas_id`.
    pub fn mount(canvas_id: &str) -> Result<PortraitCard, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = dom::canvas_by_id(&document, canvas_id).map_err(to_js)?;
        Self::mount_canvas(canvas).map_err(to_js)
    }

    /// Drive hover from script instead of (or in addition to) pointer events.
    pub fn set_hovered(&self, hovered: bool) {
        self.hover.set(hovered);
    }

    /// Current morph progress in `[0, 1]`; 0 once unmounted.
    pub fn progress(&self) -> f32 {
        self.running
            .as_ref()
            .map(|r| r.with_animation(|card| card.state().progress))
            .unwrap_or(0.0)
    }

    /// Cancel the frame loop and detach listeners. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(mut running) = self.running.take() {
            running.stop();
            log::info!("[card] unmounted");
        }
        self.listeners.clear();
    }
}

impl PortraitCard {
    pub(crate) fn mount_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        dom::ensure_card_size(&canvas);
        let pixel_src = dom::data_attr(&canvas, ATTR_PIXEL_SRC);
        let volumetric_src = dom::data_attr(&canvas, ATTR_VOLUMETRIC_SRC);
        let pixel = WebImage::load(pixel_src.as_deref().unwrap_or(PIXEL_AVATAR_URL))?;
        let volumetric = WebImage::load(volumetric_src.as_deref().unwrap_or(VOLUMETRIC_AVATAR_URL))?;

        let hover = HoverInput::new();
        let listeners = pointer::wire_hover(&canvas, &hover)?.into();
        let engine = MorphCard::new(
            pixel,
            volumetric,
            hover.clone(),
            StdRng::from_entropy(),
            MorphConfig::default(),
        );
        let surface = Canvas2dSurface::new(canvas)?;
        let running = RunningLoop::start(engine, surface)?;
        log::info!("[card] mounted");
        Ok(Self {
            hover,
            running: Some(running),
            listeners,
        })
    }
}

impl Drop for PortraitCard {
    fn drop(&mut self) {
        self.unmount();
    }
}
