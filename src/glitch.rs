use crate::constants::ATTR_TEXT;
use crate::dom::{self, to_js};
use crate::timer::Interval;
use portfolio_core::{GlitchConfig, GlitchPhase, GlitchText};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

type SharedGlitch = Rc<RefCell<GlitchText<StdRng>>>;
type RevealSlot = Rc<RefCell<Option<Interval>>>;

/// Periodically scrambles an element's text and resolves it back.
#[wasm_bindgen]
pub struct GlitchTitle {
    state: SharedGlitch,
    el: web::Element,
    tick_ms: u32,
    cycle: Option<Interval>,
    reveal: RevealSlot,
}

#[wasm_bindgen]
impl GlitchTitle {
    pub fn mount(element_id: &str) -> Result<GlitchTitle, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let el = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", element_id)))?;
        Self::mount_element(el).map_err(to_js)
    }

    /// Start a reveal now instead of waiting for the next cycle.
    pub fn trigger(&self) {
        if self.cycle.is_some() {
            start_reveal(&self.state, &self.el, &self.reveal, self.tick_ms);
        }
    }

    pub fn unmount(&mut self) {
        let had_cycle = self.cycle.take().is_some();
        self.reveal.borrow_mut().take();
        if had_cycle {
            show_resolved(&self.el, &self.state);
            log::info!("[glitch] unmounted");
        }
    }
}

impl GlitchTitle {
    pub(crate) fn mount_element(el: web::Element) -> anyhow::Result<Self> {
        let mut config = GlitchConfig::default();
        if let Some(text) = dom::data_attr(&el, ATTR_TEXT) {
            config.target = text;
        }
        let state: SharedGlitch = Rc::new(RefCell::new(GlitchText::new(&config, StdRng::from_entropy())));
        el.set_text_content(Some(state.borrow().text()));

        let reveal: RevealSlot = Rc::new(RefCell::new(None));
        let tick_ms = config.tick_ms;
        let cycle = {
            let state = state.clone();
            let el = el.clone();
            let reveal = reveal.clone();
            Interval::start(config.cycle_ms, move |_| {
                start_reveal(&state, &el, &reveal, tick_ms);
            })?
        };

        log::info!("[glitch] mounted ({:?})", config.target);
        Ok(Self {
            state,
            el,
            tick_ms,
            cycle: Some(cycle),
            reveal,
        })
    }
}

/// Restart the reveal, replacing (and thereby clearing) any reveal timer
/// left from the previous cycle.
fn start_reveal(state: &SharedGlitch, el: &web::Element, reveal: &RevealSlot, tick_ms: u32) {
    state.borrow_mut().begin_cycle();
    let tick_state = state.clone();
    let tick_el = el.clone();
    let ticker = Interval::start(tick_ms, move |handle| {
        let mut g = tick_state.borrow_mut();
        if let Some(text) = g.tick() {
            tick_el.set_text_content(Some(text));
        }
        if g.phase() == GlitchPhase::Idle {
            handle.cancel();
        }
    });
    match ticker {
        Ok(t) => *reveal.borrow_mut() = Some(t),
        Err(e) => log::warn!("[glitch] reveal timer: {:#}", e),
    }
}

// leave the resolved title behind rather than a half-scrambled one
fn show_resolved(el: &web::Element, state: &SharedGlitch) {
    el.set_text_content(Some(&state.borrow().target()));
}

impl Drop for GlitchTitle {
    fn drop(&mut self) {
        self.unmount();
    }
}
