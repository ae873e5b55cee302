#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod backdrop;
mod card;
mod constants;
mod dom;
mod events;
mod frame;
mod glitch;
mod surface;
mod timer;

pub use backdrop::BackdropCanvas;
pub use card::PortraitCard;
pub use glitch::GlitchTitle;

use constants::{BACKDROP_CANVAS_ID, GLITCH_TITLE_ID, PORTRAIT_CARD_ID};

#[derive(Default)]
struct Page {
    card: Option<PortraitCard>,
    backdrop: Option<BackdropCanvas>,
    glitch: Option<GlitchTitle>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixel-portfolio starting");

    if let Err(e) = mount_page() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

// a missing element is skipped silently, a broken one is logged
fn mount_page() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut page = Page::default();

    if let Some(el) = document.get_element_by_id(PORTRAIT_CARD_ID) {
        match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(canvas) => match PortraitCard::mount_canvas(canvas) {
                Ok(card) => page.card = Some(card),
                Err(e) => log::error!("[card] mount failed: {:#}", e),
            },
            Err(_) => log::warn!("#{} is not a canvas", PORTRAIT_CARD_ID),
        }
    }

    if let Some(el) = document.get_element_by_id(BACKDROP_CANVAS_ID) {
        match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(canvas) => match BackdropCanvas::mount_canvas(canvas) {
                Ok(backdrop) => page.backdrop = Some(backdrop),
                Err(e) => log::error!("[backdrop] mount failed: {:#}", e),
            },
            Err(_) => log::warn!("#{} is not a canvas", BACKDROP_CANVAS_ID),
        }
    }

    if let Some(el) = document.get_element_by_id(GLITCH_TITLE_ID) {
        match GlitchTitle::mount_element(el) {
            Ok(glitch) => page.glitch = Some(glitch),
            Err(e) => log::error!("[glitch] mount failed: {:#}", e),
        }
    }

    PAGE.with(|slot| {
        // replacing a previous page drops (and so tears down) its engines
        *slot.borrow_mut() = Some(page);
    });
    Ok(())
}

#[wasm_bindgen]
pub fn unmount_page() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(mut page) = page {
        if let Some(card) = page.card.as_mut() {
            card.unmount();
        }
        if let Some(backdrop) = page.backdrop.as_mut() {
            backdrop.unmount();
        }
        if let Some(glitch) = page.glitch.as_mut() {
            glitch.unmount();
        }
    }
}

#[wasm_bindgen]
pub fn set_card_hovered(hovered: bool) {
    PAGE.with(|slot| {
        if let Some(card) = slot.borrow().as_ref().and_then(|p| p.card.as_ref()) {
            card.set_hovered(hovered);
        }
    });
}
