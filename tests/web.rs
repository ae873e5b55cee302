#![cfg(target_arch = "wasm32")]

use pixel_portfolio::{BackdropCanvas, GlitchTitle, PortraitCard};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_element(tag: &str, id: &str) -> web_sys::Element {
    let doc = document();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_rejects_missing_element() {
    assert!(PortraitCard::mount("no-such-canvas").is_err());
    assert!(BackdropCanvas::mount("no-such-canvas").is_err());
    assert!(GlitchTitle::mount("no-such-title").is_err());
}

#[wasm_bindgen_test(async)]
async fn backdrop_tracks_viewport_and_unmounts() {
    let el = add_element("canvas", "test-backdrop");
    let canvas: web_sys::HtmlCanvasElement = el.clone().dyn_into().unwrap();
    let mut backdrop = BackdropCanvas::mount("test-backdrop").unwrap();
    sleep_ms(50).await;

    let window = web_sys::window().unwrap();
    let inner_w = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), inner_w.max(1));

    backdrop.unmount();
    backdrop.unmount();
    el.remove();
}

#[wasm_bindgen_test(async)]
async fn card_defaults_size_and_follows_hover() {
    let el = add_element("canvas", "test-card");
    let canvas: web_sys::HtmlCanvasElement = el.clone().dyn_into().unwrap();
    let mut card = PortraitCard::mount("test-card").unwrap();
    assert_eq!((canvas.width(), canvas.height()), (320, 450));

    card.set_hovered(true);
    sleep_ms(200).await;
    assert!(card.progress() > 0.0);

    card.unmount();
    assert_eq!(card.progress(), 0.0);
    el.remove();
}

#[wasm_bindgen_test(async)]
async fn glitch_keeps_length_and_restores_on_unmount() {
    let el = add_element("h1", "test-glitch");
    el.set_attribute("data-text", "HELLO_WORLD").unwrap();
    let mut title = GlitchTitle::mount("test-glitch").unwrap();
    assert_eq!(el.text_content().as_deref(), Some("HELLO_WORLD"));

    title.trigger();
    sleep_ms(100).await;
    let mid = el.text_content().unwrap();
    assert_eq!(mid.chars().count(), "HELLO_WORLD".len());

    title.unmount();
    assert_eq!(el.text_content().as_deref(), Some("HELLO_WORLD"));
    el.remove();
}
