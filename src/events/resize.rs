use super::Listener;
use glam::Vec2;
use web_sys as web;

/// Call `on_resize` with the new viewport size on every window resize.
pub fn wire_viewport_resize(mut on_resize: impl FnMut(Vec2) + 'static) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(&window, "resize", move || {
        on_resize(crate::dom::viewport_size());
    })
}
