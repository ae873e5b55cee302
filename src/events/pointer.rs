use super::Listener;
use portfolio_core::HoverInput;
use web_sys as web;

/// Edge-triggered hover: `pointerenter` sets, `pointerleave` clears.
pub fn wire_hover(target: &web::EventTarget, hover: &HoverInput) -> anyhow::Result<[Listener; 2]> {
    let on_enter = hover.clone();
    let enter = Listener::new(target, "pointerenter", move || on_enter.set(true))?;
    let on_leave = hover.clone();
    let leave = Listener::new(target, "pointerleave", move || on_leave.set(false))?;
    Ok([enter, leave])
}
