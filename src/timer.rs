use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct IntervalHandle {
    id: Rc<Cell<Option<i32>>>,
}

impl IntervalHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

// Cancelling from inside the callback only clears the timer; the closure
// lives until the Interval is dropped.
pub struct Interval {
    handle: IntervalHandle,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, mut f: impl FnMut(&IntervalHandle) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let handle = IntervalHandle {
            id: Rc::new(Cell::new(None)),
        };
        let inner = handle.clone();
        let callback = Closure::wrap(Box::new(move || f(&inner)) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        handle.id.set(Some(id));
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}
