use portfolio_core::{Animation, FrameLoop, FrameScheduler, Surface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

// the slot is filled once the loop exists
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, token: i32) {
        _ = self.window.cancel_animation_frame(token);
    }
}

pub type WebLoop<A, S> = FrameLoop<A, S, RafScheduler>;

pub struct RunningLoop<A, S>
where
    A: Animation<S> + 'static,
    S: Surface + 'static,
{
    inner: Rc<RefCell<WebLoop<A, S>>>,
    callback: FrameCallback,
}

impl<A, S> RunningLoop<A, S>
where
    A: Animation<S> + 'static,
    S: Surface + 'static,
{
    pub fn start(animation: A, surface: S) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler {
            window,
            callback: callback.clone(),
        };
        let inner = Rc::new(RefCell::new(FrameLoop::new(animation, surface, scheduler)));

        let inner_tick = inner.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            inner_tick.borrow_mut().tick(now_ms);
        }) as Box<dyn FnMut(f64)>));

        let started = inner.borrow_mut().start();
        if let Err(e) = started {
            // release the closure so the loop is not kept alive by its own cycle
            callback.borrow_mut().take();
            return Err(anyhow::anyhow!("frame loop: {}", e));
        }
        Ok(Self { inner, callback })
    }

    pub fn downgrade(&self) -> Weak<RefCell<WebLoop<A, S>>> {
        Rc::downgrade(&self.inner)
    }

    pub fn with_animation<T>(&self, f: impl FnOnce(&mut A) -> T) -> T {
        f(self.inner.borrow_mut().animation_mut())
    }

    pub fn stop(&mut self) {
        let was_running = {
            let mut lp = self.inner.borrow_mut();
            let running = lp.is_running();
            lp.stop();
            running
        };
        // the closure holds the loop; dropping it breaks the cycle
        if self.callback.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped (was running: {})", was_running);
        }
    }
}

impl<A, S> Drop for RunningLoop<A, S>
where
    A: Animation<S> + 'static,
    S: Surface + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
