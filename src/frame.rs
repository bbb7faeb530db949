use crate::constants::FRAME_STATS_INTERVAL;
use crate::render::CanvasRenderer;
use instant::Instant;
use liquid_core::Driver;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running mean of the interval between animation frames.
struct FrameStats {
    last: Option<Instant>,
    total_ms: f64,
    count: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            last: None,
            total_ms: 0.0,
            count: 0,
        }
    }

    fn record(&mut self, id: u32) {
        let now = Instant::now();
        if let Some(last) = self.last.replace(now) {
            self.total_ms += (now - last).as_secs_f64() * 1000.0;
            self.count += 1;
        }
        if self.count >= FRAME_STATS_INTERVAL {
            log::debug!(
                "[button {}] mean frame interval {:.2} ms",
                id,
                self.total_ms / self.count as f64
            );
            self.total_ms = 0.0;
            self.count = 0;
        }
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let borrowed = tick.borrow();
    let cb = borrowed.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// requestAnimationFrame loop stepping one driver.
///
/// The tick closure holds a handle to itself so it can re-schedule; `stop`
/// cancels the pending request and drops the closure, which breaks that
/// cycle.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    live: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(id: u32, driver: Rc<RefCell<Driver>>, mut renderer: CanvasRenderer, debug: bool) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let live = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let live_tick = live.clone();
        let mut stats = debug.then(FrameStats::new);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !live_tick.get() {
                return;
            }
            if let Some(s) = stats.as_mut() {
                s.record(id);
            }
            let again = driver.borrow_mut().step(&mut renderer);
            if again && live_tick.get() {
                pending_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        pending.set(request_frame(&tick));
        Self {
            tick,
            pending,
            live,
        }
    }

    /// Cancel the pending frame and release the tick closure. Idempotent.
    pub fn stop(&self) {
        if !self.live.replace(false) {
            return;
        }
        if let (Some(handle), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        // dropping the closure drops its own `tick` clone, ending the cycle
        let _closure = self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
