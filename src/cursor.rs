use crate::constants::{CURSOR_LERP_FACTOR, SEL_CURSOR_DOT};
use crate::core::PointerState;
use crate::dom::{self, js_err, Listener};
use crate::effects::{Effects, Page};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `requestAnimationFrame` loop that runs until cancelled or dropped.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            frame();
            let next = match (web::window(), tick_clone.borrow().as_ref()) {
                (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
                _ => None,
            };
            handle_clone.set(next);
        }) as Box<dyn FnMut()>);

        let first = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        handle.set(Some(first));
        *tick.borrow_mut() = Some(closure);
        Ok(Self { tick, handle })
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // releases the closure and with it the self-reference
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn install(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let Some(dot) = dom::query_one(&page.document, SEL_CURSOR_DOT) else {
        log::debug!("[cursor] no {} element", SEL_CURSOR_DOT);
        return Ok(());
    };

    let (w, h) = dom::viewport_size();
    let pointer = Rc::new(RefCell::new(PointerState::at(Vec2::new(
        w as f32 / 2.0,
        h as f32 / 2.0,
    ))));

    let pointer_move = pointer.clone();
    fx.listen(Listener::new(
        &page.document,
        "mousemove",
        move |ev: web::MouseEvent| {
            pointer_move.borrow_mut().set_target(dom::client_point(&ev));
        },
    )?);

    fx.set_frame_loop(FrameLoop::start(move || {
        let pos = pointer.borrow_mut().step(CURSOR_LERP_FACTOR);
        dom::set_style(
            &dot,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y),
        );
    })?);
    Ok(())
}
