use crate::constants::*;
use crate::core::{is_mobile_viewport, RippleGeometry};
use crate::dom::{self, js_err, Listener};
use crate::effects::{Effects, LiveElements, Page};
use crate::timers::Scheduler;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn install(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let document = page.document.clone();
    let scheduler = fx.scheduler();
    let live = fx.live_elements();
    fx.listen(Listener::new(
        &page.document,
        "click",
        move |ev: web::MouseEvent| {
            if is_excluded(&ev) {
                return;
            }
            if let Err(e) = spawn_ripple(&document, &scheduler, &live, &ev) {
                log::warn!("[ripple] {:?}", e);
            }
        },
    )?);
    Ok(())
}

// Copy buttons and links have their own feedback.
fn is_excluded(ev: &web::MouseEvent) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    SEL_RIPPLE_EXCLUDED
        .iter()
        .any(|sel| matches!(target.closest(sel), Ok(Some(_))))
}

fn spawn_ripple(
    document: &web::Document,
    scheduler: &Scheduler,
    live: &LiveElements,
    ev: &web::MouseEvent,
) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let (width, _) = dom::viewport_size();
    let mobile = is_mobile_viewport(width, MOBILE_BREAKPOINT_PX);
    let geo = RippleGeometry::centered_at(
        dom::client_point(ev),
        dom::scroll_y(),
        mobile,
        (RIPPLE_SIZE_DESKTOP_PX, RIPPLE_SIZE_MOBILE_PX),
    );

    let ripple = document
        .create_element("span")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("span is not an HtmlElement"))?;
    dom::add_class(&ripple, CLASS_RIPPLE);
    if geo.mobile {
        dom::add_class(&ripple, CLASS_RIPPLE_MOBILE);
    }
    let size = format!("{}px", geo.size);
    dom::set_style(&ripple, "width", &size);
    dom::set_style(&ripple, "height", &size);
    dom::set_style(&ripple, "left", &format!("{}px", geo.left));
    dom::set_style(&ripple, "top", &format!("{}px", geo.top));
    body.append_child(&ripple).map_err(js_err)?;
    let id = live.borrow_mut().insert(ripple.clone());

    let finished = live.clone();
    let on_end = Listener::new(&ripple, "animationend", move |_: web::AnimationEvent| {
        release(&finished, id);
    })?;

    // Covers disabled animations; also releases the animationend listener.
    // If teardown cancels this, `Effects::teardown` removes the element.
    let live = live.clone();
    scheduler.after(RIPPLE_ANIMATION_MS, move || {
        drop(on_end);
        release(&live, id);
    });
    Ok(())
}

fn release(live: &LiveElements, id: u32) {
    let ripple = live.borrow_mut().release(id);
    if let Some(ripple) = ripple {
        ripple.remove();
    }
}
