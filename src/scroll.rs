use crate::constants::*;
use crate::core::{back_to_top_visible, parallax_offset};
use crate::dom::{self, Listener};
use crate::effects::{Effects, Page};
use web_sys as web;

pub fn install_parallax(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let Some(bg) = dom::query_one(&page.document, SEL_PARALLAX_BG) else {
        log::debug!("[parallax] no {} element", SEL_PARALLAX_BG);
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    fx.listen(Listener::new(&window, "scroll", move |_: web::Event| {
        let y = parallax_offset(dom::scroll_y(), PARALLAX_FACTOR);
        dom::set_style(&bg, "transform", &format!("translate3d(0, {:.2}px, 0)", y));
    })?);
    Ok(())
}

pub fn install_back_to_top(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let Some(button) = dom::query_one(&page.document, SEL_BACK_TO_TOP) else {
        log::debug!("[back-to-top] no {} element", SEL_BACK_TO_TOP);
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let sync = {
        let button = button.clone();
        move || {
            let show = back_to_top_visible(dom::scroll_y(), BACK_TO_TOP_THRESHOLD_PX);
            _ = button.class_list().toggle_with_force(CLASS_VISIBLE, show);
        }
    };
    // a reload can restore a scrolled position
    sync();
    fx.listen(Listener::new(&window, "scroll", move |_: web::Event| sync())?);

    fx.listen(Listener::new(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    })?);
    Ok(())
}
