#![cfg(target_arch = "wasm32")]
use crate::effects::{Effects, Install, Page};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod clipboard;
mod config;
mod constants;
mod contact;
mod core;
mod cursor;
mod dom;
mod effects;
mod hover;
mod navigation;
mod news;
mod reveal;
mod ripple;
mod scroll;
mod timers;

thread_local! {
    static SITE: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

// Order matters: navigation and contact tag their controls `is-magnetic`
// before the magnetic effect collects them.
const FEATURES: [(&str, Install); 14] = [
    ("cursor", cursor::install),
    ("reveal", reveal::install),
    ("ripple", ripple::install),
    ("navigation", navigation::install),
    ("email-copy", contact::install_email_copy),
    ("drafts", contact::install_drafts),
    ("news-latest", news::render_latest),
    ("news-archive", news::render_archive),
    ("back-to-top", scroll::install_back_to_top),
    ("spotlight", hover::install_spotlight),
    ("magnetic", hover::install_magnetic),
    ("parallax", scroll::install_parallax),
    ("tilt", hover::install_tilt),
    ("stagger", reveal::install_stagger),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move || init(&doc));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        init(&document);
    }
    Ok(())
}

/// Detach every listener, observer, frame loop and pending timer.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(fx) = SITE.with(|site| site.borrow_mut().take()) {
        fx.teardown();
    }
}

fn init(document: &web::Document) {
    // a second start replaces the previous wiring
    teardown();

    let page = Page {
        document: document.clone(),
        content: Rc::new(config::load_content(document)),
    };
    let mut fx = Effects::new();
    let mut failed = 0;
    for (name, install) in FEATURES {
        if let Err(e) = install(&page, &mut fx) {
            failed += 1;
            log::error!("[{}] setup failed: {:?}", name, e);
        }
    }
    log::info!(
        "[site] ready: {} listeners, {} news items, {} draft templates, {} failed features",
        fx.listener_count(),
        page.content.news.len(),
        page.content.drafts().len(),
        failed
    );
    SITE.with(|site| *site.borrow_mut() = Some(fx));
}
