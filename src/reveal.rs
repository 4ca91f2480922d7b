use crate::constants::*;
use crate::core::{stagger_lines, RevealAction, RevealTracker};
use crate::dom::{self, js_err};
use crate::effects::{Effects, Page};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Intersection observer driving the one-shot reveal; disconnected on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
    _tracker: Rc<RefCell<RevealTracker>>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let targets = dom::query_all(&page.document, SEL_REVEAL_TARGETS)?;
    if targets.is_empty() {
        log::debug!("[reveal] nothing to observe");
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    for el in &targets {
        let id = tracker.borrow_mut().track();
        el.set_attribute(ATTR_REVEAL_ID, &id.to_string())
            .map_err(js_err)?;
    }

    let tracker_cb = tracker.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let el = entry.target();
                let Some(id) = el
                    .get_attribute(ATTR_REVEAL_ID)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                match tracker_cb
                    .borrow_mut()
                    .on_intersection(id, entry.is_intersecting())
                {
                    RevealAction::Reveal => {
                        mark_revealed(&el);
                        observer.unobserve(&el);
                    }
                    RevealAction::Unobserve => observer.unobserve(&el),
                    RevealAction::Ignore => {}
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    for el in &targets {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", targets.len());

    fx.set_reveal(RevealObserver {
        observer,
        _callback: callback,
        _tracker: tracker,
    });
    Ok(())
}

fn mark_revealed(el: &web::Element) {
    dom::add_class(el, CLASS_VISIBLE);
    if el.class_list().contains(CLASS_SECTION) {
        dom::add_class(el, CLASS_SECTION_VISIBLE);
    } else if let Ok(Some(section)) = el.closest(SEL_SECTION) {
        dom::add_class(&section, CLASS_SECTION_VISIBLE);
    }
}

/// Wrap each line of the message paragraphs so they fade in one after the
/// other once their section is revealed.
pub fn install_stagger(page: &Page, _fx: &mut Effects) -> anyhow::Result<()> {
    let targets = dom::query_all(&page.document, SEL_STAGGER_TARGETS)?;
    for p in &targets {
        dom::add_class(p, CLASS_STAGGER_TEXT);
        let html = p.inner_html();
        let staggered = stagger_lines(&html, STAGGER_STEP_MS);
        if staggered != html {
            p.set_inner_html(&staggered);
        }
    }
    Ok(())
}
