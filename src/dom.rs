use crate::core::{Bounds, ExclusiveSelection};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

/// Reflect an exclusive selection onto `class` across `elements`.
pub fn sync_active(elements: &[web::HtmlElement], selection: &ExclusiveSelection, class: &str) {
    for (i, el) in elements.iter().enumerate() {
        _ = el.class_list().toggle_with_force(class, selection.is_active(i));
    }
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        }
        None => (0.0, 0.0),
    }
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn bounds_of(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// An event listener that detaches itself from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Attach `handler` for `event`. Events that are not an `E` are ignored.
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
