use crate::constants::*;
use crate::core::{fragment_id, ExclusiveSelection};
use crate::dom::{self, js_err, Listener};
use crate::effects::{Effects, Page};
use crate::timers::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn install(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let links = dom::query_all(&page.document, SEL_NAV_LINKS)?;
    if links.is_empty() {
        log::debug!("[nav] no {} links", SEL_NAV_LINKS);
        return Ok(());
    }
    let header = dom::query_one(&page.document, SEL_HEADER);

    for link in &links {
        // picked up by the magnetic effect installed later
        dom::add_class(link, CLASS_MAGNETIC);
        if matches!(link.query_selector(SEL_NAV_DOT), Ok(None)) {
            let dot = page.document.create_element("span").map_err(js_err)?;
            dom::add_class(&dot, CLASS_NAV_DOT);
            link.append_child(&dot).map_err(js_err)?;
        }
    }

    let selection = Rc::new(RefCell::new(ExclusiveSelection::new(links.len(), Some(0))));
    dom::sync_active(&links, &selection.borrow(), CLASS_ACTIVE);

    let links = Rc::new(links);
    for (i, link) in links.iter().enumerate() {
        let ctx = NavClick {
            index: i,
            links: links.clone(),
            selection: selection.clone(),
            header: header.clone(),
            document: page.document.clone(),
            scheduler: fx.scheduler(),
        };
        fx.listen(Listener::new(link, "click", move |ev: web::MouseEvent| {
            ctx.handle(&ev)
        })?);
    }
    Ok(())
}

struct NavClick {
    index: usize,
    links: Rc<Vec<web::HtmlElement>>,
    selection: Rc<RefCell<ExclusiveSelection>>,
    header: Option<web::HtmlElement>,
    document: web::Document,
    scheduler: Rc<Scheduler>,
}

impl NavClick {
    fn handle(&self, ev: &web::MouseEvent) {
        let link = &self.links[self.index];
        let href = link.get_attribute("href").unwrap_or_default();
        let target_id = fragment_id(&href);
        // leave real page links to the browser
        if target_id.is_some() {
            ev.prevent_default();
        }

        self.selection.borrow_mut().select(self.index);
        dom::sync_active(&self.links, &self.selection.borrow(), CLASS_ACTIVE);

        dom::add_class(link, CLASS_CLICKED);
        let pulsed = link.clone();
        self.scheduler.after(NAV_PULSE_MS, move || {
            dom::remove_class(&pulsed, CLASS_CLICKED);
        });

        if let Some(header) = &self.header {
            dom::add_class(header, CLASS_FLASHING);
            let flashed = header.clone();
            self.scheduler.after(HEADER_FLASH_MS, move || {
                dom::remove_class(&flashed, CLASS_FLASHING);
            });
        }

        let Some(section) = target_id.and_then(|id| self.document.get_element_by_id(id)) else {
            return;
        };
        self.scheduler.after(NAV_SCROLL_DELAY_MS, move || {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
