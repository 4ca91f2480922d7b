use crate::clipboard;
use crate::constants::*;
use crate::core::{
    compose_draft_text, draft_body_html, CopyFeedback, DraftTemplate, ExclusiveSelection,
    SiteContent,
};
use crate::dom::{self, Listener};
use crate::effects::{Effects, Page};
use crate::timers::{Schedule, TimerSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Make `el` visible, optionally replacing its text, and hide it again after
/// `visible_ms`. A newer call restarts the countdown.
fn flash_message(el: &web::HtmlElement, text: Option<&str>, visible_ms: u32, hide: &TimerSlot) {
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    dom::set_style(el, "opacity", "1");
    let el = el.clone();
    hide.schedule(visible_ms, move || dom::set_style(&el, "opacity", "0"));
}

pub fn install_email_copy(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let doc = &page.document;
    let (Some(button), Some(email_el), Some(result_el)) = (
        dom::by_id(doc, ID_COPY_EMAIL),
        dom::by_id(doc, ID_EMAIL_TEXT),
        dom::by_id(doc, ID_COPY_RESULT),
    ) else {
        log::debug!("[contact] email copy controls missing");
        return Ok(());
    };
    dom::add_class(&button, CLASS_MAGNETIC);

    let hide = TimerSlot::new();
    fx.listen(Listener::new(&button, "click", move |_: web::MouseEvent| {
        let email = email_el.text_content().unwrap_or_default().trim().to_string();
        if email.is_empty() {
            return;
        }
        let (result_el, hide) = (result_el.clone(), hide.downgrade());
        spawn_local(async move {
            let outcome = clipboard::write_text(&email).await;
            if let Err(e) = &outcome {
                log::warn!("[contact] {}", e);
            }
            let (text, visible_ms) = CopyFeedback::from_result(&outcome).message(
                (MSG_EMAIL_COPIED, COPY_OK_VISIBLE_MS),
                (MSG_EMAIL_COPY_FAILED, COPY_FAIL_VISIBLE_MS),
            );
            // torn down while the clipboard was pending
            let Some(hide) = hide.upgrade() else {
                return;
            };
            flash_message(&result_el, Some(text), visible_ms, &hide);
        });
    })?);
    Ok(())
}

struct DraftView {
    subject: web::HtmlElement,
    body: web::HtmlElement,
    display: Option<web::HtmlElement>,
}

impl DraftView {
    fn show(&self, template: &DraftTemplate) {
        self.subject.set_text_content(Some(&template.subject));
        self.body.set_inner_html(&draft_body_html(&template.body));
    }

    fn set_opacity(&self, value: &str) {
        if let Some(display) = &self.display {
            dom::set_style(display, "opacity", value);
        }
    }
}

/// Category buttons swap the displayed template; "copy draft" puts the
/// selected one on the clipboard.
pub fn install_drafts(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let doc = &page.document;
    let buttons = dom::query_all(doc, SEL_DRAFT_BUTTONS)?;
    let (Some(subject), Some(body), Some(copy_button)) = (
        dom::by_id(doc, ID_DRAFT_SUBJECT),
        dom::by_id(doc, ID_DRAFT_BODY),
        dom::by_id(doc, ID_COPY_DRAFT),
    ) else {
        log::debug!("[drafts] draft controls missing");
        return Ok(());
    };
    if buttons.is_empty() {
        log::debug!("[drafts] no {} buttons", SEL_DRAFT_BUTTONS);
        return Ok(());
    }

    let content: Rc<SiteContent> = page.content.clone();
    let view = Rc::new(DraftView {
        subject,
        body,
        display: dom::query_one(doc, SEL_DRAFT_DISPLAY),
    });
    let keys: Vec<Option<String>> = buttons
        .iter()
        .map(|b| b.get_attribute(ATTR_DRAFT_TYPE))
        .collect();

    // Fill the display up front so the layout does not jump on first click.
    let current: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    if let Some(initial) = content.initial_draft() {
        view.show(initial);
        *current.borrow_mut() = Some(initial.key.clone());
    }
    let initial_index = current
        .borrow()
        .as_deref()
        .and_then(|key| keys.iter().position(|k| k.as_deref() == Some(key)));
    let selection = Rc::new(RefCell::new(ExclusiveSelection::new(
        buttons.len(),
        initial_index,
    )));
    if initial_index.is_some() {
        dom::sync_active(&buttons, &selection.borrow(), CLASS_ACTIVE);
    }

    let buttons = Rc::new(buttons);
    let fade = TimerSlot::new();
    for (i, button) in buttons.iter().enumerate() {
        let template = keys[i].as_deref().and_then(|k| content.draft(k)).cloned();
        if template.is_none() {
            log::warn!("[drafts] button {} has no matching template", i);
        }
        let (buttons, selection, current, view, fade) = (
            buttons.clone(),
            selection.clone(),
            current.clone(),
            view.clone(),
            fade.clone(),
        );
        fx.listen(Listener::new(button, "click", move |_: web::MouseEvent| {
            selection.borrow_mut().select(i);
            dom::sync_active(&buttons, &selection.borrow(), CLASS_ACTIVE);

            let Some(template) = template.clone() else {
                return;
            };
            *current.borrow_mut() = Some(template.key.clone());
            view.set_opacity(DRAFT_DIM_OPACITY);
            let view = view.clone();
            fade.schedule(DRAFT_FADE_MS, move || {
                view.show(&template);
                view.set_opacity("1");
            });
        })?);
    }

    let message = dom::by_id(doc, ID_DRAFT_COPY_MSG);
    let hide = TimerSlot::new();
    fx.listen(Listener::new(&copy_button, "click", move |_: web::MouseEvent| {
        let text = current
            .borrow()
            .as_deref()
            .and_then(|key| content.draft(key))
            .map(|t| compose_draft_text(DRAFT_SUBJECT_LABEL, t));
        let Some(text) = text else {
            return;
        };
        let (message, hide) = (message.clone(), hide.downgrade());
        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    if let (Some(message), Some(hide)) = (&message, hide.upgrade()) {
                        flash_message(message, None, DRAFT_COPY_VISIBLE_MS, &hide);
                    }
                }
                Err(e) => log::warn!("[drafts] {}", e),
            }
        });
    })?);
    Ok(())
}
