use crate::constants::*;
use crate::core::{magnetic_offset, tilt_angles, Bounds, TransformState};
use crate::dom::{self, Listener};
use crate::effects::{Effects, Page};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn apply_transform(el: &web::HtmlElement, state: &TransformState) {
    dom::set_style(el, "transform", &state.css());
}

pub fn install_tilt(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let cards = dom::query_all(&page.document, SEL_TILT_TARGETS)?;
    for card in cards {
        let state = fx.transform_for(&card);
        state.borrow_mut().enable_tilt(TILT_PERSPECTIVE_PX);
        fx.listen(on_move(&card, &state, |s, bounds, client| {
            s.set_rotation(tilt_angles(&bounds, client, TILT_MAX_DEG));
        })?);
        fx.listen(on_leave(&card, &state, TransformState::reset_rotation)?);
    }
    Ok(())
}

pub fn install_magnetic(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let magnets = dom::query_all(&page.document, SEL_MAGNETIC_TARGETS)?;
    for magnet in magnets {
        let state = fx.transform_for(&magnet);
        state.borrow_mut().enable_translate();
        fx.listen(on_move(&magnet, &state, |s, bounds, client| {
            s.set_translation(magnetic_offset(&bounds, client, MAGNETIC_STRENGTH));
        })?);
        // the stylesheet's transition springs it back
        fx.listen(on_leave(&magnet, &state, TransformState::reset_translation)?);
    }
    Ok(())
}

fn on_move(
    el: &web::HtmlElement,
    state: &Rc<RefCell<TransformState>>,
    update: impl Fn(&mut TransformState, Bounds, Vec2) + 'static,
) -> anyhow::Result<Listener> {
    let (target, state) = (el.clone(), state.clone());
    Listener::new(el, "mousemove", move |ev: web::MouseEvent| {
        let bounds = dom::bounds_of(&target);
        let mut s = state.borrow_mut();
        update(&mut s, bounds, dom::client_point(&ev));
        apply_transform(&target, &s);
    })
}

fn on_leave(
    el: &web::HtmlElement,
    state: &Rc<RefCell<TransformState>>,
    reset: fn(&mut TransformState),
) -> anyhow::Result<Listener> {
    let (target, state) = (el.clone(), state.clone());
    Listener::new(el, "mouseleave", move |_: web::MouseEvent| {
        let mut s = state.borrow_mut();
        reset(&mut s);
        apply_transform(&target, &s);
    })
}

pub fn install_spotlight(page: &Page, fx: &mut Effects) -> anyhow::Result<()> {
    let panels = dom::query_all(&page.document, SEL_SPOTLIGHT_TARGETS)?;
    for panel in panels {
        dom::add_class(&panel, CLASS_SPOTLIGHT);

        let target = panel.clone();
        fx.listen(Listener::new(
            &panel,
            "mousemove",
            move |ev: web::MouseEvent| {
                let local = dom::bounds_of(&target).local(dom::client_point(&ev));
                dom::set_style(&target, VAR_MOUSE_X, &format!("{}px", local.x));
                dom::set_style(&target, VAR_MOUSE_Y, &format!("{}px", local.y));
                dom::set_style(&target, VAR_SPOTLIGHT_OPACITY, "1");
            },
        )?);

        let target = panel.clone();
        fx.listen(Listener::new(
            &panel,
            "mouseleave",
            move |_: web::MouseEvent| {
                dom::set_style(&target, VAR_SPOTLIGHT_OPACITY, "0");
            },
        )?);
    }
    Ok(())
}
