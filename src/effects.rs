use crate::core::{LiveSet, SiteContent, TransformState};
use crate::cursor::FrameLoop;
use crate::dom::Listener;
use crate::reveal::RevealObserver;
use crate::timers::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// What every feature gets to work with at install time.
pub struct Page {
    pub document: web::Document,
    pub content: Rc<SiteContent>,
}

pub type Install = fn(&Page, &mut Effects) -> anyhow::Result<()>;

/// Transient elements appended to the page (ripples) that teardown removes
/// if their own cleanup has not run yet.
pub type LiveElements = Rc<RefCell<LiveSet<web::HtmlElement>>>;

/// Everything the installed features keep alive: listeners, the cursor frame
/// loop, the reveal observer and pending timers. Dropping it detaches the
/// whole site.
#[derive(Default)]
pub struct Effects {
    listeners: Vec<Listener>,
    frame_loop: Option<FrameLoop>,
    reveal: Option<RevealObserver>,
    transforms: Vec<(web::HtmlElement, Rc<RefCell<TransformState>>)>,
    scheduler: Rc<Scheduler>,
    live: LiveElements,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn set_frame_loop(&mut self, frame_loop: FrameLoop) {
        self.frame_loop = Some(frame_loop);
    }

    pub fn set_reveal(&mut self, observer: RevealObserver) {
        self.reveal = Some(observer);
    }

    pub fn scheduler(&self) -> Rc<Scheduler> {
        self.scheduler.clone()
    }

    pub fn live_elements(&self) -> LiveElements {
        self.live.clone()
    }

    /// The transform record shared by every effect that moves `el`.
    pub fn transform_for(&mut self, el: &web::HtmlElement) -> Rc<RefCell<TransformState>> {
        if let Some((_, state)) = self.transforms.iter().find(|(e, _)| e == el) {
            return state.clone();
        }
        let state = Rc::new(RefCell::new(TransformState::new()));
        self.transforms.push((el.clone(), state.clone()));
        state
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn teardown(mut self) {
        let timers = self.scheduler.pending();
        self.scheduler.cancel_all();
        let listeners = self.listeners.len();
        self.listeners.clear();
        self.frame_loop.take();
        self.reveal.take();
        self.transforms.clear();
        // their cleanup timers were just cancelled
        let leftovers = self.live.borrow_mut().drain();
        for el in &leftovers {
            el.remove();
        }
        log::info!(
            "[site] teardown: {} listeners detached, {} timers cancelled, {} elements removed",
            listeners,
            timers,
            leftovers.len()
        );
    }
}
