//! Wires the scroll, pointer, and typing effects to the live document.
//!
//! Every handler leans on the pure helpers in [`crate::effects`] and
//! [`crate::cursor`]; this module only moves values between DOM events and
//! inline styles or class lists.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, DomRect, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use super::render;
use crate::config;
use crate::config::dom;
use crate::cursor::CursorTrail;
use crate::effects::{self, ClassList, StyleSurface, Typewriter};
use crate::error::SetupError;
use crate::viewport;

impl ClassList for Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

impl StyleSurface for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }
}

/// Attach every page effect. Order matters in one place: hover magnetism
/// registers before card tilt so that tilt writes the final transform on
/// project cards.
pub fn wire(window: &Window, document: &Document) -> Result<(), JsValue> {
    wire_reveal(document)?;
    wire_navbar(window, document)?;
    wire_nav_clicks(document)?;
    wire_active_sections(document)?;
    wire_tagline(window, document)?;
    wire_progress_bar(window, document)?;
    wire_cursor(window, document)?;
    wire_hover_targets(document)?;
    wire_card_tilt(document)?;
    wire_parallax(window, document)?;
    Ok(())
}

/// Reveal-on-scroll: each `.reveal` element gets its `show` class the first
/// time a fifth of it enters the viewport, then leaves the observer.
fn wire_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = elements(document, dom::REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    target.add_class(dom::CLASS_SHOW);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

fn wire_navbar(window: &Window, document: &Document) -> Result<(), JsValue> {
    let nav = require(document, dom::NAV_SELECTOR)?;
    let on_scroll = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            effects::apply_nav_state(scroll_y, &nav);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Fragment anchors scroll smoothly instead of jumping, and the clicked
/// link claims the `active` highlight right away rather than waiting for
/// the section observer to catch up. The href is read at click time so late
/// edits to the link still resolve. Bare `#` hrefs keep their default
/// behavior.
fn wire_nav_clicks(document: &Document) -> Result<(), JsValue> {
    let links = elements(document, dom::NAV_LINKS_SELECTOR)?;
    for anchor in elements(document, dom::ANCHOR_SELECTOR)? {
        let on_click = {
            let anchor = anchor.clone();
            let links = links.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let href = anchor.get_attribute("href");
                let Some(id) = href.as_deref().and_then(effects::fragment_target) else {
                    return;
                };
                event.prevent_default();
                for link in &links {
                    effects::apply_active_link(link.get_attribute("href").as_deref(), id, link);
                }
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                if let Some(section) = document.get_element_by_id(id) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Highlight the nav link of whichever section currently fills half the
/// viewport.
fn wire_active_sections(document: &Document) -> Result<(), JsValue> {
    let sections = elements(document, dom::SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Ok(());
    }
    let links = elements(document, dom::NAV_LINKS_SELECTOR)?;

    let callback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(id) = entry.target().get_attribute("id") else {
                    continue;
                };
                for link in &links {
                    effects::apply_active_link(link.get_attribute("href").as_deref(), &id, link);
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::SECTION_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}

/// Types the hero tagline one character at a time over a chain of timeouts,
/// starting shortly after the window load event.
fn wire_tagline(window: &Window, document: &Document) -> Result<(), JsValue> {
    let tagline = document
        .get_element_by_id(dom::TAGLINE_ID)
        .ok_or(SetupError::MissingElement(dom::TAGLINE_ID))?;

    // `step` holds the per-character closure so it can re-arm its own
    // timeout, same shape as the animation-frame loop in render.
    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let chain = step.clone();
    let mut writer = Typewriter::new(config::TAGLINE_TEXT);
    let mut shown = String::new();
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(ch) = writer.step() else {
            return;
        };
        shown.push(ch);
        tagline.set_text_content(Some(&shown));
        if let Some(window) = web_sys::window() {
            if let Some(callback) = chain.borrow().as_ref() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    config::TAGLINE_CHAR_DELAY_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));

    let kickoff = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            if let Some(callback) = step.borrow().as_ref() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    config::TAGLINE_START_DELAY_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("load", kickoff.as_ref().unchecked_ref())?;
    kickoff.forget();
    Ok(())
}

fn wire_progress_bar(window: &Window, document: &Document) -> Result<(), JsValue> {
    let bar = document
        .get_element_by_id(dom::SCROLL_BAR_ID)
        .ok_or(SetupError::MissingElement(dom::SCROLL_BAR_ID))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementType {
            target: dom::SCROLL_BAR_ID,
            expected: "html element",
        })?;
    let on_scroll = Closure::wrap(Box::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let (_, viewport_h) = render::inner_size(&window);
        let pct = effects::scroll_progress(scroll_y, f64::from(root.scroll_height()), viewport_h);
        bar.set_style("width", &format!("{pct}%"));
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Custom cursor: the dot pins to the pointer on every mouse move, while the
/// outline chases it from its own animation-frame loop.
fn wire_cursor(window: &Window, document: &Document) -> Result<(), JsValue> {
    let dot = require_html(document, dom::CURSOR_DOT_SELECTOR)?;
    let outline = require_html(document, dom::CURSOR_OUTLINE_SELECTOR)?;

    let pointer = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

    let on_move = {
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let x = f64::from(event.client_x());
            let y = f64::from(event.client_y());
            pointer.set((x, y));
            dot.set_style("left", &format!("{x}px"));
            dot.set_style("top", &format!("{y}px"));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_down = {
        let outline = outline.clone();
        Closure::wrap(Box::new(move || {
            outline.add_class(dom::CLASS_CLICK);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_up = {
        let outline = outline.clone();
        Closure::wrap(Box::new(move || {
            outline.remove_class(dom::CLASS_CLICK);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut trail = CursorTrail::new(config::CURSOR_EASE);
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let (tx, ty) = pointer.get();
        let (x, y) = trail.follow(tx, ty);
        outline.set_style("left", &format!("{x}px"));
        outline.set_style("top", &format!("{y}px"));

        if let Some(window) = web_sys::window() {
            let _ = window
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

/// Interactive elements swell the cursor outline and drift toward the
/// pointer while it hovers them.
fn wire_hover_targets(document: &Document) -> Result<(), JsValue> {
    let outline = require_html(document, dom::CURSOR_OUTLINE_SELECTOR)?;

    for el in elements(document, dom::HOVER_SELECTOR)? {
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            continue;
        };

        let on_enter = {
            let outline = outline.clone();
            Closure::wrap(Box::new(move || {
                outline.set_style(
                    "transform",
                    &effects::cursor_scale_css(config::CURSOR_HOVER_SCALE),
                );
            }) as Box<dyn FnMut()>)
        };
        el.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
        on_enter.forget();

        let on_leave = {
            let outline = outline.clone();
            let el = el.clone();
            Closure::wrap(Box::new(move || {
                outline.set_style("transform", &effects::cursor_scale_css(1.0));
                el.set_style("transform", &effects::translate_css(0.0, 0.0));
            }) as Box<dyn FnMut()>)
        };
        el.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();

        let on_magnet = {
            let el = el.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = element_box(&el.get_bounding_client_rect());
                let (dx, dy) = effects::magnet_shift(
                    rect,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                el.set_style("transform", &effects::translate_css(dx, dy));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        el.add_event_listener_with_callback("mousemove", on_magnet.as_ref().unchecked_ref())?;
        on_magnet.forget();
    }
    Ok(())
}

fn wire_card_tilt(document: &Document) -> Result<(), JsValue> {
    for card in elements(document, dom::CARD_SELECTOR)? {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };

        let on_move = {
            let card = card.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = element_box(&card.get_bounding_client_rect());
                let tilt = effects::CardTilt::from_pointer(
                    rect,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                card.set_style("transform", &tilt.css());
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let on_leave = {
            let card = card.clone();
            Closure::wrap(Box::new(move || {
                card.set_style("transform", &effects::CardTilt::rest().css());
            }) as Box<dyn FnMut()>)
        };
        card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

/// Hero image and copy drift against the pointer on wide windows. The width
/// gate is evaluated once at load, like the helix gate.
fn wire_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (width, _) = render::inner_size(window);
    if !viewport::parallax_enabled(width) {
        return Ok(());
    }

    let hero = require(document, dom::HERO_SELECTOR)?;
    let image = require_html(document, dom::HERO_IMAGE_SELECTOR)?;
    let content = require_html(document, dom::HERO_CONTENT_SELECTOR)?;

    let on_move = {
        let hero = hero.clone();
        let image = image.clone();
        let content = content.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            // Measured against the hero's own box so the rest point stays at
            // its visual center after the page scrolls.
            let rect = element_box(&hero.get_bounding_client_rect());
            let shift = effects::ParallaxShift::from_pointer(
                rect,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            image.set_style(
                "transform",
                &effects::translate_css(shift.image.0, shift.image.1),
            );
            content.set_style(
                "transform",
                &effects::translate_css(shift.content.0, shift.content.1),
            );
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    hero.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move || {
        let rest = effects::ParallaxShift::rest();
        image.set_style(
            "transform",
            &effects::translate_css(rest.image.0, rest.image.1),
        );
        content.set_style(
            "transform",
            &effects::translate_css(rest.content.0, rest.content.1),
        );
    }) as Box<dyn FnMut()>);
    hero.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();
    Ok(())
}

fn element_box(rect: &DomRect) -> effects::ElementBox {
    effects::ElementBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Look up a selector the page contract guarantees, turning a missing match
/// into a named setup error instead of a null deref later.
fn require(document: &Document, selector: &'static str) -> Result<Element, JsValue> {
    let found = document.query_selector(selector)?;
    found.ok_or_else(|| SetupError::MissingSelector(selector).into())
}

fn require_html(document: &Document, selector: &'static str) -> Result<HtmlElement, JsValue> {
    require(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| {
            SetupError::WrongElementType {
                target: selector,
                expected: "html element",
            }
            .into()
        })
}

/// Collect every element matching `selector`.
fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.item(index) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}
