//! Contact form delivery through the EmailJS browser SDK.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::config;
use crate::config::dom;
use crate::contact::{ContactFlow, Delivery, FormView};
use crate::effects::ClassList;
use crate::error::SetupError;

#[wasm_bindgen]
extern "C" {
    /// `emailjs.sendForm(serviceId, templateId, form)` from the SDK the host
    /// page loads ahead of this module.
    #[wasm_bindgen(js_namespace = emailjs, js_name = sendForm, catch)]
    fn send_form(
        service_id: &str,
        template_id: &str,
        form: &HtmlFormElement,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Wire the contact form if the page has one. A page without the form is
/// fine; a form without its status line or submit button is not.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(dom::CONTACT_FORM_ID) else {
        log::debug!(
            "no #{} on this page, contact form not wired",
            dom::CONTACT_FORM_ID
        );
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into().map_err(|_| SetupError::WrongElementType {
        target: dom::CONTACT_FORM_ID,
        expected: "form",
    })?;
    let status = document
        .get_element_by_id(dom::FORM_STATUS_ID)
        .ok_or(SetupError::MissingElement(dom::FORM_STATUS_ID))?;
    let button = document
        .get_element_by_id(dom::SUBMIT_BTN_ID)
        .ok_or(SetupError::MissingElement(dom::SUBMIT_BTN_ID))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementType {
            target: dom::SUBMIT_BTN_ID,
            expected: "html element",
        })?;

    let flow = Rc::new(RefCell::new(ContactFlow::new()));

    let on_submit = {
        let form = form.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();

            let view = flow.borrow_mut().begin();
            apply_view(&button, &status, &form, &view);

            let flow = flow.clone();
            let form = form.clone();
            let status = status.clone();
            let button = button.clone();
            spawn_local(async move {
                let sent = match send_form(
                    config::EMAIL_SERVICE_ID,
                    config::EMAIL_TEMPLATE_ID,
                    &form,
                ) {
                    Ok(promise) => JsFuture::from(promise).await,
                    Err(err) => Err(err),
                };
                let outcome = match sent {
                    Ok(_) => Delivery::Delivered,
                    Err(err) => {
                        log::error!("email delivery failed: {err:?}");
                        Delivery::Failed
                    }
                };
                let view = flow.borrow_mut().settle(outcome);
                apply_view(&button, &status, &form, &view);
            });
        }) as Box<dyn FnMut(web_sys::Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

/// Push a [`FormView`] onto the live elements.
fn apply_view(button: &HtmlElement, status: &Element, form: &HtmlFormElement, view: &FormView) {
    button.set_inner_text(view.button_label);
    if view.button_busy {
        button.add_class(dom::CLASS_LOADING);
    } else {
        button.remove_class(dom::CLASS_LOADING);
    }

    status.set_class_name(dom::CLASS_FORM_STATUS);
    if let Some(extra) = view.status_class {
        status.add_class(extra);
    }
    status.set_text_content(Some(view.status_text));

    if view.clear_fields {
        form.reset();
    }
}
