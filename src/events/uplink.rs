use crate::audio::AudioCues;
use crate::constants::{CONTACT_FIELD_IDS, CONTACT_FORM_ID};
use crate::dom::{self, TimerDelay};
use crate::notify;
use crate::text::ElementText;
use fx_core::{Notice, ScrambleConfig, Ticker, Uplink, UplinkHost};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The contact form, its submit button and the document notices go to.
struct ContactForm {
    document: web::Document,
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
}

impl ContactForm {
    fn field_value(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => input.value(),
            Err(el) => el
                .dyn_into::<web::HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default(),
        }
    }
}

impl UplinkHost for ContactForm {
    type Label = ElementText;

    fn label(&self) -> ElementText {
        ElementText::new(web::HtmlElement::from(self.button.clone()))
    }

    fn is_locked(&self) -> bool {
        self.button.disabled()
    }

    fn set_locked(&self, locked: bool) {
        self.button.set_disabled(locked);
    }

    fn set_label_text(&self, text: &str) {
        self.button.set_inner_text(text);
    }

    fn fields_complete(&self) -> bool {
        CONTACT_FIELD_IDS
            .iter()
            .all(|id| !self.field_value(id).is_empty())
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn notify(&self, notice: Notice) {
        if let Err(e) = notify::show(&self.document, notice) {
            log::warn!("[uplink] notice not shown: {:?}", e);
        }
    }
}

/// Submitting the contact form plays the uplink sequence on its button
/// instead of posting the page.
pub fn wire_contact_form(document: &web::Document, ticker: &Ticker, cues: &AudioCues) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = form
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::warn!("[uplink] #{} has no button", CONTACT_FORM_ID);
        return;
    };

    let host = ContactForm {
        document: document.clone(),
        form: form.clone(),
        button,
    };
    let uplink = match Uplink::new(
        host,
        cues.clone(),
        TimerDelay,
        ticker.clone(),
        ScrambleConfig::default(),
    ) {
        Ok(u) => Rc::new(u),
        Err(e) => {
            log::error!("[uplink] disabled: {}", e);
            return;
        }
    };

    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if let Some(sequence) = uplink.submit(rand::random()) {
            spawn_local(async move {
                let outcome = sequence.await;
                log::debug!("[uplink] {:?}", outcome);
            });
        }
    });
}
