use fx_core::TextTarget;
use web_sys as web;

/// Scramble target backed by a live element.
pub struct ElementText {
    el: web::HtmlElement,
}

impl ElementText {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl TextTarget for ElementText {
    fn text(&self) -> String {
        self.el.inner_text()
    }

    fn set_markup(&mut self, markup: &str) {
        self.el.set_inner_html(markup);
    }
}
