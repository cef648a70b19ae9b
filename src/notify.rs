use crate::constants::NOTICE_CLASS;
use crate::dom;
use fx_core::constants::{NOTICE_EXIT_MS, NOTICE_LIFETIME_MS};
use fx_core::{Notice, NoticeKind};
use wasm_bindgen::JsCast;
use web_sys as web;

const NOTICE_KEYFRAMES: &str = "
  @keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
  }
  @keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
  }
";

/// Add the slide-in/slide-out keyframes used by notices to `<head>`.
pub fn install_styles(document: &web::Document) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_text_content(Some(NOTICE_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Replace any visible notice with `notice`; it slides out after a few seconds.
pub fn show(document: &web::Document, notice: Notice) -> anyhow::Result<()> {
    if let Ok(Some(existing)) = document.query_selector(&format!(".{}", NOTICE_CLASS)) {
        existing.remove();
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(&format!("{} {}", NOTICE_CLASS, notice.modifier_class()));
    el.set_text_content(Some(notice.message));

    let (background, border) = match notice.kind {
        NoticeKind::Success => ("rgba(34, 197, 94, 0.2)", "rgba(34, 197, 94, 0.3)"),
        NoticeKind::Error => ("rgba(239, 68, 68, 0.2)", "rgba(239, 68, 68, 0.3)"),
    };
    let border = format!("1px solid {}", border);
    let style = el.style();
    for (name, value) in [
        ("position", "fixed"),
        ("top", "100px"),
        ("right", "20px"),
        ("padding", "1rem 1.5rem"),
        ("background", background),
        ("border", border.as_str()),
        ("border-radius", "12px"),
        ("color", "#f8fafc"),
        ("backdrop-filter", "blur(12px)"),
        ("z-index", "9999"),
        ("animation", "slideIn 0.3s ease"),
        ("max-width", "400px"),
        ("box-shadow", "0 10px 40px rgba(0, 0, 0, 0.3)"),
    ] {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("{}: {:?}", name, e))?;
    }
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::set_timeout(NOTICE_LIFETIME_MS, move || {
        _ = el.style().set_property("animation", "slideOut 0.3s ease");
        dom::set_timeout(NOTICE_EXIT_MS, move || el.remove());
    });
    Ok(())
}
