use web_sys as web;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn viewport_css_width(window: &web::Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Create an element with a class attribute.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let e = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    Ok(e)
}

/// Create an element with a class and text content.
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    Ok(e)
}

/// Create an in-page anchor.
pub fn anchor(
    document: &web::Document,
    class: &str,
    href: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let a = text_el(document, "a", class, text)?;
    _ = a.set_attribute("href", href);
    Ok(a)
}

/// Create an anchor that opens in a new tab.
pub fn external_anchor(
    document: &web::Document,
    class: &str,
    href: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let a = anchor(document, class, href, text)?;
    _ = a.set_attribute("target", "_blank");
    _ = a.set_attribute("rel", "noopener noreferrer");
    Ok(a)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) {
    _ = parent.append_child(child);
}
