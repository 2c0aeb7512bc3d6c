use web_sys as web;

/// Convert a pointer event to NDC in \[-1, 1\] against an element's rect.
/// +x is right, +y is up (screen y is flipped).
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, el: &web::Element) -> [f32; 2] {
    let rect = el.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return [0.0, 0.0];
    }
    let x = ((ev.client_x() as f32 - rect.left() as f32) / w) * 2.0 - 1.0;
    let y = -(((ev.client_y() as f32 - rect.top() as f32) / h) * 2.0 - 1.0);
    [x, y]
}
