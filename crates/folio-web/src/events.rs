use crate::constants::HERO_ID;
use crate::dom;
use crate::input;
use folio_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer handlers on the hero section: `pointermove` pushes fresh NDC
/// coordinates with `active = true`; `pointerleave` only drops the flag, so
/// the bulge eases out in place.
pub fn wire_pointer_handlers(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let Some(hero) = document.get_element_by_id(HERO_ID) else {
        log::error!("missing #{HERO_ID}; pointer warp disabled");
        return;
    };

    {
        let hero_rect_el = hero.clone();
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let [x, y] = input::pointer_ndc(&ev, &hero_rect_el);
            let mut p = pointer.borrow_mut();
            p.x = x;
            p.y = y;
            p.active = true;
        }) as Box<dyn FnMut(_)>);
        _ = hero.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        _ = hero.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the canvas backing store in sync with its CSS size and flag the
/// frame loop to rebuild the grid on the next tick.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, resize_pending: Rc<RefCell<bool>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        *resize_pending.borrow_mut() = true;
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
