#![cfg(target_arch = "wasm32")]
use folio_core::{DeviceClass, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod page;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Build the whole page (nav, sections, hero canvas) from the static
    // site config before anything touches the canvas.
    page::render(&document)?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    // Decided once per mount; a resize keeps the mount-time class
    let device = DeviceClass::from_viewport_width(dom::viewport_css_width(&window));

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let resize_pending = Rc::new(RefCell::new(false));
    events::wire_pointer_handlers(&document, pointer.clone());
    events::wire_resize(&canvas, resize_pending.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas,
        device,
        pointer,
        resize_pending,
        gpu,
    )));
    frame::start_loop(frame_ctx);

    Ok(())
}
