use crate::render;
use folio_core::{Camera, DeviceClass, HeroMesh, PointerState, CAMERA_Z};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    canvas: web::HtmlCanvasElement,
    device: DeviceClass,
    pointer: Rc<RefCell<PointerState>>,
    resize_pending: Rc<RefCell<bool>>,
    gpu: Option<render::GpuState<'static>>,
    // None until the canvas has a real size; frames are no-ops until then
    mesh: Option<HeroMesh>,
    started: Instant,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        device: DeviceClass,
        pointer: Rc<RefCell<PointerState>>,
        resize_pending: Rc<RefCell<bool>>,
        gpu: Option<render::GpuState<'static>>,
    ) -> Self {
        Self {
            canvas,
            device,
            pointer,
            resize_pending,
            gpu,
            mesh: None,
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        if width == 0 || height == 0 {
            return;
        }

        let rebuild =
            std::mem::replace(&mut *self.resize_pending.borrow_mut(), false) || self.mesh.is_none();
        if rebuild {
            self.rebuild(width, height);
        }
        let Some(mesh) = self.mesh.as_mut() else {
            return;
        };

        let t = self.started.elapsed().as_secs_f32();
        let pointer = *self.pointer.borrow();
        mesh.update(t, pointer);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            if mesh.take_dirty() {
                g.write_vertices(mesh.vertices());
            }
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Discard the grid and rebuild it for the current canvas size. The
    /// device class stays fixed for the lifetime of the mount.
    fn rebuild(&mut self, width: u32, height: u32) {
        let aspect = width as f32 / height.max(1) as f32;
        let camera = Camera::hero(aspect);
        let (view_w, view_h) = camera.viewport_size(CAMERA_Z);
        let mesh = HeroMesh::new(view_w, view_h, self.device);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            g.set_mvp(camera.hero_mvp());
            g.rebuild_mesh_buffers(&mesh);
        }
        self.mesh = Some(mesh);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
