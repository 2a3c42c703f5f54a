//! Pointer and wheel wiring: drag-to-orbit, scroll-to-zoom, hover tooltip.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use orrery_core::{picking, Command, SolarSim};

use crate::tooltip;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Last client position while latched.
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Client coordinates converted to the canvas' backing-store pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub sim: Rc<RefCell<SolarSim>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    // pointerdown: latch the pointer and begin a camera drag
    {
        let pointer_m = pointer.clone();
        let doc = w.document.clone();
        let canvas_target = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            {
                let mut ps = pointer_m.borrow_mut();
                ps.down = true;
                ps.x = ev.client_x() as f32;
                ps.y = ev.client_y() as f32;
            }
            tooltip::hide(&doc);
            let _ = canvas_target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: drag the camera while latched, otherwise hover-pick
    {
        let pointer_m = pointer.clone();
        let sim_m = w.sim.clone();
        let doc = w.document.clone();
        let canvas_move = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let dragging = pointer_m.borrow().down;
            if dragging {
                let (dx, dy) = {
                    let mut ps = pointer_m.borrow_mut();
                    let dx = ev.client_x() as f32 - ps.x;
                    let dy = ev.client_y() as f32 - ps.y;
                    ps.x = ev.client_x() as f32;
                    ps.y = ev.client_y() as f32;
                    (dx, dy)
                };
                sim_m.borrow_mut().apply(Command::Drag { dx, dy });
                return;
            }
            let pos = pointer_canvas_px(&ev, &canvas_move);
            let hit = picking::pick(
                &sim_m.borrow(),
                canvas_move.width() as f32,
                canvas_move.height() as f32,
                pos.x,
                pos.y,
            );
            match hit {
                Some(hit) => tooltip::show_at(&doc, ev.client_x(), ev.client_y(), hit.name),
                None => tooltip::hide(&doc),
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: end the drag
    {
        let pointer_m = pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer_m.borrow_mut().down = false;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel: zoom, clamped inside the simulation
    {
        let sim_m = w.sim.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            sim_m.borrow_mut().apply(Command::Zoom(ev.delta_y() as f32));
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
