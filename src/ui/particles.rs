//! Canvas renderer for the hero particle field

use leptos::prelude::*;

use crate::core::particles::FieldOptions;

#[cfg(not(feature = "ssr"))]
use crate::core::particles::{LINK_COLOR, ParticleField, ParticleKind};
#[cfg(not(feature = "ssr"))]
use leptos::{wasm_bindgen::JsCast, wasm_bindgen::closure::Closure, web_sys};
#[cfg(not(feature = "ssr"))]
use send_wrapper::SendWrapper;
#[cfg(not(feature = "ssr"))]
use std::{cell::RefCell, rc::Rc};

/// Slot holding a self-scheduling animation frame callback
#[cfg(not(feature = "ssr"))]
type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Full-bleed animated particle background. Purely decorative.
#[component]
pub fn ParticleCanvas(
    /// Field parameters
    #[prop(default = FieldOptions::default())]
    options: FieldOptions,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let started = StoredValue::new(false);
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);
            if let Err(err) = start_animation(canvas, options) {
                leptos::logging::warn!("particle canvas unavailable: {:?}", err);
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = options;

    view! {
        <canvas
            node_ref=canvas_ref
            class="absolute inset-0 pointer-events-none"
            style="z-index: 1;"
            aria-hidden="true"
        />
    }
}

#[cfg(not(feature = "ssr"))]
fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let read = |value: Result<leptos::wasm_bindgen::JsValue, _>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[cfg(not(feature = "ssr"))]
fn start_animation(
    canvas: web_sys::HtmlCanvasElement,
    options: FieldOptions,
) -> Result<(), leptos::wasm_bindgen::JsValue> {
    use leptos::ev::{mousemove, resize};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

    let window = web_sys::window().ok_or("no window")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let (width, height) = viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        options,
        js_sys::Math::random,
    )));

    let resize_handle = {
        let field = field.clone();
        let canvas = canvas.clone();
        window_event_listener(resize, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.borrow_mut().resize(width, height);
        })
    };

    let pointer_handle = {
        let field = field.clone();
        let canvas = canvas.clone();
        window_event_listener(mousemove, move |ev| {
            let rect = canvas.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let inside = x >= 0.0 && y >= 0.0 && x <= rect.width() && y <= rect.height();
            field
                .borrow_mut()
                .set_pointer(inside.then_some((x, y)));
        })
    };

    let running = Arc::new(AtomicBool::new(true));
    let frame_id = Arc::new(AtomicI32::new(0));

    // Self-referencing rAF closure
    let frame: FrameSlot = Rc::new(RefCell::new(None));
    let first = frame.clone();
    {
        let running = running.clone();
        let frame_id = frame_id.clone();
        *first.borrow_mut() = Some(Closure::new(move || {
            if !running.load(Ordering::Relaxed) {
                return;
            }
            {
                let mut field = field.borrow_mut();
                field.step();
                draw(&ctx, &field);
            }
            if let (Some(window), Some(callback)) = (web_sys::window(), frame.borrow().as_ref()) {
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    frame_id.store(id, Ordering::Relaxed);
                }
            }
        }));
    }

    if let Some(callback) = first.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        frame_id.store(id, Ordering::Relaxed);
    }

    // The closure owns the only other handle to its slot; emptying the slot
    // releases the closure, the field and the context.
    let slot = SendWrapper::new(first);
    on_cleanup(move || {
        running.store(false, Ordering::Relaxed);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(frame_id.load(Ordering::Relaxed));
        }
        release_frame(&**slot);
        resize_handle.remove();
        pointer_handle.remove();
    });

    Ok(())
}

/// Drop the callback held in `slot`, breaking the cycle when the callback
/// holds a handle to its own slot. Must not run from inside the callback.
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn release_frame<F>(slot: &std::cell::RefCell<Option<F>>) {
    let released = slot.borrow_mut().take();
    drop(released);
}

#[cfg(not(feature = "ssr"))]
fn draw(ctx: &web_sys::CanvasRenderingContext2d, field: &ParticleField) {
    use std::f64::consts::TAU;

    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    ctx.set_stroke_style_str(LINK_COLOR);
    ctx.set_line_width(0.5);
    for link in field.links() {
        ctx.set_global_alpha(link.alpha);
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }

    for p in &field.particles {
        ctx.set_global_alpha(p.opacity);
        ctx.set_fill_style_str(p.color);
        match p.kind {
            ParticleKind::Data => {
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, p.size, 0.0, TAU);
                ctx.fill();
            }
            ParticleKind::Neural => {
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, p.size * 0.5, 0.0, TAU);
                ctx.fill();
                ctx.set_stroke_style_str(p.color);
                ctx.set_line_width(1.0);
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, p.size * 1.5, 0.0, TAU);
                ctx.stroke();
            }
            ParticleKind::Spark => {
                ctx.fill_rect(p.x - p.size / 2.0, p.y - p.size / 2.0, p.size, p.size);
            }
        }
    }
    ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::release_frame;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_release_frame_breaks_self_reference() {
        let slot: Rc<RefCell<Option<Box<dyn Fn() -> usize>>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        *slot.borrow_mut() = Some(Box::new(move || Rc::strong_count(&inner)));
        assert_eq!(Rc::strong_count(&slot), 2);

        release_frame(&*slot);

        assert!(slot.borrow().is_none());
        assert_eq!(Rc::strong_count(&slot), 1);
    }
}
