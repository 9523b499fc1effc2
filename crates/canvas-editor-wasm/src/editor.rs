//! The `CanvasEditor` class exported to JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use canvas_editor_core::{Editor, EditorError};
use gloo_events::EventListener;
use kurbo::Point;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{EventTarget, HtmlCanvasElement, MouseEvent};

use crate::loader;
use crate::surface::WebCanvasSurface;
use crate::types::{config_from_js, placement_to_js, to_js_error};

type SharedEditor = Rc<RefCell<Editor<WebCanvasSurface>>>;

/// Interactive image editor bound to one `<canvas>` element.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const editor = new CanvasEditor(canvas, { width: 1200, height: 800 });
/// const placement = await editor.load_image('/photos/cat.jpg');
/// // ...user drags, rotates, resizes and crops...
/// console.log(editor.placement());
/// editor.dispose();
/// ```
#[wasm_bindgen]
pub struct CanvasEditor {
    editor: SharedEditor,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl CanvasEditor {
    /// Attach an editor to `canvas`.
    ///
    /// `options` is an optional object matching `EditorConfig` in camelCase;
    /// omitted fields take their defaults. The canvas is resized to the
    /// configured width and height.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, options: JsValue) -> Result<CanvasEditor, JsValue> {
        let config = config_from_js(options)?;
        let surface = WebCanvasSurface::new(canvas.clone()).map_err(to_js_error)?;
        surface.resize(config.surface_size());

        let editor: SharedEditor = Rc::new(RefCell::new(Editor::new(surface, config)));
        let listeners = install_listeners(&canvas, &editor)?;
        log::debug!("canvas editor attached");

        Ok(CanvasEditor { editor, listeners })
    }

    /// Load the image at `src` and make it the current image.
    ///
    /// Resolves with the initial placement. Rejects when `src` is empty, the
    /// image fails to decode, or a later `load_image` call superseded this one.
    pub fn load_image(&self, src: String) -> js_sys::Promise {
        let editor = Rc::clone(&self.editor);
        future_to_promise(async move {
            // an empty source never takes a ticket, so it cannot cancel a
            // load already in flight
            let src = loader::validate_source(&src).map_err(to_js_error)?;
            let ticket = editor.borrow_mut().begin_load();
            let placement = match loader::load_image(src).await {
                Ok(image) => {
                    let size = loader::natural_size(&image);
                    editor.borrow_mut().finish_load(ticket, image, size)
                }
                Err(err) => Err(editor.borrow_mut().fail_load(ticket, failure_reason(err))),
            }
            .map_err(to_js_error)?;
            placement_to_js(placement)
        })
    }

    /// Load a bitmap to show inside the rotate handle.
    pub fn set_rotate_icon(&self, src: String) -> js_sys::Promise {
        let editor = Rc::clone(&self.editor);
        future_to_promise(async move {
            let image = loader::load_image(&src).await.map_err(to_js_error)?;
            let size = loader::natural_size(&image);
            editor.borrow_mut().set_rotate_icon(image, size);
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Committed placement of the current image, or `null` when there is none.
    pub fn placement(&self) -> Result<JsValue, JsValue> {
        match self.editor.borrow().placement() {
            Some(placement) => placement_to_js(placement),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn redraw(&self) {
        self.editor.borrow_mut().redraw();
    }

    /// Remove the current image and blank the canvas.
    pub fn clear(&self) {
        self.editor.borrow_mut().clear();
    }

    /// Detach every DOM listener. The editor stops reacting to the mouse but
    /// keeps its image until dropped.
    pub fn dispose(&mut self) {
        if !self.listeners.is_empty() {
            log::debug!("detaching {} listeners", self.listeners.len());
        }
        self.listeners.clear();
    }
}

/// Message recorded when a load fails.
fn failure_reason(err: EditorError) -> String {
    match err {
        EditorError::Decode(reason) => reason,
        other => other.to_string(),
    }
}

fn install_listeners(
    canvas: &HtmlCanvasElement,
    editor: &SharedEditor,
) -> Result<Vec<EventListener>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))?;

    Ok(vec![
        pointer_listener(canvas, canvas, "mousedown", editor, |editor, point| {
            editor.pointer_down(point)
        }),
        pointer_listener(&window, canvas, "mousemove", editor, |editor, point| {
            editor.pointer_move(point)
        }),
        pointer_listener(&window, canvas, "mouseup", editor, |editor, point| {
            editor.pointer_up(point);
        }),
    ])
}

fn pointer_listener(
    target: &EventTarget,
    canvas: &HtmlCanvasElement,
    event_type: &'static str,
    editor: &SharedEditor,
    handler: fn(&mut Editor<WebCanvasSurface>, Point),
) -> EventListener {
    let canvas = canvas.clone();
    let editor = Rc::clone(editor);
    EventListener::new(target, event_type, move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let point = canvas_point(&canvas, event);
        match editor.try_borrow_mut() {
            Ok(mut editor) => handler(&mut editor, point),
            Err(_) => log::warn!("{event_type} ignored: editor is busy"),
        }
    })
}

/// Pointer position relative to the canvas's top-left corner.
fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
        Point::new(rect.left(), rect.top()),
    )
}

fn client_to_canvas(client: Point, canvas_origin: Point) -> Point {
    (client - canvas_origin).to_point()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_unwraps_decode_message() {
        assert_eq!(
            failure_reason(EditorError::Decode("could not load image from a.png".to_string())),
            "could not load image from a.png"
        );
        assert_eq!(
            failure_reason(EditorError::EmptySource),
            "Image source is empty"
        );
    }

    #[test]
    fn test_client_to_canvas_subtracts_canvas_origin() {
        let point = client_to_canvas(Point::new(250.0, 180.0), Point::new(50.0, 30.5));
        assert_eq!(point, Point::new(200.0, 149.5));
    }
}
