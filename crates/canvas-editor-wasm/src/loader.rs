//! Asynchronous image loading through an `<img>` element.

use std::cell::RefCell;
use std::rc::Rc;

use canvas_editor_core::EditorError;
use futures::channel::oneshot;
use gloo_events::EventListener;
use kurbo::Size;
use web_sys::HtmlImageElement;

type LoadSender = Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>;

/// Load and decode the image at `src`.
///
/// Resolves once the browser fires `load` or `error`. The listeners only live
/// for the duration of the call.
pub async fn load_image(src: &str) -> Result<HtmlImageElement, EditorError> {
    let src = validate_source(src)?;
    let image = HtmlImageElement::new().map_err(|e| EditorError::Decode(format!("{e:?}")))?;

    let (tx, rx) = oneshot::channel();
    let tx: LoadSender = Rc::new(RefCell::new(Some(tx)));

    let _on_load = {
        let tx = tx.clone();
        EventListener::once(&image, "load", move |_| settle(&tx, Ok(())))
    };
    let _on_error = {
        let tx = tx.clone();
        let message = format!("could not load image from {src}");
        EventListener::once(&image, "error", move |_| settle(&tx, Err(message)))
    };

    image.set_src(src);

    match rx.await {
        Ok(Ok(())) => Ok(image),
        Ok(Err(message)) => Err(EditorError::Decode(message)),
        Err(_) => Err(EditorError::Decode("image load was cancelled".to_string())),
    }
}

fn settle(tx: &LoadSender, outcome: Result<(), String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

/// Decoded dimensions of a loaded image.
pub fn natural_size(image: &HtmlImageElement) -> Size {
    Size::new(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    )
}

/// Trimmed `src`, or [`EditorError::EmptySource`] when nothing is left.
pub(crate) fn validate_source(src: &str) -> Result<&str, EditorError> {
    let src = src.trim();
    if src.is_empty() {
        Err(EditorError::EmptySource)
    } else {
        Ok(src)
    }
}
