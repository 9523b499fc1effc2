//! [`DrawingSurface`] backed by an HTML canvas 2D context.

use std::f64::consts::TAU;

use canvas_editor_core::surface::{Cursor, DrawingSurface, Shadow};
use canvas_editor_core::EditorError;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

pub struct WebCanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebCanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EditorError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(EditorError::NoSurfaceContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the backing store. Resizing a canvas also wipes it.
    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.round().max(0.0) as u32);
        self.canvas.set_height(size.height.round().max(0.0) as u32);
    }
}

impl DrawingSurface for WebCanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn clear(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, radians: f64) {
        let _ = self.ctx.rotate(radians);
    }

    fn transform(&self) -> Affine {
        match self.ctx.get_transform() {
            Ok(m) => Affine::new([m.a(), m.b(), m.c(), m.d(), m.e(), m.f()]),
            Err(_) => Affine::IDENTITY,
        }
    }

    fn set_shadow(&mut self, shadow: Option<&Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_color(&shadow.color);
                self.ctx.set_shadow_blur(shadow.blur);
                self.ctx.set_shadow_offset_x(shadow.offset_x);
                self.ctx.set_shadow_offset_y(shadow.offset_y);
            }
            None => {
                self.ctx.set_shadow_color("transparent");
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_shadow_offset_x(0.0);
                self.ctx.set_shadow_offset_y(0.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, source: Rect, destination: Rect) {
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x0,
                source.y0,
                source.width(),
                source.height(),
                destination.x0,
                destination.y0,
                destination.width(),
                destination.height(),
            );
        if let Err(err) = result {
            log::warn!("drawImage failed: {err:?}");
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        let _ = self.canvas.style().set_property("cursor", cursor.as_css());
    }
}
