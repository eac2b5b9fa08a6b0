use std::f64::consts::TAU;

use taskview::model::Point;
use taskview::render::{FillStyle, StrokeStyle, Surface};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::interop;

/// [`Surface`] backed by a 2D canvas and an optional caption element.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    caption: Option<Element>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, caption: Option<Element>) -> Result<CanvasSurface, wasm_bindgen::JsValue> {
        let ctx = interop::context_2d(&canvas)?;
        Ok(CanvasSurface { canvas, ctx, caption })
    }

    pub fn from_ids(canvas_id: &str, caption_id: &str) -> Result<CanvasSurface, wasm_bindgen::JsValue> {
        let doc = interop::document()?;
        let canvas = interop::canvas(&doc, canvas_id)?;
        let caption = interop::element(&doc, caption_id)?;
        CanvasSurface::new(canvas, Some(caption))
    }

    fn trace(&self, pts: &[Point]) {
        self.ctx.begin_path();
        for (i, p) in pts.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x, p.y);
            } else {
                self.ctx.line_to(p.x, p.y);
            }
        }
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        self.ctx.set_line_width(style.width);
        interop::set_stroke_style(&self.ctx, &style.color.css());
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_polygon(&mut self, pts: &[Point], style: &FillStyle) {
        self.trace(pts);
        self.ctx.set_global_alpha(style.alpha);
        interop::set_fill_style(&self.ctx, &style.color.css());
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_polyline(&mut self, pts: &[Point], closed: bool, style: &StrokeStyle) {
        self.trace(pts);
        if closed {
            self.ctx.close_path();
        }
        self.apply_stroke(style);
        self.ctx.stroke();
    }

    fn stroke_circles(&mut self, centers: &[Point], radius: f64, style: &StrokeStyle) {
        self.ctx.begin_path();
        for c in centers {
            self.ctx.move_to(c.x + radius, c.y);
            let _ = self.ctx.arc(c.x, c.y, radius, 0.0, TAU);
        }
        self.apply_stroke(style);
        self.ctx.stroke();
    }

    fn set_caption(&mut self, text: &str) {
        if let Some(el) = &self.caption {
            el.set_text_content(Some(text));
        }
    }
}
