//! Canvas 2D render adapter

use game_core::{Color, RenderAdapter};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl RenderAdapter for CanvasRenderer {
    type Error = JsValue;

    fn clear(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn draw_dashed_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        dash: &[f32],
        color: Color,
    ) -> Result<(), JsValue> {
        let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d as f64)).collect();

        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_dash(&pattern)?;
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        self.ctx.line_to(x1 as f64, y1 as f64);
        self.ctx.stroke();
        // Solid lines for anything drawn after the net
        self.ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }
}
