//! Canvas-2D drawing adapter
//!
//! A stateless read of simulation state: background blit, speaker blit, and
//! the stroked camera frame. Never feeds back into the simulation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::FRAME_OUTLINE_WIDTH;
use crate::sim::GameState;

/// Owns the 2D context and the two sprite images
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    background: HtmlImageElement,
    speaker: HtmlImageElement,
    /// Solid outline during invincibility instead of flashing (accessibility)
    reduced_flash: bool,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, reduced_flash: bool) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        // Fire and forget: drawing an image that hasn't finished loading is a
        // silent no-op on the canvas, so no load tracking is needed.
        let background = HtmlImageElement::new()?;
        background.set_src("fon.png");
        let speaker = HtmlImageElement::new()?;
        speaker.set_src("Speaker.png");

        Ok(Self {
            ctx,
            background,
            speaker,
            reduced_flash,
        })
    }

    /// Draw one frame from the current state
    pub fn render(&self, state: &GameState) {
        let w = state.playfield.width as f64;
        let h = state.playfield.height as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(&self.background, 0.0, 0.0, w, h)
            .ok();

        let rect = state.speaker.rect;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                &self.speaker,
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            )
            .ok();

        let color = if state.flash_on() && !self.reduced_flash {
            "blue"
        } else {
            "red"
        };
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(FRAME_OUTLINE_WIDTH);
        self.ctx.stroke_rect(
            state.frame.x as f64,
            state.frame.y as f64,
            state.frame.width as f64,
            state.frame.height as f64,
        );
    }
}
