use shared::{paint, WheelFrame, WheelGeometry, WheelSurface};
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::CANVAS_SIZE;

/// Paints wheel frames onto a 2D canvas context.
struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl WheelSurface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_disc(&mut self, center_x: f64, center_y: f64, radius: f64, color: &str) {
        self.context.save();
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        let _ = self.context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
        self.context.fill();
        self.context.restore();
    }

    fn fill_slice(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        self.context.begin_path();
        self.context.move_to(center_x, center_y);
        let _ = self.context.arc(center_x, center_y, radius, start_angle, end_angle);
        self.context.close_path();
        self.context.set_fill_style_str(fill);
        self.context.fill();
        self.context.set_stroke_style_str(stroke);
        self.context.set_line_width(stroke_width);
        self.context.stroke();
    }

    fn draw_rotated_label(
        &mut self,
        center_x: f64,
        center_y: f64,
        rotation: f64,
        x: f64,
        y: f64,
        text: &str,
        color: &str,
        font: &str,
    ) {
        self.context.save();
        let _ = self.context.translate(center_x, center_y);
        let _ = self.context.rotate(rotation);
        self.context.set_text_align("right");
        self.context.set_fill_style_str(color);
        self.context.set_font(font);
        let _ = self.context.fill_text(text, x, y);
        self.context.restore();
    }

    fn draw_centered_text(&mut self, x: f64, y: f64, text: &str, color: &str, font: &str) {
        self.context.save();
        self.context.set_text_align("center");
        self.context.set_fill_style_str(color);
        self.context.set_font(font);
        let _ = self.context.fill_text(text, x, y);
        self.context.restore();
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub frame: WheelFrame,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.frame.clone(), move |frame| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match context_2d(&canvas) {
                    Some(context) => {
                        let geometry = WheelGeometry::for_canvas(canvas.width() as f64, canvas.height() as f64);
                        paint(frame, &geometry, &mut CanvasSurface { context: &context });
                    }
                    None => log::error!("canvas has no 2d context"),
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative w-full max-w-[420px] mx-auto">
            // Pointer at the top of the wheel
            <div class="absolute left-1/2 -top-2 -translate-x-1/2 z-10 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[26px] border-l-transparent border-r-transparent border-t-amber-500 drop-shadow" />
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(185, 28, 28, 0.35));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
