//! Canvas 2D backend

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::Canvas;

impl Canvas for CanvasRenderingContext2d {
    type Image = HtmlImageElement;

    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(
            self,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn draw_image(&mut self, image: &HtmlImageElement, pos: Vec2, size: Vec2) {
        // Broken or still-loading images draw nothing
        if !image.complete() || image.natural_width() == 0 {
            return;
        }
        let _ = self.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: &str) {
        self.begin_path();
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.set_stroke_style_str(color);
        self.stroke();
        self.close_path();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.set_font(font);
        self.set_fill_style_str(color);
        let _ = CanvasRenderingContext2d::fill_text(self, text, pos.x as f64, pos.y as f64);
    }
}
