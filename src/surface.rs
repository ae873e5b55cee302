use glam::Vec2;
use portfolio_core::{
    BlendMode, ImageAsset, Paint, RadialGradient, Rect, Rgba, Segment, Shadow, Surface,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// a failed load only logs; `loaded` stays false
#[derive(Clone)]
pub struct WebImage {
    el: web::HtmlImageElement,
    loaded: Rc<Cell<bool>>,
}

impl WebImage {
    pub fn load(src: &str) -> anyhow::Result<Self> {
        let el = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_cross_origin(Some("anonymous"));
        el.set_src(src);
        let loaded = Rc::new(Cell::new(false));

        let decode = el.decode();
        let flag = loaded.clone();
        let src_owned = src.to_string();
        spawn_local(async move {
            match JsFuture::from(decode).await {
                Ok(_) => {
                    flag.set(true);
                    log::info!("[image] ready {}", src_owned);
                }
                Err(e) => log::warn!("[image] failed {}: {:?}", src_owned, e),
            }
        });
        Ok(Self { el, loaded })
    }
}

impl ImageAsset for WebImage {
    fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}

pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = crate::dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_string()),
            Paint::Radial(g) => match self.gradient(g) {
                Some(grad) => self.ctx.set_fill_style_canvas_gradient(&grad),
                None => self.ctx.set_fill_style_str(&g.outer.to_string()),
            },
        }
    }

    fn gradient(&self, g: &RadialGradient) -> Option<web::CanvasGradient> {
        let grad = self
            .ctx
            .create_radial_gradient(
                g.inner_center.x as f64,
                g.inner_center.y as f64,
                g.inner_radius.max(0.0) as f64,
                g.outer_center.x as f64,
                g.outer_center.y as f64,
                g.outer_radius.max(0.0) as f64,
            )
            .ok()?;
        _ = grad.add_color_stop(0.0, &g.inner.to_string());
        _ = grad.add_color_stop(1.0, &g.outer.to_string());
        Some(grad)
    }

    fn rounded_rect_path(&self, rect: Rect, radius: f32) {
        let r = rect.fit_radius(radius) as f64;
        let (x, y) = (rect.origin.x as f64, rect.origin.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        _ = ctx.arc_to(x, y + h, x, y, r);
        _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }
}

impl Surface for Canvas2dSurface {
    type Image = WebImage;

    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.x as f64, s.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        match shadow {
            Some(s) => {
                self.ctx.set_shadow_color(&s.color.to_string());
                self.ctx.set_shadow_blur(s.blur as f64);
                self.ctx.set_shadow_offset_y(s.offset_y as f64);
            }
            None => {
                self.ctx.set_shadow_color(&Rgba::TRANSPARENT.to_string());
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_shadow_offset_y(0.0);
            }
        }
    }

    fn set_smoothing(&mut self, enabled: bool) {
        self.ctx.set_image_smoothing_enabled(enabled);
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn clip_rounded_rect(&mut self, rect: Rect, radius: f32) {
        self.rounded_rect_path(rect, radius);
        self.ctx.clip();
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.rounded_rect_path(rect, radius);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn stroke_lines<I>(&mut self, lines: I, color: Rgba, width: f32)
    where
        I: IntoIterator<Item = Segment>,
    {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        for s in lines {
            self.ctx.move_to(s.from.x as f64, s.from.y as f64);
            self.ctx.line_to(s.to.x as f64, s.to.y as f64);
        }
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &WebImage, rect: Rect) {
        _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &image.el,
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}
