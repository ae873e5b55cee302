//! A [`Surface`] that records calls instead of drawing.

use crate::surface::*;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Alpha(f32),
    Blend(BlendMode),
    Shadow(Option<Shadow>),
    Smoothing(bool),
    Translate(Vec2),
    Rotate(f32),
    ClipRoundedRect { rect: Rect, radius: f32 },
    FillRect { rect: Rect, paint: Paint },
    FillRoundedRect { rect: Rect, radius: f32, paint: Paint },
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    StrokeLine { segment: Segment, color: Rgba, width: f32 },
    DrawImage { image: u32, rect: Rect },
}

impl DrawOp {
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawOp::Clear
                | DrawOp::FillRect { .. }
                | DrawOp::FillRoundedRect { .. }
                | DrawOp::FillCircle { .. }
                | DrawOp::StrokeLine { .. }
                | DrawOp::DrawImage { .. }
        )
    }
}

/// Outlives the surface it was taken from.
#[derive(Clone, Debug, Default)]
pub struct DrawLog(Rc<RefCell<Vec<DrawOp>>>);

impl DrawLog {
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.0.borrow().clone()
    }

    pub fn draw_count(&self) -> usize {
        self.0.borrow().iter().filter(|op| op.is_draw()).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, op: DrawOp) {
        self.0.borrow_mut().push(op);
    }
}

/// Image stand-in whose load state a test can flip at any time.
#[derive(Clone, Debug)]
pub struct RecordedImage {
    pub id: u32,
    loaded: Rc<Cell<bool>>,
}

impl RecordedImage {
    pub fn new(id: u32, loaded: bool) -> Self {
        Self {
            id,
            loaded: Rc::new(Cell::new(loaded)),
        }
    }

    pub fn set_loaded(&self, loaded: bool) {
        self.loaded.set(loaded);
    }
}

impl ImageAsset for RecordedImage {
    fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}

pub struct RecordingSurface {
    size: Vec2,
    log: DrawLog,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            log: DrawLog::default(),
        }
    }

    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }
}

impl Surface for RecordingSurface {
    type Image = RecordedImage;

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.log.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.log.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.log.push(DrawOp::Restore);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.log.push(DrawOp::Alpha(alpha));
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.log.push(DrawOp::Blend(mode));
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.log.push(DrawOp::Shadow(shadow));
    }

    fn set_smoothing(&mut self, enabled: bool) {
        self.log.push(DrawOp::Smoothing(enabled));
    }

    fn translate(&mut self, offset: Vec2) {
        self.log.push(DrawOp::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.log.push(DrawOp::Rotate(radians));
    }

    fn clip_rounded_rect(&mut self, rect: Rect, radius: f32) {
        self.log.push(DrawOp::ClipRoundedRect { rect, radius });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.log.push(DrawOp::FillRect { rect, paint: *paint });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: &Paint) {
        self.log.push(DrawOp::FillRoundedRect {
            rect,
            radius,
            paint: *paint,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.log.push(DrawOp::FillCircle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn stroke_lines<I>(&mut self, lines: I, color: Rgba, width: f32)
    where
        I: IntoIterator<Item = Segment>,
    {
        for segment in lines {
            self.log.push(DrawOp::StrokeLine {
                segment,
                color,
                width,
            });
        }
    }

    fn draw_image(&mut self, image: &RecordedImage, rect: Rect) {
        self.log.push(DrawOp::DrawImage {
            image: image.id,
            rect,
        });
    }
}
