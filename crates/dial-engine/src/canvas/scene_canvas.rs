use crate::coords::{Transform, Vec2};
use crate::paint::Pen;
use crate::scene::DrawList;
use crate::text::TextMeasure;

use super::Canvas;

/// [`Canvas`] that records into a [`DrawList`].
///
/// Each frame starts from the identity transform. Primitives are mapped
/// through the accumulated transform before recording, so the list only
/// ever holds absolute surface coordinates.
pub struct SceneCanvas<'a> {
    draw_list: &'a mut DrawList,
    measure: &'a dyn TextMeasure,
    transform: Transform,
}

impl<'a> SceneCanvas<'a> {
    pub fn new(draw_list: &'a mut DrawList, measure: &'a dyn TextMeasure) -> Self {
        Self { draw_list, measure, transform: Transform::IDENTITY }
    }

    /// Transform currently applied to drawn primitives.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }
}

impl Canvas for SceneCanvas<'_> {
    fn draw_circle(&mut self, center: Vec2, radius: f32, pen: &Pen) {
        // Rotations keep lengths, so only the centre moves.
        let center = self.transform.map_point(center);
        self.draw_list.push_circle(center, radius, *pen);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, pen: &Pen) {
        let from = self.transform.map_point(from);
        let to = self.transform.map_point(to);
        self.draw_list.push_line(from, to, *pen);
    }

    fn draw_text(&mut self, text: &str, origin: Vec2, size: f32, pen: &Pen) {
        let origin = self.transform.map_point(origin);
        let rotation = self.transform.rotation_degrees();
        self.draw_list.push_text(text, size, *pen, origin, rotation);
    }

    fn text_bounds(&self, text: &str, size: f32) -> Vec2 {
        self.measure.text_bounds(text, size)
    }

    fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.transform = self.transform.pre_concat(Transform::rotate_around(degrees, pivot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::text::FixedAdvance;

    fn pen() -> Pen {
        Pen::stroke(Color::BLACK, 2.0)
    }

    #[test]
    fn unrotated_primitives_are_recorded_verbatim() {
        let mut list = DrawList::new();
        let measure = FixedAdvance::default();
        let mut canvas = SceneCanvas::new(&mut list, &measure);
        canvas.draw_line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), &pen());
        canvas.draw_circle(Vec2::new(5.0, 5.0), 9.0, &pen());

        let line = list.lines().next().unwrap();
        assert_eq!((line.from, line.to), (Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)));
        assert_eq!(list.circles().next().unwrap().radius, 9.0);
    }

    #[test]
    fn rotated_vertical_line_points_east() {
        let mut list = DrawList::new();
        let measure = FixedAdvance::default();
        let mut canvas = SceneCanvas::new(&mut list, &measure);
        let pivot = Vec2::new(100.0, 100.0);
        canvas.rotate(90.0, pivot);
        canvas.draw_line(pivot, Vec2::new(100.0, 60.0), &pen());

        let line = list.lines().next().unwrap();
        assert!(line.from.distance(pivot) < 1e-4);
        assert!(line.to.distance(Vec2::new(140.0, 100.0)) < 1e-3);
    }

    #[test]
    fn sixty_rotations_of_six_degrees_close_the_circle() {
        let mut list = DrawList::new();
        let measure = FixedAdvance::default();
        let mut canvas = SceneCanvas::new(&mut list, &measure);
        for _ in 0..60 {
            canvas.rotate(6.0, Vec2::new(240.0, 320.0));
        }
        assert!(canvas.transform().approx_identity(1e-2));
    }

    #[test]
    fn text_records_rotation() {
        let mut list = DrawList::new();
        let measure = FixedAdvance::default();
        let mut canvas = SceneCanvas::new(&mut list, &measure);
        canvas.rotate(30.0, Vec2::zero());
        canvas.draw_text("3", Vec2::zero(), 40.0, &pen());
        assert!((list.texts().next().unwrap().rotation - 30.0).abs() < 1e-4);
    }

    #[test]
    fn bounds_come_from_the_measurer() {
        let mut list = DrawList::new();
        let measure = FixedAdvance::new(0.5, 1.0);
        let canvas = SceneCanvas::new(&mut list, &measure);
        assert_eq!(canvas.text_bounds("12", 10.0), Vec2::new(10.0, 10.0));
    }
}
