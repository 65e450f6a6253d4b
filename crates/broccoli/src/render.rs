//! SVG output for draw instructions.
//!
//! `SvgCanvas` is a `Canvas` that turns every primitive into an SVG element,
//! mapping coordinates through a `Viewport` first. Fractal scenes are authored
//! in canvas pixels and use `Viewport::identity()`; polynomial images live around
//! the origin and are fitted with `Viewport::fit_symmetric`.

use std::io;
use std::path::Path;

use svg::node::element::{Circle as SvgCircle, Polygon, Polyline, Rectangle};
use svg::Document;

use crate::colour::Colour;
use crate::geom2::Point;
use crate::shapes::{Canvas, DrawInstructions, Primitive};

/// Affine map `p ↦ (p.x · scale.x, p.y · scale.y) + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: Point,
    pub offset: Point,
}

impl Viewport {
    pub fn identity() -> Self {
        Self {
            scale: Point::new(1.0, 1.0),
            offset: Point::zeros(),
        }
    }

    /// Centre the origin on a `width × height` canvas and scale so the largest
    /// absolute coordinate among `points` reaches the canvas edge. Both axes share
    /// the same bound. All-zero or empty input keeps unit scale.
    pub fn fit_symmetric<I>(points: I, width: f64, height: f64) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let bound = points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(0.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
        let bound = if bound > 0.0 { bound } else { 1.0 };
        Self {
            scale: Point::new(width / (2.0 * bound), height / (2.0 * bound)),
            offset: Point::new(width / 2.0, height / 2.0),
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        p.component_mul(&self.scale) + self.offset
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

/// Canvas backed by an `svg::Document`.
#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
    viewport: Viewport,
    width: f64,
    height: f64,
    shapes: usize,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));
        Self {
            document,
            viewport: Viewport::identity(),
            width,
            height,
            shapes: 0,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Paint the whole canvas; call before drawing anything else.
    pub fn with_background(mut self, colour: Colour) -> Self {
        let rect = Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", colour.to_string());
        self.push(rect);
        self
    }

    /// Shapes drawn so far (one per `draw` call).
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes == 0
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        svg::save(path, &self.document)
    }

    fn push<N: Into<Box<dyn svg::Node>>>(&mut self, node: N) {
        let document = std::mem::replace(&mut self.document, Document::new());
        self.document = document.add(node);
    }

    fn points(&self, path: &[Point]) -> String {
        path.iter()
            .map(|p| {
                let q = self.viewport.apply(*p);
                format!("{},{}", q.x, q.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn radius(&self, r: f64) -> f64 {
        r * self.viewport.scale.x.abs()
    }
}

impl Canvas for SvgCanvas {
    fn draw(&mut self, instructions: DrawInstructions) {
        for primitive in instructions.primitives {
            match primitive {
                Primitive::Fill { outline, colour } => {
                    let node = Polygon::new()
                        .set("points", self.points(&outline))
                        .set("fill", colour.to_string())
                        .set("stroke", "none");
                    self.push(node);
                }
                Primitive::Stroke {
                    path,
                    closed,
                    colour,
                    thickness,
                } => {
                    let points = self.points(&path);
                    let stroke = colour.to_string();
                    if closed {
                        self.push(
                            Polygon::new()
                                .set("points", points)
                                .set("fill", "none")
                                .set("stroke", stroke)
                                .set("stroke-width", thickness),
                        );
                    } else {
                        self.push(
                            Polyline::new()
                                .set("points", points)
                                .set("fill", "none")
                                .set("stroke", stroke)
                                .set("stroke-width", thickness)
                                .set("stroke-linecap", "round"),
                        );
                    }
                }
                Primitive::Disc {
                    centre,
                    radius,
                    colour,
                } => {
                    let c = self.viewport.apply(centre);
                    let node = SvgCircle::new()
                        .set("cx", c.x)
                        .set("cy", c.y)
                        .set("r", self.radius(radius))
                        .set("fill", colour.to_string());
                    self.push(node);
                }
                Primitive::Ring {
                    centre,
                    radius,
                    colour,
                    thickness,
                } => {
                    let c = self.viewport.apply(centre);
                    let node = SvgCircle::new()
                        .set("cx", c.x)
                        .set("cy", c.y)
                        .set("r", self.radius(radius))
                        .set("fill", "none")
                        .set("stroke", colour.to_string())
                        .set("stroke-width", thickness);
                    self.push(node);
                }
            }
        }
        self.shapes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Circle;
    use crate::shapes::{DrawStyle, OrientedLineSegment, OrientedTriangle};
    use nalgebra::vector;

    #[test]
    fn symmetric_fit_maps_bound_to_edges() {
        let pts = [vector![2.0, -1.0], vector![-0.5, 4.0]];
        let v = Viewport::fit_symmetric(pts, 500.0, 300.0);
        assert_eq!(v.apply(vector![0.0, 0.0]), vector![250.0, 150.0]);
        assert_eq!(v.apply(vector![4.0, 4.0]), vector![500.0, 300.0]);
        assert_eq!(v.apply(vector![-4.0, -4.0]), vector![0.0, 0.0]);

        let flat = Viewport::fit_symmetric([vector![0.0, 0.0]], 100.0, 100.0);
        assert_eq!(flat.scale, vector![50.0, 50.0]);
        assert_eq!(Viewport::identity().apply(vector![3.0, 7.0]), vector![3.0, 7.0]);
    }

    #[test]
    fn primitives_become_svg_elements() {
        let mut canvas = SvgCanvas::new(100.0, 100.0).with_background(Colour::WHITE);
        let tri =
            OrientedTriangle::new([vector![0.0, 0.0], vector![10.0, 0.0], vector![0.0, 10.0]]);
        canvas.draw(tri.draw_instructions(&DrawStyle::filled(Colour::RED)));
        canvas.draw(
            OrientedLineSegment::new(vector![0.0, 0.0], vector![5.0, 5.0])
                .draw_instructions(Colour::BLUE, 2.0),
        );
        canvas.draw(Circle::new(vector![50.0, 50.0], 5.0).draw_instructions(&DrawStyle {
            fill: Some(Colour::GREEN),
            outline: Some(Colour::BLACK),
            thickness: None,
        }));
        assert_eq!(canvas.len(), 3);

        let text = canvas.document().to_string();
        assert_eq!(text.matches("<polygon").count(), 2);
        assert_eq!(text.matches("<polyline").count(), 1);
        assert_eq!(text.matches("<circle").count(), 2);
        assert!(text.contains("<rect"));
        assert!(text.contains("0,0 10,0 0,10"));
        assert!(text.contains(&Colour::RED.to_string()));
    }

    #[test]
    fn viewport_applies_to_points_and_radii() {
        let vp = Viewport {
            scale: vector![2.0, 2.0],
            offset: vector![1.0, 1.0],
        };
        let mut canvas = SvgCanvas::new(50.0, 50.0).with_viewport(vp);
        let disc = Circle::new(vector![1.0, 1.0], 3.0);
        canvas.draw(disc.draw_instructions(&DrawStyle::filled(Colour::BLACK)));
        let text = canvas.into_document().to_string();
        assert!(text.contains("cx=\"3\""));
        assert!(text.contains("r=\"6\""));
    }
}
