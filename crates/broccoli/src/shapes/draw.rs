//! Draw instructions: the boundary between the geometry and any renderer.
//!
//! A shape turns into one `DrawInstructions` value (an ordered list of
//! primitives). Generators hand each value to a `Canvas` synchronously, one call
//! per drawn shape, so counting `draw` calls counts shapes.

use crate::colour::Colour;
use crate::geom2::{Circle, Point};

use super::{OrientedLineSegment, OrientedPolygon, OrientedTriangle};

/// Style of a filled/outlined shape. Unset fields mean "not drawn" / renderer default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawStyle {
    pub fill: Option<Colour>,
    pub outline: Option<Colour>,
    pub thickness: Option<f64>,
}

impl DrawStyle {
    pub fn filled(colour: Colour) -> Self {
        Self {
            fill: Some(colour),
            ..Self::default()
        }
    }

    pub fn outlined(colour: Colour, thickness: f64) -> Self {
        Self {
            outline: Some(colour),
            thickness: Some(thickness),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.outline.is_none() && self.thickness.is_none()
    }
}

/// A single renderer operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Closed region bounded by `outline`.
    Fill { outline: Vec<Point>, colour: Colour },
    /// Polyline, closed back to its first point when `closed`.
    Stroke {
        path: Vec<Point>,
        closed: bool,
        colour: Colour,
        thickness: f64,
    },
    Disc {
        centre: Point,
        radius: f64,
        colour: Colour,
    },
    Ring {
        centre: Point,
        radius: f64,
        colour: Colour,
        thickness: f64,
    },
}

/// Everything needed to draw one shape, in painting order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawInstructions {
    pub primitives: Vec<Primitive>,
}

impl DrawInstructions {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Sink for draw instructions (raster canvas, SVG document, test recorder, ...).
///
/// `draw` is called synchronously from inside a traversal and must not block.
pub trait Canvas {
    fn draw(&mut self, instructions: DrawInstructions);
}

impl<F: FnMut(DrawInstructions)> Canvas for F {
    #[inline]
    fn draw(&mut self, instructions: DrawInstructions) {
        self(instructions)
    }
}

/// Canvas that keeps everything it is given.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawInstructions>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.calls.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.calls.iter().flat_map(|c| c.primitives.iter())
    }
}

impl Canvas for Recorder {
    fn draw(&mut self, instructions: DrawInstructions) {
        self.calls.push(instructions);
    }
}

/// Outline first (thickness defaults to 1, colour falls back to the fill, then
/// black), then the fill on top.
fn closed_shape(corners: &[Point], style: &DrawStyle) -> DrawInstructions {
    let mut primitives = Vec::with_capacity(2);
    if !style.is_empty() {
        primitives.push(Primitive::Stroke {
            path: corners.to_vec(),
            closed: true,
            colour: style.outline.or(style.fill).unwrap_or(Colour::BLACK),
            thickness: style.thickness.unwrap_or(1.0),
        });
    }
    if let Some(fill) = style.fill {
        primitives.push(Primitive::Fill {
            outline: corners.to_vec(),
            colour: fill,
        });
    }
    DrawInstructions { primitives }
}

impl OrientedPolygon {
    pub fn draw_instructions(&self, style: &DrawStyle) -> DrawInstructions {
        closed_shape(&self.corners, style)
    }
}

impl OrientedTriangle {
    pub fn draw_instructions(&self, style: &DrawStyle) -> DrawInstructions {
        closed_shape(&self.corners, style)
    }
}

impl OrientedLineSegment {
    pub fn draw_instructions(&self, colour: Colour, thickness: f64) -> DrawInstructions {
        DrawInstructions {
            primitives: vec![Primitive::Stroke {
                path: vec![self.start, self.end],
                closed: false,
                colour,
                thickness,
            }],
        }
    }
}

impl Circle {
    /// Ring (outline colour, thickness) then disc (fill colour), like polygons.
    pub fn draw_instructions(&self, style: &DrawStyle) -> DrawInstructions {
        let mut primitives = Vec::with_capacity(2);
        if let Some(colour) = style.outline {
            primitives.push(Primitive::Ring {
                centre: self.centre,
                radius: self.radius,
                colour,
                thickness: style.thickness.unwrap_or(1.0),
            });
        }
        if let Some(colour) = style.fill {
            primitives.push(Primitive::Disc {
                centre: self.centre,
                radius: self.radius,
                colour,
            });
        }
        DrawInstructions { primitives }
    }
}

/// A unit-radius dot at `p`.
pub fn point_instructions(p: Point, colour: Colour) -> DrawInstructions {
    DrawInstructions {
        primitives: vec![Primitive::Disc {
            centre: p,
            radius: 1.0,
            colour,
        }],
    }
}
