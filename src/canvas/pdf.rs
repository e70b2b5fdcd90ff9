//! # PDF Canvas
//!
//! Writes draw ops into a PDF using `printpdf` and the standard-14 fonts.
//!
//! ## Coordinates
//!
//! Ops arrive in points with a top-left origin. PDF uses a bottom-left origin
//! and `printpdf` takes millimeters, so every coordinate goes through
//! [`PdfCanvas::to_pdf`]:
//!
//! ```text
//! (x, y) page space  →  (x, height - y) PDF space  →  ÷ PT_PER_MM (millimeters)
//! ```
//!
//! Curves (ellipses, arcs, rounded corners) are flattened to polygons.
//!
//! ## Output
//!
//! Nothing touches the sink until [`Canvas::finish`]; a canvas dropped
//! part-way through leaves the sink untouched.

use std::collections::HashMap;
use std::f32::consts::PI;
use std::io::{BufWriter, Write};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef,
    Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Polygon, Px, Rgb,
};
use tracing::debug;

use super::Canvas;
use crate::error::LabelError;
use crate::ir::{Align, Color, DrawOp, FontHandle, Stroke, wrap_text};
use crate::page::{PT_PER_MM, PageSpec, Point, Rect};

/// Segments used to flatten a full circle or ellipse.
const CURVE_SEGMENTS: usize = 64;

/// Baseline offset below the top of a text line, as a fraction of the size.
const ASCENT: f32 = 0.8;

const LINE_HEIGHT: f32 = 1.2;

type PdfPath = Vec<(printpdf::Point, bool)>;

fn builtin(font: FontHandle) -> BuiltinFont {
    match font {
        FontHandle::Helvetica => BuiltinFont::Helvetica,
        FontHandle::HelveticaBold => BuiltinFont::HelveticaBold,
        FontHandle::TimesRoman => BuiltinFont::TimesRoman,
        FontHandle::TimesBold => BuiltinFont::TimesBold,
        FontHandle::Courier => BuiltinFont::Courier,
        FontHandle::CourierBold => BuiltinFont::CourierBold,
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    let (r, g, b) = color.to_unit();
    printpdf::Color::Rgb(Rgb::new(r, g, b, None))
}

/// Canvas producing a PDF document written into `W` on finish.
pub struct PdfCanvas<W: Write> {
    doc: PdfDocumentReference,
    fonts: HashMap<FontHandle, IndirectFontRef>,
    layer: Option<PdfLayerReference>,
    page: PageSpec,
    page_count: usize,
    sink: W,
}

impl<W: Write> PdfCanvas<W> {
    /// Create an empty document. Pages are added through [`Canvas::new_page`].
    pub fn new(title: &str, page: PageSpec, sink: W) -> Result<Self, LabelError> {
        let doc = PdfDocument::empty(title);

        let mut fonts = HashMap::new();
        for handle in FontHandle::ALL {
            let font = doc
                .add_builtin_font(builtin(handle))
                .map_err(|e| LabelError::Render(format!("failed to load font {:?}: {}", handle, e)))?;
            fonts.insert(handle, font);
        }

        Ok(Self {
            doc,
            fonts,
            layer: None,
            page,
            page_count: 0,
            sink,
        })
    }

    /// Convert a page-space point to a PDF point.
    fn to_pdf(&self, x: f32, y: f32) -> printpdf::Point {
        printpdf::Point::new(Mm(x / PT_PER_MM), Mm((self.page.height - y) / PT_PER_MM))
    }

    fn rect_path(&self, rect: Rect, radius: f32) -> PdfPath {
        let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if radius == 0.0 {
            return vec![
                (self.to_pdf(rect.x, rect.y), false),
                (self.to_pdf(rect.right(), rect.y), false),
                (self.to_pdf(rect.right(), rect.bottom()), false),
                (self.to_pdf(rect.x, rect.bottom()), false),
            ];
        }

        // Corner centers with the visual angle range each corner sweeps
        let corners = [
            (rect.right() - radius, rect.y + radius, 0.0_f32),
            (rect.x + radius, rect.y + radius, 90.0),
            (rect.x + radius, rect.bottom() - radius, 180.0),
            (rect.right() - radius, rect.bottom() - radius, 270.0),
        ];
        let steps = CURVE_SEGMENTS / 4;
        let mut path = Vec::with_capacity(corners.len() * (steps + 1));
        for (cx, cy, start) in corners {
            for i in 0..=steps {
                let angle = (start + 90.0 * i as f32 / steps as f32).to_radians();
                path.push((self.to_pdf(cx + radius * angle.cos(), cy - radius * angle.sin()), false));
            }
        }
        path
    }

    fn ellipse_path(&self, center: Point, rx: f32, ry: f32) -> PdfPath {
        (0..CURVE_SEGMENTS)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / CURVE_SEGMENTS as f32;
                (self.to_pdf(center.x + rx * angle.cos(), center.y - ry * angle.sin()), false)
            })
            .collect()
    }

    fn arc_path(&self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32) -> PdfPath {
        let steps = ((sweep_deg.abs() / 360.0) * CURVE_SEGMENTS as f32).ceil().max(2.0) as usize;
        (0..=steps)
            .map(|i| {
                let angle = (start_deg + sweep_deg * i as f32 / steps as f32).to_radians();
                (self.to_pdf(center.x + radius * angle.cos(), center.y - radius * angle.sin()), false)
            })
            .collect()
    }

    /// Stroke and/or fill a path on the current layer.
    fn paint(layer: &PdfLayerReference, path: PdfPath, stroke: Option<Stroke>, fill: Option<Color>, closed: bool) {
        if let Some(stroke) = stroke {
            layer.set_outline_color(pdf_color(stroke.color));
            layer.set_outline_thickness(stroke.width);
        }

        match (fill, stroke) {
            (Some(fill), stroke) => {
                layer.set_fill_color(pdf_color(fill));
                layer.add_polygon(Polygon {
                    rings: vec![path],
                    mode: if stroke.is_some() {
                        PaintMode::FillStroke
                    } else {
                        PaintMode::Fill
                    },
                    winding_order: WindingOrder::NonZero,
                });
            }
            (None, Some(_)) => layer.add_line(Line {
                points: path,
                is_closed: closed,
            }),
            (None, None) => {}
        }
    }

    fn draw_image(&self, layer: &PdfLayerReference, image: &crate::asset::LogoImage, frame: Rect) {
        let (px_w, px_h) = (image.width(), image.height());
        if px_w == 0 || px_h == 0 {
            return;
        }
        let fitted = frame.fit_aspect(image.aspect());

        let xobject = ImageXObject {
            width: Px(px_w as usize),
            height: Px(px_h as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: image.pixels().as_raw().clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        };

        // At 72 dpi one pixel is one point; scale from there
        let origin = self.to_pdf(fitted.x, fitted.bottom());
        Image::from(xobject).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(origin.x.into()),
                translate_y: Some(origin.y.into()),
                scale_x: Some(fitted.width / px_w as f32),
                scale_y: Some(fitted.height / px_h as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        layer: &PdfLayerReference,
        text: &str,
        origin: Point,
        width: Option<f32>,
        align: Align,
        font: FontHandle,
        size: f32,
        color: Color,
    ) {
        let Some(font_ref) = self.fonts.get(&font) else {
            return;
        };
        layer.set_fill_color(pdf_color(color));

        for (i, line) in wrap_text(text, width, font, size).iter().enumerate() {
            let line_width = font.text_width(line, size);
            let offset = match (align, width) {
                (Align::Center, Some(w)) => ((w - line_width) / 2.0).max(0.0),
                (Align::Right, Some(w)) => (w - line_width).max(0.0),
                _ => 0.0,
            };
            let baseline = origin.y + i as f32 * size * LINE_HEIGHT + size * ASCENT;
            let position = self.to_pdf(origin.x + offset, baseline);
            layer.use_text(line.as_str(), size, position.x.into(), position.y.into(), font_ref);
        }
    }
}

impl<W: Write> Canvas for PdfCanvas<W> {
    type Output = W;

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(self.page.width / PT_PER_MM),
            Mm(self.page.height / PT_PER_MM),
            "Labels",
        );
        self.layer = Some(self.doc.get_page(page).get_layer(layer));
        self.page_count += 1;
        debug!(page = self.page_count, "pdf page opened");
    }

    fn draw(&mut self, op: &DrawOp) {
        let Some(layer) = self.layer.clone() else {
            return;
        };

        match op {
            DrawOp::Rect {
                rect,
                radius,
                stroke,
                fill,
            } => Self::paint(&layer, self.rect_path(*rect, *radius), *stroke, *fill, true),
            DrawOp::Ellipse {
                center,
                rx,
                ry,
                stroke,
                fill,
            } => Self::paint(&layer, self.ellipse_path(*center, *rx, *ry), *stroke, *fill, true),
            DrawOp::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                stroke,
                fill,
            } => Self::paint(
                &layer,
                self.arc_path(*center, *radius, *start_deg, *sweep_deg),
                *stroke,
                *fill,
                false,
            ),
            DrawOp::Line { from, to, stroke } => {
                let path = vec![(self.to_pdf(from.x, from.y), false), (self.to_pdf(to.x, to.y), false)];
                Self::paint(&layer, path, Some(*stroke), None, false);
            }
            DrawOp::Image { image, frame } => self.draw_image(&layer, image, *frame),
            DrawOp::Text {
                text,
                origin,
                width,
                align,
                font,
                size,
                color,
            } => self.draw_text(&layer, text, *origin, *width, *align, *font, *size, *color),
        }
    }

    fn finish(self) -> Result<W, LabelError> {
        if self.page_count == 0 {
            return Err(LabelError::Render("document has no pages".into()));
        }

        let mut writer = BufWriter::new(self.sink);
        self.doc
            .save(&mut writer)
            .map_err(|e| LabelError::Render(format!("failed to write PDF: {}", e)))?;
        writer.into_inner().map_err(|e| LabelError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_pdf_on_finish() {
        let mut canvas = PdfCanvas::new("test", PageSpec::LETTER, Vec::new()).unwrap();
        canvas.new_page();
        canvas.draw(&DrawOp::Rect {
            rect: Rect::new(20.0, 20.0, 180.0, 240.0),
            radius: 8.0,
            stroke: Some(Stroke::new(Color::LIGHT_GRAY, 1.0)),
            fill: None,
        });
        canvas.draw(&DrawOp::Text {
            text: "$99".into(),
            origin: Point::new(30.0, 40.0),
            width: Some(100.0),
            align: Align::Center,
            font: FontHandle::HelveticaBold,
            size: 24.0,
            color: Color::GREEN,
        });
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_no_pages_is_error() {
        let canvas = PdfCanvas::new("empty", PageSpec::LETTER, Vec::new()).unwrap();
        assert!(matches!(canvas.finish(), Err(LabelError::Render(_))));
    }

    #[test]
    fn test_y_axis_flipped() {
        let canvas = PdfCanvas::new("flip", PageSpec::LETTER, Vec::new()).unwrap();
        let top_left = canvas.to_pdf(0.0, 0.0);
        let bottom_left = canvas.to_pdf(0.0, 792.0);
        assert!((top_left.y.0 - 792.0).abs() < 1e-2);
        assert!(bottom_left.y.0.abs() < 1e-3);
    }

    #[test]
    fn test_arc_path_endpoints() {
        let canvas = PdfCanvas::new("arc", PageSpec::LETTER, Vec::new()).unwrap();
        let path = canvas.arc_path(Point::new(100.0, 100.0), 10.0, 0.0, 180.0);
        let first = path.first().unwrap().0;
        let last = path.last().unwrap().0;
        // Right end, then left end, both on the center's horizontal line
        assert!((first.x.0 - 110.0).abs() < 1e-2);
        assert!((last.x.0 - 90.0).abs() < 1e-2);
        assert!((first.y.0 - last.y.0).abs() < 1e-2);
    }
}
