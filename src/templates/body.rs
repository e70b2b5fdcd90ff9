//! Content layouts shared by every template.
//!
//! Frames differ per template; what goes inside them does not. Each layout
//! works inside a content box (already inset by the template) and scales with
//! it, so the same code serves fixed-size slots and wider flow-mode slots.
//!
//! ```text
//! Display             Price pair                 Single price
//! ┌──────────────┐    ┌──────────────────────┐   ┌──────────────┐
//! │    TITLE     │    │ [logo]  De:          │   │    [logo]    │
//! │ • bullet     │    │         $150 (struck) │   │ ╭──────────╮ │
//! │ • bullet     │    │  ┌──────────────────┐ │   │ │   $99    │ │
//! │              │    │  │ A:    $99        │ │   │ ╰──────────╯ │
//! └──────────────┘    │  └──────────────────┘ │   └──────────────┘
//!                     └──────────────────────┘
//! ```

use tracing::warn;

use crate::asset::decode_logo;
use crate::ir::{Align, Color, DrawOp, FontHandle, Stroke, wrap_text};
use crate::label::{LabelContent, format_price};
use crate::page::{Point, Rect};
use crate::style::ResolvedStyle;

pub const TITLE_SIZE: f32 = 24.0;
pub const BULLET_SIZE: f32 = 14.0;
pub const BULLET_PITCH: f32 = 20.0;
pub const CAPTION_SIZE: f32 = 10.0;
pub const ORIGINAL_PRICE_SIZE: f32 = 16.0;
pub const BOX_CAPTION_SIZE: f32 = 14.0;
pub const DISCOUNT_PRICE_SIZE: f32 = 32.0;
pub const FALLBACK_MARK_SIZE: f32 = 40.0;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Bullets start at least this far below the top of the content box.
const BULLET_OFFSET: f32 = 40.0;

/// Lay out whichever content kind this is.
pub fn content(inner: Rect, content: &LabelContent, style: &ResolvedStyle) -> Vec<DrawOp> {
    match content {
        LabelContent::Display { title, bullets } => display(inner, title, bullets, style),
        LabelContent::Price {
            price,
            original_price: Some(original),
            logo,
        } => {
            let mut ops = Vec::new();
            let logo_frame = pair_logo_frame(inner);
            ops.extend(logo_or_fallback(logo_frame, logo.as_deref()));
            ops.extend(price_pair(inner, original, price, style));
            ops
        }
        LabelContent::Price {
            price,
            original_price: None,
            logo,
        } => {
            let mut ops = Vec::new();
            let side = (inner.height * 0.42).min(inner.width * 0.5);
            let logo_frame = Rect::new(inner.center().x - side / 2.0, inner.y, side, side);
            ops.extend(logo_or_fallback(logo_frame, logo.as_deref()));
            ops.extend(single_price(inner, price, style));
            ops
        }
    }
}

/// Title centered across the top, then one `• bullet` line per entry.
pub fn display(inner: Rect, title: &str, bullets: &[String], style: &ResolvedStyle) -> Vec<DrawOp> {
    let title_size = style.scaled(TITLE_SIZE);
    let title_lines = wrap_text(title, Some(inner.width), style.font, title_size).len();

    let mut ops = vec![DrawOp::Text {
        text: title.to_string(),
        origin: Point::new(inner.x, inner.y),
        width: Some(inner.width),
        align: Align::Center,
        font: style.font,
        size: title_size,
        color: style.accent,
    }];

    let title_bottom = inner.y + title_lines as f32 * title_size * LINE_HEIGHT;
    let mut y = (inner.y + BULLET_OFFSET).max(title_bottom + 8.0);
    let bullet_size = style.scaled(BULLET_SIZE);
    let bullet_x = inner.x + 5.0;

    for bullet in bullets {
        // Bullets past the bottom of the card are dropped
        if y + bullet_size > inner.bottom() {
            break;
        }
        ops.push(DrawOp::Text {
            text: format!("• {}", bullet),
            origin: Point::new(bullet_x, y),
            width: Some(inner.width - 10.0),
            align: Align::Left,
            font: style.font,
            size: bullet_size,
            color: Color::BLUE,
        });
        y += BULLET_PITCH * style.size_multiplier;
    }

    ops
}

/// Square logo box in the top-left corner, used next to a price pair.
pub fn pair_logo_frame(inner: Rect) -> Rect {
    let side = (inner.height * 0.42).min(inner.width * 0.3);
    Rect::new(inner.x, inner.y, side, side)
}

/// Logo image fitted to `frame`, or a red `+` when there is no usable logo.
///
/// Decoding happens here, once per label instance. A bad payload only costs
/// this one label its logo.
pub fn logo_or_fallback(frame: Rect, logo: Option<&str>) -> Vec<DrawOp> {
    if let Some(payload) = logo {
        match decode_logo(payload) {
            Ok(image) => {
                let fitted = frame.fit_aspect(image.aspect());
                return vec![DrawOp::Image {
                    image,
                    frame: fitted,
                }];
            }
            Err(e) => warn!(error = %e, "logo could not be decoded, drawing fallback mark"),
        }
    }
    vec![fallback_mark(frame)]
}

/// Red `+` centered in `frame`.
pub fn fallback_mark(frame: Rect) -> DrawOp {
    let size = FALLBACK_MARK_SIZE.min(frame.height);
    DrawOp::Text {
        text: "+".to_string(),
        origin: Point::new(frame.x, frame.y + (frame.height - size) / 2.0),
        width: Some(frame.width),
        align: Align::Center,
        font: FontHandle::HelveticaBold,
        size,
        color: Color::RED,
    }
}

/// "De:" caption and struck-through original price to the right of the
/// logo, then a filled box holding "A:" and the discount price.
pub fn price_pair(inner: Rect, original: &str, price: &str, style: &ResolvedStyle) -> Vec<DrawOp> {
    let logo = pair_logo_frame(inner);
    let font = style.font;
    let mut ops = Vec::new();

    let text_x = logo.right() + inner.width * 0.06;
    let caption_size = style.scaled(CAPTION_SIZE);
    let caption_y = inner.y + inner.height * 0.06;
    ops.push(DrawOp::Text {
        text: "De:".to_string(),
        origin: Point::new(text_x, caption_y),
        width: None,
        align: Align::Left,
        font,
        size: caption_size,
        color: Color::GRAY,
    });

    let original = format_price(original);
    let original_size = style.scaled(ORIGINAL_PRICE_SIZE);
    let original_y = caption_y + caption_size * 1.5;
    let original_width = font.text_width(&original, original_size);
    ops.push(DrawOp::Text {
        text: original,
        origin: Point::new(text_x, original_y),
        width: None,
        align: Align::Left,
        font,
        size: original_size,
        color: Color::RED,
    });

    // Strike through the middle of the original price
    let strike_y = original_y + original_size * 0.5;
    ops.push(DrawOp::Line {
        from: Point::new(text_x - 2.0, strike_y),
        to: Point::new((text_x + original_width + 2.0).min(inner.right()), strike_y),
        stroke: Stroke::new(Color::RED, 1.0),
    });

    let price_box = discount_box(inner);
    ops.push(DrawOp::Rect {
        rect: price_box,
        radius: 0.0,
        stroke: Some(Stroke::new(style.accent, 4.0)),
        fill: Some(style.accent.tint(0.92)),
    });

    ops.push(DrawOp::Text {
        text: "A:".to_string(),
        origin: Point::new(price_box.x + 8.0, price_box.y + price_box.height * 0.13),
        width: None,
        align: Align::Left,
        font,
        size: style.scaled(BOX_CAPTION_SIZE).min(price_box.height * 0.3),
        color: Color::BLACK,
    });

    let price_size = style
        .scaled(DISCOUNT_PRICE_SIZE)
        .min(price_box.height * 0.55);
    ops.push(DrawOp::Text {
        text: format_price(price),
        origin: Point::new(price_box.x + 5.0, price_box.y + price_box.height * 0.37),
        width: Some(price_box.width - 10.0),
        align: Align::Center,
        font,
        size: price_size,
        color: style.accent,
    });

    ops
}

/// Discount box in the lower half of the content box.
pub fn discount_box(inner: Rect) -> Rect {
    Rect::new(
        inner.x + inner.width * 0.1,
        inner.y + inner.height * 0.47,
        inner.width * 0.8,
        inner.height * 0.53,
    )
}

/// One price in a rounded accent-colored box along the bottom.
pub fn single_price(inner: Rect, price: &str, style: &ResolvedStyle) -> Vec<DrawOp> {
    let box_height = inner.height * 0.48;
    let price_box = Rect::new(
        inner.x + inner.width * 0.1,
        inner.bottom() - box_height,
        inner.width * 0.8,
        box_height,
    );
    let size = style.scaled(DISCOUNT_PRICE_SIZE).min(box_height * 0.6);

    vec![
        DrawOp::Rect {
            rect: price_box,
            radius: 6.0,
            stroke: Some(Stroke::new(style.accent, 4.0)),
            fill: None,
        },
        DrawOp::Text {
            text: format_price(price),
            origin: Point::new(price_box.x, price_box.y + (box_height - size) / 2.0),
            width: Some(price_box.width),
            align: Align::Center,
            font: style.font,
            size,
            color: style.accent,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::tests::png_data_url;

    fn inner() -> Rect {
        Rect::new(0.0, 0.0, 180.0, 120.0)
    }

    fn price_pair_content(logo: Option<String>) -> LabelContent {
        LabelContent::Price {
            price: "99".into(),
            original_price: Some("150".into()),
            logo,
        }
    }

    #[test]
    fn test_display_title_then_bullets() {
        let style = ResolvedStyle::resolve(None, Some("red"), None);
        let ops = display(inner(), "Laptop", &["16GB".into(), "SSD".into()], &style);
        let texts: Vec<_> = ops.iter().filter_map(|op| op.as_text()).collect();
        assert_eq!(texts, vec!["Laptop", "• 16GB", "• SSD"]);

        match &ops[0] {
            DrawOp::Text { color, align, size, .. } => {
                assert_eq!(*color, Color::RED);
                assert_eq!(*align, Align::Center);
                assert_eq!(*size, TITLE_SIZE);
            }
            other => panic!("expected title text, got {:?}", other),
        }
    }

    #[test]
    fn test_bullet_pitch() {
        let style = ResolvedStyle::default();
        let ops = display(inner(), "T", &["a".into(), "b".into()], &style);
        let ys: Vec<f32> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { origin, .. } => Some(origin.y),
                _ => None,
            })
            .collect();
        assert_eq!(ys[2] - ys[1], BULLET_PITCH);
        assert_eq!(ys[1], BULLET_OFFSET);
    }

    #[test]
    fn test_bullets_beyond_box_dropped() {
        let style = ResolvedStyle::default();
        let bullets: Vec<String> = (0..20).map(|i| format!("spec {}", i)).collect();
        let ops = display(inner(), "T", &bullets, &style);
        for op in &ops {
            if let DrawOp::Text { origin, size, .. } = op {
                assert!(origin.y + size <= inner().bottom());
            }
        }
        assert!(ops.len() < 21);
    }

    #[test]
    fn test_price_pair_strikethrough_between_price_and_box() {
        let style = ResolvedStyle::default();
        let ops = content(inner(), &price_pair_content(None), &style);

        let strike = ops.iter().position(|op| matches!(op, DrawOp::Line { .. })).unwrap();
        let original = ops.iter().position(|op| op.as_text() == Some("$150")).unwrap();
        let price_box = ops.iter().position(|op| matches!(op, DrawOp::Rect { .. })).unwrap();
        assert!(original < strike && strike < price_box);

        let texts: Vec<_> = ops.iter().filter_map(|op| op.as_text()).collect();
        assert_eq!(texts, vec!["+", "De:", "$150", "A:", "$99"]);
    }

    #[test]
    fn test_discount_box_below_original_price() {
        let style = ResolvedStyle::default();
        let ops = price_pair(inner(), "150", "99", &style);
        let strike_y = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { from, .. } => Some(from.y),
                _ => None,
            })
            .unwrap();
        assert!(strike_y < discount_box(inner()).y);
    }

    #[test]
    fn test_logo_drawn_when_valid() {
        let style = ResolvedStyle::default();
        let logo = png_data_url(20, 10, [0, 0, 255, 255]);
        let ops = content(inner(), &price_pair_content(Some(logo)), &style);
        match &ops[0] {
            DrawOp::Image { image, frame } => {
                assert_eq!(image.width(), 20);
                let outer = pair_logo_frame(inner());
                assert!((frame.width / frame.height - 2.0).abs() < 1e-3);
                assert!(frame.x >= outer.x && frame.right() <= outer.right() + 1e-3);
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert!(!ops.iter().any(|op| op.as_text() == Some("+")));
    }

    #[test]
    fn test_bad_logo_falls_back() {
        let style = ResolvedStyle::default();
        let ops = content(
            inner(),
            &price_pair_content(Some("data:image/png;base64,!!!".into())),
            &style,
        );
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::Image { .. })));
        assert_eq!(ops[0].as_text(), Some("+"));
    }

    #[test]
    fn test_single_price_box() {
        let style = ResolvedStyle::resolve(Some("courier"), Some("azul"), None);
        let content = LabelContent::Price {
            price: "12.50".into(),
            original_price: None,
            logo: None,
        };
        let ops = super::content(inner(), &content, &style);
        assert!(matches!(
            ops[1],
            DrawOp::Rect { stroke: Some(Stroke { color: Color::BLUE, .. }), .. }
        ));
        match &ops[2] {
            DrawOp::Text { text, font, .. } => {
                assert_eq!(text, "$12.50");
                assert_eq!(*font, FontHandle::CourierBold);
            }
            other => panic!("expected price text, got {:?}", other),
        }
    }
}
