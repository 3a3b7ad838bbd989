//! Scenario tests for the layout pipeline: concrete box renders, partial
//! borders, layering order, and horizontal composition.

#![allow(clippy::doc_markdown)]

use hatbox::{
    apply_border, apply_inset, enforce_span, height, render_content, visible_width, width,
    AxisEdges, AxisRange, AxisSpan, BorderChar, BorderConfig, BorderHooks, BorderStyle, Content,
    Edges, Frame, Gap, Hook, InsetHooks, InsetSlot, Item, Orientation, PadCtx, RenderContext,
    Span, SpanRange, StyledText, TextStyle,
};

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn padded_bordered_hi() {
    let out = Frame::new("Hi")
        .padding((1, 2))
        .border(BorderStyle::Single)
        .render();
    let expected = "\
┌──────┐
│      │
│  Hi  │
│      │
└──────┘";
    assert_eq!(out, expected);
}

#[test]
fn rounded_border_multiline() {
    let out = Frame::new("ab\nc").border(BorderStyle::Rounded).render();
    let expected = "\
╭──╮
│ab│
│c │
╰──╯";
    assert_eq!(out, expected);
}

#[test]
fn empty_content_renders_empty() {
    assert_eq!(Frame::new("").render(), "");
}

#[test]
fn bordered_empty_content() {
    let out = Frame::new("").border(BorderStyle::Ascii).render();
    assert_eq!(out, "++\n||\n++");
}

// =============================================================================
// Partial borders
// =============================================================================

#[test]
fn top_only_border() {
    let config = BorderConfig::new().edges(Edges {
        top: Some(BorderChar::Plain('─')),
        ..Edges::default()
    });
    let out = Frame::new("hello").border(config).render();
    // One top line of content-width edge characters, no corners, no other
    // sides.
    assert_eq!(out, "─────\nhello");
}

#[test]
fn left_and_right_without_top_bottom() {
    let config = BorderConfig::new().edges(Edges {
        left: Some(BorderChar::Plain('│')),
        right: Some(BorderChar::Plain('│')),
        ..Edges::default()
    });
    let out = Frame::new("a\nbb").border(config).render();
    assert_eq!(out, "│a │\n│bb│");
}

// =============================================================================
// Layering order
// =============================================================================

#[test]
fn render_equals_manual_layer_composition() {
    let frame = Frame::new("Hi")
        .span(AxisSpan::cross(Span::Abs(5)))
        .span_range(AxisRange::main(SpanRange::at_least(2)))
        .padding((1, 1))
        .border(BorderStyle::Ascii)
        .margin(AxisEdges::cross(1));

    let manual = {
        let content = render_content(
            &Content::from("Hi"),
            Orientation::Vertical,
            &RenderContext::none(),
            Gap::default(),
        );
        let spanned = enforce_span(
            &content,
            None,
            Some(5),
            Some(&SpanRange::at_least(2)),
            None,
        );
        let padded = apply_inset(
            &spanned,
            &(1, 1).into(),
            &InsetHooks::default(),
            Orientation::Vertical,
        );
        let bordered = apply_border(
            &padded,
            &BorderConfig::from(BorderStyle::Ascii),
            &BorderHooks::default(),
        );
        apply_inset(
            &bordered,
            &AxisEdges::cross(1),
            &InsetHooks::default(),
            Orientation::Vertical,
        )
    };

    assert_eq!(frame.render(), manual);
}

#[test]
fn span_and_padding_do_not_commute() {
    let pad: AxisEdges<usize> = (1, 1).into();
    let hooks = InsetHooks::default();

    let span_first = apply_inset(
        &enforce_span("Hi", None, Some(5), None, None),
        &pad,
        &hooks,
        Orientation::Vertical,
    );
    let pad_first = enforce_span(
        &apply_inset("Hi", &pad, &hooks, Orientation::Vertical),
        None,
        Some(5),
        None,
        None,
    );
    assert_ne!(span_first, pad_first);
}

#[test]
fn border_and_margin_do_not_commute() {
    let margin = AxisEdges::cross(2);
    let hooks = InsetHooks::default();
    let config = BorderConfig::from(BorderStyle::Ascii);

    let border_first = apply_inset(
        &apply_border("x", &config, &BorderHooks::default()),
        &margin,
        &hooks,
        Orientation::Vertical,
    );
    let margin_first = apply_border(
        &apply_inset("x", &margin, &hooks, Orientation::Vertical),
        &config,
        &BorderHooks::default(),
    );
    assert_ne!(border_first, margin_first);
}

#[test]
fn padding_and_border_do_not_commute() {
    let pad: AxisEdges<usize> = AxisEdges::cross(1);
    let hooks = InsetHooks::default();
    let config = BorderConfig::from(BorderStyle::Ascii);

    let pad_then_border = apply_border(
        &apply_inset("x", &pad, &hooks, Orientation::Vertical),
        &config,
        &BorderHooks::default(),
    );
    let border_then_pad = apply_inset(
        &apply_border("x", &config, &BorderHooks::default()),
        &pad,
        &hooks,
        Orientation::Vertical,
    );
    assert_ne!(pad_then_border, border_then_pad);
}

// =============================================================================
// Border nesting
// =============================================================================

#[test]
fn double_border_application_nests() {
    let config = BorderConfig::from(BorderStyle::Single);
    let hooks = BorderHooks::default();

    let once = apply_border("Hi", &config, &hooks);
    let twice = apply_border(&once, &config, &hooks);

    assert_eq!(height(&twice), height(&once) + 2);
    assert_eq!(width(&twice), width(&once) + 2);

    // The inner frame's boundary survives exactly: stripping the outer
    // frame recovers the single-application output.
    let inner: Vec<String> = twice
        .lines()
        .skip(1)
        .take(height(&once))
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            chars[1..chars.len() - 1].iter().collect()
        })
        .collect();
    assert_eq!(inner.join("\n"), once);
}

// =============================================================================
// Horizontal composition
// =============================================================================

#[test]
fn horizontal_three_items_alignment() {
    let items: Vec<Item> = vec!["one\ntwo".into(), "x".into(), "abc\nde\nf\ng".into()];
    let out = Frame::new(items)
        .orientation(Orientation::Horizontal)
        .gap(Gap::from((2, 0)))
        .render();

    // Every output line has identical total length.
    let lengths: Vec<usize> = out.lines().map(visible_width).collect();
    assert_eq!(lengths.len(), 4);
    assert!(lengths.windows(2).all(|w| w[0] == w[1]));

    // Items are top-aligned and bottom-padded to the tallest height, with
    // exactly two spaces between adjacent columns on every row.
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "one  x  abc");
    assert_eq!(lines[1], "two     de ");
    assert_eq!(lines[2], "        f  ");
    assert_eq!(lines[3], "        g  ");
}

#[test]
fn horizontal_nested_frames() {
    let left = Frame::new("L").border(BorderStyle::Ascii);
    let right = Frame::new("R").border(BorderStyle::Ascii);
    let out = Frame::new(vec![Item::from(left), Item::from(right)])
        .orientation(Orientation::Horizontal)
        .gap(Gap::from((1, 0)))
        .render();
    let expected = "\
+-+ +-+
|L| |R|
+-+ +-+";
    assert_eq!(out, expected);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn percentage_span_without_parent_matches_unspanned() {
    let spanned = Frame::new("ab\ncde")
        .span(AxisSpan {
            main: Some(Span::Percent(50)),
            cross: Some(Span::Percent(80)),
        })
        .render();
    let plain = Frame::new("ab\ncde").render();
    assert_eq!(spanned, plain);
}

#[test]
fn absolute_span_pads_and_truncates() {
    let out = Frame::new("abcdef\nx")
        .span(AxisSpan {
            main: Some(Span::Abs(3)),
            cross: Some(Span::Abs(4)),
        })
        .render();
    assert_eq!(out, "abcd\nx   \n    ");
}

#[test]
fn span_inside_border_sizes_the_box() {
    let out = Frame::new("hi")
        .span(AxisSpan::cross(Span::Abs(4)))
        .border(BorderStyle::Single)
        .render();
    let expected = "\
┌────┐
│hi  │
└────┘";
    assert_eq!(out, expected);
}

// =============================================================================
// Styled content and borders
// =============================================================================

#[test]
fn styled_content_survives_layout() {
    let styled = StyledText::new("hi", TextStyle::new().bold());
    let out = Frame::new(Content::from(styled)).padding(AxisEdges::cross(1)).render();
    assert_eq!(out, " \x1b[1mhi\x1b[0m ");
}

#[test]
fn hook_driven_gutter() {
    // A purely hook-driven left border renders a gutter with no static
    // border configured.
    let out = Frame::new("one\ntwo\nsix")
        .border_left_hook(Hook::generator(|ctx: &hatbox::RowCtx| {
            if ctx.line_index == 0 { '>' } else { ' ' }
        }))
        .render();
    assert_eq!(out, ">one\n two\n six");
}

#[test]
fn per_line_padding_hook_inside_border() {
    let out = Frame::new("a\nb")
        .padding_hook(
            InsetSlot::CrossStart,
            Hook::generator(|ctx: &PadCtx| ctx.line.map_or(0, |l| l.index + 1)),
        )
        .border(BorderStyle::Ascii)
        .render();
    let expected = "\
+---+
| a |
|  b|
+---+";
    assert_eq!(out, expected);
}
