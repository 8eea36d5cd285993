//! Integration tests for the compositing walk: pixel-exact renders
//! compared against authored patterns.

use quokka_common::{CornerRadii, EdgeSizes, LoadedImage, Rect, Rgba};
use quokka_paint::{
    Background, BackgroundLayer, BoxDimensions, BoxNode, ImageRendering, InlineFragment, Overflow,
    PaintError, Position, SamplingImagePainter, SolidFragmentPainter, render_page,
};
use quokka_pattern::{PixelPattern, assert_pixels};
use quokka_raster::Pixels;

fn dimensions(x: f32, y: f32, width: f32, height: f32) -> BoxDimensions {
    BoxDimensions {
        content: Rect::new(x, y, width, height),
        ..BoxDimensions::default()
    }
}

/// A page box with a white background across its whole margin box.
fn white_page(width: f32, height: f32) -> BoxNode {
    BoxNode::page(
        dimensions(0.0, 0.0, width, height),
        Background::solid(Rgba::WHITE, Rect::new(0.0, 0.0, width, height)),
    )
}

/// A line box holding a single solid red run.
fn red_run(x: f32, y: f32, width: f32, height: f32) -> BoxNode {
    BoxNode::line(vec![InlineFragment {
        bounds: Rect::new(x, y, width, height),
        color: Rgba::RED,
    }])
}

/// Render with hinting through the bundled software painters.
fn render(page: BoxNode) -> Pixels {
    render_page(page, true, &SolidFragmentPainter, &SamplingImagePainter)
        .expect("render should succeed")
}

/// Assert rendered pixels match a pattern, with readable diagnostics.
fn check(name: &str, pixels: &Pixels, pattern: &str) {
    let expected = PixelPattern::parse(pattern).expect("pattern should parse");
    if let Err(error) = assert_pixels(name, &expected, pixels) {
        panic!("{error}");
    }
}

#[test]
fn test_two_glyph_line_in_margined_hidden_div() {
    // A 9x7 page; a div with a 1px margin and hidden overflow holding one
    // 2px-font line of two glyphs.
    let mut page = white_page(9.0, 7.0);
    let mut div = BoxNode::block(BoxDimensions {
        content: Rect::new(1.0, 1.0, 7.0, 2.0),
        margin: EdgeSizes::uniform(1.0),
        ..BoxDimensions::default()
    });
    div.style.overflow = Overflow::Hidden;
    div.children.push(red_run(1.0, 1.0, 4.0, 2.0));
    page.children.push(div);

    let pixels = render(page);
    check(
        "two-glyph-line",
        &pixels,
        "
        _________
        _RRRR____
        _RRRR____
        _________
        _________
        _________
        _________
        ",
    );
}

#[test]
fn test_clipped_and_nowrap_divs() {
    // Two stacked divs: a clipped 3.5em-wide one whose single run
    // overflows, and a nowrap one whose second run overflows.
    let mut page = white_page(9.0, 7.0);

    let mut clipped = BoxNode::block(BoxDimensions {
        content: Rect::new(1.0, 1.0, 7.0, 2.0),
        margin: EdgeSizes::uniform(1.0),
        ..BoxDimensions::default()
    });
    clipped.style.overflow = Overflow::Hidden;
    clipped.children.push(red_run(1.0, 1.0, 10.0, 2.0));

    let mut nowrap = BoxNode::block(BoxDimensions {
        content: Rect::new(1.0, 4.0, 7.0, 2.0),
        margin: EdgeSizes::uniform(1.0),
        ..BoxDimensions::default()
    });
    nowrap.style.overflow = Overflow::Hidden;
    nowrap.children.push(BoxNode::line(vec![
        InlineFragment {
            bounds: Rect::new(1.0, 4.0, 2.0, 2.0),
            color: Rgba::RED,
        },
        InlineFragment {
            bounds: Rect::new(5.0, 4.0, 8.0, 2.0),
            color: Rgba::RED,
        },
    ]));

    page.children.push(clipped);
    page.children.push(nowrap);

    let pixels = render(page);
    check(
        "clipped-and-nowrap",
        &pixels,
        "
        _________
        _RRRRRRR_
        _RRRRRRR_
        _________
        _RR__RRR_
        _RR__RRR_
        _________
        ",
    );
}

#[test]
fn test_hinted_rendering_is_deterministic() {
    let build = || {
        let mut page = white_page(9.0, 7.0);
        let mut div = BoxNode::block(dimensions(1.0, 1.0, 7.0, 2.0));
        div.style.overflow = Overflow::Hidden;
        div.children.push(red_run(1.0, 1.0, 4.0, 2.0));
        page.children.push(div);
        page
    };
    let first = render(build());
    let second = render(build());
    assert_eq!(first.bytes(), second.bytes());
}

#[test]
fn test_overflow_clips_to_rounded_padding_box() {
    let mut page = white_page(4.0, 4.0);
    let mut div = BoxNode::block(dimensions(0.0, 0.0, 4.0, 4.0));
    div.style.overflow = Overflow::Hidden;
    div.style.radii = CornerRadii {
        top_left: (2.0, 2.0),
        ..CornerRadii::default()
    };
    div.children.push(red_run(0.0, 0.0, 4.0, 4.0));
    page.children.push(div);

    let pixels = render(page);
    // The run covers the whole page but the top-left pixel falls outside
    // the rounded arc, so the background shows through there.
    check(
        "rounded-clip",
        &pixels,
        "
        _RRR
        RRRR
        RRRR
        RRRR
        ",
    );
}

#[test]
fn test_page_box_is_exempt_from_overflow_clipping() {
    // The page's padding box is an inner ring, its overflow is hidden,
    // and a run covers the full margin box. A non-page box would clip;
    // the page box must not.
    let mut page = BoxNode::page(
        BoxDimensions {
            content: Rect::new(1.0, 1.0, 7.0, 5.0),
            margin: EdgeSizes::uniform(1.0),
            ..BoxDimensions::default()
        },
        Background::solid(Rgba::WHITE, Rect::new(0.0, 0.0, 9.0, 7.0)),
    );
    page.style.overflow = Overflow::Hidden;
    page.children.push(red_run(0.0, 0.0, 9.0, 7.0));

    let pixels = render(page);
    check(
        "page-clip-exemption",
        &pixels,
        "
        RRRRRRRRR
        RRRRRRRRR
        RRRRRRRRR
        RRRRRRRRR
        RRRRRRRRR
        RRRRRRRRR
        RRRRRRRRR
        ",
    );
}

#[test]
fn test_later_sibling_context_occludes_earlier() {
    // Two overlapping positioned divs in the auto layer: the later one
    // in document order paints on top in the overlap.
    let mut page = white_page(4.0, 2.0);

    let mut first = BoxNode::block(dimensions(0.0, 0.0, 3.0, 2.0));
    first.style.position = Position::Relative;
    first.children.push(red_run(0.0, 0.0, 3.0, 2.0));

    let mut second = BoxNode::block(dimensions(1.0, 0.0, 3.0, 2.0));
    second.style.position = Position::Relative;
    second.children.push(BoxNode::line(vec![InlineFragment {
        bounds: Rect::new(1.0, 0.0, 3.0, 2.0),
        color: Rgba::BLUE,
    }]));

    page.children.push(first);
    page.children.push(second);

    let pixels = render(page);
    check(
        "sibling-occlusion",
        &pixels,
        "
        RBBB
        RBBB
        ",
    );
}

#[test]
fn test_first_declared_background_layer_paints_topmost() {
    // Three layers: a red image, a blue image behind it, and an
    // imageless bottom layer whose painting area receives the solid
    // color. The color is visible only where no image covers.
    let mut page = white_page(4.0, 3.0);
    page.style.background = Background {
        color: Rgba::LIME,
        layers: vec![
            BackgroundLayer {
                painting_area: Rect::new(0.0, 0.0, 2.0, 2.0),
                image: Some(LoadedImage::solid(1, 1, Rgba::RED)),
                image_rendering: ImageRendering::Pixelated,
            },
            BackgroundLayer {
                painting_area: Rect::new(1.0, 0.0, 2.0, 3.0),
                image: Some(LoadedImage::solid(1, 1, Rgba::BLUE)),
                image_rendering: ImageRendering::Pixelated,
            },
            BackgroundLayer {
                painting_area: Rect::new(0.0, 0.0, 4.0, 3.0),
                image: None,
                image_rendering: ImageRendering::default(),
            },
        ],
    };

    let pixels = render(page);
    check(
        "layer-order",
        &pixels,
        "
        RRBG
        RRBG
        GBBG
        ",
    );
}

#[test]
fn test_fractional_page_dimensions_are_floored() {
    let page = BoxNode::page(
        dimensions(0.0, 0.0, 8.6, 6.4),
        Background::solid(Rgba::WHITE, Rect::new(0.0, 0.0, 9.0, 7.0)),
    );
    let pixels = render(page);
    assert_eq!(pixels.width(), 8);
    assert_eq!(pixels.height(), 6);
}

#[test]
fn test_empty_background_layer_list_aborts_the_render() {
    let page = BoxNode::page(
        dimensions(0.0, 0.0, 4.0, 4.0),
        Background {
            color: Rgba::WHITE,
            layers: Vec::new(),
        },
    );
    let result = render_page(page, true, &SolidFragmentPainter, &SamplingImagePainter);
    assert!(matches!(result, Err(PaintError::MissingBackgroundLayer)));
}

#[test]
fn test_inline_painter_failure_aborts_the_render() {
    struct FailingPainter;

    impl quokka_paint::InlinePainter for FailingPainter {
        fn draw_inline_level(
            &self,
            _context: &mut quokka_raster::GraphicsContext,
            _page: &BoxNode,
            _line: &BoxNode,
            _hinting: bool,
        ) -> Result<(), PaintError> {
            Err(anyhow::anyhow!("glyph cache poisoned").into())
        }
    }

    let mut page = white_page(4.0, 4.0);
    page.children.push(red_run(0.0, 0.0, 2.0, 2.0));
    let result = render_page(page, true, &FailingPainter, &SamplingImagePainter);
    assert!(matches!(result, Err(PaintError::Collaborator(_))));
}
