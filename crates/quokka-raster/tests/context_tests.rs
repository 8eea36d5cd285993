//! Integration tests for scoped graphics-context state.

use std::panic::{AssertUnwindSafe, catch_unwind};

use quokka_common::{Rect, Rgba};
use quokka_raster::{Antialias, GraphicsContext, Surface, stacked};

fn context(width: u32, height: u32) -> GraphicsContext {
    GraphicsContext::new(Surface::allocate(width, height).expect("allocation should succeed"))
}

#[test]
fn test_stacked_restores_on_scope_exit() {
    let mut context = context(4, 4);
    {
        let mut scope = stacked(&mut context);
        scope.set_antialias(Antialias::None);
        scope.set_source(Rgba::RED);
        scope.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(scope.antialias(), Antialias::None);
    }
    assert_eq!(context.antialias(), Antialias::Default);
    assert_eq!(context.source(), Rgba::BLACK);
    // The clip pushed inside the scope is gone: painting covers the
    // whole surface again.
    context.set_source(Rgba::BLUE);
    context.paint();
    let pixels = context.into_surface().extract();
    assert_eq!(pixels.argb(3, 3), [255, 0, 0, 255]);
}

#[test]
fn test_stacked_nests() {
    let mut context = context(2, 2);
    {
        let mut outer = stacked(&mut context);
        outer.set_antialias(Antialias::None);
        {
            let mut inner = stacked(&mut outer);
            inner.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
            inner.set_source(Rgba::RED);
            inner.paint();
        }
        // The inner clip is gone, the outer antialias mode is not.
        assert_eq!(outer.antialias(), Antialias::None);
        outer.set_source(Rgba::BLUE);
        outer.paint();
    }
    let pixels = context.into_surface().extract();
    // The whole surface is blue: the second paint was unclipped.
    assert_eq!(pixels.argb(0, 0), [255, 0, 0, 255]);
    assert_eq!(pixels.argb(1, 1), [255, 0, 0, 255]);
}

#[test]
fn test_stacked_restores_through_panic() {
    let mut context = context(2, 2);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scope = stacked(&mut context);
        scope.set_antialias(Antialias::None);
        scope.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        panic!("painting failed mid-subtree");
    }));
    assert!(result.is_err());

    // The failed scope must not leak clip or antialias state into what a
    // sibling subtree would observe.
    assert_eq!(context.antialias(), Antialias::Default);
    context.set_source(Rgba::LIME);
    context.paint();
    let pixels = context.into_surface().extract();
    assert_eq!(pixels.argb(1, 1), [255, 0, 255, 0]);
}

#[test]
fn test_clip_intersection_accumulates() {
    let mut context = context(4, 1);
    {
        let mut scope = stacked(&mut context);
        scope.clip_rect(Rect::new(0.0, 0.0, 3.0, 1.0));
        scope.clip_rect(Rect::new(1.0, 0.0, 3.0, 1.0));
        scope.set_source(Rgba::RED);
        scope.paint();
    }
    let pixels = context.into_surface().extract();
    assert_eq!(pixels.argb(0, 0), [0; 4]);
    assert_eq!(pixels.argb(1, 0), [255, 255, 0, 0]);
    assert_eq!(pixels.argb(2, 0), [255, 255, 0, 0]);
    assert_eq!(pixels.argb(3, 0), [0; 4]);
}

#[test]
fn test_hinted_fill_has_crisp_edges() {
    // A fill offset by half a pixel: crisp mode decides by pixel center,
    // default mode blends by area coverage.
    let rect = Rect::new(0.5, 0.0, 1.0, 1.0);

    let mut crisp = context(2, 1);
    crisp.set_antialias(Antialias::None);
    crisp.set_source(Rgba::RED);
    crisp.fill_rect(rect);
    let crisp = crisp.into_surface().extract();
    // Pixel 0's center (0.5) is on the inclusive left edge; pixel 1's
    // center (1.5) is on the exclusive right edge.
    assert_eq!(crisp.argb(0, 0), [255, 255, 0, 0]);
    assert_eq!(crisp.argb(1, 0), [0; 4]);

    let mut soft = context(2, 1);
    soft.set_source(Rgba::RED);
    soft.fill_rect(rect);
    let soft = soft.into_surface().extract();
    // Half coverage on both pixels.
    assert_eq!(soft.argb(0, 0)[0], 128);
    assert_eq!(soft.argb(1, 0)[0], 128);
}
