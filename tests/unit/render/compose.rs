use super::*;
use crate::foundation::core::Point;
use crate::layers::classify::classify;
use crate::layers::overlay::{Child, KindSet};
use crate::layers::widgets::{Dot, HorizontalLine};
use crate::reveal::options::PathProps;

fn line() -> BezPath {
    let mut p = BezPath::new();
    p.move_to(Point::new(10.0, 40.0));
    p.line_to(Point::new(50.0, 10.0));
    p.line_to(Point::new(90.0, 30.0));
    p
}

fn groups() -> LayerGroups {
    let children: Vec<Child> = vec![
        Dot::new(Point::new(90.0, 30.0)).overlay().into(),
        HorizontalLine::new(25.0).overlay().into(),
    ];
    classify(&children, KindSet::BACKGROUND, KindSet::FOREGROUND)
}

fn area() -> DrawingArea {
    DrawingArea::new(100.0, 50.0)
}

#[test]
fn animated_layers_share_one_clip_width() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    let plan = r.compose(&line(), &groups(), area(), 37.5);
    assert_eq!(plan.reveal_width, 37.5);
    for layer in &plan.animated_pass.layers {
        assert_eq!(layer.clip_width, Some(37.5));
    }
    for layer in &plan.static_pass.layers {
        assert_eq!(layer.clip_width, None);
    }
}

#[test]
fn negative_reveal_width_is_floored() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    let plan = r.compose(&line(), &groups(), area(), -12.0);
    assert_eq!(plan.reveal_width, 0.0);
    assert!(
        plan.animated_pass
            .layers
            .iter()
            .all(|l| l.clip_width == Some(0.0))
    );
}

#[test]
fn stacking_order_is_path_then_overlays() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    let plan = r.compose(&line(), &groups(), area(), 100.0);
    let roles: Vec<LayerRole> = plan.static_pass.layers.iter().map(|l| l.role).collect();
    assert_eq!(roles, vec![LayerRole::StaticPath, LayerRole::Background]);
    let roles: Vec<LayerRole> = plan.animated_pass.layers.iter().map(|l| l.role).collect();
    assert_eq!(roles, vec![LayerRole::GradientPath, LayerRole::Foreground]);

    // Dot + line in the background, only the dot in the foreground.
    assert_eq!(plan.static_pass.layer(LayerRole::Background).unwrap().ops.len(), 2);
    assert_eq!(plan.animated_pass.layer(LayerRole::Foreground).unwrap().ops.len(), 1);
}

#[test]
fn contexts_follow_show_inactive_path() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    assert!(r.static_context().is_inactive);
    assert!(!r.animated_context().is_inactive);

    let r = CompositeRenderer::new(&RevealOptions {
        show_inactive_path: false,
        ..RevealOptions::default()
    });
    assert!(!r.static_context().is_inactive);
    assert!(!r.animated_context().is_inactive);
}

#[test]
fn inactive_static_stroke_prefers_inactive_color() {
    let faded = CompositeRenderer::new(&RevealOptions::default());
    let plan = faded.compose(&line(), &LayerGroups::default(), area(), 0.0);
    let DrawOp::StrokePath { paint, width, .. } = &plan.static_pass.layers[0].ops[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(*paint, Paint::Solid(ColorDef::BLACK.with_opacity(0.2)));
    assert_eq!(*width, 3.0);

    let grey = ColorDef::rgba(0.5, 0.5, 0.5, 1.0);
    let tinted = CompositeRenderer::new(&RevealOptions {
        inactive_color: Some(grey),
        ..RevealOptions::default()
    });
    let plan = tinted.compose(&line(), &LayerGroups::default(), area(), 0.0);
    let DrawOp::StrokePath { paint, .. } = &plan.static_pass.layers[0].ops[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(*paint, Paint::Solid(grey));
}

#[test]
fn gradient_spans_path_bounds() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    let plan = r.compose(&line(), &LayerGroups::default(), area(), 50.0);
    let DrawOp::StrokePath { paint, .. } = &plan.animated_pass.layers[0].ops[0] else {
        panic!("expected a stroke");
    };
    let Paint::LinearX { x0, x1, start, end } = *paint else {
        panic!("expected a gradient");
    };
    assert_eq!((x0, x1), (10.0, 90.0));
    assert_eq!((start, end), RevealOptions::default().gradient_stops());
}

#[test]
fn glow_only_on_animated_pass_when_configured() {
    let r = CompositeRenderer::new(&RevealOptions::default());
    let plan = r.compose(&line(), &LayerGroups::default(), area(), 50.0);
    assert!(plan.animated_pass.glow.is_none());

    let tint = ColorDef::rgba(0.0, 1.0, 0.0, 1.0);
    let r = CompositeRenderer::new(&RevealOptions {
        glow: Some(tint),
        ..RevealOptions::default()
    });
    let plan = r.compose(&line(), &LayerGroups::default(), area(), 50.0);
    assert_eq!(plan.animated_pass.glow, Some(Glow::tinted(tint)));
    assert!(plan.static_pass.glow.is_none());
}

#[test]
fn path_color_override_restyles_only_the_stroke() {
    let base = ColorDef::rgba(0.0, 0.0, 1.0, 1.0);
    let red = ColorDef::rgba(1.0, 0.0, 0.0, 1.0);
    let r = CompositeRenderer::new(&RevealOptions {
        color: base,
        show_inactive_path: false,
        path_props: PathProps {
            color: Some(red),
            ..PathProps::default()
        },
        ..RevealOptions::default()
    });
    assert_eq!(r.static_context().color, base);
    assert_eq!(r.animated_context().color, base);

    let plan = r.compose(&line(), &LayerGroups::default(), area(), 0.0);
    let DrawOp::StrokePath { paint, .. } = &plan.static_pass.layers[0].ops[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(*paint, Paint::Solid(red));

    let dimmed = CompositeRenderer::new(&RevealOptions {
        color: base,
        path_props: PathProps {
            color: Some(red),
            ..PathProps::default()
        },
        ..RevealOptions::default()
    });
    let plan = dimmed.compose(&line(), &LayerGroups::default(), area(), 0.0);
    let DrawOp::StrokePath { paint, .. } = &plan.static_pass.layers[0].ops[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(*paint, Paint::Solid(red.with_opacity(0.2)));
}
