use super::*;
use crate::angle::AngleAnnotation;
use crate::error::DiagramError;
use crate::line::Line;
use crate::point::LabeledPoint;
use crate::rotate::callback;
use nalgebra::vector;

struct Fixture {
    graph: Graph,
    scene: Scene,
    b: PointId,
    c: PointId,
    bc: LineId,
    cbx: AngleId,
}

fn fixture() -> Fixture {
    let graph = Graph::new(640.0, 400.0);
    let mut scene = Scene::default();
    let b = scene.add_point(LabeledPoint::new(5.0, 4.0, Some("b")));
    let c = scene.add_point(LabeledPoint::new(4.0, 7.5, Some("c")));
    let bc = scene
        .add_line(Line::new(b, c).rotatable(true).with_class("dashed"))
        .unwrap();
    let bx = scene.add_anonymous(vector![6.0, 4.0]);
    let cbx = scene.add_angle(AngleAnnotation::new(b, bx, c)).unwrap();
    Fixture {
        graph,
        scene,
        b,
        c,
        bc,
        cbx,
    }
}

#[test]
fn points_are_projected_with_labels() {
    let mut f = fixture();
    draw_points(&mut f.graph, &f.scene, &[f.b, f.c]).unwrap();
    let dot = f
        .graph
        .surface()
        .find(POINT_SEL, DatumKey::Point(f.b))
        .unwrap();
    assert_eq!(dot.attr("cx"), Some("220"));
    assert_eq!(dot.attr("cy"), Some("220"));
    assert_eq!(dot.attr("r"), Some("4"));
    assert_eq!(dot.attr("fill"), Some("#000000"));
    let label = f
        .graph
        .surface()
        .find(LABEL_SEL, DatumKey::Point(f.c))
        .unwrap();
    assert_eq!(label.attr("x"), Some("180"));
    assert_eq!(label.attr("y"), Some("80"));
    assert_eq!(label.attr("dx"), Some(".2em"));
    assert_eq!(label.attr("dy"), Some("-.2em"));
    assert_eq!(label.text(), Some("c"));
}

#[test]
fn unlabeled_points_get_empty_text() {
    let mut graph = Graph::new(640.0, 400.0);
    let mut scene = Scene::default();
    let p = scene.add_anonymous(vector![1.0, 1.0]);
    draw_points(&mut graph, &scene, &[p]).unwrap();
    let label = graph.surface().find(LABEL_SEL, DatumKey::Point(p)).unwrap();
    assert_eq!(label.text(), Some(""));
}

#[test]
fn far_away_points_are_written_finite() {
    let mut graph = Graph::new(640.0, 400.0);
    let mut scene = Scene::default();
    let p = scene.add_point(LabeledPoint::new(1e305, 1.0, Some("far")));
    draw_points(&mut graph, &scene, &[p]).unwrap();
    let dot = graph.surface().find(POINT_SEL, DatumKey::Point(p)).unwrap();
    let cx = dot.num("cx").unwrap();
    assert!(cx.is_finite() && cx > 1e305);
    assert!(!graph.to_svg().contains("inf"));
}

#[test]
fn redraws_are_idempotent() {
    let mut f = fixture();
    let noop = callback(|_, _| Ok(()));
    for _ in 0..2 {
        draw_lines(&mut f.graph, &f.scene, &[f.bc], &[noop.clone()]).unwrap();
        draw_points(&mut f.graph, &f.scene, &[f.b, f.c]).unwrap();
        draw_angles(&mut f.graph, &f.scene, &[f.cbx]).unwrap();
    }
    let once = f.graph.surface().len();
    draw_lines(&mut f.graph, &f.scene, &[f.bc], &[noop]).unwrap();
    draw_points(&mut f.graph, &f.scene, &[f.b, f.c]).unwrap();
    draw_angles(&mut f.graph, &f.scene, &[f.cbx]).unwrap();
    assert_eq!(f.graph.surface().len(), once);
    assert_eq!(f.graph.surface().select(POINT_SEL).count(), 2);
    assert_eq!(f.graph.surface().select(LINE_SEL).count(), 1);
    assert_eq!(f.graph.surface().select(ARC_SEL).count(), 1);

    let line = f.graph.surface().find(LINE_SEL, DatumKey::Line(f.bc)).unwrap();
    assert_eq!(line.classes(), &["line", "rotatable", "dashed"]);
}

#[test]
fn dropped_points_are_removed() {
    let mut f = fixture();
    draw_points(&mut f.graph, &f.scene, &[f.b, f.c]).unwrap();
    draw_points(&mut f.graph, &f.scene, &[f.b]).unwrap();
    assert_eq!(f.graph.surface().select(POINT_SEL).count(), 1);
    assert_eq!(f.graph.surface().select(LABEL_SEL).count(), 1);
}

#[test]
fn rotatable_lines_get_a_handler() {
    let mut f = fixture();
    let d = f.scene.add_point(LabeledPoint::new(1.0, 1.0, Some("d")));
    let fixed = f.scene.add_line(Line::new(f.b, d)).unwrap();
    let cbs = vec![callback(|_, _| Ok(())), callback(|_, _| Ok(()))];
    draw_lines(&mut f.graph, &f.scene, &[f.bc, fixed], &cbs).unwrap();

    let s = f.graph.surface();
    let rot = s.find(LINE_SEL, DatumKey::Line(f.bc)).unwrap();
    assert_eq!(rot.handler().map(|h| h.callback_count()), Some(2));
    assert_eq!(rot.attr("x1"), Some("220"));
    assert_eq!(rot.attr("y2"), Some("80"));
    let plain = s.find(LINE_SEL, DatumKey::Line(fixed)).unwrap();
    assert!(plain.handler().is_none());
    assert!(!plain.has_class("rotatable"));
}

#[test]
fn right_angle_arc_and_text() {
    let mut graph = Graph::new(640.0, 400.0);
    let mut scene = Scene::default();
    let o = scene.add_point(LabeledPoint::new(0.0, 0.0, None));
    let a = scene.add_point(LabeledPoint::new(1.0, 0.0, None));
    let b = scene.add_point(LabeledPoint::new(0.0, 1.0, None));
    let id = scene.add_angle(AngleAnnotation::new(o, a, b)).unwrap();
    draw_angles(&mut graph, &scene, &[id]).unwrap();

    let arc = graph.surface().find(ARC_SEL, DatumKey::Angle(id)).unwrap();
    assert_eq!(arc.attr("transform"), Some("translate(20,380)"));
    assert_eq!(
        arc.attr("d"),
        Some("M61,0A61,61,0,0,0,0,-61L0,-60A60,60,0,0,1,60,0Z")
    );
    let text = graph
        .surface()
        .find(ANGLE_TEXT_SEL, DatumKey::Angle(id))
        .unwrap();
    assert_eq!(text.text(), Some("90°"));
    assert_eq!(text.attr("x"), Some("44.042"));
    assert_eq!(text.attr("y"), Some("355.958"));
}

#[test]
fn coincident_points_draw_a_degenerate_arc() {
    let mut graph = Graph::new(640.0, 400.0);
    let mut scene = Scene::default();
    let o = scene.add_point(LabeledPoint::new(2.0, 2.0, None));
    let id = scene.add_angle(AngleAnnotation::new(o, o, o)).unwrap();
    draw_angles(&mut graph, &scene, &[id]).unwrap();
    let arc = graph.surface().find(ARC_SEL, DatumKey::Angle(id)).unwrap();
    let d = arc.attr("d").unwrap();
    assert!(d.contains('L') && !d.contains('A') && !d.contains("NaN"));
}

#[test]
fn failed_draw_leaves_previous_visuals() {
    let mut f = fixture();
    draw_points(&mut f.graph, &f.scene, &[f.b, f.c]).unwrap();
    let before = f.graph.surface().len();
    let err = draw_points(&mut f.graph, &f.scene, &[f.b, PointId(99)]).unwrap_err();
    assert!(matches!(err, DiagramError::UnknownPoint(PointId(99))));
    assert_eq!(f.graph.surface().len(), before);
    assert!(f
        .graph
        .surface()
        .find(POINT_SEL, DatumKey::Point(f.c))
        .is_some());
}

#[test]
fn grid_covers_plot_area() {
    let graph = Graph::new(640.0, 400.0);
    // 16 vertical + 10 horizontal unit lines for a 15 × 9 plot.
    assert_eq!(graph.surface().select(GRID_SEL).count(), 26);
    assert_eq!(graph.surface().select(AXIS_SEL).count(), 2);
}
