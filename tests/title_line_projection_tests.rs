use approx::assert_relative_eq;
use title_line_chart::core::{
    DataBounds, DataPoint, GraphPoint, PlotRect, TITLE_OFFSET_PX, clip_segment, map_to_graph,
    project_title_line,
};

fn unit_bounds() -> DataBounds {
    DataBounds::new(0.0, 10.0, 0.0, 10.0)
}

#[test]
fn projection_returns_empty_for_short_series() {
    let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);

    let empty = project_title_line::<DataPoint>(&[], unit_bounds(), rect);
    assert!(empty.segments.is_empty());
    assert!(empty.fill_polygon.is_empty());
    assert!(empty.title_anchor(rect).is_none());

    let single = project_title_line(&[DataPoint::new(5.0, 5.0)], unit_bounds(), rect);
    assert!(single.segments.is_empty());
    assert!(single.fill_polygon.is_empty());
    assert!(single.rendered.is_empty());
    assert!(single.title_anchor(rect).is_none());
}

#[test]
fn peak_series_draws_two_unclipped_segments() {
    let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
    let points = [
        DataPoint::new(0.0, 0.0),
        DataPoint::new(5.0, 10.0),
        DataPoint::new(10.0, 0.0),
    ];

    let geometry = project_title_line(&points, unit_bounds(), rect);
    assert_eq!(geometry.segments.len(), 2);

    // Device x is graph x + left + 1; device y flips against top + height.
    let first = geometry.segments[0];
    assert_relative_eq!(first.x1, 1.0);
    assert_relative_eq!(first.y1, 100.0);
    assert_relative_eq!(first.x2, 51.0);
    assert_relative_eq!(first.y2, 0.0);
    let second = geometry.segments[1];
    assert_relative_eq!(second.x1, 51.0);
    assert_relative_eq!(second.y1, 0.0);
    assert_relative_eq!(second.x2, 101.0);
    assert_relative_eq!(second.y2, 100.0);

    // Start vertex, then four more before the implicit close.
    assert_eq!(geometry.fill_polygon.len(), 5);
    assert_relative_eq!(geometry.fill_polygon[3].x, 101.0);
    assert_relative_eq!(geometry.fill_polygon[3].y, 100.0);
    assert_relative_eq!(geometry.fill_polygon[4].x, 1.0);
    assert_relative_eq!(geometry.fill_polygon[4].y, 100.0);

    assert_relative_eq!(geometry.first_x, 1.0);
    assert_relative_eq!(geometry.last_used_end_x, 101.0);
    assert_relative_eq!(geometry.title_y, 100.0);

    let anchor = geometry.title_anchor(rect).expect("title anchor");
    assert_relative_eq!(anchor.x, 51.0);
    assert_relative_eq!(anchor.y, -TITLE_OFFSET_PX);
}

#[test]
fn inside_points_match_the_linear_transform() {
    let rect = PlotRect::new(20.0, 30.0, 200.0, 100.0);
    let bounds = DataBounds::new(-5.0, 5.0, 0.0, 50.0);
    let points = [DataPoint::new(-2.5, 10.0), DataPoint::new(2.5, 40.0)];

    let mapped = map_to_graph(&points, bounds, rect);
    assert_relative_eq!(mapped[0].x, 50.0);
    assert_relative_eq!(mapped[0].y, 20.0);
    assert_relative_eq!(mapped[1].x, 150.0);
    assert_relative_eq!(mapped[1].y, 80.0);

    let geometry = project_title_line(&points, bounds, rect);
    let segment = geometry.segments[0];
    assert_relative_eq!(segment.x1, 50.0 + 21.0);
    assert_relative_eq!(segment.y1, 30.0 - 20.0 + 100.0);
    assert_relative_eq!(segment.x2, 150.0 + 21.0);
    assert_relative_eq!(segment.y2, 30.0 - 80.0 + 100.0);
}

#[test]
fn segment_crossing_right_edge_ends_on_it() {
    let rect = PlotRect::new(0.0, 0.0, 10.0, 10.0);
    let points = [DataPoint::new(5.0, 5.0), DataPoint::new(15.0, 5.0)];

    let geometry = project_title_line(&points, unit_bounds(), rect);
    let segment = geometry.segments[0];
    assert_relative_eq!(segment.x2, 11.0);
    assert_relative_eq!(segment.y2, 5.0);

    let (_, end) = clip_segment(GraphPoint::new(5.0, 5.0), GraphPoint::new(15.0, 5.0), 10.0, 10.0);
    assert_relative_eq!(end.x, 10.0);
    assert_relative_eq!(end.y, 5.0);
}

#[test]
fn start_checks_use_the_unclipped_previous_point() {
    let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
    // The middle sample is above the rect: the first segment ends on the top
    // edge, but the second segment starts from the raw sample and is clipped
    // on its own.
    let points = [
        DataPoint::new(0.0, 5.0),
        DataPoint::new(5.0, 15.0),
        DataPoint::new(10.0, 5.0),
    ];

    let geometry = project_title_line(&points, unit_bounds(), rect);
    let first = geometry.segments[0];
    assert_relative_eq!(first.x2, 26.0);
    assert_relative_eq!(first.y2, 0.0);

    let second = geometry.segments[1];
    assert_relative_eq!(second.x1, 76.0);
    assert_relative_eq!(second.y1, 0.0);
    assert_relative_eq!(second.x2, 101.0);
    assert_relative_eq!(second.y2, 50.0);

    // The fill follows segment ends only.
    assert_eq!(geometry.fill_polygon.len(), 5);
    assert_relative_eq!(geometry.fill_polygon[1].x, 26.0);
    assert_relative_eq!(geometry.fill_polygon[2].x, 101.0);

    // Title height comes from the unclipped peak, so it sits above the rect.
    assert_relative_eq!(geometry.title_y, 150.0);
    let anchor = geometry.title_anchor(rect).expect("anchor");
    assert_relative_eq!(anchor.y, -60.0);
}

#[test]
fn title_anchor_requires_positive_last_end() {
    let rect = PlotRect::new(-300.0, 0.0, 100.0, 100.0);
    let points = [DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)];

    let geometry = project_title_line(&points, unit_bounds(), rect);
    assert_eq!(geometry.segments.len(), 1);
    assert!(geometry.last_used_end_x <= 0.0);
    assert!(geometry.title_anchor(rect).is_none());
}

#[test]
fn zero_span_bounds_produce_non_finite_geometry() {
    let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
    let bounds = DataBounds::new(3.0, 3.0, 0.0, 10.0);
    let points = [DataPoint::new(3.0, 1.0), DataPoint::new(3.0, 2.0)];

    let geometry = project_title_line(&points, bounds, rect);
    assert_eq!(geometry.segments.len(), 1);
    assert!(geometry.segments[0].x1.is_nan());
    assert!(geometry.title_anchor(rect).is_none());
}
