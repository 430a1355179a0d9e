use loopline_core::traits::Validate;
use loopline_core::{EditorConfig, LoopError};
use loopline_math::dvec2;
use loopline_spline::Path;
use loopline_track::{Direction, SelectionCursor, SharedTrack, TrackEditor, TrackFollower};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square_editor() -> TrackEditor {
    let mut editor = TrackEditor::new(EditorConfig::default()).unwrap();
    editor.add_point(dvec2(0.0, 0.0));
    editor.add_point(dvec2(10.0, 0.0));
    editor.add_point(dvec2(10.0, 10.0));
    editor.add_point(dvec2(0.0, 10.0));
    editor
}

#[test]
fn test_closest_follows_cursor() {
    init_logging();
    let mut editor = square_editor();

    let hit = editor.closest_on_active_segment(dvec2(5.0, 0.0)).unwrap();
    assert!((hit.t - 0.5).abs() <= 0.005, "t = {}", hit.t);

    editor.next_node().unwrap();
    assert_eq!(editor.cursor(), SelectionCursor::new(1, 2));
    let hit = editor.closest_on_active_segment(dvec2(10.0, 5.0)).unwrap();
    assert!((hit.t - 1.5).abs() <= 0.005, "t = {}", hit.t);
}

#[test]
fn test_evaluation_waits_for_four_points() {
    let mut editor = TrackEditor::new(EditorConfig::default()).unwrap();
    editor.add_point(dvec2(0.0, 0.0));
    editor.add_point(dvec2(10.0, 0.0));
    editor.add_point(dvec2(10.0, 10.0));
    assert!(matches!(
        editor.closest_on_active_segment(dvec2(5.0, 0.0)),
        Err(LoopError::InsufficientPoints {
            required: 4,
            actual: 3
        })
    ));
    editor.add_point(dvec2(0.0, 10.0));
    assert!(editor.closest_on_active_segment(dvec2(5.0, 0.0)).is_ok());
}

#[test]
fn test_laps_count_on_cursor_wrap() {
    let mut editor = square_editor();
    for _ in 0..3 {
        editor.next_node().unwrap();
    }
    assert_eq!(editor.lap(), 1);
    assert_eq!(editor.cursor(), SelectionCursor::new(3, 0));
    editor.next_node().unwrap();
    assert_eq!(editor.lap(), 2);
    assert_eq!(editor.cursor(), SelectionCursor::default());

    editor.prev_node().unwrap();
    assert_eq!(editor.cursor(), SelectionCursor::new(3, 0));
    assert_eq!(editor.lap(), 2);
}

#[test]
fn test_nudge_selected_point_refreshes_lengths() {
    let config = EditorConfig::from_json_str(r#"{"nudge_step": 2.0}"#).unwrap();
    let mut editor = TrackEditor::from_points(
        &[
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ],
        config,
    )
    .unwrap();

    editor.select_next_point().unwrap();
    let before = editor.path().total_length();
    assert_eq!(editor.nudge_selected(Direction::Right).unwrap(), dvec2(12.0, 0.0));
    assert_eq!(editor.nudge_selected(Direction::Up).unwrap(), dvec2(12.0, -2.0));
    assert!(editor.path().total_length() > before);
    editor.path().validate().unwrap();

    editor.nudge_selected(Direction::Down).unwrap();
    editor.nudge_selected(Direction::Left).unwrap();
    assert_eq!(editor.path().point(1).unwrap().position, dvec2(10.0, 0.0));
}

#[test]
fn test_remove_keeps_cursor_in_range() {
    let mut editor = square_editor();
    editor.add_point(dvec2(-5.0, 5.0));
    for _ in 0..4 {
        editor.next_node().unwrap();
    }
    assert_eq!(editor.cursor(), SelectionCursor::new(4, 0));

    assert_eq!(editor.remove_point(), Some(dvec2(-5.0, 5.0)));
    assert_eq!(editor.path().len(), 4);
    assert_eq!(editor.cursor(), SelectionCursor::new(0, 0));
    editor.path().validate().unwrap();
    assert!(editor.closest_on_active_segment(dvec2(5.0, 0.0)).is_ok());
}

#[test]
fn test_follower_drives_editor_path() {
    let editor = square_editor();
    let path = editor.path();
    let mut follower = TrackFollower::new();
    let step = path.total_length() / 64.0;

    let mut laps = 0;
    for _ in 0..130 {
        laps += follower.advance(path, step).unwrap();
        let pose = follower.pose(path).unwrap();
        assert!(pose.t >= 0.0 && pose.t <= path.len() as f64);
        assert!(pose.tangent.length() > 0.0);
    }
    assert_eq!(laps, 2);
    assert_eq!(follower.laps(), 2);
}

#[test]
fn test_shared_track_readers_and_writer() {
    init_logging();
    let shared = SharedTrack::new(Path::from_points(&[
        dvec2(0.0, 0.0),
        dvec2(10.0, 0.0),
        dvec2(10.0, 10.0),
        dvec2(0.0, 10.0),
    ]));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let reader = shared.clone();
            scope.spawn(move || {
                for _ in 0..20 {
                    let snapshot = reader.snapshot().unwrap();
                    snapshot.validate().unwrap();
                    let p = snapshot.evaluate(0.5).unwrap();
                    assert!(p.is_finite());
                }
            });
        }

        let writer = shared.clone();
        scope.spawn(move || {
            for i in 0..10 {
                writer
                    .write(|path| path.add_point(dvec2(-1.0 - i as f64, 5.0)))
                    .unwrap();
            }
        });
    });

    assert_eq!(shared.read(|path| path.len()).unwrap(), 14);
}
