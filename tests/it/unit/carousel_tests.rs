use crate::helpers::{CarouselBuilder, RecordingSurface, RecordingTooltips};
use showreel::carousel::pointer::PointerEvent;
use showreel::carousel::{CarouselController, CarouselItem, PointerKind};
use showreel::host::CursorStyle;
use showreel::settings::CarouselSettings;
use showreel::ShowreelError;

// ============================================================================
// Track duplication
// ============================================================================

#[test]
fn test_track_renders_every_item_twice() {
    let carousel = CarouselBuilder::new().build();
    let rendered = &carousel.surface().rendered_items;

    assert_eq!(rendered.len(), 6);
    for i in 0..3 {
        assert_eq!(rendered[i], rendered[i + 3]);
    }
    assert_eq!(carousel.track().original_len(), 3);
    assert_eq!(carousel.single_copy_width(), 300.0);
}

#[test]
fn test_empty_item_list_is_rejected() {
    let result = CarouselController::new(
        Vec::<CarouselItem>::new(),
        RecordingSurface::new(0.0),
        RecordingTooltips::default(),
        CarouselSettings::default(),
    );
    assert!(matches!(result, Err(ShowreelError::EmptyTrack)));
}

// ============================================================================
// Frame tick
// ============================================================================

#[test]
fn test_frame_tick_advances_and_wraps() {
    let mut carousel = CarouselBuilder::new().build();

    for _ in 0..299 {
        carousel.on_frame();
    }
    assert_eq!(carousel.offset(), -299.0);

    carousel.on_frame();
    assert_eq!(carousel.offset(), 0.0);
    assert_eq!(carousel.surface().last_translation(), Some(0.0));
}

#[test]
fn test_offset_stays_within_one_copy() {
    let mut carousel = CarouselBuilder::new().build();
    let width = carousel.single_copy_width();

    for _ in 0..1_000 {
        carousel.on_frame();
        let offset = carousel.offset();
        assert!(offset <= 0.0 && offset > -width, "offset {offset} escaped");
    }
    // 1000 = 3 * 300 + 100
    assert_eq!(carousel.offset(), -100.0);
}

#[test]
fn test_frame_tick_is_noop_while_dragging() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.on_frame();
    carousel.handle_pointer(PointerEvent::mouse_down(10.0));
    let translations = carousel.surface().translations.len();

    for _ in 0..50 {
        carousel.on_frame();
    }

    assert_eq!(carousel.offset(), -1.0);
    assert_eq!(carousel.surface().translations.len(), translations);

    carousel.handle_pointer(PointerEvent::mouse_up(10.0));
    carousel.on_frame();
    assert_eq!(carousel.offset(), -2.0);
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn test_drag_moves_by_scaled_distance() {
    let mut carousel = CarouselBuilder::new().with_container_left(20.0).build();

    carousel.handle_pointer(PointerEvent::mouse_down(220.0));
    carousel.handle_pointer(PointerEvent::mouse_move(120.0));

    assert_eq!(carousel.offset(), -150.0);
    assert_eq!(carousel.surface().last_translation(), Some(-150.0));
}

#[test]
fn test_drag_start_resyncs_from_rendered_transform() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.surface_mut().transform_override = Some("matrix(1, 0, 0, 1, -42.7, 0)".into());

    carousel.on_drag_start(PointerKind::Touch, 0.0);
    assert_eq!(carousel.offset(), -42.0);
}

#[test]
fn test_drag_start_with_unreadable_transform_starts_at_zero() {
    let mut carousel = CarouselBuilder::new().build();
    for _ in 0..10 {
        carousel.on_frame();
    }
    carousel.surface_mut().transform_override = Some("rotate(3deg)".into());

    carousel.on_drag_start(PointerKind::Mouse, 0.0);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn test_drag_past_right_edge_rebases_session() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.surface_mut().transform_override = Some("matrix(1, 0, 0, 1, -295, 0)".into());

    carousel.on_drag_start(PointerKind::Mouse, 0.0);
    // walk = 200 * 1.5 = 300, so -295 + 300 = 5 > 0
    carousel.on_drag_move(200.0);
    assert_eq!(carousel.offset(), -300.0);

    // Same pointer position: the rebased session holds the snapped offset
    carousel.on_drag_move(200.0);
    assert_eq!(carousel.offset(), -300.0);

    // Moving back continues from the snapped position
    carousel.on_drag_move(180.0);
    assert_eq!(carousel.offset(), 0.0);
}

#[test]
fn test_drag_edges_are_symmetric() {
    let mut right = CarouselBuilder::new().with_drag_multiplier(1.0).build();
    right.on_drag_start(PointerKind::Mouse, 0.0);
    right.on_drag_move(1.0);
    assert_eq!(right.offset(), -300.0);

    let mut left = CarouselBuilder::new().with_drag_multiplier(1.0).build();
    left.on_drag_start(PointerKind::Mouse, 0.0);
    left.on_drag_move(-301.0);
    assert_eq!(left.offset(), 0.0);

    let mut exact = CarouselBuilder::new().with_drag_multiplier(1.0).build();
    exact.on_drag_start(PointerKind::Mouse, 0.0);
    exact.on_drag_move(-300.0);
    assert_eq!(exact.offset(), -300.0);
}

#[test]
fn test_move_without_session_is_ignored() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.on_drag_move(500.0);

    assert_eq!(carousel.offset(), 0.0);
    assert!(carousel.surface().translations.is_empty());
}

#[test]
fn test_mouse_drag_updates_cursor() {
    let mut carousel = CarouselBuilder::new().build();

    carousel.handle_pointer(PointerEvent::mouse_down(0.0));
    assert_eq!(carousel.surface().cursor, Some(CursorStyle::Grabbing));

    carousel.handle_pointer(PointerEvent::mouse_leave(0.0));
    assert_eq!(carousel.surface().cursor, Some(CursorStyle::Grab));
    assert!(!carousel.is_dragging());
}

#[test]
fn test_touch_drag_leaves_cursor_alone() {
    let mut carousel = CarouselBuilder::new().build();

    carousel.handle_pointer(PointerEvent::touch_start(50.0));
    carousel.handle_pointer(PointerEvent::touch_move(40.0));
    carousel.handle_pointer(PointerEvent::touch_end(40.0));

    assert_eq!(carousel.surface().cursor, None);
    assert_eq!(carousel.offset(), -15.0);
    assert!(!carousel.is_dragging());
}

#[test]
fn test_second_drag_start_restarts_session() {
    let mut carousel = CarouselBuilder::new().with_drag_multiplier(1.0).build();

    carousel.on_drag_start(PointerKind::Mouse, 100.0);
    carousel.on_drag_move(50.0);
    assert_eq!(carousel.offset(), -50.0);

    carousel.on_drag_start(PointerKind::Touch, 0.0);
    carousel.on_drag_move(-10.0);
    assert_eq!(carousel.offset(), -60.0);
}

// ============================================================================
// Tooltips
// ============================================================================

#[test]
fn test_tooltip_lifecycle() {
    let mut carousel = CarouselBuilder::new().build();

    carousel.on_hover_enter(0);
    carousel.on_hover_enter(0);
    assert_eq!(carousel.tooltip_count(), 1);
    assert_eq!(carousel.tooltips().labels(), vec!["Rust".to_string()]);

    let placement = carousel.tooltips().last_placement.expect("tooltip shown");
    assert_eq!(placement.offset_y, -50.0);
    assert!(placement.centered);

    carousel.on_hover_leave(0);
    assert_eq!(carousel.tooltip_count(), 0);
    assert!(carousel.tooltips().live.is_empty());
}

#[test]
fn test_tooltip_suppressed_while_dragging() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.on_drag_start(PointerKind::Mouse, 0.0);

    carousel.on_hover_enter(1);
    assert!(!carousel.has_tooltip(1));
    assert_eq!(carousel.tooltips().created, 0);
}

#[test]
fn test_clone_items_share_labels() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.on_hover_enter(4);
    assert_eq!(carousel.tooltips().labels(), vec!["Figma".to_string()]);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hover_at_follows_the_offset() {
    let mut carousel = CarouselBuilder::new().build();

    assert_eq!(carousel.hover_at(150.0, 10.0), Some(1));
    assert!(carousel.has_tooltip(1));

    for _ in 0..50 {
        carousel.on_frame();
    }
    assert_eq!(carousel.hover_at(150.0, 10.0), Some(2));
    assert!(!carousel.has_tooltip(1));
    assert!(carousel.has_tooltip(2));

    assert_eq!(carousel.hover_at(150.0, 500.0), None);
    assert_eq!(carousel.tooltip_count(), 0);
}

#[test]
fn test_visible_items_window() {
    let mut carousel = CarouselBuilder::new().build();
    for _ in 0..150 {
        carousel.on_frame();
    }
    assert_eq!(carousel.visible_items(200.0), vec![1, 2, 3]);
}

// ============================================================================
// Resize and settings
// ============================================================================

#[test]
fn test_resize_remeasures_and_wraps_offset() {
    let mut carousel = CarouselBuilder::new().build();
    for _ in 0..250 {
        carousel.on_frame();
    }

    carousel.surface_mut().scroll_width = 400.0;
    carousel.on_resize();

    assert_eq!(carousel.single_copy_width(), 200.0);
    assert_eq!(carousel.offset(), -50.0);
}

#[test]
fn test_resize_during_drag_keeps_session_continuous() {
    let mut carousel = CarouselBuilder::new().with_drag_multiplier(1.0).build();
    carousel.on_drag_start(PointerKind::Mouse, 0.0);
    carousel.on_drag_move(-250.0);
    assert_eq!(carousel.offset(), -250.0);

    carousel.surface_mut().scroll_width = 400.0;
    carousel.on_resize();
    assert_eq!(carousel.offset(), -50.0);

    // 10px further left continues from the wrapped offset
    carousel.on_drag_move(-260.0);
    assert_eq!(carousel.offset(), -60.0);
    assert_eq!(carousel.drag_state().session(), Some((0.0, 200.0)));
}

#[test]
fn test_resize_ignored_when_disabled() {
    let settings = CarouselSettings {
        remeasure_on_resize: false,
        ..CarouselSettings::default()
    };
    let mut carousel = CarouselBuilder::new().with_settings(settings).build();

    carousel.surface_mut().scroll_width = 400.0;
    carousel.on_resize();
    assert_eq!(carousel.single_copy_width(), 300.0);
}

#[test]
fn test_apply_settings_changes_speed() {
    let mut carousel = CarouselBuilder::new().build();
    carousel.apply_settings(CarouselSettings {
        speed: 4.0,
        ..CarouselSettings::default()
    });

    carousel.on_frame();
    assert_eq!(carousel.offset(), -4.0);
}
