use std::collections::BTreeSet;

use nalgebra::Vector3;

use boxproj_core::{
    render_scene, BoxPose, CameraPose, ProjectionError, CORNER_COUNT, CORNER_LABELS,
};

#[test]
fn test_label_set_matches_canonical_corners() {
    let camera = CameraPose {
        orientation: Vector3::new(15.0, -30.0, 5.0),
        position: Vector3::new(1.0, 2.0, 4.0),
        zoom: 1.5,
    };
    let points = render_scene(&BoxPose::default(), &camera).unwrap();

    let labels: BTreeSet<_> = points.iter().map(|p| p.label).collect();
    let expected: BTreeSet<_> = CORNER_LABELS.into_iter().collect();
    assert_eq!(points.len(), CORNER_COUNT);
    assert_eq!(labels, expected);
}

#[test]
fn test_flattened_box_on_camera_plane_is_rejected() {
    // Zero z-scale flattens every corner onto the box's z-plane; placing the
    // camera on that same plane makes every camera-space z exactly zero.
    let box_pose = BoxPose {
        scale: Vector3::new(1.0, 1.0, 0.0),
        ..BoxPose::default()
    };
    let camera = CameraPose {
        position: Vector3::new(0.0, 0.0, -5.0),
        ..CameraPose::default()
    };

    let err = render_scene(&box_pose, &camera).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::CameraPlane {
            label: "front-top-left"
        }
    );
}

#[test]
fn test_non_finite_pose_is_rejected() {
    let box_pose = BoxPose {
        translation: Vector3::new(f64::INFINITY, 0.0, 0.0),
        ..BoxPose::default()
    };

    let err = render_scene(&box_pose, &CameraPose::default()).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::NonFinite {
            label: "front-top-left"
        }
    );
    assert!(err.to_string().contains("front-top-left"));
}

#[test]
fn test_box_translation_shifts_every_corner() {
    let shifted = BoxPose {
        translation: Vector3::new(0.5, 0.0, 0.0),
        ..BoxPose::default()
    };
    let base = render_scene(&BoxPose::default(), &CameraPose::default()).unwrap();
    let moved = render_scene(&shifted, &CameraPose::default()).unwrap();

    // Corners sit at negative camera-space z, so a +x world shift moves every
    // screen x in the negative direction.
    for (a, b) in base.iter().zip(&moved) {
        assert!(b.x < a.x, "corner {} did not shift", a.label);
        assert_eq!(a.y, b.y);
    }
}
