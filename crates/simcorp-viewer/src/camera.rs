//! Viewport controller: zoom and pan over the rendered scene
//!
//! `CameraState` is the single source of truth; the camera transform eases
//! toward it except during an active drag, which applies immediately.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::state::CameraState;

/// Zoom bounds: 0.5x to 3.0x scene magnification
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom change per wheel notch
pub const ZOOM_STEP: f32 = 0.1;

/// Lerp factor for the eased transform when not dragging
const EASE_FACTOR: f32 = 0.2;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}

/// Apply one wheel notch to the zoom level, clamped to bounds.
/// Zooming is centered on the canvas center - the camera focal point does
/// not chase the pointer.
pub fn zoom_after_scroll(zoom: f32, scroll_y: f32) -> f32 {
    (zoom + scroll_y * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM)
}

pub fn camera_controls(
    mut camera_state: ResMut<CameraState>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut scroll_events: EventReader<MouseWheel>,
    mut motion_events: EventReader<MouseMotion>,
) {
    // Scroll zoom
    for scroll in scroll_events.read() {
        camera_state.zoom = zoom_after_scroll(camera_state.zoom, scroll.y);
    }

    // Middle or secondary button drag pans by the screen-space delta
    camera_state.dragging =
        mouse_buttons.pressed(MouseButton::Middle) || mouse_buttons.pressed(MouseButton::Right);

    if camera_state.dragging {
        let zoom = camera_state.zoom;
        for motion in motion_events.read() {
            camera_state.pan.x -= motion.delta.x / zoom;
            camera_state.pan.y += motion.delta.y / zoom;
        }
    } else {
        motion_events.clear();
    }

    // Reset restores the identity transform
    if keyboard.just_pressed(KeyCode::KeyR) {
        camera_state.zoom = 1.0;
        camera_state.pan = Vec2::ZERO;
    }
}

/// Ease the camera transform toward the controller state. An active drag
/// snaps immediately so the scene tracks the pointer.
pub fn camera_apply(
    camera_state: Res<CameraState>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    // Camera scale is the inverse of scene magnification
    let target_translation = Vec3::new(camera_state.pan.x, camera_state.pan.y, 0.0);
    let target_scale = Vec3::splat(1.0 / camera_state.zoom);

    if camera_state.dragging {
        transform.translation = target_translation;
        transform.scale = target_scale;
    } else {
        transform.translation = transform.translation.lerp(target_translation, EASE_FACTOR);
        transform.scale = transform.scale.lerp(target_scale, EASE_FACTOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_stays_clamped() {
        let mut zoom = 1.0;
        for _ in 0..100 {
            zoom = zoom_after_scroll(zoom, 1.0);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        }
        assert_eq!(zoom, MAX_ZOOM);

        for _ in 0..100 {
            zoom = zoom_after_scroll(zoom, -1.0);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        }
        assert_eq!(zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_mixed_sequence() {
        let scrolls = [3.0, -8.0, 2.5, 40.0, -100.0, 0.7, 12.0, -0.3];
        let mut zoom = 1.0;
        for s in scrolls {
            zoom = zoom_after_scroll(zoom, s);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        }
    }

    #[test]
    fn test_zoom_step_is_fixed() {
        let zoom = zoom_after_scroll(1.0, 1.0);
        assert!((zoom - 1.1).abs() < 1e-6);
        let zoom = zoom_after_scroll(1.0, -1.0);
        assert!((zoom - 0.9).abs() < 1e-6);
    }
}
