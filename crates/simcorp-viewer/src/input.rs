//! Pointer and keyboard input
//!
//! Hover resolution maps the window cursor through the inverse camera
//! transform into scene coordinates, so tooltips stay accurate under any
//! zoom/pan combination. View and module switching mirror the header tabs.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::rendering::screen_to_scene;
use crate::state::{ActiveModule, ActiveView, HoverState, HoverTarget, Sim};

/// Resolve what the pointer is over. Silently no-ops (clearing the hover)
/// when the cursor is outside the window or the camera is not ready.
pub fn hover_system(
    sim: Res<Sim>,
    view: Res<ActiveView>,
    camera_query: Query<&Transform, With<Camera2d>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut hover: ResMut<HoverState>,
) {
    if *view != ActiveView::Factory {
        hover.target = None;
        return;
    }

    let Ok(window) = window_query.get_single() else {
        hover.target = None;
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        hover.target = None;
        return;
    };
    let Ok(camera_transform) = camera_query.get_single() else {
        hover.target = None;
        return;
    };

    let scene = screen_to_scene(
        cursor,
        camera_transform.translation.truncate(),
        camera_transform.scale.x,
        Vec2::new(window.width(), window.height()),
    );
    hover.pointer = scene;

    // Workers render above machines and win ties
    hover.target = sim
        .0
        .worker_at(scene)
        .map(HoverTarget::Worker)
        .or_else(|| sim.0.machine_at(scene).map(HoverTarget::Machine));
}

/// Digit keys select the top-level view, matching the header tabs
pub fn view_switching(keyboard: Res<ButtonInput<KeyCode>>, mut view: ResMut<ActiveView>) {
    let bindings = [
        (KeyCode::Digit1, ActiveView::Factory),
        (KeyCode::Digit2, ActiveView::GlobalOps),
        (KeyCode::Digit3, ActiveView::Finance),
        (KeyCode::Digit4, ActiveView::Research),
        (KeyCode::Digit5, ActiveView::Marketing),
        (KeyCode::Digit6, ActiveView::Results),
    ];

    for (key, target) in bindings {
        if keyboard.just_pressed(key) {
            *view = target;
        }
    }
}

/// Function keys select the factory module tab
pub fn module_switching(keyboard: Res<ButtonInput<KeyCode>>, mut module: ResMut<ActiveModule>) {
    let bindings = [
        (KeyCode::F1, ActiveModule::Factory),
        (KeyCode::F2, ActiveModule::Hr),
        (KeyCode::F3, ActiveModule::Research),
        (KeyCode::F4, ActiveModule::Marketing),
        (KeyCode::F5, ActiveModule::Finance),
    ];

    for (key, target) in bindings {
        if keyboard.just_pressed(key) {
            *module = target;
        }
    }
}
