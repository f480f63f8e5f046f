//! SimCorp Viewer - dashboard shell and factory floor visualization

mod camera;
mod colors;
mod input;
mod rendering;
mod state;
mod ui;

use bevy::prelude::*;

use simcorp_core::engine::{FloorConfig, FloorEngine};

use state::{ActiveModule, ActiveView, CameraState, HoverState, Sim};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SimCorp - Business Simulation".to_string(),
                resolution: (1280.0, 800.0).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Sim(FloorEngine::new(FloorConfig::default())))
        .insert_resource(CameraState::default())
        .insert_resource(ActiveView::Factory)
        .insert_resource(ActiveModule::Factory)
        .init_resource::<HoverState>()
        .add_systems(
            Startup,
            (
                camera::setup_camera,
                rendering::setup_scene,
                ui::setup_chrome,
                log_scene,
            ),
        )
        .add_systems(
            Update,
            (
                update_simulation,
                input::view_switching,
                input::module_switching,
                (camera::camera_controls, camera::camera_apply).chain(),
                input::hover_system,
            ),
        )
        .add_systems(
            Update,
            (
                rendering::sync_floor_visibility,
                rendering::animate_machines,
                rendering::render_grid,
                rendering::render_zone_decor,
                rendering::render_machine_decor,
                rendering::render_workers,
                rendering::update_tooltip,
                ui::ticker_scroll,
                ui::highlight_view_tabs,
                ui::highlight_module_tabs,
                ui::sync_module_nav,
                ui::update_placeholder,
            ),
        )
        .run();
}

/// Advance the engine with real frame time while the factory view is up.
/// Worker physics integrates every frame; the machine tick accumulates
/// inside the engine at its own fixed interval.
fn update_simulation(time: Res<Time>, view: Res<ActiveView>, mut sim: ResMut<Sim>) {
    if *view != ActiveView::Factory {
        return;
    }
    sim.0.update(time.delta_secs());
}

fn log_scene(sim: Res<Sim>) {
    info!(
        "Factory floor ready: {} workers across {} zones, {} machines",
        sim.0.worker_count(),
        sim.0.plan.zones.len(),
        sim.0.plan.machines.len()
    );
}
