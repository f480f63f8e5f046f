//! Scene rendering for the factory floor
//!
//! Filled shapes (zone fills, machine bodies, glow overlays, tooltip panel)
//! are retained sprites spawned once at startup; decorative outlines,
//! furniture, avatars and hover accents are immediate-mode gizmos. Scene
//! coordinates are x-right/y-down with origin at the canvas top-left; this
//! module converts to Bevy world space at the drawing boundary.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use simcorp_core::components::{
    roam_zone, Assignment, Attributes, BobPhase, MachineKind, Name, Position, Role, WorkerStatus,
    Zone, ZoneId,
};
use simcorp_core::constants::{CELL_SIZE, FLOOR_HEIGHT, FLOOR_WIDTH, GRID_COLS, GRID_ROWS};
use simcorp_core::grid::{Rect, Vec2 as SceneVec2};
use simcorp_core::systems::{bob_offset, glow_opacity, led_opacity};

use crate::colors;
use crate::state::{
    ActiveView, FloorRoot, HoverState, HoverTarget, MachineGlow, MachineLed, Sim,
    TooltipBackground, TooltipText,
};

/// Vertical world offset of the canvas center: the chrome bars are taller on
/// top than on the bottom, so the viewport's free area sits below the window
/// center.
pub const SCENE_SHIFT_Y: f32 = -40.0;

/// Margin kept between the tooltip and the canvas edges
const TOOLTIP_MARGIN: f32 = 10.0;

/// Offset from the pointer to the tooltip's left edge
const TOOLTIP_POINTER_GAP: f32 = 12.0;

pub const WORKER_TOOLTIP_SIZE: SceneVec2 = SceneVec2 { x: 185.0, y: 140.0 };
pub const MACHINE_TOOLTIP_SIZE: SceneVec2 = SceneVec2 { x: 180.0, y: 100.0 };

// ============================================================================
// COORDINATE MAPPING
// ============================================================================

/// Scene (canvas-local, y-down) to Bevy world (y-up, canvas centered)
pub fn scene_to_world(scene: SceneVec2) -> Vec2 {
    Vec2::new(
        scene.x - FLOOR_WIDTH / 2.0,
        (FLOOR_HEIGHT / 2.0 - scene.y) + SCENE_SHIFT_Y,
    )
}

/// Inverse of `scene_to_world`
pub fn world_to_scene(world: Vec2) -> SceneVec2 {
    SceneVec2::new(
        world.x + FLOOR_WIDTH / 2.0,
        FLOOR_HEIGHT / 2.0 - (world.y - SCENE_SHIFT_Y),
    )
}

/// Window cursor position to world space under the given camera transform.
/// `cam_scale` is the camera's transform scale (inverse of magnification).
pub fn screen_to_world(cursor: Vec2, cam_translation: Vec2, cam_scale: f32, window: Vec2) -> Vec2 {
    Vec2::new(
        cam_translation.x + (cursor.x - window.x / 2.0) * cam_scale,
        cam_translation.y + (window.y / 2.0 - cursor.y) * cam_scale,
    )
}

/// Window cursor position straight through to scene coordinates
pub fn screen_to_scene(
    cursor: Vec2,
    cam_translation: Vec2,
    cam_scale: f32,
    window: Vec2,
) -> SceneVec2 {
    world_to_scene(screen_to_world(cursor, cam_translation, cam_scale, window))
}

/// Tooltip top-left corner: anchored right of the pointer, vertically
/// centered on it, clamped fully inside the canvas on every edge.
pub fn clamp_tooltip(pointer: SceneVec2, size: SceneVec2) -> SceneVec2 {
    let max_x = FLOOR_WIDTH - size.x - TOOLTIP_MARGIN;
    let max_y = FLOOR_HEIGHT - size.y - TOOLTIP_MARGIN;
    SceneVec2::new(
        (pointer.x + TOOLTIP_POINTER_GAP).clamp(TOOLTIP_MARGIN, max_x),
        (pointer.y - size.y / 2.0).clamp(TOOLTIP_MARGIN, max_y),
    )
}

// ============================================================================
// SETUP - retained sprites and labels
// ============================================================================

pub fn setup_scene(mut commands: Commands, sim: Res<Sim>) {
    let root = commands
        .spawn((FloorRoot, Transform::default(), Visibility::default()))
        .id();

    // Canvas backdrop
    spawn_rect(
        &mut commands,
        root,
        Rect::new(0.0, 0.0, FLOOR_WIDTH, FLOOR_HEIGHT),
        colors::FLOOR_BG,
        0.0,
    );

    for zone in &sim.0.plan.zones {
        spawn_zone(&mut commands, root, zone);
    }

    for (idx, machine) in sim.0.plan.machines.iter().enumerate() {
        let body = machine.body();

        spawn_rect(&mut commands, root, body, colors::MACHINE_BODY, 4.0);

        // Glow overlay, alpha driven per tick
        let glow = spawn_rect(
            &mut commands,
            root,
            body,
            colors::MACHINE_ACTIVE.with_alpha(0.0),
            5.0,
        );
        commands.entity(glow).insert(MachineGlow(idx));

        // Status LED in the top-right corner
        let led_rect = Rect::new(body.x + body.w - 12.0, body.y + 4.0, 8.0, 8.0);
        let led = spawn_rect(
            &mut commands,
            root,
            led_rect,
            colors::led_color(machine.status),
            6.0,
        );
        commands.entity(led).insert(MachineLed(idx));

        // Name centered on the body
        let center = scene_to_world(body.center());
        commands.entity(root).with_children(|parent| {
            parent.spawn((
                Text2d::new(machine.name),
                TextFont {
                    font_size: 9.0,
                    ..default()
                },
                TextColor(colors::MACHINE_LABEL),
                Transform::from_xyz(center.x, center.y, 7.0),
            ));
        });
    }

    // Tooltip panel, hidden until something is hovered
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            TooltipBackground,
            Sprite::from_color(colors::BG_PANEL, Vec2::new(WORKER_TOOLTIP_SIZE.x, WORKER_TOOLTIP_SIZE.y)),
            Transform::from_xyz(0.0, 0.0, 20.0),
            Visibility::Hidden,
        ));
        parent.spawn((
            TooltipText,
            Text2d::new(""),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(colors::TEXT_PRIMARY),
            Anchor::TopLeft,
            Transform::from_xyz(0.0, 0.0, 21.0),
            Visibility::Hidden,
        ));
    });
}

fn spawn_zone(commands: &mut Commands, root: Entity, zone: &Zone) {
    let bounds = zone.bounds();
    let fill = colors::zone_fill(zone.id);

    // Zone background, inset 2px inside the cell bounds
    spawn_rect(
        commands,
        root,
        bounds.inset(2.0, 2.0, 2.0, 2.0),
        fill,
        1.0,
    );

    // Label plaque
    let label = zone.id.label();
    let plaque = Rect::new(
        bounds.x + 10.0,
        bounds.y + 8.0,
        label.len() as f32 * 6.5 + 12.0,
        16.0,
    );
    spawn_rect(commands, root, plaque, colors::darken(fill, 20.0), 2.0);

    let anchor_point = scene_to_world(SceneVec2::new(bounds.x + 16.0, bounds.y + 16.0));
    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Text2d::new(label),
            TextFont {
                font_size: 9.0,
                ..default()
            },
            TextColor(colors::lighten(fill, 80.0)),
            Anchor::CenterLeft,
            Transform::from_xyz(anchor_point.x, anchor_point.y, 3.0),
        ));
    });
}

/// Spawn a filled rectangle (given in scene coordinates) as a child sprite
fn spawn_rect(commands: &mut Commands, root: Entity, rect: Rect, color: Color, z: f32) -> Entity {
    let center = scene_to_world(rect.center());
    let mut id = Entity::PLACEHOLDER;
    commands.entity(root).with_children(|parent| {
        id = parent
            .spawn((
                Sprite::from_color(color, Vec2::new(rect.w, rect.h)),
                Transform::from_xyz(center.x, center.y, z),
            ))
            .id();
    });
    id
}

// ============================================================================
// PER-FRAME UPDATES
// ============================================================================

/// Hide the retained floor visuals when another view is active
pub fn sync_floor_visibility(
    view: Res<ActiveView>,
    mut root_query: Query<&mut Visibility, With<FloorRoot>>,
) {
    let Ok(mut visibility) = root_query.get_single_mut() else {
        return;
    };
    *visibility = if *view == ActiveView::Factory {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

/// Drive machine glow and LED opacities from the shared tick
pub fn animate_machines(
    sim: Res<Sim>,
    mut glow_query: Query<(&MachineGlow, &mut Sprite), Without<MachineLed>>,
    mut led_query: Query<(&MachineLed, &mut Sprite), Without<MachineGlow>>,
) {
    let tick = sim.0.tick();

    for (glow, mut sprite) in &mut glow_query {
        let machine = &sim.0.plan.machines[glow.0];
        sprite.color = colors::MACHINE_ACTIVE.with_alpha(glow_opacity(machine, tick));
    }

    for (led, mut sprite) in &mut led_query {
        let machine = &sim.0.plan.machines[led.0];
        sprite.color = colors::led_color(machine.status).with_alpha(led_opacity(machine, tick));
    }
}

/// Subtle cell grid over the backdrop
pub fn render_grid(view: Res<ActiveView>, mut gizmos: Gizmos) {
    if *view != ActiveView::Factory {
        return;
    }

    for col in 0..=GRID_COLS {
        let x = col as f32 * CELL_SIZE;
        gizmos.line_2d(
            scene_to_world(SceneVec2::new(x, 0.0)),
            scene_to_world(SceneVec2::new(x, FLOOR_HEIGHT)),
            colors::GRID_LINE,
        );
    }
    for row in 0..=GRID_ROWS {
        let y = row as f32 * CELL_SIZE;
        gizmos.line_2d(
            scene_to_world(SceneVec2::new(0.0, y)),
            scene_to_world(SceneVec2::new(FLOOR_WIDTH, y)),
            colors::GRID_LINE,
        );
    }
}

/// Zone borders and per-zone furniture
pub fn render_zone_decor(view: Res<ActiveView>, sim: Res<Sim>, mut gizmos: Gizmos) {
    if *view != ActiveView::Factory {
        return;
    }

    for zone in &sim.0.plan.zones {
        let bounds = zone.bounds();
        let fill = colors::zone_fill(zone.id);

        outline_rect(&mut gizmos, bounds.inset(2.0, 2.0, 2.0, 2.0), colors::lighten(fill, 25.0));
        draw_furniture(&mut gizmos, zone);
    }
}

fn draw_furniture(gizmos: &mut Gizmos, zone: &Zone) {
    let bounds = zone.bounds();
    let fill = colors::zone_fill(zone.id);
    let furniture = colors::lighten(fill, 15.0).with_alpha(0.5);
    let detail = colors::lighten(fill, 30.0).with_alpha(0.5);

    match zone.id {
        ZoneId::Production => {
            // Conveyor lines running across the floor between machine columns
            for row in [3.0, 7.0, 11.0] {
                let y = bounds.y + row * CELL_SIZE + CELL_SIZE / 2.0;
                dashed_line(
                    gizmos,
                    SceneVec2::new(bounds.x + 20.0, y),
                    SceneVec2::new(bounds.x + bounds.w - 20.0, y),
                    8.0,
                    4.0,
                    detail,
                );
            }
        }
        ZoneId::Warehouse => {
            // Shelf rows with palette boxes
            for row in [2.0, 4.0, 6.0] {
                let shelf = Rect::new(
                    bounds.x + 15.0,
                    bounds.y + row * CELL_SIZE,
                    bounds.w - 30.0,
                    CELL_SIZE * 0.6,
                );
                outline_rect(gizmos, shelf, furniture);
                for i in 0..4 {
                    let pallet = Rect::new(
                        bounds.x + 25.0 + i as f32 * CELL_SIZE * 2.0,
                        bounds.y + row * CELL_SIZE + 3.0,
                        CELL_SIZE * 1.2,
                        CELL_SIZE * 0.35,
                    );
                    outline_rect(gizmos, pallet, detail);
                }
            }
        }
        ZoneId::LoadingDock => {
            // Dock bays along the bottom edge with door indicators
            for i in 0..3 {
                let bay = Rect::new(
                    bounds.x + 15.0 + i as f32 * CELL_SIZE * 3.0,
                    bounds.y + bounds.h - CELL_SIZE * 2.5,
                    CELL_SIZE * 2.5,
                    CELL_SIZE * 2.0,
                );
                dashed_rect(gizmos, bay, 6.0, 3.0, detail);

                let door = Rect::new(
                    bay.x + CELL_SIZE * 0.75,
                    bounds.y + bounds.h - 6.0,
                    CELL_SIZE,
                    4.0,
                );
                outline_rect(gizmos, door, detail);
            }
        }
        ZoneId::Admin => {
            // Desks with chairs
            for i in 0..4 {
                let desk = Rect::new(
                    bounds.x + 20.0 + i as f32 * CELL_SIZE * 2.5,
                    bounds.y + CELL_SIZE * 1.5,
                    CELL_SIZE * 1.8,
                    CELL_SIZE * 0.9,
                );
                outline_rect(gizmos, desk, furniture);
                circle(
                    gizmos,
                    SceneVec2::new(desk.x + CELL_SIZE * 0.9, bounds.y + CELL_SIZE * 2.8),
                    4.0,
                    detail,
                );
            }
        }
        ZoneId::Breakroom => {
            // Round tables with chairs, coffee and vending machines
            for i in 0..2 {
                let table = SceneVec2::new(
                    bounds.x + CELL_SIZE * 3.0 + i as f32 * CELL_SIZE * 5.0,
                    bounds.y + CELL_SIZE * 2.0,
                );
                circle(gizmos, table, CELL_SIZE * 0.7, furniture);
                for deg in [0.0f32, 90.0, 180.0, 270.0] {
                    let rad = deg.to_radians();
                    circle(
                        gizmos,
                        SceneVec2::new(
                            table.x + rad.cos() * CELL_SIZE * 1.2,
                            table.y + rad.sin() * CELL_SIZE * 1.2,
                        ),
                        3.0,
                        detail,
                    );
                }
            }
            let coffee = Rect::new(
                bounds.x + bounds.w - CELL_SIZE * 2.0,
                bounds.y + CELL_SIZE * 0.5,
                CELL_SIZE * 0.8,
                CELL_SIZE * 1.2,
            );
            outline_rect(gizmos, coffee, detail);
            let vending = Rect::new(
                bounds.x + bounds.w - CELL_SIZE * 3.5,
                bounds.y + CELL_SIZE * 0.5,
                CELL_SIZE,
                CELL_SIZE * 1.2,
            );
            outline_rect(gizmos, vending, furniture);
            circle(
                gizmos,
                SceneVec2::new(bounds.x + CELL_SIZE * 9.0, bounds.y + CELL_SIZE * 0.8),
                5.0,
                Color::srgb(0.290, 0.416, 0.227),
            );
        }
        ZoneId::Engineering => {
            // Workbenches and a whiteboard on the far wall
            for i in 0..3 {
                let bench = Rect::new(
                    bounds.x + 15.0 + i as f32 * CELL_SIZE * 3.5,
                    bounds.y + CELL_SIZE * 3.0,
                    CELL_SIZE * 2.5,
                    CELL_SIZE * 0.8,
                );
                outline_rect(gizmos, bench, furniture);
            }
            let whiteboard = Rect::new(
                bounds.x + bounds.w - 20.0,
                bounds.y + CELL_SIZE,
                8.0,
                CELL_SIZE * 4.0,
            );
            outline_rect(gizmos, whiteboard, detail);
        }
        ZoneId::RdLab => {
            // Lab benches with glassware
            for i in 0..2 {
                let bench = Rect::new(
                    bounds.x + 15.0 + i as f32 * CELL_SIZE * 5.0,
                    bounds.y + CELL_SIZE * 2.0,
                    CELL_SIZE * 3.5,
                    CELL_SIZE * 0.8,
                );
                outline_rect(gizmos, bench, furniture);
                circle(
                    gizmos,
                    SceneVec2::new(bounds.x + 30.0 + i as f32 * CELL_SIZE * 5.0, bounds.y + CELL_SIZE * 1.8),
                    4.0,
                    detail,
                );
                circle(
                    gizmos,
                    SceneVec2::new(bounds.x + 55.0 + i as f32 * CELL_SIZE * 5.0, bounds.y + CELL_SIZE * 1.8),
                    3.0,
                    detail,
                );
            }
        }
    }
}

/// Machine glyphs and the hover outline
pub fn render_machine_decor(
    view: Res<ActiveView>,
    sim: Res<Sim>,
    hover: Res<HoverState>,
    mut gizmos: Gizmos,
) {
    if *view != ActiveView::Factory {
        return;
    }

    for (idx, machine) in sim.0.plan.machines.iter().enumerate() {
        let body = machine.body();
        let hovered = hover.target == Some(HoverTarget::Machine(idx));

        let edge = if hovered {
            colors::ACCENT_GOLD
        } else {
            colors::MACHINE_EDGE
        };
        outline_rect(&mut gizmos, body, edge);

        draw_machine_glyph(&mut gizmos, machine.kind, body);
    }
}

fn draw_machine_glyph(gizmos: &mut Gizmos, kind: MachineKind, body: Rect) {
    let detail = colors::MACHINE_DETAIL;
    let center = body.center();

    match kind {
        MachineKind::Assembly => {
            // Conveyor belt through the center
            dashed_line(
                gizmos,
                SceneVec2::new(body.x + 8.0, center.y),
                SceneVec2::new(body.x + body.w - 8.0, center.y),
                6.0,
                4.0,
                detail,
            );
        }
        MachineKind::Cnc => {
            // Spindle
            circle(gizmos, center, body.w.min(body.h) * 0.25, detail);
        }
        MachineKind::InjectionMolding => {
            // Hopper funnel feeding a barrel
            let top = body.y + 12.0;
            let waist = body.y + 25.0;
            polyline(
                gizmos,
                &[
                    SceneVec2::new(center.x - 12.0, top),
                    SceneVec2::new(center.x + 12.0, top),
                    SceneVec2::new(center.x + 5.0, waist),
                    SceneVec2::new(center.x - 5.0, waist),
                    SceneVec2::new(center.x - 12.0, top),
                ],
                detail,
            );
            outline_rect(
                gizmos,
                Rect::new(center.x - 4.0, waist, 8.0, body.h * 0.4),
                detail,
            );
        }
        MachineKind::QualityCheck => {
            // Magnifying glass
            let lens = SceneVec2::new(center.x - 5.0, center.y - 5.0);
            circle(gizmos, lens, 10.0, detail);
            gizmos.line_2d(
                scene_to_world(SceneVec2::new(center.x + 3.0, center.y + 3.0)),
                scene_to_world(SceneVec2::new(center.x + 12.0, center.y + 12.0)),
                detail,
            );
        }
        MachineKind::Packaging => {
            // Boxes queued for sealing
            for i in 0..3 {
                let side = body.w / 5.0;
                let boxed = Rect::new(
                    body.x + 12.0 + i as f32 * (body.w / 3.5),
                    center.y - 5.0,
                    side,
                    side,
                );
                outline_rect(gizmos, boxed, detail.with_alpha(0.6));
            }
        }
    }
}

/// Worker avatars: bobbing role-colored figures with hover accents
pub fn render_workers(
    view: Res<ActiveView>,
    sim: Res<Sim>,
    hover: Res<HoverState>,
    mut gizmos: Gizmos,
) {
    if *view != ActiveView::Factory {
        return;
    }

    let time = sim.0.anim_time();

    for (entity, (pos, bob, role, status)) in sim
        .0
        .world
        .query::<(&Position, &BobPhase, &Role, &WorkerStatus)>()
        .iter()
    {
        let hovered = hover.target == Some(HoverTarget::Worker(entity));
        let scale = if hovered { 1.3 } else { 1.0 };
        let anchor = SceneVec2::new(pos.0.x, pos.0.y + bob_offset(time, bob.0));

        let mut color = colors::role_color(*role);
        if *status == WorkerStatus::Break {
            color = color.with_alpha(0.4);
        }

        if hovered {
            circle(&mut gizmos, anchor, 12.0 * scale, color.with_alpha(0.3));
        }

        // Head
        circle(
            &mut gizmos,
            SceneVec2::new(anchor.x, anchor.y - 4.0 * scale),
            3.5 * scale,
            color,
        );

        // Body: a resting slab on break, an upright torso otherwise
        let body = if *status == WorkerStatus::Break {
            Rect::new(anchor.x - 5.0 * scale, anchor.y, 10.0 * scale, 4.0 * scale)
        } else {
            Rect::new(anchor.x - 2.5 * scale, anchor.y, 5.0 * scale, 7.0 * scale)
        };
        outline_rect(&mut gizmos, body, color);

        match role {
            Role::Supervisor => {
                // Clipboard
                let board = Rect::new(anchor.x + 4.0 * scale, anchor.y - 2.0 * scale, 3.0, 5.0);
                outline_rect(&mut gizmos, board, Color::srgb(0.545, 0.451, 0.333));
                let sheet = Rect::new(anchor.x + 4.5 * scale, anchor.y - 1.0 * scale, 2.0, 3.0);
                outline_rect(&mut gizmos, sheet, Color::srgb(0.831, 0.769, 0.659));
            }
            Role::Engineer => {
                // Wrench
                let grip = Color::srgb(0.490, 0.827, 0.659);
                gizmos.line_2d(
                    scene_to_world(SceneVec2::new(anchor.x + 4.0 * scale, anchor.y + 1.0 * scale)),
                    scene_to_world(SceneVec2::new(anchor.x + 7.0 * scale, anchor.y + 4.0 * scale)),
                    grip,
                );
                circle(
                    &mut gizmos,
                    SceneVec2::new(anchor.x + 7.5 * scale, anchor.y + 4.5 * scale),
                    1.5,
                    grip,
                );
            }
            Role::Worker => {}
        }
    }
}

/// Tooltip panel content and placement, re-derived every frame
pub fn update_tooltip(
    sim: Res<Sim>,
    hover: Res<HoverState>,
    view: Res<ActiveView>,
    mut background_query: Query<
        (&mut Sprite, &mut Transform, &mut Visibility),
        (With<TooltipBackground>, Without<TooltipText>),
    >,
    mut text_query: Query<
        (&mut Text2d, &mut Transform, &mut Visibility),
        (With<TooltipText>, Without<TooltipBackground>),
    >,
) {
    let Ok((mut sprite, mut bg_transform, mut bg_visibility)) = background_query.get_single_mut()
    else {
        return;
    };
    let Ok((mut text, mut text_transform, mut text_visibility)) = text_query.get_single_mut()
    else {
        return;
    };

    let content = if *view == ActiveView::Factory {
        hover.target.and_then(|target| tooltip_content(&sim, target))
    } else {
        None
    };

    let Some((body, size)) = content else {
        *bg_visibility = Visibility::Hidden;
        *text_visibility = Visibility::Hidden;
        return;
    };

    let origin = clamp_tooltip(hover.pointer, size);

    sprite.custom_size = Some(Vec2::new(size.x, size.y));
    let center = scene_to_world(SceneVec2::new(origin.x + size.x / 2.0, origin.y + size.y / 2.0));
    bg_transform.translation = Vec3::new(center.x, center.y, 20.0);

    **text = body;
    let text_anchor = scene_to_world(SceneVec2::new(origin.x + 12.0, origin.y + 8.0));
    text_transform.translation = Vec3::new(text_anchor.x, text_anchor.y, 21.0);

    *bg_visibility = Visibility::Visible;
    *text_visibility = Visibility::Visible;
}

/// Build the tooltip body for the hovered entity. Returns `None` when the
/// entity no longer resolves, which reads as "no hover".
fn tooltip_content(sim: &Sim, target: HoverTarget) -> Option<(String, SceneVec2)> {
    match target {
        HoverTarget::Worker(entity) => {
            let name = sim.0.world.get::<&Name>(entity).ok()?;
            let role = sim.0.world.get::<&Role>(entity).ok()?;
            let status = sim.0.world.get::<&WorkerStatus>(entity).ok()?;
            let attrs = sim.0.world.get::<&Attributes>(entity).ok()?;
            let assignment = sim.0.world.get::<&Assignment>(entity).ok()?;

            let zone = roam_zone(*assignment, *status);
            let body = format!(
                "{}  [{}]\n\nStatus      {}\nEfficiency  {}%\nMorale      {}%\nTenure      {} rounds\nSalary      ${}K\nZone        {}",
                name.0,
                role.name(),
                status.name(),
                attrs.efficiency,
                attrs.morale,
                attrs.tenure,
                attrs.salary / 1000,
                zone.name(),
            );
            Some((body, WORKER_TOOLTIP_SIZE))
        }
        HoverTarget::Machine(idx) => {
            let machine = sim.0.plan.machines.get(idx)?;
            let body = format!(
                "{}\n\n{}\nEfficiency  {}%\nOutput      {} u/hr\nTYPE: {}",
                machine.name,
                machine.status.name(),
                machine.efficiency,
                machine.output,
                machine.kind.name(),
            );
            Some((body, MACHINE_TOOLTIP_SIZE))
        }
    }
}

// ============================================================================
// GIZMO HELPERS (scene-coordinate wrappers)
// ============================================================================

fn circle(gizmos: &mut Gizmos, center: SceneVec2, radius: f32, color: Color) {
    gizmos.circle_2d(
        Isometry2d::from_translation(scene_to_world(center)),
        radius,
        color,
    );
}

fn outline_rect(gizmos: &mut Gizmos, rect: Rect, color: Color) {
    gizmos.rect_2d(
        Isometry2d::from_translation(scene_to_world(rect.center())),
        Vec2::new(rect.w, rect.h),
        color,
    );
}

fn polyline(gizmos: &mut Gizmos, points: &[SceneVec2], color: Color) {
    for pair in points.windows(2) {
        gizmos.line_2d(scene_to_world(pair[0]), scene_to_world(pair[1]), color);
    }
}

fn dashed_line(
    gizmos: &mut Gizmos,
    from: SceneVec2,
    to: SceneVec2,
    dash: f32,
    gap: f32,
    color: Color,
) {
    let total = from.distance(&to);
    if total <= 0.0 {
        return;
    }
    let dir = (to - from).normalize();
    let mut covered = 0.0;
    while covered < total {
        let end = (covered + dash).min(total);
        gizmos.line_2d(
            scene_to_world(from + dir * covered),
            scene_to_world(from + dir * end),
            color,
        );
        covered = end + gap;
    }
}

fn dashed_rect(gizmos: &mut Gizmos, rect: Rect, dash: f32, gap: f32, color: Color) {
    let a = SceneVec2::new(rect.x, rect.y);
    let b = SceneVec2::new(rect.x + rect.w, rect.y);
    let c = SceneVec2::new(rect.x + rect.w, rect.y + rect.h);
    let d = SceneVec2::new(rect.x, rect.y + rect.h);
    dashed_line(gizmos, a, b, dash, gap, color);
    dashed_line(gizmos, b, c, dash, gap, color);
    dashed_line(gizmos, c, d, dash, gap, color);
    dashed_line(gizmos, d, a, dash, gap, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Vec2 = Vec2::new(1280.0, 800.0);

    /// Screen position of a scene point under the given camera, for test
    /// setup: the inverse of `screen_to_scene`.
    fn scene_to_screen(scene: SceneVec2, cam_translation: Vec2, cam_scale: f32) -> Vec2 {
        let world = scene_to_world(scene);
        Vec2::new(
            (world.x - cam_translation.x) / cam_scale + WINDOW.x / 2.0,
            WINDOW.y / 2.0 - (world.y - cam_translation.y) / cam_scale,
        )
    }

    #[test]
    fn test_scene_world_round_trip() {
        for scene in [
            SceneVec2::new(0.0, 0.0),
            SceneVec2::new(896.0, 616.0),
            SceneVec2::new(123.5, 407.25),
        ] {
            let back = world_to_scene(scene_to_world(scene));
            assert!((back.x - scene.x).abs() < 1e-4);
            assert!((back.y - scene.y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pointer_maps_identity_transform() {
        // With zoom 1 and pan (0,0), the canvas top-left corner plus (5,5)
        // on screen resolves to scene (5,5).
        let corner = scene_to_screen(SceneVec2::new(0.0, 0.0), Vec2::ZERO, 1.0);
        let scene = screen_to_scene(corner + Vec2::new(5.0, 5.0), Vec2::ZERO, 1.0, WINDOW);
        assert!((scene.x - 5.0).abs() < 1e-3);
        assert!((scene.y - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_maps_under_zoom_and_pan() {
        // The mapping must invert arbitrary zoom/pan combinations
        let cam = Vec2::new(120.0, -75.0);
        let zoom = 2.5;
        let cam_scale = 1.0 / zoom;

        for scene in [
            SceneVec2::new(50.0, 50.0),
            SceneVec2::new(800.0, 600.0),
            SceneVec2::new(448.0, 308.0),
        ] {
            let cursor = scene_to_screen(scene, cam, cam_scale);
            let mapped = screen_to_scene(cursor, cam, cam_scale, WINDOW);
            assert!((mapped.x - scene.x).abs() < 1e-2);
            assert!((mapped.y - scene.y).abs() < 1e-2);
        }
    }

    #[test]
    fn test_tooltip_contained_for_any_pointer() {
        let canvas = Rect::new(0.0, 0.0, FLOOR_WIDTH, FLOOR_HEIGHT);
        let pointers = [
            SceneVec2::new(0.0, 0.0),
            SceneVec2::new(896.0, 616.0),
            SceneVec2::new(896.0, 0.0),
            SceneVec2::new(0.0, 616.0),
            SceneVec2::new(880.0, 300.0),
            SceneVec2::new(5.0, 610.0),
            SceneVec2::new(448.0, 308.0),
        ];
        for size in [WORKER_TOOLTIP_SIZE, MACHINE_TOOLTIP_SIZE] {
            for pointer in pointers {
                let origin = clamp_tooltip(pointer, size);
                assert!(canvas.contains(origin));
                assert!(canvas.contains(SceneVec2::new(origin.x + size.x, origin.y + size.y)));
            }
        }
    }

    #[test]
    fn test_tooltip_prefers_pointer_side() {
        // Away from the edges the tooltip hangs right of the pointer,
        // vertically centered
        let pointer = SceneVec2::new(300.0, 300.0);
        let origin = clamp_tooltip(pointer, MACHINE_TOOLTIP_SIZE);
        assert_eq!(origin.x, 312.0);
        assert_eq!(origin.y, 250.0);
    }
}
