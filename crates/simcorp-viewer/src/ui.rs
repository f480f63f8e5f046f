//! Dashboard chrome: news ticker, header bar, module nav, status bar
//!
//! Stateless presentational panels over placeholder data. Business values
//! shown here are static until the game-logic modules exist.

use bevy::prelude::*;

use crate::colors;
use crate::state::{
    ActiveModule, ActiveView, ModuleNavBar, ModuleTab, PlaceholderPanel, PlaceholderText, ViewTab,
};

pub const TICKER_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 44.0;
pub const MODULE_NAV_HEIGHT: f32 = 40.0;
pub const STATUS_HEIGHT: f32 = 32.0;

/// Leftward ticker speed in pixels per second
const TICKER_SPEED: f32 = 16.0;

/// Estimated glyph width used to lay the ticker items end to end
const TICKER_CHAR_WIDTH: f32 = 6.6;
const TICKER_ITEM_GAP: f32 = 36.0;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    fn color(self) -> Color {
        match self {
            Sentiment::Positive => colors::GREEN,
            Sentiment::Negative => colors::RED,
            Sentiment::Neutral => colors::ACCENT_GOLD,
        }
    }
}

const NEWS: [(&str, Sentiment); 8] = [
    ("Global smartphone demand surges 12% - premium segment leads growth", Sentiment::Positive),
    ("Raw material costs spike amid supply chain disruptions in Southeast Asia", Sentiment::Negative),
    ("Central bank holds interest rates steady at 4.25%", Sentiment::Neutral),
    ("Consumer confidence index rises to 108.3, highest in 6 quarters", Sentiment::Positive),
    ("New EU tariffs on electronics imports take effect next round", Sentiment::Negative),
    ("Industry analysts predict consolidation wave in mid-tier market", Sentiment::Neutral),
    ("ESG-rated companies outperform market by 3.2% this quarter", Sentiment::Positive),
    ("Labor shortage in engineering talent pushes salary benchmarks up 8%", Sentiment::Negative),
];

/// One scrolling headline; `base` is its resting x offset in the loop
#[derive(Component)]
pub struct TickerItem {
    base: f32,
}

/// Scroll position of the ticker loop
#[derive(Resource)]
pub struct TickerState {
    offset: f32,
    /// Width of one full pass of headlines; the loop wraps here
    span: f32,
}

pub fn setup_chrome(mut commands: Commands) {
    spawn_ticker(&mut commands);
    spawn_header(&mut commands);
    spawn_module_nav(&mut commands);
    spawn_status_bar(&mut commands);
    spawn_placeholder(&mut commands);
}

fn spawn_ticker(commands: &mut Commands) {
    let bar = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(TICKER_HEIGHT),
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(colors::TICKER_BG),
        ))
        .id();

    commands.entity(bar).with_children(|parent| {
        parent.spawn((
            Text::new("LIVE"),
            TextFont {
                font_size: 10.0,
                ..default()
            },
            TextColor(colors::RED),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(8.0),
                ..default()
            },
        ));
    });

    // Headlines laid end to end, doubled so the wrap is seamless
    let mut base = 64.0;
    let mut span = 0.0;
    for pass in 0..2 {
        for (text, sentiment) in NEWS {
            let width = (text.len() as f32 + 2.0) * TICKER_CHAR_WIDTH + TICKER_ITEM_GAP;
            commands.entity(bar).with_children(|parent| {
                parent
                    .spawn((
                        TickerItem { base },
                        Text::new("\u{25cf} "),
                        TextFont {
                            font_size: 11.0,
                            ..default()
                        },
                        TextColor(sentiment.color()),
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(base),
                            top: Val::Px(7.0),
                            ..default()
                        },
                    ))
                    .with_child((
                        TextSpan::new(text),
                        TextFont {
                            font_size: 11.0,
                            ..default()
                        },
                        TextColor(colors::TEXT_MUTED),
                    ));
            });
            base += width;
            if pass == 0 {
                span += width;
            }
        }
    }

    commands.insert_resource(TickerState { offset: 0.0, span });
}

/// Scroll the headlines leftward, wrapping after one full pass
pub fn ticker_scroll(
    time: Res<Time>,
    mut state: ResMut<TickerState>,
    mut items: Query<(&TickerItem, &mut Node)>,
) {
    state.offset -= TICKER_SPEED * time.delta_secs();
    if state.offset <= -state.span {
        state.offset += state.span;
    }

    for (item, mut node) in &mut items {
        node.left = Val::Px(item.base + state.offset);
    }
}

fn spawn_header(commands: &mut Commands) {
    let bar = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(TICKER_HEIGHT),
                width: Val::Percent(100.0),
                height: Val::Px(HEADER_HEIGHT),
                ..default()
            },
            BackgroundColor(colors::BG_PANEL),
        ))
        .id();

    commands.entity(bar).with_children(|parent| {
        // Logo
        parent
            .spawn((
                Text::new("SIM"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(colors::ACCENT_GOLD),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(16.0),
                    top: Val::Px(13.0),
                    ..default()
                },
            ))
            .with_child((
                TextSpan::new("CORP"),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(colors::TEXT_PRIMARY),
            ));

        // Round and team
        parent
            .spawn((
                Text::new("Round "),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(colors::TEXT_MUTED),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(110.0),
                    top: Val::Px(14.0),
                    ..default()
                },
            ))
            .with_child((
                TextSpan::new("1"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(colors::ACCENT_GOLD),
            ))
            .with_child((
                TextSpan::new("/8   |   Team: "),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(colors::TEXT_MUTED),
            ))
            .with_child((
                TextSpan::new("Acme Corp"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(colors::TEXT_PRIMARY),
            ));

        // View tabs, centered block. Keyboard 1-6 selects; the active tab
        // is highlighted every frame.
        for (i, view) in ActiveView::ALL.iter().enumerate() {
            parent.spawn((
                ViewTab(*view),
                Text::new(format!("{} {}", i + 1, view.label())),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(colors::TEXT_MUTED),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(400.0 + i as f32 * 95.0),
                    top: Val::Px(15.0),
                    ..default()
                },
            ));
        }

        // Cash
        parent.spawn((
            Text::new("$200.0M"),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(colors::GREEN),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(1020.0),
                top: Val::Px(14.0),
                ..default()
            },
        ));

        // Submit button
        parent
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(1110.0),
                    top: Val::Px(10.0),
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
                    ..default()
                },
                BackgroundColor(colors::GREEN),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new("SUBMIT DECISIONS"),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(colors::BG_PRIMARY),
                ));
            });
    });
}

fn spawn_module_nav(commands: &mut Commands) {
    let bar = commands
        .spawn((
            ModuleNavBar,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(TICKER_HEIGHT + HEADER_HEIGHT),
                width: Val::Percent(100.0),
                height: Val::Px(MODULE_NAV_HEIGHT),
                ..default()
            },
            BackgroundColor(colors::BG_PANEL.with_alpha(0.5)),
        ))
        .id();

    commands.entity(bar).with_children(|parent| {
        for (i, module) in ActiveModule::ALL.iter().enumerate() {
            parent.spawn((
                ModuleTab(*module),
                Text::new(format!("F{} {}", i + 1, module.label())),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(colors::TEXT_MUTED),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(16.0 + i as f32 * 105.0),
                    top: Val::Px(12.0),
                    ..default()
                },
            ));
        }
    });
}

fn spawn_status_bar(commands: &mut Commands) {
    let metrics: [(&str, &str, Color, f32); 7] = [
        ("Mkt Cap", "$245M", colors::TEXT_PRIMARY, 16.0),
        ("EPS", "$2.14", colors::GREEN, 140.0),
        ("Credit", "BBB", colors::ACCENT_GOLD, 250.0),
        ("ESG", "340", colors::ORANGE, 360.0),
        ("Brand", "62%", colors::CYAN, 460.0),
        ("Economy", "Expansion", colors::GREEN, 980.0),
        ("Sentiment", "Bullish", colors::ACCENT_GOLD, 1130.0),
    ];

    let bar = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(STATUS_HEIGHT),
                ..default()
            },
            BackgroundColor(colors::BG_PANEL),
        ))
        .id();

    commands.entity(bar).with_children(|parent| {
        for (label, value, color, x) in metrics {
            parent
                .spawn((
                    Text::new(format!("{} ", label)),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(colors::TEXT_DIM),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(x),
                        top: Val::Px(9.0),
                        ..default()
                    },
                ))
                .with_child((
                    TextSpan::new(value),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(color),
                ));
        }
    });
}

fn spawn_placeholder(commands: &mut Commands) {
    // Centered surface card matching the canvas footprint
    commands
        .spawn((
            PlaceholderPanel,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(192.0),
                top: Val::Px(132.0),
                width: Val::Px(896.0),
                height: Val::Px(616.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(colors::BG_SURFACE),
            Visibility::Hidden,
        ))
        .with_children(|panel| {
            panel.spawn((
                PlaceholderText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(colors::TEXT_PRIMARY),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

/// Highlight the active view tab
pub fn highlight_view_tabs(view: Res<ActiveView>, mut tabs: Query<(&ViewTab, &mut TextColor)>) {
    for (tab, mut color) in &mut tabs {
        *color = if tab.0 == *view {
            TextColor(colors::TEXT_PRIMARY)
        } else {
            TextColor(colors::TEXT_MUTED)
        };
    }
}

/// Highlight the active module tab in its module color
pub fn highlight_module_tabs(
    module: Res<ActiveModule>,
    mut tabs: Query<(&ModuleTab, &mut TextColor)>,
) {
    for (tab, mut color) in &mut tabs {
        *color = if tab.0 == *module {
            TextColor(tab.0.color())
        } else {
            TextColor(colors::TEXT_MUTED)
        };
    }
}

/// The module nav only appears on the factory view
pub fn sync_module_nav(
    view: Res<ActiveView>,
    mut nav: Query<&mut Visibility, With<ModuleNavBar>>,
) {
    let Ok(mut visibility) = nav.get_single_mut() else {
        return;
    };
    *visibility = if *view == ActiveView::Factory {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

/// Placeholder panel for views that do not exist yet
pub fn update_placeholder(
    view: Res<ActiveView>,
    mut panel: Query<&mut Visibility, With<PlaceholderPanel>>,
    mut text: Query<&mut Text, With<PlaceholderText>>,
) {
    let Ok(mut visibility) = panel.get_single_mut() else {
        return;
    };

    if *view == ActiveView::Factory {
        *visibility = Visibility::Hidden;
        return;
    }

    if let Ok(mut text) = text.get_single_mut() {
        **text = format!("{}\n\nComing soon", view.placeholder());
    }
    *visibility = Visibility::Visible;
}
