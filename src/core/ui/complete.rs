//! Core domain: level-complete screen.

use bevy::prelude::*;

use crate::core::GameSession;

/// Marker for the level-complete screen UI root
#[derive(Component, Debug)]
pub struct CompleteScreenUI;

pub(crate) fn stop_run_clock(time: Res<Time<Virtual>>, mut session: ResMut<GameSession>) {
    let now = time.elapsed();
    session.completed_at = Some(now);
    info!(
        "[LEVEL] All {} levels complete in {:.2}s with score {}",
        session.level_count,
        session.run_seconds(now),
        session.score
    );
}

pub(crate) fn spawn_complete_screen(mut commands: Commands, session: Res<GameSession>) {
    let bg_color = Color::srgba(0.02, 0.05, 0.1, 0.9);
    let title_color = Color::srgb(0.95, 0.85, 0.3);
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    let seconds = session
        .completed_at
        .map(|end| session.run_seconds(end))
        .unwrap_or_default();

    commands
        .spawn((
            CompleteScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Level Complete!"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Time: {:.2} seconds", seconds)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}
