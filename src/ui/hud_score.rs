//! UI domain: score and level label HUD.

use bevy::prelude::*;

use crate::core::GameSession;

const HUD_PADDING: f32 = 16.0;

/// Marker for the HUD container
#[derive(Component)]
pub struct ScoreHudUI;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct LevelLabelText;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub(crate) fn spawn_score_hud(mut commands: Commands) {
    commands
        .spawn((
            ScoreHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new(score_label(0)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
            ));

            parent.spawn((
                LevelLabelText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

pub(crate) fn update_score_hud(
    session: Res<GameSession>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LevelLabelText>)>,
    mut level_query: Query<&mut Text, (With<LevelLabelText>, Without<ScoreText>)>,
) {
    if !session.is_changed() {
        return;
    }
    for mut text in &mut score_query {
        **text = score_label(session.score);
    }
    for mut text in &mut level_query {
        **text = session.level_label();
    }
}
