//! Doors domain — спавн дверей из конфига и анимация открытия
//!
//! Двери — статическая конфигурация сцены: создаются один раз, не
//! уничтожаются. Target Resolver переключает is_active; здесь только
//! ramp открытия для рендера.

use bevy::prelude::*;

use crate::components::{Door, DoorAnimation, DoorConfig, DOOR_OPEN_SPEED};

/// Door Plugin
pub struct DoorPlugin;

impl Plugin for DoorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, animate_doors.in_set(crate::HubSet::Doors));
    }
}

/// Спавн дверей hub-сцены из регистрационных данных
///
/// Конфиг read-only: ядро его не мутирует и не персистит.
pub fn spawn_doors(commands: &mut Commands, configs: &[DoorConfig]) -> Vec<Entity> {
    configs
        .iter()
        .map(|config| {
            commands
                .spawn((
                    Transform::from_translation(config.position_vec3()),
                    Door {
                        id: config.id.clone(),
                        label: config.label.clone(),
                        route: config.route.clone(),
                    },
                    DoorAnimation::default(),
                ))
                .id()
        })
        .collect()
}

/// Система: ramp открытия активной двери
///
/// open_amount растёт к 1.0 пока дверь active; деактивированная дверь
/// остаётся в текущем положении (не захлопывается).
pub fn animate_doors(time: Res<Time<Fixed>>, mut doors: Query<&mut DoorAnimation>) {
    let delta = time.delta_secs();

    for mut anim in doors.iter_mut() {
        if anim.is_active && anim.open_amount < 1.0 {
            anim.open_amount = (anim.open_amount + delta * DOOR_OPEN_SPEED).min(1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ramp_clamps_at_one() {
        let mut anim = DoorAnimation {
            is_active: true,
            open_amount: 0.0,
        };
        let delta = 1.0 / 60.0;

        // 0.5s при 2.0/s — полностью открыта
        for _ in 0..40 {
            if anim.is_active && anim.open_amount < 1.0 {
                anim.open_amount = (anim.open_amount + delta * DOOR_OPEN_SPEED).min(1.0);
            }
        }
        assert_eq!(anim.open_amount, 1.0);
    }

    #[test]
    fn test_inactive_door_keeps_open_amount() {
        let mut anim = DoorAnimation {
            is_active: false,
            open_amount: 0.4,
        };
        let delta = 1.0 / 60.0;

        for _ in 0..10 {
            if anim.is_active && anim.open_amount < 1.0 {
                anim.open_amount = (anim.open_amount + delta * DOOR_OPEN_SPEED).min(1.0);
            }
        }
        assert_eq!(anim.open_amount, 0.4);
    }
}
