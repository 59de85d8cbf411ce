//! Motion domain — пофазовый walk-контроллер рыцаря
//!
//! Детерминированный kinematic интегратор без I/O: единственный писатель
//! Transform.translation рыцаря. Работает в FixedUpdate (60Hz).
//!
//! Фазы:
//! - Idle: косметический bob/sway от elapsed time, позиция не мутируется
//! - Walking: интеграция к PendingTarget + facing + walk cycle; при
//!   distance < ARRIVAL_THRESHOLD — Idle + TargetReached (ровно один)
//! - Entering: уход в дверь (-Z) + сжатие scale, затем reset в home

use bevy::prelude::*;

use crate::components::{
    Knight, KnightPhase, PendingTarget, RenderPose, TargetKind, WalkCycle, WalkSpeed,
    ARRIVAL_THRESHOLD, ENTER_MIN_SCALE, ENTER_SHRINK_RATE, ENTER_SPEED, WALK_CADENCE,
};
use crate::navigation::events::{ReachedKind, TargetReached};

/// Motion Plugin
///
/// Регистрирует advance_knights в FixedUpdate. TargetReached события
/// потребляет navigation dispatch.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, advance_knights.in_set(crate::HubSet::Motion));
    }
}

/// Система: продвижение FSM рыцаря на один тик
///
/// Каждый тик проверяем наличие цели перед расчётом направления:
/// Walking без цели — это programming error выше по стеку, деградируем
/// молча в Idle вместо паники.
pub fn advance_knights(
    time: Res<Time<Fixed>>,
    mut knights: Query<(
        Entity,
        &Knight,
        &WalkSpeed,
        &mut Transform,
        &mut KnightPhase,
        &mut PendingTarget,
        &mut WalkCycle,
        &mut RenderPose,
    )>,
    mut reached: EventWriter<TargetReached>,
) {
    let delta = time.delta_secs();
    let elapsed = time.elapsed_secs();

    for (entity, knight, speed, mut transform, mut phase, mut pending, mut cycle, mut pose) in
        knights.iter_mut()
    {
        match *phase {
            KnightPhase::Idle => {
                // Только косметика: логическая позиция не трогается
                pose.bob = (elapsed * 2.0).sin() * 0.03;
                pose.sway = (elapsed * 0.5).sin() * 0.05;
                pose.leg_swing = 0.0;
                pose.arm_swing = 0.0;
            }

            KnightPhase::Walking => {
                let Some(target) = pending.0.clone() else {
                    *phase = KnightPhase::Idle;
                    continue;
                };

                let to_target = target.position - transform.translation;
                let distance = to_target.length();

                if distance > ARRIVAL_THRESHOLD {
                    let direction = to_target / distance;
                    transform.translation += direction * speed.speed * delta;

                    // Лицом по направлению движения
                    let facing = direction.x.atan2(direction.z);
                    transform.rotation = Quat::from_rotation_y(facing);

                    // Walk cycle: bob + противофазный мах конечностями
                    cycle.time += delta * WALK_CADENCE;
                    pose.bob = (cycle.time * 2.0).sin() * 0.1;
                    pose.leg_swing = cycle.time.sin() * 0.2;
                    pose.arm_swing = -cycle.time.sin() * 0.15;
                    pose.sway = 0.0;
                } else {
                    // Прибыли: остаёмся на месте, цель сброшена — повторный
                    // тик в Idle событие уже не продублирует
                    *phase = KnightPhase::Idle;
                    pending.0 = None;

                    let kind = match target.kind {
                        TargetKind::Floor => ReachedKind::Floor {
                            position: transform.translation,
                        },
                        TargetKind::Door { door, route } => ReachedKind::Door { door, route },
                    };
                    reached.write(TargetReached {
                        knight: entity,
                        kind,
                    });
                }
            }

            KnightPhase::Entering => {
                // Уходим в дверной проём и уменьшаемся
                transform.translation.z -= ENTER_SPEED * delta;
                pose.scale -= ENTER_SHRINK_RATE * delta;

                if pose.scale <= ENTER_MIN_SCALE {
                    // «Вошли»: reset в точку спавна
                    *phase = KnightPhase::Idle;
                    pending.0 = None;
                    pose.scale = 1.0;
                    transform.translation = knight.home_position;
                    transform.rotation = Quat::IDENTITY;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_angle_matches_direction() {
        // Движение строго по +Z — angle 0
        let dir = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(dir.x.atan2(dir.z), 0.0);

        // Строго по +X — angle PI/2
        let dir = Vec3::new(1.0, 0.0, 0.0);
        assert!((dir.x.atan2(dir.z) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_enter_shrink_tick_count() {
        // 1.0 → 0.3 при 0.5/s: 1.4s = 84 тика при 60Hz
        let mut scale = 1.0_f32;
        let delta = 1.0 / 60.0;
        let mut ticks = 0;
        while scale > ENTER_MIN_SCALE {
            scale -= ENTER_SHRINK_RATE * delta;
            ticks += 1;
        }
        // 0.7 / (0.5/60) = 84 тика; float-накопление может дать ±1
        assert!((84..=85).contains(&ticks), "ticks = {}", ticks);
        assert!(scale <= ENTER_MIN_SCALE);
    }
}
