//! Target Resolver — превращает клики в максимум одну авторитетную цель
//!
//! Политика (first-click-wins, асимметричная — сознательно):
//! - Floor click игнорируется пока ЛЮБАЯ цель в полёте (нет redirect посреди ходьбы)
//! - Door click всегда перебивает текущую цель (двери приоритетнее)

use bevy::prelude::*;

use crate::components::{
    Door, DoorAnimation, Knight, KnightPhase, PendingTarget, TargetKind, WalkTarget,
    WalkableBounds, DOOR_APPROACH_OFFSET, FLOOR_Y,
};
use crate::logger;
use crate::navigation::events::{DoorClicked, FloorClicked};

/// Система: клики по полу → PendingTarget (kind = Floor)
///
/// No-op если цель уже есть или точка вне WalkableBounds.
/// Успешный клик гасит подсветку всех дверей.
pub fn resolve_floor_clicks(
    mut clicks: EventReader<FloorClicked>,
    bounds: Res<WalkableBounds>,
    mut knights: Query<(&mut PendingTarget, &mut KnightPhase), With<Knight>>,
    mut door_anims: Query<&mut DoorAnimation>,
) {
    for click in clicks.read() {
        if !bounds.contains(click.point) {
            // Вне walkable-зоны — молча игнорируем
            continue;
        }

        for (mut target, mut phase) in knights.iter_mut() {
            if target.is_pending() {
                // First-click-wins: цель уже в полёте, floor клик игнорируем
                continue;
            }

            // Y прижимаем к полу, клик мог прийти с любой высоты raycast'а
            let point = Vec3::new(click.point.x, FLOOR_Y, click.point.z);

            target.0 = Some(WalkTarget {
                position: point,
                kind: TargetKind::Floor,
            });
            *phase = KnightPhase::Walking;

            // Floor цель — активной двери больше нет
            for mut anim in door_anims.iter_mut() {
                anim.is_active = false;
            }

            logger::log(&format!("Floor target set: {:?}", point));
        }
    }
}

/// Система: клики по дверям → PendingTarget (kind = Door)
///
/// Безусловно перебивает любую текущую цель. Approach-позиция — перед
/// дверью (z + DOOR_APPROACH_OFFSET), на высоте пола, чтобы рыцарь
/// остановился ПЕРЕД дверью, а не внутри неё.
pub fn resolve_door_clicks(
    mut clicks: EventReader<DoorClicked>,
    doors: Query<(Entity, &Door, &Transform)>,
    mut door_anims: Query<(Entity, &mut DoorAnimation)>,
    mut knights: Query<(&mut PendingTarget, &mut KnightPhase), With<Knight>>,
) {
    for click in clicks.read() {
        // Despawned/чужой entity — молча игнорируем
        let Ok((door_entity, door, door_transform)) = doors.get(click.door) else {
            continue;
        };

        let door_pos = door_transform.translation;
        let approach = Vec3::new(door_pos.x, FLOOR_Y, door_pos.z + DOOR_APPROACH_OFFSET);

        for (mut target, mut phase) in knights.iter_mut() {
            target.0 = Some(WalkTarget {
                position: approach,
                kind: TargetKind::Door {
                    door: door_entity,
                    route: door.route.clone(),
                },
            });
            *phase = KnightPhase::Walking;
        }

        // Подсветка и открытие: только кликнутая дверь active
        for (entity, mut anim) in door_anims.iter_mut() {
            anim.is_active = entity == door_entity;
        }

        logger::log(&format!(
            "Door target set: '{}' approach {:?}",
            door.id, approach
        ));
    }
}
