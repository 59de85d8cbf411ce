//! Navigation events — клики от input-слоя и события прибытия/навигации
//!
//! Input-слой (render host) → FloorClicked / DoorClicked → Target Resolver
//! Motion система → TargetReached → dispatch → NavigateRequested → host router

use bevy::prelude::*;

/// Event: клик по полу (точка в world coordinates)
///
/// Генерируется:
/// - Render host (raycast по invisible floor plane)
/// - Headless скрипты/тесты
///
/// Обрабатывается:
/// - resolve_floor_clicks: bounds check + установка PendingTarget
#[derive(Event, Debug, Clone)]
pub struct FloorClicked {
    pub point: Vec3,
}

/// Event: клик по двери
///
/// Обрабатывается:
/// - resolve_door_clicks: approach-позиция + PendingTarget + подсветка двери
#[derive(Event, Debug, Clone)]
pub struct DoorClicked {
    pub door: Entity,
}

/// Event: рыцарь дошёл до цели (ровно один на цель)
///
/// Kind решает post-arrival действие: Floor — ничего, Door — navigation
/// после NAVIGATION_DELAY.
#[derive(Event, Debug, Clone)]
pub struct TargetReached {
    pub knight: Entity,
    pub kind: ReachedKind,
}

/// Чего именно достигли
#[derive(Debug, Clone, PartialEq)]
pub enum ReachedKind {
    /// Точка пола — рыцарь остаётся стоять
    Floor { position: Vec3 },
    /// Approach-позиция двери — будет navigation по route
    Door { door: Entity, route: String },
}

/// Event: запрос перехода на страницу (fire-and-forget)
///
/// Обрабатывается host router'ом; возвращаемого значения нет,
/// неизвестный route — проблема router'а, не ядра.
#[derive(Event, Debug, Clone)]
pub struct NavigateRequested {
    pub route: String,
}
