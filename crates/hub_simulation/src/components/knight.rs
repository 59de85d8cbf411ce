//! Компоненты рыцаря: Knight, KnightPhase, WalkSpeed, WalkCycle, RenderPose, PendingTarget

use bevy::prelude::*;

/// Рыцарь — управляемый персонаж hub-сцены
///
/// Автоматически добавляет KnightPhase, WalkSpeed, WalkCycle, RenderPose, PendingTarget
/// через Required Components.
///
/// Логическая позиция живёт в Transform.translation (single-writer: только
/// motion система мутирует её). RenderPose — производные offsets для рендера.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(KnightPhase, WalkSpeed, WalkCycle, RenderPose, PendingTarget)]
pub struct Knight {
    /// Точка спавна; сюда рыцарь возвращается после Entering
    pub home_position: Vec3,
}

impl Default for Knight {
    fn default() -> Self {
        Self {
            home_position: Vec3::new(0.0, crate::components::FLOOR_Y, 2.0),
        }
    }
}

/// Фаза рыцаря (walk-контроллер FSM)
///
/// Переходы:
/// - Idle → Walking: установлен PendingTarget (клик по полу/двери)
/// - Walking → Idle: distance до target < ARRIVAL_THRESHOLD (+ TargetReached event, ровно один)
/// - Entering → Idle: scale сжался до ENTER_MIN_SCALE (reset в home_position)
///
/// Entering зарезервирована для эффекта «уйти в дверь и исчезнуть»;
/// в базовом flow автоматически не включается.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum KnightPhase {
    /// Idle — стоим на месте, косметический bob/sway
    Idle,

    /// Walking — идём к PendingTarget
    Walking,

    /// Entering — уходим в дверь (уменьшаемся), затем reset в home
    Entering,
}

impl Default for KnightPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Скорость ходьбы рыцаря (метры/сек)
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct WalkSpeed {
    pub speed: f32,
}

impl Default for WalkSpeed {
    fn default() -> Self {
        Self { speed: 2.0 } // 2 m/s — базовая скорость ходьбы
    }
}

/// Фаза walk-цикла (для limb swing / bob синусоид)
///
/// Монотонно растёт пока Walking (dt * WALK_CADENCE); в Idle не используется.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct WalkCycle {
    pub time: f32,
}

/// Производная поза для рендера (read-only для рендер-слоя)
///
/// Только косметика: не участвует в логике движения и не пишется обратно
/// в Transform.translation. Yaw (facing) пишется напрямую в Transform.rotation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RenderPose {
    /// Вертикальный offset (idle bobbing / walk bob)
    pub bob: f32,
    /// Yaw-покачивание в Idle (радианы)
    pub sway: f32,
    /// Мах ногами при ходьбе (радианы)
    pub leg_swing: f32,
    /// Мах руками при ходьбе (радианы, противофаза ногам)
    pub arm_swing: f32,
    /// Uniform scale (1.0 норма; сжимается в Entering)
    pub scale: f32,
}

impl Default for RenderPose {
    fn default() -> Self {
        Self {
            bob: 0.0,
            sway: 0.0,
            leg_swing: 0.0,
            arm_swing: 0.0,
            scale: 1.0,
        }
    }
}

/// Тип цели: просто точка пола или дверь
#[derive(Debug, Clone, PartialEq)]
pub enum TargetKind {
    /// Точка пола — дошли и остались стоять
    Floor,
    /// Дверь — после прибытия triggered navigation по route
    Door { door: Entity, route: String },
}

/// Активная цель, к которой идёт рыцарь
#[derive(Debug, Clone, PartialEq)]
pub struct WalkTarget {
    pub position: Vec3,
    pub kind: TargetKind,
}

/// Слот цели рыцаря
///
/// Инвариант: максимум одна цель одновременно. Создаётся кликом,
/// очищается при прибытии (motion система). None проверяется каждый тик.
#[derive(Component, Debug, Clone, Default)]
pub struct PendingTarget(pub Option<WalkTarget>);

impl PendingTarget {
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Идём ли сейчас именно к двери (для floor-click политики)
    pub fn is_door(&self) -> bool {
        matches!(
            self.0,
            Some(WalkTarget {
                kind: TargetKind::Door { .. },
                ..
            })
        )
    }
}
