//! Границы сцены и tuning-константы walk-контроллера

use bevy::prelude::*;

/// Y-координата пола (логическая позиция рыцаря всегда на этой высоте)
pub const FLOOR_Y: f32 = -1.1;

/// Дистанция прибытия: ближе этого порога считаем что target достигнут
/// (approximate arrival, не exact-zero — иначе jitter от float overshoot)
pub const ARRIVAL_THRESHOLD: f32 = 0.3;

/// Смещение approach-позиции перед дверью (по +Z, рыцарь встаёт ПЕРЕД дверью)
pub const DOOR_APPROACH_OFFSET: f32 = 1.5;

/// Задержка между прибытием к двери и вызовом navigation (секунды)
///
/// Даёт door-opening анимации прочитаться как причинно связанной с прибытием.
pub const NAVIGATION_DELAY: f32 = 0.3;

/// Скорость открытия двери (open_amount units/sec)
pub const DOOR_OPEN_SPEED: f32 = 2.0;

/// Скорость ухода в дверь в фазе Entering (m/s по -Z)
pub const ENTER_SPEED: f32 = 1.5;

/// Скорость уменьшения scale в фазе Entering (units/sec)
pub const ENTER_SHRINK_RATE: f32 = 0.5;

/// Минимальный scale: достигнув его, рыцарь «вошёл» и сбрасывается в Idle
pub const ENTER_MIN_SCALE: f32 = 0.3;

/// Множитель walk cycle (cadence): walk_cycle.time += dt * WALK_CADENCE
pub const WALK_CADENCE: f32 = 8.0;

/// Прямоугольник пола, по которому разрешено ходить
///
/// Клики вне прямоугольника игнорируются (silent no-op, не ошибка).
#[derive(Resource, Debug, Clone, Copy)]
pub struct WalkableBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for WalkableBounds {
    fn default() -> Self {
        Self {
            min_x: -7.0,
            max_x: 7.0,
            min_z: -7.0,
            max_z: 4.0,
        }
    }
}

impl WalkableBounds {
    /// Проверка что точка внутри walkable-прямоугольника (по X/Z, Y игнорируем)
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.z >= self.min_z
            && point.z <= self.max_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_inside() {
        let bounds = WalkableBounds::default();
        assert!(bounds.contains(Vec3::new(0.0, -1.1, 0.0)));
        assert!(bounds.contains(Vec3::new(-7.0, -1.1, 4.0))); // Граница включительно
        assert!(bounds.contains(Vec3::new(7.0, 5.0, -7.0))); // Y не учитывается
    }

    #[test]
    fn test_bounds_rejects_outside() {
        let bounds = WalkableBounds::default();
        assert!(!bounds.contains(Vec3::new(7.1, -1.1, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, -1.1, 4.5)));
        assert!(!bounds.contains(Vec3::new(0.0, -1.1, -8.5))); // Линия дверей вне walkable зоны
    }
}
