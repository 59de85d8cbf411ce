//! Компоненты дверей: Door (static data), DoorAnimation, DoorConfig

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Дверь — статический интерактивный элемент hub-сцены
///
/// Создаётся один раз при setup сцены из DoorConfig, дальше read-only.
/// Позиция живёт в Transform.translation.
#[derive(Component, Debug, Clone)]
pub struct Door {
    /// Уникальный id (совпадает с DoorConfig.id)
    pub id: String,
    /// Текст на вывеске
    pub label: String,
    /// Route, который уходит в navigation при входе
    pub route: String,
}

/// Состояние анимации двери (открытие + подсветка)
///
/// is_active toggled Target Resolver'ом: true только у двери, к которой
/// идёт рыцарь. open_amount растёт к 1.0 пока active; при снятии active
/// остаётся как есть (дверь не захлопывается).
#[derive(Component, Debug, Clone, Default)]
pub struct DoorAnimation {
    /// true только для текущей целевой двери (подсветка + открытие)
    pub is_active: bool,
    /// Степень открытия 0.0..=1.0
    pub open_amount: f32,
}

impl DoorAnimation {
    /// Угол поворота дверной створки для рендера (радианы, открывается внутрь)
    pub fn panel_angle(&self) -> f32 {
        -self.open_amount * std::f32::consts::FRAC_PI_2
    }
}

/// Регистрационные данные двери (static configuration, подаётся при setup)
///
/// Позиция как [x, y, z] — как в конфиге исходной сцены.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorConfig {
    pub id: String,
    pub label: String,
    pub position: [f32; 3],
    pub route: String,
}

impl DoorConfig {
    pub fn position_vec3(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Пять дверей hub-сцены (Y = -2: стоят на полу, линия Z = -8.5)
pub fn default_doors() -> Vec<DoorConfig> {
    vec![
        DoorConfig {
            id: "about".to_string(),
            label: "ABOUT ME".to_string(),
            position: [-5.5, -2.0, -8.5],
            route: "about".to_string(),
        },
        DoorConfig {
            id: "tools".to_string(),
            label: "TOOLS".to_string(),
            position: [-2.8, -2.0, -8.5],
            route: "tools".to_string(),
        },
        DoorConfig {
            id: "games".to_string(),
            label: "GAMES".to_string(),
            position: [0.0, -2.0, -8.5],
            route: "games".to_string(),
        },
        DoorConfig {
            id: "chatbot".to_string(),
            label: "AI CHATBOT".to_string(),
            position: [2.8, -2.0, -8.5],
            route: "chatbot".to_string(),
        },
        DoorConfig {
            id: "contact".to_string(),
            label: "CONTACT".to_string(),
            position: [5.5, -2.0, -8.5],
            route: "contact".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_angle_closed_and_open() {
        let mut anim = DoorAnimation::default();
        assert_eq!(anim.panel_angle(), 0.0);

        anim.open_amount = 1.0;
        assert_eq!(anim.panel_angle(), -std::f32::consts::FRAC_PI_2);

        anim.open_amount = 0.5;
        assert_eq!(anim.panel_angle(), -std::f32::consts::FRAC_PI_4);
    }

    #[test]
    fn test_default_doors_unique_ids() {
        let doors = default_doors();
        assert_eq!(doors.len(), 5);

        let mut ids: Vec<_> = doors.iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5, "door ids должны быть уникальны");
    }

    #[test]
    fn test_default_doors_on_door_line() {
        for door in default_doors() {
            assert_eq!(door.position[1], -2.0);
            assert_eq!(door.position[2], -8.5);
        }
    }
}
