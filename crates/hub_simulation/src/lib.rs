//! Castle Hub Simulation Core
//!
//! ECS-симуляция walk-контроллера hub-сцены на Bevy 0.16.
//! Рендер (3D castle, материалы, камера) — внешний collaborator:
//! он шлёт FloorClicked/DoorClicked, читает Transform/RenderPose/DoorAnimation
//! и потребляет NavigateRequested.
//!
//! Ядро детерминировано: fixed timestep 60Hz, single-writer Transform,
//! никакого I/O внутри систем.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod doors;
pub mod logger;
pub mod motion;
pub mod navigation;

// Re-export базовых типов для удобства
pub use components::*;
pub use doors::{spawn_doors, DoorPlugin};
pub use motion::MotionPlugin;
pub use navigation::{
    DoorClicked, FloorClicked, NavigateRequested, NavigationBridge, NavigationPlugin,
    NavigationSink, PendingNavigation, ReachedKind, TargetReached,
};

/// Порядок подсистем внутри одного simulation тика
///
/// Тотальный порядок обязателен для детерминизма: Resolve и Motion оба
/// пишут KnightPhase/PendingTarget, без chain executor мог бы менять
/// порядок от прогона к прогону.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HubSet {
    /// Клики → PendingTarget (Target Resolver)
    Resolve,
    /// Продвижение walk FSM + arrival события
    Motion,
    /// Arrival → отложенная навигация
    Dispatch,
    /// Анимация дверей
    Doors,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct HubSimulationPlugin;

impl Plugin for HubSimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(WalkableBounds::default())
            .configure_sets(
                FixedUpdate,
                (HubSet::Resolve, HubSet::Motion, HubSet::Dispatch, HubSet::Doors).chain(),
            )
            .add_plugins((NavigationPlugin, MotionPlugin, DoorPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Ядру walk-контроллера случайность не нужна; RNG используют headless
/// скрипты (random клики) и determinism тесты.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время продвигается вручную ровно на 1/60s за app.update(): один update —
/// один FixedUpdate тик, независимо от wall-clock (иначе детерминизм
/// тестов зависел бы от скорости машины).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0));

    app
}

/// Спавн рыцаря в точке спавна hub-сцены
///
/// Required Components добавят KnightPhase/WalkSpeed/WalkCycle/RenderPose/PendingTarget.
pub fn spawn_knight(commands: &mut Commands, home_position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(home_position),
            Knight { home_position },
        ))
        .id()
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
