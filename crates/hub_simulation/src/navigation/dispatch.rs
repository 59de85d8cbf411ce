//! Arrival / Navigation dispatch — мост от прибытия к переходу на страницу
//!
//! Motion система знает только про цели; про routing знает этот модуль.
//! Door прибытие → PendingNavigation (задержка NAVIGATION_DELAY) →
//! NavigateRequested event + NavigationBridge.navigate(route).

use bevy::prelude::*;

use crate::components::NAVIGATION_DELAY;
use crate::logger;
use crate::navigation::events::{NavigateRequested, ReachedKind, TargetReached};

/// Внешний приёмник навигации (host router)
///
/// Fire-and-forget: возвращаемого значения нет, ошибки (unknown route)
/// остаются на стороне host'а.
pub trait NavigationSink: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Resource-мост к host router'у
///
/// Явный контекст-объект вместо глобального состояния: создаётся один раз
/// на root'е приложения. Опционален — headless симуляция работает и без него
/// (events всё равно пишутся).
#[derive(Resource)]
pub struct NavigationBridge(pub Box<dyn NavigationSink>);

/// Отложенный переход: прибыли к двери, ждём пока откроется
#[derive(Component, Debug, Clone)]
pub struct PendingNavigation {
    pub route: String,
    /// Оставшееся время до вызова navigation (секунды)
    pub timer: f32,
}

/// Система: TargetReached → планирование навигации
///
/// Floor прибытие — ничего не делаем, рыцарь просто остался стоять.
/// Door прибытие — вешаем PendingNavigation на рыцаря.
pub fn schedule_navigation(
    mut reached: EventReader<TargetReached>,
    mut commands: Commands,
) {
    for event in reached.read() {
        match &event.kind {
            ReachedKind::Floor { position } => {
                logger::log(&format!("Knight reached floor point {:?}", position));
            }
            ReachedKind::Door { route, .. } => {
                logger::log(&format!(
                    "Knight reached door, navigation to '{}' in {}s",
                    route, NAVIGATION_DELAY
                ));
                commands.entity(event.knight).insert(PendingNavigation {
                    route: route.clone(),
                    timer: NAVIGATION_DELAY,
                });
            }
        }
    }
}

/// Система: отсчёт задержки и сам переход
///
/// По истечении timer'а пишем NavigateRequested, дёргаем bridge (если есть)
/// и снимаем PendingNavigation — ровно один переход на прибытие.
pub fn tick_navigation_delay(
    time: Res<Time<Fixed>>,
    mut pending: Query<(Entity, &mut PendingNavigation)>,
    mut navigations: EventWriter<NavigateRequested>,
    bridge: Option<Res<NavigationBridge>>,
    mut commands: Commands,
) {
    let delta = time.delta_secs();

    for (entity, mut nav) in pending.iter_mut() {
        nav.timer -= delta;
        if nav.timer > 0.0 {
            continue;
        }

        logger::log_info(&format!("Navigate: '{}'", nav.route));

        navigations.write(NavigateRequested {
            route: nav.route.clone(),
        });
        if let Some(bridge) = bridge.as_ref() {
            bridge.0.navigate(&nav.route);
        }

        commands.entity(entity).remove::<PendingNavigation>();
    }
}
