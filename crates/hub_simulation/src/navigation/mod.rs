//! Navigation domain — Target Resolver и Arrival/Navigation dispatch
//!
//! Содержит:
//! - FloorClicked / DoorClicked (input events от render host)
//! - TargetReached / NavigateRequested (output events)
//! - resolve_floor_clicks / resolve_door_clicks (клики → PendingTarget)
//! - schedule_navigation / tick_navigation_delay (прибытие → переход)
//! - NavigationSink / NavigationBridge (мост к host router'у)

use bevy::prelude::*;

pub mod dispatch;
pub mod events;
pub mod resolver;

pub use dispatch::{NavigationBridge, NavigationSink, PendingNavigation};
pub use events::*;

/// Navigation Plugin
///
/// Resolver'ы в HubSet::Resolve (до motion), dispatch в HubSet::Dispatch
/// (после motion — TargetReached обрабатывается тем же тиком).
/// Внутри сетов chain: floor клики до door кликов (door перебивает floor).
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FloorClicked>()
            .add_event::<DoorClicked>()
            .add_event::<TargetReached>()
            .add_event::<NavigateRequested>()
            .add_systems(
                FixedUpdate,
                (resolver::resolve_floor_clicks, resolver::resolve_door_clicks)
                    .chain()
                    .in_set(crate::HubSet::Resolve),
            )
            .add_systems(
                FixedUpdate,
                (dispatch::schedule_navigation, dispatch::tick_navigation_delay)
                    .chain()
                    .in_set(crate::HubSet::Dispatch),
            );
    }
}
