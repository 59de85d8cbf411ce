//! Headless прогон hub-симуляции
//!
//! Скриптует клики (random по полу из seeded RNG, затем дверь) и гоняет
//! walk-контроллер без рендера — smoke-check детерминированного ядра.

use bevy::prelude::*;
use hub_simulation::*;
use rand::Rng;

/// Console-приёмник навигации (вместо host router'а)
struct ConsoleNavigation;

impl NavigationSink for ConsoleNavigation {
    fn navigate(&self, route: &str) {
        println!(">>> navigate('{}')", route);
    }
}

fn main() {
    let seed = 42;
    println!("Starting Castle Hub headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(HubSimulationPlugin)
        .insert_resource(NavigationBridge(Box::new(ConsoleNavigation)));

    // Setup сцены: пять дверей + рыцарь в точке спавна
    let door_entities = {
        let mut commands = app.world_mut().commands();
        spawn_doors(&mut commands, &default_doors())
    };
    let knight = {
        let mut commands = app.world_mut().commands();
        spawn_knight(&mut commands, Vec3::new(0.0, FLOOR_Y, 2.0))
    };
    app.update(); // Применяем spawn команды

    // Прогоняем 1200 тиков (20 sec при 60Hz)
    for tick in 0..1200 {
        // Каждые 240 тиков — random клик по полу
        if tick % 240 == 0 && tick < 720 {
            let point = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                Vec3::new(
                    rng.rng.gen_range(-7.0..7.0),
                    FLOOR_Y,
                    rng.rng.gen_range(-7.0..4.0),
                )
            };
            println!("Tick {}: floor click {:?}", tick, point);
            app.world_mut().send_event(FloorClicked { point });
        }

        // На 720-м тике — клик по последней двери (contact)
        if tick == 720 {
            let door = door_entities[4];
            println!("Tick {}: door click {:?}", tick, door);
            app.world_mut().send_event(DoorClicked { door });
        }

        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let position = world.get::<Transform>(knight).map(|t| t.translation);
            let phase = world.get::<KnightPhase>(knight).cloned();
            println!("Tick {}: knight at {:?}, phase {:?}", tick, position, phase);
        }
    }

    println!("Simulation complete!");
}
