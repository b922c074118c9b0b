//! Логи симуляции: переходы, щит, смерть, деспавн попадают в sink.

mod common;

use common::*;
use emberfall_simulation::logger::BufferLogger;
use emberfall_simulation::*;

#[test]
fn test_combat_events_are_logged_and_filtered() {
    let buffer = BufferLogger::new();
    set_logger(Box::new(buffer.clone()));
    set_log_level(LogLevel::Debug);

    let mut app = create_combat_app(42);
    let player = spawn_player(&mut app, 0.0);
    let enemy = spawn_enemy(&mut app, 5.0, None);

    input(&mut app, player).block_held = true;
    run_ticks(&mut app, 1);
    for _ in 0..3 {
        hit(&mut app, player, 1);
        run_ticks(&mut app, 1);
    }
    hit(&mut app, enemy, 5);
    run_ticks(&mut app, 130);

    assert!(buffer.contains("Idle → Blocking"));
    assert!(buffer.contains("щит сломан"));
    assert!(buffer.contains("погиб"));
    assert!(buffer.contains("Despawning"));

    // Info и выше: debug строки отфильтрованы
    set_log_level(LogLevel::Info);
    let before = buffer.lines().len();
    log("debug line");
    log_warning("warning line");

    let lines = buffer.lines();
    assert_eq!(lines.len(), before + 1);
    assert!(lines[before].starts_with("[WARNING]"));
}
