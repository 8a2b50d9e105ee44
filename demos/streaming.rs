use std::thread;
use std::time::Duration;

use typewriter::{Controller, Easing, RevealOptions};

fn main() {
    // Example: a chat message that streams in while a frame loop redraws it.
    //
    // An adapter would:
    // - call on_text() whenever a new chunk arrives
    // - call tick() once per frame and redraw when it returns Some
    let chunks = [
        "Rust",
        "Rust is a",
        "Rust is a systems",
        "Rust is a systems programming language.",
    ];
    let opts = RevealOptions::new()
        .with_duration_ms(400)
        .with_easing(Easing::Linear);
    let mut c = Controller::new("", opts);

    for chunk in chunks {
        c.on_text(chunk);

        for _ in 0..8 {
            thread::sleep(Duration::from_millis(16));
            if let Some(visible) = c.tick() {
                println!("{visible}");
            }
        }
    }

    while c.is_animating() {
        thread::sleep(Duration::from_millis(16));
        if let Some(visible) = c.tick() {
            println!("{visible}");
        }
    }
    println!("done: {}", c.visible());
}
