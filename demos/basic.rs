use typewriter::{AnimatedText, RevealOptions};

fn main() {
    let mut t = AnimatedText::new("Hello", RevealOptions::default(), 0);

    for now_ms in (0..=250).step_by(50) {
        println!("t={now_ms} visible={:?}", t.render("Hello", now_ms));
    }

    // Appending keeps the reveal going from where it is.
    for now_ms in (250..=750).step_by(100) {
        println!("t={now_ms} visible={:?}", t.render("Hello world", now_ms));
    }

    // Anything else restarts from the first char.
    for now_ms in (800..=1_300).step_by(100) {
        println!("t={now_ms} visible={:?}", t.render("Goodbye", now_ms));
    }

    t.set_disabled(true);
    println!("disabled: {:?}", t.render("Shown at once", 1_400));
}
