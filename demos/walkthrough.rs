//! Offline editing walkthrough.
//!
//! Builds a sequence through the command dispatcher, reorders it, and prints
//! the wire payload a save would send.
//!
//! Run with: cargo run --example walkthrough

use seqsync::{Color, Command, SequenceStore, Step};

fn main() {
    println!("========================================");
    println!(" seqsync editing walkthrough");
    println!("========================================\n");

    let mut store = SequenceStore::new();

    // 1. Seed a fresh unsaved sequence and name it.
    store.apply(Command::Add).unwrap();
    store
        .apply(Command::Edit {
            name: Some("Water the front bed".to_string()),
            color: Some(Color::Green),
        })
        .unwrap();

    // 2. Build the body; order is execution order.
    store
        .apply(Command::PushStep(
            Step::new("move_absolute")
                .with_arg("x", 200)
                .with_arg("y", 120)
                .with_arg("z", 0),
        ))
        .unwrap();
    store
        .apply(Command::PushStep(
            Step::new("write_pin").with_arg("pin_number", 8).with_arg("pin_value", 1),
        ))
        .unwrap();
    store
        .apply(Command::SpliceStep {
            step: Step::new("find_home"),
            insert_before: 0,
        })
        .unwrap();
    store
        .apply(Command::AddComment {
            index: 2,
            comment: "valve open".to_string(),
        })
        .unwrap();

    let seq = store.current().unwrap();
    println!("Body order after edits:");
    for (i, step) in seq.body.iter().enumerate() {
        match &step.comment {
            Some(comment) => println!("  {}. {} ({})", i, step.kind, comment),
            None => println!("  {}. {}", i, step.kind),
        }
    }
    println!("\nDirty: {}", seq.dirty);

    // 3. The payload a save would POST (no id yet, no dirty flag on the wire).
    println!("\nCreate payload:");
    println!("{}", serde_json::to_string_pretty(seq).unwrap());
}
