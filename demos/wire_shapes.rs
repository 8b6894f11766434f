//! Wire-shape inspection.
//!
//! Shows the JSON bodies exchanged with the remote collection for each
//! lifecycle stage, and what reconciling a canonical response changes.
//!
//! Run with: cargo run --example wire_shapes

use seqsync::{Command, Sequence, SequenceStore, Step};

fn main() {
    println!("========================================");
    println!(" seqsync wire shapes");
    println!("========================================\n");

    // Unsaved sequence: create body carries no id.
    let mut unsaved = Sequence::new().with_name("Scan beds");
    unsaved.push_step(Step::new("take_photo"));
    println!("POST /api/sequences body:");
    println!("{}\n", serde_json::to_string_pretty(&unsaved).unwrap());

    // The server's canonical response assigns the id.
    let canonical: Sequence = serde_json::from_str(
        r#"{
            "id": 42,
            "name": "Scan beds",
            "color": "gray",
            "kind": "sequence",
            "args": {},
            "body": [{"kind": "take_photo", "args": {}}]
        }"#,
    )
    .unwrap();
    println!(
        "Canonical response: id={:?}, dirty={}\n",
        canonical.id, canonical.dirty
    );

    // Reconciling it into the store clears dirty and captures the id.
    let mut store = SequenceStore::new();
    store.apply(Command::Add).unwrap();
    store.apply(Command::PushStep(Step::new("take_photo"))).unwrap();
    println!(
        "Before reconcile: dirty={}",
        store.get(0).unwrap().dirty
    );
    store
        .apply(Command::Saved {
            index: 0,
            canonical,
        })
        .unwrap();
    let saved = store.get(0).unwrap();
    println!(
        "After reconcile:  dirty={}, id={}",
        saved.dirty,
        saved.id.unwrap()
    );

    // Updates are scoped to the assigned id.
    println!(
        "\nPUT /api/sequences/{} body:",
        saved.id.unwrap()
    );
    println!("{}", serde_json::to_string_pretty(saved).unwrap());
}
