//! Replays the demo insert/delete script on a fresh list.
//!
//! Prints the value sequence after each step and verifies the list as it
//! goes. Growth and linearization show up as debug events.

use slotring_bench::HARNESS_SCRIPT;
use slotring_list::SlotList;
use slotring_test_utils::{ring_slots, values};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== slotring harness replay ===\n");

    let mut list = SlotList::new().unwrap();
    println!("after ctor: capacity {}", list.capacity());

    for step in HARNESS_SCRIPT {
        if let Err(e) = step.apply(&mut list) {
            eprintln!("{step}: {e}");
            std::process::exit(1);
        }
        if let Err(e) = list.verify() {
            eprintln!("{step}: {e}");
            std::process::exit(1);
        }
        println!("{:<24} {:?}", step.to_string(), values(&list));
    }

    println!();
    println!("slots:     {:?}", ring_slots(&list));
    println!("capacity:  {}", list.capacity());
    println!("free head: {}", list.free_head());

    list.linearize().unwrap();
    println!("linearized: {:?}", values(&list));
    println!("capacity:   {}", list.capacity());
}
