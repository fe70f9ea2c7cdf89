//! Time Travel
//!
//! This example demonstrates the pure history core on its own: every
//! transition returns a new value, and restoring an old ordering discards
//! the newer history.
//!
//! Run with: cargo run --example time_travel

use rewind::{History, Post};

fn main() {
    println!("=== Time Travel Example ===\n");

    let history: History<Post> = History::new().seed(vec![
        Post::new(1, "first"),
        Post::new(2, "second"),
        Post::new(3, "third"),
        Post::new(4, "fourth"),
        Post::new(5, "fifth"),
    ]);

    let history = history
        .reorder(0, 1)
        .and_then(|h| h.reorder(3, 4))
        .and_then(|h| h.reorder(2, 3))
        .expect("indices derived from the list length");

    println!("After three swaps:");
    for post in history.present() {
        println!("  {}: {}", post.id, post.title);
    }

    println!("\nAction log (latest first):");
    for description in history.descriptions() {
        println!("  - {description}");
    }

    // Jump back past the two newest actions
    let history = history.time_travel(1).expect("two actions are recorded");

    println!("\nAfter travelling back two actions:");
    for post in history.present() {
        println!("  {}: {}", post.id, post.title);
    }

    println!("\nRemaining action log:");
    for description in history.descriptions() {
        println!("  - {description}");
    }

    println!("\n=== Example Complete ===");
}
