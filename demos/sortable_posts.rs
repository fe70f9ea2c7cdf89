//! Sortable Post List
//!
//! This example walks through the full flow of the reference UI: fetch seed
//! data through the effect boundary, reorder posts with "move up"/"move
//! down" events, and render the derived action log.
//!
//! Key concepts:
//! - Seed fetching as an effect run against an environment
//! - Payload truncation to the display limit
//! - Dispatching actions through a caller-owned store
//!
//! Run with: cargo run --example sortable_posts

use rewind::seed::{checked, parse_posts, SeedAction, SeedLoader};
use rewind::{Action, Post, Store};
use std::sync::Arc;
use stillwater::prelude::*;

// Stands in for the HTTP source; the reference API returns far more
// records than the list displays.
const POSTS_PAYLOAD: &str = r#"[
    {"id": 1, "title": "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"},
    {"id": 2, "title": "qui est esse"},
    {"id": 3, "title": "ea molestias quasi exercitationem repellat qui ipsa sit aut"},
    {"id": 4, "title": "eum et est occaecati"},
    {"id": 5, "title": "nesciunt quas odio"},
    {"id": 6, "title": "dolorem eum magni eos aperiam quia"},
    {"id": 7, "title": "magnam facilis autem"}
]"#;

#[derive(Clone)]
struct DemoEnv {
    payload: &'static str,
}

fn render(store: &Store<Post>) {
    println!("Sortable Post List");
    for post in store.present() {
        println!("  {}: {}", post.id, post.title);
    }
    if store.has_history() {
        println!("List of actions committed (latest first)");
        for description in store.descriptions() {
            println!("  - {description}");
        }
    }
    println!();
}

#[tokio::main]
async fn main() {
    println!("=== Sortable Post List Example ===\n");

    let action: SeedAction<Post, DemoEnv> =
        Arc::new(|| from_fn(|env: &DemoEnv| parse_posts(env.payload)).boxed());
    let loader = SeedLoader::new(action);

    let env = DemoEnv {
        payload: POSTS_PAYLOAD,
    };
    let posts = match loader.load().run(&env).await {
        Ok(posts) => posts,
        Err(error) => {
            // The reference UI alerts and clears its loading indicator here.
            eprintln!("could not load posts: {error}");
            return;
        }
    };

    let mut store = Store::new();
    let posts = checked(posts).expect("seed payload has unique ids");
    store.dispatch(Action::Seed(posts)).unwrap();
    render(&store);

    // "move down" arrow on the first row
    store
        .dispatch(Action::Reorder {
            index_a: 0,
            index_b: 1,
        })
        .unwrap();
    render(&store);

    // "move up" arrow on the last row
    let last = store.present().len() - 1;
    store
        .dispatch(Action::Reorder {
            index_a: last,
            index_b: last - 1,
        })
        .unwrap();
    render(&store);

    // Time travel to the newest recorded action (undo the last move)
    store
        .dispatch(Action::TimeTravel { steps_back: 0 })
        .unwrap();
    render(&store);

    println!("=== Example Complete ===");
}
