// Host-side tests for page lifecycle handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use balloon_core::WorldCommand;
use lifecycle::*;

#[test]
fn real_unload_tears_the_world_down() {
    assert_eq!(pagehide_command(false), Some(WorldCommand::Teardown));
}

#[test]
fn back_forward_cached_page_keeps_running() {
    assert_eq!(pagehide_command(true), None);
}
