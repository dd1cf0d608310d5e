// Host-side tests for the shared model cache.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod loader {
    include!("../src/loader.rs");
}

use balloon_core::{AssetError, ModelAsset, SpawnTicket, World, WorldCommand, WorldParams};
use loader::*;

// Real tickets only come from the world's spawn decisions.
fn tickets(n: usize) -> Vec<SpawnTicket> {
    let mut world = World::new(WorldParams::default(), 11);
    world.start();
    let loud = [200u8; 128];
    let mut out = Vec::new();
    while out.len() < n {
        if let balloon_core::SpawnDecision::Requested { ticket, .. } = world
            .frame(balloon_core::FrameInput {
                elapsed_sec: 0.0,
                spectrum: Some(&loud[..]),
            })
            .spawn
        {
            out.push(ticket);
        }
    }
    out
}

fn model() -> ModelAsset {
    ModelAsset {
        vertices: Vec::new(),
        indices: vec![0, 1, 2],
    }
}

#[test]
fn first_request_starts_a_fetch_and_later_ones_queue() {
    let t = tickets(3);
    let mut slot = ModelSlot::default();
    assert_eq!(slot.request(t[0]), Request::StartFetch);
    assert_eq!(slot.request(t[1]), Request::Queued);
    assert_eq!(slot.request(t[2]), Request::Queued);
}

#[test]
fn success_answers_every_waiter_and_caches_the_model() {
    let t = tickets(2);
    let mut slot = ModelSlot::default();
    slot.request(t[0]);
    slot.request(t[1]);
    let done = slot.finish(Ok(model()));
    assert!(done.model.is_some());
    assert_eq!(
        done.commands,
        vec![WorldCommand::AssetLoaded(t[0]), WorldCommand::AssetLoaded(t[1])]
    );
}

#[test]
fn ready_slot_answers_immediately_without_fetching() {
    let t = tickets(2);
    let mut slot = ModelSlot::default();
    slot.request(t[0]);
    slot.finish(Ok(model()));
    assert_eq!(
        slot.request(t[1]),
        Request::Ready(WorldCommand::AssetLoaded(t[1]))
    );
}

#[test]
fn failure_fans_out_to_all_waiters_and_allows_a_fresh_fetch() {
    let t = tickets(3);
    let mut slot = ModelSlot::default();
    slot.request(t[0]);
    slot.request(t[1]);
    let done = slot.finish(Err(AssetError::Fetch("HTTP 404".into())));
    assert!(done.model.is_none());
    assert_eq!(done.commands.len(), 2);
    for (cmd, ticket) in done.commands.iter().zip(&t[..2]) {
        match cmd {
            WorldCommand::AssetFailed { ticket: got, reason } => {
                assert_eq!(got, ticket);
                assert!(reason.contains("404"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
    assert_eq!(slot.request(t[2]), Request::StartFetch);
}

#[test]
fn finish_without_a_running_fetch_is_ignored() {
    let t = tickets(1);
    let mut slot = ModelSlot::default();
    let done = slot.finish(Ok(model()));
    assert!(done.model.is_none() && done.commands.is_empty());
    // still empty, so the next request fetches
    assert_eq!(slot.request(t[0]), Request::StartFetch);
}
