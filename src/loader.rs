use balloon_core::{AssetError, ModelAsset, SpawnTicket, WorldCommand};
use smallvec::SmallVec;
use std::rc::Rc;

/// What the caller must do after asking the slot for a model.
#[derive(Debug, PartialEq)]
pub enum Request {
    /// The slot was empty; start a fetch and report back through `finish`.
    StartFetch,
    /// A fetch is already running and will answer this ticket.
    Queued,
    /// The model is cached; enqueue this command now.
    Ready(WorldCommand),
}

/// Result of a finished fetch: the model to upload, if any, and one
/// completion command per waiting ticket.
#[derive(Debug, Default)]
pub struct Completion {
    pub model: Option<Rc<ModelAsset>>,
    pub commands: Vec<WorldCommand>,
}

enum State {
    Empty,
    Loading(SmallVec<[SpawnTicket; 4]>),
    Ready(Rc<ModelAsset>),
}

/// Shared model cache: at most one fetch in flight, kept after the first
/// success, reset to empty after a failure.
pub struct ModelSlot {
    state: State,
}

impl Default for ModelSlot {
    fn default() -> Self {
        Self {
            state: State::Empty,
        }
    }
}

impl ModelSlot {
    pub fn request(&mut self, ticket: SpawnTicket) -> Request {
        match &mut self.state {
            State::Ready(_) => Request::Ready(WorldCommand::AssetLoaded(ticket)),
            State::Loading(waiters) => {
                waiters.push(ticket);
                Request::Queued
            }
            State::Empty => {
                let mut waiters = SmallVec::new();
                waiters.push(ticket);
                self.state = State::Loading(waiters);
                Request::StartFetch
            }
        }
    }

    /// Settle the running fetch. Ignored unless a fetch is in flight.
    pub fn finish(&mut self, result: Result<ModelAsset, AssetError>) -> Completion {
        let waiters = match std::mem::replace(&mut self.state, State::Empty) {
            State::Loading(w) => w,
            other => {
                self.state = other;
                return Completion::default();
            }
        };
        match result {
            Ok(model) => {
                let model = Rc::new(model);
                self.state = State::Ready(model.clone());
                Completion {
                    model: Some(model),
                    commands: waiters.into_iter().map(WorldCommand::AssetLoaded).collect(),
                }
            }
            Err(e) => {
                let reason = e.to_string();
                Completion {
                    model: None,
                    commands: waiters
                        .into_iter()
                        .map(|ticket| WorldCommand::AssetFailed {
                            ticket,
                            reason: reason.clone(),
                        })
                        .collect(),
                }
            }
        }
    }
}
