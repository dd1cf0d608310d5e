use crate::config::{ArrivalPolicy, WorldParams};
use crate::kinematics::{self, KinematicsParams};
use crate::light;
use crate::loudness;
use crate::spawner::Spawner;
use crate::state::{Balloon, Camera, DirectionalLight};
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Started,
}

/// Links a pending balloon to the asset load that will make it visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpawnTicket(u64);

impl SpawnTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Everything that may change the world from outside the frame pass.
/// Producers (DOM listeners, asset loads) enqueue; the frame drains.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldCommand {
    Start,
    AimLight { ndc: Vec2 },
    AssetLoaded(SpawnTicket),
    AssetFailed { ticket: SpawnTicket, reason: String },
    Teardown,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput<'a> {
    /// Seconds since the page started; drives the sideways sway.
    pub elapsed_sec: f32,
    /// Current byte-frequency snapshot, present once capture is live.
    pub spectrum: Option<&'a [u8]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnDecision {
    /// Not started, no capture yet, or torn down.
    Idle,
    Quiet { volume: f32 },
    /// Loud enough, but every candidate spot was taken.
    Crowded { volume: f32 },
    /// A balloon is pending; the caller must load the asset for `ticket`.
    Requested { volume: f32, ticket: SpawnTicket },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub spawn: SpawnDecision,
    pub retired: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommandTally {
    pub arrived: usize,
    /// Completions whose ticket was unknown, torn down, or rejected on arrival.
    pub discarded: usize,
    pub failed: usize,
}

pub struct World {
    pub params: WorldParams,
    pub camera: Camera,
    pub light: DirectionalLight,
    balloons: Vec<Balloon>,
    pending: FnvHashMap<SpawnTicket, Balloon>,
    spawner: Spawner,
    phase: Phase,
    closed: bool,
    next_ticket: u64,
}

impl World {
    pub fn new(params: WorldParams, seed: u64) -> Self {
        let spawner = Spawner::new(&params, params.seed.unwrap_or(seed));
        Self {
            params,
            camera: Camera::default(),
            light: DirectionalLight::default(),
            balloons: Vec::new(),
            pending: FnvHashMap::default(),
            spawner,
            phase: Phase::NotStarted,
            closed: false,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_balloon(&self, ticket: SpawnTicket) -> Option<&Balloon> {
        self.pending.get(&ticket)
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            log::info!("[world] started");
            self.phase = Phase::Started;
        }
    }

    /// Drop all balloons and forget in-flight spawns. Completions that
    /// arrive afterwards find no ticket and are discarded.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        log::info!(
            "[world] teardown: dropping {} balloons, {} pending",
            self.balloons.len(),
            self.pending.len()
        );
        self.balloons.clear();
        self.pending.clear();
        self.closed = true;
    }

    pub fn aim_light(&mut self, ndc: Vec2) {
        self.light.position = light::aim_light(&self.camera, ndc, self.params.light_distance);
        log::debug!(
            "[light] moved to ({:.2},{:.2},{:.2})",
            self.light.position.x,
            self.light.position.y,
            self.light.position.z
        );
    }

    pub fn apply_commands(
        &mut self,
        commands: impl IntoIterator<Item = WorldCommand>,
    ) -> CommandTally {
        let mut tally = CommandTally::default();
        for cmd in commands {
            match cmd {
                WorldCommand::Start => self.start(),
                WorldCommand::AimLight { ndc } => self.aim_light(ndc),
                WorldCommand::AssetLoaded(ticket) => {
                    if self.materialize(ticket) {
                        tally.arrived += 1;
                    } else {
                        tally.discarded += 1;
                    }
                }
                WorldCommand::AssetFailed { ticket, reason } => {
                    if self.pending.remove(&ticket).is_some() {
                        log::error!("[asset] load for ticket {} failed: {}", ticket.id(), reason);
                        tally.failed += 1;
                    } else {
                        tally.discarded += 1;
                    }
                }
                WorldCommand::Teardown => self.teardown(),
            }
        }
        tally
    }

    fn materialize(&mut self, ticket: SpawnTicket) -> bool {
        let Some(balloon) = self.pending.remove(&ticket) else {
            log::debug!("[spawn] discarding completion for unknown ticket {}", ticket.id());
            return false;
        };
        if self.params.arrival == ArrivalPolicy::Recheck
            && !self
                .spawner
                .is_clear(&self.balloons, balloon.position.x, balloon.position.z)
        {
            log::debug!("[spawn] ticket {} landed on a taken spot, dropped", ticket.id());
            return false;
        }
        self.balloons.push(balloon);
        true
    }

    /// One update pass: loudness gate and spawn decision, then kinematics.
    pub fn frame(&mut self, input: FrameInput<'_>) -> FrameReport {
        let spawn = self.decide_spawn(input.spectrum);
        let retired = kinematics::advance(
            &mut self.balloons,
            input.elapsed_sec,
            &KinematicsParams {
                ceiling_y: self.params.ceiling_y,
                sway_amplitude: self.params.sway_amplitude,
            },
        );
        if retired > 0 {
            log::trace!("[world] retired {retired} balloon(s)");
        }
        FrameReport { spawn, retired }
    }

    fn decide_spawn(&mut self, spectrum: Option<&[u8]>) -> SpawnDecision {
        if self.closed || self.phase != Phase::Started {
            return SpawnDecision::Idle;
        }
        let Some(bins) = spectrum else {
            return SpawnDecision::Idle;
        };
        let volume = loudness::mean_volume(bins);
        if !loudness::is_loud(volume, self.params.volume_threshold) {
            return SpawnDecision::Quiet { volume };
        }
        match self.spawner.attempt_spawn(&self.balloons) {
            Some(balloon) => {
                let ticket = SpawnTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending.insert(ticket, balloon);
                SpawnDecision::Requested { volume, ticket }
            }
            None => SpawnDecision::Crowded { volume },
        }
    }

    /// Place an already-loaded balloon directly, skipping the spawner.
    /// Only for building scene fixtures; gameplay spawns go through `frame`.
    #[doc(hidden)]
    pub fn insert_balloon(&mut self, balloon: Balloon) {
        self.balloons.push(balloon);
    }
}
