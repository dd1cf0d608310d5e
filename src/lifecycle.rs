use balloon_core::WorldCommand;

/// Command for a `pagehide` event. A persisted page goes into the
/// back/forward cache and may be shown again with its frame loop intact,
/// so only a real unload tears the world down.
pub fn pagehide_command(persisted: bool) -> Option<WorldCommand> {
    (!persisted).then_some(WorldCommand::Teardown)
}
