#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Fetching,
    Staged,
    Failed,
    Redirected,
}
