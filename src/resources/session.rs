use serde::{Deserialize, Serialize};

/// Identifies a connected player session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Which remote players a server replicates an effect to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecipientFilter {
    /// Every player.
    #[default]
    Broadcast,
    /// Only the listed players.
    Players(Vec<PlayerId>),
}
