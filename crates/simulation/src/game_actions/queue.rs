use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::GarageAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    /// The interactive terminal menu.
    Player,
    /// The headless JSON protocol.
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub tick: u64,
    pub source: ActionSource,
    pub action: GarageAction,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, tick: u64, source: ActionSource, action: GarageAction) {
        self.pending.push(QueuedAction {
            tick,
            source,
            action,
        });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
