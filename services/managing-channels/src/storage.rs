//! Channels remembered between the steps of one scenario

use crate::channel::Channel;
use crate::error::StepError;

/// Reference that always means the most recently created channel
pub const THIS_CHANNEL: &str = "this channel";

/// Channels created by setup steps, looked up by name
#[derive(Debug, Default, Clone)]
pub struct SharedStorage {
    channels: Vec<Channel>,
}

impl SharedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a channel; it becomes "this channel"
    pub fn add(&mut self, channel: Channel) {
        self.channels.retain(|c| c.name != channel.name);
        self.channels.push(channel);
    }

    pub fn latest(&self) -> crate::Result<&Channel> {
        self.channels
            .last()
            .ok_or_else(|| StepError::Assertion("no channel has been created yet".to_string()))
    }

    pub fn by_name(&self, name: &str) -> crate::Result<&Channel> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| StepError::Assertion(format!("channel \"{}\" is not known", name)))
    }

    /// Resolve "this channel" or a channel name
    pub fn resolve(&self, reference: &str) -> crate::Result<&Channel> {
        if reference == THIS_CHANNEL {
            self.latest()
        } else {
            self.by_name(reference)
        }
    }
}
