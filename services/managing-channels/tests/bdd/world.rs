//! World struct for channel management BDD tests

use std::path::Path;

use cucumber::World;
use managing_channels::{
    load_config, Channel, Config, ManagingChannelsContext, SharedStorage, StepError, StoreSetup,
};

/// Names a JSON config file; the in-memory admin panel is used when unset
pub const CONFIG_ENV: &str = "MANAGING_CHANNELS_CONFIG";

#[derive(Debug, Default, World)]
pub struct ChannelsWorld {
    pub context: Option<ManagingChannelsContext>,
    pub setup: Option<StoreSetup>,
    pub storage: SharedStorage,
}

impl ChannelsWorld {
    /// Connect the driver once per scenario
    pub async fn connect(&mut self) -> managing_channels::Result<()> {
        if self.context.is_some() {
            return Ok(());
        }

        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) => load_config(Path::new(&path))?,
            Err(_) => Config::default(),
        };
        let driver = managing_channels::connect(&config).await?;
        let (context, setup) = managing_channels::assemble(&config, driver);
        self.context = Some(context);
        self.setup = Some(setup);
        Ok(())
    }

    pub async fn context(&mut self) -> managing_channels::Result<&ManagingChannelsContext> {
        self.connect().await?;
        self.context
            .as_ref()
            .ok_or_else(|| StepError::Config("channel context is not connected".to_string()))
    }

    pub async fn setup(&mut self) -> managing_channels::Result<&StoreSetup> {
        self.connect().await?;
        self.setup
            .as_ref()
            .ok_or_else(|| StepError::Config("store setup is not connected".to_string()))
    }

    /// Close the driver session opened by [`connect`](Self::connect)
    pub async fn disconnect(&mut self) -> managing_channels::Result<()> {
        self.setup = None;
        match self.context.take() {
            Some(context) => context.close().await,
            None => Ok(()),
        }
    }

    /// Resolve "this channel" or a channel name to a known channel
    pub fn channel(&self, reference: &str) -> managing_channels::Result<Channel> {
        self.storage.resolve(reference).cloned()
    }
}
