//! Scenario setup that creates channels through the admin screens

use admin_ui::inflector::name_to_uppercase_code;
use admin_ui::Page;
use tracing::info;

use crate::channel::Channel;
use crate::config::SetupConfig;
use crate::error::StepError;
use crate::pages::{ChannelFormPage, CreatePage, UpdatePage};

/// Creates and adjusts channels the way an administrator would
#[derive(Debug, Clone)]
pub struct StoreSetup {
    create_page: CreatePage,
    update_page: UpdatePage,
    defaults: SetupConfig,
}

impl StoreSetup {
    pub fn new(create_page: CreatePage, update_page: UpdatePage, defaults: SetupConfig) -> Self {
        Self {
            create_page,
            update_page,
            defaults,
        }
    }

    /// Create an enabled channel named `name` and return its reference
    pub async fn create_channel(
        &self,
        name: &str,
        base_currency: Option<&str>,
    ) -> crate::Result<Channel> {
        let code = name_to_uppercase_code(name);
        let base_currency = base_currency.unwrap_or(&self.defaults.base_currency);
        info!("Setting up channel {} ({})", name, code);

        self.create_page.open(&[]).await?;
        self.create_page.specify_code(&code).await?;
        self.create_page.name_it(name).await?;
        self.create_page.choose_base_currency(base_currency).await?;
        self.create_page
            .choose_default_locale(&self.defaults.default_locale)
            .await?;
        self.create_page.create().await?;

        // a successful create lands on the edit screen of the new channel
        let id = self.update_page.current_id().await?.ok_or_else(|| {
            StepError::Assertion(format!("channel \"{}\" could not be created", name))
        })?;

        Ok(Channel {
            id,
            code,
            name: name.to_string(),
        })
    }

    pub async fn disable_channel(&self, channel: &Channel) -> crate::Result<()> {
        info!("Disabling channel {}", channel.name);
        self.update_page.open_channel(channel.id).await?;
        self.update_page.disable().await?;
        self.update_page.save_changes().await?;

        if self.update_page.is_open().await? {
            if let Ok(message) = self.update_page.validation_message("enabled").await {
                return Err(StepError::Assertion(format!(
                    "channel \"{}\" could not be disabled: {}",
                    channel.name, message
                )));
            }
        }
        Ok(())
    }
}
