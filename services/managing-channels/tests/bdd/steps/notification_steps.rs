//! Steps that check validation messages and flash notifications

use cucumber::then;
use managing_channels::Result;

use crate::world::ChannelsWorld;

#[then("I should be notified that at least one channel has to be defined")]
async fn at_least_one_channel_required(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_at_least_one_channel_required()
        .await
}

#[then(regex = r#"^I should be notified that ([^"]+) is required$"#)]
async fn element_is_required(world: &mut ChannelsWorld, element: String) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_is_required(&element)
        .await
}

#[then("I should be notified that channel with this code already exists")]
async fn code_already_exists(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_code_already_exists()
        .await
}

#[then("I should be notified that the default locale has to be enabled")]
async fn default_locale_not_enabled(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_default_locale_not_enabled()
        .await
}

#[then("I should be notified that it cannot be deleted")]
async fn cannot_be_deleted(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_cannot_be_deleted()
        .await
}

#[then(regex = r"^I should be notified that it has been successfully (created|edited|deleted)$")]
async fn successfully(world: &mut ChannelsWorld, action: String) -> Result<()> {
    let context = world.context().await?;
    match action.as_str() {
        "created" => context.should_be_notified_created().await,
        "edited" => context.should_be_notified_updated().await,
        _ => context.should_be_notified_deleted().await,
    }
}

#[then("I should be notified that they have been successfully deleted")]
async fn bulk_deleted(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .should_be_notified_bulk_deleted()
        .await
}
