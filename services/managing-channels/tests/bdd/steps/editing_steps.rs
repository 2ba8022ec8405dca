//! Steps for the edit channel form

use cucumber::{given, when};
use managing_channels::{ChannelType, Result};

use crate::world::ChannelsWorld;

async fn modify_channel(world: &mut ChannelsWorld, reference: &str) -> Result<()> {
    let channel = world.channel(reference)?;
    world.context().await?.want_to_modify_channel(&channel).await
}

#[given(expr = "I am modifying a channel {string}")]
async fn am_modifying_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    modify_channel(world, &name).await
}

#[when(expr = "I want to modify a channel {string}")]
async fn want_to_modify_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    modify_channel(world, &name).await
}

#[when(regex = r"^I want to modify (this channel)$")]
async fn want_to_modify_this_channel(world: &mut ChannelsWorld, reference: String) -> Result<()> {
    modify_channel(world, &reference).await
}

#[when("I enable it")]
async fn enable_it(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.enable_it().await
}

#[when("I disable it")]
async fn disable_it(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.disable_it().await
}

#[when(regex = r"^I (?:try to )?save my changes$")]
async fn save_my_changes(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.save_my_changes().await
}

#[when(regex = r"^I change its type to (mobile|website|pos)$")]
async fn change_type(world: &mut ChannelsWorld, channel_type: String) -> Result<()> {
    let channel_type: ChannelType = channel_type.parse()?;
    world.context().await?.change_type(channel_type).await
}

#[when(regex = r#"^I make it available (?:only )?in "([^"]+)"$"#)]
async fn make_it_available_in(world: &mut ChannelsWorld, locale: String) -> Result<()> {
    world.context().await?.make_it_available_in(&locale).await
}

#[when(expr = "I allow for paying in {string}")]
async fn allow_for_paying_in(world: &mut ChannelsWorld, currency: String) -> Result<()> {
    world.context().await?.allow_for_paying_in(&currency).await
}

#[when(expr = "I select the {string} as default tax zone")]
async fn select_default_tax_zone(world: &mut ChannelsWorld, zone: String) -> Result<()> {
    world.context().await?.select_default_tax_zone(&zone).await
}

#[when("I remove its default tax zone")]
async fn remove_default_tax_zone(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.remove_default_tax_zone().await
}

#[when(expr = "I select the {string} as tax calculation strategy")]
async fn select_tax_calculation_strategy(world: &mut ChannelsWorld, strategy: String) -> Result<()> {
    world
        .context()
        .await?
        .select_tax_calculation_strategy(&strategy)
        .await
}
