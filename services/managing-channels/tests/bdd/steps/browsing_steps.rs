//! Steps that read the channel index and the edit form

use cucumber::{then, when};
use managing_channels::{ChannelType, Result};

use crate::world::ChannelsWorld;

#[when(regex = r"^I (?:want to )?browse channels$")]
async fn browse_channels(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.want_to_browse_channels().await
}

#[then(expr = "I should see the channel {string} in the list")]
async fn should_see_channel_in_list(world: &mut ChannelsWorld, name: String) -> Result<()> {
    world
        .context()
        .await?
        .channel_should_appear_in_registry(&name)
        .await
}

#[then(regex = r#"^the channel "([^"]+)" should (?:appear|be) in the registry$"#)]
async fn channel_should_appear_in_registry(world: &mut ChannelsWorld, name: String) -> Result<()> {
    world
        .context()
        .await?
        .channel_should_appear_in_registry(&name)
        .await
}

#[then(regex = r"^(this channel) should still be in the registry$")]
async fn this_channel_should_still_be_in_registry(
    world: &mut ChannelsWorld,
    reference: String,
) -> Result<()> {
    let channel = world.channel(&reference)?;
    world
        .context()
        .await?
        .this_channel_should_appear_in_registry(&channel)
        .await
}

#[then(expr = "channel with {word} {string} should not be added")]
async fn channel_with_should_not_be_added(
    world: &mut ChannelsWorld,
    element: String,
    value: String,
) -> Result<()> {
    world
        .context()
        .await?
        .channel_with_should_not_be_added(&element, &value)
        .await
}

#[then(expr = "there should still be only one channel with {word} {string}")]
async fn only_one_channel_with(
    world: &mut ChannelsWorld,
    element: String,
    value: String,
) -> Result<()> {
    world
        .context()
        .await?
        .there_should_still_be_only_one_channel_with(&element, &value)
        .await
}

#[then(regex = r#"^(this channel) (?:name should be|should still be named) "([^"]+)"$"#)]
async fn this_channel_name_should_be(
    world: &mut ChannelsWorld,
    reference: String,
    name: String,
) -> Result<()> {
    let channel = world.channel(&reference)?;
    world
        .context()
        .await?
        .this_channel_name_should_be(&channel, &name)
        .await
}

#[then("I should see a single channel in the list")]
async fn should_see_single_channel(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.should_see_channels_in_list(1).await
}

#[then(expr = "I should see {int} channels in the list")]
async fn should_see_channels(world: &mut ChannelsWorld, count: usize) -> Result<()> {
    world.context().await?.should_see_channels_in_list(count).await
}

#[then(regex = r"^(this channel) should be (enabled|disabled)$")]
async fn this_channel_state(
    world: &mut ChannelsWorld,
    reference: String,
    state: String,
) -> Result<()> {
    let channel = world.channel(&reference)?;
    world
        .context()
        .await?
        .assert_channel_state(&channel, state == "enabled")
        .await
}

#[then(expr = "channel with name {string} should still be enabled")]
async fn channel_should_still_be_enabled(world: &mut ChannelsWorld, name: String) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .assert_channel_state(&channel, true)
        .await
}

#[then("the code field should be disabled")]
async fn code_field_should_be_disabled(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.code_field_should_be_disabled().await
}

#[then("the base currency field should be disabled")]
async fn base_currency_field_should_be_disabled(world: &mut ChannelsWorld) -> Result<()> {
    world
        .context()
        .await?
        .base_currency_field_should_be_disabled()
        .await
}

#[then(expr = "the channel {string} should be available in {string}")]
async fn channel_should_be_available_in(
    world: &mut ChannelsWorld,
    name: String,
    locale: String,
) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .channel_should_be_available_in(&channel, &locale)
        .await
}

#[then(expr = "paying in {string} should be possible for the {string} channel")]
async fn paying_in_should_be_possible(
    world: &mut ChannelsWorld,
    currency: String,
    name: String,
) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .paying_in_should_be_possible(&currency, &channel)
        .await
}

#[then(expr = "the default tax zone for the {string} channel should be {string}")]
async fn default_tax_zone_should_be(
    world: &mut ChannelsWorld,
    name: String,
    zone: String,
) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .default_tax_zone_should_be(&channel, &zone)
        .await
}

#[then(expr = "channel {string} should not have default tax zone")]
async fn channel_should_not_have_default_tax_zone(
    world: &mut ChannelsWorld,
    name: String,
) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .channel_should_not_have_default_tax_zone(&channel)
        .await
}

#[then(expr = "the tax calculation strategy for the {string} channel should be {string}")]
async fn tax_calculation_strategy_should_be(
    world: &mut ChannelsWorld,
    name: String,
    strategy: String,
) -> Result<()> {
    let channel = world.channel(&name)?;
    world
        .context()
        .await?
        .tax_calculation_strategy_should_be(&channel, &strategy)
        .await
}

#[then(regex = r"^this channel type should be (mobile|website|pos)$")]
async fn channel_type_should_be(world: &mut ChannelsWorld, channel_type: String) -> Result<()> {
    let channel_type: ChannelType = channel_type.parse()?;
    world.context().await?.channel_type_should_be(channel_type).await
}
