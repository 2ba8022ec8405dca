//! Store setup steps

use cucumber::given;
use managing_channels::Result;

use crate::world::ChannelsWorld;

#[given("I am logged in as an administrator")]
async fn logged_in_as_administrator(world: &mut ChannelsWorld) -> Result<()> {
    world.connect().await
}

#[given(expr = "the store operates on a channel named {string}")]
async fn store_operates_on_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    let channel = world.setup().await?.create_channel(&name, None).await?;
    world.storage.add(channel);
    Ok(())
}

#[given(expr = "the store operates on another channel named {string}")]
async fn store_operates_on_another_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    store_operates_on_channel(world, name).await
}

#[given(expr = "the store operates on a channel named {string} in {string} currency")]
async fn store_operates_on_channel_in_currency(
    world: &mut ChannelsWorld,
    name: String,
    currency: String,
) -> Result<()> {
    let channel = world
        .setup()
        .await?
        .create_channel(&name, Some(&currency))
        .await?;
    world.storage.add(channel);
    Ok(())
}

#[given(expr = "the channel {string} has been disabled")]
async fn channel_has_been_disabled(world: &mut ChannelsWorld, name: String) -> Result<()> {
    let channel = world.channel(&name)?;
    world.setup().await?.disable_channel(&channel).await
}
