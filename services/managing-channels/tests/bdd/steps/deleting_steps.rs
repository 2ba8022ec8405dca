//! Steps for deleting channels

use cucumber::{then, when};
use managing_channels::Result;

use crate::world::ChannelsWorld;

#[when(expr = "I delete channel {string}")]
async fn delete_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    let channel = world.channel(&name)?;
    world.context().await?.delete_channel(&channel).await
}

#[when(regex = r#"^I check (?:also )?the "([^"]+)" channel$"#)]
async fn check_channel(world: &mut ChannelsWorld, name: String) -> Result<()> {
    world.context().await?.check_channel(&name).await
}

#[when("I delete them")]
async fn delete_them(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.delete_them().await
}

#[then(expr = "the {string} channel should no longer exist in the registry")]
async fn channel_should_no_longer_exist(world: &mut ChannelsWorld, name: String) -> Result<()> {
    world.context().await?.channel_should_no_longer_exist(&name).await
}
