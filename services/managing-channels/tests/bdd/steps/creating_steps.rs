//! Steps for the new channel form

use cucumber::{given, when};
use managing_channels::{ChannelType, Result};

use crate::world::ChannelsWorld;

#[given("I want to create a new channel")]
async fn want_to_create_new_channel(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.want_to_create_new_channel().await
}

#[when(expr = "I specify its code as {string}")]
async fn specify_code(world: &mut ChannelsWorld, code: String) -> Result<()> {
    world.context().await?.specify_code(Some(&code)).await
}

#[when("I do not specify its code")]
async fn do_not_specify_code(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.specify_code(None).await
}

#[when(regex = r#"^I (?:name it|rename it to) "([^"]*)"$"#)]
async fn name_it(world: &mut ChannelsWorld, name: String) -> Result<()> {
    world.context().await?.name_it(Some(&name)).await
}

#[when(regex = r"^I (?:do not name it|remove its name)$")]
async fn do_not_name_it(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.name_it(None).await
}

#[when(expr = "I choose {string} as the base currency")]
async fn choose_base_currency(world: &mut ChannelsWorld, currency: String) -> Result<()> {
    world
        .context()
        .await?
        .choose_base_currency(Some(&currency))
        .await
}

#[when("I do not choose base currency")]
async fn do_not_choose_base_currency(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.choose_base_currency(None).await
}

#[when(expr = "I choose {string} as a default locale")]
async fn choose_default_locale(world: &mut ChannelsWorld, locale: String) -> Result<()> {
    world
        .context()
        .await?
        .choose_default_locale(Some(&locale))
        .await
}

#[when("I do not choose default locale")]
async fn do_not_choose_default_locale(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.choose_default_locale(None).await
}

#[when(expr = "I describe it as {string}")]
async fn describe_it_as(world: &mut ChannelsWorld, description: String) -> Result<()> {
    world.context().await?.describe_it_as(&description).await
}

#[when(expr = "I set its hostname as {string}")]
async fn set_hostname(world: &mut ChannelsWorld, hostname: String) -> Result<()> {
    world.context().await?.set_hostname(&hostname).await
}

#[when(expr = "I set its contact email as {string}")]
async fn set_contact_email(world: &mut ChannelsWorld, email: String) -> Result<()> {
    world.context().await?.set_contact_email(&email).await
}

#[when(expr = "I define its color as {string}")]
async fn define_color(world: &mut ChannelsWorld, color: String) -> Result<()> {
    world.context().await?.define_color(&color).await
}

#[when(regex = r"^I define its type as (mobile|website|pos)$")]
async fn define_type(world: &mut ChannelsWorld, channel_type: String) -> Result<()> {
    let channel_type: ChannelType = channel_type.parse()?;
    world.context().await?.define_type(channel_type).await
}

#[when("I allow to skip shipping step if only one shipping method is available")]
async fn allow_to_skip_shipping_step(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.allow_to_skip_shipping_step().await
}

#[when("I allow to skip payment step if only one payment method is available")]
async fn allow_to_skip_payment_step(world: &mut ChannelsWorld) -> Result<()> {
    world.context().await?.allow_to_skip_payment_step().await
}

#[when(regex = r"^I (?:try to )?add it$")]
async fn add_it(world: &mut ChannelsWorld) -> Result<()> {
    let context = world.context().await?;
    context.add_it().await?;
    let created = context.channel_on_screen().await?;
    // a created channel becomes "this channel"
    if let Some(channel) = created {
        world.storage.add(channel);
    }
    Ok(())
}
