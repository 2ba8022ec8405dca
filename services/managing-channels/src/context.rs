//! Step definitions for managing channels
//!
//! Each public method backs one scenario step and performs exactly one action
//! or one assertion through the channel page objects. Channel references are
//! resolved by the caller; optional captures arrive as `None` and are cleared
//! the same way an omitted value would be.

use admin_ui::inflector::name_to_code;
use admin_ui::{CurrentPageResolver, IndexPage, NotificationChecker, NotificationType, Page};
use tracing::{debug, info};

use crate::channel::{Channel, ChannelType};
use crate::error::{assert_same, assert_true};
use crate::messages;
use crate::pages::{
    ChannelFormPage, ChannelPages, CreatePage, UpdatePage, COLUMN_CODE, COLUMN_ENABLED,
    COLUMN_NAME,
};

/// Grid column a step refers to by its human name
fn grid_column(element: &str) -> &str {
    match element {
        "name" => COLUMN_NAME,
        other => other,
    }
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

/// Orchestrates the channel screens for scenario steps
#[derive(Debug, Clone)]
pub struct ManagingChannelsContext {
    index_page: IndexPage,
    create_page: CreatePage,
    update_page: UpdatePage,
    resolver: CurrentPageResolver,
    notifications: NotificationChecker,
}

impl ManagingChannelsContext {
    pub fn new(
        index_page: IndexPage,
        create_page: CreatePage,
        update_page: UpdatePage,
        resolver: CurrentPageResolver,
        notifications: NotificationChecker,
    ) -> Self {
        Self {
            index_page,
            create_page,
            update_page,
            resolver,
            notifications,
        }
    }

    pub fn from_pages(
        pages: ChannelPages,
        resolver: CurrentPageResolver,
        notifications: NotificationChecker,
    ) -> Self {
        Self::new(
            pages.index,
            pages.create,
            pages.update,
            resolver,
            notifications,
        )
    }

    /// End the driver session shared by the channel screens
    pub async fn close(&self) -> crate::Result<()> {
        debug!("Closing the admin session");
        Ok(self.index_page.driver().close().await?)
    }

    /// Whichever of the create and update screens is rendered
    async fn current_form_page(&self) -> crate::Result<&dyn ChannelFormPage> {
        let candidates: [&dyn ChannelFormPage; 2] = [&self.create_page, &self.update_page];
        Ok(self.resolver.current_page_with_form(&candidates).await?)
    }

    // Creating

    pub async fn want_to_create_new_channel(&self) -> crate::Result<()> {
        info!("Opening the new channel form");
        Ok(self.create_page.open(&[]).await?)
    }

    pub async fn specify_code(&self, code: Option<&str>) -> crate::Result<()> {
        Ok(self.create_page.specify_code(code.unwrap_or_default()).await?)
    }

    pub async fn name_it(&self, name: Option<&str>) -> crate::Result<()> {
        Ok(self.create_page.name_it(name.unwrap_or_default()).await?)
    }

    pub async fn choose_base_currency(&self, currency: Option<&str>) -> crate::Result<()> {
        Ok(self
            .create_page
            .choose_base_currency(currency.unwrap_or_default())
            .await?)
    }

    pub async fn choose_default_locale(&self, locale: Option<&str>) -> crate::Result<()> {
        Ok(self
            .create_page
            .choose_default_locale(locale.unwrap_or_default())
            .await?)
    }

    pub async fn allow_to_skip_shipping_step(&self) -> crate::Result<()> {
        Ok(self.create_page.allow_to_skip_shipping_step().await?)
    }

    pub async fn allow_to_skip_payment_step(&self) -> crate::Result<()> {
        Ok(self.create_page.allow_to_skip_payment_step().await?)
    }

    pub async fn describe_it_as(&self, description: &str) -> crate::Result<()> {
        Ok(self.create_page.describe_it_as(description).await?)
    }

    pub async fn set_hostname(&self, hostname: &str) -> crate::Result<()> {
        Ok(self.create_page.set_hostname(hostname).await?)
    }

    pub async fn set_contact_email(&self, email: &str) -> crate::Result<()> {
        Ok(self.create_page.set_contact_email(email).await?)
    }

    pub async fn define_color(&self, color: &str) -> crate::Result<()> {
        Ok(self.create_page.define_color(color).await?)
    }

    pub async fn define_type(&self, channel_type: ChannelType) -> crate::Result<()> {
        Ok(self.create_page.set_type(channel_type).await?)
    }

    pub async fn add_it(&self) -> crate::Result<()> {
        info!("Submitting the new channel form");
        Ok(self.create_page.create().await?)
    }

    /// Channel shown by the update screen, if that screen is rendered
    pub async fn channel_on_screen(&self) -> crate::Result<Option<Channel>> {
        let Some(id) = self.update_page.current_id().await? else {
            return Ok(None);
        };
        let form = self.update_page.form();
        Ok(Some(Channel {
            id,
            code: form.value("code").await?,
            name: form.value("name").await?,
        }))
    }

    // Editing

    pub async fn want_to_modify_channel(&self, channel: &Channel) -> crate::Result<()> {
        info!("Opening channel {} for editing", channel.name);
        Ok(self.update_page.open_channel(channel.id).await?)
    }

    pub async fn enable_it(&self) -> crate::Result<()> {
        Ok(self.update_page.enable().await?)
    }

    pub async fn disable_it(&self) -> crate::Result<()> {
        Ok(self.current_form_page().await?.disable().await?)
    }

    pub async fn save_my_changes(&self) -> crate::Result<()> {
        info!("Saving channel changes");
        Ok(self.update_page.save_changes().await?)
    }

    pub async fn change_type(&self, channel_type: ChannelType) -> crate::Result<()> {
        Ok(self.update_page.change_type(channel_type).await?)
    }

    pub async fn make_it_available_in(&self, locale: &str) -> crate::Result<()> {
        Ok(self.current_form_page().await?.choose_locale(locale).await?)
    }

    pub async fn allow_for_paying_in(&self, currency: &str) -> crate::Result<()> {
        Ok(self
            .current_form_page()
            .await?
            .choose_currency(currency)
            .await?)
    }

    pub async fn select_default_tax_zone(&self, zone: &str) -> crate::Result<()> {
        Ok(self
            .current_form_page()
            .await?
            .choose_default_tax_zone(zone)
            .await?)
    }

    pub async fn remove_default_tax_zone(&self) -> crate::Result<()> {
        Ok(self.update_page.choose_default_tax_zone("").await?)
    }

    pub async fn select_tax_calculation_strategy(&self, strategy: &str) -> crate::Result<()> {
        Ok(self
            .current_form_page()
            .await?
            .choose_tax_calculation_strategy(strategy)
            .await?)
    }

    // Browsing and deleting

    pub async fn want_to_browse_channels(&self) -> crate::Result<()> {
        Ok(self.index_page.open(&[]).await?)
    }

    pub async fn check_channel(&self, name: &str) -> crate::Result<()> {
        Ok(self
            .index_page
            .check_resource_on_page(&[(COLUMN_NAME, name)])
            .await?)
    }

    pub async fn delete_them(&self) -> crate::Result<()> {
        info!("Deleting checked channels");
        Ok(self.index_page.bulk_delete().await?)
    }

    pub async fn delete_channel(&self, channel: &Channel) -> crate::Result<()> {
        info!("Deleting channel {}", channel.name);
        self.want_to_browse_channels().await?;
        Ok(self
            .index_page
            .delete_resource_on_page(&[(COLUMN_NAME, channel.name.as_str())])
            .await?)
    }

    // Registry assertions

    pub async fn channel_should_appear_in_registry(&self, name: &str) -> crate::Result<()> {
        self.want_to_browse_channels().await?;
        assert_true(
            self.index_page
                .is_single_resource_on_page(&[(COLUMN_NAME, name)])
                .await?,
            format!("channel \"{}\" should be listed exactly once", name),
        )
    }

    pub async fn this_channel_should_appear_in_registry(&self, channel: &Channel) -> crate::Result<()> {
        self.channel_should_appear_in_registry(&channel.name).await
    }

    pub async fn channel_with_should_not_be_added(
        &self,
        element: &str,
        value: &str,
    ) -> crate::Result<()> {
        self.want_to_browse_channels().await?;
        assert_true(
            !self
                .index_page
                .is_single_resource_on_page(&[(grid_column(element), value)])
                .await?,
            format!("channel with {} \"{}\" should not have been added", element, value),
        )
    }

    pub async fn there_should_still_be_only_one_channel_with(
        &self,
        element: &str,
        value: &str,
    ) -> crate::Result<()> {
        self.want_to_browse_channels().await?;
        assert_true(
            self.index_page
                .is_single_resource_on_page(&[(grid_column(element), value)])
                .await?,
            format!("there should be exactly one channel with {} \"{}\"", element, value),
        )
    }

    pub async fn this_channel_name_should_be(
        &self,
        channel: &Channel,
        name: &str,
    ) -> crate::Result<()> {
        self.want_to_browse_channels().await?;
        assert_true(
            self.index_page
                .is_single_resource_on_page(&[
                    (COLUMN_CODE, channel.code.as_str()),
                    (COLUMN_NAME, name),
                ])
                .await?,
            format!("channel {} should be named \"{}\"", channel.code, name),
        )
    }

    pub async fn should_see_channels_in_list(&self, count: usize) -> crate::Result<()> {
        assert_same(self.index_page.count_items().await?, count)
    }

    pub async fn assert_channel_state(&self, channel: &Channel, enabled: bool) -> crate::Result<()> {
        self.want_to_browse_channels().await?;
        let state = enabled_label(enabled);
        debug!("Expecting channel {} to be {}", channel.name, state);
        assert_true(
            self.index_page
                .is_single_resource_on_page(&[
                    (COLUMN_NAME, channel.name.as_str()),
                    (COLUMN_ENABLED, state),
                ])
                .await?,
            format!("channel \"{}\" should be {}", channel.name, state.to_lowercase()),
        )
    }

    /// Reads the index as rendered, without reopening it
    pub async fn channel_should_no_longer_exist(&self, name: &str) -> crate::Result<()> {
        assert_true(
            !self
                .index_page
                .is_single_resource_on_page(&[(COLUMN_NAME, name)])
                .await?,
            format!("channel \"{}\" should no longer exist", name),
        )
    }

    // Form state assertions

    pub async fn code_field_should_be_disabled(&self) -> crate::Result<()> {
        assert_true(
            self.update_page.is_code_disabled().await?,
            "code field should be disabled",
        )
    }

    pub async fn base_currency_field_should_be_disabled(&self) -> crate::Result<()> {
        assert_true(
            self.update_page.is_base_currency_disabled().await?,
            "base currency field should be disabled",
        )
    }

    pub async fn channel_should_be_available_in(
        &self,
        channel: &Channel,
        locale: &str,
    ) -> crate::Result<()> {
        self.update_page.open_channel(channel.id).await?;
        assert_true(
            self.update_page.is_locale_chosen(locale).await?,
            format!("channel \"{}\" should be available in {}", channel.name, locale),
        )
    }

    pub async fn paying_in_should_be_possible(
        &self,
        currency: &str,
        channel: &Channel,
    ) -> crate::Result<()> {
        self.update_page.open_channel(channel.id).await?;
        assert_true(
            self.update_page.is_currency_chosen(currency).await?,
            format!("channel \"{}\" should accept {}", channel.name, currency),
        )
    }

    pub async fn default_tax_zone_should_be(
        &self,
        channel: &Channel,
        zone: &str,
    ) -> crate::Result<()> {
        self.update_page.open_channel(channel.id).await?;
        assert_true(
            self.update_page.is_default_tax_zone_chosen(zone).await?,
            format!("default tax zone of \"{}\" should be {}", channel.name, zone),
        )
    }

    pub async fn channel_should_not_have_default_tax_zone(
        &self,
        channel: &Channel,
    ) -> crate::Result<()> {
        self.update_page.open_channel(channel.id).await?;
        assert_true(
            !self.update_page.is_any_default_tax_zone_chosen().await?,
            format!("channel \"{}\" should have no default tax zone", channel.name),
        )
    }

    pub async fn tax_calculation_strategy_should_be(
        &self,
        channel: &Channel,
        strategy: &str,
    ) -> crate::Result<()> {
        self.update_page.open_channel(channel.id).await?;
        assert_true(
            self.update_page
                .is_tax_calculation_strategy_chosen(strategy)
                .await?,
            format!(
                "tax calculation strategy of \"{}\" should be {}",
                channel.name, strategy
            ),
        )
    }

    pub async fn channel_type_should_be(&self, channel_type: ChannelType) -> crate::Result<()> {
        assert_same(self.update_page.get_type().await?.as_str(), channel_type.as_str())
    }

    // Validation and notifications

    pub async fn should_be_notified_at_least_one_channel_required(&self) -> crate::Result<()> {
        let message = self
            .current_form_page()
            .await?
            .validation_message("enabled")
            .await?;
        assert_same(message.as_str(), messages::AT_LEAST_ONE_ENABLED)
    }

    /// `element` is the human field name, e.g. "base currency"
    pub async fn should_be_notified_is_required(&self, element: &str) -> crate::Result<()> {
        let message = self
            .current_form_page()
            .await?
            .validation_message(&name_to_code(element))
            .await?;
        assert_same(message, messages::required(element))
    }

    pub async fn should_be_notified_code_already_exists(&self) -> crate::Result<()> {
        let message = self.create_page.validation_message("code").await?;
        assert_same(message.as_str(), messages::CODE_NOT_UNIQUE)
    }

    pub async fn should_be_notified_default_locale_not_enabled(&self) -> crate::Result<()> {
        let message = self.update_page.validation_message("default_locale").await?;
        assert_same(message.as_str(), messages::DEFAULT_LOCALE_NOT_ENABLED)
    }

    pub async fn should_be_notified_cannot_be_deleted(&self) -> crate::Result<()> {
        Ok(self
            .notifications
            .check_notification(messages::CANNOT_DELETE, NotificationType::Failure)
            .await?)
    }

    pub async fn should_be_notified_created(&self) -> crate::Result<()> {
        self.success(messages::CREATED).await
    }

    pub async fn should_be_notified_updated(&self) -> crate::Result<()> {
        self.success(messages::UPDATED).await
    }

    pub async fn should_be_notified_deleted(&self) -> crate::Result<()> {
        self.success(messages::DELETED).await
    }

    pub async fn should_be_notified_bulk_deleted(&self) -> crate::Result<()> {
        self.success(messages::BULK_DELETED).await
    }

    async fn success(&self, message: &str) -> crate::Result<()> {
        Ok(self
            .notifications
            .check_notification(message, NotificationType::Success)
            .await?)
    }
}
