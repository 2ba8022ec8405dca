//! Page objects for the channel screens

use std::sync::Arc;

use admin_ui::{AdminUiError, FormSchema, IndexPage, Locator, Page, Route, SelectOption, UiDriver};
use async_trait::async_trait;
use tracing::debug;

use crate::channel::ChannelType;
use crate::config::AdminConfig;
use crate::form::channel_form_schema;

/// Grid column holding the channel code
pub const COLUMN_CODE: &str = "code";
/// Grid column holding the name with the description below it
pub const COLUMN_NAME: &str = "nameAndDescription";
/// Grid column reading "Enabled" or "Disabled"
pub const COLUMN_ENABLED: &str = "enabled";

pub const CREATE_BUTTON: &str = "Create";
pub const SAVE_BUTTON: &str = "Save changes";

/// Controls of the channel form, addressed by schema key
#[derive(Debug, Clone)]
pub struct ChannelForm {
    schema: FormSchema,
    driver: Arc<dyn UiDriver>,
}

impl ChannelForm {
    pub fn new(driver: Arc<dyn UiDriver>) -> Self {
        Self {
            schema: channel_form_schema(),
            driver,
        }
    }

    fn control_id(&self, key: &str) -> admin_ui::Result<String> {
        self.schema
            .control_id(key)
            .ok_or_else(|| AdminUiError::ElementNotFound(format!("channel form field '{}'", key)))
    }

    fn control(&self, key: &str) -> admin_ui::Result<Locator> {
        Ok(Locator::Field(self.control_id(key)?))
    }

    pub async fn fill(&self, key: &str, value: &str) -> admin_ui::Result<()> {
        self.driver.fill(&self.control(key)?, value).await
    }

    pub async fn select(&self, key: &str, option: &str) -> admin_ui::Result<()> {
        self.driver.select_option(&self.control(key)?, option).await
    }

    pub async fn add(&self, key: &str, option: &str) -> admin_ui::Result<()> {
        self.driver.add_option(&self.control(key)?, option).await
    }

    pub async fn set_checked(&self, key: &str, checked: bool) -> admin_ui::Result<()> {
        self.driver.set_checked(&self.control(key)?, checked).await
    }

    pub async fn value(&self, key: &str) -> admin_ui::Result<String> {
        self.driver.value(&self.control(key)?).await
    }

    pub async fn selected(&self, key: &str) -> admin_ui::Result<Vec<SelectOption>> {
        self.driver.selected_options(&self.control(key)?).await
    }

    pub async fn is_disabled(&self, key: &str) -> admin_ui::Result<bool> {
        self.driver.is_disabled(&self.control(key)?).await
    }

    pub async fn is_chosen(&self, key: &str, option: &str) -> admin_ui::Result<bool> {
        Ok(self.selected(key).await?.iter().any(|o| o.matches(option)))
    }

    /// Validation error rendered for `key`; a missing message is an error
    pub async fn validation_message(&self, key: &str) -> admin_ui::Result<String> {
        let locator = Locator::ValidationError(self.control_id(key)?);
        if !self.driver.is_present(&locator).await? {
            return Err(AdminUiError::ElementNotFound(locator.to_string()));
        }
        Ok(self.driver.text(&locator).await?.trim().to_string())
    }

    pub async fn submit(&self, button: &str) -> admin_ui::Result<()> {
        debug!("Submitting channel form with \"{}\"", button);
        self.driver.click(&Locator::button(button)).await
    }
}

/// Capabilities shared by the create and update screens
#[async_trait]
pub trait ChannelFormPage: Page {
    fn form(&self) -> &ChannelForm;

    async fn name_it(&self, name: &str) -> admin_ui::Result<()> {
        self.form().fill("name", name).await
    }

    async fn describe_it_as(&self, description: &str) -> admin_ui::Result<()> {
        self.form().fill("description", description).await
    }

    async fn set_hostname(&self, hostname: &str) -> admin_ui::Result<()> {
        self.form().fill("hostname", hostname).await
    }

    async fn set_contact_email(&self, email: &str) -> admin_ui::Result<()> {
        self.form().fill("contact_email", email).await
    }

    async fn define_color(&self, color: &str) -> admin_ui::Result<()> {
        self.form().fill("color", color).await
    }

    async fn set_type(&self, channel_type: ChannelType) -> admin_ui::Result<()> {
        self.form().select("type", channel_type.as_str()).await
    }

    async fn choose_base_currency(&self, currency: &str) -> admin_ui::Result<()> {
        self.form().select("base_currency", currency).await
    }

    async fn choose_default_locale(&self, locale: &str) -> admin_ui::Result<()> {
        self.form().select("default_locale", locale).await
    }

    async fn choose_locale(&self, locale: &str) -> admin_ui::Result<()> {
        self.form().add("locales", locale).await
    }

    async fn choose_currency(&self, currency: &str) -> admin_ui::Result<()> {
        self.form().add("currencies", currency).await
    }

    async fn choose_default_tax_zone(&self, zone: &str) -> admin_ui::Result<()> {
        self.form().select("default_tax_zone", zone).await
    }

    async fn choose_tax_calculation_strategy(&self, strategy: &str) -> admin_ui::Result<()> {
        self.form()
            .select("tax_calculation_strategy", strategy)
            .await
    }

    async fn allow_to_skip_shipping_step(&self) -> admin_ui::Result<()> {
        self.form()
            .set_checked("skipping_shipping_step_allowed", true)
            .await
    }

    async fn allow_to_skip_payment_step(&self) -> admin_ui::Result<()> {
        self.form()
            .set_checked("skipping_payment_step_allowed", true)
            .await
    }

    async fn enable(&self) -> admin_ui::Result<()> {
        self.form().set_checked("enabled", true).await
    }

    async fn disable(&self) -> admin_ui::Result<()> {
        self.form().set_checked("enabled", false).await
    }

    async fn validation_message(&self, key: &str) -> admin_ui::Result<String> {
        self.form().validation_message(key).await
    }
}

/// "New channel" screen
#[derive(Debug, Clone)]
pub struct CreatePage {
    route: Route,
    form: ChannelForm,
}

impl CreatePage {
    pub fn new(route: Route, driver: Arc<dyn UiDriver>) -> Self {
        Self {
            route,
            form: ChannelForm::new(driver),
        }
    }

    pub async fn specify_code(&self, code: &str) -> admin_ui::Result<()> {
        self.form.fill("code", code).await
    }

    pub async fn create(&self) -> admin_ui::Result<()> {
        self.form.submit(CREATE_BUTTON).await
    }
}

#[async_trait]
impl Page for CreatePage {
    fn name(&self) -> &str {
        "channel create page"
    }

    fn route(&self) -> &Route {
        &self.route
    }

    fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.form.driver
    }
}

#[async_trait]
impl ChannelFormPage for CreatePage {
    fn form(&self) -> &ChannelForm {
        &self.form
    }
}

/// "Edit channel" screen
#[derive(Debug, Clone)]
pub struct UpdatePage {
    route: Route,
    form: ChannelForm,
}

impl UpdatePage {
    pub fn new(route: Route, driver: Arc<dyn UiDriver>) -> Self {
        Self {
            route,
            form: ChannelForm::new(driver),
        }
    }

    /// Open the edit screen of the channel with `id`
    pub async fn open_channel(&self, id: u64) -> admin_ui::Result<()> {
        let id = id.to_string();
        self.open(&[("id", id.as_str())]).await
    }

    /// Id of the channel being edited, if this page is open
    pub async fn current_id(&self) -> admin_ui::Result<Option<u64>> {
        let path = self.driver().current_path().await?;
        Ok(self
            .route
            .param(&path, "id")
            .and_then(|id| id.parse().ok()))
    }

    pub async fn save_changes(&self) -> admin_ui::Result<()> {
        self.form.submit(SAVE_BUTTON).await
    }

    pub async fn change_type(&self, channel_type: ChannelType) -> admin_ui::Result<()> {
        self.set_type(channel_type).await
    }

    /// Value of the type select box, empty when none is chosen
    pub async fn get_type(&self) -> admin_ui::Result<String> {
        self.form.value("type").await
    }

    pub async fn is_code_disabled(&self) -> admin_ui::Result<bool> {
        self.form.is_disabled("code").await
    }

    pub async fn is_base_currency_disabled(&self) -> admin_ui::Result<bool> {
        self.form.is_disabled("base_currency").await
    }

    pub async fn is_locale_chosen(&self, locale: &str) -> admin_ui::Result<bool> {
        self.form.is_chosen("locales", locale).await
    }

    pub async fn is_currency_chosen(&self, currency: &str) -> admin_ui::Result<bool> {
        self.form.is_chosen("currencies", currency).await
    }

    pub async fn is_default_tax_zone_chosen(&self, zone: &str) -> admin_ui::Result<bool> {
        self.form.is_chosen("default_tax_zone", zone).await
    }

    pub async fn is_any_default_tax_zone_chosen(&self) -> admin_ui::Result<bool> {
        Ok(!self.form.selected("default_tax_zone").await?.is_empty())
    }

    pub async fn is_tax_calculation_strategy_chosen(&self, strategy: &str) -> admin_ui::Result<bool> {
        self.form
            .is_chosen("tax_calculation_strategy", strategy)
            .await
    }
}

#[async_trait]
impl Page for UpdatePage {
    fn name(&self) -> &str {
        "channel update page"
    }

    fn route(&self) -> &Route {
        &self.route
    }

    fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.form.driver
    }
}

#[async_trait]
impl ChannelFormPage for UpdatePage {
    fn form(&self) -> &ChannelForm {
        &self.form
    }
}

/// The three channel screens, sharing one driver
#[derive(Debug, Clone)]
pub struct ChannelPages {
    pub index: IndexPage,
    pub create: CreatePage,
    pub update: UpdatePage,
}

impl ChannelPages {
    pub fn new(admin: &AdminConfig, driver: Arc<dyn UiDriver>) -> Self {
        Self {
            index: IndexPage::new(
                "channel index page",
                Route::new(admin.index_route()),
                Arc::clone(&driver),
            ),
            create: CreatePage::new(Route::new(admin.create_route()), Arc::clone(&driver)),
            update: UpdatePage::new(Route::new(admin.update_route()), driver),
        }
    }
}
