//! Managing Channels
//!
//! Step definitions and page objects for the channel screens of the admin
//! panel. Steps talk to the create, update and index page objects, which reach
//! the screen through a [`UiDriver`]: a real browser over WebDriver, or the
//! in-memory admin panel behind the `mock` feature.

pub mod channel;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod messages;
#[cfg(feature = "mock")]
pub mod mock;
pub mod pages;
pub mod setup;
pub mod storage;

pub use channel::{Channel, ChannelType};
pub use config::{load_config, AdminConfig, Config, DriverConfig, SetupConfig};
pub use context::ManagingChannelsContext;
pub use error::{Result, StepError};
pub use pages::{ChannelFormPage, ChannelPages, CreatePage, UpdatePage};
pub use setup::StoreSetup;
pub use storage::SharedStorage;

#[cfg(feature = "mock")]
pub use mock::MockAdmin;

use std::sync::Arc;

use admin_ui::{CurrentPageResolver, NotificationChecker, UiDriver, WebDriverUi};
use tracing::info;

/// Build the UI driver selected by the configuration
pub async fn connect(config: &Config) -> Result<Arc<dyn UiDriver>> {
    info!("Connecting {} driver", config.driver.type_name());
    match &config.driver {
        #[cfg(feature = "mock")]
        DriverConfig::Mock => Ok(Arc::new(MockAdmin::new(&config.admin))),
        #[cfg(not(feature = "mock"))]
        DriverConfig::Mock => Err(StepError::Config(
            "the mock driver requires the `mock` feature".to_string(),
        )),
        DriverConfig::WebDriver { url, headless } => {
            let driver = WebDriverUi::connect(url, &config.admin.base_url, *headless).await?;
            Ok(Arc::new(driver))
        }
    }
}

/// Channel context and store setup sharing one driver
pub fn assemble(config: &Config, driver: Arc<dyn UiDriver>) -> (ManagingChannelsContext, StoreSetup) {
    let pages = ChannelPages::new(&config.admin, Arc::clone(&driver));
    let setup = StoreSetup::new(
        pages.create.clone(),
        pages.update.clone(),
        config.setup.clone(),
    );
    let context = ManagingChannelsContext::from_pages(
        pages,
        CurrentPageResolver::new(),
        NotificationChecker::new(driver),
    );
    (context, setup)
}
