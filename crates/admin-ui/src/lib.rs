//! Admin UI automation
//!
//! Page objects, current-page resolution and notification checks for
//! acceptance tests of a CRUD admin panel. Everything reaches the screen
//! through the [`UiDriver`] trait, so the same page objects run against a
//! real browser ([`WebDriverUi`]) or an in-process test double.

pub mod driver;
pub mod error;
pub mod form;
pub mod index;
pub mod inflector;
pub mod locator;
pub mod notification;
pub mod page;
pub mod resolver;
pub mod route;
pub mod webdriver;

pub use driver::{GridRow, SelectOption, UiDriver};
pub use error::{AdminUiError, Result};
pub use form::{Choice, FieldKind, FormField, FormSchema};
pub use index::IndexPage;
pub use locator::Locator;
pub use notification::{NotificationChecker, NotificationType};
pub use page::Page;
pub use resolver::CurrentPageResolver;
pub use route::Route;
pub use webdriver::WebDriverUi;
