//! Browser-backed driver speaking WebDriver through fantoccini

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use tracing::debug;

use crate::driver::{GridRow, SelectOption, UiDriver};
use crate::error::AdminUiError;
use crate::locator::Locator;

const COLUMN_CLASS_PREFIX: &str = "sylius-table-column-";

/// How a [`Locator`] is looked up in the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
enum Query {
    Css(String),
    XPath(String),
}

impl Query {
    fn as_fantoccini(&self) -> fantoccini::Locator<'_> {
        match self {
            Query::Css(css) => fantoccini::Locator::Css(css),
            Query::XPath(xpath) => fantoccini::Locator::XPath(xpath),
        }
    }
}

fn query(locator: &Locator) -> Query {
    match locator {
        Locator::Field(id) => Query::Css(format!("#{}", id)),
        Locator::ValidationError(id) => Query::XPath(format!(
            "//*[@id={}]/ancestor::*[contains(concat(' ', normalize-space(@class), ' '), ' field ')][1]\
             //*[contains(@class, 'sylius-validation-error')]",
            xpath_literal(id)
        )),
        Locator::Button(label) => Query::XPath(format!(
            "//button[normalize-space(.)={}]",
            xpath_literal(label)
        )),
        Locator::RowCheckbox(row) => Query::Css(format!(
            "table tbody tr:nth-child({}) input.bulk-select-checkbox",
            row + 1
        )),
        Locator::RowButton { row, label } => Query::XPath(format!(
            "(//table/tbody/tr)[{}]//button[normalize-space(.)={}]",
            row + 1,
            xpath_literal(label)
        )),
        Locator::BulkAction(label) => Query::XPath(format!(
            "//*[contains(@class, 'sylius-grid-nav__bulk')]//button[normalize-space(.)={}]",
            xpath_literal(label)
        )),
        Locator::ConfirmButton => Query::Css("#confirmation-button".to_string()),
        Locator::FlashMessage => Query::Css(".sylius-flash-message".to_string()),
        Locator::FlashClose => Query::Css(".sylius-flash-message .close".to_string()),
    }
}

/// Quote a string for use inside an XPath expression
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{}'", value)
    } else if !value.contains('"') {
        format!("\"{}\"", value)
    } else {
        let parts: Vec<String> = value.split('\'').map(|p| format!("'{}'", p)).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

fn option_query(option: &str) -> String {
    let literal = xpath_literal(option);
    format!(
        ".//option[@value={} or normalize-space(.)={}]",
        literal, literal
    )
}

/// Field name from a `sylius-table-column-{field}` header class
fn column_key(classes: &str) -> Option<&str> {
    classes
        .split_whitespace()
        .find_map(|class| class.strip_prefix(COLUMN_CLASS_PREFIX))
        .filter(|field| !field.is_empty())
}

fn cmd_error(locator: &Locator, e: CmdError) -> AdminUiError {
    if e.is_no_such_element() {
        AdminUiError::ElementNotFound(locator.to_string())
    } else {
        AdminUiError::WebDriver(format!("{}: {}", locator, e))
    }
}

/// [`UiDriver`] over a live WebDriver session
#[derive(Debug, Clone)]
pub struct WebDriverUi {
    client: Client,
    base_url: String,
}

impl WebDriverUi {
    /// Open a browser session on the WebDriver server at `webdriver_url`
    pub async fn connect(
        webdriver_url: &str,
        base_url: &str,
        headless: bool,
    ) -> crate::Result<Self> {
        let mut capabilities = Capabilities::new();
        if headless {
            capabilities.insert(
                "goog:chromeOptions".to_string(),
                serde_json::json!({ "args": ["--headless", "--disable-gpu"] }),
            );
            capabilities.insert(
                "moz:firefoxOptions".to_string(),
                serde_json::json!({ "args": ["-headless"] }),
            );
        }

        debug!("Connecting to WebDriver at {}", webdriver_url);
        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(webdriver_url)
            .await
            .map_err(|e| AdminUiError::Session(format!("{}: {}", webdriver_url, e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn find(&self, locator: &Locator) -> crate::Result<Element> {
        let query = query(locator);
        self.client
            .find(query.as_fantoccini())
            .await
            .map_err(|e| cmd_error(locator, e))
    }

    async fn options(&self, locator: &Locator) -> crate::Result<Vec<(Element, SelectOption)>> {
        let select = self.find(locator).await?;
        let elements = select
            .find_all(fantoccini::Locator::Css("option"))
            .await
            .map_err(|e| cmd_error(locator, e))?;

        let mut options = Vec::with_capacity(elements.len());
        for element in elements {
            let value = element
                .attr("value")
                .await
                .map_err(|e| cmd_error(locator, e))?
                .unwrap_or_default();
            let label = element
                .text()
                .await
                .map_err(|e| cmd_error(locator, e))?
                .trim()
                .to_string();
            options.push((element, SelectOption { value, label }));
        }
        Ok(options)
    }

    async fn is_multiple(&self, locator: &Locator) -> crate::Result<bool> {
        let select = self.find(locator).await?;
        let multiple = select
            .attr("multiple")
            .await
            .map_err(|e| cmd_error(locator, e))?;
        Ok(multiple.is_some())
    }
}

#[async_trait]
impl UiDriver for WebDriverUi {
    async fn visit(&self, path: &str) -> crate::Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        self.client
            .goto(&url)
            .await
            .map_err(|e| AdminUiError::WebDriver(format!("GET {} failed: {}", url, e)))
    }

    async fn current_path(&self) -> crate::Result<String> {
        let url = self
            .client
            .current_url()
            .await
            .map_err(|e| AdminUiError::WebDriver(e.to_string()))?;
        Ok(url.path().to_string())
    }

    async fn fill(&self, locator: &Locator, value: &str) -> crate::Result<()> {
        debug!("Filling {} with {:?}", locator, value);
        let element = self.find(locator).await?;
        element.clear().await.map_err(|e| cmd_error(locator, e))?;
        if !value.is_empty() {
            element
                .send_keys(value)
                .await
                .map_err(|e| cmd_error(locator, e))?;
        }
        Ok(())
    }

    async fn select_option(&self, locator: &Locator, option: &str) -> crate::Result<()> {
        debug!("Selecting {:?} in {}", option, locator);
        if self.is_multiple(locator).await? {
            for (element, _) in self.options(locator).await? {
                if element.is_selected().await.map_err(|e| cmd_error(locator, e))? {
                    element.click().await.map_err(|e| cmd_error(locator, e))?;
                }
            }
            if option.is_empty() {
                return Ok(());
            }
        }
        self.add_option(locator, option).await
    }

    async fn add_option(&self, locator: &Locator, option: &str) -> crate::Result<()> {
        let select = self.find(locator).await?;
        let xpath = option_query(option);
        let element = select
            .find(fantoccini::Locator::XPath(&xpath))
            .await
            .map_err(|e| {
                cmd_error(
                    &Locator::Field(format!("{} option {:?}", locator, option)),
                    e,
                )
            })?;
        if !element.is_selected().await.map_err(|e| cmd_error(locator, e))? {
            element.click().await.map_err(|e| cmd_error(locator, e))?;
        }
        Ok(())
    }

    async fn set_checked(&self, locator: &Locator, checked: bool) -> crate::Result<()> {
        debug!("Setting {} to {}", locator, checked);
        let element = self.find(locator).await?;
        if element.is_selected().await.map_err(|e| cmd_error(locator, e))? != checked {
            element.click().await.map_err(|e| cmd_error(locator, e))?;
        }
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> crate::Result<()> {
        debug!("Clicking {}", locator);
        let element = self.find(locator).await?;
        element.click().await.map_err(|e| cmd_error(locator, e))
    }

    async fn is_present(&self, locator: &Locator) -> crate::Result<bool> {
        let query = query(locator);
        let found = self
            .client
            .find_all(query.as_fantoccini())
            .await
            .map_err(|e| cmd_error(locator, e))?;
        Ok(!found.is_empty())
    }

    async fn is_disabled(&self, locator: &Locator) -> crate::Result<bool> {
        let element = self.find(locator).await?;
        let enabled = element.is_enabled().await.map_err(|e| cmd_error(locator, e))?;
        Ok(!enabled)
    }

    async fn value(&self, locator: &Locator) -> crate::Result<String> {
        let element = self.find(locator).await?;
        let value = element
            .prop("value")
            .await
            .map_err(|e| cmd_error(locator, e))?;
        Ok(value.unwrap_or_default())
    }

    async fn selected_options(&self, locator: &Locator) -> crate::Result<Vec<SelectOption>> {
        let mut selected = Vec::new();
        for (element, option) in self.options(locator).await? {
            if element.is_selected().await.map_err(|e| cmd_error(locator, e))?
                && !option.value.is_empty()
            {
                selected.push(option);
            }
        }
        Ok(selected)
    }

    async fn text(&self, locator: &Locator) -> crate::Result<String> {
        let element = self.find(locator).await?;
        element.text().await.map_err(|e| cmd_error(locator, e))
    }

    async fn has_class(&self, locator: &Locator, class: &str) -> crate::Result<bool> {
        let element = self.find(locator).await?;
        let classes = element
            .attr("class")
            .await
            .map_err(|e| cmd_error(locator, e))?
            .unwrap_or_default();
        Ok(classes.split_whitespace().any(|c| c == class))
    }

    async fn close(&self) -> crate::Result<()> {
        debug!("Closing WebDriver session");
        self.client
            .clone()
            .close()
            .await
            .map_err(|e| AdminUiError::Session(e.to_string()))
    }

    async fn grid_rows(&self) -> crate::Result<Vec<GridRow>> {
        let grid = Locator::Field("grid".to_string());
        let headers = self
            .client
            .find_all(fantoccini::Locator::Css("table thead th"))
            .await
            .map_err(|e| cmd_error(&grid, e))?;

        let mut columns = Vec::with_capacity(headers.len());
        for header in headers {
            let classes = header
                .attr("class")
                .await
                .map_err(|e| cmd_error(&grid, e))?
                .unwrap_or_default();
            let column = match column_key(&classes) {
                Some(column) => column.to_string(),
                None => header
                    .text()
                    .await
                    .map_err(|e| cmd_error(&grid, e))?
                    .trim()
                    .to_lowercase(),
            };
            columns.push(column);
        }

        let body_rows = self
            .client
            .find_all(fantoccini::Locator::Css("table tbody tr"))
            .await
            .map_err(|e| cmd_error(&grid, e))?;

        let mut rows = Vec::with_capacity(body_rows.len());
        for body_row in body_rows {
            let cells = body_row
                .find_all(fantoccini::Locator::Css("td"))
                .await
                .map_err(|e| cmd_error(&grid, e))?;
            let mut row = GridRow::new();
            for (column, cell) in columns.iter().zip(cells) {
                let text = cell.text().await.map_err(|e| cmd_error(&grid, e))?;
                row.insert(column.clone(), text.trim().to_string());
            }
            rows.push(row);
        }

        debug!("Grid has {} rows", rows.len());
        Ok(rows)
    }
}
