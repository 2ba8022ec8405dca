//! Generic CRUD index page backed by the resource grid

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::driver::{GridRow, UiDriver};
use crate::error::AdminUiError;
use crate::locator::Locator;
use crate::page::Page;
use crate::route::Route;

const DELETE_LABEL: &str = "Delete";

/// Listing screen of one resource
#[derive(Debug, Clone)]
pub struct IndexPage {
    name: String,
    route: Route,
    driver: Arc<dyn UiDriver>,
}

impl IndexPage {
    pub fn new(name: impl Into<String>, route: Route, driver: Arc<dyn UiDriver>) -> Self {
        Self {
            name: name.into(),
            route,
            driver,
        }
    }

    /// Number of rows in the grid body
    pub async fn count_items(&self) -> crate::Result<usize> {
        Ok(self.driver.grid_rows().await?.len())
    }

    /// Exactly one row matches every `(column, value)` filter
    pub async fn is_single_resource_on_page(
        &self,
        filters: &[(&str, &str)],
    ) -> crate::Result<bool> {
        let rows = self.driver.grid_rows().await?;
        let matching = matching_rows(&rows, filters);
        debug!(
            "{} rows match {:?} on {}",
            matching.len(),
            filters,
            self.name
        );
        Ok(matching.len() == 1)
    }

    /// Tick the bulk checkbox of the first matching row
    pub async fn check_resource_on_page(&self, filters: &[(&str, &str)]) -> crate::Result<()> {
        let row = self.first_matching_row(filters).await?;
        self.driver
            .set_checked(&Locator::RowCheckbox(row), true)
            .await
    }

    /// Delete the first matching row and confirm
    pub async fn delete_resource_on_page(&self, filters: &[(&str, &str)]) -> crate::Result<()> {
        let row = self.first_matching_row(filters).await?;
        debug!("Deleting row {} on {}", row, self.name);
        self.driver
            .click(&Locator::row_button(row, DELETE_LABEL))
            .await?;
        self.driver.click(&Locator::ConfirmButton).await
    }

    /// Delete every checked row and confirm
    pub async fn bulk_delete(&self) -> crate::Result<()> {
        debug!("Bulk deleting checked rows on {}", self.name);
        self.driver
            .click(&Locator::BulkAction(DELETE_LABEL.to_string()))
            .await?;
        self.driver.click(&Locator::ConfirmButton).await
    }

    async fn first_matching_row(&self, filters: &[(&str, &str)]) -> crate::Result<usize> {
        let rows = self.driver.grid_rows().await?;
        matching_rows(&rows, filters)
            .first()
            .copied()
            .ok_or_else(|| {
                AdminUiError::ElementNotFound(format!(
                    "no row matching {:?} on {}",
                    filters, self.name
                ))
            })
    }
}

#[async_trait]
impl Page for IndexPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn route(&self) -> &Route {
        &self.route
    }

    fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.driver
    }
}

/// Indexes of rows whose cells contain every filter value.
///
/// A filter on a column the grid does not render never matches.
pub fn matching_rows(rows: &[GridRow], filters: &[(&str, &str)]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            filters.iter().all(|(column, value)| {
                row.get(*column)
                    .map(|cell| cell.contains(value))
                    .unwrap_or(false)
            })
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockUiDriver;

    fn row(code: &str, name: &str, enabled: &str) -> GridRow {
        let mut row = GridRow::new();
        row.insert("code".to_string(), code.to_string());
        row.insert("nameAndDescription".to_string(), name.to_string());
        row.insert("enabled".to_string(), enabled.to_string());
        row
    }

    fn rows() -> Vec<GridRow> {
        vec![
            row("WEB", "Web Store\nMain shop", "Enabled"),
            row("MOBILE", "Mobile", "Disabled"),
        ]
    }

    fn page_with_rows(mut mock: MockUiDriver) -> IndexPage {
        mock.expect_grid_rows()
            .returning(|| Box::pin(async { Ok(rows()) }));
        IndexPage::new("channel index", Route::new("/admin/channels/"), Arc::new(mock))
    }

    #[test]
    fn matching_rows_requires_every_filter() {
        let rows = rows();
        assert_eq!(matching_rows(&rows, &[("code", "WEB")]), vec![0]);
        assert_eq!(
            matching_rows(&rows, &[("nameAndDescription", "Mobile"), ("enabled", "Enabled")]),
            Vec::<usize>::new()
        );
        assert_eq!(
            matching_rows(&rows, &[("nameAndDescription", "Mobile"), ("enabled", "Disabled")]),
            vec![1]
        );
    }

    #[test]
    fn matching_rows_uses_substring_match() {
        let rows = rows();
        assert_eq!(matching_rows(&rows, &[("nameAndDescription", "Web Store")]), vec![0]);
        assert_eq!(matching_rows(&rows, &[("nameAndDescription", "Store")]), vec![0]);
    }

    #[test]
    fn matching_rows_unknown_column_never_matches() {
        let rows = rows();
        assert!(matching_rows(&rows, &[("hostname", "shop.example.com")]).is_empty());
    }

    #[tokio::test]
    async fn count_items_counts_grid_rows() {
        let page = page_with_rows(MockUiDriver::new());
        assert_eq!(page.count_items().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn single_resource_requires_exactly_one_match() {
        let page = page_with_rows(MockUiDriver::new());
        assert!(page.is_single_resource_on_page(&[("code", "MOBILE")]).await.unwrap());
        // "E" is in both codes
        assert!(!page.is_single_resource_on_page(&[("code", "E")]).await.unwrap());
        assert!(!page.is_single_resource_on_page(&[("code", "POS")]).await.unwrap());
    }

    #[tokio::test]
    async fn delete_clicks_row_button_then_confirms() {
        let mut mock = MockUiDriver::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_click()
            .withf(|l| *l == Locator::row_button(1, "Delete"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(()) }));
        mock.expect_click()
            .withf(|l| *l == Locator::ConfirmButton)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(()) }));
        let page = page_with_rows(mock);

        page.delete_resource_on_page(&[("nameAndDescription", "Mobile")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_without_matching_row_is_element_not_found() {
        let page = page_with_rows(MockUiDriver::new());
        let err = page
            .delete_resource_on_page(&[("nameAndDescription", "Point of sale")])
            .await
            .unwrap_err();
        assert!(matches!(err, AdminUiError::ElementNotFound(_)));
    }

    #[tokio::test]
    async fn check_resource_ticks_row_checkbox() {
        let mut mock = MockUiDriver::new();
        mock.expect_set_checked()
            .withf(|l, checked| *l == Locator::RowCheckbox(0) && *checked)
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));
        let page = page_with_rows(mock);

        page.check_resource_on_page(&[("code", "WEB")]).await.unwrap();
    }

    #[tokio::test]
    async fn is_open_compares_current_path() {
        let mut mock = MockUiDriver::new();
        mock.expect_current_path()
            .returning(|| Box::pin(async { Ok("/admin/channels/".to_string()) }));
        let page = IndexPage::new("channel index", Route::new("/admin/channels/"), Arc::new(mock));

        assert!(page.is_open().await.unwrap());
    }
}
