//! Resolution of which of several form pages is rendered right now

use tracing::debug;

use crate::error::AdminUiError;
use crate::page::Page;

/// Picks the open page among candidates that share a form.
///
/// Resolution asks each candidate whether the rendered screen is its own; it
/// never relies on which page was opened last.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentPageResolver;

impl CurrentPageResolver {
    pub fn new() -> Self {
        Self
    }

    pub async fn current_page_with_form<'a, P>(&self, candidates: &[&'a P]) -> crate::Result<&'a P>
    where
        P: Page + ?Sized,
    {
        let mut open = Vec::new();
        for candidate in candidates {
            if candidate.is_open().await? {
                open.push(*candidate);
            }
        }

        match open.as_slice() {
            [page] => {
                debug!("Resolved current page to {}", page.name());
                Ok(*page)
            }
            [] => Err(AdminUiError::UnresolvablePage(format!(
                "none of [{}] is open",
                names(candidates)
            ))),
            _ => Err(AdminUiError::AmbiguousPage(format!(
                "[{}] all match the current screen",
                names(&open)
            ))),
        }
    }
}

fn names<P: Page + ?Sized>(pages: &[&P]) -> String {
    pages
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}
