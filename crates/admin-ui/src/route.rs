//! Route templates such as `/admin/channels/{id}/edit`

use crate::error::AdminUiError;

/// A path template whose `{name}` segments are filled from parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    template: String,
}

impl Route {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Build a concrete path, substituting every placeholder from `params`
    pub fn path(&self, params: &[(&str, &str)]) -> crate::Result<String> {
        let segments = self
            .template
            .split('/')
            .map(|segment| match placeholder(segment) {
                Some(name) => params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
                    .ok_or_else(|| {
                        AdminUiError::InvalidRoute(format!(
                            "missing parameter '{}' for {}",
                            name, self.template
                        ))
                    }),
                None => Ok(segment.to_string()),
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(segments.join("/"))
    }

    /// Whether `path` is an instance of this template.
    ///
    /// Query string and fragment are ignored, as is a trailing slash.
    pub fn matches(&self, path: &str) -> bool {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let template = self.template.trim_end_matches('/');

        let actual: Vec<&str> = path.split('/').collect();
        let expected: Vec<&str> = template.split('/').collect();
        if actual.len() != expected.len() {
            return false;
        }

        expected
            .iter()
            .zip(actual.iter())
            .all(|(expected, actual)| match placeholder(expected) {
                Some(_) => !actual.is_empty(),
                None => expected == actual,
            })
    }

    /// Extract the value of a placeholder from a concrete path
    pub fn param(&self, path: &str, name: &str) -> Option<String> {
        if !self.matches(path) {
            return None;
        }
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.template
            .split('/')
            .zip(path.split('/'))
            .find(|(segment, _)| placeholder(segment) == Some(name))
            .map(|(_, value)| value.to_string())
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
