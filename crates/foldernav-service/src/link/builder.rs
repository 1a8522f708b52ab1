//! Share link construction.

use foldernav_core::config::link::LinkConfig;
use foldernav_core::types::id::FolderId;

use super::error::NavigationError;
use super::params::{FOLDER_ID_PARAM, TOKEN_PARAM, decode_component};
use crate::codec;

/// Project and origin information the host passes to the embedded page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Project key, e.g. `PRJ`.
    pub project_key: Option<String>,
    /// Numeric project id used by the REST API.
    pub project_id: Option<String>,
    /// Origin of the parent page, e.g. `https://example.atlassian.net`.
    pub origin: Option<String>,
}

impl HostContext {
    /// Read the context from the embedded page's query string.
    ///
    /// Recognizes `projectKey`, `projectId`, and `xdm_e` (the parent origin).
    /// Values are percent-decoded; empty values count as missing.
    pub fn from_query(query: &str) -> Result<Self, NavigationError> {
        let mut context = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let slot = match key {
                "projectKey" => &mut context.project_key,
                "projectId" => &mut context.project_id,
                "xdm_e" => &mut context.origin,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_component(key, &value.replace('+', " "))?);
            }
        }

        Ok(context)
    }
}

/// Builds links that open a folder in the host's test cases page.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    config: LinkConfig,
}

impl LinkBuilder {
    /// Create a new link builder.
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Build a link to `folder_id`.
    ///
    /// The path token is appended when a non-empty chain is known so the
    /// receiving side can walk straight to the folder.
    pub fn folder_link(
        &self,
        host: &HostContext,
        folder_id: FolderId,
        chain: Option<&[FolderId]>,
    ) -> Result<String, NavigationError> {
        let project_key = host
            .project_key
            .as_deref()
            .ok_or(NavigationError::MissingProjectKey)?;
        let origin = host
            .origin
            .as_deref()
            .ok_or(NavigationError::MissingOrigin)?
            .trim_end_matches('/');

        let mut url = format!(
            "{origin}/projects/{project_key}?selectedItem={}{}#{FOLDER_ID_PARAM}={folder_id}",
            self.config.page_selector, self.config.test_cases_route
        );

        if let Some(chain) = chain.filter(|chain| !chain.is_empty()) {
            url.push('&');
            url.push_str(TOKEN_PARAM);
            url.push('=');
            url.push_str(&codec::encode(chain));
        }

        Ok(url)
    }
}
