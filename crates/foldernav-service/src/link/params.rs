//! Navigation parameters carried in a URL fragment.

use tracing::{debug, warn};

use foldernav_core::types::id::FolderId;
use foldernav_entity::navigation::ExpansionRequest;

use super::error::NavigationError;
use crate::codec;

/// Fragment parameter naming the folder to open.
pub const FOLDER_ID_PARAM: &str = "uiExtensionsFolderId";

/// Fragment parameter carrying the path token.
pub const TOKEN_PARAM: &str = "p";

/// Folder navigation request read from a location hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationParams {
    /// The folder to open.
    pub folder_id: FolderId,
    /// Path token of the folder's ancestor chain, if the link had one.
    pub token: Option<String>,
}

impl NavigationParams {
    /// Read navigation parameters from a location hash.
    ///
    /// Parameters may follow any `#` or `&` in the hash, so they survive
    /// being appended after the host's own `#!/route`. Returns `Ok(None)`
    /// when no folder id is present.
    pub fn parse(hash: &str) -> Result<Option<Self>, NavigationError> {
        let Some(raw_id) = find_param(hash, FOLDER_ID_PARAM) else {
            debug!("No folder navigation parameters in hash");
            return Ok(None);
        };

        let raw_id = decode_component(FOLDER_ID_PARAM, raw_id)?;
        let folder_id = parse_folder_id(&raw_id)
            .ok_or(NavigationError::InvalidFolderId { value: raw_id })?;

        // An undecodable token is left raw; the codec rejects it later and
        // the request falls back to the folder id.
        let token = find_param(hash, TOKEN_PARAM).map(|raw| {
            decode_component(TOKEN_PARAM, raw).unwrap_or_else(|e| {
                warn!(%folder_id, error = %e, "Path token is not percent-encoded correctly");
                raw.to_string()
            })
        });

        Ok(Some(Self { folder_id, token }))
    }

    /// Turn the parameters into an expansion request.
    ///
    /// A decodable token yields a chain-guided request. A malformed token is
    /// logged and the request falls back to the bare folder id.
    pub fn into_request(self) -> ExpansionRequest {
        let Some(token) = self.token else {
            return ExpansionRequest::direct(self.folder_id);
        };

        match codec::decode(&token) {
            Ok(chain) => {
                if chain.last() != Some(&self.folder_id) {
                    warn!(
                        folder_id = %self.folder_id,
                        "Path token does not end at the linked folder, following the token"
                    );
                }
                ExpansionRequest {
                    target_id: chain.last().copied().unwrap_or(self.folder_id),
                    chain: Some(chain),
                }
            }
            Err(e) => {
                warn!(folder_id = %self.folder_id, error = %e, "Ignoring malformed path token");
                ExpansionRequest::direct(self.folder_id)
            }
        }
    }
}

/// First non-empty value of `name` following a `#` or `&`.
fn find_param<'a>(hash: &'a str, name: &str) -> Option<&'a str> {
    hash.split(['#', '&'])
        .skip(1)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value)
}

/// Digits only; no sign or surrounding whitespace.
fn parse_folder_id(value: &str) -> Option<FolderId> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Percent-decode one parameter value.
pub fn decode_component(name: &str, value: &str) -> Result<String, NavigationError> {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| NavigationError::InvalidEncoding {
            name: name.to_string(),
        })
}
