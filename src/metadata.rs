use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use tracing::warn;

/// name given to the application when the dapp did not provide one
pub const DEFAULT_APP_NAME: &str = "Dapp";

/// Application metadata as forwarded to the wallet.
///
/// Every field always holds a concrete value: use [`normalize`] to build
/// it from the (partial) options given by the dapp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub app_name: String,
    pub app_logo_url: String,
    pub app_chain_ids: Vec<u64>,
}

/// The options a dapp gives when creating the SDK. Any of them may be
/// missing.
///
/// A field of the wrong type is decoded as missing, the other fields are
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialAppMetadata {
    #[serde(deserialize_with = "or_missing")]
    pub app_name: Option<String>,
    #[serde(deserialize_with = "or_missing")]
    pub app_logo_url: Option<String>,
    #[serde(deserialize_with = "or_missing")]
    pub app_chain_ids: Option<Vec<u64>>,
}

fn or_missing<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_else(|error| {
        warn!(%error, "ignoring a malformed option");
        None
    }))
}

/// fill in the defaults for the missing fields of the application metadata
///
/// `favicon` is only called if no logo was provided. It is a best-effort
/// lookup and may return an empty string.
pub fn normalize(partial: PartialAppMetadata, favicon: impl FnOnce() -> String) -> AppMetadata {
    let PartialAppMetadata {
        app_name,
        app_logo_url,
        app_chain_ids,
    } = partial;

    AppMetadata {
        app_name: app_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
        app_logo_url: app_logo_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(favicon),
        app_chain_ids: app_chain_ids.unwrap_or_default(),
    }
}

/// Turn the `href` attribute of the page's icon `<link>` into an absolute
/// URL, using the `protocol` (e.g. `"https:"`) and `host` of the page.
///
/// Script URLs are never returned.
pub fn resolve_favicon_href(href: &str, protocol: &str, host: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }

    let lowercase = href.trim_start().to_ascii_lowercase();
    if lowercase.starts_with("javascript:") || lowercase.starts_with("vbscript:") {
        return None;
    }

    if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("data:") {
        Some(href.to_owned())
    } else if href.starts_with("//") {
        Some(format!("{protocol}{href}"))
    } else if href.starts_with('/') {
        Some(format!("{protocol}//{host}{href}"))
    } else {
        Some(format!("{protocol}//{host}/{href}"))
    }
}
