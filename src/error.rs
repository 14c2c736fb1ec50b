/// Failure to read a value from one of the browser's execution contexts.
///
/// These never reach the caller of [`WalletSdk::make_provider`]: the prober
/// treats them the same as an absent provider.
///
/// [`WalletSdk::make_provider`]: crate::WalletSdk::make_provider
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum EnvironmentError {
    /// The context belongs to a different origin and refused the access.
    #[error("Access to `{context}' was denied: {info}")]
    AccessDenied { context: String, info: String },
    #[error("No global execution context is available.")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum StorageErrorCode {
    #[error("The storage is not available in this environment.")]
    Unavailable,
    #[error("The storage quota has been exceeded.")]
    QuotaExceeded,
    #[error("The access to the storage was denied.")]
    Security,
    #[error("Unknown storage error `{0}'")]
    Unknown(String),
}

/// Error of a [`KeyValueStore`] operation.
///
/// In the browser this is decoded from the thrown `DOMException`: its `name`
/// gives the [`StorageErrorCode`] and its `message` the info.
///
/// [`KeyValueStore`]: crate::version::KeyValueStore
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct StorageError {
    #[serde(rename = "name")]
    pub code: StorageErrorCode,
    #[serde(rename = "message", default)]
    pub info: String,
}

impl StorageError {
    pub fn unavailable(info: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::Unavailable,
            info: info.into(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for StorageErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = StorageErrorCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting a DOMException name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    "InvalidStateError" => Ok(StorageErrorCode::Unavailable),
                    // firefox reports the quota with its own legacy name
                    "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => {
                        Ok(StorageErrorCode::QuotaExceeded)
                    }
                    "SecurityError" => Ok(StorageErrorCode::Security),
                    unknown => Ok(StorageErrorCode::Unknown(unknown.to_owned())),
                }
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
