use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of wallet the constructed provider is allowed to connect to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ConnectionOptions {
    /// let the user choose between the smart wallet and the extension/mobile app
    #[default]
    All,
    SmartWalletOnly,
    /// externally owned accounts only: extension or mobile app
    EoaOnly,
    /// value not known to this version of the SDK, forwarded as given
    Unknown(String),
}

/// Connection preference of the dapp.
///
/// Only [`Preference::options`] is typed. Every other field is kept as is in
/// [`Preference::extra`] so the constructed provider receives exactly what
/// the dapp gave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default)]
    pub options: ConnectionOptions,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Preference {
    pub fn new(options: ConnectionOptions) -> Self {
        Self {
            options,
            extra: serde_json::Map::new(),
        }
    }
}

impl ConnectionOptions {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::SmartWalletOnly => "smartWalletOnly",
            Self::EoaOnly => "eoaOnly",
            Self::Unknown(other) => other,
        }
    }
}

impl fmt::Display for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConnectionOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConnectionOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = ConnectionOptions;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting a connection option string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    "all" => Ok(ConnectionOptions::All),
                    "smartWalletOnly" => Ok(ConnectionOptions::SmartWalletOnly),
                    "eoaOnly" => Ok(ConnectionOptions::EoaOnly),
                    unknown => Ok(ConnectionOptions::Unknown(unknown.to_owned())),
                }
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn connection_options_json() {
        assert_eq!(
            serde_json::from_value::<ConnectionOptions>(json! { "all" }).unwrap(),
            ConnectionOptions::All
        );
        assert_eq!(
            serde_json::from_value::<ConnectionOptions>(json! { "smartWalletOnly" }).unwrap(),
            ConnectionOptions::SmartWalletOnly
        );
        assert_eq!(
            serde_json::from_value::<ConnectionOptions>(json! { "eoaOnly" }).unwrap(),
            ConnectionOptions::EoaOnly
        );
        assert_eq!(
            serde_json::from_value::<ConnectionOptions>(json! { "passkeyOnly" }).unwrap(),
            ConnectionOptions::Unknown("passkeyOnly".to_owned())
        );
    }

    #[test]
    fn default_preference_is_all() {
        assert_eq!(Preference::default(), Preference::new(ConnectionOptions::All));
        assert_eq!(
            serde_json::to_value(Preference::default()).unwrap(),
            json! { { "options": "all" } }
        );
        assert_eq!(
            serde_json::from_value::<Preference>(json! { {} }).unwrap(),
            Preference::default()
        );
    }

    #[test]
    fn preference_forwards_unknown_fields() {
        let given = json! { {
            "options": "smartWalletOnly",
            "keysUrl": "https://keys.example.org/connect",
            "attribution": { "auto": true },
        }};

        let preference: Preference = serde_json::from_value(given.clone()).unwrap();
        assert_eq!(preference.options, ConnectionOptions::SmartWalletOnly);
        assert_eq!(preference.extra.len(), 2);
        assert_eq!(serde_json::to_value(&preference).unwrap(), given);
    }

    #[test]
    fn unknown_option_is_forwarded_verbatim() {
        let given = json! { { "options": "somethingNew" } };
        let preference: Preference = serde_json::from_value(given.clone()).unwrap();
        assert_eq!(preference.options.to_string(), "somethingNew");
        assert_eq!(serde_json::to_value(&preference).unwrap(), given);
    }
}
