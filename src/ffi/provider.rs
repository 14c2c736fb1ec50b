use crate::{AppMetadata, ConnectionOptions, resolver::ProviderConstructor};
use js_sys::{Function, Object, Reflect};
use serde::Serialize as _;
use wasm_bindgen::JsValue;

/// The preference object given by the dapp, forwarded untouched to the
/// provider class.
///
/// The default is `{ options: "all" }`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsPreference(pub JsValue);

impl Default for JsPreference {
    fn default() -> Self {
        let preference = Object::new();
        // a fresh plain object accepts any property
        let _ = Reflect::set(
            &preference,
            &JsValue::from_str("options"),
            &JsValue::from_str(ConnectionOptions::All.as_str()),
        );
        Self(preference.into())
    }
}

/// Constructs providers with a JavaScript class, called as
/// `new Provider({ metadata, preference })`.
#[derive(Clone, PartialEq)]
pub struct JsProviderConstructor {
    class: Function,
}

impl JsProviderConstructor {
    pub fn new(class: Function) -> Self {
        Self { class }
    }
}

impl ProviderConstructor for JsProviderConstructor {
    type Preference = JsPreference;
    /// the exception thrown by the JavaScript constructor, if any, is
    /// returned as is
    type Provider = Result<JsValue, JsValue>;

    fn construct(&self, metadata: &AppMetadata, preference: &JsPreference) -> Self::Provider {
        let metadata = metadata.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("metadata"), &metadata)?;
        Reflect::set(&options, &JsValue::from_str("preference"), &preference.0)?;

        Reflect::construct(&self.class, &js_sys::Array::of1(&options))
    }
}
