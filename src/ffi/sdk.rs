use super::{
    BrowserEnvironment, BrowserSpawner, JsPreference, JsProviderConstructor, LocalStorage,
};
use crate::{LogoType, PartialAppMetadata, Provider, WalletSdk};
use js_sys::Function;
use serde::de::DeserializeOwned;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// The SDK as exported to JavaScript.
///
/// ```js
/// const sdk = new WalletSDK({ appName: "My Dapp" }, CoinbaseWalletProvider);
/// const provider = sdk.makeWeb3Provider({ options: "smartWalletOnly" });
/// ```
#[wasm_bindgen(js_name = "WalletSDK")]
pub struct JsWalletSdk {
    inner: WalletSdk<BrowserEnvironment, JsProviderConstructor>,
}

#[wasm_bindgen(js_class = "WalletSDK")]
impl JsWalletSdk {
    /// `options` are the (partial) metadata of the dapp, a malformed field is
    /// replaced by its default. `provider_class` is the class used to
    /// construct a provider when the page was not opened in the wallet's
    /// browser.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, provider_class: Function) -> JsWalletSdk {
        let options: PartialAppMetadata = decode_or_default(options, "options");

        let inner = WalletSdk::new(
            options,
            BrowserEnvironment,
            JsProviderConstructor::new(provider_class),
            LocalStorage,
            &BrowserSpawner,
        );

        Self { inner }
    }

    /// `preference` is given as is to the provider class, `{ options: "all" }`
    /// if omitted.
    #[wasm_bindgen(js_name = "makeWeb3Provider")]
    pub fn make_web3_provider(&self, preference: JsValue) -> Result<JsValue, JsValue> {
        let preference = (!preference.is_undefined()).then(|| JsPreference(preference));

        match self.inner.make_provider(preference) {
            Provider::Injected(ethereum) => Ok(ethereum.into()),
            Provider::Constructed(provider) => provider,
        }
    }

    /// Official wallet logo for developers to use on their frontend.
    ///
    /// `kind` is one of `"standard"`, `"circle"`, `"text"`, `"textWithLogo"`,
    /// `"textLight"` or `"textWithLogoLight"`.
    #[wasm_bindgen(js_name = "getWalletLogo")]
    pub fn get_wallet_logo(&self, kind: &str, width: Option<u32>) -> String {
        let kind = kind.parse().unwrap_or_else(|error| {
            warn!(%error, "using the standard logo");
            LogoType::Standard
        });

        self.inner.logo(kind, width)
    }
}

fn decode_or_default<T>(value: JsValue, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return T::default();
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|error| {
        warn!(%error, "invalid {name}, using the defaults");
        T::default()
    })
}
