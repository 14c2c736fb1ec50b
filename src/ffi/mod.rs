/*!
Bindings to the browser.

Implements the collaborators of [`WalletSdk`] on top of the page's global
objects and exports the SDK to JavaScript as `WalletSDK`.

[`WalletSdk`]: crate::WalletSdk
*/

pub mod provider;
pub mod sdk;
pub mod storage;
pub mod window;

pub use self::{
    provider::{JsPreference, JsProviderConstructor},
    sdk::JsWalletSdk,
    storage::{BrowserSpawner, LocalStorage},
    window::{BrowserEnvironment, EthereumProvider},
};
use wasm_bindgen::prelude::*;

/// Report panics and `tracing` events in the browser console.
///
/// Calling this more than once has no further effect.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // already installed on the second call
    let _ = tracing_wasm::try_set_as_global_default();
}

/// the version of the SDK, as recorded in the storage
#[wasm_bindgen]
pub fn version() -> String {
    crate::version::LIB_VERSION.to_owned()
}
