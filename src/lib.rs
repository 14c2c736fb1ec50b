/*!

# Wallet SDK

This library is the entry point of the wallet SDK for web applications
(dapps). It gives the dapp an [EIP-1193] provider to talk to the wallet.

## Features

- Use the provider injected by the wallet's in-app browser when the dapp is
  opened there, from the page itself or from an `iframe`
- Construct a new provider everywhere else
- Normalize the application metadata shared with the wallet
- Official wallet logo as SVG data URI

## Usage

From JavaScript, the SDK is exported as the `WalletSDK` class (see
[`ffi::JsWalletSdk`]). From Rust, create a [`WalletSdk`] with the browser
implementations of its collaborators:

```no_run
use wallet_sdk::{
    PartialAppMetadata, WalletSdk,
    ffi::{BrowserEnvironment, BrowserSpawner, JsProviderConstructor, LocalStorage},
};

# fn test(provider_class: js_sys::Function) {
let sdk = WalletSdk::new(
    PartialAppMetadata {
        app_name: Some("My Dapp".to_owned()),
        ..PartialAppMetadata::default()
    },
    BrowserEnvironment,
    JsProviderConstructor::new(provider_class),
    LocalStorage,
    &BrowserSpawner,
);

let provider = sdk.make_provider(None);
# }
```

Every call to [`WalletSdk::make_provider`] looks up the environment again:
nothing is cached.

[EIP-1193]: https://eips.ethereum.org/EIPS/eip-1193

*/

pub mod environment;
pub mod error;
pub mod ffi;
pub mod logo;
pub mod metadata;
mod preference;
pub mod resolver;
mod sdk;
pub mod version;

pub use self::{
    logo::LogoType,
    metadata::{AppMetadata, PartialAppMetadata},
    preference::{ConnectionOptions, Preference},
    resolver::Provider,
    sdk::WalletSdk,
};
