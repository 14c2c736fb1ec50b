use crate::{
    AppMetadata, LogoType, PartialAppMetadata, Provider,
    environment::Environment,
    logo::{self, DEFAULT_LOGO_WIDTH},
    metadata,
    resolver::{self, ProviderConstructor},
    version::{self, KeyValueStore, Spawner},
};

/// Entry point of the SDK.
///
/// Created once by the dapp with its metadata, it then hands out the
/// provider to talk to the wallet with [`WalletSdk::make_provider`].
pub struct WalletSdk<E, C> {
    metadata: AppMetadata,
    environment: E,
    constructor: C,
}

impl<E, C> WalletSdk<E, C>
where
    E: Environment,
    C: ProviderConstructor,
{
    /// Create the SDK for the dapp described by `options`.
    ///
    /// This also schedules the recording of the SDK version in `store` on
    /// the `spawner`. Neither waits for nor depends on the outcome of that
    /// write.
    pub fn new<K, R>(
        options: PartialAppMetadata,
        environment: E,
        constructor: C,
        store: K,
        spawner: &R,
    ) -> Self
    where
        K: KeyValueStore + 'static,
        R: Spawner + ?Sized,
    {
        let metadata = metadata::normalize(options, || environment.favicon());
        version::record_version(store, spawner);

        Self {
            metadata,
            environment,
            constructor,
        }
    }

    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    /// Get the provider to communicate with the wallet.
    ///
    /// When the dapp runs in the wallet's in-app browser, this is the
    /// provider the browser injected. Otherwise a new provider is constructed
    /// every time with the given `preference` (the constructor's default
    /// preference if `None`).
    pub fn make_provider(
        &self,
        preference: Option<C::Preference>,
    ) -> Provider<E::Handle, C::Provider> {
        let preference = preference.unwrap_or_default();
        resolver::resolve(
            &self.environment,
            &self.constructor,
            &self.metadata,
            &preference,
        )
    }

    /// The official wallet logo as an SVG data URI, 240 pixels wide by
    /// default.
    pub fn logo(&self, kind: LogoType, width: Option<u32>) -> String {
        logo::wallet_logo(kind, width.unwrap_or(DEFAULT_LOGO_WIDTH))
    }
}
