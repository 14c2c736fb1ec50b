use crate::{
    AppMetadata,
    environment::{self, Environment, InjectedProvider},
};
use tracing::debug;

/// Builds a new provider communicating with the wallet out of process.
pub trait ProviderConstructor {
    /// connection preference, forwarded to the provider without being
    /// interpreted. The default is used when the dapp gives none.
    type Preference: Default;
    type Provider;

    fn construct(&self, metadata: &AppMetadata, preference: &Self::Preference)
    -> Self::Provider;
}

/// The provider handed to the dapp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider<H, P> {
    /// provider injected by the wallet's in-app browser, returned untouched
    Injected(H),
    /// newly constructed provider
    Constructed(P),
}

impl<H, P> Provider<H, P> {
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected(_))
    }

    pub fn injected(self) -> Option<H> {
        match self {
            Self::Injected(handle) => Some(handle),
            Self::Constructed(_) => None,
        }
    }

    pub fn constructed(self) -> Option<P> {
        match self {
            Self::Injected(_) => None,
            Self::Constructed(provider) => Some(provider),
        }
    }
}

/// Decide which provider to give to the dapp.
///
/// If the environment exposes a provider with the trust marker set, we are
/// running inside the wallet's own browser and that provider is returned as
/// is. Otherwise a new provider is constructed from the `metadata` and the
/// `preference`.
pub fn resolve<E, C>(
    environment: &E,
    constructor: &C,
    metadata: &AppMetadata,
    preference: &C::Preference,
) -> Provider<E::Handle, C::Provider>
where
    E: Environment + ?Sized,
    C: ProviderConstructor + ?Sized,
{
    match environment::probe(environment) {
        Some(handle) if handle.is_coinbase_browser() => {
            debug!("using the provider injected by the wallet browser");
            Provider::Injected(handle)
        }
        found => {
            debug!(injected = found.is_some(), "constructing a new provider");
            Provider::Constructed(constructor.construct(metadata, preference))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::CountingConstructor, *};
    use crate::{
        ConnectionOptions, Preference,
        environment::testing::{Context, FakeEnvironment, provider},
        metadata::{PartialAppMetadata, normalize},
    };
    use std::rc::Rc;

    fn metadata() -> AppMetadata {
        normalize(PartialAppMetadata::default(), String::new)
    }

    #[test]
    fn trusted_provider_is_returned_as_is() {
        let injected = provider(Some(true));
        let environment =
            FakeEnvironment::new(Context::Exposes(Rc::clone(&injected)), Context::Empty);
        let constructor = CountingConstructor::default();

        for preference in [
            Preference::default(),
            Preference::new(ConnectionOptions::EoaOnly),
            Preference::new(ConnectionOptions::SmartWalletOnly),
        ] {
            let found = resolve(&environment, &constructor, &metadata(), &preference)
                .injected()
                .unwrap();
            assert!(Rc::ptr_eq(&found, &injected));
        }
        assert_eq!(constructor.built.get(), 0);
    }

    #[test]
    fn untrusted_provider_is_never_returned() {
        for marker in [Some(false), None] {
            let environment =
                FakeEnvironment::new(Context::Exposes(provider(marker)), Context::Empty);
            let constructor = CountingConstructor::default();

            let result = resolve(
                &environment,
                &constructor,
                &metadata(),
                &Preference::default(),
            );
            assert!(!result.is_injected());
            assert_eq!(constructor.built.get(), 1);
        }
    }

    #[test]
    fn cross_origin_denial_falls_back_to_construction() {
        let environment = FakeEnvironment::new(Context::Empty, Context::Denied);
        let constructor = CountingConstructor::default();
        let preference = Preference::new(ConnectionOptions::SmartWalletOnly);

        let constructed = resolve(&environment, &constructor, &metadata(), &preference)
            .constructed()
            .unwrap();
        assert_eq!(constructed.metadata, metadata());
        assert_eq!(constructed.preference, preference);
    }

    #[test]
    fn trusted_top_level_provider_from_a_frame() {
        let injected = provider(Some(true));
        let environment =
            FakeEnvironment::new(Context::Empty, Context::Exposes(Rc::clone(&injected)));
        let constructor = CountingConstructor::default();

        let found = resolve(
            &environment,
            &constructor,
            &metadata(),
            &Preference::default(),
        )
        .injected()
        .unwrap();
        assert!(Rc::ptr_eq(&found, &injected));
    }

    #[test]
    fn untrusted_local_provider_shadows_trusted_top_level() {
        let environment = FakeEnvironment::new(
            Context::Exposes(provider(Some(false))),
            Context::Exposes(provider(Some(true))),
        );
        let constructor = CountingConstructor::default();

        let result = resolve(
            &environment,
            &constructor,
            &metadata(),
            &Preference::default(),
        );
        assert!(!result.is_injected());
    }
}
