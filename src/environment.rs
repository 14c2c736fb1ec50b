/*!
# Environment probing

The wallet's own in-app browser injects its provider as `window.ethereum`.
When the dapp runs inside an `iframe` the provider may only be injected on
the top-level window, so [`probe`] looks at the current context first and
then at `window.top`.

Reading `window.top` from a frame of another origin throws a
`SecurityError`. This is an expected outcome and [`probe`] treats it as if
no provider was injected.
*/

use crate::error::EnvironmentError;
use tracing::debug;

/// name of the trust marker exposed by the wallet's in-app browser provider
pub const TRUST_MARKER: &str = "isCoinbaseBrowser";

/// A provider object found in the environment, not owned by the SDK.
pub trait InjectedProvider {
    /// `true` only if the provider exposes the [`TRUST_MARKER`] set to `true`
    ///
    /// No other check is done on the object: a provider with the marker is
    /// returned to the dapp as is.
    fn is_coinbase_browser(&self) -> bool;
}

/// Read-only access to the ambient execution context.
pub trait Environment {
    type Handle: InjectedProvider;

    /// the `ethereum` field of the current context, if any
    fn ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError>;

    /// the `ethereum` field of the top-level ancestor context
    ///
    /// This fails with [`EnvironmentError::AccessDenied`] if the ancestor is
    /// of a different origin.
    fn top_ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError>;

    /// best-effort URL of the page's icon, empty if there is none
    fn favicon(&self) -> String;
}

/// Look for an injected provider, in the current context first and then in
/// the top-level context.
///
/// Any failure to access either context is treated as the provider being
/// absent.
pub fn probe<E>(environment: &E) -> Option<E::Handle>
where
    E: Environment + ?Sized,
{
    match environment.ethereum() {
        Ok(Some(handle)) => return Some(handle),
        Ok(None) => {}
        Err(error) => debug!(%error, "cannot read the local ethereum provider"),
    }

    match environment.top_ethereum() {
        Ok(handle) => handle,
        Err(error) => {
            debug!(%error, "cannot read the top-level ethereum provider");
            None
        }
    }
}

impl<T: InjectedProvider + ?Sized> InjectedProvider for std::rc::Rc<T> {
    fn is_coinbase_browser(&self) -> bool {
        (**self).is_coinbase_browser()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Debug)]
    pub struct FakeProvider {
        pub trust_marker: Option<bool>,
    }

    impl InjectedProvider for FakeProvider {
        fn is_coinbase_browser(&self) -> bool {
            self.trust_marker == Some(true)
        }
    }

    pub fn provider(trust_marker: Option<bool>) -> Rc<FakeProvider> {
        Rc::new(FakeProvider { trust_marker })
    }

    #[derive(Debug, Clone)]
    pub enum Context {
        Empty,
        Denied,
        Exposes(Rc<FakeProvider>),
    }

    impl Context {
        fn read(&self, name: &str) -> Result<Option<Rc<FakeProvider>>, EnvironmentError> {
            match self {
                Self::Empty => Ok(None),
                Self::Denied => Err(EnvironmentError::AccessDenied {
                    context: name.to_owned(),
                    info: "Blocked a frame with origin \"https://dapp.xyz\"".to_owned(),
                }),
                Self::Exposes(provider) => Ok(Some(Rc::clone(provider))),
            }
        }
    }

    /// an environment with a local and a top-level context
    #[derive(Debug)]
    pub struct FakeEnvironment {
        pub local: Context,
        pub top: Context,
        pub favicon: String,
        pub top_reads: Cell<usize>,
    }

    impl FakeEnvironment {
        pub fn new(local: Context, top: Context) -> Self {
            Self {
                local,
                top,
                favicon: "https://dapp.xyz/favicon.ico".to_owned(),
                top_reads: Cell::new(0),
            }
        }
    }

    impl Environment for FakeEnvironment {
        type Handle = Rc<FakeProvider>;

        fn ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError> {
            self.local.read("window")
        }

        fn top_ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError> {
            self.top_reads.set(self.top_reads.get() + 1);
            self.top.read("window.top")
        }

        fn favicon(&self) -> String {
            self.favicon.clone()
        }
    }
}
