use crate::{
    environment::{Environment, InjectedProvider, TRUST_MARKER},
    error::EnvironmentError,
    metadata::resolve_favicon_href,
};
use js_sys::Reflect;
use wasm_bindgen::{JsCast as _, prelude::*};

/// icon `<link>` elements, by order of preference
const FAVICON_SELECTORS: [&str; 4] = [
    r#"link[sizes="192x192"]"#,
    r#"link[sizes="180x180"]"#,
    r#"link[rel="icon"]"#,
    r#"link[rel="shortcut icon"]"#,
];

#[wasm_bindgen]
extern "C" {
    /// An EIP-1193 provider injected in the page as `window.ethereum`.
    ///
    /// Browser extensions and other wallets inject objects of the same
    /// shape, see [`InjectedProvider::is_coinbase_browser`].
    #[derive(Clone, PartialEq)]
    pub type EthereumProvider;
}

impl InjectedProvider for EthereumProvider {
    fn is_coinbase_browser(&self) -> bool {
        // the marker may be a getter that throws
        Reflect::get(self, &JsValue::from_str(TRUST_MARKER))
            .ok()
            .and_then(|marker| marker.as_bool())
            .unwrap_or(false)
    }
}

/// The page the SDK is running in: `globalThis` and its `top` window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    type Handle = EthereumProvider;

    fn ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError> {
        read_ethereum(&js_sys::global(), "globalThis")
    }

    fn top_ethereum(&self) -> Result<Option<Self::Handle>, EnvironmentError> {
        let top = Reflect::get(&js_sys::global(), &JsValue::from_str("top"))
            .map_err(|error| access_denied("globalThis.top", error))?;

        if top.is_undefined() || top.is_null() {
            return Ok(None);
        }

        read_ethereum(&top, "window.top")
    }

    fn favicon(&self) -> String {
        favicon().unwrap_or_default()
    }
}

fn read_ethereum(
    context: &JsValue,
    name: &str,
) -> Result<Option<EthereumProvider>, EnvironmentError> {
    let ethereum = Reflect::get(context, &JsValue::from_str("ethereum"))
        .map_err(|error| access_denied(name, error))?;

    if ethereum.is_undefined() || ethereum.is_null() {
        Ok(None)
    } else {
        Ok(Some(ethereum.unchecked_into()))
    }
}

fn access_denied(context: &str, error: JsValue) -> EnvironmentError {
    let info = match error.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{error:?}"),
    };

    EnvironmentError::AccessDenied {
        context: context.to_owned(),
        info,
    }
}

fn favicon() -> Option<String> {
    let document = web_sys::window()?.document()?;

    let link = FAVICON_SELECTORS
        .into_iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())?;
    let href = link.get_attribute("href")?;

    let location = document.location()?;
    let protocol = location.protocol().ok()?;
    let host = location.host().ok()?;

    resolve_favicon_href(&href, &protocol, &host)
}
