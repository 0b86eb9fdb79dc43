//! Browser location access.
//!
//! Only meaningful on `wasm32`; other targets have no window and report so.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser rejected navigation: {0}")]
    Rejected(String),
}

/// Top-level navigation of the current tab.
pub trait PageNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Replaces the current page by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
            window
                .location()
                .set_href(url)
                .map_err(|e| NavigationError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err(NavigationError::NoWindow)
        }
    }
}

/// `window.location.origin` of the hosting page.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
