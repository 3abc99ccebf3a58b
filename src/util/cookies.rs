//! Cookie access with the application-wide defaults.
//!
//! The bootstrap contract fixes the policy for every cookie this client
//! writes: 7-day expiry, `SameSite=Strict`, root path. Attribute-string
//! building and parsing are pure; only the `document.cookie` touch points
//! need a browser.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

const SECONDS_PER_DAY: u32 = 86_400;

/// Cookie attribute policy applied to every write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    pub max_age_days: u32,
    pub path: &'static str,
    pub same_site: SameSite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { max_age_days: 7, path: "/", same_site: SameSite::Strict }
    }
}

/// Serialize one cookie assignment with the configured attributes.
pub fn format_set_cookie(name: &str, value: &str, config: &CookieConfig) -> String {
    format!(
        "{name}={value}; Max-Age={}; Path={}; SameSite={}",
        config.max_age_days * SECONDS_PER_DAY,
        config.path,
        config.same_site.as_str(),
    )
}

/// Serialize an expired assignment that removes `name`.
pub fn format_clear_cookie(name: &str, config: &CookieConfig) -> String {
    format!("{name}=; Max-Age=0; Path={}", config.path)
}

/// Find `name` in a `document.cookie` string (`a=1; b=2`).
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Write a cookie through `document.cookie` using the default policy.
pub fn set(name: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format_set_cookie(name, value, &CookieConfig::default()));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, value);
    }
}

/// Read a cookie from `document.cookie`.
pub fn get(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let header = html_document()?.cookie().ok()?;
        parse_cookie(&header, name)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Remove a cookie by writing an expired assignment.
pub fn clear(name: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format_clear_cookie(name, &CookieConfig::default()));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
