//! Site configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The server provides the loaded value as Leptos context so the document
//! shell can emit the Tag Manager bootstrap and booking link override.

/// Site configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Google Tag Manager container, e.g. `GTM-ABC1234`.
    /// Without it no `dataLayer` exists and analytics events are skipped.
    pub gtm_container_id: Option<String>,

    /// Cal.com event link (`<user>/<event>`) overriding the built-in one
    pub booking_link: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            gtm_container_id: read("GTM_CONTAINER_ID"),
            booking_link: read("BOOKING_LINK"),
        }
    }

    /// Check if analytics is configured
    pub fn has_analytics(&self) -> bool {
        self.gtm_container_id.is_some()
    }

    /// Check if the booking link is overridden
    pub fn has_booking_link(&self) -> bool {
        self.booking_link.is_some()
    }

    /// Tag Manager bootstrap script for the configured container
    pub fn gtm_snippet(&self) -> Option<String> {
        let id = serde_json::to_string(self.gtm_container_id.as_deref()?).ok()?;
        Some(format!(
            "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
             new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
             j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
             'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\n\
             }})(window,document,'script','dataLayer',{id});"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("GTM_CONTAINER_ID", "GTM-ABC1234"),
            ("BOOKING_LINK", "acme/intro"),
        ]));

        assert_eq!(config.gtm_container_id, Some("GTM-ABC1234".to_string()));
        assert_eq!(config.booking_link, Some("acme/intro".to_string()));
        assert!(config.has_analytics());
        assert!(config.has_booking_link());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config, Config::default());
        assert!(!config.has_analytics());
        assert!(!config.has_booking_link());
        assert!(config.gtm_snippet().is_none());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[
            ("GTM_CONTAINER_ID", "   "),
            ("BOOKING_LINK", ""),
        ]));

        assert!(config.gtm_container_id.is_none());
        assert!(config.booking_link.is_none());
    }

    #[test]
    fn test_gtm_snippet_quotes_container() {
        let config = Config {
            gtm_container_id: Some("GTM-ABC1234".to_string()),
            booking_link: None,
        };
        let snippet = config.gtm_snippet().unwrap();

        assert!(snippet.contains("googletagmanager.com/gtm.js"));
        assert!(snippet.ends_with("'dataLayer',\"GTM-ABC1234\");"));
    }
}
