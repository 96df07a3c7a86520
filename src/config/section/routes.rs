//! `[routes]` section configuration.
//!
//! Names used by the route-registration output.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! include = "ESP8266WebServer.h"
//! server = "ESP8266WebServer"
//! function = "setup_static_endpoints"
//! ```

use serde::{Deserialize, Serialize};

/// Route-registration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Web server header, included with angle brackets.
    pub include: String,

    /// Web server class name (may be namespaced, e.g. `esp8266webserver::ESP8266WebServer`).
    pub server: String,

    /// Name of the generated registration function.
    pub function: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            include: "ESP8266WebServer.h".to_string(),
            server: "ESP8266WebServer".to_string(),
            function: "setup_static_endpoints".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_routes_config() {
        let config = test_parse_config(
            "[routes]\ninclude = \"WebServer.h\"\nserver = \"WebServer\"\nfunction = \"register_assets\"",
        );

        assert_eq!(config.routes.include, "WebServer.h");
        assert_eq!(config.routes.server, "WebServer");
        assert_eq!(config.routes.function, "register_assets");
    }

    #[test]
    fn test_routes_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.routes.server, "ESP8266WebServer");
        assert_eq!(config.routes.function, "setup_static_endpoints");
    }
}
