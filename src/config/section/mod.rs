//! Configuration section definitions.
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[embed]`  | Array layout, gzip level, index documents |
//! | `[routes]` | Route-registration names                  |
//! | `[zones]`  | Zone table and JSON style                 |

mod embed;
mod routes;
mod zones;

pub use embed::EmbedConfig;
pub use routes::RoutesConfig;
pub use zones::ZonesConfig;
