// std::time::Instant panics on wasm32, so the browser build swaps in web_time.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant as AppInstant;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant as AppInstant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
