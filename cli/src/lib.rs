pub mod calc;
pub mod codec;
pub mod config;
pub mod units;
pub mod viewer;
pub mod wiki;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
