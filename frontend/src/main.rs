use leptos::prelude::*;
use predictor_frontend::App;
use predictor_frontend::config::ClientConfig;
use predictor_frontend::logging;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(ClientConfig::from_build_env().log_level);
    mount_to_body(App);
}
