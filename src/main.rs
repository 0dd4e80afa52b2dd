#[cfg(target_arch = "wasm32")]
pub fn main() {
    shelter_ui::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
