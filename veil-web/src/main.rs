fn main() {
    #[cfg(target_arch = "wasm32")]
    dioxus::launch(veil_web::App);
}
