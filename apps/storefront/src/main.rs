// Trunk entrypoint. Native builds do nothing; the app needs `--features web`
// and wasm32.

fn main() {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    boutique_storefront::start();

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    boutique_storefront::placeholder();
}
