#[cfg(target_arch = "wasm32")]
fn main() {
    roledash_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("roledash-frontend targets wasm32; build it with trunk and serve it through roledash-server");
}
