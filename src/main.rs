//! Browser entry point. Build with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    blog_reader::start();
}
