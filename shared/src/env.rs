use dotenv::dotenv;

/// Loads `.env` overrides. Must run before `logger::init` so a `RUST_LOG`
/// entry from the file is picked up.
pub fn init() {
    dotenv().ok();
}
