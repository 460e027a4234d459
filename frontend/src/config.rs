#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // trunk serve runs on another port in development
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Served by the backend itself
}

pub const CONTACT_EMAIL: &str = "info@alphacs.sa";
