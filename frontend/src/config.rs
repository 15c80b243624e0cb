
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("BOOKING_API_URL") {
        Some(url) => url,
        None => "http://localhost:8000/api", // Django dev server
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("BOOKING_API_URL") {
        Some(url) => url,
        None => "/api", // Served behind the same origin in production
    }
}

pub fn firebase_project_id() -> &'static str {
    option_env!("FIREBASE_PROJECT_ID").unwrap_or("YOUR_PROJECT_ID")
}

pub fn firebase_api_key() -> &'static str {
    option_env!("FIREBASE_API_KEY").unwrap_or("YOUR_API_KEY")
}

// Anti-forgery token: cookie set by the backend, echoed back as a header
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

pub const NEWSLETTER_COLLECTION: &str = "newsletter_subscribers";
pub const NEWSLETTER_SOURCE: &str = "footer_form";

// Milliseconds
pub const MODAL_TRANSITION_MS: u32 = 300;
pub const BOOKING_NOTIFICATION_MS: u32 = 5000;
pub const NEWSLETTER_NOTIFICATION_MS: u32 = 4000;
