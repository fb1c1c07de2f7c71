use log::Level;

pub const BRAND_NAME: &str = "Brightify";

pub const CONTACT_EMAIL: &str = "contact@brightify.com";

pub const BOOKING_URL: &str = "https://calendar.google.com/calendar/u/0/appointments/schedules/AcZssZ2h-p96Bu2TGVh-qph3btwH5J0odPpEeWzBx6Rw34yFwVlJaX_gGJc_nG2PelDhtMTZEoOKDvJj";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the contact form pretends to talk to a server.
pub fn submit_delay_ms() -> u32 {
    1_500
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
