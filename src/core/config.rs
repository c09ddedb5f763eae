use std::env;

/// Default listen port, matching the service's original deployment.
const DEFAULT_PORT: u16 = 5000;

/// Default order-status API endpoint.
const DEFAULT_SHIPMENT_API_URL: &str =
    "https://orderstatusapi-dot-organization-project-311520.uc.r.appspot.com/api/getOrderStatus";

/// Default audio clip played by the ending intent's rich response.
const DEFAULT_ENDING_AUDIO_URL: &str =
    "https://welcome-audio.s3.eu-north-1.amazonaws.com/Heavens+Choir+Sound+Effect.mp3";

/// Default timeout for the outbound order-status call, in seconds.
const DEFAULT_SHIPMENT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub shipment_api_url: String,
    pub ending_audio_url: String,
    pub shipment_api_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Every knob has a default, so the service runs with no environment at
    /// all; set `PORT`, `SHIPMENT_API_URL`, `ENDING_AUDIO_URL` or
    /// `SHIPMENT_API_TIMEOUT_SECS` to override.
    ///
    /// # Errors
    ///
    /// Returns an error string when a numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
                Err(_) => DEFAULT_PORT,
            },
            shipment_api_url: env::var("SHIPMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_SHIPMENT_API_URL.to_string()),
            ending_audio_url: env::var("ENDING_AUDIO_URL")
                .unwrap_or_else(|_| DEFAULT_ENDING_AUDIO_URL.to_string()),
            shipment_api_timeout_secs: match env::var("SHIPMENT_API_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|e| format!("SHIPMENT_API_TIMEOUT_SECS: {}", e))?,
                Err(_) => DEFAULT_SHIPMENT_API_TIMEOUT_SECS,
            },
        })
    }
}
