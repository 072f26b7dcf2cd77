//! Build-time configuration, forwarded by `build.rs`.

use store_razorpay::RazorpayConfig;
use tracing::warn;

#[cfg(test)]
#[path = "../build/env_files.rs"]
mod env_files;

/// Razorpay settings baked into this build
pub fn razorpay_config() -> RazorpayConfig {
    let config = from_values(option_env!("RAZORPAY_KEY_ID"), option_env!("STORE_API_URL"));

    if config.key_id.is_none() {
        warn!("RAZORPAY_KEY_ID was not set at build time; checkout will fail");
    } else if let Err(e) = config.validate() {
        warn!("{}", e);
    }

    config
}

fn from_values(key_id: Option<&str>, api_url: Option<&str>) -> RazorpayConfig {
    let config = RazorpayConfig::new(key_id.map(str::to_string));
    match api_url.map(str::trim) {
        Some(url) if !url.is_empty() => config.with_api_base_url(url),
        _ => config,
    }
}
