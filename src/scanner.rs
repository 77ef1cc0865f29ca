use lazy_static::lazy_static;
use log::info;
use serde::{Deserialize, Serialize};
use sysinfo::System;
use tokio::sync::Mutex;

pub mod compat;
pub mod estimate;
pub mod probe;
pub mod profile;
pub mod requirements;

use self::estimate::estimate_profile;
use self::probe::SystemProbe;
use self::profile::{format_file_size, HardwareProfile};

#[derive(Debug, Serialize, Deserialize)]
pub struct ScannerDescription {
    pub name: String,
    pub description: String,
}

lazy_static! {
    // whole-value replacement only, never patched field by field
    static ref CURRENT_PROFILE: Mutex<Option<HardwareProfile>> = Mutex::new(None);
}

/// Returns the cached profile, estimating it on first use.
pub async fn current_profile() -> HardwareProfile {
    let mut slot = CURRENT_PROFILE.lock().await;

    match slot.as_ref() {
        Some(profile) => profile.clone(),
        None => {
            let profile = estimate_profile(&SystemProbe::new());
            info!("initial hardware scan: {:?}", profile);
            *slot = Some(profile.clone());
            profile
        }
    }
}

/// Re-runs estimation and replaces the cached profile atomically. Concurrent
/// rescans race benignly, last writer wins.
pub async fn rescan_profile() -> HardwareProfile {
    let profile = estimate_profile(&SystemProbe::new());
    info!("rescanned hardware: {:?}", profile);

    let mut slot = CURRENT_PROFILE.lock().await;
    *slot = Some(profile.clone());

    profile
}

pub async fn get_default_scanner_desc() -> ScannerDescription {
    const LE_DOT: &str = " • ";

    let profile = current_profile().await;

    let name = System::host_name().unwrap_or("Unknown".to_string()) + LE_DOT + profile.os.tag();
    let description = format!("{} cores", profile.cpu.cores)
        + LE_DOT
        + &format!("{:.1}GB RAM", profile.ram_mb as f64 / 1024.0)
        + LE_DOT
        + &profile.gpu.renderer
        + LE_DOT
        + &format!(
            "{} free",
            format_file_size(profile.storage.available_bytes)
        );

    ScannerDescription { name, description }
}
