use serde::{Deserialize, Serialize};

/// Normalized snapshot of the host hardware. Built once by the estimator,
/// every field always holds a usable value, unavailable signals are replaced
/// with documented defaults so consumers never need to null-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub cpu: CpuProfile,
    pub gpu: GpuProfile,
    pub ram_mb: u64,
    pub storage: StorageProfile,
    pub os: OsKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuProfile {
    pub cores: u32,
    pub architecture: CpuArchitecture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuProfile {
    // free-text descriptor as reported by the graphics stack
    pub renderer: String,
    pub vendor: String,
    // estimated, not measured (see estimate::estimate_vram_mb)
    pub memory_mb: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageProfile {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuArchitecture {
    X64,
    Arm64,
    X86,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsKind {
    Windows,
    MacArm,
    MacIntel,
    Linux,
    Unknown,
}

impl OsKind {
    pub fn tag(&self) -> &'static str {
        match self {
            OsKind::Windows => "windows",
            OsKind::MacArm => "mac-arm",
            OsKind::MacIntel => "mac-intel",
            OsKind::Linux => "linux",
            OsKind::Unknown => "unknown",
        }
    }
}

/// Human readable byte count, e.g. "1.5 KB", "50 GB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut idx = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    if idx >= UNITS.len() {
        idx = UNITS.len() - 1;
    }

    let val = bytes as f64 / 1024f64.powi(idx as i32);
    // two decimals with trailing zeros dropped
    let rounded = (val * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[idx])
}
