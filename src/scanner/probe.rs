use log::debug;
use sysinfo::{Disks, System};
use thiserror::Error;

use std::fs;
use std::path::Path;
use std::process::Command;

/// One method per external signal source. `None` always means "signal
/// unavailable"; implementations must swallow their own failures and degrade
/// to `None` so the estimator can substitute the documented default.
pub trait SignalProbe {
    /// Logical processor count hint.
    fn cpu_concurrency(&self) -> Option<u32>;

    /// Short platform tag, e.g. "Win64", "Linux x86_64", "MacARM".
    fn platform(&self) -> Option<String>;

    /// Longer OS/device identification string, e.g. "Windows 10 Pro".
    fn os_descriptor(&self) -> Option<String>;

    /// Renderer and vendor strings from the graphics stack.
    fn gpu_descriptor(&self) -> Option<GpuDescriptor>;

    /// Approximate total memory in gigabytes.
    fn memory_gb(&self) -> Option<f64>;

    /// Storage quota/usage estimate in bytes.
    fn storage_estimate(&self) -> Option<StorageEstimate>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpuDescriptor {
    pub renderer: String,
    pub vendor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageEstimate {
    pub quota_bytes: u64,
    pub usage_bytes: u64,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("command execution failed: {0}")]
    CommandFailed(String),

    #[error("gpu enumeration failed: {0}")]
    GpuEnumeration(String),

    #[error("no disks reported")]
    NoDisks,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Production probe backed by sysinfo plus direct sysfs/lspci GPU
/// enumeration on linux and the cpu brand / system_profiler on macos.
pub struct SystemProbe;

impl SystemProbe {
    pub fn new() -> Self {
        Self
    }
}

impl SignalProbe for SystemProbe {
    fn cpu_concurrency(&self) -> Option<u32> {
        let mut system = System::new();
        system.refresh_cpu();

        let count = system.cpus().len();
        if count == 0 {
            None
        } else {
            Some(count as u32)
        }
    }

    fn platform(&self) -> Option<String> {
        let arch = System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string());

        let platform = match (std::env::consts::OS, arch.as_str()) {
            ("windows", "x86_64") => "Win64".to_string(),
            ("linux", "x86_64") => "Linux x86_64".to_string(),
            ("macos", "aarch64" | "arm64") => "MacARM".to_string(),
            (os, arch) => format!("{} {}", os, arch),
        };

        Some(platform)
    }

    fn os_descriptor(&self) -> Option<String> {
        let long = System::long_os_version();
        let name = System::name();

        match (long, name) {
            (Some(long), Some(name)) => Some(format!("{} ({})", long, name)),
            (Some(long), None) => Some(long),
            (None, Some(name)) => Some(name),
            (None, None) => None,
        }
    }

    fn gpu_descriptor(&self) -> Option<GpuDescriptor> {
        let result = match std::env::consts::OS {
            "linux" => detect_gpu_linux(),
            "macos" => detect_gpu_macos(),
            other => Err(ProbeError::GpuEnumeration(format!(
                "unsupported platform: {}",
                other
            ))),
        };

        match result {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                debug!("gpu probe unavailable: {}", e);
                None
            }
        }
    }

    fn memory_gb(&self) -> Option<f64> {
        let mut system = System::new();
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            None
        } else {
            Some(total as f64 / 1024.0 / 1024.0 / 1024.0)
        }
    }

    fn storage_estimate(&self) -> Option<StorageEstimate> {
        let disks = Disks::new_with_refreshed_list();

        if disks.list().is_empty() {
            debug!("storage probe unavailable: {}", ProbeError::NoDisks);
            return None;
        }

        let mut quota: u64 = 0;
        let mut available: u64 = 0;
        for disk in disks.list() {
            quota += disk.total_space();
            available += disk.available_space();
        }

        Some(StorageEstimate {
            quota_bytes: quota,
            usage_bytes: quota.saturating_sub(available),
        })
    }
}

fn run_command(cmd: &str, args: &[&str]) -> Result<String, ProbeError> {
    let output = Command::new(cmd)
        .args(args)
        .output()
        .map_err(|e| ProbeError::CommandFailed(format!("{}: {}", cmd, e)))?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed(format!(
            "{} exited with {}",
            cmd, output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

fn detect_gpu_linux() -> Result<GpuDescriptor, ProbeError> {
    // sysfs first, lspci as fallback
    if let Some(descriptor) = read_drm_cards(Path::new("/sys/class/drm")) {
        return Ok(descriptor);
    }

    let output = run_command("lspci", &[])?;
    for line in output.lines() {
        let is_display = line.contains("VGA compatible controller")
            || line.contains("3D controller")
            || line.contains("Display controller");
        if !is_display {
            continue;
        }

        if let Some(renderer) = parse_lspci_gpu(line) {
            let vendor = vendor_from_renderer(&renderer);
            return Ok(GpuDescriptor { renderer, vendor });
        }
    }

    Err(ProbeError::GpuEnumeration(
        "no display controller found".to_string(),
    ))
}

fn read_drm_cards(drm_root: &Path) -> Option<GpuDescriptor> {
    let entries = fs::read_dir(drm_root).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        // "card0" is a device, "card0-DP-1" is a connector
        if !name.starts_with("card") || name.contains('-') {
            continue;
        }

        let device_name = match fs::read_to_string(path.join("device/name")) {
            Ok(n) => n.trim().to_string(),
            Err(_) => continue,
        };
        if device_name.is_empty() {
            continue;
        }

        let vendor = fs::read_to_string(path.join("device/vendor"))
            .map(|id| vendor_from_pci_id(id.trim()).to_string())
            .unwrap_or_else(|_| vendor_from_renderer(&device_name));

        return Some(GpuDescriptor {
            renderer: device_name,
            vendor,
        });
    }

    None
}

fn detect_gpu_macos() -> Result<GpuDescriptor, ProbeError> {
    let mut system = System::new();
    system.refresh_cpu();

    // Apple Silicon exposes the GPU through the same chip as the CPU
    if let Some(brand) = system.cpus().first().map(|c| c.brand().to_string()) {
        if brand.starts_with("Apple") {
            return Ok(GpuDescriptor {
                renderer: brand,
                vendor: "Apple Inc.".to_string(),
            });
        }
    }

    let output = run_command("system_profiler", &["SPDisplaysDataType"])?;
    for line in output.lines() {
        if let Some(model) = line.trim().strip_prefix("Chipset Model: ") {
            return Ok(GpuDescriptor {
                renderer: model.to_string(),
                vendor: vendor_from_renderer(model),
            });
        }
    }

    Err(ProbeError::GpuEnumeration(
        "no chipset model reported".to_string(),
    ))
}

pub(crate) fn parse_lspci_gpu(line: &str) -> Option<String> {
    // "01:00.0 VGA compatible controller: NVIDIA Corporation GA104 [GeForce RTX 3070] (rev a1)"
    let (_, description) = line.rsplit_once(": ")?;
    let cleaned = description
        .split(" (rev ")
        .next()
        .unwrap_or(description)
        .trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

pub(crate) fn vendor_from_pci_id(id: &str) -> &'static str {
    match id {
        "0x10de" => "NVIDIA Corporation",
        "0x1002" => "Advanced Micro Devices, Inc.",
        "0x8086" => "Intel Corporation",
        _ => "Unknown Vendor",
    }
}

pub(crate) fn vendor_from_renderer(renderer: &str) -> String {
    if renderer.contains("NVIDIA") || renderer.contains("GeForce") {
        "NVIDIA Corporation".to_string()
    } else if renderer.contains("AMD") || renderer.contains("Radeon") {
        "Advanced Micro Devices, Inc.".to_string()
    } else if renderer.contains("Intel") {
        "Intel Corporation".to_string()
    } else if renderer.contains("Apple") {
        "Apple Inc.".to_string()
    } else {
        "Unknown Vendor".to_string()
    }
}
