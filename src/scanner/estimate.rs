use log::debug;

use crate::scanner::probe::{GpuDescriptor, SignalProbe, StorageEstimate};
use crate::scanner::profile::{
    CpuArchitecture, CpuProfile, GpuProfile, HardwareProfile, OsKind, StorageProfile,
};

pub const DEFAULT_CPU_CORES: u32 = 4;
pub const DEFAULT_VRAM_MB: u64 = 2048;
pub const MOBILE_RAM_FALLBACK_MB: u64 = 4000;
pub const DESKTOP_RAM_FALLBACK_MB: u64 = 8000;
pub const DEFAULT_STORAGE_TOTAL_BYTES: u64 = 256 * 1024 * 1024 * 1024;
pub const DEFAULT_STORAGE_AVAILABLE_BYTES: u64 = 50 * 1024 * 1024 * 1024;

const UNKNOWN_RENDERER: &str = "Unknown";
const UNKNOWN_VENDOR: &str = "Unknown Vendor";

// Tried top to bottom, first match wins. Keep the more specific model
// families above the broader ones.
pub const VRAM_PATTERNS: [(&str, u64); 9] = [
    ("RTX 30", 8000),
    ("RTX 20", 6000),
    ("GTX 16", 4000),
    ("Radeon RX 6", 8000),
    ("Radeon RX 5", 4000),
    ("Intel HD", 1024),
    ("Intel Iris", 2048),
    ("M1", 8000),
    ("M2", 12000),
];

/// Builds a complete profile from whatever signals the probe can provide.
/// Total function: a missing or failed signal falls back to its documented
/// default, it never propagates.
pub fn estimate_profile(probe: &dyn SignalProbe) -> HardwareProfile {
    let platform = probe.platform();
    let descriptor = probe.os_descriptor();

    let cores = probe
        .cpu_concurrency()
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_CPU_CORES);
    let architecture = detect_architecture(platform.as_deref());

    let gpu_descriptor = probe.gpu_descriptor().unwrap_or_else(|| GpuDescriptor {
        renderer: UNKNOWN_RENDERER.to_string(),
        vendor: UNKNOWN_VENDOR.to_string(),
    });
    let memory_mb = estimate_vram_mb(&gpu_descriptor.renderer);

    let ram_mb = estimate_ram_mb(probe.memory_gb(), descriptor.as_deref());
    let storage = storage_profile(probe.storage_estimate());
    let os = detect_os(descriptor.as_deref(), platform.as_deref());

    let profile = HardwareProfile {
        cpu: CpuProfile {
            cores,
            architecture,
        },
        gpu: GpuProfile {
            renderer: gpu_descriptor.renderer,
            vendor: gpu_descriptor.vendor,
            memory_mb,
        },
        ram_mb,
        storage,
        os,
    };

    debug!("estimated profile: {:?}", profile);

    profile
}

pub fn detect_architecture(platform: Option<&str>) -> CpuArchitecture {
    let platform = match platform {
        Some(p) => p,
        None => return CpuArchitecture::Unknown,
    };

    if platform.contains("Win64") || platform.contains("Linux x86_64") {
        return CpuArchitecture::X64;
    }

    let lower = platform.to_lowercase();
    if platform.contains("MacARM") || lower.contains("arm") || lower.contains("aarch") {
        return CpuArchitecture::Arm64;
    }

    CpuArchitecture::X86
}

pub fn estimate_vram_mb(renderer: &str) -> u64 {
    for (pattern, vram) in VRAM_PATTERNS {
        if renderer.contains(pattern) {
            return vram;
        }
    }

    DEFAULT_VRAM_MB
}

pub fn estimate_ram_mb(memory_gb: Option<f64>, descriptor: Option<&str>) -> u64 {
    if let Some(gb) = memory_gb {
        if gb > 0.0 {
            return (gb * 1024.0).round() as u64;
        }
    }

    let is_mobile = descriptor
        .map(|d| {
            let lower = d.to_lowercase();
            lower.contains("mobile") || lower.contains("android") || lower.contains("iphone")
        })
        .unwrap_or(false);

    if is_mobile {
        MOBILE_RAM_FALLBACK_MB
    } else {
        DESKTOP_RAM_FALLBACK_MB
    }
}

pub fn storage_profile(estimate: Option<StorageEstimate>) -> StorageProfile {
    match estimate {
        Some(e) => StorageProfile {
            total_bytes: e.quota_bytes,
            used_bytes: e.usage_bytes,
            available_bytes: e.quota_bytes.saturating_sub(e.usage_bytes),
        },
        // total and available default independently, used is unknowable here
        None => StorageProfile {
            total_bytes: DEFAULT_STORAGE_TOTAL_BYTES,
            used_bytes: 0,
            available_bytes: DEFAULT_STORAGE_AVAILABLE_BYTES,
        },
    }
}

pub fn detect_os(descriptor: Option<&str>, platform: Option<&str>) -> OsKind {
    let descriptor = match descriptor {
        Some(d) => d,
        None => return OsKind::Unknown,
    };

    if descriptor.contains("Windows") {
        return OsKind::Windows;
    }

    if descriptor.contains("Macintosh") || descriptor.contains("macOS") || descriptor.contains("Mac OS") {
        let lower = descriptor.to_lowercase();
        let apple_silicon = platform.map(|p| p.contains("MacARM")).unwrap_or(false)
            || lower.contains("apple silicon")
            || lower.contains("m1")
            || lower.contains("m2")
            || lower.contains("m3");

        return if apple_silicon {
            OsKind::MacArm
        } else {
            OsKind::MacIntel
        };
    }

    if descriptor.contains("Linux") {
        return OsKind::Linux;
    }

    OsKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe whose every signal is scripted, so each fallback branch can be
    /// exercised deterministically.
    struct FakeProbe {
        cpu_concurrency: Option<u32>,
        platform: Option<String>,
        os_descriptor: Option<String>,
        gpu_descriptor: Option<GpuDescriptor>,
        memory_gb: Option<f64>,
        storage_estimate: Option<StorageEstimate>,
    }

    impl FakeProbe {
        fn silent() -> Self {
            Self {
                cpu_concurrency: None,
                platform: None,
                os_descriptor: None,
                gpu_descriptor: None,
                memory_gb: None,
                storage_estimate: None,
            }
        }
    }

    impl SignalProbe for FakeProbe {
        fn cpu_concurrency(&self) -> Option<u32> {
            self.cpu_concurrency
        }

        fn platform(&self) -> Option<String> {
            self.platform.clone()
        }

        fn os_descriptor(&self) -> Option<String> {
            self.os_descriptor.clone()
        }

        fn gpu_descriptor(&self) -> Option<GpuDescriptor> {
            self.gpu_descriptor.clone()
        }

        fn memory_gb(&self) -> Option<f64> {
            self.memory_gb
        }

        fn storage_estimate(&self) -> Option<StorageEstimate> {
            self.storage_estimate
        }
    }

    #[test]
    fn estimate_profile_defaults_test() {
        let profile = estimate_profile(&FakeProbe::silent());

        assert_eq!(profile.cpu.cores, 4);
        assert_eq!(profile.cpu.architecture, CpuArchitecture::Unknown);
        assert_eq!(profile.gpu.renderer, "Unknown");
        assert_eq!(profile.gpu.vendor, "Unknown Vendor");
        assert_eq!(profile.gpu.memory_mb, 2048);
        assert_eq!(profile.ram_mb, 8000);
        assert_eq!(profile.storage.total_bytes, 256 * 1024 * 1024 * 1024);
        assert_eq!(profile.storage.used_bytes, 0);
        assert_eq!(profile.storage.available_bytes, 50 * 1024 * 1024 * 1024);
        assert_eq!(profile.os, OsKind::Unknown);
    }

    #[test]
    fn estimate_profile_full_signals_test() {
        let probe = FakeProbe {
            cpu_concurrency: Some(16),
            platform: Some("Win64".to_string()),
            os_descriptor: Some("Windows 11 Pro".to_string()),
            gpu_descriptor: Some(GpuDescriptor {
                renderer: "NVIDIA GeForce RTX 3080".to_string(),
                vendor: "NVIDIA Corporation".to_string(),
            }),
            memory_gb: Some(32.0),
            storage_estimate: Some(StorageEstimate {
                quota_bytes: 1024 * 1024 * 1024 * 1024,
                usage_bytes: 300 * 1024 * 1024 * 1024,
            }),
        };

        let profile = estimate_profile(&probe);

        assert_eq!(profile.cpu.cores, 16);
        assert_eq!(profile.cpu.architecture, CpuArchitecture::X64);
        assert_eq!(profile.gpu.memory_mb, 8000);
        assert_eq!(profile.ram_mb, 32768);
        assert_eq!(
            profile.storage.available_bytes,
            (1024 - 300) * 1024 * 1024 * 1024
        );
        assert_eq!(profile.os, OsKind::Windows);
    }

    #[test]
    fn detect_architecture_test() {
        assert_eq!(detect_architecture(Some("Win64")), CpuArchitecture::X64);
        assert_eq!(
            detect_architecture(Some("Linux x86_64")),
            CpuArchitecture::X64
        );
        assert_eq!(detect_architecture(Some("MacARM")), CpuArchitecture::Arm64);
        assert_eq!(
            detect_architecture(Some("linux aarch64")),
            CpuArchitecture::Arm64
        );
        assert_eq!(
            detect_architecture(Some("iPad ARM64")),
            CpuArchitecture::Arm64
        );
        assert_eq!(detect_architecture(Some("Win32")), CpuArchitecture::X86);
        assert_eq!(detect_architecture(None), CpuArchitecture::Unknown);
    }

    #[test]
    fn estimate_vram_mb_test() {
        // first match wins, "RTX 30" is checked before anything broader
        assert_eq!(estimate_vram_mb("NVIDIA GeForce RTX 3080"), 8000);
        assert_eq!(estimate_vram_mb("NVIDIA GeForce RTX 2060 SUPER"), 6000);
        assert_eq!(estimate_vram_mb("NVIDIA GeForce GTX 1660 Ti"), 4000);
        assert_eq!(estimate_vram_mb("AMD Radeon RX 6800 XT"), 8000);
        assert_eq!(estimate_vram_mb("AMD Radeon RX 5700"), 4000);
        assert_eq!(estimate_vram_mb("Intel HD Graphics 620"), 1024);
        assert_eq!(estimate_vram_mb("Intel Iris Xe Graphics"), 2048);
        assert_eq!(estimate_vram_mb("Apple M1"), 8000);
        assert_eq!(estimate_vram_mb("Apple M2 Max"), 12000);
        // unmatched renderers get the conservative default
        assert_eq!(estimate_vram_mb("Matrox G200"), 2048);
        assert_eq!(estimate_vram_mb("Unknown"), 2048);
    }

    #[test]
    fn estimate_ram_mb_test() {
        assert_eq!(estimate_ram_mb(Some(16.0), None), 16384);
        assert_eq!(estimate_ram_mb(Some(0.5), None), 512);
        // zero-or-less signal is treated as unavailable
        assert_eq!(estimate_ram_mb(Some(0.0), None), 8000);
        assert_eq!(estimate_ram_mb(None, Some("Android 13; Mobile")), 4000);
        assert_eq!(estimate_ram_mb(None, Some("iPhone OS 17_0")), 4000);
        assert_eq!(estimate_ram_mb(None, Some("Windows 10 Pro")), 8000);
        assert_eq!(estimate_ram_mb(None, None), 8000);
    }

    #[test]
    fn storage_profile_test() {
        let profile = storage_profile(Some(StorageEstimate {
            quota_bytes: 100,
            usage_bytes: 30,
        }));
        assert_eq!(profile.total_bytes, 100);
        assert_eq!(profile.used_bytes, 30);
        assert_eq!(profile.available_bytes, 70);

        // usage above quota saturates instead of wrapping
        let profile = storage_profile(Some(StorageEstimate {
            quota_bytes: 10,
            usage_bytes: 30,
        }));
        assert_eq!(profile.available_bytes, 0);

        let profile = storage_profile(None);
        assert_eq!(profile.total_bytes, 256 * 1024 * 1024 * 1024);
        assert_eq!(profile.used_bytes, 0);
        assert_eq!(profile.available_bytes, 50 * 1024 * 1024 * 1024);
    }

    #[test]
    fn detect_os_test() {
        assert_eq!(detect_os(Some("Windows 10 Pro"), None), OsKind::Windows);
        assert_eq!(
            detect_os(Some("macOS 14.2 Sonoma"), Some("MacARM")),
            OsKind::MacArm
        );
        assert_eq!(
            detect_os(Some("Macintosh; Apple Silicon"), None),
            OsKind::MacArm
        );
        assert_eq!(
            detect_os(Some("Macintosh; Intel Mac OS X 10_15_7"), Some("MacIntel x86_64")),
            OsKind::MacIntel
        );
        assert_eq!(detect_os(Some("Linux (Ubuntu 22.04)"), None), OsKind::Linux);
        assert_eq!(detect_os(Some("FreeBSD 14.0"), None), OsKind::Unknown);
        assert_eq!(detect_os(None, Some("Win64")), OsKind::Unknown);
    }
}
