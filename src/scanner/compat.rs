use serde::{Deserialize, Serialize};

use crate::scanner::profile::HardwareProfile;
use crate::scanner::requirements;

// GPU capability dominates how well the catalog titles run, storage barely
// matters once the install fits.
pub const WEIGHT_CPU: f64 = 0.30;
pub const WEIGHT_GPU: f64 = 0.40;
pub const WEIGHT_RAM: f64 = 0.20;
pub const WEIGHT_STORAGE: f64 = 0.10;

// Global thresholds, not per game.
pub const RECOMMENDED_SCORE_THRESHOLD: u32 = 80;
const TIP_SCORE_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
    pub storage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub can_run: bool,
    pub meets_recommended: bool,
    pub issues: Vec<String>,
    pub scores: CategoryScores,
    pub overall_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationTip {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGame {
    pub game_id: String,
    pub result: CompatibilityResult,
}

/// Scores a profile against one game. `None` means the game id is not in
/// the catalog, which is "no opinion" rather than a failure, callers must
/// branch on it explicitly.
pub fn check_compatibility(
    profile: &HardwareProfile,
    game_id: &str,
) -> Option<CompatibilityResult> {
    let reqs = requirements::get_requirements(game_id)?;
    let min = &reqs.minimum;
    let rec = &reqs.recommended;

    let mut can_run = true;
    let mut issues: Vec<String> = vec![];

    let cores = profile.cpu.cores as f64;
    let cpu_score = ratio_score(cores, rec.cpu_cores as f64);
    if profile.cpu.cores < min.cpu_cores {
        can_run = false;
        issues.push(format!("CPU: Needs {}+ cores", min.cpu_cores));
    }

    let ram_mb = profile.ram_mb as f64;
    let ram_score = ratio_score(ram_mb, rec.ram_mb as f64);
    if profile.ram_mb < min.ram_mb {
        can_run = false;
        issues.push(format!("RAM: Needs {}GB+", min.ram_mb / 1024));
    }

    let vram_mb = profile.gpu.memory_mb as f64;
    let gpu_score = ratio_score(vram_mb, rec.gpu_memory_mb as f64);
    if profile.gpu.memory_mb < min.gpu_memory_mb {
        can_run = false;
        issues.push(format!("GPU: Needs {}GB+ VRAM", min.gpu_memory_mb / 1024));
    }

    let available_mb = profile.storage.available_bytes as f64 / 1024.0 / 1024.0;
    let storage_score = ratio_score(available_mb, rec.storage_mb as f64);
    if available_mb < min.storage_mb as f64 {
        can_run = false;
        issues.push(format!("Storage: Needs {}GB+ free", min.storage_mb / 1024));
    }

    let overall = cpu_score * WEIGHT_CPU
        + gpu_score * WEIGHT_GPU
        + ram_score * WEIGHT_RAM
        + storage_score * WEIGHT_STORAGE;
    let overall_score = overall.round() as u32;

    Some(CompatibilityResult {
        can_run,
        meets_recommended: overall_score >= RECOMMENDED_SCORE_THRESHOLD,
        issues,
        scores: CategoryScores {
            cpu: cpu_score,
            gpu: gpu_score,
            ram: ram_score,
            storage: storage_score,
        },
        overall_score,
    })
}

// Linear ratio against the recommended tier, capped at 100.
fn ratio_score(value: f64, recommended: f64) -> f64 {
    (value / recommended * 100.0).min(100.0)
}

/// One fixed tip per category scoring under the threshold, in cpu/gpu/ram
/// order. Storage has no tip.
pub fn optimization_tips(result: &CompatibilityResult) -> Vec<OptimizationTip> {
    let mut tips = vec![];

    if result.scores.cpu < TIP_SCORE_THRESHOLD {
        tips.push(OptimizationTip {
            title: "CPU Optimization".to_string(),
            content: "Close background applications, update drivers, consider overclocking if supported".to_string(),
        });
    }

    if result.scores.gpu < TIP_SCORE_THRESHOLD {
        tips.push(OptimizationTip {
            title: "GPU Optimization".to_string(),
            content: "Lower in-game resolution to 1080p, disable ray tracing, update graphics drivers".to_string(),
        });
    }

    if result.scores.ram < TIP_SCORE_THRESHOLD {
        tips.push(OptimizationTip {
            title: "RAM Management".to_string(),
            content: "Close unused browser tabs, disable startup programs, consider adding more RAM".to_string(),
        });
    }

    tips
}

/// Scores every requested game, keeps only the ones the profile can run,
/// and orders them best first. Equal scores keep catalog declaration order.
pub fn rank_compatible(profile: &HardwareProfile, game_ids: &[String]) -> Vec<RankedGame> {
    let mut ranked: Vec<(usize, RankedGame)> = game_ids
        .iter()
        .filter_map(|game_id| {
            let result = check_compatibility(profile, game_id)?;
            if !result.can_run {
                return None;
            }

            let index = requirements::catalog_index(game_id).unwrap_or(usize::MAX);
            Some((
                index,
                RankedGame {
                    game_id: game_id.clone(),
                    result,
                },
            ))
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.result
            .overall_score
            .cmp(&a.1.result.overall_score)
            .then(a.0.cmp(&b.0))
    });

    ranked.into_iter().map(|(_, game)| game).collect()
}
