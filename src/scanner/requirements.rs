use lazy_static::lazy_static;
use maplit::hashmap;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// One requirement bundle per category, all values the game declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequirementTier {
    pub cpu_cores: u32,
    pub ram_mb: u64,
    pub gpu_memory_mb: u64,
    pub storage_mb: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequirements {
    pub minimum: GameRequirementTier,
    pub recommended: GameRequirementTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEntry {
    pub display_name: &'static str,
    pub requirements: GameRequirements,
}

// Declaration order doubles as the ranking tie-break order.
pub const GAME_IDS: [&str; 3] = ["cyberpunk2077", "eldenring", "minecraft"];

const fn tier(cpu_cores: u32, ram_mb: u64, gpu_memory_mb: u64, storage_mb: u64) -> GameRequirementTier {
    GameRequirementTier {
        cpu_cores,
        ram_mb,
        gpu_memory_mb,
        storage_mb,
    }
}

lazy_static! {
    static ref CATALOG: HashMap<&'static str, GameEntry> = hashmap! {
        "cyberpunk2077" => GameEntry {
            display_name: "Cyberpunk 2077",
            requirements: GameRequirements {
                minimum: tier(4, 8192, 3072, 70000),
                recommended: tier(8, 16384, 6144, 70000),
            },
        },
        "eldenring" => GameEntry {
            display_name: "Elden Ring",
            requirements: GameRequirements {
                minimum: tier(4, 8192, 3072, 60000),
                recommended: tier(8, 16384, 6144, 60000),
            },
        },
        "minecraft" => GameEntry {
            display_name: "Minecraft",
            requirements: GameRequirements {
                minimum: tier(2, 2048, 1024, 1000),
                recommended: tier(4, 4096, 2048, 4000),
            },
        },
    };
}

pub fn get_entry(game_id: &str) -> Option<&'static GameEntry> {
    CATALOG.get(game_id)
}

pub fn get_requirements(game_id: &str) -> Option<&'static GameRequirements> {
    get_entry(game_id).map(|entry| &entry.requirements)
}

pub fn catalog_index(game_id: &str) -> Option<usize> {
    GAME_IDS.iter().position(|id| *id == game_id)
}

pub fn all_game_ids() -> Vec<String> {
    GAME_IDS.iter().map(|id| id.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_test() {
        let reqs = get_requirements("cyberpunk2077").unwrap();
        assert_eq!(reqs.minimum.cpu_cores, 4);
        assert_eq!(reqs.minimum.ram_mb, 8192);
        assert_eq!(reqs.recommended.gpu_memory_mb, 6144);
        assert_eq!(reqs.recommended.storage_mb, 70000);

        assert_eq!(get_entry("minecraft").unwrap().display_name, "Minecraft");
        assert!(get_requirements("halflife3").is_none());
    }

    #[test]
    fn catalog_covers_all_declared_ids_test() {
        for id in GAME_IDS {
            assert!(get_entry(id).is_some(), "missing catalog entry for {}", id);
        }
        assert_eq!(CATALOG.len(), GAME_IDS.len());
    }

    #[test]
    fn catalog_index_test() {
        assert_eq!(catalog_index("cyberpunk2077"), Some(0));
        assert_eq!(catalog_index("eldenring"), Some(1));
        assert_eq!(catalog_index("minecraft"), Some(2));
        assert_eq!(catalog_index("halflife3"), None);
    }
}
