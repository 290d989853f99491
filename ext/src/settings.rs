//! Session settings: a fixed table of named integer knobs with defaults and
//! bounds, changed at runtime through `set` and read through `show`.
//!
//! Initial values come from `DSVIZ_<NAME>` environment variables when present
//! and valid. A change only affects instances constructed afterwards.

use serde::Serialize;

use crate::error::{ExtError, Result};

/// Static description of one setting.
#[derive(Debug)]
pub struct SettingDef {
    pub name: &'static str,
    pub short_desc: &'static str,
    pub default: i64,
    pub min: i64,
    pub max: i64,
}

pub static SETTING_DEFS: [SettingDef; 3] = [
    SettingDef {
        name: "heap_capacity",
        short_desc: "Capacity of newly constructed binary heaps",
        default: dsviz_core::DEFAULT_HEAP_CAPACITY as i64,
        min: 1,
        max: 1_000_000,
    },
    SettingDef {
        name: "hash_buckets",
        short_desc: "Bucket count of newly constructed hash tables",
        default: dsviz_core::DEFAULT_BUCKETS as i64,
        min: 1,
        max: 4096,
    },
    SettingDef {
        name: "max_vertices",
        short_desc: "Largest vertex count graph construction accepts",
        default: 1024,
        min: 0,
        max: 4096,
    },
];

/// Look up a setting definition by name.
pub fn lookup(name: &str) -> Result<&'static SettingDef> {
    SETTING_DEFS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| ExtError::UnknownSetting(name.to_string()))
}

/// Current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub heap_capacity: usize,
    pub hash_buckets: usize,
    pub max_vertices: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings {
            heap_capacity: 0,
            hash_buckets: 0,
            max_vertices: 0,
        };
        for def in &SETTING_DEFS {
            settings.store(def.name, def.default);
        }
        settings
    }
}

impl Settings {
    /// Defaults, overridden by any valid `DSVIZ_<NAME>` environment variable.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        for def in &SETTING_DEFS {
            let var = format!("DSVIZ_{}", def.name.to_uppercase());
            let Ok(raw) = std::env::var(&var) else {
                continue;
            };
            let applied = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ExtError::BadArgument {
                    op: "env".to_string(),
                    name: def.name,
                    expected: "an integer",
                    found: raw.clone(),
                })
                .and_then(|value| settings.set(def.name, value));
            if let Err(e) = applied {
                tracing::warn!(var = %var, error = %e, "ignoring environment override");
            }
        }
        settings
    }

    pub fn get(&self, name: &str) -> Result<i64> {
        let def = lookup(name)?;
        let value = match def.name {
            "heap_capacity" => self.heap_capacity,
            "hash_buckets" => self.hash_buckets,
            _ => self.max_vertices,
        };
        Ok(value as i64)
    }

    /// Validate `value` against the setting's bounds and store it.
    pub fn set(&mut self, name: &str, value: i64) -> Result<()> {
        let def = lookup(name)?;
        if value < def.min || value > def.max {
            return Err(ExtError::SettingOutOfRange {
                name: def.name,
                min: def.min,
                max: def.max,
                value,
            });
        }
        self.store(def.name, value);
        Ok(())
    }

    // Bounds are checked by the caller and every minimum is non-negative.
    fn store(&mut self, name: &str, value: i64) {
        let value = value as usize;
        match name {
            "heap_capacity" => self.heap_capacity = value,
            "hash_buckets" => self.hash_buckets = value,
            _ => self.max_vertices = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.heap_capacity, 100);
        assert_eq!(s.hash_buckets, 10);
        assert_eq!(s.max_vertices, 1024);
    }

    #[test]
    fn test_set_and_get() {
        let mut s = Settings::default();
        s.set("hash_buckets", 7).unwrap();
        assert_eq!(s.get("hash_buckets").unwrap(), 7);
        assert_eq!(s.hash_buckets, 7);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut s = Settings::default();
        let err = s.set("heap_capacity", 0).unwrap_err();
        assert!(matches!(err, ExtError::SettingOutOfRange { min: 1, .. }));
        assert_eq!(s.heap_capacity, 100);
    }

    #[test]
    fn test_unknown_setting() {
        let mut s = Settings::default();
        assert!(matches!(s.set("colour", 1), Err(ExtError::UnknownSetting(_))));
        assert!(matches!(s.get("colour"), Err(ExtError::UnknownSetting(_))));
    }

    #[test]
    fn test_every_default_within_bounds() {
        for def in &SETTING_DEFS {
            assert!(def.min <= def.default && def.default <= def.max, "{}", def.name);
        }
    }
}
