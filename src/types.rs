use std::fmt;

use serde::Deserialize;

/// How two consecutive snapshots are compared.
///
/// - `Exclusive`: pick exactly one kind of change per tick based on the
///   snapshot sizes (equal → modified, shrunk → removed, grew → added).
///   A tick where files are both added and removed is not fully reported.
/// - `ThreeWay`: compute added, removed and modified files independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffPolicy {
    Exclusive,
    ThreeWay,
}

impl Default for DiffPolicy {
    fn default() -> Self {
        DiffPolicy::Exclusive
    }
}

impl fmt::Display for DiffPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffPolicy::Exclusive => f.write_str("exclusive"),
            DiffPolicy::ThreeWay => f.write_str("three_way"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_config_spelling() {
        assert_eq!(DiffPolicy::ThreeWay.to_string(), "three_way");
        assert_eq!(DiffPolicy::default().to_string(), "exclusive");
    }
}
