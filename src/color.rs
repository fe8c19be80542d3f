use crate::model::AssetType;

pub const TABLE_COLOR: &str = "#5470c6";
pub const FILE_COLOR: &str = "#91cc75";
pub const COLUMN_COLOR: &str = "#fac858";
pub const FALLBACK_COLOR: &str = "#73c0de";

impl AssetType {
    /// Display color for a node of this type
    pub fn color(&self) -> &'static str {
        match self {
            AssetType::Table => TABLE_COLOR,
            AssetType::File => FILE_COLOR,
            AssetType::Column => COLUMN_COLOR,
            AssetType::Other(_) => FALLBACK_COLOR,
        }
    }
}

/// Maps a raw type tag to its display color. Total over all strings.
pub fn color_for(tag: &str) -> &'static str {
    AssetType::from(tag).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(color_for("table"), "#5470c6");
        assert_eq!(color_for("file"), "#91cc75");
        assert_eq!(color_for("column"), "#fac858");
    }

    #[test]
    fn test_unknown_types_fall_back() {
        for tag in ["", "unknown", "api", "row", "TABLE", " table"] {
            assert_eq!(color_for(tag), FALLBACK_COLOR, "tag {:?}", tag);
        }
    }

    #[test]
    fn test_missing_type_falls_back() {
        assert_eq!(AssetType::default().color(), FALLBACK_COLOR);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(color_for("file"), color_for("file"));
        assert_eq!(color_for("mystery"), color_for("mystery"));
    }
}
