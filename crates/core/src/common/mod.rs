use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod text;

/// # Summary
/// 资讯的时间跨度分类，决定一条资讯关注的是短线还是长线影响。
///
/// # Invariants
/// - 线上格式固定为小写字面量 `"short"` / `"long"`。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    // 短线 (数日内)
    Short,
    // 长线 (季度及以上)
    Long,
}

/// 课程体系中有文档记载的五个等级，按学习顺序排列。
pub const DOCUMENTED_LEVELS: [&str; 5] = ["Launchpad", "Pre-Launch", "Ignition", "Ascent", "Orbit"];

/// # Summary
/// 判断等级标签是否属于有文档记载的等级词表。
///
/// # Logic
/// 1. 与 `DOCUMENTED_LEVELS` 逐个做大小写敏感比较。
///
/// # Arguments
/// * `label`: 工具或课时上的等级标签。
///
/// # Returns
/// 属于词表返回 `true`。词表之外的标签 (如 "Mission Control") 仍然合法，只是不在文档中。
pub fn is_documented_level(label: &str) -> bool {
    DOCUMENTED_LEVELS.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_wire_format() {
        assert_eq!(serde_json::to_string(&Timeframe::Short).unwrap(), "\"short\"");
        assert_eq!(serde_json::to_string(&Timeframe::Long).unwrap(), "\"long\"");
        let parsed: Timeframe = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(parsed, Timeframe::Long);
        assert!(serde_json::from_str::<Timeframe>("\"medium\"").is_err());
    }

    #[test]
    fn test_documented_levels() {
        assert!(is_documented_level("Pre-Launch"));
        assert!(is_documented_level("Orbit"));
        assert!(!is_documented_level("Mission Control"));
        assert!(!is_documented_level("orbit"));
    }
}
