use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::Timeframe;

/// # Summary
/// 市场资讯条目，对应客户端的资讯卡片。
///
/// # Invariants
/// - `id` 在一次响应内唯一且非空。
/// - `tags` 缺省为空列表，`source` 缺省为 `null`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsItem {
    /// 资讯 ID
    #[schema(example = "n1")]
    pub id: String,
    /// 标题
    #[schema(example = "CPI prints inline; initial risk-on reaction fades")]
    pub title: String,
    /// 摘要
    pub summary: String,
    /// 时间跨度
    pub timeframe: Timeframe,
    /// 标签，按编写顺序
    #[serde(default)]
    pub tags: Vec<String>,
    /// 来源栏目
    #[serde(default)]
    #[schema(example = "ROQET Brief")]
    pub source: Option<String>,
}

/// # Summary
/// 交易工具说明条目。
///
/// # Invariants
/// - `id` 在一次响应内唯一且非空。
/// - `level` 为自由文本标签，不强制属于课程等级词表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToolItem {
    /// 工具 ID
    #[schema(example = "position-sizer")]
    pub id: String,
    /// 工具名称
    #[schema(example = "Position Sizer")]
    pub name: String,
    /// 用途
    pub purpose: String,
    /// 使用时机
    pub when_to_use: String,
    /// 最佳实践，按编写顺序
    #[serde(default)]
    pub best_practices: Vec<String>,
    /// 适用等级 (Launchpad, Pre-Launch, Ignition, Ascent, Orbit)
    #[schema(example = "Pre-Launch")]
    pub level: String,
}

/// 课程中的单个课时。`id` 仅要求在所属阶段内唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseLesson {
    #[schema(example = "L1")]
    pub id: String,
    pub title: String,
    pub objectives: Vec<String>,
    #[schema(example = "Launchpad")]
    pub level: String,
}

/// # Summary
/// 课程阶段，包含按教学顺序排列的课时。
///
/// # Invariants
/// - `key` 在一次响应内唯一且非空。
/// - `lessons` 保持编写顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseStage {
    /// 阶段键
    #[schema(example = "launchpad")]
    pub key: String,
    /// 阶段标题
    pub title: String,
    /// 阶段说明
    pub description: String,
    /// 课时列表
    pub lessons: Vec<CourseLesson>,
}
