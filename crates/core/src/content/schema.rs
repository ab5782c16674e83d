//! # Schema 契约校验
//!
//! 字段类型与缺省值由 `serde` 派生保证，这里补充类型系统表达不了的结构约束：
//! 键非空、集合内键唯一。API 层在序列化前对每个响应调用 [`Validate::validate`]。

use std::collections::HashSet;

use crate::content::entity::{CourseLesson, CourseStage, NewsItem, ToolItem};
use crate::content::error::ContentError;

/// 可在序列化前做结构校验的类型。
pub trait Validate {
    /// # Summary
    /// 校验自身是否满足 Schema 契约。
    ///
    /// # Returns
    /// 满足返回 Ok，否则返回描述违规记录的 `ContentError::Validation`。
    fn validate(&self) -> Result<(), ContentError>;
}

/// 带有唯一键的记录。
pub trait Keyed {
    /// 记录种类名称，用于错误信息
    const KIND: &'static str;

    /// 返回记录的唯一键
    fn key(&self) -> &str;
}

impl Keyed for NewsItem {
    const KIND: &'static str = "news item";

    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for ToolItem {
    const KIND: &'static str = "tool";

    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for CourseLesson {
    const KIND: &'static str = "lesson";

    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for CourseStage {
    const KIND: &'static str = "course stage";

    fn key(&self) -> &str {
        &self.key
    }
}

fn ensure_key<T: Keyed>(record: &T) -> Result<(), ContentError> {
    if record.key().trim().is_empty() {
        return Err(ContentError::Validation(format!("{} has an empty key", T::KIND)));
    }
    Ok(())
}

impl Validate for NewsItem {
    fn validate(&self) -> Result<(), ContentError> {
        ensure_key(self)
    }
}

impl Validate for ToolItem {
    fn validate(&self) -> Result<(), ContentError> {
        ensure_key(self)
    }
}

impl Validate for CourseLesson {
    fn validate(&self) -> Result<(), ContentError> {
        ensure_key(self)
    }
}

impl Validate for CourseStage {
    fn validate(&self) -> Result<(), ContentError> {
        ensure_key(self)?;
        // 课时 ID 只要求在阶段内唯一
        self.lessons.as_slice().validate().map_err(|e| match e {
            ContentError::Validation(msg) => {
                ContentError::Validation(format!("stage `{}`: {}", self.key, msg))
            }
        })
    }
}

/// # Summary
/// 校验一个响应集合。
///
/// # Logic
/// 1. 逐条校验记录自身。
/// 2. 检查集合内键唯一，遇到第一个重复键即返回错误。
impl<T: Keyed + Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::with_capacity(self.len());
        for record in self {
            record.validate()?;
            if !seen.insert(record.key()) {
                return Err(ContentError::Validation(format!(
                    "duplicate {} key `{}`",
                    T::KIND,
                    record.key()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Timeframe;

    fn news(id: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: "title".to_string(),
            summary: "summary".to_string(),
            timeframe: Timeframe::Short,
            tags: vec![],
            source: None,
        }
    }

    fn lesson(id: &str) -> CourseLesson {
        CourseLesson {
            id: id.to_string(),
            title: "lesson".to_string(),
            objectives: vec!["objective".to_string()],
            level: "Ignition".to_string(),
        }
    }

    fn stage(key: &str, lessons: Vec<CourseLesson>) -> CourseStage {
        CourseStage {
            key: key.to_string(),
            title: "stage".to_string(),
            description: "description".to_string(),
            lessons,
        }
    }

    #[test]
    fn test_unique_news_passes() {
        let items = vec![news("n1"), news("n2")];
        assert!(items.validate().is_ok());
    }

    #[test]
    fn test_duplicate_news_id_rejected() {
        let items = vec![news("n1"), news("n1")];
        let err = items.validate().unwrap_err();
        assert_eq!(err, ContentError::Validation("duplicate news item key `n1`".to_string()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let items = vec![news("  ")];
        assert!(items.validate().is_err());
    }

    #[test]
    fn test_lesson_ids_scoped_to_stage() {
        // 不同阶段可以复用课时 ID
        let stages = vec![
            stage("a", vec![lesson("X1"), lesson("X2")]),
            stage("b", vec![lesson("X1"), lesson("X2")]),
        ];
        assert!(stages.validate().is_ok());
    }

    #[test]
    fn test_duplicate_lesson_in_stage_rejected() {
        let stages = vec![stage("a", vec![lesson("X1"), lesson("X1")])];
        let err = stages.validate().unwrap_err();
        assert!(err.to_string().contains("stage `a`"));
        assert!(err.to_string().contains("X1"));
    }

    #[test]
    fn test_duplicate_stage_key_rejected() {
        let stages = vec![stage("a", vec![]), stage("a", vec![])];
        assert!(stages.validate().is_err());
    }
}
