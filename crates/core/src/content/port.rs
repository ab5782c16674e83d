use crate::content::entity::{CourseStage, NewsItem, ToolItem};

/// # Summary
/// 内容提供接口 (Port)，为资讯、工具、课程地图三个端点供数。
///
/// # Invariants
/// - 所有方法无输入、无副作用。
/// - 多次调用 (包括跨进程重启) 返回完全相同的内容与顺序。
pub trait ContentProvider: Send + Sync {
    /// # Summary
    /// 获取市场资讯列表。
    ///
    /// # Returns
    /// 按编写顺序排列的资讯条目。
    fn get_news(&self) -> Vec<NewsItem>;

    /// # Summary
    /// 获取交易工具列表。
    ///
    /// # Returns
    /// 按编写顺序排列的工具条目。
    fn get_tools(&self) -> Vec<ToolItem>;

    /// # Summary
    /// 获取课程地图。
    ///
    /// # Returns
    /// 按教学顺序排列的课程阶段，每个阶段内的课时同样有序。
    fn get_course_map(&self) -> Vec<CourseStage>;
}
