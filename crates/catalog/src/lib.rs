//! # `roqet-catalog` - 静态内容目录
//!
//! 以字面量形式维护资讯、工具与课程地图，实现 `ContentProvider` 端口。

pub mod static_catalog;
