use roqet_core::common::Timeframe;
use roqet_core::content::entity::{CourseLesson, CourseStage, NewsItem, ToolItem};
use roqet_core::content::port::ContentProvider;

/// ContentProvider 的静态实现。
///
/// # Summary
/// 每次调用都从字面量重新构造数据，不缓存、不共享。
///
/// # Invariants
/// * 资讯 3 条，覆盖 short / long 两种时间跨度。
/// * 工具 3 个，其中 `regime-scanner` 的等级为词表外的 "Mission Control"，按原样保留。
/// * 课程 5 个阶段，顺序为 launchpad → prelaunch → ignition → ascent → orbit，每阶段 2 课时。
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn news(
    id: &str,
    title: &str,
    summary: &str,
    timeframe: Timeframe,
    tags: &[&str],
    source: &str,
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        timeframe,
        tags: strings(tags),
        source: Some(source.to_string()),
    }
}

fn tool(
    id: &str,
    name: &str,
    purpose: &str,
    when_to_use: &str,
    best_practices: &[&str],
    level: &str,
) -> ToolItem {
    ToolItem {
        id: id.to_string(),
        name: name.to_string(),
        purpose: purpose.to_string(),
        when_to_use: when_to_use.to_string(),
        best_practices: strings(best_practices),
        level: level.to_string(),
    }
}

fn lesson(id: &str, title: &str, objectives: &[&str], level: &str) -> CourseLesson {
    CourseLesson {
        id: id.to_string(),
        title: title.to_string(),
        objectives: strings(objectives),
        level: level.to_string(),
    }
}

fn stage(key: &str, title: &str, description: &str, lessons: Vec<CourseLesson>) -> CourseStage {
    CourseStage {
        key: key.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        lessons,
    }
}

impl ContentProvider for StaticCatalog {
    fn get_news(&self) -> Vec<NewsItem> {
        vec![
            news(
                "n1",
                "CPI prints inline; initial risk-on reaction fades",
                "Inflation meets expectations. Short-term relief rally, but trend depends on upcoming labor data.",
                Timeframe::Short,
                &["macro", "inflation", "usd"],
                "ROQET Brief",
            ),
            news(
                "n2",
                "Central bank signals higher-for-longer stance",
                "Policy path suggests slower cuts. Watch yield curve and credit conditions over the next quarter.",
                Timeframe::Long,
                &["rates", "bonds"],
                "ROQET Macro",
            ),
            news(
                "n3",
                "Earnings season: dispersion favors stock-pickers",
                "Mixed beats and margin pressures. Focus on relative strength and post-earnings drift.",
                Timeframe::Short,
                &["equities", "earnings"],
                "ROQET Desk",
            ),
        ]
    }

    fn get_tools(&self) -> Vec<ToolItem> {
        vec![
            tool(
                "position-sizer",
                "Position Sizer",
                "Calculate position size based on account risk and stop distance.",
                "Before placing any trade.",
                &[
                    "Risk a fixed % per trade (e.g., 0.5%–1.0%).",
                    "Recompute after equity changes.",
                    "Use worst-case spread/slippage in stop distance.",
                ],
                "Pre-Launch",
            ),
            tool(
                "trade-journal",
                "Trade Journal",
                "Log setups, context, execution, and outcomes to measure edge.",
                "Immediately after each trade.",
                &[
                    "Tag by setup and market regime.",
                    "Record reasons for exit, not just P/L.",
                    "Review weekly for patterns and mistakes.",
                ],
                "Ascent",
            ),
            tool(
                "regime-scanner",
                "Regime Scanner",
                "Gauge trend/chop/volatility regime before selecting tactics.",
                "Daily pre-market and before new positions.",
                &[
                    "Match strategy to regime (don’t force trades).",
                    "Recheck on major news days.",
                    "Stand down in unclear signals.",
                ],
                "Mission Control",
            ),
        ]
    }

    fn get_course_map(&self) -> Vec<CourseStage> {
        vec![
            stage(
                "launchpad",
                "Launchpad",
                "Core concepts, platforms, and execution basics.",
                vec![
                    lesson(
                        "L1",
                        "Market Basics: How Prices Move",
                        &["Bid/ask, spread", "Order types: market/limit/stop"],
                        "Launchpad",
                    ),
                    lesson(
                        "L2",
                        "Platforms & Orders",
                        &["Placing orders correctly", "Fees and slippage"],
                        "Launchpad",
                    ),
                ],
            ),
            stage(
                "prelaunch",
                "Pre-Launch Checks",
                "Risk, psychology, and planning.",
                vec![
                    lesson("P1", "Risk per Trade", &["Fixed % risk", "Stop placement"], "Pre-Launch"),
                    lesson(
                        "P2",
                        "Flight Plan: Trade Plan",
                        &["Criteria, invalidation", "Scenarios"],
                        "Pre-Launch",
                    ),
                ],
            ),
            stage(
                "ignition",
                "Ignition",
                "Starter strategies and first live trades.",
                vec![
                    lesson(
                        "I1",
                        "Breakout + Retest",
                        &["Context filter", "Execution checklist"],
                        "Ignition",
                    ),
                    lesson(
                        "I2",
                        "Mean Reversion in Range",
                        &["Identify range", "Risk control"],
                        "Ignition",
                    ),
                ],
            ),
            stage(
                "ascent",
                "Ascent",
                "System-building and backtesting.",
                vec![
                    lesson(
                        "A1",
                        "Building a Playbook",
                        &["Setup templates", "Criteria & invalidations"],
                        "Ascent",
                    ),
                    lesson("A2", "Backtest Basics", &["Sample size", "Bias control"], "Ascent"),
                ],
            ),
            stage(
                "orbit",
                "Orbit",
                "Advanced consistency and scaling.",
                vec![
                    lesson("O1", "Scaling Risk", &["Risk scaling rules", "Drawdown limits"], "Orbit"),
                    lesson("O2", "Regime Detection", &["Macro + micro filters", "Adaptation"], "Orbit"),
                ],
            ),
        ]
    }
}
