// ==========================================
// 手术病例优先排程系统 - 配置层
// ==========================================
// 职责: 策略常量管理,默认值 + 文件覆写
// ==========================================

pub mod planning_policy;

// 重导出核心配置
pub use planning_policy::{PlanningPolicy, DEFAULT_STAY_BASELINE_HOURS};
