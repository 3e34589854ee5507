// ==========================================
// 手术病例优先排程系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据加载逻辑,不含引擎逻辑
// ==========================================

pub mod budget;
pub mod procedure;
pub mod recommendation;
pub mod service_area;

// 重导出核心类型
pub use budget::{CapacityBudget, CapacityGate, OR_MINUTES_PER_HOUR, WEEKLY_BED_DAY_UNITS};
pub use procedure::{MonthlyCaseEstimate, ProcedureRecord};
pub use recommendation::RecommendationRow;
pub use service_area::{ServiceArea, MONTHLY_MINUTES_PER_SURGEON};
