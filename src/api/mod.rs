// ==========================================
// 手术病例优先排程系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供展示层调用
// ==========================================

pub mod dto;
pub mod error;
pub mod planner_api;

// 重导出核心类型
pub use dto::{BudgetSubmissionRequest, RecommendationResponse};
pub use error::{ApiResult, PlannerError};
pub use planner_api::CasePrioritizationApi;
