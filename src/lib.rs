// ==========================================
// 手术病例优先排程系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (人工最终控制权)
// 核心: 两级贪心分配（科室医生分钟 -> 全院产能闸门）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 参考数据层 - 病例目录
pub mod catalog;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 排程策略
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 展示集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CapacityBudget, CapacityGate, MonthlyCaseEstimate, ProcedureRecord, RecommendationRow,
    ServiceArea,
};

// 参考数据
pub use catalog::{CatalogError, ProcedureCatalog};

// 引擎
pub use engine::{
    AllocationPipeline, AllocationTotals, GlobalAllocator, PipelineRun, RevenueSorter,
    ServiceAllocator,
};

// 配置
pub use config::PlanningPolicy;

// API
pub use api::{BudgetSubmissionRequest, CasePrioritizationApi, PlannerError, RecommendationResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "手术病例优先排程系统";

// ==========================================
// 预编译检查
// ==========================================
