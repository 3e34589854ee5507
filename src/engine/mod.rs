// ==========================================
// 手术病例优先排程系统 - 引擎层
// ==========================================
// 职责: 实现两级贪心分配规则
// 红线: 引擎为纯函数，所有拒绝必须输出 reason
// ==========================================

pub mod derivation;
pub mod global_allocator;
pub mod pipeline;
pub mod ranking;
pub mod service_allocator;

// 重导出核心引擎
pub use derivation::{
    format_usd, length_of_stay_days, or_hours_per_case, recommended_case_count,
    to_monthly_estimate, to_recommendation_row, MONTHS_PER_YEAR,
};
pub use global_allocator::{AllocationTotals, GlobalAllocation, GlobalAllocator};
pub use pipeline::{AllocationPipeline, PipelineRun};
pub use ranking::RevenueSorter;
pub use service_allocator::{ServiceAllocation, ServiceAllocator};
