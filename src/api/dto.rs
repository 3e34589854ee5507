// ==========================================
// 手术病例优先排程系统 - PlannerApi DTO 定义
// ==========================================
// 职责: 定义 PlannerApi 的请求和响应结构
// ==========================================

use crate::domain::RecommendationRow;
use crate::engine::AllocationTotals;
use serde::{Deserialize, Serialize};

// ==========================================
// 预算提交 - 操作员产能输入
// ==========================================

/// 预算提交请求（操作员口径的原始单位）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetSubmissionRequest {
    /// 每周可用 OR 小时数
    pub or_hours: f64,

    /// 可用普通床位数
    pub bed_count: f64,

    /// 可用 ICU 床位数
    pub icu_bed_count: f64,
}

// ==========================================
// 推荐查询 - 优先病例清单
// ==========================================

/// 推荐响应: 优先病例清单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// 本次运行 ID
    pub run_id: String,

    /// 计算时间戳 (ISO 8601)
    pub as_of: String,

    /// 推荐行（全局收入降序）
    pub rows: Vec<RecommendationRow>,

    /// 推荐行总数
    pub total_count: u32,

    /// 参与分配的记录数（命中已知科室）
    pub considered_count: u32,

    /// 遍历全部记录后的累计消耗量
    pub totals: AllocationTotals,
}
