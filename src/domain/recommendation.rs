// ==========================================
// 手术病例优先排程系统 - 推荐结果领域模型
// ==========================================
// 职责: 定义全局分配器的输出行（展示口径）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RecommendationRow - 推荐病例行
// ==========================================
// 用途: 全局分配器输出,展示层按序渲染
// 红线: 行顺序即全局收益降序,展示层不得重排
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    // ===== 主键与关联 =====
    pub id: i64,              // 关联 ProcedureRecord（FK）
    pub service_name: String, // 所属科室名称

    // ===== 展示字段（已按展示口径取整/格式化）=====
    pub procedure_name: String,     // 术式名称
    pub recommended_case_count: u32, // 推荐月度台数（四舍五入取整）
    pub or_hours_per_case: f64,     // 单台手术室时长（小时,1 位小数）
    pub length_of_stay_days: u32,   // 住院天数（按未调整小时数取整）
    pub formatted_revenue: String,  // 贡献边际（美元货币串,如 "$12,345.67"）
}
