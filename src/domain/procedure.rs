// ==========================================
// 手术病例优先排程系统 - 病例领域模型
// ==========================================
// 职责: 定义手术病例参考记录与月度病例估算
// 用途: 参考数据为年度口径,引擎按月度口径排程
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProcedureRecord - 手术病例参考记录
// ==========================================
// 用途: 参考数据文件（JSON/CSV）的行结构,字段名与文件列名一致
// 红线: 只读参考数据,进程生命周期内不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    // ===== 主键 =====
    pub id: i64, // 病例记录唯一标识

    // ===== 科室关联 =====
    pub case_service: String, // 所属科室名称（FK → ServiceArea.name）

    // ===== 财务维度 =====
    pub avg_revenue: f64, // 单台贡献边际（美元/台）

    // ===== 产能维度（年度口径）=====
    pub count: u32,                // 年度病例数
    pub avg_surgery_minutes: f64,  // 单台手术时长（分钟）

    // ===== 住院维度 =====
    pub avg_los_hours: f64, // 单台住院时长（小时）
    pub avg_icu_hours: f64, // 单台 ICU 时长（小时）

    // ===== 展示信息 =====
    pub procedure_name: String, // 术式名称
}

// ==========================================
// MonthlyCaseEstimate - 月度病例估算
// ==========================================
// 用途: 科室级分配器输出 / 全局分配器输入
// 红线: monthly_case_count 保持实数估算,直到最终展示才取整
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCaseEstimate {
    // ===== 主键与关联 =====
    pub id: i64,              // 关联 ProcedureRecord（FK）
    pub service_name: String, // 所属科室名称

    // ===== 排序键 =====
    pub revenue_per_case: f64, // 单台贡献边际（两级排序均按此降序）

    // ===== 月度产能口径 =====
    pub monthly_case_count: f64,      // 月度病例数估算（年度 / 12，不取整）
    pub surgery_minutes_per_case: f64, // 单台手术时长（分钟）

    // ===== 住院口径（未做基线调整的原始小时数）=====
    pub length_of_stay_hours: f64, // 单台住院时长（小时）
    pub icu_hours: f64,            // 单台 ICU 时长（小时）

    // ===== 展示信息 =====
    pub procedure_name: String, // 术式名称
}

impl MonthlyCaseEstimate {
    /// 单台月度医生分钟消耗（科室级预算口径）
    ///
    /// # 返回
    /// surgery_minutes_per_case × monthly_case_count
    pub fn monthly_surgeon_minutes(&self) -> f64 {
        self.surgery_minutes_per_case * self.monthly_case_count
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedure_record_wire_fields() {
        // 测试：反序列化字段名与参考数据文件一致
        let raw = r#"{
            "id": 42,
            "case_service": "Hand",
            "avg_revenue": 500.0,
            "count": 120,
            "avg_surgery_minutes": 100.0,
            "avg_los_hours": 0.0,
            "avg_icu_hours": 0.0,
            "procedure_name": "Carpal tunnel release"
        }"#;

        let record: ProcedureRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.case_service, "Hand");
        assert_eq!(record.count, 120);
        assert_eq!(record.procedure_name, "Carpal tunnel release");
    }

    #[test]
    fn test_monthly_surgeon_minutes() {
        // 测试：单台时长 × 月度台数
        let estimate = MonthlyCaseEstimate {
            id: 1,
            service_name: "Hand".to_string(),
            revenue_per_case: 500.0,
            monthly_case_count: 10.0,
            surgery_minutes_per_case: 100.0,
            length_of_stay_hours: 0.0,
            icu_hours: 0.0,
            procedure_name: "Carpal tunnel release".to_string(),
        };

        assert_eq!(estimate.monthly_surgeon_minutes(), 1000.0);
    }
}
