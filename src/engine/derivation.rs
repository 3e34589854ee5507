// ==========================================
// 手术病例优先排程系统 - 派生计算服务
// ==========================================
// 职责: 年度记录 -> 月度估算 -> 展示字段派生
// 口径: 月度估算保持实数，仅展示层取整
// ==========================================

use crate::domain::{MonthlyCaseEstimate, ProcedureRecord, RecommendationRow};

/// 年度到月度折算系数
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 由年度病例记录派生月度估算
///
/// 月度病例数 = 年病例数 / 12，保持实数不取整。
pub fn to_monthly_estimate(record: &ProcedureRecord) -> MonthlyCaseEstimate {
    MonthlyCaseEstimate {
        id: record.id,
        service_name: record.case_service.clone(),
        revenue_per_case: record.avg_revenue,
        monthly_case_count: record.count as f64 / MONTHS_PER_YEAR,
        surgery_minutes_per_case: record.avg_surgery_minutes,
        length_of_stay_hours: record.avg_los_hours,
        icu_hours: record.avg_icu_hours,
        procedure_name: record.procedure_name.clone(),
    }
}

/// 推荐病例数（月度估算四舍五入到整数）
pub fn recommended_case_count(monthly_case_count: f64) -> u32 {
    monthly_case_count.max(0.0).round() as u32
}

/// 单台手术 OR 用时（小时，保留 1 位小数）
pub fn or_hours_per_case(surgery_minutes_per_case: f64) -> f64 {
    (surgery_minutes_per_case / 60.0 * 10.0).round() / 10.0
}

/// 住院天数（按未折算的 LOS 小时数取整，非 /120 折算值）
pub fn length_of_stay_days(length_of_stay_hours: f64) -> u32 {
    (length_of_stay_hours / 24.0).max(0.0).round() as u32
}

/// 美元货币格式化（千分位 + 2 位小数，如 "$12,345.67"）
pub fn format_usd(amount: f64) -> String {
    let total_cents = (amount * 100.0).round() as i64;
    let sign = if total_cents < 0 { "-" } else { "" };
    let total_cents = total_cents.abs();
    let dollars = total_cents / 100;
    let cents = total_cents % 100;
    format!("{}${}.{:02}", sign, group_thousands(dollars), cents)
}

// 整数部分千分位分组
fn group_thousands(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = String::new();
    for (idx, group) in groups.iter().rev().enumerate() {
        if idx == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!(",{:03}", group));
        }
    }
    out
}

/// 由月度估算派生展示行
pub fn to_recommendation_row(estimate: &MonthlyCaseEstimate) -> RecommendationRow {
    RecommendationRow {
        id: estimate.id,
        service_name: estimate.service_name.clone(),
        procedure_name: estimate.procedure_name.clone(),
        recommended_case_count: recommended_case_count(estimate.monthly_case_count),
        or_hours_per_case: or_hours_per_case(estimate.surgery_minutes_per_case),
        length_of_stay_days: length_of_stay_days(estimate.length_of_stay_hours),
        formatted_revenue: format_usd(estimate.revenue_per_case),
    }
}
