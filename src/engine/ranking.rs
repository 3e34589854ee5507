// ==========================================
// 手术病例优先排程系统 - 收入排序引擎
// ==========================================
// 红线: 稳定排序，收入并列保持原始输入顺序
// ==========================================

use crate::domain::{MonthlyCaseEstimate, ProcedureRecord};

// ==========================================
// RevenueSorter - 收入排序引擎
// ==========================================
pub struct RevenueSorter {
    // 无状态引擎，不需要注入依赖
}

impl RevenueSorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 排序病例记录（单例收入降序）
    ///
    /// 排序键:
    /// 1) avg_revenue 降序
    /// 2) 并列时保持输入顺序（稳定排序）
    pub fn sort_records(&self, mut records: Vec<ProcedureRecord>) -> Vec<ProcedureRecord> {
        records.sort_by(|a, b| b.avg_revenue.total_cmp(&a.avg_revenue));
        records
    }

    /// 排序月度估算（单例收入降序）
    ///
    /// 全局重排：记录在此的名次与其在科室内的名次无关。
    pub fn sort_estimates(
        &self,
        mut estimates: Vec<MonthlyCaseEstimate>,
    ) -> Vec<MonthlyCaseEstimate> {
        estimates.sort_by(|a, b| b.revenue_per_case.total_cmp(&a.revenue_per_case));
        estimates
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RevenueSorter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, avg_revenue: f64) -> ProcedureRecord {
        ProcedureRecord {
            id,
            case_service: "Hand".to_string(),
            avg_revenue,
            count: 12,
            avg_surgery_minutes: 60.0,
            avg_los_hours: 24.0,
            avg_icu_hours: 0.0,
            procedure_name: format!("Procedure {}", id),
        }
    }

    #[test]
    fn test_sort_records_descending() {
        // 测试：收入降序
        let sorter = RevenueSorter::new();
        let sorted = sorter.sort_records(vec![
            record(1, 300.0),
            record(2, 500.0),
            record(3, 100.0),
        ]);

        let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_records_stable_on_ties() {
        // 测试：收入并列时保持输入顺序
        let sorter = RevenueSorter::new();
        let sorted = sorter.sort_records(vec![
            record(1, 300.0),
            record(2, 300.0),
            record(3, 500.0),
            record(4, 300.0),
        ]);

        let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_estimates_descending() {
        // 测试：月度估算按收入降序
        let sorter = RevenueSorter::new();
        let estimates: Vec<MonthlyCaseEstimate> = [
            record(1, 250.0),
            record(2, 750.0),
        ]
        .iter()
        .map(crate::engine::derivation::to_monthly_estimate)
        .collect();

        let sorted = sorter.sort_estimates(estimates);
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 1);
    }
}
