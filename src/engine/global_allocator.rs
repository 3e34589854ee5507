// ==========================================
// 手术病例优先排程系统 - 全院级分配引擎
// ==========================================
// 红线: OR 分钟 / 床日 / ICU 日三道闸门同时满足才录取；
//       三个累计量覆盖排序后全部记录（含被拒绝者）
// ==========================================
// 职责: 合并各科室幸存者，按全院产能预算截断
// 输入: 月度估算列表 + 产能预算
// 输出: 推荐行（录取）+ 拒绝记录（带原因）+ 累计量
// ==========================================

use crate::config::PlanningPolicy;
use crate::domain::{CapacityBudget, CapacityGate, MonthlyCaseEstimate, RecommendationRow};
use crate::engine::derivation::to_recommendation_row;
use crate::engine::ranking::RevenueSorter;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// GlobalAllocator - 全院级分配引擎
// ==========================================
pub struct GlobalAllocator {
    policy: PlanningPolicy,
}

/// 三道闸门的累计消耗量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationTotals {
    pub or_minutes: f64,
    pub bed_days: f64,
    pub icu_days: f64,
}

/// 全院级分配结果
#[derive(Debug, Clone)]
pub struct GlobalAllocation {
    /// 推荐行（全局收入降序）
    pub rows: Vec<RecommendationRow>,
    /// 拒绝的月度估算及原因
    pub rejected: Vec<(MonthlyCaseEstimate, String)>,
    /// 遍历全部记录后的累计消耗量
    pub totals: AllocationTotals,
}

impl GlobalAllocator {
    /// 构造函数
    ///
    /// # 参数
    /// - `policy`: 排程策略（住院基准小时数等）
    pub fn new(policy: PlanningPolicy) -> Self {
        Self { policy }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按全院产能预算分配候选估算
    ///
    /// 规则:
    /// 1) 全部估算按收入降序全局重排（与科室内名次无关）
    /// 2) 三个累计量对排序后*每条*记录累加:
    ///    or_total    += 单台手术分钟
    ///    bed_total   += LOS 小时 / 住院基准小时数
    ///    icu_total   += ICU 小时 / 住院基准小时数
    /// 3) 累加后三道闸门全部满足 (<=) 才录取；任一闸门越界后，
    ///    其余记录全部拒绝（硬前缀截断）
    /// 4) 录取记录派生展示字段，输出保持全局收入降序
    ///
    /// 纯函数，无副作用。
    #[instrument(skip(self, estimates, budget), fields(
        estimate_count = estimates.len(),
        or_budget = budget.or_minutes,
        bed_budget = budget.bed_days,
        icu_budget = budget.icu_days
    ))]
    pub fn allocate(
        &self,
        estimates: &[MonthlyCaseEstimate],
        budget: &CapacityBudget,
    ) -> GlobalAllocation {
        let sorter = RevenueSorter::new();
        let ranked = sorter.sort_estimates(estimates.to_vec());

        let baseline = self.policy.stay_baseline_hours;
        let mut totals = AllocationTotals::default();
        let mut rows = Vec::new();
        let mut rejected = Vec::new();

        for estimate in ranked {
            // 累计量覆盖全部记录
            totals.or_minutes += estimate.surgery_minutes_per_case;
            totals.bed_days += estimate.length_of_stay_hours / baseline;
            totals.icu_days += estimate.icu_hours / baseline;

            // 三道闸门同时判定
            if budget.admits(totals.or_minutes, totals.bed_days, totals.icu_days) {
                rows.push(to_recommendation_row(&estimate));
            } else {
                let gates =
                    budget.exceeded_gates(totals.or_minutes, totals.bed_days, totals.icu_days);
                rejected.push((
                    estimate,
                    format!(
                        "CAPACITY_BUDGET_EXCEEDED: gates=[{}], or={:.1}/{:.1}, bed={:.3}/{:.3}, icu={:.3}/{:.3}",
                        gates.join(","),
                        totals.or_minutes,
                        budget.or_minutes,
                        totals.bed_days,
                        budget.bed_days,
                        totals.icu_days,
                        budget.icu_days
                    ),
                ));
            }
        }

        debug!(
            admitted = rows.len(),
            rejected = rejected.len(),
            or_total = totals.or_minutes,
            bed_total = totals.bed_days,
            icu_total = totals.icu_days,
            "全院分配完成"
        );

        GlobalAllocation {
            rows,
            rejected,
            totals,
        }
    }
}
