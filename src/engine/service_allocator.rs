// ==========================================
// 手术病例优先排程系统 - 科室级分配引擎
// ==========================================
// 红线: 累计量覆盖排序后全部记录（含被拒绝者），
//       预算一旦越界，该科室其后记录全部拒绝
// ==========================================
// 职责: 按科室医生分钟预算截断候选病例
// 输入: 科室清单 + 病例记录
// 输出: 月度估算（录取）+ 拒绝记录（带原因）
// ==========================================

use crate::domain::{MonthlyCaseEstimate, ProcedureRecord, ServiceArea};
use crate::engine::derivation::to_monthly_estimate;
use crate::engine::ranking::RevenueSorter;
use tracing::{debug, instrument};

// ==========================================
// ServiceAllocator - 科室级分配引擎
// ==========================================
pub struct ServiceAllocator {
    // 无状态引擎，不需要注入依赖
}

/// 科室级分配结果
#[derive(Debug, Clone)]
pub struct ServiceAllocation {
    /// 录取的月度估算（科室清单顺序，科室内收入降序）
    pub admitted: Vec<MonthlyCaseEstimate>,
    /// 拒绝的月度估算及原因
    pub rejected: Vec<(MonthlyCaseEstimate, String)>,
}

impl ServiceAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按科室医生分钟预算分配候选病例
    ///
    /// 规则:
    /// 1) 逐科室筛选 `case_service == 科室名` 的记录，收入降序排序
    /// 2) 累计量 T += 单台手术分钟 * 月度病例数，对排序后*每条*记录累加
    /// 3) 累加后 T <= 科室预算 才录取；T 单调递增，越界后该科室
    ///    其余记录全部拒绝（硬前缀截断）
    /// 4) 未命中任何科室的记录不参与分配（由目录质量校验提示）
    ///
    /// 纯函数，无副作用；预算为 0 的科室产出为空。
    #[instrument(skip(self, areas, records), fields(
        area_count = areas.len(),
        record_count = records.len()
    ))]
    pub fn allocate(
        &self,
        areas: &[ServiceArea],
        records: &[ProcedureRecord],
    ) -> ServiceAllocation {
        let sorter = RevenueSorter::new();
        let mut admitted = Vec::new();
        let mut rejected = Vec::new();

        for area in areas {
            // 1) 筛选 + 科室内收入降序
            let area_records: Vec<ProcedureRecord> = records
                .iter()
                .filter(|r| r.case_service == area.name)
                .cloned()
                .collect();
            let area_records = sorter.sort_records(area_records);

            // 2) 累计医生分钟，覆盖排序后全部记录
            let mut cumulative_minutes = 0.0;
            let mut area_admitted = 0usize;

            for record in &area_records {
                let estimate = to_monthly_estimate(record);
                cumulative_minutes += estimate.monthly_surgeon_minutes();

                // 3) 累加后判定
                if cumulative_minutes <= area.surgeon_minutes {
                    admitted.push(estimate);
                    area_admitted += 1;
                } else {
                    rejected.push((
                        estimate,
                        format!(
                            "SURGEON_MINUTES_EXCEEDED: cumulative {:.1} > budget {:.1} ({})",
                            cumulative_minutes, area.surgeon_minutes, area.name
                        ),
                    ));
                }
            }

            debug!(
                area = %area.name,
                candidates = area_records.len(),
                admitted = area_admitted,
                cumulative_minutes,
                budget = area.surgeon_minutes,
                "科室分配完成"
            );
        }

        ServiceAllocation { admitted, rejected }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ServiceAllocator {
    fn default() -> Self {
        Self::new()
    }
}
