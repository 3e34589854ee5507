// ==========================================
// 手术病例优先排程系统 - 分配流水线编排器
// ==========================================
// 用途: 协调两级分配引擎的执行顺序
// 口径: 每次输入变化整体重算，无增量状态
// ==========================================

use crate::config::PlanningPolicy;
use crate::domain::{CapacityBudget, MonthlyCaseEstimate, ProcedureRecord, RecommendationRow, ServiceArea};
use crate::engine::global_allocator::{AllocationTotals, GlobalAllocator};
use crate::engine::service_allocator::ServiceAllocator;
use tracing::{debug, info};

// ==========================================
// PipelineRun - 流水线运行结果
// ==========================================

#[derive(Debug, Clone)]
pub struct PipelineRun {
    // 科室级分配输出
    pub service_survivors: Vec<MonthlyCaseEstimate>,
    pub service_rejected: Vec<(MonthlyCaseEstimate, String)>,

    // 全院级分配输出
    pub rows: Vec<RecommendationRow>,
    pub global_rejected: Vec<(MonthlyCaseEstimate, String)>,
    pub totals: AllocationTotals,
}

impl PipelineRun {
    /// 参与分配的记录数（命中已知科室的记录）
    pub fn considered_count(&self) -> usize {
        self.service_survivors.len() + self.service_rejected.len()
    }
}

// ==========================================
// AllocationPipeline - 分配流水线编排器
// ==========================================

pub struct AllocationPipeline {
    service_allocator: ServiceAllocator,
    global_allocator: GlobalAllocator,
}

impl AllocationPipeline {
    /// 创建新的流水线实例
    ///
    /// # 参数
    /// - `policy`: 排程策略（传给全院级引擎）
    pub fn new(policy: PlanningPolicy) -> Self {
        Self {
            service_allocator: ServiceAllocator::new(),
            global_allocator: GlobalAllocator::new(policy),
        }
    }

    /// 执行完整分配流程
    ///
    /// # 参数
    /// - `areas`: 科室清单
    /// - `records`: 病例记录
    /// - `budget`: 当前产能预算
    ///
    /// # 返回
    /// 流水线运行结果（含各级录取与拒绝明细）
    pub fn run(
        &self,
        areas: &[ServiceArea],
        records: &[ProcedureRecord],
        budget: &CapacityBudget,
    ) -> PipelineRun {
        info!(
            area_count = areas.len(),
            record_count = records.len(),
            or_budget = budget.or_minutes,
            bed_budget = budget.bed_days,
            icu_budget = budget.icu_days,
            "开始执行分配流程"
        );

        // ==========================================
        // 步骤1: Service Allocator - 科室级预算截断
        // ==========================================
        debug!("步骤1: 执行科室级分配");

        let service_allocation = self.service_allocator.allocate(areas, records);

        info!(
            survivor_count = service_allocation.admitted.len(),
            rejected_count = service_allocation.rejected.len(),
            "科室级分配完成"
        );

        // ==========================================
        // 步骤2: Global Allocator - 全院级预算截断
        // ==========================================
        debug!("步骤2: 执行全院级分配");

        let global_allocation = self
            .global_allocator
            .allocate(&service_allocation.admitted, budget);

        info!(
            row_count = global_allocation.rows.len(),
            rejected_count = global_allocation.rejected.len(),
            or_total = global_allocation.totals.or_minutes,
            bed_total = global_allocation.totals.bed_days,
            icu_total = global_allocation.totals.icu_days,
            "全院级分配完成"
        );

        PipelineRun {
            service_survivors: service_allocation.admitted,
            service_rejected: service_allocation.rejected,
            rows: global_allocation.rows,
            global_rejected: global_allocation.rejected,
            totals: global_allocation.totals,
        }
    }
}
