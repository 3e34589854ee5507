// ==========================================
// 手术病例优先排程系统 - 排程 API 实现
// ==========================================
// 职责: 预算提交校验/换算 + 推荐清单计算
// 口径: 每次查询整体重算，不缓存中间结果
// ==========================================

use crate::api::dto::{BudgetSubmissionRequest, RecommendationResponse};
use crate::api::error::{ApiResult, PlannerError};
use crate::catalog::ProcedureCatalog;
use crate::config::PlanningPolicy;
use crate::domain::CapacityBudget;
use crate::engine::AllocationPipeline;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// CasePrioritizationApi - 排程 API
// ==========================================

pub struct CasePrioritizationApi {
    catalog: ProcedureCatalog,
    pipeline: AllocationPipeline,
}

impl CasePrioritizationApi {
    /// 构造函数
    ///
    /// # 参数
    /// - `catalog`: 病例目录（科室清单 + 病例记录）
    /// - `policy`: 排程策略
    pub fn new(catalog: ProcedureCatalog, policy: PlanningPolicy) -> Self {
        Self {
            catalog,
            pipeline: AllocationPipeline::new(policy),
        }
    }

    // ==========================================
    // 输入边界
    // ==========================================

    /// 提交产能预算（操作员单位 -> 内部单位）
    ///
    /// 换算口径:
    /// - OR 分钟 = OR 小时 * 60
    /// - 床日 = 床位数 * 24 * 7
    /// - ICU 日 = ICU 床位数 * 24 * 7
    ///
    /// 非有限数（NaN/无穷）拒绝；负数归零并告警。
    #[instrument(skip(self))]
    pub fn submit_budget(&self, request: BudgetSubmissionRequest) -> ApiResult<CapacityBudget> {
        let fields = [
            ("or_hours", request.or_hours),
            ("bed_count", request.bed_count),
            ("icu_bed_count", request.icu_bed_count),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PlannerError::InvalidBudgetInput {
                    field: field.to_string(),
                    value,
                    reason: "必须为有限数".to_string(),
                });
            }
        }

        let budget = CapacityBudget::from_operator_input(
            request.or_hours,
            request.bed_count,
            request.icu_bed_count,
        );

        info!(
            or_minutes = budget.or_minutes,
            bed_days = budget.bed_days,
            icu_days = budget.icu_days,
            "产能预算已提交"
        );

        Ok(budget)
    }

    // ==========================================
    // 输出边界
    // ==========================================

    /// 计算推荐病例清单（整体重算）
    #[instrument(skip(self, budget))]
    pub fn recommend(&self, budget: &CapacityBudget) -> RecommendationResponse {
        let run = self.pipeline.run(
            self.catalog.service_areas(),
            self.catalog.records(),
            budget,
        );

        RecommendationResponse {
            run_id: Uuid::new_v4().to_string(),
            as_of: Utc::now().to_rfc3339(),
            total_count: run.rows.len() as u32,
            considered_count: run.considered_count() as u32,
            totals: run.totals,
            rows: run.rows,
        }
    }

    pub fn catalog(&self) -> &ProcedureCatalog {
        &self.catalog
    }
}
