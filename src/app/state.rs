// ==========================================
// 手术病例优先排程系统 - 应用状态
// ==========================================
// 职责: 持有 API 实例与操作员当前产能预算
// 口径: 预算单写者整体替换，读取时整体拷贝
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{
    ApiResult, BudgetSubmissionRequest, CasePrioritizationApi, PlannerError,
    RecommendationResponse,
};
use crate::catalog::ProcedureCatalog;
use crate::config::PlanningPolicy;
use crate::domain::CapacityBudget;

/// 策略文件路径环境变量
const POLICY_PATH_ENV: &str = "SURGICAL_CASELOAD_APS_POLICY_PATH";

/// 应用状态
///
/// 参考数据在启动时加载一次后只读；预算由提交动作整体替换，
/// 每次查询整体重算，无在途计算需要取消。
pub struct AppState {
    /// 病例目录文件路径
    pub catalog_path: String,

    /// 排程 API
    pub planner_api: Arc<CasePrioritizationApi>,

    /// 操作员当前产能预算（单写者）
    current_budget: Mutex<CapacityBudget>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - catalog_path: 病例目录文件路径 (.json/.csv)
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 加载并校验病例目录
    /// 2. 解析排程策略（环境变量指定的策略文件，缺省用默认值）
    /// 3. 创建 API 实例，预算初始化为默认值
    pub fn new(catalog_path: String) -> ApiResult<Self> {
        let policy = resolve_policy();
        Self::with_policy(catalog_path, policy)
    }

    /// 以显式策略创建 AppState 实例
    pub fn with_policy(catalog_path: String, policy: PlanningPolicy) -> ApiResult<Self> {
        tracing::info!("初始化AppState，目录路径: {}", catalog_path);

        let catalog = ProcedureCatalog::load(&catalog_path)?;

        tracing::info!(
            record_count = catalog.record_count(),
            area_count = catalog.service_areas().len(),
            "AppState初始化完成"
        );

        Ok(Self {
            catalog_path,
            planner_api: Arc::new(CasePrioritizationApi::new(catalog, policy)),
            current_budget: Mutex::new(CapacityBudget::default()),
        })
    }

    /// 提交产能预算并保存为当前预算
    pub fn submit_budget(&self, request: BudgetSubmissionRequest) -> ApiResult<CapacityBudget> {
        let budget = self.planner_api.submit_budget(request)?;

        let mut current = self
            .current_budget
            .lock()
            .map_err(|e| PlannerError::InternalError(format!("状态锁获取失败: {}", e)))?;
        *current = budget;

        Ok(budget)
    }

    /// 以当前预算计算推荐清单
    pub fn recommend(&self) -> ApiResult<RecommendationResponse> {
        let budget = *self
            .current_budget
            .lock()
            .map_err(|e| PlannerError::InternalError(format!("状态锁获取失败: {}", e)))?;

        Ok(self.planner_api.recommend(&budget))
    }

    /// 获取目录文件路径
    pub fn get_catalog_path(&self) -> &str {
        &self.catalog_path
    }
}

// 环境变量指定策略文件时加载，失败回退默认策略
fn resolve_policy() -> PlanningPolicy {
    match std::env::var(POLICY_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            match PlanningPolicy::from_json_file(path.trim()) {
                Ok(policy) => policy.sanitized(),
                Err(e) => {
                    tracing::warn!("策略文件加载失败，使用默认策略: {}", e);
                    PlanningPolicy::default()
                }
            }
        }
        _ => PlanningPolicy::default(),
    }
}

// ==========================================
// 默认目录路径辅助函数
// ==========================================

/// 获取默认病例目录路径
///
/// # 返回
/// - 开发环境: 用户数据目录/surgical-caseload-aps-dev/procedure_catalog.json
///   （首次运行会从项目根目录的 ./procedure_catalog.json 复制一份作为种子数据）
/// - 生产环境: 用户数据目录/surgical-caseload-aps/procedure_catalog.json
pub fn get_default_catalog_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定目录路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("SURGICAL_CASELOAD_APS_CATALOG_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 默认回退值，后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./procedure_catalog.json");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("surgical-caseload-aps-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("surgical-caseload-aps");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("procedure_catalog.json");

        // 开发环境：目标目录文件不存在时，从项目根目录复制种子数据
        #[cfg(debug_assertions)]
        {
            if !path.exists() {
                let seed = PathBuf::from("./procedure_catalog.json");
                if seed.exists() {
                    let _ = std::fs::copy(seed, &path);
                }
            }
        }
    }

    path.to_string_lossy().to_string()
}
