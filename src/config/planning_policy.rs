// ==========================================
// 手术病例优先排程系统 - 排程策略配置
// ==========================================
// 职责: 承载可覆写的策略常量
// 存储: 可选 JSON 配置文件,缺省使用内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// 住院/ICU 小时数的基线调整除数默认值
///
/// 来源为美国平均住院时长口径: 单台消耗 = 小时数 / 基线,
/// 以便与"床位数 × 一周床位日单位"的预算可比。
pub const DEFAULT_STAY_BASELINE_HOURS: f64 = 120.0;

// ==========================================
// PlanningPolicy - 排程策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningPolicy {
    /// 住院/ICU 小时基线除数（替代散落的魔法数字,可按医院口径覆写）
    #[serde(default = "default_stay_baseline_hours")]
    pub stay_baseline_hours: f64,
}

fn default_stay_baseline_hours() -> f64 {
    DEFAULT_STAY_BASELINE_HOURS
}

impl Default for PlanningPolicy {
    fn default() -> Self {
        Self {
            stay_baseline_hours: DEFAULT_STAY_BASELINE_HOURS,
        }
    }
}

impl PlanningPolicy {
    /// 从 JSON 配置文件加载策略
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    ///
    /// # 返回
    /// - Ok(PlanningPolicy): 已通过 sanitized 校验的策略
    /// - Err: 文件读取或解析失败
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let policy: PlanningPolicy = serde_json::from_str(&raw)?;
        Ok(policy.sanitized())
    }

    /// 校验策略值,非法值回退默认并告警
    ///
    /// 基线除数必须为有限正数,否则月度消耗会出现 NaN/负值/除零。
    pub fn sanitized(self) -> Self {
        if self.stay_baseline_hours.is_finite() && self.stay_baseline_hours > 0.0 {
            self
        } else {
            warn!(
                configured = self.stay_baseline_hours,
                fallback = DEFAULT_STAY_BASELINE_HOURS,
                "stay_baseline_hours 配置非法，回退默认值"
            );
            Self::default()
        }
    }
}
