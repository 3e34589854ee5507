// ==========================================
// 手术病例优先排程系统 - 产能预算领域模型
// ==========================================
// 职责: 定义操作员提交的三维产能预算与单位换算
// 红线: 预算整体替换,不做增量修改;核心算法不接受负值/NaN
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::warn;

// ===== 操作员输入单位换算 =====
pub const OR_MINUTES_PER_HOUR: f64 = 60.0; // 手术室小时 → 分钟
pub const WEEKLY_BED_DAY_UNITS: f64 = 24.0 * 7.0; // 每张床位一周的床位日单位（24 × 7）

// ==========================================
// CapacityBudget - 产能预算
// ==========================================
// 用途: 全局分配器的三道准入闸门
// 默认值: OR 预算为 0（未配置时不推荐任何病例）,床位/ICU 为宽松占位值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityBudget {
    pub or_minutes: f64, // 手术室分钟预算（月度）
    pub bed_days: f64,   // 床位日单位预算（基线调整口径）
    pub icu_days: f64,   // ICU 日单位预算（基线调整口径）
}

impl Default for CapacityBudget {
    fn default() -> Self {
        Self {
            or_minutes: 0.0,
            bed_days: 1.0,
            icu_days: 1.0,
        }
    }
}

impl CapacityBudget {
    /// 从操作员输入换算内部预算
    ///
    /// 换算规则:
    /// - or_minutes = or_hours × 60
    /// - bed_days = bed_count × 24 × 7
    /// - icu_days = icu_bed_count × 24 × 7
    ///
    /// 负值钳制为 0（记录告警）;NaN 经 max(0.0) 同样落到 0。
    ///
    /// # 参数
    /// - `or_hours`: 可用手术室小时数
    /// - `bed_count`: 可用普通床位数
    /// - `icu_bed_count`: 可用 ICU 床位数
    pub fn from_operator_input(or_hours: f64, bed_count: f64, icu_bed_count: f64) -> Self {
        Self {
            or_minutes: clamp_non_negative("or_hours", or_hours) * OR_MINUTES_PER_HOUR,
            bed_days: clamp_non_negative("bed_count", bed_count) * WEEKLY_BED_DAY_UNITS,
            icu_days: clamp_non_negative("icu_bed_count", icu_bed_count) * WEEKLY_BED_DAY_UNITS,
        }
    }
}

/// 负值钳制为 0,并记录数据质量告警
fn clamp_non_negative(field: &str, value: f64) -> f64 {
    if value < 0.0 {
        warn!(field = field, value = value, "操作员输入为负值，已钳制为 0");
    }
    // f64::max 在任一侧为 NaN 时返回另一侧,因此 NaN 也落到 0
    value.max(0.0)
}

// ==========================================
// Trait: CapacityGate
// ==========================================
// 用途: 全局分配器的三道闸门联合准入检查接口
pub trait CapacityGate {
    /// 检查三个累计总量是否全部在预算内
    fn admits(&self, or_total: f64, bed_days_total: f64, icu_days_total: f64) -> bool;

    /// 返回被突破的闸门代码（OR_MINUTES / BED_DAYS / ICU_DAYS）
    fn exceeded_gates(
        &self,
        or_total: f64,
        bed_days_total: f64,
        icu_days_total: f64,
    ) -> Vec<&'static str>;
}

impl CapacityGate for CapacityBudget {
    /// 检查三个累计总量是否全部在预算内
    ///
    /// # 返回
    /// - `true`: 三道闸门均满足 total ≤ budget
    /// - `false`: 任一闸门被突破
    fn admits(&self, or_total: f64, bed_days_total: f64, icu_days_total: f64) -> bool {
        or_total <= self.or_minutes
            && bed_days_total <= self.bed_days
            && icu_days_total <= self.icu_days
    }

    fn exceeded_gates(
        &self,
        or_total: f64,
        bed_days_total: f64,
        icu_days_total: f64,
    ) -> Vec<&'static str> {
        let mut gates = Vec::new();
        if or_total > self.or_minutes {
            gates.push("OR_MINUTES");
        }
        if bed_days_total > self.bed_days {
            gates.push("BED_DAYS");
        }
        if icu_days_total > self.icu_days {
            gates.push("ICU_DAYS");
        }
        gates
    }
}
