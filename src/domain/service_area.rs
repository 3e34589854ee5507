// ==========================================
// 手术病例优先排程系统 - 科室领域模型
// ==========================================
// 职责: 定义手术科室（service area）实体
// 用途: 参考数据加载层写入,引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};

// 每位外科医生的月度可用手术分钟数
// 参考数据中所有科室预算均等于 surgeon_count × 1800
pub const MONTHLY_MINUTES_PER_SURGEON: f64 = 1800.0;

// ==========================================
// ServiceArea - 手术科室
// ==========================================
// 红线: 科室名称是唯一键,病例记录以 case_service 外键关联
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    // ===== 主键 =====
    #[serde(rename = "service")]
    pub name: String, // 科室名称（唯一键，如 "Orthopedics"）

    // ===== 资源参数 =====
    pub surgeon_count: u32,          // 外科医生人数
    pub surgeon_minutes: f64,        // 月度医生分钟预算（分钟/月）
}

impl ServiceArea {
    /// 构造科室（显式预算）
    ///
    /// # 参数
    /// - `name`: 科室名称
    /// - `surgeon_count`: 医生人数
    /// - `surgeon_minutes`: 月度医生分钟预算
    pub fn new(name: impl Into<String>, surgeon_count: u32, surgeon_minutes: f64) -> Self {
        Self {
            name: name.into(),
            surgeon_count,
            surgeon_minutes,
        }
    }

    /// 按医生人数派生预算构造科室
    ///
    /// 预算 = surgeon_count × MONTHLY_MINUTES_PER_SURGEON
    pub fn from_surgeon_count(name: impl Into<String>, surgeon_count: u32) -> Self {
        Self {
            name: name.into(),
            surgeon_count,
            surgeon_minutes: f64::from(surgeon_count) * MONTHLY_MINUTES_PER_SURGEON,
        }
    }
}
