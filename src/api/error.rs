// ==========================================
// 手术病例优先排程系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，所有错误信息包含显式原因
// ==========================================

use crate::catalog::CatalogError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum PlannerError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 预算输入非法（非有限数）
    #[error("无效预算输入: 字段 {field} 值 {value}（{reason}）")]
    InvalidBudgetInput {
        field: String,
        value: f64,
        reason: String,
    },

    // ==========================================
    // 参考数据错误
    // ==========================================
    #[error("参考数据错误: {0}")]
    Catalog(#[from] CatalogError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, PlannerError>;
