// ==========================================
// 手术病例优先排程系统 - 应用层
// ==========================================
// 职责: 连接展示层与排程核心
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_catalog_path, AppState};
