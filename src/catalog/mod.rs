// ==========================================
// 手术病例优先排程系统 - 参考数据层
// ==========================================
// 职责: 病例目录与科室清单的加载、校验、持有
// 红线: 仅提示不阻断；负值数值在入库时归零
// ==========================================

// 模块声明
pub mod defaults;
pub mod error;
pub mod loader;
pub mod validator;

// 重导出核心类型
pub use defaults::default_service_areas;
pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogFileLoader;
pub use validator::{
    CatalogQualityLevel, CatalogQualityReport, CatalogQualityValidator, CatalogViolation,
};

use crate::domain::{ProcedureRecord, ServiceArea};
use std::path::Path;
use tracing::{info, warn};

/// 病例目录（科室清单 + 病例记录）
///
/// 构造时执行质量校验并将负值数值归零，保证下游
/// 累计量在非负域上单调递增。
#[derive(Debug, Clone)]
pub struct ProcedureCatalog {
    service_areas: Vec<ServiceArea>,
    records: Vec<ProcedureRecord>,
}

impl ProcedureCatalog {
    /// 以给定科室清单与病例记录构造目录
    pub fn new(service_areas: Vec<ServiceArea>, records: Vec<ProcedureRecord>) -> Self {
        let validator = CatalogQualityValidator;
        let report = validator.validate(&records, &service_areas);

        if report.is_clean() {
            info!(
                "病例目录质量校验通过: {} 条记录, {} 个科室",
                records.len(),
                service_areas.len()
            );
        } else {
            warn!(
                "病例目录质量校验: {} 条记录, INFO {} 条, WARNING {} 条",
                report.total_records, report.info_count, report.warning_count
            );
            for violation in &report.violations {
                warn!(
                    "  [{:?}] 记录 {:?} 字段 {}: {}",
                    violation.level, violation.record_id, violation.field, violation.message
                );
            }
        }

        let records = records.into_iter().map(sanitize_record).collect();

        Self {
            service_areas,
            records,
        }
    }

    /// 使用内置科室清单构造目录
    pub fn with_default_areas(records: Vec<ProcedureRecord>) -> Self {
        Self::new(default_service_areas(), records)
    }

    /// 从文件加载病例记录（.json/.csv），科室清单用内置默认
    pub fn load<P: AsRef<Path>>(records_path: P) -> CatalogResult<Self> {
        let loader = CatalogFileLoader;
        let records = loader.load_records(records_path)?;
        Ok(Self::with_default_areas(records))
    }

    /// 从文件加载病例记录与科室清单
    pub fn load_with_areas<P: AsRef<Path>>(
        records_path: P,
        areas_path: P,
    ) -> CatalogResult<Self> {
        let loader = CatalogFileLoader;
        let records = loader.load_records(records_path)?;
        let areas = loader.load_service_areas(areas_path)?;
        Ok(Self::new(areas, records))
    }

    pub fn service_areas(&self) -> &[ServiceArea] {
        &self.service_areas
    }

    pub fn records(&self) -> &[ProcedureRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// 负值（含 NaN）归零，入库后所有数值字段均 >= 0
fn sanitize_record(mut record: ProcedureRecord) -> ProcedureRecord {
    record.avg_revenue = record.avg_revenue.max(0.0);
    record.avg_surgery_minutes = record.avg_surgery_minutes.max(0.0);
    record.avg_los_hours = record.avg_los_hours.max(0.0);
    record.avg_icu_hours = record.avg_icu_hours.max(0.0);
    record
}
