// ==========================================
// 手术病例优先排程系统 - 参考数据质量校验器
// ==========================================
// 职责: 主键唯一性 / 科室引用 / 数值范围校验
// 口径: 全部为提示性级别，不阻断加载
// ==========================================

use crate::domain::{ProcedureRecord, ServiceArea};
use serde::Serialize;
use std::collections::HashSet;

/// 质量问题级别（均不阻断）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogQualityLevel {
    Info,
    Warning,
}

/// 单条质量问题
#[derive(Debug, Clone, Serialize)]
pub struct CatalogViolation {
    pub record_id: Option<i64>,
    pub level: CatalogQualityLevel,
    pub field: String,
    pub message: String,
}

/// 质量报告
#[derive(Debug, Clone, Serialize)]
pub struct CatalogQualityReport {
    pub total_records: usize,
    pub info_count: usize,
    pub warning_count: usize,
    pub violations: Vec<CatalogViolation>,
}

impl CatalogQualityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

pub struct CatalogQualityValidator;

impl CatalogQualityValidator {
    /// 执行全部校验并生成报告
    pub fn validate(
        &self,
        records: &[ProcedureRecord],
        areas: &[ServiceArea],
    ) -> CatalogQualityReport {
        let mut violations = Vec::new();

        if records.is_empty() {
            violations.push(CatalogViolation {
                record_id: None,
                level: CatalogQualityLevel::Info,
                field: "records".to_string(),
                message: "病例目录为空，排程结果将恒为空".to_string(),
            });
        }

        violations.extend(self.validate_unique_ids(records));
        violations.extend(self.validate_service_references(records, areas));
        for record in records {
            violations.extend(self.validate_numeric_ranges(record));
        }

        self.generate_report(records.len(), violations)
    }

    /// 校验主键唯一性（同目录内 id 不得重复）
    pub fn validate_unique_ids(&self, records: &[ProcedureRecord]) -> Vec<CatalogViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for record in records {
            if !seen_ids.insert(record.id) {
                violations.push(CatalogViolation {
                    record_id: Some(record.id),
                    level: CatalogQualityLevel::Warning,
                    field: "id".to_string(),
                    message: "重复病例编号（同目录内）".to_string(),
                });
            }
        }

        violations
    }

    /// 校验科室引用（case_service 必须在科室清单中）
    ///
    /// 未知科室的记录不会获得任何医生分钟预算，会被阶段一整体拒绝。
    pub fn validate_service_references(
        &self,
        records: &[ProcedureRecord],
        areas: &[ServiceArea],
    ) -> Vec<CatalogViolation> {
        let known: HashSet<&str> = areas.iter().map(|a| a.name.as_str()).collect();

        records
            .iter()
            .filter(|r| !known.contains(r.case_service.as_str()))
            .map(|r| CatalogViolation {
                record_id: Some(r.id),
                level: CatalogQualityLevel::Warning,
                field: "case_service".to_string(),
                message: format!("未知科室引用: {}", r.case_service),
            })
            .collect()
    }

    /// 校验数值范围（负值在入库时会被归零）
    pub fn validate_numeric_ranges(&self, record: &ProcedureRecord) -> Vec<CatalogViolation> {
        let mut violations = Vec::new();

        let numeric_fields = [
            ("avg_revenue", record.avg_revenue),
            ("avg_surgery_minutes", record.avg_surgery_minutes),
            ("avg_los_hours", record.avg_los_hours),
            ("avg_icu_hours", record.avg_icu_hours),
        ];

        for (field, value) in numeric_fields {
            if value < 0.0 {
                violations.push(CatalogViolation {
                    record_id: Some(record.id),
                    level: CatalogQualityLevel::Warning,
                    field: field.to_string(),
                    message: format!("负值将归零: {:.2}", value),
                });
            }
        }

        // 年病例数为 0 的记录不产生任何负荷（INFO 级别）
        if record.count == 0 {
            violations.push(CatalogViolation {
                record_id: Some(record.id),
                level: CatalogQualityLevel::Info,
                field: "count".to_string(),
                message: "年病例数为 0，该记录不占用任何产能".to_string(),
            });
        }

        violations
    }

    /// 汇总各级别数量
    fn generate_report(
        &self,
        total_records: usize,
        violations: Vec<CatalogViolation>,
    ) -> CatalogQualityReport {
        let info_count = violations
            .iter()
            .filter(|v| matches!(v.level, CatalogQualityLevel::Info))
            .count();
        let warning_count = violations
            .iter()
            .filter(|v| matches!(v.level, CatalogQualityLevel::Warning))
            .count();

        CatalogQualityReport {
            total_records,
            info_count,
            warning_count,
            violations,
        }
    }
}
