// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use std::io::Write;

use surgical_caseload_aps::domain::{CapacityBudget, ProcedureRecord, ServiceArea};

// ==========================================
// ProcedureRecord 构建器
// ==========================================

pub struct ProcedureRecordBuilder {
    id: i64,
    case_service: String,
    avg_revenue: f64,
    count: u32,
    avg_surgery_minutes: f64,
    avg_los_hours: f64,
    avg_icu_hours: f64,
    procedure_name: String,
}

impl ProcedureRecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            case_service: "General".to_string(),
            avg_revenue: 1000.0,
            count: 12,
            avg_surgery_minutes: 60.0,
            avg_los_hours: 0.0,
            avg_icu_hours: 0.0,
            procedure_name: format!("Procedure {}", id),
        }
    }

    pub fn service(mut self, service: &str) -> Self {
        self.case_service = service.to_string();
        self
    }

    pub fn revenue(mut self, revenue: f64) -> Self {
        self.avg_revenue = revenue;
        self
    }

    pub fn annual_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn surgery_minutes(mut self, minutes: f64) -> Self {
        self.avg_surgery_minutes = minutes;
        self
    }

    pub fn los_hours(mut self, hours: f64) -> Self {
        self.avg_los_hours = hours;
        self
    }

    pub fn icu_hours(mut self, hours: f64) -> Self {
        self.avg_icu_hours = hours;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.procedure_name = name.to_string();
        self
    }

    pub fn build(self) -> ProcedureRecord {
        ProcedureRecord {
            id: self.id,
            case_service: self.case_service,
            avg_revenue: self.avg_revenue,
            count: self.count,
            avg_surgery_minutes: self.avg_surgery_minutes,
            avg_los_hours: self.avg_los_hours,
            avg_icu_hours: self.avg_icu_hours,
            procedure_name: self.procedure_name,
        }
    }
}

// ==========================================
// 便捷函数
// ==========================================

/// 创建测试用的科室（显式月度分钟预算）
pub fn create_service_area(name: &str, surgeon_minutes: f64) -> ServiceArea {
    ServiceArea::new(name, 1, surgeon_minutes)
}

/// 创建测试用的产能预算（内部口径直接赋值）
pub fn create_budget(or_minutes: f64, bed_days: f64, icu_days: f64) -> CapacityBudget {
    CapacityBudget {
        or_minutes,
        bed_days,
        icu_days,
    }
}

/// 把病例记录写入带 .json 后缀的临时文件
pub fn write_catalog_json(records: &[ProcedureRecord]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("创建临时 JSON 文件失败");
    let content = serde_json::to_string_pretty(records).expect("序列化病例记录失败");
    write!(file, "{}", content).expect("写入临时 JSON 文件失败");
    file
}

/// 把病例记录写入带 .csv 后缀的临时文件（表头与 JSON 字段名一致）
pub fn write_catalog_csv(records: &[ProcedureRecord]) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("创建临时 CSV 文件失败");

    let mut writer = csv::Writer::from_writer(file.reopen().expect("重新打开临时 CSV 文件失败"));
    for record in records {
        writer.serialize(record).expect("写入 CSV 记录失败");
    }
    writer.flush().expect("刷新 CSV 写入器失败");
    drop(writer);

    file
}
