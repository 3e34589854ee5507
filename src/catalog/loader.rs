// ==========================================
// 手术病例优先排程系统 - 参考数据文件加载器
// ==========================================
// 支持: JSON (.json) / CSV (.csv)
// 产出: 强类型病例记录与科室清单
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::domain::{ProcedureRecord, ServiceArea};
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::fs::File;
use std::path::Path;

// ==========================================
// 通用加载器（根据扩展名自动选择）
// ==========================================
pub struct CatalogFileLoader;

impl CatalogFileLoader {
    /// 加载病例记录文件（.json 或 .csv）
    pub fn load_records<P: AsRef<Path>>(&self, file_path: P) -> CatalogResult<Vec<ProcedureRecord>> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => self.load_records_json(path),
            "csv" => self.load_records_csv(path),
            _ => Err(CatalogError::UnsupportedFormat(ext)),
        }
    }

    /// 加载科室清单文件（仅 .json）
    ///
    /// 文件形如 `[{ "service": "...", "surgeon_count": N, "surgeon_minutes": M }, ...]`
    pub fn load_service_areas<P: AsRef<Path>>(&self, file_path: P) -> CatalogResult<Vec<ServiceArea>> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "json" {
            return Err(CatalogError::UnsupportedFormat(ext));
        }

        let content = fs::read_to_string(path)?;
        let areas: Vec<ServiceArea> = serde_json::from_str(&content)?;
        Ok(areas)
    }

    // JSON: 顶层为记录数组
    fn load_records_json(&self, path: &Path) -> CatalogResult<Vec<ProcedureRecord>> {
        let content = fs::read_to_string(path)?;
        let records: Vec<ProcedureRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    // CSV: 表头必须与 JSON 字段名一致
    fn load_records_csv(&self, path: &Path) -> CatalogResult<Vec<ProcedureRecord>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;

            // 跳过完全空白的行
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            let record: ProcedureRecord = row.deserialize(Some(&headers))?;
            records.push(record);
        }

        Ok(records)
    }
}
