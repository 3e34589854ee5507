// ==========================================
// 测试目录生成器
// ==========================================
// 用途: 生成病例目录测试数据集（JSON/CSV）
// 输出: tests/fixtures/datasets/*
// ==========================================

use std::error::Error;
use std::fs;
use std::fs::File;

use csv::Writer;
use surgical_caseload_aps::domain::ProcedureRecord;

// 科室与代表术式（与内置默认科室清单保持一致）
const SERVICE_PROCEDURES: &[(&str, &str)] = &[
    ("Orthopedics", "Total knee arthroplasty"),
    ("General", "Laparoscopic cholecystectomy"),
    ("Cardiovascular", "Coronary artery bypass graft"),
    ("ENT", "Tonsillectomy"),
    ("Gynecology", "Total abdominal hysterectomy"),
    ("Urology", "Transurethral resection of prostate"),
    ("Neurosurgery", "Lumbar laminectomy"),
    ("Ophthalmology", "Cataract extraction"),
];

// 生成正常病例记录（索引派生，完全确定）
fn generate_normal_record(index: usize) -> ProcedureRecord {
    let (service, base_name) = SERVICE_PROCEDURES[index % SERVICE_PROCEDURES.len()];

    ProcedureRecord {
        id: (index + 1) as i64,
        case_service: service.to_string(),
        avg_revenue: 800.0 + (index % 37) as f64 * 450.0,
        count: 12 + (index % 25) as u32 * 8,
        avg_surgery_minutes: 30.0 + (index % 12) as f64 * 15.0,
        avg_los_hours: (index % 9) as f64 * 24.0,
        avg_icu_hours: if index % 7 == 0 { 24.0 } else { 0.0 },
        procedure_name: format!("{} ({})", base_name, index / SERVICE_PROCEDURES.len() + 1),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成病例目录测试数据集...");

    fs::create_dir_all("tests/fixtures/datasets")?;

    // 1. 标准目录（JSON + CSV 同一份数据）
    generate_standard_catalog()?;

    // 2. 脏数据目录（负值 / 未知科室 / 重复编号 / 零台数）
    generate_dirty_catalog()?;

    // 3. 大目录（500 条）
    generate_large_catalog()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn write_json(path: &str, records: &[ProcedureRecord]) -> Result<(), Box<dyn Error>> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)?;
    Ok(())
}

fn write_csv(path: &str, records: &[ProcedureRecord]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn generate_standard_catalog() -> Result<(), Box<dyn Error>> {
    let records: Vec<ProcedureRecord> = (0..40).map(generate_normal_record).collect();

    write_json("tests/fixtures/datasets/01_standard_catalog.json", &records)?;
    write_csv("tests/fixtures/datasets/01_standard_catalog.csv", &records)?;

    println!("✓ 生成 01_standard_catalog.json / .csv (40条)");
    Ok(())
}

fn generate_dirty_catalog() -> Result<(), Box<dyn Error>> {
    let mut records = Vec::new();

    // 正常数据 (10条)
    for i in 0..10 {
        records.push(generate_normal_record(i + 1000));
    }

    // 负收益 (2条)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 1010);
        record.avg_revenue = -2500.0;
        records.push(record);
    }

    // 负手术时长 (2条)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 1012);
        record.avg_surgery_minutes = -60.0;
        records.push(record);
    }

    // 未知科室 (2条)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 1014);
        record.case_service = "Dermatology".to_string();
        records.push(record);
    }

    // 重复编号 (2条，与前两条正常数据同 id)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 1016);
        record.id = (i + 1001) as i64;
        records.push(record);
    }

    // 年台数为 0 (2条)
    for i in 0..2 {
        let mut record = generate_normal_record(i + 1018);
        record.count = 0;
        records.push(record);
    }

    write_json("tests/fixtures/datasets/02_dirty_catalog.json", &records)?;

    println!("✓ 生成 02_dirty_catalog.json (20条，含6类质量问题)");
    Ok(())
}

fn generate_large_catalog() -> Result<(), Box<dyn Error>> {
    let records: Vec<ProcedureRecord> = (0..500)
        .map(|i| generate_normal_record(i + 10000))
        .collect();

    write_csv("tests/fixtures/datasets/03_large_catalog.csv", &records)?;

    println!("✓ 生成 03_large_catalog.csv (500条)");
    Ok(())
}
