// ==========================================
// 手术病例优先排程系统 - 控制台主入口
// ==========================================
// 系统定位: 决策支持系统
// 用法:
//   surgical-caseload-aps [catalog_path] [or_hours bed_count icu_bed_count]
//
// 不带预算参数时使用默认预算（OR=0，推荐清单为空）。
// ==========================================

use surgical_caseload_aps::api::BudgetSubmissionRequest;
use surgical_caseload_aps::app::{get_default_catalog_path, AppState};
use surgical_caseload_aps::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", surgical_caseload_aps::APP_NAME);
    tracing::info!("系统版本: {}", surgical_caseload_aps::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);

    // 目录路径（默认按环境变量/用户数据目录解析）
    let catalog_path = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_catalog_path);
    tracing::info!("使用病例目录: {}", catalog_path);

    // 创建AppState
    let state = AppState::new(catalog_path)?;

    // 可选的预算参数: or_hours bed_count icu_bed_count
    let budget_args: Vec<String> = args.collect();
    if !budget_args.is_empty() {
        if budget_args.len() != 3 {
            return Err(format!(
                "预算参数需要 3 个数值 (or_hours bed_count icu_bed_count)，收到 {} 个",
                budget_args.len()
            )
            .into());
        }

        let request = BudgetSubmissionRequest {
            or_hours: budget_args[0].parse::<f64>()?,
            bed_count: budget_args[1].parse::<f64>()?,
            icu_bed_count: budget_args[2].parse::<f64>()?,
        };
        state.submit_budget(request)?;
    } else {
        tracing::info!("未提交预算，使用默认预算（OR=0）");
    }

    let response = state.recommend()?;

    render_table(&response);
    Ok(())
}

// 固定宽度表格输出（列对应展示边界的六个字段）
fn render_table(response: &surgical_caseload_aps::RecommendationResponse) {
    println!();
    println!(
        "{:<44} {:<20} {:>10} {:>10} {:>10} {:>18}",
        "Procedure", "Department", "Cases/mo", "OR (hrs)", "LOS (d)", "Contribution"
    );
    println!("{}", "-".repeat(118));

    for row in &response.rows {
        println!(
            "{:<44} {:<20} {:>10} {:>10.1} {:>10} {:>18}",
            truncate(&row.procedure_name, 44),
            truncate(&row.service_name, 20),
            row.recommended_case_count,
            row.or_hours_per_case,
            row.length_of_stay_days,
            row.formatted_revenue
        );
    }

    println!("{}", "-".repeat(118));
    println!(
        "推荐 {} / 参与 {} 条记录 | OR {:.1} 分钟, 床日 {:.2}, ICU 日 {:.2} | run_id={}",
        response.total_count,
        response.considered_count,
        response.totals.or_minutes,
        response.totals.bed_days,
        response.totals.icu_days,
        response.run_id
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
