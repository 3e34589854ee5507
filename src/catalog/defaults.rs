// ==========================================
// 手术病例优先排程系统 - 内置科室基准数据
// ==========================================
// 用途: 未提供科室配置文件时的出厂默认
// 口径: 每位外科医生每月 1800 分钟
// ==========================================

use crate::domain::ServiceArea;

/// 内置科室清单（18 个手术科室及其医生数）
///
/// 医生月度可用分钟数按 `surgeon_count * 1800` 推导。
pub fn default_service_areas() -> Vec<ServiceArea> {
    vec![
        ServiceArea::from_surgeon_count("Vascular", 3),
        ServiceArea::from_surgeon_count("Neurosurgery", 7),
        ServiceArea::from_surgeon_count("ENT", 15),
        ServiceArea::from_surgeon_count("Gastroenterology", 14),
        ServiceArea::from_surgeon_count("Ophthalmology", 15),
        ServiceArea::from_surgeon_count("Pulmonary", 8),
        ServiceArea::from_surgeon_count("General", 29),
        ServiceArea::from_surgeon_count("Orthopedics", 17),
        ServiceArea::from_surgeon_count("Hand", 2),
        ServiceArea::from_surgeon_count("Cardiovascular", 16),
        ServiceArea::from_surgeon_count("Plastics", 2),
        ServiceArea::from_surgeon_count("Urology", 4),
        ServiceArea::from_surgeon_count("Cardiothoracic", 3),
        ServiceArea::from_surgeon_count("Gynecology", 17),
        ServiceArea::from_surgeon_count("Ortho Total Joints", 4),
        ServiceArea::from_surgeon_count("Obstetrics", 11),
        ServiceArea::from_surgeon_count("Pain", 2),
        ServiceArea::from_surgeon_count("Oral Surgery", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试：默认科室清单完整且预算口径一致
    #[test]
    fn test_default_service_areas() {
        let areas = default_service_areas();
        assert_eq!(areas.len(), 18);

        // 每个科室预算 = 医生数 * 1800
        for area in &areas {
            assert_eq!(area.surgeon_minutes, area.surgeon_count as f64 * 1800.0);
        }

        // 抽查两个科室
        let general = areas.iter().find(|a| a.name == "General").unwrap();
        assert_eq!(general.surgeon_count, 29);
        assert_eq!(general.surgeon_minutes, 52200.0);

        let oral = areas.iter().find(|a| a.name == "Oral Surgery").unwrap();
        assert_eq!(oral.surgeon_minutes, 1800.0);
    }

    // 测试：科室名称唯一
    #[test]
    fn test_default_names_unique() {
        let areas = default_service_areas();
        let mut names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 18);
    }
}
