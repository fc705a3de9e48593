mod aggregate;
mod chart;

pub use aggregate::{
    count_on_date, department_breakdown, theme_distribution, today_count, top_departments,
    DepartmentCounts, SurveyReport, ThemeDistribution, DISPLAY_DEPARTMENTS,
};
pub use chart::{render_departments, render_distribution};
