use crate::aggregate::{DepartmentCounts, ThemeDistribution};
use std::fmt::Write;
use survey_core::{translate, Language, Theme};

const BAR_WIDTH: usize = 30;

fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).max(1);
    "█".repeat(cells)
}

/// Horizontal bars, one per theme, zero buckets included.
pub fn render_distribution(distribution: &ThemeDistribution, language: Language) -> String {
    let max = distribution
        .buckets()
        .iter()
        .map(|(_, c)| *c)
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (theme, count) in distribution.buckets() {
        let _ = writeln!(
            out,
            "{:<8} {:>4} {:>5.1}% {}",
            translate(language, theme.label_key()),
            count,
            distribution.share(theme),
            bar(count, max, BAR_WIDTH),
        );
    }
    out
}

/// One row per department with a stacked g/p/b bar. Callers pass the
/// already-truncated display slice.
pub fn render_departments(groups: &[DepartmentCounts]) -> String {
    let max = groups.iter().map(|g| g.total()).max().unwrap_or(0);
    let name_width = groups
        .iter()
        .map(|g| g.department.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(10, 24);
    let mut out = String::new();
    for group in groups {
        let name: String = group.department.chars().take(name_width).collect();
        let mut stacked = String::new();
        for theme in Theme::ALL {
            let glyph = match theme {
                Theme::Green => "g",
                Theme::Purple => "p",
                Theme::Blue => "b",
            };
            let cells = if max == 0 {
                0
            } else {
                group.count(theme) * BAR_WIDTH / max
            };
            stacked.push_str(&glyph.repeat(cells));
        }
        let _ = writeln!(
            out,
            "{:<width$} G:{:<3} P:{:<3} B:{:<3} {}",
            name,
            group.green,
            group.purple,
            group.blue,
            stacked,
            width = name_width,
        );
    }
    out
}
