use std::fmt::Write;

use crate::report::{CutGroup, CutPlan, PlanDocument};

const MAX_WIDTH: f64 = 80.0;

/// Draws one bar to scale, e.g.
///
/// ```text
/// +------------------+------------+-----+
/// |       3000       |    2000    |     |
/// +------------------+------------+-----+
/// ```
///
/// The last unlabelled segment is the leftover.
pub fn render_bar(capacity: u32, group: &CutGroup) -> String {
    if capacity == 0 {
        return String::new();
    }
    let scale = MAX_WIDTH / capacity as f64;

    let mut segments: Vec<(usize, String)> = group
        .cuts
        .iter()
        .map(|c| {
            (
                ((c.length as f64 * scale).round() as usize).max(1),
                c.length.to_string(),
            )
        })
        .collect();
    let leftover_w = (group.leftover as f64 * scale).round() as usize;
    if leftover_w > 0 {
        segments.push((leftover_w, String::new()));
    }

    let mut edge = String::from("+");
    let mut body = String::from("|");
    for (width, label) in &segments {
        edge.push_str(&"-".repeat(*width));
        edge.push('+');
        body.push_str(&center(label, *width));
        body.push('|');
    }

    format!("{edge}\n{body}\n{edge}\n")
}

fn center(label: &str, width: usize) -> String {
    if label.len() > width {
        return " ".repeat(width);
    }
    let pad = width - label.len();
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(pad - left))
}

/// Text cut list, one block per profile and cut group.
pub fn render_plan(plan: &CutPlan, layout: bool) -> String {
    let mut out = String::new();
    for profile in &plan.profiles {
        let _ = writeln!(out, "Profile: {} ({} pcs)", profile.profile, profile.pieces);
        for group in &profile.groups {
            let _ = writeln!(
                out,
                "  Cut Group {} | Total: {} mm | Leftover: {} mm",
                group.label, group.total, group.leftover
            );
            for cut in &group.cuts {
                let _ = writeln!(out, "    - {cut}");
            }
            if layout {
                for line in render_bar(plan.capacity, group).lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }
        out.push('\n');
    }

    let bars = plan.bar_count();
    let _ = writeln!(
        out,
        "Summary: {} bar{} of {} mm, {:.1}% waste",
        bars,
        if bars == 1 { "" } else { "s" },
        plan.capacity,
        plan.total_waste_percent(),
    );
    out
}

pub fn render_document(doc: &PlanDocument, layout: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project Name: {}", doc.project.name);
    let _ = writeln!(out, "Project Number: {}", doc.project.number);
    let _ = writeln!(out, "Date: {}", doc.generated_at);
    let _ = writeln!(out, "Maximum Profile Length: {} mm", doc.capacity);
    out.push('\n');
    out.push_str(&render_plan(&doc.plan, layout));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ProfileGroups, build_plan};
    use crate::types::{Item, ProjectInfo};

    fn group(cuts: &[u32], capacity: u32) -> CutGroup {
        let total: u64 = cuts.iter().map(|&c| c as u64).sum();
        CutGroup {
            label: 1,
            total,
            leftover: capacity as u64 - total,
            cuts: cuts.iter().map(|&c| Item::new(c, "Wall 1")).collect(),
        }
    }

    #[test]
    fn test_render_bar_with_leftover() {
        let output = render_bar(5880, &group(&[3000, 2000], 5880));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert!(lines[1].contains("3000"));
        assert!(lines[1].contains("2000"));
        // two cuts plus a leftover segment
        assert_eq!(lines[0].matches('+').count(), 4);
    }

    #[test]
    fn test_render_full_bar() {
        let output = render_bar(5000, &group(&[2500, 2500], 5000));
        let first = output.lines().next().unwrap();
        assert_eq!(first.matches('+').count(), 3);
    }

    #[test]
    fn test_render_tiny_cut_still_drawn() {
        let output = render_bar(12000, &group(&[20], 12000));
        let first = output.lines().next().unwrap();
        assert!(first.starts_with("+-+"));
    }

    #[test]
    fn test_render_plan_text() {
        let mut groups = ProfileGroups::new();
        groups.extend(
            "VS1",
            [
                Item::new(3000, "Wall 1"),
                Item::new(2000, "Wall 1"),
                Item::new(2000, "Wall 2"),
            ],
        );
        let plan = build_plan(&groups, 5880).unwrap();
        let text = render_plan(&plan, false);
        assert!(text.contains("Profile: VS1 (2 pcs)"));
        assert!(text.contains("Cut Group 1 | Total: 5000 mm | Leftover: 880 mm"));
        assert!(text.contains("Cut Group 2 | Total: 2000 mm | Leftover: 3880 mm"));
        assert!(text.contains("- 2000 mm ---> Wall 2"));
        assert!(text.contains("Summary: 2 bars of 5880 mm"));
        assert!(!text.contains('+'));
    }

    #[test]
    fn test_render_document_header() {
        let plan = build_plan(&ProfileGroups::new(), 6000).unwrap();
        let doc = PlanDocument::new(
            ProjectInfo {
                name: "Harbour View".to_string(),
                number: "P-0042".to_string(),
            },
            "17-10-2026 09:30:00".to_string(),
            plan,
        );
        let text = render_document(&doc, true);
        assert!(text.starts_with("Project Name: Harbour View\n"));
        assert!(text.contains("Date: 17-10-2026 09:30:00"));
        assert!(text.contains("Maximum Profile Length: 6000 mm"));
        assert!(text.contains("Summary: 0 bars"));
    }
}
