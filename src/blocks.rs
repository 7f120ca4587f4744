//! The fixed visual recipes the report is assembled from.
//!
//! Each recipe is a pure function of its literal inputs to a sequence of
//! composer calls; none of them branch on data beyond the page-break checks
//! and the summary table's alternating row background.  Sizes, colors, and
//! spacing are the tuned values of the published plan.

use crate::composer::{Align, CellMove, Composer};
use crate::model::{Cover, InfoBox, LegendEntry, Rule, SummaryRow, Task};
use crate::style::{
    stripe_color, TextStyle, BOX_BG, BOX_INK, BRAND, FAINT_GRAY, GOAL_GREEN, INK, LIST_GRAY,
    MUTED, SIDE_MARGIN, SLATE, TAGLINE_GRAY, WHITE,
};

/// Indentation of task bodies under the ordinal column, in millimetres.
const TASK_INDENT: f64 = 7.0;

/// Width of the metric column in the summary table, in millimetres.
const METRIC_COLUMN: f64 = 120.0;

/// Lays out the title page on the currently open (first) page.
pub fn title_page(c: &mut Composer, cover: &Cover) {
    c.advance(60.0);
    c.cell(
        None,
        15.0,
        cover.title,
        TextStyle::bold(28.0, BRAND),
        None,
        Align::Center,
        CellMove::NewLine,
    );
    c.advance(5.0);

    let subtitle = TextStyle::bold(18.0, SLATE);
    c.cell(None, 12.0, cover.subtitle, subtitle, None, Align::Center, CellMove::NewLine);
    c.cell(None, 12.0, cover.dates, subtitle, None, Align::Center, CellMove::NewLine);
    c.advance(15.0);

    let tagline = TextStyle::regular(11.0, TAGLINE_GRAY);
    c.cell(None, 8.0, cover.tagline, tagline, None, Align::Center, CellMove::NewLine);
    c.cell(None, 8.0, cover.site, tagline, None, Align::Center, CellMove::NewLine);
    c.advance(30.0);

    let stamp = TextStyle::regular(9.0, FAINT_GRAY);
    c.cell(None, 8.0, cover.generated, stamp, None, Align::Center, CellMove::NewLine);
}

/// Section heading in the brand color with a full-width underline.
pub fn section_title(c: &mut Composer, text: &str) {
    c.advance(4.0);
    c.cell(
        None,
        10.0,
        text,
        TextStyle::bold(16.0, BRAND),
        None,
        Align::Left,
        CellMove::NewLine,
    );
    c.rule_line(BRAND, 0.5);
    c.advance(6.0);
}

/// The table-of-contents list, one indented line per section.
pub fn toc_list(c: &mut Composer, entries: &[&str]) {
    let style = TextStyle::regular(10.0, LIST_GRAY);
    for item in entries {
        let line = format!("   {item}");
        c.cell(None, 7.0, &line, style, None, Align::Left, CellMove::NewLine);
    }
    c.advance(5.0);
}

/// Two-column legend rows: bold marker label, plain description.
pub fn legend(c: &mut Composer, entries: &[LegendEntry]) {
    for entry in entries {
        let label = format!("  {}", entry.label);
        c.cell(
            Some(55.0),
            5.0,
            &label,
            TextStyle::bold(8.0, BRAND),
            None,
            Align::Left,
            CellMove::Right,
        );
        c.cell(
            None,
            5.0,
            entry.description,
            TextStyle::regular(8.0, MUTED),
            None,
            Align::Left,
            CellMove::NewLine,
        );
    }
    c.advance(5.0);
}

/// Brand-colored banner announcing a campaign day.
pub fn day_header(c: &mut Composer, date: &str, motto: &str) {
    c.ensure_room(c.breaks().day_header);
    let banner = format!("  {date} — {motto}");
    c.cell(
        None,
        8.0,
        &banner,
        TextStyle::bold(11.0, WHITE),
        Some(BRAND),
        Align::Left,
        CellMove::NewLine,
    );
    c.advance(3.0);
}

/// One enumerated task: ordinal, title, detail text, and the goal line.
pub fn task(c: &mut Composer, ordinal: usize, task: &Task) {
    c.ensure_room(c.breaks().task);

    let number = format!("{ordinal}.");
    c.cell(
        Some(TASK_INDENT),
        5.0,
        &number,
        TextStyle::bold(9.0, BRAND),
        None,
        Align::Left,
        CellMove::Right,
    );
    c.multi_cell(None, 5.0, task.title, TextStyle::bold(9.0, INK), None);

    c.set_x(SIDE_MARGIN + TASK_INDENT);
    c.multi_cell(None, 4.5, task.details, TextStyle::regular(8.0, MUTED), None);

    c.set_x(SIDE_MARGIN + TASK_INDENT);
    c.cell(
        Some(10.0),
        4.5,
        "CEL: ",
        TextStyle::bold(8.0, GOAL_GREEN),
        None,
        Align::Left,
        CellMove::Right,
    );
    c.multi_cell(None, 4.5, task.goal, TextStyle::regular(8.0, GOAL_GREEN), None);

    c.advance(3.0);
}

/// Feature box: colored title banner over a tinted body block.
pub fn info_box(c: &mut Composer, feature: &InfoBox) {
    c.ensure_room(c.breaks().info_box);

    let title = format!("  {}", feature.title);
    c.cell(
        None,
        6.0,
        &title,
        TextStyle::bold(9.0, WHITE),
        Some(feature.color),
        Align::Left,
        CellMove::NewLine,
    );
    c.multi_cell(
        None,
        4.5,
        feature.body,
        TextStyle::regular(8.0, BOX_INK),
        Some(BOX_BG),
    );
    c.advance(4.0);
}

/// Two-column goals table with a brand header row and striped body rows.
pub fn summary_table(c: &mut Composer, rows: &[SummaryRow]) {
    let header = TextStyle::bold(9.0, WHITE);
    c.cell(
        Some(METRIC_COLUMN),
        7.0,
        "  Metryka",
        header,
        Some(BRAND),
        Align::Left,
        CellMove::Right,
    );
    c.cell(None, 7.0, "  Target", header, Some(BRAND), Align::Left, CellMove::NewLine);

    for (index, row) in rows.iter().enumerate() {
        let background = stripe_color(index);
        let metric = format!("  {}", row.metric);
        c.cell(
            Some(METRIC_COLUMN),
            6.0,
            &metric,
            TextStyle::regular(8.0, INK),
            Some(background),
            Align::Left,
            CellMove::Right,
        );
        let target = format!("  {}", row.target);
        c.cell(
            None,
            6.0,
            &target,
            TextStyle::bold(8.0, INK),
            Some(background),
            Align::Left,
            CellMove::NewLine,
        );
    }
    c.advance(5.0);
}

/// Bullet list of the gamification goals below the summary table.
pub fn goal_list(c: &mut Composer, heading: &str, goals: &[&str]) {
    c.advance(3.0);
    c.cell(
        None,
        7.0,
        heading,
        TextStyle::bold(10.0, BRAND),
        None,
        Align::Left,
        CellMove::NewLine,
    );

    let style = TextStyle::regular(9.0, LIST_GRAY);
    for goal in goals {
        c.cell(Some(5.0), 5.0, "•", style, None, Align::Left, CellMove::Right);
        let line = format!(" {goal}");
        c.cell(None, 5.0, &line, style, None, Align::Left, CellMove::NewLine);
    }
}

/// One numbered rule: brand headline plus a wrapped explanation.
pub fn rule(c: &mut Composer, ordinal: usize, rule: &Rule) {
    c.ensure_room(c.breaks().rule);

    let headline = format!("{}. {}", ordinal, rule.title);
    c.cell(
        None,
        6.0,
        &headline,
        TextStyle::bold(9.0, BRAND),
        None,
        Align::Left,
        CellMove::NewLine,
    );
    c.multi_cell(None, 4.5, rule.description, TextStyle::regular(8.0, MUTED), None);
    c.advance(2.0);
}
