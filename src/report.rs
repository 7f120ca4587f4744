//! Assembles the full document from the plan data.
//!
//! The walk is a fixed script: title page, table of contents, legend,
//! feature boxes, one section per week, the goals summary, and the monthly
//! rules.  Sections after the title page each start on a fresh page; blocks
//! inside a section rely on the composer's break policy.

use crate::blocks;
use crate::composer::{Composer, RenderedPdf};
use crate::error::Error;
use crate::fonts;
use crate::model::Plan;

/// Renders `plan` into a finished PDF.
pub fn render_plan(plan: &Plan) -> Result<RenderedPdf, Error> {
    let fonts = fonts::load_default()?;
    let mut c = Composer::new(fonts, plan.cover.title, plan.running_header)?;

    blocks::title_page(&mut c, &plan.cover);

    c.break_page();
    blocks::section_title(&mut c, plan.toc_title);
    blocks::toc_list(&mut c, &plan.toc_entries());

    c.break_page();
    blocks::section_title(&mut c, plan.legend_title);
    blocks::legend(&mut c, plan.legend);

    blocks::section_title(&mut c, plan.features_title);
    for feature in plan.features {
        blocks::info_box(&mut c, feature);
    }

    for week in plan.weeks {
        c.break_page();
        blocks::section_title(&mut c, week.title);
        for day in week.days {
            blocks::day_header(&mut c, day.date, day.motto);
            for (index, task) in day.tasks.iter().enumerate() {
                blocks::task(&mut c, index + 1, task);
            }
        }
    }

    c.break_page();
    blocks::section_title(&mut c, plan.summary_title);
    blocks::summary_table(&mut c, plan.summary);
    blocks::goal_list(&mut c, plan.goals_heading, plan.goals);

    c.break_page();
    blocks::section_title(&mut c, plan.rules_title);
    for (index, rule) in plan.rules.iter().enumerate() {
        blocks::rule(&mut c, index + 1, rule);
    }

    let rendered = c.finish()?;
    log::info!(
        "rendered {} pages ({} bytes)",
        rendered.pages,
        rendered.bytes.len()
    );
    Ok(rendered)
}
