//! Data structures describing the embedded plan content.
//!
//! Every field is a `&'static str` literal: the plan is baked into the
//! binary, nothing is constructed or mutated at run time.  The types exist so
//! the content module reads as data tables and the report script stays a
//! plain walk over them.

/// Text shown on the title page.
#[derive(Clone, Copy, Debug)]
pub struct Cover {
    /// Campaign name, set large in the brand color.
    pub title: &'static str,
    /// Document subtitle.
    pub subtitle: &'static str,
    /// Covered date range.
    pub dates: &'static str,
    /// One-line description of the promoted product.
    pub tagline: &'static str,
    /// Public site address.
    pub site: &'static str,
    /// Fixed generation stamp; kept literal so output stays deterministic.
    pub generated: &'static str,
}

/// One row of the priority/marker legend.
#[derive(Clone, Copy, Debug)]
pub struct LegendEntry {
    /// Marker or priority label.
    pub label: &'static str,
    /// What the marker means.
    pub description: &'static str,
}

/// A theme-colored box describing one system feature to promote.
#[derive(Clone, Copy, Debug)]
pub struct InfoBox {
    /// Banner title of the box.
    pub title: &'static str,
    /// Body text; embedded newlines are hard line breaks.
    pub body: &'static str,
    /// Banner background color.
    pub color: [u8; 3],
}

/// A single actionable task within a day.
#[derive(Clone, Copy, Debug)]
pub struct Task {
    /// Short imperative title.
    pub title: &'static str,
    /// How to carry the task out.
    pub details: &'static str,
    /// What the task is meant to achieve (the `CEL:` line).
    pub goal: &'static str,
}

/// One campaign day: a banner plus its ordered task list.
#[derive(Clone, Copy, Debug)]
pub struct Day {
    /// Weekday and date, e.g. `Poniedziałek 10.02`.
    pub date: &'static str,
    /// All-caps theme of the day.
    pub motto: &'static str,
    /// Tasks in execution order; ordinals are assigned from 1 at render time.
    pub tasks: &'static [Task],
}

/// A week-long section of day entries.
#[derive(Clone, Copy, Debug)]
pub struct Week {
    /// Numbered section title, e.g. `3. Tydzień 1 (10–16 lutego)`.
    pub title: &'static str,
    /// The days of the week that carry tasks.
    pub days: &'static [Day],
}

/// One metric/target pair of the goals summary table.
#[derive(Clone, Copy, Debug)]
pub struct SummaryRow {
    /// Metric description.
    pub metric: &'static str,
    /// Target value by the end of the month.
    pub target: &'static str,
}

/// A numbered rule with its rationale.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Rule headline.
    pub title: &'static str,
    /// Explanation rendered below the headline.
    pub description: &'static str,
}

/// The whole promotion plan.
#[derive(Clone, Copy, Debug)]
pub struct Plan {
    /// Title-page content.
    pub cover: Cover,
    /// Running header shown on pages after the first.
    pub running_header: &'static str,
    /// Title of the table-of-contents section.
    pub toc_title: &'static str,
    /// Title of the legend section.
    pub legend_title: &'static str,
    /// Legend rows.
    pub legend: &'static [LegendEntry],
    /// Title of the feature-promotion section.
    pub features_title: &'static str,
    /// Feature info boxes.
    pub features: &'static [InfoBox],
    /// The three campaign weeks.
    pub weeks: &'static [Week],
    /// Title of the goals-summary section.
    pub summary_title: &'static str,
    /// Metric/target rows of the summary table.
    pub summary: &'static [SummaryRow],
    /// Heading of the gamification goal list under the table.
    pub goals_heading: &'static str,
    /// Gamification goals.
    pub goals: &'static [&'static str],
    /// Title of the monthly rules section.
    pub rules_title: &'static str,
    /// The numbered rules.
    pub rules: &'static [Rule],
}

impl Plan {
    /// The table-of-contents lines, derived from the section titles so the
    /// TOC can never drift from the sections actually rendered.
    pub fn toc_entries(&self) -> Vec<&'static str> {
        let mut entries = vec![self.legend_title, self.features_title];
        entries.extend(self.weeks.iter().map(|week| week.title));
        entries.push(self.summary_title);
        entries.push(self.rules_title);
        entries
    }
}

#[cfg(test)]
mod tests {
    use crate::content::PLAN;

    #[test]
    fn toc_lists_all_seven_sections() {
        let entries = PLAN.toc_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], PLAN.legend_title);
        assert_eq!(entries[6], PLAN.rules_title);
    }

    #[test]
    fn every_day_has_tasks_with_titles() {
        for week in PLAN.weeks {
            assert!(!week.days.is_empty(), "empty week: {}", week.title);
            for day in week.days {
                assert!(!day.tasks.is_empty(), "day without tasks: {}", day.date);
                for task in day.tasks {
                    assert!(!task.title.is_empty());
                }
            }
        }
    }
}
