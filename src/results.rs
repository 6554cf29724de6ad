use crate::config::SiteConfig;
use crate::data::CtfResult;
use crate::rank::{classify, RankClass};
use yew::prelude::*;

pub const SHOW_EARLIER_LABEL: &str = "Show Earlier Placements";
pub const SHOW_LESS_LABEL: &str = "Show Less";
const HIDDEN_ROW_CLASS: &str = "ctf-hidden";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow<'a> {
    pub result: &'a CtfResult,
    pub rank: RankClass,
    /// Older than the cutoff year, hidden while the table is collapsed.
    pub collapsible: bool,
}

pub fn build_rows(results: &[CtfResult], cutoff_year: i32) -> Vec<ResultRow<'_>> {
    results
        .iter()
        .map(|result| ResultRow {
            result,
            rank: classify(&result.rank),
            collapsible: result
                .year_number()
                .map(|year| year < cutoff_year)
                .unwrap_or(false),
        })
        .collect()
}

/// Two-state "show earlier placements" control. Starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn row_visible(self, row: &ResultRow<'_>) -> bool {
        self.expanded || !row.collapsible
    }

    pub fn label(self) -> &'static str {
        if self.expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_EARLIER_LABEL
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsTableProps {
    pub results: &'static [CtfResult],
    #[prop_or_default]
    pub config: SiteConfig,
}

#[function_component(ResultsTable)]
pub fn results_table(props: &ResultsTableProps) -> Html {
    let disclosure = use_state(Disclosure::default);
    let rows = build_rows(props.results, props.config.cutoff_year);
    let has_collapsible = rows.iter().any(|row| row.collapsible);

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *disclosure;
            next.toggle();
            disclosure.set(next);
        })
    };

    html! {
        <>
            <table class="ctf-table">
                <thead>
                    <tr>
                        <th>{ "Event" }</th>
                        <th>{ "Team" }</th>
                        <th>{ "Rank" }</th>
                        <th>{ "Year" }</th>
                    </tr>
                </thead>
                <tbody id="ctf-list-body">
                    { for rows.iter().map(|row| render_row(row, *disclosure)) }
                </tbody>
            </table>
            {
                if has_collapsible {
                    html! {
                        <button id="ctf-show-more-btn" class="show-more-btn" onclick={on_toggle}>
                            { disclosure.label() }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

/// Class for a table row: collapsed rows carry `ctf-hidden`.
pub fn row_class(row: &ResultRow<'_>, disclosure: Disclosure) -> Option<&'static str> {
    if disclosure.row_visible(row) {
        None
    } else {
        Some(HIDDEN_ROW_CLASS)
    }
}

fn render_row(row: &ResultRow<'_>, disclosure: Disclosure) -> Html {
    html! {
        <tr class={classes!(row_class(row, disclosure))}>
            <td data-label="Event">{ &row.result.name }</td>
            <td data-label="Team"><span class="team-tag">{ &row.result.team }</span></td>
            <td data-label="Rank"><span class={row.rank.tier.badge_class()}>{ &row.result.rank }</span></td>
            <td data-label="Year">{ &row.result.year }</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CUTOFF_YEAR;
    use crate::rank::{Placement, RankTier};

    fn result(name: &str, rank: &str, year: &str) -> CtfResult {
        CtfResult {
            name: name.to_string(),
            team: "T".to_string(),
            rank: rank.to_string(),
            year: year.to_string(),
        }
    }

    fn visible_names(rows: &[ResultRow<'_>], disclosure: Disclosure) -> Vec<String> {
        rows.iter()
            .filter(|row| disclosure.row_visible(row))
            .map(|row| row.result.name.clone())
            .collect()
    }

    #[test]
    fn current_year_top_result_is_visible() {
        let results = vec![result("X", "1/10", "2025")];
        let rows = build_rows(&results, CUTOFF_YEAR);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank.tier, RankTier::Top);
        assert!(Disclosure::default().row_visible(&rows[0]));
    }

    #[test]
    fn older_ordinal_result_hidden_until_toggled() {
        let results = vec![result("X", "3rd", "2024")];
        let rows = build_rows(&results, CUTOFF_YEAR);
        let mut disclosure = Disclosure::default();

        assert_eq!(rows[0].rank.placement, Placement::Place(3));
        assert_eq!(rows[0].rank.tier, RankTier::Top);
        assert!(!disclosure.row_visible(&rows[0]));

        disclosure.toggle();
        assert!(disclosure.row_visible(&rows[0]));
    }

    #[test]
    fn rows_keep_input_order_and_count() {
        let results = vec![
            result("C", "29th", "2024"),
            result("A", "8/762", "2026"),
            result("B", "12", "2023"),
        ];
        let rows = build_rows(&results, CUTOFF_YEAR);
        let names: Vec<&str> = rows.iter().map(|row| row.result.name.as_str()).collect();

        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn toggle_reveals_exactly_the_older_rows_and_hides_them_again() {
        let results = vec![
            result("new", "1/10", "2026"),
            result("old", "5/10", "2024"),
            result("cutoff", "20/90", "2025"),
            result("older", "9th", "2023"),
        ];
        let rows = build_rows(&results, CUTOFF_YEAR);
        let mut disclosure = Disclosure::default();

        assert_eq!(visible_names(&rows, disclosure), ["new", "cutoff"]);
        assert_eq!(disclosure.label(), SHOW_EARLIER_LABEL);

        disclosure.toggle();
        assert_eq!(visible_names(&rows, disclosure), ["new", "old", "cutoff", "older"]);
        assert_eq!(disclosure.label(), SHOW_LESS_LABEL);

        disclosure.toggle();
        assert_eq!(visible_names(&rows, disclosure), ["new", "cutoff"]);
        assert_eq!(disclosure.label(), SHOW_EARLIER_LABEL);
    }

    #[test]
    fn older_rows_carry_hidden_class_until_expanded() {
        let results = vec![result("new", "1/10", "2025"), result("old", "3rd", "2024")];
        let rows = build_rows(&results, CUTOFF_YEAR);
        let mut disclosure = Disclosure::default();

        assert_eq!(row_class(&rows[0], disclosure), None);
        assert_eq!(row_class(&rows[1], disclosure), Some("ctf-hidden"));

        disclosure.toggle();
        assert_eq!(row_class(&rows[0], disclosure), None);
        assert_eq!(row_class(&rows[1], disclosure), None);

        disclosure.toggle();
        assert_eq!(row_class(&rows[1], disclosure), Some("ctf-hidden"));
    }

    #[test]
    fn unreadable_year_is_never_collapsed() {
        let results = vec![result("X", "1/10", "TBD")];
        let rows = build_rows(&results, CUTOFF_YEAR);
        assert!(!rows[0].collapsible);
    }

    #[test]
    fn embedded_dataset_collapses_pre_cutoff_rows() {
        let results = crate::data::ctf_results();
        let rows = build_rows(results, CUTOFF_YEAR);
        let collapsed = rows.iter().filter(|row| row.collapsible).count();

        assert_eq!(rows.len(), results.len());
        assert_eq!(collapsed, 8);
    }
}
