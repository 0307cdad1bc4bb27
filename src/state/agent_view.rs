//! Drill-down into a sub-agent trace.
//!
//! While a trace is open the list shows the agent's rows instead of the
//! session's. The parent's cursor and category toggles are parked here and
//! put back on the way out. The search query is left as is. Collapse flags
//! are keyed by row id, which the trace renumbers, so they start over on
//! both transitions.

use tracing::debug;

use crate::model::{KindFilter, LogRow, RowFilter, RowId, RowKind};

use super::collapse::CollapseStates;
use super::list_cursor::ListCursor;
use super::text_scroll::TextScroll;

/// Agent id to open when `row` is selected, if it launches a sub-agent.
pub fn drill_target(row: &LogRow) -> Option<&str> {
    match row.kind {
        RowKind::SubagentStart => row.agent_id.as_deref(),
        _ => None,
    }
}

/// An open sub-agent trace plus the parent state it replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentView {
    agent_id: String,
    rows: Vec<LogRow>,
    parent_selected: usize,
    parent_kinds: KindFilter,
}

impl AgentView {
    /// Open `rows` as the trace of `agent_id`.
    ///
    /// Rows are renumbered from 1 in trace order. The parent's cursor and
    /// category toggles are saved, then the cursor goes to the top, all
    /// categories are enabled, every row is collapsed and the detail pane
    /// scrolls back to the top.
    pub fn enter(
        agent_id: impl Into<String>,
        rows: Vec<LogRow>,
        cursor: &mut ListCursor,
        filter: &mut RowFilter,
        collapse: &mut CollapseStates,
        scroll: &mut TextScroll,
    ) -> Self {
        let rows = rows
            .into_iter()
            .zip(1u64..)
            .map(|(mut row, id)| {
                row.id = RowId::new(id);
                row
            })
            .collect::<Vec<_>>();
        let view = Self {
            agent_id: agent_id.into(),
            rows,
            parent_selected: cursor.selected(),
            parent_kinds: filter.kinds,
        };

        debug!(
            agent_id = %view.agent_id,
            rows = view.rows.len(),
            parent_selected = view.parent_selected,
            "entering agent trace"
        );
        *cursor = ListCursor::default();
        filter.kinds = KindFilter::all();
        collapse.reset();
        scroll.reset();
        view
    }

    /// Close the trace and restore the parent's cursor and toggles.
    ///
    /// The parent rows come back collapsed.
    pub fn leave(
        self,
        cursor: &mut ListCursor,
        filter: &mut RowFilter,
        collapse: &mut CollapseStates,
        scroll: &mut TextScroll,
    ) {
        debug!(agent_id = %self.agent_id, "leaving agent trace");
        *cursor = ListCursor::new(self.parent_selected);
        filter.kinds = self.parent_kinds;
        collapse.reset();
        scroll.reset();
    }

    /// Agent whose trace is open.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Rows of the trace.
    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowCategory;
    use crate::state::navigation::Direction;

    fn trace() -> Vec<LogRow> {
        vec![
            LogRow::new(40, RowKind::User).with_content("Explore"),
            LogRow::new(41, RowKind::Tool).with_content("ls"),
            LogRow::new(42, RowKind::Assistant).with_content("Found it"),
        ]
    }

    #[test]
    fn only_subagent_start_with_id_is_a_target() {
        let start = LogRow::new(1, RowKind::SubagentStart).with_agent("a7b2877");
        let end = LogRow::new(2, RowKind::SubagentEnd).with_agent("a7b2877");
        let anonymous = LogRow::new(3, RowKind::SubagentStart);

        assert_eq!(drill_target(&start), Some("a7b2877"));
        assert_eq!(drill_target(&end), None);
        assert_eq!(drill_target(&anonymous), None);
    }

    #[test]
    fn enter_resets_cursor_and_filters() {
        // GIVEN a parent view with a moved cursor and a hidden category
        let mut cursor = ListCursor::new(12);
        let mut filter = RowFilter::default();
        filter.kinds.set(RowCategory::Thinking, false);

        // WHEN drilling into an agent
        let view = AgentView::enter(
            "a7b2877",
            trace(),
            &mut cursor,
            &mut filter,
            &mut CollapseStates::default(),
            &mut TextScroll::default(),
        );

        // THEN the agent trace starts at the top with everything shown
        assert_eq!(cursor.selected(), 0);
        assert!(filter.kinds.is_all());
        assert_eq!(view.agent_id(), "a7b2877");
    }

    #[test]
    fn enter_renumbers_rows_from_one() {
        let mut cursor = ListCursor::default();
        let mut filter = RowFilter::default();

        let view = AgentView::enter(
            "a1",
            trace(),
            &mut cursor,
            &mut filter,
            &mut CollapseStates::default(),
            &mut TextScroll::default(),
        );

        let ids: Vec<RowId> = view.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![RowId::new(1), RowId::new(2), RowId::new(3)]);
    }

    #[test]
    fn leave_restores_parent_state() {
        let mut cursor = ListCursor::new(12);
        let mut filter = RowFilter::default();
        filter.kinds.set(RowCategory::Tool, false);
        filter.set_search("content:parser");
        let parent_kinds = filter.kinds;

        let mut collapse = CollapseStates::default();
        let mut scroll = TextScroll::default();

        let view = AgentView::enter(
            "a1",
            trace(),
            &mut cursor,
            &mut filter,
            &mut collapse,
            &mut scroll,
        );
        cursor.step(view.rows(), Direction::Down);
        filter.kinds.set(RowCategory::User, false);
        view.leave(&mut cursor, &mut filter, &mut collapse, &mut scroll);

        assert_eq!(cursor.selected(), 12);
        assert_eq!(filter.kinds, parent_kinds);
        assert_eq!(filter.search.len(), 1);
    }

    #[test]
    fn parent_expansion_does_not_leak_into_trace() {
        // GIVEN parent row 1 expanded and the detail pane scrolled
        let parent = LogRow::new(1, RowKind::User).with_content("Start an explorer");
        let mut collapse = CollapseStates::default();
        assert!(collapse.toggle(&parent));
        let mut scroll = TextScroll::default();
        scroll.down(6);
        let mut cursor = ListCursor::default();
        let mut filter = RowFilter::default();

        // WHEN entering a trace whose first row is renumbered to id 1
        let multi_line = vec![
            LogRow::new(77, RowKind::Assistant).with_content("one\ntwo\nthree\nfour"),
        ];
        let view = AgentView::enter(
            "a7b2877",
            multi_line,
            &mut cursor,
            &mut filter,
            &mut collapse,
            &mut scroll,
        );

        // THEN the trace row starts collapsed and the detail pane is at the top
        let first = &view.rows()[0];
        assert_eq!(first.id, RowId::new(1));
        assert!(collapse.is_collapsed(first.id));
        assert_eq!(collapse.height_of(first, 5), 1);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn trace_expansion_does_not_leak_into_parent() {
        let mut collapse = CollapseStates::default();
        let mut scroll = TextScroll::default();
        let mut cursor = ListCursor::new(4);
        let mut filter = RowFilter::default();

        let view = AgentView::enter(
            "a1",
            trace(),
            &mut cursor,
            &mut filter,
            &mut collapse,
            &mut scroll,
        );
        collapse.expand_all(view.rows());
        scroll.down(3);
        view.leave(&mut cursor, &mut filter, &mut collapse, &mut scroll);

        assert!(collapse.is_collapsed(RowId::new(1)));
        assert_eq!(scroll.offset(), 0);
        assert_eq!(cursor.selected(), 4);
    }
}
