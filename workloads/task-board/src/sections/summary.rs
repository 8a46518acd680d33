//! Summary section - per-column counts and the add form.

use crate::data::{Board, TaskStatus};

/// Render the board summary and the quick-add form.
pub fn render_summary(board: &Board) -> String {
    let counts: String = TaskStatus::COLUMNS
        .iter()
        .map(|status| {
            format!(
                r#"<div class="count-tile"><span class="count-num">{}</span><span class="count-label">{}</span></div>"#,
                board.count(*status),
                status.display_name()
            )
        })
        .collect();

    format!(
        r#"<section class="board-summary" data-section="summary">
    <div class="count-row">{counts}</div>
    <form method="GET" action="/demos/tasks" class="add-form">
        <input type="text" name="add" placeholder="Add a task" required aria-label="Task title">
        <select name="priority" aria-label="Priority">
            <option value="low">Low</option>
            <option value="medium" selected>Medium</option>
            <option value="high">High</option>
        </select>
        <button type="submit">Add</button>
    </form>
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_board;

    #[test]
    fn test_summary_counts() {
        let html = render_summary(&seed_board());
        assert!(html.contains(r#"<span class="count-num">3</span><span class="count-label">To Do</span>"#));
        assert!(html.contains("In Progress"));
    }
}
