//! Columns section - the three-column board.

use crate::data::{Board, Task, TaskStatus};

use super::html_escape;

/// Render the three board columns.
pub fn render_columns(board: &Board) -> String {
    let columns: String = TaskStatus::COLUMNS
        .iter()
        .map(|status| render_column(board, *status))
        .collect();

    format!(
        r#"<section class="board-columns" data-section="columns">
{columns}</section>"#
    )
}

fn render_column(board: &Board, status: TaskStatus) -> String {
    let tasks = board.column(status);

    let cards: String = if tasks.is_empty() {
        r#"        <p class="column-empty">Nothing here.</p>
"#
        .to_string()
    } else {
        tasks.iter().map(|task| render_card(task)).collect()
    };

    format!(
        r#"    <div class="board-column" data-column="{key}">
        <h3>{title} <span class="column-count">{count}</span></h3>
{cards}    </div>
"#,
        key = status.as_str(),
        title = status.display_name(),
        count = tasks.len(),
    )
}

fn render_card(task: &Task) -> String {
    let advance = match task.status.next() {
        Some(next) => format!(
            r#"<a class="card-action" href="/demos/tasks?advance={}">&rarr; {}</a>"#,
            task.id,
            next.display_name()
        ),
        None => String::new(),
    };

    format!(
        r#"        <article class="task-card priority-{priority}">
            <h4>{title}</h4>
            <p>{detail}</p>
            <div class="card-footer">
                <span class="priority-tag">{priority}</span>
                {advance}
                <a class="card-action card-remove" href="/demos/tasks?remove={id}">Remove</a>
            </div>
        </article>
"#,
        priority = task.priority.as_str(),
        title = html_escape(&task.title),
        detail = html_escape(&task.detail),
        advance = advance,
        id = task.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_board;

    #[test]
    fn test_three_columns_render() {
        let html = render_columns(&seed_board());
        assert_eq!(html.matches("data-column=").count(), 3);
        assert!(html.contains("Wire up contact form"));
    }

    #[test]
    fn test_done_tasks_have_no_advance_link() {
        let board = seed_board();
        let done_column = render_column(&board, TaskStatus::Done);
        assert!(!done_column.contains("advance="));
        assert!(done_column.contains("remove=1"));
    }

    #[test]
    fn test_empty_column_message() {
        let mut board = seed_board();
        board.remove(1);
        let done_column = render_column(&board, TaskStatus::Done);
        assert!(done_column.contains("Nothing here"));
    }
}
