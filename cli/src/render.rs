//! Plain-text rendering of the task list.

use task_client_core::{display_date, track_key, Task};

pub fn task_row(index: usize, task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut row = format!("[{mark}] {}  {}", track_key(index, task), task.title);
    if !task.description.is_empty() {
        row.push_str(&format!("\n      {}", task.description));
    }
    row.push_str(&format!(
        "\n      creada: {}  actualizada: {}",
        display_date(task.created_at.as_ref()),
        display_date(task.updated_at.as_ref())
    ));
    row
}

pub fn task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No hay tareas.".to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| task_row(index, task))
        .collect::<Vec<_>>()
        .join("\n")
}
