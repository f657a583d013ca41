//! todo 子命令实现 - 交互式待办列表

use crate::error::Result;
use crate::storage::tasks::{Task, TaskStore};

use super::read_input;

/// 运行待办列表交互循环
///
/// 用户输入错误和“任务不存在”只提示不中断；存储写入失败向上传播（致命）。
pub fn execute() -> Result<()> {
    let mut store = TaskStore::open(TaskStore::default_path()?);

    println!("{}", "=".repeat(50));
    println!("         TO-DO LIST CLI APPLICATION");
    println!("{}", "=".repeat(50));
    println!("\nAvailable Operations:");
    println!("1. Add task");
    println!("2. List tasks");
    println!("3. Complete task");
    println!("4. Delete task");
    println!("5. Clear completed tasks");
    println!("6. Exit");
    println!("{}", "=".repeat(50));

    loop {
        let Some(choice) = read_input("\nEnter operation number (1-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task(&mut store)?,
            "2" => list_tasks(&store),
            "3" => complete_task(&mut store)?,
            "4" => delete_task(&mut store)?,
            "5" => {
                let count = store.clear_completed()?;
                println!("✅ Cleared {} completed task(s)!", count);
            }
            "6" => {
                println!("\nThank you for using To-Do List CLI!");
                println!("Goodbye! 👋");
                break;
            }
            _ => println!("❌ Invalid choice! Please enter a number between 1-6."),
        }
    }

    Ok(())
}

fn add_task(store: &mut TaskStore) -> Result<()> {
    let Some(description) = read_input("Enter task description: ")? else {
        return Ok(());
    };

    if description.is_empty() {
        println!("❌ Task description cannot be empty!");
        return Ok(());
    }

    let id = store.add(description)?;
    println!("✅ Task added with ID: {}", id);
    Ok(())
}

fn list_tasks(store: &TaskStore) {
    match store.list() {
        Some(tasks) => {
            println!("\nYour tasks:");
            for task in tasks {
                print_task(task);
            }
        }
        None => println!("📭 No tasks yet!"),
    }
}

fn print_task(task: &Task) {
    let status = if task.completed { "✅" } else { "⬜" };
    print!(
        "{} [{}] {} (created {})",
        status,
        task.id,
        task.task,
        task.created_at.format("%Y-%m-%d %H:%M")
    );
    match task.completed_at {
        Some(at) => println!(", completed {}", at.format("%Y-%m-%d %H:%M")),
        None => println!(),
    }
}

fn complete_task(store: &mut TaskStore) -> Result<()> {
    let Some(id) = read_task_id("Enter task ID to complete: ")? else {
        return Ok(());
    };

    if store.complete(id)? {
        println!("✅ Task {} marked as completed!", id);
    } else {
        println!("❌ Task {} not found!", id);
    }
    Ok(())
}

fn delete_task(store: &mut TaskStore) -> Result<()> {
    let Some(id) = read_task_id("Enter task ID to delete: ")? else {
        return Ok(());
    };

    if store.delete(id)? {
        println!("✅ Task {} deleted!", id);
    } else {
        println!("❌ Task {} not found!", id);
    }
    Ok(())
}

/// 读取任务 ID；输入不是正整数时报错并返回 None
fn read_task_id(prompt: &str) -> Result<Option<u64>> {
    let Some(input) = read_input(prompt)? else {
        return Ok(None);
    };

    match input.parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("❌ Invalid input! Please enter a valid task ID.");
            Ok(None)
        }
    }
}
