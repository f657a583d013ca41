//! 待办任务数据存储
//!
//! 任务集合整体保存在一个 JSON 文件中，每次变更后全量重写。
//! 构造时加载一次，内存中的集合与最近一次成功写入的文件内容保持一致。

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ensure_deskpad_dir, load_json, save_json};
use crate::error::Result;

/// 待办任务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（正整数，store 内唯一，删除后不复用）
    pub id: u64,
    /// 任务描述（用户输入的自由文本）
    pub task: String,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 完成时间（仅在完成后存在）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// todos.json 文件结构
#[derive(Debug, Default, Serialize, Deserialize)]
struct TasksFile {
    /// 单调递增的 ID 计数器（旧文件没有该字段，加载时从 max(id) 推导）
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// 任务存储
///
/// 单线程、同步访问；不加锁、不做原子重命名。
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    next_id: u64,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// 获取默认数据文件路径: ~/.deskpad/todos.json
    pub fn default_path() -> Result<PathBuf> {
        Ok(ensure_deskpad_dir()?.join("todos.json"))
    }

    /// 打开任务存储，加载指定文件
    ///
    /// 文件不存在、读取失败或解析失败时一律回退为空集合，不报错。
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file: TasksFile = load_json(&path).unwrap_or_default();

        // 旧文件没有 next_id 字段，从现有最大 ID 推导
        let next_id = if file.next_id == 0 {
            file.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
        } else {
            file.next_id
        };

        Self {
            path,
            next_id,
            tasks: file.tasks,
        }
    }

    /// 添加任务，返回分配的 ID
    pub fn add(&mut self, description: impl Into<String>) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            task: description.into(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        });
        self.persist()?;
        Ok(id)
    }

    /// 列出全部任务；集合为空时返回 None（调用方据此区分“没有任务”）
    pub fn list(&self) -> Option<&[Task]> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(&self.tasks)
        }
    }

    /// 标记任务完成
    ///
    /// 找到则置 completed 并记录完成时间，持久化后返回 true；
    /// 未找到返回 false，不做任何修改、不写文件。
    pub fn complete(&mut self, id: u64) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = true;
                task.completed_at = Some(Utc::now());
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 删除任务
    ///
    /// 集合长度减少才持久化并返回 true；未找到返回 false，不写文件。
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 清除所有已完成任务，返回清除数量
    ///
    /// 即使数量为 0 也会重写文件。
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        self.persist()?;
        Ok(removed)
    }

    /// 全量写回文件
    fn persist(&self) -> Result<()> {
        let file = TasksFile {
            next_id: self.next_id,
            tasks: self.tasks.to_vec(),
        };
        save_json(&self.path, &file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("todos.json"))
    }

    #[test]
    fn test_add_task() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        let id = store.add("Test task 1").unwrap();
        assert_eq!(id, 1);

        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Test task 1");
        assert!(!tasks[0].completed);
        assert!(tasks[0].completed_at.is_none());
    }

    #[test]
    fn test_add_returns_size_plus_one() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        assert_eq!(store.add("Task 1").unwrap(), 1);
        assert_eq!(store.add("Task 2").unwrap(), 2);
        assert_eq!(store.add("Task 3").unwrap(), 3);
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn test_list_empty_is_none() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        assert!(store.list().is_none());
    }

    #[test]
    fn test_complete_task() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        let id = store.add("Complete me").unwrap();
        assert!(store.complete(id).unwrap());

        let tasks = store.list().unwrap();
        assert!(tasks[0].completed);
        assert!(tasks[0].completed_at.is_some());
    }

    #[test]
    fn test_complete_invalid_task() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        store.add("Task 1").unwrap();
        assert!(!store.complete(999).unwrap());
        assert!(!store.list().unwrap()[0].completed);
    }

    #[test]
    fn test_delete_task() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        let id = store.add("Delete me").unwrap();
        assert!(store.delete(id).unwrap());
        assert!(store.list().is_none());
    }

    #[test]
    fn test_delete_invalid_task() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        store.add("Task 1").unwrap();
        assert!(!store.delete(999).unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_completed() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        let id1 = store.add("Task 1").unwrap();
        let id2 = store.add("Task 2").unwrap();
        store.add("Task 3").unwrap();

        store.complete(id1).unwrap();
        store.complete(id2).unwrap();

        assert_eq!(store.clear_completed().unwrap(), 2);
        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Task 3");
    }

    #[test]
    fn test_clear_completed_none_completed() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        store.add("Task 1").unwrap();
        assert_eq!(store.clear_completed().unwrap(), 0);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_completed_rewrites_file_even_when_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");

        let mut store = TaskStore::open(&path);
        store.add("Task 1").unwrap();

        // 外部篡改文件；clear_completed 即使清除数量为 0 也必须重写
        std::fs::write(&path, "stale garbage").unwrap();
        assert_eq!(store.clear_completed().unwrap(), 0);

        let reloaded = TaskStore::open(&path);
        let tasks = reloaded.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Task 1");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");

        let mut store = TaskStore::open(&path);
        store.add("Persistent task").unwrap();

        let reloaded = TaskStore::open(&path);
        let tasks = reloaded.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Persistent task");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let dir = tempdir().unwrap();
        let mut store = test_store(&dir);

        store.add("Task 1").unwrap();
        let id2 = store.add("Task 2").unwrap();
        store.add("Task 3").unwrap();

        store.delete(id2).unwrap();
        let id4 = store.add("Task 4").unwrap();
        assert_eq!(id4, 4);

        // 幸存任务的 ID 互不冲突
        let ids: Vec<u64> = store.list().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_counter_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");

        let mut store = TaskStore::open(&path);
        let id = store.add("Task 1").unwrap();
        store.delete(id).unwrap();

        // 重新加载后计数器不回退
        let mut reloaded = TaskStore::open(&path);
        assert_eq!(reloaded.add("Task 2").unwrap(), 2);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let store = TaskStore::open(&path);
        assert!(store.list().is_none());
    }

    #[test]
    fn test_legacy_file_without_counter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        std::fs::write(
            &path,
            r#"{"tasks": [
                {"id": 1, "task": "Old task", "completed": false, "created_at": "2024-01-01T00:00:00Z"},
                {"id": 3, "task": "Other task", "completed": true, "created_at": "2024-01-02T00:00:00Z", "completed_at": "2024-01-03T00:00:00Z"}
            ]}"#,
        )
        .unwrap();

        let mut store = TaskStore::open(&path);
        assert_eq!(store.list().unwrap().len(), 2);
        // next_id 从 max(id) + 1 推导
        assert_eq!(store.add("New task").unwrap(), 4);
    }
}
