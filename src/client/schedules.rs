//! Schedule and task operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{Schedule, ScheduleDescriptor, TaskDescriptor, TaskInfo};
use reqwest::Method;
use serde::Deserialize;

/// Client for a server's schedules.
///
/// Access via `client.schedules()`.
pub struct SchedulesClient {
    session: Session,
}

impl SchedulesClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List a server's schedules.
    pub async fn list(&self, identifier: &str) -> Result<Vec<Schedule>> {
        let list: ObjectList<Schedule> = self
            .session
            .get_json(&format!("/servers/{identifier}/schedules"))
            .await?;

        Ok(list.attributes())
    }

    /// Get a schedule by id.
    pub async fn get(&self, identifier: &str, schedule: i64) -> Result<Schedule> {
        let obj: Object<Schedule> = self
            .session
            .get_json(&format!("/servers/{identifier}/schedules/{schedule}"))
            .await?;

        Ok(obj.attributes)
    }

    /// Create a schedule.
    pub async fn create(&self, identifier: &str, fields: ScheduleDescriptor) -> Result<Schedule> {
        let obj: Object<Schedule> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/schedules"),
                Some(&fields),
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Update a schedule.
    pub async fn update(
        &self,
        identifier: &str,
        schedule: i64,
        fields: ScheduleDescriptor,
    ) -> Result<Schedule> {
        let obj: Object<Schedule> = self
            .session
            .send_json(
                Method::PATCH,
                &format!("/servers/{identifier}/schedules/{schedule}"),
                Some(&fields),
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Trigger a schedule immediately.
    pub async fn execute(&self, identifier: &str, schedule: i64) -> Result<()> {
        self.session
            .send_empty(
                Method::GET,
                &format!("/servers/{identifier}/schedules/{schedule}/execute"),
                None::<&()>,
            )
            .await
    }

    /// Delete a schedule and its tasks.
    pub async fn delete(&self, identifier: &str, schedule: i64) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/servers/{identifier}/schedules/{schedule}"),
                None::<&()>,
            )
            .await
    }

    /// List a schedule's tasks.
    pub async fn tasks(&self, identifier: &str, schedule: i64) -> Result<Vec<TaskInfo>> {
        #[derive(Deserialize)]
        struct Tasks {
            tasks: Vec<TaskInfo>,
        }

        let model: Tasks = self
            .session
            .get_json(&format!("/servers/{identifier}/schedules/{schedule}/tasks"))
            .await?;

        Ok(model.tasks)
    }

    /// Append a task to a schedule.
    pub async fn create_task(
        &self,
        identifier: &str,
        schedule: i64,
        task: TaskDescriptor,
    ) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/schedules/{schedule}/tasks"),
                Some(&task),
            )
            .await
    }

    /// Update a task.
    pub async fn update_task(
        &self,
        identifier: &str,
        schedule: i64,
        task_id: i64,
        task: TaskDescriptor,
    ) -> Result<()> {
        self.session
            .send_empty(
                Method::PATCH,
                &format!("/servers/{identifier}/schedules/{schedule}/tasks/{task_id}"),
                Some(&task),
            )
            .await
    }

    /// Remove a task from a schedule.
    pub async fn delete_task(&self, identifier: &str, schedule: i64, task_id: i64) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/servers/{identifier}/schedules/{schedule}/tasks/{task_id}"),
                None::<&()>,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn test_schedules_client_creation() {
        let client = Client::new("https://panel.example", "key").unwrap();
        let _schedules = client.schedules();
    }
}
