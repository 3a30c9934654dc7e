#[cfg(test)]
mod tests {
    use crate::database::entity::job_posting;
    use crate::database::postgres_repo::{PostgresAccountRepository, PostgresJobRepository};
    use alumnet_core::domain::JobPosting;
    use alumnet_core::ports::{AccountRepository, BaseRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn find_job_by_id_deserializes_comments() {
        let job_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();
        let comments = serde_json::json!([{
            "id": uuid::Uuid::new_v4(),
            "text": "Great opportunity",
            "author_name": "Jane",
            "author_email": "jane@example.com",
            "author_avatar": null,
            "posted_at": now,
        }]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![job_posting::Model {
                id: job_id,
                title: "Engineer".to_owned(),
                company: "Acme".to_owned(),
                location: "Remote".to_owned(),
                job_type: "Full-time".to_owned(),
                description: "Build things".to_owned(),
                apply_link: None,
                attachment: None,
                posted_by: "Jane".to_owned(),
                verified: false,
                comments,
                date_posted: now.into(),
            }]])
            .into_connection();

        let repo = PostgresJobRepository::new(db);

        let result: Option<JobPosting> = repo.find_by_id(job_id).await.unwrap();

        let job = result.unwrap();
        assert_eq!(job.id, job_id);
        assert_eq!(job.title, "Engineer");
        assert!(!job.verified);
        assert_eq!(job.comments.len(), 1);
        assert_eq!(job.comments[0].text, "Great opportunity");
    }

    #[tokio::test]
    async fn find_account_by_email_maps_role() {
        let account_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![crate::database::entity::account::Model {
                id: account_id,
                name: "Admin".to_owned(),
                email: "admin@example.com".to_owned(),
                password_hash: "hash".to_owned(),
                role: "admin".to_owned(),
                roll_no: String::new(),
                series: String::new(),
                section: String::new(),
                department: String::new(),
                passing_year: 0,
                contact_no: None,
                address: None,
                current_job: None,
                current_company: None,
                skills: None,
                bio: None,
                github: None,
                linkedin: None,
                profile_photo: None,
                cover_photo: None,
                verified: true,
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresAccountRepository::new(db);

        let account = repo
            .find_by_email("admin@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account.id, account_id);
        assert_eq!(account.role, alumnet_core::domain::Role::Admin);
        assert!(account.verified);
    }
}
