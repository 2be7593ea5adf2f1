#[cfg(test)]
mod tests {
    use crate::database::entity::{blog_post, blog_post_cover};
    use crate::database::postgres_repo::PostgresBlogPostRepository;
    use quill_core::domain::{BlogPost, BlogPostCover};
    use quill_core::error::RepoError;
    use quill_core::ports::BlogPostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    const COVER_UPSERT: &str = r#"ON CONFLICT (\"blog_post_id\") DO UPDATE SET \"image\""#;

    fn model(id: uuid::Uuid, title: &str) -> blog_post::Model {
        blog_post::Model {
            id,
            title: title.to_owned(),
            text: "Body".to_owned(),
            created_at: chrono::Utc::now().into(),
            category: "news".to_owned(),
            website: Some("https://example.com".to_owned()),
            document: None,
            deleted: false,
        }
    }

    #[tokio::test]
    async fn test_find_active_post() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Test Post")]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_active(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.website.as_deref(), Some("https://example.com"));
        assert!(post.is_active());
    }

    #[tokio::test]
    async fn test_list_active_posts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(uuid::Uuid::new_v4(), "First"),
                model(uuid::Uuid::new_v4(), "Second"),
            ]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let posts = repo.list_active().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
    }

    #[tokio::test]
    async fn test_create_post_without_cover() {
        let post = BlogPost::new(
            "Fresh".to_owned(),
            "Body".to_owned(),
            "news".to_owned(),
            None,
            None,
        );
        let stored = blog_post::Model {
            website: None,
            ..model(post.id, "Fresh")
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let created = repo.create(post.clone(), None).await.unwrap();

        assert_eq!(created.id, post.id);
        assert_eq!(created.title, "Fresh");
    }

    #[tokio::test]
    async fn test_soft_delete_marks_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        assert!(repo.soft_delete(uuid::Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_soft_delete_without_active_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let result = repo.soft_delete(uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_of_missing_post_is_not_found() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_post::Model>::new()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let post: BlogPost = model(post_id, "Gone").into();
        let result = repo.update(post, None).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    fn cover_model(post_id: uuid::Uuid, image: &str) -> blog_post_cover::Model {
        blog_post_cover::Model {
            id: uuid::Uuid::new_v4(),
            blog_post_id: post_id,
            image: image.to_owned(),
        }
    }

    fn one_row() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    /// Every statement sits between BEGIN and COMMIT of one transaction.
    fn assert_committed_upsert(log: &str) {
        let begin = log.find("BEGIN").expect("transaction opened");
        let upsert = log.find(COVER_UPSERT).expect("cover upserted");
        let commit = log.find("COMMIT").expect("transaction committed");
        assert!(begin < upsert && upsert < commit, "{log}");
    }

    #[tokio::test]
    async fn test_create_with_cover_upserts_inside_transaction() {
        let post = BlogPost::new(
            "Fresh".to_owned(),
            "Body".to_owned(),
            "news".to_owned(),
            None,
            None,
        );
        let cover = BlogPostCover::new(post.id, "covers/a.png".to_owned());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post.id, "Fresh")]])
            .append_query_results(vec![vec![cover_model(post.id, "covers/a.png")]])
            .append_exec_results(vec![one_row()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let created = repo.create(post.clone(), Some(cover)).await.unwrap();
        assert_eq!(created.id, post.id);

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert_committed_upsert(&format!("{log:?}"));
    }

    #[tokio::test]
    async fn test_update_with_cover_upserts_inside_transaction() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Edited")]])
            .append_query_results(vec![vec![cover_model(post_id, "covers/b.png")]])
            .append_exec_results(vec![one_row()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let post: BlogPost = model(post_id, "Edited").into();
        let updated = repo
            .update(post, Some("covers/b.png".to_owned()))
            .await
            .unwrap();
        assert_eq!(updated.title, "Edited");

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let log = format!("{log:?}");
        assert_committed_upsert(&log);
        assert!(log.contains("UPDATE"), "{log}");
    }

    #[tokio::test]
    async fn test_failed_post_update_skips_cover() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_post::Model>::new()])
            .into_connection();

        let repo = PostgresBlogPostRepository::new(db);

        let post: BlogPost = model(post_id, "Gone").into();
        let result = repo.update(post, Some("covers/b.png".to_owned())).await;
        assert!(matches!(result, Err(RepoError::NotFound)));

        let log = format!("{:?}", repo.db.into_transaction_log());
        assert!(!log.contains("blog_post_covers"), "{log}");
        assert!(!log.contains("COMMIT"), "{log}");
    }
}
