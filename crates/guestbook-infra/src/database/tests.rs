#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use guestbook_core::ports::PostRepository;

    use crate::database::entity::row;
    use crate::repository::PostgresPostRepository;
    use crate::store::{PostgresRowStore, TYPE_POST, TYPE_REPLY};

    fn post_model(h_key: Uuid, name: &str, message: &str, posted_at: i64) -> row::Model {
        row::Model {
            h_key,
            s_key: h_key,
            row_type: TYPE_POST.to_string(),
            name: name.to_string(),
            message: message.to_string(),
            image_url: None,
            posted_at,
        }
    }

    fn reply_model(h_key: Uuid, name: &str, message: &str, posted_at: i64) -> row::Model {
        row::Model {
            h_key,
            s_key: Uuid::new_v4(),
            row_type: TYPE_REPLY.to_string(),
            name: name.to_string(),
            message: message.to_string(),
            image_url: None,
            posted_at,
        }
    }

    #[tokio::test]
    async fn find_by_id_reassembles_the_aggregate() {
        let post_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(post_id, "Taro", "It is beautiful morning", 1_700_000_000_000),
                reply_model(post_id, "Hanako", "Yeah!", 1_700_000_060_000),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(PostgresRowStore::new(db));

        let post = repo.find_by_id(post_id).await.unwrap().unwrap();

        assert_eq!(post.id, post_id);
        assert_eq!(post.name, "Taro");
        assert_eq!(post.message, "It is beautiful morning");
        assert_eq!(post.replies.len(), 1);
        assert_eq!(post.replies[0].name, "Hanako");
        assert_eq!(post.replies[0].message, "Yeah!");
    }

    #[tokio::test]
    async fn unparseable_rows_are_dropped_not_fatal() {
        let post_id = Uuid::new_v4();
        let mut bad = reply_model(post_id, "Saburo", "I see", 1_700_000_120_000);
        bad.row_type = "some_invalid_type".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(post_id, "Taro", "Hi, everyone", 1_700_000_000_000),
                bad,
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(PostgresRowStore::new(db));
        let post = repo.find_by_id(post_id).await.unwrap().unwrap();

        assert!(post.replies.is_empty());
    }

    #[tokio::test]
    async fn fetch_all_groups_rows_by_partition() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(first, "Taro", "Hi, everyone", 1_700_000_000_000),
                reply_model(first, "Hanako", "I am with you", 1_700_000_060_000),
                post_model(second, "Jiro", "It is beautiful day today!", 1_700_000_120_000),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(PostgresRowStore::new(db));
        let posts = repo.fetch_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        let taro = posts.iter().find(|p| p.name == "Taro").unwrap();
        let jiro = posts.iter().find(|p| p.name == "Jiro").unwrap();
        assert_eq!(taro.replies.len(), 1);
        assert!(jiro.replies.is_empty());
    }
}
