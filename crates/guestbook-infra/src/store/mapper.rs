//! Mapping between the post aggregate and its denormalized rows.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use guestbook_core::domain::{Post, Reply};

use super::row::{PostRow, RawRow, ReplyRow, RowParseError, StoredRow, parse_row};

/// Serialize the full aggregate: one post row plus one row per reply.
///
/// `save` writes all of these every time; the repository operates at
/// aggregate granularity, not per-row deltas.
pub fn rows_from_post(post: &Post) -> Vec<RawRow> {
    let mut rows = Vec::with_capacity(post.replies.len() + 1);
    rows.push(StoredRow::Post(PostRow::from_post(post)).to_raw());
    rows.extend(
        post.replies
            .iter()
            .map(|reply| StoredRow::Reply(ReplyRow::from_reply(post.id, reply)).to_raw()),
    );
    rows
}

/// Parse a batch row by row. Bad rows are dropped and reported back, never
/// aborting the batch.
pub fn parse_rows(raws: Vec<RawRow>) -> (Vec<StoredRow>, Vec<RowParseError>) {
    let mut rows = Vec::with_capacity(raws.len());
    let mut dropped = Vec::new();

    for raw in raws {
        match parse_row(raw) {
            Ok(row) => rows.push(row),
            Err(err) => dropped.push(err),
        }
    }

    (rows, dropped)
}

/// Rebuild a single aggregate from the rows of its partition.
///
/// Returns `None` when the batch holds no post row for `post_id`. Reply rows
/// keep whatever order the storage layer returned them in. Should the batch
/// hold more than one post row, the first encountered wins.
pub fn post_from_rows(post_id: Uuid, rows: Vec<StoredRow>) -> Option<Post> {
    let mut post_row: Option<PostRow> = None;
    let mut replies = Vec::new();

    for row in rows {
        match row {
            StoredRow::Post(row) if row.h_key == post_id => {
                post_row.get_or_insert(row);
            }
            StoredRow::Reply(row) if row.h_key == post_id => replies.push(row.into_reply()),
            _ => {}
        }
    }

    post_row.map(|row| row.into_post(replies))
}

/// Rebuild every aggregate from a full table scan.
///
/// Reply rows whose partition holds no post row are ignored. Duplicate post
/// rows per partition should not happen; when they do, the first encountered
/// wins and the rest are dropped.
pub fn posts_from_rows(rows: Vec<StoredRow>) -> Vec<Post> {
    let mut post_rows: Vec<PostRow> = Vec::new();
    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut replies_by_post: HashMap<Uuid, Vec<Reply>> = HashMap::new();

    for row in rows {
        match row {
            StoredRow::Post(row) => {
                if seen.insert(row.h_key) {
                    post_rows.push(row);
                }
            }
            StoredRow::Reply(row) => replies_by_post
                .entry(row.h_key)
                .or_default()
                .push(row.into_reply()),
        }
    }

    post_rows
        .into_iter()
        .map(|row| {
            let replies = replies_by_post.remove(&row.h_key).unwrap_or_default();
            row.into_post(replies)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::row::{TYPE_POST, TYPE_REPLY};

    fn post_with_replies(replies: &[(&str, &str)]) -> Post {
        let mut post = Post::new("Taro".to_string(), "Hi, everyone".to_string(), None);
        for (name, message) in replies {
            post.add_reply(name.to_string(), message.to_string());
        }
        post
    }

    #[test]
    fn rows_from_post_emits_one_post_row_plus_one_per_reply() {
        let post = post_with_replies(&[("Hanako", "I am with you"), ("Jiro", "You are right!")]);
        let rows = rows_from_post(&post);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].type_, TYPE_POST);
        assert_eq!(rows[0].h_key, post.id);
        assert_eq!(rows[0].s_key, post.id);

        for (row, reply) in rows[1..].iter().zip(&post.replies) {
            assert_eq!(row.type_, TYPE_REPLY);
            assert_eq!(row.h_key, post.id);
            assert_eq!(row.s_key, reply.id);
        }
    }

    #[test]
    fn round_trip_reconstructs_the_identical_aggregate() {
        for reply_count in 0..4 {
            let replies: Vec<(&str, &str)> =
                (0..reply_count).map(|_| ("Hanako", "Yeah!")).collect();
            let post = post_with_replies(&replies);

            let (rows, dropped) = parse_rows(rows_from_post(&post));
            assert!(dropped.is_empty());

            assert_eq!(posts_from_rows(rows.clone()), vec![post.clone()]);
            assert_eq!(post_from_rows(post.id, rows), Some(post));
        }
    }

    #[test]
    fn parse_rows_drops_bad_rows_and_keeps_the_rest() {
        let post = post_with_replies(&[("Hanako", "Yeah!"), ("Jiro", "You are right!")]);
        let mut raws = rows_from_post(&post);
        raws.push(RawRow {
            h_key: post.id,
            s_key: Uuid::new_v4(),
            type_: "some_invalid_type".to_string(),
            name: "Saburo".to_string(),
            message: "I see".to_string(),
            image_url: None,
            posted_at: 1_700_000_000_000,
        });

        let (rows, dropped) = parse_rows(raws);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            dropped,
            vec![RowParseError::UnknownType("some_invalid_type".to_string())]
        );

        // The dropped row lands in neither kind.
        let post = post_from_rows(post.id, rows).unwrap();
        assert_eq!(post.replies.len(), 2);
        assert!(post.replies.iter().all(|r| r.name != "Saburo"));
    }

    #[test]
    fn duplicate_post_rows_in_a_partition_first_wins() {
        let post = post_with_replies(&[]);
        let mut duplicate = PostRow::from_post(&post);
        duplicate.name = "Impostor".to_string();

        let rows = vec![
            StoredRow::Post(PostRow::from_post(&post)),
            StoredRow::Post(duplicate),
        ];

        let posts = posts_from_rows(rows.clone());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].name, "Taro");

        assert_eq!(post_from_rows(post.id, rows).unwrap().name, "Taro");
    }

    #[test]
    fn replies_attach_to_their_own_post_only() {
        let first = post_with_replies(&[("Hanako", "I am with you")]);
        let second = post_with_replies(&[]);

        let mut raws = rows_from_post(&first);
        raws.extend(rows_from_post(&second));

        let (rows, _) = parse_rows(raws);
        let posts = posts_from_rows(rows);

        assert_eq!(posts.len(), 2);
        let with_reply = posts.iter().find(|p| p.id == first.id).unwrap();
        let without = posts.iter().find(|p| p.id == second.id).unwrap();
        assert_eq!(with_reply.replies.len(), 1);
        assert!(without.replies.is_empty());
    }

    #[test]
    fn orphaned_reply_rows_are_ignored() {
        let reply = Reply::new("Hanako".to_string(), "Hello?".to_string());
        let rows = vec![StoredRow::Reply(ReplyRow::from_reply(
            Uuid::new_v4(),
            &reply,
        ))];

        assert!(posts_from_rows(rows).is_empty());
    }
}
